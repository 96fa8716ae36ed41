//! Custom widgets for the storefront TUI

mod banner;
mod detail;
mod dots;
mod header;
mod offer;
mod placeholder;
mod review;
mod status_bar;
mod text;

pub use banner::BannerSlide;
pub use detail::DetailView;
pub use dots::PaginationDots;
pub use header::StoreHeader;
pub use offer::{countdown_line, OfferCard};
pub use placeholder::Placeholder;
pub use review::ReviewCard;
pub use status_bar::StatusBar;
pub use text::truncate_with_ellipsis;
