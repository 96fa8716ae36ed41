//! # storefront-core - Core Domain Types
//!
//! Foundation crate for the storefront showcase. Provides catalog records,
//! the display-item eligibility contract, clock snapshots, countdown math,
//! error handling and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, chrono, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Catalog Records (`catalog`)
//! - [`Banner`] - Home page banner slide
//! - [`Offer`] - Discount promotion with a validity window
//! - [`Review`] - Customer review with star rating
//! - [`Logo`] - Store logo managed from the admin dashboard
//!
//! ### Display Items (`item`)
//! - [`DisplayItem`] - Eligibility and ordering contract used by carousels
//! - [`ItemId`] - Backend identifier
//! - [`eligible_items()`] - Filter and order a fetched list
//!
//! ### Time (`clock`, `countdown`)
//! - [`Moment`] - Paired monotonic/wall-clock reading
//! - [`compute_remaining()`], [`Countdown`] - Offer countdown display
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use storefront_core::prelude::*;
//! ```

pub mod catalog;
pub mod clock;
pub mod countdown;
pub mod error;
pub mod item;
pub mod logging;
pub mod prelude;

// Re-export commonly used types at crate root for convenience
pub use catalog::{Banner, Logo, Offer, Review};
pub use clock::Moment;
pub use countdown::{compute_remaining, Countdown};
pub use error::{Error, Result, ResultExt};
pub use item::{eligible_items, DisplayItem, ItemId};
