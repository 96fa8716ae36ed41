//! Storefront page sections and their fetch lifecycle

use std::fmt;

use storefront_core::{Banner, Offer, Review};

/// One of the carousels on the storefront page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Banners,
    Offers,
    Reviews,
}

impl Section {
    /// Page order, top to bottom
    pub const ALL: [Section; 3] = [Section::Banners, Section::Offers, Section::Reviews];

    pub fn label(&self) -> &'static str {
        match self {
            Section::Banners => "Banners",
            Section::Offers => "Discounts",
            Section::Reviews => "Reviews",
        }
    }

    /// Next section in focus order, wrapping
    pub fn next(self) -> Self {
        match self {
            Section::Banners => Section::Offers,
            Section::Offers => Section::Reviews,
            Section::Reviews => Section::Banners,
        }
    }

    /// Previous section in focus order, wrapping
    pub fn prev(self) -> Self {
        match self {
            Section::Banners => Section::Reviews,
            Section::Offers => Section::Banners,
            Section::Reviews => Section::Offers,
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Fetch lifecycle of a section
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadState {
    #[default]
    Loading,
    Ready,
    Failed(String),
}

impl LoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// A fetched list for one section
#[derive(Debug, Clone, PartialEq)]
pub enum SectionItems {
    Banners(Vec<Banner>),
    Offers(Vec<Offer>),
    Reviews(Vec<Review>),
}

impl SectionItems {
    pub fn section(&self) -> Section {
        match self {
            SectionItems::Banners(_) => Section::Banners,
            SectionItems::Offers(_) => Section::Offers,
            SectionItems::Reviews(_) => Section::Reviews,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            SectionItems::Banners(items) => items.len(),
            SectionItems::Offers(items) => items.len(),
            SectionItems::Reviews(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The item a user committed to, handed to the detail route
#[derive(Debug, Clone, PartialEq)]
pub enum SelectedItem {
    Banner(Banner),
    Offer(Offer),
    Review(Review),
}

impl SelectedItem {
    pub fn section(&self) -> Section {
        match self {
            SelectedItem::Banner(_) => Section::Banners,
            SelectedItem::Offer(_) => Section::Offers,
            SelectedItem::Review(_) => Section::Reviews,
        }
    }

    pub fn title(&self) -> String {
        match self {
            SelectedItem::Banner(b) => b.title.clone(),
            SelectedItem::Offer(o) => o.title.clone(),
            SelectedItem::Review(r) => format!("Review by {}", r.customer_name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_order_wraps() {
        assert_eq!(Section::Reviews.next(), Section::Banners);
        assert_eq!(Section::Banners.prev(), Section::Reviews);
        for section in Section::ALL {
            assert_eq!(section.next().prev(), section);
        }
    }

    #[test]
    fn test_load_state_error() {
        assert!(LoadState::default().is_loading());
        assert_eq!(LoadState::Failed("boom".into()).error(), Some("boom"));
        assert_eq!(LoadState::Ready.error(), None);
    }

    #[test]
    fn test_section_items_section() {
        assert_eq!(SectionItems::Offers(vec![]).section(), Section::Offers);
        assert!(SectionItems::Reviews(vec![]).is_empty());
    }
}
