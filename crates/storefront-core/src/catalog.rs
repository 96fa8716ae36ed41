//! Catalog records served by the storefront backend
//!
//! These mirror the JSON the REST API returns. Every optional field defaults
//! so a sparse admin entry still deserializes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::item::{DisplayItem, ItemId};

fn default_true() -> bool {
    true
}

/// Home page banner slide
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Banner {
    pub id: ItemId,
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    /// Where the banner leads when selected (category or product path)
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    /// Admin-assigned slot, lower first
    #[serde(default)]
    pub position: i64,
}

impl DisplayItem for Banner {
    fn id(&self) -> ItemId {
        self.id
    }

    fn is_eligible(&self, _now: DateTime<Utc>) -> bool {
        self.is_active
    }

    fn order_key(&self) -> i64 {
        self.position
    }
}

/// Discount promotion with a validity window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Offer {
    pub id: ItemId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub product_name: Option<String>,
    #[serde(default)]
    pub discount_percent: u8,
    #[serde(default)]
    pub code: Option<String>,
    /// Start of validity; `None` means already open
    #[serde(default)]
    pub starts_at: Option<DateTime<Utc>>,
    /// End of validity (exclusive); `None` means open-ended
    #[serde(default)]
    pub ends_at: Option<DateTime<Utc>>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

impl Offer {
    /// Whether `now` falls inside `[starts_at, ends_at)`
    pub fn is_running_at(&self, now: DateTime<Utc>) -> bool {
        let started = self.starts_at.is_none_or(|start| start <= now);
        let not_ended = self.ends_at.is_none_or(|end| now < end);
        started && not_ended
    }
}

impl DisplayItem for Offer {
    fn id(&self) -> ItemId {
        self.id
    }

    fn is_eligible(&self, now: DateTime<Utc>) -> bool {
        self.is_active && self.is_running_at(now)
    }
}

/// Customer review
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: ItemId,
    pub customer_name: String,
    /// Star rating, 1 to 5
    pub rating: u8,
    #[serde(default)]
    pub comment: String,
    #[serde(default)]
    pub product_name: Option<String>,
    #[serde(default = "default_true")]
    pub is_published: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Review {
    pub const MAX_RATING: u8 = 5;

    /// Filled/empty star bar, e.g. `★★★★☆`
    pub fn stars(&self) -> String {
        let filled = self.rating.min(Self::MAX_RATING) as usize;
        let empty = Self::MAX_RATING as usize - filled;
        format!("{}{}", "★".repeat(filled), "☆".repeat(empty))
    }
}

impl DisplayItem for Review {
    fn id(&self) -> ItemId {
        self.id
    }

    fn is_eligible(&self, _now: DateTime<Utc>) -> bool {
        self.is_published && (1..=Self::MAX_RATING).contains(&self.rating)
    }
}

/// Store logo managed from the admin dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Logo {
    pub id: ItemId,
    pub name: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub is_active: bool,
}

impl DisplayItem for Logo {
    fn id(&self) -> ItemId {
        self.id
    }

    fn is_eligible(&self, _now: DateTime<Utc>) -> bool {
        self.is_active
    }
}
