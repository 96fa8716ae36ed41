//! Display item abstraction shared by every carousel
//!
//! A carousel never mutates the records it shows. It only asks each record
//! whether it is currently eligible for display and where it sorts.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier assigned by the catalog backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u64);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A record that can be rotated through a carousel
pub trait DisplayItem {
    /// Backend identifier
    fn id(&self) -> ItemId;

    /// Whether the record passes its activity/validity filter at `now`
    fn is_eligible(&self, now: DateTime<Utc>) -> bool;

    /// Sort key among eligible records; ties keep source order
    fn order_key(&self) -> i64 {
        0
    }
}

/// Keep eligible records and order them by [`DisplayItem::order_key`]
///
/// The sort is stable so records sharing a key stay in the order the backend
/// returned them.
pub fn eligible_items<T: DisplayItem>(items: Vec<T>, now: DateTime<Utc>) -> Vec<T> {
    let mut eligible: Vec<T> = items
        .into_iter()
        .filter(|item| item.is_eligible(now))
        .collect();
    eligible.sort_by_key(|item| item.order_key());
    eligible
}
