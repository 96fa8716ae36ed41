//! Configuration types for the storefront
//!
//! Defines `Settings` (`.storefront/config.toml`) and its sections.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::carousel::CarouselTiming;

/// Application settings (.storefront/config.toml)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub carousel: CarouselSettings,

    #[serde(default)]
    pub catalog: CatalogSettings,

    #[serde(default)]
    pub ui: UiSettings,

    #[serde(default)]
    pub store: StoreSettings,
}

/// Carousel timing and gesture settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CarouselSettings {
    /// Time between automatic advances
    #[serde(default = "default_auto_advance_ms")]
    pub auto_advance_ms: u64,

    /// Pause after manual navigation before auto-advance resumes (0 = none)
    #[serde(default = "default_grace_ms")]
    pub grace_ms: u64,

    /// Horizontal pointer travel, in terminal columns, that counts as a swipe
    #[serde(default = "default_drag_threshold")]
    pub drag_threshold: u32,

    /// Reviews shown side by side on wide terminals
    #[serde(default = "default_reviews_per_page_wide")]
    pub reviews_per_page_wide: usize,

    /// Terminal width (columns) from which the wide layout applies
    #[serde(default = "default_wide_breakpoint")]
    pub wide_breakpoint: u16,
}

impl Default for CarouselSettings {
    fn default() -> Self {
        Self {
            auto_advance_ms: default_auto_advance_ms(),
            grace_ms: default_grace_ms(),
            drag_threshold: default_drag_threshold(),
            reviews_per_page_wide: default_reviews_per_page_wide(),
            wide_breakpoint: default_wide_breakpoint(),
        }
    }
}

impl CarouselSettings {
    pub fn timing(&self) -> CarouselTiming {
        CarouselTiming::new(
            Duration::from_millis(self.auto_advance_ms.max(1)),
            Duration::from_millis(self.grace_ms),
        )
    }

    /// Reviews per window for a terminal `width` columns wide
    pub fn reviews_window_size(&self, width: u16) -> usize {
        if width >= self.wide_breakpoint {
            self.reviews_per_page_wide.max(1)
        } else {
            1
        }
    }
}

fn default_auto_advance_ms() -> u64 {
    5000
}

fn default_grace_ms() -> u64 {
    5000
}

fn default_drag_threshold() -> u32 {
    6
}

fn default_reviews_per_page_wide() -> usize {
    3
}

fn default_wide_breakpoint() -> u16 {
    100
}

/// Where catalog data comes from
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CatalogSettings {
    /// REST API base URL, e.g. `https://shop.example.com/api/`
    #[serde(default)]
    pub base_url: Option<String>,

    /// Per-request timeout
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// JSON fixture used instead of the API (relative to the config directory)
    #[serde(default)]
    pub fixture: Option<PathBuf>,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout_ms: default_timeout_ms(),
            fixture: None,
        }
    }
}

impl CatalogSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

fn default_timeout_ms() -> u64 {
    10_000
}

/// UI settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct UiSettings {
    /// Event loop tick; carousel deadlines and countdowns are checked this often
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,

    /// How long error toasts stay visible
    #[serde(default = "default_toast_ms")]
    pub toast_ms: u64,

    /// Show the remaining-time countdown on discount offers
    #[serde(default = "default_true")]
    pub show_countdown: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            tick_ms: default_tick_ms(),
            toast_ms: default_toast_ms(),
            show_countdown: true,
        }
    }
}

impl UiSettings {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_ms.max(1))
    }

    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_ms)
    }
}

fn default_tick_ms() -> u64 {
    50
}

fn default_toast_ms() -> u64 {
    4000
}

fn default_true() -> bool {
    true
}

/// Store branding
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct StoreSettings {
    #[serde(default = "default_store_name")]
    pub name: String,

    #[serde(default)]
    pub tagline: Option<String>,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            name: default_store_name(),
            tagline: None,
        }
    }
}

fn default_store_name() -> String {
    "Storefront".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_default() {
        let settings = Settings::default();
        assert_eq!(settings.carousel.auto_advance_ms, 5000);
        assert_eq!(settings.carousel.grace_ms, 5000);
        assert_eq!(settings.carousel.drag_threshold, 6);
        assert_eq!(settings.catalog.timeout_ms, 10_000);
        assert_eq!(settings.ui.tick_ms, 50);
        assert!(settings.ui.show_countdown);
        assert_eq!(settings.store.name, "Storefront");
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let settings: Settings = toml::from_str("[carousel]\ngrace_ms = 0\n").unwrap();
        assert_eq!(settings.carousel.grace_ms, 0);
        assert_eq!(settings.carousel.auto_advance_ms, 5000);
        assert_eq!(settings.ui.toast_ms, 4000);
    }

    #[test]
    fn test_timing_from_settings() {
        let carousel = CarouselSettings {
            auto_advance_ms: 3000,
            grace_ms: 0,
            ..Default::default()
        };
        let timing = carousel.timing();
        assert_eq!(timing.interval, Duration::from_millis(3000));
        assert!(timing.grace.is_zero());
    }

    #[test]
    fn test_zero_interval_is_clamped() {
        let carousel = CarouselSettings {
            auto_advance_ms: 0,
            ..Default::default()
        };
        assert_eq!(carousel.timing().interval, Duration::from_millis(1));
    }

    #[test]
    fn test_reviews_window_size_breakpoint() {
        let carousel = CarouselSettings::default();
        assert_eq!(carousel.reviews_window_size(80), 1);
        assert_eq!(carousel.reviews_window_size(99), 1);
        assert_eq!(carousel.reviews_window_size(100), 3);
        assert_eq!(carousel.reviews_window_size(200), 3);
    }
}
