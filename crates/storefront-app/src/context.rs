//! Store-wide context shared with the view
//!
//! Holds branding and the active store logo. Created at app start from
//! settings, updated when logos are fetched and torn down at shutdown.

use chrono::{DateTime, Utc};
use storefront_core::prelude::*;
use storefront_core::{eligible_items, Logo};

use crate::config::StoreSettings;

#[derive(Debug, Clone)]
pub struct StoreContext {
    name: String,
    tagline: Option<String>,
    active_logo: Option<Logo>,
    live: bool,
}

impl StoreContext {
    pub fn new(settings: &StoreSettings) -> Self {
        Self {
            name: settings.name.clone(),
            tagline: settings.tagline.clone(),
            active_logo: None,
            live: true,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tagline(&self) -> Option<&str> {
        self.tagline.as_deref()
    }

    pub fn active_logo(&self) -> Option<&Logo> {
        self.active_logo.as_ref()
    }

    /// Name shown in the header: the active logo, else the configured store name
    pub fn display_name(&self) -> &str {
        self.active_logo
            .as_ref()
            .map(|logo| logo.name.as_str())
            .unwrap_or(&self.name)
    }

    pub fn is_live(&self) -> bool {
        self.live
    }

    /// Pick the active logo from a fetched list (first active one wins)
    pub fn set_logos(&mut self, logos: Vec<Logo>, now: DateTime<Utc>) {
        if !self.live {
            debug!("Ignoring logos for a torn-down store context");
            return;
        }
        self.active_logo = eligible_items(logos, now).into_iter().next();
        match &self.active_logo {
            Some(logo) => debug!("Active logo: {} ({})", logo.name, logo.id),
            None => debug!("No active logo, using store name"),
        }
    }

    /// Release everything fetched during the session
    pub fn teardown(&mut self) {
        if !self.live {
            return;
        }
        self.active_logo = None;
        self.live = false;
        info!("Store context torn down");
    }
}
