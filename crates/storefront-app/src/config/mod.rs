//! Configuration file parsing for the storefront
//!
//! Supports:
//! - `.storefront/config.toml` - carousel timing, catalog source, UI and branding

pub mod settings;
pub mod types;

pub use settings::{
    config_path, init_config_dir, load_settings, open_catalog, resolve_config_dir, save_settings,
};
pub use types::*;
