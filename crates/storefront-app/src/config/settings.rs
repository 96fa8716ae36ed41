//! Settings parser for .storefront/config.toml

use std::path::{Path, PathBuf};

use storefront_catalog::{Catalog, FixtureCatalog, HttpCatalog};
use storefront_core::prelude::*;

use super::types::{CatalogSettings, Settings};

const CONFIG_FILENAME: &str = "config.toml";
const STOREFRONT_DIR: &str = ".storefront";

// ─────────────────────────────────────────────────────────────────────────────
// Config Directory
// ─────────────────────────────────────────────────────────────────────────────

/// Directory holding `.storefront/`
///
/// An explicit directory wins, then the working directory, then the home
/// directory.
pub fn resolve_config_dir(explicit: Option<PathBuf>) -> PathBuf {
    explicit
        .or_else(|| std::env::current_dir().ok())
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Path of the settings file under `project_path`
pub fn config_path(project_path: &Path) -> PathBuf {
    project_path.join(STOREFRONT_DIR).join(CONFIG_FILENAME)
}

// ─────────────────────────────────────────────────────────────────────────────
// Settings Loading
// ─────────────────────────────────────────────────────────────────────────────

/// Load settings from .storefront/config.toml
///
/// Returns default settings if the file doesn't exist or can't be parsed.
pub fn load_settings(project_path: &Path) -> Settings {
    let config_path = config_path(project_path);

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(&config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Create a commented default config in .storefront/ if none exists
pub fn init_config_dir(project_path: &Path) -> Result<()> {
    let storefront_dir = project_path.join(STOREFRONT_DIR);

    if !storefront_dir.exists() {
        std::fs::create_dir_all(&storefront_dir)
            .map_err(|e| Error::config(format!("Failed to create .storefront dir: {}", e)))?;
        info!("Created .storefront directory");
    }

    let config_path = storefront_dir.join(CONFIG_FILENAME);
    if !config_path.exists() {
        std::fs::write(&config_path, generate_default_config())
            .map_err(|e| Error::config(format!("Failed to write config.toml: {}", e)))?;
        info!("Created default config.toml");
    }

    Ok(())
}

/// Save settings to .storefront/config.toml
///
/// Uses atomic write (temp file + rename).
pub fn save_settings(project_path: &Path, settings: &Settings) -> Result<()> {
    let storefront_dir = project_path.join(STOREFRONT_DIR);

    if !storefront_dir.exists() {
        std::fs::create_dir_all(&storefront_dir)
            .map_err(|e| Error::config(format!("Failed to create .storefront dir: {}", e)))?;
    }

    let config_path = storefront_dir.join(CONFIG_FILENAME);
    let temp_path = storefront_dir.join(".config.toml.tmp");

    let content = toml::to_string_pretty(settings)
        .map_err(|e| Error::config(format!("Failed to serialize settings: {}", e)))?;
    let full_content = format!("{}{}", generate_config_header(), content);

    std::fs::write(&temp_path, &full_content)
        .map_err(|e| Error::config(format!("Failed to write temp file: {}", e)))?;

    std::fs::rename(&temp_path, &config_path)
        .map_err(|e| Error::config(format!("Failed to rename temp file: {}", e)))?;

    info!("Saved settings to {:?}", config_path);
    Ok(())
}

fn generate_config_header() -> String {
    "# Storefront Configuration\n# Generated by storefront\n\n".to_string()
}

fn generate_default_config() -> String {
    r#"# Storefront Configuration

[carousel]
auto_advance_ms = 5000      # Time between automatic slides
grace_ms = 5000             # Pause after manual navigation (0 = none)
drag_threshold = 6          # Columns of pointer travel that count as a swipe
reviews_per_page_wide = 3   # Reviews side by side on wide terminals
wide_breakpoint = 100       # Terminal width for the wide layout

[catalog]
# REST API base URL (GET {base_url}/banners, /discounts, /reviews, /logos)
# base_url = "https://shop.example.com/api/"
timeout_ms = 10000
# Offline JSON document, relative to this directory's parent
# fixture = "demos/catalog.json"

[ui]
tick_ms = 50
toast_ms = 4000
show_countdown = true

[store]
name = "Storefront"
# tagline = "Fresh from the farm"
"#
    .to_string()
}

// ─────────────────────────────────────────────────────────────────────────────
// Catalog Selection
// ─────────────────────────────────────────────────────────────────────────────

/// Build the catalog backend described by `settings`
///
/// A fixture takes precedence over a base URL. Relative fixture paths are
/// resolved against `project_path`.
pub fn open_catalog(project_path: &Path, settings: &CatalogSettings) -> Result<Catalog> {
    if let Some(fixture) = &settings.fixture {
        let path = if fixture.is_absolute() {
            fixture.clone()
        } else {
            project_path.join(fixture)
        };
        return Ok(Catalog::Fixture(FixtureCatalog::open(path)?));
    }

    if let Some(base_url) = &settings.base_url {
        return Ok(Catalog::Http(HttpCatalog::new(
            base_url,
            settings.timeout(),
        )?));
    }

    Err(Error::config_invalid(
        "no catalog configured: set catalog.base_url or catalog.fixture (or pass --api-url / --fixture)",
    ))
}
