//! Storefront Library
//!
//! A terminal storefront showing rotating banner, discount and review
//! carousels backed by a REST catalog or a JSON fixture.

use std::path::{Path, PathBuf};

use storefront_app::config::{self, Settings};
use storefront_core::prelude::*;

// Re-export the workspace crates for integration tests and embedders
pub use storefront_app as app;
pub use storefront_catalog as catalog;
pub use storefront_core as core;
pub use storefront_tui as tui;

/// Command-line overrides applied on top of `config.toml`
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    /// Catalog REST base URL
    pub api_url: Option<String>,
    /// Catalog JSON fixture, relative to the working directory
    pub fixture: Option<PathBuf>,
}

impl Overrides {
    /// Apply the overrides; a CLI source replaces both configured sources
    pub fn apply(self, settings: &mut Settings, cwd: &Path) {
        if let Some(fixture) = self.fixture {
            let fixture = if fixture.is_absolute() {
                fixture
            } else {
                cwd.join(fixture)
            };
            settings.catalog.fixture = Some(fixture);
            settings.catalog.base_url = None;
        } else if let Some(api_url) = self.api_url {
            settings.catalog.base_url = Some(api_url);
            settings.catalog.fixture = None;
        }
    }
}

/// Main application entry point
///
/// Loads settings from `config_dir` (or the default location), applies
/// command-line overrides, opens the catalog and runs the TUI.
pub async fn run(config_dir: Option<PathBuf>, overrides: Overrides) -> Result<()> {
    // Initialize error handling
    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;

    // Initialize logging (to file, since TUI owns stdout)
    storefront_core::logging::init()?;

    let config_dir = config::resolve_config_dir(config_dir);
    info!("Config directory: {}", config_dir.display());

    let mut settings = config::load_settings(&config_dir);
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    overrides.apply(&mut settings, &cwd);

    let catalog = config::open_catalog(&config_dir, &settings.catalog)?;

    let result = storefront_tui::run(settings, catalog).await;
    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
    }

    info!("Storefront exiting");
    result
}

/// Write a commented default `config.toml` if none exists yet
pub fn init_config(config_dir: Option<PathBuf>) -> Result<PathBuf> {
    let config_dir = config::resolve_config_dir(config_dir);
    config::init_config_dir(&config_dir)?;
    Ok(config::config_path(&config_dir))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_override_wins_and_resolves_against_cwd() {
        let mut settings = Settings::default();
        settings.catalog.base_url = Some("https://shop.example.com/api".into());

        Overrides {
            api_url: Some("https://other.example.com".into()),
            fixture: Some(PathBuf::from("demos/catalog.json")),
        }
        .apply(&mut settings, Path::new("/work"));

        assert_eq!(
            settings.catalog.fixture,
            Some(PathBuf::from("/work/demos/catalog.json"))
        );
        assert_eq!(settings.catalog.base_url, None);
    }

    #[test]
    fn test_api_url_override_replaces_fixture() {
        let mut settings = Settings::default();
        settings.catalog.fixture = Some(PathBuf::from("catalog.json"));

        Overrides {
            api_url: Some("http://localhost:8000/api".into()),
            fixture: None,
        }
        .apply(&mut settings, Path::new("/work"));

        assert_eq!(
            settings.catalog.base_url.as_deref(),
            Some("http://localhost:8000/api")
        );
        assert_eq!(settings.catalog.fixture, None);
    }

    #[test]
    fn test_no_overrides_keeps_config() {
        let mut settings = Settings::default();
        settings.catalog.base_url = Some("https://shop.example.com/api".into());
        let before = settings.clone();

        Overrides::default().apply(&mut settings, Path::new("/work"));
        assert_eq!(settings, before);
    }
}
