//! Storefront - terminal showcase with rotating carousels
//!
//! This is the binary entry point. All logic lives in the library.

use std::path::PathBuf;

use clap::Parser;
use storefront::core::prelude::*;
use storefront::Overrides;

/// Storefront - browse banners, discounts and reviews in the terminal
#[derive(Parser, Debug)]
#[command(name = "storefront")]
#[command(about = "Terminal storefront with rotating carousels", long_about = None)]
struct Args {
    /// Directory holding `.storefront/config.toml` (defaults to the current directory)
    #[arg(long, value_name = "DIR")]
    config_dir: Option<PathBuf>,

    /// Catalog REST base URL, e.g. http://localhost:8000/api
    #[arg(long, value_name = "URL", conflicts_with = "fixture")]
    api_url: Option<String>,

    /// Serve the catalog from a JSON fixture instead of the API
    #[arg(long, value_name = "FILE")]
    fixture: Option<PathBuf>,

    /// Write a default config file and exit
    #[arg(long)]
    init: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    if args.init {
        let path = storefront::init_config(args.config_dir)?;
        eprintln!("Config written to {}", path.display());
        return Ok(());
    }

    let overrides = Overrides {
        api_url: args.api_url,
        fixture: args.fixture,
    };

    if let Err(e) = storefront::run(args.config_dir, overrides).await {
        if let Error::ConfigInvalid { .. } = e {
            eprintln!("{}", e);
            eprintln!();
            eprintln!("Hint: point the storefront at a catalog:");
            eprintln!("      storefront --api-url http://localhost:8000/api");
            eprintln!("      storefront --fixture demos/catalog.json");
            std::process::exit(1);
        }
        if let Ok(log_file) = storefront::core::logging::get_current_log_file() {
            eprintln!("Details in {}", log_file.display());
        }
        return Err(e);
    }
    Ok(())
}
