//! Scroll Navbar - Main Entry Point
//!
//! Loads the embedded navbar config, sets up logging and launches the app.
//! The same entry point serves the web (WASM) and desktop renderers.

use anyhow::Context;
use scroll_navbar::app::App;
use scroll_navbar::config::NavbarConfig;
use scroll_navbar::shared::logging::{log_config_fallback, log_config_loaded};

const EMBEDDED_CONFIG: &str = include_str!("../assets/navbar.json");

fn load_config() -> anyhow::Result<NavbarConfig> {
    NavbarConfig::from_json(EMBEDDED_CONFIG).context("parsing assets/navbar.json")
}

fn main() {
    let loaded = load_config();
    let level = loaded
        .as_ref()
        .map(NavbarConfig::tracing_level)
        .unwrap_or(tracing::Level::INFO);

    // Initialize tracing BEFORE launch so config problems are visible
    if let Err(e) = dioxus::logger::init(level) {
        eprintln!("Logger already initialized: {}", e);
    }

    let config = match loaded {
        Ok(config) => {
            log_config_loaded(config.items.len());
            config
        }
        Err(e) => {
            log_config_fallback(&format!("{:#}", e));
            NavbarConfig::default()
        }
    };

    dioxus::LaunchBuilder::new().with_context(config).launch(App);
}
