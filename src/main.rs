//! CineHub
//!
//! Movie browsing desktop application.
//!
//! This is the main entry point for the Dioxus Desktop application.

use cinehub_core::AppConfig;
use tracing::Level;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

fn main() {
    // Initialize logging; RUST_LOG overrides the default level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(Level::INFO.as_str()));
    FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .pretty()
        .init();

    let config = match AppConfig::load_default() {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("Ignoring configuration: {}", e);
            AppConfig::default()
        }
    };

    // Print startup banner
    println!();
    println!("╔═══════════════════════════════════════════════════════════╗");
    println!("║                                                           ║");
    println!("║   🎬 CineHub v{:<44}║", cinehub_core::VERSION);
    println!("║   Browse, search and rate movies                          ║");
    println!("║                                                           ║");
    println!("╚═══════════════════════════════════════════════════════════╝");
    println!();

    // Launch the Dioxus desktop application
    cinehub_ui::launch(config);
}
