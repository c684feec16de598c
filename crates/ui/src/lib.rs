//! # CineHub UI
//!
//! Dioxus Desktop UI for CineHub.
//!
//! This crate provides the movie browsing interface: the top navigation bar,
//! movie listings, the movie detail view and the sign-in form.
//!
//! ## Features
//!
//! - Responsive top bar that folds into a toggle menu on narrow windows
//! - "Top 100" and "Browse movies" listings with paging
//! - Title search
//! - Movie detail view with rating submission
//!

// ============================================================================
// Modules
// ============================================================================

pub mod app;
pub mod components;
pub mod hooks;
pub mod pages;
pub mod routes;
pub mod state;

// ============================================================================
// Re-exports
// ============================================================================

// Re-export core crate for convenience
pub use cinehub_core;

// Re-export main components
pub use app::{App, Shell};
pub use routes::{Route, SearchQuery};
pub use state::{SESSION, Session, load_catalog, use_catalog};

// Re-export components
pub use components::{
    Input, MovieCard, MovieInfo, MovieSummary, Pager, RateMovie, SearchModule, TopBar, UserMenu,
};

// Re-export hooks
pub use hooks::{MENU_BREAKPOINT, MenuState, NavLayout, use_window_width};

// ============================================================================
// Constants
// ============================================================================

use cinehub_core::AppConfig;

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const NAME: &str = "CineHub";

/// Smallest window the layout supports
const MIN_WINDOW_WIDTH: f64 = 320.0;
const MIN_WINDOW_HEIGHT: f64 = 480.0;

/// CSS styles for the application
const STYLES: &str = include_str!("../../../assets/styles/main.css");

// ============================================================================
// Launch Function
// ============================================================================

/// Launch the CineHub desktop application
///
/// Loads the movie catalog named by `config` (or the bundled sample) and
/// opens the main window.
///
/// # Example
///
/// ```rust,ignore
/// fn main() {
///     cinehub_ui::launch(cinehub_core::AppConfig::default());
/// }
/// ```
pub fn launch(config: AppConfig) {
    tracing::info!("Starting {} v{}", NAME, VERSION);

    let catalog = load_catalog(&config);

    // Build custom head with embedded CSS
    let custom_head = format!(r#"<style type="text/css">{}</style>"#, STYLES);

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new()
                .with_window(
                    dioxus::desktop::WindowBuilder::new()
                        .with_title(config.window_title.clone())
                        .with_resizable(true)
                        .with_inner_size(dioxus::desktop::LogicalSize::new(
                            config.window_width,
                            config.window_height,
                        ))
                        .with_min_inner_size(dioxus::desktop::LogicalSize::new(
                            MIN_WINDOW_WIDTH,
                            MIN_WINDOW_HEIGHT,
                        )),
                )
                .with_menu(None)
                .with_custom_head(custom_head),
        )
        .with_context(catalog)
        .launch(App);
}

/// Get the embedded CSS styles
pub fn get_styles() -> &'static str {
    STYLES
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_exists() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_name() {
        assert_eq!(NAME, "CineHub");
    }

    #[test]
    fn test_styles_loaded() {
        assert!(!STYLES.is_empty());
        assert!(STYLES.contains(".topbar"));
        assert!(STYLES.contains(".invalid"));
    }
}
