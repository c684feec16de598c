//! Application State for CineHub
//!
//! The movie catalog is provided as a context signal by the root component;
//! the signed-in session is a global signal read by the user menu.

use anyhow::Context;
use cinehub_core::{AppConfig, MovieCatalog};
use dioxus::prelude::*;

// ============================================================================
// Catalog
// ============================================================================

/// Access the movie catalog provided by [`crate::App`]
pub fn use_catalog() -> Signal<MovieCatalog> {
    use_context()
}

/// Load the catalog named by the configuration
fn try_load_catalog(config: &AppConfig) -> anyhow::Result<MovieCatalog> {
    let catalog = match &config.catalog_path {
        Some(path) => MovieCatalog::load(path)
            .with_context(|| format!("loading catalog from {}", path.display()))?,
        None => MovieCatalog::sample().context("parsing bundled catalog")?,
    };
    Ok(catalog.with_page_size(config.page_size))
}

/// Load the catalog for this run
///
/// A catalog that cannot be read is logged and replaced by the bundled one.
pub fn load_catalog(config: &AppConfig) -> MovieCatalog {
    match try_load_catalog(config) {
        Ok(catalog) => {
            tracing::info!("Loaded catalog with {} movies", catalog.len());
            catalog
        }
        Err(e) => {
            tracing::warn!("{:#}; using the bundled catalog", e);
            MovieCatalog::sample()
                .unwrap_or_default()
                .with_page_size(config.page_size)
        }
    }
}

// ============================================================================
// Session
// ============================================================================

/// The locally signed-in user
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    /// Email the user signed in with
    pub email: String,
}

impl Session {
    /// Create a session for an email address
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
        }
    }

    /// Name shown in the user menu (the local part of the email)
    pub fn nickname(&self) -> &str {
        self.email.split('@').next().unwrap_or(&self.email)
    }
}

/// Global session signal; `None` while signed out
pub static SESSION: GlobalSignal<Option<Session>> = Signal::global(|| None);

// ============================================================================
// Tests
// ============================================================================
