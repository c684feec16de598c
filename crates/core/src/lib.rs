//! # CineHub Core
//!
//! Core types, formatting helpers, the movie catalog and configuration for
//! CineHub.
//!
//! This crate provides the building blocks the desktop UI renders from:
//!
//! - **Types**: The `Movie` record and the tri-state input `Validity`
//! - **Format**: Display helpers (comma lists, mean rating, runtime)
//! - **Traits**: The `MovieSource` data contract
//! - **Catalog**: An in-memory `MovieSource` loaded from JSON
//! - **Config**: Application settings read from TOML
//! - **Errors**: Unified error handling with `CineError` and `CineResult`
//!

pub mod catalog;
pub mod config;
pub mod error;
pub mod format;
pub mod traits;
pub mod types;

// Re-export commonly used items at crate root
pub use catalog::{MovieCatalog, Page, TOP_RATED_LIMIT};
pub use config::AppConfig;
pub use error::{CineError, CineResult, ResultExt};
pub use format::{comma_list, format_mean_rating, format_runtime};
pub use traits::MovieSource;
pub use types::{InputType, MAX_RATING, MIN_RATING, Movie, MovieId, Validity};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
