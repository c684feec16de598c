//! Error types for CineHub
//!
//! This module provides unified error handling for the catalog, the
//! configuration layer and the file IO underneath them.

use std::path::PathBuf;
use thiserror::Error;
use uuid::Uuid;

/// The main error type for CineHub
#[derive(Debug, Error)]
pub enum CineError {
    // ========================================================================
    // Not Found Errors
    // ========================================================================
    /// Movie not found in the catalog
    #[error("Movie not found: {0}")]
    MovieNotFound(Uuid),

    /// Requested listing page lies past the last page
    #[error("Page {page} does not exist ({pages} pages available)")]
    InvalidPage { page: usize, pages: usize },

    // ========================================================================
    // Review Errors
    // ========================================================================
    /// Submitted rating is outside the accepted range
    #[error("Invalid rating: {0} (expected 1-10)")]
    InvalidRating(u8),

    // ========================================================================
    // Catalog Errors
    // ========================================================================
    /// Catalog file could not be read
    #[error("Failed to read catalog '{path}': {message}")]
    CatalogRead { path: PathBuf, message: String },

    /// Catalog contents could not be parsed
    #[error("Invalid catalog format: {0}")]
    CatalogFormat(String),

    // ========================================================================
    // Configuration Errors
    // ========================================================================
    /// Configuration file could not be read
    #[error("Failed to read config '{path}': {message}")]
    ConfigRead { path: PathBuf, message: String },

    /// Configuration contents could not be parsed
    #[error("Invalid configuration: {0}")]
    ConfigFormat(String),

    // ========================================================================
    // IO / Serialization Errors
    // ========================================================================
    /// File IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    // ========================================================================
    // Generic Errors
    // ========================================================================
    /// Generic error with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },
}

impl CineError {
    /// Create a catalog format error
    pub fn catalog_format(msg: impl Into<String>) -> Self {
        CineError::CatalogFormat(msg.into())
    }

    /// Create a configuration format error
    pub fn config_format(msg: impl Into<String>) -> Self {
        CineError::ConfigFormat(msg.into())
    }

    /// Create an error with context
    pub fn with_context(context: impl Into<String>, msg: impl Into<String>) -> Self {
        CineError::WithContext {
            context: context.into(),
            message: msg.into(),
        }
    }

    /// Check if this error means the requested data does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            CineError::MovieNotFound(_) | CineError::InvalidPage { .. }
        )
    }

    /// Check if this error is an IO error
    pub fn is_io(&self) -> bool {
        matches!(
            self,
            CineError::Io(_) | CineError::CatalogRead { .. } | CineError::ConfigRead { .. }
        )
    }
}

/// Result type alias using CineError
pub type CineResult<T> = Result<T, CineError>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn with_context<C: Into<String>>(self, context: C) -> CineResult<T>;
}

impl<T, E: Into<CineError>> ResultExt<T> for Result<T, E> {
    fn with_context<C: Into<String>>(self, context: C) -> CineResult<T> {
        self.map_err(|e| {
            let err: CineError = e.into();
            CineError::WithContext {
                context: context.into(),
                message: err.to_string(),
            }
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
