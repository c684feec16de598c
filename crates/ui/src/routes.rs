//! Application routes
//!
//! Every page except the not-found fallback renders inside [`Shell`], which
//! places the top bar above the routed content.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use dioxus::prelude::*;
use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

use crate::app::Shell;
use crate::pages::{Browse, Home, Login, MovieDetail, NotFound, Search, TopRated};
use cinehub_core::MovieId;

/// All navigable locations
#[derive(Debug, Clone, PartialEq, Routable)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Shell)]
        #[route("/")]
        Home {},
        #[route("/top/:page")]
        TopRated { page: usize },
        #[route("/browse/:page")]
        Browse { page: usize },
        #[route("/movie/:id")]
        MovieDetail { id: MovieId },
        #[route("/search/:query/:page")]
        Search { query: SearchQuery, page: usize },
        #[route("/login")]
        Login {},
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

impl Route {
    /// First page of the "Top 100" listing
    pub fn top_rated() -> Self {
        Route::TopRated { page: 0 }
    }

    /// First page of the full listing
    pub fn browse() -> Self {
        Route::Browse { page: 0 }
    }

    /// First page of a title search
    pub fn search(query: impl Into<String>) -> Self {
        Route::Search {
            query: SearchQuery::new(query),
            page: 0,
        }
    }
}

// ============================================================================
// Search Query Segment
// ============================================================================

/// Bytes escaped before the router writes the segment. The router leaves
/// `/` and `%` as they are but decodes every segment once when parsing.
const SEGMENT_ESCAPES: &AsciiSet = &CONTROLS.add(b'/').add(b'%');

/// Free-text search query carried in a single path segment
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchQuery(String);

impl SearchQuery {
    pub fn new(query: impl Into<String>) -> Self {
        Self(query.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", utf8_percent_encode(&self.0, SEGMENT_ESCAPES))
    }
}

impl FromStr for SearchQuery {
    type Err = Infallible;

    /// The router has already percent-decoded the segment
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

// ============================================================================
// Tests
// ============================================================================
