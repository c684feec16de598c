//! Core types used throughout CineHub
//!
//! This module contains the movie record the views render and the small
//! value types shared by form inputs.

use serde::{Deserialize, Serialize};

// ============================================================================
// Unique Identifiers
// ============================================================================

/// Type alias for movie unique identifiers
pub type MovieId = uuid::Uuid;

// ============================================================================
// Ratings
// ============================================================================

/// Lowest rating a review may carry
pub const MIN_RATING: u8 = 1;

/// Highest rating a review may carry
pub const MAX_RATING: u8 = 10;

// ============================================================================
// Movie Record
// ============================================================================

/// A single movie as supplied by the data source
///
/// Views only ever read this record. The list fields default to empty when
/// absent from the serialized form so a partial record still renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    /// Unique identifier
    pub id: MovieId,

    /// Display title
    pub title: String,

    /// Mean rating over all reviews (0-10)
    #[serde(default)]
    pub rating: f64,

    /// Year of release
    pub release_year: i32,

    /// Directors in credit order
    #[serde(default)]
    pub directors: Vec<String>,

    /// Genre names
    #[serde(default)]
    pub genres: Vec<String>,

    /// Cast in billing order
    #[serde(default)]
    pub cast: Vec<String>,

    /// Runtime in minutes
    #[serde(default)]
    pub runtime: u32,

    /// Plot summary
    #[serde(default)]
    pub plot: String,
}

impl Movie {
    /// Create a movie with the given title and year and no other details
    pub fn new(title: impl Into<String>, release_year: i32) -> Self {
        Self {
            id: MovieId::new_v4(),
            title: title.into(),
            rating: 0.0,
            release_year,
            directors: Vec::new(),
            genres: Vec::new(),
            cast: Vec::new(),
            runtime: 0,
            plot: String::new(),
        }
    }

    /// Set the mean rating
    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = rating;
        self
    }

    /// Set the directors
    pub fn with_directors<I, S>(mut self, directors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.directors = directors.into_iter().map(Into::into).collect();
        self
    }

    /// Set the genres
    pub fn with_genres<I, S>(mut self, genres: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.genres = genres.into_iter().map(Into::into).collect();
        self
    }

    /// Set the cast
    pub fn with_cast<I, S>(mut self, cast: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.cast = cast.into_iter().map(Into::into).collect();
        self
    }

    /// Set the runtime in minutes
    pub fn with_runtime(mut self, runtime: u32) -> Self {
        self.runtime = runtime;
        self
    }

    /// Set the plot summary
    pub fn with_plot(mut self, plot: impl Into<String>) -> Self {
        self.plot = plot.into();
        self
    }

    /// Case-insensitive title substring match
    pub fn title_matches(&self, query: &str) -> bool {
        self.title
            .to_lowercase()
            .contains(&query.trim().to_lowercase())
    }
}

// ============================================================================
// Input Validity
// ============================================================================

/// Tri-state validation flag for form inputs
///
/// Only `Invalid` triggers invalid styling. `Unknown` is the state of a
/// field nobody has validated yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Validity {
    Valid,
    Invalid,
    #[default]
    Unknown,
}

impl Validity {
    /// Build from a plain check result
    pub fn from_check(valid: bool) -> Self {
        if valid {
            Validity::Valid
        } else {
            Validity::Invalid
        }
    }

    /// True only for an explicit `Invalid`
    pub fn is_invalid(&self) -> bool {
        matches!(self, Validity::Invalid)
    }
}

impl From<Option<bool>> for Validity {
    fn from(value: Option<bool>) -> Self {
        match value {
            Some(valid) => Validity::from_check(valid),
            None => Validity::Unknown,
        }
    }
}

// ============================================================================
// Input Types
// ============================================================================

/// HTML input type for the labeled input control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum InputType {
    #[default]
    Text,
    Email,
    Password,
    Search,
    Number,
}

impl InputType {
    /// The value of the `type` attribute
    pub fn as_str(&self) -> &'static str {
        match self {
            InputType::Text => "text",
            InputType::Email => "email",
            InputType::Password => "password",
            InputType::Search => "search",
            InputType::Number => "number",
        }
    }
}

impl std::fmt::Display for InputType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// Tests
// ============================================================================
