//! Core traits for CineHub
//!
//! This module defines the data contract the views consume. The UI never
//! knows where movies come from, only that something implements
//! [`MovieSource`].

use crate::catalog::Page;
use crate::error::CineResult;
use crate::types::{Movie, MovieId};

// ============================================================================
// MovieSource Trait
// ============================================================================

/// Trait for anything that can supply movie records
///
/// Records are returned as owned snapshots; callers never hold a reference
/// into the source while rendering.
///
/// # Example
///
/// ```rust,ignore
/// use cinehub_core::{MovieCatalog, MovieSource};
///
/// let catalog = MovieCatalog::sample()?;
/// let first = catalog.top_rated(0)?;
/// for movie in &first.items {
///     println!("{} ({})", movie.title, movie.rating);
/// }
/// ```
pub trait MovieSource {
    /// Fetch a single movie by id
    fn movie(&self, id: MovieId) -> CineResult<Movie>;

    /// Page of the highest rated movies, best first
    fn top_rated(&self, page: usize) -> CineResult<Page<Movie>>;

    /// Page of all movies in title order
    fn browse(&self, page: usize) -> CineResult<Page<Movie>>;

    /// Page of movies whose title contains `query`, best rated first
    fn search_title(&self, query: &str, page: usize) -> CineResult<Page<Movie>>;

    /// Record a new review and return the updated mean rating
    fn add_review(&mut self, id: MovieId, rating: u8) -> CineResult<f64>;

    /// Number of movies per listing page
    fn page_size(&self) -> usize;

    /// Number of pages needed for `len` items
    fn page_count(&self, len: usize) -> usize {
        let size = self.page_size().max(1);
        len.div_ceil(size)
    }
}
