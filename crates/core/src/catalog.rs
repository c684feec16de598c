//! In-memory movie catalog
//!
//! `MovieCatalog` is the [`MovieSource`] the desktop app runs against. It is
//! loaded once from a JSON file (or the bundled sample) and answers listing,
//! search and review requests from memory.
//!
//! ## File format
//!
//! ```json
//! {
//!   "movies": [
//!     {
//!       "id": "…",
//!       "title": "Heat",
//!       "rating": 8.3,
//!       "reviewCount": 12,
//!       "releaseYear": 1995,
//!       "directors": ["Michael Mann"],
//!       "genres": ["Crime"],
//!       "cast": ["Al Pacino"],
//!       "runtime": 170,
//!       "plot": "…"
//!     }
//!   ]
//! }
//! ```

use crate::error::{CineError, CineResult, ResultExt};
use crate::traits::MovieSource;
use crate::types::{MAX_RATING, MIN_RATING, Movie, MovieId};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::path::Path;

// ============================================================================
// Constants
// ============================================================================

/// Number of movies in the "Top 100" listing
pub const TOP_RATED_LIMIT: usize = 100;

/// Default number of movies per listing page
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// Catalog bundled with the application
const SAMPLE_CATALOG: &str = include_str!("../../../assets/catalog.json");

// ============================================================================
// Page
// ============================================================================

/// One page of a listing
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    /// Items on this page
    pub items: Vec<T>,
    /// Zero-based page number
    pub page: usize,
    /// Total number of pages in the listing
    pub total_pages: usize,
    /// Total number of items in the listing
    pub total_items: usize,
}

impl<T> Page<T> {
    /// Whether a later page exists
    pub fn has_next(&self) -> bool {
        self.page + 1 < self.total_pages
    }

    /// Whether an earlier page exists
    pub fn has_previous(&self) -> bool {
        self.page > 0
    }

    /// Whether this page holds no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Slice `items` into the requested page
///
/// Page 0 of an empty listing is a valid, empty page.
fn paginate(items: Vec<Movie>, page: usize, size: usize) -> CineResult<Page<Movie>> {
    let size = size.max(1);
    let total_items = items.len();
    let total_pages = total_items.div_ceil(size);

    if page >= total_pages.max(1) {
        return Err(CineError::InvalidPage {
            page,
            pages: total_pages,
        });
    }

    let items = items.into_iter().skip(page * size).take(size).collect();
    Ok(Page {
        items,
        page,
        total_pages,
        total_items,
    })
}

/// Best rated first, ties broken by title
fn by_rating_desc(a: &Movie, b: &Movie) -> Ordering {
    b.rating
        .total_cmp(&a.rating)
        .then_with(|| a.title.cmp(&b.title))
}

// ============================================================================
// Catalog File
// ============================================================================

/// A movie together with the number of reviews behind its mean rating
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CatalogEntry {
    #[serde(flatten)]
    movie: Movie,
    #[serde(default)]
    review_count: u32,
}

/// On-disk catalog layout
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    movies: Vec<CatalogEntry>,
}

// ============================================================================
// Movie Catalog
// ============================================================================

/// In-memory movie source
#[derive(Debug, Clone, PartialEq)]
pub struct MovieCatalog {
    entries: Vec<CatalogEntry>,
    page_size: usize,
}

impl Default for MovieCatalog {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl MovieCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from movies that have no recorded reviews yet
    pub fn from_movies(movies: impl IntoIterator<Item = Movie>) -> Self {
        Self {
            entries: movies
                .into_iter()
                .map(|movie| CatalogEntry {
                    movie,
                    review_count: 0,
                })
                .collect(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Parse a catalog from its JSON representation
    pub fn from_json(json: &str) -> CineResult<Self> {
        let file: CatalogFile =
            serde_json::from_str(json).map_err(|e| CineError::catalog_format(e.to_string()))?;
        Ok(Self {
            entries: file.movies,
            page_size: DEFAULT_PAGE_SIZE,
        })
    }

    /// Load a catalog from a JSON file
    pub fn load(path: impl AsRef<Path>) -> CineResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| CineError::CatalogRead {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_json(&json)
    }

    /// The catalog bundled with the application
    pub fn sample() -> CineResult<Self> {
        Self::from_json(SAMPLE_CATALOG)
    }

    /// Serialize the catalog back to pretty JSON
    pub fn to_json(&self) -> CineResult<String> {
        let file = CatalogFile {
            movies: self.entries.clone(),
        };
        serde_json::to_string_pretty(&file).with_context("Serializing catalog")
    }

    /// Set the number of movies per listing page
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    /// Number of movies in the catalog
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog holds no movies
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of reviews recorded for a movie
    pub fn review_count(&self, id: MovieId) -> Option<u32> {
        self.entry(id).map(|e| e.review_count)
    }

    fn entry(&self, id: MovieId) -> Option<&CatalogEntry> {
        self.entries.iter().find(|e| e.movie.id == id)
    }

    fn movies(&self) -> impl Iterator<Item = &Movie> {
        self.entries.iter().map(|e| &e.movie)
    }
}

impl MovieSource for MovieCatalog {
    fn movie(&self, id: MovieId) -> CineResult<Movie> {
        self.entry(id)
            .map(|e| e.movie.clone())
            .ok_or(CineError::MovieNotFound(id))
    }

    fn top_rated(&self, page: usize) -> CineResult<Page<Movie>> {
        let mut movies: Vec<Movie> = self.movies().cloned().collect();
        movies.sort_by(by_rating_desc);
        movies.truncate(TOP_RATED_LIMIT);
        paginate(movies, page, self.page_size)
    }

    fn browse(&self, page: usize) -> CineResult<Page<Movie>> {
        let mut movies: Vec<Movie> = self.movies().cloned().collect();
        movies.sort_by(|a, b| a.title.cmp(&b.title));
        paginate(movies, page, self.page_size)
    }

    fn search_title(&self, query: &str, page: usize) -> CineResult<Page<Movie>> {
        let mut movies: Vec<Movie> = self
            .movies()
            .filter(|m| m.title_matches(query))
            .cloned()
            .collect();
        movies.sort_by(by_rating_desc);
        paginate(movies, page, self.page_size)
    }

    fn add_review(&mut self, id: MovieId, rating: u8) -> CineResult<f64> {
        if !(MIN_RATING..=MAX_RATING).contains(&rating) {
            return Err(CineError::InvalidRating(rating));
        }

        let entry = self
            .entries
            .iter_mut()
            .find(|e| e.movie.id == id)
            .ok_or(CineError::MovieNotFound(id))?;

        let count = f64::from(entry.review_count);
        entry.movie.rating = (entry.movie.rating * count + f64::from(rating)) / (count + 1.0);
        entry.review_count += 1;

        Ok(entry.movie.rating)
    }

    fn page_size(&self) -> usize {
        self.page_size
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn catalog() -> MovieCatalog {
        MovieCatalog::from_movies([
            Movie::new("Casablanca", 1942).with_rating(8.5),
            Movie::new("Alien", 1979).with_rating(8.4),
            Movie::new("Brazil", 1985).with_rating(7.9),
            Movie::new("Double Indemnity", 1944).with_rating(8.5),
            Movie::new("Eraserhead", 1977).with_rating(7.3),
        ])
        .with_page_size(2)
    }

    fn titles(page: &Page<Movie>) -> Vec<&str> {
        page.items.iter().map(|m| m.title.as_str()).collect()
    }

    #[test]
    fn test_top_rated_orders_by_rating_then_title() {
        let catalog = catalog();
        let first = catalog.top_rated(0).unwrap();
        assert_eq!(titles(&first), vec!["Casablanca", "Double Indemnity"]);
        assert_eq!(first.total_pages, 3);
        assert!(first.has_next());
        assert!(!first.has_previous());

        let last = catalog.top_rated(2).unwrap();
        assert_eq!(titles(&last), vec!["Eraserhead"]);
        assert!(!last.has_next());
    }

    #[test]
    fn test_top_rated_is_capped() {
        let movies = (0..TOP_RATED_LIMIT + 5)
            .map(|i| Movie::new(format!("Movie {i:03}"), 2000).with_rating(i as f64 / 20.0));
        let catalog = MovieCatalog::from_movies(movies).with_page_size(50);
        let page = catalog.top_rated(0).unwrap();
        assert_eq!(page.total_items, TOP_RATED_LIMIT);
        assert_eq!(page.total_pages, 2);
    }

    #[test]
    fn test_browse_orders_by_title() {
        let page = catalog().browse(0).unwrap();
        assert_eq!(titles(&page), vec!["Alien", "Brazil"]);
    }

    #[test]
    fn test_page_past_end_is_rejected() {
        let err = catalog().browse(3).unwrap_err();
        assert!(matches!(err, CineError::InvalidPage { page: 3, pages: 3 }));
    }

    #[test]
    fn test_empty_listing_first_page_is_empty() {
        let page = MovieCatalog::new().browse(0).unwrap();
        assert!(page.is_empty());
        assert_eq!(page.total_pages, 0);
        assert!(!page.has_next());
    }

    #[test]
    fn test_search_title_is_case_insensitive() {
        let page = catalog().search_title("AL", 0).unwrap();
        assert_eq!(titles(&page), vec!["Alien"]);

        let none = catalog().search_title("zzz", 0).unwrap();
        assert!(none.is_empty());
    }

    #[test]
    fn test_movie_lookup() {
        let catalog = catalog();
        let id = catalog.browse(0).unwrap().items[0].id;
        assert_eq!(catalog.movie(id).unwrap().title, "Alien");

        let missing = MovieId::new_v4();
        assert!(catalog.movie(missing).unwrap_err().is_not_found());
    }

    #[test]
    fn test_add_review_updates_mean() {
        let movie = Movie::new("Heat", 1995);
        let id = movie.id;
        let mut catalog = MovieCatalog::from_movies([movie]);

        assert_eq!(catalog.add_review(id, 8).unwrap(), 8.0);
        assert_eq!(catalog.add_review(id, 6).unwrap(), 7.0);
        assert_eq!(catalog.review_count(id), Some(2));
        assert_eq!(catalog.movie(id).unwrap().rating, 7.0);
    }

    #[test]
    fn test_add_review_rejects_out_of_range() {
        let movie = Movie::new("Heat", 1995);
        let id = movie.id;
        let mut catalog = MovieCatalog::from_movies([movie]);

        assert!(matches!(
            catalog.add_review(id, 0),
            Err(CineError::InvalidRating(0))
        ));
        assert!(matches!(
            catalog.add_review(id, 11),
            Err(CineError::InvalidRating(11))
        ));
        assert_eq!(catalog.review_count(id), Some(0));
    }

    #[test]
    fn test_add_review_unknown_movie() {
        let mut catalog = catalog();
        let err = catalog.add_review(MovieId::new_v4(), 5).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_from_json_keeps_review_counts() {
        let json = r#"{
            "movies": [{
                "id": "6f1c1b8e-3c55-4c4e-9d59-0b0a5f1f2a10",
                "title": "Stalker",
                "rating": 8.0,
                "reviewCount": 4,
                "releaseYear": 1979
            }]
        }"#;
        let mut catalog = MovieCatalog::from_json(json).unwrap();
        let id: MovieId = "6f1c1b8e-3c55-4c4e-9d59-0b0a5f1f2a10".parse().unwrap();
        assert_eq!(catalog.review_count(id), Some(4));
        assert_eq!(catalog.add_review(id, 3).unwrap(), 7.0);
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        let err = MovieCatalog::from_json("not json").unwrap_err();
        assert!(matches!(err, CineError::CatalogFormat(_)));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("movies.json");
        std::fs::write(&path, catalog().to_json().unwrap()).unwrap();

        let loaded = MovieCatalog::load(&path).unwrap();
        assert_eq!(loaded.len(), 5);
    }

    #[test]
    fn test_load_missing_file() {
        let err = MovieCatalog::load("/definitely/not/here.json").unwrap_err();
        assert!(err.is_io());
    }

    #[test]
    fn test_sample_catalog_parses() {
        let sample = MovieCatalog::sample().unwrap();
        assert!(!sample.is_empty());
        assert!(sample.top_rated(0).is_ok());
    }

    #[test]
    fn test_page_count() {
        let catalog = catalog();
        assert_eq!(catalog.page_count(0), 0);
        assert_eq!(catalog.page_count(4), 2);
        assert_eq!(catalog.page_count(5), 3);
    }
}
