//! Listing Page Components
//!
//! "Top 100", "Browse movies" and title search all render the same paged
//! list of [`MovieCard`]s; they differ only in which catalog query feeds it.

use cinehub_core::{CineResult, Movie, MovieSource, Page};
use dioxus::prelude::*;

use super::not_found::NotFoundPanel;
use crate::components::{MovieCard, Pager, pager_targets};
use crate::routes::{Route, SearchQuery};
use crate::state::use_catalog;

// ============================================================================
// Listing Kind
// ============================================================================

/// Which catalog query a listing shows
#[derive(Debug, Clone, PartialEq)]
pub enum Listing {
    TopRated,
    Browse,
    Search(String),
}

impl Listing {
    /// Page heading
    pub fn heading(&self) -> String {
        match self {
            Listing::TopRated => "Top 100".to_string(),
            Listing::Browse => "Browse movies".to_string(),
            Listing::Search(query) => format!("Results for \"{}\"", query),
        }
    }

    /// Route of a page of this listing
    pub fn route(&self, page: usize) -> Route {
        match self {
            Listing::TopRated => Route::TopRated { page },
            Listing::Browse => Route::Browse { page },
            Listing::Search(query) => Route::Search {
                query: SearchQuery::new(query.clone()),
                page,
            },
        }
    }

    /// Whether entries show their position
    pub fn is_ranked(&self) -> bool {
        matches!(self, Listing::TopRated)
    }

    /// Run the query against a movie source
    pub fn fetch(&self, source: &impl MovieSource, page: usize) -> CineResult<Page<Movie>> {
        match self {
            Listing::TopRated => source.top_rated(page),
            Listing::Browse => source.browse(page),
            Listing::Search(query) => source.search_title(query, page),
        }
    }
}

// ============================================================================
// Routed Pages
// ============================================================================

/// Highest rated movies
#[component]
pub fn TopRated(page: usize) -> Element {
    rsx! {
        MovieListing { listing: Listing::TopRated, page }
    }
}

/// All movies by title
#[component]
pub fn Browse(page: usize) -> Element {
    rsx! {
        MovieListing { listing: Listing::Browse, page }
    }
}

/// Title search results
#[component]
pub fn Search(query: SearchQuery, page: usize) -> Element {
    rsx! {
        MovieListing { listing: Listing::Search(query.as_str().to_string()), page }
    }
}

// ============================================================================
// Movie Listing Component
// ============================================================================

/// Paged list of movies
#[component]
pub fn MovieListing(listing: Listing, page: usize) -> Element {
    let catalog = use_catalog();
    let source = catalog.read();
    let page_size = source.page_size();
    let result = listing.fetch(&*source, page);
    drop(source);

    let movies = match result {
        Ok(movies) => movies,
        Err(e) => {
            tracing::debug!("Listing {:?} page {} unavailable: {}", listing, page, e);
            return rsx! {
                NotFoundPanel { message: e.to_string() }
            };
        }
    };

    let heading = listing.heading();
    let ranked = listing.is_ranked();
    let offset = movies.page * page_size;
    let (previous, next) = pager_targets(&movies, |p| listing.route(p));

    rsx! {
        section {
            class: "listing",

            h1 { "{heading}" }

            if movies.is_empty() {
                p { class: "listing-empty", "No movies found." }
            }

            div {
                class: "listing-items",
                for (i, movie) in movies.items.iter().enumerate() {
                    if ranked {
                        MovieCard {
                            key: "{movie.id}",
                            movie: movie.clone(),
                            rank: offset + i + 1,
                        }
                    } else {
                        MovieCard {
                            key: "{movie.id}",
                            movie: movie.clone(),
                        }
                    }
                }
            }

            Pager {
                page: movies.page,
                total_pages: movies.total_pages,
                previous,
                next,
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use cinehub_core::MovieCatalog;

    fn catalog() -> MovieCatalog {
        MovieCatalog::from_movies([
            Movie::new("Brazil", 1985).with_rating(7.9),
            Movie::new("Alien", 1979).with_rating(8.4),
            Movie::new("Aliens", 1986).with_rating(8.3),
        ])
    }

    #[test]
    fn test_headings() {
        assert_eq!(Listing::TopRated.heading(), "Top 100");
        assert_eq!(Listing::Browse.heading(), "Browse movies");
        assert_eq!(
            Listing::Search("alien".to_string()).heading(),
            "Results for \"alien\""
        );
    }

    #[test]
    fn test_routes() {
        assert_eq!(Listing::TopRated.route(0).to_string(), "/top/0");
        assert_eq!(Listing::Browse.route(2).to_string(), "/browse/2");
        assert_eq!(
            Listing::Search("9/11".to_string()).route(1).to_string(),
            "/search/9%2F11/1"
        );
    }

    #[test]
    fn test_only_top_rated_is_ranked() {
        assert!(Listing::TopRated.is_ranked());
        assert!(!Listing::Browse.is_ranked());
        assert!(!Listing::Search("x".to_string()).is_ranked());
    }

    #[test]
    fn test_fetch_dispatches_to_source() {
        let catalog = catalog();

        let top = Listing::TopRated.fetch(&catalog, 0).unwrap();
        assert_eq!(top.items[0].title, "Alien");

        let browse = Listing::Browse.fetch(&catalog, 0).unwrap();
        assert_eq!(browse.items[0].title, "Alien");
        assert_eq!(browse.items[2].title, "Brazil");

        let search = Listing::Search("alien".to_string())
            .fetch(&catalog, 0)
            .unwrap();
        assert_eq!(search.total_items, 2);
    }

    #[test]
    fn test_fetch_past_end_fails() {
        let err = Listing::Browse.fetch(&catalog(), 5).unwrap_err();
        assert!(err.is_not_found());
    }
}
