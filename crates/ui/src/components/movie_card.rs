//! # Movie Card
//!
//! Compact listing row for a movie plus the pager shown under listings.

use cinehub_core::{Movie, Page, comma_list, format_mean_rating};
use dioxus::prelude::*;

use crate::routes::Route;

/// Properties for MovieCard component
#[derive(Props, Clone, PartialEq)]
pub struct MovieCardProps {
    /// The movie to show
    pub movie: Movie,

    /// Position in the listing (1-based), shown before the title
    #[props(default)]
    pub rank: Option<usize>,
}

/// Listing row linking to the movie's detail view
#[component]
pub fn MovieCard(props: MovieCardProps) -> Element {
    let movie = &props.movie;
    let rating = format_mean_rating(movie.rating);
    let genres = comma_list(&movie.genres);

    rsx! {
        Link {
            to: Route::MovieDetail { id: movie.id },
            class: "movie-card",

            if let Some(rank) = props.rank {
                span { class: "movie-rank", "{rank}." }
            }

            div {
                class: "movie-card-body",
                span { class: "movie-title", "{movie.title}" }
                span { class: "movie-year", "({movie.release_year})" }
                span { class: "movie-genres", "{genres}" }
            }

            span { class: "movie-rating", "★ {rating}" }
        }
    }
}

/// Properties for Pager component
#[derive(Props, Clone, PartialEq)]
pub struct PagerProps {
    /// Current page (zero-based)
    pub page: usize,

    /// Total number of pages
    pub total_pages: usize,

    /// Previous page target, if any
    #[props(!optional)]
    pub previous: Option<Route>,

    /// Next page target, if any
    #[props(!optional)]
    pub next: Option<Route>,
}

/// Previous/next links under a listing
#[component]
pub fn Pager(props: PagerProps) -> Element {
    let label = pager_label(props.page, props.total_pages);

    rsx! {
        div {
            class: "pager",

            if let Some(previous) = props.previous.clone() {
                Link { to: previous, class: "pager-link", "← Previous" }
            }

            span { class: "pager-label", "{label}" }

            if let Some(next) = props.next.clone() {
                Link { to: next, class: "pager-link", "Next →" }
            }
        }
    }
}

/// Neighbouring page routes for a listing page
pub fn pager_targets<T>(
    page: &Page<T>,
    route_for: impl Fn(usize) -> Route,
) -> (Option<Route>, Option<Route>) {
    let previous = page.has_previous().then(|| route_for(page.page - 1));
    let next = page.has_next().then(|| route_for(page.page + 1));
    (previous, next)
}

/// "Page x of y" text; an empty listing still reads as one page
pub fn pager_label(page: usize, total_pages: usize) -> String {
    format!("Page {} of {}", page + 1, total_pages.max(1))
}

// ============================================================================
// Tests
// ============================================================================
