//! # Rate Movie
//!
//! Ten-star rating widget. The stars show the current mean rating; hovering
//! previews a score and clicking submits it as a review.

use cinehub_core::{MAX_RATING, MIN_RATING, MovieId, MovieSource};
use dioxus::prelude::*;

use crate::state::use_catalog;

/// Properties for RateMovie component
#[derive(Props, Clone, PartialEq)]
pub struct RateMovieProps {
    /// Movie the review is for
    pub movie_id: MovieId,

    /// Current mean rating
    pub rating: f64,

    /// Disable submission and hover preview
    #[props(default = false)]
    pub read_only: bool,

    /// Called after a review was added successfully
    #[props(default)]
    pub on_add_review: EventHandler<()>,
}

/// Star rating display and input
#[component]
pub fn RateMovie(props: RateMovieProps) -> Element {
    let mut catalog = use_catalog();
    let mut hover = use_signal(|| None::<u8>);
    let mut error = use_signal(|| None::<String>);

    let movie_id = props.movie_id;
    let read_only = props.read_only;

    let submit = use_callback(move |rating: u8| {
        let result = catalog.write().add_review(movie_id, rating);
        match result {
            Ok(mean) => {
                tracing::info!("Added rating {} for {}, mean is now {:.2}", rating, movie_id, mean);
                error.set(None);
                props.on_add_review.call(());
            }
            Err(e) => {
                tracing::warn!("Failed to add rating for {}: {}", movie_id, e);
                error.set(Some(e.to_string()));
            }
        }
    });

    rsx! {
        div {
            class: "rate-movie",
            class: if read_only { "read-only" } else { "" },
            onmouseleave: move |_| hover.set(None),

            for star in MIN_RATING..=MAX_RATING {
                span {
                    key: "{star}",
                    class: "star",
                    class: if star_filled(star, props.rating, hover()) { "filled" } else { "" },
                    title: "{star}",
                    onmouseenter: move |_| {
                        if !read_only {
                            hover.set(Some(star));
                        }
                    },
                    onclick: move |_| {
                        if !read_only {
                            submit.call(star);
                        }
                    },
                    "★"
                }
            }

            if let Some(message) = error() {
                span {
                    class: "rate-error",
                    "{message}"
                }
            }
        }
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Whether star `index` (1-based) is drawn filled
///
/// A hover preview wins over the mean rating, which is rounded to the
/// nearest whole star.
pub fn star_filled(index: u8, rating: f64, hover: Option<u8>) -> bool {
    match hover {
        Some(preview) => index <= preview,
        None => f64::from(index) <= rating.round(),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_star_filled_from_rating() {
        assert!(star_filled(1, 7.4, None));
        assert!(star_filled(7, 7.4, None));
        assert!(!star_filled(8, 7.4, None));
        assert!(star_filled(8, 7.5, None));
    }

    #[test]
    fn test_star_filled_zero_rating() {
        assert!(!star_filled(1, 0.0, None));
    }

    #[test]
    fn test_hover_preview_overrides_rating() {
        assert!(star_filled(3, 9.0, Some(3)));
        assert!(!star_filled(4, 9.0, Some(3)));
        assert!(star_filled(9, 2.0, Some(10)));
    }
}
