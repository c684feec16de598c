//! # Movie Info
//!
//! Read-only summary of one movie: title, rating widget, mean rating,
//! year, directors, genres, runtime, plot and cast.

use cinehub_core::{Movie, comma_list, format_mean_rating, format_runtime};
use dioxus::prelude::*;

use super::rate_movie::RateMovie;

// ============================================================================
// Summary
// ============================================================================

/// Display text derived from a movie record
#[derive(Debug, Clone, PartialEq)]
pub struct MovieSummary {
    pub title: String,
    pub mean_rating: String,
    pub release_year: String,
    pub directors: Vec<String>,
    pub genres: String,
    pub runtime: String,
    pub plot: String,
    pub cast: String,
}

impl MovieSummary {
    /// Format every field of `movie` for display
    pub fn from_movie(movie: &Movie) -> Self {
        Self {
            title: movie.title.clone(),
            mean_rating: format!("Mean rating: {}", format_mean_rating(movie.rating)),
            release_year: movie.release_year.to_string(),
            directors: movie.directors.clone(),
            genres: comma_list(&movie.genres),
            runtime: format_runtime(movie.runtime),
            plot: movie.plot.clone(),
            cast: comma_list(&movie.cast),
        }
    }

    /// Director headings keyed by credit position; names may repeat
    pub fn director_headings(&self) -> impl Iterator<Item = (usize, &str)> {
        self.directors.iter().map(String::as_str).enumerate()
    }
}

// ============================================================================
// Movie Info Component
// ============================================================================

/// Properties for MovieInfo component
#[derive(Props, Clone, PartialEq)]
pub struct MovieInfoProps {
    /// The movie to show
    pub movie: Movie,

    /// Reloads the current view; fired after a review was added
    #[props(default)]
    pub on_reload: EventHandler<()>,
}

/// Movie detail panel
#[component]
pub fn MovieInfo(props: MovieInfoProps) -> Element {
    let summary = MovieSummary::from_movie(&props.movie);

    // A new review changes the mean; re-fetch instead of patching it here
    let add_review_handler = move |_| {
        tracing::debug!("Review added, reloading movie view");
        props.on_reload.call(());
    };

    rsx! {
        div {
            class: "movie-info",

            h1 { "{summary.title}" }

            RateMovie {
                movie_id: props.movie.id,
                rating: props.movie.rating,
                on_add_review: add_review_handler,
            }

            h2 { "{summary.mean_rating}" }
            h2 { "{summary.release_year}" }

            for (key, director) in summary.director_headings() {
                h3 { key: "{key}", "{director}" }
            }

            h3 { "{summary.genres}" }
            h3 { "{summary.runtime}" }

            p { class: "plot", "{summary.plot}" }

            h2 { "Cast:" }
            p { "{summary.cast}" }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_with_empty_directors() {
        let movie = Movie::new("The Big Sleep", 1946)
            .with_genres(["Drama", "Noir"])
            .with_cast(["A", "B"]);
        let summary = MovieSummary::from_movie(&movie);

        assert_eq!(summary.genres, "Drama, Noir");
        assert!(summary.directors.is_empty());
        assert_eq!(summary.cast, "A, B");
    }

    #[test]
    fn test_summary_formats_numbers() {
        let movie = Movie::new("Heat", 1995)
            .with_rating(8.333)
            .with_runtime(170);
        let summary = MovieSummary::from_movie(&movie);

        assert_eq!(summary.mean_rating, "Mean rating: 8.33");
        assert_eq!(summary.release_year, "1995");
        assert_eq!(summary.runtime, "170 minutes");
    }

    #[test]
    fn test_summary_all_lists_empty() {
        let summary = MovieSummary::from_movie(&Movie::new("Untitled", 2020));
        assert_eq!(summary.genres, "");
        assert_eq!(summary.cast, "");
        assert_eq!(summary.mean_rating, "Mean rating: 0.00");
    }

    #[test]
    fn test_repeated_director_gets_distinct_keys() {
        let movie = Movie::new("Twin Credits", 2001).with_directors(["Joel Coen", "Joel Coen"]);
        let summary = MovieSummary::from_movie(&movie);

        let headings: Vec<_> = summary.director_headings().collect();
        assert_eq!(headings, vec![(0, "Joel Coen"), (1, "Joel Coen")]);
    }

    #[test]
    fn test_summary_leaves_movie_untouched() {
        let movie = Movie::new("Heat", 1995).with_directors(["Michael Mann"]);
        let before = movie.clone();
        let _ = MovieSummary::from_movie(&movie);
        assert_eq!(movie, before);
    }
}
