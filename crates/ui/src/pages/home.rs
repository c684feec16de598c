//! Home Page Component
//!
//! Landing page with entry points into the listings.

use dioxus::prelude::*;

use crate::routes::Route;
use crate::state::use_catalog;

/// Landing page
#[component]
pub fn Home() -> Element {
    let movie_count = use_catalog().read().len();

    rsx! {
        section {
            class: "home",

            h1 {
                span { class: "logo-first-half", "Cine" }
                span { class: "logo-second-half", "HUB" }
            }

            p {
                class: "home-tagline",
                "Browse {movie_count} movies, find the best rated ones and add your own ratings."
            }

            div {
                class: "home-actions",
                Link { to: Route::top_rated(), class: "home-action", "Top 100" }
                Link { to: Route::browse(), class: "home-action", "Browse movies" }
            }
        }
    }
}
