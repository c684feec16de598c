//! Not Found Page Component

use dioxus::prelude::*;

use crate::routes::Route;

/// Fallback for unknown paths
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    tracing::debug!("No route for {}", path);

    rsx! {
        div {
            class: "app-container",
            NotFoundPanel { message: format!("Nothing lives at {}", path) }
        }
    }
}

/// Message panel with a way back home
#[component]
pub fn NotFoundPanel(message: String) -> Element {
    rsx! {
        section {
            class: "not-found",
            h1 { "Not found" }
            p { "{message}" }
            Link { to: Route::Home {}, class: "home-action", "Back to start" }
        }
    }
}
