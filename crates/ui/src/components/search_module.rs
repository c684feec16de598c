//! # Search Module
//!
//! Title search box. Enter or the search button opens the first page of
//! results for the typed query.

use dioxus::prelude::*;

use crate::routes::Route;

/// Title search input
#[component]
pub fn SearchModule() -> Element {
    let mut query = use_signal(String::new);

    rsx! {
        div {
            class: "search-module",

            input {
                class: "search-input",
                r#type: "search",
                placeholder: "Search movies...",
                value: "{query}",
                oninput: move |e| query.set(e.value()),
                onkeydown: move |e| {
                    if e.key() == Key::Enter {
                        open_search(&query.read());
                    }
                },
            }

            button {
                class: "search-button",
                r#type: "button",
                onclick: move |_| open_search(&query.read()),
                "Search"
            }
        }
    }
}

/// Route for a search query; blank queries go nowhere
pub fn search_route(query: &str) -> Option<Route> {
    let query = query.trim();
    if query.is_empty() {
        None
    } else {
        Some(Route::search(query))
    }
}

fn open_search(query: &str) {
    if let Some(route) = search_route(query) {
        tracing::debug!("Searching for '{}'", query.trim());
        navigator().push(route);
    }
}

// ============================================================================
// Tests
// ============================================================================
