//! Movie Detail Page Component
//!
//! Loads one movie from the catalog and shows it with [`MovieInfo`]. Adding
//! a review restarts the load so the new mean rating comes from the catalog.

use cinehub_core::{MovieId, MovieSource};
use dioxus::prelude::*;

use super::not_found::NotFoundPanel;
use crate::components::MovieInfo;
use crate::state::use_catalog;

/// Detail view for a single movie
#[component]
pub fn MovieDetail(id: MovieId) -> Element {
    let catalog = use_catalog();

    // `peek` keeps catalog writes from refreshing the view behind our back;
    // the view only changes through `restart`
    let mut movie = use_resource(use_reactive!(|(id,)| async move {
        catalog.peek().movie(id)
    }));

    let reload = move |_| {
        tracing::debug!("Reloading movie {}", id);
        movie.restart();
    };

    match &*movie.read() {
        Some(Ok(data)) => rsx! {
            MovieInfo {
                movie: data.clone(),
                on_reload: reload,
            }
        },
        Some(Err(e)) => rsx! {
            NotFoundPanel { message: e.to_string() }
        },
        None => rsx! {
            p { class: "loading", "Loading..." }
        },
    }
}
