//! Main Application Component for CineHub
//!
//! This module contains the root Dioxus component and the shell layout
//! every routed page renders inside.

use cinehub_core::MovieCatalog;
use dioxus::prelude::*;

use crate::components::TopBar;
use crate::routes::Route;

// ============================================================================
// Main App Component
// ============================================================================

/// Root application component
#[component]
pub fn App() -> Element {
    // The catalog handed over by `launch` becomes a signal every page can read
    use_context_provider(|| Signal::new(consume_context::<MovieCatalog>()));

    use_effect(|| {
        tracing::info!("CineHub UI initialized");
    });

    rsx! {
        Router::<Route> {}
    }
}

// ============================================================================
// Shell Layout
// ============================================================================

/// Top bar above the routed page
#[component]
pub fn Shell() -> Element {
    rsx! {
        div {
            class: "app-container",

            TopBar {}

            main {
                class: "page-content",
                Outlet::<Route> {}
            }
        }
    }
}
