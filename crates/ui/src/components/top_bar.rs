//! # Top Bar
//!
//! Branding, primary navigation, search and the user menu. Wide windows get
//! an always-visible navigation list; narrow windows get a toggle icon that
//! folds the list (and the search box) away.
//!
//! The layout is chosen from the window width at mount time. The tracked
//! width only drives the menu's collapse.

use dioxus::prelude::*;

use super::search_module::SearchModule;
use super::user_menu::UserMenu;
use crate::hooks::{MenuState, NavLayout, initial_window_width, use_window_width};
use crate::routes::Route;

// ============================================================================
// Navigation Items
// ============================================================================

/// A primary navigation link
#[derive(Debug, Clone, PartialEq)]
pub struct NavItem {
    /// Link text
    pub label: &'static str,
    /// Link target
    pub route: Route,
}

impl NavItem {
    /// Whether this link is active at `location`
    pub fn is_active(&self, location: &str) -> bool {
        nav_link_active(location, &self.route.to_string())
    }

    /// CSS class for the link at `location`
    pub fn link_class(&self, location: &str) -> String {
        if self.is_active(location) {
            "nav-link active".to_string()
        } else {
            "nav-link".to_string()
        }
    }
}

/// Links shown in both layouts
pub fn primary_nav() -> [NavItem; 2] {
    [
        NavItem {
            label: "Top 100",
            route: Route::top_rated(),
        },
        NavItem {
            label: "Browse movies",
            route: Route::browse(),
        },
    ]
}

/// Router-style active check
///
/// A link is active when the location equals its target or continues it at
/// a path segment boundary. Matching ignores case and trailing slashes.
pub fn nav_link_active(location: &str, target: &str) -> bool {
    let location = normalize_path(location);
    let target = normalize_path(target);

    if location == target {
        return true;
    }

    location
        .strip_prefix(&target)
        .is_some_and(|rest| rest.starts_with('/') && target != "/")
}

fn normalize_path(path: &str) -> String {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        trimmed.to_lowercase()
    }
}

// ============================================================================
// Nav Links Component
// ============================================================================

/// Primary navigation list items
#[component]
fn NavLinks(location: String) -> Element {
    rsx! {
        for item in primary_nav() {
            li {
                key: "{item.label}",
                class: "border-gradient",
                Link {
                    to: item.route.clone(),
                    class: item.link_class(&location),
                    div { "{item.label}" }
                }
            }
        }
    }
}

// ============================================================================
// Top Bar Component
// ============================================================================

/// Responsive top navigation bar
#[component]
pub fn TopBar() -> Element {
    let initial_width = use_hook(initial_window_width);
    let width = use_window_width();
    let mut menu = use_signal(|| MenuState::new(initial_width));

    // Runs on mount and whenever the tracked width changes
    use_effect(move || {
        let current = width();
        menu.write().resize(current);
    });

    let location = use_route::<Route>().to_string();
    let state = menu();

    let nav = match NavLayout::for_width(initial_width) {
        NavLayout::Wide => rsx! {
            nav {
                class: "nav-wide",
                ul {
                    NavLinks { location: location.clone() }
                }
                SearchModule {}
            }
        },
        NavLayout::Narrow => {
            let icon = state.icon();
            rsx! {
                button {
                    class: "menu-toggle",
                    r#type: "button",
                    aria_label: icon.label(),
                    onclick: move |_| {
                        menu.write().toggle();
                        tracing::debug!("Menu toggled, visible: {}", menu.peek().menu_visible);
                    },
                    "{icon.glyph()}"
                }
                if state.menu_visible {
                    nav {
                        class: "foldable",
                        ul {
                            NavLinks { location: location.clone() }
                            li { SearchModule {} }
                        }
                    }
                }
            }
        }
    };

    rsx! {
        div {
            class: "topbar",

            Link {
                to: Route::Home {},
                class: "logo",
                span { class: "logo-first-half", "Cine" }
                span { class: "logo-second-half", "HUB" }
            }

            {nav}

            UserMenu {}
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
