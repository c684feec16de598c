//! # User Menu
//!
//! Sign-in link while signed out; nickname and sign-out button otherwise.

use dioxus::prelude::*;

use crate::routes::Route;
use crate::state::SESSION;

/// User menu entry point in the top bar
#[component]
pub fn UserMenu() -> Element {
    match SESSION() {
        Some(session) => rsx! {
            div {
                class: "user-menu",
                span {
                    class: "user-name",
                    title: "{session.email}",
                    "{session.nickname()}"
                }
                button {
                    class: "user-logout",
                    r#type: "button",
                    onclick: move |_| {
                        tracing::info!("User signed out");
                        *SESSION.write() = None;
                    },
                    "Log out"
                }
            }
        },
        None => rsx! {
            div {
                class: "user-menu",
                Link {
                    to: Route::Login {},
                    class: "user-login",
                    "Log in"
                }
            }
        },
    }
}
