//! Login Page
//!
//! Local sign-in form. No credentials are checked against anything; a
//! well-formed email and a long enough password start a session.

use std::sync::LazyLock;

use cinehub_core::{InputType, Validity};
use dioxus::prelude::*;
use regex::Regex;

use crate::components::Input;
use crate::routes::Route;
use crate::state::{SESSION, Session};

/// Shortest accepted password
pub const MIN_PASSWORD_LEN: usize = 8;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email regex should compile")
});

// ============================================================================
// Validation
// ============================================================================

/// Whether `value` looks like an email address
pub fn email_is_valid(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value.trim())
}

/// Whether `value` is long enough to be a password
pub fn password_is_valid(value: &str) -> bool {
    value.chars().count() >= MIN_PASSWORD_LEN
}

/// Validity of a form field
///
/// A blank field is `Unknown` until the form has been submitted once.
pub fn field_validity(value: &str, submitted: bool, check: fn(&str) -> bool) -> Validity {
    if value.trim().is_empty() && !submitted {
        Validity::Unknown
    } else {
        Validity::from_check(check(value))
    }
}

// ============================================================================
// Login Page Component
// ============================================================================

#[component]
pub fn Login() -> Element {
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut submitted = use_signal(|| false);

    let email_validity = use_memo(move || field_validity(&email(), submitted(), email_is_valid));
    let password_validity =
        use_memo(move || field_validity(&password(), submitted(), password_is_valid));

    let sign_in = move |_| {
        let address = email();
        if email_is_valid(&address) && password_is_valid(&password()) {
            tracing::info!("Signed in as {}", address);
            *SESSION.write() = Some(Session::new(address.trim()));
            navigator().push(Route::Home {});
        } else {
            submitted.set(true);
        }
    };

    rsx! {
        section {
            class: "login",

            h1 { "Log in" }

            if let Some(session) = SESSION() {
                p { class: "login-current", "Signed in as {session.email}" }
            }

            div {
                class: "login-form",

                Input {
                    id: "email",
                    placeholder: "Email",
                    input_type: InputType::Email,
                    value: email(),
                    is_valid: email_validity(),
                    show_error: submitted(),
                    on_change: move |e: FormEvent| email.set(e.value()),
                }

                Input {
                    id: "password",
                    placeholder: "Password",
                    input_type: InputType::Password,
                    value: password(),
                    is_valid: password_validity(),
                    show_error: submitted(),
                    on_change: move |e: FormEvent| password.set(e.value()),
                }

                button {
                    class: "btn btn-primary",
                    onclick: sign_in,
                    "Log in"
                }
            }
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
    fn test_email_validation() {
        assert!(email_is_valid("testuser01@gmail.com"));
        assert!(email_is_valid(" a@b.io "));
        assert!(!email_is_valid("testuser01"));
        assert!(!email_is_valid("a@b"));
        assert!(!email_is_valid("a b@c.de"));
        assert!(!email_is_valid(""));
    }

    #[test]
    fn test_password_validation() {
        assert!(password_is_valid("12345678"));
        assert!(!password_is_valid("1234567"));
    }

    #[test]
    fn test_untouched_empty_field_is_unknown() {
        assert_eq!(field_validity("", false, email_is_valid), Validity::Unknown);
    }

    #[test]
    fn test_whitespace_only_field_is_unknown_before_submit() {
        assert_eq!(field_validity("   ", false, email_is_valid), Validity::Unknown);
        assert_eq!(field_validity("   ", true, email_is_valid), Validity::Invalid);
    }

    #[test]
    fn test_empty_field_is_invalid_after_submit() {
        assert_eq!(field_validity("", true, email_is_valid), Validity::Invalid);
    }

    #[test]
    fn test_typed_field_is_checked() {
        assert_eq!(
            field_validity("short", false, password_is_valid),
            Validity::Invalid
        );
        assert_eq!(
            field_validity("long enough", false, password_is_valid),
            Validity::Valid
        );
    }
}
