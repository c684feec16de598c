//! # Labeled Input
//!
//! A label bound to a controlled input with an optional inline validation
//! message. The component keeps no copy of the value; every change event is
//! forwarded to the owner untouched.

use cinehub_core::{InputType, Validity};
use dioxus::prelude::*;

/// Properties for Input component
#[derive(Props, Clone, PartialEq)]
pub struct InputProps {
    /// Element id; the label points at it and the error message names it
    pub id: String,

    /// Placeholder text, also used as the label text
    pub placeholder: String,

    /// Input type (text, email, password, etc.)
    #[props(default)]
    pub input_type: InputType,

    /// Current value, owned by the caller
    pub value: String,

    /// Validation state supplied by the caller
    #[props(default)]
    pub is_valid: Validity,

    /// Whether an invalid value should show its message
    #[props(default = false)]
    pub show_error: bool,

    /// Additional CSS classes
    #[props(default)]
    pub class: Option<String>,

    /// Change handler
    #[props(default)]
    pub on_change: EventHandler<FormEvent>,
}

/// Labeled input with inline validation message
#[component]
pub fn Input(props: InputProps) -> Element {
    let input_class = input_class(props.is_valid, &props.class);
    let show_message = shows_error_message(props.is_valid, props.show_error);

    rsx! {
        label {
            r#for: "{props.id}",
            "{props.placeholder}"
        }
        input {
            class: "{input_class}",
            id: "{props.id}",
            r#type: props.input_type.as_str(),
            placeholder: "{props.placeholder}",
            value: "{props.value}",
            oninput: move |e| props.on_change.call(e),
        }
        if show_message {
            span {
                class: "invalid-message",
                "{props.id} invalid"
            }
        }
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Build input class string; invalid styling only for an explicit `Invalid`
pub fn input_class(validity: Validity, extra: &Option<String>) -> String {
    let mut classes = vec!["input"];

    if validity.is_invalid() {
        classes.push("invalid");
    }

    let mut result = classes.join(" ");
    if let Some(extra) = extra {
        result.push(' ');
        result.push_str(extra);
    }

    result
}

/// Whether the inline error message is part of the output
pub fn shows_error_message(validity: Validity, show_error: bool) -> bool {
    validity.is_invalid() && show_error
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_class_plain() {
        assert_eq!(input_class(Validity::Unknown, &None), "input");
        assert_eq!(input_class(Validity::Valid, &None), "input");
    }

    #[test]
    fn test_input_class_invalid() {
        assert_eq!(input_class(Validity::Invalid, &None), "input invalid");
    }

    #[test]
    fn test_input_class_extra() {
        let class = input_class(Validity::Invalid, &Some("wide".to_string()));
        assert_eq!(class, "input invalid wide");
    }

    #[test]
    fn test_error_message_only_for_invalid_and_requested() {
        assert!(shows_error_message(Validity::Invalid, true));

        assert!(!shows_error_message(Validity::Valid, true));
        assert!(!shows_error_message(Validity::Valid, false));
        assert!(!shows_error_message(Validity::Invalid, false));
        assert!(!shows_error_message(Validity::Unknown, true));
        assert!(!shows_error_message(Validity::Unknown, false));
    }
}
