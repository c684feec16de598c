//! Display formatting helpers
//!
//! Small pure functions the views use to turn movie fields into text.

/// Join a sequence of strings as a human-readable comma list
///
/// An empty sequence yields an empty string and a single element is returned
/// unchanged.
///
/// # Example
///
/// ```
/// use cinehub_core::comma_list;
///
/// assert_eq!(comma_list(&["Drama", "Noir"]), "Drama, Noir");
/// ```
pub fn comma_list<S: AsRef<str>>(items: &[S]) -> String {
    items
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Format a mean rating with exactly two decimal places
pub fn format_mean_rating(rating: f64) -> String {
    format!("{:.2}", rating)
}

/// Format a runtime in minutes
pub fn format_runtime(minutes: u32) -> String {
    format!("{} minutes", minutes)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_comma_list_empty() {
        let items: [&str; 0] = [];
        assert_eq!(comma_list(&items), "");
    }

    #[test]
    fn test_comma_list_single() {
        assert_eq!(comma_list(&["x"]), "x");
    }

    #[test]
    fn test_comma_list_many() {
        assert_eq!(comma_list(&["x", "y", "z"]), "x, y, z");
    }

    #[test]
    fn test_comma_list_owned_strings() {
        let cast = vec!["A".to_string(), "B".to_string()];
        assert_eq!(comma_list(&cast), "A, B");
    }

    #[test]
    fn test_format_mean_rating() {
        assert_eq!(format_mean_rating(7.5), "7.50");
        assert_eq!(format_mean_rating(8.333), "8.33");
        assert_eq!(format_mean_rating(0.0), "0.00");
        assert_eq!(format_mean_rating(10.0), "10.00");
    }

    #[test]
    fn test_format_runtime() {
        assert_eq!(format_runtime(112), "112 minutes");
    }
}
