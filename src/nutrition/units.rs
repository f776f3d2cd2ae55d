//! Serving unit recognition
//!
//! Serving units are free text such as "g", "cup (240 ml)" or
//! "piece (medium)". The planner only needs to know whether a unit is
//! grams and how to label a portion for display.

/// Unit label used for gram-denominated portions
pub const GRAM_LABEL: &str = "g";

/// The unit word with any parenthesized annotation dropped
///
/// "cup (240 ml)" -> "cup", "piece (medium)" -> "piece", "g" -> "g"
pub fn base_unit(unit: &str) -> &str {
    let without_note = unit.split('(').next().unwrap_or(unit);
    without_note.split_whitespace().next().unwrap_or("")
}

/// Whether the serving unit is grams
pub fn is_gram_unit(unit: &str) -> bool {
    matches!(
        base_unit(unit).to_lowercase().as_str(),
        "g" | "gram" | "grams" | "gm"
    )
}

/// Short label shown next to a portion quantity
pub fn short_unit_label(unit: &str) -> String {
    if is_gram_unit(unit) {
        GRAM_LABEL.to_string()
    } else {
        base_unit(unit).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_unit() {
        assert_eq!(base_unit("cup (240 ml)"), "cup");
        assert_eq!(base_unit("piece (medium)"), "piece");
        assert_eq!(base_unit("g"), "g");
        assert_eq!(base_unit("  slice "), "slice");
        assert_eq!(base_unit(""), "");
    }

    #[test]
    fn test_is_gram_unit() {
        assert!(is_gram_unit("g"));
        assert!(is_gram_unit("Grams"));
        assert!(is_gram_unit("gram (cooked)"));
        assert!(!is_gram_unit("cup"));
        assert!(!is_gram_unit("kg"));
        assert!(!is_gram_unit("piece (large)"));
    }

    #[test]
    fn test_short_unit_label() {
        assert_eq!(short_unit_label("grams"), "g");
        assert_eq!(short_unit_label("cup (240 ml)"), "cup");
        assert_eq!(short_unit_label("piece (medium)"), "piece");
    }
}
