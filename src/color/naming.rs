//! Basic color naming
//!
//! Only the eight RGB cube corners have names; every other color is
//! labelled generically.

/// Label used for colors without a specific name
pub const GENERIC_NAME: &str = "Color";

const NAMED_COLORS: [(&str, &str); 8] = [
    ("#FF0000", "Red"),
    ("#00FF00", "Green"),
    ("#0000FF", "Blue"),
    ("#FFFF00", "Yellow"),
    ("#FF00FF", "Magenta"),
    ("#00FFFF", "Cyan"),
    ("#FFFFFF", "White"),
    ("#000000", "Black"),
];

/// Look up a human-readable name for a hex color
pub fn color_name(hex: &str) -> &'static str {
    let hex = hex.trim();
    NAMED_COLORS
        .iter()
        .find(|(code, _)| code.eq_ignore_ascii_case(hex))
        .map(|(_, name)| *name)
        .unwrap_or(GENERIC_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_corners() {
        assert_eq!(color_name("#FF0000"), "Red");
        assert_eq!(color_name("#00ffff"), "Cyan");
        assert_eq!(color_name("#000000"), "Black");
    }

    #[test]
    fn test_unnamed_color() {
        assert_eq!(color_name("#3366CC"), GENERIC_NAME);
        assert_eq!(color_name("FF0000"), GENERIC_NAME);
    }
}
