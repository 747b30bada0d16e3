//! Color-name resolution for the CLI.
//!
//! Resolves a named color or a `#rrggbb` / `#rrggbbaa` hex string into
//! straight RGBA. Unresolvable values are a configuration error
//! surfaced before any processing begins.

use ridgemap_pipeline::types::Color;

/// Resolve a color argument into straight RGBA.
///
/// Accepts a case-insensitive color name from the built-in table or a
/// `#`-prefixed hex string with 6 or 8 digits.
///
/// # Errors
///
/// Returns a message naming the unresolvable value.
pub fn resolve(value: &str) -> Result<Color, String> {
    let trimmed = value.trim();
    if let Some(hex) = trimmed.strip_prefix('#') {
        return parse_hex(hex).ok_or_else(|| {
            format!("invalid hex color '{trimmed}' (expected #rrggbb or #rrggbbaa)")
        });
    }
    named(trimmed).ok_or_else(|| format!("unknown color name '{trimmed}'"))
}

fn parse_hex(hex: &str) -> Option<Color> {
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(hex.get(range)?, 16).ok();
    match hex.len() {
        6 => Some([channel(0..2)?, channel(2..4)?, channel(4..6)?, 255]),
        8 => Some([channel(0..2)?, channel(2..4)?, channel(4..6)?, channel(6..8)?]),
        _ => None,
    }
}

fn named(name: &str) -> Option<Color> {
    let rgba = match name.to_lowercase().as_str() {
        "transparent" => (0, 0, 0, 0),
        "black" => (0, 0, 0, 255),
        "white" => (255, 255, 255, 255),
        "red" => (255, 0, 0, 255),
        "green" => (0, 128, 0, 255),
        "lime" => (0, 255, 0, 255),
        "blue" => (0, 0, 255, 255),
        "navy" => (0, 0, 128, 255),
        "yellow" => (255, 255, 0, 255),
        "gold" => (255, 215, 0, 255),
        "cyan" | "aqua" => (0, 255, 255, 255),
        "magenta" | "fuchsia" => (255, 0, 255, 255),
        "orange" => (255, 165, 0, 255),
        "purple" => (128, 0, 128, 255),
        "pink" => (255, 192, 203, 255),
        "brown" => (165, 42, 42, 255),
        "gray" | "grey" => (128, 128, 128, 255),
        "silver" => (192, 192, 192, 255),
        "ivory" => (255, 255, 240, 255),
        "beige" => (245, 245, 220, 255),
        "teal" => (0, 128, 128, 255),
        "olive" => (128, 128, 0, 255),
        "maroon" => (128, 0, 0, 255),
        "salmon" => (250, 128, 114, 255),
        "coral" => (255, 127, 80, 255),
        "khaki" => (240, 230, 140, 255),
        "indigo" => (75, 0, 130, 255),
        "violet" => (238, 130, 238, 255),
        "crimson" => (220, 20, 60, 255),
        "turquoise" => (64, 224, 208, 255),
        _ => return None,
    };
    let (r, g, b, a) = rgba;
    Some([r, g, b, a])
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn default_colors_resolve() {
        assert_eq!(resolve("white").unwrap(), [255, 255, 255, 255]);
        assert_eq!(resolve("black").unwrap(), [0, 0, 0, 255]);
    }

    #[test]
    fn names_are_case_insensitive() {
        assert_eq!(resolve("White").unwrap(), resolve("white").unwrap());
        assert_eq!(resolve("CRIMSON").unwrap(), resolve("crimson").unwrap());
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        assert_eq!(resolve("  teal ").unwrap(), [0, 128, 128, 255]);
    }

    #[test]
    fn hex_six_digits() {
        assert_eq!(resolve("#ff8000").unwrap(), [255, 128, 0, 255]);
    }

    #[test]
    fn hex_eight_digits_carry_alpha() {
        assert_eq!(resolve("#ff800080").unwrap(), [255, 128, 0, 128]);
    }

    #[test]
    fn malformed_hex_is_rejected() {
        assert!(resolve("#ff80").is_err());
        assert!(resolve("#gggggg").is_err());
    }

    #[test]
    fn unknown_name_is_rejected() {
        let err = resolve("chartreuse-ish").unwrap_err();
        assert!(err.contains("chartreuse-ish"));
    }
}
