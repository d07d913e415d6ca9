//! Named color palettes.
//!
//! The registry is a fixed table; lookups with an unknown id resolve to
//! [`DEFAULT_PALETTE`] instead of failing.

use serde::Serialize;

/// Id of the palette used when a lookup misses.
pub const DEFAULT_PALETTE: &str = "blue";

/// A five-color palette expressed as hex strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColorScheme {
    pub id: &'static str,
    pub primary: &'static str,
    pub secondary: &'static str,
    pub accent: &'static str,
    pub background: &'static str,
    pub text: &'static str,
}

const fn scheme(
    id: &'static str,
    primary: &'static str,
    secondary: &'static str,
    accent: &'static str,
    background: &'static str,
    text: &'static str,
) -> ColorScheme {
    ColorScheme {
        id,
        primary,
        secondary,
        accent,
        background,
        text,
    }
}

/// Every registered palette, default first.
pub static PALETTES: &[ColorScheme] = &[
    scheme("blue", "#3B82F6", "#1E40AF", "#60A5FA", "#F9FAFB", "#1F2937"),
    scheme("purple", "#8B5CF6", "#6D28D9", "#A78BFA", "#FDFCFD", "#1F2937"),
    scheme("green", "#10B981", "#047857", "#34D399", "#F9FAFB", "#1F2937"),
    scheme("dark", "#F9FAFB", "#E5E7EB", "#60A5FA", "#111827", "#F9FAFB"),
    scheme("warm", "#F59E0B", "#D97706", "#FBBF24", "#FFFBF5", "#1F2937"),
    scheme("neutral", "#6B7280", "#4B5563", "#9CA3AF", "#FFFFFF", "#111827"),
    scheme("cyan", "#06B6D4", "#0891B2", "#22D3EE", "#F9FAFB", "#1F2937"),
    scheme("gradient", "#EC4899", "#8B5CF6", "#3B82F6", "#FDFCFD", "#1F2937"),
    // Assigned to industry profiles.
    scheme("orange", "#F97316", "#C2410C", "#FB923C", "#FFFBF5", "#1F2937"),
    scheme("red", "#EF4444", "#B91C1C", "#F87171", "#FEF2F2", "#1F2937"),
    scheme("slate", "#475569", "#1E293B", "#94A3B8", "#F8FAFC", "#0F172A"),
    scheme("teal", "#14B8A6", "#0F766E", "#5EEAD4", "#F0FDFA", "#1F2937"),
    scheme("emerald", "#10B981", "#065F46", "#6EE7B7", "#FFFFFF", "#111827"),
    scheme("indigo", "#6366F1", "#4338CA", "#A5B4FC", "#F9FAFB", "#1F2937"),
];

/// Look up a palette by id, falling back to [`DEFAULT_PALETTE`].
#[must_use]
pub fn palette(id: &str) -> &'static ColorScheme {
    find_palette(id).unwrap_or_else(default_palette)
}

/// Look up a palette by id without falling back.
#[must_use]
pub fn find_palette(id: &str) -> Option<&'static ColorScheme> {
    let id = id.trim();
    PALETTES.iter().find(|p| p.id.eq_ignore_ascii_case(id))
}

/// The default palette.
#[must_use]
pub fn default_palette() -> &'static ColorScheme {
    &PALETTES[0]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_palette() {
        let p = palette("purple");
        assert_eq!(p.primary, "#8B5CF6");
        assert_eq!(p.secondary, "#6D28D9");
    }

    #[test]
    fn test_unknown_palette_resolves_to_default() {
        assert_eq!(palette("chartreuse").id, DEFAULT_PALETTE);
        assert_eq!(palette("").id, DEFAULT_PALETTE);
        assert!(find_palette("chartreuse").is_none());
    }

    #[test]
    fn test_lookup_ignores_case_and_padding() {
        assert_eq!(palette(" Teal ").id, "teal");
    }

    #[test]
    fn test_palette_ids_unique_and_hex() {
        for (i, p) in PALETTES.iter().enumerate() {
            assert!(PALETTES[i + 1..].iter().all(|q| q.id != p.id), "{}", p.id);
            for color in [p.primary, p.secondary, p.accent, p.background, p.text] {
                assert!(color.starts_with('#') && color.len() == 7, "{}: {color}", p.id);
                assert!(color[1..].chars().all(|c| c.is_ascii_hexdigit()));
            }
        }
    }
}
