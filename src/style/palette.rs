//! The fixed named color palette used by color tokens (`bg-blue-600`, `text-gray-800`, …).

use indexmap::IndexMap;
use std::sync::OnceLock;

use crate::models::colors::Color;

const SHADES: [u16; 10] = [50, 100, 200, 300, 400, 500, 600, 700, 800, 900];

// Shades 50 through 900, in order.
const FAMILIES: &[(&str, [&str; 10])] = &[
    ("slate", ["F8FAFC", "F1F5F9", "E2E8F0", "CBD5E1", "94A3B8", "64748B", "475569", "334155", "1E293B", "0F172A"]),
    ("gray", ["F9FAFB", "F3F4F6", "E5E7EB", "D1D5DB", "9CA3AF", "6B7280", "4B5563", "374151", "1F2937", "111827"]),
    ("red", ["FEF2F2", "FEE2E2", "FECACA", "FCA5A5", "F87171", "EF4444", "DC2626", "B91C1C", "991B1B", "7F1D1D"]),
    ("orange", ["FFF7ED", "FFEDD5", "FED7AA", "FDBA74", "FB923C", "F97316", "EA580C", "C2410C", "9A3412", "7C2D12"]),
    ("amber", ["FFFBEB", "FEF3C7", "FDE68A", "FCD34D", "FBBF24", "F59E0B", "D97706", "B45309", "92400E", "78350F"]),
    ("yellow", ["FEFCE8", "FEF9C3", "FEF08A", "FDE047", "FACC15", "EAB308", "CA8A04", "A16207", "854D0E", "713F12"]),
    ("green", ["F0FDF4", "DCFCE7", "BBF7D0", "86EFAC", "4ADE80", "22C55E", "16A34A", "15803D", "166534", "14532D"]),
    ("emerald", ["ECFDF5", "D1FAE5", "A7F3D0", "6EE7B7", "34D399", "10B981", "059669", "047857", "065F46", "064E3B"]),
    ("teal", ["F0FDFA", "CCFBF1", "99F6E4", "5EEAD4", "2DD4BF", "14B8A6", "0D9488", "0F766E", "115E59", "134E4A"]),
    ("cyan", ["ECFEFF", "CFFAFE", "A5F3FC", "67E8F9", "22D3EE", "06B6D4", "0891B2", "0E7490", "155E75", "164E63"]),
    ("sky", ["F0F9FF", "E0F2FE", "BAE6FD", "7DD3FC", "38BDF8", "0EA5E9", "0284C7", "0369A1", "075985", "0C4A6E"]),
    ("blue", ["EFF6FF", "DBEAFE", "BFDBFE", "93C5FD", "60A5FA", "3B82F6", "2563EB", "1D4ED8", "1E40AF", "1E3A8A"]),
    ("indigo", ["EEF2FF", "E0E7FF", "C7D2FE", "A5B4FC", "818CF8", "6366F1", "4F46E5", "4338CA", "3730A3", "312E81"]),
    ("violet", ["F5F3FF", "EDE9FE", "DDD6FE", "C4B5FD", "A78BFA", "8B5CF6", "7C3AED", "6D28D9", "5B21B6", "4C1D95"]),
    ("purple", ["FAF5FF", "F3E8FF", "E9D5FF", "D8B4FE", "C084FC", "A855F7", "9333EA", "7E22CE", "6B21A8", "581C87"]),
    ("pink", ["FDF2F8", "FCE7F3", "FBCFE8", "F9A8D4", "F472B6", "EC4899", "DB2777", "BE185D", "9D174D", "831843"]),
];

fn palette() -> &'static IndexMap<String, Color> {
    static PALETTE: OnceLock<IndexMap<String, Color>> = OnceLock::new();
    PALETTE.get_or_init(|| {
        let mut map = IndexMap::with_capacity(FAMILIES.len() * SHADES.len() + 2);
        map.insert("white".to_string(), Color::WHITE);
        map.insert("black".to_string(), Color::BLACK);
        for (family, hexes) in FAMILIES {
            for (shade, hex) in SHADES.iter().zip(hexes.iter()) {
                if let Some(color) = Color::from_hex(hex) {
                    map.insert(format!("{}-{}", family, shade), color);
                }
            }
        }
        map
    })
}

/// Looks up a palette entry by name (`"blue-600"`, `"white"`).
pub fn lookup(name: &str) -> Option<Color> {
    palette().get(name).copied()
}

// Colors the layout engine and assembler fall back to.
pub const GRAY_100: Color = Color::rgb(0xF3, 0xF4, 0xF6);
pub const GRAY_200: Color = Color::rgb(0xE5, 0xE7, 0xEB);
pub const GRAY_300: Color = Color::rgb(0xD1, 0xD5, 0xDB);
pub const GRAY_600: Color = Color::rgb(0x4B, 0x55, 0x63);
pub const GRAY_800: Color = Color::rgb(0x1F, 0x29, 0x37);
pub const BLUE_600: Color = Color::rgb(0x25, 0x63, 0xEB);
pub const RED_600: Color = Color::rgb(0xDC, 0x26, 0x26);
pub const SHADOW_GRAY: Color = Color::rgb(0x66, 0x66, 0x66);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_lookup() {
        assert_eq!(lookup("blue-600"), Some(BLUE_600));
        assert_eq!(lookup("gray-800"), Some(GRAY_800));
        assert_eq!(lookup("white"), Some(Color::WHITE));
        assert_eq!(lookup("blue-650"), None);
        assert_eq!(lookup("chartreuse-500"), None);
    }

    #[test]
    fn test_named_constants_match_palette() {
        for (name, constant) in [
            ("gray-100", GRAY_100),
            ("gray-200", GRAY_200),
            ("gray-300", GRAY_300),
            ("gray-600", GRAY_600),
            ("red-600", RED_600),
        ] {
            assert_eq!(lookup(name), Some(constant), "{}", name);
        }
    }
}
