use super::*;

#[test]
fn normalize_hex_color_strips_leading_hash() {
    assert_eq!(normalize_hex_color("#336699"), "336699");
}

#[test]
fn normalize_hex_color_lowercases() {
    assert_eq!(normalize_hex_color("#AA10FF"), "aa10ff");
}

#[test]
fn normalize_hex_color_accepts_bare_values() {
    assert_eq!(normalize_hex_color("336699"), "336699");
    assert_eq!(normalize_hex_color("  336699  "), "336699");
}
