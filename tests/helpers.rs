//! Value helpers behind config validation.

use compositing::model::DEFAULT_CIRCLE_COLOR;
use compositing::storage::AppConfig;
use compositing::{clamp, parse_hex_color, Color};

fn assert_color(actual: Color, expected: (u8, u8, u8, u8)) {
    let channels = [
        (actual.r, expected.0),
        (actual.g, expected.1),
        (actual.b, expected.2),
        (actual.a, expected.3),
    ];
    for (value, byte) in channels {
        assert!(
            (value - byte as f32 / 255.0).abs() < 1e-6,
            "{actual:?} != {expected:?}"
        );
    }
}

#[test]
fn clamp_passes_values_in_range() {
    assert_eq!(clamp(24.0, 1.0, 400.0), 24.0);
    assert_eq!(clamp(1.0, 1.0, 400.0), 1.0);
}

#[test]
fn clamp_pins_font_sizes_to_bounds() {
    assert_eq!(clamp(0.0, 1.0, 400.0), 1.0);
    assert_eq!(clamp(1000.0, 1.0, 400.0), 400.0);
}

#[test]
fn six_digit_colors_are_opaque() {
    let color = parse_hex_color("#2E8C57").expect("rgb");
    assert_color(color, (0x2E, 0x8C, 0x57, 0xFF));
}

#[test]
fn eight_digit_colors_carry_alpha() {
    let color = parse_hex_color("#2E8C57BF").expect("rgba");
    assert_color(color, (0x2E, 0x8C, 0x57, 0xBF));
}

#[test]
fn hash_is_optional_and_case_is_ignored() {
    let upper = parse_hex_color("#AABBCC").expect("upper");
    let lower = parse_hex_color("aabbcc").expect("lower");
    assert_eq!(upper, lower);
}

#[test]
fn surrounding_and_inner_whitespace_is_ignored() {
    let color = parse_hex_color("  12 34 56 78 ").expect("spaced");
    assert_color(color, (0x12, 0x34, 0x56, 0x78));
}

#[test]
fn malformed_colors_are_rejected() {
    for input in ["", "#", "#FFF", "#FF00", "#FF00FF0", "#FF00FF0000", "#GG0000", "#ÄÄÄ"] {
        assert!(parse_hex_color(input).is_none(), "{input:?} accepted");
    }
}

#[test]
fn configured_circle_color_is_parsed() {
    let mut config = AppConfig::default();
    assert_eq!(config.circle_color(), DEFAULT_CIRCLE_COLOR);

    config.circle.color = Some("#FF000080".into());
    assert_color(config.circle_color(), (0xFF, 0x00, 0x00, 0x80));
}
