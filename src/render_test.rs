use super::*;

#[test]
fn transform_rounds_to_two_decimals() {
    assert_eq!(transform_css(Point::new(-1200.0, -800.0)), "translate3d(-1200px, -800px, 0)");
    assert_eq!(transform_css(Point::new(12.3456, -7.891)), "translate3d(12.35px, -7.89px, 0)");
}

#[test]
fn transform_never_prints_negative_zero() {
    assert_eq!(transform_css(Point::new(-0.0, -0.001)), "translate3d(0px, 0px, 0)");
    assert_eq!(transform_css(Point::ZERO), "translate3d(0px, 0px, 0)");
}

#[test]
fn rgba_formats_alpha_to_three_places() {
    assert_eq!(rgba([255, 74, 74], 0.5), "rgba(255,74,74,0.500)");
    assert_eq!(rgba([0, 81, 64], 0.0), "rgba(0,81,64,0.000)");
    assert_eq!(rgba([1, 2, 3], 0.123_456), "rgba(1,2,3,0.123)");
}

#[test]
fn glyph_colors_follow_theme() {
    assert_eq!(glyph_rgb(Theme::Dark, false), [160, 160, 160]);
    assert_eq!(glyph_rgb(Theme::Dark, true), [160, 160, 160]);
    assert_eq!(glyph_rgb(Theme::Light, false), [100, 100, 100]);
    assert_eq!(glyph_rgb(Theme::Light, true), [60, 60, 60]);
}

#[test]
fn outline_colors_follow_theme() {
    assert_eq!(outline_color(Theme::Dark), "rgba(120,120,120,0.5)");
    assert_eq!(outline_color(Theme::Light), "rgba(150,150,150,0.6)");
}
