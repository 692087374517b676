#![allow(clippy::float_cmp)]

use super::*;

// =============================================================
// ViewportConfig
// =============================================================

#[test]
fn viewport_config_defaults_are_finite_mode() {
    let cfg = ViewportConfig::default();
    assert!(!cfg.center_on_mount);
    assert!(!cfg.infinite_scroll);
    assert_eq!(cfg.grid_width, 0.0);
    assert_eq!(cfg.grid_height, 0.0);
    assert!(cfg.validate().is_ok());
    assert!(cfg.wrap_period().is_none());
}

#[test]
fn viewport_config_decodes_camel_case() {
    let cfg: ViewportConfig = serde_json::from_str(
        r#"{ "centerOnMount": true, "infiniteScroll": true, "gridWidth": 1650, "gridHeight": 960 }"#,
    )
    .expect("config should decode");
    assert!(cfg.center_on_mount);
    assert!(cfg.infinite_scroll);
    assert_eq!(cfg.grid_width, 1650.0);
    assert_eq!(cfg.grid_height, 960.0);
}

#[test]
fn viewport_config_missing_keys_use_defaults() {
    let cfg: ViewportConfig = serde_json::from_str(r#"{ "centerOnMount": true }"#).expect("config should decode");
    assert!(cfg.center_on_mount);
    assert!(!cfg.infinite_scroll);
}

#[test]
fn infinite_without_grid_is_rejected() {
    let cfg = ViewportConfig { infinite_scroll: true, grid_width: 100.0, ..Default::default() };
    let err = cfg.validate().expect_err("missing height should fail");
    assert!(matches!(err, FolioError::InvalidGrid { width, height } if width == 100.0 && height == 0.0));
}

#[test]
fn infinite_with_nan_grid_is_rejected() {
    let cfg = ViewportConfig { infinite_scroll: true, grid_width: f64::NAN, grid_height: 10.0, ..Default::default() };
    assert!(cfg.validate().is_err());
}

#[test]
fn infinite_with_grid_has_wrap_period() {
    let cfg = ViewportConfig { infinite_scroll: true, grid_width: 300.0, grid_height: 200.0, ..Default::default() };
    assert!(cfg.validate().is_ok());
    assert_eq!(cfg.wrap_period(), Some(Size::new(300.0, 200.0)));
}

#[test]
fn grid_without_infinite_has_no_wrap_period() {
    let cfg = ViewportConfig { grid_width: 300.0, grid_height: 200.0, ..Default::default() };
    assert!(cfg.wrap_period().is_none());
}

// =============================================================
// Theme / BrainConfig
// =============================================================

#[test]
fn theme_default_is_dark() {
    assert_eq!(Theme::default(), Theme::Dark);
}

#[test]
fn theme_from_name() {
    assert_eq!(Theme::from_name("light"), Some(Theme::Light));
    assert_eq!(Theme::from_name("dark"), Some(Theme::Dark));
    assert_eq!(Theme::from_name("sepia"), None);
    assert_eq!(Theme::from_name(" LIGHT "), None);
    assert_eq!(Theme::from_name("Dark"), None);
}

#[test]
fn brain_config_decodes_theme_and_seed() {
    let cfg: BrainConfig = serde_json::from_str(r#"{ "theme": "light", "seed": 7 }"#).expect("config should decode");
    assert_eq!(cfg.theme, Theme::Light);
    assert_eq!(cfg.seed, Some(7));
}

#[test]
fn brain_config_empty_object_uses_defaults() {
    let cfg: BrainConfig = serde_json::from_str("{}").expect("config should decode");
    assert_eq!(cfg, BrainConfig::default());
}

#[test]
fn brain_config_rejects_unknown_theme() {
    assert!(serde_json::from_str::<BrainConfig>(r#"{ "theme": "sepia" }"#).is_err());
}

#[test]
fn theme_names_match_config_decoding() {
    for name in ["light", "dark", "Light", "DARK", " light", "dark ", "", "sepia"] {
        let decoded = serde_json::from_str::<Theme>(&format!("\"{name}\"")).ok();
        assert_eq!(Theme::from_name(name), decoded, "name {name:?}");
    }
}
