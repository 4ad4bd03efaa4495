//! Theme loading from JSON documents.
//!
//! Run with: cargo test -p slate-style --features serde

#![cfg(feature = "serde")]

use pretty_assertions::assert_eq;
use slate_style::{Color, Theme, ThemeError};

#[test]
fn partial_document_keeps_default_scales() {
    let theme = Theme::from_json(r##"{ "colors": { "blue": "#0000ff" } }"##).unwrap();
    assert_eq!(theme.color("blue"), Some(Color::rgb(0, 0, 255)));
    assert_eq!(theme.color("grays.4"), Theme::default().color("grays.4"));
    assert_eq!(theme.space(5), Theme::default().space(5));
}

#[test]
fn scales_replace_defaults() {
    let theme = Theme::from_json(
        r##"{
            "colors": { "grays": ["#000", "#111", "#222"] },
            "space": [0, 2, 4],
            "font_sizes": [10, 11],
            "font_weights": [300]
        }"##,
    )
    .unwrap();
    assert_eq!(theme.color("grays.2"), Some(Color::rgb(0x22, 0x22, 0x22)));
    assert_eq!(theme.color("grays.3"), None);
    assert_eq!(theme.space(2), Some(4.0));
    assert_eq!(theme.font_size(1), Some(11.0));
    assert_eq!(theme.font_weight(0), Some(300));
}

#[test]
fn bad_color_names_its_key() {
    let err = Theme::from_json(r##"{ "colors": { "grays": ["#000", "nope"] } }"##).unwrap_err();
    match err {
        ThemeError::InvalidColor { key, .. } => assert_eq!(key, "grays.1"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn empty_scale_is_rejected() {
    let err = Theme::from_json(r#"{ "colors": { "grays": [] } }"#).unwrap_err();
    assert!(matches!(err, ThemeError::EmptyScale(ref name) if name == "grays"));
}

#[test]
fn malformed_json_is_reported() {
    let err = Theme::from_json("{ colors: ").unwrap_err();
    assert!(matches!(err, ThemeError::Json(_)));
    assert!(err.to_string().starts_with("theme is not valid JSON"));
}

#[test]
fn unknown_fields_are_rejected() {
    assert!(Theme::from_json(r#"{ "spacing": [1, 2] }"#).is_err());
}
