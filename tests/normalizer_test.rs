// ABOUTME: Tests for raw dataset field normalization
// ABOUTME: Numeric extraction, vector literal lists, placeholders and image URL validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use pierre_intelligence::config::intelligence::NormalizerConfig;
use pierre_intelligence::recipes::normalizer::{
    normalize_numeric, normalize_optional_numeric, normalize_string,
};
use pierre_intelligence::recipes::{FieldKind, FieldNormalizer, NormalizedValue};

fn normalizer() -> FieldNormalizer {
    FieldNormalizer::new(&NormalizerConfig::default())
}

#[test]
fn test_numeric_without_digits_is_zero() {
    assert!(normalize_numeric(Some("abc")).abs() < f64::EPSILON);
    assert!(normalize_numeric(None).abs() < f64::EPSILON);
    assert!(normalize_numeric(Some("")).abs() < f64::EPSILON);
}

#[test]
fn test_negative_numeric_is_clamped_to_zero() {
    assert!(normalize_numeric(Some("-5.2kg")).abs() < f64::EPSILON);
    assert_eq!(normalize_optional_numeric(Some("-5.2kg")), Some(-5.2));
}

#[test]
fn test_numeric_takes_first_number_in_text() {
    assert!((normalize_numeric(Some("about 350.5 kcal (2 servings)")) - 350.5).abs() < 1e-9);
    assert!((normalize_numeric(Some(".5")) - 0.5).abs() < 1e-9);
}

#[test]
fn test_optional_numeric_distinguishes_absent_from_zero() {
    assert_eq!(normalize_optional_numeric(Some("NA")), None);
    assert_eq!(normalize_optional_numeric(None), None);
    assert_eq!(normalize_optional_numeric(Some("0")), Some(0.0));
}

#[test]
fn test_string_strips_vector_wrapper_and_quotes() {
    assert_eq!(normalize_string(Some(r#"c("Banana Bread")"#)), "Banana Bread");
    assert_eq!(normalize_string(Some("  'Soup'  ")), "Soup");
    assert_eq!(normalize_string(Some("Plain")), "Plain");
    assert_eq!(normalize_string(None), "");
}

#[test]
fn test_list_dedups_preserving_order() {
    let items = normalizer().normalize_list(Some(r#"c("a","b","a")"#));
    assert_eq!(items, vec!["a", "b"]);
}

#[test]
fn test_list_placeholders_yield_empty() {
    let normalizer = normalizer();
    for placeholder in ["character(0)", "nan", "", "c(character(0))"] {
        assert!(
            normalizer.normalize_list(Some(placeholder)).is_empty(),
            "{placeholder} should be empty"
        );
    }
    assert!(normalizer.normalize_list(None).is_empty());
}

#[test]
fn test_unquoted_list_splits_on_commas() {
    let items = normalizer().normalize_list(Some("salt, pepper , ,olive oil"));
    assert_eq!(items, vec!["salt", "pepper", "olive oil"]);
}

#[test]
fn test_list_is_capped_at_ten_items() {
    let raw = format!(
        "c({})",
        (0..15)
            .map(|index| format!("\"item {index}\""))
            .collect::<Vec<_>>()
            .join(", ")
    );
    let items = normalizer().normalize_list(Some(&raw));
    assert_eq!(items.len(), 10);
    assert_eq!(items[0], "item 0");
    assert_eq!(items[9], "item 9");
}

#[test]
fn test_quoted_items_keep_internal_commas() {
    let items = normalizer().normalize_list(Some(r#"c("Mix flour, sugar and eggs.", "Bake.")"#));
    assert_eq!(items, vec!["Mix flour, sugar and eggs.", "Bake."]);
}

#[test]
fn test_image_url_from_vector_literal() {
    let raw = r#"c("https://img.sndimg.com/food/image/upload/w_555/v1/img/recipes/38/picVfzLZo.jpg", "https://img.sndimg.com/other.jpg")"#;
    assert_eq!(
        normalizer().normalize_image_url(Some(raw)),
        "https://img.sndimg.com/food/image/upload/w_555/v1/img/recipes/38/picVfzLZo.jpg"
    );
}

#[test]
fn test_unquoted_image_url_is_accepted() {
    let raw = "https://img.sndimg.com/food/image/upload/v1/img/recipes/45/91/49/picaYxBX.jpg";
    assert_eq!(normalizer().normalize_image_url(Some(raw)), raw);
}

#[test]
fn test_short_image_url_is_rejected_even_on_matching_host() {
    let raw = r#""https://img.sndimg.com/a/b.jpg""#;
    assert!(raw.len() < 50);
    assert_eq!(normalizer().normalize_image_url(Some(raw)), "");
}

#[test]
fn test_image_url_requires_host_and_marker() {
    let normalizer = normalizer();
    let foreign = r#""https://example.com/food/image/upload/v1/img/recipes/45/91/49/pic.jpg""#;
    let no_marker = r#""https://img.sndimg.com/food/image/upload/v1/img/recipes/45/91/49/pic.png""#;
    assert_eq!(normalizer.normalize_image_url(Some(foreign)), "");
    assert_eq!(normalizer.normalize_image_url(Some(no_marker)), "");
    assert_eq!(normalizer.normalize_image_url(Some("character(0)")), "");
    assert_eq!(normalizer.normalize_image_url(None), "");
}

#[test]
fn test_normalize_dispatches_on_field_kind() {
    let normalizer = normalizer();
    assert_eq!(
        normalizer.normalize(Some("12g"), FieldKind::Numeric),
        NormalizedValue::Number(12.0)
    );
    assert_eq!(
        normalizer.normalize(Some(r#""Stew""#), FieldKind::String),
        NormalizedValue::Text("Stew".to_owned())
    );
    assert_eq!(
        normalizer.normalize(Some(r#"c("x", "y")"#), FieldKind::StringList),
        NormalizedValue::List(vec!["x".to_owned(), "y".to_owned()])
    );
}

#[test]
fn test_custom_host_is_respected() {
    let config = NormalizerConfig {
        image_host: "cdn.example.org".to_owned(),
        ..NormalizerConfig::default()
    };
    let normalizer = FieldNormalizer::new(&config);
    let raw = r#""https://cdn.example.org/recipes/images/2024/01/very-long-file-name.jpg""#;
    assert_eq!(
        normalizer.normalize_image_url(Some(raw)),
        "https://cdn.example.org/recipes/images/2024/01/very-long-file-name.jpg"
    );
}
