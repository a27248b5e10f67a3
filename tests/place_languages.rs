//! Language classification of labeled places.

use neardupe::prelude::*;
use neardupe::{detect_languages, place_languages};

fn languages(labels: &[&str], values: &[&str]) -> Vec<String> {
    let _ = env_logger::builder().is_test(true).try_init();
    place_languages(labels, values).unwrap()
}

const ADDRESS: [&str; 4] = ["house_number", "road", "city", "country"];
const PLACE: [&str; 3] = ["road", "city", "country"];

#[test]
fn test_latin_countries() {
    assert_eq!(languages(&ADDRESS, &["123", "Main St", "New York", "USA"]), vec!["en"]);
    assert_eq!(
        languages(&ADDRESS, &["15", "Rue de la Paix", "Paris", "France"]),
        vec!["fr"]
    );
    assert_eq!(
        languages(&ADDRESS, &["1", "Unter den Linden", "Berlin", "Germany"]),
        vec!["de"]
    );
}

#[test]
fn test_multilingual_country() {
    assert_eq!(
        languages(&ADDRESS, &["10", "Rue de la Loi", "Bruxelles", "Belgium"]),
        vec!["fr"]
    );
}

#[test]
fn test_cjk_scripts() {
    assert_eq!(
        languages(&["suburb", "city", "country"], &["渋谷区", "東京都", "日本"]),
        vec!["ja"]
    );
    assert_eq!(
        languages(&PLACE, &["北京市东城区东长安街", "北京市", "中国"]),
        vec!["zh"]
    );
    assert_eq!(languages(&PLACE, &["세종로", "서울", "대한민국"]), vec!["ko"]);
}

#[test]
fn test_romanized_place_defaults_to_english() {
    assert_eq!(
        languages(&["suburb", "city", "country"], &["Shibuya", "Tokyo", "Japan"]),
        vec!["en"]
    );
}

#[test]
fn test_cyrillic() {
    assert_eq!(
        languages(&ADDRESS, &["1", "Тверская улица", "Москва", "Россия"]),
        vec!["ru"]
    );
}

#[test]
fn test_malformed_input() {
    let _ = env_logger::builder().is_test(true).try_init();
    assert!(place_languages(&["road", "city"], &["Main St"]).unwrap().is_empty());
    let none: [&str; 0] = [];
    assert!(place_languages(&none, &none).unwrap().is_empty());
    assert!(detect_languages(&[]).unwrap().is_empty());
}

#[test]
fn test_components_api() {
    let components = vec![
        LabeledComponent::new("road", "Calle Mayor"),
        LabeledComponent::new("country", "Spain"),
    ];
    assert_eq!(detect_languages(&components).unwrap(), vec!["es"]);
}
