//! Copyright © 2025-2026 Wenze Wei. All Rights Reserved.
//!
//! This file is part of Zi.
//! The Zi project belongs to the Dunimd Team.
//!
//! Licensed under the Apache License, Version 2.0 (the "License");
//! You may not use this file except in compliance with the License.
//! You may obtain a copy of the License at
//!
//!     http://www.apache.org/licenses/LICENSE-2.0
//!
//! Unless required by applicable law or agreed to in writing, software
//! distributed under the License is distributed on an "AS IS" BASIS,
//! WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//! See the License for the specific language governing permissions and
//! limitations under the License.

//! # Zi Feature Tests - Extractor
//!
//! The 27-feature layout end to end: clean, tokenize, extract.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test extractor
//! ```

use zi_lexical::{
    clean, tokenize, ZiError, ZiFeatureExtractor, ZiFeatureVector, ZiLanguage, ZiLexiconCatalog,
    FEATURE_COUNT, FEATURE_NAMES,
};

fn extractor(code: &str) -> ZiFeatureExtractor {
    ZiFeatureExtractor::for_code(code).unwrap()
}

/// Cleans, tokenizes and extracts without the final normalization.
fn raw(code: &str, text: &str) -> ZiFeatureVector {
    let extractor = extractor(code);
    let canonical = clean(text, extractor.language(), false)
        .into_option()
        .unwrap_or_default();
    extractor
        .extract_raw(&canonical, &tokenize(&canonical))
        .unwrap()
}

/// Tests the stable name table.
#[test]
fn test_feature_names() {
    assert_eq!(FEATURE_NAMES.len(), FEATURE_COUNT);
    assert_eq!(FEATURE_NAMES[0], "mention_count");
    assert_eq!(FEATURE_NAMES[20], "adverb_total");
    assert_eq!(FEATURE_NAMES[26], "lexical_diversity");
}

/// Tests mention, URL and hashtag counts on a typical tweet.
#[test]
fn test_entity_counts() {
    let vector = raw("en", "@user2 check http://example.com now! #cool");
    assert_eq!(vector.get(0), Some(1.0));
    assert_eq!(vector.get(1), Some(1.0));
    assert_eq!(vector.get(2), Some(1.0));
    assert_eq!(vector.get(3), Some(0.0));
    assert_eq!(vector.get(5), Some(2.0));
}

/// Tests a retweet-only document.
#[test]
fn test_retweet_only_document() {
    let vector = raw("en", "RT RT RT");
    assert_eq!(vector.get(4), Some(3.0));
    assert_eq!(vector.get(5), Some(0.0));
    for index in (6..12).chain(15..26) {
        assert_eq!(vector.get(index), Some(0.0), "feature {index}");
    }
}

/// Tests the zero-variance fallback for kurtosis and skewness.
#[test]
fn test_identical_lengths() {
    let vector = raw("en", "blue gray pink");
    assert_eq!(vector.get(12), Some(4.0));
    assert_eq!(vector.get(13), Some(0.0));
    assert_eq!(vector.get(14), Some(0.0));
}

/// Tests that moments ignore marker tokens and are rounded.
#[test]
fn test_moments_exclude_markers() {
    let vector = raw("en", "@ana ab abcd #x");
    // lengths [2, 4]: mean 3, skewness 0, excess kurtosis -2
    assert_eq!(vector.get(12), Some(3.0));
    assert_eq!(vector.get(13), Some(-2.0));
    assert_eq!(vector.get(14), Some(0.0));
}

/// Tests English pronoun, adverb, adjective and referent counts.
#[test]
fn test_english_categories() {
    let vector = raw("en", "I never said you were stupid, she is a nice woman");
    assert_eq!(vector.get(6), Some(1.0));
    assert_eq!(vector.get(7), Some(1.0));
    assert!(vector.get(8).unwrap_or(0.0) >= 1.0);
    assert_eq!(vector.get(15), Some(1.0));
    assert_eq!(vector.get(21), Some(1.0));
    assert_eq!(vector.get(22), Some(1.0));
    assert_eq!(vector.get(25), Some(1.0));
}

/// Tests Spanish category counts on accent-folded text.
#[test]
fn test_spanish_categories() {
    let vector = raw("es", "Nosotros nunca vimos a ese hombre aquí");
    assert_eq!(vector.get(9), Some(1.0));
    assert_eq!(vector.get(15), Some(1.0));
    assert_eq!(vector.get(17), Some(1.0));
    assert_eq!(vector.get(24), Some(1.0));
}

/// Tests that Spanish articles are not counted as pronouns.
#[test]
fn test_spanish_articles_are_not_pronouns() {
    let vector = raw("es", "el perro y la casa lo vio");
    assert_eq!(vector.sum(6..12), 0.0);
    assert_eq!(raw("es", "ella lo vio").get(8), Some(1.0));
}

/// Tests the derived count invariants on the raw vector.
#[test]
fn test_count_invariants() {
    let vector = raw("es", "RT @pepe: hoy no quiero nada de nada 😡 http://x.co/a #mal");
    // rt mention hoy no quiero nada de nada emoji url hastag
    assert_eq!(vector.sum(0..6), 11.0);
    assert_eq!(vector.get(5), Some(6.0));
    assert_eq!(vector.get(15), Some(3.0));
    assert_eq!(vector.get(20), Some(vector.sum(15..20)));
}

/// Tests that the final vector is the raw one divided by the token count.
#[test]
fn test_length_normalization() {
    let extractor = extractor("en");
    let canonical = "mention i love it so much";
    let tokens = tokenize(canonical);
    let raw = extractor.extract_raw(canonical, &tokens).unwrap();
    let normalized = extractor.extract(canonical, &tokens).unwrap();
    let count = tokens.len() as f64;
    for index in 0..FEATURE_COUNT {
        let expected = raw.get(index).unwrap() / count;
        assert!((normalized.get(index).unwrap() - expected).abs() < 1e-12);
    }
    let sum: f64 = normalized.sum(0..6);
    assert!((sum - 1.0).abs() < 1e-12);
}

/// Tests lexical diversity on the cleaned text.
#[test]
fn test_lexical_diversity_feature() {
    let vector = raw("en", "aaaa");
    assert_eq!(vector.get(26), Some(0.25));
}

/// Tests that zero tokens are reported, not divided by.
#[test]
fn test_empty_document() {
    let extractor = extractor("es");
    let tokens: Vec<String> = Vec::new();
    assert_eq!(extractor.extract("", &tokens), Err(ZiError::EmptyDocument));
    assert_eq!(extractor.extract_raw("", &tokens), Err(ZiError::EmptyDocument));
}

/// Tests that every value is finite, even on odd input.
#[test]
fn test_values_are_finite() {
    for text in ["x", "😀", "a bb ccc dddd eeeee", "rt", "@a"] {
        let vector = raw("en", text);
        assert!(vector.values().iter().all(|value| value.is_finite()), "{text}");
    }
}

/// Tests a caller-owned catalog.
#[test]
fn test_owned_catalog() {
    let catalog = std::sync::Arc::new(ZiLexiconCatalog::new());
    let extractor = ZiFeatureExtractor::new(catalog, ZiLanguage::English);
    let vector = extractor.extract("we", &["we"]).unwrap();
    assert_eq!(vector.get(9), Some(1.0));
}
