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

//! # Zi Core Tests - Properties
//!
//! Invariants that must hold for every input: count sums, idempotent
//! cleaning, determinism and finite output.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test properties
//! ```

use proptest::prelude::*;
use zi_lexical::{
    clean, tokenize, ZiBatchVectorizer, ZiCleanedText, ZiError, ZiFeatureExtractor, ZiLanguage,
    ZiVectorizerConfig,
};

fn language() -> impl Strategy<Value = ZiLanguage> {
    prop_oneof![Just(ZiLanguage::Spanish), Just(ZiLanguage::English)]
}

/// Tweet-like text, handles wrapped in punctuation included.
fn tweet() -> impl Strategy<Value = String> {
    let word = prop_oneof![
        "[a-zA-Z0-9áéíóúñü,.!?¿¡'\"()\\-]{1,12}",
        "@[a-z_]{1,8}",
        "[(\"'\\-.]?@[(\"'\\-.]?[a-z_]{1,8}[)\"']?",
        "@{1,3}[a-z_]{1,8}",
        "[a-z@.()'\\-]{1,10}",
        "#[a-zA-Z]{1,8}",
        "(yo|no|nunca|i|you|never|rt|RT|mujer|woman|muy|very)",
        "(😀|🎉|👍🏽)",
        "https?://[a-z]{1,6}\\.com/[a-z]{0,4}",
        "[0-9]{1,3}(\\.[0-9])?",
    ];
    prop::collection::vec(word, 0..12).prop_map(|words| words.join(" "))
}

fn extract_raw(text: &str, language: ZiLanguage) -> Option<(usize, zi_lexical::ZiFeatureVector)> {
    let canonical = clean(text, language, false).into_option()?;
    let tokens = tokenize(&canonical);
    let extractor = ZiFeatureExtractor::for_code(language.code()).ok()?;
    let vector = extractor.extract_raw(&canonical, &tokens).ok()?;
    Some((tokens.len(), vector))
}

proptest! {
    /// Markers plus content tokens add up to the token count.
    #[test]
    fn prop_counts_sum_to_token_count(text in tweet(), language in language()) {
        if let Some((count, vector)) = extract_raw(&text, language) {
            prop_assert_eq!(vector.sum(0..6), count as f64);
        }
    }

    /// The adverb total is the sum of the adverb subtypes.
    #[test]
    fn prop_adverb_total(text in tweet(), language in language()) {
        if let Some((_, vector)) = extract_raw(&text, language) {
            prop_assert_eq!(vector.get(20), Some(vector.sum(15..20)));
        }
    }

    /// Feeding canonical text back through the cleaner changes nothing.
    #[test]
    fn prop_cleaning_is_idempotent(text in tweet(), language in language()) {
        let once = clean(&text, language, false);
        if let ZiCleanedText::Canonical(canonical) = &once {
            prop_assert_eq!(clean(canonical, language, false), once.clone());
        }
    }

    /// Cleaning and vectorizing are pure.
    #[test]
    fn prop_deterministic(text in tweet()) {
        let vectorizer = ZiBatchVectorizer::new(ZiVectorizerConfig {
            parallel: false,
            ..ZiVectorizerConfig::for_language("es")
        }).unwrap();
        prop_assert_eq!(vectorizer.vectorize_text(&text), vectorizer.vectorize_text(&text));
    }

    /// Arbitrary input never yields a non-finite value or an unexpected error.
    #[test]
    fn prop_finite_or_empty(text in any::<String>(), language in language()) {
        let vectorizer = ZiBatchVectorizer::new(ZiVectorizerConfig {
            parallel: false,
            ..ZiVectorizerConfig::for_language(language.code())
        }).unwrap();
        match vectorizer.vectorize_text(&text) {
            Ok(vector) => prop_assert!(vector.values().iter().all(|v| v.is_finite())),
            Err(err) => prop_assert_eq!(err, ZiError::EmptyDocument),
        }
    }
}
