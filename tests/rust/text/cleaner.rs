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

//! # Zi Text Tests - Cleaner
//!
//! Masking order, symbol stripping, numeric removal and the empty sentinel.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test cleaner
//! ```

use std::sync::Arc;

use zi_lexical::{clean, ZiCleanedText, ZiLanguage, ZiStopWords, ZiTextCleaner};

fn canonical(text: &str) -> String {
    clean(text, ZiLanguage::English, false)
        .into_option()
        .unwrap_or_default()
}

/// Tests that every entity kind is masked and the masks surface lower-cased.
#[test]
fn test_entities_are_masked() {
    assert_eq!(
        canonical("RT @user_1: see https://t.co/abc and www.zi.dev #Today 🎉"),
        "rt mention see url and url hastag emoji"
    );
}

/// Tests that raw entity text never survives cleaning.
#[test]
fn test_raw_entities_do_not_leak() {
    let out = canonical("@somebody #tagged http://example.com/page");
    assert!(!out.contains("somebody"));
    assert!(!out.contains("tagged"));
    assert!(!out.contains("example"));
}

/// Tests that handles separated from `@` by punctuation are still masked.
#[test]
fn test_wrapped_mentions_are_masked() {
    assert_eq!(canonical("hola @(pepe) que tal"), "hola mention que tal");
    for text in ["@-ana hola", "@.user hi", "@'bob yes", "@@user hi", "(@pepe)"] {
        let out = canonical(text);
        assert!(out.starts_with("mention"), "{text:?} -> {out:?}");
        assert!(!out.contains('@'), "{text:?} -> {out:?}");
    }
}

/// Tests that mentions longer than forty characters keep their tail.
#[test]
fn test_mention_length_limit() {
    let handle = format!("@{}", "a".repeat(45));
    assert_eq!(canonical(&handle), "mentionaaaaa");
}

/// Tests diacritic stripping on Spanish text.
#[test]
fn test_spanish_accents_are_folded() {
    let cleaned = clean("¿Cómo estás, niño?", ZiLanguage::Spanish, false);
    assert_eq!(cleaned.as_str(), Some("como estas nino"));
}

/// Tests that standalone quantities disappear but digits inside words stay.
#[test]
fn test_numeric_quantities() {
    assert_eq!(canonical("10 reasons why 2 is b4 3.5 others"), "reasons why is b4 others");
}

/// Tests that text with nothing left yields the empty sentinel, not a space.
#[test]
fn test_empty_sentinel() {
    for text in ["", "   ", "###...!!!", "¡¿()[]{}!?", "42 "] {
        let cleaned = clean(text, ZiLanguage::English, false);
        assert_eq!(cleaned, ZiCleanedText::Empty, "input {text:?}");
        assert!(cleaned.is_empty());
        assert_eq!(cleaned.as_str(), None);
    }
}

/// Tests that whitespace is collapsed and trimmed.
#[test]
fn test_whitespace_is_collapsed() {
    assert_eq!(canonical("  lots\t of\n\n   space  "), "lots of space");
}

/// Tests Spanish stop-word removal.
#[test]
fn test_spanish_stop_words() {
    let cleaner = ZiTextCleaner::new(ZiLanguage::Spanish, true);
    assert!(cleaner.strips_stopwords());
    assert_eq!(
        cleaner.clean("el perro de la casa").as_str(),
        Some("perro casa")
    );
}

#[derive(Debug)]
struct DropEverything;

impl ZiStopWords for DropEverything {
    fn remove(&self, _language: ZiLanguage, _text: &str) -> String {
        String::new()
    }

    fn is_stop_word(&self, _language: ZiLanguage, _word: &str) -> bool {
        true
    }
}

/// Tests that a custom stop-word provider is honoured.
#[test]
fn test_custom_stop_word_provider() {
    let cleaner =
        ZiTextCleaner::new(ZiLanguage::English, true).with_stopwords(Arc::new(DropEverything));
    assert_eq!(cleaner.clean("anything at all"), ZiCleanedText::Empty);

    let keep = ZiTextCleaner::new(ZiLanguage::English, false).with_stopwords(Arc::new(DropEverything));
    assert_eq!(keep.clean("anything").as_str(), Some("anything"));
}

/// Tests that cleaning canonical output again changes nothing.
#[test]
fn test_cleaning_is_idempotent() {
    let samples = [
        "@user2 check http://example.com now! #cool",
        "¡Qué día más lindo! 😀😀",
        "RT RT RT",
        "el 5 de mayo, 3.5 grados",
        "hola @(pepe) que tal",
        "@@user @'bob \"@ana\" @-x",
    ];
    for sample in samples {
        for language in ZiLanguage::ALL {
            let once = clean(sample, language, false);
            let twice = match &once {
                ZiCleanedText::Canonical(text) => clean(text, language, false),
                ZiCleanedText::Empty => ZiCleanedText::Empty,
            };
            assert_eq!(once, twice, "sample {sample:?}");
        }
    }
}
