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

//! # Stop-Word Module
//!
//! Lightweight, rule-based stop-word removal. The cleaner only consults a
//! [`ZiStopWords`] provider when stop-word stripping is requested, so any
//! implementation can be swapped in behind the trait.

use std::collections::HashSet;
use std::fmt;
use std::sync::OnceLock;

use crate::language::ZiLanguage;

/// Removes stop-words from already lower-cased text.
pub trait ZiStopWords: fmt::Debug + Send + Sync {
    /// Returns `text` without its stop-words, remaining words joined by single spaces.
    fn remove(&self, language: ZiLanguage, text: &str) -> String;

    /// Whether a single lower-cased word is a stop-word.
    fn is_stop_word(&self, language: ZiLanguage, word: &str) -> bool;
}

const SPANISH_STOP_WORDS: &[&str] = &[
    "a", "al", "algo", "algun", "alguna", "algunas", "alguno", "algunos", "ante", "antes",
    "como", "con", "contra", "cual", "cuando", "de", "del", "desde", "donde", "durante", "e",
    "el", "ella", "ellas", "ellos", "en", "entre", "era", "eran", "es", "esa", "esas", "ese",
    "eso", "esos", "esta", "estaba", "estado", "estan", "estar", "estas", "este", "esto",
    "estos", "fue", "fueron", "ha", "habia", "han", "hasta", "hay", "la", "las", "le", "les",
    "lo", "los", "me", "mi", "mis", "mucho", "muy", "nada", "ni", "no", "nos", "nosotros", "o",
    "otra", "otros", "para", "pero", "poco", "por", "porque", "que", "quien", "se", "sea",
    "ser", "si", "sin", "sobre", "son", "su", "sus", "tambien", "te", "tiene", "tienen", "todo",
    "todos", "tu", "tus", "un", "una", "uno", "unos", "y", "ya", "yo",
];

const ENGLISH_STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "am", "an", "and", "any", "are",
    "as", "at", "be", "because", "been", "before", "being", "below", "between", "both", "but",
    "by", "can", "could", "did", "do", "does", "doing", "down", "during", "each", "few", "for",
    "from", "further", "had", "has", "have", "having", "he", "her", "here", "hers", "herself",
    "him", "himself", "his", "how", "i", "if", "in", "into", "is", "it", "its", "itself",
    "just", "me", "more", "most", "my", "myself", "no", "nor", "not", "now", "of", "off", "on",
    "once", "only", "or", "other", "our", "ours", "ourselves", "out", "over", "own", "same",
    "she", "should", "so", "some", "such", "than", "that", "the", "their", "theirs", "them",
    "themselves", "then", "there", "these", "they", "this", "those", "through", "to", "too",
    "under", "until", "up", "very", "was", "we", "were", "what", "when", "where", "which",
    "while", "who", "whom", "why", "will", "with", "would", "you", "your", "yours", "yourself",
    "yourselves",
];

static SPANISH_SET: OnceLock<HashSet<&'static str>> = OnceLock::new();
static ENGLISH_SET: OnceLock<HashSet<&'static str>> = OnceLock::new();

/// Default stop-word provider backed by embedded word lists.
#[derive(Clone, Copy, Debug, Default)]
pub struct ZiStopWordFilter;

impl ZiStopWordFilter {
    pub fn new() -> Self {
        Self
    }

    fn table(language: ZiLanguage) -> &'static HashSet<&'static str> {
        match language {
            ZiLanguage::Spanish => {
                SPANISH_SET.get_or_init(|| SPANISH_STOP_WORDS.iter().copied().collect())
            }
            ZiLanguage::English => {
                ENGLISH_SET.get_or_init(|| ENGLISH_STOP_WORDS.iter().copied().collect())
            }
        }
    }
}

impl ZiStopWords for ZiStopWordFilter {
    fn remove(&self, language: ZiLanguage, text: &str) -> String {
        let table = Self::table(language);
        text.split_whitespace()
            .filter(|word| !table.contains(*word))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn is_stop_word(&self, language: ZiLanguage, word: &str) -> bool {
        Self::table(language).contains(word)
    }
}
