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

//! # Text Cleaner
//!
//! Converts raw social-media text into canonical text. The stages run in a
//! fixed order because later masks rely on earlier ones:
//!
//! 1. Diacritic stripping (NFD, non-ASCII dropped, emoji kept for step 3)
//! 2. Lower-casing
//! 3. Emoji code points → `EMOJI`
//! 4. URL-like substrings → `[URL]`
//! 5. `@handle` → `MENTION`
//! 6. `#tag` → `HASTAG`
//! 7. Symbol blacklist (punctuation included) stripped, handles joined to an
//!    `@` by the stripping masked, text lower-cased again
//! 8. Standalone numeric quantities followed by whitespace removed
//! 9. Optional stop-word removal
//! 10. Whitespace collapsed and trimmed
//!
//! The result is entirely lower-case, so the masks surface as `emoji`, `url`,
//! `mention` and `hastag`, and feeding canonical text back in is a no-op.
//! A result with no content is [`ZiCleanedText::Empty`], never a string.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

use crate::language::ZiLanguage;
use crate::text::patterns::{
    emoji_regex, hashtag_regex, is_emoji, joined_mention_regex, mention_regex, numeric_regex,
    url_regex,
};
use crate::text::stopwords::{ZiStopWordFilter, ZiStopWords};

pub const EMOJI_MASK: &str = "EMOJI";
pub const URL_MASK: &str = "[URL]";
pub const MENTION_MASK: &str = "MENTION";
pub const HASHTAG_MASK: &str = "HASTAG";

/// Characters removed without replacement in step 7.
const SYMBOL_BLACKLIST: &[char] = &[
    '©', '×', '⇔', '_', '»', '«', '~', '#', '$', '€', 'Â', '\u{FFFD}', '¬', ',', ';', ':', '!',
    '¡', '’', '‘', '”', '“', '"', '\'', '`', '}', '{', '[', ']', '(', ')', '<', '>', '?', '¿',
    '°', '|', '/', '-', '+', '*', '=', '^', '%', '&', '.',
];

/// Output of the cleaner.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZiCleanedText {
    /// Non-empty canonical text.
    Canonical(String),
    /// Nothing survived cleaning.
    Empty,
}

impl ZiCleanedText {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ZiCleanedText::Canonical(text) => Some(text),
            ZiCleanedText::Empty => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, ZiCleanedText::Empty)
    }

    pub fn into_option(self) -> Option<String> {
        match self {
            ZiCleanedText::Canonical(text) => Some(text),
            ZiCleanedText::Empty => None,
        }
    }

    fn from_collapsed(text: String) -> Self {
        if text.is_empty() {
            ZiCleanedText::Empty
        } else {
            ZiCleanedText::Canonical(text)
        }
    }
}

/// Cleaner bound to one language and stop-word policy.
#[derive(Clone, Debug)]
pub struct ZiTextCleaner {
    language: ZiLanguage,
    strip_stopwords: bool,
    stopwords: Arc<dyn ZiStopWords>,
}

impl ZiTextCleaner {
    pub fn new(language: ZiLanguage, strip_stopwords: bool) -> Self {
        Self {
            language,
            strip_stopwords,
            stopwords: Arc::new(ZiStopWordFilter::new()),
        }
    }

    /// Replaces the stop-word provider.
    pub fn with_stopwords(mut self, stopwords: Arc<dyn ZiStopWords>) -> Self {
        self.stopwords = stopwords;
        self
    }

    pub fn language(&self) -> ZiLanguage {
        self.language
    }

    pub fn strips_stopwords(&self) -> bool {
        self.strip_stopwords
    }

    /// Runs the full cleaning pipeline on one document.
    pub fn clean(&self, text: &str) -> ZiCleanedText {
        let folded = transliterate(text);
        let lowered = folded.to_lowercase();
        let masked = mask_entities(&lowered);
        let stripped = strip_symbols(&masked);
        let without_numbers = numeric_regex().replace_all(&stripped, "");

        let content = if self.strip_stopwords {
            self.stopwords.remove(self.language, &without_numbers)
        } else {
            without_numbers.into_owned()
        };

        ZiCleanedText::from_collapsed(collapse_whitespace(&content))
    }

    /// Cleans many documents, preserving order.
    pub fn clean_batch<S: AsRef<str>>(&self, texts: &[S]) -> Vec<ZiCleanedText> {
        texts.iter().map(|text| self.clean(text.as_ref())).collect()
    }
}

/// One-shot cleaning with the default stop-word provider.
pub fn clean(text: &str, language: ZiLanguage, strip_stopwords: bool) -> ZiCleanedText {
    ZiTextCleaner::new(language, strip_stopwords).clean(text)
}

/// Folds accented characters to ASCII. Code points with no ASCII
/// decomposition are dropped, except emoji, which step 3 still has to see.
pub fn transliterate(text: &str) -> String {
    text.nfd().filter(|ch| ch.is_ascii() || is_emoji(*ch)).collect()
}

fn mask_entities(text: &str) -> String {
    let with_emoji = emoji_regex().replace_all(text, EMOJI_MASK);
    let with_urls = url_regex().replace_all(&with_emoji, URL_MASK);
    let with_mentions = mention_regex().replace_all(&with_urls, MENTION_MASK);
    hashtag_regex()
        .replace_all(&with_mentions, HASHTAG_MASK)
        .into_owned()
}

/// `#` is on the blacklist, so only mentions can surface here.
fn strip_symbols(text: &str) -> String {
    let stripped = text.replace(SYMBOL_BLACKLIST, "");
    joined_mention_regex()
        .replace_all(&stripped, MENTION_MASK)
        .to_lowercase()
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
