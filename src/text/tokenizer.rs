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

//! # Tweet Tokenizer
//!
//! Social-media aware tokenization. Matched, in priority order:
//!
//! - emoticons (`:)`, `;-p`, `<3`), ASCII arrows and HTML-like tags
//! - `@handles`, `#tags` and e-mail addresses
//! - words with inner apostrophes, hyphens or underscores
//! - signed numbers with an inner separator (`3.5`, `12:30`, `-4/5`)
//! - plain word runs and ellipses
//!
//! Anything left between matches is split into grapheme clusters, so an
//! emoji sequence or a standalone punctuation mark becomes one token. Casing
//! is preserved.

use std::sync::OnceLock;

use regex::Regex;
use unicode_segmentation::UnicodeSegmentation;

use crate::text::cleaner::ZiCleanedText;

const TOKEN_PATTERN: &str = concat!(
    // emoticons
    r#"(?:[<>]?[:;=8][\-o\*']?[\)\]\(\[dDpP/:\}\{@\|\\]"#,
    r#"|[\)\]\(\[dDpP/:\}\{@\|\\][\-o\*']?[:;=8][<>]?"#,
    r#"|</?3)"#,
    // html tags and ascii arrows
    r#"|<[^>\s]+>"#,
    r#"|[\-]+>|<[\-]+"#,
    // handles, hashtags, e-mail
    r#"|(?:@[\w_]+)"#,
    r#"|(?:#+[\w_]+[\w'_\-]*[\w_]+)"#,
    r#"|[\w.+\-]+@[\w\-]+\.(?:[\w\-]\.?)+[\w\-]"#,
    // words with apostrophes or dashes
    r#"|(?:[^\W\d_](?:[^\W\d_]|['\-_])+[^\W\d_])"#,
    // numbers with an inner separator
    r#"|(?:[+\-]?\d+[,/.:\-]\d+[+\-]?)"#,
    // plain words
    r#"|(?:[\w_]+)"#,
    // ellipsis
    r#"|(?:\.(?:\s*\.)+)"#,
);

static TOKEN_RE: OnceLock<Regex> = OnceLock::new();

fn token_regex() -> &'static Regex {
    TOKEN_RE.get_or_init(|| Regex::new(TOKEN_PATTERN).expect("token pattern"))
}

/// Stateless tokenizer for canonical or raw social-media text.
#[derive(Clone, Copy, Debug, Default)]
pub struct ZiTweetTokenizer;

impl ZiTweetTokenizer {
    pub fn new() -> Self {
        Self
    }

    /// Splits text into tokens, left to right.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let mut tokens = Vec::new();
        let mut cursor = 0;
        for found in token_regex().find_iter(text) {
            push_graphemes(&text[cursor..found.start()], &mut tokens);
            tokens.push(found.as_str().to_string());
            cursor = found.end();
        }
        push_graphemes(&text[cursor..], &mut tokens);
        tokens
    }

    /// Tokenizes cleaner output; the empty sentinel yields no tokens.
    pub fn tokenize_cleaned(&self, cleaned: &ZiCleanedText) -> Vec<String> {
        match cleaned {
            ZiCleanedText::Canonical(text) => self.tokenize(text),
            ZiCleanedText::Empty => Vec::new(),
        }
    }
}

fn push_graphemes(gap: &str, tokens: &mut Vec<String>) {
    tokens.extend(
        gap.graphemes(true)
            .filter(|cluster| !cluster.chars().all(char::is_whitespace))
            .map(str::to_string),
    );
}

/// Tokenizes with the default tokenizer.
pub fn tokenize(text: &str) -> Vec<String> {
    ZiTweetTokenizer::new().tokenize(text)
}
