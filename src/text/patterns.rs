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

use std::sync::OnceLock;

use regex::Regex;

/// First code point of the extended emoji range masked by the cleaner.
pub(crate) const EMOJI_RANGE_START: u32 = 0x1F000;
/// Last code point of the extended emoji range masked by the cleaner.
pub(crate) const EMOJI_RANGE_END: u32 = 0xE007F;

/// Permissive URL matcher: scheme, `www.` prefixes and bare `domain.tld/` forms,
/// tolerating balanced parentheses inside the path.
const URL_PATTERN: &str = concat!(
    r#"(?i)\b((?:https?://|www\d{0,3}[.]|[a-z0-9.\-]+[.][a-z]{2,4}/)"#,
    r#"(?:[^\s()<>]+|\(([^\s()<>]+|(\([^\s()<>]+\)))*\))+"#,
    r#"(?:\(([^\s()<>]+|(\([^\s()<>]+\)))*\)|[^\s`!()\[\]{};:'".,<>?«»“”‘’]))"#,
);

static EMOJI_RE: OnceLock<Regex> = OnceLock::new();
static ASTRAL_RE: OnceLock<Regex> = OnceLock::new();
static URL_RE: OnceLock<Regex> = OnceLock::new();
static MENTION_RE: OnceLock<Regex> = OnceLock::new();
static HASHTAG_RE: OnceLock<Regex> = OnceLock::new();
static NUMERIC_RE: OnceLock<Regex> = OnceLock::new();
static JOINED_MENTION_RE: OnceLock<Regex> = OnceLock::new();

pub(crate) fn is_emoji(ch: char) -> bool {
    (EMOJI_RANGE_START..=EMOJI_RANGE_END).contains(&(ch as u32))
}

pub(crate) fn emoji_regex() -> &'static Regex {
    EMOJI_RE.get_or_init(|| Regex::new(r"[\x{1F000}-\x{E007F}]").expect("emoji pattern"))
}

/// Every code point outside the Basic Multilingual Plane.
pub(crate) fn astral_regex() -> &'static Regex {
    ASTRAL_RE.get_or_init(|| Regex::new(r"[\x{10000}-\x{10FFFF}]").expect("astral pattern"))
}

pub(crate) fn url_regex() -> &'static Regex {
    URL_RE.get_or_init(|| Regex::new(URL_PATTERN).expect("url pattern"))
}

pub(crate) fn mention_regex() -> &'static Regex {
    MENTION_RE.get_or_init(|| Regex::new(r"@([A-Za-z0-9_]{1,40})").expect("mention pattern"))
}

pub(crate) fn hashtag_regex() -> &'static Regex {
    HASHTAG_RE.get_or_init(|| Regex::new(r"#([A-Za-z0-9_]{1,40})").expect("hashtag pattern"))
}

/// A handle that only joined its `@` once the symbols in between were
/// stripped. Runs of `@` are taken with it.
pub(crate) fn joined_mention_regex() -> &'static Regex {
    JOINED_MENTION_RE
        .get_or_init(|| Regex::new(r"@+([A-Za-z0-9_]{1,40})").expect("joined mention pattern"))
}

/// Standalone integer or decimal quantity followed by whitespace.
pub(crate) fn numeric_regex() -> &'static Regex {
    NUMERIC_RE.get_or_init(|| Regex::new(r"\b\d+(?:\.\d+)?\s+").expect("numeric pattern"))
}
