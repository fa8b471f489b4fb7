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

//! # Token Tagging
//!
//! Per-token annotations for auxiliary reporting. The feature extractor never
//! reads them. [`ZiTagger`] is the seam for a full morphological tagger;
//! [`ZiRuleTagger`] is the built-in fallback that derives coarse tags from the
//! lexicon and the stop-word table.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::language::ZiLanguage;
use crate::lexicon::{ZiLexiconCatalog, ZiLexiconCategory};
use crate::text::cleaner::transliterate;
use crate::text::{ZiStopWordFilter, ZiStopWords, ZiTweetTokenizer};

/// Annotation of a single token.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZiTokenAnnotation {
    pub text: String,
    pub lemma: String,
    /// Coarse part of speech (`PRON`, `ADV`, `ADJ`, `NOUN`, `NUM`, ...).
    pub pos: String,
    /// Fine-grained tag.
    pub tag: String,
    /// Dependency label, when the tagger parses syntax.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dep: Option<String>,
    /// Orthographic shape such as `Xxxx` or `dd`.
    pub shape: String,
    pub is_alpha: bool,
    pub is_stop: bool,
    pub is_digit: bool,
    pub is_punct: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub syllables: Option<usize>,
}

/// Text + language → ordered token annotations.
pub trait ZiTagger: fmt::Debug + Send + Sync {
    fn annotate(&self, text: &str, language: ZiLanguage) -> Result<Vec<ZiTokenAnnotation>>;
}

/// Lexicon-driven tagger with no external model.
#[derive(Clone, Debug)]
pub struct ZiRuleTagger {
    catalog: Arc<ZiLexiconCatalog>,
    stopwords: Arc<dyn ZiStopWords>,
    tokenizer: ZiTweetTokenizer,
}

impl ZiRuleTagger {
    pub fn new(catalog: Arc<ZiLexiconCatalog>) -> Self {
        Self {
            catalog,
            stopwords: Arc::new(ZiStopWordFilter::new()),
            tokenizer: ZiTweetTokenizer::new(),
        }
    }

    fn annotate_token(&self, token: &str, language: ZiLanguage) -> ZiTokenAnnotation {
        let folded = transliterate(token);
        let is_alpha = token.chars().all(char::is_alphabetic);
        let is_digit = token.chars().all(|c| c.is_ascii_digit());
        let is_punct = token.chars().all(is_punctuation);
        let is_stop = self.stopwords.is_stop_word(language, &folded);

        let category = self
            .catalog
            .lexicon(language)
            .categories_of(&folded)
            .first()
            .copied();

        let (pos, tag) = match category {
            Some(category) => (coarse_pos(category), category.name().to_string()),
            None => {
                let pos = if is_digit {
                    "NUM"
                } else if is_punct {
                    "PUNCT"
                } else if is_alpha {
                    "X"
                } else {
                    "SYM"
                };
                (pos, pos.to_string())
            }
        };

        ZiTokenAnnotation {
            text: token.to_string(),
            lemma: folded,
            pos: pos.to_string(),
            tag,
            dep: None,
            shape: shape(token),
            is_alpha,
            is_stop,
            is_digit,
            is_punct,
            syllables: if is_alpha { Some(syllables(token)) } else { None },
        }
    }
}

impl Default for ZiRuleTagger {
    fn default() -> Self {
        Self::new(ZiLexiconCatalog::shared())
    }
}

impl ZiTagger for ZiRuleTagger {
    fn annotate(&self, text: &str, language: ZiLanguage) -> Result<Vec<ZiTokenAnnotation>> {
        Ok(self
            .tokenizer
            .tokenize(&text.to_lowercase())
            .iter()
            .map(|token| self.annotate_token(token, language))
            .collect())
    }
}

fn coarse_pos(category: ZiLexiconCategory) -> &'static str {
    if category.is_pronoun() {
        "PRON"
    } else if category.is_adverb() {
        "ADV"
    } else if category.is_adjective() {
        "ADJ"
    } else {
        "NOUN"
    }
}

fn is_punctuation(c: char) -> bool {
    c.is_ascii_punctuation() || matches!(c, '¡' | '¿' | '«' | '»' | '…' | '“' | '”' | '‘' | '’')
}

/// `x` lower, `X` upper, `d` digit, anything else kept; runs capped at four.
fn shape(token: &str) -> String {
    let mut out = String::new();
    let mut last = None;
    let mut run = 0;
    for c in token.chars() {
        let mapped = if c.is_uppercase() {
            'X'
        } else if c.is_lowercase() {
            'x'
        } else if c.is_numeric() {
            'd'
        } else {
            c
        };
        if Some(mapped) == last {
            run += 1;
        } else {
            last = Some(mapped);
            run = 1;
        }
        if run <= 4 {
            out.push(mapped);
        }
    }
    out
}

/// Vowel groups after accent folding, at least one.
fn syllables(word: &str) -> usize {
    let mut count = 0;
    let mut in_vowel = false;
    for c in transliterate(word).chars() {
        let vowel = matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u' | 'y');
        if vowel && !in_vowel {
            count += 1;
        }
        in_vowel = vowel;
    }
    count.max(1)
}
