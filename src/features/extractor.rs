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

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::errors::{Result, ZiError};
use crate::features::{
    lexical_diversity, round4, ZiFeatureVector, ZiLengthMoments, ADJECTIVE_START, ADVERB_START,
    ADVERB_TOTAL, CONTENT_TOKENS, LENGTH_KURTOSIS, LENGTH_SKEWNESS, LEXICAL_DIVERSITY,
    MEAN_LENGTH, PRONOUN_START,
};
use crate::language::ZiLanguage;
use crate::lexicon::{ZiLexicon, ZiLexiconCatalog, ZiLexiconCategory};

/// Marker tokens counted in features 0–4 and excluded from length moments.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZiEntityMarker {
    Mention,
    Url,
    Hashtag,
    Emoji,
    Retweet,
}

impl ZiEntityMarker {
    pub const ALL: [ZiEntityMarker; 5] = [
        ZiEntityMarker::Mention,
        ZiEntityMarker::Url,
        ZiEntityMarker::Hashtag,
        ZiEntityMarker::Emoji,
        ZiEntityMarker::Retweet,
    ];

    /// Recognises a lower-case marker token. The cleaner's `hastag` mask and
    /// the spelled-out `hashtag` are the same marker.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "mention" => Some(ZiEntityMarker::Mention),
            "url" => Some(ZiEntityMarker::Url),
            "hashtag" | "hastag" => Some(ZiEntityMarker::Hashtag),
            "emoji" => Some(ZiEntityMarker::Emoji),
            "rt" => Some(ZiEntityMarker::Retweet),
            _ => None,
        }
    }

    /// Feature index of the marker count.
    pub fn feature_index(&self) -> usize {
        *self as usize
    }
}

/// Feature index holding the count for `category`.
fn category_feature(category: ZiLexiconCategory) -> usize {
    let ordinal = category.ordinal();
    if category.is_pronoun() {
        PRONOUN_START + ordinal
    } else if category.is_adverb() {
        ADVERB_START + ordinal - ZiLexiconCategory::AdverbNegative.ordinal()
    } else {
        // adjectives and referents are contiguous from index 21
        ADJECTIVE_START + ordinal - ZiLexiconCategory::AdjectiveNegative.ordinal()
    }
}

/// Lexicon-driven extractor bound to one language.
#[derive(Clone, Debug)]
pub struct ZiFeatureExtractor {
    catalog: Arc<ZiLexiconCatalog>,
    language: ZiLanguage,
}

impl ZiFeatureExtractor {
    pub fn new(catalog: Arc<ZiLexiconCatalog>, language: ZiLanguage) -> Self {
        Self { catalog, language }
    }

    /// Extractor over the process-wide catalog for a language code.
    pub fn for_code(code: &str) -> Result<Self> {
        let language = ZiLanguage::from_code(code)?;
        Ok(Self::new(ZiLexiconCatalog::shared(), language))
    }

    pub fn language(&self) -> ZiLanguage {
        self.language
    }

    pub fn lexicon(&self) -> &ZiLexicon {
        self.catalog.lexicon(self.language)
    }

    /// Length-normalized feature vector of one document.
    ///
    /// `text` is the cleaned document the tokens came from and only feeds the
    /// lexical diversity ratio. Every component is divided by the token count.
    pub fn extract<S: AsRef<str>>(&self, text: &str, tokens: &[S]) -> Result<ZiFeatureVector> {
        let mut vector = self.extract_raw(text, tokens)?;
        vector.normalize_by(tokens.len() as f64);
        Ok(vector)
    }

    /// Feature vector before the final division by the token count.
    pub fn extract_raw<S: AsRef<str>>(&self, text: &str, tokens: &[S]) -> Result<ZiFeatureVector> {
        if tokens.is_empty() {
            return Err(ZiError::EmptyDocument);
        }

        let lexicon = self.lexicon();
        let mut counts = [0.0_f64; 26];
        let mut lengths = Vec::with_capacity(tokens.len());

        for token in tokens {
            let word = token.as_ref().to_lowercase();
            match ZiEntityMarker::from_token(&word) {
                Some(marker) => counts[marker.feature_index()] += 1.0,
                None => lengths.push(word.chars().count()),
            }
            for &category in lexicon.categories_of(&word) {
                counts[category_feature(category)] += 1.0;
            }
        }

        let markers: f64 = counts[..CONTENT_TOKENS].iter().sum();
        counts[CONTENT_TOKENS] = tokens.len() as f64 - markers;
        counts[ADVERB_TOTAL] = counts[ADVERB_START..ADVERB_TOTAL].iter().sum();

        let moments = ZiLengthMoments::from_lengths(&lengths);
        counts[MEAN_LENGTH] = round4(moments.mean_or_zero());
        counts[LENGTH_KURTOSIS] = round4(moments.kurtosis_or_zero());
        counts[LENGTH_SKEWNESS] = round4(moments.skewness_or_zero());

        let mut vector = ZiFeatureVector::zeros();
        for (index, value) in counts.iter().enumerate() {
            vector.set(index, *value);
        }
        match lexical_diversity(text) {
            Some(ratio) => vector.set(LEXICAL_DIVERSITY, ratio),
            None => vector.mark_undefined(LEXICAL_DIVERSITY),
        }
        Ok(vector)
    }
}
