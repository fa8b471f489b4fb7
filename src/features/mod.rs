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

//! # Features Module
//!
//! Turns a token sequence into the fixed 27-dimensional lexical profile.
//!
//! ## Feature Layout
//!
//! | idx   | feature                                                    |
//! |-------|------------------------------------------------------------|
//! | 0–4   | `mention`, `url`, `hashtag`, `emoji`, `rt` marker counts   |
//! | 5     | content tokens (token count minus 0–4)                     |
//! | 6–11  | 1st/2nd/3rd person singular, then plural pronoun counts    |
//! | 12    | mean token length (markers excluded)                       |
//! | 13    | excess kurtosis of token lengths                           |
//! | 14    | skewness of token lengths                                  |
//! | 15–19 | negative, time, place, manner, quantity adverb counts      |
//! | 20    | total adverbs (sum of 15–19)                               |
//! | 21–22 | negative, positive adjective counts                        |
//! | 23–25 | general, male, female referent counts                      |
//! | 26    | lexical diversity of the cleaned text                      |
//!
//! Every component, moments and diversity included, is finally divided by
//! the raw token count.

pub mod diversity;
pub mod extractor;
pub mod moments;
pub mod vector;

pub use diversity::lexical_diversity;
pub use extractor::{ZiEntityMarker, ZiFeatureExtractor};
pub use moments::ZiLengthMoments;
pub use vector::ZiFeatureVector;

/// Number of components in a feature vector.
pub const FEATURE_COUNT: usize = 27;

pub const MENTION_COUNT: usize = 0;
pub const URL_COUNT: usize = 1;
pub const HASHTAG_COUNT: usize = 2;
pub const EMOJI_COUNT: usize = 3;
pub const RETWEET_COUNT: usize = 4;
pub const CONTENT_TOKENS: usize = 5;
pub const PRONOUN_START: usize = 6;
pub const MEAN_LENGTH: usize = 12;
pub const LENGTH_KURTOSIS: usize = 13;
pub const LENGTH_SKEWNESS: usize = 14;
pub const ADVERB_START: usize = 15;
pub const ADVERB_TOTAL: usize = 20;
pub const ADJECTIVE_START: usize = 21;
pub const REFERENT_START: usize = 23;
pub const LEXICAL_DIVERSITY: usize = 26;

/// Stable index-to-name mapping.
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "mention_count",
    "url_count",
    "hashtag_count",
    "emoji_count",
    "retweet_count",
    "content_tokens",
    "first_person_singular",
    "second_person_singular",
    "third_person_singular",
    "first_person_plural",
    "second_person_plural",
    "third_person_plural",
    "mean_token_length",
    "token_length_kurtosis",
    "token_length_skewness",
    "adverb_negative",
    "adverb_time",
    "adverb_place",
    "adverb_manner",
    "adverb_quantity",
    "adverb_total",
    "adjective_negative",
    "adjective_positive",
    "referent_general",
    "referent_male",
    "referent_female",
    "lexical_diversity",
];

/// Rounds to four decimal digits.
pub(crate) fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}
