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

//! # Zi Lexical Library
//!
//! Lexical and stylistic feature vectors for short, noisy social-media text.
//! Each document becomes a fixed 27-dimensional row: entity marker counts,
//! pronoun person/number, adverb and adjective polarity, referent gender, the
//! shape of the token-length distribution and a character diversity ratio.
//!
//! ## Module Overview
//!
//! - **language**: the closed `es`/`en` language switch
//! - **lexicon**: static per-language word categories
//! - **text**: cleaning, stop words, tweet tokenization and n-grams
//! - **features**: the 27-feature extractor and its statistics
//! - **vectorizer**: batch orchestration, degraded rows and cancellation
//! - **config**: serde-backed vectorizer configuration
//! - **record** / **operator** / **operators**: the `lexical.vectorize`
//!   record operator
//! - **enrich**: optional per-token tagging
//!
//! ## Feature Flags
//!
//! - `parallel`: batch vectorization on a Rayon pool
//! - `full`: enables all features
//!
//! ## Quick Start
//!
//! ```rust
//! use zi_lexical::{ZiBatchVectorizer, ZiVectorizerConfig};
//!
//! let vectorizer = ZiBatchVectorizer::new(ZiVectorizerConfig::for_language("en")).unwrap();
//! let matrix = vectorizer.vectorize(&["@ana check http://zi.dev now! #cool", "RT RT RT"]).unwrap();
//! assert_eq!(matrix.len(), 2);
//! ```
//!
//! ## Error Handling
//!
//! All operations return `Result<T, ZiError>`. An unsupported language fails
//! the whole call; an empty document only degrades its own row.

#![allow(non_snake_case)]

pub mod config;
pub mod enrich;
pub mod errors;
pub mod features;
pub mod language;
pub mod lexicon;
pub mod operator;
pub mod operators;
pub mod record;
pub mod text;
pub mod vectorizer;

pub use config::{ZiBatchMode, ZiVectorizerConfig};
pub use enrich::{ZiRuleTagger, ZiTagger, ZiTokenAnnotation};
pub use errors::{Result, ZiError};
pub use features::{
    lexical_diversity, ZiEntityMarker, ZiFeatureExtractor, ZiFeatureVector, ZiLengthMoments,
    FEATURE_COUNT, FEATURE_NAMES,
};
pub use language::ZiLanguage;
pub use lexicon::{ZiLexicon, ZiLexiconCatalog, ZiLexiconCategory};
pub use operator::{execute_operator, ZiOperator};
pub use operators::{lexical_vectorize_factory, ZiLexicalVectorizer};
pub use record::{ZiMetadata, ZiRecord, ZiRecordBatch};
pub use text::{
    clean, ngrams, tokenize, ZiCleanedText, ZiStopWordFilter, ZiStopWords, ZiTextCleaner,
    ZiTweetTokenizer,
};
pub use vectorizer::{
    ZiBatchVectorizer, ZiCancellationToken, ZiDegradedRow, ZiFeatureMatrix,
};
