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

//! # Text Module
//!
//! Everything between a raw document and its token sequence:
//!
//! - **cleaner**: canonicalization with masked entities (URLs, mentions,
//!   hashtags, emoji) and noise stripping
//! - **stopwords**: rule-based per-language stop-word removal
//! - **tokenizer**: social-media aware tokenization of canonical text
//! - **ngram**: word n-grams over a token sequence
//! - **patterns**: compiled regular expressions shared by the above

pub mod cleaner;
pub mod ngram;
pub(crate) mod patterns;
pub mod stopwords;
pub mod tokenizer;

pub use cleaner::{clean, ZiCleanedText, ZiTextCleaner};
pub use ngram::ngrams;
pub use stopwords::{ZiStopWordFilter, ZiStopWords};
pub use tokenizer::{tokenize, ZiTweetTokenizer};
