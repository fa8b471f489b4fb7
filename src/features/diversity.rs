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

use std::collections::HashSet;

use crate::features::round4;
use crate::text::patterns::{astral_regex, url_regex};

/// Distinct-to-total character ratio, rounded to four decimals.
///
/// Emoji and other supplementary-plane code points and URL-like substrings
/// are removed first and the remainder is lower-cased. Whitespace counts as
/// a character. `None` when nothing is left to measure.
pub fn lexical_diversity(text: &str) -> Option<f64> {
    let without_astral = astral_regex().replace_all(text, "");
    let without_urls = url_regex().replace_all(&without_astral, "");
    let lowered = without_urls.to_lowercase();

    let total = lowered.chars().count();
    if total == 0 {
        return None;
    }
    let distinct = lowered.chars().collect::<HashSet<char>>().len();
    Some(round4(distinct as f64 / total as f64))
}
