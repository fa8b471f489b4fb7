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

use crate::errors::{Result, ZiError};

/// Space-joined word n-grams, in order of occurrence.
pub fn ngrams<S: AsRef<str>>(tokens: &[S], n: usize) -> Result<Vec<String>> {
    if n == 0 {
        return Err(ZiError::validation("ngram size must be at least 1"));
    }
    Ok(tokens
        .windows(n)
        .map(|window| {
            window
                .iter()
                .map(|token| token.as_ref())
                .collect::<Vec<&str>>()
                .join(" ")
        })
        .collect())
}
