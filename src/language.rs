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

//! # Language Module
//!
//! The closed set of languages the extractor understands. A language code is
//! resolved once, at construction time, into a [`ZiLanguage`]; every later
//! call dispatches on the enum instead of comparing strings.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{Result, ZiError};

/// Supported document languages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZiLanguage {
    Spanish,
    English,
}

impl ZiLanguage {
    /// All supported languages, in catalog order.
    pub const ALL: [ZiLanguage; 2] = [ZiLanguage::Spanish, ZiLanguage::English];

    /// Resolves an ISO 639-1 code (`es` or `en`, case-insensitive).
    pub fn from_code(code: &str) -> Result<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "es" => Ok(ZiLanguage::Spanish),
            "en" => Ok(ZiLanguage::English),
            _ => Err(ZiError::unsupported_language(code)),
        }
    }

    /// ISO 639-1 code of the language.
    pub fn code(&self) -> &'static str {
        match self {
            ZiLanguage::Spanish => "es",
            ZiLanguage::English => "en",
        }
    }
}

impl Default for ZiLanguage {
    fn default() -> Self {
        ZiLanguage::Spanish
    }
}

impl FromStr for ZiLanguage {
    type Err = ZiError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_code(s)
    }
}

impl fmt::Display for ZiLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
