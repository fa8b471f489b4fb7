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

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::{Result, ZiError};
use crate::language::ZiLanguage;

/// What a batch does with a row that cannot be extracted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZiBatchMode {
    /// Emit an undefined row, record it, keep going.
    #[default]
    BestEffort,
    /// Stop at the first degraded row.
    FailFast,
}

/// Configuration shared by the batch vectorizer and the record operator.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZiVectorizerConfig {
    /// ISO code of the lexicon language (`es` or `en`).
    pub language: String,
    pub strip_stopwords: bool,
    /// Process documents on a worker pool.
    pub parallel: bool,
    /// Pool size; `None` uses one worker per CPU.
    pub workers: Option<usize>,
    pub mode: ZiBatchMode,
    /// Dotted path of the text inside a record, e.g. `payload.text`.
    pub text_field: String,
    /// Metadata key that receives the feature row.
    pub target_key: String,
}

impl Default for ZiVectorizerConfig {
    fn default() -> Self {
        Self {
            language: "es".to_string(),
            strip_stopwords: false,
            parallel: true,
            workers: None,
            mode: ZiBatchMode::BestEffort,
            text_field: "payload.text".to_string(),
            target_key: "lexical_features".to_string(),
        }
    }
}

impl ZiVectorizerConfig {
    pub fn for_language(code: impl Into<String>) -> Self {
        Self {
            language: code.into(),
            ..Self::default()
        }
    }

    pub fn from_json_str(source: &str) -> Result<Self> {
        serde_json::from_str(source)
            .map_err(|e| ZiError::validation(format!("invalid JSON config: {}", e)))
    }

    pub fn from_yaml_str(source: &str) -> Result<Self> {
        serde_yaml::from_str(source)
            .map_err(|e| ZiError::validation(format!("invalid YAML config: {}", e)))
    }

    /// Builds a config from an operator config object.
    pub fn from_value(value: &Value) -> Result<Self> {
        if !value.is_object() {
            return Err(ZiError::validation("lexical config must be object"));
        }
        serde_json::from_value(value.clone())
            .map_err(|e| ZiError::validation(format!("invalid lexical config: {}", e)))
    }

    /// Loads a `.json`, `.yaml` or `.yml` file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;

        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match extension.as_str() {
            "json" => Self::from_json_str(&content),
            "yaml" | "yml" => Self::from_yaml_str(&content),
            other => Err(ZiError::validation(format!(
                "unsupported config extension '{}'",
                other
            ))),
        }
    }

    /// Checks the config and resolves the language once.
    pub fn validate(&self) -> Result<ZiLanguage> {
        if self.workers == Some(0) {
            return Err(ZiError::validation("workers must be at least 1"));
        }
        if self.text_field.trim().is_empty() {
            return Err(ZiError::validation("text_field must not be empty"));
        }
        if self.target_key.trim().is_empty() {
            return Err(ZiError::validation("target_key must not be empty"));
        }
        ZiLanguage::from_code(&self.language)
    }

    /// Effective pool size.
    pub fn worker_count(&self) -> usize {
        self.workers.unwrap_or_else(num_cpus::get).max(1)
    }
}
