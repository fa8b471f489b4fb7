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

//! # Zi Lexical Error Module
//!
//! This module defines the error types used throughout the lexical feature
//! extractor.
//!
//! ## Error Categories
//!
//! - **UnsupportedLanguage**: The language code is neither `es` nor `en`.
//!   Fatal for a whole batch, surfaced before any row is processed
//! - **EmptyDocument**: A document reduced to zero tokens after cleaning.
//!   Recoverable, the batch vectorizer turns it into a degraded row
//! - **Validation**: Invalid parameters or configuration
//! - **Operator**: Failures raised inside a record operator
//! - **Pipeline**: Batch orchestration failures (fail-fast mode)
//! - **Cancelled**: The batch was cancelled through its token
//! - **Io / Serde**: Configuration loading failures
//! - **Internal**: Unexpected internal failures
//!
//! Undefined statistics (zero-variance moments, an empty diversity
//! denominator) are not errors: they are recovered locally as documented
//! sentinel values on the feature vector.

use std::io;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Convenience result type used throughout Zi Lexical.
pub type Result<T> = std::result::Result<T, ZiError>;

/// Canonical error enumeration for Zi Lexical.
#[derive(Clone, Debug, Error, PartialEq, Serialize, Deserialize)]
pub enum ZiError {
    /// The requested language has no lexicon.
    #[error("unsupported language '{code}', expected 'es' or 'en'")]
    UnsupportedLanguage { code: String },

    /// A document produced zero tokens after cleaning.
    #[error("document is empty after cleaning")]
    EmptyDocument,

    /// Validation errors triggered by invalid parameters or inputs.
    #[error("validation error: {message}")]
    Validation { message: String },

    /// Any failure raised by an operator implementation.
    #[error("operator '{operator}' failed: {message}")]
    Operator { operator: String, message: String },

    /// Failures that occur while orchestrating a batch.
    #[error("pipeline error at stage '{stage}': {message}")]
    Pipeline { stage: String, message: String },

    /// The batch was cancelled before completion.
    #[error("batch cancelled after {processed} documents")]
    Cancelled { processed: usize },

    /// Errors originating from filesystem IO.
    #[error("io error: {0}")]
    Io(String),

    /// Wrapper for serde-style serialization issues.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Catch-all variant for unexpected situations.
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<io::Error> for ZiError {
    fn from(err: io::Error) -> Self {
        ZiError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ZiError {
    fn from(err: serde_json::Error) -> Self {
        ZiError::Serde(err.to_string())
    }
}

impl From<serde_yaml::Error> for ZiError {
    fn from(err: serde_yaml::Error) -> Self {
        ZiError::Serde(err.to_string())
    }
}

impl ZiError {
    /// Helper to construct unsupported language errors.
    pub fn unsupported_language(code: impl Into<String>) -> Self {
        ZiError::UnsupportedLanguage { code: code.into() }
    }

    /// Helper to construct simple validation errors.
    pub fn validation<T: Into<String>>(message: T) -> Self {
        ZiError::Validation {
            message: message.into(),
        }
    }

    /// Helper to construct operator errors.
    pub fn operator(name: impl Into<String>, message: impl Into<String>) -> Self {
        ZiError::Operator {
            operator: name.into(),
            message: message.into(),
        }
    }

    /// Helper to construct pipeline errors.
    pub fn pipeline(stage: impl Into<String>, message: impl Into<String>) -> Self {
        ZiError::Pipeline {
            stage: stage.into(),
            message: message.into(),
        }
    }

    /// Helper to construct internal errors.
    pub fn internal<T: Into<String>>(message: T) -> Self {
        ZiError::Internal(message.into())
    }

    /// Whether the error only affects a single row of a batch.
    pub fn is_row_level(&self) -> bool {
        matches!(self, ZiError::EmptyDocument)
    }
}
