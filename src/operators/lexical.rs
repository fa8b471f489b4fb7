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

//! # Lexical Vectorizer Operator
//!
//! Estimator-style adapter over [`ZiBatchVectorizer`]. Nothing is learned,
//! so `fit` returns the vectorizer unchanged and `transform` is the batch
//! vectorization. As a [`ZiOperator`] it writes each record's feature row
//! into metadata.

use std::collections::HashSet;

use serde_json::Value;

use crate::config::ZiVectorizerConfig;
use crate::errors::Result;
use crate::operator::ZiOperator;
use crate::record::{ZiRecord, ZiRecordBatch};
use crate::vectorizer::{ZiBatchVectorizer, ZiFeatureMatrix};

/// Metadata flag set on records whose row is undefined.
pub const DEGRADED_KEY: &str = "lexical_degraded";

/// `lexical.vectorize` operator.
#[derive(Debug)]
pub struct ZiLexicalVectorizer {
    vectorizer: ZiBatchVectorizer,
}

impl ZiLexicalVectorizer {
    pub fn new(config: ZiVectorizerConfig) -> Result<Self> {
        Ok(Self {
            vectorizer: ZiBatchVectorizer::new(config)?,
        })
    }

    pub fn config(&self) -> &ZiVectorizerConfig {
        self.vectorizer.config()
    }

    /// No-op: the lexicon is fixed.
    pub fn fit<S: AsRef<str>>(&self, _documents: &[S]) -> &Self {
        self
    }

    pub fn transform<S: AsRef<str> + Sync>(&self, documents: &[S]) -> Result<ZiFeatureMatrix> {
        self.vectorizer.vectorize(documents)
    }

    pub fn fit_transform<S: AsRef<str> + Sync>(&self, documents: &[S]) -> Result<ZiFeatureMatrix> {
        self.fit(documents).transform(documents)
    }

    /// Text of each record; a missing field counts as an empty document.
    fn texts(&self, batch: &[ZiRecord]) -> Vec<String> {
        let field = &self.config().text_field;
        batch
            .iter()
            .map(|record| {
                record.text_at(field).unwrap_or_else(|| {
                    log::debug!(
                        "record {:?} has no text at '{}'",
                        record.id.as_deref().unwrap_or("-"),
                        field
                    );
                    String::new()
                })
            })
            .collect()
    }
}

impl ZiOperator for ZiLexicalVectorizer {
    fn name(&self) -> &'static str {
        "lexical.vectorize"
    }

    fn apply(&self, mut batch: ZiRecordBatch) -> Result<ZiRecordBatch> {
        let texts = self.texts(&batch);
        let matrix = self.vectorizer.vectorize(&texts)?;
        let degraded: HashSet<usize> = matrix.degraded().iter().map(|row| row.index).collect();
        let target_key = self.config().target_key.clone();

        for (index, (record, row)) in batch.iter_mut().zip(matrix.rows()).enumerate() {
            let metadata = record.metadata_mut();
            metadata.insert(target_key.clone(), row.to_json());
            if degraded.contains(&index) {
                metadata.insert(DEGRADED_KEY.to_string(), Value::Bool(true));
            }
        }
        Ok(batch)
    }
}

/// Builds a `lexical.vectorize` operator from a JSON config object.
pub fn lexical_vectorize_factory(config: &Value) -> Result<Box<dyn ZiOperator + Send + Sync>> {
    let config = ZiVectorizerConfig::from_value(config)?;
    Ok(Box::new(ZiLexicalVectorizer::new(config)?))
}
