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

//! # Batch Vectorizer
//!
//! Runs clean → tokenize → extract over a collection of documents and
//! assembles the feature matrix in input order. Documents are independent,
//! so with the `parallel` feature they are spread over a dedicated Rayon
//! pool. A document that yields no tokens never aborts a best-effort batch:
//! its row is fully undefined and listed in [`ZiFeatureMatrix::degraded`].

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

#[cfg(feature = "parallel")]
use rayon::prelude::*;
#[cfg(feature = "parallel")]
use rayon::{ThreadPool, ThreadPoolBuilder};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::{ZiBatchMode, ZiVectorizerConfig};
use crate::errors::{Result, ZiError};
use crate::features::{ZiFeatureExtractor, ZiFeatureVector, FEATURE_COUNT};
use crate::language::ZiLanguage;
use crate::lexicon::ZiLexiconCatalog;
use crate::text::{ZiCleanedText, ZiTextCleaner, ZiTweetTokenizer};

/// Cooperative cancellation flag shared between a caller and a running batch.
#[derive(Clone, Debug, Default)]
pub struct ZiCancellationToken {
    flag: Arc<AtomicBool>,
}

impl ZiCancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }
}

/// A row that was emitted as undefined, and why.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ZiDegradedRow {
    pub index: usize,
    pub reason: ZiError,
}

/// One feature vector per input document, in input order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ZiFeatureMatrix {
    rows: Vec<ZiFeatureVector>,
    degraded: Vec<ZiDegradedRow>,
}

impl ZiFeatureMatrix {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[ZiFeatureVector] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&ZiFeatureVector> {
        self.rows.get(index)
    }

    /// Degraded rows in ascending index order.
    pub fn degraded(&self) -> &[ZiDegradedRow] {
        &self.degraded
    }

    pub fn is_degraded(&self, index: usize) -> bool {
        self.degraded.iter().any(|row| row.index == index)
    }

    /// Plain matrix, `None` for undefined cells.
    pub fn to_rows(&self) -> Vec<Vec<Option<f64>>> {
        self.rows.iter().map(ZiFeatureVector::to_row).collect()
    }

    pub fn column(&self, feature: usize) -> Vec<Option<f64>> {
        if feature >= FEATURE_COUNT {
            return Vec::new();
        }
        self.rows.iter().map(|row| row.get(feature)).collect()
    }

    pub fn to_json(&self) -> Value {
        Value::Array(self.rows.iter().map(ZiFeatureVector::to_json).collect())
    }

    pub fn into_rows(self) -> Vec<ZiFeatureVector> {
        self.rows
    }
}

/// Batch orchestrator over the cleaner, tokenizer and extractor.
#[derive(Debug)]
pub struct ZiBatchVectorizer {
    config: ZiVectorizerConfig,
    cleaner: ZiTextCleaner,
    tokenizer: ZiTweetTokenizer,
    extractor: ZiFeatureExtractor,
    #[cfg(feature = "parallel")]
    pool: Option<ThreadPool>,
}

impl ZiBatchVectorizer {
    /// Validates the config and binds it to the process-wide lexicon.
    pub fn new(config: ZiVectorizerConfig) -> Result<Self> {
        Self::with_catalog(config, ZiLexiconCatalog::shared())
    }

    pub fn with_catalog(config: ZiVectorizerConfig, catalog: Arc<ZiLexiconCatalog>) -> Result<Self> {
        let language = config.validate()?;

        #[cfg(feature = "parallel")]
        let pool = if config.parallel {
            let pool = ThreadPoolBuilder::new()
                .num_threads(config.worker_count())
                .thread_name(|i| format!("zi-lexical-{i}"))
                .build()
                .map_err(|e| ZiError::internal(format!("failed to create thread pool: {e}")))?;
            Some(pool)
        } else {
            None
        };

        Ok(Self {
            cleaner: ZiTextCleaner::new(language, config.strip_stopwords),
            tokenizer: ZiTweetTokenizer::new(),
            extractor: ZiFeatureExtractor::new(catalog, language),
            config,
            #[cfg(feature = "parallel")]
            pool,
        })
    }

    pub fn config(&self) -> &ZiVectorizerConfig {
        &self.config
    }

    pub fn language(&self) -> ZiLanguage {
        self.extractor.language()
    }

    pub fn cleaner(&self) -> &ZiTextCleaner {
        &self.cleaner
    }

    /// Feature vector of one raw document.
    pub fn vectorize_text(&self, text: &str) -> Result<ZiFeatureVector> {
        let cleaned = self.cleaner.clean(text);
        let tokens = self.tokenizer.tokenize_cleaned(&cleaned);
        let canonical = match &cleaned {
            ZiCleanedText::Canonical(text) => text.as_str(),
            ZiCleanedText::Empty => "",
        };
        self.extractor.extract(canonical, &tokens)
    }

    pub fn vectorize<S: AsRef<str> + Sync>(&self, documents: &[S]) -> Result<ZiFeatureMatrix> {
        self.vectorize_with_cancel(documents, &ZiCancellationToken::new())
    }

    /// Vectorizes a batch, checking `cancel` before each document.
    pub fn vectorize_with_cancel<S: AsRef<str> + Sync>(
        &self,
        documents: &[S],
        cancel: &ZiCancellationToken,
    ) -> Result<ZiFeatureMatrix> {
        let abort = AtomicBool::new(false);
        let fail_fast = self.config.mode == ZiBatchMode::FailFast;

        let process = |text: &S| -> Option<Result<ZiFeatureVector>> {
            if cancel.is_cancelled() || abort.load(Ordering::Relaxed) {
                return None;
            }
            let outcome = self.vectorize_text(text.as_ref());
            if fail_fast && outcome.is_err() {
                abort.store(true, Ordering::Relaxed);
            }
            Some(outcome)
        };

        #[cfg(feature = "parallel")]
        let outcomes: Vec<Option<Result<ZiFeatureVector>>> = match &self.pool {
            Some(pool) => pool.install(|| documents.par_iter().map(process).collect()),
            None => documents.iter().map(process).collect(),
        };
        #[cfg(not(feature = "parallel"))]
        let outcomes: Vec<Option<Result<ZiFeatureVector>>> =
            documents.iter().map(process).collect();

        self.assemble(outcomes)
    }

    fn assemble(&self, outcomes: Vec<Option<Result<ZiFeatureVector>>>) -> Result<ZiFeatureMatrix> {
        let mut matrix = ZiFeatureMatrix {
            rows: Vec::with_capacity(outcomes.len()),
            degraded: Vec::new(),
        };
        let mut processed = 0usize;
        let mut skipped = false;

        for (index, outcome) in outcomes.into_iter().enumerate() {
            match outcome {
                None => {
                    skipped = true;
                    matrix.rows.push(ZiFeatureVector::undefined());
                }
                Some(Ok(vector)) => {
                    processed += 1;
                    matrix.rows.push(vector);
                }
                Some(Err(err)) if err.is_row_level() => {
                    processed += 1;
                    if self.config.mode == ZiBatchMode::FailFast {
                        return Err(ZiError::pipeline(format!("row {index}"), err.to_string()));
                    }
                    log::warn!("lexical row {} degraded: {}", index, err);
                    matrix.rows.push(ZiFeatureVector::undefined());
                    matrix.degraded.push(ZiDegradedRow { index, reason: err });
                }
                Some(Err(err)) => return Err(err),
            }
        }

        if skipped {
            log::info!("lexical batch cancelled after {} documents", processed);
            return Err(ZiError::Cancelled { processed });
        }

        log::debug!(
            "vectorized {} documents ({} degraded)",
            matrix.len(),
            matrix.degraded.len()
        );
        Ok(matrix)
    }
}
