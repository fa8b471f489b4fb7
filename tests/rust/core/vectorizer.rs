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

//! # Zi Core Tests - Batch Vectorizer
//!
//! Row order, degraded rows, fail-fast, cancellation and configuration files.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test vectorizer
//! ```

use std::io::Write;

use zi_lexical::{
    ZiBatchMode, ZiBatchVectorizer, ZiCancellationToken, ZiError, ZiLanguage,
    ZiVectorizerConfig, FEATURE_COUNT,
};

fn config(code: &str, parallel: bool) -> ZiVectorizerConfig {
    ZiVectorizerConfig {
        parallel,
        workers: Some(2),
        ..ZiVectorizerConfig::for_language(code)
    }
}

fn corpus() -> Vec<String> {
    let samples = [
        "@user2 check http://example.com now! #cool",
        "RT RT RT",
        "###...!!!",
        "Yo nunca dije eso, qué mujer tan lista 😀",
        "",
        "hola a todos",
    ];
    samples.iter().cycle().take(60).map(|s| s.to_string()).collect()
}

/// Tests that parallel and sequential runs give identical matrices.
#[test]
fn test_parallel_matches_sequential() {
    let documents = corpus();
    let sequential = ZiBatchVectorizer::new(config("es", false))
        .unwrap()
        .vectorize(&documents)
        .unwrap();
    let parallel = ZiBatchVectorizer::new(config("es", true))
        .unwrap()
        .vectorize(&documents)
        .unwrap();
    assert_eq!(sequential, parallel);
    assert_eq!(parallel.len(), documents.len());
}

/// Tests that empty documents are degraded rows in best-effort mode.
#[test]
fn test_degraded_rows_are_annotated() {
    let documents = corpus();
    let matrix = ZiBatchVectorizer::new(config("en", true))
        .unwrap()
        .vectorize(&documents)
        .unwrap();

    let expected: Vec<usize> = (0..documents.len()).filter(|i| i % 6 == 2 || i % 6 == 4).collect();
    let actual: Vec<usize> = matrix.degraded().iter().map(|row| row.index).collect();
    assert_eq!(actual, expected);

    for row in matrix.degraded() {
        assert_eq!(row.reason, ZiError::EmptyDocument);
        assert_eq!(matrix.to_rows()[row.index], vec![None; FEATURE_COUNT]);
    }
    assert!(!matrix.is_degraded(1));
    assert_eq!(matrix.row(1).and_then(|row| row.get(4)), Some(1.0));
}

/// Tests that a legitimate all-zero-ish row differs from a degraded one.
#[test]
fn test_degraded_row_is_distinguishable() {
    let matrix = ZiBatchVectorizer::new(config("en", false))
        .unwrap()
        .vectorize(&["zzz", "!!!"])
        .unwrap();
    assert!(matrix.row(0).unwrap().get(0).is_some());
    assert!(matrix.row(1).unwrap().get(0).is_none());
    assert_ne!(matrix.row(0), matrix.row(1));
}

/// Tests that fail-fast mode aborts with the offending row.
#[test]
fn test_fail_fast() {
    let config = ZiVectorizerConfig {
        mode: ZiBatchMode::FailFast,
        ..config("en", false)
    };
    let vectorizer = ZiBatchVectorizer::new(config).unwrap();
    let err = vectorizer.vectorize(&["fine", "also fine", "..."]).unwrap_err();
    match err {
        ZiError::Pipeline { stage, message } => {
            assert_eq!(stage, "row 2");
            assert!(message.contains("empty"));
        }
        other => panic!("unexpected error {other:?}"),
    }
    assert!(vectorizer.vectorize(&["fine"]).is_ok());
}

/// Tests that fail-fast also stops a parallel batch.
#[test]
fn test_fail_fast_parallel() {
    let config = ZiVectorizerConfig {
        mode: ZiBatchMode::FailFast,
        ..config("es", true)
    };
    let err = ZiBatchVectorizer::new(config)
        .unwrap()
        .vectorize(&corpus())
        .unwrap_err();
    assert!(matches!(err, ZiError::Pipeline { .. }));
}

/// Tests cancellation before the batch starts.
#[test]
fn test_cancellation() {
    let vectorizer = ZiBatchVectorizer::new(config("es", true)).unwrap();
    let token = ZiCancellationToken::new();
    let handle = token.clone();
    handle.cancel();
    assert!(token.is_cancelled());

    let err = vectorizer
        .vectorize_with_cancel(&corpus(), &token)
        .unwrap_err();
    assert_eq!(err, ZiError::Cancelled { processed: 0 });

    let fresh = ZiCancellationToken::new();
    assert!(vectorizer.vectorize_with_cancel(&corpus(), &fresh).is_ok());
}

/// Tests that an empty batch yields an empty matrix.
#[test]
fn test_empty_batch() {
    let documents: Vec<String> = Vec::new();
    let matrix = ZiBatchVectorizer::new(config("en", true))
        .unwrap()
        .vectorize(&documents)
        .unwrap();
    assert!(matrix.is_empty());
    assert!(matrix.degraded().is_empty());
}

/// Tests column access and JSON export.
#[test]
fn test_columns_and_json() {
    let matrix = ZiBatchVectorizer::new(config("en", false))
        .unwrap()
        .vectorize(&["RT RT RT", "", "rt hello"])
        .unwrap();
    assert_eq!(matrix.column(4), vec![Some(1.0), None, Some(0.5)]);
    assert!(matrix.column(FEATURE_COUNT).is_empty());
    let json = matrix.to_json();
    assert_eq!(json.as_array().map(Vec::len), Some(3));
    assert!(json[1][4].is_null());
}

/// Tests that a language error is fatal for the whole call.
#[test]
fn test_unsupported_language_is_fatal() {
    let err = ZiBatchVectorizer::new(ZiVectorizerConfig::for_language("de")).unwrap_err();
    assert_eq!(err, ZiError::UnsupportedLanguage { code: "de".into() });
}

/// Tests loading a YAML config from disk.
#[test]
fn test_config_from_yaml_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("lexical.yaml");
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, "language: en\nparallel: false\nmode: fail_fast").unwrap();

    let config = ZiVectorizerConfig::from_path(&path).unwrap();
    assert_eq!(config.mode, ZiBatchMode::FailFast);
    let vectorizer = ZiBatchVectorizer::new(config).unwrap();
    assert_eq!(vectorizer.language(), ZiLanguage::English);
}

/// Tests loading a JSON config from disk and rejecting unknown extensions.
#[test]
fn test_config_from_json_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("lexical.json");
    std::fs::write(&path, r#"{"language": "es", "strip_stopwords": true}"#).unwrap();
    let config = ZiVectorizerConfig::from_path(&path).unwrap();
    assert!(config.strip_stopwords);

    let other = dir.path().join("lexical.toml");
    std::fs::write(&other, "language = 'es'").unwrap();
    assert!(matches!(
        ZiVectorizerConfig::from_path(&other),
        Err(ZiError::Validation { .. })
    ));
    assert!(matches!(
        ZiVectorizerConfig::from_path(&dir.path().join("missing.json")),
        Err(ZiError::Io(_))
    ));
}
