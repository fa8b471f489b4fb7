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

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

use crate::features::{FEATURE_COUNT, FEATURE_NAMES};

/// Fixed-length lexical feature vector.
///
/// Values are always finite. A component with no defined value keeps a
/// `0.0` placeholder and is listed in `undefined`, so [`ZiFeatureVector::get`]
/// reports it as missing instead of as a legitimate zero.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ZiFeatureVector {
    values: [f64; FEATURE_COUNT],
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    undefined: BTreeSet<usize>,
}

impl ZiFeatureVector {
    /// All-zero vector with every component defined.
    pub fn zeros() -> Self {
        Self {
            values: [0.0; FEATURE_COUNT],
            undefined: BTreeSet::new(),
        }
    }

    /// Vector for a row that could not be extracted: every component missing.
    pub fn undefined() -> Self {
        Self {
            values: [0.0; FEATURE_COUNT],
            undefined: (0..FEATURE_COUNT).collect(),
        }
    }

    pub fn from_values(values: [f64; FEATURE_COUNT]) -> Self {
        Self {
            values,
            undefined: BTreeSet::new(),
        }
    }

    /// Value at `index`, `None` when undefined or out of range.
    pub fn get(&self, index: usize) -> Option<f64> {
        if index >= FEATURE_COUNT || self.undefined.contains(&index) {
            return None;
        }
        Some(self.values[index])
    }

    /// Raw values, placeholders included.
    pub fn values(&self) -> &[f64; FEATURE_COUNT] {
        &self.values
    }

    pub(crate) fn set(&mut self, index: usize, value: f64) {
        self.values[index] = if value.is_finite() { value } else { 0.0 };
    }

    pub(crate) fn mark_undefined(&mut self, index: usize) {
        self.values[index] = 0.0;
        self.undefined.insert(index);
    }

    pub fn is_undefined(&self, index: usize) -> bool {
        self.undefined.contains(&index)
    }

    pub fn undefined_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.undefined.iter().copied()
    }

    /// Whether no component carries a value.
    pub fn is_degraded(&self) -> bool {
        self.undefined.len() == FEATURE_COUNT
    }

    /// Divides every component by `divisor` in place.
    pub(crate) fn normalize_by(&mut self, divisor: f64) {
        for value in self.values.iter_mut() {
            *value /= divisor;
        }
    }

    /// Sum of the defined values in `range`.
    pub fn sum(&self, range: std::ops::Range<usize>) -> f64 {
        range.filter_map(|index| self.get(index)).sum()
    }

    /// One matrix row, `None` for undefined components.
    pub fn to_row(&self) -> Vec<Option<f64>> {
        (0..FEATURE_COUNT).map(|index| self.get(index)).collect()
    }

    /// JSON array with `null` for undefined components.
    pub fn to_json(&self) -> Value {
        Value::Array(
            self.to_row()
                .into_iter()
                .map(|value| {
                    value
                        .and_then(Number::from_f64)
                        .map(Value::Number)
                        .unwrap_or(Value::Null)
                })
                .collect(),
        )
    }

    /// JSON object keyed by feature name.
    pub fn to_named_json(&self) -> Value {
        let mut map = serde_json::Map::new();
        for (name, value) in FEATURE_NAMES.iter().zip(self.to_row()) {
            let entry = value
                .and_then(Number::from_f64)
                .map(Value::Number)
                .unwrap_or(Value::Null);
            map.insert((*name).to_string(), entry);
        }
        Value::Object(map)
    }
}

impl Default for ZiFeatureVector {
    fn default() -> Self {
        Self::zeros()
    }
}
