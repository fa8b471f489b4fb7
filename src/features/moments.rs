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

use serde::{Deserialize, Serialize};

/// Relative resolution below which a variance is treated as zero.
const VARIANCE_RESOLUTION: f64 = 1e-15;

/// Population moments of a token-length distribution.
///
/// `None` marks a statistic with no defined value: an empty sample for the
/// mean, and additionally zero variance for skewness and kurtosis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ZiLengthMoments {
    pub count: usize,
    pub mean: Option<f64>,
    pub skewness: Option<f64>,
    /// Excess (Fisher) kurtosis, normal distribution → 0.
    pub kurtosis: Option<f64>,
}

impl ZiLengthMoments {
    pub fn from_lengths(lengths: &[usize]) -> Self {
        if lengths.is_empty() {
            return Self::default();
        }

        let count = lengths.len();
        let n = count as f64;
        let mean = lengths.iter().map(|&len| len as f64).sum::<f64>() / n;

        let (mut m2, mut m3, mut m4) = (0.0, 0.0, 0.0);
        for &len in lengths {
            let delta = len as f64 - mean;
            let squared = delta * delta;
            m2 += squared;
            m3 += squared * delta;
            m4 += squared * squared;
        }
        m2 /= n;
        m3 /= n;
        m4 /= n;

        let degenerate = m2 <= (VARIANCE_RESOLUTION * mean).powi(2);
        let (skewness, kurtosis) = if degenerate {
            (None, None)
        } else {
            (Some(m3 / m2.powf(1.5)), Some(m4 / (m2 * m2) - 3.0))
        };

        Self {
            count,
            mean: Some(mean),
            skewness: skewness.filter(|value| value.is_finite()),
            kurtosis: kurtosis.filter(|value| value.is_finite()),
        }
    }

    /// Mean with the `0.0` fallback.
    pub fn mean_or_zero(&self) -> f64 {
        self.mean.unwrap_or(0.0)
    }

    pub fn skewness_or_zero(&self) -> f64 {
        self.skewness.unwrap_or(0.0)
    }

    pub fn kurtosis_or_zero(&self) -> f64 {
        self.kurtosis.unwrap_or(0.0)
    }
}
