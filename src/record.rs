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

//! # Zi Record Module
//!
//! Documents travel through operators as [`ZiRecord`]s: a JSON payload that
//! holds the text somewhere inside it, and a metadata map that receives the
//! computed feature row.
//!
//! ```rust
//! use zi_lexical::record::ZiRecord;
//! use serde_json::json;
//!
//! let record = ZiRecord::new("tweet-1".to_string(), json!({"text": "RT @ana hola"}));
//! assert_eq!(record.text_at("payload.text").as_deref(), Some("RT @ana hola"));
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Free-form attributes attached to a record.
pub type ZiMetadata = Map<String, Value>;

/// One document flowing through an operator.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ZiRecord {
    /// Optional stable identifier.
    pub id: Option<String>,

    /// Document content; the text lives at a dotted path such as
    /// `payload.text`, or is the payload itself when it is a plain string.
    pub payload: Value,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<ZiMetadata>,
}

impl ZiRecord {
    pub fn new(id: impl Into<Option<String>>, payload: Value) -> Self {
        ZiRecord {
            id: id.into(),
            payload,
            metadata: None,
        }
    }

    /// Shorthand for a record whose payload is `{"text": text}`.
    pub fn from_text(id: impl Into<Option<String>>, text: impl Into<String>) -> Self {
        let mut payload = Map::new();
        payload.insert("text".to_string(), Value::String(text.into()));
        Self::new(id, Value::Object(payload))
    }

    pub fn with_metadata(mut self, metadata: ZiMetadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Metadata map, created on first use.
    pub fn metadata_mut(&mut self) -> &mut ZiMetadata {
        self.metadata.get_or_insert_with(ZiMetadata::new)
    }

    pub fn metadata_value(&self, key: &str) -> Option<&Value> {
        self.metadata.as_ref().and_then(|map| map.get(key))
    }

    /// Text found at a dotted path rooted at `payload` or `metadata`.
    ///
    /// Array segments are numeric indices. A string array or object found at
    /// the end of the path is joined with single spaces. `None` when the path
    /// does not resolve to text.
    pub fn text_at(&self, path: &str) -> Option<String> {
        let mut parts = path.split('.');
        let mut current = match parts.next()? {
            "payload" => &self.payload,
            "metadata" => {
                let key = parts.next()?;
                self.metadata.as_ref()?.get(key)?
            }
            _ => return None,
        };

        for part in parts {
            current = match current {
                Value::Object(map) => map.get(part)?,
                Value::Array(items) => items.get(part.parse::<usize>().ok()?)?,
                _ => return None,
            };
        }

        match current {
            Value::String(text) => Some(text.clone()),
            Value::Array(items) => Some(join_strings(items.iter())),
            Value::Object(map) => Some(join_strings(map.values())),
            _ => None,
        }
    }
}

fn join_strings<'a>(values: impl Iterator<Item = &'a Value>) -> String {
    values
        .filter_map(Value::as_str)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Records processed together by an operator.
pub type ZiRecordBatch = Vec<ZiRecord>;
