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

//! # Lexicon Module
//!
//! Static, language-keyed word lists used for membership-based feature
//! counting: pronoun person/number, adverb subtype, adjective polarity and
//! referent gender/generality.
//!
//! ## Design
//!
//! - Both catalogs are built once and shared read-only through an `Arc`
//! - Category names are identical across languages, membership differs
//! - Word-forms are stored lower-cased and accent-folded, which is the
//!   alphabet the cleaner emits, so lookups are plain equality tests
//! - Every lexicon also keeps a combined word → categories dictionary so a
//!   token is resolved with a single hash lookup
//!
//! ## Usage
//!
//! ```rust
//! use zi_lexical::lexicon::{ZiLexiconCatalog, ZiLexiconCategory};
//!
//! let catalog = ZiLexiconCatalog::shared();
//! let english = catalog.categories("en")?;
//! assert!(english.contains(ZiLexiconCategory::FirstPersonSingular, "me"));
//! ```

mod english;
mod spanish;

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, OnceLock};

use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::language::ZiLanguage;

/// Named word categories shared by every language.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ZiLexiconCategory {
    FirstPersonSingular,
    SecondPersonSingular,
    ThirdPersonSingular,
    FirstPersonPlural,
    SecondPersonPlural,
    ThirdPersonPlural,
    AdverbNegative,
    AdverbTime,
    AdverbPlace,
    AdverbManner,
    AdverbQuantity,
    AdjectiveNegative,
    AdjectivePositive,
    ReferentGeneral,
    ReferentMale,
    ReferentFemale,
}

impl ZiLexiconCategory {
    /// All categories in feature order.
    pub const ALL: [ZiLexiconCategory; 16] = [
        ZiLexiconCategory::FirstPersonSingular,
        ZiLexiconCategory::SecondPersonSingular,
        ZiLexiconCategory::ThirdPersonSingular,
        ZiLexiconCategory::FirstPersonPlural,
        ZiLexiconCategory::SecondPersonPlural,
        ZiLexiconCategory::ThirdPersonPlural,
        ZiLexiconCategory::AdverbNegative,
        ZiLexiconCategory::AdverbTime,
        ZiLexiconCategory::AdverbPlace,
        ZiLexiconCategory::AdverbManner,
        ZiLexiconCategory::AdverbQuantity,
        ZiLexiconCategory::AdjectiveNegative,
        ZiLexiconCategory::AdjectivePositive,
        ZiLexiconCategory::ReferentGeneral,
        ZiLexiconCategory::ReferentMale,
        ZiLexiconCategory::ReferentFemale,
    ];

    /// Stable category name.
    pub fn name(&self) -> &'static str {
        match self {
            ZiLexiconCategory::FirstPersonSingular => "first_person_singular",
            ZiLexiconCategory::SecondPersonSingular => "second_person_singular",
            ZiLexiconCategory::ThirdPersonSingular => "third_person_singular",
            ZiLexiconCategory::FirstPersonPlural => "first_person_plural",
            ZiLexiconCategory::SecondPersonPlural => "second_person_plural",
            ZiLexiconCategory::ThirdPersonPlural => "third_person_plural",
            ZiLexiconCategory::AdverbNegative => "adverb_negative",
            ZiLexiconCategory::AdverbTime => "adverb_time",
            ZiLexiconCategory::AdverbPlace => "adverb_place",
            ZiLexiconCategory::AdverbManner => "adverb_manner",
            ZiLexiconCategory::AdverbQuantity => "adverb_quantity",
            ZiLexiconCategory::AdjectiveNegative => "adjective_negative",
            ZiLexiconCategory::AdjectivePositive => "adjective_positive",
            ZiLexiconCategory::ReferentGeneral => "referent_general",
            ZiLexiconCategory::ReferentMale => "referent_male",
            ZiLexiconCategory::ReferentFemale => "referent_female",
        }
    }

    /// Position of the category in [`ZiLexiconCategory::ALL`].
    pub fn ordinal(&self) -> usize {
        *self as usize
    }

    pub fn is_pronoun(&self) -> bool {
        self.ordinal() <= ZiLexiconCategory::ThirdPersonPlural.ordinal()
    }

    pub fn is_adverb(&self) -> bool {
        matches!(
            self,
            ZiLexiconCategory::AdverbNegative
                | ZiLexiconCategory::AdverbTime
                | ZiLexiconCategory::AdverbPlace
                | ZiLexiconCategory::AdverbManner
                | ZiLexiconCategory::AdverbQuantity
        )
    }

    pub fn is_adjective(&self) -> bool {
        matches!(
            self,
            ZiLexiconCategory::AdjectiveNegative | ZiLexiconCategory::AdjectivePositive
        )
    }
}

type ZiWordTable = &'static [(ZiLexiconCategory, &'static [&'static str])];

/// Word lists of one language.
#[derive(Debug)]
pub struct ZiLexicon {
    language: ZiLanguage,
    sets: HashMap<ZiLexiconCategory, HashSet<&'static str>>,
    index: HashMap<&'static str, Vec<ZiLexiconCategory>>,
}

impl ZiLexicon {
    fn from_table(language: ZiLanguage, table: ZiWordTable) -> Self {
        let mut sets: HashMap<ZiLexiconCategory, HashSet<&'static str>> = HashMap::new();
        let mut index: HashMap<&'static str, Vec<ZiLexiconCategory>> = HashMap::new();
        for category in ZiLexiconCategory::ALL {
            sets.entry(category).or_default();
        }
        for (category, words) in table {
            let set = sets.entry(*category).or_default();
            for &word in words.iter() {
                if set.insert(word) {
                    index.entry(word).or_default().push(*category);
                }
            }
        }
        for categories in index.values_mut() {
            categories.sort();
        }
        Self {
            language,
            sets,
            index,
        }
    }

    pub fn language(&self) -> ZiLanguage {
        self.language
    }

    /// Membership test against an already lower-cased word.
    pub fn contains(&self, category: ZiLexiconCategory, word: &str) -> bool {
        self.sets
            .get(&category)
            .map(|set| set.contains(word))
            .unwrap_or(false)
    }

    /// Every category the word belongs to, in feature order.
    pub fn categories_of(&self, word: &str) -> &[ZiLexiconCategory] {
        self.index.get(word).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Word set of a category.
    pub fn words(&self, category: ZiLexiconCategory) -> Option<&HashSet<&'static str>> {
        self.sets.get(&category)
    }

    /// Iterates `(category name, word set)` pairs in feature order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &HashSet<&'static str>)> + '_ {
        ZiLexiconCategory::ALL
            .into_iter()
            .filter_map(move |category| self.sets.get(&category).map(|set| (category.name(), set)))
    }
}

/// Process-wide catalog holding one lexicon per supported language.
#[derive(Debug)]
pub struct ZiLexiconCatalog {
    spanish: ZiLexicon,
    english: ZiLexicon,
}

static SHARED_CATALOG: OnceLock<Arc<ZiLexiconCatalog>> = OnceLock::new();

impl ZiLexiconCatalog {
    /// Builds a fresh catalog from the embedded word lists.
    pub fn new() -> Self {
        Self {
            spanish: ZiLexicon::from_table(ZiLanguage::Spanish, spanish::WORDS),
            english: ZiLexicon::from_table(ZiLanguage::English, english::WORDS),
        }
    }

    /// Returns the shared catalog, building it on first use.
    pub fn shared() -> Arc<ZiLexiconCatalog> {
        SHARED_CATALOG
            .get_or_init(|| {
                log::debug!("building shared lexicon catalog");
                Arc::new(ZiLexiconCatalog::new())
            })
            .clone()
    }

    /// Lexicon for a resolved language.
    pub fn lexicon(&self, language: ZiLanguage) -> &ZiLexicon {
        match language {
            ZiLanguage::Spanish => &self.spanish,
            ZiLanguage::English => &self.english,
        }
    }

    /// Lexicon for a language code, failing on anything but `es` and `en`.
    pub fn categories(&self, code: &str) -> Result<&ZiLexicon> {
        let language = ZiLanguage::from_code(code)?;
        Ok(self.lexicon(language))
    }
}

impl Default for ZiLexiconCatalog {
    fn default() -> Self {
        Self::new()
    }
}
