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

//! English word lists. Contractions appear without the apostrophe because
//! the cleaner strips it.

use super::{ZiLexiconCategory, ZiWordTable};

pub(super) static WORDS: ZiWordTable = &[
    (
        ZiLexiconCategory::FirstPersonSingular,
        &["i", "me", "my", "mine", "myself", "im", "ive"],
    ),
    (
        ZiLexiconCategory::SecondPersonSingular,
        &["you", "your", "yours", "yourself", "u", "ur", "youre"],
    ),
    (
        ZiLexiconCategory::ThirdPersonSingular,
        &[
            "he", "she", "it", "him", "her", "his", "hers", "its", "himself", "herself", "itself",
            "hes", "shes",
        ],
    ),
    (
        ZiLexiconCategory::FirstPersonPlural,
        &["we", "us", "our", "ours", "ourselves", "weve"],
    ),
    (
        ZiLexiconCategory::SecondPersonPlural,
        &["yourselves", "yall", "ye"],
    ),
    (
        ZiLexiconCategory::ThirdPersonPlural,
        &["they", "them", "their", "theirs", "themselves", "theyre"],
    ),
    (
        ZiLexiconCategory::AdverbNegative,
        &[
            "not", "never", "no", "nor", "neither", "nowhere", "hardly", "barely", "dont",
            "doesnt", "cant", "wont", "isnt", "arent", "didnt",
        ],
    ),
    (
        ZiLexiconCategory::AdverbTime,
        &[
            "now", "today", "yesterday", "tomorrow", "soon", "later", "already", "always",
            "still", "yet", "then", "recently", "early", "late", "tonight", "before", "after",
        ],
    ),
    (
        ZiLexiconCategory::AdverbPlace,
        &[
            "here", "there", "everywhere", "somewhere", "anywhere", "inside", "outside", "above",
            "below", "away", "nearby", "far", "abroad", "home", "upstairs", "downstairs",
        ],
    ),
    (
        ZiLexiconCategory::AdverbManner,
        &[
            "well", "badly", "fast", "quickly", "slowly", "carefully", "easily", "really",
            "seriously", "honestly", "clearly", "simply", "suddenly", "happily", "sadly",
            "literally",
        ],
    ),
    (
        ZiLexiconCategory::AdverbQuantity,
        &[
            "very", "much", "more", "less", "most", "least", "too", "enough", "quite", "so",
            "almost", "little", "lot", "lots", "only", "just", "extremely",
        ],
    ),
    (
        ZiLexiconCategory::AdjectiveNegative,
        &[
            "bad", "ugly", "stupid", "dumb", "idiot", "horrible", "terrible", "awful",
            "disgusting", "useless", "hateful", "sad", "worst", "worse", "pathetic", "ridiculous",
            "nasty", "trash", "lame", "annoying", "toxic",
        ],
    ),
    (
        ZiLexiconCategory::AdjectivePositive,
        &[
            "good", "great", "nice", "beautiful", "pretty", "lovely", "awesome", "amazing",
            "excellent", "wonderful", "happy", "best", "better", "perfect", "cool", "fantastic",
            "brilliant", "cute", "kind", "glad",
        ],
    ),
    (
        ZiLexiconCategory::ReferentGeneral,
        &[
            "people", "person", "everyone", "everybody", "someone", "somebody", "anyone",
            "anybody", "nobody", "human", "humans", "folks", "user", "users", "world",
        ],
    ),
    (
        ZiLexiconCategory::ReferentMale,
        &[
            "man", "men", "boy", "boys", "guy", "guys", "dude", "father", "dad", "brother",
            "brothers", "son", "sons", "husband", "boyfriend", "uncle", "sir", "gentleman",
            "king",
        ],
    ),
    (
        ZiLexiconCategory::ReferentFemale,
        &[
            "woman", "women", "girl", "girls", "lady", "ladies", "mother", "mom", "mum",
            "sister", "sisters", "daughter", "daughters", "wife", "girlfriend", "aunt", "madam",
            "queen",
        ],
    ),
];
