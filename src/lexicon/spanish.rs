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

//! Spanish word lists, accent-folded. Forms that fold onto an article
//! (`el`, `lo`) are left out of the pronoun lists.

use super::{ZiLexiconCategory, ZiWordTable};

pub(super) static WORDS: ZiWordTable = &[
    (
        ZiLexiconCategory::FirstPersonSingular,
        &["yo", "me", "mi", "mis", "conmigo", "mio", "mia", "mios", "mias"],
    ),
    (
        ZiLexiconCategory::SecondPersonSingular,
        &[
            "tu", "te", "ti", "tus", "contigo", "tuyo", "tuya", "tuyos", "tuyas", "usted", "vos",
        ],
    ),
    (
        ZiLexiconCategory::ThirdPersonSingular,
        &["ella", "ello", "le", "consigo", "suyo", "suya", "suyos", "suyas"],
    ),
    (
        ZiLexiconCategory::FirstPersonPlural,
        &[
            "nosotros", "nosotras", "nos", "nuestro", "nuestra", "nuestros", "nuestras",
        ],
    ),
    (
        ZiLexiconCategory::SecondPersonPlural,
        &[
            "vosotros", "vosotras", "os", "vuestro", "vuestra", "vuestros", "vuestras", "ustedes",
        ],
    ),
    (
        ZiLexiconCategory::ThirdPersonPlural,
        &["ellos", "ellas", "les"],
    ),
    (
        ZiLexiconCategory::AdverbNegative,
        &[
            "no", "nunca", "jamas", "tampoco", "nada", "nadie", "ninguno", "ninguna", "ni",
        ],
    ),
    (
        ZiLexiconCategory::AdverbTime,
        &[
            "ahora", "antes", "despues", "luego", "ya", "hoy", "ayer", "manana", "siempre",
            "pronto", "tarde", "temprano", "todavia", "aun", "anoche", "entonces", "mientras",
            "recien", "enseguida",
        ],
    ),
    (
        ZiLexiconCategory::AdverbPlace,
        &[
            "aqui", "alli", "ahi", "alla", "aca", "cerca", "lejos", "arriba", "abajo", "delante",
            "detras", "dentro", "fuera", "encima", "debajo", "enfrente", "adelante", "atras",
        ],
    ),
    (
        ZiLexiconCategory::AdverbManner,
        &[
            "asi", "bien", "mal", "despacio", "deprisa", "rapidamente", "lentamente",
            "claramente", "facilmente", "solamente", "realmente", "tranquilamente", "igual",
            "adrede", "sinceramente",
        ],
    ),
    (
        ZiLexiconCategory::AdverbQuantity,
        &[
            "mucho", "muy", "poco", "bastante", "demasiado", "mas", "menos", "tanto", "tan",
            "casi", "algo", "todo", "apenas", "solo", "harto",
        ],
    ),
    (
        ZiLexiconCategory::AdjectiveNegative,
        &[
            "malo", "mala", "malos", "malas", "feo", "fea", "feos", "feas", "tonto", "tonta",
            "estupido", "estupida", "idiota", "horrible", "terrible", "asqueroso", "asquerosa",
            "inutil", "odioso", "odiosa", "triste", "peor", "pesimo", "pesima", "ridiculo",
            "ridicula", "patetico", "patetica", "toxico", "toxica",
        ],
    ),
    (
        ZiLexiconCategory::AdjectivePositive,
        &[
            "bueno", "buena", "buenos", "buenas", "bonito", "bonita", "lindo", "linda",
            "hermoso", "hermosa", "genial", "excelente", "increible", "maravilloso",
            "maravillosa", "feliz", "mejor", "perfecto", "perfecta", "precioso", "preciosa",
            "guapo", "guapa", "fantastico", "fantastica", "agradable",
        ],
    ),
    (
        ZiLexiconCategory::ReferentGeneral,
        &[
            "gente", "persona", "personas", "todos", "todas", "alguien", "cualquiera",
            "usuario", "usuarios", "humanos", "pueblo", "mundo",
        ],
    ),
    (
        ZiLexiconCategory::ReferentMale,
        &[
            "hombre", "hombres", "chico", "chicos", "nino", "ninos", "senor", "senores", "padre",
            "papa", "hermano", "hermanos", "hijo", "hijos", "novio", "marido", "esposo", "tio",
            "amigo", "amigos",
        ],
    ),
    (
        ZiLexiconCategory::ReferentFemale,
        &[
            "mujer", "mujeres", "chica", "chicas", "nina", "ninas", "senora", "senoras",
            "madre", "mama", "hermana", "hermanas", "hija", "hijas", "novia", "esposa", "tia",
            "amiga", "amigas",
        ],
    ),
];
