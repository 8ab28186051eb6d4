/*!
 * Corpus language and script vocabulary.
 *
 * The backend delivers lemma translations keyed by a closed set of ISO 639-1
 * language codes; [`Language`] mirrors that set and drives the sort order of
 * translation maps. [`Script`] classifies lemmas into the two dictionaries
 * of the corpus based on their identifier prefix.
 */

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::UnknownLanguage;

/// Translation languages supported by the corpus.
///
/// Declaration order is the display order of translation maps.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Arabic
    Ar,
    /// German
    De,
    /// English
    En,
    /// Spanish
    Es,
    /// French
    Fr,
    /// Italian
    It,
}

impl Language {
    /// All supported languages, in display order.
    pub const ALL: [Language; 6] = [
        Language::Ar,
        Language::De,
        Language::En,
        Language::Es,
        Language::Fr,
        Language::It,
    ];

    /// The ISO 639-1 code of this language.
    pub fn code(self) -> &'static str {
        match self {
            Language::Ar => "ar",
            Language::De => "de",
            Language::En => "en",
            Language::Es => "es",
            Language::Fr => "fr",
            Language::It => "it",
        }
    }

    /// English display name, resolved through the ISO 639 registry.
    pub fn display_name(self) -> &'static str {
        match isolang::Language::from_639_1(self.code()) {
            Some(language) => language.to_name(),
            None => self.code(),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ar" => Ok(Language::Ar),
            "de" => Ok(Language::De),
            "en" => Ok(Language::En),
            "es" => Ok(Language::Es),
            "fr" => Ok(Language::Fr),
            "it" => Ok(Language::It),
            _ => Err(UnknownLanguage(s.to_string())),
        }
    }
}

/// Script (language phase) a lemma belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Script {
    /// Demotic dictionary entries
    Demotic,
    /// Hieratic/hieroglyphic dictionary entries
    Hieratic,
}

impl Script {
    /// Classify a lemma by its identifier. Demotic lemma ids carry a `d` prefix.
    pub fn of_lemma_id(id: &str) -> Script {
        if id.starts_with('d') {
            Script::Demotic
        } else {
            Script::Hieratic
        }
    }
}

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Script::Demotic => write!(f, "demotic"),
            Script::Hieratic => write!(f, "hieratic"),
        }
    }
}
