/*!
 * Dictionary entry model ("lemma").
 *
 * Plain data holder for one dictionary entry plus derived convenience
 * accessors: bibliography extraction from the passport, attestation
 * counting, script classification, and hieroglyph collection.
 */

use std::collections::BTreeMap;

use log::debug;
use once_cell::sync::OnceCell;

use crate::language::{Language, Script};
use crate::model::attestation::{AttestedTimespan, Period};
use crate::model::word::{Glyphs, Word};
use crate::model::ModelObject;
use crate::passport::Passport;

/// The passport locator where bibliographical information is stored.
pub const PASSPORT_PROP_BIBL: &str = "bibliography.bibliographical_text_field";

/// One dictionary entry.
///
/// Loaded from a backend record and immutable afterwards; the bibliography
/// list is derived from the passport on first access and cached for the
/// lifetime of the instance.
#[derive(Debug, Clone, Default)]
pub struct Lemma {
    /// Unique entry identifier
    pub id: String,
    /// Citation form of the entry
    pub name: String,
    /// Metadata tree attached by the backend
    pub passport: Option<Passport>,
    /// Translations keyed by language, in language display order
    pub translations: BTreeMap<Language, Vec<String>>,
    /// Words making up the entry, in reading order
    pub words: Vec<Word>,
    /// Attestations aggregated per historical timespan
    pub attestations: Vec<AttestedTimespan>,
    /// First and last year the entry is attested
    pub timespan: Option<Period>,
    /// Memoized bibliography list
    bibliography: OnceCell<Vec<String>>,
}

impl Lemma {
    /// Create an empty entry with the given identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Lemma {
            id: id.into(),
            ..Lemma::default()
        }
    }

    /// Bibliographic references extracted from this entry's
    /// `bibliography.bibliographical_text_field` passport field.
    ///
    /// The value(s) found under that locator are split at semicolons and each
    /// segment is trimmed. Empty segments survive the split: a value of
    /// `"A;"` yields `["A", ""]`. Lookup failures never surface here; they
    /// are logged and an empty (or partially accumulated) list is returned.
    ///
    /// The list is computed once per instance. The passport is treated as
    /// immutable after loading, so the cached list stays authoritative even
    /// if the passport were replaced later on.
    pub fn bibliography(&self) -> &[String] {
        self.bibliography.get_or_init(|| extract_bibliography(self))
    }

    /// Total number of attestations across all attested timespans.
    pub fn attestation_count(&self) -> u64 {
        self.attestations
            .iter()
            .map(|timespan| timespan.attestations.count)
            .sum()
    }

    /// Determines the dictionary (language phase) this entry belongs to.
    pub fn dictionary_name(&self) -> Script {
        Script::of_lemma_id(&self.id)
    }

    /// Hieroglyphs of this entry's words.
    ///
    /// Only hieratic entries carry hieroglyphs; words without glyphs are
    /// skipped. Returns `None` for demotic entries and when no word has a
    /// non-empty rendering.
    pub fn hieroglyphs(&self) -> Option<Vec<&Glyphs>> {
        if self.dictionary_name() != Script::Hieratic {
            return None;
        }
        let glyphs: Vec<&Glyphs> = self
            .words
            .iter()
            .filter_map(|word| word.glyphs.as_ref())
            .collect();
        if glyphs.iter().all(|g| g.is_empty()) {
            None
        } else {
            Some(glyphs)
        }
    }
}

impl ModelObject for Lemma {
    fn id(&self) -> &str {
        &self.id
    }

    fn passport(&self) -> Option<&Passport> {
        self.passport.as_ref()
    }
}

/// Extract bibliographic references from a lemma passport.
///
/// Any lookup failure ends the scan: the failure is logged at diagnostic
/// level together with the entry id, and whatever was accumulated up to that
/// point is returned.
fn extract_bibliography(lemma: &Lemma) -> Vec<String> {
    let mut bibliography = Vec::new();
    let Some(passport) = lemma.passport.as_ref() else {
        debug!("could not extract bibliography from lemma {}: no passport", lemma.id);
        return bibliography;
    };
    let nodes = match passport.extract_property(PASSPORT_PROP_BIBL) {
        Ok(nodes) => nodes,
        Err(e) => {
            debug!("could not extract bibliography from lemma {}: {}", lemma.id, e);
            return bibliography;
        }
    };
    for node in nodes {
        match node.leaf_value() {
            Ok(value) => {
                bibliography.extend(value.split(';').map(|bibref| bibref.trim().to_string()));
            }
            Err(e) => {
                debug!("could not extract bibliography from lemma {}: {}", lemma.id, e);
                return bibliography;
            }
        }
    }
    bibliography
}
