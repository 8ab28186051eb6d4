/*!
 * Backend transfer shapes.
 *
 * These structs mirror the JSON payloads the backend delivers; they are
 * owned by the backend and only declare the fields the frontend reads.
 * Unset optional fields default rather than fail, since backend records
 * are frequently sparse.
 */

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::Value;

use crate::language::Language;
use crate::model::attestation::{AttestedTimespan, Period};
use crate::model::word::Word;
use crate::passport::Passport;

/// Paging metadata of one search result page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    /// Zero-based page number
    #[serde(default)]
    pub number: u64,
    /// Page size used by the backend
    #[serde(default)]
    pub size: u64,
    /// Number of results on this page
    #[serde(default)]
    pub number_of_elements: u64,
    /// Total number of matching results
    #[serde(default)]
    pub total_elements: u64,
    /// Total number of pages
    #[serde(default)]
    pub total_pages: u64,
}

/// One page of search results as returned by the backend.
///
/// Result records stay raw JSON here; they are converted to model objects
/// by [`crate::search::SearchResults::from_wrapper`].
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResultsWrapper {
    /// Raw result records, each tagged with its eclass
    #[serde(default)]
    pub results: Vec<Value>,
    /// Echo of the search command that produced this page
    #[serde(default)]
    pub query: Value,
    /// Paging metadata
    pub page: PageInfo,
    /// Facet value counts keyed by facet name
    #[serde(default)]
    pub facets: BTreeMap<String, BTreeMap<String, u64>>,
}

/// Transfer shape of a dictionary entry record.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LemmaDto {
    /// Unique entry identifier
    pub id: String,
    /// Citation form
    #[serde(default)]
    pub name: String,
    /// Metadata tree
    #[serde(default)]
    pub passport: Option<Passport>,
    /// Translations keyed by language code
    #[serde(default)]
    pub translations: BTreeMap<Language, Vec<String>>,
    /// Words making up the entry
    #[serde(default)]
    pub words: Vec<Word>,
    /// Attestations per historical timespan
    #[serde(default)]
    pub attestations: Vec<AttestedTimespan>,
    /// First and last year of attestation
    #[serde(default)]
    pub timespan: Option<Period>,
}
