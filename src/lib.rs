/*!
 * # lemmata
 *
 * Data and model layer for a linguistic dictionary web frontend.
 *
 * ## Features
 *
 * - Hierarchical passport metadata trees with dotted locator queries
 * - Dictionary entry ("lemma") model with derived accessors:
 *   - bibliography extraction (memoized, best-effort)
 *   - attestation counting
 *   - script classification and hieroglyph collection
 * - Conversion of paged backend search responses into model objects
 * - Corpus language vocabulary with ISO 639 display names
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `passport`: Passport metadata trees and locator queries
 * - `model`: Frontend model objects (lemma, word, attestation)
 * - `dto`: Backend transfer shapes
 * - `mappings`: eclass-dispatched record conversion
 * - `search`: Paged search result model
 * - `language`: Corpus language and script vocabulary
 * - `errors`: Custom error types for the library
 *
 * The crate performs no I/O: backend payloads arrive as already-parsed
 * JSON from the surrounding transport layer.
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
#![allow(clippy::uninlined_format_args)]

// Public modules
pub mod dto;
pub mod errors;
pub mod language;
pub mod mappings;
pub mod model;
pub mod passport;
pub mod search;

// Re-export main types for easier usage
pub use dto::{PageInfo, SearchResultsWrapper};
pub use errors::{MappingError, ModelError, PassportError};
pub use language::{Language, Script};
pub use mappings::AnyObject;
pub use model::lemma::{Lemma, PASSPORT_PROP_BIBL};
pub use model::{AttestedTimespan, Glyphs, ModelObject, Period, Word};
pub use passport::{Locator, Passport};
pub use search::SearchResults;
