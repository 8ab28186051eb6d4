/*!
 * Error types for the lemmata model layer.
 *
 * This module contains custom error types for different parts of the library,
 * using the thiserror crate for ergonomic error definitions.
 */

use thiserror::Error;

/// Errors that can occur when querying a passport tree
#[derive(Error, Debug)]
pub enum PassportError {
    /// Error when a locator string does not follow the `segment(.segment)*` syntax
    #[error("invalid locator syntax: {0}")]
    InvalidLocator(String),

    /// Error when no node is reachable at the given locator
    #[error("no property found at locator: {0}")]
    NotFound(String),

    /// Error when a leaf value is requested from an inner node
    #[error("node has no leaf value")]
    MissingLeafValue,
}

/// Errors that can occur when converting backend records to model objects
#[derive(Error, Debug)]
pub enum MappingError {
    /// Error when a search result record carries no eclass discriminator
    #[error("search result record carries no eclass")]
    MissingEclass,

    /// Error when no converter is registered for a record's eclass
    #[error("no converter registered for eclass: {0}")]
    UnknownEclass(String),

    /// Error when a record fails to deserialize into its transfer shape
    #[error("failed to deserialize {eclass} record: {source}")]
    Dto {
        /// The eclass of the record that failed
        eclass: String,
        /// The underlying deserialization error
        #[source]
        source: serde_json::Error,
    },
}

/// Errors that can occur when parsing a language code
#[derive(Error, Debug)]
#[error("unknown language code: {0}")]
pub struct UnknownLanguage(pub String);

/// Main error type that wraps all model-layer errors
#[derive(Error, Debug)]
pub enum ModelError {
    /// Error from a passport lookup
    #[error("passport error: {0}")]
    Passport(#[from] PassportError),

    /// Error from DTO conversion
    #[error("mapping error: {0}")]
    Mapping(#[from] MappingError),

    /// Error from language code parsing
    #[error("language error: {0}")]
    Language(#[from] UnknownLanguage),
}
