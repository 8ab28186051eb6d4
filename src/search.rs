/*!
 * Paged search result model.
 *
 * Wraps one page of backend search results after conversion of every raw
 * record into its frontend model type.
 */

use std::collections::BTreeMap;

use serde_json::Value;

use crate::dto::{PageInfo, SearchResultsWrapper};
use crate::errors::MappingError;
use crate::mappings::{self, AnyObject};

/// One page of search results, converted to model objects.
#[derive(Debug, Clone)]
pub struct SearchResults {
    /// Converted result objects, in backend order
    pub objects: Vec<AnyObject>,
    /// Echo of the search command that produced this page
    pub query: Value,
    /// Paging metadata
    pub page: PageInfo,
    /// Facet value counts keyed by facet name
    pub facets: BTreeMap<String, BTreeMap<String, u64>>,
}

impl SearchResults {
    /// Create a result page without facets.
    pub fn new(objects: Vec<AnyObject>, query: Value, page: PageInfo) -> Self {
        SearchResults {
            objects,
            query,
            page,
            facets: BTreeMap::new(),
        }
    }

    /// Converts search results in a paged backend response to their
    /// respective frontend model types.
    pub fn from_wrapper(dto: SearchResultsWrapper) -> Result<Self, MappingError> {
        let objects = dto
            .results
            .into_iter()
            .map(mappings::convert_record)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(SearchResults {
            objects,
            query: dto.query,
            page: dto.page,
            facets: dto.facets,
        })
    }
}
