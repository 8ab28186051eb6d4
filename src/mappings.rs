/*!
 * Conversion of backend records into frontend model objects.
 *
 * Backend records carry an `eclass` discriminator naming their type. A
 * static registry maps each known eclass to a converter producing the
 * matching model object; search result pages dispatch every record through
 * [`convert_record`].
 */

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde_json::Value;

use crate::dto::LemmaDto;
use crate::errors::MappingError;
use crate::model::lemma::Lemma;
use crate::model::ModelObject;
use crate::passport::Passport;

/// eclass discriminator of dictionary entry records.
pub const ECLASS_LEMMA: &str = "BTSLemmaEntry";

type Converter = fn(Value) -> Result<AnyObject, MappingError>;

static CONVERTERS: Lazy<HashMap<&'static str, Converter>> = Lazy::new(|| {
    let mut converters: HashMap<&'static str, Converter> = HashMap::new();
    converters.insert(ECLASS_LEMMA, convert_lemma);
    converters
});

/// Any model object a search can return.
#[derive(Debug, Clone)]
pub enum AnyObject {
    /// A dictionary entry
    Lemma(Lemma),
}

impl AnyObject {
    /// The wrapped entry, if this object is a lemma.
    pub fn as_lemma(&self) -> Option<&Lemma> {
        match self {
            AnyObject::Lemma(lemma) => Some(lemma),
        }
    }
}

impl ModelObject for AnyObject {
    fn id(&self) -> &str {
        match self {
            AnyObject::Lemma(lemma) => lemma.id(),
        }
    }

    fn passport(&self) -> Option<&Passport> {
        match self {
            AnyObject::Lemma(lemma) => lemma.passport(),
        }
    }
}

impl From<LemmaDto> for Lemma {
    fn from(dto: LemmaDto) -> Self {
        let mut lemma = Lemma::new(dto.id);
        lemma.name = dto.name;
        lemma.passport = dto.passport;
        lemma.translations = dto.translations;
        lemma.words = dto.words;
        lemma.attestations = dto.attestations;
        lemma.timespan = dto.timespan;
        lemma
    }
}

fn convert_lemma(record: Value) -> Result<AnyObject, MappingError> {
    let dto: LemmaDto = serde_json::from_value(record).map_err(|source| MappingError::Dto {
        eclass: ECLASS_LEMMA.to_string(),
        source,
    })?;
    Ok(AnyObject::Lemma(Lemma::from(dto)))
}

/// Convert one backend record into its model object, dispatching on the
/// record's `eclass` discriminator.
pub fn convert_record(record: Value) -> Result<AnyObject, MappingError> {
    let eclass = record
        .get("eclass")
        .and_then(Value::as_str)
        .ok_or(MappingError::MissingEclass)?
        .to_string();
    match CONVERTERS.get(eclass.as_str()) {
        Some(converter) => converter(record),
        None => Err(MappingError::UnknownEclass(eclass)),
    }
}
