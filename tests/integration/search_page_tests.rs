/*!
 * End-to-end tests: backend page payload to frontend model objects
 */

use anyhow::Result;

use lemmata::dto::SearchResultsWrapper;
use lemmata::{Language, ModelObject, Script, SearchResults};

/// A backend search response the way the transport layer hands it over
const PAGE_PAYLOAD: &str = r#"{
    "results": [
        {
            "eclass": "BTSLemmaEntry",
            "id": "59920",
            "name": "nfr",
            "passport": {
                "bibliography": [
                    {"bibliographical_text_field": "Wb II, 253.1-256.14; FCD 131;"}
                ]
            },
            "translations": {
                "fr": ["parfait"],
                "de": ["gut", "schön"],
                "en": ["good", "beautiful"]
            },
            "words": [
                {"id": "59920-w1", "glyphs": {"mdc": "nfr", "unicode": "𓄤"}}
            ],
            "attestations": [
                {"period": {"begin": -2686, "end": -2160},
                 "attestations": {"count": 1205, "texts": 480, "sentences": 1100, "objects": 377}},
                {"period": {"begin": -2160, "end": -1550},
                 "attestations": {"count": 795, "texts": 310, "sentences": 701, "objects": 212}}
            ],
            "timespan": {"begin": -2686, "end": 324}
        },
        {
            "eclass": "BTSLemmaEntry",
            "id": "d3328",
            "name": "nfr",
            "translations": {"de": ["gut"]}
        }
    ],
    "query": {"transcription": "nfr"},
    "page": {"number": 0, "size": 20, "numberOfElements": 2,
             "totalElements": 2, "totalPages": 1},
    "facets": {"dictionary": {"hieratic": 1, "demotic": 1}}
}"#;

fn convert_page() -> Result<SearchResults> {
    let wrapper: SearchResultsWrapper = serde_json::from_str(PAGE_PAYLOAD)?;
    Ok(SearchResults::from_wrapper(wrapper)?)
}

/// Walk a whole page from raw JSON to derived lemma accessors
#[test]
fn test_searchPage_endToEnd_shouldExposeDerivedAccessors() -> Result<()> {
    let results = convert_page()?;
    assert_eq!(results.objects.len(), 2);
    assert_eq!(results.page.total_elements, 2);
    assert_eq!(results.facets["dictionary"]["hieratic"], 1);

    let lemma = results.objects[0].as_lemma().unwrap();
    assert_eq!(lemma.id(), "59920");
    assert_eq!(lemma.dictionary_name(), Script::Hieratic);
    assert_eq!(lemma.attestation_count(), 2000);
    assert_eq!(
        lemma.bibliography(),
        ["Wb II, 253.1-256.14", "FCD 131", ""]
    );

    let glyphs = lemma.hieroglyphs().expect("hieratic lemma carries glyphs");
    assert_eq!(glyphs[0].mdc, "nfr");
    Ok(())
}

/// Translation maps keep their language display order after conversion
#[test]
fn test_searchPage_translations_shouldIterateInDisplayOrder() -> Result<()> {
    let results = convert_page()?;
    let lemma = results.objects[0].as_lemma().unwrap();

    let languages: Vec<Language> = lemma.translations.keys().copied().collect();
    assert_eq!(languages, vec![Language::De, Language::En, Language::Fr]);
    assert_eq!(lemma.translations[&Language::De], vec!["gut", "schön"]);
    Ok(())
}

/// Demotic entries on the same page expose their own classification
#[test]
fn test_searchPage_demoticEntry_shouldClassifyAndStayGlyphless() -> Result<()> {
    let results = convert_page()?;
    let lemma = results.objects[1].as_lemma().unwrap();

    assert_eq!(lemma.dictionary_name(), Script::Demotic);
    assert!(lemma.hieroglyphs().is_none());
    assert!(lemma.bibliography().is_empty());
    Ok(())
}
