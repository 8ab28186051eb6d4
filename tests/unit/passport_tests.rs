/*!
 * Tests for passport trees and locator queries
 */

use lemmata::passport::{Locator, Passport};
use lemmata::PassportError;

use crate::common;

/// Test locator parsing and display round trip
#[test]
fn test_locator_parse_withValidLocator_shouldRoundTrip() {
    let locator: Locator = "bibliography.bibliographical_text_field".parse().unwrap();
    assert_eq!(
        locator.segments(),
        ["bibliography", "bibliographical_text_field"]
    );
    assert_eq!(
        locator.to_string(),
        "bibliography.bibliographical_text_field"
    );
}

/// Test rejection of malformed locators
#[test]
fn test_locator_parse_withMalformedLocator_shouldFail() {
    assert!(matches!(
        "bibliography..text".parse::<Locator>(),
        Err(PassportError::InvalidLocator(_))
    ));
    assert!(matches!(
        "".parse::<Locator>(),
        Err(PassportError::InvalidLocator(_))
    ));
}

/// Test fan-out traversal across repeated branches
#[test]
fn test_extractProperty_withMultipleBranches_shouldCollectInOrder() {
    let passport = common::bibliography_passport(&["alpha", "beta"]);
    let nodes = passport
        .extract_property("bibliography.bibliographical_text_field")
        .unwrap();
    let values: Vec<&str> = nodes.iter().map(|n| n.leaf_value().unwrap()).collect();
    assert_eq!(values, vec!["alpha", "beta"]);
}

/// Test lookup failure signaling
#[test]
fn test_extractProperty_withAbsentLocator_shouldSignalNotFound() {
    let passport = common::bibliography_passport(&["alpha"]);
    let result = passport.extract_property("lexicography.reference");
    match result {
        Err(PassportError::NotFound(locator)) => {
            assert_eq!(locator, "lexicography.reference");
        }
        other => panic!("expected NotFound, got {:?}", other),
    }
}

/// Test deserialization of a backend passport payload
#[test]
fn test_passport_deserialize_withMixedNodeShapes_shouldBuildTree() {
    let json = r#"{
        "bibliography": {"bibliographical_text_field": "Wb II, 83.1"},
        "object": {
            "description": [
                {"text": "stela"},
                {"text": "limestone"}
            ]
        }
    }"#;
    let passport: Passport = serde_json::from_str(json).unwrap();

    let bibl = passport
        .extract_property("bibliography.bibliographical_text_field")
        .unwrap();
    assert_eq!(bibl[0].leaf_value().unwrap(), "Wb II, 83.1");

    let descriptions = passport.extract_property("object.description.text").unwrap();
    let values: Vec<&str> = descriptions
        .iter()
        .map(|n| n.leaf_value().unwrap())
        .collect();
    assert_eq!(values, vec!["stela", "limestone"]);
}

/// Test leaf access on inner nodes
#[test]
fn test_leafValue_onInnerNode_shouldSignalMissingLeafValue() {
    let passport = common::bibliography_passport(&["alpha"]);
    let nodes = passport.extract_property("bibliography").unwrap();
    assert!(matches!(
        nodes[0].leaf_value(),
        Err(PassportError::MissingLeafValue)
    ));
}
