//! Integration tests for the plain mapping form.

mod common;

use common::{albertina_xml, herbarium_xml, parse_xml, scenario_record};
use edmrs::{EdmError, EdmRecord, EntityKind};
use serde_json::{json, Value as Json};

/// A museum record whose aggregation points at a different CHO id.
fn cho_id_mismatch() -> Json {
    json!({
        "provided_cho": {
            "id": {"value": "https://id.kulturpool.at/000056bf-fe34-4e7f-ad3c-eb7bfff37c72342/cho"},
            "edm_type": {"value": "IMAGE", "lang": null, "datatype": null, "normalize": false},
            "dc_contributor": null,
            "dc_creator": [{"value": "http://d-nb.info/gnd/11869703X"}],
            "dc_identifier": [{"value": "DG1949/697", "lang": null, "datatype": null, "normalize": false}],
            "dc_language": [{"value": "de", "lang": null, "datatype": null, "normalize": false}],
            "dc_rights": [{"value": "Albertina, Wien, Österreich", "lang": null, "datatype": null, "normalize": false}],
            "dc_title": [{"value": "Die Erweckung des Lazarus", "lang": "german", "datatype": null, "normalize": false}],
            "dc_type": [{"value": "http://vocab.getty.edu/aat/300041273"}],
            "dcterms_created": [{"value": "1506", "lang": null, "datatype": null, "normalize": false}],
            "dcterms_isPartOf": [{"value": "Graphische Sammlung", "lang": null, "datatype": null, "normalize": false}],
            "dcterms_medium": [{"value": "Holzschnitt", "lang": null, "datatype": null, "normalize": false}],
            "owl_isSameAs": null
        },
        "aggregation": {
            "id": {"value": "https://id.kulturpool.at/000056bf-fe34-4e7f-ad3c-eb7bfff37c70/aggregation"},
            "edm_aggregatedCHO": {"value": "https://id.kulturpool.at/000056bf-fe34-4e7f-ad3c-eb7bfff37c70/cho"},
            "edm_dataProvider": {"value": "Albertina", "lang": null, "datatype": null, "normalize": false},
            "edm_provider": {"value": "Kulturpool", "lang": "de", "datatype": null, "normalize": false},
            "edm_rights": {"value": "http://creativecommons.org/publicdomain/mark/1.0/"},
            "edm_hasView": [{"value": "https://sammlungenonline.albertina.at/cc/imageproxy.ashx?filename=images/DG1949_697.jpg"}],
            "edm_isShownAt": {"value": "https://sammlungenonline.albertina.at/?query=search=/record/objectnumbersearch=[DG1949/697]&showtype=record"},
            "edm_isShownBy": {"value": "https://sammlungenonline.albertina.at/cc/imageproxy.ashx?filename=images/DG1949_697.jpg"},
            "dc_rights": null,
            "edm_ugc": null
        },
        "web_resource": [{
            "id": {"value": "https://sammlungenonline.albertina.at/cc/imageproxy.ashx?filename=images/DG1949_697.jpg"},
            "dc_rights": [{"value": "Albertina, Wien, Österreich", "lang": null, "datatype": null, "normalize": false}],
            "edm_rights": {"value": "http://creativecommons.org/publicdomain/mark/1.0/"},
            "svcs_has_service": [{"value": "https://sammlungenonline.albertina.at/iiif/images/DG1949_697.JPG"}]
        }],
        "skos_concept": [{
            "id": {"value": "http://vocab.getty.edu/aat/300041273"},
            "skos_prefLabel": {"value": "Druckgraphik", "lang": null, "datatype": null, "normalize": false}
        }],
        "edm_agent": [{
            "id": {"value": "http://d-nb.info/gnd/11869703X"},
            "skos_prefLabel": {"value": "Urs Graf d. Ä.", "lang": null, "datatype": null, "normalize": false},
            "owl_sameAs": [
                {"value": "http://d-nb.info/gnd/11869703X"},
                {"value": "http://de.wikipedia.org/wiki/Urs_Graf_der_%C3%84ltere"}
            ]
        }],
        "edm_time_span": [],
        "edm_place": [],
        "cc_license": [],
        "svcs_service": [{
            "id": {"value": "https://sammlungenonline.albertina.at/iiif/images/DG1949_697.JPG"},
            "dcterms_conformsTo": [{"value": "http://iiif.io/api/image"}],
            "doap_implements": {"value": "http://iiif.io/api/image/2/level2.json"}
        }]
    })
}

fn with_matching_cho(mut mapping: Json) -> Json {
    mapping["aggregation"]["edm_aggregatedCHO"] = mapping["provided_cho"]["id"].clone();
    mapping
}

#[test]
fn test_cho_id_mismatch_fails() {
    let err = EdmRecord::from_mapping(&cho_id_mismatch()).unwrap_err();
    let errors = err.violations().expect("validation error");
    assert_eq!(errors.len(), 1);
    assert!(errors.contains_message("eb7bfff37c72342/cho"));
    assert!(errors.contains_message("eb7bfff37c70/cho"));
}

#[test]
fn test_matching_ids_pass() {
    let record = EdmRecord::from_mapping(&with_matching_cho(cho_id_mismatch())).unwrap();
    assert_eq!(record.edm_agent().len(), 1);
    assert_eq!(record.skos_concept()[0].skos_pref_label().len(), 1);
    assert_eq!(record.svcs_service().len(), 1);
}

#[test]
fn test_round_trip_parsed_records() {
    for xml in [albertina_xml(), herbarium_xml()] {
        let record = parse_xml(&xml);
        let again = EdmRecord::from_mapping(&record.to_mapping()).unwrap();
        assert_eq!(record, again);
    }
}

#[test]
fn test_round_trip_through_json_text() {
    let record = scenario_record();
    let text = record.to_json_string().unwrap();
    assert_eq!(EdmRecord::from_json_str(&text).unwrap(), record);
}

#[test]
fn test_serde_matches_mapping() {
    let record = scenario_record();
    assert_eq!(serde_json::to_value(&record).unwrap(), record.to_mapping());
}

#[test]
fn test_mapping_has_every_slot() {
    let mapping = scenario_record().to_mapping();
    for kind in EntityKind::ALL {
        assert!(mapping.get(kind.record_key()).is_some(), "{kind} slot missing");
    }
    assert!(mapping["provided_cho"].is_object());
    assert!(mapping["web_resource"].is_array());
}

#[test]
fn test_mapping_preserves_literal_details() {
    let record = parse_xml(&albertina_xml());
    let mapping = record.to_mapping();
    let title = &mapping["provided_cho"]["dc_title"][0];
    assert_eq!(title["value"], "Die Erweckung des Lazarus");
    assert_eq!(title["lang"], "german");
    assert_eq!(title["datatype"], Json::Null);
    assert_eq!(
        mapping["provided_cho"]["dc_type"][0],
        json!({"value": "http://vocab.getty.edu/aat/300041273"})
    );
}

#[test]
fn test_invalid_reference_is_violation() {
    let mut mapping = with_matching_cho(cho_id_mismatch());
    mapping["provided_cho"]["dc_creator"] = json!([{"value": "/relative/path"}]);
    let err = EdmRecord::from_mapping(&mapping).unwrap_err();
    assert!(err.violations().unwrap().has_field("dc_creator"));
}

#[test]
fn test_violations_collected_across_entities() {
    let mut mapping = cho_id_mismatch();
    mapping["aggregation"]["edm_rights"] = json!({"value": "http://creativecommons.org/licenses/not-ok/4.0/"});
    mapping["edm_agent"][0]["skos_prefLabel"] = json!([
        {"value": "Urs Graf", "lang": null},
        {"value": "Graf, Urs", "lang": null}
    ]);
    let err = EdmRecord::from_mapping(&mapping).unwrap_err();
    let errors = err.violations().unwrap();
    assert!(errors.has_field("edm_rights"));
    assert!(errors.has_field("skos_prefLabel"));
    assert!(errors.has_field("edm_aggregatedCHO"));
}

#[test]
fn test_non_object_record_is_mapping_error() {
    assert!(matches!(
        EdmRecord::from_mapping(&json!([1, 2, 3])),
        Err(EdmError::Mapping(_))
    ));
    assert!(matches!(
        EdmRecord::from_json_str("{not json"),
        Err(EdmError::Mapping(_))
    ));
}

#[test]
fn test_list_slot_must_be_array() {
    let mut mapping = with_matching_cho(cho_id_mismatch());
    mapping["edm_place"] = json!({"id": {"value": "http://uri.test/place"}});
    assert!(matches!(
        EdmRecord::from_mapping(&mapping),
        Err(EdmError::Mapping(_))
    ));
}
