//! Field-level and class-level rule checks.
//!
//! [`check_entity`] runs every rule of one class over a raw property map and
//! returns all violations at once:
//!
//! 1. empty literals are dropped (source data often contains empty elements)
//! 2. `edm:rights` of aggregations and web resources is normalized in place
//! 3. unknown fields, wrong value kinds and cardinality are checked against
//!    the schema table
//! 4. mandatory fields must be present
//! 5. the class rules of the EDM mandate table run last
//!
//! # Examples
//!
//! ```ignore
//! use edmrs::validation::check_pref_labels;
//! use edmrs::{EntityKind, Literal, Value};
//!
//! let labels = vec![
//!     Value::from(Literal::lang_tagged("name", "de")),
//!     Value::from(Literal::lang_tagged("no-name", "de")),
//! ];
//! assert!(!check_pref_labels(EntityKind::Concept, &labels).is_empty());
//! ```

use std::collections::HashSet;

use crate::entity::PropertyMap;
use crate::error::{ValidationErrors, Violation};
use crate::rights::{assert_valid_statement, normalize_statement};
use crate::schema::{Cardinality, EntityKind, Mandate};
use crate::value::{Reference, Value};

/// Allowed values of `edm:type`.
pub const EDM_TYPES: &[&str] = &["TEXT", "IMAGE", "SOUND", "VIDEO", "3D"];

/// Runs every rule of `kind` over `properties`.
///
/// `properties` is cleaned in place: empty literals and emptied fields are
/// removed and rights statements are replaced by their normalized form.
#[must_use]
pub fn check_entity(kind: EntityKind, properties: &mut PropertyMap) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    drop_empty_literals(properties);
    if matches!(kind, EntityKind::Aggregation | EntityKind::WebResource) {
        normalize_rights(kind, properties, &mut errors);
    }
    check_schema(kind, properties, &mut errors);
    check_mandatory(kind, properties, &mut errors);

    match kind {
        EntityKind::ProvidedCho => check_provided_cho(properties, &mut errors),
        EntityKind::Aggregation => check_aggregation(properties, &mut errors),
        EntityKind::Agent | EntityKind::Place | EntityKind::TimeSpan | EntityKind::Concept => {
            if let Some(labels) = properties.get("skos_prefLabel") {
                for violation in check_pref_labels(kind, labels) {
                    errors.push(violation);
                }
            }
        },
        EntityKind::WebResource | EntityKind::License | EntityKind::Service => {},
    }

    errors
}

fn drop_empty_literals(properties: &mut PropertyMap) {
    for values in properties.values_mut() {
        values.retain(|value| !matches!(value, Value::Literal(lit) if lit.is_empty()));
    }
    properties.retain(|_, values| !values.is_empty());
}

fn normalize_rights(kind: EntityKind, properties: &mut PropertyMap, errors: &mut ValidationErrors) {
    let Some(values) = properties.get_mut("edm_rights") else {
        return;
    };
    for value in values.iter_mut() {
        let Value::Reference(reference) = value else {
            continue;
        };
        let normalized = normalize_statement(reference.as_str());
        if let Some(canonical) = Reference::try_new(&normalized) {
            *reference = canonical;
        }
        if let Err(e) = assert_valid_statement(reference.as_str()) {
            errors.push(Violation::field(kind.class_name(), "edm_rights", e.to_string()));
        }
    }
}

fn check_schema(kind: EntityKind, properties: &PropertyMap, errors: &mut ValidationErrors) {
    let class = kind.class_name();
    for (name, values) in properties {
        let Some(spec) = kind.property(name) else {
            errors.push(Violation::field(
                class,
                name.as_str(),
                format!("unknown field for {class}"),
            ));
            continue;
        };

        for value in values {
            if !spec.kind.accepts(value) {
                errors.push(Violation::field(
                    class,
                    spec.name,
                    format!("expected a {}, found {value}", spec.kind),
                ));
            }
        }

        if spec.is_single() && values.len() > 1 {
            errors.push(Violation::field(
                class,
                spec.name,
                format!(
                    "expected {} value, found {}: {}",
                    spec.cardinality,
                    values.len(),
                    join_values(values)
                ),
            ));
        }
    }
}

fn check_mandatory(kind: EntityKind, properties: &PropertyMap, errors: &mut ValidationErrors) {
    for spec in kind.properties() {
        let required =
            spec.mandate == Mandate::Mandatory || spec.cardinality == Cardinality::ExactlyOne;
        if required && !properties.contains_key(spec.name) {
            errors.push(Violation::field(
                kind.class_name(),
                spec.name,
                "missing mandatory field (no non-empty value given)",
            ));
        }
    }
}

fn has_any(properties: &PropertyMap, fields: &[&str]) -> bool {
    fields.iter().any(|field| properties.contains_key(*field))
}

fn check_provided_cho(properties: &PropertyMap, errors: &mut ValidationErrors) {
    let class = EntityKind::ProvidedCho.class_name();

    let edm_type = properties
        .get("edm_type")
        .and_then(|values| values.first())
        .and_then(Value::as_literal);
    if let Some(edm_type) = edm_type {
        if let Some(lang) = edm_type.lang() {
            errors.push(Violation::field(
                class,
                "edm_type",
                format!(
                    "must not carry a language tag, found '{}'@{lang}",
                    edm_type.value()
                ),
            ));
        }
        if !EDM_TYPES.contains(&edm_type.value()) {
            errors.push(Violation::field(
                class,
                "edm_type",
                format!(
                    "'{}' is not one of {}",
                    edm_type.value(),
                    EDM_TYPES.join(", ")
                ),
            ));
        }
    }

    if !has_any(properties, &["dc_title", "dc_description"]) {
        errors.push(Violation::class(
            class,
            "either dc_title or dc_description must be present",
        ));
    }

    if edm_type.is_some_and(|t| t.value() == "TEXT") && !properties.contains_key("dc_language") {
        errors.push(Violation::field(
            class,
            "dc_language",
            "dc_language is mandatory when edm_type is TEXT",
        ));
    }

    if !has_any(
        properties,
        &["dc_subject", "dc_type", "dcterms_spatial", "dcterms_temporal"],
    ) {
        errors.push(Violation::class(
            class,
            "one of dc_subject, dc_type, dcterms_spatial or dcterms_temporal must be present",
        ));
    }
}

fn check_aggregation(properties: &PropertyMap, errors: &mut ValidationErrors) {
    if !has_any(properties, &["edm_isShownAt", "edm_isShownBy"]) {
        errors.push(Violation::class(
            EntityKind::Aggregation.class_name(),
            "either edm_isShownAt or edm_isShownBy must be present",
        ));
    }
}

/// Checks the language tags of a preferred-label list.
///
/// At most one label may be untagged, and no language tag may repeat.
#[must_use]
pub fn check_pref_labels(kind: EntityKind, labels: &[Value]) -> Vec<Violation> {
    let mut violations = Vec::new();
    let literals: Vec<_> = labels.iter().filter_map(Value::as_literal).collect();

    let untagged: Vec<_> = literals
        .iter()
        .filter(|lit| lit.lang().is_none())
        .map(|lit| lit.value())
        .collect();
    if untagged.len() > 1 {
        violations.push(Violation::field(
            kind.class_name(),
            "skos_prefLabel",
            format!(
                "at most one label may lack a language tag, found {}: {}",
                untagged.len(),
                untagged.join(", ")
            ),
        ));
    }

    let mut seen = HashSet::new();
    let mut duplicates = Vec::new();
    for lang in literals.iter().filter_map(|lit| lit.lang()) {
        if !seen.insert(lang) && !duplicates.contains(&lang) {
            duplicates.push(lang);
        }
    }
    if !duplicates.is_empty() {
        violations.push(Violation::field(
            kind.class_name(),
            "skos_prefLabel",
            format!("duplicate language tags: {}", duplicates.join(", ")),
        ));
    }

    violations
}

fn join_values(values: &[Value]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
