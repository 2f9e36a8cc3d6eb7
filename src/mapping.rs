//! Plain nested-mapping form of records.
//!
//! A record maps to a JSON object keyed by slot name (`provided_cho`,
//! `aggregation`, `web_resource`, ...). Each entity is an object with an `id`
//! and one key per present field: single-valued fields hold one value
//! object, multi-valued fields hold an array.
//!
//! ```text
//! {
//!   "provided_cho": {
//!     "id": {"value": "http://uri.test/cho"},
//!     "edm_type": {"value": "IMAGE", "lang": null, "datatype": null, "normalize": false},
//!     "dc_title": [{"value": "Bild", "lang": "de", "datatype": null, "normalize": false}]
//!   },
//!   "aggregation": { ... },
//!   "web_resource": [ ... ],
//!   ...
//! }
//! ```
//!
//! A reference is an object with `value` only; anything with further keys is
//! read back as a literal. [`EdmRecord::from_mapping`] runs the same
//! validation as the other constructors.

use serde::{Serialize, Serializer};
use serde_json::{json, Map, Value as Json};

use crate::entity::{Aggregation, EdmClass, Entity, PropertyMap, ProvidedCho};
use crate::error::{EdmError, Result, ValidationErrors, Violation};
use crate::record::{check_cross_reference, EdmRecord};
use crate::schema::EntityKind;
use crate::value::{Literal, Reference, Value};

/// Converts one value to its mapping form.
#[must_use]
pub fn value_to_mapping(value: &Value) -> Json {
    match value {
        Value::Reference(reference) => json!({ "value": reference.as_str() }),
        Value::Literal(literal) => json!({
            "value": literal.value(),
            "lang": literal.lang(),
            "datatype": literal.datatype(),
            "normalize": literal.normalize(),
        }),
    }
}

/// Converts an entity to its mapping form.
#[must_use]
pub fn entity_to_mapping(entity: &Entity) -> Json {
    let mut map = Map::new();
    map.insert("id".to_string(), json!({ "value": entity.id().as_str() }));
    for (spec, values) in entity.properties() {
        let field = if spec.is_single() {
            values.first().map_or(Json::Null, value_to_mapping)
        } else {
            Json::Array(values.iter().map(value_to_mapping).collect())
        };
        map.insert(spec.name.to_string(), field);
    }
    Json::Object(map)
}

/// Reads one value from its mapping form.
///
/// # Errors
///
/// Returns [`EdmError::Mapping`] if `item` is not an object with a string
/// `value`, or if `lang`, `datatype` or `normalize` have the wrong type.
/// Returns [`EdmError::InvalidRef`] for a reference with a malformed URI.
pub fn value_from_mapping(item: &Json) -> Result<Value> {
    let Json::Object(map) = item else {
        return Err(EdmError::Mapping(format!("expected a value object, found {item}")));
    };
    let text = match map.get("value") {
        Some(Json::String(text)) => text,
        _ => return Err(EdmError::Mapping(format!("value object without a string 'value': {item}"))),
    };

    if map.len() == 1 {
        return Reference::new(text).map(Value::Reference);
    }

    let lang = optional_str(map, "lang")?;
    let datatype = optional_str(map, "datatype")?;
    let normalize = match map.get("normalize") {
        None | Some(Json::Null) => false,
        Some(Json::Bool(flag)) => *flag,
        Some(other) => {
            return Err(EdmError::Mapping(format!("'normalize' must be a boolean, found {other}")))
        },
    };
    let literal = Literal::new(text)
        .with_lang(lang)
        .with_datatype(datatype)
        .with_normalize(normalize);
    Ok(Value::Literal(literal))
}

fn optional_str<'a>(map: &'a Map<String, Json>, key: &str) -> Result<Option<&'a str>> {
    match map.get(key) {
        None | Some(Json::Null) => Ok(None),
        Some(Json::String(text)) => Ok(Some(text.as_str())),
        Some(other) => Err(EdmError::Mapping(format!("'{key}' must be a string, found {other}"))),
    }
}

/// Reads an entity of `kind` from its mapping form.
///
/// # Errors
///
/// Returns [`EdmError::Mapping`] for malformed shapes and
/// [`EdmError::Validation`] if the entity breaks its class rules.
pub fn entity_from_mapping(kind: EntityKind, item: &Json) -> Result<Entity> {
    let mut errors = ValidationErrors::new();
    let entity = read_entity(kind, item, &mut errors)?;
    errors.into_result()?;
    entity.ok_or_else(|| EdmError::Validation(ValidationErrors::new()))
}

/// Reads an entity, collecting its violations into `errors`.
///
/// The entity is returned even when it has violations so that record-level
/// checks can still run; `None` means the id was unusable.
fn read_entity(
    kind: EntityKind,
    item: &Json,
    errors: &mut ValidationErrors,
) -> Result<Option<Entity>> {
    let Json::Object(map) = item else {
        return Err(EdmError::Mapping(format!(
            "{} must be an object, found {item}",
            kind.record_key()
        )));
    };

    let id = match map.get("id") {
        Some(id) => value_from_mapping(id),
        None => return Err(EdmError::Mapping(format!("{} has no 'id'", kind.record_key()))),
    };

    let mut properties = PropertyMap::new();
    for (key, field) in map {
        if key == "id" {
            continue;
        }
        let items: &[Json] = match field {
            Json::Null => continue,
            Json::Array(items) => items,
            single => std::slice::from_ref(single),
        };
        let values = properties.entry(key.clone()).or_default();
        for item in items {
            match value_from_mapping(item) {
                Ok(value) => values.push(value),
                Err(EdmError::Mapping(message)) => return Err(EdmError::Mapping(message)),
                Err(e) => errors.push(Violation::field(kind.class_name(), key.clone(), e.to_string())),
            }
        }
    }

    let id = match id {
        Ok(Value::Reference(id)) => id,
        Ok(Value::Literal(literal)) => {
            return Err(EdmError::Mapping(format!(
                "{} id must be a reference, found {literal}",
                kind.record_key()
            )))
        },
        Err(EdmError::Mapping(message)) => return Err(EdmError::Mapping(message)),
        Err(e) => {
            errors.push(Violation::class(
                kind.class_name(),
                format!("id is not a valid identifier: {e}"),
            ));
            return Ok(None);
        },
    };

    let (entity, entity_errors) = Entity::assemble(kind, id, properties);
    errors.append(entity_errors);
    Ok(Some(entity))
}

impl EdmRecord {
    /// Converts the record to its nested-mapping form.
    ///
    /// Every list slot is present, empty ones as `[]`.
    #[must_use]
    pub fn to_mapping(&self) -> Json {
        let mut map = Map::new();
        for kind in EntityKind::ALL {
            let entities = self.entities_of(kind);
            let slot = if kind.cardinality().is_single() {
                entities.first().map_or(Json::Null, |e| entity_to_mapping(e))
            } else {
                Json::Array(entities.into_iter().map(entity_to_mapping).collect())
            };
            map.insert(kind.record_key().to_string(), slot);
        }
        Json::Object(map)
    }

    /// Rebuilds a record from its nested-mapping form.
    ///
    /// Unknown slot keys are rejected. Violations of all entities are
    /// collected before the cross-reference check.
    ///
    /// # Errors
    ///
    /// Returns [`EdmError::Mapping`] for malformed shapes, and
    /// [`EdmError::Validation`] if any entity or the cross-reference check
    /// fails.
    pub fn from_mapping(mapping: &Json) -> Result<Self> {
        let Json::Object(map) = mapping else {
            return Err(EdmError::Mapping(format!("record must be an object, found {mapping}")));
        };
        if let Some(key) = map.keys().find(|k| EntityKind::from_record_key(k).is_none()) {
            return Err(EdmError::Mapping(format!("unknown record slot '{key}'")));
        }

        let mut errors = ValidationErrors::new();
        let cho = read_slot(map, EntityKind::ProvidedCho, &mut errors)?;
        let agg = read_slot(map, EntityKind::Aggregation, &mut errors)?;

        let mut others = Vec::new();
        for kind in EntityKind::ALL {
            if kind.cardinality().is_single() {
                continue;
            }
            let items: &[Json] = match map.get(kind.record_key()) {
                None | Some(Json::Null) => continue,
                Some(Json::Array(items)) => items,
                Some(other) => {
                    return Err(EdmError::Mapping(format!(
                        "{} must be a list, found {other}",
                        kind.record_key()
                    )))
                },
            };
            for item in items {
                if let Some(entity) = read_entity(kind, item, &mut errors)? {
                    others.push(entity);
                }
            }
        }

        if let (Some(cho), Some(agg)) = (&cho, &agg) {
            let aggregated = agg.reference("edm_aggregatedCHO").map(Reference::as_str);
            if let Some(violation) = check_cross_reference(cho.id().as_str(), aggregated) {
                errors.push(violation);
            }
        }

        errors.into_result()?;
        let (Some(cho), Some(agg)) = (cho, agg) else {
            return Err(EdmError::Validation(ValidationErrors::new()));
        };
        Self::from_entities(
            ProvidedCho::try_from_entity(cho)?,
            Aggregation::try_from_entity(agg)?,
            others,
        )
    }

    /// Reads a record from the JSON text of its mapping form.
    ///
    /// # Errors
    ///
    /// Returns [`EdmError::Mapping`] if `json` does not parse, otherwise the
    /// errors of [`EdmRecord::from_mapping`].
    pub fn from_json_str(json: &str) -> Result<Self> {
        let mapping: Json =
            serde_json::from_str(json).map_err(|e| EdmError::Mapping(e.to_string()))?;
        Self::from_mapping(&mapping)
    }

    /// The mapping form as pretty-printed JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`EdmError::Serialization`] if JSON encoding fails.
    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.to_mapping())
            .map_err(|e| EdmError::Serialization(e.to_string()))
    }
}

fn read_slot(
    map: &Map<String, Json>,
    kind: EntityKind,
    errors: &mut ValidationErrors,
) -> Result<Option<Entity>> {
    match map.get(kind.record_key()) {
        Some(item) if !item.is_null() => read_entity(kind, item, errors),
        _ => Err(EdmError::Multiplicity {
            class: kind.class_name(),
            count: 0,
        }),
    }
}

impl Serialize for EdmRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.to_mapping().serialize(serializer)
    }
}
