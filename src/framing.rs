//! Nested JSON-LD-like projection of a record.
//!
//! The flat entity set is folded into one tree rooted at the Aggregation.
//! `edm:aggregatedCHO` holds the ProvidedCHO node, and any reference to a
//! web resource, agent or concept of the same record is replaced by that
//! entity's node. Inlining goes one hop deep: inlined nodes keep their own
//! references as `{"@id": ...}`.
//!
//! Every other entity (services, places, time spans, licenses, and web
//! resources, agents or concepts that the root does not reference) is listed
//! flat under `@graph`, so no entity of the record is lost.

use std::collections::{HashMap, HashSet};

use serde_json::{json, Map, Value as Json};

use crate::entity::{EdmClass, Entity};
use crate::namespaces::Namespace;
use crate::record::EdmRecord;
use crate::schema::EntityKind;
use crate::value::Value;

/// Key for node identifiers.
pub const ID_KEY: &str = "@id";
/// Key for node types.
pub const TYPE_KEY: &str = "@type";
/// Key for the prefix context.
pub const CONTEXT_KEY: &str = "@context";
/// Key for the flat list of entities that are not inlined.
pub const GRAPH_KEY: &str = "@graph";

type InlineIndex<'r> = HashMap<&'r str, &'r Entity>;

/// The `@context` object mapping every prefix to its namespace IRI.
#[must_use]
pub fn context() -> Json {
    let mut map = Map::new();
    for ns in Namespace::ALL {
        map.insert(ns.prefix().to_string(), Json::String(ns.iri().to_string()));
    }
    Json::Object(map)
}

impl EdmRecord {
    /// Builds the framed projection of this record.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let framed = record.framed_projection();
    /// let cho = &framed["edm:aggregatedCHO"];
    /// assert_eq!(cho["@type"], "edm:ProvidedCHO");
    /// ```
    #[must_use]
    pub fn framed_projection(&self) -> Json {
        let index: InlineIndex<'_> = self
            .entities()
            .filter(|e| e.kind().is_inlineable())
            .map(|e| (e.id().as_str(), e))
            .collect();

        let aggregation = self.aggregation().entity();
        let cho = self.provided_cho().entity();
        let inlined: HashSet<&str> = aggregation
            .references()
            .chain(cho.references())
            .map(|reference| reference.as_str())
            .filter(|id| index.contains_key(id))
            .collect();

        let mut root = Map::new();
        root.insert(CONTEXT_KEY.to_string(), context());
        root.extend(frame_node(aggregation, Some(&index)));

        if let Some(spec) = EntityKind::Aggregation.property("edm_aggregatedCHO") {
            root.insert(spec.compact_name(), Json::Object(frame_node(cho, Some(&index))));
        }

        let flat: Vec<Json> = self
            .entities()
            .filter(|e| !matches!(e.kind(), EntityKind::ProvidedCho | EntityKind::Aggregation))
            .filter(|e| !(e.kind().is_inlineable() && inlined.contains(e.id().as_str())))
            .map(|e| Json::Object(frame_node(e, None)))
            .collect();
        root.insert(GRAPH_KEY.to_string(), Json::Array(flat));
        Json::Object(root)
    }
}

/// One entity as a node; `index` is `None` for nodes that are themselves
/// inlined.
fn frame_node(entity: &Entity, index: Option<&InlineIndex<'_>>) -> Map<String, Json> {
    let mut node = Map::new();
    node.insert(ID_KEY.to_string(), Json::String(entity.id().as_str().to_string()));
    node.insert(TYPE_KEY.to_string(), Json::String(entity.kind().class_name().to_string()));

    for (spec, values) in entity.properties() {
        let framed: Vec<Json> = values.iter().map(|v| frame_value(v, index)).collect();
        let field = if spec.is_single() {
            framed.into_iter().next().unwrap_or(Json::Null)
        } else {
            Json::Array(framed)
        };
        node.insert(spec.compact_name(), field);
    }
    node
}

fn frame_value(value: &Value, index: Option<&InlineIndex<'_>>) -> Json {
    match value {
        Value::Reference(reference) => {
            match index.and_then(|index| index.get(reference.as_str())) {
                Some(target) => Json::Object(frame_node(target, None)),
                None => json!({ ID_KEY: reference.as_str() }),
            }
        },
        Value::Literal(literal) => {
            let mut map = Map::new();
            map.insert("@value".to_string(), Json::String(literal.value().to_string()));
            if let Some(lang) = literal.lang() {
                map.insert("@language".to_string(), Json::String(lang.to_string()));
            }
            if let Some(datatype) = literal.datatype() {
                map.insert(TYPE_KEY.to_string(), Json::String(datatype.to_string()));
            }
            Json::Object(map)
        },
    }
}
