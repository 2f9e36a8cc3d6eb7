//! Graph-to-record parsing.
//!
//! [`EdmParser`] owns one source [`RdfGraph`] and turns it into an
//! [`EdmRecord`]:
//!
//! 1. the ProvidedCHO and the Aggregation are located by `rdf:type`; each
//!    must occur exactly once ([`EdmError::Multiplicity`] otherwise)
//! 2. the other classes are located by `rdf:type`; web resources are also
//!    reached through the resource links of the aggregation
//! 3. each instance's triples are mapped to fields through the schema
//!    registry; a single-valued field with several values is fatal
//!    ([`EdmError::MultipleValues`])
//! 4. missing aggregation provenance is filled in by
//!    [`fill_aggregation_defaults`] when the config asks for it
//! 5. every entity is validated and the record cross-reference is checked;
//!    all violations are reported together as [`EdmError::Validation`]
//!
//! # Examples
//!
//! ```ignore
//! use edmrs::{EdmParser, RdfFormat};
//!
//! let record = EdmParser::from_str(xml, RdfFormat::RdfXml)?.parse()?;
//! println!("{} web resources", record.web_resource().len());
//! ```

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use tracing::{debug, warn};

use crate::config::{ParserConfig, RdfFormat};
use crate::entity::{Aggregation, EdmClass, Entity, PropertyMap, ProvidedCho};
use crate::error::{EdmError, Result, ValidationErrors, Violation};
use crate::namespaces;
use crate::rdf::{RdfGraph, RdfNode};
use crate::record::{check_cross_reference, EdmRecord};
use crate::schema::{EntityKind, PropertySpec};
use crate::value::{Reference, Value};

/// Aggregation fields whose targets may be web resources.
const WEB_RESOURCE_LINKS: &[&str] = &["edm_hasView", "edm_isShownBy", "edm_isShownAt", "edm_object"];

type SubjectIndex<'g> = HashMap<&'g RdfNode, Vec<(&'g str, &'g RdfNode)>>;

/// Parser from an RDF graph to an [`EdmRecord`].
#[derive(Debug, Clone)]
pub struct EdmParser {
    graph: RdfGraph,
    config: ParserConfig,
}

impl EdmParser {
    /// Wraps an already-built graph.
    #[must_use]
    pub fn from_graph(graph: RdfGraph) -> Self {
        Self {
            graph,
            config: ParserConfig::default(),
        }
    }

    /// Parses serialized RDF from a string.
    ///
    /// # Errors
    ///
    /// Returns [`EdmError::Format`] if `content` is not valid `format`.
    pub fn from_str(content: &str, format: RdfFormat) -> Result<Self> {
        Self::from_reader(content.as_bytes(), format)
    }

    /// Parses serialized RDF from a reader.
    ///
    /// # Errors
    ///
    /// Returns [`EdmError::Format`] if the input is not valid `format`.
    pub fn from_reader<R: Read>(reader: R, format: RdfFormat) -> Result<Self> {
        Self::from_reader_with_config(reader, format, ParserConfig::default())
    }

    /// Parses serialized RDF from a reader, resolving relative IRIs against
    /// `config.base_iri`.
    ///
    /// # Errors
    ///
    /// Returns [`EdmError::Format`] if the input is not valid `format`.
    pub fn from_reader_with_config<R: Read>(
        reader: R,
        format: RdfFormat,
        config: ParserConfig,
    ) -> Result<Self> {
        let graph = RdfGraph::parse_from_reader(reader, format, config.base_iri.as_deref())?;
        debug!(triples = graph.len(), %format, "loaded source graph");
        Ok(Self { graph, config })
    }

    /// Parses serialized RDF from a file.
    ///
    /// # Errors
    ///
    /// Returns [`EdmError::IoError`] if the file cannot be opened, or
    /// [`EdmError::Format`] if its content is not valid `format`.
    pub fn from_file(path: impl AsRef<Path>, format: RdfFormat) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        Self::from_reader(BufReader::new(file), format)
    }

    /// Parses a file, guessing the format from its extension.
    ///
    /// # Errors
    ///
    /// Returns [`EdmError::Format`] if the extension is unknown or the content
    /// does not parse, or [`EdmError::IoError`] if the file cannot be opened.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let format = RdfFormat::from_path(path).ok_or_else(|| {
            EdmError::Format(format!(
                "Cannot guess RDF format from file name '{}'",
                path.display()
            ))
        })?;
        Self::from_file(path, format)
    }

    /// Replaces the parse configuration.
    ///
    /// `base_iri` only takes effect in [`EdmParser::from_reader_with_config`],
    /// since the other constructors parse the bytes immediately.
    #[must_use]
    pub fn with_config(mut self, config: ParserConfig) -> Self {
        self.config = config;
        self
    }

    /// The source graph.
    #[must_use]
    pub const fn graph(&self) -> &RdfGraph {
        &self.graph
    }

    /// The active configuration.
    #[must_use]
    pub const fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Assembles and validates the record.
    ///
    /// # Errors
    ///
    /// - [`EdmError::Multiplicity`] if there is not exactly one ProvidedCHO
    ///   and one Aggregation
    /// - [`EdmError::MultipleValues`] if a single-valued field has several
    ///   values
    /// - [`EdmError::Validation`] listing every violated rule
    pub fn parse(&self) -> Result<EdmRecord> {
        let index = self.graph.subject_index();
        let cho_subject = self.single_instance(EntityKind::ProvidedCho)?;
        let agg_subject = self.single_instance(EntityKind::Aggregation)?;

        let mut errors = ValidationErrors::new();

        let cho_props = extract(EntityKind::ProvidedCho, cho_subject, &index, &mut errors)?;
        let mut agg_props = extract(EntityKind::Aggregation, agg_subject, &index, &mut errors)?;
        if self.config.fill_defaults {
            fill_aggregation_defaults(&mut agg_props, &self.config);
        }

        let aggregated_cho = agg_props
            .get("edm_aggregatedCHO")
            .and_then(|values| values.first())
            .map(Value::text);
        if let Some(violation) = check_cross_reference(&subject_text(cho_subject), aggregated_cho) {
            errors.push(violation);
        }

        let cho = assemble(EntityKind::ProvidedCho, cho_subject, cho_props, &mut errors);
        let agg = assemble(EntityKind::Aggregation, agg_subject, agg_props, &mut errors);

        let mut others = Vec::new();
        for kind in EntityKind::ALL {
            if kind.cardinality().is_required() {
                continue;
            }
            let subjects = self.discover(kind, agg_subject, &index);
            debug!(class = kind.class_name(), count = subjects.len(), "discovered instances");
            for subject in subjects {
                let props = extract(kind, subject, &index, &mut errors)?;
                if let Some(entity) = assemble(kind, subject, props, &mut errors) {
                    others.push(entity);
                }
            }
        }

        errors.into_result()?;
        let (Some(cho), Some(agg)) = (cho, agg) else {
            return Err(EdmError::Validation(ValidationErrors::new()));
        };
        EdmRecord::from_entities(
            ProvidedCho::try_from_entity(cho)?,
            Aggregation::try_from_entity(agg)?,
            others,
        )
    }

    fn single_instance(&self, kind: EntityKind) -> Result<&RdfNode> {
        let subjects = self.graph.subjects_of_type(&kind.class_uri());
        match subjects.as_slice() {
            [subject] => Ok(*subject),
            _ => Err(EdmError::Multiplicity {
                class: kind.class_name(),
                count: subjects.len(),
            }),
        }
    }

    /// Instances of a list-valued class.
    ///
    /// Web resources are the union of typed subjects and described targets
    /// of the aggregation's resource links that carry no other EDM type.
    fn discover<'g>(
        &'g self,
        kind: EntityKind,
        aggregation: &RdfNode,
        index: &SubjectIndex<'g>,
    ) -> Vec<&'g RdfNode> {
        let mut subjects = self.graph.subjects_of_type(&kind.class_uri());
        if kind != EntityKind::WebResource {
            return subjects;
        }

        let link_predicates: Vec<String> = WEB_RESOURCE_LINKS
            .iter()
            .filter_map(|name| EntityKind::Aggregation.property(name))
            .map(PropertySpec::predicate)
            .collect();
        let Some(agg_triples) = index.get(aggregation) else {
            return subjects;
        };
        for (predicate, target) in agg_triples {
            if !link_predicates.iter().any(|p| p == predicate) || subjects.contains(target) {
                continue;
            }
            let Some(target_triples) = index.get(*target) else {
                continue;
            };
            let typed_otherwise = target_triples.iter().any(|(p, o)| {
                *p == namespaces::RDF_TYPE
                    && o.as_uri()
                        .and_then(EntityKind::from_class_uri)
                        .is_some_and(|k| k != EntityKind::WebResource)
            });
            if !typed_otherwise {
                subjects.push(*target);
            }
        }
        subjects
    }
}

fn subject_text(subject: &RdfNode) -> String {
    match subject {
        RdfNode::Uri(uri) => uri.clone(),
        RdfNode::BlankNode(id) => format!("_:{id}"),
        RdfNode::Literal { value, .. } => value.clone(),
    }
}

/// Collects the schema fields of one subject.
///
/// Predicates outside the schema are ignored. Objects that cannot be values
/// (blank nodes, malformed URIs) become violations.
fn extract(
    kind: EntityKind,
    subject: &RdfNode,
    index: &SubjectIndex<'_>,
    errors: &mut ValidationErrors,
) -> Result<PropertyMap> {
    let by_predicate: HashMap<String, &PropertySpec> = kind
        .properties()
        .iter()
        .map(|spec| (spec.predicate(), spec))
        .collect();

    let mut properties = PropertyMap::new();
    for (predicate, object) in index.get(subject).into_iter().flatten() {
        let Some(spec) = by_predicate.get(*predicate) else {
            continue;
        };
        match Value::try_from(*object) {
            Ok(value) => properties
                .entry(spec.name.to_string())
                .or_default()
                .push(value),
            Err(e) => errors.push(Violation::field(kind.class_name(), spec.name, e.to_string())),
        }
    }

    for (name, values) in &properties {
        let Some(spec) = kind.property(name) else {
            continue;
        };
        let count = values
            .iter()
            .filter(|v| !matches!(v, Value::Literal(lit) if lit.is_empty()))
            .count();
        if spec.is_single() && count > 1 {
            return Err(EdmError::MultipleValues {
                class: kind.class_name(),
                field: spec.name,
                count,
            });
        }
    }

    Ok(properties)
}

/// Validates one instance; `None` if its subject is not a usable identifier.
fn assemble(
    kind: EntityKind,
    subject: &RdfNode,
    properties: PropertyMap,
    errors: &mut ValidationErrors,
) -> Option<Entity> {
    let id = match subject {
        RdfNode::Uri(uri) => Reference::new(uri),
        _ => Err(EdmError::InvalidRef(subject_text(subject))),
    };
    let id = match id {
        Ok(id) => id,
        Err(e) => {
            errors.push(Violation::class(
                kind.class_name(),
                format!("subject is not a valid identifier: {e}"),
            ));
            // Report field violations too.
            let mut properties = properties;
            errors.append(crate::validation::check_entity(kind, &mut properties));
            return None;
        },
    };

    let (entity, entity_errors) = Entity::assemble(kind, id, properties);
    let valid = entity_errors.is_empty();
    errors.append(entity_errors);
    valid.then_some(entity)
}

/// Fills the aggregation's `edm_provider` and `edm_rights` from `config`
/// when the source has no non-empty value for them.
///
/// Returns the names of the injected fields. The default rights statement is
/// a placeholder that does not validate, so a record without rights still
/// fails; only the provider default lets a record pass.
pub fn fill_aggregation_defaults(
    properties: &mut PropertyMap,
    config: &ParserConfig,
) -> Vec<&'static str> {
    let mut injected = Vec::new();

    if !has_value(properties, "edm_provider") {
        properties.insert(
            "edm_provider".to_string(),
            vec![Value::Literal(config.default_provider.clone())],
        );
        injected.push("edm_provider");
    }

    if !has_value(properties, "edm_rights") {
        if let Some(rights) = Reference::try_new(&config.default_rights) {
            properties.insert("edm_rights".to_string(), vec![Value::Reference(rights)]);
            injected.push("edm_rights");
        }
    }

    if !injected.is_empty() {
        warn!(fields = ?injected, "injected aggregation defaults");
    }
    injected
}

fn has_value(properties: &PropertyMap, field: &str) -> bool {
    properties.get(field).is_some_and(|values| {
        values
            .iter()
            .any(|v| !matches!(v, Value::Literal(lit) if lit.is_empty()))
    })
}
