//! The EDM record aggregate.
//!
//! An [`EdmRecord`] binds exactly one [`ProvidedCho`] and one [`Aggregation`]
//! to optional lists of the contextual classes. Construction checks that the
//! aggregation points at the ProvidedCHO; every entity has already passed its
//! own validation by the time it reaches the record.

use std::io::Write;

use tracing::debug;

use crate::config::RdfFormat;
use crate::entity::{
    Agent, Aggregation, Concept, EdmClass, Entity, License, Place, ProvidedCho, Service, TimeSpan,
    WebResource,
};
use crate::error::{EdmError, Result, ValidationErrors, Violation};
use crate::namespaces;
use crate::rdf::{RdfGraph, RdfNode};
use crate::schema::EntityKind;

/// Class name used for record-level violations.
pub const RECORD_CLASS: &str = "EDM_Record";

/// A complete, validated EDM record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdmRecord {
    provided_cho: ProvidedCho,
    aggregation: Aggregation,
    web_resource: Vec<WebResource>,
    skos_concept: Vec<Concept>,
    edm_agent: Vec<Agent>,
    edm_time_span: Vec<TimeSpan>,
    edm_place: Vec<Place>,
    cc_license: Vec<License>,
    svcs_service: Vec<Service>,
}

/// Checks that `aggregation.edm_aggregatedCHO` names the ProvidedCHO.
///
/// The message includes both values.
#[must_use]
pub fn check_cross_reference(cho_id: &str, aggregated_cho: Option<&str>) -> Option<Violation> {
    match aggregated_cho {
        Some(aggregated) if aggregated == cho_id => None,
        Some(aggregated) => Some(Violation::field(
            RECORD_CLASS,
            "edm_aggregatedCHO",
            format!(
                "URIs of providedCHO and aggregation.edm_aggregatedCHO do not match: \
                 provided_cho.id='{cho_id}' != aggregation.edm_aggregatedCHO='{aggregated}'"
            ),
        )),
        None => Some(Violation::field(
            RECORD_CLASS,
            "edm_aggregatedCHO",
            format!("aggregation does not reference provided_cho.id='{cho_id}'"),
        )),
    }
}

impl EdmRecord {
    /// Creates a record with no contextual entities.
    ///
    /// # Errors
    ///
    /// Returns [`EdmError::Validation`] if the aggregation does not point at
    /// the ProvidedCHO.
    pub fn new(provided_cho: ProvidedCho, aggregation: Aggregation) -> Result<Self> {
        Self::builder(provided_cho, aggregation).build()
    }

    /// Starts building a record.
    #[must_use]
    pub fn builder(provided_cho: ProvidedCho, aggregation: Aggregation) -> EdmRecordBuilder {
        EdmRecordBuilder {
            record: Self {
                provided_cho,
                aggregation,
                web_resource: Vec::new(),
                skos_concept: Vec::new(),
                edm_agent: Vec::new(),
                edm_time_span: Vec::new(),
                edm_place: Vec::new(),
                cc_license: Vec::new(),
                svcs_service: Vec::new(),
            },
        }
    }

    /// Builds a record from generic entities, sorting them into their slots.
    ///
    /// # Errors
    ///
    /// Returns [`EdmError::Multiplicity`] if `entities` holds another
    /// ProvidedCHO or Aggregation, or [`EdmError::Validation`] if the
    /// cross-reference check fails.
    pub fn from_entities(
        provided_cho: ProvidedCho,
        aggregation: Aggregation,
        entities: impl IntoIterator<Item = Entity>,
    ) -> Result<Self> {
        let mut builder = Self::builder(provided_cho, aggregation);
        for entity in entities {
            builder = builder.entity(entity)?;
        }
        builder.build()
    }

    /// Record-level violations.
    #[must_use]
    pub fn violations(&self) -> ValidationErrors {
        let aggregated = self
            .aggregation
            .entity()
            .reference("edm_aggregatedCHO")
            .map(crate::Reference::as_str);
        check_cross_reference(self.provided_cho.id().as_str(), aggregated)
            .into_iter()
            .collect::<Vec<_>>()
            .into()
    }

    /// The ProvidedCHO.
    #[must_use]
    pub const fn provided_cho(&self) -> &ProvidedCho {
        &self.provided_cho
    }

    /// The Aggregation.
    #[must_use]
    pub const fn aggregation(&self) -> &Aggregation {
        &self.aggregation
    }

    /// The web resources.
    #[must_use]
    pub fn web_resource(&self) -> &[WebResource] {
        &self.web_resource
    }

    /// The SKOS concepts.
    #[must_use]
    pub fn skos_concept(&self) -> &[Concept] {
        &self.skos_concept
    }

    /// The agents.
    #[must_use]
    pub fn edm_agent(&self) -> &[Agent] {
        &self.edm_agent
    }

    /// The time spans.
    #[must_use]
    pub fn edm_time_span(&self) -> &[TimeSpan] {
        &self.edm_time_span
    }

    /// The places.
    #[must_use]
    pub fn edm_place(&self) -> &[Place] {
        &self.edm_place
    }

    /// The licenses.
    #[must_use]
    pub fn cc_license(&self) -> &[License] {
        &self.cc_license
    }

    /// The services.
    #[must_use]
    pub fn svcs_service(&self) -> &[Service] {
        &self.svcs_service
    }

    /// The entities of one slot, in insertion order.
    #[must_use]
    pub fn entities_of(&self, kind: EntityKind) -> Vec<&Entity> {
        fn all<T: EdmClass>(items: &[T]) -> Vec<&Entity> {
            items.iter().map(EdmClass::entity).collect()
        }
        match kind {
            EntityKind::ProvidedCho => vec![self.provided_cho.entity()],
            EntityKind::Aggregation => vec![self.aggregation.entity()],
            EntityKind::WebResource => all(&self.web_resource),
            EntityKind::Concept => all(&self.skos_concept),
            EntityKind::Agent => all(&self.edm_agent),
            EntityKind::TimeSpan => all(&self.edm_time_span),
            EntityKind::Place => all(&self.edm_place),
            EntityKind::License => all(&self.cc_license),
            EntityKind::Service => all(&self.svcs_service),
        }
    }

    /// Iterates every entity in emission order.
    pub fn entities(&self) -> impl Iterator<Item = &Entity> {
        EntityKind::ALL
            .into_iter()
            .flat_map(move |kind| self.entities_of(kind))
    }

    /// Total number of entities, including the ProvidedCHO and Aggregation.
    #[must_use]
    pub fn entity_count(&self) -> usize {
        self.entities().count()
    }

    /// Finds the first entity with the given identifier.
    #[must_use]
    pub fn find_entity(&self, id: &str) -> Option<&Entity> {
        self.entities().find(|entity| entity.id().as_str() == id)
    }

    /// Builds the RDF graph of the record.
    ///
    /// Entities are emitted slot by slot; each contributes its `rdf:type`
    /// triple followed by one triple per value, in schema order.
    #[must_use]
    pub fn to_graph(&self) -> RdfGraph {
        let mut graph = RdfGraph::new();
        for entity in self.entities() {
            let subject = RdfNode::uri(entity.id().as_str());
            graph.add(
                subject.clone(),
                namespaces::RDF_TYPE,
                RdfNode::uri(entity.kind().class_uri()),
            );
            for (spec, values) in entity.properties() {
                let predicate = spec.predicate();
                for value in values {
                    graph.add(subject.clone(), predicate.clone(), RdfNode::from(value));
                }
            }
        }
        debug!(
            entities = self.entity_count(),
            triples = graph.len(),
            "built record graph"
        );
        graph
    }

    /// Serializes the record in the given format.
    ///
    /// Element order in the output follows the graph serializer, not EDM's
    /// documented element order.
    ///
    /// # Errors
    ///
    /// Returns [`EdmError::Serialization`] if an IRI is rejected by the
    /// serializer.
    pub fn serialize(&self, format: RdfFormat) -> Result<String> {
        self.to_graph().serialize(format)
    }

    /// Serializes the record to a writer.
    ///
    /// # Errors
    ///
    /// Returns [`EdmError::Serialization`] if serialization fails.
    pub fn serialize_to_writer<W: Write>(&self, writer: W, format: RdfFormat) -> Result<()> {
        self.to_graph().serialize_to_writer(writer, format)
    }
}

/// Builder for [`EdmRecord`].
#[derive(Debug, Clone)]
pub struct EdmRecordBuilder {
    record: EdmRecord,
}

impl EdmRecordBuilder {
    /// Adds a web resource.
    #[must_use]
    pub fn web_resource(mut self, item: WebResource) -> Self {
        self.record.web_resource.push(item);
        self
    }

    /// Adds a SKOS concept.
    #[must_use]
    pub fn skos_concept(mut self, item: Concept) -> Self {
        self.record.skos_concept.push(item);
        self
    }

    /// Adds an agent.
    #[must_use]
    pub fn edm_agent(mut self, item: Agent) -> Self {
        self.record.edm_agent.push(item);
        self
    }

    /// Adds a time span.
    #[must_use]
    pub fn edm_time_span(mut self, item: TimeSpan) -> Self {
        self.record.edm_time_span.push(item);
        self
    }

    /// Adds a place.
    #[must_use]
    pub fn edm_place(mut self, item: Place) -> Self {
        self.record.edm_place.push(item);
        self
    }

    /// Adds a license.
    #[must_use]
    pub fn cc_license(mut self, item: License) -> Self {
        self.record.cc_license.push(item);
        self
    }

    /// Adds a service.
    #[must_use]
    pub fn svcs_service(mut self, item: Service) -> Self {
        self.record.svcs_service.push(item);
        self
    }

    /// Adds a generic entity to the slot of its kind.
    ///
    /// # Errors
    ///
    /// Returns [`EdmError::Multiplicity`] for a second ProvidedCHO or
    /// Aggregation.
    pub fn entity(self, entity: Entity) -> Result<Self> {
        Ok(match entity.kind() {
            kind @ (EntityKind::ProvidedCho | EntityKind::Aggregation) => {
                return Err(EdmError::Multiplicity {
                    class: kind.class_name(),
                    count: 2,
                });
            },
            EntityKind::WebResource => self.web_resource(WebResource::try_from_entity(entity)?),
            EntityKind::Concept => self.skos_concept(Concept::try_from_entity(entity)?),
            EntityKind::Agent => self.edm_agent(Agent::try_from_entity(entity)?),
            EntityKind::TimeSpan => self.edm_time_span(TimeSpan::try_from_entity(entity)?),
            EntityKind::Place => self.edm_place(Place::try_from_entity(entity)?),
            EntityKind::License => self.cc_license(License::try_from_entity(entity)?),
            EntityKind::Service => self.svcs_service(Service::try_from_entity(entity)?),
        })
    }

    /// Checks the record-level invariants and returns the record.
    ///
    /// # Errors
    ///
    /// Returns [`EdmError::Validation`] if the aggregation does not point at
    /// the ProvidedCHO.
    pub fn build(self) -> Result<EdmRecord> {
        self.record.violations().into_result()?;
        Ok(self.record)
    }
}
