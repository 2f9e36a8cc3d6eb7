//! EDM entity models.
//!
//! An [`Entity`] is one instance of an EDM class: its [`EntityKind`], its
//! identifier, and its field values keyed by schema field name. Construction
//! always goes through [`crate::validation::check_entity`], so every
//! `Entity` that exists satisfies the field-level rules of its class.
//!
//! The typed classes ([`ProvidedCho`], [`Aggregation`], ...) wrap an
//! `Entity` and add one accessor per field.
//!
//! # Examples
//!
//! ```ignore
//! use edmrs::{Concept, Literal, Reference};
//!
//! let concept = Concept::builder(Reference::new("http://vocab.getty.edu/aat/300041273")?)
//!     .add("skos_prefLabel", Literal::lang_tagged("prints", "en"))
//!     .build()?;
//! assert_eq!(concept.skos_pref_label().len(), 1);
//! ```

use std::marker::PhantomData;

use indexmap::IndexMap;

use crate::edm_class;
use crate::error::{Result, ValidationErrors};
use crate::schema::{EntityKind, PropertySpec};
use crate::validation::check_entity;
use crate::value::{Literal, Reference, Value};

/// Raw field values keyed by field name, before validation.
///
/// Unknown names are allowed here; validation reports them.
pub type PropertyMap = IndexMap<String, Vec<Value>>;

/// One validated instance of an EDM class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    kind: EntityKind,
    id: Reference,
    properties: IndexMap<&'static str, Vec<Value>>,
}

impl Entity {
    /// Validates `properties` against the schema of `kind` and builds the entity.
    ///
    /// Empty literals are dropped and rights statements are normalized before
    /// the checks run; the stored values are the cleaned ones.
    ///
    /// # Errors
    ///
    /// Returns [`crate::EdmError::Validation`] listing every violated rule.
    pub fn new(kind: EntityKind, id: Reference, properties: PropertyMap) -> Result<Self> {
        let (entity, errors) = Self::assemble(kind, id, properties);
        errors.into_result()?;
        Ok(entity)
    }

    /// Starts building an entity of `kind`.
    #[must_use]
    pub fn builder(kind: EntityKind, id: Reference) -> EntityBuilder {
        EntityBuilder::new(kind, id)
    }

    /// Builds the entity and returns it together with its violations.
    ///
    /// Used where violations of several entities are collected before
    /// failing. Unknown fields are left out of the returned entity.
    pub(crate) fn assemble(
        kind: EntityKind,
        id: Reference,
        mut properties: PropertyMap,
    ) -> (Self, ValidationErrors) {
        let errors = check_entity(kind, &mut properties);

        let mut ordered = IndexMap::new();
        for spec in kind.properties() {
            if let Some(values) = properties.swap_remove(spec.name) {
                if !values.is_empty() {
                    ordered.insert(spec.name, values);
                }
            }
        }

        let entity = Self {
            kind,
            id,
            properties: ordered,
        };
        (entity, errors)
    }

    /// The EDM class of this entity.
    #[must_use]
    pub const fn kind(&self) -> EntityKind {
        self.kind
    }

    /// The identifier of this entity.
    #[must_use]
    pub const fn id(&self) -> &Reference {
        &self.id
    }

    /// All values of a field; empty if the field is absent or unknown.
    #[must_use]
    pub fn values(&self, field: &str) -> &[Value] {
        self.properties.get(field).map_or(&[], Vec::as_slice)
    }

    /// The first value of a field.
    #[must_use]
    pub fn first(&self, field: &str) -> Option<&Value> {
        self.values(field).first()
    }

    /// The first value of a field, if it is a literal.
    #[must_use]
    pub fn literal(&self, field: &str) -> Option<&Literal> {
        self.first(field).and_then(Value::as_literal)
    }

    /// The first value of a field, if it is a reference.
    #[must_use]
    pub fn reference(&self, field: &str) -> Option<&Reference> {
        self.first(field).and_then(Value::as_reference)
    }

    /// Returns true if the field has at least one value.
    #[must_use]
    pub fn has(&self, field: &str) -> bool {
        self.properties.contains_key(field)
    }

    /// Iterates the present fields in schema order.
    pub fn properties(&self) -> impl Iterator<Item = (&'static PropertySpec, &[Value])> + '_ {
        self.kind.properties().iter().filter_map(|spec| {
            self.properties
                .get(spec.name)
                .map(|values| (spec, values.as_slice()))
        })
    }

    /// Iterates every reference value of every field.
    pub fn references(&self) -> impl Iterator<Item = &Reference> {
        self.properties
            .values()
            .flatten()
            .filter_map(Value::as_reference)
    }

    /// Number of present fields.
    #[must_use]
    pub fn field_count(&self) -> usize {
        self.properties.len()
    }

    /// Copies the fields into a plain map, e.g. to derive a modified entity.
    #[must_use]
    pub fn to_property_map(&self) -> PropertyMap {
        self.properties
            .iter()
            .map(|(name, values)| ((*name).to_string(), values.clone()))
            .collect()
    }
}

/// Builder for [`Entity`].
#[derive(Debug, Clone)]
pub struct EntityBuilder {
    kind: EntityKind,
    id: Reference,
    properties: PropertyMap,
}

impl EntityBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new(kind: EntityKind, id: Reference) -> Self {
        Self {
            kind,
            id,
            properties: PropertyMap::new(),
        }
    }

    /// Appends one value to a field.
    #[must_use]
    pub fn add(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties
            .entry(field.into())
            .or_default()
            .push(value.into());
        self
    }

    /// Appends several values to a field.
    #[must_use]
    pub fn extend<I, V>(mut self, field: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.properties
            .entry(field.into())
            .or_default()
            .extend(values.into_iter().map(Into::into));
        self
    }

    /// Validates and builds the entity.
    ///
    /// # Errors
    ///
    /// Returns [`crate::EdmError::Validation`] listing every violated rule.
    pub fn build(self) -> Result<Entity> {
        Entity::new(self.kind, self.id, self.properties)
    }
}

/// A typed EDM class backed by an [`Entity`].
pub trait EdmClass: Sized {
    /// The schema class of this type.
    const KIND: EntityKind;

    /// The underlying entity.
    fn entity(&self) -> &Entity;

    /// Unwraps the underlying entity.
    fn into_entity(self) -> Entity;

    /// Wraps an entity, checking its kind.
    ///
    /// # Errors
    ///
    /// Returns [`crate::EdmError::Mapping`] if the entity is of another class.
    fn try_from_entity(entity: Entity) -> Result<Self>;
}

/// Builder for a typed EDM class.
#[derive(Debug, Clone)]
pub struct ClassBuilder<T> {
    inner: EntityBuilder,
    _class: PhantomData<T>,
}

impl<T: EdmClass> ClassBuilder<T> {
    /// Creates an empty builder.
    #[must_use]
    pub fn new(id: Reference) -> Self {
        Self {
            inner: EntityBuilder::new(T::KIND, id),
            _class: PhantomData,
        }
    }

    /// Appends one value to a field.
    #[must_use]
    pub fn add(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.inner = self.inner.add(field, value);
        self
    }

    /// Appends several values to a field.
    #[must_use]
    pub fn extend<I, V>(mut self, field: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.inner = self.inner.extend(field, values);
        self
    }

    /// Validates and builds the instance.
    ///
    /// # Errors
    ///
    /// Returns [`crate::EdmError::Validation`] listing every violated rule.
    pub fn build(self) -> Result<T> {
        T::try_from_entity(self.inner.build()?)
    }
}

edm_class! {
    /// An `edm:ProvidedCHO`: the described cultural heritage object.
    ProvidedCho => ProvidedCho {
        edm_type: one "edm_type",
        dc_contributor: many "dc_contributor",
        dc_coverage: many "dc_coverage",
        dc_creator: many "dc_creator",
        dc_date: many "dc_date",
        dc_description: many "dc_description",
        dc_format: many "dc_format",
        dc_identifier: many "dc_identifier",
        dc_language: many "dc_language",
        dc_publisher: many "dc_publisher",
        dc_relation: many "dc_relation",
        dc_rights: many "dc_rights",
        dc_source: many "dc_source",
        dc_subject: many "dc_subject",
        dc_title: many "dc_title",
        dc_type: many "dc_type",
        dcterms_alternative: many "dcterms_alternative",
        dcterms_conforms_to: many "dcterms_conformsTo",
        dcterms_created: many "dcterms_created",
        dcterms_extent: many "dcterms_extent",
        dcterms_has_format: many "dcterms_hasFormat",
        dcterms_has_part: many "dcterms_hasPart",
        dcterms_has_version: many "dcterms_hasVersion",
        dcterms_is_format_of: many "dcterms_isFormatOf",
        dcterms_is_part_of: many "dcterms_isPartOf",
        dcterms_is_referenced_by: many "dcterms_isReferencedBy",
        dcterms_is_replaced_by: many "dcterms_isReplacedBy",
        dcterms_is_required_by: many "dcterms_isRequiredBy",
        dcterms_issued: many "dcterms_issued",
        dcterms_is_version_of: many "dcterms_isVersionOf",
        dcterms_medium: many "dcterms_medium",
        dcterms_provenance: many "dcterms_provenance",
        dcterms_references: many "dcterms_references",
        dcterms_replaces: many "dcterms_replaces",
        dcterms_requires: many "dcterms_requires",
        dcterms_spatial: many "dcterms_spatial",
        dcterms_table_of_contents: many "dcterms_tableOfContents",
        dcterms_temporal: many "dcterms_temporal",
        edm_current_location: one "edm_currentLocation",
        edm_has_met: many "edm_hasMet",
        edm_has_type: many "edm_hasType",
        edm_incorporates: many "edm_incorporates",
        edm_is_derivative_of: many "edm_isDerivativeOf",
        edm_is_next_in_sequence: many "edm_isNextInSequence",
        edm_is_related_to: many "edm_isRelatedTo",
        edm_is_representation_of: one "edm_isRepresentationOf",
        edm_is_similar_to: many "edm_isSimilarTo",
        edm_is_successor_of: many "edm_isSuccessorOf",
        edm_realizes: many "edm_realizes",
        owl_same_as: many "owl_sameAs",
    }
}

edm_class! {
    /// An `ore:Aggregation`: provenance and access points of a ProvidedCHO.
    ///
    /// `edm_rights` holds the normalized rights statement.
    Aggregation => Aggregation {
        edm_aggregated_cho: one "edm_aggregatedCHO",
        edm_data_provider: one "edm_dataProvider",
        edm_provider: one "edm_provider",
        edm_rights: one "edm_rights",
        edm_has_view: many "edm_hasView",
        edm_is_shown_at: one "edm_isShownAt",
        edm_is_shown_by: one "edm_isShownBy",
        edm_object: one "edm_object",
        dc_rights: many "dc_rights",
        edm_ugc: one "edm_ugc",
        edm_intermediate_provider: many "edm_intermediateProvider",
    }
}

edm_class! {
    /// An `edm:WebResource`: a digital representation of the object.
    WebResource => WebResource {
        dc_creator: many "dc_creator",
        dc_description: many "dc_description",
        dc_format: many "dc_format",
        dc_rights: many "dc_rights",
        dc_source: many "dc_source",
        dc_type: many "dc_type",
        dcterms_conforms_to: many "dcterms_conformsTo",
        dcterms_created: many "dcterms_created",
        dcterms_extent: many "dcterms_extent",
        dcterms_has_part: many "dcterms_hasPart",
        dcterms_is_format_of: many "dcterms_isFormatOf",
        dcterms_is_part_of: many "dcterms_isPartOf",
        dcterms_is_referenced_by: many "dcterms_isReferencedBy",
        dcterms_issued: many "dcterms_issued",
        edm_is_next_in_sequence: one "edm_isNextInSequence",
        edm_rights: one "edm_rights",
        owl_same_as: many "owl_sameAs",
        svcs_has_service: many "svcs_has_service",
    }
}

edm_class! {
    /// An `edm:Agent`: a person or organization.
    Agent => Agent {
        skos_pref_label: many "skos_prefLabel",
        skos_alt_label: many "skos_altLabel",
        skos_note: many "skos_note",
        dc_date: many "dc_date",
        dc_identifier: many "dc_identifier",
        dcterms_has_part: many "dcterms_hasPart",
        dcterms_is_part_of: many "dcterms_isPartOf",
        edm_begin: one "edm_begin",
        edm_end: one "edm_end",
        edm_has_met: many "edm_hasMet",
        edm_is_related_to: many "edm_isRelatedTo",
        foaf_name: many "foaf_name",
        rdagr2_biographical_information: many "rdagr2_biographicalInformation",
        rdagr2_date_of_birth: one "rdagr2_dateOfBirth",
        rdagr2_date_of_death: one "rdagr2_dateOfDeath",
        rdagr2_date_of_establishment: one "rdagr2_dateOfEstablishment",
        rdagr2_date_of_termination: one "rdagr2_dateOfTermination",
        rdagr2_gender: one "rdagr2_gender",
        rdagr2_place_of_birth: one "rdagr2_placeOfBirth",
        rdagr2_place_of_death: one "rdagr2_placeOfDeath",
        rdagr2_profession_or_occupation: many "rdagr2_professionOrOccupation",
        owl_same_as: many "owl_sameAs",
    }
}

edm_class! {
    /// An `edm:Place`.
    Place => Place {
        wgs84_pos_lat: one "wgs84_pos_lat",
        wgs84_pos_long: one "wgs84_pos_long",
        wgs84_pos_alt: one "wgs84_pos_alt",
        skos_pref_label: many "skos_prefLabel",
        skos_alt_label: many "skos_altLabel",
        skos_note: many "skos_note",
        dcterms_has_part: many "dcterms_hasPart",
        dcterms_is_part_of: many "dcterms_isPartOf",
        edm_is_next_in_sequence: one "edm_isNextInSequence",
        owl_same_as: many "owl_sameAs",
    }
}

edm_class! {
    /// An `edm:TimeSpan`.
    TimeSpan => TimeSpan {
        skos_pref_label: many "skos_prefLabel",
        skos_alt_label: many "skos_altLabel",
        skos_note: many "skos_note",
        dcterms_has_part: many "dcterms_hasPart",
        dcterms_is_part_of: many "dcterms_isPartOf",
        edm_begin: one "edm_begin",
        edm_end: one "edm_end",
        edm_is_next_in_sequence: one "edm_isNextInSequence",
        owl_same_as: many "owl_sameAs",
    }
}

edm_class! {
    /// A `skos:Concept`.
    Concept => Concept {
        skos_pref_label: many "skos_prefLabel",
        skos_alt_label: many "skos_altLabel",
        skos_broader: many "skos_broader",
        skos_narrower: many "skos_narrower",
        skos_related: many "skos_related",
        skos_broad_match: many "skos_broadMatch",
        skos_narrow_match: many "skos_narrowMatch",
        skos_related_match: many "skos_relatedMatch",
        skos_exact_match: many "skos_exactMatch",
        skos_close_match: many "skos_closeMatch",
        skos_note: many "skos_note",
        skos_notation: many "skos_notation",
        skos_in_scheme: many "skos_inScheme",
    }
}

edm_class! {
    /// A `cc:License`.
    License => License {
        odrl_inherit_from: one "odrl_inheritFrom",
        cc_deprecated_on: one "cc_deprecatedOn",
    }
}

edm_class! {
    /// An `svcs:Service`, e.g. an IIIF image endpoint.
    Service => Service {
        dcterms_conforms_to: many "dcterms_conformsTo",
        doap_implements: one "doap_implements",
    }
}
