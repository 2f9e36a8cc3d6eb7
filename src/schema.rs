//! The schema registry: one static table per EDM class.
//!
//! Every field of every class is described by a [`PropertySpec`] (name,
//! cardinality, value kind, mandate). The predicate IRI of a field is derived
//! from its name: the part before the first `_` is a namespace prefix (with
//! `wgs84_pos` as the one two-part prefix), the rest is the local name.
//!
//! The parser, the graph serializer, the mapping projection and the
//! validators all consult these tables, so a field missing here is invisible
//! in every direction.

use std::fmt;

use crate::namespaces::Namespace;
use crate::value::Value;

/// How many values a field may hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cardinality {
    /// Exactly one value.
    ExactlyOne,
    /// Zero or one value.
    ZeroToOne,
    /// Any number of values.
    ZeroToMany,
}

impl Cardinality {
    /// Returns true for fields holding at most one value.
    #[must_use]
    pub const fn is_single(self) -> bool {
        matches!(self, Self::ExactlyOne | Self::ZeroToOne)
    }

    /// Returns true if at least one value is required.
    #[must_use]
    pub const fn is_required(self) -> bool {
        matches!(self, Self::ExactlyOne)
    }
}

impl fmt::Display for Cardinality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExactlyOne => write!(f, "exactly one"),
            Self::ZeroToOne => write!(f, "zero or one"),
            Self::ZeroToMany => write!(f, "zero or more"),
        }
    }
}

/// Which value kinds a field accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// Only [`crate::Literal`] values.
    Literal,
    /// Only [`crate::Reference`] values.
    Reference,
    /// Either kind.
    LiteralOrReference,
}

impl ValueKind {
    /// Returns true if `value` is of an accepted kind.
    #[must_use]
    pub const fn accepts(self, value: &Value) -> bool {
        match self {
            Self::Literal => value.is_literal(),
            Self::Reference => value.is_reference(),
            Self::LiteralOrReference => true,
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal => write!(f, "literal"),
            Self::Reference => write!(f, "reference"),
            Self::LiteralOrReference => write!(f, "literal or reference"),
        }
    }
}

/// EDM mandate level of a field.
///
/// Only [`Mandate::Mandatory`] is enforced generically; the recommended
/// fields that EDM requires in groups ("title or description") are enforced
/// by the class rules in [`crate::validation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mandate {
    /// At least one value must be present.
    Mandatory,
    /// Expected by aggregators; required in groups.
    Recommended,
    /// Free to omit.
    Optional,
}

/// Descriptor of one field of one EDM class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PropertySpec {
    /// Field name, `<prefix>_<localName>`.
    pub name: &'static str,
    /// Allowed number of values.
    pub cardinality: Cardinality,
    /// Allowed value kinds.
    pub kind: ValueKind,
    /// EDM mandate level.
    pub mandate: Mandate,
}

const WGS84_POS_PREFIX: &str = "wgs84_pos_";

impl PropertySpec {
    const fn new(
        name: &'static str,
        cardinality: Cardinality,
        kind: ValueKind,
        mandate: Mandate,
    ) -> Self {
        Self {
            name,
            cardinality,
            kind,
            mandate,
        }
    }

    fn split(&self) -> (&'static str, &'static str) {
        let name = self.name;
        if let Some(local) = name.strip_prefix(WGS84_POS_PREFIX) {
            return ("wgs84_pos", local);
        }
        name.split_once('_').unwrap_or(("", name))
    }

    /// The namespace of the field, resolved from its prefix.
    #[must_use]
    pub fn namespace(&self) -> Option<Namespace> {
        Namespace::from_prefix(self.split().0)
    }

    /// The local name, e.g. `isShownBy` for `edm_isShownBy`.
    #[must_use]
    pub fn local_name(&self) -> &'static str {
        self.split().1
    }

    /// The full predicate IRI.
    #[must_use]
    pub fn predicate(&self) -> String {
        match self.namespace() {
            Some(ns) => ns.term(self.local_name()),
            None => self.name.to_string(),
        }
    }

    /// The compact predicate name, e.g. `edm:isShownBy`.
    #[must_use]
    pub fn compact_name(&self) -> String {
        let (prefix, local) = self.split();
        format!("{prefix}:{local}")
    }

    /// Returns true if the field holds at most one value.
    #[must_use]
    pub const fn is_single(&self) -> bool {
        self.cardinality.is_single()
    }
}

/// The nine EDM classes a record can contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EntityKind {
    /// `edm:ProvidedCHO`
    ProvidedCho,
    /// `edm:WebResource`
    WebResource,
    /// `ore:Aggregation`
    Aggregation,
    /// `skos:Concept`
    Concept,
    /// `edm:Agent`
    Agent,
    /// `edm:TimeSpan`
    TimeSpan,
    /// `edm:Place`
    Place,
    /// `cc:License`
    License,
    /// `svcs:Service`
    Service,
}

impl EntityKind {
    /// Every class, in record emission order.
    pub const ALL: [EntityKind; 9] = [
        Self::ProvidedCho,
        Self::WebResource,
        Self::Aggregation,
        Self::Concept,
        Self::Agent,
        Self::TimeSpan,
        Self::Place,
        Self::License,
        Self::Service,
    ];

    const fn namespace(self) -> Namespace {
        match self {
            Self::Aggregation => Namespace::Ore,
            Self::Concept => Namespace::Skos,
            Self::License => Namespace::Cc,
            Self::Service => Namespace::Svcs,
            Self::ProvidedCho
            | Self::WebResource
            | Self::Agent
            | Self::TimeSpan
            | Self::Place => Namespace::Edm,
        }
    }

    const fn local_name(self) -> &'static str {
        match self {
            Self::ProvidedCho => "ProvidedCHO",
            Self::WebResource => "WebResource",
            Self::Aggregation => "Aggregation",
            Self::Concept => "Concept",
            Self::Agent => "Agent",
            Self::TimeSpan => "TimeSpan",
            Self::Place => "Place",
            Self::License => "License",
            Self::Service => "Service",
        }
    }

    /// Compact class name, e.g. `ore:Aggregation`.
    #[must_use]
    pub const fn class_name(self) -> &'static str {
        match self {
            Self::ProvidedCho => "edm:ProvidedCHO",
            Self::WebResource => "edm:WebResource",
            Self::Aggregation => "ore:Aggregation",
            Self::Concept => "skos:Concept",
            Self::Agent => "edm:Agent",
            Self::TimeSpan => "edm:TimeSpan",
            Self::Place => "edm:Place",
            Self::License => "cc:License",
            Self::Service => "svcs:Service",
        }
    }

    /// Full class IRI used in `rdf:type` triples.
    #[must_use]
    pub fn class_uri(self) -> String {
        self.namespace().term(self.local_name())
    }

    /// Looks a class up by its full IRI.
    #[must_use]
    pub fn from_class_uri(uri: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.class_uri() == uri)
    }

    /// Key of the record slot holding this class.
    #[must_use]
    pub const fn record_key(self) -> &'static str {
        match self {
            Self::ProvidedCho => "provided_cho",
            Self::WebResource => "web_resource",
            Self::Aggregation => "aggregation",
            Self::Concept => "skos_concept",
            Self::Agent => "edm_agent",
            Self::TimeSpan => "edm_time_span",
            Self::Place => "edm_place",
            Self::License => "cc_license",
            Self::Service => "svcs_service",
        }
    }

    /// Looks a class up by its record slot key.
    #[must_use]
    pub fn from_record_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.record_key() == key)
    }

    /// How many instances a record holds.
    #[must_use]
    pub const fn cardinality(self) -> Cardinality {
        match self {
            Self::ProvidedCho | Self::Aggregation => Cardinality::ExactlyOne,
            _ => Cardinality::ZeroToMany,
        }
    }

    /// Whether references to instances of this class are nested in the
    /// framed projection.
    #[must_use]
    pub const fn is_inlineable(self) -> bool {
        matches!(self, Self::WebResource | Self::Agent | Self::Concept)
    }

    /// The field table of this class, in emission order.
    #[must_use]
    pub const fn properties(self) -> &'static [PropertySpec] {
        match self {
            Self::ProvidedCho => PROVIDED_CHO,
            Self::WebResource => WEB_RESOURCE,
            Self::Aggregation => AGGREGATION,
            Self::Concept => CONCEPT,
            Self::Agent => AGENT,
            Self::TimeSpan => TIME_SPAN,
            Self::Place => PLACE,
            Self::License => LICENSE,
            Self::Service => SERVICE,
        }
    }

    /// Looks up one field by name.
    #[must_use]
    pub fn property(self, name: &str) -> Option<&'static PropertySpec> {
        self.properties().iter().find(|spec| spec.name == name)
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.class_name())
    }
}

use Cardinality::{ExactlyOne as One, ZeroToMany as Many, ZeroToOne as Opt};
use Mandate::{Mandatory as M, Optional as O, Recommended as Rec};
use ValueKind::{Literal as L, LiteralOrReference as LR, Reference as R};

const fn p(name: &'static str, c: Cardinality, k: ValueKind, m: Mandate) -> PropertySpec {
    PropertySpec::new(name, c, k, m)
}

const PROVIDED_CHO: &[PropertySpec] = &[
    p("edm_type", One, L, M),
    p("dc_contributor", Many, LR, O),
    p("dc_coverage", Many, LR, O),
    p("dc_creator", Many, LR, O),
    p("dc_date", Many, LR, O),
    p("dc_description", Many, LR, Rec),
    p("dc_format", Many, LR, O),
    p("dc_identifier", Many, L, M),
    p("dc_language", Many, L, Rec),
    p("dc_publisher", Many, LR, O),
    p("dc_relation", Many, LR, O),
    p("dc_rights", Many, LR, O),
    p("dc_source", Many, LR, O),
    p("dc_subject", Many, LR, Rec),
    p("dc_title", Many, L, Rec),
    p("dc_type", Many, LR, Rec),
    p("dcterms_alternative", Many, L, O),
    p("dcterms_conformsTo", Many, LR, O),
    p("dcterms_created", Many, LR, O),
    p("dcterms_extent", Many, LR, O),
    p("dcterms_hasFormat", Many, LR, O),
    p("dcterms_hasPart", Many, LR, O),
    p("dcterms_hasVersion", Many, LR, O),
    p("dcterms_isFormatOf", Many, LR, O),
    p("dcterms_isPartOf", Many, LR, O),
    p("dcterms_isReferencedBy", Many, LR, O),
    p("dcterms_isReplacedBy", Many, LR, O),
    p("dcterms_isRequiredBy", Many, LR, O),
    p("dcterms_issued", Many, LR, O),
    p("dcterms_isVersionOf", Many, LR, O),
    p("dcterms_medium", Many, LR, O),
    p("dcterms_provenance", Many, LR, O),
    p("dcterms_references", Many, LR, O),
    p("dcterms_replaces", Many, LR, O),
    p("dcterms_requires", Many, LR, O),
    p("dcterms_spatial", Many, LR, Rec),
    p("dcterms_tableOfContents", Many, L, O),
    p("dcterms_temporal", Many, LR, Rec),
    p("edm_currentLocation", Opt, LR, O),
    p("edm_hasMet", Many, R, O),
    p("edm_hasType", Many, LR, O),
    p("edm_incorporates", Many, R, O),
    p("edm_isDerivativeOf", Many, R, O),
    p("edm_isNextInSequence", Many, R, O),
    p("edm_isRelatedTo", Many, LR, O),
    p("edm_isRepresentationOf", Opt, R, O),
    p("edm_isSimilarTo", Many, R, O),
    p("edm_isSuccessorOf", Many, R, O),
    p("edm_realizes", Many, R, O),
    p("owl_sameAs", Many, R, O),
];

const AGGREGATION: &[PropertySpec] = &[
    p("edm_aggregatedCHO", One, R, M),
    p("edm_dataProvider", One, LR, M),
    p("edm_provider", One, LR, M),
    p("edm_rights", One, R, M),
    p("edm_hasView", Many, R, O),
    p("edm_isShownAt", Opt, R, Rec),
    p("edm_isShownBy", Opt, R, Rec),
    p("edm_object", Opt, R, O),
    p("dc_rights", Many, LR, O),
    p("edm_ugc", Opt, L, O),
    p("edm_intermediateProvider", Many, LR, O),
];

const WEB_RESOURCE: &[PropertySpec] = &[
    p("dc_creator", Many, LR, O),
    p("dc_description", Many, LR, O),
    p("dc_format", Many, LR, O),
    p("dc_rights", Many, LR, O),
    p("dc_source", Many, LR, O),
    p("dc_type", Many, LR, O),
    p("dcterms_conformsTo", Many, LR, O),
    p("dcterms_created", Many, LR, O),
    p("dcterms_extent", Many, LR, O),
    p("dcterms_hasPart", Many, R, O),
    p("dcterms_isFormatOf", Many, LR, O),
    p("dcterms_isPartOf", Many, R, O),
    p("dcterms_isReferencedBy", Many, R, O),
    p("dcterms_issued", Many, LR, O),
    p("edm_isNextInSequence", Opt, R, O),
    p("edm_rights", Opt, R, O),
    p("owl_sameAs", Many, R, O),
    p("svcs_has_service", Many, R, O),
];

const AGENT: &[PropertySpec] = &[
    p("skos_prefLabel", Many, L, Rec),
    p("skos_altLabel", Many, L, O),
    p("skos_note", Many, L, O),
    p("dc_date", Many, LR, O),
    p("dc_identifier", Many, L, O),
    p("dcterms_hasPart", Many, R, O),
    p("dcterms_isPartOf", Many, R, O),
    p("edm_begin", Opt, L, O),
    p("edm_end", Opt, L, O),
    p("edm_hasMet", Many, R, O),
    p("edm_isRelatedTo", Many, LR, O),
    p("foaf_name", Many, L, O),
    p("rdagr2_biographicalInformation", Many, L, O),
    p("rdagr2_dateOfBirth", Opt, L, O),
    p("rdagr2_dateOfDeath", Opt, L, O),
    p("rdagr2_dateOfEstablishment", Opt, L, O),
    p("rdagr2_dateOfTermination", Opt, L, O),
    p("rdagr2_gender", Opt, L, O),
    p("rdagr2_placeOfBirth", Opt, LR, O),
    p("rdagr2_placeOfDeath", Opt, LR, O),
    p("rdagr2_professionOrOccupation", Many, LR, O),
    p("owl_sameAs", Many, R, O),
];

const PLACE: &[PropertySpec] = &[
    p("wgs84_pos_lat", Opt, L, O),
    p("wgs84_pos_long", Opt, L, O),
    p("wgs84_pos_alt", Opt, L, O),
    p("skos_prefLabel", Many, L, Rec),
    p("skos_altLabel", Many, L, O),
    p("skos_note", Many, L, O),
    p("dcterms_hasPart", Many, R, O),
    p("dcterms_isPartOf", Many, R, O),
    p("edm_isNextInSequence", Opt, R, O),
    p("owl_sameAs", Many, R, O),
];

const TIME_SPAN: &[PropertySpec] = &[
    p("skos_prefLabel", Many, L, Rec),
    p("skos_altLabel", Many, L, O),
    p("skos_note", Many, L, O),
    p("dcterms_hasPart", Many, R, O),
    p("dcterms_isPartOf", Many, R, O),
    p("edm_begin", Opt, L, O),
    p("edm_end", Opt, L, O),
    p("edm_isNextInSequence", Opt, R, O),
    p("owl_sameAs", Many, R, O),
];

const CONCEPT: &[PropertySpec] = &[
    p("skos_prefLabel", Many, L, Rec),
    p("skos_altLabel", Many, L, O),
    p("skos_broader", Many, R, O),
    p("skos_narrower", Many, R, O),
    p("skos_related", Many, R, O),
    p("skos_broadMatch", Many, R, O),
    p("skos_narrowMatch", Many, R, O),
    p("skos_relatedMatch", Many, R, O),
    p("skos_exactMatch", Many, R, O),
    p("skos_closeMatch", Many, R, O),
    p("skos_note", Many, L, O),
    p("skos_notation", Many, L, O),
    p("skos_inScheme", Many, R, O),
];

const LICENSE: &[PropertySpec] = &[
    p("odrl_inheritFrom", One, R, M),
    p("cc_deprecatedOn", Opt, L, O),
];

const SERVICE: &[PropertySpec] = &[
    p("dcterms_conformsTo", Many, R, M),
    p("doap_implements", Opt, R, O),
];
