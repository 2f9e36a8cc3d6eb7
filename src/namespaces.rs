//! EDM namespace definitions and constants.
//!
//! This module defines the RDF namespaces used by the Europeana Data Model and
//! the [`Namespace`] enum the schema registry resolves field-name prefixes
//! against.

use std::fmt;

/// Europeana Data Model namespace URI.
pub const EDM: &str = "http://www.europeana.eu/schemas/edm/";

/// OAI Object Reuse and Exchange namespace URI.
pub const ORE: &str = "http://www.openarchives.org/ore/terms/";

/// Dublin Core elements namespace URI.
pub const DC: &str = "http://purl.org/dc/elements/1.1/";

/// Dublin Core terms namespace URI.
pub const DCTERMS: &str = "http://purl.org/dc/terms/";

/// SKOS namespace URI.
pub const SKOS: &str = "http://www.w3.org/2004/02/skos/core#";

/// OWL namespace URI.
pub const OWL: &str = "http://www.w3.org/2002/07/owl#";

/// RDA Group 2 elements namespace URI.
pub const RDAGR2: &str = "http://rdvocab.info/ElementsGr2/";

/// SIOC services namespace URI.
pub const SVCS: &str = "http://rdfs.org/sioc/services#";

/// Description of a Project namespace URI.
pub const DOAP: &str = "http://usefulinc.com/ns/doap#";

/// Friend of a Friend namespace URI.
pub const FOAF: &str = "http://xmlns.com/foaf/0.1/";

/// W3C WGS84 geo positioning namespace URI.
pub const WGS84_POS: &str = "http://www.w3.org/2003/01/geo/wgs84_pos#";

/// Creative Commons rights expression namespace URI.
pub const CC: &str = "http://creativecommons.org/ns#";

/// ODRL 2 namespace URI.
pub const ODRL: &str = "http://www.w3.org/ns/odrl/2/";

/// RDF namespace.
pub const RDF: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";

/// XML Schema namespace.
pub const XSD: &str = "http://www.w3.org/2001/XMLSchema#";

/// The `rdf:type` predicate.
pub const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";

/// The `xsd:string` datatype, implied by plain literals.
pub const XSD_STRING: &str = "http://www.w3.org/2001/XMLSchema#string";

/// The `rdf:langString` datatype, implied by language-tagged literals.
pub const RDF_LANG_STRING: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#langString";

/// A namespace a schema field or class can live in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Namespace {
    /// `edm:`
    Edm,
    /// `ore:`
    Ore,
    /// `dc:`
    Dc,
    /// `dcterms:`
    Dcterms,
    /// `skos:`
    Skos,
    /// `owl:`
    Owl,
    /// `rdagr2:`
    Rdagr2,
    /// `svcs:`
    Svcs,
    /// `doap:`
    Doap,
    /// `foaf:`
    Foaf,
    /// `wgs84_pos:`
    Wgs84Pos,
    /// `cc:`
    Cc,
    /// `odrl:`
    Odrl,
}

impl Namespace {
    /// Every namespace, in the order prefixes are bound on serialization.
    pub const ALL: [Namespace; 13] = [
        Self::Edm,
        Self::Ore,
        Self::Dc,
        Self::Dcterms,
        Self::Skos,
        Self::Owl,
        Self::Rdagr2,
        Self::Svcs,
        Self::Doap,
        Self::Foaf,
        Self::Wgs84Pos,
        Self::Cc,
        Self::Odrl,
    ];

    /// Returns the conventional prefix, e.g. `dcterms`.
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Edm => "edm",
            Self::Ore => "ore",
            Self::Dc => "dc",
            Self::Dcterms => "dcterms",
            Self::Skos => "skos",
            Self::Owl => "owl",
            Self::Rdagr2 => "rdagr2",
            Self::Svcs => "svcs",
            Self::Doap => "doap",
            Self::Foaf => "foaf",
            Self::Wgs84Pos => "wgs84_pos",
            Self::Cc => "cc",
            Self::Odrl => "odrl",
        }
    }

    /// Returns the full namespace IRI.
    #[must_use]
    pub const fn iri(self) -> &'static str {
        match self {
            Self::Edm => EDM,
            Self::Ore => ORE,
            Self::Dc => DC,
            Self::Dcterms => DCTERMS,
            Self::Skos => SKOS,
            Self::Owl => OWL,
            Self::Rdagr2 => RDAGR2,
            Self::Svcs => SVCS,
            Self::Doap => DOAP,
            Self::Foaf => FOAF,
            Self::Wgs84Pos => WGS84_POS,
            Self::Cc => CC,
            Self::Odrl => ODRL,
        }
    }

    /// Looks up a namespace by prefix (case-insensitive).
    #[must_use]
    pub fn from_prefix(prefix: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|ns| ns.prefix().eq_ignore_ascii_case(prefix))
    }

    /// Expands a local name into a full IRI.
    #[must_use]
    pub fn term(self, local_name: &str) -> String {
        format!("{}{}", self.iri(), local_name)
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}
