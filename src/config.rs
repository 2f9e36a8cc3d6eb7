//! Configuration options for EDM parsing and serialization.
//!
//! This module provides the [`RdfFormat`] wire-format enum and the
//! [`ParserConfig`] struct which controls how a source graph is turned into
//! an [`EdmRecord`](crate::EdmRecord).

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::error::EdmError;
use crate::value::Literal;

/// Wire format of a serialized RDF graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RdfFormat {
    /// RDF/XML format (application/rdf+xml) - the usual EDM exchange format
    #[default]
    RdfXml,
    /// Turtle format (text/turtle) - Compact, human-friendly
    Turtle,
    /// N-Triples format (application/n-triples) - Simple, line-based
    NTriples,
    /// JSON-LD format (application/ld+json) - flat, unframed
    JsonLd,
}

impl fmt::Display for RdfFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RdfXml => write!(f, "RDF/XML"),
            Self::Turtle => write!(f, "Turtle"),
            Self::NTriples => write!(f, "N-Triples"),
            Self::JsonLd => write!(f, "JSON-LD"),
        }
    }
}

impl RdfFormat {
    /// Returns the MIME type for this RDF format.
    #[must_use]
    pub const fn mime_type(&self) -> &'static str {
        match self {
            Self::RdfXml => "application/rdf+xml",
            Self::Turtle => "text/turtle",
            Self::NTriples => "application/n-triples",
            Self::JsonLd => "application/ld+json",
        }
    }

    /// Returns the typical file extension for this RDF format.
    #[must_use]
    pub const fn file_extension(&self) -> &'static str {
        match self {
            Self::RdfXml => "rdf",
            Self::Turtle => "ttl",
            Self::NTriples => "nt",
            Self::JsonLd => "jsonld",
        }
    }

    /// Guesses the format from a file extension.
    ///
    /// Returns `None` for unknown or missing extensions.
    #[must_use]
    pub fn from_path(path: impl AsRef<Path>) -> Option<Self> {
        let ext = path.as_ref().extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "rdf" | "xml" | "owl" => Some(Self::RdfXml),
            "ttl" => Some(Self::Turtle),
            "nt" => Some(Self::NTriples),
            "jsonld" | "json" => Some(Self::JsonLd),
            _ => None,
        }
    }
}

impl FromStr for RdfFormat {
    type Err = EdmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "xml" | "rdf" | "rdf/xml" | "rdfxml" | "pretty-xml" => Ok(Self::RdfXml),
            "ttl" | "turtle" => Ok(Self::Turtle),
            "nt" | "ntriples" | "n-triples" => Ok(Self::NTriples),
            "json-ld" | "jsonld" => Ok(Self::JsonLd),
            other => Err(EdmError::Format(format!("Unknown RDF format: '{other}'"))),
        }
    }
}

/// Default `edm:provider` injected into aggregations that lack one.
pub const DEFAULT_PROVIDER: &str = "Kulturpool";

/// Language tag of [`DEFAULT_PROVIDER`].
pub const DEFAULT_PROVIDER_LANG: &str = "de";

/// Placeholder `edm:rights` injected into aggregations that lack one.
///
/// It is not a known rights statement, so a record that relied on it still
/// fails validation.
pub const PLACEHOLDER_RIGHTS: &str = "http://example.com/placeholder_rights";

/// Configuration for graph-to-record parsing.
///
/// # Examples
///
/// ```ignore
/// use edmrs::ParserConfig;
///
/// // Defaults: fill missing provider/rights on the aggregation
/// let config = ParserConfig::default();
///
/// // Report missing provenance instead of filling it
/// let config = ParserConfig::new().with_fill_defaults(false);
/// ```
#[derive(Debug, Clone)]
pub struct ParserConfig {
    /// Run [`fill_aggregation_defaults`](crate::parser::fill_aggregation_defaults)
    /// before validating the aggregation.
    pub fill_defaults: bool,

    /// Provider injected when the aggregation has no `edm:provider`.
    pub default_provider: Literal,

    /// Rights URI injected when the aggregation has no `edm:rights`.
    pub default_rights: String,

    /// Base IRI for resolving relative IRIs in the source bytes.
    pub base_iri: Option<String>,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            fill_defaults: true,
            default_provider: Literal::lang_tagged(DEFAULT_PROVIDER, DEFAULT_PROVIDER_LANG),
            default_rights: PLACEHOLDER_RIGHTS.to_string(),
            base_iri: None,
        }
    }
}

impl ParserConfig {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables or disables default injection on the aggregation.
    #[must_use]
    pub const fn with_fill_defaults(mut self, enabled: bool) -> Self {
        self.fill_defaults = enabled;
        self
    }

    /// Sets the provider injected into aggregations without one.
    #[must_use]
    pub fn with_default_provider(mut self, provider: Literal) -> Self {
        self.default_provider = provider;
        self
    }

    /// Sets the rights URI injected into aggregations without one.
    #[must_use]
    pub fn with_default_rights(mut self, rights: impl Into<String>) -> Self {
        self.default_rights = rights.into();
        self
    }

    /// Sets the base IRI for relative IRI resolution.
    #[must_use]
    pub fn with_base_iri(mut self, iri: impl Into<String>) -> Self {
        self.base_iri = Some(iri.into());
        self
    }
}
