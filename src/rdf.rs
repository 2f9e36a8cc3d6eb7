//! RDF graph substrate for EDM records.
//!
//! This module provides RDF parsing and serialization using the oxrdfio
//! library. It wraps the library's functionality in a small graph API with
//! exactly the lookups the EDM parser needs: subjects by `rdf:type` and
//! objects by subject and predicate.

use std::collections::HashMap;
use std::io::{Read, Write};

use indexmap::IndexSet;
use oxrdf::{BlankNode, Literal, NamedNode, NamedOrBlankNode, Quad, Term, Triple};
use oxrdfio::{JsonLdProfileSet, RdfFormat as OxRdfFormat, RdfParser, RdfSerializer};
use tracing::trace;

use crate::config::RdfFormat;
use crate::error::{EdmError, Result};
use crate::namespaces::{self, Namespace};
use crate::value::{self, Reference, Value};

/// A single RDF triple (subject, predicate, object).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RdfTriple {
    /// The subject of the triple.
    pub subject: RdfNode,
    /// The predicate (property) of the triple.
    pub predicate: String,
    /// The object of the triple.
    pub object: RdfNode,
}

impl RdfTriple {
    /// Creates a new RDF triple.
    #[must_use]
    pub fn new(subject: RdfNode, predicate: impl Into<String>, object: RdfNode) -> Self {
        Self {
            subject,
            predicate: predicate.into(),
            object,
        }
    }
}

/// An RDF node (subject or object in a triple).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RdfNode {
    /// A named node (IRI/URI).
    Uri(String),
    /// A blank node with a local identifier.
    BlankNode(String),
    /// A literal value with optional language tag or datatype.
    Literal {
        /// The literal value.
        value: String,
        /// Optional language tag (e.g., "en", "de").
        language: Option<String>,
        /// Optional datatype URI; `None` for plain and language-tagged strings.
        datatype: Option<String>,
    },
}

impl RdfNode {
    /// Creates a new URI node.
    #[must_use]
    pub fn uri(uri: impl Into<String>) -> Self {
        Self::Uri(uri.into())
    }

    /// Creates a new blank node.
    #[must_use]
    pub fn blank(id: impl Into<String>) -> Self {
        Self::BlankNode(id.into())
    }

    /// Creates a new plain literal.
    #[must_use]
    pub fn literal(value: impl Into<String>) -> Self {
        Self::Literal {
            value: value.into(),
            language: None,
            datatype: None,
        }
    }

    /// Creates a new literal with a language tag.
    #[must_use]
    pub fn literal_with_lang(value: impl Into<String>, lang: impl Into<String>) -> Self {
        Self::Literal {
            value: value.into(),
            language: Some(lang.into()),
            datatype: None,
        }
    }

    /// Creates a new typed literal.
    #[must_use]
    pub fn typed_literal(value: impl Into<String>, datatype: impl Into<String>) -> Self {
        Self::Literal {
            value: value.into(),
            language: None,
            datatype: Some(datatype.into()),
        }
    }

    /// Returns true if this is a URI node.
    #[must_use]
    pub const fn is_uri(&self) -> bool {
        matches!(self, Self::Uri(_))
    }

    /// Returns true if this is a blank node.
    #[must_use]
    pub const fn is_blank(&self) -> bool {
        matches!(self, Self::BlankNode(_))
    }

    /// Returns true if this is a literal.
    #[must_use]
    pub const fn is_literal(&self) -> bool {
        matches!(self, Self::Literal { .. })
    }

    /// The IRI of a URI node.
    #[must_use]
    pub fn as_uri(&self) -> Option<&str> {
        match self {
            Self::Uri(uri) => Some(uri),
            _ => None,
        }
    }
}

impl From<&Value> for RdfNode {
    fn from(value: &Value) -> Self {
        match value {
            Value::Reference(r) => Self::Uri(r.as_str().to_string()),
            Value::Literal(lit) => Self::Literal {
                value: lit.value().to_string(),
                language: lit.lang().map(String::from),
                datatype: lit.datatype().map(String::from),
            },
        }
    }
}

impl TryFrom<&RdfNode> for Value {
    type Error = EdmError;

    /// URIs become references, literals keep their language and datatype.
    /// Blank nodes have no EDM value form.
    fn try_from(node: &RdfNode) -> Result<Self> {
        match node {
            RdfNode::Uri(uri) => Reference::new(uri).map(Value::Reference),
            RdfNode::BlankNode(id) => Err(EdmError::InvalidRef(format!("_:{id}"))),
            RdfNode::Literal {
                value,
                language,
                datatype,
            } => Ok(Value::Literal(
                value::Literal::new(value)
                    .with_lang(language.as_deref())
                    .with_datatype(datatype.clone()),
            )),
        }
    }
}

/// An RDF graph: a set of triples in insertion order.
///
/// Adding a triple that is already present is a no-op.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RdfGraph {
    triples: IndexSet<RdfTriple>,
}

impl RdfGraph {
    /// Creates a new empty RDF graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a triple to the graph.
    pub fn add_triple(&mut self, triple: RdfTriple) {
        self.triples.insert(triple);
    }

    /// Adds a triple from components.
    pub fn add(&mut self, subject: RdfNode, predicate: impl Into<String>, object: RdfNode) {
        self.add_triple(RdfTriple::new(subject, predicate, object));
    }

    /// Returns the number of triples in the graph.
    #[must_use]
    pub fn len(&self) -> usize {
        self.triples.len()
    }

    /// Returns true if the graph is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    /// Returns true if the graph contains the triple.
    #[must_use]
    pub fn contains(&self, triple: &RdfTriple) -> bool {
        self.triples.contains(triple)
    }

    /// Returns an iterator over the triples.
    pub fn triples(&self) -> impl Iterator<Item = &RdfTriple> {
        self.triples.iter()
    }

    /// Subjects declared with `rdf:type <class_uri>`, in first-seen order.
    #[must_use]
    pub fn subjects_of_type(&self, class_uri: &str) -> Vec<&RdfNode> {
        self.triples
            .iter()
            .filter(|t| t.predicate == namespaces::RDF_TYPE && t.object.as_uri() == Some(class_uri))
            .map(|t| &t.subject)
            .collect()
    }

    /// Objects of all `(subject, predicate, *)` triples, in insertion order.
    #[must_use]
    pub fn objects<'a>(&'a self, subject: &RdfNode, predicate: &str) -> Vec<&'a RdfNode> {
        self.triples
            .iter()
            .filter(|t| &t.subject == subject && t.predicate == predicate)
            .map(|t| &t.object)
            .collect()
    }

    /// Returns true if `subject` appears as the subject of any triple.
    #[must_use]
    pub fn has_subject(&self, subject: &RdfNode) -> bool {
        self.triples.iter().any(|t| &t.subject == subject)
    }

    /// Groups `(predicate, object)` pairs by subject.
    ///
    /// One pass over the graph; the parser uses it instead of repeated
    /// [`RdfGraph::objects`] scans.
    #[must_use]
    pub fn subject_index(&self) -> HashMap<&RdfNode, Vec<(&str, &RdfNode)>> {
        let mut index: HashMap<&RdfNode, Vec<(&str, &RdfNode)>> = HashMap::new();
        for triple in &self.triples {
            index
                .entry(&triple.subject)
                .or_default()
                .push((triple.predicate.as_str(), &triple.object));
        }
        index
    }

    /// Serializes the graph to a string in the specified format.
    ///
    /// The EDM namespace prefixes are bound for formats that support them.
    ///
    /// # Errors
    ///
    /// Returns an error if a term is not valid RDF or serialization fails.
    pub fn serialize(&self, format: RdfFormat) -> Result<String> {
        let mut output = Vec::new();
        self.serialize_to_writer(&mut output, format)?;
        String::from_utf8(output).map_err(|e| EdmError::Serialization(e.to_string()))
    }

    /// Serializes the graph to a writer in the specified format.
    ///
    /// # Errors
    ///
    /// Returns an error if a term is not valid RDF or serialization fails.
    pub fn serialize_to_writer<W: Write>(&self, writer: W, format: RdfFormat) -> Result<()> {
        let mut serializer = RdfSerializer::from_format(to_oxrdf_format(format));
        if matches!(format, RdfFormat::RdfXml | RdfFormat::Turtle) {
            for ns in Namespace::ALL {
                serializer = serializer
                    .with_prefix(ns.prefix(), ns.iri())
                    .map_err(|e| EdmError::Serialization(format!("Invalid prefix IRI: {e}")))?;
            }
        }
        let mut serializer = serializer.for_writer(writer);

        for triple in &self.triples {
            let ox_triple = to_oxrdf_triple(triple)?;
            serializer
                .serialize_triple(&ox_triple)
                .map_err(|e| EdmError::Serialization(e.to_string()))?;
        }

        serializer
            .finish()
            .map_err(|e| EdmError::Serialization(e.to_string()))?;

        trace!(triples = self.len(), %format, "serialized graph");
        Ok(())
    }

    /// Parses an RDF graph from a reader in the specified format.
    ///
    /// # Errors
    ///
    /// Returns [`EdmError::Format`] if the input does not parse.
    pub fn parse_from_reader<R: Read>(
        reader: R,
        format: RdfFormat,
        base_iri: Option<&str>,
    ) -> Result<Self> {
        let mut parser = RdfParser::from_format(to_oxrdf_format(format));
        if let Some(base) = base_iri {
            parser = parser
                .with_base_iri(base)
                .map_err(|e| EdmError::Format(format!("Invalid base IRI '{base}': {e}")))?;
        }

        let mut graph = Self::new();
        for result in parser.for_reader(reader) {
            let quad = result.map_err(|e| EdmError::Format(format!("{format}: {e}")))?;
            graph.add_triple(from_oxrdf_quad(&quad)?);
        }

        trace!(triples = graph.len(), %format, "parsed graph");
        Ok(graph)
    }

    /// Parses an RDF graph from a string.
    ///
    /// # Errors
    ///
    /// Returns [`EdmError::Format`] if the input does not parse.
    pub fn parse(input: &str, format: RdfFormat) -> Result<Self> {
        Self::parse_from_reader(input.as_bytes(), format, None)
    }
}

impl FromIterator<RdfTriple> for RdfGraph {
    fn from_iter<I: IntoIterator<Item = RdfTriple>>(iter: I) -> Self {
        Self {
            triples: iter.into_iter().collect(),
        }
    }
}

/// Converts our [`RdfFormat`] to oxrdfio's format.
fn to_oxrdf_format(format: RdfFormat) -> OxRdfFormat {
    match format {
        RdfFormat::RdfXml => OxRdfFormat::RdfXml,
        RdfFormat::JsonLd => OxRdfFormat::JsonLd {
            profile: JsonLdProfileSet::default(),
        },
        RdfFormat::Turtle => OxRdfFormat::Turtle,
        RdfFormat::NTriples => OxRdfFormat::NTriples,
    }
}

fn named_node(iri: &str) -> Result<NamedNode> {
    NamedNode::new(iri).map_err(|e| EdmError::Serialization(format!("Invalid IRI '{iri}': {e}")))
}

/// Converts an [`RdfTriple`] to an oxrdf Triple.
fn to_oxrdf_triple(triple: &RdfTriple) -> Result<Triple> {
    let subject = match &triple.subject {
        RdfNode::Uri(uri) => NamedOrBlankNode::NamedNode(named_node(uri)?),
        RdfNode::BlankNode(id) => NamedOrBlankNode::BlankNode(
            BlankNode::new(id)
                .map_err(|e| EdmError::Serialization(format!("Invalid blank node ID: {e}")))?,
        ),
        RdfNode::Literal { .. } => {
            return Err(EdmError::Serialization(
                "Literals cannot be triple subjects".into(),
            ));
        },
    };

    let predicate = named_node(&triple.predicate)?;

    let object = match &triple.object {
        RdfNode::Uri(uri) => Term::NamedNode(named_node(uri)?),
        RdfNode::BlankNode(id) => Term::BlankNode(
            BlankNode::new(id)
                .map_err(|e| EdmError::Serialization(format!("Invalid blank node ID: {e}")))?,
        ),
        RdfNode::Literal {
            value,
            language,
            datatype,
        } => {
            let lit = if let Some(lang) = language {
                Literal::new_language_tagged_literal(value, lang).map_err(|e| {
                    EdmError::Serialization(format!("Invalid language tag '{lang}': {e}"))
                })?
            } else if let Some(dt) = datatype {
                Literal::new_typed_literal(value, named_node(dt)?)
            } else {
                Literal::new_simple_literal(value)
            };
            Term::Literal(lit)
        },
    };

    Ok(Triple::new(subject, predicate, object))
}

/// Converts an oxrdf Quad back to our [`RdfTriple`].
///
/// The implicit `xsd:string` and `rdf:langString` datatypes are dropped so a
/// plain literal reads back as a plain literal.
fn from_oxrdf_quad(quad: &Quad) -> Result<RdfTriple> {
    let subject = match &quad.subject {
        NamedOrBlankNode::NamedNode(n) => RdfNode::Uri(n.as_str().to_string()),
        NamedOrBlankNode::BlankNode(b) => RdfNode::BlankNode(b.as_str().to_string()),
        #[allow(unreachable_patterns)]
        _ => {
            return Err(EdmError::Format("Unsupported subject type".into()));
        },
    };

    let predicate = quad.predicate.as_str().to_string();

    let object = match &quad.object {
        Term::NamedNode(n) => RdfNode::Uri(n.as_str().to_string()),
        Term::BlankNode(b) => RdfNode::BlankNode(b.as_str().to_string()),
        Term::Literal(lit) => {
            let value = lit.value().to_string();
            let language = lit.language().map(String::from);
            let datatype = lit.datatype().as_str();
            let datatype = (language.is_none()
                && datatype != namespaces::XSD_STRING
                && datatype != namespaces::RDF_LANG_STRING)
                .then(|| datatype.to_string());
            RdfNode::Literal {
                value,
                language,
                datatype,
            }
        },
        #[allow(unreachable_patterns)]
        _ => {
            return Err(EdmError::Format("Unsupported object type".into()));
        },
    };

    Ok(RdfTriple::new(subject, predicate, object))
}
