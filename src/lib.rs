#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

//! # edmrs: Europeana Data Model records in Rust
//!
//! Parse, validate and re-serialize EDM records: one `edm:ProvidedCHO`, one
//! `ore:Aggregation` and any number of contextual entities (web resources,
//! agents, places, time spans, concepts, licenses and services).
//!
//! ## Quick Start
//!
//! ### Parsing a record
//!
//! ```ignore
//! use edmrs::{EdmParser, RdfFormat};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let record = EdmParser::from_file("record.xml", RdfFormat::RdfXml)?.parse()?;
//! for title in record.provided_cho().dc_title() {
//!     println!("Title: {title}");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ### Building a record
//!
//! ```ignore
//! use edmrs::{Aggregation, EdmRecord, Literal, ProvidedCho, Reference};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let cho_id = Reference::new("http://uri.test/cho")?;
//! let cho = ProvidedCho::builder(cho_id.clone())
//!     .add("edm_type", Literal::new("IMAGE"))
//!     .add("dc_identifier", Literal::new("inv-1"))
//!     .add("dc_title", Literal::lang_tagged("Bild", "de"))
//!     .add("dc_type", Literal::lang_tagged("Gemälde", "de"))
//!     .build()?;
//! let aggregation = Aggregation::builder(Reference::new("http://uri.test/agg")?)
//!     .add("edm_aggregatedCHO", cho_id)
//!     .add("edm_dataProvider", Literal::lang_tagged("Museum", "de"))
//!     .add("edm_provider", Literal::lang_tagged("Kulturpool", "de"))
//!     .add("edm_rights", Reference::new("http://creativecommons.org/licenses/by/4.0/")?)
//!     .add("edm_isShownAt", Reference::new("http://uri.test/page")?)
//!     .build()?;
//! let record = EdmRecord::new(cho, aggregation)?;
//! let turtle = record.serialize(edmrs::RdfFormat::Turtle)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`value`]: `Reference`, `Literal` and `Value`
//! - [`schema`]: per-class property tables
//! - [`entity`]: generic and typed entity models
//! - [`validation`]: field and class rule checks
//! - [`record`]: the `EdmRecord` aggregate and graph output
//! - [`parser`]: graph to record
//! - [`mapping`]: plain JSON-compatible form
//! - [`framing`]: nested JSON-LD-like projection
//! - [`rdf`]: triples, graphs and wire formats
//! - [`uri`] and [`rights`]: URI and rights statement checks
//! - [`error`]: error types and result type

pub mod macros;

pub mod config;
pub mod entity;
pub mod error;
pub mod framing;
pub mod mapping;
pub mod namespaces;
pub mod parser;
pub mod rdf;
pub mod record;
pub mod rights;
pub mod schema;
pub mod uri;
pub mod validation;
pub mod value;

pub use config::{ParserConfig, RdfFormat};
pub use entity::{
    Agent, Aggregation, ClassBuilder, Concept, EdmClass, Entity, EntityBuilder, License, Place,
    PropertyMap, ProvidedCho, Service, TimeSpan, WebResource,
};
pub use error::{EdmError, Result, ValidationErrors, Violation};
pub use parser::{fill_aggregation_defaults, EdmParser};
pub use rdf::{RdfGraph, RdfNode, RdfTriple};
pub use record::{EdmRecord, EdmRecordBuilder};
pub use schema::{Cardinality, EntityKind, Mandate, PropertySpec, ValueKind};
pub use value::{Literal, Reference, Value};
