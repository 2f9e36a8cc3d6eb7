//! Common test fixtures and helpers shared across the test suite.

#![allow(dead_code)]

use edmrs::{Aggregation, EdmParser, EdmRecord, Literal, ProvidedCho, RdfFormat, Reference};

/// Namespace declarations used by the RDF/XML fixtures.
const RDF_XML_HEADER: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rdf:RDF
    xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#"
    xmlns:ore="http://www.openarchives.org/ore/terms/"
    xmlns:edm="http://www.europeana.eu/schemas/edm/"
    xmlns:skos="http://www.w3.org/2004/02/skos/core#"
    xmlns:dcterms="http://purl.org/dc/terms/"
    xmlns:rdagr2="http://rdvocab.info/ElementsGr2/"
    xmlns:owl="http://www.w3.org/2002/07/owl#"
    xmlns:dc="http://purl.org/dc/elements/1.1/"
    xmlns:svcs="http://rdfs.org/sioc/services#"
    xmlns:doap="http://usefulinc.com/ns/doap#">
"#;

const RDF_XML_FOOTER: &str = "</rdf:RDF>\n";

/// Wraps RDF/XML body elements in an `rdf:RDF` document.
pub fn rdf_xml(body: &str) -> String {
    format!("{RDF_XML_HEADER}{body}{RDF_XML_FOOTER}")
}

/// Identifier of the ProvidedCHO in [`scenario_xml`].
pub const SCENARIO_CHO: &str = "http://uri.test/record/1/cho";

/// Identifier of the web resource in [`scenario_xml`].
pub const SCENARIO_IMAGE: &str = "http://uri.test/record/1/image.jpg";

/// Identifier of the concept in [`scenario_xml`].
pub const SCENARIO_CONCEPT: &str = "http://vocab.getty.edu/aat/300033618";

const SCENARIO_AGGREGATION: &str = r#"
  <ore:Aggregation rdf:about="http://uri.test/record/1/aggregation">
    <edm:aggregatedCHO rdf:resource="http://uri.test/record/1/cho"/>
    <edm:dataProvider>Test Museum</edm:dataProvider>
    <edm:provider xml:lang="de">Kulturpool</edm:provider>
    <edm:rights rdf:resource="http://creativecommons.org/licenses/by/4.0/"/>
    <edm:isShownBy rdf:resource="http://uri.test/record/1/image.jpg"/>
  </ore:Aggregation>
"#;

const SCENARIO_ENTITIES: &str = r#"
  <edm:ProvidedCHO rdf:about="http://uri.test/record/1/cho">
    <edm:type>IMAGE</edm:type>
    <dc:identifier>INV-1</dc:identifier>
    <dc:title xml:lang="de">Stillleben mit Blumen</dc:title>
    <dc:type rdf:resource="http://vocab.getty.edu/aat/300033618"/>
  </edm:ProvidedCHO>
  <edm:WebResource rdf:about="http://uri.test/record/1/image.jpg">
    <dc:format>image/jpeg</dc:format>
  </edm:WebResource>
  <skos:Concept rdf:about="http://vocab.getty.edu/aat/300033618">
    <skos:prefLabel xml:lang="en">paintings</skos:prefLabel>
  </skos:Concept>
"#;

/// One ProvidedCHO, one Aggregation, one web resource and one concept.
pub fn scenario_xml() -> String {
    rdf_xml(&format!("{SCENARIO_AGGREGATION}{SCENARIO_ENTITIES}"))
}

/// [`scenario_xml`] without the `edm:rights` statement.
pub fn scenario_xml_without_rights() -> String {
    scenario_xml().replace(
        "<edm:rights rdf:resource=\"http://creativecommons.org/licenses/by/4.0/\"/>",
        "",
    )
}

/// [`scenario_xml`] with `body` added to the ProvidedCHO.
pub fn scenario_xml_with_cho(body: &str) -> String {
    scenario_xml().replace(
        "<edm:type>IMAGE</edm:type>",
        &format!("<edm:type>IMAGE</edm:type>\n    {body}"),
    )
}

/// The scenario record in Turtle.
pub const SCENARIO_TTL: &str = r#"
@prefix rdf: <http://www.w3.org/1999/02/22-rdf-syntax-ns#> .
@prefix edm: <http://www.europeana.eu/schemas/edm/> .
@prefix ore: <http://www.openarchives.org/ore/terms/> .
@prefix dc: <http://purl.org/dc/elements/1.1/> .
@prefix skos: <http://www.w3.org/2004/02/skos/core#> .

<http://uri.test/record/1/aggregation> a ore:Aggregation ;
    edm:aggregatedCHO <http://uri.test/record/1/cho> ;
    edm:dataProvider "Test Museum" ;
    edm:provider "Kulturpool"@de ;
    edm:rights <http://creativecommons.org/licenses/by/4.0/> ;
    edm:isShownBy <http://uri.test/record/1/image.jpg> .

<http://uri.test/record/1/cho> a edm:ProvidedCHO ;
    edm:type "IMAGE" ;
    dc:identifier "INV-1" ;
    dc:title "Stillleben mit Blumen"@de ;
    dc:type <http://vocab.getty.edu/aat/300033618> .

<http://uri.test/record/1/image.jpg> a edm:WebResource ;
    dc:format "image/jpeg" .

<http://vocab.getty.edu/aat/300033618> a skos:Concept ;
    skos:prefLabel "paintings"@en .
"#;

/// The scenario record as a hand-written JSON-LD document.
pub const SCENARIO_JSONLD: &str = r#"{
  "@context": {
    "edm": "http://www.europeana.eu/schemas/edm/",
    "ore": "http://www.openarchives.org/ore/terms/",
    "dc": "http://purl.org/dc/elements/1.1/",
    "skos": "http://www.w3.org/2004/02/skos/core#"
  },
  "@graph": [
    {
      "@id": "http://uri.test/record/1/aggregation",
      "@type": "ore:Aggregation",
      "edm:aggregatedCHO": { "@id": "http://uri.test/record/1/cho" },
      "edm:dataProvider": "Test Museum",
      "edm:provider": { "@value": "Kulturpool", "@language": "de" },
      "edm:rights": { "@id": "http://creativecommons.org/licenses/by/4.0/" },
      "edm:isShownBy": { "@id": "http://uri.test/record/1/image.jpg" }
    },
    {
      "@id": "http://uri.test/record/1/cho",
      "@type": "edm:ProvidedCHO",
      "edm:type": "IMAGE",
      "dc:identifier": "INV-1",
      "dc:title": { "@value": "Stillleben mit Blumen", "@language": "de" },
      "dc:type": { "@id": "http://vocab.getty.edu/aat/300033618" }
    },
    {
      "@id": "http://uri.test/record/1/image.jpg",
      "@type": "edm:WebResource",
      "dc:format": "image/jpeg"
    },
    {
      "@id": "http://vocab.getty.edu/aat/300033618",
      "@type": "skos:Concept",
      "skos:prefLabel": { "@value": "paintings", "@language": "en" }
    }
  ]
}"#;

/// A museum record with an agent, a concept, a web resource and a service.
pub fn albertina_xml() -> String {
    rdf_xml(
        r#"
  <ore:Aggregation rdf:about="https://id.kulturpool.at/000056bf/aggregation">
    <edm:aggregatedCHO rdf:resource="https://id.kulturpool.at/000056bf/cho"/>
    <edm:dataProvider>Albertina</edm:dataProvider>
    <edm:provider xml:lang="de">Kulturpool</edm:provider>
    <edm:rights rdf:resource="http://creativecommons.org/publicdomain/mark/1.0/"/>
    <edm:hasView rdf:resource="https://sammlungenonline.albertina.at/cc/imageproxy.ashx?filename=images/DG1949_697.jpg&amp;cache=yes"/>
    <edm:isShownAt rdf:resource="https://sammlungenonline.albertina.at/?query=objectnumbersearch=DG1949-697&amp;showtype=record"/>
    <edm:isShownBy rdf:resource="https://sammlungenonline.albertina.at/cc/imageproxy.ashx?filename=images/DG1949_697.jpg&amp;cache=yes"/>
    <edm:object rdf:resource="https://sammlungenonline.albertina.at/cc/imageproxy.ashx?filename=images/DG1949_697.jpg&amp;cache=yes&amp;maxwidth=400"/>
  </ore:Aggregation>
  <edm:Agent rdf:about="http://d-nb.info/gnd/11869703X">
    <skos:prefLabel>Urs Graf d. Ä.</skos:prefLabel>
    <rdagr2:biographicalInformation>Solothurn um 1485 - 1527/28 Basel</rdagr2:biographicalInformation>
    <owl:sameAs rdf:resource="http://d-nb.info/gnd/11869703X"/>
    <owl:sameAs rdf:resource="http://de.wikipedia.org/wiki/Urs_Graf_der_%C3%84ltere"/>
  </edm:Agent>
  <skos:Concept rdf:about="http://vocab.getty.edu/aat/300041273">
    <skos:prefLabel>Druckgraphik</skos:prefLabel>
  </skos:Concept>
  <edm:WebResource rdf:about="https://sammlungenonline.albertina.at/cc/imageproxy.ashx?filename=images/DG1949_697.jpg&amp;cache=yes">
    <dc:rights>Albertina, Wien, Österreich</dc:rights>
    <dcterms:isReferencedBy rdf:resource="https://sammlungenonline.albertina.at/iiif/tms_101507/manifest.json"/>
    <edm:rights rdf:resource="http://creativecommons.org/publicdomain/mark/1.0/"/>
    <svcs:has_service rdf:resource="https://sammlungenonline.albertina.at/iiif/images/DG1949_697.JPG"/>
  </edm:WebResource>
  <svcs:Service rdf:about="https://sammlungenonline.albertina.at/iiif/images/DG1949_697.JPG">
    <dcterms:conformsTo rdf:resource="http://iiif.io/api/image"/>
    <doap:implements rdf:resource="http://iiif.io/api/image/2/level2.json"/>
  </svcs:Service>
  <edm:ProvidedCHO rdf:about="https://id.kulturpool.at/000056bf/cho">
    <edm:type>IMAGE</edm:type>
    <dc:creator rdf:resource="http://d-nb.info/gnd/11869703X"/>
    <dc:identifier>DG1949/697</dc:identifier>
    <dc:language>de</dc:language>
    <dc:rights>Albertina, Wien, Österreich</dc:rights>
    <dc:title xml:lang="german">Die Erweckung des Lazarus</dc:title>
    <dc:type rdf:resource="http://vocab.getty.edu/aat/300041273"/>
    <dcterms:created>1506</dcterms:created>
    <dcterms:extent>22,5 x 15,9 cm (laut Hollstein)</dcterms:extent>
    <dcterms:isPartOf>Graphische Sammlung</dcterms:isPartOf>
    <dcterms:medium>Holzschnitt</dcterms:medium>
  </edm:ProvidedCHO>
"#,
    )
}

/// [`albertina_xml`] with a language tag on `edm:type`.
pub fn albertina_xml_with_type_lang() -> String {
    albertina_xml().replace(
        "<edm:type>IMAGE</edm:type>",
        "<edm:type xml:lang=\"en\">IMAGE</edm:type>",
    )
}

/// A herbarium record whose aggregation id is also a web resource.
pub fn herbarium_xml() -> String {
    rdf_xml(
        r#"
  <ore:Aggregation rdf:about="https://gzu.jacq.org/GZU000274120">
    <edm:aggregatedCHO rdf:resource="https://gzu.jacq.org/GZU000274120#CHO"/>
    <edm:dataProvider>University of Graz, Institute of Plant Sciences - Herbarium GZU</edm:dataProvider>
    <edm:isShownAt rdf:resource="https://gzu.jacq.org/GZU000274120"/>
    <edm:isShownBy rdf:resource="https://services.jacq.org/jacq-services/rest/images/europeana/38321?withredirect=1"/>
    <edm:provider>Kulturpool</edm:provider>
    <edm:rights rdf:resource="http://creativecommons.org/licenses/by/4.0/"/>
    <edm:object rdf:resource="https://services.jacq.org/jacq-services/rest/images/europeana/38321?withredirect=1"/>
  </ore:Aggregation>
  <edm:ProvidedCHO rdf:about="https://gzu.jacq.org/GZU000274120#CHO">
    <dc:title>Adinandra acutifolia Hand.-Mazz.</dc:title>
    <dc:description xml:lang="en">A PreservedSpecimen of Adinandra acutifolia Hand.-Mazz. collected by Handel-Mazzetti,H.R.E. von</dc:description>
    <dc:identifier>https://gzu.jacq.org/GZU000274120</dc:identifier>
    <dc:language>und</dc:language>
    <edm:type>IMAGE</edm:type>
    <dc:type rdf:resource="http://rs.tdwg.org/dwc/terms/PreservedSpecimen"/>
    <dcterms:spatial>China, Guizhou, Prov. Kweitschou: in dumetis ad pagum Badschai. 950 m.</dcterms:spatial>
    <dc:date>1917-07-14</dc:date>
    <dc:creator>Handel-Mazzetti,H.R.E. von</dc:creator>
  </edm:ProvidedCHO>
  <edm:WebResource rdf:about="https://gzu.jacq.org/GZU000274120"/>
  <edm:WebResource rdf:about="https://services.jacq.org/jacq-services/rest/images/europeana/38321?withredirect=1">
    <dc:rights>University of Graz, Institute of Plant Sciences - Herbarium GZU</dc:rights>
    <edm:rights rdf:resource="http://creativecommons.org/licenses/by/4.0/"/>
  </edm:WebResource>
  <skos:Concept rdf:about="http://rs.tdwg.org/dwc/terms/PreservedSpecimen">
    <skos:prefLabel xml:lang="en">Preserved Specimen</skos:prefLabel>
    <skos:altLabel xml:lang="en">Preserved Specimen</skos:altLabel>
  </skos:Concept>
"#,
    )
}

/// A text record whose ProvidedCHO id contains a non-ASCII character.
pub fn umlaut_xml() -> String {
    rdf_xml(
        r#"
  <edm:ProvidedCHO rdf:about="https://uri.test/edm123ü">
    <dc:type xml:lang="en">Text</dc:type>
    <dc:title xml:lang="de">Titel</dc:title>
    <dc:identifier>123</dc:identifier>
    <dc:language>de</dc:language>
    <edm:type>TEXT</edm:type>
  </edm:ProvidedCHO>
  <ore:Aggregation rdf:about="http://uri.test/edm#Aggregation">
    <edm:aggregatedCHO rdf:resource="https://uri.test/edm123ü"/>
    <edm:dataProvider>Test</edm:dataProvider>
    <edm:isShownAt rdf:resource="http://uri.test/edm123.jpg"/>
    <edm:isShownBy rdf:resource="http://uri.test/edm123.jpg"/>
    <edm:provider>Kulturpool</edm:provider>
    <edm:rights rdf:resource="http://creativecommons.org/licenses/by-nc-sa/4.0/"/>
  </ore:Aggregation>
"#,
    )
}

/// A record whose agent has an `xsd:gYear` date of birth.
pub fn gyear_xml() -> String {
    rdf_xml(
        r#"
  <edm:ProvidedCHO rdf:about="http://uri.test/gyear/cho">
    <edm:type>IMAGE</edm:type>
    <dc:identifier>G-1</dc:identifier>
    <dc:title>Portrait</dc:title>
    <dc:creator rdf:resource="http://uri.test/gyear/agent"/>
    <dc:subject>portraits</dc:subject>
  </edm:ProvidedCHO>
  <ore:Aggregation rdf:about="http://uri.test/gyear/aggregation">
    <edm:aggregatedCHO rdf:resource="http://uri.test/gyear/cho"/>
    <edm:dataProvider>Test</edm:dataProvider>
    <edm:provider xml:lang="de">Kulturpool</edm:provider>
    <edm:rights rdf:resource="http://rightsstatements.org/vocab/InC/1.0/"/>
    <edm:isShownAt rdf:resource="http://uri.test/gyear/page"/>
  </ore:Aggregation>
  <edm:Agent rdf:about="http://uri.test/gyear/agent">
    <skos:prefLabel xml:lang="de">Oskar Kokoschka</skos:prefLabel>
    <rdagr2:dateOfBirth rdf:datatype="http://www.w3.org/2001/XMLSchema#gYear">1885</rdagr2:dateOfBirth>
  </edm:Agent>
"#,
    )
}

/// A minimal record whose ProvidedCHO carries two `owl:sameAs` links.
pub fn owl_same_as_xml() -> String {
    rdf_xml(
        r#"
  <edm:ProvidedCHO rdf:about="http://example.org/cho/1">
    <edm:type>IMAGE</edm:type>
    <dc:identifier>id-1</dc:identifier>
    <dc:description>Test object</dc:description>
    <dc:subject>Test subject</dc:subject>
    <dc:title>Test title</dc:title>
    <dc:language>en</dc:language>
    <dc:type>TestType</dc:type>
    <dcterms:spatial>TestPlace</dcterms:spatial>
    <dcterms:temporal>TestTime</dcterms:temporal>
    <owl:sameAs rdf:resource="http://example.org/other/1"/>
    <owl:sameAs rdf:resource="http://example.org/other/2"/>
  </edm:ProvidedCHO>
  <ore:Aggregation rdf:about="http://example.org/aggr/1">
    <edm:aggregatedCHO rdf:resource="http://example.org/cho/1"/>
    <edm:dataProvider>Test DataProvider</edm:dataProvider>
    <edm:provider>Test Provider</edm:provider>
    <edm:rights rdf:resource="http://rightsstatements.org/vocab/InC/1.0/"/>
    <edm:isShownAt rdf:resource="http://example.org/view/1"/>
    <edm:isShownBy rdf:resource="http://example.org/image/1"/>
  </ore:Aggregation>
"#,
    )
}

/// Parses an RDF/XML fixture, panicking on failure.
pub fn parse_xml(xml: &str) -> EdmRecord {
    EdmParser::from_str(xml, RdfFormat::RdfXml)
        .expect("fixture parses as RDF/XML")
        .parse()
        .expect("fixture is a valid record")
}

/// The parsed scenario record.
pub fn scenario_record() -> EdmRecord {
    parse_xml(&scenario_xml())
}

/// Shorthand for a reference that must be valid.
pub fn r(uri: &str) -> Reference {
    Reference::new(uri).expect("valid test URI")
}

/// A ProvidedCHO that satisfies the mandate rules.
pub fn minimal_cho(id: &str) -> ProvidedCho {
    ProvidedCho::builder(r(id))
        .add("edm_type", Literal::new("TEXT"))
        .add("dc_identifier", Literal::new("123"))
        .add("dc_title", Literal::lang_tagged("Titel", "de"))
        .add("dc_type", Literal::lang_tagged("Text", "en"))
        .add("dc_language", Literal::new("de"))
        .build()
        .expect("minimal ProvidedCHO is valid")
}

/// An Aggregation that satisfies the mandate rules and points at `cho`.
pub fn minimal_aggregation(id: &str, cho: &str) -> Aggregation {
    Aggregation::builder(r(id))
        .add("edm_aggregatedCHO", r(cho))
        .add("edm_dataProvider", Literal::new("Test"))
        .add("edm_provider", Literal::lang_tagged("Kulturpool", "de"))
        .add("edm_rights", r("http://creativecommons.org/licenses/by-nc-sa/4.0/"))
        .add("edm_isShownBy", r("http://uri.test/edm123.jpg"))
        .build()
        .expect("minimal Aggregation is valid")
}
