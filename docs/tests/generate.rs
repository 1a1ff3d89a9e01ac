//! End-to-end generation: Turtle in, document out, for every format.

use ontdoc::loader::{parse_str, Syntax};
use ontdoc::namespaces::CurieResolver;
use ontdoc::{generate, generate_with_resolver, Config, Error};
use ontdoc_model::OutputFormat;

const PREFIXES: &str = r#"
@prefix owl: <http://www.w3.org/2002/07/owl#> .
@prefix rdf: <http://www.w3.org/1999/02/22-rdf-syntax-ns#> .
@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
@prefix dcterms: <http://purl.org/dc/terms/> .
@prefix ex: <https://example.org/> .
"#;

fn document(body: &str, format: OutputFormat) -> Result<String, Error> {
    let ttl = format!("{PREFIXES}{body}");
    let config = Config {
        format,
        ..Config::default()
    };
    generate(parse_str(&ttl, Syntax::Turtle)?, &config)
}

const SMALL: &str = r#"
<https://example.org/o> a owl:Ontology ; rdfs:label "Example" .
ex:Thing a owl:Class .
"#;

#[test]
fn small_ontology_in_html() {
    let html = document(SMALL, OutputFormat::Html).unwrap();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<title>Example</title>"));
    assert!(html.contains("<h1>Example</h1>"));
    assert!(html.contains("<div class=\"entity\" id=\"thing\">"));
    assert!(html.contains("<h3>Thing<sup class=\"sup-c\""));
    assert!(html.contains("<code>https://example.org/Thing</code>"));
}

#[test]
fn small_ontology_in_markdown() {
    let md = document(SMALL, OutputFormat::Markdown).unwrap();
    assert!(md.starts_with("# Example\n"));
    assert!(md.contains("<a id=\"thing\"></a>\n### Thing (c)"));
    assert!(md.contains("[Thing](#thing)"));
}

#[test]
fn small_ontology_in_asciidoc() {
    let adoc = document(SMALL, OutputFormat::AsciiDoc).unwrap();
    assert!(adoc.starts_with("= Example\n:toc: left\n"));
    assert!(adoc.contains("[[thing]]\n=== Thing ^c^"));
}

#[test]
fn titles_and_fragment_ids_from_labels() {
    let body = r#"
<https://example.org/o> a owl:Ontology ; dcterms:title "Example" .
ex:Thing a owl:Class ; rdfs:label "Thing" .
"#;
    for format in [OutputFormat::Html, OutputFormat::Markdown, OutputFormat::AsciiDoc] {
        let out = document(body, format).unwrap();
        assert!(out.contains("Example"), "{format}: no ontology title");
        assert!(out.contains("Thing"), "{format}: no class title");
    }
    let md = document(body, OutputFormat::Markdown).unwrap();
    assert!(md.contains("<a id=\"thing\"></a>"));
}

#[test]
fn missing_ontology_is_an_error() {
    let result = document("ex:Thing a owl:Class .", OutputFormat::Html);
    assert!(matches!(result, Err(Error::MissingOntology)));
}

#[test]
fn untitled_ontology_gets_placeholder() {
    let md = document("<https://example.org/o> a owl:Ontology .", OutputFormat::Markdown).unwrap();
    assert!(md.starts_with("# {no title found}\n"));
}

#[test]
fn generation_is_deterministic() {
    let body = r#"
<https://example.org/o> a owl:Ontology ; dcterms:title "D" .
ex:B a owl:Class ; rdfs:subClassOf ex:A .
ex:A a owl:Class .
ex:p a owl:ObjectProperty ; rdfs:domain ex:A ; rdfs:range ex:B .
ex:q a owl:DatatypeProperty ; rdfs:domain ex:B .
ex:i a owl:NamedIndividual , ex:A .
"#;
    for format in [OutputFormat::Html, OutputFormat::Markdown, OutputFormat::AsciiDoc] {
        assert_eq!(document(body, format).unwrap(), document(body, format).unwrap());
    }
}

#[test]
fn local_references_link_to_anchors() {
    let md = document(
        r#"
<https://example.org/o> a owl:Ontology .
ex:A a owl:Class .
ex:B a owl:Class ; rdfs:subClassOf ex:A .
"#,
        OutputFormat::Markdown,
    )
    .unwrap();
    assert!(md.contains("Super-classes | [A](#a)"));
    assert!(md.contains("Sub-classes | [B](#b)"));
}

#[test]
fn union_domains_render_parenthesised() {
    let md = document(
        r#"
<https://example.org/o> a owl:Ontology .
ex:A a owl:Class .
ex:B a owl:Class .
ex:p a owl:ObjectProperty ; rdfs:domain [ owl:unionOf ( ex:A ex:B ) ] .
"#,
        OutputFormat::Markdown,
    )
    .unwrap();
    assert!(md.contains("Domain(s) | ([A](#a) or [B](#b))"));
}

#[test]
fn indexes_sort_naturally() {
    let md = document(
        r#"
<https://example.org/o> a owl:Ontology .
ex:i2 a owl:NamedIndividual ; rdfs:label "Item 2" .
ex:i10 a owl:NamedIndividual ; rdfs:label "Item 10" .
ex:i1 a owl:NamedIndividual ; rdfs:label "Item 1" .
"#,
        OutputFormat::Markdown,
    )
    .unwrap();
    assert!(md.contains("[Item 1](#item-1), [Item 2](#item-2), [Item 10](#item-10)"));
}

#[test]
fn properties_are_grouped_by_kind() {
    let md = document(
        r#"
<https://example.org/o> a owl:Ontology .
ex:f a owl:ObjectProperty , owl:FunctionalProperty .
ex:o a owl:ObjectProperty .
ex:d a owl:DatatypeProperty .
ex:a a owl:AnnotationProperty .
ex:g a rdf:Property .
"#,
        OutputFormat::Markdown,
    )
    .unwrap();
    let headings = [
        "## Object Properties",
        "## Functional Properties",
        "## Datatype Properties",
        "## Annotation Properties",
        "## Properties",
    ];
    for heading in headings {
        assert!(md.contains(&format!("{heading}\n")), "missing {heading}");
    }
    assert!(md.contains("### F (fp)"));
}

#[test]
fn stylesheet_is_inlined_or_linked() {
    let ttl = format!("{PREFIXES}{SMALL}");
    let inline = Config {
        include_css: true,
        ..Config::default()
    };
    let html = generate(parse_str(&ttl, Syntax::Turtle).unwrap(), &inline).unwrap();
    assert!(html.contains("<style>"));
    assert!(!html.contains("ontdoc.css"));

    let html = generate(parse_str(&ttl, Syntax::Turtle).unwrap(), &Config::default()).unwrap();
    assert!(html.contains("<link rel=\"stylesheet\" href=\"ontdoc.css\" />"));
    assert!(!html.contains("<style>"));
}

#[test]
fn configured_prefixes_shape_curies() {
    let ttl = format!(
        "{PREFIXES}<https://example.org/o> a owl:Ontology .\n\
         ex:A a owl:Class ; rdfs:subClassOf <https://other.org/vocab/Base> ."
    );
    let config = Config::from_toml_str(
        r#"
format = "md"

[prefixes]
oth = "https://other.org/vocab/"
"#,
    )
    .unwrap();
    let md = generate(parse_str(&ttl, Syntax::Turtle).unwrap(), &config).unwrap();
    assert!(md.contains("[oth:Base](https://other.org/vocab/Base) (c)"));
    assert!(md.contains("oth | `https://other.org/vocab/`"));
}

struct Shouting;

impl CurieResolver for Shouting {
    fn curie(&self, iri: &str) -> Option<String> {
        iri.rsplit('/').next().map(|local| format!("X:{}", local.to_uppercase()))
    }
}

#[test]
fn custom_resolver_labels_external_links() {
    let ttl = format!(
        "{PREFIXES}<https://example.org/o> a owl:Ontology .\n\
         ex:A a owl:Class ; rdfs:subClassOf <https://other.org/Base> ."
    );
    let config = Config {
        format: OutputFormat::Markdown,
        ..Config::default()
    };
    let md =
        generate_with_resolver(parse_str(&ttl, Syntax::Turtle).unwrap(), &config, &Shouting).unwrap();
    assert!(md.contains("[X:BASE](https://other.org/Base) (c)"));
}

#[test]
fn agents_and_dates_appear_in_metadata() {
    let md = document(
        r#"
@prefix sdo: <https://schema.org/> .
<https://example.org/o> a owl:Ontology ;
    dcterms:title "Agents" ;
    sdo:creator [ sdo:name "Ann Author" ; sdo:email <mailto:ann@example.org> ] ;
    dcterms:created "2024-01-01" ;
    owl:versionInfo "1.0" .
"#,
        OutputFormat::Markdown,
    )
    .unwrap();
    assert!(md.contains("Creators | Ann Author"));
    assert!(md.contains("Created | 2024-01-01"));
    assert!(md.contains("Version Info | 1.0"));
}

#[test]
fn nested_restrictions_render_in_equivalents_and_unions() {
    let md = document(
        r#"
<https://example.org/o> a owl:Ontology .
ex:p a owl:ObjectProperty .
ex:A a owl:Class .
ex:D a owl:Class .
ex:C a owl:Class ;
    owl:equivalentClass [
        a owl:Restriction ;
        owl:onProperty ex:p ;
        owl:qualifiedCardinality "1"^^<http://www.w3.org/2001/XMLSchema#nonNegativeInteger> ;
        owl:onClass ex:D
    ] .
ex:E a owl:Class ;
    rdfs:subClassOf [ owl:unionOf ( ex:A [ owl:onProperty ex:p ; owl:allValuesFrom ex:D ] ) ] .
"#,
        OutputFormat::Markdown,
    )
    .unwrap();
    assert!(md.contains("Equivalent To | [P](#p) exactly 1 [D](#d)"), "{md}");
    assert!(md.contains("Super-classes | ([A](#a) or [P](#p) only [D](#d))"), "{md}");
}

#[test]
fn html_declares_the_configured_language() {
    let ttl = format!("{PREFIXES}{SMALL}");
    let config = Config {
        default_language: "de".to_string(),
        ..Config::default()
    };
    let html = generate(parse_str(&ttl, Syntax::Turtle).unwrap(), &config).unwrap();
    assert!(html.contains("<html lang=\"de\">"));
}

#[test]
fn namespaces_list_only_what_the_source_uses() {
    let md = document(
        r#"
@prefix skos: <http://www.w3.org/2004/02/skos/core#> .
<https://example.org/o> a owl:Ontology ; skos:prefLabel "Labelled" .
ex:A a owl:Class ; skos:prefLabel "A" .
"#,
        OutputFormat::Markdown,
    )
    .unwrap();
    assert!(md.starts_with("# Labelled\n"));
    assert!(md.contains("skos | `http://www.w3.org/2004/02/skos/core#`"));
    assert!(!md.contains("dcterms | `"));
    assert!(!md.contains("rdfs | `"));
}
