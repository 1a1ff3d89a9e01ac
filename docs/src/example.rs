//! Rendering of `skos:example` values.
//!
//! An example may be an image, a plain link, a resource descriptor (a node
//! carrying `dcterms:format`, `dcterms:conformsTo` and `prof:hasArtifact`),
//! an `rdf:HTML` literal or anything else, which is shown as code.

use ontdoc_model::vocab::{dcterms, prof, rdf};
use ontdoc_model::{Node, OutputFormat};

use crate::graph::OntologyGraph;
use crate::markup;

const IMAGE_EXTENSIONS: [&str; 7] = [".png", ".jpg", ".tiff", ".gif", ".webp", ".pdf", ".svg"];

const CODE_MEDIA_TYPES: [&str; 6] = [
    "text/turtle",
    "text/n3",
    "application/ld+json",
    "application/json",
    "application/rdf+xml",
    "application/xml",
];

/// Renders one example value.
#[must_use]
pub fn render(graph: &OntologyGraph, example: &Node, format: OutputFormat) -> String {
    let value = example.value();

    let lowered = value.to_ascii_lowercase();
    if !example.is_blank() && IMAGE_EXTENSIONS.iter().any(|ext| lowered.contains(ext)) {
        return markup::image(format, value);
    }

    if !example.is_blank() && value.starts_with("http") {
        if graph.is_described(example) {
            return resource_descriptor(graph, example, format);
        }
        return match format {
            OutputFormat::Markdown => format!("[{value}]({value}) "),
            OutputFormat::AsciiDoc => format!("{value} "),
            OutputFormat::Html => markup::link(format, value, &markup::escape_html(value)),
        };
    }

    match example {
        Node::Blank(_) => resource_descriptor(graph, example, format),
        Node::Literal(lit) if lit.datatype == rdf::HTML => markup::raw_html(format, &lit.lexical),
        _ => markup::code(format, value),
    }
}

/// Renders the artifact of a resource descriptor according to its media type.
fn resource_descriptor(graph: &OntologyGraph, descriptor: &Node, format: OutputFormat) -> String {
    let media_type = graph
        .first_object(descriptor, dcterms::FORMAT)
        .map(|n| n.value().to_string());
    let conforms_to = graph
        .first_object(descriptor, dcterms::CONFORMS_TO)
        .map(|n| n.value().to_string());
    let artifact = graph
        .first_object(descriptor, prof::HAS_ARTIFACT)
        .map(|n| n.value().to_string())
        .unwrap_or_default();

    let body = match (media_type.as_deref(), format) {
        (Some(t), _) if CODE_MEDIA_TYPES.contains(&t) => markup::code(format, &artifact),
        (Some("text/html"), _) => markup::raw_html(format, &artifact),
        (Some("text/markdown"), OutputFormat::Markdown) => artifact,
        (Some("text/markdown"), _) => markup::raw_html(format, &markup::markdown_to_html(&artifact)),
        (Some("text/asciidoc"), OutputFormat::AsciiDoc) => artifact,
        _ => markup::code(format, &artifact),
    };

    match conforms_to {
        None => body,
        Some(standard) => match format {
            OutputFormat::Html => format!(
                "<div class=\"resource-descriptor\">{body}<br />Conforms to: {}</div>",
                markup::link(format, &standard, &markup::escape_html(&standard))
            ),
            OutputFormat::Markdown | OutputFormat::AsciiDoc => format!(
                "{body}\n\nConforms to: {}",
                markup::link(format, &standard, &standard)
            ),
        },
    }
}
