//! Ontology documentation generator.
//!
//! Renders an OWL/RDFS ontology graph as a single human-readable document
//! in HTML, Markdown or AsciiDoc: metadata, classes, properties and named
//! individuals, cross-linked within the document.
//!
//! # Entry Points
//!
//! ```
//! use ontdoc::loader::{parse_str, Syntax};
//! use ontdoc::{generate, Config};
//!
//! let ttl = r#"
//!     @prefix owl: <http://www.w3.org/2002/07/owl#> .
//!     @prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
//!     <https://example.org/o> a owl:Ontology ; rdfs:label "Example" .
//!     <https://example.org/Thing> a owl:Class .
//! "#;
//! let html = generate(parse_str(ttl, Syntax::Turtle)?, &Config::default())?;
//! assert!(html.contains("<h1>Example</h1>"));
//! # Ok::<(), ontdoc::Error>(())
//! ```
//!
//! # Pipeline
//!
//! ```text
//! namespaces   prefix table, default namespace, used namespaces
//! normalizer   expand synonym vocabularies, materialise implied types
//! extractor    discover + populate classes, properties, individuals
//! metadata     the owl:Ontology declaration (fatal if absent)
//! linker       symbolic references -> anchors / formatted CURIEs
//! templates    html | markdown | asciidoc
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod collection;
pub mod config;
pub mod error;
pub mod example;
pub mod extractor;
pub mod graph;
pub mod linker;
pub mod loader;
pub mod markup;
pub mod metadata;
pub mod namespaces;
pub mod normalizer;
pub mod templates;
pub mod text;
pub mod writer;

use std::path::Path;

use ontdoc_model::Node;
use tracing::debug;

pub use config::{Config, PrefixPolicy};
pub use error::{Error, Result};
pub use loader::LoadedOntology;

use extractor::ExtractOptions;
use graph::OntologyGraph;
use linker::Linker;
use metadata::MetadataOptions;
use namespaces::{CurieResolver, Namespaces, PrefixTable};
use templates::Document;

/// Generates the document for a parsed ontology.
///
/// Prefixes are resolved according to `config.prefix_policy`.
///
/// # Errors
///
/// Returns [`Error::MissingOntology`] if the graph declares no ontology, or
/// [`Error::Store`] if the graph store rejects the expansion.
pub fn generate(loaded: LoadedOntology, config: &Config) -> Result<String> {
    let prepared = Prepared::new(loaded, config)?;
    match config.prefix_policy {
        PrefixPolicy::Stored => Ok(prepared.render(&prepared.table, config)),
        #[cfg(feature = "online")]
        PrefixPolicy::Online => {
            let resolver = namespaces::online::OnlineResolver::new(prepared.table.clone());
            Ok(prepared.render(&resolver, config))
        }
        #[cfg(not(feature = "online"))]
        PrefixPolicy::Online => {
            tracing::warn!("online prefix resolution needs the `online` feature; using stored prefixes");
            Ok(prepared.render(&prepared.table, config))
        }
    }
}

/// Generates the document, resolving CURIEs through `resolver` instead of
/// the assembled prefix table.
///
/// # Errors
///
/// Same as [`generate`].
pub fn generate_with_resolver(
    loaded: LoadedOntology,
    config: &Config,
    resolver: &dyn CurieResolver,
) -> Result<String> {
    let prepared = Prepared::new(loaded, config)?;
    Ok(prepared.render(resolver, config))
}

/// Reads an RDF file and generates its document.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, or any error of
/// [`generate`].
pub fn generate_file(path: &Path, config: &Config) -> Result<String> {
    generate(loader::load_path(path)?, config)
}

/// The stages that do not depend on the CURIE resolver.
struct Prepared {
    graph: OntologyGraph,
    ontology: Node,
    table: PrefixTable,
    namespaces: Namespaces,
}

impl Prepared {
    fn new(loaded: LoadedOntology, config: &Config) -> Result<Self> {
        let LoadedOntology { graph, prefixes } = loaded;
        let ontology = metadata::ontology_subject(&graph)?;
        let table = PrefixTable::assemble(&graph, &prefixes, &config.prefixes);
        // Used namespaces come from the source statements, not the expansion.
        let namespaces = Namespaces::collect(&graph, &table, &ontology, &prefixes);
        let graph = normalizer::expand(graph)?;
        debug!(
            statements = graph.len(),
            namespaces = namespaces.used.len(),
            default_namespace = %namespaces.default,
            "prepared graph"
        );
        Ok(Self {
            graph,
            ontology,
            table,
            namespaces,
        })
    }

    fn render(&self, resolver: &dyn CurieResolver, config: &Config) -> String {
        let language = config.default_language.as_str();
        let index = extractor::extract(
            &self.graph,
            ExtractOptions {
                format: config.format,
                language,
            },
        );
        let linker = Linker::new(config.format, resolver);
        let metadata = metadata::aggregate(
            &self.graph,
            &self.ontology,
            MetadataOptions {
                linker,
                language,
                source_link: config.source_link.as_deref(),
            },
        );
        let linked = linker::link(index, &linker);
        debug!(format = %config.format, "rendering");
        templates::render(
            config.format,
            &Document {
                metadata: &metadata,
                index: &linked,
                namespaces: &self.namespaces,
                include_css: config.include_css,
                language,
            },
        )
    }
}
