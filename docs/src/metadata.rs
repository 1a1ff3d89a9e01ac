//! Document-level metadata taken from the `owl:Ontology` declaration.

use ontdoc_model::vocab::{dcterms, doap, owl, prov, rdf, sdo, skos, vann};
use ontdoc_model::{AgentRole, DocumentMetadata, Node};
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::graph::OntologyGraph;
use crate::linker::Linker;
use crate::markup;
use crate::text::{preferred_text, with_copyright_glyph};

/// Title used when the ontology declares none.
pub const PLACEHOLDER_TITLE: &str = "{no title found}";

/// The subject declared `owl:Ontology`.
///
/// With several declarations the smallest identifier wins.
///
/// # Errors
///
/// Returns [`Error::MissingOntology`] if nothing is declared an ontology.
pub fn ontology_subject(graph: &OntologyGraph) -> Result<Node> {
    let mut declared = graph.subjects(rdf::TYPE, &Node::iri(owl::ONTOLOGY));
    if declared.len() > 1 {
        warn!(
            count = declared.len(),
            chosen = %declared[0],
            "several owl:Ontology declarations; using the first"
        );
    }
    if declared.is_empty() {
        return Err(Error::MissingOntology);
    }
    Ok(declared.swap_remove(0))
}

/// Inputs of the aggregation besides the graph.
#[derive(Debug, Clone, Copy)]
pub struct MetadataOptions<'a> {
    /// Formats IRIs.
    pub linker: Linker<'a>,
    /// Preferred language tag.
    pub language: &'a str,
    /// Where the RDF source can be fetched.
    pub source_link: Option<&'a str>,
}

type Handler = fn(&Aggregator<'_>, &mut DocumentMetadata, &Node);

/// Side effect of each recognised predicate.
const DISPATCH: [(&str, Handler); 19] = [
    (owl::IMPORTS, imports),
    (owl::VERSION_IRI, version_iri),
    (owl::VERSION_INFO, version_info),
    (dcterms::CREATED, created),
    (dcterms::MODIFIED, modified),
    (dcterms::ISSUED, issued),
    (dcterms::SOURCE, source),
    (dcterms::LICENSE, license),
    (dcterms::RIGHTS, rights),
    (vann::PREFERRED_NAMESPACE_PREFIX, preferred_prefix),
    (vann::PREFERRED_NAMESPACE_URI, preferred_uri),
    (dcterms::CREATOR, creator),
    (dcterms::CONTRIBUTOR, contributor),
    (dcterms::PUBLISHER, publisher),
    (sdo::EDITOR, editor),
    (sdo::FUNDER, funder),
    (sdo::TRANSLATOR, translator),
    (prov::WAS_GENERATED_BY, generated_by),
    (sdo::CODE_REPOSITORY, code_repository),
];

struct Aggregator<'a> {
    graph: &'a OntologyGraph,
    options: MetadataOptions<'a>,
}

/// Builds the metadata record of `ontology`.
#[must_use]
pub fn aggregate(
    graph: &OntologyGraph,
    ontology: &Node,
    options: MetadataOptions<'_>,
) -> DocumentMetadata {
    let format = options.linker.format();
    let agg = Aggregator { graph, options };

    let title = preferred_text(graph, ontology, dcterms::TITLE, options.language).unwrap_or_else(
        || {
            warn!(ontology = %ontology, "ontology has no title");
            PLACEHOLDER_TITLE.to_string()
        },
    );

    let mut meta = DocumentMetadata {
        uri: ontology.value().to_string(),
        title,
        description: preferred_text(graph, ontology, dcterms::DESCRIPTION, options.language)
            .map(|d| markup::rich_text(format, &d)),
        history_note: preferred_text(graph, ontology, skos::HISTORY_NOTE, options.language)
            .map(|h| markup::rich_text(format, &h)),
        source_link: options
            .source_link
            .map(|href| markup::link(format, href, &markup::text(format, "RDF"))),
        ..DocumentMetadata::default()
    };

    for (predicate, object) in graph.predicate_objects(ontology) {
        if let Some((_, handler)) = DISPATCH.iter().find(|(p, _)| *p == predicate) {
            handler(&agg, &mut meta, &object);
        }
    }

    debug!(
        uri = %meta.uri,
        imports = meta.imports.len(),
        creators = meta.agents.creators.len(),
        "aggregated metadata"
    );
    meta
}

impl Aggregator<'_> {
    fn text(&self, node: &Node) -> String {
        markup::text(self.options.linker.format(), node.value())
    }

    fn iri_or_text(&self, node: &Node) -> String {
        self.options.linker.iri_or_text(node.value())
    }

    fn add_agent(&self, meta: &mut DocumentMetadata, role: AgentRole, agent: &Node) {
        let rendered = match agent {
            Node::Literal(_) => self.text(agent),
            _ => self.agent(agent),
        };
        meta.agents.get_mut(role).insert(rendered);
    }

    /// An agent node: name linked to its web page, then email and
    /// affiliation when given.
    fn agent(&self, agent: &Node) -> String {
        let format = self.options.linker.format();
        let name = self.name_of(agent);
        let mut out = match self.homepage(agent) {
            Some(href) => markup::link(format, &href, &markup::text(format, &name)),
            None => markup::text(format, &name),
        };
        if let Some(email) = self.graph.first_object(agent, sdo::EMAIL) {
            let address = email.value().trim_start_matches("mailto:");
            out.push_str(&format!(
                " ({})",
                markup::link(
                    format,
                    &format!("mailto:{address}"),
                    &markup::text(format, address)
                )
            ));
        }
        if let Some(affiliation) = self.graph.first_object(agent, sdo::AFFILIATION) {
            let org = self.name_of(&affiliation);
            let org = match self.homepage(&affiliation) {
                Some(href) => markup::link(format, &href, &markup::text(format, &org)),
                None => markup::text(format, &org),
            };
            out.push_str(&format!(" of {org}"));
        }
        out
    }

    fn name_of(&self, node: &Node) -> String {
        preferred_text(self.graph, node, dcterms::TITLE, self.options.language)
            .unwrap_or_else(|| node.value().to_string())
    }

    fn homepage(&self, node: &Node) -> Option<String> {
        self.graph
            .first_object(node, sdo::URL)
            .map(|url| url.value().to_string())
            .or_else(|| node.as_iri().map(str::to_string))
    }
}

fn imports(agg: &Aggregator<'_>, meta: &mut DocumentMetadata, o: &Node) {
    meta.imports.insert(agg.options.linker.external(o.value(), None));
}

fn version_iri(agg: &Aggregator<'_>, meta: &mut DocumentMetadata, o: &Node) {
    meta.version_iri = Some(agg.options.linker.external(o.value(), None));
}

fn version_info(agg: &Aggregator<'_>, meta: &mut DocumentMetadata, o: &Node) {
    meta.version_info = Some(agg.text(o));
}

fn created(agg: &Aggregator<'_>, meta: &mut DocumentMetadata, o: &Node) {
    meta.created = Some(agg.text(o));
}

fn modified(agg: &Aggregator<'_>, meta: &mut DocumentMetadata, o: &Node) {
    meta.modified = Some(agg.text(o));
}

fn issued(agg: &Aggregator<'_>, meta: &mut DocumentMetadata, o: &Node) {
    meta.issued = Some(agg.text(o));
}

fn source(agg: &Aggregator<'_>, meta: &mut DocumentMetadata, o: &Node) {
    meta.source = Some(agg.iri_or_text(o));
}

fn license(agg: &Aggregator<'_>, meta: &mut DocumentMetadata, o: &Node) {
    meta.license = Some(agg.iri_or_text(o));
}

fn rights(agg: &Aggregator<'_>, meta: &mut DocumentMetadata, o: &Node) {
    let format = agg.options.linker.format();
    meta.rights = Some(with_copyright_glyph(format, &agg.text(o)));
}

fn preferred_prefix(_: &Aggregator<'_>, meta: &mut DocumentMetadata, o: &Node) {
    meta.preferred_namespace_prefix = Some(o.value().to_string());
}

fn preferred_uri(_: &Aggregator<'_>, meta: &mut DocumentMetadata, o: &Node) {
    meta.preferred_namespace_uri = Some(o.value().to_string());
}

fn creator(agg: &Aggregator<'_>, meta: &mut DocumentMetadata, o: &Node) {
    agg.add_agent(meta, AgentRole::Creator, o);
}

fn contributor(agg: &Aggregator<'_>, meta: &mut DocumentMetadata, o: &Node) {
    agg.add_agent(meta, AgentRole::Contributor, o);
}

fn publisher(agg: &Aggregator<'_>, meta: &mut DocumentMetadata, o: &Node) {
    agg.add_agent(meta, AgentRole::Publisher, o);
}

fn editor(agg: &Aggregator<'_>, meta: &mut DocumentMetadata, o: &Node) {
    agg.add_agent(meta, AgentRole::Editor, o);
}

fn funder(agg: &Aggregator<'_>, meta: &mut DocumentMetadata, o: &Node) {
    agg.add_agent(meta, AgentRole::Funder, o);
}

fn translator(agg: &Aggregator<'_>, meta: &mut DocumentMetadata, o: &Node) {
    agg.add_agent(meta, AgentRole::Translator, o);
}

fn generated_by(agg: &Aggregator<'_>, meta: &mut DocumentMetadata, o: &Node) {
    if let Some(repository) = agg.graph.first_object(o, doap::REPOSITORY) {
        meta.repository = Some(agg.options.linker.external(repository.value(), None));
    }
}

fn code_repository(agg: &Aggregator<'_>, meta: &mut DocumentMetadata, o: &Node) {
    meta.repository = Some(agg.options.linker.external(o.value(), None));
}
