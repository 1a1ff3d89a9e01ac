//! Graph expansion: folds synonym vocabularies onto one canonical predicate
//! per concept and materialises types the rest of the pipeline looks for.
//!
//! Rules only add statements, except agent consolidation which moves the
//! creator/contributor/publisher variants onto their `dcterms:` form.

use ontdoc_model::vocab::{dc, dcterms, owl, rdf, rdfs, sdo, skos};
use ontdoc_model::Node;
use tracing::debug;

use crate::error::Result;
use crate::graph::OntologyGraph;

const TITLE_SYNONYMS: [&str; 4] = [dc::TITLE, rdfs::LABEL, skos::PREF_LABEL, sdo::NAME];

const DESCRIPTION_SYNONYMS: [&str; 4] = [
    dc::DESCRIPTION,
    rdfs::COMMENT,
    skos::DEFINITION,
    sdo::DESCRIPTION,
];

const OWL_PROPERTY_TYPES: [&str; 4] = [
    owl::OBJECT_PROPERTY,
    owl::FUNCTIONAL_PROPERTY,
    owl::DATATYPE_PROPERTY,
    owl::ANNOTATION_PROPERTY,
];

/// Canonical agent predicate and the predicates folded into it.
/// `sdo:author` is deliberately conflated with `dcterms:creator`.
const AGENT_ROLES: [(&str, &[&str]); 3] = [
    (dcterms::CREATOR, &[dc::CREATOR, sdo::CREATOR, sdo::AUTHOR]),
    (dcterms::CONTRIBUTOR, &[dc::CONTRIBUTOR, sdo::CONTRIBUTOR]),
    (dcterms::PUBLISHER, &[dc::PUBLISHER, sdo::PUBLISHER]),
];

/// Applies every expansion rule and returns the expanded graph.
///
/// # Errors
///
/// Returns [`crate::Error::Store`] if the store rejects a mutation.
pub fn expand(mut graph: OntologyGraph) -> Result<OntologyGraph> {
    let before = graph.len();

    copy_predicates(&mut graph, &TITLE_SYNONYMS, dcterms::TITLE)?;
    copy_predicates(&mut graph, &DESCRIPTION_SYNONYMS, dcterms::DESCRIPTION)?;

    let property = Node::iri(rdf::PROPERTY);
    for owl_type in OWL_PROPERTY_TYPES {
        for subject in graph.subjects(rdf::TYPE, &Node::iri(owl_type)) {
            graph.insert(&subject, rdf::TYPE, &property)?;
        }
    }

    let class = Node::iri(rdfs::CLASS);
    for subject in graph.subjects(rdf::TYPE, &Node::iri(owl::CLASS)) {
        graph.insert(&subject, rdf::TYPE, &class)?;
    }

    let restriction = Node::iri(owl::RESTRICTION);
    for subject in graph.subjects_with(owl::ON_PROPERTY) {
        if subject.is_blank() {
            graph.insert(&subject, rdf::TYPE, &restriction)?;
        }
    }

    // Must run after the rules above so their copies are not moved.
    for (canonical, variants) in AGENT_ROLES {
        for variant in variants.iter().copied() {
            for (subject, object) in graph.subject_objects(variant) {
                graph.remove(&subject, variant, &object)?;
                graph.insert(&subject, canonical, &object)?;
            }
        }
    }

    debug!(before, after = graph.len(), "expanded graph");
    Ok(graph)
}

fn copy_predicates(graph: &mut OntologyGraph, synonyms: &[&str], canonical: &str) -> Result<()> {
    for synonym in synonyms.iter().copied() {
        for (subject, object) in graph.subject_objects(synonym) {
            graph.insert(&subject, canonical, &object)?;
        }
    }
    Ok(())
}
