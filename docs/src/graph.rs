//! In-memory graph store access.
//!
//! Wraps a `sophia_inmem` graph behind the handful of pattern lookups the
//! pipeline needs. Results are returned as owned [`Node`] values, sorted, so
//! nothing downstream depends on the store's iteration order.

use std::collections::BTreeSet;

use ontdoc_model::vocab::{rdf, xsd};
use ontdoc_model::{Literal, Node};
use sophia_api::graph::{Graph, MutableGraph};
use sophia_api::term::matcher::Any;
use sophia_api::term::{BnodeId, IriRef, LanguageTag, SimpleTerm, Term, TermKind};
use sophia_api::triple::Triple;
use sophia_api::MownStr;
use sophia_inmem::graph::FastGraph;
use tracing::warn;

use crate::error::{Error, Result};

/// The graph an ontology document is generated from.
#[derive(Debug, Default)]
pub struct OntologyGraph {
    inner: FastGraph,
}

impl OntologyGraph {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps a store populated elsewhere.
    #[must_use]
    pub fn from_store(inner: FastGraph) -> Self {
        Self { inner }
    }

    /// Number of statements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.triples().count()
    }

    /// True when the graph holds no statement.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Adds a statement. Returns false if it was already present.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Store`] if the store cannot accept more terms.
    pub fn insert(&mut self, subject: &Node, predicate: &str, object: &Node) -> Result<bool> {
        self.inner
            .insert(to_term(subject), iri_term(predicate), to_term(object))
            .map_err(|e| Error::Store(e.to_string()))
    }

    /// Removes a statement. Returns false if it was absent.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Store`] if the store rejects the removal.
    pub fn remove(&mut self, subject: &Node, predicate: &str, object: &Node) -> Result<bool> {
        self.inner
            .remove(to_term(subject), iri_term(predicate), to_term(object))
            .map_err(|e| Error::Store(e.to_string()))
    }

    /// True if the exact statement is in the graph.
    #[must_use]
    pub fn contains(&self, subject: &Node, predicate: &str, object: &Node) -> bool {
        self.inner
            .contains(to_term(subject), iri_term(predicate), to_term(object))
            .unwrap_or(false)
    }

    /// True if `subject` is typed with `class`.
    #[must_use]
    pub fn has_type(&self, subject: &Node, class: &str) -> bool {
        self.contains(subject, rdf::TYPE, &Node::iri(class))
    }

    /// True if `subject` is the subject of any statement.
    #[must_use]
    pub fn is_described(&self, subject: &Node) -> bool {
        self.inner
            .triples_matching([to_term(subject)], Any, Any)
            .next()
            .is_some()
    }

    /// Objects of `(subject, predicate, ?)`.
    #[must_use]
    pub fn objects(&self, subject: &Node, predicate: &str) -> Vec<Node> {
        let found: BTreeSet<Node> = self
            .inner
            .triples_matching([to_term(subject)], [iri_term(predicate)], Any)
            .filter_map(std::result::Result::ok)
            .filter_map(|t| node_from_term(t.o()))
            .collect();
        found.into_iter().collect()
    }

    /// The smallest object of `(subject, predicate, ?)`.
    #[must_use]
    pub fn first_object(&self, subject: &Node, predicate: &str) -> Option<Node> {
        self.objects(subject, predicate).into_iter().next()
    }

    /// Subjects of `(?, predicate, object)`.
    #[must_use]
    pub fn subjects(&self, predicate: &str, object: &Node) -> Vec<Node> {
        let found: BTreeSet<Node> = self
            .inner
            .triples_matching(Any, [iri_term(predicate)], [to_term(object)])
            .filter_map(std::result::Result::ok)
            .filter_map(|t| node_from_term(t.s()))
            .collect();
        found.into_iter().collect()
    }

    /// Distinct subjects using `predicate`.
    #[must_use]
    pub fn subjects_with(&self, predicate: &str) -> Vec<Node> {
        let found: BTreeSet<Node> = self
            .subject_objects(predicate)
            .into_iter()
            .map(|(s, _)| s)
            .collect();
        found.into_iter().collect()
    }

    /// All `(subject, object)` pairs for `predicate`.
    #[must_use]
    pub fn subject_objects(&self, predicate: &str) -> Vec<(Node, Node)> {
        let found: BTreeSet<(Node, Node)> = self
            .inner
            .triples_matching(Any, [iri_term(predicate)], Any)
            .filter_map(std::result::Result::ok)
            .filter_map(|t| Some((node_from_term(t.s())?, node_from_term(t.o())?)))
            .collect();
        found.into_iter().collect()
    }

    /// All `(predicate, object)` pairs of `subject`.
    #[must_use]
    pub fn predicate_objects(&self, subject: &Node) -> Vec<(String, Node)> {
        let found: BTreeSet<(String, Node)> = self
            .inner
            .triples_matching([to_term(subject)], Any, Any)
            .filter_map(std::result::Result::ok)
            .filter_map(|t| {
                let predicate = t.p().iri()?.as_str().to_string();
                Some((predicate, node_from_term(t.o())?))
            })
            .collect();
        found.into_iter().collect()
    }

    /// Walks an `rdf:first` / `rdf:rest` chain starting at `head`.
    ///
    /// Stops at `rdf:nil`, at a node without `rdf:rest`, or when a node is
    /// visited twice.
    #[must_use]
    pub fn list_items(&self, head: &Node) -> Vec<Node> {
        let mut items = Vec::new();
        let mut visited = BTreeSet::new();
        let mut current = head.clone();
        loop {
            if current.as_iri() == Some(rdf::NIL) {
                break;
            }
            if !visited.insert(current.clone()) {
                warn!(node = %current, "cyclic RDF list; truncating");
                break;
            }
            if let Some(first) = self.first_object(&current, rdf::FIRST) {
                items.push(first);
            }
            match self.first_object(&current, rdf::REST) {
                Some(next) => current = next,
                None => break,
            }
        }
        items
    }

    /// Every IRI used in any position.
    #[must_use]
    pub fn iris(&self) -> BTreeSet<String> {
        let mut iris = BTreeSet::new();
        for t in self.inner.triples().filter_map(std::result::Result::ok) {
            for term in [t.s(), t.p(), t.o()] {
                if let Some(iri) = term.iri() {
                    iris.insert(iri.as_str().to_string());
                }
            }
        }
        iris
    }
}

/// Converts a store term into an owned node. Quoted triples and variables
/// have no counterpart and yield `None`.
fn node_from_term<T: Term>(term: T) -> Option<Node> {
    match term.kind() {
        TermKind::Iri => term.iri().map(|iri| Node::Iri(iri.as_str().to_string())),
        TermKind::BlankNode => term
            .bnode_id()
            .map(|id| Node::Blank(id.as_str().to_string())),
        TermKind::Literal => {
            let lexical = term.lexical_form()?.to_string();
            let language = term.language_tag().map(|tag| tag.as_str().to_string());
            let datatype = term
                .datatype()
                .map(|dt| dt.as_str().to_string())
                .unwrap_or_else(|| xsd::STRING.to_string());
            Some(Node::Literal(Literal {
                lexical,
                datatype,
                language,
            }))
        }
        _ => None,
    }
}

fn iri_term(iri: &str) -> SimpleTerm<'static> {
    SimpleTerm::Iri(IriRef::new_unchecked(MownStr::from(iri.to_string())))
}

fn to_term(node: &Node) -> SimpleTerm<'static> {
    match node {
        Node::Iri(iri) => iri_term(iri),
        Node::Blank(id) => SimpleTerm::BlankNode(BnodeId::new_unchecked(MownStr::from(id.clone()))),
        Node::Literal(lit) => match &lit.language {
            Some(tag) => SimpleTerm::LiteralLanguage(
                MownStr::from(lit.lexical.clone()),
                LanguageTag::new_unchecked(MownStr::from(tag.clone())),
            ),
            None => SimpleTerm::LiteralDatatype(
                MownStr::from(lit.lexical.clone()),
                IriRef::new_unchecked(MownStr::from(lit.datatype.clone())),
            ),
        },
    }
}
