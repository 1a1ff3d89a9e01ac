//! Namespace prefixes and compact IRI (CURIE) display.
//!
//! A [`PrefixTable`] is assembled from four sources, lowest precedence first:
//! the built-in well-known table, SHACL `sh:declare` blocks in the graph,
//! `@prefix`/`PREFIX` lines of the source document, and configured bindings.
//! Rendering only ever talks to the table through [`CurieResolver`], so an
//! online lookup can be slotted in front of it.

use std::collections::{BTreeMap, BTreeSet};

use ontdoc_model::vocab::{sh, vann};
use ontdoc_model::Node;
use tracing::debug;

use crate::graph::OntologyGraph;

/// Maps a full IRI to its compact `prefix:local` form.
pub trait CurieResolver {
    /// The CURIE for `iri`, or `None` when no namespace covers it.
    fn curie(&self, iri: &str) -> Option<String>;
}

/// Prefixes every document can use without declaring them.
pub const WELL_KNOWN_PREFIXES: [(&str, &str); 17] = [
    ("dc", "http://purl.org/dc/elements/1.1/"),
    ("dcat", "http://www.w3.org/ns/dcat#"),
    ("dcterms", "http://purl.org/dc/terms/"),
    ("doap", "http://usefulinc.com/ns/doap#"),
    ("foaf", "http://xmlns.com/foaf/0.1/"),
    ("org", "http://www.w3.org/ns/org#"),
    ("owl", "http://www.w3.org/2002/07/owl#"),
    ("prof", "http://www.w3.org/ns/dx/prof/"),
    ("prov", "http://www.w3.org/ns/prov#"),
    ("rdf", "http://www.w3.org/1999/02/22-rdf-syntax-ns#"),
    ("rdfs", "http://www.w3.org/2000/01/rdf-schema#"),
    ("sdo", "https://schema.org/"),
    ("sh", "http://www.w3.org/ns/shacl#"),
    ("skos", "http://www.w3.org/2004/02/skos/core#"),
    ("time", "http://www.w3.org/2006/time#"),
    ("vann", "http://purl.org/vocab/vann/"),
    ("xsd", "http://www.w3.org/2001/XMLSchema#"),
];

/// Bidirectional prefix ↔ namespace bindings.
///
/// A later [`bind`](Self::bind) replaces both an earlier binding of the same
/// prefix and an earlier prefix for the same namespace.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrefixTable {
    by_prefix: BTreeMap<String, String>,
    by_namespace: BTreeMap<String, String>,
}

impl PrefixTable {
    /// An empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in well-known prefixes.
    #[must_use]
    pub fn well_known() -> Self {
        let mut table = Self::new();
        for (prefix, namespace) in WELL_KNOWN_PREFIXES {
            table.bind(prefix, namespace);
        }
        table
    }

    /// Builds the table a document is rendered with.
    #[must_use]
    pub fn assemble(
        graph: &OntologyGraph,
        declared: &[(String, String)],
        configured: &BTreeMap<String, String>,
    ) -> Self {
        let mut table = Self::well_known();
        for (prefix, namespace) in shacl_declarations(graph) {
            table.bind(&prefix, &namespace);
        }
        for (prefix, namespace) in declared {
            table.bind(prefix, namespace);
        }
        for (prefix, namespace) in configured {
            table.bind(prefix, namespace);
        }
        debug!(bindings = table.by_prefix.len(), "assembled prefix table");
        table
    }

    /// Binds `prefix` to `namespace`, replacing older bindings of either.
    pub fn bind(&mut self, prefix: &str, namespace: &str) {
        if namespace.is_empty() {
            return;
        }
        if let Some(old_namespace) = self.by_prefix.remove(prefix) {
            if self.by_namespace.get(&old_namespace).map(String::as_str) == Some(prefix) {
                self.by_namespace.remove(&old_namespace);
            }
        }
        if let Some(old_prefix) = self
            .by_namespace
            .insert(namespace.to_string(), prefix.to_string())
        {
            if old_prefix != prefix {
                self.by_prefix.remove(&old_prefix);
            }
        }
        self.by_prefix
            .insert(prefix.to_string(), namespace.to_string());
    }

    /// The namespace bound to `prefix`.
    #[must_use]
    pub fn namespace(&self, prefix: &str) -> Option<&str> {
        self.by_prefix.get(prefix).map(String::as_str)
    }

    /// `(prefix, namespace)` pairs in prefix order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.by_prefix
            .iter()
            .map(|(p, ns)| (p.as_str(), ns.as_str()))
    }

    /// The longest bound namespace that `iri` starts with.
    fn best_match(&self, iri: &str) -> Option<(&str, &str)> {
        self.by_namespace
            .iter()
            .filter(|(ns, _)| iri.len() > ns.len() && iri.starts_with(ns.as_str()))
            .max_by_key(|(ns, _)| ns.len())
            .map(|(ns, prefix)| (prefix.as_str(), ns.as_str()))
    }

    /// The bindings actually needed to abbreviate `iris`, in prefix order.
    #[must_use]
    pub fn used_by<'a>(&self, iris: impl IntoIterator<Item = &'a str>) -> Vec<(String, String)> {
        let used: BTreeSet<(String, String)> = iris
            .into_iter()
            .filter_map(|iri| self.best_match(iri))
            .map(|(prefix, ns)| (prefix.to_string(), ns.to_string()))
            .collect();
        used.into_iter().collect()
    }
}

impl CurieResolver for PrefixTable {
    fn curie(&self, iri: &str) -> Option<String> {
        let (prefix, namespace) = self.best_match(iri)?;
        let local = &iri[namespace.len()..];
        if local.contains(['/', '#', '?']) {
            return None;
        }
        Some(format!("{prefix}:{local}"))
    }
}

/// The prefix bindings and default namespace shown in a document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Namespaces {
    /// Namespace of the documented ontology.
    pub default: String,
    /// `(prefix, namespace)` pairs used by the graph.
    pub used: Vec<(String, String)>,
}

impl Namespaces {
    /// Collects the default namespace and the bindings the graph uses.
    ///
    /// Pass the graph as loaded: statements added by normalisation would
    /// report vocabularies the source never mentions.
    #[must_use]
    pub fn collect(
        graph: &OntologyGraph,
        table: &PrefixTable,
        ontology: &Node,
        declared: &[(String, String)],
    ) -> Self {
        let iris = graph.iris();
        Self {
            default: default_namespace(graph, ontology, declared),
            used: table.used_by(iris.iter().map(String::as_str)),
        }
    }
}

/// The namespace of the documented ontology.
///
/// `vann:preferredNamespaceUri` wins, then the source's empty-prefix
/// binding, then the ontology IRI itself with `#` appended if it ends in
/// neither `#` nor `/`.
#[must_use]
pub fn default_namespace(
    graph: &OntologyGraph,
    ontology: &Node,
    declared: &[(String, String)],
) -> String {
    if let Some(preferred) = graph.first_object(ontology, vann::PREFERRED_NAMESPACE_URI) {
        return preferred.value().to_string();
    }
    if let Some((_, namespace)) = declared.iter().find(|(prefix, _)| prefix.is_empty()) {
        return namespace.clone();
    }
    let iri = ontology.value();
    if iri.ends_with('#') || iri.ends_with('/') {
        iri.to_string()
    } else {
        format!("{iri}#")
    }
}

/// `sh:declare [ sh:prefix "p" ; sh:namespace "..." ]` blocks.
fn shacl_declarations(graph: &OntologyGraph) -> Vec<(String, String)> {
    graph
        .subject_objects(sh::DECLARE)
        .into_iter()
        .filter_map(|(_, declaration)| {
            let prefix = graph.first_object(&declaration, sh::PREFIX)?;
            let namespace = graph.first_object(&declaration, sh::NAMESPACE)?;
            Some((prefix.value().to_string(), namespace.value().to_string()))
        })
        .collect()
}

/// Falls back to prefix.cc for namespaces the local table does not know.
#[cfg(feature = "online")]
pub mod online {
    use std::cell::RefCell;
    use std::collections::BTreeMap;

    use tracing::{debug, warn};

    use super::CurieResolver;

    const REVERSE_LOOKUP: &str = "https://prefix.cc/reverse";

    /// A resolver that asks prefix.cc after `local` gives up.
    #[derive(Debug)]
    pub struct OnlineResolver<R> {
        local: R,
        client: reqwest::blocking::Client,
        cache: RefCell<BTreeMap<String, Option<String>>>,
    }

    impl<R: CurieResolver> OnlineResolver<R> {
        /// Wraps `local`.
        #[must_use]
        pub fn new(local: R) -> Self {
            Self {
                local,
                client: reqwest::blocking::Client::new(),
                cache: RefCell::new(BTreeMap::new()),
            }
        }

        fn lookup(&self, namespace: &str) -> Option<String> {
            if let Some(hit) = self.cache.borrow().get(namespace) {
                return hit.clone();
            }
            let answer = self
                .client
                .get(REVERSE_LOOKUP)
                .query(&[("uri", namespace), ("format", "json")])
                .send()
                .and_then(reqwest::blocking::Response::error_for_status)
                .and_then(|response| response.json::<BTreeMap<String, String>>());
            let prefix = match answer {
                Ok(bindings) => bindings.into_keys().next(),
                Err(err) => {
                    warn!(namespace, error = %err, "prefix.cc lookup failed");
                    None
                }
            };
            debug!(namespace, prefix = ?prefix, "prefix.cc answered");
            self.cache
                .borrow_mut()
                .insert(namespace.to_string(), prefix.clone());
            prefix
        }
    }

    impl<R: CurieResolver> CurieResolver for OnlineResolver<R> {
        fn curie(&self, iri: &str) -> Option<String> {
            if let Some(curie) = self.local.curie(iri) {
                return Some(curie);
            }
            let split = iri.rfind(['#', '/'])? + 1;
            let (namespace, local) = iri.split_at(split);
            if local.is_empty() {
                return None;
            }
            let prefix = self.lookup(namespace)?;
            Some(format!("{prefix}:{local}"))
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::loader::{parse_str, Syntax};

    #[test]
    fn longest_namespace_wins() {
        let mut table = PrefixTable::new();
        table.bind("ex", "https://example.org/");
        table.bind("exv", "https://example.org/vocab/");
        assert_eq!(
            table.curie("https://example.org/vocab/Thing").as_deref(),
            Some("exv:Thing")
        );
        assert_eq!(table.curie("https://example.org/Other").as_deref(), Some("ex:Other"));
        assert_eq!(table.curie("https://elsewhere.org/x"), None);
    }

    #[test]
    fn rebinding_a_namespace_replaces_its_prefix() {
        let mut table = PrefixTable::well_known();
        table.bind("schema", "https://schema.org/");
        assert_eq!(table.curie("https://schema.org/name").as_deref(), Some("schema:name"));
        assert_eq!(table.namespace("sdo"), None);
    }

    #[test]
    fn precedence_is_config_then_source_then_shacl() {
        let loaded = parse_str(
            "@prefix sh: <http://www.w3.org/ns/shacl#> .
             @prefix src: <https://example.org/a#> .
             <https://example.org/a> sh:declare [ sh:prefix \"shacl\" ; sh:namespace \"https://example.org/a#\" ] ,
                 [ sh:prefix \"other\" ; sh:namespace \"https://example.org/b#\" ] .",
            Syntax::Turtle,
        )
        .unwrap();
        let mut configured = BTreeMap::new();
        let table = PrefixTable::assemble(&loaded.graph, &loaded.prefixes, &configured);
        assert_eq!(table.curie("https://example.org/a#X").as_deref(), Some("src:X"));
        assert_eq!(table.curie("https://example.org/b#Y").as_deref(), Some("other:Y"));

        configured.insert("cfg".to_string(), "https://example.org/a#".to_string());
        let table = PrefixTable::assemble(&loaded.graph, &loaded.prefixes, &configured);
        assert_eq!(table.curie("https://example.org/a#X").as_deref(), Some("cfg:X"));
    }

    #[test]
    fn default_namespace_fallbacks() {
        let loaded = parse_str(
            "@prefix vann: <http://purl.org/vocab/vann/> .
             <https://example.org/with> vann:preferredNamespaceUri \"https://example.org/ns/\" .",
            Syntax::Turtle,
        )
        .unwrap();
        let with = Node::iri("https://example.org/with");
        assert_eq!(default_namespace(&loaded.graph, &with, &[]), "https://example.org/ns/");

        let bare = Node::iri("https://example.org/bare");
        assert_eq!(default_namespace(&loaded.graph, &bare, &[]), "https://example.org/bare#");

        let declared = vec![(String::new(), "https://example.org/empty/".to_string())];
        assert_eq!(
            default_namespace(&loaded.graph, &bare, &declared),
            "https://example.org/empty/"
        );
    }

    #[test]
    fn used_namespaces_are_only_those_matched() {
        let table = PrefixTable::well_known();
        let used = table.used_by([
            "http://www.w3.org/2002/07/owl#Class",
            "http://www.w3.org/2002/07/owl#Thing",
            "https://unknown.example/x",
        ]);
        assert_eq!(
            used,
            vec![("owl".to_string(), "http://www.w3.org/2002/07/owl#".to_string())]
        );
    }
}
