//! Entity extraction: classes, properties and named individuals.
//!
//! Each kind goes through two phases. Discovery finds the identifier set
//! (sorted, fixed from then on); population fills one record per
//! identifier from that entity's statements. References stay symbolic
//! ([`Reference`]) until [`crate::linker`] turns them into markup.

use std::collections::BTreeMap;

use ontdoc_model::vocab::{dc, dcterms, owl, rdf, rdfs, sdo, skos};
use ontdoc_model::{
    ClassRecord, NamedIndividualRecord, Node, OutputFormat, PropertyKind, PropertyRecord,
    Reference,
};
use tracing::debug;

use crate::collection::{self, flattened, is_restriction, referrers, references, resolve};
use crate::example;
use crate::graph::OntologyGraph;
use crate::markup;
use crate::text::{self, make_fid, title_from_iri, FidAllocator};

/// Every documented entity, keyed by identifier.
///
/// Blank-node individuals are keyed `_:<label>`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OntologyIndex<R> {
    /// Classes.
    pub classes: BTreeMap<String, ClassRecord<R>>,
    /// Properties.
    pub properties: BTreeMap<String, PropertyRecord<R>>,
    /// Named individuals.
    pub individuals: BTreeMap<String, NamedIndividualRecord<R>>,
}

impl<R> OntologyIndex<R> {
    /// Returns true if the given IRI is a documented class.
    pub fn is_class(&self, iri: &str) -> bool {
        self.classes.contains_key(iri)
    }

    /// Returns true if the given IRI is a documented property.
    pub fn is_property(&self, iri: &str) -> bool {
        self.properties.contains_key(iri)
    }

    /// Returns true if the given identifier is a documented individual.
    pub fn is_individual(&self, iri: &str) -> bool {
        self.individuals.contains_key(iri)
    }
}

/// Options shared by every population step.
#[derive(Debug, Clone, Copy)]
pub struct ExtractOptions<'a> {
    /// Target markup, for descriptions and examples.
    pub format: OutputFormat,
    /// Preferred language tag.
    pub language: &'a str,
}

/// The identifier an entity is keyed by.
#[must_use]
pub fn entity_key(node: &Node) -> String {
    match node {
        Node::Blank(id) => format!("_:{id}"),
        other => other.value().to_string(),
    }
}

/// Discovers and populates every entity of `graph`.
///
/// Fragment ids are handed out classes first, then properties, then
/// individuals, each in identifier order.
#[must_use]
pub fn extract(graph: &OntologyGraph, options: ExtractOptions<'_>) -> OntologyIndex<Reference> {
    let class_ids = discover(graph, rdfs::CLASS, false);
    let property_ids = discover(graph, rdf::PROPERTY, false);
    let individual_ids = discover(graph, owl::NAMED_INDIVIDUAL, true);
    debug!(
        classes = class_ids.len(),
        properties = property_ids.len(),
        individuals = individual_ids.len(),
        "discovered entities"
    );

    let mut fids = FidAllocator::new();
    let mut index = OntologyIndex {
        classes: class_ids
            .into_iter()
            .map(|(key, node)| {
                let record = populate_class(graph, options, &key, &node, &mut fids);
                (key, record)
            })
            .collect(),
        properties: property_ids
            .into_iter()
            .map(|(key, node)| {
                let record = populate_property(graph, options, &key, &node, &mut fids);
                (key, record)
            })
            .collect(),
        individuals: individual_ids
            .into_iter()
            .map(|(key, node)| {
                let record = populate_individual(graph, options, &key, &node, &mut fids);
                (key, record)
            })
            .collect(),
    };
    link_back(&mut index);
    index
}

/// Subjects typed `class`, keyed and sorted by identifier.
fn discover(graph: &OntologyGraph, class: &str, with_blank: bool) -> BTreeMap<String, Node> {
    graph
        .subjects(rdf::TYPE, &Node::iri(class))
        .into_iter()
        .filter(|node| with_blank || !node.is_blank())
        .map(|node| (entity_key(&node), node))
        .collect()
}

/// Fields every entity kind carries.
struct Common {
    title: String,
    description: Option<String>,
    is_defined_by: Option<String>,
    source: Option<String>,
    fid: String,
}

fn common(
    graph: &OntologyGraph,
    options: ExtractOptions<'_>,
    key: &str,
    node: &Node,
    fids: &mut FidAllocator,
) -> Common {
    let title = text::preferred_text(graph, node, dcterms::TITLE, options.language)
        .unwrap_or_else(|| match node {
            Node::Blank(id) => title_from_iri(id),
            _ => title_from_iri(key),
        });
    let fid = fids.allocate(make_fid(&title, key));
    let description = text::preferred_text(graph, node, dcterms::DESCRIPTION, options.language)
        .map(|d| markup::rich_text(options.format, &d));
    let is_defined_by = graph
        .first_object(node, rdfs::IS_DEFINED_BY)
        .map(|n| n.value().to_string());
    let source = graph
        .first_object(node, dcterms::SOURCE)
        .or_else(|| graph.first_object(node, dc::SOURCE))
        .map(|n| n.value().to_string());
    Common {
        title,
        description,
        is_defined_by,
        source,
        fid,
    }
}

fn scope_note(graph: &OntologyGraph, options: ExtractOptions<'_>, node: &Node) -> Option<String> {
    text::preferred_text(graph, node, skos::SCOPE_NOTE, options.language)
        .map(|s| markup::rich_text(options.format, &s))
}

fn examples(graph: &OntologyGraph, options: ExtractOptions<'_>, node: &Node) -> Vec<String> {
    graph
        .objects(node, skos::EXAMPLE)
        .iter()
        .map(|e| example::render(graph, e, options.format))
        .collect()
}

fn populate_class(
    graph: &OntologyGraph,
    options: ExtractOptions<'_>,
    key: &str,
    node: &Node,
    fids: &mut FidAllocator,
) -> ClassRecord<Reference> {
    let Common {
        title,
        description,
        is_defined_by,
        source,
        fid,
    } = common(graph, options, key, node, fids);

    let mut supers = Vec::new();
    let mut restrictions = Vec::new();
    for parent in graph.objects(node, rdfs::SUB_CLASS_OF) {
        if is_restriction(graph, &parent) {
            restrictions.push(Reference::Restriction(collection::restriction(graph, &parent)));
        } else {
            supers.push(resolve(graph, &parent));
        }
    }

    let mut disjoint_with = references(graph, node, owl::DISJOINT_WITH);
    disjoint_with.extend(referrers(graph, owl::DISJOINT_WITH, node));

    ClassRecord {
        iri: key.to_string(),
        title,
        description,
        scope_note: scope_note(graph, options, node),
        examples: examples(graph, options, node),
        is_defined_by,
        source,
        fid,
        equivalents: references(graph, node, owl::EQUIVALENT_CLASS),
        supers,
        restrictions,
        subs: referrers(graph, rdfs::SUB_CLASS_OF, node),
        disjoint_with,
        in_domain_of: Vec::new(),
        in_domain_includes_of: Vec::new(),
        in_range_of: Vec::new(),
        in_range_includes_of: Vec::new(),
        has_members: members(graph, node),
    }
}

/// Every resource typed with `class`. IRIs and named individuals stay
/// linkable, other blank nodes are shown by label.
fn members(graph: &OntologyGraph, class: &Node) -> Vec<Reference> {
    graph
        .subjects(rdf::TYPE, class)
        .iter()
        .map(|member| match member {
            Node::Iri(iri) => Reference::Entity(iri.clone()),
            blank if graph.has_type(blank, owl::NAMED_INDIVIDUAL) => {
                Reference::Entity(entity_key(blank))
            }
            other => Reference::Value(entity_key(other)),
        })
        .collect()
}

/// Functional wins over object, which wins over datatype and annotation.
fn classify(graph: &OntologyGraph, node: &Node) -> PropertyKind {
    [
        PropertyKind::Functional,
        PropertyKind::Object,
        PropertyKind::Datatype,
        PropertyKind::Annotation,
    ]
    .into_iter()
    .find(|kind| {
        kind.owl_type()
            .is_some_and(|owl_type| graph.has_type(node, owl_type))
    })
    .unwrap_or(PropertyKind::Generic)
}

fn populate_property(
    graph: &OntologyGraph,
    options: ExtractOptions<'_>,
    key: &str,
    node: &Node,
    fids: &mut FidAllocator,
) -> PropertyRecord<Reference> {
    let Common {
        title,
        description,
        is_defined_by,
        source,
        fid,
    } = common(graph, options, key, node, fids);

    let mut inverses = references(graph, node, owl::INVERSE_OF);
    inverses.extend(referrers(graph, owl::INVERSE_OF, node));

    PropertyRecord {
        iri: key.to_string(),
        kind: classify(graph, node),
        title,
        description,
        scope_note: scope_note(graph, options, node),
        examples: examples(graph, options, node),
        is_defined_by,
        source,
        fid,
        supers: references(graph, node, rdfs::SUB_PROPERTY_OF),
        subs: referrers(graph, rdfs::SUB_PROPERTY_OF, node),
        equivalents: references(graph, node, owl::EQUIVALENT_PROPERTY),
        inverses,
        domains: references(graph, node, rdfs::DOMAIN),
        domain_includes: flattened(graph, node, sdo::DOMAIN_INCLUDES),
        ranges: references(graph, node, rdfs::RANGE),
        range_includes: flattened(graph, node, sdo::RANGE_INCLUDES),
    }
}

fn populate_individual(
    graph: &OntologyGraph,
    options: ExtractOptions<'_>,
    key: &str,
    node: &Node,
    fids: &mut FidAllocator,
) -> NamedIndividualRecord<Reference> {
    let Common {
        title,
        description,
        is_defined_by,
        source,
        fid,
    } = common(graph, options, key, node, fids);

    let classes = graph
        .objects(node, rdf::TYPE)
        .iter()
        .filter(|class| class.as_iri() != Some(owl::NAMED_INDIVIDUAL))
        .map(|class| resolve(graph, class))
        .collect();

    NamedIndividualRecord {
        iri: key.to_string(),
        classes,
        title,
        description,
        is_defined_by,
        source,
        see_also: references(graph, node, rdfs::SEE_ALSO),
        same_as: references(graph, node, owl::SAME_AS),
        fid,
    }
}

/// Named entity identifiers in `refs`, looking through collections.
fn entity_iris(refs: &[Reference]) -> Vec<String> {
    let mut out = Vec::new();
    for reference in refs {
        match reference {
            Reference::Entity(iri) => out.push(iri.clone()),
            Reference::Collection(expr) => out.extend(entity_iris(&expr.members)),
            Reference::Restriction(_) | Reference::Value(_) => {}
        }
    }
    out
}

/// Fills the class-side lists that mirror property domains/ranges and
/// individual typing.
fn link_back(index: &mut OntologyIndex<Reference>) {
    for (key, property) in &index.properties {
        let entry = Reference::Entity(key.clone());
        for iri in entity_iris(&property.domains) {
            if let Some(class) = index.classes.get_mut(&iri) {
                push_unique(&mut class.in_domain_of, &entry);
            }
        }
        for iri in entity_iris(&property.domain_includes) {
            if let Some(class) = index.classes.get_mut(&iri) {
                push_unique(&mut class.in_domain_includes_of, &entry);
            }
        }
        for iri in entity_iris(&property.ranges) {
            if let Some(class) = index.classes.get_mut(&iri) {
                push_unique(&mut class.in_range_of, &entry);
            }
        }
        for iri in entity_iris(&property.range_includes) {
            if let Some(class) = index.classes.get_mut(&iri) {
                push_unique(&mut class.in_range_includes_of, &entry);
            }
        }
    }

    for (key, individual) in &index.individuals {
        let entry = Reference::Entity(key.clone());
        for iri in entity_iris(&individual.classes) {
            if let Some(class) = index.classes.get_mut(&iri) {
                push_unique(&mut class.has_members, &entry);
            }
        }
    }
}

fn push_unique(list: &mut Vec<Reference>, entry: &Reference) {
    if !list.contains(entry) {
        list.push(entry.clone());
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::loader::{parse_str, Syntax};
    use crate::normalizer;

    const PREAMBLE: &str = "@prefix ex: <https://example.org/> .
@prefix owl: <http://www.w3.org/2002/07/owl#> .
@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
@prefix rdf: <http://www.w3.org/1999/02/22-rdf-syntax-ns#> .
@prefix sdo: <https://schema.org/> .
@prefix skos: <http://www.w3.org/2004/02/skos/core#> .
";

    fn index(ttl: &str) -> OntologyIndex<Reference> {
        let loaded = parse_str(&format!("{PREAMBLE}{ttl}"), Syntax::Turtle).unwrap();
        let graph = normalizer::expand(loaded.graph).unwrap();
        extract(
            &graph,
            ExtractOptions {
                format: OutputFormat::Markdown,
                language: "en",
            },
        )
    }

    fn iri(local: &str) -> String {
        format!("https://example.org/{local}")
    }

    #[test]
    fn classes_skip_blank_nodes_and_get_titles() {
        let idx = index(
            "ex:Thing a owl:Class ; rdfs:label \"Thing\" .
             ex:someOther a rdfs:Class .
             [] a owl:Class .",
        );
        assert_eq!(idx.classes.len(), 2);
        let thing = &idx.classes[&iri("Thing")];
        assert_eq!(thing.title, "Thing");
        assert_eq!(thing.fid, "thing");
        assert_eq!(idx.classes[&iri("someOther")].title, "Some Other");
    }

    #[test]
    fn property_classification_priority() {
        let idx = index(
            "ex:f a owl:ObjectProperty , owl:FunctionalProperty .
             ex:o a owl:ObjectProperty .
             ex:d a owl:DatatypeProperty .
             ex:a a owl:AnnotationProperty .
             ex:g a rdf:Property .",
        );
        let kind = |local: &str| idx.properties[&iri(local)].kind;
        assert_eq!(kind("f"), PropertyKind::Functional);
        assert_eq!(kind("o"), PropertyKind::Object);
        assert_eq!(kind("d"), PropertyKind::Datatype);
        assert_eq!(kind("a"), PropertyKind::Annotation);
        assert_eq!(kind("g"), PropertyKind::Generic);
    }

    #[test]
    fn subclass_restrictions_are_separated() {
        let idx = index(
            "ex:A a owl:Class .
             ex:B a owl:Class ; rdfs:subClassOf ex:A , [ owl:onProperty ex:p ; owl:someValuesFrom ex:A ] .",
        );
        let b = &idx.classes[&iri("B")];
        assert_eq!(b.supers, vec![Reference::Entity(iri("A"))]);
        assert_eq!(b.restrictions.len(), 1);
        assert_eq!(idx.classes[&iri("A")].subs, vec![Reference::Entity(iri("B"))]);
    }

    #[test]
    fn domains_and_ranges_are_mirrored_on_classes() {
        let idx = index(
            "ex:A a owl:Class . ex:B a owl:Class .
             ex:p a owl:ObjectProperty ; rdfs:domain [ owl:unionOf ( ex:A ex:B ) ] ; rdfs:range ex:B .
             ex:q a rdf:Property ; sdo:domainIncludes ex:A .",
        );
        let a = &idx.classes[&iri("A")];
        assert_eq!(a.in_domain_of, vec![Reference::Entity(iri("p"))]);
        assert_eq!(a.in_domain_includes_of, vec![Reference::Entity(iri("q"))]);
        let b = &idx.classes[&iri("B")];
        assert_eq!(b.in_domain_of, vec![Reference::Entity(iri("p"))]);
        assert_eq!(b.in_range_of, vec![Reference::Entity(iri("p"))]);
    }

    #[test]
    fn individuals_include_blank_nodes_and_drop_marker_type() {
        let idx = index(
            "ex:C a owl:Class .
             ex:i a owl:NamedIndividual , ex:C ; rdfs:label \"Eye\" .
             [] a owl:NamedIndividual ; rdfs:label \"Anon\" .",
        );
        assert_eq!(idx.individuals.len(), 2);
        let i = &idx.individuals[&iri("i")];
        assert_eq!(i.classes, vec![Reference::Entity(iri("C"))]);
        assert_eq!(
            idx.classes[&iri("C")].has_members,
            vec![Reference::Entity(iri("i"))]
        );
        assert!(idx.individuals.values().any(|ni| ni.title == "Anon" && ni.iri.starts_with("_:")));
    }

    #[test]
    fn members_include_resources_typed_only_with_the_class() {
        let idx = index(
            "ex:C a owl:Class .
             ex:x a ex:C .
             ex:i a owl:NamedIndividual , ex:C .
             ex:p a rdf:Property ; rdfs:domain ex:C .",
        );
        let c = &idx.classes[&iri("C")];
        assert_eq!(
            c.has_members,
            vec![Reference::Entity(iri("i")), Reference::Entity(iri("x"))]
        );
        assert_eq!(c.in_domain_of, vec![Reference::Entity(iri("p"))]);
    }

    #[test]
    fn blank_members_render_as_values_unless_individuals() {
        let idx = index(
            "ex:C a owl:Class .
             _:loose a ex:C .
             _:named a owl:NamedIndividual , ex:C .",
        );
        let members = &idx.classes[&iri("C")].has_members;
        assert_eq!(members.len(), 2);
        assert!(members
            .iter()
            .any(|m| matches!(m, Reference::Value(v) if v.starts_with("_:"))));
        assert!(members
            .iter()
            .any(|m| matches!(m, Reference::Entity(k) if idx.individuals.contains_key(k))));
    }

    #[test]
    fn colliding_fids_are_disambiguated_in_kind_order() {
        let idx = index(
            "ex:Part a owl:Class ; rdfs:label \"Part\" .
             ex:part a owl:ObjectProperty ; rdfs:label \"part\" .
             ex:part2 a owl:NamedIndividual ; rdfs:label \"Part\" .",
        );
        assert_eq!(idx.classes[&iri("Part")].fid, "part");
        assert_eq!(idx.properties[&iri("part")].fid, "part-2");
        assert_eq!(idx.individuals[&iri("part2")].fid, "part-3");
    }

    #[test]
    fn inverse_is_symmetric() {
        let idx = index(
            "ex:p a owl:ObjectProperty ; owl:inverseOf ex:q .
             ex:q a owl:ObjectProperty .",
        );
        assert_eq!(idx.properties[&iri("q")].inverses, vec![Reference::Entity(iri("p"))]);
    }

    #[test]
    fn examples_and_scope_notes_are_rendered() {
        let idx = index(
            "ex:A a owl:Class ; skos:scopeNote \"Use *carefully*\" ; skos:example \"ex:x a ex:A .\" .",
        );
        let a = &idx.classes[&iri("A")];
        assert_eq!(a.scope_note.as_deref(), Some("Use *carefully*"));
        assert_eq!(a.examples, vec!["`ex:x a ex:A .` <br /> ".to_string()]);
    }
}
