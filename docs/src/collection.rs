//! Resolution of reference-valued objects into symbolic [`Reference`]s.
//!
//! Every relation that may point at an anonymous class expression (domain,
//! range, equivalence, subclass, restriction fillers) goes through
//! [`resolve`], so unions, intersections and restrictions are handled the
//! same way at every site.

use std::collections::BTreeSet;

use ontdoc_model::vocab::owl;
use ontdoc_model::{
    CardinalityBound, CollectionExpr, CollectionOperator, Constraint, Node, Quantifier, Reference,
    RestrictionExpr,
};
use tracing::warn;

use crate::graph::OntologyGraph;

const OPERATORS: [&str; 2] = [owl::UNION_OF, owl::INTERSECTION_OF];

/// Resolves one object node.
///
/// IRIs are entity references, literals are printed values, blank nodes are
/// collections or restrictions. A blank node that is neither resolves to a
/// collection without operator or members.
#[must_use]
pub fn resolve(graph: &OntologyGraph, node: &Node) -> Reference {
    resolve_guarded(graph, node, &mut BTreeSet::new())
}

/// Resolved objects of `(subject, predicate, ?)`.
#[must_use]
pub fn references(graph: &OntologyGraph, subject: &Node, predicate: &str) -> Vec<Reference> {
    graph
        .objects(subject, predicate)
        .iter()
        .map(|o| resolve(graph, o))
        .collect()
}

/// Named subjects of `(?, predicate, object)`.
#[must_use]
pub fn referrers(graph: &OntologyGraph, predicate: &str, object: &Node) -> Vec<Reference> {
    graph
        .subjects(predicate, object)
        .into_iter()
        .filter_map(|s| s.as_iri().map(|iri| Reference::Entity(iri.to_string())))
        .collect()
}

/// Like [`references`] but collection members are listed individually.
#[must_use]
pub fn flattened(graph: &OntologyGraph, subject: &Node, predicate: &str) -> Vec<Reference> {
    let mut out = Vec::new();
    for reference in references(graph, subject, predicate) {
        flatten_into(reference, &mut out);
    }
    out
}

fn flatten_into(reference: Reference, out: &mut Vec<Reference>) {
    match reference {
        Reference::Collection(expr) => {
            for member in expr.members {
                flatten_into(member, out);
            }
        }
        other => out.push(other),
    }
}

/// The collection carried by `node`, if it has a union or intersection.
#[must_use]
pub fn collection(graph: &OntologyGraph, node: &Node) -> Option<CollectionExpr> {
    collection_guarded(graph, node, &mut BTreeSet::new())
}

/// Parses the statements of a restriction node.
#[must_use]
pub fn restriction(graph: &OntologyGraph, node: &Node) -> RestrictionExpr {
    restriction_guarded(graph, node, &mut BTreeSet::new())
}

/// True if `node` is an anonymous OWL restriction.
#[must_use]
pub fn is_restriction(graph: &OntologyGraph, node: &Node) -> bool {
    node.is_blank()
        && (graph.has_type(node, owl::RESTRICTION)
            || graph.first_object(node, owl::ON_PROPERTY).is_some())
}

fn resolve_guarded(graph: &OntologyGraph, node: &Node, seen: &mut BTreeSet<Node>) -> Reference {
    match node {
        Node::Iri(iri) => Reference::Entity(iri.clone()),
        Node::Literal(lit) => Reference::Value(lit.lexical.clone()),
        Node::Blank(_) => {
            if !seen.insert(node.clone()) {
                warn!(node = %node, "self-referencing class expression");
                return Reference::Collection(CollectionExpr {
                    operator: None,
                    members: Vec::new(),
                });
            }
            let resolved = if let Some(expr) = collection_guarded(graph, node, seen) {
                Reference::Collection(expr)
            } else if is_restriction(graph, node) {
                Reference::Restriction(restriction_guarded(graph, node, seen))
            } else {
                warn!(node = %node, "anonymous node is neither a collection nor a restriction");
                Reference::Collection(CollectionExpr {
                    operator: None,
                    members: Vec::new(),
                })
            };
            seen.remove(node);
            resolved
        }
    }
}

fn collection_guarded(
    graph: &OntologyGraph,
    node: &Node,
    seen: &mut BTreeSet<Node>,
) -> Option<CollectionExpr> {
    OPERATORS.iter().find_map(|predicate| {
        let head = graph.first_object(node, predicate)?;
        let members = graph
            .list_items(&head)
            .iter()
            .map(|member| resolve_guarded(graph, member, seen))
            .collect();
        Some(CollectionExpr {
            operator: CollectionOperator::from_iri(predicate),
            members,
        })
    })
}

fn restriction_guarded(
    graph: &OntologyGraph,
    node: &Node,
    seen: &mut BTreeSet<Node>,
) -> RestrictionExpr {
    let mut expr = RestrictionExpr::default();
    for (predicate, object) in graph.predicate_objects(node) {
        let cardinality = |bound| Constraint::Cardinality {
            bound,
            value: object.value().to_string(),
        };
        let constraint = match predicate.as_str() {
            owl::ON_PROPERTY => {
                expr.property = object.as_iri().map(str::to_string);
                None
            }
            owl::ON_CLASS | owl::ON_DATA_RANGE => {
                expr.target = Some(Box::new(resolve_guarded(graph, &object, seen)));
                None
            }
            owl::CARDINALITY | owl::QUALIFIED_CARDINALITY => {
                Some(cardinality(CardinalityBound::Exactly))
            }
            owl::MIN_CARDINALITY | owl::MIN_QUALIFIED_CARDINALITY => {
                Some(cardinality(CardinalityBound::Min))
            }
            owl::MAX_CARDINALITY | owl::MAX_QUALIFIED_CARDINALITY => {
                Some(cardinality(CardinalityBound::Max))
            }
            owl::SOME_VALUES_FROM => Some(Constraint::Quantified {
                quantifier: Quantifier::Some,
                filler: Box::new(resolve_guarded(graph, &object, seen)),
            }),
            owl::ALL_VALUES_FROM => Some(Constraint::Quantified {
                quantifier: Quantifier::Only,
                filler: Box::new(resolve_guarded(graph, &object, seen)),
            }),
            owl::HAS_VALUE => Some(Constraint::HasValue(Box::new(resolve_guarded(
                graph, &object, seen,
            )))),
            _ => None,
        };
        if expr.constraint.is_none() {
            expr.constraint = constraint;
        }
    }
    if expr.property.is_none() {
        warn!(node = %node, "restriction without owl:onProperty");
    }
    expr
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::loader::{parse_str, Syntax};

    const PREAMBLE: &str = "@prefix ex: <https://example.org/> .
@prefix owl: <http://www.w3.org/2002/07/owl#> .
@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
@prefix xsd: <http://www.w3.org/2001/XMLSchema#> .
";

    fn graph(ttl: &str) -> OntologyGraph {
        parse_str(&format!("{PREAMBLE}{ttl}"), Syntax::Turtle)
            .unwrap()
            .graph
    }

    fn ex(local: &str) -> Node {
        Node::iri(format!("https://example.org/{local}"))
    }

    fn entity(local: &str) -> Reference {
        Reference::Entity(format!("https://example.org/{local}"))
    }

    #[test]
    fn plain_reference_is_an_entity() {
        let g = graph("ex:p rdfs:domain ex:A .");
        assert_eq!(references(&g, &ex("p"), rdfs_domain()), vec![entity("A")]);
    }

    fn rdfs_domain() -> &'static str {
        ontdoc_model::vocab::rdfs::DOMAIN
    }

    #[test]
    fn union_keeps_list_order() {
        let g = graph("ex:p rdfs:domain [ a owl:Class ; owl:unionOf ( ex:B ex:A ) ] .");
        let refs = references(&g, &ex("p"), rdfs_domain());
        assert_eq!(
            refs,
            vec![Reference::Collection(CollectionExpr {
                operator: Some(CollectionOperator::Union),
                members: vec![entity("B"), entity("A")],
            })]
        );
        assert_eq!(flattened(&g, &ex("p"), rdfs_domain()), vec![entity("B"), entity("A")]);
    }

    #[test]
    fn malformed_blank_node_is_an_empty_collection() {
        let g = graph("ex:p rdfs:domain [ rdfs:label \"odd\" ] .");
        assert_eq!(
            references(&g, &ex("p"), rdfs_domain()),
            vec![Reference::Collection(CollectionExpr {
                operator: None,
                members: vec![],
            })]
        );
    }

    #[test]
    fn qualified_cardinality_restriction() {
        let g = graph(
            "ex:C rdfs:subClassOf [ a owl:Restriction ; owl:onProperty ex:p ;
                 owl:minQualifiedCardinality \"1\"^^xsd:nonNegativeInteger ; owl:onClass ex:D ] .",
        );
        let node = g.first_object(&ex("C"), ontdoc_model::vocab::rdfs::SUB_CLASS_OF).unwrap();
        assert!(is_restriction(&g, &node));
        let expr = restriction(&g, &node);
        assert_eq!(expr.property.as_deref(), Some("https://example.org/p"));
        assert_eq!(
            expr.constraint,
            Some(Constraint::Cardinality {
                bound: CardinalityBound::Min,
                value: "1".into()
            })
        );
        assert_eq!(expr.target, Some(Box::new(entity("D"))));
    }

    #[test]
    fn quantified_restriction_with_collection_filler() {
        let g = graph(
            "ex:C rdfs:subClassOf [ owl:onProperty ex:p ;
                 owl:allValuesFrom [ owl:intersectionOf ( ex:A ex:B ) ] ] .",
        );
        let node = g.first_object(&ex("C"), ontdoc_model::vocab::rdfs::SUB_CLASS_OF).unwrap();
        let expr = restriction(&g, &node);
        assert_eq!(
            expr.constraint,
            Some(Constraint::Quantified {
                quantifier: Quantifier::Only,
                filler: Box::new(Reference::Collection(CollectionExpr {
                    operator: Some(CollectionOperator::Intersection),
                    members: vec![entity("A"), entity("B")],
                })),
            })
        );
    }

    #[test]
    fn has_value_literal() {
        let g = graph("ex:C rdfs:subClassOf [ owl:onProperty ex:p ; owl:hasValue \"x\" ] .");
        let node = g.first_object(&ex("C"), ontdoc_model::vocab::rdfs::SUB_CLASS_OF).unwrap();
        assert_eq!(
            restriction(&g, &node).constraint,
            Some(Constraint::HasValue(Box::new(Reference::Value("x".into()))))
        );
    }

    #[test]
    fn referrers_skip_blank_subjects() {
        let g = graph("ex:p rdfs:domain ex:A . [] rdfs:domain ex:A .");
        assert_eq!(referrers(&g, rdfs_domain(), &ex("A")), vec![entity("p")]);
    }
}
