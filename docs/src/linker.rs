//! Cross-linking: turns every symbolic [`Reference`] of the extracted
//! records into display-ready markup.
//!
//! An identifier documented in the same document becomes an anchor link to
//! that entity's fragment id. Anything else becomes a formatted external
//! reference: the CURIE when a prefix is known, else the full IRI, linked.
//! Every list is sorted in natural order on the visible text.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use ontdoc_model::{
    ClassRecord, CollectionExpr, Constraint, NamedIndividualRecord, OutputFormat, PropertyKind,
    PropertyRecord, RefKind, Reference, RestrictionExpr,
};
use tracing::debug;

use crate::extractor::OntologyIndex;
use crate::markup;
use crate::namespaces::CurieResolver;

/// Formats IRIs that are not documented locally.
#[derive(Clone, Copy)]
pub struct Linker<'a> {
    format: OutputFormat,
    resolver: &'a dyn CurieResolver,
}

impl std::fmt::Debug for Linker<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Linker")
            .field("format", &self.format)
            .finish_non_exhaustive()
    }
}

impl<'a> Linker<'a> {
    /// A linker producing `format` markup.
    #[must_use]
    pub fn new(format: OutputFormat, resolver: &'a dyn CurieResolver) -> Self {
        Self { format, resolver }
    }

    /// The target markup.
    #[must_use]
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// A linked CURIE (or full IRI), with a kind superscript when known.
    #[must_use]
    pub fn external(&self, iri: &str, kind: Option<RefKind>) -> String {
        let label = self
            .resolver
            .curie(iri)
            .unwrap_or_else(|| iri.to_string());
        let mut out = markup::link(self.format, iri, &markup::text(self.format, &label));
        if let Some(kind) = kind {
            out.push_str(&markup::kind_suffix(self.format, kind));
        }
        out
    }

    /// [`external`](Self::external) for values that look like web IRIs,
    /// plain text otherwise.
    #[must_use]
    pub fn iri_or_text(&self, value: &str) -> String {
        if value.starts_with("http") {
            self.external(value, None)
        } else {
            markup::text(self.format, value)
        }
    }
}

/// Rewrites every reference of `index` into markup.
#[must_use]
pub fn link(index: OntologyIndex<Reference>, linker: &Linker<'_>) -> OntologyIndex<String> {
    let anchors: BTreeMap<String, Anchor> = index
        .classes
        .values()
        .map(|c| (c.iri.clone(), Anchor::new(&c.title, &c.fid)))
        .chain(
            index
                .properties
                .values()
                .map(|p| (p.iri.clone(), Anchor::new(&p.title, &p.fid))),
        )
        .chain(
            index
                .individuals
                .values()
                .map(|i| (i.iri.clone(), Anchor::new(&i.title, &i.fid))),
        )
        .collect();
    debug!(anchors = anchors.len(), "cross-linking");

    let cx = Context {
        linker,
        anchors: &anchors,
    };
    OntologyIndex {
        classes: index
            .classes
            .into_iter()
            .map(|(k, c)| (k, cx.class(c)))
            .collect(),
        properties: index
            .properties
            .into_iter()
            .map(|(k, p)| (k, cx.property(p)))
            .collect(),
        individuals: index
            .individuals
            .into_iter()
            .map(|(k, i)| (k, cx.individual(i)))
            .collect(),
    }
}

/// Natural ordering on what the reader sees, ties broken on the markup.
#[must_use]
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    natord::compare(&markup::visible_text(a), &markup::visible_text(b)).then_with(|| a.cmp(b))
}

struct Anchor {
    title: String,
    fid: String,
}

impl Anchor {
    fn new(title: &str, fid: &str) -> Self {
        Self {
            title: title.to_string(),
            fid: fid.to_string(),
        }
    }
}

struct Context<'l, 'a> {
    linker: &'l Linker<'a>,
    anchors: &'l BTreeMap<String, Anchor>,
}

impl Context<'_, '_> {
    fn format(&self) -> OutputFormat {
        self.linker.format
    }

    fn reference(&self, reference: &Reference, kind: Option<RefKind>) -> String {
        match reference {
            Reference::Entity(iri) => match self.anchors.get(iri) {
                Some(anchor) => markup::anchor_link(self.format(), &anchor.fid, &anchor.title),
                None => self.linker.external(iri, kind),
            },
            Reference::Value(value) => markup::text(self.format(), value),
            Reference::Collection(expr) => self.collection(expr, kind),
            Reference::Restriction(expr) => self.restriction(expr),
        }
    }

    fn collection(&self, expr: &CollectionExpr, kind: Option<RefKind>) -> String {
        let joiner = format!(" {} ", expr.operator.map_or("?", |op| op.joiner()));
        let members: Vec<String> = expr
            .members
            .iter()
            .map(|m| self.reference(m, kind))
            .collect();
        format!("({})", members.join(&joiner))
    }

    fn restriction(&self, expr: &RestrictionExpr) -> String {
        let mut parts = vec![match &expr.property {
            Some(property) => self.reference(&Reference::Entity(property.clone()), None),
            None => "?".to_string(),
        }];
        match &expr.constraint {
            Some(Constraint::Cardinality { bound, value }) => {
                parts.push(bound.keyword().to_string());
                parts.push(markup::text(self.format(), value));
            }
            Some(Constraint::Quantified { quantifier, filler }) => {
                parts.push(quantifier.keyword().to_string());
                parts.push(self.reference(filler, Some(RefKind::Class)));
            }
            Some(Constraint::HasValue(value)) => {
                parts.push("value".to_string());
                parts.push(self.reference(value, None));
            }
            None => {}
        }
        if let Some(target) = &expr.target {
            parts.push(self.reference(target, Some(RefKind::Class)));
        }
        parts.join(" ")
    }

    /// Renders, deduplicates and sorts a reference list.
    fn list(&self, refs: &[Reference], kind: Option<RefKind>) -> Vec<String> {
        let mut out: Vec<String> = refs.iter().map(|r| self.reference(r, kind)).collect();
        out.sort_by(|a, b| natural_cmp(a, b));
        out.dedup();
        out
    }

    fn optional(&self, value: Option<String>) -> Option<String> {
        value.map(|v| self.linker.iri_or_text(&v))
    }

    fn class(&self, c: ClassRecord<Reference>) -> ClassRecord<String> {
        let class = Some(RefKind::Class);
        let property = Some(RefKind::Property(PropertyKind::Generic));
        ClassRecord {
            equivalents: self.list(&c.equivalents, class),
            supers: self.list(&c.supers, class),
            restrictions: self.list(&c.restrictions, None),
            subs: self.list(&c.subs, class),
            disjoint_with: self.list(&c.disjoint_with, class),
            in_domain_of: self.list(&c.in_domain_of, property),
            in_domain_includes_of: self.list(&c.in_domain_includes_of, property),
            in_range_of: self.list(&c.in_range_of, property),
            in_range_includes_of: self.list(&c.in_range_includes_of, property),
            has_members: self.list(&c.has_members, Some(RefKind::NamedIndividual)),
            is_defined_by: self.optional(c.is_defined_by),
            source: self.optional(c.source),
            iri: c.iri,
            title: c.title,
            description: c.description,
            scope_note: c.scope_note,
            examples: c.examples,
            fid: c.fid,
        }
    }

    fn property(&self, p: PropertyRecord<Reference>) -> PropertyRecord<String> {
        let same_kind = Some(RefKind::Property(p.kind));
        let class = Some(RefKind::Class);
        PropertyRecord {
            supers: self.list(&p.supers, same_kind),
            subs: self.list(&p.subs, same_kind),
            equivalents: self.list(&p.equivalents, same_kind),
            inverses: self.list(&p.inverses, same_kind),
            domains: self.list(&p.domains, class),
            domain_includes: self.list(&p.domain_includes, class),
            ranges: self.list(&p.ranges, class),
            range_includes: self.list(&p.range_includes, class),
            is_defined_by: self.optional(p.is_defined_by),
            source: self.optional(p.source),
            iri: p.iri,
            kind: p.kind,
            title: p.title,
            description: p.description,
            scope_note: p.scope_note,
            examples: p.examples,
            fid: p.fid,
        }
    }

    fn individual(&self, i: NamedIndividualRecord<Reference>) -> NamedIndividualRecord<String> {
        NamedIndividualRecord {
            classes: self.list(&i.classes, Some(RefKind::Class)),
            see_also: self.list(&i.see_also, None),
            same_as: self.list(&i.same_as, Some(RefKind::NamedIndividual)),
            is_defined_by: self.optional(i.is_defined_by),
            source: self.optional(i.source),
            iri: i.iri,
            title: i.title,
            description: i.description,
            fid: i.fid,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::extractor::{extract, ExtractOptions};
    use crate::loader::{parse_str, Syntax};
    use crate::namespaces::PrefixTable;
    use crate::normalizer;

    const PREAMBLE: &str = "@prefix ex: <https://example.org/> .
@prefix owl: <http://www.w3.org/2002/07/owl#> .
@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
@prefix xsd: <http://www.w3.org/2001/XMLSchema#> .
";

    fn linked(ttl: &str, format: OutputFormat) -> OntologyIndex<String> {
        let loaded = parse_str(&format!("{PREAMBLE}{ttl}"), Syntax::Turtle).unwrap();
        let graph = normalizer::expand(loaded.graph).unwrap();
        let index = extract(
            &graph,
            ExtractOptions {
                format,
                language: "en",
            },
        );
        let mut table = PrefixTable::well_known();
        table.bind("ex", "https://example.org/");
        link(index, &Linker::new(format, &table))
    }

    fn iri(local: &str) -> String {
        format!("https://example.org/{local}")
    }

    #[test]
    fn local_entities_become_anchors() {
        let idx = linked(
            "ex:A a owl:Class ; rdfs:label \"A\" . ex:B a owl:Class ; rdfs:subClassOf ex:A .",
            OutputFormat::Markdown,
        );
        assert_eq!(idx.classes[&iri("B")].supers, vec!["[A](#a)".to_string()]);
    }

    #[test]
    fn external_entities_get_curie_and_kind() {
        let idx = linked(
            "ex:B a owl:Class ; rdfs:subClassOf owl:Thing .",
            OutputFormat::Markdown,
        );
        assert_eq!(
            idx.classes[&iri("B")].supers,
            vec!["[owl:Thing](http://www.w3.org/2002/07/owl#Thing) (c)".to_string()]
        );
    }

    #[test]
    fn unknown_namespace_prints_full_iri() {
        let idx = linked(
            "ex:B a owl:Class ; rdfs:subClassOf <urn:x:y> .",
            OutputFormat::AsciiDoc,
        );
        assert_eq!(idx.classes[&iri("B")].supers, vec!["link:urn:x:y[urn:x:y] ^c^".to_string()]);
    }

    #[test]
    fn union_domain_renders_parenthesised() {
        let idx = linked(
            "ex:A a owl:Class ; rdfs:label \"A\" . ex:B a owl:Class ; rdfs:label \"B\" .
             ex:p a owl:ObjectProperty ; rdfs:domain [ owl:unionOf ( ex:A ex:B ) ] .",
            OutputFormat::Html,
        );
        assert_eq!(
            idx.properties[&iri("p")].domains,
            vec!["(<a href=\"#a\">A</a> or <a href=\"#b\">B</a>)".to_string()]
        );
    }

    #[test]
    fn lists_sort_naturally() {
        let idx = linked(
            "ex:C a owl:Class .
             ex:i2 a owl:NamedIndividual , ex:C ; rdfs:label \"Item 2\" .
             ex:i10 a owl:NamedIndividual , ex:C ; rdfs:label \"Item 10\" .
             ex:i1 a owl:NamedIndividual , ex:C ; rdfs:label \"Item 1\" .",
            OutputFormat::Markdown,
        );
        assert_eq!(
            idx.classes[&iri("C")].has_members,
            vec![
                "[Item 1](#item-1)".to_string(),
                "[Item 2](#item-2)".to_string(),
                "[Item 10](#item-10)".to_string(),
            ]
        );
    }

    #[test]
    fn restrictions_render_property_keyword_target() {
        let idx = linked(
            "ex:p a owl:ObjectProperty ; rdfs:label \"p\" .
             ex:D a owl:Class ; rdfs:label \"D\" .
             ex:C a owl:Class ; rdfs:subClassOf
                 [ owl:onProperty ex:p ; owl:maxQualifiedCardinality \"2\"^^xsd:nonNegativeInteger ; owl:onClass ex:D ] ,
                 [ owl:onProperty ex:p ; owl:someValuesFrom [ owl:unionOf ( ex:D owl:Thing ) ] ] .",
            OutputFormat::Markdown,
        );
        assert_eq!(
            idx.classes[&iri("C")].restrictions,
            vec![
                "[p](#p) max 2 [D](#d)".to_string(),
                "[p](#p) some ([D](#d) or [owl:Thing](http://www.w3.org/2002/07/owl#Thing) (c))"
                    .to_string(),
            ]
        );
    }

    #[test]
    fn natural_cmp_ignores_markup() {
        assert_eq!(natural_cmp("[Item 2](#z)", "[Item 10](#a)"), Ordering::Less);
    }
}
