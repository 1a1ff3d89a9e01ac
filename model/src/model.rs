//! Core model types.
//!
//! Plain data shared by every stage of the documentation pipeline: graph
//! values, output selection, symbolic references between entities and the
//! fixed-shape records built for classes, properties and named individuals.
//!
//! Records are generic over their reference type. Extraction produces
//! records holding [`Reference`] values; cross-linking turns them into
//! records holding the final display strings. The shape never changes, so
//! every field a template reads is always present.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::vocab::{owl, xsd};

/// A term found in the graph.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Node {
    /// A full IRI.
    Iri(String),
    /// A blank node, identified by its store-local label.
    Blank(String),
    /// A literal value.
    Literal(Literal),
}

/// An RDF literal.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Literal {
    /// Lexical form.
    pub lexical: String,
    /// Datatype IRI (`rdf:langString` for language-tagged literals).
    pub datatype: String,
    /// Language tag, if any.
    pub language: Option<String>,
}

impl Literal {
    /// Creates an `xsd:string` literal.
    pub fn plain(lexical: impl Into<String>) -> Self {
        Self {
            lexical: lexical.into(),
            datatype: xsd::STRING.to_string(),
            language: None,
        }
    }
}

impl Node {
    /// Creates an IRI node.
    pub fn iri(iri: impl Into<String>) -> Self {
        Node::Iri(iri.into())
    }

    /// Returns the IRI if this node is one.
    #[must_use]
    pub fn as_iri(&self) -> Option<&str> {
        match self {
            Node::Iri(iri) => Some(iri),
            _ => None,
        }
    }

    /// Returns the literal if this node is one.
    #[must_use]
    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Node::Literal(lit) => Some(lit),
            _ => None,
        }
    }

    /// Returns true for blank nodes.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        matches!(self, Node::Blank(_))
    }

    /// Returns true for literals.
    #[must_use]
    pub fn is_literal(&self) -> bool {
        matches!(self, Node::Literal(_))
    }

    /// The node's textual value: IRI, blank node label or lexical form.
    #[must_use]
    pub fn value(&self) -> &str {
        match self {
            Node::Iri(iri) => iri,
            Node::Blank(id) => id,
            Node::Literal(lit) => &lit.lexical,
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

/// The markup language of the generated document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
pub enum OutputFormat {
    /// HTML5, the only rich-markup target.
    #[default]
    #[serde(rename = "html")]
    Html,
    /// CommonMark.
    #[serde(rename = "md", alias = "markdown")]
    Markdown,
    /// AsciiDoc.
    #[serde(rename = "adoc", alias = "asciidoc")]
    AsciiDoc,
}

impl OutputFormat {
    /// The selector string, also used as the file extension.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            OutputFormat::Html => "html",
            OutputFormat::Markdown => "md",
            OutputFormat::AsciiDoc => "adoc",
        }
    }

    /// Whether free text (descriptions, notes) is converted from Markdown.
    #[must_use]
    pub fn is_rich_markup(self) -> bool {
        matches!(self, OutputFormat::Html)
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "html" => Ok(OutputFormat::Html),
            "md" | "markdown" => Ok(OutputFormat::Markdown),
            "adoc" | "asciidoc" => Ok(OutputFormat::AsciiDoc),
            other => Err(format!(
                "unknown output format '{other}' (expected html, md or adoc)"
            )),
        }
    }
}

/// Classification of a property by its declared OWL type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PropertyKind {
    /// `owl:ObjectProperty`.
    Object,
    /// `owl:FunctionalProperty`; wins over every other declared type.
    Functional,
    /// `owl:DatatypeProperty`.
    Datatype,
    /// `owl:AnnotationProperty`.
    Annotation,
    /// Only `rdf:Property`.
    Generic,
}

impl PropertyKind {
    /// Grouping order of the properties section.
    pub const ALL: [PropertyKind; 5] = [
        PropertyKind::Object,
        PropertyKind::Functional,
        PropertyKind::Datatype,
        PropertyKind::Annotation,
        PropertyKind::Generic,
    ];

    /// Short code used in superscripts and anchors.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            PropertyKind::Object => "op",
            PropertyKind::Functional => "fp",
            PropertyKind::Datatype => "dp",
            PropertyKind::Annotation => "ap",
            PropertyKind::Generic => "p",
        }
    }

    /// Singular, lower-case description.
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            PropertyKind::Object => "object property",
            PropertyKind::Functional => "functional property",
            PropertyKind::Datatype => "datatype property",
            PropertyKind::Annotation => "annotation property",
            PropertyKind::Generic => "property",
        }
    }

    /// Section heading for the group.
    #[must_use]
    pub fn heading(self) -> &'static str {
        match self {
            PropertyKind::Object => "Object Properties",
            PropertyKind::Functional => "Functional Properties",
            PropertyKind::Datatype => "Datatype Properties",
            PropertyKind::Annotation => "Annotation Properties",
            PropertyKind::Generic => "Properties",
        }
    }

    /// The OWL type IRI, `None` for generic properties.
    #[must_use]
    pub fn owl_type(self) -> Option<&'static str> {
        match self {
            PropertyKind::Object => Some(owl::OBJECT_PROPERTY),
            PropertyKind::Functional => Some(owl::FUNCTIONAL_PROPERTY),
            PropertyKind::Datatype => Some(owl::DATATYPE_PROPERTY),
            PropertyKind::Annotation => Some(owl::ANNOTATION_PROPERTY),
            PropertyKind::Generic => None,
        }
    }
}

/// The kind of entity a reference is expected to point at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefKind {
    /// A class.
    Class,
    /// A property of the given classification.
    Property(PropertyKind),
    /// A named individual.
    NamedIndividual,
}

impl RefKind {
    /// Short code used in superscripts.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            RefKind::Class => "c",
            RefKind::Property(kind) => kind.code(),
            RefKind::NamedIndividual => "ni",
        }
    }

    /// Lower-case description, used as tooltip text.
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            RefKind::Class => "class",
            RefKind::Property(kind) => kind.description(),
            RefKind::NamedIndividual => "named individual",
        }
    }
}

/// Operator of a collection expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionOperator {
    /// `owl:unionOf`.
    Union,
    /// `owl:intersectionOf`.
    Intersection,
}

impl CollectionOperator {
    /// Maps an anchoring predicate IRI to its operator.
    #[must_use]
    pub fn from_iri(iri: &str) -> Option<Self> {
        match iri {
            owl::UNION_OF => Some(CollectionOperator::Union),
            owl::INTERSECTION_OF => Some(CollectionOperator::Intersection),
            _ => None,
        }
    }

    /// The word placed between members.
    #[must_use]
    pub fn joiner(self) -> &'static str {
        match self {
            CollectionOperator::Union => "or",
            CollectionOperator::Intersection => "and",
        }
    }
}

/// A reference from one entity to another, before it is linked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reference {
    /// A named entity, by IRI.
    Entity(String),
    /// A union or intersection of references.
    Collection(CollectionExpr),
    /// An OWL restriction.
    Restriction(RestrictionExpr),
    /// A literal or anonymous value printed as-is.
    Value(String),
}

/// A tagged union/intersection of member references.
///
/// `operator` is `None` when an anonymous node was expected to carry a
/// collection but did not; such expressions render with an empty or
/// unlabelled member list rather than failing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionExpr {
    /// Union or intersection.
    pub operator: Option<CollectionOperator>,
    /// Members in list order.
    pub members: Vec<Reference>,
}

/// An OWL restriction on a class.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RestrictionExpr {
    /// `owl:onProperty`.
    pub property: Option<String>,
    /// Cardinality, quantifier or value constraint.
    pub constraint: Option<Constraint>,
    /// `owl:onClass` / `owl:onDataRange` of a qualified restriction.
    pub target: Option<Box<Reference>>,
}

/// The constraint part of a restriction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Constraint {
    /// A (possibly qualified) cardinality.
    Cardinality {
        /// min, max or exactly.
        bound: CardinalityBound,
        /// The cardinality literal.
        value: String,
    },
    /// `owl:someValuesFrom` / `owl:allValuesFrom`.
    Quantified {
        /// some or only.
        quantifier: Quantifier,
        /// The filler class or collection.
        filler: Box<Reference>,
    },
    /// `owl:hasValue`.
    HasValue(Box<Reference>),
}

/// Cardinality bound of a restriction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardinalityBound {
    /// `owl:minCardinality`, `owl:minQualifiedCardinality`.
    Min,
    /// `owl:maxCardinality`, `owl:maxQualifiedCardinality`.
    Max,
    /// `owl:cardinality`, `owl:qualifiedCardinality`.
    Exactly,
}

impl CardinalityBound {
    /// Keyword shown in the rendered restriction.
    #[must_use]
    pub fn keyword(self) -> &'static str {
        match self {
            CardinalityBound::Min => "min",
            CardinalityBound::Max => "max",
            CardinalityBound::Exactly => "exactly",
        }
    }
}

/// Quantifier of a restriction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantifier {
    /// `owl:someValuesFrom`.
    Some,
    /// `owl:allValuesFrom`.
    Only,
}

impl Quantifier {
    /// Keyword shown in the rendered restriction.
    #[must_use]
    pub fn keyword(self) -> &'static str {
        match self {
            Quantifier::Some => "some",
            Quantifier::Only => "only",
        }
    }
}

/// A documented class.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassRecord<R> {
    /// Full IRI.
    pub iri: String,
    /// Display title.
    pub title: String,
    /// Description, already converted for the output format.
    pub description: Option<String>,
    /// `skos:scopeNote`.
    pub scope_note: Option<String>,
    /// Rendered `skos:example` values.
    pub examples: Vec<String>,
    /// `rdfs:isDefinedBy`.
    pub is_defined_by: Option<String>,
    /// `dcterms:source` / `dc:source`.
    pub source: Option<String>,
    /// Document-local anchor.
    pub fid: String,
    /// `owl:equivalentClass`.
    pub equivalents: Vec<R>,
    /// `rdfs:subClassOf`, restrictions excluded.
    pub supers: Vec<R>,
    /// Restrictions among the superclasses.
    pub restrictions: Vec<R>,
    /// Classes declaring this one as a superclass.
    pub subs: Vec<R>,
    /// `owl:disjointWith`.
    pub disjoint_with: Vec<R>,
    /// Properties with this class as `rdfs:domain`.
    pub in_domain_of: Vec<R>,
    /// Properties with this class in `sdo:domainIncludes`.
    pub in_domain_includes_of: Vec<R>,
    /// Properties with this class as `rdfs:range`.
    pub in_range_of: Vec<R>,
    /// Properties with this class in `sdo:rangeIncludes`.
    pub in_range_includes_of: Vec<R>,
    /// Resources typed with this class.
    pub has_members: Vec<R>,
}

/// A documented property.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyRecord<R> {
    /// Full IRI.
    pub iri: String,
    /// Classification by declared type.
    pub kind: PropertyKind,
    /// Display title.
    pub title: String,
    /// Description, already converted for the output format.
    pub description: Option<String>,
    /// `skos:scopeNote`.
    pub scope_note: Option<String>,
    /// Rendered `skos:example` values.
    pub examples: Vec<String>,
    /// `rdfs:isDefinedBy`.
    pub is_defined_by: Option<String>,
    /// `dcterms:source` / `dc:source`.
    pub source: Option<String>,
    /// Document-local anchor.
    pub fid: String,
    /// `rdfs:subPropertyOf`.
    pub supers: Vec<R>,
    /// Properties declaring this one as a super-property.
    pub subs: Vec<R>,
    /// `owl:equivalentProperty`.
    pub equivalents: Vec<R>,
    /// `owl:inverseOf`, in either direction.
    pub inverses: Vec<R>,
    /// `rdfs:domain`.
    pub domains: Vec<R>,
    /// `sdo:domainIncludes`.
    pub domain_includes: Vec<R>,
    /// `rdfs:range`.
    pub ranges: Vec<R>,
    /// `sdo:rangeIncludes`.
    pub range_includes: Vec<R>,
}

/// A documented named individual.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedIndividualRecord<R> {
    /// Full IRI, or blank node label for anonymous individuals.
    pub iri: String,
    /// Asserted classes other than `owl:NamedIndividual`.
    pub classes: Vec<R>,
    /// Display title.
    pub title: String,
    /// Description, already converted for the output format.
    pub description: Option<String>,
    /// `rdfs:isDefinedBy`.
    pub is_defined_by: Option<String>,
    /// `dcterms:source` / `dc:source`.
    pub source: Option<String>,
    /// `rdfs:seeAlso`.
    pub see_also: Vec<R>,
    /// `owl:sameAs`.
    pub same_as: Vec<R>,
    /// Document-local anchor.
    pub fid: String,
}

/// The role an agent plays for the ontology.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AgentRole {
    /// `dcterms:creator` (and its normalised synonyms).
    Creator,
    /// `dcterms:contributor`.
    Contributor,
    /// `dcterms:publisher`.
    Publisher,
    /// `sdo:editor`.
    Editor,
    /// `sdo:funder`.
    Funder,
    /// `sdo:translator`.
    Translator,
}

impl AgentRole {
    /// Display order in the metadata block.
    pub const ALL: [AgentRole; 6] = [
        AgentRole::Creator,
        AgentRole::Contributor,
        AgentRole::Publisher,
        AgentRole::Editor,
        AgentRole::Funder,
        AgentRole::Translator,
    ];

    /// Plural label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            AgentRole::Creator => "Creators",
            AgentRole::Contributor => "Contributors",
            AgentRole::Publisher => "Publishers",
            AgentRole::Editor => "Editors",
            AgentRole::Funder => "Funders",
            AgentRole::Translator => "Translators",
        }
    }
}

/// Deduplicated agent sets, one per role.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Agents {
    /// Creators.
    pub creators: BTreeSet<String>,
    /// Contributors.
    pub contributors: BTreeSet<String>,
    /// Publishers.
    pub publishers: BTreeSet<String>,
    /// Editors.
    pub editors: BTreeSet<String>,
    /// Funders.
    pub funders: BTreeSet<String>,
    /// Translators.
    pub translators: BTreeSet<String>,
}

impl Agents {
    /// The set for `role`.
    #[must_use]
    pub fn get(&self, role: AgentRole) -> &BTreeSet<String> {
        match role {
            AgentRole::Creator => &self.creators,
            AgentRole::Contributor => &self.contributors,
            AgentRole::Publisher => &self.publishers,
            AgentRole::Editor => &self.editors,
            AgentRole::Funder => &self.funders,
            AgentRole::Translator => &self.translators,
        }
    }

    /// Mutable access to the set for `role`.
    pub fn get_mut(&mut self, role: AgentRole) -> &mut BTreeSet<String> {
        match role {
            AgentRole::Creator => &mut self.creators,
            AgentRole::Contributor => &mut self.contributors,
            AgentRole::Publisher => &mut self.publishers,
            AgentRole::Editor => &mut self.editors,
            AgentRole::Funder => &mut self.funders,
            AgentRole::Translator => &mut self.translators,
        }
    }
}

/// Document-level description taken from the ontology declaration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentMetadata {
    /// IRI of the ontology declaration subject.
    pub uri: String,
    /// Title, or a placeholder when none was declared.
    pub title: String,
    /// Description, already converted for the output format.
    pub description: Option<String>,
    /// `skos:historyNote`, already converted for the output format.
    pub history_note: Option<String>,
    /// Formatted `owl:versionIRI`.
    pub version_iri: Option<String>,
    /// `owl:versionInfo`.
    pub version_info: Option<String>,
    /// `dcterms:created`.
    pub created: Option<String>,
    /// `dcterms:modified`.
    pub modified: Option<String>,
    /// `dcterms:issued`.
    pub issued: Option<String>,
    /// `dcterms:source`.
    pub source: Option<String>,
    /// `dcterms:license`.
    pub license: Option<String>,
    /// `dcterms:rights` with copyright markers replaced by the glyph.
    pub rights: Option<String>,
    /// Code repository link.
    pub repository: Option<String>,
    /// `vann:preferredNamespacePrefix`.
    pub preferred_namespace_prefix: Option<String>,
    /// `vann:preferredNamespaceUri`.
    pub preferred_namespace_uri: Option<String>,
    /// Link to the RDF source the document was generated from.
    pub source_link: Option<String>,
    /// Formatted `owl:imports`.
    pub imports: BTreeSet<String>,
    /// Agents by role.
    pub agents: Agents,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_format_parses_aliases() {
        assert_eq!("md".parse::<OutputFormat>(), Ok(OutputFormat::Markdown));
        assert_eq!("AsciiDoc".parse::<OutputFormat>(), Ok(OutputFormat::AsciiDoc));
        assert!("pdf".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn property_kind_codes_are_distinct() {
        let codes: BTreeSet<&str> = PropertyKind::ALL.iter().map(|k| k.code()).collect();
        assert_eq!(codes.len(), PropertyKind::ALL.len());
    }

    #[test]
    fn collection_operator_from_iri() {
        assert_eq!(
            CollectionOperator::from_iri(owl::UNION_OF),
            Some(CollectionOperator::Union)
        );
        assert_eq!(CollectionOperator::from_iri(owl::CLASS), None);
    }

    #[test]
    fn node_value_is_lexical_for_literals() {
        let node = Node::Literal(Literal::plain("hello"));
        assert_eq!(node.value(), "hello");
        assert!(node.is_literal());
    }
}
