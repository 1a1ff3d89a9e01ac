//! Document templates, one implementation per output format.
//!
//! The templates receive fully linked records, so they only arrange
//! pre-rendered strings. The field lists shared by every format (which
//! rows an entity shows, in which order, under which label) are built here
//! once; each format decides how a row looks.

pub mod asciidoc;
pub mod html;
pub mod markdown;

use ontdoc_model::{
    AgentRole, ClassRecord, DocumentMetadata, NamedIndividualRecord, OutputFormat, PropertyKind,
    PropertyRecord, RefKind,
};

use crate::extractor::OntologyIndex;
use crate::linker::natural_cmp;
use crate::namespaces::Namespaces;

/// Everything a document is rendered from.
#[derive(Debug, Clone, Copy)]
pub struct Document<'a> {
    /// Ontology metadata.
    pub metadata: &'a DocumentMetadata,
    /// Linked entities.
    pub index: &'a OntologyIndex<String>,
    /// Default namespace and used prefixes.
    pub namespaces: &'a Namespaces,
    /// Inline the stylesheet (HTML only).
    pub include_css: bool,
    /// Language tag the document is written in.
    pub language: &'a str,
}

/// The value of one row of an entity or metadata table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Field {
    /// A single pre-rendered value.
    Text(String),
    /// Several pre-rendered values.
    List(Vec<String>),
}

/// A labelled row.
pub type Row = (&'static str, Field);

/// Templates of one output format.
///
/// Implementations render each part; [`Templates::document`] assembles them.
pub trait Templates {
    /// The whole document.
    fn document(&self, doc: &Document<'_>) -> String;
    /// The metadata block.
    fn metadata(&self, metadata: &DocumentMetadata) -> String;
    /// One class.
    fn class(&self, class: &ClassRecord<String>) -> String;
    /// The classes section with its index.
    fn classes(&self, index: &OntologyIndex<String>) -> String;
    /// One property.
    fn property(&self, property: &PropertyRecord<String>) -> String;
    /// The properties section, grouped by kind.
    fn properties(&self, index: &OntologyIndex<String>) -> String;
    /// One named individual.
    fn individual(&self, individual: &NamedIndividualRecord<String>) -> String;
    /// The named individuals section with its alphabetical index.
    fn individuals(&self, index: &OntologyIndex<String>) -> String;
    /// The namespaces section.
    fn namespaces(&self, namespaces: &Namespaces) -> String;
    /// The legend of kind superscripts.
    fn legend(&self) -> String;
}

/// Renders `doc` with the templates of `format`.
#[must_use]
pub fn render(format: OutputFormat, doc: &Document<'_>) -> String {
    match format {
        OutputFormat::Html => html::HtmlTemplates.document(doc),
        OutputFormat::Markdown => markdown::MarkdownTemplates.document(doc),
        OutputFormat::AsciiDoc => asciidoc::AsciiDocTemplates.document(doc),
    }
}

/// Kinds shown in the legend, in display order.
pub const LEGEND: [RefKind; 7] = [
    RefKind::Class,
    RefKind::Property(PropertyKind::Object),
    RefKind::Property(PropertyKind::Functional),
    RefKind::Property(PropertyKind::Datatype),
    RefKind::Property(PropertyKind::Annotation),
    RefKind::Property(PropertyKind::Generic),
    RefKind::NamedIndividual,
];

fn push_text(rows: &mut Vec<Row>, label: &'static str, value: &Option<String>) {
    if let Some(value) = value {
        rows.push((label, Field::Text(value.clone())));
    }
}

fn push_list(rows: &mut Vec<Row>, label: &'static str, values: &[String]) {
    match values {
        [] => {}
        [one] => rows.push((label, Field::Text(one.clone()))),
        many => rows.push((label, Field::List(many.to_vec()))),
    }
}

/// Rows of a class table after the IRI row.
#[must_use]
pub fn class_rows(c: &ClassRecord<String>) -> Vec<Row> {
    let mut rows = Vec::new();
    push_text(&mut rows, "Description", &c.description);
    push_text(&mut rows, "Scope Note", &c.scope_note);
    push_list(&mut rows, "Examples", &c.examples);
    push_text(&mut rows, "Is Defined By", &c.is_defined_by);
    push_text(&mut rows, "Source", &c.source);
    push_list(&mut rows, "Equivalent To", &c.equivalents);
    push_list(&mut rows, "Super-classes", &c.supers);
    push_list(&mut rows, "Restrictions", &c.restrictions);
    push_list(&mut rows, "Sub-classes", &c.subs);
    push_list(&mut rows, "Disjoint With", &c.disjoint_with);
    push_list(&mut rows, "In domain of", &c.in_domain_of);
    push_list(&mut rows, "In domain of (includes)", &c.in_domain_includes_of);
    push_list(&mut rows, "In range of", &c.in_range_of);
    push_list(&mut rows, "In range of (includes)", &c.in_range_includes_of);
    push_list(&mut rows, "Members", &c.has_members);
    rows
}

/// Rows of a property table after the IRI row.
#[must_use]
pub fn property_rows(p: &PropertyRecord<String>) -> Vec<Row> {
    let mut rows = Vec::new();
    push_text(&mut rows, "Description", &p.description);
    push_text(&mut rows, "Scope Note", &p.scope_note);
    push_list(&mut rows, "Examples", &p.examples);
    push_text(&mut rows, "Is Defined By", &p.is_defined_by);
    push_text(&mut rows, "Source", &p.source);
    push_list(&mut rows, "Super-properties", &p.supers);
    push_list(&mut rows, "Sub-properties", &p.subs);
    push_list(&mut rows, "Equivalent To", &p.equivalents);
    push_list(&mut rows, "Inverse Of", &p.inverses);
    push_list(&mut rows, "Domain(s)", &p.domains);
    push_list(&mut rows, "Domain Includes", &p.domain_includes);
    push_list(&mut rows, "Range(s)", &p.ranges);
    push_list(&mut rows, "Range Includes", &p.range_includes);
    rows
}

/// Rows of a named individual table after the IRI row.
#[must_use]
pub fn individual_rows(i: &NamedIndividualRecord<String>) -> Vec<Row> {
    let mut rows = Vec::new();
    push_list(&mut rows, "Classes", &i.classes);
    push_text(&mut rows, "Description", &i.description);
    push_text(&mut rows, "Is Defined By", &i.is_defined_by);
    push_text(&mut rows, "Source", &i.source);
    push_list(&mut rows, "See Also", &i.see_also);
    push_list(&mut rows, "Same As", &i.same_as);
    rows
}

/// Rows of the metadata table after the URI row. Description and history
/// note are blocks of their own.
#[must_use]
pub fn metadata_rows(m: &DocumentMetadata) -> Vec<Row> {
    let mut rows = Vec::new();
    push_text(&mut rows, "Version IRI", &m.version_iri);
    push_text(&mut rows, "Version Info", &m.version_info);
    push_text(&mut rows, "Preferred Namespace Prefix", &m.preferred_namespace_prefix);
    push_text(&mut rows, "Preferred Namespace URI", &m.preferred_namespace_uri);
    for role in AgentRole::ALL {
        let agents: Vec<String> = m.agents.get(role).iter().cloned().collect();
        push_list(&mut rows, role.label(), &agents);
    }
    push_text(&mut rows, "Created", &m.created);
    push_text(&mut rows, "Modified", &m.modified);
    push_text(&mut rows, "Issued", &m.issued);
    push_text(&mut rows, "Source", &m.source);
    let imports: Vec<String> = m.imports.iter().cloned().collect();
    push_list(&mut rows, "Imports", &imports);
    push_text(&mut rows, "License", &m.license);
    push_text(&mut rows, "Rights", &m.rights);
    push_text(&mut rows, "Code Repository", &m.repository);
    push_text(&mut rows, "Ontology RDF", &m.source_link);
    rows
}

/// Classes in natural title order.
#[must_use]
pub fn classes_by_title(index: &OntologyIndex<String>) -> Vec<&ClassRecord<String>> {
    let mut classes: Vec<_> = index.classes.values().collect();
    classes.sort_by(|a, b| natural_cmp(&a.title, &b.title).then_with(|| a.iri.cmp(&b.iri)));
    classes
}

/// Non-empty property groups in [`PropertyKind::ALL`] order, each in
/// natural title order.
#[must_use]
pub fn properties_by_kind(
    index: &OntologyIndex<String>,
) -> Vec<(PropertyKind, Vec<&PropertyRecord<String>>)> {
    PropertyKind::ALL
        .into_iter()
        .filter_map(|kind| {
            let mut group: Vec<_> = index.properties.values().filter(|p| p.kind == kind).collect();
            if group.is_empty() {
                return None;
            }
            group.sort_by(|a, b| natural_cmp(&a.title, &b.title).then_with(|| a.iri.cmp(&b.iri)));
            Some((kind, group))
        })
        .collect()
}

/// Named individuals in natural title order.
#[must_use]
pub fn individuals_by_title(index: &OntologyIndex<String>) -> Vec<&NamedIndividualRecord<String>> {
    let mut individuals: Vec<_> = index.individuals.values().collect();
    individuals.sort_by(|a, b| natural_cmp(&a.title, &b.title).then_with(|| a.iri.cmp(&b.iri)));
    individuals
}

/// Blank-node individuals have no IRI to show.
fn is_anonymous(iri: &str) -> bool {
    iri.starts_with("_:")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_values_are_not_lists() {
        let mut rows = Vec::new();
        push_list(&mut rows, "One", &["a".to_string()]);
        push_list(&mut rows, "None", &[]);
        push_list(&mut rows, "Two", &["a".to_string(), "b".to_string()]);
        assert_eq!(
            rows,
            vec![
                ("One", Field::Text("a".into())),
                ("Two", Field::List(vec!["a".into(), "b".into()])),
            ]
        );
    }

    #[test]
    fn metadata_rows_follow_role_order() {
        let mut meta = DocumentMetadata::default();
        meta.agents.publishers.insert("P".into());
        meta.agents.creators.insert("C".into());
        let labels: Vec<&str> = metadata_rows(&meta).iter().map(|(l, _)| *l).collect();
        assert_eq!(labels, vec!["Creators", "Publishers"]);
    }
}
