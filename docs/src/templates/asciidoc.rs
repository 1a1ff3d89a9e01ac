//! AsciiDoc templates. Value cells use the `a` style so code blocks and
//! line breaks inside them are rendered.

use ontdoc_model::{
    ClassRecord, DocumentMetadata, NamedIndividualRecord, OutputFormat, PropertyRecord, RefKind,
};

use super::{
    class_rows, classes_by_title, individual_rows, individuals_by_title, is_anonymous,
    metadata_rows, properties_by_kind, property_rows, Document, Field, Row, Templates, LEGEND,
};
use crate::extractor::OntologyIndex;
use crate::markup::{anchor_link, kind_suffix};
use crate::namespaces::Namespaces;

/// AsciiDoc templates.
#[derive(Debug, Clone, Copy, Default)]
pub struct AsciiDocTemplates;

const FORMAT: OutputFormat = OutputFormat::AsciiDoc;

fn field(value: &Field) -> String {
    match value {
        Field::Text(text) => text.trim_end().replace('|', "\\|"),
        Field::List(items) => items
            .iter()
            .map(|i| i.trim_end().replace('|', "\\|"))
            .collect::<Vec<_>>()
            .join(" +\n"),
    }
}

fn table_rows(out: &mut String, rows: &[Row]) {
    for (label, value) in rows {
        out.push_str(&format!("| {label}\na| {}\n", field(value)));
    }
}

fn table(iri: &str, rows: &[Row]) -> String {
    let mut out = String::from("[cols=\"1,3\"]\n|===\n");
    if !is_anonymous(iri) {
        out.push_str(&format!("| IRI\na| `{iri}`\n"));
    }
    table_rows(&mut out, rows);
    out.push_str("|===\n");
    out
}

fn entity(fid: &str, title: &str, kind: RefKind, iri: &str, rows: &[Row]) -> String {
    format!(
        "[[{fid}]]\n=== {title}{sup}\n\n{table}\n",
        sup = kind_suffix(FORMAT, kind),
        table = table(iri, rows),
    )
}

fn index_line<'a>(entries: impl Iterator<Item = (&'a str, &'a str)>) -> String {
    let links: Vec<String> = entries
        .map(|(fid, title)| anchor_link(FORMAT, fid, title))
        .collect();
    format!("{}\n\n", links.join(", "))
}

impl Templates for AsciiDocTemplates {
    fn document(&self, doc: &Document<'_>) -> String {
        let mut out = self.metadata(doc.metadata);
        out.push_str(&self.classes(doc.index));
        out.push_str(&self.properties(doc.index));
        out.push_str(&self.individuals(doc.index));
        out.push_str(&self.namespaces(doc.namespaces));
        out.push_str(&self.legend());
        out
    }

    fn metadata(&self, metadata: &DocumentMetadata) -> String {
        let mut out = format!(
            "= {title}\n:toc: left\n\n== Metadata\n\n[cols=\"1,3\"]\n|===\n| IRI\na| `{uri}`\n",
            title = metadata.title,
            uri = metadata.uri
        );
        table_rows(&mut out, &metadata_rows(metadata));
        out.push_str("|===\n\n");
        if let Some(description) = &metadata.description {
            out.push_str(&format!("== Description\n\n{description}\n\n"));
        }
        if let Some(note) = &metadata.history_note {
            out.push_str(&format!("== History Note\n\n{note}\n\n"));
        }
        out
    }

    fn class(&self, class: &ClassRecord<String>) -> String {
        entity(&class.fid, &class.title, RefKind::Class, &class.iri, &class_rows(class))
    }

    fn classes(&self, index: &OntologyIndex<String>) -> String {
        if index.classes.is_empty() {
            return String::new();
        }
        let classes = classes_by_title(index);
        let mut out = String::from("== Classes\n\n");
        out.push_str(&index_line(classes.iter().map(|c| (c.fid.as_str(), c.title.as_str()))));
        for class in classes {
            out.push_str(&self.class(class));
        }
        out
    }

    fn property(&self, property: &PropertyRecord<String>) -> String {
        entity(
            &property.fid,
            &property.title,
            RefKind::Property(property.kind),
            &property.iri,
            &property_rows(property),
        )
    }

    fn properties(&self, index: &OntologyIndex<String>) -> String {
        let mut out = String::new();
        for (kind, group) in properties_by_kind(index) {
            out.push_str(&format!("== {}\n\n", kind.heading()));
            out.push_str(&index_line(group.iter().map(|p| (p.fid.as_str(), p.title.as_str()))));
            for property in group {
                out.push_str(&self.property(property));
            }
        }
        out
    }

    fn individual(&self, individual: &NamedIndividualRecord<String>) -> String {
        entity(
            &individual.fid,
            &individual.title,
            RefKind::NamedIndividual,
            &individual.iri,
            &individual_rows(individual),
        )
    }

    fn individuals(&self, index: &OntologyIndex<String>) -> String {
        if index.individuals.is_empty() {
            return String::new();
        }
        let individuals = individuals_by_title(index);
        let mut out = String::from("== Named Individuals\n\n");
        out.push_str(&index_line(
            individuals.iter().map(|i| (i.fid.as_str(), i.title.as_str())),
        ));
        for individual in individuals {
            out.push_str(&self.individual(individual));
        }
        out
    }

    fn namespaces(&self, namespaces: &Namespaces) -> String {
        let mut out = format!(
            "== Namespaces\n\n[cols=\"1,3\"]\n|===\n| Prefix | Namespace\n\n| :default | `{}`\n",
            namespaces.default
        );
        for (prefix, namespace) in &namespaces.used {
            out.push_str(&format!("| {prefix} | `{namespace}`\n"));
        }
        out.push_str("|===\n\n");
        out
    }

    fn legend(&self) -> String {
        let mut out = String::from("== Legend\n\n[cols=\"1,3\"]\n|===\n| Code | Kind\n\n");
        for kind in LEGEND {
            out.push_str(&format!("| {} | {}\n", kind.code(), kind.description()));
        }
        out.push_str("|===\n");
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entity_has_anchor_heading_and_table() {
        let rows = vec![("Super-classes", Field::List(vec!["link:#a[A]".into(), "link:#b[B]".into()]))];
        let out = entity("thing", "Thing", RefKind::Class, "https://example.org/Thing", &rows);
        assert_eq!(
            out,
            "[[thing]]\n=== Thing ^c^\n\n[cols=\"1,3\"]\n|===\n| IRI\na| `https://example.org/Thing`\n\
             | Super-classes\na| link:#a[A] +\nlink:#b[B]\n|===\n\n"
        );
    }

    #[test]
    fn anonymous_individuals_skip_the_iri_row() {
        assert!(!table("_:b1", &[]).contains("IRI"));
    }
}
