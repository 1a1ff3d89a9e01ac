//! HTML5 templates.

use ontdoc_model::{
    ClassRecord, DocumentMetadata, NamedIndividualRecord, OutputFormat, PropertyRecord, RefKind,
};
use serde_json::{json, Map, Value};

use super::{
    class_rows, classes_by_title, individual_rows, individuals_by_title, is_anonymous,
    metadata_rows, properties_by_kind, property_rows, Document, Field, Row, Templates, LEGEND,
};
use crate::extractor::OntologyIndex;
use crate::markup::{anchor_link, escape_html, kind_suffix};
use crate::namespaces::Namespaces;

/// File name of the stylesheet when it is linked rather than inlined.
pub const STYLESHEET_FILE: &str = "ontdoc.css";

/// The document stylesheet.
#[must_use]
pub fn stylesheet() -> &'static str {
    include_str!("../../assets/ontdoc.css")
}

/// HTML templates.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlTemplates;

fn field(value: &Field) -> String {
    match value {
        Field::Text(text) => text.clone(),
        Field::List(items) => {
            let mut out = String::from("<ul>");
            for item in items {
                out.push_str(&format!("<li>{item}</li>"));
            }
            out.push_str("</ul>");
            out
        }
    }
}

fn entity_table(iri: &str, rows: &[Row]) -> String {
    let mut out = String::from("<table>\n");
    if !is_anonymous(iri) {
        out.push_str(&format!(
            "<tr><th>IRI</th><td><code>{}</code></td></tr>\n",
            escape_html(iri)
        ));
    }
    for (label, value) in rows {
        out.push_str(&format!(
            "<tr><th>{label}</th><td>{}</td></tr>\n",
            field(value)
        ));
    }
    out.push_str("</table>\n");
    out
}

fn entity(fid: &str, title: &str, kind: RefKind, iri: &str, rows: &[Row]) -> String {
    format!(
        r#"<div class="entity" id="{fid}">
<h3>{title}{sup}</h3>
{table}</div>
"#,
        fid = escape_html(fid),
        title = escape_html(title),
        sup = kind_suffix(OutputFormat::Html, kind),
        table = entity_table(iri, rows),
    )
}

fn index_list<'a>(entries: impl Iterator<Item = (&'a str, &'a str)>) -> String {
    let mut out = String::from("<ul class=\"hlist\">\n");
    for (fid, title) in entries {
        out.push_str(&format!(
            "<li>{}</li>\n",
            anchor_link(OutputFormat::Html, fid, title)
        ));
    }
    out.push_str("</ul>\n");
    out
}

/// schema.org description of the ontology, as JSON-LD.
fn schema_org(metadata: &DocumentMetadata) -> String {
    let mut map = Map::new();
    map.insert("@context".into(), json!("https://schema.org"));
    map.insert("@type".into(), json!("DefinedTermSet"));
    map.insert("@id".into(), json!(metadata.uri));
    map.insert("name".into(), json!(metadata.title));
    let optional = [
        ("version", &metadata.version_info),
        ("dateCreated", &metadata.created),
        ("dateModified", &metadata.modified),
        ("datePublished", &metadata.issued),
    ];
    for (key, value) in optional {
        if let Some(value) = value {
            map.insert(key.into(), json!(value));
        }
    }
    serde_json::to_string_pretty(&Value::Object(map))
        .unwrap_or_default()
        .replace("</", "<\\/")
}

fn toc(index: &OntologyIndex<String>) -> String {
    let mut out = String::from("<h3>Table of Contents</h3>\n<ol>\n<li><a href=\"#metadata\">Metadata</a></li>\n");
    if !index.classes.is_empty() {
        out.push_str("<li><a href=\"#classes\">Classes</a>\n<ol>\n");
        for c in classes_by_title(index) {
            out.push_str(&format!("<li>{}</li>\n", anchor_link(OutputFormat::Html, &c.fid, &c.title)));
        }
        out.push_str("</ol></li>\n");
    }
    for (kind, group) in properties_by_kind(index) {
        out.push_str(&format!(
            "<li><a href=\"#{code}s\">{heading}</a>\n<ol>\n",
            code = kind.code(),
            heading = kind.heading()
        ));
        for p in group {
            out.push_str(&format!("<li>{}</li>\n", anchor_link(OutputFormat::Html, &p.fid, &p.title)));
        }
        out.push_str("</ol></li>\n");
    }
    if !index.individuals.is_empty() {
        out.push_str("<li><a href=\"#named-individuals\">Named Individuals</a></li>\n");
    }
    out.push_str("<li><a href=\"#namespaces\">Namespaces</a></li>\n<li><a href=\"#legend\">Legend</a></li>\n</ol>\n");
    out
}

impl Templates for HtmlTemplates {
    fn document(&self, doc: &Document<'_>) -> String {
        let css = if doc.include_css {
            format!("<style>\n{}</style>", stylesheet())
        } else {
            format!("<link rel=\"stylesheet\" href=\"{STYLESHEET_FILE}\" />")
        };
        format!(
            r#"<!DOCTYPE html>
<html lang="{lang}">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>{title}</title>
{css}
<script type="application/ld+json">
{schema_org}
</script>
</head>
<body>
<main id="content">
{metadata}{classes}{properties}{individuals}{namespaces}{legend}</main>
<nav id="toc" aria-label="Table of contents">
{toc}</nav>
</body>
</html>
"#,
            lang = escape_html(doc.language),
            title = escape_html(&doc.metadata.title),
            css = css,
            schema_org = schema_org(doc.metadata),
            metadata = self.metadata(doc.metadata),
            classes = self.classes(doc.index),
            properties = self.properties(doc.index),
            individuals = self.individuals(doc.index),
            namespaces = self.namespaces(doc.namespaces),
            legend = self.legend(),
            toc = toc(doc.index),
        )
    }

    fn metadata(&self, metadata: &DocumentMetadata) -> String {
        let mut out = format!(
            "<section id=\"metadata\">\n<h1>{}</h1>\n<h2>Metadata</h2>\n<dl>\n<dt>IRI</dt><dd><code>{}</code></dd>\n",
            escape_html(&metadata.title),
            escape_html(&metadata.uri)
        );
        for (label, value) in metadata_rows(metadata) {
            out.push_str(&format!("<dt>{label}</dt><dd>{}</dd>\n", field(&value)));
        }
        out.push_str("</dl>\n");
        if let Some(description) = &metadata.description {
            out.push_str(&format!("<h2>Description</h2>\n{description}\n"));
        }
        if let Some(note) = &metadata.history_note {
            out.push_str(&format!("<h2>History Note</h2>\n{note}\n"));
        }
        out.push_str("</section>\n");
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
        let mut out = String::from("<section id=\"classes\">\n<h2>Classes</h2>\n");
        out.push_str(&index_list(classes.iter().map(|c| (c.fid.as_str(), c.title.as_str()))));
        for class in classes {
            out.push_str(&self.class(class));
        }
        out.push_str("</section>\n");
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
        let groups = properties_by_kind(index);
        if groups.is_empty() {
            return String::new();
        }
        let mut out = String::from("<section id=\"properties\">\n");
        for (kind, group) in groups {
            out.push_str(&format!(
                "<section id=\"{code}s\">\n<h2>{heading}</h2>\n",
                code = kind.code(),
                heading = kind.heading()
            ));
            out.push_str(&index_list(group.iter().map(|p| (p.fid.as_str(), p.title.as_str()))));
            for property in group {
                out.push_str(&self.property(property));
            }
            out.push_str("</section>\n");
        }
        out.push_str("</section>\n");
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
        let mut out = String::from("<section id=\"named-individuals\">\n<h2>Named Individuals</h2>\n");
        out.push_str(&index_list(
            individuals.iter().map(|i| (i.fid.as_str(), i.title.as_str())),
        ));
        for individual in individuals {
            out.push_str(&self.individual(individual));
        }
        out.push_str("</section>\n");
        out
    }

    fn namespaces(&self, namespaces: &Namespaces) -> String {
        let mut out = format!(
            "<section id=\"namespaces\">\n<h2>Namespaces</h2>\n<dl>\n<dt><em>default</em> (:)</dt><dd><code>{}</code></dd>\n",
            escape_html(&namespaces.default)
        );
        for (prefix, namespace) in &namespaces.used {
            out.push_str(&format!(
                "<dt id=\"ns-{prefix}\">{prefix}</dt><dd><code>{namespace}</code></dd>\n",
                prefix = escape_html(prefix),
                namespace = escape_html(namespace),
            ));
        }
        out.push_str("</dl>\n</section>\n");
        out
    }

    fn legend(&self) -> String {
        let mut out = String::from("<section id=\"legend\">\n<h2>Legend</h2>\n<table class=\"entity\">\n");
        for kind in LEGEND {
            out.push_str(&format!(
                "<tr><td>{}</td><td>{}</td></tr>\n",
                kind_suffix(OutputFormat::Html, kind),
                capitalise(kind.description())
            ));
        }
        out.push_str("</table>\n</section>\n");
        out
    }
}

fn capitalise(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_ld_carries_name_and_dates() {
        let meta = DocumentMetadata {
            uri: "https://example.org/o".into(),
            title: "Example </script>".into(),
            created: Some("2024-01-01".into()),
            ..DocumentMetadata::default()
        };
        let json = schema_org(&meta);
        assert!(json.contains("\"@id\": \"https://example.org/o\""));
        assert!(json.contains("\"dateCreated\": \"2024-01-01\""));
        assert!(!json.contains("</script>"));
    }

    #[test]
    fn anonymous_individuals_have_no_iri_row() {
        assert!(!entity_table("_:b0", &[]).contains("IRI"));
        assert!(entity_table("https://example.org/i", &[]).contains("<code>https://example.org/i</code>"));
    }

    #[test]
    fn stylesheet_is_embedded() {
        assert!(stylesheet().contains(".entity"));
    }
}
