//! Reads Turtle and N-Triples sources into an [`OntologyGraph`].
//!
//! Parsing is delegated to `sophia_turtle`. Prefix declarations are kept
//! alongside the graph because the parsed store does not retain them and
//! they are the best source of compact names for display.

use std::path::{Path, PathBuf};

use sophia_api::source::TripleSource;
use sophia_inmem::graph::FastGraph;
use sophia_turtle::parser::{nt, turtle};
use tracing::debug;
use walkdir::WalkDir;

use crate::error::{Error, Result};
use crate::graph::OntologyGraph;

/// RDF syntaxes this crate reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Syntax {
    /// Turtle 1.1.
    Turtle,
    /// N-Triples.
    NTriples,
}

impl Syntax {
    /// Guesses the syntax from a file extension.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("ttl") | Some("turtle") => Some(Syntax::Turtle),
            Some("nt") => Some(Syntax::NTriples),
            _ => None,
        }
    }
}

/// A parsed source: its graph and the prefixes it declared.
#[derive(Debug)]
pub struct LoadedOntology {
    /// The statements.
    pub graph: OntologyGraph,
    /// `(prefix, namespace)` pairs in declaration order. The empty prefix
    /// is kept as `""`.
    pub prefixes: Vec<(String, String)>,
}

impl From<OntologyGraph> for LoadedOntology {
    fn from(graph: OntologyGraph) -> Self {
        Self {
            graph,
            prefixes: Vec::new(),
        }
    }
}

/// Parses an in-memory document.
///
/// # Errors
///
/// Returns [`Error::Parse`] if the text is not valid in `syntax`.
pub fn parse_str(text: &str, syntax: Syntax) -> Result<LoadedOntology> {
    parse_with_path(text, syntax, Path::new("<inline>"))
}

/// Reads and parses a file, choosing the syntax from its extension.
///
/// # Errors
///
/// Returns [`Error::UnsupportedSyntax`] for unknown extensions,
/// [`Error::Io`] if the file cannot be read and [`Error::Parse`] if it is
/// not valid.
pub fn load_path(path: &Path) -> Result<LoadedOntology> {
    let syntax =
        Syntax::from_path(path).ok_or_else(|| Error::UnsupportedSyntax(path.to_path_buf()))?;
    let text = std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_with_path(&text, syntax, path)
}

/// Lists every readable RDF source under `dir`, sorted.
#[must_use]
pub fn discover_sources(dir: &Path) -> Vec<PathBuf> {
    let mut sources: Vec<PathBuf> = WalkDir::new(dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file() && Syntax::from_path(e.path()).is_some())
        .map(|e| e.into_path())
        .collect();
    sources.sort();
    sources
}

fn parse_with_path(text: &str, syntax: Syntax, path: &Path) -> Result<LoadedOntology> {
    let parsed: std::result::Result<FastGraph, String> = match syntax {
        Syntax::Turtle => turtle::parse_str(text)
            .collect_triples()
            .map_err(|e| e.to_string()),
        Syntax::NTriples => nt::parse_str(text)
            .collect_triples()
            .map_err(|e| e.to_string()),
    };
    let store = parsed.map_err(|message| Error::Parse {
        path: path.to_path_buf(),
        message,
    })?;
    let graph = OntologyGraph::from_store(store);
    let prefixes = match syntax {
        Syntax::Turtle => prefix_declarations(text),
        Syntax::NTriples => Vec::new(),
    };
    debug!(
        path = %path.display(),
        triples = graph.len(),
        prefixes = prefixes.len(),
        "parsed RDF source"
    );
    Ok(LoadedOntology { graph, prefixes })
}

/// Collects `@prefix p: <iri> .` and `PREFIX p: <iri>` declarations, in
/// document order. Comments, IRIs and string literals are skipped, so
/// keywords inside them are not mistaken for declarations.
fn prefix_declarations(text: &str) -> Vec<(String, String)> {
    let mut found = Vec::new();
    let mut rest = text;
    while let Some(c) = rest.chars().next() {
        rest = match c {
            '#' => rest.find('\n').map_or("", |i| &rest[i..]),
            '<' => rest.find('>').map_or("", |i| &rest[i + 1..]),
            '"' | '\'' => skip_string(rest),
            c if c.is_whitespace() || is_delimiter(c) => &rest[c.len_utf8()..],
            _ => {
                let end = rest
                    .find(|c: char| c.is_whitespace() || is_delimiter(c))
                    .unwrap_or(rest.len());
                let (token, after) = rest.split_at(end);
                if token == "@prefix" || token.eq_ignore_ascii_case("prefix") {
                    match declaration(after) {
                        Some((binding, remainder)) => {
                            found.push(binding);
                            remainder
                        }
                        None => after,
                    }
                } else {
                    after
                }
            }
        };
    }
    found
}

fn is_delimiter(c: char) -> bool {
    matches!(c, '<' | '"' | '\'' | '#' | ';' | ',' | '(' | ')' | '[' | ']')
}

/// `p: <iri>` after a prefix keyword; returns the binding and what follows.
fn declaration(text: &str) -> Option<((String, String), &str)> {
    let text = text.trim_start();
    let colon = text.find(':')?;
    let prefix = &text[..colon];
    if prefix.contains(|c: char| c.is_whitespace() || is_delimiter(c)) {
        return None;
    }
    let text = text[colon + 1..].trim_start().strip_prefix('<')?;
    let close = text.find('>')?;
    Some((
        (prefix.to_string(), text[..close].to_string()),
        &text[close + 1..],
    ))
}

/// Skips a short or long (`"""` / `'''`) string literal at the start of
/// `text`, honouring backslash escapes.
fn skip_string(text: &str) -> &str {
    let bytes = text.as_bytes();
    let quote = bytes[0];
    let long = bytes.len() >= 3 && bytes[1] == quote && bytes[2] == quote;
    let width = if long { 3 } else { 1 };
    let mut i = width;
    while i < bytes.len() {
        if bytes[i] == b'\\' {
            i += 2;
            continue;
        }
        if bytes[i] == quote && (!long || bytes[i..].starts_with(&[quote; 3])) {
            return &text[i + width..];
        }
        i += 1;
    }
    ""
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn collects_both_prefix_styles() {
        let prefixes = prefix_declarations(
            "@prefix ex: <https://example.org/> .\nPREFIX dct: <http://purl.org/dc/terms/>\n@prefix : <https://example.org/onto#> .\n",
        );
        assert_eq!(
            prefixes,
            vec![
                ("ex".to_string(), "https://example.org/".to_string()),
                ("dct".to_string(), "http://purl.org/dc/terms/".to_string()),
                (String::new(), "https://example.org/onto#".to_string()),
            ]
        );
    }

    #[test]
    fn ignores_statements_that_mention_prefix() {
        assert!(prefix_declarations("prefixed:thing a <x> .").is_empty());
    }

    #[test]
    fn collects_every_declaration_on_a_line() {
        let prefixes = prefix_declarations(
            "@prefix a: <https://a.example/> . @prefix b: <https://b.example/> .\n",
        );
        assert_eq!(
            prefixes,
            vec![
                ("a".to_string(), "https://a.example/".to_string()),
                ("b".to_string(), "https://b.example/".to_string()),
            ]
        );
    }

    #[test]
    fn skips_declarations_inside_literals_and_comments() {
        let prefixes = prefix_declarations(
            r#"@prefix ex: <https://example.org/> .
# @prefix commented: <https://commented.example/> .
ex:a ex:note """A long note
@prefix fake: <https://fake.example/> .
with \"\"\" escaped quotes""" ;
    ex:short "@prefix alsofake: <https://fake.example/> ." ;
    ex:iri <https://example.org/@prefix> .
PREFIX real: <https://real.example/>
"#,
        );
        assert_eq!(
            prefixes,
            vec![
                ("ex".to_string(), "https://example.org/".to_string()),
                ("real".to_string(), "https://real.example/".to_string()),
            ]
        );
    }

    #[test]
    fn parses_turtle_and_keeps_prefixes() {
        let loaded = parse_str(
            "@prefix ex: <https://example.org/> .\nex:a ex:b ex:c .\n",
            Syntax::Turtle,
        )
        .unwrap();
        assert_eq!(loaded.graph.len(), 1);
        assert_eq!(loaded.prefixes.len(), 1);
    }

    #[test]
    fn parses_ntriples() {
        let loaded = parse_str(
            "<https://example.org/a> <https://example.org/b> \"c\" .\n",
            Syntax::NTriples,
        )
        .unwrap();
        assert_eq!(loaded.graph.len(), 1);
        assert!(loaded.prefixes.is_empty());
    }

    #[test]
    fn malformed_turtle_is_a_parse_error() {
        let err = parse_str("this is not turtle", Syntax::Turtle).unwrap_err();
        assert!(matches!(err, Error::Parse { .. }));
    }

    #[test]
    fn syntax_from_extension() {
        assert_eq!(Syntax::from_path(Path::new("a/b.ttl")), Some(Syntax::Turtle));
        assert_eq!(Syntax::from_path(Path::new("b.nt")), Some(Syntax::NTriples));
        assert_eq!(Syntax::from_path(Path::new("b.owl")), None);
    }
}
