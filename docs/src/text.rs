//! Text helpers: titles derived from IRIs, fragment ids, language
//! preference among literals.

use std::collections::BTreeSet;

use ontdoc_model::{Node, OutputFormat};
use sha2::{Digest, Sha256};

use crate::graph::OntologyGraph;

/// Derives a display title from the last fragment or path segment of `iri`.
///
/// `camelCase` words are split, `_`, `-` and `.` become spaces and every
/// word is capitalised: `https://x.org/ns#hasPart` gives `Has Part`.
#[must_use]
pub fn title_from_iri(iri: &str) -> String {
    let trimmed = iri.trim_end_matches(['#', '/']);
    let segment = match trimmed.rfind(['#', '/']) {
        Some(i) => &trimmed[i + 1..],
        None => trimmed,
    };

    let mut spaced = String::with_capacity(segment.len() + 4);
    let mut previous: Option<char> = None;
    for c in segment.chars() {
        if matches!(c, '_' | '-' | '.') {
            spaced.push(' ');
        } else {
            if c.is_uppercase() && previous.is_some_and(|p| p.is_lowercase() || p.is_ascii_digit()) {
                spaced.push(' ');
            }
            spaced.push(c);
        }
        previous = Some(c);
    }

    spaced
        .split_whitespace()
        .map(capitalise)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalise(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// A fragment id for an entity titled `title`.
///
/// Lower-cased, whitespace runs become `-`, anything but alphanumerics,
/// `-` and `_` is dropped. Titles that leave nothing behind fall back to a
/// hash of the identifier.
#[must_use]
pub fn make_fid(title: &str, iri: &str) -> String {
    let fid: String = title
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .chars()
        .filter(|c| c.is_alphanumeric() || matches!(c, '-' | '_'))
        .collect();
    if fid.is_empty() {
        let digest = Sha256::digest(iri.as_bytes());
        let hex: String = digest.iter().take(8).map(|b| format!("{b:02x}")).collect();
        format!("fid-{hex}")
    } else {
        fid
    }
}

/// Hands out fragment ids, suffixing `-2`, `-3`, ... on collision.
#[derive(Debug, Default)]
pub struct FidAllocator {
    used: BTreeSet<String>,
}

impl FidAllocator {
    /// An allocator with nothing handed out.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `base` if unused, else the first free suffixed form.
    pub fn allocate(&mut self, base: String) -> String {
        if self.used.insert(base.clone()) {
            return base;
        }
        let mut n = 2usize;
        loop {
            let candidate = format!("{base}-{n}");
            if self.used.insert(candidate.clone()) {
                return candidate;
            }
            n += 1;
        }
    }
}

/// Picks the literal to display among several candidates: one tagged
/// `language` first, then an untagged one, then the first.
#[must_use]
pub fn pick_language<'a>(candidates: &'a [Node], language: &str) -> Option<&'a Node> {
    let tag_of = |n: &Node| n.as_literal().and_then(|l| l.language.clone());
    candidates
        .iter()
        .find(|n| tag_of(n).is_some_and(|t| t.eq_ignore_ascii_case(language)))
        .or_else(|| candidates.iter().find(|n| tag_of(n).is_none()))
        .or_else(|| candidates.first())
}

/// The preferred value of `(subject, predicate, ?)` as text.
#[must_use]
pub fn preferred_text(
    graph: &OntologyGraph,
    subject: &Node,
    predicate: &str,
    language: &str,
) -> Option<String> {
    let candidates = graph.objects(subject, predicate);
    pick_language(&candidates, language).map(|n| n.value().to_string())
}

/// Replaces copyright markers with the copyright glyph.
#[must_use]
pub fn with_copyright_glyph(format: OutputFormat, rights: &str) -> String {
    let glyph = match format {
        OutputFormat::Html => "&copy;",
        OutputFormat::Markdown | OutputFormat::AsciiDoc => "©",
    };
    rights
        .replace("Copyright", glyph)
        .replace("copyright", glyph)
        .replace("(c)", glyph)
}
