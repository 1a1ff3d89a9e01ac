//! Format-specific markup primitives: links, anchors, code blocks, images
//! and kind superscripts for HTML, Markdown and AsciiDoc.
//!
//! Everything that differs between the three targets at the level of a
//! single inline element lives here; templates only arrange blocks.

use ontdoc_model::{OutputFormat, RefKind};
use pulldown_cmark::{html, Options, Parser};

/// Escapes HTML special characters in a string.
#[must_use]
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Converts Markdown to HTML using pulldown-cmark.
#[must_use]
pub fn markdown_to_html(markdown: &str) -> String {
    let mut opts = Options::empty();
    opts.insert(Options::ENABLE_TABLES);
    opts.insert(Options::ENABLE_FOOTNOTES);
    opts.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(markdown, opts);
    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);
    html_output
}

/// Plain text made safe for `format`. Only HTML needs escaping.
#[must_use]
pub fn text(format: OutputFormat, s: &str) -> String {
    match format {
        OutputFormat::Html => escape_html(s),
        OutputFormat::Markdown | OutputFormat::AsciiDoc => s.to_string(),
    }
}

/// Descriptive text: Markdown becomes HTML for the rich target, the plain
/// targets get the source text unchanged.
#[must_use]
pub fn rich_text(format: OutputFormat, s: &str) -> String {
    if format.is_rich_markup() {
        markdown_to_html(s)
    } else {
        s.to_string()
    }
}

/// A hyperlink. `label` is inserted as-is and must already be formatted.
#[must_use]
pub fn link(format: OutputFormat, href: &str, label: &str) -> String {
    match format {
        OutputFormat::Html => format!("<a href=\"{}\">{label}</a>", escape_html(href)),
        OutputFormat::Markdown => format!("[{label}]({href})"),
        OutputFormat::AsciiDoc => format!("link:{href}[{label}]"),
    }
}

/// A link to an anchor in the same document.
#[must_use]
pub fn anchor_link(format: OutputFormat, fid: &str, title: &str) -> String {
    link(format, &format!("#{fid}"), &text(format, title))
}

/// The superscript marking a reference's kind.
#[must_use]
pub fn kind_suffix(format: OutputFormat, kind: RefKind) -> String {
    let code = kind.code();
    match format {
        OutputFormat::Html => format!(
            "<sup class=\"sup-{code}\" title=\"{}\">{code}</sup>",
            kind.description()
        ),
        OutputFormat::Markdown => format!(" ({code})"),
        OutputFormat::AsciiDoc => format!(" ^{code}^"),
    }
}

/// Preformatted code.
#[must_use]
pub fn code(format: OutputFormat, source: &str) -> String {
    match format {
        OutputFormat::Html => format!("<pre>{}</pre>", escape_html(source)),
        OutputFormat::Markdown => source
            .trim_end()
            .replace('\t', "    ")
            .lines()
            .map(|line| format!("`{line}` <br /> "))
            .collect(),
        OutputFormat::AsciiDoc => format!("....\n{source}\n....\n\n"),
    }
}

/// An embedded image.
#[must_use]
pub fn image(format: OutputFormat, src: &str) -> String {
    match format {
        OutputFormat::Html => format!("<img src=\"{}\" />", escape_html(src)),
        OutputFormat::Markdown => format!("![]({src}) "),
        OutputFormat::AsciiDoc => format!("image::{src}[]"),
    }
}

/// Raw HTML embedded in the document.
#[must_use]
pub fn raw_html(format: OutputFormat, html: &str) -> String {
    match format {
        OutputFormat::Html | OutputFormat::Markdown => html.to_string(),
        OutputFormat::AsciiDoc => format!("+++{html}+++\n&nbsp;"),
    }
}

/// Strips markup down to the text a reader sees, for sorting.
///
/// Handles the shapes produced by this module: HTML tags, `[label](href)`
/// and `link:href[label]`.
#[must_use]
pub fn visible_text(rendered: &str) -> String {
    let mut out = String::with_capacity(rendered.len());
    let mut rest = rendered;
    while let Some(c) = rest.chars().next() {
        if c == '<' {
            if let Some(end) = rest.find('>') {
                let tag = &rest[..=end];
                rest = &rest[end + 1..];
                if tag.starts_with("<sup") {
                    if let Some(close) = rest.find("</sup>") {
                        rest = &rest[close + "</sup>".len()..];
                    }
                }
                continue;
            }
        }
        if c == '[' {
            if let Some(close) = rest.find("](") {
                if let Some(end) = rest[close..].find(')') {
                    out.push_str(&rest[1..close]);
                    rest = &rest[close + end + 1..];
                    continue;
                }
            }
        }
        if let Some(tail) = rest.strip_prefix("link:") {
            if let (Some(open), Some(close)) = (tail.find('['), tail.find(']')) {
                if open < close {
                    out.push_str(&tail[open + 1..close]);
                    rest = &tail[close + 1..];
                    continue;
                }
            }
        }
        out.push(c);
        rest = &rest[c.len_utf8()..];
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use ontdoc_model::PropertyKind;

    #[test]
    fn links_per_format() {
        assert_eq!(
            link(OutputFormat::Html, "https://x.org/a?b&c", "A"),
            "<a href=\"https://x.org/a?b&amp;c\">A</a>"
        );
        assert_eq!(link(OutputFormat::Markdown, "#a", "A"), "[A](#a)");
        assert_eq!(link(OutputFormat::AsciiDoc, "#a", "A"), "link:#a[A]");
    }

    #[test]
    fn anchor_titles_are_escaped_in_html() {
        assert_eq!(
            anchor_link(OutputFormat::Html, "a-b", "A<B>"),
            "<a href=\"#a-b\">A&lt;B&gt;</a>"
        );
    }

    #[test]
    fn suffixes_per_format() {
        let kind = RefKind::Property(PropertyKind::Object);
        assert_eq!(kind_suffix(OutputFormat::Markdown, kind), " (op)");
        assert_eq!(kind_suffix(OutputFormat::AsciiDoc, RefKind::Class), " ^c^");
        assert_eq!(
            kind_suffix(OutputFormat::Html, RefKind::Class),
            "<sup class=\"sup-c\" title=\"class\">c</sup>"
        );
    }

    #[test]
    fn code_blocks() {
        assert_eq!(code(OutputFormat::Html, "<a>"), "<pre>&lt;a&gt;</pre>");
        assert_eq!(
            code(OutputFormat::Markdown, "x\n\ty\n"),
            "`x` <br /> `    y` <br /> "
        );
        assert_eq!(code(OutputFormat::AsciiDoc, "x"), "....\nx\n....\n\n");
    }

    #[test]
    fn rich_text_only_converts_for_html() {
        assert_eq!(rich_text(OutputFormat::Html, "*a*"), "<p><em>a</em></p>\n");
        assert_eq!(rich_text(OutputFormat::Markdown, "*a*"), "*a*");
    }

    #[test]
    fn visible_text_strips_every_link_shape() {
        assert_eq!(
            visible_text("<a href=\"#x\">Item 2</a><sup class=\"sup-c\" title=\"class\">c</sup>"),
            "Item 2"
        );
        assert_eq!(visible_text("[Item 10](#item-10) (c)"), "Item 10 (c)");
        assert_eq!(visible_text("link:#i[Item 1]"), "Item 1");
        assert_eq!(visible_text("(a or b)"), "(a or b)");
    }
}
