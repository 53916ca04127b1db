//! Markdown converter
//!
//! Substitutions run in a fixed order: links, bold, italic, headers, then
//! any remaining tag is dropped. Whitespace uses the compact policy: every
//! run collapses to one space, so paragraph and line-break markup is not
//! translated into newlines.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use super::{collapse_whitespace, Converter, TAG};

static LINK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)<a[^>]*href=["']([^"']*)["'][^>]*>([^<]*)</a>"#).unwrap()
});

static BOLD: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)</?(strong|b)>").unwrap());

static ITALIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)</?(em|i)>").unwrap());

static HEADER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)<h([1-6])[^>]*>([^<]*)</h[1-6]>").unwrap());

/// Best-effort HTML to Markdown
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownConverter;

impl Converter for MarkdownConverter {
    fn convert(&self, input: &str) -> String {
        if input.is_empty() {
            return String::new();
        }

        let markdown = LINK.replace_all(input, "[${2}](${1})");
        let markdown = BOLD.replace_all(&markdown, "**");
        let markdown = ITALIC.replace_all(&markdown, "*");
        let markdown = HEADER.replace_all(&markdown, |caps: &Captures<'_>| {
            let level = caps[1].parse::<usize>().unwrap_or(1);
            format!("{} {}", "#".repeat(level), &caps[2])
        });
        let markdown = TAG.replace_all(&markdown, "");

        collapse_whitespace(&markdown)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn convert(input: &str) -> String {
        MarkdownConverter.convert(input)
    }

    #[test]
    fn empty_input() {
        assert_eq!(convert(""), "");
    }

    #[test]
    fn bold_and_italic() {
        assert_eq!(convert("<b>Hello</b> <i>World</i>"), "**Hello** *World*");
        assert_eq!(convert("<STRONG>a</STRONG><em>b</em>"), "**a***b*");
    }

    #[test]
    fn links_keep_href_verbatim() {
        assert_eq!(
            convert(r#"see <a class="x" href="https://example.com/a?b=1">docs</a>"#),
            "see [docs](https://example.com/a?b=1)"
        );
        assert_eq!(convert("<A HREF='/rel'>rel</A>"), "[rel](/rel)");
    }

    #[test]
    fn link_with_markup_inside_is_not_converted() {
        assert_eq!(convert(r#"<a href="/x"><b>bold</b></a>"#), "**bold**");
    }

    #[test]
    fn headers_by_level() {
        assert_eq!(convert("<h1>Title</h1>"), "# Title");
        assert_eq!(convert(r#"<h3 id="s">Section</h3>"#), "### Section");
        assert_eq!(convert("<h6>Deep</h6>"), "###### Deep");
    }

    #[test]
    fn paragraphs_collapse_to_spaces() {
        assert_eq!(
            convert("<p>first</p>\n\n\n<p>second<br>\nthird</p>"),
            "first second third"
        );
    }

    #[test]
    fn plain_text_passes_through() {
        assert_eq!(convert("no markup here"), "no markup here");
    }

    #[test]
    fn unknown_tags_are_stripped() {
        assert_eq!(convert("<span>x</span> <div>y</div>"), "x y");
    }
}
