//! Text cleaning applied before format conversion

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use url::Url;

use super::format::{collapse_whitespace, WHITESPACE};

/// Zero-width space, non-joiner, joiner and the byte-order mark
static INVISIBLE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\x{200B}-\x{200D}\x{FEFF}]").unwrap());

static ABSOLUTE_URL: Lazy<Regex> = Lazy::new(|| Regex::new(r"https?://\S+").unwrap());

static SCRIPT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?is)<script[^>]*>.*?</script>").unwrap());

static STYLE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?is)<style[^>]*>.*?</style>").unwrap());

static COMMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)<!--.*?-->").unwrap());

static NOISY_ATTRIBUTE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"\s(data-[^=]*="[^"]*"|on[^=]*="[^"]*")"#).unwrap());

/// Normalize selected text: drop invisible characters, flatten whitespace
/// and shorten absolute URLs to `host/path`.
pub fn clean_text(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let cleaned = INVISIBLE.replace_all(text, "");
    let cleaned = WHITESPACE.replace_all(&cleaned, " ");
    let cleaned = ABSOLUTE_URL.replace_all(&cleaned, |caps: &Captures<'_>| shorten_url(&caps[0]));

    cleaned.trim().to_string()
}

/// Sanitize an HTML fragment while keeping its tags: removes scripts,
/// styles, comments, `data-*` and `on*` attributes.
pub fn clean_html(html: &str) -> String {
    if html.is_empty() {
        return String::new();
    }

    let html = SCRIPT.replace_all(html, "");
    let html = STYLE.replace_all(&html, "");
    let html = COMMENT.replace_all(&html, "");
    let html = NOISY_ATTRIBUTE.replace_all(&html, "");

    collapse_whitespace(&html)
}

/// `https://host/path?q#f` -> `host/path`, or the input when it does not parse
fn shorten_url(raw: &str) -> String {
    match Url::parse(raw) {
        Ok(url) => match url.host_str() {
            Some(host) => format!("{}{}", host, url.path()),
            None => raw.to_string(),
        },
        Err(_) => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_text_empty() {
        assert_eq!(clean_text(""), "");
    }

    #[test]
    fn removes_zero_width_characters() {
        assert_eq!(clean_text("a\u{200B}b\u{200C}c\u{200D}d\u{FEFF}e"), "abcde");
    }

    #[test]
    fn collapses_whitespace() {
        assert_eq!(clean_text("  one \n\n two\tthree  "), "one two three");
    }

    #[test]
    fn shortens_urls() {
        assert_eq!(
            clean_text("read https://Example.com/docs/page?ref=abc#top now"),
            "read example.com/docs/page now"
        );
        assert_eq!(clean_text("http://example.com"), "example.com/");
    }

    #[test]
    fn drops_port_and_credentials() {
        assert_eq!(
            clean_text("https://user:pw@example.com:8443/a/b"),
            "example.com/a/b"
        );
    }

    #[test]
    fn leaves_unparseable_url() {
        assert_eq!(clean_text("go to http://[broken"), "go to http://[broken");
    }

    #[test]
    fn clean_html_empty() {
        assert_eq!(clean_html(""), "");
    }

    #[test]
    fn clean_html_removes_scripts_and_styles() {
        let html = "<p>keep</p><SCRIPT type=\"x\">\nalert(1)\n</SCRIPT><style>p{}</style><b>also</b>";
        assert_eq!(clean_html(html), "<p>keep</p><b>also</b>");
    }

    #[test]
    fn clean_html_is_non_greedy() {
        let html = "<script>a</script>mid<script>b</script>";
        assert_eq!(clean_html(html), "mid");
    }

    #[test]
    fn clean_html_removes_comments() {
        assert_eq!(clean_html("a<!-- note\nmore -->b"), "ab");
    }

    #[test]
    fn clean_html_strips_data_and_event_attributes() {
        assert_eq!(
            clean_html(r#"<div class="c" data-id="7" onclick="go()">x</div>"#),
            r#"<div class="c">x</div>"#
        );
    }

    #[test]
    fn clean_html_collapses_whitespace() {
        assert_eq!(clean_html("  <p>\n  a   b\n</p>  "), "<p> a b </p>");
    }
}
