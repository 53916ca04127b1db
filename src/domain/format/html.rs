//! HTML converter

use super::{Converter, TAG};

/// Wraps plain text in a paragraph; anything that already looks like
/// markup passes through untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlConverter;

impl Converter for HtmlConverter {
    fn convert(&self, input: &str) -> String {
        if input.is_empty() {
            return String::new();
        }

        if TAG.is_match(input) {
            return input.to_string();
        }

        format!("<p>{}</p>", input.replace('\n', "<br>"))
    }
}
