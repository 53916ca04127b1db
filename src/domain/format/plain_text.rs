//! Plain-text converter

use once_cell::sync::Lazy;
use regex::Regex;

use super::{collapse_whitespace, Converter, TAG};

/// Unpaired angle brackets left over after tag stripping
static STRAY_DELIMITER: Lazy<Regex> = Lazy::new(|| Regex::new(r"[<>]").unwrap());

/// Strips markup and flattens whitespace.
///
/// Works on the raw string only, so the result is the same with or without
/// a rendering environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextConverter;

impl Converter for PlainTextConverter {
    fn convert(&self, input: &str) -> String {
        if input.is_empty() {
            return String::new();
        }

        let text = TAG.replace_all(input, "");
        let text = STRAY_DELIMITER.replace_all(&text, "");
        collapse_whitespace(&text)
    }
}
