//! JSON converter

use serde::de::{Deserialize, IgnoredAny};
use serde_json::json;

use super::Converter;

/// Keeps valid JSON verbatim and wraps anything else as `{"text": ...}`
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonConverter;

impl Converter for JsonConverter {
    fn convert(&self, input: &str) -> String {
        if input.is_empty() {
            return "{}".to_string();
        }

        if is_json(input) {
            return input.to_string();
        }

        serde_json::to_string_pretty(&json!({ "text": input.trim() }))
            .unwrap_or_else(|_| "{}".to_string())
    }
}

/// Grammar check only. The value is skipped rather than built, so deep
/// nesting, huge numbers and unpaired surrogate escapes all pass.
fn is_json(input: &str) -> bool {
    let mut de = serde_json::Deserializer::from_str(input);
    IgnoredAny::deserialize(&mut de).is_ok() && de.end().is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn convert(input: &str) -> String {
        JsonConverter.convert(input)
    }

    #[test]
    fn empty_input_is_empty_object() {
        assert_eq!(convert(""), "{}");
    }

    #[test]
    fn valid_json_is_returned_verbatim() {
        let input = "{ \"a\" :1,\n\"b\":[true, null] }";
        assert_eq!(convert(input), input);
        assert_eq!(convert("42"), "42");
        assert_eq!(convert("\"quoted\""), "\"quoted\"");
    }

    #[test]
    fn deep_nesting_is_returned_verbatim() {
        let input = format!("{}{}", "[".repeat(200), "]".repeat(200));
        assert_eq!(convert(&input), input);

        let objects = format!("{}1{}", "{\"a\":".repeat(300), "}".repeat(300));
        assert_eq!(convert(&objects), objects);
    }

    #[test]
    fn lone_surrogate_escape_is_returned_verbatim() {
        assert_eq!(convert(r#""\ud800""#), r#""\ud800""#);
        assert_eq!(convert(r#"{"k": "\udc00x"}"#), r#"{"k": "\udc00x"}"#);
    }

    #[test]
    fn out_of_range_numbers_are_returned_verbatim() {
        assert_eq!(convert("1e400"), "1e400");
        let wide = "[-1e400, 123456789012345678901234567890]";
        assert_eq!(convert(wide), wide);
    }

    #[test]
    fn grammar_errors_are_still_wrapped() {
        for input in ["[1,]", "{\"a\" 1}", "\"\\x\"", "01", "1e", "[1] 2", "nul"] {
            let parsed: Value = serde_json::from_str(&convert(input)).unwrap();
            assert_eq!(parsed["text"], input, "{} should have been wrapped", input);
        }
    }

    #[test]
    fn text_is_wrapped_and_trimmed() {
        assert_eq!(convert("  hello world \n"), "{\n  \"text\": \"hello world\"\n}");
    }

    #[test]
    fn special_characters_are_escaped() {
        assert_eq!(
            convert("say \"hi\"\nthen go"),
            "{\n  \"text\": \"say \\\"hi\\\"\\nthen go\"\n}"
        );
    }

    #[test]
    fn broken_json_falls_back_to_wrapping() {
        let out = convert("{\"a\": 1");
        let parsed: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed["text"], "{\"a\": 1");
    }
}
