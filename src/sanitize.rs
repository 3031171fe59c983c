//! Plain-text sanitization and lenient number parsing for user-submitted fields.

use once_cell::sync::Lazy;
use regex::Regex;

static SCRIPT_OR_STYLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<(script|style)[^>]*?>.*?</(script|style)\s*>").unwrap());
static TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^<>]*>").unwrap());
static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\r\n\t ]+").unwrap());
static CONTROL: Lazy<Regex> = Lazy::new(|| Regex::new(r"\p{Cc}").unwrap());
static PERCENT_OCTET: Lazy<Regex> = Lazy::new(|| Regex::new(r"%[a-fA-F0-9]{2}").unwrap());
static LEADING_FLOAT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[ \t\n\r\x0B\x0C]*([+-]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?)")
        .unwrap()
});

/// Reduces arbitrary input to a single line of plain text.
///
/// Markup is stripped (script and style blocks together with their contents),
/// a `<` that does not open a tag is kept as `&lt;`, whitespace runs collapse
/// to one space, control characters and percent-encoded octets are dropped,
/// and the result is trimmed.
pub fn sanitize_text(input: &str) -> String {
    let mut text = input.to_string();

    if text.contains('<') {
        text = SCRIPT_OR_STYLE.replace_all(&text, "").into_owned();
        text = TAG.replace_all(&text, "").into_owned();
        text = text.replace('<', "&lt;");
    }

    text = WHITESPACE_RUN.replace_all(&text, " ").into_owned();
    text = CONTROL.replace_all(&text, "").into_owned();

    // Removing one octet can join two halves into a new one
    while PERCENT_OCTET.is_match(&text) {
        text = PERCENT_OCTET.replace_all(&text, "").into_owned();
    }

    text.trim().to_string()
}

/// Parses the leading numeric prefix of `input` the way form values are read:
/// `"0.7"` → 0.7, `"0.7abc"` → 0.7, `"not-a-number"` → 0.0.
pub fn float_val(input: &str) -> f64 {
    LEADING_FLOAT
        .captures(input)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
}

/// Strict variant used for JSON string values: the whole (trimmed) string must be a finite number.
pub fn parse_numeric(input: &str) -> Option<f64> {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_markup_and_trims() {
        assert_eq!(sanitize_text("  <b>bad</b> "), "bad");
        assert_eq!(sanitize_text("<p>great <em>product</em></p>"), "great product");
    }

    #[test]
    fn test_drops_script_contents() {
        assert_eq!(sanitize_text("ok<script>alert('x')</script>"), "ok");
        assert_eq!(sanitize_text("<STYLE>p { color: red }</STYLE>fine"), "fine");
    }

    #[test]
    fn test_lone_less_than_is_escaped() {
        assert_eq!(sanitize_text("3 < 4"), "3 &lt; 4");
    }

    #[test]
    fn test_collapses_whitespace_and_controls() {
        assert_eq!(sanitize_text("line one\n\n\tline\u{7}two"), "line one linetwo");
    }

    #[test]
    fn test_removes_percent_octets() {
        assert_eq!(sanitize_text("100%25 sure"), "100 sure");
        assert_eq!(sanitize_text("%%2525"), "");
    }

    #[test]
    fn test_markup_only_is_empty() {
        assert_eq!(sanitize_text("<br/><img src=x>"), "");
        assert_eq!(sanitize_text("   "), "");
    }

    #[test]
    fn test_float_val() {
        assert_eq!(float_val("0.7"), 0.7);
        assert_eq!(float_val(" 0.3 "), 0.3);
        assert_eq!(float_val("0.9abc"), 0.9);
        assert_eq!(float_val(".5"), 0.5);
        assert_eq!(float_val("-2e1"), -20.0);
        assert_eq!(float_val("not-a-number"), 0.0);
        assert_eq!(float_val(""), 0.0);
    }

    #[test]
    fn test_parse_numeric() {
        assert_eq!(parse_numeric("0.9"), Some(0.9));
        assert_eq!(parse_numeric(" 1 "), Some(1.0));
        assert_eq!(parse_numeric("0.9abc"), None);
        assert_eq!(parse_numeric("inf"), None);
        assert_eq!(parse_numeric("NaN"), None);
    }
}
