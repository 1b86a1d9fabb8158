//! Text formatting shared by the renderers.

use std::borrow::Cow;

/// Format a float the way attribute values are expected to read.
///
/// Shortest round-trip digits, no trailing `.0`. Decimal exponents below -4
/// or from 6 upwards switch to exponent notation with a signed, at least
/// two-digit exponent (`1e+06`, `1.5e-07`).
pub fn format_float(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "+Inf" } else { "-Inf" }.to_string();
    }

    let scientific = format!("{value:e}");
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return value.to_string();
    };
    let exponent: i32 = exponent.parse().unwrap_or_default();

    if value != 0.0 && !(-4..6).contains(&exponent) {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{mantissa}e{sign}{:02}", exponent.unsigned_abs())
    } else {
        value.to_string()
    }
}

/// Escape the five HTML-significant characters.
///
/// `&` → `&amp;`, `'` → `&#39;`, `<` → `&lt;`, `>` → `&gt;`, `"` → `&#34;`.
/// Returns the input unchanged when nothing needs escaping.
pub fn escape_html(s: &str) -> Cow<'_, str> {
    if !s.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(s);
    }

    let mut escaped = String::with_capacity(s.len() + 8);
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '\'' => escaped.push_str("&#39;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&#34;"),
            _ => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}
