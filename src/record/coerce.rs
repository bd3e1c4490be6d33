//! Field coercion rules for untyped metadata values.
//!
//! | Kind    | Accepted                                               |
//! |---------|--------------------------------------------------------|
//! | text    | YAML string                                            |
//! | label   | YAML string or number (required identifiers)           |
//! | count   | non-negative integer, integral float, or such a string |
//! | set     | sequence; non-string items dropped, duplicates dropped |
//!
//! Every function is total: anything unexpected becomes `None`.

use serde_yaml::Value;

/// String value, or `None` for any other type.
pub fn text(value: Option<&Value>) -> Option<String> {
    value.and_then(Value::as_str).map(str::to_owned)
}

/// String or scalar number rendered as text.
///
/// YAML reads `slug: 2024` as a number; identifiers accept it as text.
pub fn label(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Non-negative whole number from a number or a numeric string.
pub fn count(value: Option<&Value>) -> Option<u64> {
    match value? {
        Value::Number(n) => n.as_u64().or_else(|| n.as_f64().and_then(whole)),
        Value::String(s) => parse_count(s),
        _ => None,
    }
}

/// Sequence of strings with duplicates removed, first occurrence kept.
///
/// An empty result is reported as `None`.
pub fn string_set(value: Option<&Value>) -> Option<Vec<String>> {
    let Value::Sequence(items) = value? else {
        return None;
    };

    let mut set: Vec<String> = Vec::with_capacity(items.len());
    for item in items.iter().filter_map(Value::as_str) {
        if !set.iter().any(|existing| existing == item) {
            set.push(item.to_owned());
        }
    }

    (!set.is_empty()).then_some(set)
}

fn parse_count(s: &str) -> Option<u64> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    s.parse::<u64>()
        .ok()
        .or_else(|| s.parse::<f64>().ok().and_then(whole))
}

/// `f` as `u64` when it is finite, non-negative and has no fraction.
fn whole(f: f64) -> Option<u64> {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let n = f as u64;
    (f.is_finite() && f >= 0.0 && f.fract() == 0.0 && f <= u64::MAX as f64).then_some(n)
}
