//! ProjectRef - a project identifier as configured or as seen on a payload

use serde_json::Value;

/// Project identifier, either a numeric ID or a name/slug
///
/// Numeral strings are always classified as `IntId`, so `"42"` and `42`
/// compare equal wherever they come from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ProjectRef {
    IntId(i64),
    NameId(String),
}

impl ProjectRef {
    /// Classify a text identifier
    pub fn parse(raw: &str) -> Self {
        if !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit()) {
            if let Ok(id) = raw.parse::<i64>() {
                return Self::IntId(id);
            }
        }
        Self::NameId(raw.to_string())
    }

    /// Classify a JSON scalar; containers, booleans and null have no identity
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) => Some(Self::parse(s)),
            Value::Number(n) => n
                .as_i64()
                .or_else(|| n.as_f64().and_then(integral))
                .map(Self::IntId),
            _ => None,
        }
    }
}

/// Whole floats inside the `i64` range; anything else has no ID
fn integral(f: f64) -> Option<i64> {
    // i64::MAX as f64 rounds up to 2^63, hence the exclusive bound
    let in_range = f >= i64::MIN as f64 && f < i64::MAX as f64;
    (f.fract() == 0.0 && in_range).then_some(f as i64)
}

impl std::fmt::Display for ProjectRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IntId(id) => write!(f, "{}", id),
            Self::NameId(name) => write!(f, "{}", name),
        }
    }
}
