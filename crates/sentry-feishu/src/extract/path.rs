//! Nested-path resolver
//!
//! Looks a value up in an untyped JSON tree by trying dotted paths in
//! priority order. Lookups never fail loudly: a path that hits a missing
//! key, a type mismatch or an out-of-range index is abandoned and the next
//! candidate is tried.

use serde_json::Value;

/// Resolve the first candidate path that leads to a non-null value
///
/// Path segments are interpreted against the node they are applied to:
/// - a numeral (`0`, `-1`) indexes a sequence, negative counting from the end
/// - any other segment looks up a key in a mapping
/// - a non-numeral segment applied to a sequence looks the key up in the
///   sequence's first element. This accommodates payloads that wrap single
///   objects in a list; new paths should not rely on it.
pub fn resolve<'a>(doc: &'a Value, paths: &[&str]) -> Option<&'a Value> {
    paths.iter().find_map(|path| walk(doc, path))
}

fn walk<'a>(doc: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = doc;
    for segment in path.split('.') {
        current = step(current, segment)?;
    }
    (!current.is_null()).then_some(current)
}

fn step<'a>(node: &'a Value, segment: &str) -> Option<&'a Value> {
    match node {
        Value::Array(items) if is_numeral(segment) => element_at(items, segment.parse().ok()?),
        Value::Array(items) => items.first()?.as_object()?.get(segment),
        Value::Object(map) => map.get(segment),
        _ => None,
    }
}

/// Numerals always index; one too large for `i64` is out of range
fn is_numeral(segment: &str) -> bool {
    let digits = segment.strip_prefix('-').unwrap_or(segment);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

fn element_at(items: &[Value], index: i64) -> Option<&Value> {
    if index >= 0 {
        return items.get(usize::try_from(index).ok()?);
    }
    let back = usize::try_from(index.unsigned_abs()).ok()?;
    items.len().checked_sub(back).and_then(|i| items.get(i))
}
