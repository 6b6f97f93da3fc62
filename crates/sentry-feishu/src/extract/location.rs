//! Location builder
//!
//! Composes a "where did it fail" line from whichever of culprit, location,
//! stack frames and metadata the payload carries.

use serde_json::{Map, Value};

use super::path::resolve;
use super::text::{display, field_text, is_truthy, resolve_text, UNKNOWN};

const FRAME_PATHS: &[&str] = &[
    "exception.values.0.stacktrace.frames",
    "stacktrace.frames",
    "entries.0.data.values.0.stacktrace.frames",
    "data.error.exception.values.0.stacktrace.frames",
];

const UNKNOWN_FILE: &str = "Unknown file";
const UNKNOWN_FUNCTION: &str = "Unknown function";

/// Build a never-empty description of the failing code location
pub fn build_location(doc: &Value) -> String {
    let culprit = resolve_text(doc, &["culprit"]);
    let location = resolve_text(doc, &["location"]);
    let frame = target_frame(doc);
    let line_no = frame.and_then(|f| field_text(f, "lineno"));

    if let Some(location) = location.as_deref().filter(|l| *l != UNKNOWN) {
        if let Some(line) = &line_no {
            if location.contains(line.as_str()) {
                return location.to_string();
            }
        }
        if location.contains(['/', '\\', '.']) {
            return with_line(location, line_no.as_deref());
        }
        if let Some(culprit) = culprit.as_deref().filter(|c| *c != location) {
            return with_line(&format!("{culprit} ({location})"), line_no.as_deref());
        }
    }

    if let Some(frame) = frame {
        let filename = field_text(frame, "filename").filter(|name| name.as_str() != UNKNOWN_FILE);
        if let Some(filename) = filename {
            let function = frame_text(frame, "function", UNKNOWN_FUNCTION);
            return with_line(&format!("{filename} in {function}"), line_no.as_deref());
        }
    }

    if let Some(filename) = resolve_text(doc, &["metadata.filename", "metadata.abs_path"]) {
        let line = resolve_text(doc, &["metadata.lineno", "metadata.line"]).or(line_no.clone());
        let function = resolve_text(doc, &["metadata.function", "metadata.module"])
            .unwrap_or_else(|| UNKNOWN_FUNCTION.to_string());
        return with_line(&format!("{filename} in {function}"), line.as_deref());
    }

    if let Some(culprit) = culprit
        .as_deref()
        .filter(|c| *c != UNKNOWN && *c != "root /")
    {
        return match &line_no {
            Some(line) if !mentions_line(culprit, line) => format!("{culprit} at line {line}"),
            _ => culprit.to_string(),
        };
    }

    if let Some(location) = location.as_deref().filter(|l| *l != UNKNOWN) {
        return with_line(location, line_no.as_deref());
    }

    with_line("Unknown location", line_no.as_deref())
}

/// The frame closest to the failure, preferring application code
///
/// Scans from the end for a frame flagged `in_app`; otherwise the last
/// frame, provided it is a mapping.
pub fn target_frame(doc: &Value) -> Option<&Map<String, Value>> {
    let frames = resolve(doc, FRAME_PATHS)?.as_array()?;
    frames
        .iter()
        .rev()
        .filter_map(Value::as_object)
        .find(|frame| frame.get("in_app").is_some_and(is_truthy))
        .or_else(|| frames.last().and_then(Value::as_object))
}

fn frame_text(frame: &Map<String, Value>, key: &str, sentinel: &str) -> String {
    match frame.get(key) {
        Some(Value::Null) | None => sentinel.to_string(),
        Some(value) => display(value),
    }
}

fn with_line(base: &str, line: Option<&str>) -> String {
    match line {
        Some(line) => format!("{base} at line {line}"),
        None => base.to_string(),
    }
}

fn mentions_line(text: &str, line: &str) -> bool {
    [
        format!("line {line}"),
        format!(":{line}"),
        format!(" at {line}"),
        format!("#{line}"),
    ]
    .iter()
    .any(|marker| text.contains(marker.as_str()))
}
