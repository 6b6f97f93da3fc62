//! IgnoreList - projects whose issues are never forwarded
//!
//! Loaded once at startup and shared read-only across requests.

use serde_json::Value;
use tracing::warn;

use crate::domain::value_objects::ProjectRef;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IgnoreList {
    entries: Vec<ProjectRef>,
}

impl IgnoreList {
    pub fn new(entries: Vec<ProjectRef>) -> Self {
        Self { entries }
    }

    /// Parse a JSON array (`[42, "my-project"]`) or a comma-separated list
    /// (`42, my-project`). A malformed array yields an empty list.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.starts_with('[') && raw.ends_with(']') {
            return match serde_json::from_str::<Vec<Value>>(raw) {
                Ok(items) => Self::new(
                    items
                        .iter()
                        .filter_map(|item| {
                            let entry = ProjectRef::from_value(item);
                            if entry.is_none() {
                                warn!(item = %item, "Skipping unsupported ignore list entry");
                            }
                            entry
                        })
                        .collect(),
                ),
                Err(e) => {
                    warn!(error = %e, "Failed to parse ignore list, using empty list");
                    Self::default()
                }
            };
        }

        Self::new(
            raw.split(',')
                .map(|item| item.trim().trim_matches(|c| c == '"' || c == '\''))
                .filter(|item| !item.is_empty())
                .map(ProjectRef::parse)
                .collect(),
        )
    }

    pub fn entries(&self) -> &[ProjectRef] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Test a payload's `project` value against every entry
    ///
    /// A mapping is matched on its `id` and on its `name` (or `slug` when
    /// there is no `name` key); a scalar is matched directly.
    pub fn matches(&self, project: &Value) -> bool {
        if self.entries.is_empty() {
            return false;
        }

        let candidates: Vec<ProjectRef> = match project {
            Value::Object(map) => [
                map.get("id"),
                map.get("name").or_else(|| map.get("slug")),
            ]
            .into_iter()
            .flatten()
            .filter_map(ProjectRef::from_value)
            .collect(),
            scalar => ProjectRef::from_value(scalar).into_iter().collect(),
        };

        self.entries
            .iter()
            .any(|entry| candidates.iter().any(|candidate| candidate == entry))
    }
}

impl std::fmt::Display for IgnoreList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let entries: Vec<String> = self.entries.iter().map(|e| e.to_string()).collect();
        write!(f, "[{}]", entries.join(", "))
    }
}
