//! In-memory `ParameterSource`, loadable from a JSON fixture.
//!
//! Data is served in pages through the same pagination path as the RDS
//! source, so a small page size exercises multi-page listings.

use std::path::Path;

use async_trait::async_trait;
use rds_compare::{GroupKind, Parameter, ParameterGroup, ParameterSet};
use serde::{Deserialize, Serialize};

use crate::error::SourceError;
use crate::paging::{Page, collect_pages};
use crate::source::ParameterSource;

/// Default number of items per page, matching the RDS API default.
pub const DEFAULT_PAGE_SIZE: usize = 100;

/// Fixture file layout.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Fixture {
    pub groups: Vec<FixtureGroup>,
}

/// One group in a fixture file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureGroup {
    pub name: String,
    pub kind: GroupKind,
    #[serde(default)]
    pub parameters: Vec<Parameter>,
}

/// Parameter groups held in memory.
#[derive(Debug, Clone)]
pub struct MemorySource {
    sets: Vec<ParameterSet>,
    page_size: usize,
}

impl MemorySource {
    pub fn new(sets: Vec<ParameterSet>) -> Self {
        Self {
            sets,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Serve listings `page_size` items at a time (minimum 1).
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    pub fn from_fixture(fixture: Fixture) -> Self {
        let sets = fixture
            .groups
            .into_iter()
            .map(|g| ParameterSet::from_parameters(ParameterGroup::new(g.name, g.kind), g.parameters))
            .collect();
        Self::new(sets)
    }

    /// Load a fixture from a JSON file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, SourceError> {
        let content = std::fs::read_to_string(path)?;
        let fixture: Fixture = serde_json::from_str(&content)?;
        Ok(Self::from_fixture(fixture))
    }

    fn find(&self, group: &ParameterGroup) -> Result<&ParameterSet, SourceError> {
        self.sets
            .iter()
            .find(|s| s.group() == group)
            .ok_or_else(|| SourceError::GroupNotFound {
                name: group.name.clone(),
            })
    }
}

fn page_of<T: Clone>(
    items: &[T],
    marker: Option<String>,
    page_size: usize,
) -> Result<Page<T>, SourceError> {
    let start = match marker {
        None => 0,
        Some(m) => m.parse::<usize>().map_err(|_| SourceError::Api {
            operation: "MemorySource",
            message: format!("invalid marker {:?}", m),
        })?,
    };
    let start = start.min(items.len());
    let end = (start + page_size).min(items.len());
    Ok(Page {
        items: items[start..end].to_vec(),
        marker: (end < items.len()).then(|| end.to_string()),
    })
}

#[async_trait]
impl ParameterSource for MemorySource {
    async fn list_groups(&self, kind: GroupKind) -> Result<Vec<ParameterGroup>, SourceError> {
        let groups: Vec<ParameterGroup> = self
            .sets
            .iter()
            .map(|s| s.group().clone())
            .filter(|g| g.kind == kind)
            .collect();
        collect_pages(|marker| {
            let page = page_of(&groups, marker, self.page_size);
            async move { page }
        })
        .await
    }

    async fn fetch_parameters(&self, group: &ParameterGroup) -> Result<ParameterSet, SourceError> {
        let set = self.find(group)?;
        let params = collect_pages(|marker| {
            let page = page_of(set.parameters(), marker, self.page_size);
            async move { page }
        })
        .await?;
        Ok(ParameterSet::from_parameters(group.clone(), params))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_of_slices() {
        let items = [1, 2, 3, 4, 5];
        let first = page_of(&items, None, 2).unwrap();
        assert_eq!(first.items, vec![1, 2]);
        assert_eq!(first.marker.as_deref(), Some("2"));

        let last = page_of(&items, Some("4".into()), 2).unwrap();
        assert_eq!(last.items, vec![5]);
        assert_eq!(last.marker, None);

        let empty: Page<i32> = page_of(&[], None, 2).unwrap();
        assert!(empty.items.is_empty());
        assert_eq!(empty.marker, None);
    }

    #[test]
    fn test_page_of_rejects_garbage_marker() {
        assert!(page_of(&[1], Some("abc".into()), 1).is_err());
    }

    #[test]
    fn test_fixture_parses_null_and_missing_values() {
        let json = r#"{
            "groups": [
                {
                    "name": "pg",
                    "kind": "instance",
                    "parameters": [
                        { "name": "a", "value": "1" },
                        { "name": "b", "value": null },
                        { "name": "c" }
                    ]
                },
                { "name": "aurora", "kind": "db-cluster-parameter-group" }
            ]
        }"#;
        let fixture: Fixture = serde_json::from_str(json).unwrap();
        assert_eq!(fixture.groups.len(), 2);
        assert_eq!(fixture.groups[0].kind, GroupKind::Instance);
        assert_eq!(fixture.groups[0].parameters[1].value, None);
        assert_eq!(fixture.groups[0].parameters[2].value, None);
        assert!(fixture.groups[1].parameters.is_empty());
    }
}
