//! Discovery of the groups available for comparison, and lookup by name.

use rds_compare::{GroupKind, ParameterGroup};

use crate::error::SourceError;
use crate::source::ParameterSource;

/// List every group: instance groups first, then cluster groups.
pub async fn list_all_groups(
    source: &dyn ParameterSource,
) -> Result<Vec<ParameterGroup>, SourceError> {
    let mut groups = source.list_groups(GroupKind::Instance).await?;
    let instance_count = groups.len();
    groups.extend(source.list_groups(GroupKind::Cluster).await?);

    tracing::info!(
        instance = instance_count,
        cluster = groups.len() - instance_count,
        "discovered parameter groups"
    );
    Ok(groups)
}

/// List the groups available for comparison.
///
/// Fails with `NotEnoughGroups` if fewer than two groups exist, since there
/// would be nothing to compare.
pub async fn discover_groups(
    source: &dyn ParameterSource,
) -> Result<Vec<ParameterGroup>, SourceError> {
    let groups = list_all_groups(source).await?;
    if groups.len() < 2 {
        return Err(SourceError::NotEnoughGroups {
            found: groups.len(),
        });
    }
    Ok(groups)
}

/// Find a group by name, optionally restricted to one kind.
pub fn resolve_group<'a>(
    groups: &'a [ParameterGroup],
    name: &str,
    kind: Option<GroupKind>,
) -> Result<&'a ParameterGroup, SourceError> {
    let mut candidates = groups
        .iter()
        .filter(|g| g.name == name && kind.is_none_or(|k| g.kind == k));

    let found = candidates.next().ok_or_else(|| SourceError::GroupNotFound {
        name: name.to_string(),
    })?;

    if let Some(other) = candidates.find(|g| g.kind != found.kind) {
        return Err(SourceError::AmbiguousGroup {
            name: name.to_string(),
            first: found.kind,
            second: other.kind,
        });
    }
    Ok(found)
}
