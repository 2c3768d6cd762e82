use async_trait::async_trait;
use rds_compare::{GroupKind, ParameterGroup, ParameterSet};

use crate::error::SourceError;

/// Where parameter groups and their parameters come from.
#[async_trait]
pub trait ParameterSource: Send + Sync {
    /// List every group of the given kind, in upstream order.
    async fn list_groups(&self, kind: GroupKind) -> Result<Vec<ParameterGroup>, SourceError>;

    /// Fetch all parameters of `group`, in upstream order.
    async fn fetch_parameters(&self, group: &ParameterGroup) -> Result<ParameterSet, SourceError>;
}
