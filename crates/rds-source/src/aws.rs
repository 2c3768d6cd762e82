//! `ParameterSource` backed by the RDS API.
//!
//! The client is built by the caller and handed in, so region, profile and
//! credentials are resolved once for the whole run.

use async_trait::async_trait;
use aws_sdk_rds::Client;
use aws_sdk_rds::error::DisplayErrorContext;
use rds_compare::{GroupKind, Parameter, ParameterGroup, ParameterSet};

use crate::error::SourceError;
use crate::paging::{Page, collect_pages};
use crate::source::ParameterSource;

/// Reads parameter groups through an injected RDS client.
#[derive(Debug, Clone)]
pub struct RdsSource {
    client: Client,
}

impl RdsSource {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    async fn instance_groups(&self) -> Result<Vec<ParameterGroup>, SourceError> {
        let client = &self.client;
        collect_pages(|marker| async move {
            let out = client
                .describe_db_parameter_groups()
                .set_marker(marker)
                .send()
                .await
                .map_err(|e| api_error("DescribeDBParameterGroups", e))?;

            let items = out
                .db_parameter_groups()
                .iter()
                .filter_map(|g| match g.db_parameter_group_name() {
                    Some(name) => Some(ParameterGroup::instance(name)),
                    None => {
                        tracing::debug!("skipping unnamed db parameter group");
                        None
                    }
                })
                .collect();
            Ok::<_, SourceError>(Page {
                items,
                marker: out.marker().map(str::to_owned),
            })
        })
        .await
    }

    async fn cluster_groups(&self) -> Result<Vec<ParameterGroup>, SourceError> {
        let client = &self.client;
        collect_pages(|marker| async move {
            let out = client
                .describe_db_cluster_parameter_groups()
                .set_marker(marker)
                .send()
                .await
                .map_err(|e| api_error("DescribeDBClusterParameterGroups", e))?;

            let items = out
                .db_cluster_parameter_groups()
                .iter()
                .filter_map(|g| match g.db_cluster_parameter_group_name() {
                    Some(name) => Some(ParameterGroup::cluster(name)),
                    None => {
                        tracing::debug!("skipping unnamed db cluster parameter group");
                        None
                    }
                })
                .collect();
            Ok::<_, SourceError>(Page {
                items,
                marker: out.marker().map(str::to_owned),
            })
        })
        .await
    }

    async fn instance_parameters(&self, name: &str) -> Result<Vec<Parameter>, SourceError> {
        let client = &self.client;
        collect_pages(|marker| async move {
            let out = client
                .describe_db_parameters()
                .db_parameter_group_name(name)
                .set_marker(marker)
                .send()
                .await
                .map_err(|e| api_error("DescribeDBParameters", e))?;

            Ok::<_, SourceError>(Page {
                items: named_parameters(out.parameters()),
                marker: out.marker().map(str::to_owned),
            })
        })
        .await
    }

    async fn cluster_parameters(&self, name: &str) -> Result<Vec<Parameter>, SourceError> {
        let client = &self.client;
        collect_pages(|marker| async move {
            let out = client
                .describe_db_cluster_parameters()
                .db_cluster_parameter_group_name(name)
                .set_marker(marker)
                .send()
                .await
                .map_err(|e| api_error("DescribeDBClusterParameters", e))?;

            Ok::<_, SourceError>(Page {
                items: named_parameters(out.parameters()),
                marker: out.marker().map(str::to_owned),
            })
        })
        .await
    }
}

fn named_parameters(raw: &[aws_sdk_rds::types::Parameter]) -> Vec<Parameter> {
    raw.iter()
        .filter_map(|p| match p.parameter_name() {
            Some(name) => Some(Parameter::new(name, p.parameter_value())),
            None => {
                tracing::debug!("skipping unnamed parameter");
                None
            }
        })
        .collect()
}

fn api_error<E>(operation: &'static str, err: E) -> SourceError
where
    E: std::error::Error,
{
    SourceError::Api {
        operation,
        message: DisplayErrorContext(err).to_string(),
    }
}

#[async_trait]
impl ParameterSource for RdsSource {
    async fn list_groups(&self, kind: GroupKind) -> Result<Vec<ParameterGroup>, SourceError> {
        let groups = match kind {
            GroupKind::Instance => self.instance_groups().await?,
            GroupKind::Cluster => self.cluster_groups().await?,
        };
        tracing::debug!(%kind, count = groups.len(), "listed parameter groups");
        Ok(groups)
    }

    async fn fetch_parameters(&self, group: &ParameterGroup) -> Result<ParameterSet, SourceError> {
        let params = match group.kind {
            GroupKind::Instance => self.instance_parameters(&group.name).await?,
            GroupKind::Cluster => self.cluster_parameters(&group.name).await?,
        };
        tracing::info!(group = %group, count = params.len(), "fetched parameters");
        Ok(ParameterSet::from_parameters(group.clone(), params))
    }
}
