//! One comparison run: pick a source, pick two groups, compare, write.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use aws_config::{BehaviorVersion, Region};
use chrono::Utc;
use rds_compare::{ParameterGroup, ReportSummary, compare, write_report};
use rds_source::{
    MemorySource, ParameterSource, RdsSource, discover_groups, list_all_groups, resolve_group,
};

use crate::cli::Args;
use crate::config::{Config, FileConfig};

/// What a run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Listed(Vec<ParameterGroup>),
    Written { path: PathBuf, summary: ReportSummary },
    Cancelled,
}

pub async fn run(args: &Args) -> Result<Outcome> {
    let file = FileConfig::load_or_default(args.config.as_deref())?;
    let config = Config::resolve(file, args.overrides());
    tracing::debug!(?config, "resolved configuration");

    let source: Box<dyn ParameterSource> = match &args.fixture {
        Some(path) => Box::new(
            MemorySource::load_from_file(path)
                .with_context(|| format!("loading fixture {}", path.display()))?,
        ),
        None => Box::new(RdsSource::new(rds_client(&config).await)),
    };

    run_with_source(args, &config, source.as_ref()).await
}

/// Run against an already constructed source.
pub async fn run_with_source(
    args: &Args,
    config: &Config,
    source: &dyn ParameterSource,
) -> Result<Outcome> {
    if args.list {
        return Ok(Outcome::Listed(list_all_groups(source).await?));
    }

    let groups = discover_groups(source).await?;
    let Some((first, second)) = choose_groups(args, &groups)? else {
        tracing::info!("no groups selected, nothing to compare");
        return Ok(Outcome::Cancelled);
    };

    let a = source
        .fetch_parameters(&first)
        .await
        .with_context(|| format!("fetching parameters of {}", first))?;
    let b = source
        .fetch_parameters(&second)
        .await
        .with_context(|| format!("fetching parameters of {}", second))?;

    let report = compare(&a, &b);
    let summary = ReportSummary::of(&report);
    tracing::info!(%summary, "comparison complete");

    let path = write_report(&report, config.format, &config.output_dir, Utc::now())?;
    Ok(Outcome::Written { path, summary })
}

fn choose_groups(
    args: &Args,
    groups: &[ParameterGroup],
) -> Result<Option<(ParameterGroup, ParameterGroup)>> {
    if let Some(((a, a_kind), (b, b_kind))) = args.named_groups() {
        let first = resolve_group(groups, a, a_kind)?.clone();
        let second = resolve_group(groups, b, b_kind)?.clone();
        return Ok(Some((first, second)));
    }

    if !(atty::is(atty::Stream::Stdin) && atty::is(atty::Stream::Stdout)) {
        bail!("no terminal available for interactive selection; pass --first and --second");
    }
    rds_tui::select_two(groups).context("interactive group selection")
}

/// Build the RDS client once for the whole run.
async fn rds_client(config: &Config) -> aws_sdk_rds::Client {
    let mut loader = aws_config::defaults(BehaviorVersion::latest());
    if let Some(region) = &config.region {
        loader = loader.region(Region::new(region.clone()));
    }
    if let Some(profile) = &config.profile {
        loader = loader.profile_name(profile);
    }
    let sdk_config = loader.load().await;

    match sdk_config.region() {
        Some(region) => tracing::debug!(%region, "using AWS region"),
        None => tracing::warn!("no AWS region configured; set --region or AWS_REGION"),
    }
    aws_sdk_rds::Client::new(&sdk_config)
}
