use anyhow::{Context, Result};
use serde_json::json;
use tracing::{info, info_span};

use dq_audit::{AuditClient, AuditConfig};
use dq_cli::selection::resolve_selection;
use dq_ingest::load_csv;
use dq_model::DatasetSummary;
use dq_profile::summarize;

use crate::cli::{AuditArgs, SummarizeArgs};
use crate::render;

pub fn run_summarize(args: &SummarizeArgs) -> Result<()> {
    let span = info_span!("summarize", file = %args.csv_file.display());
    let _guard = span.enter();
    let summary = build_summary(
        &args.csv_file,
        args.target.as_deref(),
        args.features.as_deref(),
    )?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        render::print_summary(&summary);
    }
    Ok(())
}

pub fn run_audit(args: &AuditArgs) -> Result<()> {
    let span = info_span!("audit", file = %args.csv_file.display());
    let _guard = span.enter();

    // Configuration errors surface before any computation or network use.
    let api_key = args
        .api_key
        .clone()
        .or_else(|| std::env::var("GEMINI_API_KEY").ok())
        .filter(|key| !key.is_empty())
        .context("no API key: pass --api-key or set GEMINI_API_KEY")?;

    let summary = build_summary(
        &args.csv_file,
        args.target.as_deref(),
        args.features.as_deref(),
    )?;

    // Print the statistics before calling out, so a failed request never
    // loses the computed summary.
    if !args.json {
        render::print_summary(&summary);
    }

    let mut config = AuditConfig::new(api_key);
    if let Some(model) = &args.model {
        config = config.with_model(model);
    }
    if let Some(api_base) = &args.api_base {
        config = config.with_api_base(api_base);
    }
    let client = AuditClient::new(config)?;
    info!(rows = summary.row_count, "requesting audit report");
    let report = client
        .generate_report(&summary)
        .context("audit request failed")?;

    if args.json {
        let combined = json!({ "summary": summary, "report": report });
        println!("{}", serde_json::to_string_pretty(&combined)?);
    } else {
        render::print_report(&report);
    }
    Ok(())
}

fn build_summary(
    csv_file: &std::path::Path,
    target: Option<&str>,
    features: Option<&[String]>,
) -> Result<DatasetSummary> {
    let dataset =
        load_csv(csv_file).with_context(|| format!("read {}", csv_file.display()))?;
    let (target, features) = resolve_selection(&dataset.headers, target, features)?;
    info!(
        rows = dataset.row_count(),
        target = %target,
        features = features.len(),
        "profiling dataset"
    );
    Ok(summarize(&dataset.rows, &target, &features))
}
