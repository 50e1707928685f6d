//! `flock init`: set up Flock inside a Swift package.

use std::path::PathBuf;

use serde::Serialize;
use tracing::{debug, instrument, warn};

use flock_adapters::{LocalFilesystem, SwiftPackageManager};
use flock_core::prelude::*;

use crate::{
    cli::{InitArgs, global::OutputFormat},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

#[instrument(skip_all, fields(path = ?args.path))]
pub fn execute(args: InitArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let root = args.path.unwrap_or_else(|| PathBuf::from("."));
    let paths = FlockPaths::new(root);
    let tool = SwiftPackageManager::new(&config.toolchain.swift, &paths);
    let fetch = config.init.fetch_dependencies && !args.no_fetch;

    let service = InitService::new(paths, Box::new(LocalFilesystem::new()), Box::new(tool))
        .with_reporter(Box::new(output.clone()))
        .with_prefetch(fetch);

    let report = service.execute()?;
    describe(&report, &output)?;
    let instructions = InitReport::instructions(service.paths());

    if output.format() == OutputFormat::Json {
        output.json(&InitSummary::new(service.paths(), &report, instructions))?;
        return Ok(());
    }

    output.print("")?;
    output.success("Successfully initialized Flock!")?;
    output.print("")?;
    output.header("Follow these steps to finish setting up Flock:")?;
    for step in instructions {
        output.print(&step)?;
    }

    Ok(())
}

/// Log and surface what the run tolerated.
fn describe(report: &InitReport, output: &OutputManager) -> CliResult<()> {
    if let Some(error) = &report.scaffold.introspection_error {
        debug!(%error, "Defaults not inferred from Package.swift");
        output.info("Could not read Package.swift; fill in the project fields by hand")?;
    }

    for skipped in &report.scaffold.skipped_environments {
        warn!(environment = %skipped.environment, error = %skipped.error, "Environment file skipped");
        output.warning(&format!(
            "Kept existing {} configuration",
            skipped.environment
        ))?;
    }

    if report.gitignore == GitIgnoreOutcome::Missing {
        debug!("No .gitignore found; build products are not ignored");
    }

    if let PrefetchOutcome::Failed(error) = &report.prefetch {
        debug!(%error, "Dependency pre-fetch failed");
    }

    Ok(())
}

/// `--output-format json` view of an [`InitReport`].
#[derive(Debug, Serialize)]
struct InitSummary {
    root: String,
    project_name: Option<String>,
    executable_name: Option<String>,
    framework: String,
    introspection_error: Option<String>,
    skipped_environments: Vec<String>,
    dependencies_file_written: bool,
    gitignore: &'static str,
    prefetch: &'static str,
    prefetch_error: Option<String>,
    instructions: Vec<String>,
}

impl InitSummary {
    fn new(paths: &FlockPaths, report: &InitReport, instructions: Vec<String>) -> Self {
        let scaffold = &report.scaffold;
        let (prefetch, prefetch_error) = match &report.prefetch {
            PrefetchOutcome::Fetched => ("fetched", None),
            PrefetchOutcome::Failed(error) => ("failed", Some(error.to_string())),
            PrefetchOutcome::Skipped => ("skipped", None),
        };

        Self {
            root: paths.root.display().to_string(),
            project_name: scaffold.defaults.project_name.clone(),
            executable_name: scaffold.defaults.executable_name.clone(),
            framework: scaffold.defaults.framework.to_string(),
            introspection_error: scaffold.introspection_error.as_ref().map(ToString::to_string),
            skipped_environments: scaffold
                .skipped_environments
                .iter()
                .map(|s| s.environment.to_string())
                .collect(),
            dependencies_file_written: scaffold.dependencies_file_written,
            gitignore: match report.gitignore {
                GitIgnoreOutcome::Missing => "missing",
                GitIgnoreOutcome::AlreadyPresent => "already-present",
                GitIgnoreOutcome::Appended => "appended",
            },
            prefetch,
            prefetch_error,
            instructions,
        }
    }
}
