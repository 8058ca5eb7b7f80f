//! CLI entrypoint for semdom-data
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result};
use clap::Parser;
use semdom_application::{BuildDataInput, BuildDataUseCase, NoProgress, ProgressNotifier};
use semdom_infrastructure::{ConfigLoader, FileConfig, LocalArtifactWriter, LocalDocumentSource};
use semdom_presentation::{Cli, ProgressReporter, SimpleProgress};
use std::io::IsTerminal;
use std::sync::Arc;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        return Ok(());
    }

    let config = load_config(&cli)?;
    config.validate().context("Invalid configuration")?;

    let plan = config.language_plan()?;
    debug!(
        "Input directory {}, output directory {}",
        config.input.directory.display(),
        config.output.directory.display()
    );

    // === Dependency Injection ===
    let source = Arc::new(LocalDocumentSource::new(
        &config.input.directory,
        config.input.definitions_file.clone(),
        config.questions_input_template()?,
    ));
    let sink = Arc::new(LocalArtifactWriter::new(
        &config.output.directory,
        config.domains_output_template()?,
        config.questions_output_template()?,
    ));
    let use_case = BuildDataUseCase::new(source, sink);

    let progress: Box<dyn ProgressNotifier> = if cli.quiet {
        Box::new(NoProgress)
    } else if std::io::stderr().is_terminal() {
        Box::new(ProgressReporter::new())
    } else {
        Box::new(SimpleProgress)
    };

    let output = use_case
        .execute_with_progress(BuildDataInput::new(plan), progress.as_ref())
        .context("Failed to build semantic domain data")?;

    for artifact in &output.artifacts {
        info!(
            "{} {}: {} entries -> {}",
            artifact.language,
            artifact.kind,
            artifact.entries,
            artifact.path.display()
        );
    }

    Ok(())
}

/// Load the merged configuration and apply command-line overrides
fn load_config(cli: &Cli) -> Result<FileConfig> {
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref()).context("Failed to load configuration")?
    };

    if !cli.lang.is_empty() {
        config.languages.process = Some(cli.lang.clone());
    }
    if let Some(dir) = &cli.input_dir {
        config.input.directory = dir.clone();
    }
    if let Some(dir) = &cli.output_dir {
        config.output.directory = dir.clone();
    }

    Ok(config)
}
