//! analyze subcommand - build and save the dependency graph

use anyhow::Context;
use clap::Args;
use slib::{default_output_path, AnalyzeConfig, ArchiveAnalyzer, TableRenderer};
use std::path::PathBuf;

#[derive(Args)]
pub struct AnalyzeArgs {
    /// Static library to analyze
    archive: PathBuf,
    /// Output file (default: <archive>.json)
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Print a summary of the analysis
    #[arg(short, long)]
    summary: bool,
}

pub async fn run(args: AnalyzeArgs) -> anyhow::Result<()> {
    let config = AnalyzeConfig::from_env();
    let output = args
        .output
        .unwrap_or_else(|| default_output_path(&args.archive));

    let inspector = config.inspector();
    let analyzer = ArchiveAnalyzer::from_config(&config);
    let graph = analyzer
        .analyze(&inspector, &args.archive)
        .await
        .with_context(|| format!("Could not analyze '{}'", args.archive.display()))?;

    slib::save(&graph, &output)?;
    println!(
        "JSON result of '{}' analysis saved in '{}'",
        graph.library,
        output.display()
    );

    if args.summary {
        println!("{}", TableRenderer::for_graph(&graph).summary(&graph));
    }

    Ok(())
}
