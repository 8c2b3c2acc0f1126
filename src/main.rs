//! slibdep - static library object file dependency analysis

mod analyze_cli;
mod report_cli;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "slibdep")]
#[command(about = "Object file dependency analysis for static libraries", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a static library and save its dependency graph as JSON
    Analyze(analyze_cli::AnalyzeArgs),
    /// Report leaf object files, or verify a list of object files
    Report(report_cli::ReportArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze(args) => analyze_cli::run(args).await?,
        Commands::Report(args) => report_cli::run(args)?,
    }

    Ok(())
}
