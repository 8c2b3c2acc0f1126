//! report subcommand - leaf objects and completeness verification

use anyhow::Context;
use clap::Args;
use slib::{find_leaves, read_candidate_list, verify, TableRenderer};
use std::path::PathBuf;

#[derive(Args)]
pub struct ReportArgs {
    /// JSON file produced by `analyze`
    json_file: PathBuf,
    /// List of object files to verify (one per line)
    #[arg(short = 'v', value_name = "OBJECT_LIST")]
    verify: Option<PathBuf>,
}

pub fn run(args: ReportArgs) -> anyhow::Result<()> {
    let graph = slib::load(&args.json_file)
        .with_context(|| format!("Could not read '{}'", args.json_file.display()))?;
    let renderer = TableRenderer::for_graph(&graph);

    match args.verify {
        None => {
            println!("{}", renderer.leaves(&find_leaves(&graph)));
        }
        Some(list) => {
            let candidates = read_candidate_list(&list)?;
            let report = verify(&graph, &candidates);
            println!("{}", renderer.verification(&report, &list.display().to_string()));
        }
    }

    Ok(())
}
