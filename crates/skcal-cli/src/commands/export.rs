//! Implementation of the `skcal export` command.

use std::path::PathBuf;

use miette::miette;
use tracing::info;

use super::DataArgs;

/// Arguments for the export command.
#[derive(Debug, clap::Args)]
pub struct ExportArgs {
    /// Destination file (.json)
    pub output: PathBuf,

    #[command(flatten)]
    pub data: DataArgs,
}

/// Run the export command.
pub fn run_export(args: ExportArgs) -> miette::Result<i32> {
    let store = args.data.load()?;
    store
        .save(&args.output)
        .map_err(|e| miette!("Failed to export calendar: {}", e))?;
    info!(path = %args.output.display(), days = store.len(), "exported calendar");
    Ok(exitcode::OK)
}
