//! CLI command implementations.

mod check;
mod easter;
mod export;
mod render;

pub use check::{run_check, CheckArgs};
pub use easter::{run_easter, EasterArgs};
pub use export::{run_export, ExportArgs};
pub use render::{run_render, RenderArgs};

use std::fs::read_to_string;
use std::path::{Path, PathBuf};

use miette::{miette, Report, Result};
use skcal::{DataLoadError, DateFactStore};
use tracing::debug;

use crate::output::CalendarDiagnostic;

/// Where calendar data comes from.
#[derive(Debug, clap::Args)]
pub struct DataArgs {
    /// Calendar data file (.json). Defaults to the bundled Slovak calendar.
    #[arg(long, env = "SKCAL_DATA")]
    pub data: Option<PathBuf>,
}

impl DataArgs {
    /// Load the selected calendar data.
    pub fn load(&self) -> Result<DateFactStore> {
        match &self.data {
            Some(path) => load_file(path),
            None => {
                debug!("using bundled calendar");
                DateFactStore::bundled().map_err(|e| miette!("Bundled calendar is invalid: {}", e))
            }
        }
    }
}

/// Load a data file, reporting malformed content against its source.
pub fn load_file(path: &Path) -> Result<DateFactStore> {
    let content = read_to_string(path)
        .map_err(|e| miette!("Cannot read calendar file {}: {}", path.display(), e))?;

    DateFactStore::from_json_str(&content).map_err(|e| match e {
        DataLoadError::Parse { .. } => {
            Report::new(CalendarDiagnostic::from_load_error(path, &content, &e))
        }
        DataLoadError::DuplicateDay { key, .. } => {
            miette!("{}: duplicate entry for day {}", path.display(), key)
        }
        DataLoadError::Io { .. } => miette!("{}", e),
    })
}
