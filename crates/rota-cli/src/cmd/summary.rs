//! `rota summary` — group vacancy details into assignment spans.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Args;
use rota_core::{DisplayFlags, VacancyDetail, group_vacancy_summary};
use thiserror::Error;
use tracing::debug;

use crate::output::{self, OutputMode};

#[derive(Args, Debug)]
pub struct SummaryArgs {
    /// Path to a JSON array of vacancy details (camelCase wire naming,
    /// as produced by the absence-management query layer).
    pub details: PathBuf,

    /// Don't let accounting-code differences split a span.
    #[arg(long)]
    pub hide_accounting_codes: bool,

    /// Don't let pay-code differences split a span.
    #[arg(long)]
    pub hide_pay_codes: bool,
}

/// Failures loading the details file, kept typed so I/O problems stay
/// distinguishable from malformed content.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("could not read {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{path} is not a valid vacancy detail list")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Read and deserialize a vacancy detail list.
pub fn load_details(path: &Path) -> Result<Vec<VacancyDetail>, InputError> {
    let raw = fs::read_to_string(path).map_err(|source| InputError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| InputError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

pub fn run_summary(args: &SummaryArgs, mode: OutputMode) -> anyhow::Result<()> {
    let details = load_details(&args.details).context("load vacancy details")?;
    debug!(details = details.len(), "loaded vacancy details");

    let flags = DisplayFlags {
        hide_accounting_codes: args.hide_accounting_codes,
        hide_pay_codes: args.hide_pay_codes,
    };
    let groups = group_vacancy_summary(&details, flags);

    output::render_groups(&groups, mode)
}
