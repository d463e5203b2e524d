//! Conventions command implementation.

use anyhow::Result;
use clap::Args;
use ratescal_core::conventions::ConventionRegistry;
use ratescal_core::curve::NodeKind;
use serde::Serialize;
use tabled::Tabled;

use crate::cli::OutputFormat;
use crate::error::{CliError, CliResult};
use crate::output::{print_json, print_table};

/// Arguments for the conventions command.
#[derive(Args, Debug)]
pub struct ConventionsArgs {
    /// Only list conventions for this instrument type (FIX, FRA, OIS, IRS, BAS)
    #[arg(short, long)]
    pub kind: Option<String>,
}

/// A named convention, for display.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct ConventionRow {
    /// Instrument type code
    #[tabled(rename = "Type")]
    pub kind: &'static str,
    /// Convention name
    #[tabled(rename = "Convention")]
    pub name: String,
}

fn parse_kind(code: &str) -> CliResult<NodeKind> {
    NodeKind::from_code(&code.to_ascii_uppercase())
        .or_else(|| NodeKind::from_code(code))
        .ok_or_else(|| CliError::UnknownKind(code.to_string()))
}

/// Lists conventions of the given kinds, grouped by kind.
pub fn convention_rows(registry: &ConventionRegistry, kinds: &[NodeKind]) -> Vec<ConventionRow> {
    kinds
        .iter()
        .flat_map(|kind| {
            registry.names(*kind).into_iter().map(move |name| ConventionRow {
                kind: kind.code(),
                name: name.to_string(),
            })
        })
        .collect()
}

/// Executes the conventions command.
pub fn execute(args: ConventionsArgs, format: OutputFormat) -> Result<()> {
    let kinds = match &args.kind {
        Some(code) => vec![parse_kind(code)?],
        None => NodeKind::all().to_vec(),
    };
    let rows = convention_rows(ConventionRegistry::global(), &kinds);
    match format {
        OutputFormat::Table => print_table(&rows),
        OutputFormat::Json => print_json(&rows),
    }
}
