//! Load command implementation.
//!
//! Loads a calibration set and prints one row per curve role.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use ratescal_core::curve::{CurveGroupDefinition, NodalCurveDefinition};
use ratescal_csv::{CurveGroupMap, LoadManifest, RatesCalibrationCsvLoader};
use serde::Serialize;
use tabled::Tabled;
use tracing::info;

use crate::cli::OutputFormat;
use crate::error::{CliError, CliResult};
use crate::output::{print_json, print_success, print_table};

/// Arguments for the load command.
#[derive(Args, Debug)]
pub struct LoadArgs {
    /// TOML manifest naming the groups, settings and node files
    #[arg(short, long, conflicts_with_all = ["groups", "settings", "nodes"])]
    pub manifest: Option<PathBuf>,

    /// Curve groups file
    #[arg(long)]
    pub groups: Option<PathBuf>,

    /// Curve settings file
    #[arg(long)]
    pub settings: Option<PathBuf>,

    /// Curve node files
    #[arg(long, num_args = 1..)]
    pub nodes: Vec<PathBuf>,
}

/// One curve role within a group, for display.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct RoleRow {
    /// Group name
    #[tabled(rename = "Group")]
    pub group: String,
    /// discount or forward
    #[tabled(rename = "Role")]
    pub role: String,
    /// Currency or index
    #[tabled(rename = "Reference")]
    pub reference: String,
    /// Curve name
    #[tabled(rename = "Curve")]
    pub curve: String,
    /// Value type code
    #[tabled(rename = "Value Type")]
    pub value_type: String,
    /// Number of nodes
    #[tabled(rename = "Nodes")]
    pub nodes: usize,
}

impl RoleRow {
    fn new(
        group: &CurveGroupDefinition,
        role: &str,
        reference: String,
        curve: &NodalCurveDefinition,
    ) -> Self {
        Self {
            group: group.name.to_string(),
            role: role.to_string(),
            reference,
            curve: curve.name.to_string(),
            value_type: curve.settings.value_type.code().to_string(),
            nodes: curve.node_count(),
        }
    }
}

/// Flattens groups into display rows: discount curves first, then forward.
pub fn role_rows(groups: &CurveGroupMap) -> Vec<RoleRow> {
    let mut rows = Vec::new();
    for group in groups.values() {
        for (currency, curve) in &group.discount_curves {
            rows.push(RoleRow::new(group, "discount", currency.to_string(), curve));
        }
        for (index, curve) in &group.forward_curves {
            rows.push(RoleRow::new(group, "forward", index.to_string(), curve));
        }
    }
    rows
}

fn manifest_from_args(args: &LoadArgs) -> CliResult<LoadManifest> {
    let groups = args
        .groups
        .clone()
        .ok_or_else(|| CliError::MissingArgument("--groups (or --manifest)".to_string()))?;
    let settings = args
        .settings
        .clone()
        .ok_or_else(|| CliError::MissingArgument("--settings (or --manifest)".to_string()))?;
    if args.nodes.is_empty() {
        return Err(CliError::MissingArgument("--nodes (or --manifest)".to_string()));
    }
    Ok(LoadManifest::new(groups, settings, args.nodes.clone()))
}

/// Executes the load command.
pub fn execute(args: LoadArgs, format: OutputFormat) -> Result<()> {
    let manifest = match &args.manifest {
        Some(path) => LoadManifest::from_file(path)
            .with_context(|| format!("Failed to read manifest {}", path.display()))?,
        None => manifest_from_args(&args)?,
    };
    info!(
        groups = %manifest.groups_path().display(),
        settings = %manifest.settings_path().display(),
        node_files = manifest.nodes.len(),
        "Resolved calibration set"
    );

    let groups = RatesCalibrationCsvLoader::standard()
        .load_manifest(&manifest)
        .context("Failed to load calibration set")?;

    match format {
        OutputFormat::Table => {
            print_table(&role_rows(&groups))?;
            print_success(&format!("Loaded {} curve group(s)", groups.len()));
        }
        OutputFormat::Json => print_json(&groups)?,
    }
    Ok(())
}
