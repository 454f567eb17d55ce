//! Prints the resource mappings of the sample domain as JSON.

use clap::Parser;
use indexmap::IndexMap;
use resource_mapping::config::MappingConfig;
use resource_mapping::lifecycle::{bootstrap, setup_tracing};
use resource_mapping::mapping::ResourceMapping;
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "resource-mapping", about = "Show how domain types map to REST resources")]
struct Cli {
    /// TOML file with resource overrides
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Only list exported resources
    #[arg(long)]
    exported_only: bool,
}

fn main() -> Result<(), String> {
    setup_tracing();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => MappingConfig::from_path(path).map_err(|e| e.to_string())?,
        None => MappingConfig::default(),
    };

    let types = resource_mapping::domain::descriptors().map_err(|e| e.to_string())?;
    let mappings = bootstrap(&config, types).map_err(|e| e.to_string())?;

    let report: IndexMap<&str, &ResourceMapping> = if cli.exported_only {
        mappings
            .exported()
            .map(|m| (m.resource_type().simple_name(), m.mapping()))
            .collect()
    } else {
        mappings
            .iter()
            .map(|m| (m.resource_type().simple_name(), m.mapping()))
            .collect()
    };

    let json = serde_json::to_string_pretty(&report).map_err(|e| e.to_string())?;
    println!("{json}");

    info!(listed = report.len(), "Done");
    Ok(())
}
