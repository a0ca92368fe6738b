use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use openplan::{init_logging, validate_layout_file, PlannerConfig, BUILD_DATE, VERSION};

#[derive(Parser)]
#[command(name = "openplan")]
#[command(about = "Validate a furniture layout against its room", long_about = None)]
struct Cli {
    /// Layout JSON: `{ "room": {...}, "items": [...] }`
    layout: PathBuf,

    /// Config file (.toml or .json); defaults to the user config directory
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_logging()?;
    tracing::debug!("openplan {} built {}", VERSION, BUILD_DATE);

    let config = PlannerConfig::load_or_default(cli.config.as_deref())
        .context("failed to load configuration")?;
    let document = validate_layout_file(&cli.layout, &config)?;

    println!("{}", document.to_json_pretty()?);

    let summary = document.summary();
    tracing::info!(
        "{} items: {} colliding, {} outside walls or blocking the door",
        summary.total,
        summary.collisions,
        summary.wall_violations
    );

    // 2 tells scripts the layout parsed fine but needs rearranging.
    Ok(if summary.is_clean() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(2)
    })
}
