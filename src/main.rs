use anyhow::Context;
use clap::Parser;
use panelpi::replay::replay_snapshots;
use panelpi::{init_logging, Config, FileInfo, BUILD_DATE, VERSION};
use panelpi_status::SystemClock;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

/// Replay recorded printer status reports through the PanelPi status panel
#[derive(Parser, Debug)]
#[command(name = "panelpi", version, about)]
struct Cli {
    /// JSON-lines snapshot file (reads stdin when omitted)
    input: Option<PathBuf>,

    /// Settings file (JSON or TOML)
    #[arg(long)]
    config: Option<PathBuf>,

    /// JSON file describing the selected print file
    #[arg(long)]
    file_info: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    init_logging()?;
    let cli = Cli::parse();

    tracing::info!("PanelPi {} (built {})", VERSION, BUILD_DATE);

    let config_path = match cli.config {
        Some(path) => path,
        None => Config::default_path()?,
    };
    let config = Config::load_or_default(&config_path)
        .with_context(|| format!("loading settings from {}", config_path.display()))?;

    let file = match cli.file_info {
        Some(path) => {
            let json = std::fs::read_to_string(&path)
                .with_context(|| format!("reading {}", path.display()))?;
            Some(FileInfo::from_json(&json)?)
        }
        None => None,
    };

    let stdout = io::stdout().lock();
    let summary = match cli.input {
        Some(path) => {
            let input = File::open(&path).with_context(|| format!("opening {}", path.display()))?;
            replay_snapshots(
                BufReader::new(input),
                file,
                &config,
                Box::new(SystemClock),
                stdout,
            )?
        }
        None => replay_snapshots(
            io::stdin().lock(),
            file,
            &config,
            Box::new(SystemClock),
            stdout,
        )?,
    };

    tracing::info!(
        "Replayed {} snapshots ({} skipped)",
        summary.applied,
        summary.skipped
    );
    Ok(())
}
