mod output;
mod parser;
mod seed;

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};

#[derive(Parser)]
#[command(
    name = "extract_locations",
    about = "Extract state/region/centre locations from the legacy fellowship form"
)]
struct Cli {
    /// Form source to scan (e.g. dlcfform.php)
    input: PathBuf,
    /// Directory for locations.json, seed_fellowships.sql and reports
    #[arg(default_value = ".")]
    output_dir: PathBuf,
}

/// Read the whole form, replacing invalid UTF-8 instead of failing.
fn read_source(path: &Path) -> Result<String> {
    let bytes =
        std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();

    let source = read_source(&cli.input)?;
    info!("Scanning {} ({} bytes)", cli.input.display(), source.len());

    let extraction = parser::extract_locations(&source);
    debug!(
        "{} state blocks with options, {} region blocks with options",
        extraction.state_regions.len(),
        extraction.region_centres.len()
    );
    let s = extraction.summary();
    info!(
        "Found {} states, {} regions, {} centres ({} orphaned regions, {} conflicting)",
        s.states, s.regions, s.centres, s.missing, s.conflicts
    );

    for path in output::write_artifacts(&cli.output_dir, &extraction)? {
        println!("Wrote {}", path.display());
    }

    info!("Done in {:.1}s", t0.elapsed().as_secs_f64());
    Ok(())
}

// ── Tests ──
