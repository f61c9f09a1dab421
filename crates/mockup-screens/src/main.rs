// File: crates/mockup-screens/src/main.rs
// Summary: Renders the wireframe and diagram mock-ups to PNG files, one per named mock-up.

use anyhow::{Context, Result};
use clap::Parser;
use mockup_core::{palette, render_batch, Color, Mockup};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "mockup-gen")]
#[command(about = "Render CRM/ERP wireframe and diagram mock-ups to PNG")]
#[command(version)]
struct Cli {
    /// Output directory (created if missing)
    #[arg(long, default_value = "target/out/mockups")]
    out_dir: PathBuf,

    /// Colour palette: professional, classic or diagram
    #[arg(long, default_value = "professional")]
    palette: String,

    /// Override the palette's primary colour (#RRGGBB or #RRGGBBAA)
    #[arg(long, value_parser = parse_color)]
    primary: Option<Color>,

    /// Only render these file names (repeatable)
    #[arg(long)]
    only: Vec<String>,

    /// List mock-up file names and exit
    #[arg(long)]
    list: bool,
}

fn parse_color(text: &str) -> Result<Color, String> {
    palette::parse_hex(text).ok_or_else(|| format!("expected #RRGGBB or #RRGGBBAA, got {text:?}"))
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mockup_gen=info,mockup_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    let mut mockups = mockup_screens::all();
    if cli.list {
        for m in &mockups {
            println!("{}", m.file_name());
        }
        return Ok(());
    }
    if !cli.only.is_empty() {
        mockups.retain(|m| cli.only.iter().any(|name| name == m.file_name()));
        if mockups.is_empty() {
            anyhow::bail!("no mock-up matches {:?}; use --list to see names", cli.only);
        }
    }

    let mut palette = palette::find(&cli.palette);
    if !palette.name.eq_ignore_ascii_case(&cli.palette) {
        tracing::warn!(requested = %cli.palette, using = palette.name, "unknown palette");
    }
    if let Some(primary) = cli.primary {
        palette.primary = primary;
    }

    tracing::info!(count = mockups.len(), palette = palette.name, "generating mock-ups");
    let report = render_batch(&mockups, &cli.out_dir, &palette)
        .with_context(|| format!("preparing output directory {}", cli.out_dir.display()))?;

    tracing::info!(
        written = report.written.len(),
        failed = report.failed.len(),
        out_dir = %cli.out_dir.display(),
        "done"
    );
    Ok(())
}
