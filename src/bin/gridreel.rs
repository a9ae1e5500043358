use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "gridreel", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Option<Command>,

    #[command(flatten)]
    overrides: Overrides,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render every grid snapshot to a PNG frame.
    Render,
    /// Assemble the PNG frames into a looping GIF.
    Assemble,
    /// Render, then assemble (default).
    Run,
}

#[derive(Args, Debug)]
struct Overrides {
    /// JSON config file; flags below override its values.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Folder with the `*.txt` grid snapshots.
    #[arg(long = "input", global = true)]
    input_dir: Option<PathBuf>,

    /// Folder for the rendered PNG frames.
    #[arg(long, global = true)]
    frames_dir: Option<PathBuf>,

    /// Output GIF path.
    #[arg(long = "out", global = true)]
    output_path: Option<PathBuf>,

    /// Pixels per grid cell edge.
    #[arg(long, global = true)]
    scale: Option<u32>,

    /// Display duration per frame, in milliseconds.
    #[arg(long, global = true)]
    duration_ms: Option<u32>,

    /// Font file or family name for the overlay text.
    #[arg(long, global = true, conflicts_with = "no_font")]
    font: Option<String>,

    /// Always use the built-in bitmap font.
    #[arg(long, global = true)]
    no_font: bool,
}

impl Overrides {
    fn into_config(self) -> anyhow::Result<gridreel::ReelConfig> {
        let mut cfg = match &self.config {
            Some(path) => gridreel::ReelConfig::from_json_path(path)?,
            None => gridreel::ReelConfig::default(),
        };
        if let Some(v) = self.input_dir {
            cfg.input_dir = v;
        }
        if let Some(v) = self.frames_dir {
            cfg.frames_dir = v;
        }
        if let Some(v) = self.output_path {
            cfg.output_path = v;
        }
        if let Some(v) = self.scale {
            cfg.scale = v;
        }
        if let Some(v) = self.duration_ms {
            cfg.frame_duration_ms = v;
        }
        if let Some(v) = self.font {
            cfg.font = Some(v);
        }
        if self.no_font {
            cfg.font = None;
        }
        cfg.validate()?;
        Ok(cfg)
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let cfg = cli.overrides.into_config()?;
    match cli.cmd.unwrap_or(Command::Run) {
        Command::Render => cmd_render(&cfg),
        Command::Assemble => cmd_assemble(&cfg),
        Command::Run => cmd_run(&cfg),
    }
}

fn cmd_render(cfg: &gridreel::ReelConfig) -> anyhow::Result<()> {
    let frames = gridreel::render_frames(cfg)?;
    eprintln!("wrote {} frames to {}", frames.len(), cfg.frames_dir.display());
    Ok(())
}

fn cmd_assemble(cfg: &gridreel::ReelConfig) -> anyhow::Result<()> {
    let report = gridreel::assemble(cfg)?;
    print_assembly(&report);
    Ok(())
}

fn cmd_run(cfg: &gridreel::ReelConfig) -> anyhow::Result<()> {
    let summary = gridreel::run(cfg)?;
    eprintln!(
        "wrote {} frames to {}",
        summary.frames.len(),
        cfg.frames_dir.display()
    );
    print_assembly(&summary.assembly);
    Ok(())
}

fn print_assembly(report: &gridreel::AssemblyReport) {
    if !report.skipped.is_empty() {
        eprintln!("skipped {} unreadable images", report.skipped.len());
    }
    match &report.output {
        Some(path) => eprintln!("wrote {} ({} frames)", path.display(), report.frames_written),
        None => eprintln!("No images found to create GIF"),
    }
}
