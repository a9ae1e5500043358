use std::path::PathBuf;

use crate::{
    encode::gif::{AssemblyReport, GifOpts, assemble_gif},
    foundation::config::ReelConfig,
    foundation::error::GridReelResult,
    render::{batch::render_all_frames, frame::FrameRenderer},
};

/// What a full run produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunSummary {
    /// PNG frames written by the render stage, in order.
    pub frames: Vec<PathBuf>,
    /// Assembly outcome.
    pub assembly: AssemblyReport,
}

/// Render stage only: every grid in `cfg.input_dir` to a PNG in `cfg.frames_dir`.
pub fn render_frames(cfg: &ReelConfig) -> GridReelResult<Vec<PathBuf>> {
    let renderer = FrameRenderer::from_config(cfg)?;
    render_all_frames(&renderer, &cfg.input_dir, &cfg.frames_dir)
}

/// Assembly stage only: every image in `cfg.frames_dir` into `cfg.output_path`.
pub fn assemble(cfg: &ReelConfig) -> GridReelResult<AssemblyReport> {
    cfg.validate()?;
    let opts = GifOpts {
        frame_duration_ms: cfg.frame_duration_ms,
    };
    assemble_gif(&cfg.frames_dir, &cfg.output_path, opts)
}

/// Render all frames, then assemble them.
#[tracing::instrument(skip(cfg), fields(input = %cfg.input_dir.display()))]
pub fn run(cfg: &ReelConfig) -> GridReelResult<RunSummary> {
    let frames = render_frames(cfg)?;
    let assembly = assemble(cfg)?;
    Ok(RunSummary { frames, assembly })
}
