//! gridreel turns the per-step text dumps of a drone grid simulation into an animated GIF.
//!
//! # Pipeline overview
//!
//! 1. **Parse**: `*.txt` snapshot -> [`TextGrid`] (one character per cell)
//! 2. **Render**: [`TextGrid`] -> PNG frame, `scale` pixels per cell, with a `Frame: N` overlay
//! 3. **Assemble**: PNG frames, in file name order -> one infinitely looping GIF
//!
//! The two stages only meet through the frames folder on disk, so either can be run on its own
//! ([`render_frames`], [`assemble`]) or both in sequence ([`run`]).
//!
//! Symbols: `⬜` free, `⬛` obstacle, `🛸` drone, `🎯` target, `X` visited. Anything else is drawn
//! as a free cell.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod encode;
mod foundation;
mod grid;
mod pipeline;
mod render;

pub use encode::gif::{
    AssemblyReport, GifOpts, SkippedImage, assemble_gif, ensure_parent_dir, list_image_files,
    load_frames, load_rgb,
};
pub use foundation::config::{
    DEFAULT_FONT, DEFAULT_FRAME_DURATION_MS, DEFAULT_FRAMES_DIR, DEFAULT_INPUT_DIR,
    DEFAULT_LABEL_FONT_PX, DEFAULT_OUTPUT_PATH, DEFAULT_SCALE, ReelConfig,
};
pub use foundation::error::{GridReelError, GridReelResult};
pub use grid::symbol::{BLACK, CellPaint, Symbol, WHITE};
pub use grid::text_grid::TextGrid;
pub use pipeline::{RunSummary, assemble, render_frames, run};
pub use render::batch::{list_grid_files, render_all_frames};
pub use render::font::GlyphFont;
pub use render::frame::{FrameRenderer, LABEL_ORIGIN, frame_label};
