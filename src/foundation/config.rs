use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context;

use crate::foundation::error::{GridReelError, GridReelResult};

/// Default folder scanned for `*.txt` grid snapshots.
pub const DEFAULT_INPUT_DIR: &str = "build/frames";
/// Default folder receiving the rendered PNG frames.
pub const DEFAULT_FRAMES_DIR: &str = "build/frames_images";
/// Default output animation path.
pub const DEFAULT_OUTPUT_PATH: &str = "build/drone_sim.gif";
/// Default pixels per grid cell edge.
pub const DEFAULT_SCALE: u32 = 20;
/// Default per-frame display duration in milliseconds.
pub const DEFAULT_FRAME_DURATION_MS: u32 = 200;
/// Default scalable font resource looked up before falling back to the bitmap font.
pub const DEFAULT_FONT: &str = "arial.ttf";
/// Default pixel size of the `Frame: N` overlay.
pub const DEFAULT_LABEL_FONT_PX: u32 = 16;

/// Run configuration shared by the frame renderer, the animation assembler and the pipeline.
///
/// Every field has a default, so a JSON config only needs the keys it overrides.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReelConfig {
    /// Folder holding the text grid snapshots.
    pub input_dir: PathBuf,
    /// Folder the rendered frames are written to (created if absent).
    pub frames_dir: PathBuf,
    /// Output GIF path.
    pub output_path: PathBuf,
    /// Pixels per grid cell edge.
    pub scale: u32,
    /// Display duration of every animation frame, in milliseconds.
    pub frame_duration_ms: u32,
    /// Font file or family name; `None` always uses the built-in bitmap font.
    pub font: Option<String>,
    /// Pixel size of the frame label overlay.
    pub label_font_px: u32,
}

impl Default for ReelConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from(DEFAULT_INPUT_DIR),
            frames_dir: PathBuf::from(DEFAULT_FRAMES_DIR),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            scale: DEFAULT_SCALE,
            frame_duration_ms: DEFAULT_FRAME_DURATION_MS,
            font: Some(DEFAULT_FONT.to_owned()),
            label_font_px: DEFAULT_LABEL_FONT_PX,
        }
    }
}

impl ReelConfig {
    /// Read a JSON config file. Missing keys keep their defaults.
    pub fn from_json_path(path: &Path) -> GridReelResult<Self> {
        let f = File::open(path).with_context(|| format!("open config '{}'", path.display()))?;
        let cfg: Self = serde_json::from_reader(BufReader::new(f))
            .with_context(|| format!("parse config JSON '{}'", path.display()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Reject values the renderer cannot work with.
    pub fn validate(&self) -> GridReelResult<()> {
        if self.scale == 0 {
            return Err(GridReelError::validation("scale must be > 0"));
        }
        if self.label_font_px == 0 {
            return Err(GridReelError::validation("label_font_px must be > 0"));
        }
        if self.input_dir.as_os_str().is_empty() || self.frames_dir.as_os_str().is_empty() {
            return Err(GridReelError::validation(
                "input_dir and frames_dir must not be empty",
            ));
        }
        if self.output_path.as_os_str().is_empty() {
            return Err(GridReelError::validation("output_path must not be empty"));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/config.rs"]
mod tests;
