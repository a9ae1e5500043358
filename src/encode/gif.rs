use std::path::{Path, PathBuf};

use anyhow::Context;
use image::{
    Delay, DynamicImage, Frame, ImageFormat, RgbImage,
    codecs::gif::{GifEncoder, Repeat},
};

use crate::foundation::config::DEFAULT_FRAME_DURATION_MS;
use crate::foundation::error::{GridReelError, GridReelResult};

/// Options for [`assemble_gif`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GifOpts {
    /// Display duration of every frame, in milliseconds.
    pub frame_duration_ms: u32,
}

impl Default for GifOpts {
    fn default() -> Self {
        Self {
            frame_duration_ms: DEFAULT_FRAME_DURATION_MS,
        }
    }
}

/// An image left out of the animation because it failed to load.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkippedImage {
    /// Offending file.
    pub path: PathBuf,
    /// Loader error message.
    pub reason: String,
}

/// Outcome of one assembly run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AssemblyReport {
    /// Written animation, or `None` when no image could be loaded.
    pub output: Option<PathBuf>,
    /// Frames encoded into the animation.
    pub frames_written: usize,
    /// Images that failed to load, in file name order.
    pub skipped: Vec<SkippedImage>,
}

impl AssemblyReport {
    /// `true` when nothing was written.
    pub fn is_empty(&self) -> bool {
        self.output.is_none()
    }

    fn skip(&mut self, path: &Path, err: GridReelError) {
        tracing::warn!(path = %path.display(), error = %err, "error loading image; skipping");
        self.skipped.push(SkippedImage {
            path: path.to_path_buf(),
            reason: err.to_string(),
        });
    }
}

/// List the PNG frames in `dir`, sorted by file name.
///
/// Other image formats are ignored, so an animation written next to its frames is never read
/// back as a frame.
pub fn list_image_files(dir: &Path) -> GridReelResult<Vec<PathBuf>> {
    let rd =
        std::fs::read_dir(dir).with_context(|| format!("read image dir '{}'", dir.display()))?;

    let mut files = Vec::new();
    for entry in rd {
        let entry = entry.with_context(|| format!("list '{}'", dir.display()))?;
        let path = entry.path();
        if path.is_file() && matches!(ImageFormat::from_path(&path), Ok(ImageFormat::Png)) {
            files.push(path);
        }
    }
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// Load an image and normalize it to 8-bit RGB.
pub fn load_rgb(path: &Path) -> GridReelResult<RgbImage> {
    let img = image::open(path)
        .map_err(|e| GridReelError::decode(format!("'{}': {e}", path.display())))?;
    Ok(img.into_rgb8())
}

/// Lazily load `paths` in order, one result per input.
///
/// Only the image currently being yielded is held in memory.
pub fn load_frames(
    paths: &[PathBuf],
) -> impl Iterator<Item = (&Path, GridReelResult<RgbImage>)> + '_ {
    paths.iter().map(|p| (p.as_path(), load_rgb(p)))
}

/// Encode every loadable PNG frame in `image_dir` into an infinitely looping GIF at `out_path`.
///
/// Images are taken in file name order. Images that fail to load are logged, recorded in the
/// report and left out. When nothing loads, no file is written and the report is empty.
#[tracing::instrument(skip(opts), fields(frame_duration_ms = opts.frame_duration_ms))]
pub fn assemble_gif(
    image_dir: &Path,
    out_path: &Path,
    opts: GifOpts,
) -> GridReelResult<AssemblyReport> {
    let files = list_image_files(image_dir)?;
    let mut report = AssemblyReport::default();
    let mut loads = load_frames(&files);

    // The output is only created once one frame is known to be good.
    let first = loop {
        match loads.next() {
            Some((_, Ok(img))) => break Some(img),
            Some((path, Err(err))) => report.skip(path, err),
            None => break None,
        }
    };
    let Some(first) = first else {
        tracing::warn!(dir = %image_dir.display(), "no images found to create GIF");
        return Ok(report);
    };

    let delay = Delay::from_numer_denom_ms(opts.frame_duration_ms, 1);
    let mut bytes = Vec::new();
    {
        let mut encoder = GifEncoder::new(&mut bytes);
        encoder
            .set_repeat(Repeat::Infinite)
            .map_err(|e| GridReelError::encode(format!("set gif repeat: {e}")))?;

        push_frame(&mut encoder, first, delay)?;
        report.frames_written += 1;

        for (path, loaded) in loads {
            match loaded {
                Ok(img) => {
                    push_frame(&mut encoder, img, delay)?;
                    report.frames_written += 1;
                }
                Err(err) => report.skip(path, err),
            }
        }
    }

    ensure_parent_dir(out_path)?;
    std::fs::write(out_path, &bytes)
        .with_context(|| format!("write gif '{}'", out_path.display()))?;

    tracing::info!(
        path = %out_path.display(),
        frames = report.frames_written,
        skipped = report.skipped.len(),
        "wrote animation"
    );
    report.output = Some(out_path.to_path_buf());
    Ok(report)
}

// Takes the frame by value so its pixels are released once encoded.
fn push_frame<W: std::io::Write>(
    encoder: &mut GifEncoder<W>,
    img: RgbImage,
    delay: Delay,
) -> GridReelResult<()> {
    let rgba = DynamicImage::ImageRgb8(img).into_rgba8();
    encoder
        .encode_frame(Frame::from_parts(rgba, 0, 0, delay))
        .map_err(|e| GridReelError::encode(format!("encode gif frame: {e}")))
}

/// Create the parent directory of `path` if needed.
pub fn ensure_parent_dir(path: &Path) -> GridReelResult<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory '{}'", parent.display()))?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/encode/gif.rs"]
mod tests;
