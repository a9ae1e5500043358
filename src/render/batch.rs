use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::{foundation::error::GridReelResult, render::frame::FrameRenderer};

/// List the `*.txt` grid snapshots in `input_dir`, sorted by file name.
pub fn list_grid_files(input_dir: &Path) -> GridReelResult<Vec<PathBuf>> {
    let rd = std::fs::read_dir(input_dir)
        .with_context(|| format!("read input dir '{}'", input_dir.display()))?;

    let mut files = Vec::new();
    for entry in rd {
        let entry = entry.with_context(|| format!("list '{}'", input_dir.display()))?;
        let path = entry.path();
        let is_txt = path
            .extension()
            .and_then(|s| s.to_str())
            .is_some_and(|ext| ext == "txt");
        if is_txt && path.is_file() {
            files.push(path);
        }
    }
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// Render every grid snapshot in `input_dir` to `<output_dir>/<stem>.png`.
///
/// `output_dir` is created if absent. Returns the written images in render order.
#[tracing::instrument(skip(renderer))]
pub fn render_all_frames(
    renderer: &FrameRenderer,
    input_dir: &Path,
    output_dir: &Path,
) -> GridReelResult<Vec<PathBuf>> {
    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("create frames dir '{}'", output_dir.display()))?;

    let files = list_grid_files(input_dir)?;
    let mut written = Vec::with_capacity(files.len());
    for path in &files {
        let label = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read grid '{}'", path.display()))?;
        written.push(renderer.render_to_file(&text, &label, output_dir)?);
    }

    tracing::info!(
        frames = written.len(),
        dir = %output_dir.display(),
        "rendered grid snapshots"
    );
    Ok(written)
}

#[cfg(test)]
#[path = "../../tests/unit/render/batch.rs"]
mod tests;
