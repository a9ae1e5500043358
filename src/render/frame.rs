use std::path::{Path, PathBuf};

use anyhow::Context;
use image::{ImageFormat, RgbImage};
use imageproc::{drawing::draw_filled_rect_mut, rect::Rect};

use crate::{
    foundation::config::{DEFAULT_LABEL_FONT_PX, ReelConfig},
    foundation::error::{GridReelError, GridReelResult},
    grid::symbol::{BLACK, CellPaint, WHITE},
    grid::text_grid::TextGrid,
    render::font::GlyphFont,
};

/// Top-left corner of the frame label, in pixels.
pub const LABEL_ORIGIN: (i32, i32) = (10, 10);

/// Renders one [`TextGrid`] into one RGB raster.
#[derive(Debug)]
pub struct FrameRenderer {
    scale: u32,
    label_font_px: u32,
    font: GlyphFont,
}

impl FrameRenderer {
    /// Create a renderer drawing `scale` pixels per cell edge.
    pub fn new(scale: u32, font: GlyphFont) -> GridReelResult<Self> {
        if scale == 0 {
            return Err(GridReelError::validation("scale must be > 0"));
        }
        Ok(Self {
            scale,
            label_font_px: DEFAULT_LABEL_FONT_PX,
            font,
        })
    }

    /// Build a renderer from a run configuration, resolving its font.
    ///
    /// Fonts are looked up in the system font set and in a `fonts/` folder next to the input
    /// grids.
    pub fn from_config(cfg: &ReelConfig) -> GridReelResult<Self> {
        cfg.validate()?;
        let font_dirs = [cfg.input_dir.join("fonts")];
        let font = GlyphFont::resolve(cfg.font.as_deref(), &font_dirs);
        Self::new(cfg.scale, font)?.with_label_font_px(cfg.label_font_px)
    }

    /// Override the pixel size of the frame label.
    pub fn with_label_font_px(mut self, px: u32) -> GridReelResult<Self> {
        if px == 0 {
            return Err(GridReelError::validation("label_font_px must be > 0"));
        }
        self.label_font_px = px;
        Ok(self)
    }

    /// Pixels per cell edge.
    pub fn scale(&self) -> u32 {
        self.scale
    }

    /// Glyph source in use.
    pub fn font(&self) -> &GlyphFont {
        &self.font
    }

    /// Draw `grid` and its `Frame: N` overlay.
    pub fn render(&self, grid: &TextGrid, label: &str) -> GridReelResult<RgbImage> {
        let (width, height) = self.canvas_size(grid)?;
        let mut canvas = RgbImage::from_pixel(width, height, WHITE);

        let s = self.scale;
        let glyph_dx = (s / 4) as i32;
        let glyph_dy = (s / 8) as i32;
        let glyph_px = (s as f32 * 0.8).floor().max(1.0);

        for y in 0..grid.height() {
            for x in 0..grid.width() {
                // Short rows leave the canvas fill in place.
                let Some(c) = grid.cell(x, y) else {
                    continue;
                };
                let x1 = x as i32 * s as i32;
                let y1 = y as i32 * s as i32;
                match CellPaint::for_char(c) {
                    CellPaint::Fill(color) => {
                        draw_filled_rect_mut(&mut canvas, Rect::at(x1, y1).of_size(s, s), color);
                    }
                    CellPaint::Glyph(glyph, color) => {
                        let mut buf = [0u8; 4];
                        self.font.draw_text(
                            &mut canvas,
                            x1 + glyph_dx,
                            y1 + glyph_dy,
                            glyph_px,
                            glyph.encode_utf8(&mut buf),
                            color,
                        );
                    }
                }
            }
        }

        self.font.draw_text(
            &mut canvas,
            LABEL_ORIGIN.0,
            LABEL_ORIGIN.1,
            self.label_font_px as f32,
            &frame_label(label),
            BLACK,
        );

        Ok(canvas)
    }

    /// Parse `text`, render it and write `<out_dir>/<label>.png`.
    #[tracing::instrument(skip(self, text), fields(scale = self.scale))]
    pub fn render_to_file(&self, text: &str, label: &str, out_dir: &Path) -> GridReelResult<PathBuf> {
        let grid = TextGrid::parse(text)
            .map_err(|e| GridReelError::validation(format!("frame '{label}': {e}")))?;
        let canvas = self.render(&grid, label)?;

        let out = out_dir.join(format!("{label}.png"));
        canvas
            .save_with_format(&out, ImageFormat::Png)
            .with_context(|| format!("write png '{}'", out.display()))?;

        tracing::debug!(
            path = %out.display(),
            width = canvas.width(),
            height = canvas.height(),
            "rendered frame"
        );
        Ok(out)
    }

    fn canvas_size(&self, grid: &TextGrid) -> GridReelResult<(u32, u32)> {
        let too_large = || {
            GridReelError::validation(format!(
                "grid {}x{} at scale {} does not fit in a canvas",
                grid.width(),
                grid.height(),
                self.scale
            ))
        };
        let px = |cells: usize| -> Option<u32> {
            let v = u32::try_from(cells).ok()?.checked_mul(self.scale)?;
            i32::try_from(v).ok().map(|_| v)
        };
        let width = px(grid.width()).ok_or_else(too_large)?;
        let height = px(grid.height()).ok_or_else(too_large)?;
        if width == 0 || height == 0 {
            return Err(GridReelError::validation("grid has zero width or height"));
        }
        Ok((width, height))
    }
}

/// Overlay text for a frame label: `"Frame: "` followed by the part after the last `_`.
pub fn frame_label(label: &str) -> String {
    let suffix = label.rsplit_once('_').map_or(label, |(_, s)| s);
    format!("Frame: {suffix}")
}

#[cfg(test)]
#[path = "../../tests/unit/render/frame.rs"]
mod tests;
