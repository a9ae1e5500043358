use std::path::{Path, PathBuf};

use ab_glyph::{FontVec, PxScale};
use anyhow::Context;
use image::{Rgb, RgbImage};
use usvg::fontdb;

use crate::{
    foundation::error::{GridReelError, GridReelResult},
    render::bitmap_font::{self, CHAR_H, CHAR_W},
};

/// Glyph source for the visited marker and the frame label.
pub enum GlyphFont {
    /// Outline font parsed from a font file or a system font face.
    Scalable {
        /// Parsed font.
        font: FontVec,
        /// Name the font was resolved from.
        name: String,
    },
    /// Built-in 5x7 bitmap glyphs.
    Bitmap,
}

impl std::fmt::Debug for GlyphFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Scalable { name, .. } => f.debug_struct("Scalable").field("name", name).finish(),
            Self::Bitmap => f.write_str("Bitmap"),
        }
    }
}

impl GlyphFont {
    /// Resolve `name` to a scalable font, or fall back to the bitmap font.
    ///
    /// Resolution failures are not errors; they only select the fallback.
    pub fn resolve(name: Option<&str>, font_dirs: &[PathBuf]) -> Self {
        let Some(name) = name else {
            return Self::Bitmap;
        };
        match Self::load_scalable(name, font_dirs) {
            Ok(font) => {
                tracing::debug!(font = name, "resolved scalable font");
                font
            }
            Err(err) => {
                tracing::debug!(font = name, error = %err, "using built-in bitmap font");
                Self::Bitmap
            }
        }
    }

    /// Load a scalable font from a file path, a font file name, or a family name.
    pub fn load_scalable(name: &str, font_dirs: &[PathBuf]) -> GridReelResult<Self> {
        let path = Path::new(name);
        if path.is_file() {
            let bytes =
                std::fs::read(path).with_context(|| format!("read font '{}'", path.display()))?;
            let font = FontVec::try_from_vec(bytes)
                .map_err(|e| GridReelError::validation(format!("parse font '{name}': {e}")))?;
            return Ok(Self::Scalable {
                font,
                name: name.to_owned(),
            });
        }

        let db = build_fontdb(font_dirs);
        let id = find_face(&db, name)
            .ok_or_else(|| GridReelError::validation(format!("font '{name}' not found")))?;
        let font = db
            .with_face_data(id, |data, index| {
                FontVec::try_from_vec_and_index(data.to_vec(), index)
            })
            .ok_or_else(|| GridReelError::validation(format!("font '{name}' has no data")))?
            .map_err(|e| GridReelError::validation(format!("parse font '{name}': {e}")))?;

        Ok(Self::Scalable {
            font,
            name: name.to_owned(),
        })
    }

    /// `true` when an outline font was resolved.
    pub fn is_scalable(&self) -> bool {
        matches!(self, Self::Scalable { .. })
    }

    /// Draw `text` with its top-left corner at `(x, y)`, sized to roughly `px` pixels.
    pub fn draw_text(
        &self,
        canvas: &mut RgbImage,
        x: i32,
        y: i32,
        px: f32,
        text: &str,
        color: Rgb<u8>,
    ) {
        match self {
            Self::Scalable { font, .. } => {
                imageproc::drawing::draw_text_mut(canvas, color, x, y, PxScale::from(px), font, text);
            }
            Self::Bitmap => draw_bitmap_text(canvas, x, y, bitmap_scale(px), text, color),
        }
    }
}

/// Integer magnification that brings the bitmap line height closest to `px` without exceeding it.
pub(crate) fn bitmap_scale(px: f32) -> u32 {
    ((px / CHAR_H as f32).floor() as u32).max(1)
}

fn draw_bitmap_text(canvas: &mut RgbImage, x: i32, y: i32, k: u32, text: &str, color: Rgb<u8>) {
    let (w, h) = canvas.dimensions();
    let mut caret = i64::from(x);
    for c in text.chars() {
        if let Some(rows) = bitmap_font::glyph_rows(c) {
            for row in 0..7u32 {
                for col in 0..5u32 {
                    if !bitmap_font::is_set(rows, col, row) {
                        continue;
                    }
                    for dy in 0..k {
                        for dx in 0..k {
                            let px = caret + i64::from(col * k + dx);
                            let py = i64::from(y) + i64::from(row * k + dy);
                            if px >= 0 && py >= 0 && px < i64::from(w) && py < i64::from(h) {
                                canvas.put_pixel(px as u32, py as u32, color);
                            }
                        }
                    }
                }
            }
        }
        caret += i64::from(CHAR_W * k);
    }
}

fn build_fontdb(font_dirs: &[PathBuf]) -> fontdb::Database {
    let mut db = fontdb::Database::new();
    db.load_system_fonts();
    for dir in font_dirs {
        load_fonts_from_dir(&mut db, dir);
    }
    db
}

fn load_fonts_from_dir(db: &mut fontdb::Database, dir: &Path) {
    let Ok(rd) = std::fs::read_dir(dir) else {
        return;
    };

    for entry in rd.flatten() {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(ext) = path.extension().and_then(|s| s.to_str()) else {
            continue;
        };
        let ext = ext.to_ascii_lowercase();
        if ext != "ttf" && ext != "otf" && ext != "ttc" {
            continue;
        }
        if let Err(err) = db.load_font_file(&path) {
            tracing::debug!(path = %path.display(), error = %err, "skipping unreadable font file");
        }
    }
}

// File name first ("arial.ttf"), then family name ("Arial", "arial").
fn find_face(db: &fontdb::Database, name: &str) -> Option<fontdb::ID> {
    let by_file = db.faces().find(|face| {
        face_file_name(&face.source).is_some_and(|file| file.eq_ignore_ascii_case(name))
    });
    if let Some(face) = by_file {
        return Some(face.id);
    }

    let family = Path::new(name)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(name);
    db.faces()
        .find(|face| {
            face.families
                .iter()
                .any(|(fam, _)| fam.eq_ignore_ascii_case(family))
        })
        .map(|face| face.id)
}

fn face_file_name(source: &fontdb::Source) -> Option<&str> {
    match source {
        fontdb::Source::File(path) | fontdb::Source::SharedFile(path, _) => {
            path.file_name().and_then(|s| s.to_str())
        }
        fontdb::Source::Binary(_) => None,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/font.rs"]
mod tests;
