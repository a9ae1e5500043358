//! Frame rendering: text grid snapshots to PNG rasters.

/// Folder-level driver rendering every snapshot.
pub mod batch;
pub(crate) mod bitmap_font;
/// Scalable font resolution and the bitmap fallback.
pub mod font;
/// Single-grid renderer.
pub mod frame;
