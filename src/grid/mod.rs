//! Grid snapshot model: parsing of the text dumps and the symbol to color mapping.

/// Closed symbol set and per-cell paint rule.
pub mod symbol;
/// Text dump parsing.
pub mod text_grid;
