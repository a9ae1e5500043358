use crate::foundation::error::{GridReelError, GridReelResult};

/// One simulation step parsed from its text dump.
///
/// Width is the character count of the first row and applies to every row; rows of a different
/// length are kept as written and are not rejected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextGrid {
    rows: Vec<Vec<char>>,
    width: usize,
}

impl TextGrid {
    /// Parse a grid dump. Lines are trimmed and blank lines dropped before sizing.
    pub fn parse(text: &str) -> GridReelResult<Self> {
        let rows: Vec<Vec<char>> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| line.chars().collect())
            .collect();

        let Some(first) = rows.first() else {
            return Err(GridReelError::validation("grid has no non-empty lines"));
        };
        let width = first.len();

        if let Some((idx, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != width) {
            tracing::debug!(
                row = idx,
                len = row.len(),
                width,
                "ragged grid row; using first row width"
            );
        }

        Ok(Self { rows, width })
    }

    /// Cells per row, inferred from the first row.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Character at `(x, y)`, or `None` when that row is shorter than `x + 1`.
    pub fn cell(&self, x: usize, y: usize) -> Option<char> {
        self.rows.get(y).and_then(|row| row.get(x)).copied()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/grid/text_grid.rs"]
mod tests;
