use image::Rgb;

/// Fill used for free cells, unknown characters and the blank canvas.
pub const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
/// Text color of the frame label overlay.
pub const BLACK: Rgb<u8> = Rgb([0, 0, 0]);

/// Closed set of cell symbols a simulation step can contain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Symbol {
    /// `⬜`
    Free,
    /// `⬛`
    Obstacle,
    /// `🛸`
    Drone,
    /// `🎯`
    Target,
    /// `X`, a cell the drone already went through.
    Visited,
}

impl Symbol {
    /// All symbols, in declaration order.
    pub const ALL: [Symbol; 5] = [
        Symbol::Free,
        Symbol::Obstacle,
        Symbol::Drone,
        Symbol::Target,
        Symbol::Visited,
    ];

    /// Recognize a grid character. Anything else is `None`.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '⬜' => Some(Self::Free),
            '⬛' => Some(Self::Obstacle),
            '🛸' => Some(Self::Drone),
            '🎯' => Some(Self::Target),
            'X' => Some(Self::Visited),
            _ => None,
        }
    }

    /// Character written by the simulation for this symbol.
    pub fn as_char(self) -> char {
        match self {
            Self::Free => '⬜',
            Self::Obstacle => '⬛',
            Self::Drone => '🛸',
            Self::Target => '🎯',
            Self::Visited => 'X',
        }
    }

    /// Mapped color. For [`Symbol::Visited`] this is the glyph color, not a fill.
    pub fn color(self) -> Rgb<u8> {
        match self {
            Self::Free => WHITE,
            Self::Obstacle => Rgb([0, 0, 0]),
            Self::Drone => Rgb([0, 255, 0]),
            Self::Target => Rgb([255, 0, 0]),
            Self::Visited => Rgb([100, 100, 100]),
        }
    }
}

/// How a single grid cell is drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellPaint {
    /// Solid rectangle over the whole cell.
    Fill(Rgb<u8>),
    /// Glyph drawn over whatever the cell already holds.
    Glyph(char, Rgb<u8>),
}

impl CellPaint {
    /// Paint for a raw grid character; unrecognized characters fall back to a white fill.
    pub fn for_char(c: char) -> Self {
        match Symbol::from_char(c) {
            Some(Symbol::Visited) => Self::Glyph(Symbol::Visited.as_char(), Symbol::Visited.color()),
            Some(sym) => Self::Fill(sym.color()),
            None => Self::Fill(WHITE),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/grid/symbol.rs"]
mod tests;
