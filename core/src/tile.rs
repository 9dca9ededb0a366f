use serde::{Deserialize, Serialize};

/// Player-visible state of a single cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellState {
    #[default]
    Hidden,
    Revealed(u8),
    Flagged,
    Guessed,
}

impl CellState {
    /// Character drawn inside the cell on the text grid.
    pub const fn glyph(self) -> char {
        match self {
            Self::Hidden => ' ',
            Self::Revealed(count) => (b'0' + count) as char,
            Self::Flagged => 'F',
            Self::Guessed => '?',
        }
    }
}
