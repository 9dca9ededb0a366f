use core::fmt;

use crate::*;

/// Text grid of a board with row and column indices.
///
/// With `reveal_mines` set, every mine cell is drawn between angle brackets.
#[derive(Copy, Clone, Debug)]
pub struct BoardView<'a> {
    board: &'a Board,
    reveal_mines: bool,
}

impl<'a> BoardView<'a> {
    pub fn new(board: &'a Board, reveal_mines: bool) -> Self {
        Self {
            board,
            reveal_mines,
        }
    }
}

impl fmt::Display for BoardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (rows, cols) = self.board.size();

        for row in 0..rows {
            write!(f, " {} |", row)?;
            for col in 0..cols {
                let glyph = self.board.cell_at((row, col)).unwrap_or_default().glyph();
                if self.reveal_mines && self.board.has_mine_at((row, col)) {
                    write!(f, "<{}>|", glyph)?;
                } else {
                    write!(f, " {} |", glyph)?;
                }
            }
            writeln!(f)?;
        }

        write!(f, "     ")?;
        for col in 0..cols - 1 {
            write!(f, "{}   ", col)?;
        }
        write!(f, "{}  ", cols - 1)
    }
}
