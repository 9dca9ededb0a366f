use alloc::vec::Vec;
use core::str::SplitWhitespace;

use crate::*;

/// Raw contents of a seed: `rows cols mines` followed by one `row col` pair per mine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Seed {
    pub rows: i32,
    pub cols: i32,
    pub mines: i32,
    pub mine_coords: Vec<(i32, i32)>,
}

struct Tokens<'a>(SplitWhitespace<'a>);

impl Tokens<'_> {
    fn next_int(&mut self, expected: &'static str) -> core::result::Result<i32, SeedError> {
        let token = self.0.next().ok_or(SeedError::MissingToken { expected })?;
        token
            .parse()
            .map_err(|_| SeedError::InvalidToken { expected })
    }
}

impl Seed {
    /// Reads the header and mine pairs, validating each part as soon as it is
    /// read. Tokens after the last mine pair are ignored.
    pub fn parse(text: &str) -> core::result::Result<Self, SeedError> {
        let mut tokens = Tokens(text.split_whitespace());

        let rows = tokens.next_int("row count")?;
        let cols = tokens.next_int("column count")?;
        let mines = tokens.next_int("mine count")?;
        let config = GameConfig::new(rows, cols, mines)?;

        let mine_coords = (0..config.mines)
            .map(|_| -> core::result::Result<_, SeedError> {
                Ok((tokens.next_int("mine row")?, tokens.next_int("mine column")?))
            })
            .collect::<core::result::Result<Vec<_>, _>>()?;
        log::debug!(
            "seed: {}x{} with {} mines",
            config.rows(),
            config.cols(),
            config.mines
        );

        Ok(Self {
            rows,
            cols,
            mines,
            mine_coords,
        })
    }

    pub fn into_board(self) -> Result<Board> {
        Board::construct(self.rows, self.cols, self.mines, &self.mine_coords)
    }
}

/// Parses seed text straight into a hidden board.
pub fn load_board(text: &str) -> core::result::Result<Board, SeedError> {
    Ok(Seed::parse(text)?.into_board()?)
}
