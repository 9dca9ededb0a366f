/// Single coordinate axis used for board rows, columns, and positions.
pub type Coord = u8;

/// Count type used for mine and tile counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(row, col)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// Narrows signed player input to grid coordinates, `None` when outside `bounds`.
pub fn checked_coords(row: i32, col: i32, bounds: Coord2) -> Option<Coord2> {
    let row = Coord::try_from(row).ok()?;
    let col = Coord::try_from(col).ok()?;
    (row < bounds.0 && col < bounds.1).then_some((row, col))
}

/// In-bounds cells of the 3x3 block centered on `center`, the center included,
/// in row-major order.
pub fn iter_block(center: Coord2, bounds: Coord2) -> impl Iterator<Item = Coord2> {
    let span = |at: Coord, len: Coord| {
        at.saturating_sub(1)..=at.saturating_add(1).min(len.saturating_sub(1))
    };
    let (rows, cols) = (span(center.0, bounds.0), span(center.1, bounds.1));
    rows.flat_map(move |row| cols.clone().map(move |col| (row, col)))
        .filter(move |&(row, col)| row < bounds.0 && col < bounds.1)
}
