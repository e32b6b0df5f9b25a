/// Single board axis. Boards are square and never wider than 26 rows, so a
/// byte is ample.
pub type Coord = u8;

/// Count type for cells and mines across a whole board.
pub type CellCount = u16;

/// Row-major `(row, col)` position.
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

/// `size * size` widened to a cell count.
pub const fn square(size: Coord) -> CellCount {
    (size as CellCount) * (size as CellCount)
}

const NEIGHBOR_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// The up-to-8 Chebyshev neighbors of `center` inside a `size`-sided square.
/// Positions past an edge are dropped, never wrapped.
pub fn neighbors(center: Coord2, size: Coord) -> impl Iterator<Item = Coord2> {
    NEIGHBOR_OFFSETS.iter().filter_map(move |&(dr, dc)| {
        let row = center.0.checked_add_signed(dr)?;
        let col = center.1.checked_add_signed(dc)?;
        (row < size && col < size).then_some((row, col))
    })
}
