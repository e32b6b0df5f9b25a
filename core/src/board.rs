use ndarray::Array2;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use crate::{
    Cell, CellCount, CellKind, Coord, Coord2, GameError, Result, ToNdIndex, neighbors, square,
};

/// Largest fraction of the board that may be mined.
const MAX_MINE_RATIO: f64 = 0.35;

/// Upper bound on the mine count for a `size`-sided board: 35% of the
/// squares, rounded down.
pub fn max_mines(size: Coord) -> CellCount {
    (f64::from(square(size)) * MAX_MINE_RATIO).floor() as CellCount
}

/// Outcome of a single reveal request.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    /// The target was already revealed before this call; nothing changed.
    AlreadyRevealed(CellKind),
    /// A freshly revealed safe cell, carrying its adjacent-mine count.
    Revealed(u8),
    /// A freshly revealed mine; the game is lost.
    HitMine,
}

impl RevealOutcome {
    pub const fn hit_mine(self) -> bool {
        matches!(self, Self::HitMine)
    }

    pub const fn already_revealed(self) -> bool {
        matches!(self, Self::AlreadyRevealed(_))
    }

    /// Adjacent-mine count of the target cell, with `-1` standing in for
    /// mine content the way the reveal reports it to the player.
    pub const fn adjacent(self) -> i8 {
        match self {
            Self::HitMine | Self::AlreadyRevealed(CellKind::Mine) => -1,
            Self::Revealed(count) | Self::AlreadyRevealed(CellKind::Safe(count)) => count as i8,
        }
    }
}

/// Square minefield plus the reveal bookkeeping for one game.
///
/// A board is built empty, mined exactly once with [`Board::place_mines`]
/// (or born mined via [`Board::with_mines`]), then driven by
/// [`Board::reveal`] until a mine is hit or every safe cell is open. The
/// board itself enforces no terminal state; callers stop revealing once
/// they have a loss or [`Board::all_non_mines_revealed`] turns true.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    size: Coord,
    cells: Array2<Cell>,
    total_mines: CellCount,
    revealed_count: CellCount,
}

impl Board {
    /// Empty, unmined board of `size * size` covered cells.
    pub fn new(size: Coord) -> Result<Self> {
        if size < 2 {
            return Err(GameError::InvalidSize);
        }
        Ok(Self {
            size,
            cells: Array2::default([size as usize, size as usize]),
            total_mines: 0,
            revealed_count: 0,
        })
    }

    /// Board with mines at exactly the given positions and adjacency already
    /// computed. Duplicate coordinates collapse into one mine.
    pub fn with_mines(size: Coord, mines: &[Coord2]) -> Result<Self> {
        let mut board = Self::new(size)?;
        for &coords in mines {
            board.validate(coords)?;
            board.cells[coords.to_nd_index()].set_mine();
        }
        board.total_mines = board.cells.iter().filter(|cell| cell.is_mine()).count() as CellCount;
        board.compute_adjacents();
        Ok(board)
    }

    /// Randomly mines the board, then fills in every adjacency count.
    ///
    /// All-or-nothing: `count` is validated against [`max_mines`] before any
    /// cell is touched. Placement is rejection sampling — keep drawing
    /// uniform positions, skipping already-mined cells, until `count`
    /// distinct mines exist. The 35% cap keeps collisions rare.
    pub fn place_mines<R: Rng + ?Sized>(&mut self, count: CellCount, rng: &mut R) -> Result<()> {
        let max = max_mines(self.size);
        if count < 1 || count > max {
            return Err(GameError::InvalidMineCount { max });
        }
        if self.total_mines > 0 {
            return Err(GameError::MinesAlreadyPlaced);
        }

        let mut placed: CellCount = 0;
        while placed < count {
            let coords: Coord2 = (
                rng.random_range(0..self.size),
                rng.random_range(0..self.size),
            );
            let cell = &mut self.cells[coords.to_nd_index()];
            if !cell.is_mine() {
                cell.set_mine();
                placed += 1;
                log::trace!("mine {placed}/{count} at {coords:?}");
            }
        }
        self.total_mines = count;
        self.compute_adjacents();
        log::debug!("placed {count} mines on a {0}x{0} board", self.size);
        Ok(())
    }

    // One whole-grid pass; each cell only ever looks at its 3x3 window.
    fn compute_adjacents(&mut self) {
        for row in 0..self.size {
            for col in 0..self.size {
                if self.cells[(row, col).to_nd_index()].is_mine() {
                    continue;
                }
                let count = neighbors((row, col), self.size)
                    .filter(|&pos| self.cells[pos.to_nd_index()].is_mine())
                    .count() as u8;
                self.cells[(row, col).to_nd_index()].set_adjacent(count);
            }
        }
    }

    /// Reveals one cell on the player's behalf.
    ///
    /// Revealing a zero-adjacency cell cascades through the connected zero
    /// region and its rim. A mine sitting on that rim is uncovered by the
    /// cascade without ending the game — only the directly targeted cell can
    /// detonate. That asymmetry is part of the game's contract, not an
    /// accident; keep it when touching the flood code.
    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        self.validate(coords)?;

        let cell = self.cells[coords.to_nd_index()];
        if cell.is_revealed() {
            return Ok(RevealOutcome::AlreadyRevealed(cell.kind()));
        }

        self.cells[coords.to_nd_index()].mark_revealed();
        self.revealed_count += 1;

        Ok(match cell.kind() {
            CellKind::Mine => RevealOutcome::HitMine,
            CellKind::Safe(0) => {
                self.flood_reveal(coords);
                RevealOutcome::Revealed(0)
            }
            CellKind::Safe(count) => RevealOutcome::Revealed(count),
        })
    }

    // Breadth-first zero-region expansion. `visited` tracks enqueued zero
    // cells and is separate from the revealed flags; nonzero cells are
    // revealed but never enqueued, so they bound the cascade.
    fn flood_reveal(&mut self, start: Coord2) {
        let mut visited: Array2<bool> = Array2::default([self.size as usize, self.size as usize]);
        visited[start.to_nd_index()] = true;
        let mut queue = VecDeque::from([start]);

        while let Some(coords) = queue.pop_front() {
            for pos in neighbors(coords, self.size) {
                let cell = self.cells[pos.to_nd_index()];
                if !cell.is_revealed() {
                    self.cells[pos.to_nd_index()].mark_revealed();
                    self.revealed_count += 1;
                    log::trace!("flood revealed {pos:?}");
                }
                if !visited[pos.to_nd_index()] && cell.kind() == CellKind::Safe(0) {
                    visited[pos.to_nd_index()] = true;
                    queue.push_back(pos);
                }
            }
        }
        log::debug!(
            "flood from {start:?} left {} of {} cells revealed",
            self.revealed_count,
            self.total_cells()
        );
    }

    /// Uncovers every remaining mine for the final render after a loss.
    /// Adjacency counts are left untouched; `revealed_count` keeps matching
    /// the number of revealed cells.
    pub fn reveal_mines(&mut self) {
        for cell in self.cells.iter_mut() {
            if cell.is_mine() && !cell.is_revealed() {
                cell.mark_revealed();
                self.revealed_count += 1;
            }
        }
    }

    /// True once every safe cell has been revealed — the win condition.
    pub fn all_non_mines_revealed(&self) -> bool {
        self.revealed_count == self.total_cells() - self.total_mines
    }

    pub fn size(&self) -> Coord {
        self.size
    }

    pub fn total_mines(&self) -> CellCount {
        self.total_mines
    }

    pub fn revealed_count(&self) -> CellCount {
        self.revealed_count
    }

    pub fn total_cells(&self) -> CellCount {
        square(self.size)
    }

    /// Copy view of one cell. Panics outside the board; use [`Board::reveal`]
    /// for anything driven by raw player input.
    pub fn cell_at(&self, coords: Coord2) -> Cell {
        self.cells[coords.to_nd_index()]
    }

    fn validate(&self, coords: Coord2) -> Result<Coord2> {
        if coords.0 < self.size && coords.1 < self.size {
            Ok(coords)
        } else {
            Err(GameError::OutOfBounds)
        }
    }
}
