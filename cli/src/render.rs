use sapper_core::{Board, CellKind};
use std::io::{self, Write};

/// Writes the player's view of the board: a column-number header, then one
/// letter-labelled row per board row. Covered cells print as `_`, uncovered
/// mines as `*`, everything else as its adjacency digit. Read-only.
pub fn render(board: &Board, out: &mut impl Write) -> io::Result<()> {
    let size = board.size();

    write!(out, "  ")?;
    for col in 1..=size {
        if col > 1 {
            write!(out, " ")?;
        }
        write!(out, "{col}")?;
    }
    writeln!(out)?;

    for row in 0..size {
        write!(out, "{} ", (b'A' + row) as char)?;
        for col in 0..size {
            if col > 0 {
                write!(out, " ")?;
            }
            let cell = board.cell_at((row, col));
            if !cell.is_revealed() {
                write!(out, "_")?;
            } else {
                match cell.kind() {
                    CellKind::Mine => write!(out, "*")?,
                    CellKind::Safe(count) => write!(out, "{count}")?,
                }
            }
        }
        writeln!(out)?;
    }
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(board: &Board) -> String {
        let mut buf = Vec::new();
        render(board, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn covered_board_renders_underscores() {
        let board = Board::with_mines(3, &[(1, 1)]).unwrap();
        assert_eq!(
            rendered(&board),
            "  1 2 3\n\
             A _ _ _\n\
             B _ _ _\n\
             C _ _ _\n\n"
        );
    }

    #[test]
    fn revealed_cells_show_counts_and_mines_show_stars() {
        let mut board = Board::with_mines(3, &[(1, 1)]).unwrap();
        board.reveal((0, 0)).unwrap();
        board.reveal((2, 2)).unwrap();
        board.reveal_mines();

        assert_eq!(
            rendered(&board),
            "  1 2 3\n\
             A 1 _ _\n\
             B _ * _\n\
             C _ _ 1\n\n"
        );
    }

    #[test]
    fn flooded_zero_region_prints_its_digits() {
        let mut board = Board::with_mines(4, &[(3, 3)]).unwrap();
        board.reveal((0, 0)).unwrap();

        assert_eq!(
            rendered(&board),
            "  1 2 3 4\n\
             A 0 0 0 0\n\
             B 0 0 0 0\n\
             C 0 0 1 1\n\
             D 0 0 1 _\n\n"
        );
    }
}
