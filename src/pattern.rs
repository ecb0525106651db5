use thiserror::Error;
use tracing::warn;

use crate::grid::Cell;
use crate::grid::Grid;

/// 2x2 still life
pub const BLOCK: &str = "\
....
.OO.
.OO.
....
";

/// Period-2 oscillator
pub const BLINKER: &str = "\
.....
.....
.OOO.
.....
.....
";

/// Period-2 oscillator
pub const TOAD: &str = "\
......
......
..OOO.
.OOO..
......
......
";

/// The smallest spaceship, travels diagonally
pub const GLIDER: &str = "\
.O.
..O
OOO
";

#[derive(Debug, Error)]
pub enum PatternError {
    #[error("Unrecognized byte: 0x{got:0X}")]
    UnrecognizedByte { got: u8 },
}

/// Parse the plaintext pattern format, where `.` is a dead cell and `O` (or
/// `o`, or `*`) is a live one. Lines starting with `!` are comments. Rows
/// shorter than the widest row are padded with dead cells; blank lines are
/// skipped.
///
/// See: https://conwaylife.com/wiki/Plaintext
pub fn parse_plaintext(bytes: &[u8]) -> Result<Grid, PatternError> {
    let mut rows: Vec<Vec<Cell>> = Vec::new();
    let mut cols = 0;

    for line in bytes.split(|&b| b == b'\n') {
        let line = line.strip_suffix(b"\r").unwrap_or(line);

        if line.is_empty() || line[0] == b'!' {
            continue;
        }

        let mut row = Vec::with_capacity(line.len());

        for &b in line {
            match b {
                b'.' => row.push(Cell::Dead),
                b'O' | b'o' | b'*' => row.push(Cell::Alive),
                b => return Err(PatternError::UnrecognizedByte { got: b }),
            }
        }

        cols = cols.max(row.len());
        rows.push(row);
    }

    if rows.iter().any(|row| row.len() < cols) {
        warn!("Pattern rows have uneven lengths, padding with dead cells");
    }

    let mut grid = Grid::dead(rows.len(), cols);

    for (r, row) in rows.iter().enumerate() {
        for (c, &cell) in row.iter().enumerate() {
            grid.set(r, c, cell);
        }
    }

    Ok(grid)
}
