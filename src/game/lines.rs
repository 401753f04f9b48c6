//! Counting runs of same-owner tokens through an anchor cell.
//!
//! Columns have independent heights, so every step of a scan checks that the
//! column it lands on actually reaches the row being inspected.

use super::{
    board::Board,
    components::{Token, CONNECT, NUM_COLS},
};

/// The four lines that can pass through a cell. Each is scanned as a pair of
/// opposite directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Line {
    Row,
    Col,
    /// Down-right paired with up-left.
    MajorDiagonal,
    /// Up-right paired with down-left.
    MinorDiagonal,
}

impl Line {
    const ALL: [Line; 4] = [
        Line::Row,
        Line::Col,
        Line::MajorDiagonal,
        Line::MinorDiagonal,
    ];

    /// Column and row step of the forward direction. The backward direction
    /// is its negation.
    fn step(self) -> (isize, isize) {
        match self {
            Line::Row => (1, 0),
            Line::Col => (0, 1),
            Line::MajorDiagonal => (1, -1),
            Line::MinorDiagonal => (1, 1),
        }
    }
}

impl Board {
    /// Length of the horizontal run of `player` tokens through (col, row).
    ///
    /// Returns 0 if the cell is outside the board, above its column, or owned
    /// by the other player.
    pub fn count_row(&self, col: usize, row: usize, player: Token) -> usize {
        self.count_line(Line::Row, col, row, player)
    }

    /// Length of the vertical run of `player` tokens through (col, row).
    pub fn count_col(&self, col: usize, row: usize, player: Token) -> usize {
        self.count_line(Line::Col, col, row, player)
    }

    /// Length of the down-right / up-left run of `player` tokens through
    /// (col, row).
    pub fn count_major_diagonal(&self, col: usize, row: usize, player: Token) -> usize {
        self.count_line(Line::MajorDiagonal, col, row, player)
    }

    /// Length of the up-right / down-left run of `player` tokens through
    /// (col, row).
    pub fn count_minor_diagonal(&self, col: usize, row: usize, player: Token) -> usize {
        self.count_line(Line::MinorDiagonal, col, row, player)
    }

    /// Check if `player` has at least four connected tokens anywhere on the
    /// board.
    ///
    /// Every cell of the displayed grid is tried as an anchor.
    pub fn has_four_connected(&self, player: Token) -> bool {
        let rows = self.size_row();
        let found = (0..self.size_col())
            .flat_map(|col| (0..rows).map(move |row| (col, row)))
            .find(|&(col, row)| {
                Line::ALL
                    .iter()
                    .any(|&line| self.count_line(line, col, row, player) >= CONNECT)
            });

        match found {
            Some((col, row)) => {
                log::debug!("{player:?} has {CONNECT} connected through ({col}, {row})");
                true
            }
            None => false,
        }
    }

    fn count_line(&self, line: Line, col: usize, row: usize, player: Token) -> usize {
        let (Ok(c), Ok(r)) = (isize::try_from(col), isize::try_from(row)) else {
            return 0;
        };
        if !self.owns(c, r, player) {
            return 0;
        }
        let (dc, dr) = line.step();
        let count = 1 + self.scan(c, r, dc, dr, player) + self.scan(c, r, -dc, -dr, player);
        log::trace!("{line:?} through ({col}, {row}) counts {count} for {player:?}");
        count
    }

    /// Count consecutive `player` tokens starting one step away from the
    /// anchor. Stops at the board edge, above a column's top, or at a token of
    /// the other player.
    fn scan(&self, col: isize, row: isize, dc: isize, dr: isize, player: Token) -> usize {
        (1..)
            .map(|i| (col + i * dc, row + i * dr))
            .take_while(|&(c, r)| self.owns(c, r, player))
            .count()
    }

    /// Check if the cell at (col, row) holds a `player` token.
    fn owns(&self, col: isize, row: isize, player: Token) -> bool {
        let (Ok(col), Ok(row)) = (usize::try_from(col), usize::try_from(row)) else {
            return false;
        };
        col < NUM_COLS && self.columns[col].get(row).is_ok_and(|&t| t == player)
    }
}
