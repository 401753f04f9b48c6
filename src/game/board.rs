use super::{
    components::{Token, EMPTY_SYMBOL, MARGIN_ROWS, MIN_ROWS, NUM_COLS},
    error::{Error, GameResult, MoveError},
    growable::GrowableArray,
};

/// A single column of tokens, index 0 is the bottom.
pub type Column = GrowableArray<Token>;

/// Power Connect Four board: seven columns of unbounded height and the player
/// whose turn it is.
#[derive(Debug, Clone)]
pub struct Board {
    pub(super) columns: [Column; NUM_COLS],
    turn: Token,
}

impl Board {
    /// Create an empty board with the first player to move.
    pub fn new() -> Self {
        Self {
            columns: std::array::from_fn(|_| Column::new()),
            turn: Token::FIRST_PLAYER,
        }
    }

    /// Number of columns, always [`NUM_COLS`].
    pub fn size_col(&self) -> usize {
        NUM_COLS
    }

    /// Number of rows to display: at least [`MIN_ROWS`], otherwise one margin
    /// row above the tallest column.
    pub fn size_row(&self) -> usize {
        let tallest = self.columns.iter().map(Column::size).max().unwrap_or(0);
        if tallest < MIN_ROWS {
            MIN_ROWS
        } else {
            tallest + MARGIN_ROWS
        }
    }

    /// Symbol used to draw an empty cell.
    pub fn empty_symbol(&self) -> char {
        EMPTY_SYMBOL
    }

    /// The player whose turn it is.
    pub fn current_player(&self) -> Token {
        self.turn
    }

    /// Get the token at (col, row), or `None` if the cell is above the column.
    ///
    /// # Errors
    ///
    /// Returns `Error::CellOutOfBounds` if `col` or `row` lies outside the
    /// displayed grid.
    pub fn get(&self, col: usize, row: usize) -> GameResult<Option<Token>> {
        if col >= NUM_COLS || row >= self.size_row() {
            return Err(Error::CellOutOfBounds { col, row });
        }
        Ok(self.columns[col].get(row).ok().copied())
    }

    /// Read only view of a column.
    ///
    /// # Errors
    ///
    /// Returns `Error::ColumnOutOfBounds` if `col` does not exist.
    pub fn column(&self, col: usize) -> GameResult<&Column> {
        self.columns.get(col).ok_or(Error::ColumnOutOfBounds(col))
    }

    /// Place the current player's token on top of a column.
    ///
    /// Returns `false` and leaves the board untouched if the column does not
    /// exist.
    pub fn drop(&mut self, col: usize) -> bool {
        let result = self.column_index(col).map(|col| {
            self.columns[col].append(self.turn);
        });
        self.finish("drop", result)
    }

    /// Insert the current player's token at `row` of a column, lifting the
    /// tokens above it. `row` may be at most the column's height.
    pub fn power_drop(&mut self, col: usize, row: usize) -> bool {
        let turn = self.turn;
        let result = self.column_index(col).and_then(|col| {
            self.columns[col]
                .insert_at(row, turn)
                .map_err(|_| MoveError::RowOutOfRange { col, row })
        });
        self.finish("power drop", result)
    }

    /// Remove the bottom token of a column if it belongs to the current
    /// player. The tokens above fall down one row.
    pub fn pop(&mut self, col: usize) -> bool {
        let result = self
            .column_index(col)
            .and_then(|col| {
                if self.columns[col].is_empty() {
                    return Err(MoveError::EmptyColumn(col));
                }
                self.owned_by_turn(col, 0)
            })
            .and_then(|col| {
                self.columns[col]
                    .delete_at(0)
                    .map(|_| ())
                    .map_err(|_| MoveError::EmptyColumn(col))
            });
        self.finish("pop", result)
    }

    /// Remove the current player's token at `row` of a column. The tokens
    /// above fall down one row.
    pub fn power_pop(&mut self, col: usize, row: usize) -> bool {
        let result = self
            .column_index(col)
            .and_then(|col| self.owned_by_turn(col, row))
            .and_then(|col| {
                self.columns[col]
                    .delete_at(row)
                    .map(|_| ())
                    .map_err(|_| MoveError::RowOutOfRange { col, row })
            });
        self.finish("power pop", result)
    }

    fn column_index(&self, col: usize) -> Result<usize, MoveError> {
        if col >= NUM_COLS {
            return Err(MoveError::InvalidColumn(col));
        }
        Ok(col)
    }

    /// Check that (col, row) holds a token of the player to move.
    fn owned_by_turn(&self, col: usize, row: usize) -> Result<usize, MoveError> {
        match self.columns[col].get(row) {
            Ok(&owner) if owner == self.turn => Ok(col),
            Ok(&owner) => Err(MoveError::NotOwned { col, row, owner }),
            Err(_) => Err(MoveError::RowOutOfRange { col, row }),
        }
    }

    /// Hand the turn over after an applied move, or log why it was rejected.
    fn finish(&mut self, action: &str, result: Result<(), MoveError>) -> bool {
        match result {
            Ok(()) => {
                log::debug!("{:?} played {action}", self.turn);
                self.turn = self.turn.other();
                true
            }
            Err(e) => {
                log::debug!("rejected {action} by {:?}: {e}", self.turn);
                false
            }
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.size_col(), 7);
        assert_eq!(board.size_row(), 6);
        assert_eq!(board.current_player(), Token::FIRST_PLAYER);
        assert_eq!(board.empty_symbol(), '-');
        for col in 0..NUM_COLS {
            assert_eq!(board.column(col).unwrap().size(), 0);
            for row in 0..MIN_ROWS {
                assert_eq!(board.get(col, row), Ok(None));
            }
        }
    }

    #[test]
    fn test_get_out_of_bounds() {
        let board = Board::new();
        let err = board.get(7, 0).unwrap_err();
        assert_eq!(err.to_string(), "Col 7, Row 0 out of bounds!");
        assert_eq!(
            board.get(0, 6),
            Err(Error::CellOutOfBounds { col: 0, row: 6 })
        );
        assert_eq!(board.column(7).unwrap_err(), Error::ColumnOutOfBounds(7));
    }

    #[test]
    fn test_drop() {
        let mut board = Board::new();
        assert!(!board.drop(10));
        assert_eq!(board.current_player(), Token::Red);

        assert!(board.drop(2));
        assert_eq!(board.column(2).unwrap().size(), 1);
        assert_eq!(board.get(2, 0), Ok(Some(Token::Red)));
        assert_eq!(board.current_player(), Token::Yellow);
    }

    #[test]
    fn test_size_row_grows_with_margin() {
        let mut board = Board::new();
        for _ in 0..5 {
            assert!(board.drop(2));
        }
        assert_eq!(board.size_row(), 6);
        assert!(board.drop(2));
        assert_eq!(board.size_row(), 7);
        assert_eq!(board.get(2, 6), Ok(None));

        // the first player owns the bottom token again after six moves
        assert!(board.pop(2));
        assert_eq!(board.size_row(), 6);
        assert_eq!(board.get(2, 1), Ok(Some(Token::Red)));
    }

    #[test]
    fn test_power_drop() {
        let mut board = Board::new();
        assert!(!board.power_drop(3, 5));
        assert!(!board.power_drop(3, 1));
        assert!(!board.power_drop(7, 0));
        assert_eq!(board.current_player(), Token::Red);

        assert!(board.power_drop(3, 0));
        assert!(board.power_drop(3, 0));
        assert!(board.power_drop(3, 2));
        let column: Vec<Token> = board.column(3).unwrap().iter().copied().collect();
        assert_eq!(column, vec![Token::Yellow, Token::Red, Token::Red]);
        assert_eq!(board.current_player(), Token::Yellow);
    }

    #[test]
    fn test_pop_requires_own_bottom_token() {
        let mut board = Board::new();
        assert!(!board.pop(0));
        assert!(!board.pop(7));

        assert!(board.drop(0)); // red
        assert!(board.drop(0)); // yellow
        // red to move, bottom is red
        assert!(board.pop(0));
        assert_eq!(board.get(0, 0), Ok(Some(Token::Yellow)));
        assert_eq!(board.column(0).unwrap().size(), 1);

        // yellow to move, play elsewhere so red faces a yellow bottom
        assert!(board.drop(1));
        assert_eq!(board.current_player(), Token::Red);
        assert!(!board.pop(0));
        assert_eq!(board.current_player(), Token::Red);
        assert_eq!(board.column(0).unwrap().size(), 1);
    }

    #[test]
    fn test_power_pop() {
        let mut board = Board::new();
        for _ in 0..4 {
            assert!(board.drop(4));
        }
        // red to move, column is R Y R Y
        assert!(!board.power_pop(4, 1));
        assert!(!board.power_pop(4, 4));
        assert!(!board.power_pop(9, 0));
        assert!(board.power_pop(4, 2));

        let column: Vec<Token> = board.column(4).unwrap().iter().copied().collect();
        assert_eq!(column, vec![Token::Red, Token::Yellow, Token::Yellow]);
        assert_eq!(board.current_player(), Token::Yellow);
    }
}
