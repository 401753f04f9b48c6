use super::components::Token;

/// Precondition violations raised by direct element access.
///
/// The display strings are part of the public contract and match exactly.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Container index outside the live elements.
    #[error("Index: {0} out of bounds!")]
    IndexOutOfBounds(usize),

    /// Container requested with zero capacity.
    #[error("Capacity must be positive.")]
    NonPositiveCapacity,

    /// Cell outside the displayed grid.
    #[error("Col {col}, Row {row} out of bounds!")]
    CellOutOfBounds { col: usize, row: usize },

    /// Column index past the last column.
    #[error("Col {0} out of bounds!")]
    ColumnOutOfBounds(usize),
}

/// Result type making use of custom errors.
pub type GameResult<T> = Result<T, Error>;

/// Reasons a move is rejected. Never leaves the crate, moves report `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub(crate) enum MoveError {
    #[error("column {0} does not exist")]
    InvalidColumn(usize),

    #[error("row {row} is not a valid position in column {col}")]
    RowOutOfRange { col: usize, row: usize },

    #[error("column {0} is empty")]
    EmptyColumn(usize),

    #[error("token at column {col}, row {row} belongs to {owner:?}")]
    NotOwned { col: usize, row: usize, owner: Token },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_error_display() {
        assert_eq!(Error::IndexOutOfBounds(7).to_string(), "Index: 7 out of bounds!");
    }

    #[test]
    fn test_capacity_error_display() {
        assert_eq!(
            Error::NonPositiveCapacity.to_string(),
            "Capacity must be positive."
        );
    }

    #[test]
    fn test_cell_error_display() {
        let err = Error::CellOutOfBounds { col: 9, row: 2 };
        assert_eq!(err.to_string(), "Col 9, Row 2 out of bounds!");
        assert_eq!(Error::ColumnOutOfBounds(8).to_string(), "Col 8 out of bounds!");
    }

    #[test]
    fn test_move_error_display() {
        let err = MoveError::NotOwned {
            col: 2,
            row: 0,
            owner: Token::Yellow,
        };
        assert_eq!(
            err.to_string(),
            "token at column 2, row 0 belongs to Yellow"
        );
    }
}
