/// Number of columns on the board.
pub const NUM_COLS: usize = 7;
/// Rows shown while no column is taller than this.
pub const MIN_ROWS: usize = 6;
/// Empty rows kept above the tallest column once it outgrows `MIN_ROWS`.
pub const MARGIN_ROWS: usize = 1;
/// Symbol used for cells that hold no token.
pub const EMPTY_SYMBOL: char = '-';
/// Length of a winning line.
pub const CONNECT: usize = 4;

/// The tokens a player can place on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    /// First player, shown as `R`.
    Red,
    /// Second player, shown as `Y`.
    Yellow,
}

impl Token {
    /// The player who moves first.
    pub const FIRST_PLAYER: Token = Token::Red;
    /// The player who moves second.
    pub const SECOND_PLAYER: Token = Token::Yellow;

    /// Get the opposing token.
    pub fn other(self) -> Token {
        match self {
            Token::Red => Token::Yellow,
            Token::Yellow => Token::Red,
        }
    }

    /// Single character used when the token is displayed.
    pub fn symbol(self) -> char {
        match self {
            Token::Red => 'R',
            Token::Yellow => 'Y',
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_token() {
        assert_eq!(Token::Red.other(), Token::Yellow);
        assert_eq!(Token::Yellow.other(), Token::Red);
        assert_eq!(Token::FIRST_PLAYER.other(), Token::SECOND_PLAYER);
    }

    #[test]
    fn test_symbols() {
        assert_eq!(Token::Red.symbol(), 'R');
        assert_eq!(Token::Yellow.to_string(), "Y");
        assert_ne!(Token::Red.symbol(), EMPTY_SYMBOL);
    }
}
