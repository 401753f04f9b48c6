pub(crate) mod board;
pub(crate) mod components;
pub(crate) mod error;
pub(crate) mod growable;
mod lines;

pub use board::{Board, Column};
pub use components::{Token, CONNECT, EMPTY_SYMBOL, MARGIN_ROWS, MIN_ROWS, NUM_COLS};
pub use error::{Error, GameResult};
pub use growable::{GrowableArray, DEFAULT_CAPACITY};
