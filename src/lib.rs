// #![deny(warnings)]
#![warn(missing_docs)]
//! Power Connect Four rules engine.
//!
//! Seven columns of unbounded height, each backed by a [`GrowableArray`].
//! Besides dropping on top, players may insert a token anywhere in a column
//! (power drop) or remove one of their own tokens from the bottom (pop) or
//! from any row (power pop).
pub(crate) mod game;
pub use game::{
    Board, Column, Error, GameResult, GrowableArray, Token, CONNECT, DEFAULT_CAPACITY,
    EMPTY_SYMBOL, MARGIN_ROWS, MIN_ROWS, NUM_COLS,
};
