//! Move notation: base identifiers, modifiers, and the text parser.
//!
//! Grammar: a move is a base from [`BASE_MOVE_TABLE`] followed by one of the
//! modifiers `""`, `'` or `2`. An algorithm is a whitespace-separated list of
//! moves; `(...)` groups are treated as comments and removed first.

mod parser;
mod token;

pub use parser::{invert_algorithm, invert_move, moves_to_notation, parse_algorithm, parse_move};
pub use token::{
    BaseMove, Modifier, MoveToken, RotationAxis, SliceLayer, WideStyle, BASE_MOVE_TABLE,
};
