//! Coordinate notation: `e2e4`, `e7e8=Q`.

mod parse;
mod render;

pub use parse::ParseMoveError;
