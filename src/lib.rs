//! Bit-packed chess moves.
//!
//! A [`PackedMove`] stores a move in 32 bits together with what is needed to
//! replay it on a board: moving piece, captured piece, promotion, castling,
//! en passant, double pawn push, side to move and a legality flag set by a
//! validator. [`UndoState`] carries the position state a move destroys.
//!
//! Move generators build moves through the category constructors on
//! [`PackedMove`] and the [`MoveBuilder`]; the public query surface of a move
//! is read-only.

mod factory;
mod layout;

pub mod board;
pub mod builder;
pub mod legal;
pub mod notation;
pub mod packed;
pub mod undo;

#[cfg(feature = "terminal")]
pub mod terminal;

pub use builder::MoveBuilder;
pub use legal::LegalMove;
pub use notation::ParseMoveError;
pub use packed::PackedMove;
pub use undo::{CastlingRights, MoveRecord, UndoState};
