use std::str::{Chars, FromStr};

use log::debug;
use shakmaty::{File, Rank, Role, Square};
use thiserror::Error;

use crate::builder::MoveBuilder;
use crate::packed::PackedMove;

/// Where coordinate text stopped looking like a move.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ParseMoveError {
    /// Expected a file letter a-h
    #[error("expected file a-h at position {index}, found {found:?}")]
    BadFile { index: usize, found: Option<char> },
    /// Expected a rank digit 1-8
    #[error("expected rank 1-8 at position {index}, found {found:?}")]
    BadRank { index: usize, found: Option<char> },
}

impl PackedMove {
    /// Parse coordinate notation into an untested move.
    ///
    /// Accepts `<file><rank><file><rank>` followed by an optional promotion
    /// letter (Q, R, B or N in either case), itself optionally preceded by `=`
    /// or `(`. Anything the parser fails to read as two squares yields the
    /// empty default move. An unknown promotion letter is read as no
    /// promotion at all, and characters past the token are ignored.
    pub fn from_uci(text: &str) -> PackedMove {
        match text.parse() {
            Ok(mv) => mv,
            Err(err) => {
                debug!("Rejected coordinate move {text:?}: {err}");
                PackedMove::default()
            }
        }
    }
}

/// Same reading as [`PackedMove::from_uci`], reporting the first bad character.
impl FromStr for PackedMove {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let from = read_square(&mut chars, 0)?;
        let to = read_square(&mut chars, 2)?;

        let builder = MoveBuilder::from(PackedMove::new(from, to));
        Ok(builder.set_promoted(read_promotion(&mut chars)).build())
    }
}

fn read_square(chars: &mut Chars<'_>, index: usize) -> Result<Square, ParseMoveError> {
    let found = chars.next();
    let file = found
        .and_then(File::from_char)
        .ok_or(ParseMoveError::BadFile { index, found })?;

    let found = chars.next();
    let rank = found
        .and_then(Rank::from_char)
        .ok_or(ParseMoveError::BadRank {
            index: index + 1,
            found,
        })?;

    Ok(Square::from_coords(file, rank))
}

fn read_promotion(chars: &mut Chars<'_>) -> Option<Role> {
    let mut c = chars.next()?;
    if matches!(c, '=' | '(') {
        c = chars.next()?;
    }
    promotion_role(c)
}

fn promotion_role(c: char) -> Option<Role> {
    match c.to_ascii_uppercase() {
        'Q' => Some(Role::Queen),
        'R' => Some(Role::Rook),
        'B' => Some(Role::Bishop),
        'N' => Some(Role::Knight),
        _ => None,
    }
}
