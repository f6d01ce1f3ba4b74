use shakmaty::{CastlingSide, Color, File};

use crate::packed::PackedMove;

const HALFMOVE_MASK: u16 = 0x00FF;
const CASTLING_SHIFT: u16 = 8;
const CASTLING_MASK: u16 = 0x0F00;
const EP_SHIFT: u16 = 12;

/// Castling availability before a move, one bit per color and side.
///
/// ```text
/// 0001 = white kingside
/// 0010 = white queenside
/// 0100 = black kingside
/// 1000 = black queenside
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CastlingRights(u8);

impl CastlingRights {
    pub const NONE: CastlingRights = CastlingRights(0);
    pub const ALL: CastlingRights = CastlingRights(0x0F);

    #[inline]
    const fn bit(color: Color, side: CastlingSide) -> u8 {
        let shift = match (color, side) {
            (Color::White, CastlingSide::KingSide) => 0,
            (Color::White, CastlingSide::QueenSide) => 1,
            (Color::Black, CastlingSide::KingSide) => 2,
            (Color::Black, CastlingSide::QueenSide) => 3,
        };
        1 << shift
    }

    /// Rights from the low nibble of `bits`.
    #[inline]
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits & 0x0F)
    }

    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }

    #[inline]
    pub const fn has(self, color: Color, side: CastlingSide) -> bool {
        self.0 & Self::bit(color, side) != 0
    }

    #[inline]
    pub const fn with(self, color: Color, side: CastlingSide) -> Self {
        Self(self.0 | Self::bit(color, side))
    }

    #[inline]
    pub const fn without(self, color: Color, side: CastlingSide) -> Self {
        Self(self.0 & !Self::bit(color, side))
    }
}

/// Position state a move destroys, captured before the move is made.
///
/// ```text
/// 00000000 11111111 = half-move clock
/// 00001111 00000000 = castling rights
/// 11110000 00000000 = en passant file + 1, 0 for none
/// ```
///
/// The codec only stores and returns these fields; the board that made the
/// move decides what they mean when taking it back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct UndoState(u16);

impl UndoState {
    pub const fn new(halfmove_clock: u8, castling: CastlingRights, ep_file: Option<File>) -> Self {
        let ep = match ep_file {
            Some(file) => file as u16 + 1,
            None => 0,
        };
        Self(halfmove_clock as u16 | ((castling.bits() as u16) << CASTLING_SHIFT) | (ep << EP_SHIFT))
    }

    /// Restore from a stored value.
    #[inline]
    pub const fn from_raw(raw: u16) -> Self {
        Self(raw)
    }

    #[inline]
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// Plies since the last capture or pawn move.
    #[inline]
    pub const fn halfmove_clock(self) -> u8 {
        (self.0 & HALFMOVE_MASK) as u8
    }

    #[inline]
    pub const fn castling_rights(self) -> CastlingRights {
        CastlingRights::from_bits(((self.0 & CASTLING_MASK) >> CASTLING_SHIFT) as u8)
    }

    /// File of the en passant target before the move, if there was one.
    #[inline]
    pub fn ep_file(self) -> Option<File> {
        match self.0 >> EP_SHIFT {
            n @ 1..=8 => Some(File::new(u32::from(n - 1))),
            _ => None,
        }
    }
}

/// A move paired with the state needed to take it back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MoveRecord {
    pub mv: PackedMove,
    pub undo: UndoState,
}

impl MoveRecord {
    #[inline]
    pub fn new(mv: PackedMove, undo: UndoState) -> Self {
        Self { mv, undo }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn test_default_is_empty() {
        let undo = UndoState::default();

        assert_eq!(undo.halfmove_clock(), 0);
        assert_eq!(undo.castling_rights(), CastlingRights::NONE);
        assert_eq!(undo.ep_file(), None);
    }

    #[test_case(0, CastlingRights::ALL, None)]
    #[test_case(255, CastlingRights::NONE, Some(File::A))]
    #[test_case(49, CastlingRights::NONE.with(Color::Black, CastlingSide::QueenSide), Some(File::H))]
    #[test_case(7, CastlingRights::ALL.without(Color::White, CastlingSide::KingSide), Some(File::D))]
    fn test_fields_are_retrieved_exactly(clock: u8, castling: CastlingRights, ep: Option<File>) {
        let undo = UndoState::new(clock, castling, ep);

        assert_eq!(undo.halfmove_clock(), clock);
        assert_eq!(undo.castling_rights(), castling);
        assert_eq!(undo.ep_file(), ep);
        assert_eq!(UndoState::from_raw(undo.raw()), undo);
    }

    #[test]
    fn test_castling_rights_bits() {
        let rights = CastlingRights::NONE
            .with(Color::White, CastlingSide::QueenSide)
            .with(Color::Black, CastlingSide::KingSide);

        assert_eq!(rights.bits(), 0b0110);
        assert!(rights.has(Color::White, CastlingSide::QueenSide));
        assert!(!rights.has(Color::White, CastlingSide::KingSide));
        assert!(rights.has(Color::Black, CastlingSide::KingSide));
        assert!(!rights.has(Color::Black, CastlingSide::QueenSide));
    }

    #[test]
    fn test_castling_rights_ignore_high_bits() {
        assert_eq!(CastlingRights::from_bits(0xFF), CastlingRights::ALL);
    }

    #[test]
    fn test_record_keeps_move_and_undo_apart() {
        let undo = UndoState::new(3, CastlingRights::ALL, None);
        let record = MoveRecord::new(PackedMove::white_oo(), undo);

        assert_eq!(record.mv, PackedMove::white_oo());
        assert_eq!(record.undo, undo);
    }
}
