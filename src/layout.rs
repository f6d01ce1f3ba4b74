//! Bit layout of the packed move.
//!
//! ```text
//! 00000000 00000000 00000000 00111111 = from square      bits  0-5
//! 00000000 00000000 00001111 11000000 = to square        bits  6-11
//! 00000000 00000000 01110000 00000000 = piece type       bits 12-14
//! 00000000 00000000 10000000 00000000 = castling         bit  15
//! 00000000 00000001 00000000 00000000 = pawn 2 forward   bit  16
//! 00000000 00000010 00000000 00000000 = promotion        bit  17
//! 00000000 00011100 00000000 00000000 = captured type    bits 18-20
//! 00000000 00100000 00000000 00000000 = en passant       bit  21
//! 00000001 11000000 00000000 00000000 = promoted type    bits 22-24
//! 00000100 00000000 00000000 00000000 = black to move    bit  26
//! 00100000 00000000 00000000 00000000 = gives mate       bit  29
//! 01000000 00000000 00000000 00000000 = gives check      bit  30
//! 10000000 00000000 00000000 00000000 = legal            bit  31
//! ```
//!
//! Piece type fields hold `shakmaty::Role` discriminants (Pawn = 1 .. King = 6),
//! with 0 meaning "none".

use shakmaty::{Role, Square};

pub(crate) const FROM_SHIFT: u32 = 0;
pub(crate) const TO_SHIFT: u32 = 6;
pub(crate) const ROLE_SHIFT: u32 = 12;
pub(crate) const CAPTURED_SHIFT: u32 = 18;
pub(crate) const PROMOTED_SHIFT: u32 = 22;

pub(crate) const SQUARE_MASK: u32 = 0x3F;
pub(crate) const ROLE_MASK: u32 = 0x7;

pub(crate) const FROM_BITS: u32 = SQUARE_MASK << FROM_SHIFT;
pub(crate) const TO_BITS: u32 = SQUARE_MASK << TO_SHIFT;
pub(crate) const ROLE_BITS: u32 = ROLE_MASK << ROLE_SHIFT;
pub(crate) const CAPTURED_BITS: u32 = ROLE_MASK << CAPTURED_SHIFT;
pub(crate) const PROMOTED_BITS: u32 = ROLE_MASK << PROMOTED_SHIFT;

pub(crate) const CASTLING_BIT: u32 = 1 << 15;
pub(crate) const TWO_FORWARD_BIT: u32 = 1 << 16;
pub(crate) const PROMOTION_BIT: u32 = 1 << 17;
pub(crate) const EN_PASSANT_BIT: u32 = 1 << 21;
pub(crate) const BLACK_BIT: u32 = 1 << 26;
pub(crate) const MATE_BIT: u32 = 1 << 29;
pub(crate) const CHECK_BIT: u32 = 1 << 30;
pub(crate) const LEGAL_BIT: u32 = 1 << 31;

pub(crate) const SPECIAL_BITS: u32 = CASTLING_BIT | TWO_FORWARD_BIT | PROMOTION_BIT | EN_PASSANT_BIT;

/// Informational bits that take no part in move identity.
pub(crate) const ANNOTATION_BITS: u32 = MATE_BIT | CHECK_BIT;

/// Pack a from/to square pair.
#[inline]
pub(crate) const fn squares(from: Square, to: Square) -> u32 {
    ((from as u32) << FROM_SHIFT) | ((to as u32) << TO_SHIFT)
}

/// Encode an optional role into the 3-bit field value.
#[inline]
pub(crate) const fn role_bits(role: Option<Role>) -> u32 {
    match role {
        Some(role) => role as u32,
        None => 0,
    }
}

/// Decode a 3-bit field value. 0 and the unused value 7 decode to `None`.
#[inline]
pub(crate) const fn decode_role(bits: u32) -> Option<Role> {
    match bits & ROLE_MASK {
        1 => Some(Role::Pawn),
        2 => Some(Role::Knight),
        3 => Some(Role::Bishop),
        4 => Some(Role::Rook),
        5 => Some(Role::Queen),
        6 => Some(Role::King),
        _ => None,
    }
}

/// Decode a 6-bit square field.
#[inline]
pub(crate) fn decode_square(bits: u32) -> Square {
    Square::new(bits & SQUARE_MASK)
}
