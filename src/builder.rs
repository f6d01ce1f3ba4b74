use shakmaty::{Color, Role, Square};

use crate::layout::*;
use crate::packed::PackedMove;

/// Incremental construction surface for move generators.
///
/// Wraps a [`PackedMove`] and exposes the field mutators that the public move
/// API deliberately lacks. Changing either square drops any legality proof
/// the move carried.
#[derive(Debug, Clone, Copy, Default)]
pub struct MoveBuilder {
    mv: PackedMove,
}

impl From<PackedMove> for MoveBuilder {
    fn from(mv: PackedMove) -> Self {
        Self { mv }
    }
}

impl MoveBuilder {
    /// Start from an empty move.
    #[inline]
    pub const fn new() -> Self {
        Self {
            mv: PackedMove(0),
        }
    }

    /// Restore a move from its stored packed value, bits unchanged.
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        Self {
            mv: PackedMove(raw),
        }
    }

    /// Set the source square. Clears legality.
    #[inline]
    pub const fn set_from(mut self, from: Square) -> Self {
        self.mv.0 = (self.mv.0 & !FROM_BITS & !LEGAL_BIT) | ((from as u32) << FROM_SHIFT);
        self
    }

    /// Set the destination square. Clears legality.
    #[inline]
    pub const fn set_to(mut self, to: Square) -> Self {
        self.mv.0 = (self.mv.0 & !TO_BITS & !LEGAL_BIT) | ((to as u32) << TO_SHIFT);
        self
    }

    /// Set the type of the moving piece.
    #[inline]
    pub const fn set_role(mut self, role: Option<Role>) -> Self {
        self.mv.0 = (self.mv.0 & !ROLE_BITS) | (role_bits(role) << ROLE_SHIFT);
        self
    }

    /// Set the type of the captured piece.
    #[inline]
    pub const fn set_captured(mut self, captured: Option<Role>) -> Self {
        self.mv.0 = (self.mv.0 & !CAPTURED_BITS) | (role_bits(captured) << CAPTURED_SHIFT);
        self
    }

    /// Mark as the initial two-square pawn push.
    #[inline]
    pub const fn set_two_forward(mut self) -> Self {
        self.mv.0 |= TWO_FORWARD_BIT;
        self
    }

    /// Mark as an en passant capture, which always takes a pawn.
    #[inline]
    pub const fn set_en_passant(mut self) -> Self {
        self.mv.0 |= EN_PASSANT_BIT;
        self.set_captured(Some(Role::Pawn))
    }

    /// Set the promotion piece. `None` removes the promotion entirely.
    #[inline]
    pub const fn set_promoted(mut self, promoted: Option<Role>) -> Self {
        self.mv.0 &= !(PROMOTED_BITS | PROMOTION_BIT);
        if let Some(role) = promoted {
            self.mv.0 |= PROMOTION_BIT | ((role as u32) << PROMOTED_SHIFT);
        }
        self
    }

    /// Set the side making the move.
    #[inline]
    pub const fn set_color(mut self, color: Color) -> Self {
        match color {
            Color::White => self.mv.0 &= !BLACK_BIT,
            Color::Black => self.mv.0 |= BLACK_BIT,
        }
        self
    }

    /// Annotate the move as giving check.
    #[inline]
    pub const fn set_check(mut self) -> Self {
        self.mv.0 |= CHECK_BIT;
        self
    }

    /// Annotate the move as giving mate.
    #[inline]
    pub const fn set_mate(mut self) -> Self {
        self.mv.0 |= MATE_BIT;
        self
    }

    #[inline]
    pub const fn build(self) -> PackedMove {
        self.mv
    }
}
