use std::fmt;

use crate::packed::PackedMove;

/// A move confirmed legal in the position it was generated for.
///
/// Only [`PackedMove::confirm_legal`] produces one, and it offers no mutators:
/// to change a square the caller has to go back through
/// [`MoveBuilder`](crate::builder::MoveBuilder), which drops the legality bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LegalMove(pub(crate) PackedMove);

impl LegalMove {
    /// The underlying packed move, legality bit set.
    #[inline]
    pub const fn into_move(self) -> PackedMove {
        self.0
    }
}

impl std::ops::Deref for LegalMove {
    type Target = PackedMove;

    fn deref(&self) -> &PackedMove {
        &self.0
    }
}

impl From<LegalMove> for PackedMove {
    fn from(mv: LegalMove) -> Self {
        mv.0
    }
}

impl PartialEq<PackedMove> for LegalMove {
    fn eq(&self, other: &PackedMove) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for LegalMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shakmaty::Square;

    #[test]
    fn test_confirm_sets_only_legality() {
        let mv = PackedMove::two_forward(Square::E2, Square::E4);

        let legal = mv.confirm_legal();

        assert!(legal.is_legal());
        assert!(legal.is_double_advance());
        assert_eq!(legal.raw() & !mv.raw(), 1 << 31);
    }

    #[test]
    fn test_confirm_is_idempotent() {
        let legal = PackedMove::white_oo().confirm_legal();

        assert_eq!(legal.into_move().confirm_legal(), legal);
    }

    #[test]
    fn test_display_matches_move() {
        let legal = PackedMove::new(Square::G1, Square::F3).confirm_legal();

        assert_eq!(legal.to_string(), "g1f3");
        assert_eq!(legal, legal.into_move());
    }
}
