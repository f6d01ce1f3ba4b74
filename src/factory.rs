//! One constructor per move category.
//!
//! Every constructor yields an untested move (legality unset). All of them
//! record White as the side to move except [`PackedMove::black_oo`] and
//! [`PackedMove::black_ooo`], whose squares fix the side. Move generators
//! stamp the side with [`MoveBuilder::set_color`] and confirm legality once
//! verified.
//!
//! [`MoveBuilder::set_color`]: crate::builder::MoveBuilder::set_color

use shakmaty::{Role, Square};

use crate::layout::*;
use crate::packed::PackedMove;

#[inline]
const fn piece_move(from: Square, to: Square, role: Role, captured: Option<Role>) -> PackedMove {
    PackedMove(
        squares(from, to)
            | ((role as u32) << ROLE_SHIFT)
            | (role_bits(captured) << CAPTURED_SHIFT),
    )
}

impl PackedMove {
    /// Pawn push of one square.
    #[inline]
    pub const fn one_forward(from: Square, to: Square) -> Self {
        piece_move(from, to, Role::Pawn, None)
    }

    /// Pawn push of two squares from its starting rank.
    #[inline]
    pub const fn two_forward(from: Square, to: Square) -> Self {
        Self(piece_move(from, to, Role::Pawn, None).0 | TWO_FORWARD_BIT)
    }

    /// Pawn push onto the last rank, promoting to `promoted`.
    #[inline]
    pub const fn promote(from: Square, to: Square, promoted: Role) -> Self {
        Self::capture_promote_inner(from, to, promoted, None)
    }

    /// Pawn capture onto the last rank, promoting to `promoted`.
    #[inline]
    pub const fn capture_promote(from: Square, to: Square, promoted: Role, captured: Role) -> Self {
        Self::capture_promote_inner(from, to, promoted, Some(captured))
    }

    #[inline]
    const fn capture_promote_inner(
        from: Square,
        to: Square,
        promoted: Role,
        captured: Option<Role>,
    ) -> Self {
        Self(
            piece_move(from, to, Role::Pawn, captured).0
                | ((promoted as u32) << PROMOTED_SHIFT)
                | PROMOTION_BIT,
        )
    }

    /// Pawn capturing en passant. The captured piece is always a pawn.
    #[inline]
    pub const fn en_passant(from: Square, to: Square) -> Self {
        Self(piece_move(from, to, Role::Pawn, Some(Role::Pawn)).0 | EN_PASSANT_BIT)
    }

    /// Pawn move off the last rank, capturing `captured` if any.
    #[inline]
    pub const fn pawn_move(from: Square, to: Square, captured: Option<Role>) -> Self {
        piece_move(from, to, Role::Pawn, captured)
    }

    #[inline]
    pub const fn knight_move(from: Square, to: Square, captured: Option<Role>) -> Self {
        piece_move(from, to, Role::Knight, captured)
    }

    #[inline]
    pub const fn bishop_move(from: Square, to: Square, captured: Option<Role>) -> Self {
        piece_move(from, to, Role::Bishop, captured)
    }

    #[inline]
    pub const fn rook_move(from: Square, to: Square, captured: Option<Role>) -> Self {
        piece_move(from, to, Role::Rook, captured)
    }

    #[inline]
    pub const fn queen_move(from: Square, to: Square, captured: Option<Role>) -> Self {
        piece_move(from, to, Role::Queen, captured)
    }

    /// Ordinary king step. Castling has its own constructors.
    #[inline]
    pub const fn king_move(from: Square, to: Square, captured: Option<Role>) -> Self {
        piece_move(from, to, Role::King, captured)
    }

    /// White castles kingside: e1g1.
    #[inline]
    pub const fn white_oo() -> Self {
        Self(piece_move(Square::E1, Square::G1, Role::King, None).0 | CASTLING_BIT)
    }

    /// White castles queenside: e1c1.
    #[inline]
    pub const fn white_ooo() -> Self {
        Self(piece_move(Square::E1, Square::C1, Role::King, None).0 | CASTLING_BIT)
    }

    /// Black castles kingside: e8g8.
    #[inline]
    pub const fn black_oo() -> Self {
        Self(piece_move(Square::E8, Square::G8, Role::King, None).0 | CASTLING_BIT | BLACK_BIT)
    }

    /// Black castles queenside: e8c8.
    #[inline]
    pub const fn black_ooo() -> Self {
        Self(piece_move(Square::E8, Square::C8, Role::King, None).0 | CASTLING_BIT | BLACK_BIT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shakmaty::Color;
    use test_case::test_case;

    #[test]
    fn test_one_forward() {
        let mv = PackedMove::one_forward(Square::E2, Square::E3);

        assert_eq!(mv.role(), Some(Role::Pawn));
        assert_eq!(mv.captured_role(), None);
        assert!(!mv.is_special());
        assert!(!mv.is_legal());
    }

    #[test]
    fn test_two_forward() {
        let mv = PackedMove::two_forward(Square::E2, Square::E4);

        assert!(mv.is_double_advance());
        assert!(mv.is_special());
        assert!(!mv.is_capture());
    }

    #[test]
    fn test_promote() {
        let mv = PackedMove::promote(Square::E7, Square::E8, Role::Knight);

        assert!(mv.is_promotion());
        assert_eq!(mv.promoted_role(), Some(Role::Knight));
        assert_eq!(mv.captured_role(), None);
    }

    #[test]
    fn test_capture_promote() {
        let mv = PackedMove::capture_promote(Square::B7, Square::A8, Role::Queen, Role::Rook);

        assert!(mv.is_promotion());
        assert!(mv.is_capture());
        assert_eq!(mv.promoted_role(), Some(Role::Queen));
        assert_eq!(mv.captured_role(), Some(Role::Rook));
    }

    #[test]
    fn test_en_passant_captures_pawn() {
        let mv = PackedMove::en_passant(Square::E5, Square::D6);

        assert!(mv.is_en_passant());
        assert!(mv.is_capture());
        assert_eq!(mv.captured_role(), Some(Role::Pawn));
        assert_eq!(mv.role(), Some(Role::Pawn));
    }

    #[test_case(PackedMove::pawn_move(Square::E4, Square::D5, Some(Role::Pawn)), Role::Pawn)]
    #[test_case(PackedMove::knight_move(Square::C3, Square::D5, Some(Role::Pawn)), Role::Knight)]
    #[test_case(PackedMove::bishop_move(Square::B3, Square::D5, Some(Role::Pawn)), Role::Bishop)]
    #[test_case(PackedMove::rook_move(Square::D1, Square::D5, Some(Role::Pawn)), Role::Rook)]
    #[test_case(PackedMove::queen_move(Square::A5, Square::D5, Some(Role::Pawn)), Role::Queen)]
    #[test_case(PackedMove::king_move(Square::E4, Square::D5, Some(Role::Pawn)), Role::King)]
    fn test_piece_captures(mv: PackedMove, role: Role) {
        assert_eq!(mv.role(), Some(role));
        assert_eq!(mv.to(), Square::D5);
        assert_eq!(mv.captured_role(), Some(Role::Pawn));
        assert!(!mv.is_special());
    }

    #[test]
    fn test_quiet_piece_move() {
        let mv = PackedMove::bishop_move(Square::F1, Square::C4, None);

        assert!(!mv.is_capture());
        assert_eq!(mv.captured_piece(), None);
    }

    #[test_case(PackedMove::white_oo(), Square::E1, Square::G1, Color::White)]
    #[test_case(PackedMove::white_ooo(), Square::E1, Square::C1, Color::White)]
    #[test_case(PackedMove::black_oo(), Square::E8, Square::G8, Color::Black)]
    #[test_case(PackedMove::black_ooo(), Square::E8, Square::C8, Color::Black)]
    fn test_castling(mv: PackedMove, from: Square, to: Square, color: Color) {
        assert!(mv.is_castling());
        assert!(mv.is_special());
        assert_eq!(mv.from(), from);
        assert_eq!(mv.to(), to);
        assert_eq!(mv.role(), Some(Role::King));
        assert_eq!(mv.color(), color);
        assert!(!mv.is_legal());
    }

    #[test]
    fn test_only_castling_constructors_set_castling() {
        let others = [
            PackedMove::one_forward(Square::E2, Square::E3),
            PackedMove::two_forward(Square::E2, Square::E4),
            PackedMove::promote(Square::E7, Square::E8, Role::Queen),
            PackedMove::en_passant(Square::E5, Square::D6),
            PackedMove::king_move(Square::E1, Square::G1, None),
        ];
        assert!(others.iter().all(|mv| !mv.is_castling()));
    }
}
