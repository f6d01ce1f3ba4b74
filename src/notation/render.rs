use std::fmt::{self, Write};

use shakmaty::Square;

use crate::packed::PackedMove;

fn write_square(out: &mut impl Write, square: Square) -> fmt::Result {
    out.write_char(square.file().char())?;
    out.write_char(square.rank().char())
}

impl PackedMove {
    /// Source square as text, e.g. `e2`.
    pub fn from_square_string(self) -> String {
        self.from().to_string()
    }

    /// Destination square as text, e.g. `e4`.
    pub fn to_square_string(self) -> String {
        self.to().to_string()
    }

    /// Write both squares and any promotion suffix, nothing else.
    fn write_geometry(self, out: &mut impl Write) -> fmt::Result {
        write_square(out, self.from())?;
        write_square(out, self.to())?;
        if self.is_promotion() {
            if let Some(role) = self.promoted_role() {
                out.write_char('=')?;
                out.write_char(role.upper_char())?;
            }
        }
        Ok(())
    }

    /// Squares and promotion, e.g. `e7e8=Q`, regardless of legality.
    pub fn dump_algebraic(self) -> String {
        let mut text = String::with_capacity(6);
        // Writing into a String cannot fail
        let _ = self.write_geometry(&mut text);
        text
    }

    /// Display form: `--` for the null move, `?` for an untested move,
    /// otherwise squares and promotion.
    pub fn to_algebraic(self) -> String {
        self.to_string()
    }

    /// Diagnostic form: always shows the squares, prefixed by `?` when the
    /// move is untested.
    pub fn to_algebraic_debug(self) -> String {
        let mut text = String::with_capacity(7);
        if !self.is_legal() {
            text.push('?');
        }
        // Writing into a String cannot fail
        let _ = self.write_geometry(&mut text);
        text
    }
}

impl fmt::Display for PackedMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_null_move() {
            f.write_str("--")
        } else if !self.is_legal() {
            f.write_char('?')
        } else {
            self.write_geometry(f)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::MoveBuilder;
    use shakmaty::{Color, Role};
    use test_case::test_case;

    fn legal(mv: PackedMove) -> PackedMove {
        mv.confirm_legal().into_move()
    }

    #[test]
    fn test_untested_move_hides_squares() {
        let mv = PackedMove::from_uci("e2e4");

        assert_eq!(mv.to_algebraic(), "?");
        assert_eq!(mv.to_algebraic_debug(), "?e2e4");
        assert_eq!(mv.dump_algebraic(), "e2e4");
    }

    #[test]
    fn test_legal_move_shows_squares() {
        let mv = legal(PackedMove::two_forward(Square::E2, Square::E4));

        assert_eq!(mv.to_algebraic(), "e2e4");
        assert_eq!(mv.to_algebraic_debug(), "e2e4");
        assert_eq!(mv.to_string(), "e2e4");
    }

    #[test_case(PackedMove::NULL ; "untested")]
    #[test_case(legal(PackedMove::NULL) ; "legal")]
    fn test_null_move_placeholder(mv: PackedMove) {
        assert_eq!(mv.to_algebraic(), "--");
    }

    #[test]
    fn test_debug_form_shows_null_geometry() {
        assert_eq!(PackedMove::NULL.to_algebraic_debug(), "?a2a2");
    }

    #[test_case(Role::Queen, "a7a8=Q")]
    #[test_case(Role::Rook, "a7a8=R")]
    #[test_case(Role::Bishop, "a7a8=B")]
    #[test_case(Role::Knight, "a7a8=N")]
    fn test_promotion_suffix(role: Role, expected: &str) {
        let mv = legal(PackedMove::promote(Square::A7, Square::A8, role));
        assert_eq!(mv.to_algebraic(), expected);
    }

    #[test]
    fn test_black_promotion_letter_is_uppercase() {
        let mv = MoveBuilder::from(PackedMove::capture_promote(
            Square::B2,
            Square::A1,
            Role::Knight,
            Role::Rook,
        ))
        .set_color(Color::Black)
        .build();

        assert_eq!(legal(mv).to_algebraic(), "b2a1=N");
    }

    #[test]
    fn test_promotion_bit_without_piece_renders_plain() {
        let stored = PackedMove::promote(Square::E7, Square::E8, Role::Queen).raw();
        let mv = MoveBuilder::from_raw(stored & !crate::layout::PROMOTED_BITS).build();

        assert!(mv.is_promotion());
        assert_eq!(mv.promoted_role(), None);
        assert_eq!(mv.dump_algebraic(), "e7e8");
        assert_eq!(legal(mv).to_algebraic(), "e7e8");
    }

    #[test]
    fn test_square_strings() {
        let mv = PackedMove::knight_move(Square::G8, Square::F6, None);

        assert_eq!(mv.from_square_string(), "g8");
        assert_eq!(mv.to_square_string(), "f6");
    }

    #[test_case(PackedMove::white_oo(), "e1g1")]
    #[test_case(PackedMove::black_ooo(), "e8c8")]
    #[test_case(PackedMove::en_passant(Square::E5, Square::D6), "e5d6")]
    #[test_case(PackedMove::capture_promote(Square::G2, Square::H1, Role::Queen, Role::Rook), "g2h1=Q")]
    fn test_render_then_parse(mv: PackedMove, text: &str) {
        let rendered = legal(mv).to_algebraic_debug();
        assert_eq!(rendered, text);

        let parsed = PackedMove::from_uci(&rendered);
        assert_eq!(parsed.from(), mv.from());
        assert_eq!(parsed.to(), mv.to());
        assert_eq!(parsed.promoted_role(), mv.promoted_role());
        assert!(!parsed.is_legal());
    }
}
