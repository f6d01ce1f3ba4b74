use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use shakmaty::{Color, File, Piece, Role, Square};

use crate::layout::*;
use crate::legal::LegalMove;

/// A chess move packed into 32 bits.
///
/// Moves only make full sense against the position they were generated in:
/// they remember the moving piece, the captured piece and the special kind of
/// the move. A move built from two squares alone (or parsed from text) is
/// "untested" and stays illegal until a validator confirms it with
/// [`PackedMove::confirm_legal`].
///
/// Equality and ordering follow the packed value (check/mate annotations
/// excluded). The order is stable and numeric, nothing more.
#[derive(Clone, Copy, Default)]
pub struct PackedMove(pub(crate) u32);

impl PackedMove {
    /// Reserved placeholder meaning "no move": a2 to a2.
    pub const NULL: PackedMove = PackedMove(squares(Square::A2, Square::A2));

    /// Untested move with only the from and to squares set.
    #[inline]
    pub const fn new(from: Square, to: Square) -> Self {
        Self(squares(from, to))
    }

    /// The null move placeholder, see [`PackedMove::NULL`].
    #[inline]
    pub const fn null() -> Self {
        Self::NULL
    }

    /// The packed value, for storage by collaborators.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Square the piece sat on before the move.
    #[inline]
    pub fn from(self) -> Square {
        decode_square(self.0 >> FROM_SHIFT)
    }

    /// Square the piece sits on after the move.
    #[inline]
    pub fn to(self) -> Square {
        decode_square(self.0 >> TO_SHIFT)
    }

    /// Uncolored type of the moving piece, if recorded.
    #[inline]
    pub const fn role(self) -> Option<Role> {
        decode_role(self.0 >> ROLE_SHIFT)
    }

    /// Uncolored type of the captured piece.
    #[inline]
    pub const fn captured_role(self) -> Option<Role> {
        decode_role(self.0 >> CAPTURED_SHIFT)
    }

    /// Uncolored type the pawn promotes to.
    #[inline]
    pub const fn promoted_role(self) -> Option<Role> {
        decode_role(self.0 >> PROMOTED_SHIFT)
    }

    /// Side that made the move.
    #[inline]
    pub const fn color(self) -> Color {
        if self.0 & BLACK_BIT != 0 {
            Color::Black
        } else {
            Color::White
        }
    }

    /// The moving piece, colored by side to move.
    #[inline]
    pub fn piece_moved(self) -> Option<Piece> {
        self.role().map(|role| role.of(self.color()))
    }

    /// The captured piece. It always belongs to the side not moving.
    #[inline]
    pub fn captured_piece(self) -> Option<Piece> {
        self.captured_role().map(|role| role.of(!self.color()))
    }

    /// The promotion piece, colored by side to move.
    #[inline]
    pub fn promoted_piece(self) -> Option<Piece> {
        self.promoted_role().map(|role| role.of(self.color()))
    }

    /// Square the rook starts on when castling.
    ///
    /// Only meaningful if [`is_castling`](Self::is_castling) holds.
    pub fn castling_rook_from(self) -> Square {
        let to = self.to();
        if to.file() == File::C {
            to.offset(-2).unwrap_or(to)
        } else {
            to.offset(1).unwrap_or(to)
        }
    }

    /// Square the rook lands on when castling: between the king's squares.
    ///
    /// Only meaningful if [`is_castling`](Self::is_castling) holds.
    pub fn castling_rook_to(self) -> Square {
        decode_square((u32::from(self.from()) + u32::from(self.to())) / 2)
    }

    /// Square of the pawn removed by an en passant capture.
    ///
    /// Only meaningful if [`is_en_passant`](Self::is_en_passant) holds.
    pub fn en_passant_square(self) -> Square {
        let to = self.to();
        if u32::from(self.from()) > 31 {
            to.offset(-8).unwrap_or(to)
        } else {
            to.offset(8).unwrap_or(to)
        }
    }

    /// Castling, double advance, promotion or en passant.
    #[inline]
    pub const fn is_special(self) -> bool {
        self.0 & SPECIAL_BITS != 0
    }

    #[inline]
    pub const fn is_capture(self) -> bool {
        self.0 & CAPTURED_BITS != 0
    }

    #[inline]
    pub const fn is_promotion(self) -> bool {
        self.0 & PROMOTION_BIT != 0
    }

    #[inline]
    pub const fn is_castling(self) -> bool {
        self.0 & CASTLING_BIT != 0
    }

    /// Kingside castling for either color.
    ///
    /// A subset-mask test: every bit of the white or black short castling
    /// pattern must be set. A castling move whose squares were rewritten
    /// through [`MoveBuilder`](crate::builder::MoveBuilder) can therefore
    /// still count as short (`e1c1` moved to `e1h1`).
    #[inline]
    pub const fn is_castling_short(self) -> bool {
        let white = Self::white_oo().0;
        let black = Self::black_oo().0 & !BLACK_BIT;
        self.0 & white == white || self.0 & black == black
    }

    #[inline]
    pub const fn is_double_advance(self) -> bool {
        self.0 & TWO_FORWARD_BIT != 0
    }

    #[inline]
    pub const fn is_en_passant(self) -> bool {
        self.0 & EN_PASSANT_BIT != 0
    }

    /// Whether a validator confirmed this move against its position.
    #[inline]
    pub const fn is_legal(self) -> bool {
        self.0 & LEGAL_BIT != 0
    }

    /// Whether this is the a2a2 placeholder.
    #[inline]
    pub const fn is_null_move(self) -> bool {
        self.0 & (FROM_BITS | TO_BITS) == Self::NULL.0
    }

    #[inline]
    pub const fn gives_check(self) -> bool {
        self.0 & CHECK_BIT != 0
    }

    #[inline]
    pub const fn gives_mate(self) -> bool {
        self.0 & MATE_BIT != 0
    }

    /// Mark the move as verified against its position.
    ///
    /// Only a validator that has checked the move against a position should
    /// call this. Other bits are left untouched.
    #[inline]
    pub const fn confirm_legal(self) -> LegalMove {
        LegalMove(PackedMove(self.0 | LEGAL_BIT))
    }

    #[inline]
    const fn identity(self) -> u32 {
        self.0 & !ANNOTATION_BITS
    }
}

impl std::fmt::Debug for PackedMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PackedMove")
            .field("move", &format_args!("{}", self.to_algebraic_debug()))
            .field("raw", &format_args!("{:#010X}", self.0))
            .finish()
    }
}

/// Moves are the same only if they match exactly, legality included.
impl PartialEq for PackedMove {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.identity() == other.identity()
    }
}

impl Eq for PackedMove {}

impl PartialOrd for PackedMove {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PackedMove {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.identity().cmp(&other.identity())
    }
}

impl Hash for PackedMove {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.identity().hash(state);
    }
}

/// True if this move was made by `color`.
impl PartialEq<Color> for PackedMove {
    #[inline]
    fn eq(&self, color: &Color) -> bool {
        self.color() == *color
    }
}

/// True if this move was made by `piece`.
impl PartialEq<Piece> for PackedMove {
    #[inline]
    fn eq(&self, piece: &Piece) -> bool {
        self.piece_moved() == Some(*piece)
    }
}
