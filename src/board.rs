//! Bridge to a `shakmaty` position acting as move generator and validator.
//!
//! Legality is decided entirely by shakmaty. This module only translates its
//! moves into packed form (and back), confirms the ones shakmaty generated,
//! and captures the undo state before a move is played.

use log::{debug, trace};
use shakmaty::{CastlingSide, Chess, Color, EnPassantMode, File, Move, Position, Role, Square};

use crate::builder::MoveBuilder;
use crate::legal::LegalMove;
use crate::packed::PackedMove;
use crate::undo::{CastlingRights, MoveRecord, UndoState};

/// Whether a castling move goes towards the h-file.
fn is_king_side(king: Square, rook: Square) -> bool {
    u32::from(rook) > u32::from(king)
}

/// Squares the king actually travels between for a castling move.
fn king_squares(king: Square, rook: Square) -> (Square, Square) {
    let file = if is_king_side(king, rook) { File::G } else { File::C };
    (king, Square::from_coords(file, king.rank()))
}

/// Translate a shakmaty move played from `pos` into an untested packed move.
///
/// Returns `None` for piece drops, which have no packed form.
pub fn pack(pos: &Chess, mv: &Move) -> Option<PackedMove> {
    let packed = match *mv {
        Move::Normal {
            role,
            from,
            capture,
            to,
            promotion,
        } => match role {
            Role::Pawn => match (promotion, capture) {
                (Some(promoted), Some(captured)) => {
                    PackedMove::capture_promote(from, to, promoted, captured)
                }
                (Some(promoted), None) => PackedMove::promote(from, to, promoted),
                (None, None) if u32::from(from).abs_diff(u32::from(to)) == 16 => {
                    PackedMove::two_forward(from, to)
                }
                (None, None) => PackedMove::one_forward(from, to),
                (None, captured) => PackedMove::pawn_move(from, to, captured),
            },
            Role::Knight => PackedMove::knight_move(from, to, capture),
            Role::Bishop => PackedMove::bishop_move(from, to, capture),
            Role::Rook => PackedMove::rook_move(from, to, capture),
            Role::Queen => PackedMove::queen_move(from, to, capture),
            Role::King => PackedMove::king_move(from, to, capture),
        },
        Move::EnPassant { from, to } => PackedMove::en_passant(from, to),
        Move::Castle { king, rook } => match (pos.turn(), is_king_side(king, rook)) {
            (Color::White, true) => PackedMove::white_oo(),
            (Color::White, false) => PackedMove::white_ooo(),
            (Color::Black, true) => PackedMove::black_oo(),
            (Color::Black, false) => PackedMove::black_ooo(),
        },
        Move::Put { .. } => return None,
    };

    trace!("Packed {mv:?} as {:#010X}", packed.raw());
    Some(MoveBuilder::from(packed).set_color(pos.turn()).build())
}

/// Translate a packed move back into shakmaty's representation.
///
/// Returns `None` if the move does not record the piece that moved, as is the
/// case for parsed or two-square moves.
pub fn to_shakmaty(mv: PackedMove) -> Option<Move> {
    if mv.is_castling() {
        return Some(Move::Castle {
            king: mv.from(),
            rook: mv.castling_rook_from(),
        });
    }
    if mv.is_en_passant() {
        return Some(Move::EnPassant {
            from: mv.from(),
            to: mv.to(),
        });
    }
    Some(Move::Normal {
        role: mv.role()?,
        from: mv.from(),
        capture: mv.captured_role(),
        to: mv.to(),
        promotion: mv.promoted_role(),
    })
}

/// Pack a move shakmaty generated for `pos`, annotate check and mate, and
/// confirm it.
fn confirm(pos: &Chess, mv: &Move) -> Option<LegalMove> {
    let packed = pack(pos, mv)?;

    let mut after = pos.clone();
    after.play_unchecked(mv.clone());

    let builder = MoveBuilder::from(packed);
    let builder = match (after.is_check(), after.is_checkmate()) {
        (_, true) => builder.set_check().set_mate(),
        (true, false) => builder.set_check(),
        (false, false) => builder,
    };
    Some(builder.build().confirm_legal())
}

/// All legal moves in `pos`, packed and confirmed.
pub fn legal_moves(pos: &Chess) -> Vec<LegalMove> {
    pos.legal_moves()
        .iter()
        .filter_map(|mv| confirm(pos, mv))
        .collect()
}

/// Check an untested move (e.g. parsed from text) against `pos`.
///
/// The candidate matches a legal move with the same squares and promotion
/// piece; castling is given by the king's squares (`e1g1`). The returned move
/// carries everything the position knows: piece, capture, special kind and
/// side.
pub fn validate(pos: &Chess, candidate: PackedMove) -> Option<LegalMove> {
    let found = pos.legal_moves().into_iter().find(|mv| {
        let squares = match *mv {
            Move::Normal { from, to, .. } | Move::EnPassant { from, to } => Some((from, to)),
            Move::Castle { king, rook } => Some(king_squares(king, rook)),
            Move::Put { .. } => None,
        };
        squares == Some((candidate.from(), candidate.to()))
            && mv.promotion() == candidate.promoted_role()
    });

    match found {
        Some(mv) => confirm(pos, &mv),
        None => {
            debug!(
                "Candidate {} is not legal in this position",
                candidate.to_algebraic_debug()
            );
            None
        }
    }
}

/// State of `pos` that a move will destroy.
pub fn undo_state(pos: &Chess) -> UndoState {
    let castles = pos.castles();
    let mut rights = CastlingRights::NONE;
    for color in [Color::White, Color::Black] {
        for side in [CastlingSide::KingSide, CastlingSide::QueenSide] {
            if castles.has(color, side) {
                rights = rights.with(color, side);
            }
        }
    }

    let halfmove_clock = u8::try_from(pos.halfmoves()).unwrap_or(u8::MAX);
    let ep_file = pos.ep_square(EnPassantMode::Legal).map(|sq| sq.file());
    UndoState::new(halfmove_clock, rights, ep_file)
}

/// Play a confirmed move on `pos`, returning it with the prior state.
///
/// Returns `None` (leaving `pos` untouched) if the move does not record the
/// piece that moved.
pub fn play(pos: &mut Chess, mv: LegalMove) -> Option<MoveRecord> {
    let undo = undo_state(pos);
    let played = to_shakmaty(mv.into_move())?;
    pos.play_unchecked(played);
    Some(MoveRecord::new(mv.into_move(), undo))
}
