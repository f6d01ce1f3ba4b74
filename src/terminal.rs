use std::io::{self, Write};

use log::info;
use shakmaty::{CastlingMode, Chess, Color, EnPassantMode, Position, fen::Fen};

use crate::board;
use crate::builder::MoveBuilder;
use crate::packed::PackedMove;
use crate::undo::MoveRecord;

/// Runs an interactive terminal for entering moves and inspecting their
/// packed form.
///
/// Moves typed in coordinate notation are parsed, validated against the
/// current position and, if legal, played.
pub fn run_interactive_terminal() {
    let mut position = Chess::default();
    let mut history: Vec<MoveRecord> = Vec::new();

    draw_interface(&position);

    loop {
        print!("> ");
        if let Err(e) = io::stdout().flush() {
            eprintln!("Failed to flush stdout: {}", e);
            break;
        }

        let mut input = String::new();
        match io::stdin().read_line(&mut input) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => {
                eprintln!("Failed to read input: {}", e);
                break;
            }
        }

        let parts: Vec<&str> = input.split_whitespace().collect();
        if parts.is_empty() {
            continue;
        }

        match parts[0] {
            "m" => {
                if parts.len() < 2 {
                    println!("Usage: m <move>  (e.g. m e2e4, m e7e8=Q)");
                    continue;
                }
                let candidate = PackedMove::from_uci(parts[1]);
                describe(candidate);
                match board::validate(&position, candidate) {
                    Some(legal) => {
                        if let Some(record) = board::play(&mut position, legal) {
                            info!("Played {}", record.mv);
                            describe(record.mv);
                            history.push(record);
                        }
                    }
                    None => println!("❌ Not a legal move here"),
                }
            }
            "moves" => {
                for mv in board::legal_moves(&position) {
                    println!("  {:<8} {:#010X}", mv.to_algebraic(), mv.raw());
                }
            }
            "raw" => {
                if parts.len() < 2 {
                    println!("Usage: raw <hex>");
                    continue;
                }
                match u32::from_str_radix(parts[1].trim_start_matches("0x"), 16) {
                    Ok(raw) => describe(MoveBuilder::from_raw(raw).build()),
                    Err(e) => println!("❌ Invalid hex: {}", e),
                }
            }
            "history" => {
                for (ply, record) in history.iter().enumerate() {
                    println!(
                        "  {:>3}. {:<8} clock {:>3}  castling {:04b}  ep {}",
                        ply + 1,
                        record.mv,
                        record.undo.halfmove_clock(),
                        record.undo.castling_rights().bits(),
                        record
                            .undo
                            .ep_file()
                            .map_or('-', |file| file.char()),
                    );
                }
            }
            "load" => {
                if parts.len() < 2 {
                    println!("Usage: load <fen> | load startpos");
                    continue;
                }
                let fen_str = if parts[1] == "startpos" {
                    "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"
                } else {
                    // Rejoin the rest of the parts as FEN might contain spaces
                    input.trim()[4..].trim()
                };

                match fen_str.parse::<Fen>() {
                    Ok(fen) => match fen.into_position::<Chess>(CastlingMode::Standard) {
                        Ok(chess) => {
                            position = chess;
                            history.clear();
                            draw_interface(&position);
                            println!("\n✅ Position loaded from FEN");
                        }
                        Err(e) => println!("❌ Invalid FEN setup: {}", e),
                    },
                    Err(e) => println!("❌ Invalid FEN: {}", e),
                }
            }
            "p" => draw_interface(&position),
            "q" => break,
            _ => println!("Unknown command"),
        }
    }
}

/// Prints the header, help text and current position.
fn draw_interface(position: &Chess) {
    println!("♟️  Packed Move Inspector");
    println!();
    println!("Commands: m <move> | moves | raw <hex> | history | load <fen> | p (refresh) | q (quit)");
    println!();
    println!(
        "FEN: {}",
        Fen::from_position(position, EnPassantMode::Legal)
    );
    println!(
        "To move: {}",
        match position.turn() {
            Color::White => "White",
            Color::Black => "Black",
        }
    );
}

/// Prints every decoded field of a move.
fn describe(mv: PackedMove) {
    println!("  raw       {:#010X}", mv.raw());
    println!("  display   {}", mv);
    println!("  debug     {}", mv.to_algebraic_debug());
    println!("  from/to   {} -> {}", mv.from_square_string(), mv.to_square_string());
    println!("  piece     {:?}", mv.piece_moved());
    println!("  captured  {:?}", mv.captured_piece());
    println!("  promoted  {:?}", mv.promoted_piece());
    println!(
        "  flags     castling={} short={} double={} en-passant={} check={} mate={} legal={} null={}",
        mv.is_castling(),
        mv.is_castling_short(),
        mv.is_double_advance(),
        mv.is_en_passant(),
        mv.gives_check(),
        mv.gives_mate(),
        mv.is_legal(),
        mv.is_null_move(),
    );
    if mv.is_castling() {
        println!(
            "  rook      {} -> {}",
            mv.castling_rook_from(),
            mv.castling_rook_to()
        );
    }
    if mv.is_en_passant() {
        println!("  taken on  {}", mv.en_passant_square());
    }
}
