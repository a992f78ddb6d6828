// Ficheiro: src/moves/king.rs
// Descrição: Lógica para gerar os lances do rei, incluindo o roque.

use crate::core::{Board, Move, Piece, PieceKind, Square, Wing, KING_FILE};
use super::attacks::{self, MoveOverlay};
use super::sliding::{BISHOP_DIRS, ROOK_DIRS};

pub(crate) fn generate(board: &Board, from: Square, piece: Piece, moves: &mut Vec<Move>) {
    // Um passo em todas as 8 direções.
    for &(df, dr) in ROOK_DIRS.iter().chain(BISHOP_DIRS.iter()) {
        let Some(to) = from.offset(df, dr) else { continue };
        match board.piece_at(to) {
            None => moves.push(Move::new(piece, from, to, None)),
            Some(target) => {
                if target.color != piece.color && target.kind != PieceKind::King {
                    moves.push(Move::new(piece, from, to, Some(target)));
                }
            }
        }
    }

    generate_castling(board, from, piece, moves);
}

// Lógica de roque. O lance gerado leva `to` = casa da torre; quem o
// aplica desloca rei e torre de uma vez.
fn generate_castling(board: &Board, from: Square, king: Piece, moves: &mut Vec<Move>) {
    let color = king.color;
    let home_rank = board.home_rank(color);

    // O rei tem de estar na casa inicial e nunca ter mexido.
    if board.castling.king_has_moved(color) || from != Square::new(KING_FILE, home_rank) {
        return;
    }
    // A casa atual do rei não pode estar atacada.
    if attacks::is_square_attacked(board, from, !color, None) {
        return;
    }

    for wing in [Wing::Kingside, Wing::Queenside] {
        if let Some(mv) = castling_move(board, king, from, wing) {
            moves.push(mv);
        }
    }
}

fn castling_move(board: &Board, king: Piece, from: Square, wing: Wing) -> Option<Move> {
    let color = king.color;
    if board.castling.rook_has_moved(color, wing) {
        return None;
    }

    // A torre correspondente na casa inicial dela.
    let rook_square = Square::new(wing.rook_file(), from.rank);
    match board.piece_at(rook_square) {
        Some(p) if p.color == color && p.kind == PieceKind::Rook => {}
        _ => return None,
    }

    // Todas as casas entre rei e torre livres.
    let (lo, hi) = if rook_square.file < from.file {
        (rook_square.file, from.file)
    } else {
        (from.file, rook_square.file)
    };
    for file in lo + 1..hi {
        if board.piece_at(Square::new(file, from.rank)).is_some() {
            return None;
        }
    }

    // Nem a casa atravessada nem a de destino podem estar atacadas,
    // avaliadas como se o rei já lá estivesse.
    let mv = Move::castling(king, from, rook_square);
    let crossed_file = (from.file + mv.king_destination().file) / 2;
    for file in [crossed_file, mv.king_destination().file] {
        let to = Square::new(file, from.rank);
        let overlay = MoveOverlay::shift(king, from, to);
        if attacks::is_square_attacked(board, to, !color, Some(&overlay)) {
            return None;
        }
    }

    Some(mv)
}
