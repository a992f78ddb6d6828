// Ficheiro: src/moves/pawn.rs
// Descrição: Lógica para gerar os lances dos peões, incluindo o avanço
// duplo da fila inicial e o leque de promoções na última fila.

use crate::core::{Board, Chirality, Move, Piece, PieceKind, Square};

const PROMOTION_KINDS: [PieceKind; 4] = [
    PieceKind::Queen,
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Knight,
];

pub(crate) fn generate(board: &Board, from: Square, piece: Piece, moves: &mut Vec<Move>) {
    let dir = board.advance_dir(piece.color);
    let start_rank = if piece.color == board.color_on_top { 1 } else { 6 };

    // Avanço simples; duplo a partir da fila inicial com ambas as casas livres.
    if let Some(one) = from.offset(0, dir) {
        if board.piece_at(one).is_none() {
            push(board, moves, piece, from, one, None);
            if from.rank == start_rank {
                if let Some(two) = one.offset(0, dir) {
                    if board.piece_at(two).is_none() {
                        moves.push(Move::new(piece, from, two, None));
                    }
                }
            }
        }
    }

    // Capturas diagonais, só em casas ocupadas pelo inimigo. O rei
    // inimigo nunca é um destino: o mate é detetado, não consumado.
    for df in [-1, 1] {
        if let Some(to) = from.offset(df, dir) {
            if let Some(target) = board.piece_at(to) {
                if target.color != piece.color && target.kind != PieceKind::King {
                    push(board, moves, piece, from, to, Some(target));
                }
            }
        }
    }
}

/// Empilha um avanço ou captura; chegar à fila mais distante abre o leque
/// das quatro promoções, uma por peça elegível.
fn push(
    board: &Board,
    moves: &mut Vec<Move>,
    piece: Piece,
    from: Square,
    to: Square,
    captured: Option<Piece>,
) {
    let last_rank = if piece.color == board.color_on_top { 7 } else { 0 };
    if to.rank != last_rank {
        moves.push(Move::new(piece, from, to, captured));
        return;
    }

    for kind in PROMOTION_KINDS {
        let promoted = if kind == PieceKind::Knight {
            // Escolha cosmética do ícone; não interessa para a legalidade.
            let chirality = if rand::random() { Chirality::Left } else { Chirality::Right };
            Piece::knight(piece.color, chirality)
        } else {
            Piece::new(kind, piece.color)
        };
        moves.push(Move::promoting(piece, from, to, captured, promoted));
    }
}
