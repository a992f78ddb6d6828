// Ficheiro: src/moves/attacks.rs
// Descrição: Deteção de ameaças: verifica se uma casa é atacada por uma
// cor, com suporte para simular um lance sem mutar o tabuleiro.

use crate::core::{Board, Color, Move, Piece, PieceKind, Square};
use super::knight::KNIGHT_OFFSETS;
use super::sliding::{BISHOP_DIRS, ROOK_DIRS};

/// Sobreposição "como se o lance já tivesse sido feito": a casa de origem
/// conta como vazia e a de destino como ocupada pela peça que se move.
/// Permite responder "o rei ficaria em xeque depois deste lance?" sem
/// aplicar nada. É o que o filtro de auto-xeque e a verificação do
/// caminho do roque reutilizam.
#[derive(Debug, Clone, Copy)]
pub struct MoveOverlay {
    pub from: Square,
    pub to: Square,
    pub piece: Piece,
}

impl MoveOverlay {
    /// Sobreposição do efeito de ocupação de um lance normal.
    pub fn of(mv: &Move) -> Self {
        MoveOverlay {
            from: mv.from,
            to: mv.to,
            piece: mv.promotion.unwrap_or(mv.piece),
        }
    }

    /// Sobreposição de um salto hipotético de uma peça.
    pub fn shift(piece: Piece, from: Square, to: Square) -> Self {
        MoveOverlay { from, to, piece }
    }
}

fn occupant(board: &Board, sq: Square, overlay: Option<&MoveOverlay>) -> Option<Piece> {
    if let Some(ov) = overlay {
        if sq == ov.to {
            return Some(ov.piece);
        }
        if sq == ov.from {
            return None;
        }
    }
    board.piece_at(sq)
}

/// Verifica se `square` é atacada por alguma peça da cor `by`.
///
/// Percorre os 8 raios até ao ocupante mais próximo (torres e damas nos
/// ortogonais, bispos e damas nos diagonais), os 8 saltos de cavalo, as
/// duas diagonais de ataque de peão e as casas adjacentes do rei.
pub fn is_square_attacked(
    board: &Board,
    square: Square,
    by: Color,
    overlay: Option<&MoveOverlay>,
) -> bool {
    // Raios: qualquer casa ocupada bloqueia; só o ocupante mais próximo
    // decide a ameaça.
    for (dirs, kinds) in [
        (&ROOK_DIRS, [PieceKind::Rook, PieceKind::Queen]),
        (&BISHOP_DIRS, [PieceKind::Bishop, PieceKind::Queen]),
    ] {
        for &(df, dr) in dirs.iter() {
            let mut current = square;
            while let Some(next) = current.offset(df, dr) {
                if let Some(p) = occupant(board, next, overlay) {
                    if p.color == by && kinds.contains(&p.kind) {
                        return true;
                    }
                    break;
                }
                current = next;
            }
        }
    }

    // Cavalos: os 8 saltos fixos.
    for &(df, dr) in KNIGHT_OFFSETS.iter() {
        if let Some(sq) = square.offset(df, dr) {
            if let Some(p) = occupant(board, sq, overlay) {
                if p.color == by && p.kind == PieceKind::Knight {
                    return true;
                }
            }
        }
    }

    // Peões: as duas casas donde um peão de `by` capturaria para cá,
    // no sentido de avanço dessa cor.
    let dir = board.advance_dir(by);
    for df in [-1, 1] {
        if let Some(sq) = square.offset(df, -dir) {
            if let Some(p) = occupant(board, sq, overlay) {
                if p.color == by && p.kind == PieceKind::Pawn {
                    return true;
                }
            }
        }
    }

    // Rei inimigo adjacente.
    for &(df, dr) in ROOK_DIRS.iter().chain(BISHOP_DIRS.iter()) {
        if let Some(sq) = square.offset(df, dr) {
            if let Some(p) = occupant(board, sq, overlay) {
                if p.color == by && p.kind == PieceKind::King {
                    return true;
                }
            }
        }
    }

    false
}

/// Verifica se o rei da cor dada está em xeque na posição atual.
pub fn is_king_in_check(board: &Board, color: Color) -> bool {
    match board.king_square(color) {
        Some(king) => is_square_attacked(board, king, !color, None),
        None => false, // Não há rei (situação anormal)
    }
}
