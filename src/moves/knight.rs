// Ficheiro: src/moves/knight.rs
// Descrição: Lógica para gerar os lances dos cavalos.

use crate::core::{Board, Move, Piece, PieceKind, Square};

// Array com os possíveis deslocamentos do cavalo (coluna, fila).
pub(crate) const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

/// Os 8 saltos fixos, cada um verificado individualmente contra a borda,
/// ocupação amiga e a exclusão do rei inimigo.
pub(crate) fn generate(board: &Board, from: Square, piece: Piece, moves: &mut Vec<Move>) {
    for &(df, dr) in KNIGHT_OFFSETS.iter() {
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
}
