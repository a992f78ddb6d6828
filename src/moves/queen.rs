// Ficheiro: src/moves/queen.rs
// Descrição: Lógica para gerar os lances da dama.

use crate::core::{Board, Move, Piece, Square};
use super::sliding::{self, BISHOP_DIRS, ROOK_DIRS};

/// A dama combina os raios da torre e do bispo.
pub(crate) fn generate(board: &Board, from: Square, piece: Piece, moves: &mut Vec<Move>) {
    sliding::generate(board, from, piece, &ROOK_DIRS, moves);
    sliding::generate(board, from, piece, &BISHOP_DIRS, moves);
}
