// Ficheiro: src/moves/sliding.rs
// Descrição: Lógica para gerar os lances de peças deslizantes (torres e bispos).

use crate::core::{Board, Move, Piece, PieceKind, Square};

/// Direções ortogonais (torre) e diagonais (bispo); a dama usa ambas.
pub(crate) const ROOK_DIRS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
pub(crate) const BISHOP_DIRS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// Função genérica para gerar os lances de uma peça deslizante: percorre
/// cada raio até à borda, parando antes de uma peça amiga e incluindo uma
/// peça inimiga como captura. O rei inimigo nunca é um destino.
pub(crate) fn generate(
    board: &Board,
    from: Square,
    piece: Piece,
    dirs: &[(i8, i8)],
    moves: &mut Vec<Move>,
) {
    for &(df, dr) in dirs {
        let mut current = from;
        while let Some(to) = current.offset(df, dr) {
            match board.piece_at(to) {
                None => {
                    moves.push(Move::new(piece, from, to, None));
                    current = to;
                }
                Some(target) => {
                    if target.color != piece.color && target.kind != PieceKind::King {
                        moves.push(Move::new(piece, from, to, Some(target)));
                    }
                    break; // qualquer ocupante bloqueia o raio
                }
            }
        }
    }
}
