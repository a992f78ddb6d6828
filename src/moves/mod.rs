// Ficheiro: src/moves/mod.rs
// Descrição: Geração de lances legais: despacho por tipo de peça e
// filtro de auto-xeque sobre cada candidato.

pub mod attacks;
pub mod king;
pub mod knight;
pub mod pawn;
pub mod queen;
pub mod sliding;

use crate::core::{Board, Color, EngineError, Move, Piece, PieceKind, Square};
use attacks::MoveOverlay;

/// Gera todos os lances legais para as peças da cor dada.
///
/// Cada casa ocupada delega no gerador do tipo de peça respetivo; todo o
/// candidato que deixasse o próprio rei em xeque é descartado. Xeque-mate
/// para a cor é exatamente a condição de esta lista vir vazia com o rei
/// em xeque.
pub fn generate_moves(board: &Board, color: Color) -> Vec<Move> {
    // Pre-aloca com capacidade estimada para reduzir realocações
    let mut moves = Vec::with_capacity(64);

    for (square, piece) in board.squares_with(color) {
        dispatch(board, square, piece, &mut moves);
    }

    // O caminho do roque já foi validado durante a geração.
    moves.retain(|mv| mv.is_castling || keeps_own_king_safe(board, mv));
    moves
}

fn dispatch(board: &Board, from: Square, piece: Piece, moves: &mut Vec<Move>) {
    match piece.kind {
        PieceKind::Pawn => pawn::generate(board, from, piece, moves),
        PieceKind::Knight => knight::generate(board, from, piece, moves),
        PieceKind::Bishop => sliding::generate(board, from, piece, &sliding::BISHOP_DIRS, moves),
        PieceKind::Rook => sliding::generate(board, from, piece, &sliding::ROOK_DIRS, moves),
        PieceKind::Queen => queen::generate(board, from, piece, moves),
        PieceKind::King => king::generate(board, from, piece, moves),
    }
}

/// Filtro de auto-xeque: simula o efeito de ocupação do lance com a
/// sobreposição, sem aplicar nem desfazer nada no tabuleiro.
fn keeps_own_king_safe(board: &Board, mv: &Move) -> bool {
    let color = mv.piece.color;
    let king_square = if mv.piece.kind == PieceKind::King {
        mv.to
    } else {
        match board.king_square(color) {
            Some(sq) => sq,
            None => return true, // Não há rei (situação anormal)
        }
    };

    let overlay = MoveOverlay::of(mv);
    !attacks::is_square_attacked(board, king_square, !color, Some(&overlay))
}

/// Lances legais da peça na casa dada; fronteira com a camada de
/// apresentação (realce de destinos, validação do lance humano).
pub fn moves_from(board: &Board, from: Square) -> Result<Vec<Move>, EngineError> {
    let piece = board
        .piece_at(from)
        .ok_or_else(|| EngineError::BadArgument(format!("no piece at {from}")))?;

    let mut moves = Vec::with_capacity(32);
    dispatch(board, from, piece, &mut moves);
    moves.retain(|mv| mv.is_castling || keeps_own_king_safe(board, mv));
    Ok(moves)
}

/// Gera os lances da casa dada exigindo o tipo e a cor indicados. Um
/// pedido que não corresponda à peça presente indica bug do chamador e é
/// devolvido como erro duro, nunca repetido.
pub fn role_moves(
    board: &Board,
    from: Square,
    color: Color,
    kind: PieceKind,
) -> Result<Vec<Move>, EngineError> {
    match board.piece_at(from) {
        Some(p) if p.color == color && p.kind == kind => moves_from(board, from),
        Some(p) => Err(EngineError::BadArgument(format!(
            "expected {color:?} {kind:?} at {from}, found {:?} {:?}",
            p.color, p.kind
        ))),
        None => Err(EngineError::BadArgument(format!(
            "expected {color:?} {kind:?} at {from}, square is empty"
        ))),
    }
}

/// Procura, entre os lances legais da peça em `from`, o que termina em
/// `to`. Para promoções, `promotion` escolhe a peça (dama por omissão);
/// para o roque também se aceita a casa de destino do rei.
pub fn find_move(
    board: &Board,
    from: Square,
    to: Square,
    promotion: Option<PieceKind>,
) -> Result<Move, EngineError> {
    let chosen = promotion.unwrap_or(PieceKind::Queen);
    moves_from(board, from)?
        .into_iter()
        .find(|mv| {
            let destination_ok = mv.to == to || (mv.is_castling && mv.king_destination() == to);
            destination_ok && mv.promotion.map_or(true, |p| p.kind == chosen)
        })
        .ok_or_else(|| EngineError::BadArgument(format!("{from}{to} is not a legal move")))
}
