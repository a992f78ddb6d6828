// Ficheiro: src/core/layout.rs
// Descrição: Importação e exportação de tabuleiros em texto, a fronteira
// com o carregamento de posições a partir de ficheiro.

use super::board::Board;
use super::types::*;

// O formato é uma grelha de 8 linhas com 8 tokens cada, do topo para a
// base: "--" para casa vazia, ou cor ('w'/'b') seguida da letra da peça
// ('K','Q','R','B','N','P'). Exemplo de uma linha: "bR bN bB bQ bK bB bN bR".

/// Analisa um tabuleiro em texto e constrói um `Board` validado.
pub fn parse_layout(
    text: &str,
    color_on_top: Color,
    to_move: Color,
) -> Result<Board, EngineError> {
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();
    if lines.len() != 8 {
        return Err(EngineError::InvalidLayout(format!(
            "expected 8 rows, found {}",
            lines.len()
        )));
    }

    let mut grid = [[None; 8]; 8];
    for (rank, line) in lines.iter().enumerate() {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() != 8 {
            return Err(EngineError::InvalidLayout(format!(
                "row {}: expected 8 squares, found {}",
                rank + 1,
                tokens.len()
            )));
        }
        for (file, token) in tokens.iter().enumerate() {
            grid[rank][file] = parse_token(token, file as u8)?;
        }
    }

    Board::from_grid(grid, color_on_top, to_move)
}

fn parse_token(token: &str, file: u8) -> Result<Option<Piece>, EngineError> {
    if token == "--" {
        return Ok(None);
    }

    let mut chars = token.chars();
    let (color_ch, kind_ch) = match (chars.next(), chars.next(), chars.next()) {
        (Some(c), Some(k), None) => (c, k),
        _ => return Err(EngineError::InvalidLayout(format!("invalid piece: {token}"))),
    };

    let color = match color_ch {
        'w' => Color::White,
        'b' => Color::Black,
        _ => return Err(EngineError::InvalidLayout(format!("invalid piece: {token}"))),
    };
    let kind = match kind_ch {
        'K' => PieceKind::King,
        'Q' => PieceKind::Queen,
        'R' => PieceKind::Rook,
        'B' => PieceKind::Bishop,
        'N' => PieceKind::Knight,
        'P' => PieceKind::Pawn,
        _ => return Err(EngineError::InvalidLayout(format!("invalid piece: {token}"))),
    };

    // Quiralidade determinística na importação: metade esquerda do
    // tabuleiro vira à esquerda, metade direita vira à direita.
    let piece = if kind == PieceKind::Knight {
        let chirality = if file < 4 { Chirality::Left } else { Chirality::Right };
        Piece::knight(color, chirality)
    } else {
        Piece::new(kind, color)
    };
    Ok(Some(piece))
}

/// Formata o tabuleiro no mesmo formato que `parse_layout` aceita.
pub fn format_board(board: &Board) -> String {
    let mut out = String::with_capacity(8 * 25);
    for rank in 0..8u8 {
        for file in 0..8u8 {
            if file > 0 {
                out.push(' ');
            }
            match board.piece_at(Square::new(file, rank)) {
                Some(p) => {
                    out.push(match p.color {
                        Color::White => 'w',
                        Color::Black => 'b',
                    });
                    out.push(p.kind.letter().to_ascii_uppercase());
                }
                None => out.push_str("--"),
            }
        }
        out.push('\n');
    }
    out
}
