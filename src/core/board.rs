// Ficheiro: src/core/board.rs
// Descrição: Módulo que contém a struct Board e os seus métodos principais.

use super::types::*;
use crate::moves;

/// Coluna inicial do rei (a dama fica na 3, como no arranjo padrão).
pub const KING_FILE: u8 = 4;

/// Resultado da partida do ponto de vista de quem tem a vez.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    /// A cor indicada está em xeque-mate.
    Checkmate(Color),
    Stalemate,
}

// A struct principal do tabuleiro: grelha 8x8 de casas, cada uma com
// peça-ou-vazio, mais o contexto mínimo de orientação e vez.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    // Indexada por [fila][coluna]; a fila 0 é o topo do tabuleiro desenhado.
    grid: [[Option<Piece>; 8]; 8],
    /// Cor cujas peças ocupam as filas 0 e 1 no arranjo inicial.
    pub color_on_top: Color,
    // De quem é a vez de jogar.
    pub to_move: Color,
    /// Registo de roque, transportado junto da grelha.
    pub castling: CastlingLedger,
}

impl Board {
    /// Cria um tabuleiro na posição inicial padrão, orientado por
    /// `color_on_top`. As brancas jogam primeiro.
    pub fn standard(color_on_top: Color) -> Self {
        let mut grid = [[None; 8]; 8];

        for (color, back_rank, pawn_rank) in
            [(color_on_top, 0usize, 1usize), (!color_on_top, 7, 6)]
        {
            grid[back_rank][0] = Some(Piece::new(PieceKind::Rook, color));
            grid[back_rank][1] = Some(Piece::knight(color, Chirality::Left));
            grid[back_rank][2] = Some(Piece::new(PieceKind::Bishop, color));
            grid[back_rank][3] = Some(Piece::new(PieceKind::Queen, color));
            grid[back_rank][4] = Some(Piece::new(PieceKind::King, color));
            grid[back_rank][5] = Some(Piece::new(PieceKind::Bishop, color));
            grid[back_rank][6] = Some(Piece::knight(color, Chirality::Right));
            grid[back_rank][7] = Some(Piece::new(PieceKind::Rook, color));
            for file in 0..8 {
                grid[pawn_rank][file] = Some(Piece::new(PieceKind::Pawn, color));
            }
        }

        Board {
            grid,
            color_on_top,
            to_move: Color::White,
            castling: CastlingLedger::fresh(),
        }
    }

    /// Cria um tabuleiro a partir de uma colocação completa já analisada
    /// (a fronteira de importação externa). Valida o invariante de
    /// exatamente um rei por lado; o registo de roque é derivado das
    /// peças que não estão nas casas iniciais.
    pub fn from_grid(
        grid: [[Option<Piece>; 8]; 8],
        color_on_top: Color,
        to_move: Color,
    ) -> Result<Self, EngineError> {
        let mut board = Board {
            grid,
            color_on_top,
            to_move,
            castling: CastlingLedger::fresh(),
        };

        for color in [Color::White, Color::Black] {
            let kings = board
                .squares_with(color)
                .filter(|&(_, p)| p.kind == PieceKind::King)
                .count();
            if kings != 1 {
                return Err(EngineError::InvalidBoard(format!(
                    "{color:?} must have exactly one king, found {kings}"
                )));
            }

            let home = board.home_rank(color);
            let king_home = Square::new(KING_FILE, home);
            if !board.holds(king_home, color, PieceKind::King) {
                board.castling.record_king_move(color);
            }
            for wing in [Wing::Queenside, Wing::Kingside] {
                let rook_home = Square::new(wing.rook_file(), home);
                if !board.holds(rook_home, color, PieceKind::Rook) {
                    board.castling.record_rook_move(color, wing);
                }
            }
        }

        Ok(board)
    }

    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.grid[sq.rank as usize][sq.file as usize]
    }

    pub(crate) fn put(&mut self, sq: Square, piece: Option<Piece>) {
        self.grid[sq.rank as usize][sq.file as usize] = piece;
    }

    fn holds(&self, sq: Square, color: Color, kind: PieceKind) -> bool {
        matches!(self.piece_at(sq), Some(p) if p.color == color && p.kind == kind)
    }

    /// Itera as casas ocupadas por peças da cor dada.
    pub fn squares_with(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        (0..8u8).flat_map(move |rank| {
            (0..8u8).filter_map(move |file| {
                let sq = Square::new(file, rank);
                self.piece_at(sq)
                    .filter(|p| p.color == color)
                    .map(|p| (sq, p))
            })
        })
    }

    /// Fila inicial das peças maiores da cor dada.
    pub fn home_rank(&self, color: Color) -> u8 {
        if color == self.color_on_top { 0 } else { 7 }
    }

    /// Sentido de avanço dos peões da cor dada (+1 desce, -1 sobe).
    pub fn advance_dir(&self, color: Color) -> i8 {
        if color == self.color_on_top { 1 } else { -1 }
    }

    /// Localiza o rei da cor dada.
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.squares_with(color)
            .find(|&(_, p)| p.kind == PieceKind::King)
            .map(|(sq, _)| sq)
    }

    /// Verifica se o rei da cor especificada está em xeque.
    pub fn is_king_in_check(&self, color: Color) -> bool {
        moves::attacks::is_king_in_check(self, color)
    }

    /// Gera todos os lances legais para a cor dada (já filtrados de
    /// auto-xeque).
    pub fn legal_moves(&self, color: Color) -> Vec<Move> {
        moves::generate_moves(self, color)
    }

    /// Xeque-mate é um facto derivado: em xeque e sem lances legais.
    pub fn is_checkmate(&self, color: Color) -> bool {
        self.is_king_in_check(color) && self.legal_moves(color).is_empty()
    }

    /// Afogamento: sem xeque mas também sem lances legais.
    pub fn is_stalemate(&self, color: Color) -> bool {
        !self.is_king_in_check(color) && self.legal_moves(color).is_empty()
    }

    /// Estado da partida para quem tem a vez.
    pub fn status(&self) -> GameStatus {
        if self.legal_moves(self.to_move).is_empty() {
            if self.is_king_in_check(self.to_move) {
                GameStatus::Checkmate(self.to_move)
            } else {
                GameStatus::Stalemate
            }
        } else {
            GameStatus::InProgress
        }
    }

    /// Executa um lance, atualizando grelha, registo de roque e vez.
    /// Devolve o token necessário para o desfazer com exatidão.
    pub fn apply(&mut self, mv: Move) -> Undo {
        let undo = Undo {
            mv,
            castling: self.castling,
            to_move: self.to_move,
        };
        let color = mv.piece.color;

        if mv.is_castling {
            // Mutação de duas casas: rei e torre deslocam-se juntos.
            let rook = self.piece_at(mv.to);
            self.put(mv.from, None);
            self.put(mv.to, None);
            self.put(mv.king_destination(), Some(mv.piece));
            self.put(mv.rook_destination(), rook);
            self.castling.record_king_move(color);
            if let Some(wing) = Wing::of_file(mv.to.file) {
                self.castling.record_rook_move(color, wing);
            }
        } else {
            self.put(mv.from, None);
            self.put(mv.to, Some(mv.promotion.unwrap_or(mv.piece)));

            match mv.piece.kind {
                PieceKind::King => self.castling.record_king_move(color),
                PieceKind::Rook => {
                    if mv.from.rank == self.home_rank(color) {
                        if let Some(wing) = Wing::of_file(mv.from.file) {
                            self.castling.record_rook_move(color, wing);
                        }
                    }
                }
                _ => {}
            }
            // Uma torre capturada na casa inicial também perde o roque.
            if let Some(captured) = mv.captured {
                if captured.kind == PieceKind::Rook
                    && mv.to.rank == self.home_rank(captured.color)
                {
                    if let Some(wing) = Wing::of_file(mv.to.file) {
                        self.castling.record_rook_move(captured.color, wing);
                    }
                }
            }
        }

        self.to_move = !self.to_move;
        undo
    }

    /// Desfaz o último lance aplicado, restaurando o tabuleiro
    /// bit a bit (peça capturada, promoção e roque incluídos).
    pub fn undo(&mut self, undo: Undo) {
        let mv = undo.mv;

        if mv.is_castling {
            let rook = self.piece_at(mv.rook_destination());
            self.put(mv.king_destination(), None);
            self.put(mv.rook_destination(), None);
            self.put(mv.from, Some(mv.piece));
            self.put(mv.to, rook);
        } else {
            self.put(mv.from, Some(mv.piece));
            self.put(mv.to, mv.captured);
        }

        self.castling = undo.castling;
        self.to_move = undo.to_move;
    }

    /// Aplica o lance devolvendo uma guarda com âmbito: o Drop desfaz.
    /// É o que impede a poda alfa-beta de sair de um ramo sem restaurar
    /// o tabuleiro partilhado.
    pub fn play(&mut self, mv: Move) -> PlayedMove<'_> {
        PlayedMove::new(self, mv)
    }

    /// Fronteira do lance humano: valida (origem, destino) contra o
    /// gerador e aplica sem undo, tal como a busca aplica o lance da IA.
    pub fn try_move(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<PieceKind>,
    ) -> Result<Move, EngineError> {
        let piece = self
            .piece_at(from)
            .ok_or_else(|| EngineError::BadArgument(format!("no piece at {from}")))?;
        if piece.color != self.to_move {
            return Err(EngineError::BadArgument(format!(
                "piece at {from} belongs to {:?}, but it is {:?}'s turn",
                piece.color, self.to_move
            )));
        }

        let mv = moves::find_move(self, from, to, promotion)?;
        self.apply(mv);
        Ok(mv)
    }

    /// Chave canónica do conteúdo para a cache de avaliação: um byte por
    /// casa (0 = vazia), mais perspetiva e orientação. A quiralidade dos
    /// cavalos fica de fora porque nunca afeta a avaliação.
    pub fn cache_key(&self, perspective: Color) -> BoardKey {
        let mut key = [0u8; 66];
        for rank in 0..8u8 {
            for file in 0..8u8 {
                let sq = Square::new(file, rank);
                if let Some(p) = self.piece_at(sq) {
                    key[sq.index()] = p.kind.code() + 6 * p.color.index() as u8;
                }
            }
        }
        key[64] = perspective.index() as u8;
        key[65] = self.color_on_top.index() as u8;
        key
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", super::layout::format_board(self))
    }
}

/// Guarda de lance aplicado: criada por `Board::play`, desfaz no Drop.
pub struct PlayedMove<'a> {
    board: &'a mut Board,
    undo: Option<Undo>,
}

impl<'a> PlayedMove<'a> {
    fn new(board: &'a mut Board, mv: Move) -> Self {
        let undo = board.apply(mv);
        PlayedMove { board, undo: Some(undo) }
    }

    pub fn board(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for PlayedMove<'_> {
    fn drop(&mut self) {
        if let Some(undo) = self.undo.take() {
            self.board.undo(undo);
        }
    }
}
