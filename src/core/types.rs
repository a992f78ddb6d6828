// Ficheiro: src/core/types.rs
// Descrição: Módulo para as definições de tipos de dados fundamentais do jogo.

use thiserror::Error;

// Enum para representar a cor de uma peça ou de um jogador.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl std::ops::Not for Color {
    type Output = Color;

    fn not(self) -> Self::Output {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

impl Color {
    pub(crate) fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }
}

// Enum para representar o tipo de uma peça de xadrez.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Peso do material na avaliação. O rei vale muito mais do que tudo
    /// o resto somado: a presença dele nunca pode ser trocada por material.
    pub fn value(&self) -> f64 {
        match self {
            PieceKind::Pawn => 1.0,
            PieceKind::Knight => 3.0,
            PieceKind::Bishop => 3.0,
            PieceKind::Rook => 5.0,
            PieceKind::Queen => 9.0,
            PieceKind::King => 200.0,
        }
    }

    /// Código de um byte usado na chave canónica da cache (1..=6).
    pub(crate) fn code(&self) -> u8 {
        match self {
            PieceKind::Pawn => 1,
            PieceKind::Knight => 2,
            PieceKind::Bishop => 3,
            PieceKind::Rook => 4,
            PieceKind::Queen => 5,
            PieceKind::King => 6,
        }
    }

    /// Letra da peça na notação de lances (minúscula).
    pub fn letter(&self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }
}

// Tag cosmética dos cavalos: escolhe entre o ícone virado à esquerda e o
// virado à direita. Nunca influencia legalidade nem avaliação.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Chirality {
    Left,
    Right,
}

// Struct para representar uma peça no tabuleiro, combinando o tipo e a cor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
    /// `Some` apenas para cavalos.
    pub chirality: Option<Chirality>,
}

impl Piece {
    pub fn new(kind: PieceKind, color: Color) -> Self {
        let chirality = if kind == PieceKind::Knight {
            Some(Chirality::Left)
        } else {
            None
        };
        Piece { kind, color, chirality }
    }

    pub fn knight(color: Color, chirality: Chirality) -> Self {
        Piece {
            kind: PieceKind::Knight,
            color,
            chirality: Some(chirality),
        }
    }
}

// Uma casa do tabuleiro, endereçada por (coluna, fila), ambas em 0..8.
// A fila 0 é o topo do tabuleiro desenhado: "8" na notação algébrica.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    pub file: u8,
    pub rank: u8,
}

impl Square {
    pub fn new(file: u8, rank: u8) -> Self {
        debug_assert!(file < 8 && rank < 8);
        Square { file, rank }
    }

    /// Desloca a casa; `None` se sair do tabuleiro.
    pub fn offset(self, df: i8, dr: i8) -> Option<Square> {
        let file = self.file as i8 + df;
        let rank = self.rank as i8 + dr;
        if (0..8).contains(&file) && (0..8).contains(&rank) {
            Some(Square::new(file as u8, rank as u8))
        } else {
            None
        }
    }

    /// Índice linear 0..64 (fila * 8 + coluna), usado na chave da cache.
    pub fn index(self) -> usize {
        self.rank as usize * 8 + self.file as usize
    }

    pub fn from_algebraic(s: &str) -> Result<Square, EngineError> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(EngineError::BadArgument(format!("invalid square: {s}")));
        }
        let file = bytes[0].wrapping_sub(b'a');
        let digit = bytes[1].wrapping_sub(b'0');
        if file >= 8 || !(1..=8).contains(&digit) {
            return Err(EngineError::BadArgument(format!("invalid square: {s}")));
        }
        Ok(Square::new(file, 8 - digit))
    }
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", (b'a' + self.file) as char, 8 - self.rank)
    }
}

// Struct para representar um lance no jogo. Dados puros e imutáveis:
// aplicá-lo ao tabuleiro é responsabilidade do Board.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Move {
    pub piece: Piece,
    pub from: Square,
    pub to: Square,
    pub captured: Option<Piece>,
    /// Peça que substitui o peão ao chegar à última fila.
    pub promotion: Option<Piece>,
    /// Num roque, `to` é a casa da torre (convenção herdada da
    /// representação de origem); quem aplica move rei e torre.
    pub is_castling: bool,
}

impl Move {
    pub fn new(piece: Piece, from: Square, to: Square, captured: Option<Piece>) -> Self {
        Move { piece, from, to, captured, promotion: None, is_castling: false }
    }

    pub fn promoting(
        piece: Piece,
        from: Square,
        to: Square,
        captured: Option<Piece>,
        promotion: Piece,
    ) -> Self {
        Move { piece, from, to, captured, promotion: Some(promotion), is_castling: false }
    }

    pub fn castling(king: Piece, from: Square, rook_square: Square) -> Self {
        Move { piece: king, from, to: rook_square, captured: None, promotion: None, is_castling: true }
    }

    /// Casa onde o rei termina de facto. Para lances normais é `to`;
    /// num roque, `to` guarda a casa da torre.
    pub fn king_destination(&self) -> Square {
        if self.is_castling {
            let file = if self.to.file > self.from.file { 6 } else { 2 };
            Square::new(file, self.from.rank)
        } else {
            self.to
        }
    }

    /// Casa onde a torre termina num roque.
    pub fn rook_destination(&self) -> Square {
        debug_assert!(self.is_castling);
        let file = if self.to.file > self.from.file { 5 } else { 3 };
        Square::new(file, self.from.rank)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_castling {
            if self.to.file > self.from.file {
                write!(f, "O-O")
            } else {
                write!(f, "O-O-O")
            }
        } else if let Some(p) = self.promotion {
            write!(f, "{}{}{}", self.from, self.to, p.kind.letter())
        } else {
            write!(f, "{}{}", self.from, self.to)
        }
    }
}

/// Ala do tabuleiro para efeitos de roque.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wing {
    /// Ala da dama (torre na coluna 0).
    Queenside,
    /// Ala do rei (torre na coluna 7).
    Kingside,
}

impl Wing {
    pub fn rook_file(self) -> u8 {
        match self {
            Wing::Queenside => 0,
            Wing::Kingside => 7,
        }
    }

    pub fn of_file(file: u8) -> Option<Wing> {
        match file {
            0 => Some(Wing::Queenside),
            7 => Some(Wing::Kingside),
            _ => None,
        }
    }

    fn index(self) -> usize {
        match self {
            Wing::Queenside => 0,
            Wing::Kingside => 1,
        }
    }
}

// Registo de "já mexeu" de rei e torres, para a elegibilidade de roque.
// Vive ao lado da grelha; não é inferido do conteúdo dela.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CastlingLedger {
    king_moved: [bool; 2],
    rook_moved: [[bool; 2]; 2], // [cor][ala]
}

impl CastlingLedger {
    /// Registo de início de jogo: ninguém mexeu.
    pub fn fresh() -> Self {
        CastlingLedger { king_moved: [false; 2], rook_moved: [[false; 2]; 2] }
    }

    pub fn king_has_moved(&self, color: Color) -> bool {
        self.king_moved[color.index()]
    }

    pub fn rook_has_moved(&self, color: Color, wing: Wing) -> bool {
        self.rook_moved[color.index()][wing.index()]
    }

    pub fn record_king_move(&mut self, color: Color) {
        self.king_moved[color.index()] = true;
    }

    pub fn record_rook_move(&mut self, color: Color, wing: Wing) {
        self.rook_moved[color.index()][wing.index()] = true;
    }
}

/// Estado necessário para desfazer exatamente um lance aplicado.
/// Devolvido por `Board::apply` e consumido por `Board::undo`.
#[derive(Debug, Clone, Copy)]
pub struct Undo {
    pub(crate) mv: Move,
    pub(crate) castling: CastlingLedger,
    pub(crate) to_move: Color,
}

/// Chave canónica do conteúdo do tabuleiro: um byte por casa, mais a
/// perspetiva da avaliação e a orientação.
pub type BoardKey = [u8; 66];

/// Erros do núcleo do motor.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Tabuleiro malformado na construção (reis em falta, peça inválida).
    #[error("invalid board: {0}")]
    InvalidBoard(String),

    /// Texto de importação de tabuleiro que não respeita o formato.
    #[error("invalid layout: {0}")]
    InvalidLayout(String),

    /// Uso incorreto de uma operação do núcleo; indica bug do chamador.
    #[error("bad argument: {0}")]
    BadArgument(String),

    /// Não existe lance legal para a cor pedida no topo da busca.
    #[error("no legal move available for {0:?}")]
    NoMoveAvailable(Color),
}
