// Ficheiro: src/search/evaluation.rs
// Descrição: Avaliação heurística de posições, memoizada por chave
// canónica do conteúdo do tabuleiro.

use fxhash::FxHashMap as HashMap;

use crate::core::{Board, BoardKey, Color, PieceKind, Square};
use crate::moves;

// Pesos dos termos para além do material (ver PieceKind::value).
const CHECK_FREE_BONUS: f64 = 0.5;
const MOBILITY_WEIGHT: f64 = 0.1;
const PAWN_FAULT_WEIGHT: f64 = 0.5;

/// Cache de avaliações para a duração de uma decisão da IA. Entradas são
/// inseridas e nunca despejadas; a chave é o conteúdo integral das 64
/// casas, por isso não há risco de colisão nem de entradas obsoletas.
pub struct EvalCache {
    table: HashMap<BoardKey, f64>,
    hits: u64,
    misses: u64,
}

impl EvalCache {
    pub fn new() -> Self {
        EvalCache { table: HashMap::default(), hits: 0, misses: 0 }
    }

    fn probe(&mut self, key: &BoardKey) -> Option<f64> {
        match self.table.get(key) {
            Some(&score) => {
                self.hits += 1;
                Some(score)
            }
            None => {
                self.misses += 1;
                None
            }
        }
    }

    fn store(&mut self, key: BoardKey, score: f64) {
        self.table.insert(key, score);
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn hit_rate(&self) -> f64 {
        if self.hits + self.misses == 0 {
            0.0
        } else {
            self.hits as f64 / (self.hits + self.misses) as f64
        }
    }

    pub fn clear(&mut self) {
        self.table.clear();
        self.hits = 0;
        self.misses = 0;
    }
}

impl Default for EvalCache {
    fn default() -> Self {
        Self::new()
    }
}

/// Avalia o tabuleiro do ponto de vista de `perspective`: termos da cor
/// menos os termos do adversário. Função pura do conteúdo do tabuleiro e
/// da perspetiva: nunca depende da profundidade nem do histórico.
pub fn evaluate(board: &Board, perspective: Color, cache: &mut EvalCache) -> f64 {
    let key = board.cache_key(perspective);
    if let Some(score) = cache.probe(&key) {
        return score;
    }

    let score = side_score(board, perspective) - side_score(board, !perspective);
    cache.store(key, score);
    score
}

fn side_score(board: &Board, color: Color) -> f64 {
    let mut score = 0.0;

    // Material ponderado; a presença do rei domina tudo o resto.
    for (_, piece) in board.squares_with(color) {
        score += piece.kind.value();
        if piece.kind == PieceKind::King && !board.is_king_in_check(color) {
            score += CHECK_FREE_BONUS;
        }
    }

    // Mobilidade: contagem total de lances legais, escalada para baixo.
    score += MOBILITY_WEIGHT * moves::generate_moves(board, color).len() as f64;

    // Estrutura de peões: dobrados, isolados e bloqueados penalizam.
    score -= PAWN_FAULT_WEIGHT * pawn_faults(board, color) as f64;

    score
}

/// Conta os defeitos estruturais dos peões da cor dada.
fn pawn_faults(board: &Board, color: Color) -> u32 {
    let dir = board.advance_dir(color);
    let mut faults = 0;

    for (square, piece) in board.squares_with(color) {
        if piece.kind != PieceKind::Pawn {
            continue;
        }

        // Dobrado: peão da mesma cor imediatamente acima na mesma coluna
        // (cada par vertical conta uma vez).
        if let Some(above) = square.offset(0, -1) {
            if is_own_pawn(board, above, color) {
                faults += 1;
            }
        }

        // Isolado: nenhum peão da mesma cor nas colunas vizinhas.
        let mut isolated = true;
        'files: for df in [-1i8, 1] {
            let file = square.file as i8 + df;
            if !(0..8).contains(&file) {
                continue;
            }
            for rank in 0..8u8 {
                if is_own_pawn(board, Square::new(file as u8, rank), color) {
                    isolated = false;
                    break 'files;
                }
            }
        }
        if isolated {
            faults += 1;
        }

        // Bloqueado: a casa imediatamente à frente ocupada por algo que
        // não seja um peão amigo (esse caso já conta como dobrado).
        if let Some(ahead) = square.offset(0, dir) {
            match board.piece_at(ahead) {
                Some(p) if !(p.color == color && p.kind == PieceKind::Pawn) => faults += 1,
                _ => {}
            }
        }
    }

    faults
}

fn is_own_pawn(board: &Board, sq: Square, color: Color) -> bool {
    matches!(board.piece_at(sq), Some(p) if p.color == color && p.kind == PieceKind::Pawn)
}
