// Ficheiro: src/search/alphabeta.rs
// Descrição: Busca minimax com poda alfa-beta sobre um único tabuleiro
// partilhado, com make/unmake garantido por guarda de âmbito.

use log::debug;

use crate::core::{Board, Color, EngineError, Move};
use super::evaluation::{evaluate, EvalCache};

/// Profundidade de busca por omissão, em meios-lances.
pub const DEFAULT_DEPTH: u8 = 6;

/// Motor de busca. Mantém a cache de avaliações entre decisões: a chave
/// é o conteúdo integral do tabuleiro, por isso reutilizá-la entre
/// lances é seguro.
pub struct Searcher {
    depth: u8,
    cache: EvalCache,
    nodes_searched: u64,
}

impl Searcher {
    pub fn new(depth: u8) -> Self {
        Searcher {
            depth: depth.max(1),
            cache: EvalCache::new(),
            nodes_searched: 0,
        }
    }

    pub fn depth(&self) -> u8 {
        self.depth
    }

    /// Nós visitados na última chamada a `choose_best_move`.
    pub fn nodes_searched(&self) -> u64 {
        self.nodes_searched
    }

    /// Escolhe o melhor lance para `ai_color`, maximizando na raiz.
    ///
    /// O tabuleiro é emprestado mutável porque a busca o altera no lugar,
    /// mas no retorno está restaurado exatamente como entrou; aplicar o
    /// lance escolhido é responsabilidade de quem chama. Sem lances
    /// legais devolve `NoMoveAvailable`; quem chama deve ter despistado
    /// mate e afogamento antes.
    pub fn choose_best_move(
        &mut self,
        board: &mut Board,
        ai_color: Color,
    ) -> Result<Move, EngineError> {
        self.nodes_searched = 0;
        let moves = board.legal_moves(ai_color);
        if moves.is_empty() {
            return Err(EngineError::NoMoveAvailable(ai_color));
        }

        let mut alpha = f64::NEG_INFINITY;
        let beta = f64::INFINITY;
        let mut best_move = None;
        let mut best_score = f64::NEG_INFINITY;

        for mv in moves {
            let score = {
                let mut played = board.play(mv);
                self.minimax(played.board(), ai_color, self.depth - 1, false, alpha, beta)
            };
            if best_move.is_none() || score > best_score {
                best_score = score;
                best_move = Some(mv);
            }
            alpha = alpha.max(best_score);
        }

        debug!(
            "busca concluída: {} nós, melhor score {:.2}, cache {} entradas ({:.0}% hits)",
            self.nodes_searched,
            best_score,
            self.cache.len(),
            self.cache.hit_rate() * 100.0
        );

        best_move.ok_or(EngineError::NoMoveAvailable(ai_color))
    }

    /// Minimax clássico com poda alfa-beta simétrica, alternando o lado
    /// a jogar a cada meio-lance. Cada candidato é aplicado ao tabuleiro
    /// partilhado, explorado e desfeito antes do irmão seguinte.
    fn minimax(
        &mut self,
        board: &mut Board,
        ai_color: Color,
        depth: u8,
        maximizing: bool,
        mut alpha: f64,
        mut beta: f64,
    ) -> f64 {
        self.nodes_searched += 1;

        if depth == 0 {
            return evaluate(board, ai_color, &mut self.cache);
        }

        let side = if maximizing { ai_color } else { !ai_color };
        let moves = board.legal_moves(side);
        if moves.is_empty() {
            // Desfecho forçado a meio da árvore: quem ficou sem resposta
            // perdeu. Curto-circuito com ±infinito em vez de deixar o
            // avaliador pontuar isto como material vulgar.
            return if maximizing { f64::NEG_INFINITY } else { f64::INFINITY };
        }

        if maximizing {
            let mut best = f64::NEG_INFINITY;
            for mv in moves {
                let score = {
                    let mut played = board.play(mv);
                    self.minimax(played.board(), ai_color, depth - 1, false, alpha, beta)
                };
                best = best.max(score);
                alpha = alpha.max(best);
                if alpha >= beta {
                    break; // Corte alfa-beta
                }
            }
            best
        } else {
            let mut best = f64::INFINITY;
            for mv in moves {
                let score = {
                    let mut played = board.play(mv);
                    self.minimax(played.board(), ai_color, depth - 1, true, alpha, beta)
                };
                best = best.min(score);
                beta = beta.min(best);
                if beta <= alpha {
                    break; // Corte alfa-beta
                }
            }
            best
        }
    }
}
