// Xeque - partida de xadrez no terminal contra o motor minimax.

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::info;

use xeque::search::{Searcher, DEFAULT_DEPTH};
use xeque::{layout, Board, Color, GameStatus, PieceKind, Square};

#[derive(Parser)]
#[command(name = "xeque", about = "Motor de xadrez minimax - partida no terminal")]
struct Args {
    /// Profundidade da busca em meios-lances
    #[arg(long, default_value_t = DEFAULT_DEPTH)]
    depth: u8,

    /// Cor das peças humanas (white|black)
    #[arg(long, default_value = "white")]
    color: String,

    /// Ficheiro com um tabuleiro inicial personalizado (8 linhas de 8 tokens)
    #[arg(long)]
    layout: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let human = match args.color.as_str() {
        "white" | "w" => Color::White,
        "black" | "b" => Color::Black,
        other => bail!("invalid color: {other} (expected white|black)"),
    };
    let ai = !human;

    // O humano joga em baixo; as peças do motor ficam no topo.
    let mut board = match &args.layout {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("failed to read layout {}", path.display()))?;
            layout::parse_layout(&text, ai, Color::White)?
        }
        None => Board::standard(ai),
    };

    let mut searcher = Searcher::new(args.depth);
    println!("Xeque - profundidade {} | humano: {:?}\n", searcher.depth(), human);

    let stdin = io::stdin();
    loop {
        println!("{}", board);

        match board.status() {
            GameStatus::Checkmate(loser) => {
                println!("Xeque-mate! {:?} perde.", loser);
                break;
            }
            GameStatus::Stalemate => {
                println!("Afogamento: empate.");
                break;
            }
            GameStatus::InProgress => {}
        }
        if board.is_king_in_check(board.to_move) {
            println!("({:?} está em xeque)", board.to_move);
        }

        if board.to_move == human {
            print!("lance (ex: e2e4, e7e8q, quit) > ");
            io::stdout().flush()?;
            let mut line = String::new();
            if stdin.lock().read_line(&mut line)? == 0 {
                break;
            }
            let input = line.trim();
            if input.is_empty() {
                continue;
            }
            if input == "quit" {
                break;
            }

            match parse_input(input).and_then(|(from, to, promo)| {
                board.try_move(from, to, promo).map_err(|e| e.to_string())
            }) {
                Ok(mv) => println!("jogou {}\n", mv),
                Err(e) => println!("lance recusado: {e}\n"),
            }
        } else {
            let start = Instant::now();
            let mv = searcher
                .choose_best_move(&mut board, ai)
                .context("engine found no move in a live position")?;
            board.apply(mv);
            let elapsed = start.elapsed();
            info!(
                "busca: {} nós em {:.2}s",
                searcher.nodes_searched(),
                elapsed.as_secs_f64()
            );
            println!("motor joga {} ({:.2}s)\n", mv, elapsed.as_secs_f64());
        }
    }

    Ok(())
}

/// Lê "e2e4" ou "e7e8q" (letra final escolhe a promoção).
fn parse_input(input: &str) -> Result<(Square, Square, Option<PieceKind>), String> {
    if !input.is_ascii() || input.len() < 4 || input.len() > 5 {
        return Err(format!("invalid move: {input}"));
    }
    let from = Square::from_algebraic(&input[0..2]).map_err(|e| e.to_string())?;
    let to = Square::from_algebraic(&input[2..4]).map_err(|e| e.to_string())?;
    let promotion = match &input[4..] {
        "" => None,
        "q" => Some(PieceKind::Queen),
        "r" => Some(PieceKind::Rook),
        "b" => Some(PieceKind::Bishop),
        "n" => Some(PieceKind::Knight),
        other => return Err(format!("invalid promotion piece: {other}")),
    };
    Ok((from, to, promotion))
}
