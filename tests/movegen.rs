// Testes do gerador de lances: cenários por peça, filtro de auto-xeque,
// roque e promoção.

use pretty_assertions::assert_eq;

use xeque::moves;
use xeque::{layout, Board, Color, PieceKind, Square};

/// Constrói um tabuleiro de teste com as pretas no topo.
fn board(rows: [&str; 8], to_move: Color) -> Board {
    layout::parse_layout(&rows.join("\n"), Color::Black, to_move).unwrap()
}

#[test]
fn standard_position_has_twenty_openings() {
    let board = Board::standard(Color::Black);
    assert_eq!(board.legal_moves(Color::White).len(), 20);
    assert_eq!(board.legal_moves(Color::Black).len(), 20);
}

#[test]
fn lone_rook_in_corner_has_fourteen_moves() {
    let board = board(
        [
            "wR -- -- -- -- -- -- --",
            "-- -- -- -- -- -- -- --",
            "-- -- -- -- bK -- -- --",
            "-- -- -- -- -- -- -- --",
            "-- -- -- -- wK -- -- --",
            "-- -- -- -- -- -- -- --",
            "-- -- -- -- -- -- -- --",
            "-- -- -- -- -- -- -- --",
        ],
        Color::White,
    );

    let moves = moves::moves_from(&board, Square::new(0, 0)).unwrap();
    assert_eq!(moves.len(), 14);
    assert!(moves.iter().all(|mv| mv.captured.is_none()));

    let along_rank = moves.iter().filter(|mv| mv.to.rank == 0).count();
    let along_file = moves.iter().filter(|mv| mv.to.file == 0).count();
    assert_eq!(along_rank, 7);
    assert_eq!(along_file, 7);
}

#[test]
fn pawn_advances_one_or_two_from_start_rank() {
    let rows = [
        "-- -- -- -- bK -- -- --",
        "-- -- -- -- -- -- -- --",
        "-- -- -- -- -- -- -- --",
        "-- -- -- -- -- -- -- --",
        "-- -- -- -- -- -- -- --",
        "-- -- -- -- -- -- -- --",
        "-- wP -- -- -- -- -- --",
        "-- -- -- -- wK -- -- --",
    ];
    let open = board(rows, Color::White);
    let moves = moves::moves_from(&open, Square::new(1, 6)).unwrap();
    assert_eq!(moves.len(), 2);
    assert!(moves.iter().any(|mv| mv.to == Square::new(1, 5)));
    assert!(moves.iter().any(|mv| mv.to == Square::new(1, 4)));

    // Um peão inimigo duas casas à frente corta o avanço duplo.
    let mut rows_blocked = rows;
    rows_blocked[4] = "-- bP -- -- -- -- -- --";
    let blocked = board(rows_blocked, Color::White);
    let moves = moves::moves_from(&blocked, Square::new(1, 6)).unwrap();
    assert_eq!(moves.len(), 1);
    assert_eq!(moves[0].to, Square::new(1, 5));

    // Ocupada a casa imediatamente à frente, não há avanço nenhum.
    let mut rows_jammed = rows;
    rows_jammed[5] = "-- bP -- -- -- -- -- --";
    let jammed = board(rows_jammed, Color::White);
    assert!(moves::moves_from(&jammed, Square::new(1, 6)).unwrap().is_empty());
}

#[test]
fn pawn_captures_diagonally_only_onto_enemies() {
    let board = board(
        [
            "-- -- -- -- bK -- -- --",
            "-- -- -- -- -- -- -- --",
            "-- -- -- -- -- -- -- --",
            "-- -- -- -- -- -- -- --",
            "-- -- -- -- -- -- -- --",
            "bR -- wN -- -- -- -- --",
            "-- wP -- -- -- -- -- --",
            "-- -- -- -- wK -- -- --",
        ],
        Color::White,
    );

    let moves = moves::moves_from(&board, Square::new(1, 6)).unwrap();
    // Avanços mais a captura da torre; o cavalo amigo não é capturável.
    let captures: Vec<_> = moves.iter().filter(|mv| mv.captured.is_some()).collect();
    assert_eq!(captures.len(), 1);
    assert_eq!(captures[0].to, Square::new(0, 5));
    assert_eq!(captures[0].captured.unwrap().kind, PieceKind::Rook);
}

#[test]
fn no_generated_move_targets_the_enemy_king() {
    let board = board(
        [
            "-- -- bR -- bK -- -- --",
            "-- -- wN wP -- -- -- --",
            "-- -- -- -- wQ -- -- --",
            "-- -- -- -- -- -- -- --",
            "-- -- -- -- -- -- -- --",
            "-- -- -- -- -- -- -- --",
            "-- -- -- -- -- -- -- --",
            "-- -- -- -- wK -- -- --",
        ],
        Color::White,
    );

    let king = Square::new(4, 0);
    let moves = board.legal_moves(Color::White);
    assert!(!moves.is_empty());
    assert!(moves.iter().all(|mv| mv.to != king));
    // A torre continua capturável pelo peão que promove.
    assert!(moves
        .iter()
        .any(|mv| mv.to == Square::new(2, 0) && mv.captured.is_some()));
}

#[test]
fn pinned_piece_cannot_move() {
    let board = board(
        [
            "bK -- -- -- bR -- -- --",
            "-- -- -- -- -- -- -- --",
            "-- -- -- -- -- -- -- --",
            "-- -- -- -- -- -- -- --",
            "-- -- -- -- wB -- -- --",
            "-- -- -- -- -- -- -- --",
            "-- -- -- -- -- -- -- --",
            "-- -- -- -- wK -- -- --",
        ],
        Color::White,
    );

    // O bispo está cravado entre a torre e o rei: zero lances.
    assert!(moves::moves_from(&board, Square::new(4, 4)).unwrap().is_empty());

    // Mas o rei pode avançar na mesma coluna: o bispo cravado tapa-o.
    let king_moves = moves::moves_from(&board, Square::new(4, 7)).unwrap();
    assert!(king_moves.iter().any(|mv| mv.to == Square::new(4, 6)));
}

#[test]
fn role_moves_rejects_mismatched_requests() {
    let board = Board::standard(Color::Black);

    let e2 = Square::from_algebraic("e2").unwrap();
    assert!(moves::role_moves(&board, e2, Color::White, PieceKind::Pawn).is_ok());
    assert!(moves::role_moves(&board, e2, Color::White, PieceKind::Bishop).is_err());
    assert!(moves::role_moves(&board, e2, Color::Black, PieceKind::Pawn).is_err());

    let e4 = Square::from_algebraic("e4").unwrap();
    assert!(moves::role_moves(&board, e4, Color::White, PieceKind::Pawn).is_err());
}

const CASTLING_ROWS: [&str; 8] = [
    "bR -- -- -- bK -- -- bR",
    "bP bP bP bP bP bP bP bP",
    "-- -- -- -- -- -- -- --",
    "-- -- -- -- -- -- -- --",
    "-- -- -- -- -- -- -- --",
    "-- -- -- -- -- -- -- --",
    "wP wP wP wP wP wP wP wP",
    "wR -- -- -- wK -- -- wR",
];

#[test]
fn castling_offered_on_both_wings() {
    let board = board(CASTLING_ROWS, Color::White);
    let king = Square::new(4, 7);
    let castles: Vec<_> = moves::moves_from(&board, king)
        .unwrap()
        .into_iter()
        .filter(|mv| mv.is_castling)
        .collect();

    assert_eq!(castles.len(), 2);
    // O destino do lance codifica a casa da torre.
    assert!(castles.iter().any(|mv| mv.to == Square::new(7, 7)
        && mv.king_destination() == Square::new(6, 7)
        && mv.rook_destination() == Square::new(5, 7)));
    assert!(castles.iter().any(|mv| mv.to == Square::new(0, 7)
        && mv.king_destination() == Square::new(2, 7)
        && mv.rook_destination() == Square::new(3, 7)));
}

#[test]
fn castling_requires_unmoved_rook() {
    let mut rows = CASTLING_ROWS;
    rows[6] = "wP wP wP wP wP wP wP --";
    let mut board = board(rows, Color::White);

    // Torre do rei sai e volta: a ala do rei fica perdida para sempre.
    let h1 = Square::new(7, 7);
    let h2 = Square::new(7, 6);
    board.try_move(h1, h2, None).unwrap();
    board.try_move(Square::new(0, 1), Square::new(0, 2), None).unwrap();
    board.try_move(h2, h1, None).unwrap();
    board.try_move(Square::new(0, 2), Square::new(0, 3), None).unwrap();

    let castles: Vec<_> = moves::moves_from(&board, Square::new(4, 7))
        .unwrap()
        .into_iter()
        .filter(|mv| mv.is_castling)
        .collect();
    assert_eq!(castles.len(), 1);
    assert_eq!(castles[0].to, Square::new(0, 7));
}

#[test]
fn castling_blocked_by_pieces_between() {
    let mut rows = CASTLING_ROWS;
    rows[7] = "wR wN -- -- wK -- -- wR";
    let board = board(rows, Color::White);

    let castles: Vec<_> = moves::moves_from(&board, Square::new(4, 7))
        .unwrap()
        .into_iter()
        .filter(|mv| mv.is_castling)
        .collect();
    assert_eq!(castles.len(), 1);
    assert_eq!(castles[0].to, Square::new(7, 7));
}

#[test]
fn castling_denied_through_attacked_square() {
    // Torre preta a varrer a coluna f: o rei atravessaria casa atacada.
    let mut rows = CASTLING_ROWS;
    rows[1] = "bP bP bP bP bP -- bP bP";
    rows[4] = "-- -- -- -- -- bR -- --";
    rows[6] = "wP wP wP wP wP -- wP wP";
    let board = board(rows, Color::White);

    let castles: Vec<_> = moves::moves_from(&board, Square::new(4, 7))
        .unwrap()
        .into_iter()
        .filter(|mv| mv.is_castling)
        .collect();
    assert_eq!(castles.len(), 1);
    assert_eq!(castles[0].to, Square::new(0, 7));
}

#[test]
fn castling_denied_while_in_check() {
    let mut rows = CASTLING_ROWS;
    rows[1] = "bP bP bP bP -- bP bP bP";
    rows[4] = "-- -- -- -- bR -- -- --";
    rows[6] = "wP wP wP wP -- wP wP wP";
    let board = board(rows, Color::White);

    assert!(board.is_king_in_check(Color::White));
    let castles = moves::moves_from(&board, Square::new(4, 7))
        .unwrap()
        .into_iter()
        .filter(|mv| mv.is_castling)
        .count();
    assert_eq!(castles, 0);
}

#[test]
fn promotion_fans_out_into_four_roles() {
    let board = board(
        [
            "-- -- -- -- bK -- -- --",
            "wP -- -- -- -- -- -- --",
            "-- -- -- -- -- -- -- --",
            "-- -- -- -- -- -- -- --",
            "-- -- -- -- -- -- -- --",
            "-- -- -- -- -- -- -- --",
            "-- -- -- -- -- -- -- --",
            "-- -- -- -- wK -- -- --",
        ],
        Color::White,
    );

    let moves = moves::moves_from(&board, Square::new(0, 1)).unwrap();
    assert_eq!(moves.len(), 4);
    assert!(moves.iter().all(|mv| mv.to == Square::new(0, 0)));

    let mut roles: Vec<PieceKind> = moves
        .iter()
        .map(|mv| mv.promotion.unwrap().kind)
        .collect();
    roles.sort_by_key(|k| k.letter());
    let mut expected = vec![
        PieceKind::Queen,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Knight,
    ];
    expected.sort_by_key(|k| k.letter());
    assert_eq!(roles, expected);

    // A quiralidade do cavalo promovido existe, mas o valor é cosmético
    // e não se afirma sobre ele.
    let knight = moves
        .iter()
        .find(|mv| mv.promotion.unwrap().kind == PieceKind::Knight)
        .unwrap();
    assert!(knight.promotion.unwrap().chirality.is_some());
}

#[test]
fn checkmate_yields_empty_move_list() {
    let board = board(
        [
            "bK -- -- -- -- -- wR --",
            "-- -- -- -- -- -- -- wR",
            "-- -- -- -- -- -- -- --",
            "-- -- -- -- -- -- -- --",
            "-- -- -- -- wK -- -- --",
            "-- -- -- -- -- -- -- --",
            "-- -- -- -- -- -- -- --",
            "-- -- -- -- -- -- -- --",
        ],
        Color::Black,
    );

    assert!(board.is_king_in_check(Color::Black));
    assert!(board.legal_moves(Color::Black).is_empty());
    assert!(board.is_checkmate(Color::Black));
    assert_eq!(board.status(), xeque::GameStatus::Checkmate(Color::Black));
}

#[test]
fn stalemate_is_not_checkmate() {
    let board = board(
        [
            "bK -- -- -- -- -- -- --",
            "-- -- wQ -- -- -- -- --",
            "-- -- -- -- -- -- -- --",
            "-- -- -- -- -- -- -- --",
            "-- -- -- -- -- -- -- --",
            "-- -- -- -- -- wK -- --",
            "-- -- -- -- -- -- -- --",
            "-- -- -- -- -- -- -- --",
        ],
        Color::Black,
    );

    assert!(!board.is_king_in_check(Color::Black));
    assert!(board.legal_moves(Color::Black).is_empty());
    assert!(board.is_stalemate(Color::Black));
    assert_eq!(board.status(), xeque::GameStatus::Stalemate);
}
