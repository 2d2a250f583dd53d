use draughts::{Board, Controller, Move, Outcome, Piece, Position, Searcher, Side};

fn pos(row: u8, col: u8) -> Position {
    Position::new(row, col)
}

fn step(sr: u8, sc: u8, er: u8, ec: u8) -> Move {
    Move::new(pos(sr, sc), pos(er, ec))
}

#[test]
fn s1_opening_light_moves() {
    let mut controller = Controller::new();

    let moves = controller.legal_moves(Side::Light);

    assert_eq!(
        moves,
        vec![
            step(5, 0, 4, 1),
            step(5, 2, 4, 1),
            step(5, 2, 4, 3),
            step(5, 4, 4, 3),
            step(5, 4, 4, 5),
            step(5, 6, 4, 5),
            step(5, 6, 4, 7),
        ]
    );

    assert!(controller.apply(&step(5, 0, 4, 1)));
    assert_eq!(controller.board().total(), 24);
    assert_eq!(controller.side_to_move(), Side::Dark);
}

#[test]
fn s2_forced_capture() {
    let mut controller = Controller::new();
    assert!(controller.apply(&step(5, 2, 4, 3)));
    assert!(controller.apply(&step(2, 1, 3, 2)));

    let moves = controller.legal_moves(Side::Light);

    assert!(moves.contains(&Move::capture(pos(4, 3), pos(2, 1), pos(3, 2))));
    assert!(moves.iter().all(Move::is_capture));
}

#[test]
fn s3_promotion() {
    let mut board = Board::empty();
    board.set(1, 2, Some(Piece::man(Side::Light)));
    board.set(6, 5, Some(Piece::man(Side::Dark)));
    let mut controller = Controller::from_position(board, Side::Light);

    assert!(controller.apply(&step(1, 2, 0, 1)));

    assert_eq!(controller.board().get(0, 1), Some(Piece::king(Side::Light)));
    assert_eq!(controller.terminal(), Outcome::Ongoing);
}

#[test]
fn s4_terminal_by_extinction() {
    let mut board = Board::empty();
    board.set(3, 2, Some(Piece::man(Side::Light)));
    board.set(2, 1, Some(Piece::man(Side::Dark)));
    let mut controller = Controller::from_position(board, Side::Light);

    assert!(controller.apply(&step(3, 2, 1, 0)));

    assert_eq!(controller.terminal(), Outcome::LightWins);
    assert_eq!(controller.terminal().code(), 1);
}

#[test]
fn s5_terminal_by_immobilisation() {
    let mut board = Board::empty();
    board.set(7, 0, Some(Piece::man(Side::Light)));
    board.set(6, 1, Some(Piece::man(Side::Dark)));
    board.set(5, 2, Some(Piece::man(Side::Dark)));
    let controller = Controller::from_position(board, Side::Light);

    assert!(controller.legal_moves(Side::Light).is_empty());
    assert_eq!(controller.terminal(), Outcome::DarkWins);
    assert_eq!(controller.terminal().code(), -1);
}

#[test]
fn s6_search_returns_legal_move() {
    let mut controller = Controller::new();
    assert!(controller.apply(&step(5, 0, 4, 1)));

    let best = Searcher::new(3)
        .search(controller.board())
        .best_move
        .expect("dark has moves after the opening");

    assert!(controller.legal_moves(Side::Dark).contains(&best));
    assert!(controller.apply(&best));
    assert_eq!(controller.side_to_move(), Side::Light);
}
