//! Game scenarios driven through the public session API.

use factor_grid::rules::{find_unclaimed, is_valid_move};
use factor_grid::{
    Board, FactorSlot, GameSession, Intent, MoveError, Owner, Phase, Player, Pos, Step, WinType,
};

/// Move both factors from their current values to `prev` and `curr`
fn select(session: &mut GameSession, prev: u8, curr: u8) {
    for (slot, target) in [(FactorSlot::Prev, prev), (FactorSlot::Curr, curr)] {
        loop {
            let value = match slot {
                FactorSlot::Prev => session.turn().prev_factor,
                FactorSlot::Curr => session.turn().curr_factor,
            };
            let step = match value.cmp(&target) {
                std::cmp::Ordering::Less => Step::Inc,
                std::cmp::Ordering::Greater => Step::Dec,
                std::cmp::Ordering::Equal => break,
            };
            session.apply(Intent::AdjustFactor(slot, step)).unwrap();
        }
    }
}

// =============================================================================
// Opening exchange
// =============================================================================

#[test]
fn test_first_move_and_reply() {
    let mut session = GameSession::new();
    session.apply(Intent::Start).unwrap();
    session.apply(Intent::Commit).unwrap();

    let board = session.board();
    assert_eq!(board.get(Pos::new(0, 0)), Owner::Human);
    assert_eq!(board.get(Pos::new(0, 1)), Owner::Opponent);
    assert_eq!(board.count(Owner::Unclaimed), 34);

    let turn = session.turn();
    assert_eq!(turn.active_player, Player::Human);
    assert_eq!(turn.winner, None);
    assert_eq!(session.phase(), Phase::HumanTurn);
}

#[test]
fn test_anchor_carries_opponent_factor() {
    let mut session = GameSession::new();
    session.start();
    select(&mut session, 4, 5); // 20

    let report = session.commit_move().unwrap();
    assert_eq!(report.human.pos, Pos::new(2, 3));
    // Anchor 4: 4 x 1 = 4 is free
    let reply = report.opponent.unwrap();
    assert_eq!(reply.factors, (4, 1));
    assert_eq!(reply.pos, Pos::new(0, 3));
    assert_eq!(session.turn().prev_factor, 1);
    assert_eq!(session.turn().curr_factor, 5);
}

// =============================================================================
// Rejected moves
// =============================================================================

#[test]
fn test_invalid_move_leaves_board_unchanged() {
    let mut session = GameSession::new();
    session.start();
    session.commit_move().unwrap();

    // The opponent owns 2; the anchor is now 2 and curr is still 1
    let before: Vec<_> = session.board().iter().map(|(_, c)| c.owner).collect();
    let err = session.apply(Intent::Commit).unwrap_err();
    assert!(matches!(err, MoveError::InvalidMove { product: 2, .. }));

    let after: Vec<_> = session.board().iter().map(|(_, c)| c.owner).collect();
    assert_eq!(before, after);
    assert!(!session.notice().is_empty());
    assert_eq!(session.turn().active_player, Player::Human);
}

#[test]
fn test_start_clears_notice() {
    let mut session = GameSession::new();
    session.start();
    session.commit_move().unwrap();
    session.commit_move().unwrap_err();

    session.apply(Intent::Start).unwrap();
    assert!(session.notice().is_empty());
    assert!(session.board().is_board_empty());
}

// =============================================================================
// Endings
// =============================================================================

#[test]
fn test_opponent_without_move_loses() {
    let mut board = Board::new();
    // Every product reachable from anchor 6, except 6 x 9 = 54 for the human
    for n in [6, 12, 18, 24, 30, 36, 42, 48] {
        let pos = find_unclaimed(&board, n).unwrap();
        board.claim(pos, Player::Opponent);
    }
    let mut session = GameSession::from_board(board);
    select(&mut session, 6, 9);

    let report = session.commit_move().unwrap();
    assert_eq!(report.human.product, 54);
    assert!(report.opponent.is_none());
    assert_eq!(session.phase(), Phase::Finished(Player::Human));
    assert_eq!(session.game_result().unwrap().win_type, WinType::OpponentStuck);
}

#[test]
fn test_human_wins_column() {
    let mut board = Board::new();
    // Column 0: 1, 7, 15 owned, 25 next
    for r in 0..3 {
        board.claim(Pos::new(r, 0), Player::Human);
    }
    let mut session = GameSession::from_board(board);
    select(&mut session, 5, 5);

    let report = session.commit_move().unwrap();
    assert!(report.opponent.is_none());
    let result = session.game_result().unwrap();
    assert_eq!(result.winner, Player::Human);
    assert_eq!(
        result.winning_line,
        Some([Pos::new(0, 0), Pos::new(1, 0), Pos::new(2, 0), Pos::new(3, 0)])
    );
    assert_eq!(session.status_text(), "Victory!");
}

#[test]
fn test_first_legal_pair_game_strands_opponent() {
    // Always play the lowest legal pair; the opponent follows along row 0 and 1
    let mut session = GameSession::new();
    session.start();

    while session.phase() == Phase::HumanTurn {
        let (a, b) = (1..=9u8)
            .flat_map(|a| (1..=9u8).map(move |b| (a, b)))
            .find(|&(a, b)| is_valid_move(session.board(), a, b))
            .expect("a legal pair while the board has room");
        select(&mut session, a, b);
        session.commit_move().unwrap();
    }

    // 1..=9 alternate between the players, then anchor 1 has nothing left
    assert_eq!(session.phase(), Phase::Finished(Player::Human));
    assert_eq!(session.history().len(), 9);
    let result = session.game_result().unwrap();
    assert_eq!(result.win_type, WinType::OpponentStuck);
    assert_eq!(result.winning_line, None);
    assert!(session.last_opponent_result().unwrap().is_stuck());
    assert_eq!(session.commit_move(), Err(MoveError::GameOver));
}

#[test]
fn test_full_board_without_winner_stalls() {
    // Alternating pairs of columns; no run longer than two anywhere
    let mut board = Board::new();
    for row in 0..6u8 {
        for col in 0..6u8 {
            if row == 5 && col >= 4 {
                continue; // 72 and 81 stay open
            }
            let player = if (row + col / 2) % 2 == 0 { Player::Human } else { Player::Opponent };
            board.claim(Pos::new(row, col), player);
        }
    }
    let mut session = GameSession::from_board(board);
    select(&mut session, 9, 8);

    // Human takes 72; anchor 9 leaves only 81 for the opponent
    let report = session.commit_move().unwrap();
    assert_eq!(report.human.product, 72);
    assert_eq!(report.opponent.unwrap().product, 81);
    assert!(report.game_over.is_none());

    assert_eq!(session.phase(), Phase::HumanTurn);
    assert_eq!(session.board().count(Owner::Unclaimed), 0);
    assert_eq!((session.turn().prev_factor, session.turn().curr_factor), (9, 8));

    let before: Vec<_> = session.board().iter().map(|(_, c)| c.owner).collect();
    let err = session.apply(Intent::Commit).unwrap_err();
    assert_eq!(err, MoveError::InvalidMove { a: 9, b: 8, product: 72 });

    let after: Vec<_> = session.board().iter().map(|(_, c)| c.owner).collect();
    assert_eq!(before, after);
    assert_eq!(session.notice(), "Invalid move. Try again.");
    assert_eq!(session.phase(), Phase::HumanTurn);
}
