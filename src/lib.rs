//! Factor grid game engine
//!
//! A two-player game on a 6x6 grid of distinct numbers, human against a
//! built-in opponent:
//! - Each turn a player picks two factors in 1..=9
//! - Their product must be printed on an unclaimed cell, which the player then owns
//! - Four owned cells in a row or column win
//! - An opponent left without a legal move loses
//!
//! # Architecture
//!
//! - [`board`]: Board layout and per-cell ownership
//! - [`rules`]: Move validation and win detection
//! - [`engine`]: Greedy opponent move selection
//! - [`session`]: Turn order and the state presentation reads
//! - [`ui`]: egui front end that forwards key presses as intents
//!
//! # Quick Start
//!
//! ```
//! use factor_grid::{FactorSlot, GameSession, Intent, Owner, Player, Pos, Step};
//!
//! let mut session = GameSession::new();
//! session.apply(Intent::Start).unwrap();
//!
//! // 1 x 2 = 2 claims the second cell of the top row
//! session.apply(Intent::AdjustFactor(FactorSlot::Curr, Step::Inc)).unwrap();
//! session.apply(Intent::Commit).unwrap();
//! assert_eq!(session.board().get(Pos::new(0, 1)), Owner::Human);
//!
//! // The opponent already replied with 1 x 1 = 1
//! assert_eq!(session.board().get(Pos::new(0, 0)), Owner::Opponent);
//! assert_eq!(session.turn().active_player, Player::Human);
//! ```

pub mod board;
pub mod engine;
pub mod error;
pub mod rules;
pub mod session;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Cell, Owner, Player, Pos, COLS, LAYOUT, ROWS};
pub use engine::{MoveResult, OpponentEngine, OpponentMove};
pub use error::MoveError;
pub use session::{
    Applied, FactorSlot, GameResult, GameSession, Intent, MoveRecord, Phase, Step, TurnReport,
    TurnState, WinType,
};
