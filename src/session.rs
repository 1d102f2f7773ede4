//! Game session: turn order, move application and the opponent's reply
//!
//! [`GameSession`] is the only mutable aggregate. Presentation reads it through
//! the query methods and changes it only through [`GameSession::apply`] (or the
//! matching intent methods), one intent at a time. A committed human move is
//! resolved atomically: validate, claim, check for a win and, if the game is
//! still open, run the opponent's reply before returning.

use crate::board::{Board, Player, Pos, MAX_FACTOR, MIN_FACTOR, WIN_LENGTH};
use crate::engine::{MoveResult, OpponentEngine};
use crate::error::MoveError;
use crate::rules::{find_four_positions, product, try_resolve};

/// Notice shown after a rejected move
pub const INVALID_MOVE_NOTICE: &str = "Invalid move. Try again.";

/// Status line while the game is open
pub const CONTROLS_HINT: &str = "R & L: Cyan | A/D: Yellow | Enter: Play";

/// Which of the two pending factors an adjustment targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FactorSlot {
    /// First operand, also the anchor the opponent inherits
    Prev,
    /// Second operand
    Curr,
}

/// Direction of a factor adjustment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Dec,
    Inc,
}

/// A discrete user intent forwarded by presentation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Start,
    AdjustFactor(FactorSlot, Step),
    Commit,
}

/// Observable state of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    NotStarted,
    HumanTurn,
    /// Only held inside a commit; never visible between intents
    OpponentTurn,
    Finished(Player),
}

/// Pending factors and turn bookkeeping
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnState {
    pub prev_factor: u8,
    pub curr_factor: u8,
    pub active_player: Player,
    /// `None` while the game is undecided
    pub winner: Option<Player>,
    pub started: bool,
}

impl Default for TurnState {
    fn default() -> Self {
        Self {
            prev_factor: MIN_FACTOR,
            curr_factor: MIN_FACTOR,
            active_player: Player::Human,
            winner: None,
            started: false,
        }
    }
}

/// How the game was won
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WinType {
    FourInLine,
    /// The opponent had no legal move for its anchor
    OpponentStuck,
}

/// Game result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameResult {
    pub winner: Player,
    pub win_type: WinType,
    pub winning_line: Option<[Pos; WIN_LENGTH]>,
}

/// A claim made by either side
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    pub player: Player,
    pub pos: Pos,
    pub factors: (u8, u8),
    pub product: u32,
}

/// Everything a committed human move caused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnReport {
    pub human: MoveRecord,
    /// `None` when the human won outright or the opponent was stuck
    pub opponent: Option<MoveRecord>,
    pub game_over: Option<GameResult>,
}

/// Result of applying one intent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    Started,
    FactorChanged { slot: FactorSlot, value: u8 },
    Played(TurnReport),
}

/// Main game session
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    turn: TurnState,
    notice: String,
    game_over: Option<GameResult>,
    history: Vec<MoveRecord>,
    prev_product: Option<u32>,
    curr_product: Option<u32>,
    engine: OpponentEngine,
    last_opponent_result: Option<MoveResult>,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    /// Create a session waiting for `start`
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: TurnState::default(),
            notice: String::new(),
            game_over: None,
            history: Vec::new(),
            prev_product: None,
            curr_product: None,
            engine: OpponentEngine::new(),
            last_opponent_result: None,
        }
    }

    /// Start a session on a prepared board, human to move with factors 1 x 1.
    ///
    /// Cells already owned on `board` count as claimed for the rest of the game.
    pub fn from_board(board: Board) -> Self {
        let mut session = Self::new();
        session.board = board;
        session.turn.started = true;
        session
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn turn(&self) -> &TurnState {
        &self.turn
    }

    /// Last validation notice, empty when there is none
    #[inline]
    pub fn notice(&self) -> &str {
        &self.notice
    }

    #[inline]
    pub fn game_result(&self) -> Option<&GameResult> {
        self.game_over.as_ref()
    }

    #[inline]
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    #[inline]
    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.history.last()
    }

    /// Previous and current claimed products
    #[inline]
    pub fn products(&self) -> (Option<u32>, Option<u32>) {
        (self.prev_product, self.curr_product)
    }

    /// Search statistics from the opponent's latest reply
    #[inline]
    pub fn last_opponent_result(&self) -> Option<&MoveResult> {
        self.last_opponent_result.as_ref()
    }

    pub fn phase(&self) -> Phase {
        if !self.turn.started {
            Phase::NotStarted
        } else if let Some(winner) = self.turn.winner {
            Phase::Finished(winner)
        } else {
            match self.turn.active_player {
                Player::Human => Phase::HumanTurn,
                Player::Opponent => Phase::OpponentTurn,
            }
        }
    }

    pub fn status_text(&self) -> &'static str {
        match self.turn.winner {
            Some(Player::Human) => "Victory!",
            Some(Player::Opponent) => "Bot wins!",
            None => CONTROLS_HINT,
        }
    }

    // ------------------------------------------------------------------
    // Intents
    // ------------------------------------------------------------------

    /// Apply one intent. This is the single entry point presentation uses.
    pub fn apply(&mut self, intent: Intent) -> Result<Applied, MoveError> {
        match intent {
            Intent::Start => {
                self.start();
                Ok(Applied::Started)
            }
            Intent::AdjustFactor(slot, step) => {
                let value = self.adjust_factor(slot, step)?;
                Ok(Applied::FactorChanged { slot, value })
            }
            Intent::Commit => self.commit_move().map(Applied::Played),
        }
    }

    /// Begin or restart a game. Accepted in every phase.
    pub fn start(&mut self) {
        self.board.reset_ownership();
        self.turn = TurnState {
            started: true,
            ..TurnState::default()
        };
        self.notice.clear();
        self.game_over = None;
        self.history.clear();
        self.prev_product = None;
        self.curr_product = None;
        self.last_opponent_result = None;
        log::info!("new game started");
    }

    /// Move one factor by one step, clamped to 1..=9. Returns the new value.
    pub fn adjust_factor(&mut self, slot: FactorSlot, step: Step) -> Result<u8, MoveError> {
        self.ensure_human_turn()?;

        let factor = match slot {
            FactorSlot::Prev => &mut self.turn.prev_factor,
            FactorSlot::Curr => &mut self.turn.curr_factor,
        };
        *factor = match step {
            Step::Dec => factor.saturating_sub(1).max(MIN_FACTOR),
            Step::Inc => factor.saturating_add(1).min(MAX_FACTOR),
        };
        Ok(*factor)
    }

    /// Claim the cell for `prev_factor * curr_factor`, then let the opponent reply
    pub fn commit_move(&mut self) -> Result<TurnReport, MoveError> {
        self.ensure_human_turn()?;

        let (a, b) = (self.turn.prev_factor, self.turn.curr_factor);
        let Some(pos) = try_resolve(&self.board, a, b) else {
            let product = product(a, b);
            log::debug!("rejected human move {} x {} = {}", a, b, product);
            self.notice = INVALID_MOVE_NOTICE.to_string();
            return Err(MoveError::InvalidMove { a, b, product });
        };

        self.notice.clear();
        let human = self.execute_move(Player::Human, pos, (a, b));

        let opponent = if self.turn.winner.is_none() {
            self.play_opponent()
        } else {
            None
        };

        Ok(TurnReport {
            human,
            opponent,
            game_over: self.game_over,
        })
    }

    fn ensure_human_turn(&self) -> Result<(), MoveError> {
        match self.phase() {
            Phase::HumanTurn => Ok(()),
            Phase::NotStarted => Err(MoveError::NotStarted),
            Phase::Finished(_) => Err(MoveError::GameOver),
            Phase::OpponentTurn => Err(MoveError::NotYourTurn),
        }
    }

    /// Claim, record, check for a win, then pass the turn
    fn execute_move(&mut self, player: Player, pos: Pos, factors: (u8, u8)) -> MoveRecord {
        let claimed = self.board.claim(pos, player);
        debug_assert!(claimed, "resolved cell must be unclaimed");

        let record = MoveRecord {
            player,
            pos,
            factors,
            product: self.board.number(pos),
        };
        self.history.push(record);
        self.prev_product = self.curr_product;
        self.curr_product = Some(record.product);
        log::debug!(
            "{:?} claims {} at ({}, {}) with {} x {}",
            player, record.product, pos.row, pos.col, factors.0, factors.1
        );

        if let Some(line) = find_four_positions(&self.board, player.into()) {
            self.finish(GameResult {
                winner: player,
                win_type: WinType::FourInLine,
                winning_line: Some(line),
            });
        } else {
            self.turn.active_player = player.other();
        }
        record
    }

    /// The opponent's reply, anchored on the human's first factor.
    ///
    /// The opponent's chosen second factor becomes the new `prev_factor`, so
    /// the next human turn starts from it.
    fn play_opponent(&mut self) -> Option<MoveRecord> {
        debug_assert_eq!(self.phase(), Phase::OpponentTurn);

        let anchor = self.turn.prev_factor;
        let result = self.engine.get_move(&self.board, anchor);
        let best_move = result.best_move;
        self.last_opponent_result = Some(result);

        match best_move {
            Some(mv) => {
                self.turn.prev_factor = mv.factor;
                Some(self.execute_move(Player::Opponent, mv.pos, (anchor, mv.factor)))
            }
            None => {
                self.finish(GameResult {
                    winner: Player::Human,
                    win_type: WinType::OpponentStuck,
                    winning_line: None,
                });
                None
            }
        }
    }

    fn finish(&mut self, result: GameResult) {
        log::info!(
            "game over: {:?} wins ({:?}) after {} moves",
            result.winner,
            result.win_type,
            self.history.len()
        );
        self.turn.winner = Some(result.winner);
        // Finished games rest on the human
        self.turn.active_player = Player::Human;
        self.game_over = Some(result);
    }
}
