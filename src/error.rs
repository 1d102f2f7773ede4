/// Errors returned when a move intent cannot be applied.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("invalid move: {a} x {b} = {product} is not an unclaimed cell")]
    InvalidMove { a: u8, b: u8, product: u32 },

    #[error("game has not started")]
    NotStarted,

    #[error("game is over")]
    GameOver,

    /// Guard for a commit arriving while the opponent's reply is in progress.
    ///
    /// The opponent's turn is held only inside a single commit, so this is
    /// unreachable between intents.
    #[error("not your turn")]
    NotYourTurn,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_move_display() {
        let err = MoveError::InvalidMove { a: 3, b: 4, product: 12 };
        assert_eq!(
            err.to_string(),
            "invalid move: 3 x 4 = 12 is not an unclaimed cell"
        );
    }

    #[test]
    fn test_state_error_display() {
        assert_eq!(MoveError::NotStarted.to_string(), "game has not started");
        assert_eq!(MoveError::GameOver.to_string(), "game is over");
        assert_eq!(MoveError::NotYourTurn.to_string(), "not your turn");
    }
}
