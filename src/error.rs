use thiserror::Error;

/// Reasons an engine refuses an operation. The page treats every refusal as
/// a silent no-op; the variants exist so callers and tests can tell them apart.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("at least {min} players are required, got {got}")]
    NotEnoughPlayers { min: usize, got: usize },
    #[error("the game has not been started")]
    NotStarted,
    #[error("a game is already in progress")]
    AlreadyStarted,
    #[error("no unrolled dice left this turn")]
    NothingToRoll,
    #[error("the wheel is already spinning")]
    AlreadySpinning,
    #[error("index {index} out of range for {len} entries")]
    IndexOutOfRange { index: usize, len: usize },
}
