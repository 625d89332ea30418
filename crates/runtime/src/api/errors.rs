//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from worker coordination and battle initialization so
//! clients can bubble them up with consistent context.

use thiserror::Error;
use tokio::sync::oneshot;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("runtime requires two combatants before building")]
    BattleNotConfigured,

    #[error("battle worker command channel closed")]
    CommandChannelClosed,

    #[error("battle worker reply channel closed")]
    ReplyChannelClosed(#[source] oneshot::error::RecvError),

    #[error("battle worker join failed")]
    WorkerJoin(#[source] tokio::task::JoinError),

    #[error(transparent)]
    Validation(#[from] battle_core::ValidationError),

    #[error("roster has no eligible opponent")]
    NoEligibleOpponent,
}
