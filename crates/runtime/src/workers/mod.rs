//! Background tasks internal to the runtime crate.

mod battle;

pub(crate) use battle::{BattleWorker, Command};
