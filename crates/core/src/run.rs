use crate::{Catalog, GameState, MapPools, Phase, RngState, RunConfig};
use thiserror::Error;

mod display;
mod golden;
mod offer;
mod pick;
mod round;
mod state;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RunError {
    #[error("invalid phase: {0:?}")]
    InvalidPhase(Phase),
    #[error("slot {0} does not exist")]
    SlotOutOfRange(usize),
    #[error("slot {0} has no card to pick")]
    SlotConcealed(usize),
    #[error("card in slot {slot} is waiting for confirmation")]
    ConfirmPending { slot: usize },
    #[error("no picks left this round")]
    NoPicksLeft,
}

#[derive(Debug)]
pub struct RunState {
    pub config: RunConfig,
    pub catalog: Catalog,
    pub maps: MapPools,
    pub rng: RngState,
    pub state: GameState,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickOutcome {
    /// Face-down card turned over; the same slot must be clicked again.
    AwaitingConfirm,
    Picked { remaining: usize },
    RoundComplete,
    RunEnded,
}
