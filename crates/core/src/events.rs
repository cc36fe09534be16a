use crate::{CardKind, GoldenEffect, Pool};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Event {
    RunStarted {
        seed: u64,
        custom: bool,
    },
    RoundStarted {
        round: u8,
        difficulty: u8,
        picks: usize,
        map: Option<String>,
    },
    BatchOffered {
        round: u8,
        cards: Vec<Option<String>>,
    },
    DrawFallback {
        slot: usize,
        pool: Pool,
        dealt: Option<String>,
    },
    ConfirmRequested {
        slot: usize,
    },
    CardPicked {
        slot: usize,
        kind: CardKind,
        text: String,
        tier: u8,
    },
    EffectApplied {
        effect: GoldenEffect,
    },
    PicksRemaining {
        remaining: usize,
    },
    RoundCleared {
        round: u8,
    },
    RunEnded {
        round: u8,
    },
}

#[derive(Debug, Default)]
pub struct EventBus {
    queue: Vec<Event>,
}

impl EventBus {
    pub fn push(&mut self, event: Event) {
        self.queue.push(event);
    }

    pub fn drain(&mut self) -> impl Iterator<Item = Event> + '_ {
        self.queue.drain(..)
    }

    pub fn pending(&self) -> &[Event] {
        &self.queue
    }
}
