use crate::{CardId, HistoryKind, MapDef, RunConfig};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Phase {
    ChoosingRunType,
    /// Preliminary round of a hard run: pick any number of special cards.
    Customizing,
    Picking,
    RoundComplete,
    RunEnded,
}

/// Flags switched on by golden cards.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Modes {
    pub extra: bool,
    pub challenge: bool,
    pub schedule_mystery: bool,
    pub mystery: bool,
    pub chaos: bool,
    pub show_all: bool,
    pub altered: bool,
    pub no_gold: bool,
}

/// Display text of every pick, in pick order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct History {
    pub modifiers: Vec<String>,
    pub challenges: Vec<String>,
    pub golden: Vec<String>,
}

impl History {
    pub fn list(&self, kind: HistoryKind) -> &[String] {
        match kind {
            HistoryKind::Modifiers => &self.modifiers,
            HistoryKind::Challenges => &self.challenges,
            HistoryKind::Golden => &self.golden,
        }
    }

    pub fn list_mut(&mut self, kind: HistoryKind) -> &mut Vec<String> {
        match kind {
            HistoryKind::Modifiers => &mut self.modifiers,
            HistoryKind::Challenges => &mut self.challenges,
            HistoryKind::Golden => &mut self.golden,
        }
    }

    pub fn contains(&self, text: &str) -> bool {
        self.modifiers
            .iter()
            .chain(self.challenges.iter())
            .chain(self.golden.iter())
            .any(|picked| picked == text)
    }

    pub fn remove(&mut self, kind: HistoryKind, text: &str) {
        self.list_mut(kind).retain(|picked| picked != text);
    }
}

/// Two-click confirmation for face-down cards.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum PickStage {
    #[default]
    AwaitingFirstClick,
    AwaitingConfirm {
        slot: usize,
        /// Slots that were already empty before the first click.
        hidden_before: Vec<usize>,
    },
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum SlotFace {
    /// Nothing to click: picked, not dealt, or masked during confirmation.
    Hidden,
    /// Dealt face down; only the card back is visible.
    Mystery,
    Revealed,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Slot {
    pub card: Option<CardId>,
    pub face: SlotFace,
}

impl Slot {
    pub fn empty() -> Self {
        Self {
            card: None,
            face: SlotFace::Hidden,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub round: u8,
    pub difficulty: u8,
    pub remaining_picks: usize,
    pub max_rounds: u8,
    pub total_slots: usize,
    pub phase: Phase,
    pub map: Option<MapDef>,
    pub slots: Vec<Slot>,
    pub history: History,
    pub modes: Modes,
    pub stage: PickStage,
}

impl GameState {
    pub fn new(config: &RunConfig) -> Self {
        Self {
            round: 0,
            difficulty: 0,
            remaining_picks: config.base_picks as usize,
            max_rounds: config.max_rounds,
            total_slots: config.total_slots,
            phase: Phase::ChoosingRunType,
            map: None,
            slots: vec![Slot::empty(); config.total_slots],
            history: History::default(),
            modes: Modes::default(),
            stage: PickStage::default(),
        }
    }

    pub fn offered(&self, slot: usize) -> Option<CardId> {
        self.slots.get(slot).and_then(|slot| slot.card)
    }

    pub fn offered_cards(&self) -> Vec<Option<CardId>> {
        self.slots.iter().map(|slot| slot.card).collect()
    }

    pub fn is_slot_concealed(&self, slot: usize) -> bool {
        self.slots
            .get(slot)
            .map_or(true, |slot| slot.face == SlotFace::Hidden)
    }

    pub fn concealed_slots(&self) -> Vec<usize> {
        (0..self.slots.len())
            .filter(|&index| self.is_slot_concealed(index))
            .collect()
    }

    pub fn is_last_slot(&self, slot: usize) -> bool {
        slot + 1 == self.total_slots
    }

    pub fn is_final_round(&self) -> bool {
        self.round >= self.max_rounds
    }
}
