use super::*;
use crate::*;

pub(super) const WELCOME_COLOR: &str = "#002255";
pub(super) const HARD_RUN_COLOR: &str = "#8b0000";
pub(super) const HARD_RUN_MAP_COLOR: &str = "#af0000";
pub(super) const ROUND_COLOR: &str = "black";
pub(super) const MAP_COLOR: &str = "#0000da";

impl RunState {
    /// Whether a card dealt into `slot` shows only its back.
    pub(super) fn deals_face_down(&self, slot: usize, card: CardId) -> bool {
        (self.state.modes.mystery || self.state.is_last_slot(slot))
            && !self.state.modes.show_all
            && !self.catalog.card(card).always_revealed()
    }

    pub(super) fn face_for(&self, slot: usize, card: CardId) -> SlotFace {
        if self.deals_face_down(slot, card) {
            SlotFace::Mystery
        } else {
            SlotFace::Revealed
        }
    }

    pub(super) fn show_slot(&self, index: usize, bridge: &mut dyn DisplayBridge) {
        let Some(slot) = self.state.slots.get(index) else {
            return;
        };
        match (slot.card, slot.face) {
            (Some(id), SlotFace::Revealed) => {
                bridge.reveal_slot(index, self.catalog.card(id), Appearance::Face)
            }
            (Some(id), SlotFace::Mystery) => {
                let card = self.catalog.card(id);
                bridge.reveal_slot(index, card, Appearance::Back(card.kind.into()))
            }
            _ => bridge.conceal_slot(index),
        }
    }

    pub(super) fn show_all_slots(&self, bridge: &mut dyn DisplayBridge) {
        for index in 0..self.state.slots.len() {
            self.show_slot(index, bridge);
        }
    }

    pub(super) fn conceal_all_slots(&mut self, bridge: &mut dyn DisplayBridge) {
        for (index, slot) in self.state.slots.iter_mut().enumerate() {
            *slot = Slot::empty();
            bridge.conceal_slot(index);
        }
    }

    pub(super) fn show_pick_prompt(&self, bridge: &mut dyn DisplayBridge) {
        let prompt = format!("Pick {} of these cards:", self.state.remaining_picks);
        bridge.set_text(TextField::Pick, &prompt);
    }

    pub(super) fn render_history(&self, bridge: &mut dyn DisplayBridge) {
        let history = &self.state.history;
        bridge.set_text(TextField::Modifiers, &format_modifiers(&history.modifiers));
        bridge.set_text(TextField::Challenges, &format_challenges(&history.challenges));
    }

    pub(super) fn push_batch_event(&self, events: &mut EventBus) {
        let cards = self
            .state
            .slots
            .iter()
            .map(|slot| slot.card.map(|id| self.catalog.card(id).title().to_string()))
            .collect();
        events.push(Event::BatchOffered {
            round: self.state.round,
            cards,
        });
    }
}
