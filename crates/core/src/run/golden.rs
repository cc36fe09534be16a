use super::*;
use crate::*;

impl RunState {
    pub(super) fn apply_effect(
        &mut self,
        effect: &GoldenEffect,
        bridge: &mut dyn DisplayBridge,
        events: &mut EventBus,
    ) {
        log::debug!("applying {}", effect.name());
        match effect {
            GoldenEffect::NoGold => self.state.modes.no_gold = true,
            GoldenEffect::AddDifficulty { amount } => {
                self.state.difficulty = self.state.difficulty.saturating_add(*amount);
            }
            GoldenEffect::Altered => self.state.modes.altered = true,
            GoldenEffect::RestrictSlots { slots } => {
                self.state.total_slots = (*slots).clamp(1, self.state.slots.len());
            }
            GoldenEffect::ExtraPick => self.state.modes.extra = true,
            GoldenEffect::ChallengeMode => self.state.modes.challenge = true,
            GoldenEffect::ScheduleMystery => self.state.modes.schedule_mystery = true,
            GoldenEffect::Reshuffle {
                difficulty_bump,
                extra_picks,
            } => {
                let before = self.state.difficulty;
                self.state.modes.chaos = true;
                self.state.difficulty = before.saturating_add(*difficulty_bump);
                self.offer_batch(bridge, events);
                self.state.difficulty = before;
                self.state.modes.chaos = false;
                self.state.remaining_picks += *extra_picks as usize;
            }
            GoldenEffect::BiggerMap => {
                if let Some(map) = self.maps.last_big().cloned() {
                    bridge.set_text(TextField::Map, &map.name);
                    self.state.map = Some(map);
                }
            }
            GoldenEffect::EndRunNow { big_map_index } => self.end_run_now(*big_map_index, bridge),
            GoldenEffect::ExtendRun { reminder } => {
                self.state.max_rounds = self.state.max_rounds.saturating_add(1);
                self.state.history.challenges.insert(0, reminder.clone());
            }
        }
        events.push(Event::EffectApplied {
            effect: effect.clone(),
        });
    }

    /// This round becomes the last one and every card still on the table must
    /// be taken, all of them face up.
    fn end_run_now(&mut self, big_map_index: usize, bridge: &mut dyn DisplayBridge) {
        self.state.max_rounds = self.state.max_rounds.saturating_sub(1);
        self.state.modes.show_all = true;
        if let Some(map) = self.maps.big(big_map_index).cloned() {
            bridge.set_text(TextField::Map, &map.name);
            self.state.map = Some(map);
        }
        bridge.set_text(TextField::Pick, "Pick all remaining cards");

        let mut left = 0;
        for index in 0..self.state.slots.len() {
            let slot = &mut self.state.slots[index];
            if slot.face == SlotFace::Hidden || slot.card.is_none() {
                continue;
            }
            slot.face = SlotFace::Revealed;
            left += 1;
            self.show_slot(index, bridge);
        }
        // The pick that triggered this is still to be counted off.
        self.state.remaining_picks = left + 1;
    }
}
