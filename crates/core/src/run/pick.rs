use super::*;
use crate::*;

impl RunState {
    /// Handles a click on `slot`. Face-down cards need a second click on the
    /// same slot before they count as picked.
    pub fn pick_card(
        &mut self,
        slot: usize,
        bridge: &mut dyn DisplayBridge,
        events: &mut EventBus,
    ) -> Result<PickOutcome, RunError> {
        match self.state.phase {
            Phase::Picking | Phase::Customizing => {}
            phase => return Err(RunError::InvalidPhase(phase)),
        }
        if slot >= self.state.slots.len() {
            return Err(RunError::SlotOutOfRange(slot));
        }

        match std::mem::take(&mut self.state.stage) {
            PickStage::AwaitingConfirm {
                slot: pending,
                hidden_before,
            } => {
                if pending != slot {
                    self.state.stage = PickStage::AwaitingConfirm {
                        slot: pending,
                        hidden_before,
                    };
                    return Err(RunError::ConfirmPending { slot: pending });
                }
                self.unmask_slots(&hidden_before, bridge);
            }
            PickStage::AwaitingFirstClick => {
                let id = match self.state.offered(slot) {
                    Some(id) if !self.state.is_slot_concealed(slot) => id,
                    _ => return Err(RunError::SlotConcealed(slot)),
                };
                if self.state.remaining_picks == 0 {
                    return Err(RunError::NoPicksLeft);
                }
                if self.deals_face_down(slot, id) {
                    self.mask_for_confirm(slot, id, bridge);
                    events.push(Event::ConfirmRequested { slot });
                    return Ok(PickOutcome::AwaitingConfirm);
                }
            }
        }
        Ok(self.take_card(slot, bridge, events))
    }

    /// First click on a face-down card: hide everything, turn over the clicked card.
    fn mask_for_confirm(&mut self, slot: usize, id: CardId, bridge: &mut dyn DisplayBridge) {
        let hidden_before = self.state.concealed_slots();
        for (index, other) in self.state.slots.iter_mut().enumerate() {
            other.face = SlotFace::Hidden;
            bridge.conceal_slot(index);
        }
        self.state.slots[slot].face = SlotFace::Revealed;
        bridge.reveal_slot(slot, self.catalog.card(id), Appearance::Face);
        bridge.set_text(TextField::Pick, "Confirm your card");
        self.state.stage = PickStage::AwaitingConfirm {
            slot,
            hidden_before,
        };
    }

    /// Shows every slot again except those that were already empty.
    fn unmask_slots(&mut self, hidden_before: &[usize], bridge: &mut dyn DisplayBridge) {
        for index in 0..self.state.slots.len() {
            if hidden_before.contains(&index) {
                continue;
            }
            if let Some(id) = self.state.slots[index].card {
                self.state.slots[index].face = self.face_for(index, id);
                self.show_slot(index, bridge);
            }
        }
    }

    fn take_card(
        &mut self,
        slot: usize,
        bridge: &mut dyn DisplayBridge,
        events: &mut EventBus,
    ) -> PickOutcome {
        let Some(id) = self.state.slots[slot].card else {
            return PickOutcome::Picked {
                remaining: self.state.remaining_picks,
            };
        };
        self.state.slots[slot] = Slot::empty();
        bridge.conceal_slot(slot);

        let tier = self.catalog.mark_picked(id);
        let card = self.catalog.card(id);
        let kind = card.kind;
        let list = kind.history();
        let text = card.current_text().unwrap_or_default().to_string();
        let previous_tier = (tier > 1)
            .then(|| card.texts.get(tier as usize - 2).cloned())
            .flatten();
        let base = card.base.map(|base| self.catalog.card(base));
        let base_texts = base.map(|base| (base.kind.history(), base.texts.clone()));
        let effect = card.effect.clone();

        log::debug!("picked {text:?} from slot {slot} (tier {tier})");
        self.state.history.list_mut(list).push(text.clone());
        events.push(Event::CardPicked {
            slot,
            kind,
            text,
            tier,
        });
        if let Some(effect) = effect {
            self.apply_effect(&effect, bridge, events);
        }
        if let Some(previous) = previous_tier {
            self.state.history.remove(list, &previous);
        }
        if let Some((base_list, texts)) = base_texts {
            for text in &texts {
                self.state.history.remove(base_list, text);
            }
        }
        self.render_history(bridge);

        self.state.remaining_picks = self.state.remaining_picks.saturating_sub(1);
        if self.state.remaining_picks == 0 {
            return self.finish_round(bridge, events);
        }
        if !self.state.modes.show_all {
            self.show_pick_prompt(bridge);
        }
        events.push(Event::PicksRemaining {
            remaining: self.state.remaining_picks,
        });
        PickOutcome::Picked {
            remaining: self.state.remaining_picks,
        }
    }

    /// Quota reached: end the run, or open the way to the next round.
    pub(super) fn finish_round(
        &mut self,
        bridge: &mut dyn DisplayBridge,
        events: &mut EventBus,
    ) -> PickOutcome {
        if self.state.round == 0 {
            bridge.set_text(TextField::Pick, "Feeling masochistic, eh? Go ahead...");
            return PickOutcome::Picked { remaining: 0 };
        }
        self.conceal_all_slots(bridge);
        if self.state.is_final_round() {
            self.state.phase = Phase::RunEnded;
            bridge.set_text(TextField::Pick, "The run ends here. Good luck!");
            bridge.set_button(Button::Advance, false, None);
            events.push(Event::RunEnded {
                round: self.state.round,
            });
            log::debug!("run ended after round {}", self.state.round);
            return PickOutcome::RunEnded;
        }
        self.state.phase = Phase::RoundComplete;
        bridge.set_button(Button::Advance, true, Some(HostAction::NextRound));
        bridge.set_text(TextField::Pick, "If you beat the map, go to the next round.");
        events.push(Event::RoundCleared {
            round: self.state.round,
        });
        PickOutcome::RoundComplete
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::*;

    fn started(seed: u64) -> (RunState, RecordingBridge, EventBus) {
        let mut run = sample_run(seed);
        let mut bridge = RecordingBridge::default();
        let mut events = EventBus::default();
        run.start_run(false, &mut bridge, &mut events).expect("start");
        (run, bridge, events)
    }

    #[test]
    fn face_up_pick_lands_in_history() {
        let (mut run, mut bridge, mut events) = started(20);
        let slot = first_silver_face_up_slot(&run).expect("silver slot");
        let id = run.state.offered(slot).expect("card");
        let title = run.catalog.card(id).title().to_string();
        let outcome = run.pick_card(slot, &mut bridge, &mut events).expect("pick");
        assert_eq!(outcome, PickOutcome::Picked { remaining: 1 });
        assert_eq!(run.state.history.modifiers, vec![title]);
        assert!(run.state.is_slot_concealed(slot));
        assert_eq!(bridge.slot(slot), None);
        assert_eq!(bridge.text(TextField::Pick), Some("Pick 1 of these cards:"));
    }

    #[test]
    fn concealed_slot_cannot_be_picked() {
        let (mut run, mut bridge, mut events) = started(21);
        let slot = first_silver_face_up_slot(&run).expect("silver slot");
        run.pick_card(slot, &mut bridge, &mut events).expect("pick");
        assert_eq!(
            run.pick_card(slot, &mut bridge, &mut events),
            Err(RunError::SlotConcealed(slot))
        );
        assert_eq!(
            run.pick_card(9, &mut bridge, &mut events),
            Err(RunError::SlotOutOfRange(9))
        );
    }

    #[test]
    fn first_click_on_mystery_card_changes_nothing_but_the_view() {
        let (mut run, mut bridge, mut events) = started(22);
        let id = run.state.offered(3).expect("last slot");
        if run.catalog.card(id).always_revealed() {
            return;
        }
        let history = run.state.history.clone();
        let picks = run.state.remaining_picks;

        let outcome = run.pick_card(3, &mut bridge, &mut events).expect("first click");
        assert_eq!(outcome, PickOutcome::AwaitingConfirm);
        assert_eq!(run.state.history, history);
        assert_eq!(run.state.remaining_picks, picks);
        assert_eq!(run.catalog.card(id).times_picked, 0);
        assert_eq!(bridge.slot(3), Some((id, Appearance::Face)));
        for other in 0..3 {
            assert_eq!(bridge.slot(other), None);
        }
        assert_eq!(bridge.text(TextField::Pick), Some("Confirm your card"));
        assert_eq!(
            run.pick_card(0, &mut bridge, &mut events),
            Err(RunError::ConfirmPending { slot: 3 })
        );

        let outcome = run.pick_card(3, &mut bridge, &mut events).expect("confirm");
        assert!(matches!(outcome, PickOutcome::Picked { .. } | PickOutcome::RoundComplete));
        assert_eq!(run.catalog.card(id).times_picked, 1);
        assert_eq!(bridge.slot(3), None);
    }

    #[test]
    fn confirm_restores_only_previously_visible_slots() {
        let (mut run, mut bridge, mut events) = started(23);
        let first = first_silver_face_up_slot(&run).expect("silver slot");
        run.pick_card(first, &mut bridge, &mut events).expect("pick");
        let id = run.state.offered(3).expect("last slot");
        if run.catalog.card(id).always_revealed() {
            return;
        }
        run.pick_card(3, &mut bridge, &mut events).expect("first click");
        run.pick_card(3, &mut bridge, &mut events).expect("confirm");
        assert_eq!(bridge.slot(first), None);
        assert_eq!(run.state.phase, Phase::RoundComplete);
    }

    #[test]
    fn second_tier_replaces_first_tier_text() {
        let (mut run, mut bridge, mut events) = started(24);
        let stackable = run.catalog.find_by_text(SPRINT_TIERS[0]).expect("stackable");
        put_face_up(&mut run, 0, stackable);
        run.pick_card(0, &mut bridge, &mut events).expect("tier 1");
        assert_eq!(run.state.history.modifiers, vec![SPRINT_TIERS[0].to_string()]);
        put_face_up(&mut run, 1, stackable);
        run.pick_card(1, &mut bridge, &mut events).expect("tier 2");
        assert_eq!(run.state.history.modifiers, vec![SPRINT_TIERS[1].to_string()]);
    }

    #[test]
    fn picking_definitive_version_drops_base_tiers() {
        let (mut run, mut bridge, mut events) = started(25);
        let stackable = run.catalog.find_by_text(SPRINT_TIERS[0]).expect("stackable");
        let upgrade = run.catalog.card(stackable).upgrade.expect("upgrade");
        run.state.remaining_picks = 3;
        put_face_up(&mut run, 0, stackable);
        run.pick_card(0, &mut bridge, &mut events).expect("tier 1");
        put_face_up(&mut run, 1, upgrade);
        run.pick_card(1, &mut bridge, &mut events).expect("definitive");
        assert_eq!(run.state.history.modifiers, vec![SPRINT_OFF.to_string()]);
        assert!(bridge
            .text(TextField::Modifiers)
            .is_some_and(|text| text == SPRINT_OFF));
    }

    #[test]
    fn last_pick_of_final_round_ends_the_run() {
        let (mut run, mut bridge, mut events) = started(26);
        run.state.round = run.state.max_rounds;
        run.state.remaining_picks = 1;
        let slot = first_silver_face_up_slot(&run).expect("silver slot");
        let outcome = run.pick_card(slot, &mut bridge, &mut events).expect("pick");
        assert_eq!(outcome, PickOutcome::RunEnded);
        assert_eq!(run.state.phase, Phase::RunEnded);
        assert_eq!(run.state.concealed_slots(), vec![0, 1, 2, 3]);
        assert_eq!(bridge.text(TextField::Pick), Some("The run ends here. Good luck!"));
        assert_eq!(
            run.advance_round(&mut bridge, &mut events),
            Err(RunError::InvalidPhase(Phase::RunEnded))
        );
    }

    #[test]
    fn emptying_the_preliminary_round_keeps_continue_enabled() {
        let mut run = sample_run(27);
        let mut bridge = RecordingBridge::default();
        let mut events = EventBus::default();
        run.start_run(true, &mut bridge, &mut events).expect("start");
        for slot in [0, 1, 2, 3] {
            run.pick_card(slot, &mut bridge, &mut events).expect("pick");
        }
        assert_eq!(run.state.remaining_picks, 0);
        assert_eq!(run.state.phase, Phase::Customizing);
        assert_eq!(
            bridge.text(TextField::Pick),
            Some("Feeling masochistic, eh? Go ahead...")
        );
        assert_eq!(
            bridge.button(Button::Advance),
            Some((true, Some(HostAction::Continue)))
        );
    }
}
