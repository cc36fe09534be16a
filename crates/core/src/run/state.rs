use super::*;
use crate::*;

impl RunState {
    pub fn new(config: RunConfig, catalog: Catalog, maps: MapPools, seed: u64) -> Self {
        let state = GameState::new(&config);
        Self {
            config,
            catalog,
            maps,
            rng: RngState::from_seed(seed),
            state,
        }
    }

    /// Fresh state, counters back to zero, maps reshuffled.
    pub(super) fn reset(&mut self) {
        self.state = GameState::new(&self.config);
        self.catalog.reset_counters();
        self.maps.shuffle(&mut self.rng, self.config.outdoor_bias);
    }

    /// Back to the run choice screen.
    pub fn choose_new_run(&mut self, bridge: &mut dyn DisplayBridge) {
        self.reset();
        bridge.set_text(TextField::Round, "Welcome to the Torment cards challenge!");
        bridge.set_color(TextField::Round, display::WELCOME_COLOR);
        bridge.set_text(TextField::Map, "");
        bridge.set_text(TextField::Pick, "Choose your challenge run:");
        for index in 0..self.state.slots.len() {
            bridge.conceal_slot(index);
        }
        bridge.set_button(Button::NormalRun, true, Some(HostAction::StartNormalRun));
        bridge.set_button(Button::HardRun, true, Some(HostAction::StartHardRun));
        bridge.set_button(Button::Advance, false, None);
        bridge.set_button(Button::NewRun, false, None);
        bridge.set_text(TextField::Modifiers, "");
        bridge.set_text(TextField::Challenges, "");
    }

    /// Starts a run. A custom run opens with a preliminary round where any
    /// number of the hard-run cards may be taken before round 1.
    pub fn start_run(
        &mut self,
        custom: bool,
        bridge: &mut dyn DisplayBridge,
        events: &mut EventBus,
    ) -> Result<(), RunError> {
        self.reset();
        events.push(Event::RunStarted {
            seed: self.rng.seed(),
            custom,
        });
        bridge.set_button(Button::NormalRun, false, None);
        bridge.set_button(Button::HardRun, false, None);
        bridge.set_button(Button::NewRun, true, Some(HostAction::NewRun));
        if !custom {
            self.enter_next_round(bridge, events);
            return Ok(());
        }

        bridge.set_text(TextField::Round, "How hard?");
        bridge.set_color(TextField::Round, display::HARD_RUN_COLOR);
        bridge.set_text(TextField::Map, "Choose your own difficulty");
        bridge.set_color(TextField::Map, display::HARD_RUN_MAP_COLOR);
        bridge.set_text(TextField::Pick, "Pick any amount of these cards:");

        self.state.phase = Phase::Customizing;
        self.state.modes.show_all = true;
        self.state.remaining_picks = self.state.total_slots;
        let hard_run = self.catalog.hard_run().to_vec();
        let total = self.state.total_slots;
        for (index, slot) in self.state.slots.iter_mut().enumerate() {
            *slot = match hard_run.get(index) {
                Some(&card) if index < total => Slot {
                    card: Some(card),
                    face: SlotFace::Revealed,
                },
                _ => Slot::empty(),
            };
        }
        self.show_all_slots(bridge);
        self.push_batch_event(events);
        bridge.set_button(Button::Advance, true, Some(HostAction::Continue));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::*;

    #[test]
    fn choose_new_run_offers_both_run_types() {
        let mut run = sample_run(1);
        let mut bridge = RecordingBridge::default();
        run.choose_new_run(&mut bridge);
        assert_eq!(run.state.phase, Phase::ChoosingRunType);
        assert_eq!(
            bridge.button(Button::NormalRun),
            Some((true, Some(HostAction::StartNormalRun)))
        );
        assert_eq!(
            bridge.button(Button::HardRun),
            Some((true, Some(HostAction::StartHardRun)))
        );
        assert_eq!(bridge.button(Button::Advance), Some((false, None)));
        assert_eq!(bridge.text(TextField::Pick), Some("Choose your challenge run:"));
    }

    #[test]
    fn custom_run_shows_every_hard_run_card() {
        let mut run = sample_run(2);
        let mut bridge = RecordingBridge::default();
        let mut events = EventBus::default();
        run.start_run(true, &mut bridge, &mut events).expect("start");
        assert_eq!(run.state.phase, Phase::Customizing);
        assert_eq!(run.state.round, 0);
        assert_eq!(run.state.remaining_picks, 4);
        assert!(run.state.modes.show_all);
        for index in 0..4 {
            let (card, appearance) = bridge.slot(index).expect("revealed");
            assert_eq!(appearance, Appearance::Face);
            assert_eq!(Some(card), run.catalog.hard_run().get(index).copied());
        }
        assert_eq!(
            bridge.button(Button::Advance),
            Some((true, Some(HostAction::Continue)))
        );
    }

    #[test]
    fn restart_clears_counters_and_history() {
        let mut run = sample_run(3);
        let mut bridge = RecordingBridge::default();
        let mut events = EventBus::default();
        run.start_run(false, &mut bridge, &mut events).expect("start");
        let slot = first_face_up_slot(&run).expect("face-up slot");
        let id = run.state.offered(slot).expect("card");
        run.pick_card(slot, &mut bridge, &mut events).expect("pick");
        assert_eq!(run.catalog.card(id).times_picked, 1);

        run.start_run(false, &mut bridge, &mut events).expect("restart");
        assert!(run.catalog.cards().iter().all(|card| card.times_picked == 0));
        assert_eq!(run.state.round, 1);
        assert!(run.state.history.modifiers.is_empty());
        assert!(run.state.history.golden.is_empty());
    }
}
