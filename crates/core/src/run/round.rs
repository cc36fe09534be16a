use super::*;
use crate::*;

impl RunState {
    /// Moves on from the preliminary round or a cleared round.
    pub fn advance_round(
        &mut self,
        bridge: &mut dyn DisplayBridge,
        events: &mut EventBus,
    ) -> Result<(), RunError> {
        match self.state.phase {
            Phase::Customizing | Phase::RoundComplete => {
                self.enter_next_round(bridge, events);
                Ok(())
            }
            phase => Err(RunError::InvalidPhase(phase)),
        }
    }

    pub(super) fn enter_next_round(&mut self, bridge: &mut dyn DisplayBridge, events: &mut EventBus) {
        let modes = &mut self.state.modes;
        modes.show_all = false;
        if modes.schedule_mystery {
            modes.schedule_mystery = false;
            modes.mystery = true;
        } else if modes.mystery {
            modes.mystery = false;
        }
        self.state.stage = PickStage::AwaitingFirstClick;

        self.state.round = self.state.round.saturating_add(1);
        self.state.difficulty = self
            .config
            .difficulty_for(self.state.round, self.state.difficulty);
        self.state.remaining_picks =
            self.config.base_picks as usize + usize::from(self.state.modes.extra);
        self.state.map = self.maps.for_round(self.state.round, &self.config).cloned();
        self.state.phase = Phase::Picking;

        events.push(Event::RoundStarted {
            round: self.state.round,
            difficulty: self.state.difficulty,
            picks: self.state.remaining_picks,
            map: self.state.map.as_ref().map(|map| map.name.clone()),
        });
        log::debug!(
            "round {} at difficulty {} on {:?}",
            self.state.round,
            self.state.difficulty,
            self.state.map.as_ref().map(|map| map.name.as_str())
        );

        bridge.set_text(TextField::Round, &format!("Round {}", self.state.round));
        bridge.set_color(TextField::Round, display::ROUND_COLOR);
        let map_name = self.state.map.as_ref().map_or("", |map| map.name.as_str());
        bridge.set_text(TextField::Map, map_name);
        bridge.set_color(TextField::Map, display::MAP_COLOR);
        self.show_pick_prompt(bridge);
        bridge.set_button(Button::Advance, false, None);

        self.offer_batch(bridge, events);

        self.state.modes.extra = false;
        self.state.modes.chaos = false;

        if self.state.remaining_picks == 0 {
            self.finish_round(bridge, events);
        }
    }
}
