use crate::{DisplayBridge, EventBus, HostAction, Phase, PickOutcome, RunError, RunState};

/// Host-facing entry points. Owns the engine, the display and the event log.
pub struct Session<B: DisplayBridge> {
    pub run: RunState,
    pub bridge: B,
    pub events: EventBus,
}

impl<B: DisplayBridge> Session<B> {
    /// Opens on the run choice screen.
    pub fn new(mut run: RunState, mut bridge: B) -> Self {
        run.choose_new_run(&mut bridge);
        Self {
            run,
            bridge,
            events: EventBus::default(),
        }
    }

    pub fn phase(&self) -> Phase {
        self.run.state.phase
    }

    pub fn on_slot_clicked(&mut self, index: usize) -> Result<PickOutcome, RunError> {
        self.run.pick_card(index, &mut self.bridge, &mut self.events)
    }

    pub fn on_start_normal_run(&mut self) -> Result<(), RunError> {
        self.start(false)
    }

    pub fn on_start_hard_run(&mut self) -> Result<(), RunError> {
        self.start(true)
    }

    pub fn on_continue_clicked(&mut self) -> Result<(), RunError> {
        self.advance_from(Phase::Customizing)
    }

    pub fn on_next_round_clicked(&mut self) -> Result<(), RunError> {
        self.advance_from(Phase::RoundComplete)
    }

    pub fn on_new_run_clicked(&mut self) {
        self.run.choose_new_run(&mut self.bridge);
    }

    /// Runs whatever an enabled button was wired to.
    pub fn dispatch(&mut self, action: HostAction) -> Result<(), RunError> {
        match action {
            HostAction::StartNormalRun => self.on_start_normal_run(),
            HostAction::StartHardRun => self.on_start_hard_run(),
            HostAction::Continue => self.on_continue_clicked(),
            HostAction::NextRound => self.on_next_round_clicked(),
            HostAction::NewRun => {
                self.on_new_run_clicked();
                Ok(())
            }
        }
    }

    fn start(&mut self, custom: bool) -> Result<(), RunError> {
        match self.run.state.phase {
            Phase::ChoosingRunType => self.run.start_run(custom, &mut self.bridge, &mut self.events),
            phase => Err(RunError::InvalidPhase(phase)),
        }
    }

    fn advance_from(&mut self, expected: Phase) -> Result<(), RunError> {
        let phase = self.run.state.phase;
        if phase != expected {
            return Err(RunError::InvalidPhase(phase));
        }
        self.run.advance_round(&mut self.bridge, &mut self.events)
    }
}
