use serde::{Deserialize, Serialize};

/// Round rules. Every constant the run state machine consults lives here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RunConfig {
    pub max_rounds: u8,
    pub total_slots: usize,
    pub base_picks: u8,
    /// Rounds on entry to which difficulty rises by one.
    pub difficulty_steps: Vec<u8>,
    /// Round on entry to which difficulty drops back to zero.
    pub difficulty_reset_round: u8,
    /// Golden slots are only dealt while `round < golden_round_limit`.
    pub golden_round_limit: u8,
    pub first_challenge_round: u8,
    /// From this round on, no-gold mode deals a second challenge slot.
    pub no_gold_second_challenge_round: u8,
    pub big_map_rounds: Vec<u8>,
    pub chaos_upgrade_chance: f64,
    pub outdoor_bias: f64,
    pub special_challenge_chance: f64,
    pub max_draw_attempts: u32,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            max_rounds: 5,
            total_slots: 4,
            base_picks: 2,
            difficulty_steps: vec![3, 5],
            difficulty_reset_round: 6,
            golden_round_limit: 5,
            first_challenge_round: 2,
            no_gold_second_challenge_round: 4,
            big_map_rounds: vec![3, 5],
            chaos_upgrade_chance: 0.5,
            outdoor_bias: 0.2,
            special_challenge_chance: 0.2,
            max_draw_attempts: 512,
        }
    }
}

impl RunConfig {
    /// Difficulty after entering `round`, starting from `current`.
    pub fn difficulty_for(&self, round: u8, current: u8) -> u8 {
        if round == self.difficulty_reset_round {
            0
        } else if self.difficulty_steps.contains(&round) {
            current.saturating_add(1)
        } else {
            current
        }
    }
}
