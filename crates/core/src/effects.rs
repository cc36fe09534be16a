use serde::{Deserialize, Serialize};

/// Side effect of picking a golden card. Dispatched by the run, never stored as code.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GoldenEffect {
    /// Golden slots are no longer dealt; later rounds get a second challenge slot.
    NoGold,
    AddDifficulty { amount: u8 },
    /// Stackable cards are always dealt as their definitive version.
    Altered,
    RestrictSlots { slots: usize },
    ExtraPick,
    ChallengeMode,
    ScheduleMystery,
    /// Re-deal every slot from the widened pool at a higher difficulty, then
    /// grant extra picks.
    Reshuffle { difficulty_bump: u8, extra_picks: u8 },
    /// Play the last map of the shuffled big pool.
    BiggerMap,
    /// Current round becomes the last; every remaining slot must be picked.
    EndRunNow { big_map_index: usize },
    ExtendRun { reminder: String },
}

impl GoldenEffect {
    pub fn name(&self) -> &'static str {
        match self {
            GoldenEffect::NoGold => "no_gold",
            GoldenEffect::AddDifficulty { .. } => "add_difficulty",
            GoldenEffect::Altered => "altered",
            GoldenEffect::RestrictSlots { .. } => "restrict_slots",
            GoldenEffect::ExtraPick => "extra_pick",
            GoldenEffect::ChallengeMode => "challenge_mode",
            GoldenEffect::ScheduleMystery => "schedule_mystery",
            GoldenEffect::Reshuffle { .. } => "reshuffle",
            GoldenEffect::BiggerMap => "bigger_map",
            GoldenEffect::EndRunNow { .. } => "end_run_now",
            GoldenEffect::ExtendRun { .. } => "extend_run",
        }
    }
}
