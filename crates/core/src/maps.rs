use crate::{RngState, RunConfig};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MapDef {
    pub name: String,
    #[serde(default)]
    pub outdoor: bool,
}

impl MapDef {
    pub fn new(name: &str, outdoor: bool) -> Self {
        Self {
            name: name.to_string(),
            outdoor,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapPools {
    pub small: Vec<MapDef>,
    pub big: Vec<MapDef>,
}

impl MapPools {
    pub fn new(small: Vec<MapDef>, big: Vec<MapDef>) -> Self {
        Self { small, big }
    }

    /// Shuffles both pools, then nudges an outdoor map toward the front so
    /// early rounds see weather cards more often.
    pub fn shuffle(&mut self, rng: &mut RngState, outdoor_bias: f64) {
        rng.shuffle(&mut self.small);
        rng.shuffle(&mut self.big);
        if rng.chance(outdoor_bias) {
            promote_outdoor(&mut self.small, 0);
        } else if rng.chance(outdoor_bias) {
            promote_outdoor(&mut self.small, 1);
        } else if rng.chance(outdoor_bias) {
            promote_outdoor(&mut self.big, 0);
        }
    }

    /// Map played in `round`: big-map rounds walk the big pool in order,
    /// every other round indexes the small pool by round number.
    pub fn for_round(&self, round: u8, config: &RunConfig) -> Option<&MapDef> {
        if let Some(position) = config.big_map_rounds.iter().position(|r| *r == round) {
            return wrap(&self.big, position);
        }
        wrap(&self.small, (round as usize).saturating_sub(1))
    }

    pub fn big(&self, index: usize) -> Option<&MapDef> {
        wrap(&self.big, index)
    }

    pub fn last_big(&self) -> Option<&MapDef> {
        self.big.last()
    }
}

fn wrap(pool: &[MapDef], index: usize) -> Option<&MapDef> {
    if pool.is_empty() {
        return None;
    }
    pool.get(index % pool.len())
}

fn promote_outdoor(pool: &mut [MapDef], target: usize) {
    if target >= pool.len() {
        return;
    }
    if let Some(found) = pool.iter().position(|map| map.outdoor) {
        pool.swap(found, target);
    }
}
