use crate::{GoldenEffect, MapDef};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum CardKind {
    Basic,
    Stackable,
    Challenge,
    Golden,
}

impl CardKind {
    pub fn history(self) -> HistoryKind {
        match self {
            CardKind::Golden => HistoryKind::Golden,
            CardKind::Challenge => HistoryKind::Challenges,
            CardKind::Basic | CardKind::Stackable => HistoryKind::Modifiers,
        }
    }
}

/// Which pick-history list a card's text lands in.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum HistoryKind {
    Modifiers,
    Challenges,
    Golden,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DifficultyRating {
    #[serde(rename = "Don't offer")]
    DontOffer,
    #[serde(rename = "Very easy")]
    VeryEasy,
    #[serde(rename = "Easy")]
    Easy,
    #[serde(rename = "Normal")]
    Normal,
    #[serde(rename = "Hard")]
    Hard,
    #[serde(rename = "Very hard")]
    VeryHard,
    #[serde(rename = "Maybe impossible")]
    MaybeImpossible,
}

/// Base offer weight, indexed by `[rating][run difficulty]`.
pub const BASE_WEIGHTS: [[u32; 6]; 7] = [
    [0, 0, 0, 0, 0, 0],
    [3, 1, 0, 0, 0, 0],
    [4, 3, 2, 1, 0, 0],
    [2, 3, 3, 3, 1, 0],
    [1, 2, 4, 3, 5, 5],
    [0, 1, 1, 2, 3, 3],
    [0, 0, 0, 1, 1, 2],
];

pub const MAX_DIFFICULTY: u8 = 5;

impl DifficultyRating {
    pub fn base_weight(self, difficulty: u8) -> u32 {
        let column = difficulty.min(MAX_DIFFICULTY) as usize;
        BASE_WEIGHTS[self as usize][column]
    }
}

/// Index of a card inside its [`crate::Catalog`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CardId(pub usize);

#[derive(Debug, Clone, Serialize)]
pub struct Card {
    pub id: CardId,
    pub kind: CardKind,
    pub rating: DifficultyRating,
    pub rarity: i32,
    pub image: String,
    pub texts: Vec<String>,
    pub max_picks: u8,
    pub forbidden_rounds: Vec<u8>,
    pub incompatible_with: Vec<String>,
    pub upgrade: Option<CardId>,
    pub base: Option<CardId>,
    pub effect: Option<GoldenEffect>,
    pub outdoor_only: bool,
    pub times_picked: u8,
}

impl Card {
    /// Offer weight under the given round, run difficulty and map.
    pub fn weight(&self, round: u8, difficulty: u8, map: Option<&MapDef>) -> u32 {
        if self.forbidden_rounds.contains(&round) {
            return 0;
        }
        if self.outdoor_only && !map.is_some_and(|map| map.outdoor) {
            return 0;
        }
        let base = self.rating.base_weight(difficulty);
        if base == 0 {
            return 0;
        }
        (base as i64 + self.rarity as i64).max(0) as u32
    }

    pub fn is_exhausted(&self) -> bool {
        self.times_picked >= self.max_picks
    }

    pub fn title(&self) -> &str {
        self.texts.first().map(String::as_str).unwrap_or_default()
    }

    /// Text shown in history for the most recent pick of this card.
    pub fn current_text(&self) -> Option<&str> {
        let tier = self.times_picked.checked_sub(1)?;
        self.texts.get(tier as usize).map(String::as_str)
    }

    /// Text the next pick of this card would add.
    pub fn offer_text(&self) -> &str {
        self.texts
            .get(self.times_picked as usize)
            .map(String::as_str)
            .unwrap_or_else(|| self.title())
    }

    /// Cards that end the run are never dealt face down.
    pub fn always_revealed(&self) -> bool {
        matches!(self.effect, Some(GoldenEffect::EndRunNow { .. }))
    }
}

/// Raw card definition as authored in content files. Upgrades nest inline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardSpec {
    pub kind: CardKind,
    pub difficulty: DifficultyRating,
    #[serde(default)]
    pub rarity: i32,
    #[serde(default)]
    pub image: String,
    pub text: Vec<String>,
    pub max_picks: u8,
    #[serde(default)]
    pub definitive: Option<Box<CardSpec>>,
    #[serde(default)]
    pub forbidden_rounds: Vec<u8>,
    #[serde(default)]
    pub incompatible: Vec<String>,
    #[serde(default)]
    pub effect: Option<GoldenEffect>,
    #[serde(default)]
    pub outdoor_only: bool,
}

impl CardSpec {
    pub fn new(kind: CardKind, difficulty: DifficultyRating, text: &str) -> Self {
        Self {
            kind,
            difficulty,
            rarity: 0,
            image: String::new(),
            text: vec![text.to_string()],
            max_picks: 1,
            definitive: None,
            forbidden_rounds: Vec::new(),
            incompatible: Vec::new(),
            effect: None,
            outdoor_only: false,
        }
    }

    pub fn tiers(mut self, texts: &[&str]) -> Self {
        self.text = texts.iter().map(|text| text.to_string()).collect();
        self.max_picks = self.text.len() as u8;
        self
    }

    pub fn incompatible(mut self, texts: &[&str]) -> Self {
        self.incompatible = texts.iter().map(|text| text.to_string()).collect();
        self
    }

    pub fn definitive(mut self, upgrade: CardSpec) -> Self {
        self.definitive = Some(Box::new(upgrade));
        self
    }

    pub fn effect(mut self, effect: GoldenEffect) -> Self {
        self.effect = Some(effect);
        self
    }

    pub fn outdoor_only(mut self) -> Self {
        self.outdoor_only = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(rating: DifficultyRating, rarity: i32) -> Card {
        Card {
            id: CardId(0),
            kind: CardKind::Basic,
            rating,
            rarity,
            image: String::new(),
            texts: vec!["[Ghost] Fingerprint chance: 50%".to_string()],
            max_picks: 1,
            forbidden_rounds: vec![2],
            incompatible_with: Vec::new(),
            upgrade: None,
            base: None,
            effect: None,
            outdoor_only: false,
            times_picked: 0,
        }
    }

    #[test]
    fn forbidden_round_has_no_weight() {
        let card = card(DifficultyRating::Normal, 10);
        assert_eq!(card.weight(2, 0, None), 0);
        assert_eq!(card.weight(1, 0, None), 12);
    }

    #[test]
    fn zero_base_ignores_rarity() {
        let card = card(DifficultyRating::VeryEasy, 8);
        assert_eq!(card.weight(1, 2, None), 0);
        assert_eq!(card.weight(1, 1, None), 9);
    }

    #[test]
    fn negative_rarity_floors_at_zero() {
        let card = card(DifficultyRating::MaybeImpossible, -3);
        assert_eq!(card.weight(1, 5, None), 0);
    }

    #[test]
    fn difficulty_clamps_to_last_column() {
        let card = card(DifficultyRating::Hard, 0);
        assert_eq!(card.weight(1, 9, None), 5);
    }

    #[test]
    fn offer_text_walks_the_tiers() {
        let mut card = card(DifficultyRating::Hard, 0);
        card.texts = vec![
            "[Player] Sprint duration: 2s".to_string(),
            "[Player] Sprint duration: 1s".to_string(),
        ];
        card.max_picks = 2;
        assert_eq!(card.offer_text(), "[Player] Sprint duration: 2s");
        card.times_picked = 1;
        assert_eq!(card.offer_text(), "[Player] Sprint duration: 1s");
        card.times_picked = 2;
        assert_eq!(card.offer_text(), "[Player] Sprint duration: 2s");
    }

    #[test]
    fn weather_needs_outdoor_map() {
        let mut card = card(DifficultyRating::Normal, 0);
        card.outdoor_only = true;
        let house = MapDef::new("Willow Street", false);
        let camp = MapDef::new("Camp Woodwind", true);
        assert_eq!(card.weight(1, 0, Some(&house)), 0);
        assert_eq!(card.weight(1, 0, None), 0);
        assert_eq!(card.weight(1, 0, Some(&camp)), 2);
    }

    #[test]
    fn zero_rated_tiers_never_offered() {
        let ratings = [
            DifficultyRating::DontOffer,
            DifficultyRating::VeryEasy,
            DifficultyRating::Easy,
            DifficultyRating::Normal,
            DifficultyRating::Hard,
            DifficultyRating::VeryHard,
            DifficultyRating::MaybeImpossible,
        ];
        for rating in ratings {
            for rarity in -10..=10 {
                let card = card(rating, rarity);
                for difficulty in 0..8 {
                    let weight = card.weight(1, difficulty, None);
                    if rating.base_weight(difficulty) == 0 {
                        assert_eq!(weight, 0);
                    }
                }
            }
        }
    }
}
