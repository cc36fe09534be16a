use crate::{Card, CardId, CardKind, CardSpec};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Pools a slot can be dealt from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Pool {
    /// Basic and stackable cards.
    Silver,
    Challenge,
    Golden,
    /// Silver and challenge cards together, used for non-forced slots in chaos mode.
    Chaos,
}

/// Content as authored: one list per pool plus named references.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogSpec {
    #[serde(default)]
    pub silver: Vec<CardSpec>,
    #[serde(default)]
    pub challenge: Vec<CardSpec>,
    #[serde(default)]
    pub golden: Vec<CardSpec>,
    /// Golden cards offered in the preliminary round of a hard run.
    #[serde(default)]
    pub hard_run: Vec<CardSpec>,
    /// Text of the card dealt when a slot cannot find a legal draw.
    #[serde(default)]
    pub fallback: Option<String>,
    /// Text of the challenge that may replace a slot in round 1 of a no-gold run.
    #[serde(default)]
    pub special_challenge: Option<String>,
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("card {0:?} has no text")]
    MissingText(String),
    #[error("card {text:?} has {tiers} tier texts but max_picks {max_picks}")]
    TierMismatch {
        text: String,
        tiers: usize,
        max_picks: u8,
    },
    #[error("card {0:?} is not golden but defines an effect")]
    EffectOnNonGolden(String),
    #[error("golden card {0:?} has no effect")]
    MissingEffect(String),
    #[error("card {text:?} of kind {kind:?} does not belong in pool {pool:?}")]
    WrongPool {
        text: String,
        kind: CardKind,
        pool: Pool,
    },
    #[error("pool {0:?} is empty")]
    EmptyPool(Pool),
    #[error("unknown card reference {0:?}")]
    UnknownReference(String),
}

#[derive(Debug, Clone)]
pub struct Catalog {
    cards: Vec<Card>,
    silver: Vec<CardId>,
    challenge: Vec<CardId>,
    golden: Vec<CardId>,
    chaos: Vec<CardId>,
    hard_run: Vec<CardId>,
    fallback: Option<CardId>,
    special_challenge: Option<CardId>,
}

impl Catalog {
    pub fn from_spec(spec: CatalogSpec) -> Result<Self, CatalogError> {
        let mut catalog = Self {
            cards: Vec::new(),
            silver: Vec::new(),
            challenge: Vec::new(),
            golden: Vec::new(),
            chaos: Vec::new(),
            hard_run: Vec::new(),
            fallback: None,
            special_challenge: None,
        };
        catalog.silver = catalog.add_pool(Pool::Silver, spec.silver)?;
        catalog.challenge = catalog.add_pool(Pool::Challenge, spec.challenge)?;
        catalog.golden = catalog.add_pool(Pool::Golden, spec.golden)?;
        catalog.hard_run = catalog.add_pool(Pool::Golden, spec.hard_run)?;
        catalog.chaos = catalog
            .silver
            .iter()
            .chain(catalog.challenge.iter())
            .copied()
            .collect();
        for (pool, ids) in [
            (Pool::Silver, &catalog.silver),
            (Pool::Challenge, &catalog.challenge),
            (Pool::Golden, &catalog.golden),
        ] {
            if ids.is_empty() {
                return Err(CatalogError::EmptyPool(pool));
            }
        }
        catalog.fallback = spec
            .fallback
            .map(|text| catalog.resolve(&text))
            .transpose()?;
        catalog.special_challenge = spec
            .special_challenge
            .map(|text| catalog.resolve(&text))
            .transpose()?;
        Ok(catalog)
    }

    fn add_pool(&mut self, pool: Pool, specs: Vec<CardSpec>) -> Result<Vec<CardId>, CatalogError> {
        let mut ids = Vec::with_capacity(specs.len());
        for spec in specs {
            let allowed = match pool {
                Pool::Silver | Pool::Chaos => {
                    matches!(spec.kind, CardKind::Basic | CardKind::Stackable)
                }
                Pool::Challenge => spec.kind == CardKind::Challenge,
                Pool::Golden => spec.kind == CardKind::Golden,
            };
            if !allowed {
                return Err(CatalogError::WrongPool {
                    text: spec.text.first().cloned().unwrap_or_default(),
                    kind: spec.kind,
                    pool,
                });
            }
            ids.push(self.add_card(spec, None)?);
        }
        Ok(ids)
    }

    fn add_card(&mut self, spec: CardSpec, base: Option<CardId>) -> Result<CardId, CatalogError> {
        let title = spec
            .text
            .first()
            .cloned()
            .ok_or_else(|| CatalogError::MissingText(spec.image.clone()))?;
        if spec.max_picks == 0 || spec.text.len() != spec.max_picks as usize {
            return Err(CatalogError::TierMismatch {
                text: title,
                tiers: spec.text.len(),
                max_picks: spec.max_picks,
            });
        }
        match (spec.kind, &spec.effect) {
            (CardKind::Golden, None) => return Err(CatalogError::MissingEffect(title)),
            (kind, Some(_)) if kind != CardKind::Golden => {
                return Err(CatalogError::EffectOnNonGolden(title))
            }
            _ => {}
        }
        let id = CardId(self.cards.len());
        self.cards.push(Card {
            id,
            kind: spec.kind,
            rating: spec.difficulty,
            rarity: spec.rarity,
            image: spec.image,
            texts: spec.text,
            max_picks: spec.max_picks,
            forbidden_rounds: spec.forbidden_rounds,
            incompatible_with: spec.incompatible,
            upgrade: None,
            base,
            effect: spec.effect,
            outdoor_only: spec.outdoor_only,
            times_picked: 0,
        });
        if let Some(definitive) = spec.definitive {
            let upgrade = self.add_card(*definitive, Some(id))?;
            self.cards[id.0].upgrade = Some(upgrade);
        }
        Ok(id)
    }

    fn resolve(&self, text: &str) -> Result<CardId, CatalogError> {
        self.find_by_text(text)
            .ok_or_else(|| CatalogError::UnknownReference(text.to_string()))
    }

    pub fn card(&self, id: CardId) -> &Card {
        &self.cards[id.0]
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn find_by_text(&self, text: &str) -> Option<CardId> {
        self.cards
            .iter()
            .find(|card| card.texts.iter().any(|t| t == text))
            .map(|card| card.id)
    }

    pub fn pool(&self, pool: Pool) -> &[CardId] {
        match pool {
            Pool::Silver => &self.silver,
            Pool::Challenge => &self.challenge,
            Pool::Golden => &self.golden,
            Pool::Chaos => &self.chaos,
        }
    }

    pub fn hard_run(&self) -> &[CardId] {
        &self.hard_run
    }

    pub fn fallback(&self) -> Option<CardId> {
        self.fallback
    }

    pub fn special_challenge(&self) -> Option<CardId> {
        self.special_challenge
    }

    /// Records one more pick and returns the new count.
    pub fn mark_picked(&mut self, id: CardId) -> u8 {
        let card = &mut self.cards[id.0];
        card.times_picked = card.times_picked.saturating_add(1);
        card.times_picked
    }

    pub fn reset_counters(&mut self) {
        for card in &mut self.cards {
            card.times_picked = 0;
        }
    }
}
