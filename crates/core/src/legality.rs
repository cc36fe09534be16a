use crate::{Catalog, CardId, History};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    Exhausted,
    /// Same text as the card in an earlier slot.
    Duplicate { slot: usize },
    /// The earlier slot holds this card's definitive version.
    UpgradeOnOffer { slot: usize },
    /// This card is the definitive version of the earlier slot's card.
    BaseOnOffer { slot: usize },
    LockedByPick(String),
    LockedByOffer { slot: usize },
}

/// Decides whether `candidate` may be dealt after the cards already placed in
/// `earlier` slots of the same batch, given everything picked this run.
pub fn check(
    catalog: &Catalog,
    candidate: CardId,
    earlier: &[Option<CardId>],
    history: &History,
) -> Result<(), Rejection> {
    let card = catalog.card(candidate);
    if card.is_exhausted() {
        return Err(Rejection::Exhausted);
    }
    let upgrade_texts = card.upgrade.map(|id| &catalog.card(id).texts);

    for (slot, other) in earlier.iter().enumerate() {
        let Some(other) = other.map(|id| catalog.card(id)) else {
            continue;
        };
        if card.texts == other.texts {
            return Err(Rejection::Duplicate { slot });
        }
        if upgrade_texts == Some(&other.texts) {
            return Err(Rejection::UpgradeOnOffer { slot });
        }
        if other.upgrade.map(|id| &catalog.card(id).texts) == Some(&card.texts) {
            return Err(Rejection::BaseOnOffer { slot });
        }
    }

    if let Some(text) = card
        .incompatible_with
        .iter()
        .find(|text| history.contains(text))
    {
        return Err(Rejection::LockedByPick(text.clone()));
    }

    for (slot, other) in earlier.iter().enumerate() {
        let Some(other) = other.map(|id| catalog.card(id)) else {
            continue;
        };
        if card.incompatible_with.iter().any(|text| text == other.title()) {
            return Err(Rejection::LockedByOffer { slot });
        }
    }
    Ok(())
}
