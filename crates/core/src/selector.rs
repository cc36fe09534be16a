use crate::{Catalog, CardId, CardKind, MapDef, Modes, RngState};

/// Everything a card's offer weight depends on.
#[derive(Debug, Clone, Copy)]
pub struct DrawContext<'a> {
    pub round: u8,
    pub difficulty: u8,
    pub map: Option<&'a MapDef>,
}

/// Draws one card from `pool` with probability proportional to its weight.
/// Returns `None` when every card in the pool weighs zero.
pub fn draw_card(
    catalog: &Catalog,
    pool: &[CardId],
    ctx: &DrawContext<'_>,
    rng: &mut RngState,
) -> Option<CardId> {
    pick_weighted(
        pool.iter().map(|&id| {
            let weight = catalog.card(id).weight(ctx.round, ctx.difficulty, ctx.map);
            (id, weight)
        }),
        rng,
    )
}

/// Cumulative-weight draw: roll in `[1, total]`, take the first item whose
/// running total reaches the roll. Zero-weight items can never be chosen.
pub fn pick_weighted<T>(items: impl Iterator<Item = (T, u32)>, rng: &mut RngState) -> Option<T> {
    let mut cumulative = Vec::new();
    let mut total: u64 = 0;
    for (item, weight) in items {
        total += weight as u64;
        cumulative.push((item, total));
    }
    if total == 0 {
        return None;
    }
    let roll = rng.roll(total);
    cumulative
        .into_iter()
        .find(|(_, running)| *running >= roll)
        .map(|(item, _)| item)
}

/// Swaps a drawn card for its definitive version when it is used up, or when
/// altered or chaos mode pushes stackable cards past their tiers.
pub fn substitute(
    catalog: &Catalog,
    id: CardId,
    modes: &Modes,
    chaos_chance: f64,
    rng: &mut RngState,
) -> CardId {
    let card = catalog.card(id);
    let Some(upgrade) = card.upgrade else {
        return id;
    };
    if card.is_exhausted() {
        log::debug!("{:?} exhausted, dealing {:?}", card.title(), catalog.card(upgrade).title());
        return upgrade;
    }
    if card.kind == CardKind::Stackable
        && (modes.altered || (modes.chaos && rng.chance(chaos_chance)))
    {
        log::debug!("{:?} altered into {:?}", card.title(), catalog.card(upgrade).title());
        return upgrade;
    }
    id
}
