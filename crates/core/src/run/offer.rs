use super::*;
use crate::*;

impl RunState {
    /// Deals a fresh card into every active slot and shows the batch.
    pub(super) fn offer_batch(&mut self, bridge: &mut dyn DisplayBridge, events: &mut EventBus) {
        let active = self.state.total_slots.min(self.state.slots.len());
        let round = self.state.round;
        let modes = self.state.modes.clone();

        let golden_slot = if !modes.no_gold && round < self.config.golden_round_limit {
            self.rng.index(active)
        } else {
            None
        };
        let mut challenge_slots = Vec::new();
        if round >= self.config.first_challenge_round {
            if let Some(slot) = self.free_slot(active, golden_slot, &challenge_slots) {
                challenge_slots.push(slot);
            }
        }
        if modes.challenge || (modes.no_gold && round >= self.config.no_gold_second_challenge_round)
        {
            if let Some(slot) = self.free_slot(active, golden_slot, &challenge_slots) {
                challenge_slots.push(slot);
            }
        }

        let mut dealt: Vec<Option<CardId>> = Vec::with_capacity(active);
        for slot in 0..active {
            let pool = if golden_slot == Some(slot) {
                Pool::Golden
            } else if challenge_slots.contains(&slot) {
                Pool::Challenge
            } else if modes.chaos {
                Pool::Chaos
            } else {
                Pool::Silver
            };
            let card = self.draw_slot(slot, pool, &dealt, events);
            dealt.push(card);
        }

        if modes.no_gold && round == 1 {
            if let Some(special) = self.catalog.special_challenge() {
                if self.rng.chance(self.config.special_challenge_chance) {
                    if let Some(slot) = self.rng.index(active) {
                        log::debug!("special challenge dealt into slot {slot}");
                        dealt[slot] = Some(special);
                    }
                }
            }
        }

        for index in 0..self.state.slots.len() {
            let slot = match dealt.get(index).copied().flatten() {
                Some(id) => Slot {
                    card: Some(id),
                    face: self.face_for(index, id),
                },
                None => Slot::empty(),
            };
            self.state.slots[index] = slot;
        }

        let offered = dealt.iter().flatten().count();
        if self.state.remaining_picks > offered {
            log::warn!(
                "only {offered} cards dealt, lowering picks from {}",
                self.state.remaining_picks
            );
            self.state.remaining_picks = offered;
            events.push(Event::PicksRemaining { remaining: offered });
        }

        self.show_all_slots(bridge);
        self.push_batch_event(events);
    }

    fn free_slot(&mut self, active: usize, golden: Option<usize>, taken: &[usize]) -> Option<usize> {
        let free: Vec<usize> = (0..active)
            .filter(|slot| golden != Some(*slot) && !taken.contains(slot))
            .collect();
        self.rng.index(free.len()).map(|index| free[index])
    }

    /// Draws until a legal card turns up or the attempt budget runs out, then
    /// tries the catalog's fallback card.
    fn draw_slot(
        &mut self,
        slot: usize,
        pool: Pool,
        earlier: &[Option<CardId>],
        events: &mut EventBus,
    ) -> Option<CardId> {
        let ctx = DrawContext {
            round: self.state.round,
            difficulty: self.state.difficulty,
            map: self.state.map.as_ref(),
        };
        let chaos_chance = self.config.chaos_upgrade_chance;
        for _ in 0..self.config.max_draw_attempts {
            let Some(drawn) = draw_card(&self.catalog, self.catalog.pool(pool), &ctx, &mut self.rng)
            else {
                break;
            };
            let candidate =
                substitute(&self.catalog, drawn, &self.state.modes, chaos_chance, &mut self.rng);
            match legality::check(&self.catalog, candidate, earlier, &self.state.history) {
                Ok(()) => return Some(candidate),
                Err(rejection) => log::trace!(
                    "slot {slot}: rejected {:?} ({rejection:?})",
                    self.catalog.card(candidate).title()
                ),
            }
        }

        let no_gold = self.state.modes.no_gold;
        let fallback = self.catalog.fallback().filter(|&id| {
            !(no_gold && self.catalog.card(id).kind == CardKind::Golden)
                && legality::check(&self.catalog, id, earlier, &self.state.history).is_ok()
        });
        log::warn!(
            "slot {slot}: no legal draw from {pool:?}, dealing {:?}",
            fallback.map(|id| self.catalog.card(id).title())
        );
        events.push(Event::DrawFallback {
            slot,
            pool,
            dealt: fallback.map(|id| self.catalog.card(id).title().to_string()),
        });
        fallback
    }
}
