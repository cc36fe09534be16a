use crate::*;

pub const SPRINT_TIERS: [&str; 2] = ["[Player] Sprint duration: 2s", "[Player] Sprint duration: 1s"];
pub const SPRINT_OFF: &str = "[Player] Sprinting: Off";
pub const END_RUN_NOW: &str = "Pick all cards. Get a bigger map. End run now";

fn basic(rating: DifficultyRating, text: &str) -> CardSpec {
    CardSpec::new(CardKind::Basic, rating, text)
}

fn challenge(rating: DifficultyRating, text: &str) -> CardSpec {
    CardSpec::new(CardKind::Challenge, rating, text)
}

fn golden(rating: DifficultyRating, text: &str, effect: GoldenEffect) -> CardSpec {
    CardSpec::new(CardKind::Golden, rating, text).effect(effect)
}

pub fn sample_catalog() -> Catalog {
    use DifficultyRating::*;
    let spec = CatalogSpec {
        silver: vec![
            CardSpec::new(CardKind::Stackable, Normal, "")
                .tiers(&SPRINT_TIERS)
                .definitive(basic(VeryHard, SPRINT_OFF)),
            CardSpec::new(CardKind::Stackable, Normal, "")
                .tiers(&["[Ghost] Evidence given: 2", "[Ghost] Evidence given: 1"])
                .definitive(
                    basic(MaybeImpossible, "[Ghost] Evidence given: 0")
                        .incompatible(&["[Ghost] Fingerprint chance: 50%"]),
                ),
            basic(Normal, "[Ghost] Fingerprint chance: 50%")
                .incompatible(&["[Ghost] Evidence given: 0"]),
            basic(Hard, "[Player] Sanity pill restoration: 20%"),
            basic(Easy, "[Ghost] Ghost speed: 150%"),
            basic(Normal, "[Player] Starting sanity: 50%"),
            basic(Hard, "[Ghost] Hunt duration: Long"),
            basic(Normal, "Weather: Heavy rain").outdoor_only(),
        ],
        challenge: vec![
            challenge(Normal, "No sound"),
            challenge(Hard, "No evidence items").incompatible(&["[Ghost] Evidence given: 0"]),
            challenge(Normal, "No flashlights"),
            challenge(Hard, "Only use 1 item at a time"),
            challenge(DontOffer, "Can't use any items used last round"),
        ],
        golden: vec![
            golden(Hard, "Pick an extra card next time", GoldenEffect::ExtraPick),
            golden(Normal, "Challenges appear more often", GoldenEffect::ChallengeMode),
            golden(Hard, "All cards are a mystery next time", GoldenEffect::ScheduleMystery),
            golden(Normal, "Change map to a bigger one", GoldenEffect::BiggerMap),
            golden(
                DontOffer,
                END_RUN_NOW,
                GoldenEffect::EndRunNow { big_map_index: 1 },
            ),
        ],
        hard_run: vec![
            golden(DontOffer, "Golden cards will not be offered", GoldenEffect::NoGold),
            golden(
                DontOffer,
                "Greatly increase card difficulty",
                GoldenEffect::AddDifficulty { amount: 2 },
            ),
            golden(DontOffer, "Some cards will be much worse", GoldenEffect::Altered),
            golden(
                DontOffer,
                "Restrict card choices to 3 slots",
                GoldenEffect::RestrictSlots { slots: 3 },
            ),
        ],
        fallback: Some("Pick an extra card next time".to_string()),
        special_challenge: Some("Can't use any items used last round".to_string()),
    };
    Catalog::from_spec(spec).expect("sample catalog")
}

pub fn sample_maps() -> MapPools {
    MapPools::new(
        vec![
            MapDef::new("Tanglewood Drive", false),
            MapDef::new("Edgefield Road", false),
            MapDef::new("Camp Woodwind", true),
            MapDef::new("Willow Street", false),
        ],
        vec![
            MapDef::new("Prison", false),
            MapDef::new("Maple Lodge Campsite", true),
            MapDef::new("Sunny Meadows", false),
        ],
    )
}

pub fn sample_run(seed: u64) -> RunState {
    RunState::new(RunConfig::default(), sample_catalog(), sample_maps(), seed)
}

/// Two silver cards for four slots: round 1 cannot be filled by drawing.
pub fn starved_run(seed: u64) -> RunState {
    let spec = CatalogSpec {
        silver: vec![
            basic(DifficultyRating::Normal, "[Player] Sprint duration: 2s"),
            basic(DifficultyRating::Normal, "[Ghost] Ghost speed: 150%"),
        ],
        challenge: vec![challenge(DifficultyRating::Normal, "No sound")],
        golden: vec![golden(
            DifficultyRating::Hard,
            "Pick an extra card next time",
            GoldenEffect::ExtraPick,
        )],
        fallback: Some("Pick an extra card next time".to_string()),
        ..CatalogSpec::default()
    };
    let catalog = Catalog::from_spec(spec).expect("starved catalog");
    RunState::new(RunConfig::default(), catalog, sample_maps(), seed)
}

pub fn first_face_up_slot(run: &RunState) -> Option<usize> {
    run.state
        .slots
        .iter()
        .position(|slot| slot.card.is_some() && slot.face == SlotFace::Revealed)
}

pub fn first_silver_face_up_slot(run: &RunState) -> Option<usize> {
    run.state.slots.iter().position(|slot| {
        slot.face == SlotFace::Revealed
            && slot.card.is_some_and(|id| {
                matches!(
                    run.catalog.card(id).kind,
                    CardKind::Basic | CardKind::Stackable
                )
            })
    })
}

pub fn put_face_up(run: &mut RunState, slot: usize, card: CardId) {
    run.state.slots[slot] = Slot {
        card: Some(card),
        face: SlotFace::Revealed,
    };
}
