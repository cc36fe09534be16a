use crate::load::{parse_catalog, parse_maps};
use crate::schema::Assets;
use torment_core::{Catalog, MapPools, RunConfig};

const BUILTIN_CARDS: &[u8] = include_bytes!("../../../assets/cards.json");
const BUILTIN_MAPS: &[u8] = include_bytes!("../../../assets/maps.json");

/// The stock card catalog, embedded at build time.
pub fn builtin_catalog() -> Catalog {
    parse_catalog(BUILTIN_CARDS).expect("built-in cards.json must be valid")
}

pub fn builtin_maps() -> MapPools {
    parse_maps(BUILTIN_MAPS).expect("built-in maps.json must be valid")
}

pub fn builtin_assets() -> Assets {
    Assets {
        config: RunConfig::default(),
        catalog: builtin_catalog(),
        maps: builtin_maps(),
    }
}
