use serde::{Deserialize, Serialize};
use torment_core::{Catalog, MapDef, MapPools, RunConfig};

pub use torment_core::{CardSpec, CatalogSpec, GoldenEffect};

/// `maps.json`: the two map pools as authored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MapsFile {
    #[serde(default)]
    pub small: Vec<MapDef>,
    #[serde(default)]
    pub big: Vec<MapDef>,
}

impl MapsFile {
    pub fn into_pools(self) -> MapPools {
        MapPools::new(self.small, self.big)
    }
}

/// Everything a run needs, loaded from one assets directory.
#[derive(Debug, Clone)]
pub struct Assets {
    pub config: RunConfig,
    pub catalog: Catalog,
    pub maps: MapPools,
}
