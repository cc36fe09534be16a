use crate::schema::{Assets, MapsFile};
use anyhow::{bail, Context};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;
use torment_core::{Catalog, CatalogSpec, MapPools, RunConfig};

const CARDS_FILE: &str = "cards.json";
const MAPS_FILE: &str = "maps.json";
const CONFIG_FILE: &str = "config.json";

pub fn load_assets(dir: &Path) -> anyhow::Result<Assets> {
    Ok(Assets {
        config: load_run_config(dir)?,
        catalog: load_catalog(dir)?,
        maps: load_maps(dir)?,
    })
}

pub fn load_catalog(dir: &Path) -> anyhow::Result<Catalog> {
    let path = dir.join(CARDS_FILE);
    let spec: CatalogSpec = load_json(&path)?;
    Catalog::from_spec(spec).with_context(|| format!("validate {}", path.display()))
}

pub fn load_maps(dir: &Path) -> anyhow::Result<MapPools> {
    let path = dir.join(MAPS_FILE);
    let maps: MapsFile = load_json(&path)?;
    check_maps(&maps).with_context(|| format!("validate {}", path.display()))?;
    Ok(maps.into_pools())
}

/// Missing `config.json` means the stock round rules.
pub fn load_run_config(dir: &Path) -> anyhow::Result<RunConfig> {
    let path = dir.join(CONFIG_FILE);
    let config: RunConfig = if path.exists() {
        load_json(&path)?
    } else {
        RunConfig::default()
    };
    check_config(&config).with_context(|| format!("validate {}", path.display()))?;
    Ok(config)
}

pub fn parse_catalog(json_bytes: &[u8]) -> anyhow::Result<Catalog> {
    let spec: CatalogSpec = serde_json::from_slice(json_bytes).context("parse cards JSON")?;
    Ok(Catalog::from_spec(spec)?)
}

pub fn parse_maps(json_bytes: &[u8]) -> anyhow::Result<MapPools> {
    let maps: MapsFile = serde_json::from_slice(json_bytes).context("parse maps JSON")?;
    check_maps(&maps)?;
    Ok(maps.into_pools())
}

fn check_maps(maps: &MapsFile) -> anyhow::Result<()> {
    if maps.small.is_empty() {
        bail!("small map pool is empty");
    }
    if maps.big.is_empty() {
        bail!("big map pool is empty");
    }
    Ok(())
}

fn check_config(config: &RunConfig) -> anyhow::Result<()> {
    if config.max_rounds == 0 {
        bail!("max_rounds must be at least 1");
    }
    if config.total_slots == 0 {
        bail!("total_slots must be at least 1");
    }
    for (name, chance) in [
        ("chaos_upgrade_chance", config.chaos_upgrade_chance),
        ("outdoor_bias", config.outdoor_bias),
        ("special_challenge_chance", config.special_challenge_chance),
    ] {
        if !(0.0..=1.0).contains(&chance) {
            bail!("{name} must lie in 0..=1, got {chance}");
        }
    }
    Ok(())
}

fn load_json<T: DeserializeOwned>(path: impl AsRef<Path>) -> anyhow::Result<T> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let value = serde_json::from_str(&raw).with_context(|| format!("parse {}", path.display()))?;
    Ok(value)
}
