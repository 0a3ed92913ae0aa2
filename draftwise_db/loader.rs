use std::path::Path;
use tracing::info;

use draftwise_game::{
    catalog::{HeroCatalog, InMemoryHeroCatalog},
    matchups::{CounterMatrix, MatchupMatrix, SynergyMatrix},
    models::hero::Hero,
};
use draftwise_types::{
    common::HeroId,
    errors::{ApplicationError, DataError, Result},
};

use crate::models as db_models;

/// Reads and validates `heroes.json`.
pub async fn load_hero_catalog(path: impl AsRef<Path>) -> Result<InMemoryHeroCatalog> {
    let path = path.as_ref();
    let raw = read(path).await?;
    let catalog = parse_hero_catalog(&raw)?;
    info!(path = %path.display(), heroes = catalog.len(), "Hero catalog loaded");
    Ok(catalog)
}

/// Reads `matchups.json`, rejecting entries that reference heroes missing from `catalog`.
pub async fn load_matchups(
    path: impl AsRef<Path>,
    catalog: &dyn HeroCatalog,
) -> Result<MatchupMatrix> {
    let path = path.as_ref();
    let raw = read(path).await?;
    let matchups = parse_matchups(&raw, catalog)?;
    info!(
        path = %path.display(),
        counters = matchups.counters.len(),
        synergies = matchups.synergies.len(),
        "Matchups loaded"
    );
    Ok(matchups)
}

pub fn parse_hero_catalog(raw: &str) -> Result<InMemoryHeroCatalog> {
    let heroes: Vec<db_models::Hero> = serde_json::from_str(raw).map_err(DataError::Json)?;
    let heroes: Vec<Hero> = heroes.into_iter().map(Into::into).collect();
    Ok(InMemoryHeroCatalog::new(heroes)?)
}

pub fn parse_matchups(raw: &str, catalog: &dyn HeroCatalog) -> Result<MatchupMatrix> {
    let data: db_models::Matchups = serde_json::from_str(raw).map_err(DataError::Json)?;

    let known = |id: u32| -> Result<HeroId> {
        let hero_id = HeroId(id);
        if catalog.exists(hero_id) {
            Ok(hero_id)
        } else {
            Err(DataError::UnknownHeroInMatchups(hero_id).into())
        }
    };

    let mut counters = CounterMatrix::new();
    for entry in data.counters {
        counters.insert(known(entry.hero_id)?, known(entry.against_id)?, entry.score);
    }

    let mut synergies = SynergyMatrix::new();
    for entry in data.synergies {
        synergies.insert(known(entry.hero_id)?, known(entry.ally_id)?, entry.score);
    }

    Ok(MatchupMatrix::new(counters, synergies))
}

async fn read(path: &Path) -> Result<String> {
    tokio::fs::read_to_string(path).await.map_err(|source| {
        ApplicationError::Data(DataError::Io {
            path: path.to_path_buf(),
            source,
        })
    })
}
