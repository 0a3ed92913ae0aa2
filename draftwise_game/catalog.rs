use std::collections::{BTreeMap, BTreeSet};

use draftwise_types::{
    common::HeroId,
    errors::DataError,
    hero::{PrimaryAttribute, Role},
};

use crate::models::hero::Hero;

/// Read access to the universe of valid heroes.
pub trait HeroCatalog: Send + Sync {
    fn all_hero_ids(&self) -> BTreeSet<HeroId>;

    fn exists(&self, hero_id: HeroId) -> bool;

    fn get(&self, hero_id: HeroId) -> Option<&Hero>;

    /// Every hero, in id order.
    fn heroes(&self) -> Vec<&Hero>;

    /// Matches either the internal or the localized name, case-insensitively.
    fn find_by_name(&self, name: &str) -> Option<&Hero> {
        let needle = name.trim().to_lowercase();
        self.heroes().into_iter().find(|h| {
            h.name.to_lowercase() == needle || h.localized_name.to_lowercase() == needle
        })
    }

    fn find_by_role(&self, role: Role) -> Vec<&Hero> {
        self.heroes()
            .into_iter()
            .filter(|h| h.has_role(role))
            .collect()
    }

    fn find_by_attribute(&self, attribute: PrimaryAttribute) -> Vec<&Hero> {
        self.heroes()
            .into_iter()
            .filter(|h| h.primary_attribute == attribute)
            .collect()
    }

    /// Case-insensitive substring search on the localized name, sorted by localized name.
    fn search(&self, query: &str) -> Vec<&Hero> {
        let needle = query.trim().to_lowercase();
        let mut found: Vec<&Hero> = self
            .heroes()
            .into_iter()
            .filter(|h| h.localized_name.to_lowercase().contains(&needle))
            .collect();
        found.sort_by(|a, b| a.localized_name.cmp(&b.localized_name));
        found
    }
}

/// Hero catalog backed by an ordered in-memory map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InMemoryHeroCatalog {
    heroes: BTreeMap<HeroId, Hero>,
}

impl InMemoryHeroCatalog {
    /// Builds a catalog, rejecting duplicated ids.
    pub fn new(heroes: Vec<Hero>) -> Result<Self, DataError> {
        let mut map = BTreeMap::new();
        for hero in heroes {
            let id = hero.id;
            if map.insert(id, hero).is_some() {
                return Err(DataError::DuplicateHero(id));
            }
        }
        Ok(Self { heroes: map })
    }

    pub fn len(&self) -> usize {
        self.heroes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heroes.is_empty()
    }
}

impl HeroCatalog for InMemoryHeroCatalog {
    fn all_hero_ids(&self) -> BTreeSet<HeroId> {
        self.heroes.keys().copied().collect()
    }

    fn exists(&self, hero_id: HeroId) -> bool {
        self.heroes.contains_key(&hero_id)
    }

    fn get(&self, hero_id: HeroId) -> Option<&Hero> {
        self.heroes.get(&hero_id)
    }

    fn heroes(&self) -> Vec<&Hero> {
        self.heroes.values().collect()
    }
}
