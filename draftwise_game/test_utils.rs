use draftwise_types::{
    common::{HeroId, Side},
    hero::{AttackType, PrimaryAttribute, Role},
};

use crate::{
    catalog::InMemoryHeroCatalog,
    matchups::{CounterMatrix, MatchupMatrix, SynergyMatrix},
    models::{
        draft_mode::{DraftMode, DraftPhase, DraftSlot},
        hero::Hero,
    },
};

#[derive(Default, Clone)]
pub struct HeroFactoryOptions<'a> {
    pub id: Option<u32>,
    pub name: Option<&'a str>,
    pub localized_name: Option<&'a str>,
    pub attribute: Option<PrimaryAttribute>,
    pub attack_type: Option<AttackType>,
    pub roles: Option<Vec<Role>>,
}

pub fn hero_factory(options: HeroFactoryOptions) -> Hero {
    let id = options.id.unwrap_or(1);
    let localized_name = options
        .localized_name
        .map(str::to_string)
        .unwrap_or_else(|| format!("Hero {id}"));
    let name = options
        .name
        .map(str::to_string)
        .unwrap_or_else(|| format!("npc_dota_hero_{id}"));

    Hero::new(
        HeroId(id),
        name,
        localized_name,
        options.attribute.unwrap_or(PrimaryAttribute::Universal),
        options.attack_type.unwrap_or(AttackType::Melee),
        options.roles.unwrap_or_else(|| vec![Role::Carry]),
    )
}

/// Catalog with one default hero per id.
pub fn catalog_factory(ids: &[u32]) -> InMemoryHeroCatalog {
    let heroes = ids
        .iter()
        .map(|id| {
            hero_factory(HeroFactoryOptions {
                id: Some(*id),
                ..Default::default()
            })
        })
        .collect();

    InMemoryHeroCatalog::new(heroes).expect("factory ids must be unique")
}

/// Builds matrices from `(hero, enemy, score)` counters and `(a, b, score)` synergies.
pub fn matchups_factory(
    counters: &[(u32, u32, f64)],
    synergies: &[(u32, u32, f64)],
) -> MatchupMatrix {
    let mut counter_matrix = CounterMatrix::new();
    for (hero, enemy, score) in counters {
        counter_matrix.insert(HeroId(*hero), HeroId(*enemy), *score);
    }

    let mut synergy_matrix = SynergyMatrix::new();
    for (a, b, score) in synergies {
        synergy_matrix.insert(HeroId(*a), HeroId(*b), *score);
    }

    MatchupMatrix::new(counter_matrix, synergy_matrix)
}

/// `[{radiant, pick}, {dire, pick}]`
pub fn two_pick_mode() -> DraftMode {
    DraftMode::custom(
        "two_pick",
        vec![
            DraftSlot::pick(Side::Radiant, DraftPhase::Pick1),
            DraftSlot::pick(Side::Dire, DraftPhase::Pick1),
        ],
    )
}
