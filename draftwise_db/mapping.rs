use draftwise_game::models::hero::Hero;
use draftwise_types::{
    common::HeroId,
    hero::{AttackType, PrimaryAttribute, Role},
};

use crate::models as db_models;

impl From<db_models::Hero> for Hero {
    fn from(hero: db_models::Hero) -> Self {
        // roles the domain doesn't know about are dropped
        let roles = hero.roles.iter().filter_map(|r| Role::parse(r)).collect();

        Hero::new(
            HeroId(hero.id),
            hero.name,
            hero.localized_name,
            PrimaryAttribute::parse(&hero.primary_attr),
            AttackType::parse(&hero.attack_type),
            roles,
        )
    }
}
