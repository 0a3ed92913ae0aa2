use serde::{Deserialize, Serialize};

use draftwise_types::{
    common::HeroId,
    hero::{AttackType, PrimaryAttribute, Role},
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hero {
    pub id: HeroId,
    /// Internal name (e.g. "npc_dota_hero_antimage").
    pub name: String,
    /// Display name (e.g. "Anti-Mage").
    pub localized_name: String,
    pub primary_attribute: PrimaryAttribute,
    pub attack_type: AttackType,
    pub roles: Vec<Role>,
}

impl Hero {
    pub fn new(
        id: HeroId,
        name: impl Into<String>,
        localized_name: impl Into<String>,
        primary_attribute: PrimaryAttribute,
        attack_type: AttackType,
        roles: Vec<Role>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            localized_name: localized_name.into(),
            primary_attribute,
            attack_type,
            roles,
        }
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }

    pub fn is_ranged(&self) -> bool {
        self.attack_type == AttackType::Ranged
    }
}
