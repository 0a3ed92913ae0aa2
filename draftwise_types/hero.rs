use serde::{Deserialize, Serialize};

/// Hero primary attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrimaryAttribute {
    Strength,
    Agility,
    Intelligence,
    Universal,
}

impl PrimaryAttribute {
    /// Lenient parsing of data-feed labels ("str", "agility", "all", ...).
    /// Unrecognised labels fall back to `Universal`.
    pub fn parse(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "str" | "strength" => Self::Strength,
            "agi" | "agility" => Self::Agility,
            "int" | "intelligence" => Self::Intelligence,
            _ => Self::Universal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttackType {
    Melee,
    Ranged,
}

impl AttackType {
    /// Unrecognised labels fall back to `Melee`.
    pub fn parse(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "ranged" => Self::Ranged,
            _ => Self::Melee,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Carry,
    Support,
    Nuker,
    Disabler,
    Initiator,
    Durable,
    Escape,
    Pusher,
    Jungler,
}

impl Role {
    pub fn parse(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "carry" => Some(Self::Carry),
            "support" => Some(Self::Support),
            "nuker" => Some(Self::Nuker),
            "disabler" => Some(Self::Disabler),
            "initiator" => Some(Self::Initiator),
            "durable" => Some(Self::Durable),
            "escape" => Some(Self::Escape),
            "pusher" => Some(Self::Pusher),
            "jungler" => Some(Self::Jungler),
            _ => None,
        }
    }
}
