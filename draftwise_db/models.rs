use serde::Deserialize;

/// Hero entry as found in `heroes.json` (OpenDota `/heroes` shape).
#[derive(Debug, Clone, Deserialize)]
pub struct Hero {
    pub id: u32,
    pub name: String,
    pub localized_name: String,
    #[serde(default)]
    pub primary_attr: String,
    #[serde(default)]
    pub attack_type: String,
    #[serde(default)]
    pub roles: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Counter {
    pub hero_id: u32,
    pub against_id: u32,
    pub score: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Synergy {
    pub hero_id: u32,
    pub ally_id: u32,
    pub score: f64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Matchups {
    #[serde(default)]
    pub counters: Vec<Counter>,
    #[serde(default)]
    pub synergies: Vec<Synergy>,
}
