use dotenvy::dotenv;
use std::{env, path::PathBuf};

use draftwise_game::scoring::{BanStrategy, Scorer, ScoringWeights};

#[derive(Debug, Clone)]
pub struct Config {
    /// Recommendation length used when the caller doesn't ask for one.
    pub default_top_n: usize,
    pub weights: ScoringWeights,
    pub ban_strategy: BanStrategy,
    pub heroes_path: PathBuf,
    pub matchups_path: PathBuf,
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_top_n: 5,
            weights: ScoringWeights::default(),
            ban_strategy: BanStrategy::default(),
            heroes_path: PathBuf::from("data/heroes.json"),
            matchups_path: PathBuf::from("data/matchups.json"),
            port: 8080,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();
        let defaults = Self::default();

        let default_top_n = match env::var("DRAFTWISE_TOP_N") {
            Ok(val) => val.parse::<usize>().unwrap_or(defaults.default_top_n),
            Err(_) => defaults.default_top_n,
        };

        let counter = match env::var("DRAFTWISE_COUNTER_WEIGHT") {
            Ok(val) => val.parse::<f64>().unwrap_or(defaults.weights.counter),
            Err(_) => defaults.weights.counter,
        };

        let synergy = match env::var("DRAFTWISE_SYNERGY_WEIGHT") {
            Ok(val) => val.parse::<f64>().unwrap_or(defaults.weights.synergy),
            Err(_) => defaults.weights.synergy,
        };

        let ban_strategy = match env::var("DRAFTWISE_BAN_STRATEGY") {
            Ok(val) => BanStrategy::parse(&val).unwrap_or(defaults.ban_strategy),
            Err(_) => defaults.ban_strategy,
        };

        let heroes_path = match env::var("DRAFTWISE_HEROES_PATH") {
            Ok(val) => PathBuf::from(val),
            Err(_) => defaults.heroes_path,
        };

        let matchups_path = match env::var("DRAFTWISE_MATCHUPS_PATH") {
            Ok(val) => PathBuf::from(val),
            Err(_) => defaults.matchups_path,
        };

        let port = match env::var("DRAFTWISE_PORT") {
            Ok(val) => val.parse::<u16>().unwrap_or(defaults.port),
            Err(_) => defaults.port,
        };

        Self {
            default_top_n,
            weights: ScoringWeights { counter, synergy },
            ban_strategy,
            heroes_path,
            matchups_path,
            port,
        }
    }

    pub fn scorer(&self) -> Scorer {
        Scorer::new(self.weights, self.ban_strategy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_use_equal_weights_and_denial_bans() {
        let config = Config::default();

        assert_eq!(config.default_top_n, 5);
        assert_eq!(config.weights.counter, 1.0);
        assert_eq!(config.weights.synergy, 1.0);
        assert_eq!(config.scorer().ban_strategy, BanStrategy::Denial);
        assert_eq!(config.port, 8080);
    }
}
