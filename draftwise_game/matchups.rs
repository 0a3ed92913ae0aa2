use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use draftwise_types::common::HeroId;

use crate::models::hero::Hero;

/// Read access to the counter and synergy matrices.
///
/// Both lookups return 0.0 when there's no data for the pair.
pub trait MatchupRepository: Send + Sync {
    /// How effectively `hero` counters `enemy`. Directional.
    fn counter_score(&self, hero: HeroId, enemy: HeroId) -> f64;

    /// How well `hero` and `ally` perform together. Symmetric.
    fn synergy_score(&self, hero: HeroId, ally: HeroId) -> f64;

    /// Heroes that `hero` counters best, score desc then id asc.
    fn best_counters(&self, hero: HeroId, limit: usize) -> Vec<(HeroId, f64)>;

    /// Heroes that counter `hero` best, score desc then id asc.
    fn countered_by(&self, hero: HeroId, limit: usize) -> Vec<(HeroId, f64)>;

    /// Best partners of `hero`, score desc then id asc.
    fn best_synergies(&self, hero: HeroId, limit: usize) -> Vec<(HeroId, f64)>;
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchupScore {
    pub hero_id: HeroId,
    pub score: f64,
}

impl From<(HeroId, f64)> for MatchupScore {
    fn from((hero_id, score): (HeroId, f64)) -> Self {
        Self { hero_id, score }
    }
}

/// Matchup summary of one hero: whom it beats, who beats it, whom it pairs with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeroMatchups {
    pub hero: Hero,
    pub counters: Vec<MatchupScore>,
    pub countered_by: Vec<MatchupScore>,
    pub synergies: Vec<MatchupScore>,
}

impl HeroMatchups {
    pub fn for_hero<M>(hero: Hero, matchups: &M, limit: usize) -> Self
    where
        M: MatchupRepository + ?Sized,
    {
        let scores = |entries: Vec<(HeroId, f64)>| -> Vec<MatchupScore> {
            entries.into_iter().map(Into::into).collect()
        };
        Self {
            counters: scores(matchups.best_counters(hero.id, limit)),
            countered_by: scores(matchups.countered_by(hero.id, limit)),
            synergies: scores(matchups.best_synergies(hero.id, limit)),
            hero,
        }
    }
}

/// Directional hero-vs-hero scores: `score(a, b)` and `score(b, a)` are independent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CounterMatrix {
    scores: HashMap<(HeroId, HeroId), f64>,
}

impl CounterMatrix {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, hero: HeroId, enemy: HeroId, score: f64) {
        self.scores.insert((hero, enemy), score);
    }

    pub fn with(mut self, hero: HeroId, enemy: HeroId, score: f64) -> Self {
        self.insert(hero, enemy, score);
        self
    }

    pub fn get(&self, hero: HeroId, enemy: HeroId) -> f64 {
        self.scores.get(&(hero, enemy)).copied().unwrap_or(0.0)
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Heroes that `hero` counters best.
    pub fn best_counters(&self, hero: HeroId, limit: usize) -> Vec<(HeroId, f64)> {
        let entries = self
            .scores
            .iter()
            .filter(|((h, _), _)| *h == hero)
            .map(|((_, enemy), score)| (*enemy, *score));
        top_scores(entries, limit)
    }

    /// Heroes that counter `hero` best.
    pub fn countered_by(&self, hero: HeroId, limit: usize) -> Vec<(HeroId, f64)> {
        let entries = self
            .scores
            .iter()
            .filter(|((_, enemy), _)| *enemy == hero)
            .map(|((h, _), score)| (*h, *score));
        top_scores(entries, limit)
    }
}

/// Same-team pair scores. Keys are normalised to `(min, max)`, so
/// `score(a, b) == score(b, a)` holds whatever order they're written in.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SynergyMatrix {
    scores: HashMap<(HeroId, HeroId), f64>,
}

impl SynergyMatrix {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, a: HeroId, b: HeroId, score: f64) {
        self.scores.insert(pair_key(a, b), score);
    }

    pub fn with(mut self, a: HeroId, b: HeroId, score: f64) -> Self {
        self.insert(a, b, score);
        self
    }

    pub fn get(&self, a: HeroId, b: HeroId) -> f64 {
        self.scores.get(&pair_key(a, b)).copied().unwrap_or(0.0)
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    pub fn best_synergies(&self, hero: HeroId, limit: usize) -> Vec<(HeroId, f64)> {
        let entries = self.scores.iter().filter_map(|((a, b), score)| {
            if *a == hero {
                Some((*b, *score))
            } else if *b == hero {
                Some((*a, *score))
            } else {
                None
            }
        });
        top_scores(entries, limit)
    }
}

/// In-memory matchup repository holding both matrices.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MatchupMatrix {
    pub counters: CounterMatrix,
    pub synergies: SynergyMatrix,
}

impl MatchupMatrix {
    pub fn new(counters: CounterMatrix, synergies: SynergyMatrix) -> Self {
        Self {
            counters,
            synergies,
        }
    }
}

impl MatchupRepository for MatchupMatrix {
    fn counter_score(&self, hero: HeroId, enemy: HeroId) -> f64 {
        self.counters.get(hero, enemy)
    }

    fn synergy_score(&self, hero: HeroId, ally: HeroId) -> f64 {
        self.synergies.get(hero, ally)
    }

    fn best_counters(&self, hero: HeroId, limit: usize) -> Vec<(HeroId, f64)> {
        self.counters.best_counters(hero, limit)
    }

    fn countered_by(&self, hero: HeroId, limit: usize) -> Vec<(HeroId, f64)> {
        self.counters.countered_by(hero, limit)
    }

    fn best_synergies(&self, hero: HeroId, limit: usize) -> Vec<(HeroId, f64)> {
        self.synergies.best_synergies(hero, limit)
    }
}

fn pair_key(a: HeroId, b: HeroId) -> (HeroId, HeroId) {
    if a <= b { (a, b) } else { (b, a) }
}

/// Sorted by score desc, then id asc.
fn top_scores(entries: impl Iterator<Item = (HeroId, f64)>, limit: usize) -> Vec<(HeroId, f64)> {
    let mut all: Vec<(HeroId, f64)> = entries.collect();
    all.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)));
    all.truncate(limit);
    all
}
