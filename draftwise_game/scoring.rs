use serde::{Deserialize, Serialize};

use draftwise_types::{
    common::{ActionKind, HeroId, Side},
    errors::DraftError,
};

use crate::{catalog::HeroCatalog, matchups::MatchupRepository, models::draft::DraftState};

/// Raw, unweighted score terms of a recommendation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub counter: f64,
    pub synergy: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub hero_id: HeroId,
    /// Weighted total used for ranking.
    pub score: f64,
    pub breakdown: ScoreBreakdown,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub counter: f64,
    pub synergy: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            counter: 1.0,
            synergy: 1.0,
        }
    }
}

/// How candidates are scored when the acting side has to ban.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BanStrategy {
    /// Counter term against the opponent's picks, as if the acting side were
    /// picking the candidate itself.
    #[default]
    Denial,
    /// Counter term of the candidate against the acting side's own picks:
    /// ban what would hurt us most in the opponent's hands.
    Threat,
}

impl BanStrategy {
    pub fn parse(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "denial" => Some(Self::Denial),
            "threat" => Some(Self::Threat),
            _ => None,
        }
    }
}

/// Ranks available heroes for the side on the clock.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Scorer {
    pub weights: ScoringWeights,
    pub ban_strategy: BanStrategy,
}

impl Scorer {
    pub fn new(weights: ScoringWeights, ban_strategy: BanStrategy) -> Self {
        Self {
            weights,
            ban_strategy,
        }
    }

    /// Returns at most `top_n` recommendations, sorted by score desc then hero id asc.
    pub fn recommend<M, C>(
        &self,
        state: &DraftState,
        matchups: &M,
        catalog: &C,
        top_n: usize,
    ) -> Result<Vec<Recommendation>, DraftError>
    where
        M: MatchupRepository + ?Sized,
        C: HeroCatalog + ?Sized,
    {
        let legal = state.legal_action()?;

        let mut recommendations: Vec<Recommendation> = state
            .available_heroes(catalog)
            .into_iter()
            .map(|hero_id| {
                let breakdown = self.breakdown(state, matchups, hero_id, legal.side, legal.action);
                Recommendation {
                    hero_id,
                    score: self.weights.counter * breakdown.counter
                        + self.weights.synergy * breakdown.synergy,
                    breakdown,
                }
            })
            .collect();

        recommendations.sort_by(|a, b| {
            b.score
                .total_cmp(&a.score)
                .then_with(|| a.hero_id.cmp(&b.hero_id))
        });
        recommendations.truncate(top_n);

        Ok(recommendations)
    }

    fn breakdown<M: MatchupRepository + ?Sized>(
        &self,
        state: &DraftState,
        matchups: &M,
        hero_id: HeroId,
        side: Side,
        action: ActionKind,
    ) -> ScoreBreakdown {
        let allies = state.picks(side);
        let enemies = state.picks(side.opponent());

        match (action, self.ban_strategy) {
            (ActionKind::Pick, _) => ScoreBreakdown {
                counter: counter_sum(matchups, hero_id, enemies),
                synergy: synergy_sum(matchups, hero_id, allies),
            },
            (ActionKind::Ban, BanStrategy::Denial) => ScoreBreakdown {
                counter: counter_sum(matchups, hero_id, enemies),
                synergy: 0.0,
            },
            (ActionKind::Ban, BanStrategy::Threat) => ScoreBreakdown {
                counter: counter_sum(matchups, hero_id, allies),
                synergy: 0.0,
            },
        }
    }
}

fn counter_sum<M>(matchups: &M, hero: HeroId, against: &[HeroId]) -> f64
where
    M: MatchupRepository + ?Sized,
{
    against
        .iter()
        .map(|enemy| matchups.counter_score(hero, *enemy))
        .sum()
}

fn synergy_sum<M: MatchupRepository + ?Sized>(matchups: &M, hero: HeroId, with: &[HeroId]) -> f64 {
    with.iter()
        .map(|ally| matchups.synergy_score(hero, *ally))
        .sum()
}
