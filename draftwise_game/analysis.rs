use serde::{Deserialize, Serialize};

use draftwise_types::common::{HeroId, Side};

use crate::{matchups::MatchupRepository, models::draft::DraftState};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WinProbability {
    pub radiant: f64,
    pub dire: f64,
}

/// Win estimate from picks alone: each side's strength is half its mean internal
/// synergy plus half its mean counter score against the opposing picks, and the
/// strength gap goes through a logistic curve. 0.5 when nobody has picked yet.
pub fn win_probability<M: MatchupRepository + ?Sized>(
    state: &DraftState,
    matchups: &M,
) -> WinProbability {
    let radiant = state.picks(Side::Radiant);
    let dire = state.picks(Side::Dire);

    if radiant.is_empty() && dire.is_empty() {
        return WinProbability {
            radiant: 0.5,
            dire: 0.5,
        };
    }

    let diff = team_strength(matchups, radiant, dire) - team_strength(matchups, dire, radiant);
    let radiant = 1.0 / (1.0 + (-2.0 * diff).exp());

    WinProbability {
        radiant,
        dire: 1.0 - radiant,
    }
}

fn team_strength<M: MatchupRepository + ?Sized>(
    matchups: &M,
    team: &[HeroId],
    enemies: &[HeroId],
) -> f64 {
    0.5 * internal_synergy(matchups, team) + 0.5 * counter_advantage(matchups, team, enemies)
}

fn internal_synergy<M: MatchupRepository + ?Sized>(matchups: &M, team: &[HeroId]) -> f64 {
    let mut total = 0.0;
    let mut pairs = 0;
    for (i, a) in team.iter().enumerate() {
        for b in &team[i + 1..] {
            total += matchups.synergy_score(*a, *b);
            pairs += 1;
        }
    }

    if pairs == 0 { 0.0 } else { total / pairs as f64 }
}

fn counter_advantage<M: MatchupRepository + ?Sized>(
    matchups: &M,
    team: &[HeroId],
    enemies: &[HeroId],
) -> f64 {
    if team.is_empty() || enemies.is_empty() {
        return 0.0;
    }

    let total: f64 = team
        .iter()
        .flat_map(|ally| enemies.iter().map(move |enemy| (*ally, *enemy)))
        .map(|(ally, enemy)| matchups.counter_score(ally, enemy))
        .sum();

    total / (team.len() * enemies.len()) as f64
}
