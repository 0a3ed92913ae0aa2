use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{collections::BTreeSet, sync::Arc};

use draftwise_types::{
    common::{ActionKind, HeroId, Side},
    errors::DraftError,
};

use crate::{
    catalog::HeroCatalog,
    models::draft_mode::{DraftMode, DraftPhase},
};

/// A pick or ban that has been applied to a draft.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftAction {
    pub slot_index: usize,
    pub side: Side,
    pub action: ActionKind,
    pub hero_id: HeroId,
    pub timestamp: DateTime<Utc>,
}

/// The single action the draft template requires next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegalAction {
    pub slot_index: usize,
    pub side: Side,
    pub action: ActionKind,
    pub phase: DraftPhase,
}

/// Immutable draft value. Every transition returns a new state and leaves
/// `self` untouched, so a state can be branched freely.
///
/// Invariants:
/// - `current_slot() == history().len()`
/// - a hero id appears at most once across both sides' picks and the bans
/// - `history()[i]` has the side/action prescribed by `mode().slots[i]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftState {
    mode: Arc<DraftMode>,
    history: Vec<DraftAction>,
    radiant_picks: Vec<HeroId>,
    dire_picks: Vec<HeroId>,
    banned: BTreeSet<HeroId>,
}

impl DraftState {
    /// Empty draft at slot 0.
    pub fn new(mode: impl Into<Arc<DraftMode>>) -> Self {
        Self {
            mode: mode.into(),
            history: Vec::new(),
            radiant_picks: Vec::new(),
            dire_picks: Vec::new(),
            banned: BTreeSet::new(),
        }
    }

    /// Rebuilds a draft by applying `heroes` in order from an empty state.
    pub fn replay<C: HeroCatalog + ?Sized>(
        mode: impl Into<Arc<DraftMode>>,
        heroes: &[HeroId],
        catalog: &C,
    ) -> Result<Self, DraftError> {
        heroes
            .iter()
            .try_fold(Self::new(mode), |state, hero| state.apply_action(*hero, catalog))
    }

    pub fn mode(&self) -> &DraftMode {
        &self.mode
    }

    pub fn history(&self) -> &[DraftAction] {
        &self.history
    }

    pub fn current_slot(&self) -> usize {
        self.history.len()
    }

    pub fn is_terminal(&self) -> bool {
        self.current_slot() >= self.mode.len()
    }

    pub fn phase(&self) -> DraftPhase {
        self.mode
            .slot(self.current_slot())
            .map(|s| s.phase)
            .unwrap_or(DraftPhase::Completed)
    }

    pub fn picks(&self, side: Side) -> &[HeroId] {
        match side {
            Side::Radiant => &self.radiant_picks,
            Side::Dire => &self.dire_picks,
        }
    }

    pub fn banned(&self) -> &BTreeSet<HeroId> {
        &self.banned
    }

    /// Bans issued by `side`, in draft order.
    pub fn bans_by(&self, side: Side) -> Vec<HeroId> {
        self.history
            .iter()
            .filter(|a| a.side == side && a.action == ActionKind::Ban)
            .map(|a| a.hero_id)
            .collect()
    }

    pub fn pick_count(&self, side: Side) -> usize {
        self.picks(side).len()
    }

    pub fn ban_count(&self, side: Side) -> usize {
        self.history
            .iter()
            .filter(|a| a.side == side && a.action == ActionKind::Ban)
            .count()
    }

    /// The next required action. Fails once every slot has been played.
    pub fn legal_action(&self) -> Result<LegalAction, DraftError> {
        let slot_index = self.current_slot();
        let slot = self
            .mode
            .slot(slot_index)
            .ok_or(DraftError::TerminalDraft {
                slot: slot_index,
                hero_id: None,
            })?;

        Ok(LegalAction {
            slot_index,
            side: slot.side,
            action: slot.action,
            phase: slot.phase,
        })
    }

    fn is_taken(&self, hero_id: HeroId) -> bool {
        self.banned.contains(&hero_id)
            || self.radiant_picks.contains(&hero_id)
            || self.dire_picks.contains(&hero_id)
    }

    /// Catalog heroes neither picked nor banned.
    pub fn available_heroes<C: HeroCatalog + ?Sized>(&self, catalog: &C) -> BTreeSet<HeroId> {
        catalog
            .all_hero_ids()
            .into_iter()
            .filter(|id| !self.is_taken(*id))
            .collect()
    }

    pub fn is_available<C: HeroCatalog + ?Sized>(&self, hero_id: HeroId, catalog: &C) -> bool {
        catalog.exists(hero_id) && !self.is_taken(hero_id)
    }

    /// Plays `hero_id` into the current slot, stamped with the current time.
    pub fn apply_action<C: HeroCatalog + ?Sized>(
        &self,
        hero_id: HeroId,
        catalog: &C,
    ) -> Result<Self, DraftError> {
        self.apply_action_at(hero_id, catalog, Utc::now())
    }

    pub fn apply_action_at<C: HeroCatalog + ?Sized>(
        &self,
        hero_id: HeroId,
        catalog: &C,
        timestamp: DateTime<Utc>,
    ) -> Result<Self, DraftError> {
        let legal = self.legal_action().map_err(|e| match e {
            DraftError::TerminalDraft { slot, .. } => DraftError::TerminalDraft {
                slot,
                hero_id: Some(hero_id),
            },
            other => other,
        })?;
        let slot = legal.slot_index;

        if !catalog.exists(hero_id) {
            return Err(DraftError::UnknownHero { hero_id, slot });
        }
        if self.is_taken(hero_id) {
            return Err(DraftError::IllegalAction { hero_id, slot });
        }

        let mut next = self.clone();
        match (legal.action, legal.side) {
            (ActionKind::Ban, _) => {
                next.banned.insert(hero_id);
            }
            (ActionKind::Pick, Side::Radiant) => next.radiant_picks.push(hero_id),
            (ActionKind::Pick, Side::Dire) => next.dire_picks.push(hero_id),
        }
        next.history.push(DraftAction {
            slot_index: slot,
            side: legal.side,
            action: legal.action,
            hero_id,
            timestamp,
        });

        Ok(next)
    }

    /// Removes the last applied action. Can be repeated down to the empty draft.
    pub fn undo(&self) -> Result<Self, DraftError> {
        let mut next = self.clone();
        let last = next.history.pop().ok_or(DraftError::EmptyHistory)?;

        match (last.action, last.side) {
            (ActionKind::Ban, _) => {
                next.banned.remove(&last.hero_id);
            }
            (ActionKind::Pick, Side::Radiant) => {
                next.radiant_picks.pop();
            }
            (ActionKind::Pick, Side::Dire) => {
                next.dire_picks.pop();
            }
        }

        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng, seq::IteratorRandom};

    use super::*;
    use crate::{
        catalog::InMemoryHeroCatalog,
        models::draft_mode::DraftSlot,
        test_utils::{catalog_factory, two_pick_mode},
    };

    const A: HeroId = HeroId(1);
    const B: HeroId = HeroId(2);
    const C: HeroId = HeroId(3);

    fn abc() -> InMemoryHeroCatalog {
        catalog_factory(&[1, 2, 3])
    }

    #[test]
    fn new_state_starts_at_slot_zero() {
        let state = DraftState::new(DraftMode::captains_mode());

        assert_eq!(state.current_slot(), 0);
        assert!(state.history().is_empty());
        assert!(!state.is_terminal());
        assert_eq!(state.phase(), DraftPhase::Ban1);

        let legal = state.legal_action().unwrap();
        assert_eq!(legal.slot_index, 0);
        assert_eq!(legal.side, Side::Radiant);
        assert_eq!(legal.action, ActionKind::Ban);
    }

    #[test]
    fn apply_action_picks_and_advances() {
        let catalog = abc();
        let state = DraftState::new(two_pick_mode());

        let next = state.apply_action(A, &catalog).unwrap();

        assert_eq!(next.current_slot(), 1);
        assert_eq!(next.picks(Side::Radiant), &[A]);
        assert_eq!(next.available_heroes(&catalog), BTreeSet::from([B, C]));
        assert_eq!(next.legal_action().unwrap().side, Side::Dire);

        // Source state is untouched
        assert_eq!(state.current_slot(), 0);
        assert_eq!(state.available_heroes(&catalog).len(), 3);
    }

    #[test]
    fn bans_remove_heroes_and_track_ownership() {
        let catalog = catalog_factory(&[1, 2, 3, 4]);
        let state = DraftState::replay(DraftMode::captains_mode(), &[A, B, C], &catalog).unwrap();

        assert_eq!(state.banned(), &BTreeSet::from([A, B, C]));
        assert_eq!(state.bans_by(Side::Radiant), vec![A]);
        assert_eq!(state.bans_by(Side::Dire), vec![B, C]);
        assert_eq!(state.ban_count(Side::Dire), 2);
        assert_eq!(state.pick_count(Side::Radiant), 0);
        assert_eq!(state.available_heroes(&catalog), BTreeSet::from([HeroId(4)]));
    }

    #[test]
    fn unknown_hero_is_rejected_without_changes() {
        let catalog = abc();
        let state = DraftState::new(two_pick_mode());

        let result = state.apply_action(HeroId(99), &catalog);

        assert_eq!(
            result,
            Err(DraftError::UnknownHero {
                hero_id: HeroId(99),
                slot: 0
            })
        );
        assert!(state.history().is_empty());
    }

    #[test]
    fn unavailable_hero_is_rejected() {
        let catalog = abc();
        let state = DraftState::new(two_pick_mode())
            .apply_action(A, &catalog)
            .unwrap();

        let result = state.apply_action(A, &catalog);

        assert_eq!(result, Err(DraftError::IllegalAction { hero_id: A, slot: 1 }));
        assert_eq!(state.current_slot(), 1);
        assert!(!state.is_available(A, &catalog));
        assert!(state.is_available(B, &catalog));
    }

    #[test]
    fn actions_after_final_slot_fail_as_terminal() {
        let catalog = abc();
        let state = DraftState::replay(two_pick_mode(), &[A, B], &catalog).unwrap();

        assert!(state.is_terminal());
        assert_eq!(state.phase(), DraftPhase::Completed);
        assert_eq!(
            state.legal_action(),
            Err(DraftError::TerminalDraft {
                slot: 2,
                hero_id: None
            })
        );
        assert_eq!(
            state.apply_action(C, &catalog),
            Err(DraftError::TerminalDraft {
                slot: 2,
                hero_id: Some(C)
            })
        );
        // Terminal check wins over hero validation
        assert_eq!(
            state.apply_action(HeroId(99), &catalog),
            Err(DraftError::TerminalDraft {
                slot: 2,
                hero_id: Some(HeroId(99))
            })
        );
    }

    #[test]
    fn undo_on_empty_history_fails() {
        let state = DraftState::new(two_pick_mode());
        assert_eq!(state.undo(), Err(DraftError::EmptyHistory));
    }

    #[test]
    fn apply_then_undo_restores_equal_state() {
        let catalog = catalog_factory(&[1, 2, 3, 4, 5]);
        let base = DraftState::replay(DraftMode::captains_mode(), &[A, B], &catalog).unwrap();

        let after = base.apply_action(C, &catalog).unwrap().undo().unwrap();

        assert_eq!(after, base);
    }

    #[test]
    fn undo_reopens_picked_hero() {
        let catalog = abc();
        let state = DraftState::replay(two_pick_mode(), &[A, B], &catalog).unwrap();

        let undone = state.undo().unwrap();

        assert_eq!(undone.current_slot(), 1);
        assert!(undone.picks(Side::Dire).is_empty());
        assert!(undone.is_available(B, &catalog));
        assert_eq!(undone.legal_action().unwrap().side, Side::Dire);
    }

    #[test]
    fn replay_stops_at_first_rejection() {
        let catalog = abc();
        let result = DraftState::replay(two_pick_mode(), &[A, A], &catalog);
        assert_eq!(result, Err(DraftError::IllegalAction { hero_id: A, slot: 1 }));
    }

    #[test]
    fn history_follows_mode_template() {
        let mode = DraftMode::custom(
            "mixed",
            vec![
                DraftSlot::ban(Side::Dire, DraftPhase::Ban1),
                DraftSlot::pick(Side::Dire, DraftPhase::Pick1),
                DraftSlot::pick(Side::Radiant, DraftPhase::Pick1),
            ],
        );
        let catalog = abc();
        let state = DraftState::replay(mode.clone(), &[C, B, A], &catalog).unwrap();

        for (action, slot) in state.history().iter().zip(mode.slots.iter()) {
            assert_eq!(action.side, slot.side);
            assert_eq!(action.action, slot.action);
        }
        assert_eq!(state.picks(Side::Dire), &[B]);
        assert_eq!(state.picks(Side::Radiant), &[A]);
    }

    #[test]
    fn random_walks_keep_invariants_and_unwind() {
        let mut rng = StdRng::seed_from_u64(7);
        let catalog = catalog_factory(&(1..=40).collect::<Vec<u32>>());

        for mode in [DraftMode::captains_mode(), DraftMode::all_pick()] {
            let initial = DraftState::new(mode.clone());
            let mut states = vec![initial.clone()];
            let mut seen = BTreeSet::new();

            for n in 1..=mode.len() {
                let current = states.last().unwrap();
                let hero = current
                    .available_heroes(&catalog)
                    .into_iter()
                    .choose(&mut rng)
                    .unwrap();
                let next = current.apply_action(hero, &catalog).unwrap();

                assert_eq!(next.history().len(), n);
                assert_eq!(next.current_slot(), n);
                seen.insert(hero);
                for taken in &seen {
                    assert!(!next.available_heroes(&catalog).contains(taken));
                }
                states.push(next);
            }

            let mut state = states.pop().unwrap();
            assert!(state.is_terminal());
            while let Some(expected) = states.pop() {
                state = state.undo().unwrap();
                assert_eq!(state, expected);
            }
            assert_eq!(state, initial);
        }
    }
}
