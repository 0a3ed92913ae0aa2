use serde::{Deserialize, Serialize};

use draftwise_types::common::{ActionKind, Side};

/// Phase label carried by each slot of a draft template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DraftPhase {
    Ban1,
    Pick1,
    Ban2,
    Pick2,
    Ban3,
    Pick3,
    Completed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DraftSlot {
    pub side: Side,
    pub action: ActionKind,
    pub phase: DraftPhase,
}

impl DraftSlot {
    pub const fn new(side: Side, action: ActionKind, phase: DraftPhase) -> Self {
        Self {
            side,
            action,
            phase,
        }
    }

    pub const fn pick(side: Side, phase: DraftPhase) -> Self {
        Self::new(side, ActionKind::Pick, phase)
    }

    pub const fn ban(side: Side, phase: DraftPhase) -> Self {
        Self::new(side, ActionKind::Ban, phase)
    }
}

/// A named, fixed turn template.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DraftMode {
    pub name: String,
    pub slots: Vec<DraftSlot>,
}

const R: Side = Side::Radiant;
const D: Side = Side::Dire;

impl DraftMode {
    pub const CAPTAINS_MODE: &'static str = "captains_mode";
    pub const ALL_PICK: &'static str = "all_pick";

    pub fn custom(name: impl Into<String>, slots: Vec<DraftSlot>) -> Self {
        Self {
            name: name.into(),
            slots,
        }
    }

    /// Captain's Mode, 24 slots:
    /// Ban1 ABBABBA, Pick1 AB, Ban2 AAB, Pick2 BAABBA, Ban3 ABBA, Pick3 AB.
    pub fn captains_mode() -> Self {
        use DraftPhase::*;

        let mut slots = Vec::with_capacity(24);
        slots.extend([R, D, D, R, D, D, R].map(|s| DraftSlot::ban(s, Ban1)));
        slots.extend([R, D].map(|s| DraftSlot::pick(s, Pick1)));
        slots.extend([R, R, D].map(|s| DraftSlot::ban(s, Ban2)));
        slots.extend([D, R, R, D, D, R].map(|s| DraftSlot::pick(s, Pick2)));
        slots.extend([R, D, D, R].map(|s| DraftSlot::ban(s, Ban3)));
        slots.extend([R, D].map(|s| DraftSlot::pick(s, Pick3)));

        Self::custom(Self::CAPTAINS_MODE, slots)
    }

    /// All Pick: five picks per side, alternating from Radiant, no bans.
    pub fn all_pick() -> Self {
        let slots = (0..10)
            .map(|i| {
                let side = if i % 2 == 0 { R } else { D };
                DraftSlot::pick(side, DraftPhase::Pick1)
            })
            .collect();

        Self::custom(Self::ALL_PICK, slots)
    }

    /// Resolves a built-in mode by name or short alias, case-insensitively.
    pub fn by_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "captains_mode" | "captains" | "cm" => Some(Self::captains_mode()),
            "all_pick" | "ap" => Some(Self::all_pick()),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn slot(&self, index: usize) -> Option<&DraftSlot> {
        self.slots.get(index)
    }

    pub fn count(&self, side: Side, action: ActionKind) -> usize {
        self.slots
            .iter()
            .filter(|s| s.side == side && s.action == action)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captains_mode_has_24_slots_balanced_between_sides() {
        let mode = DraftMode::captains_mode();

        assert_eq!(mode.len(), 24);
        assert_eq!(mode.count(Side::Radiant, ActionKind::Pick), 5);
        assert_eq!(mode.count(Side::Dire, ActionKind::Pick), 5);
        assert_eq!(mode.count(Side::Radiant, ActionKind::Ban), 7);
        assert_eq!(mode.count(Side::Dire, ActionKind::Ban), 7);
    }

    #[test]
    fn captains_mode_sequence_matches_official_order() {
        let mode = DraftMode::captains_mode();

        let first = mode.slot(0).unwrap();
        assert_eq!(*first, DraftSlot::ban(Side::Radiant, DraftPhase::Ban1));

        // First pick phase starts right after the 7 opening bans
        assert_eq!(*mode.slot(7).unwrap(), DraftSlot::pick(Side::Radiant, DraftPhase::Pick1));
        assert_eq!(*mode.slot(8).unwrap(), DraftSlot::pick(Side::Dire, DraftPhase::Pick1));
        // Second pick phase opens with Dire
        assert_eq!(*mode.slot(12).unwrap(), DraftSlot::pick(Side::Dire, DraftPhase::Pick2));

        let last = mode.slot(23).unwrap();
        assert_eq!(*last, DraftSlot::pick(Side::Dire, DraftPhase::Pick3));
        assert!(mode.slot(24).is_none());
    }

    #[test]
    fn all_pick_alternates_sides() {
        let mode = DraftMode::all_pick();

        assert_eq!(mode.len(), 10);
        assert!(mode.slots.iter().all(|s| s.action == ActionKind::Pick));
        for (i, slot) in mode.slots.iter().enumerate() {
            let expected = if i % 2 == 0 { Side::Radiant } else { Side::Dire };
            assert_eq!(slot.side, expected);
        }
    }

    #[test]
    fn resolves_modes_by_name_and_alias() {
        assert_eq!(DraftMode::by_name("CM").unwrap().name, DraftMode::CAPTAINS_MODE);
        assert_eq!(DraftMode::by_name("captains_mode").unwrap().len(), 24);
        assert_eq!(DraftMode::by_name("ap").unwrap().name, DraftMode::ALL_PICK);
        assert!(DraftMode::by_name("turbo").is_none());
    }
}
