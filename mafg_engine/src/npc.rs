//! Non-player characters: identifiers, home locations, and stat blocks.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::world::Location;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Npc {
    BlockyMiner,
}

/// One axis of an NPC stat block.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum StatKind {
    Health,
    Attack,
    Defence,
}

impl Npc {
    pub fn name(self) -> &'static str {
        match self {
            Npc::BlockyMiner => "blocky miner",
        }
    }

    /// Where this NPC lives. Nobody wanders in this world.
    pub fn home(self) -> Location {
        match self {
            Npc::BlockyMiner => Location::CavePart2L1,
        }
    }

    pub fn synonyms(self) -> &'static [&'static str] {
        match self {
            Npc::BlockyMiner => &["miner", "blocky miner", "blocky person", "blocky man"],
        }
    }

    pub fn base_stats(self) -> BTreeMap<StatKind, i32> {
        let (health, attack, defence) = match self {
            Npc::BlockyMiner => (12, 4, 3),
        };
        BTreeMap::from([
            (StatKind::Health, health),
            (StatKind::Attack, attack),
            (StatKind::Defence, defence),
        ])
    }

    pub const ALL: &'static [Npc] = &[Npc::BlockyMiner];
}

/// Find the NPC a player's free text refers to, if any.
pub fn npc_for(text: &str) -> Option<Npc> {
    Npc::ALL
        .iter()
        .find(|npc| npc.synonyms().contains(&text))
        .copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn miner_synonyms_resolve() {
        assert_eq!(npc_for("miner"), Some(Npc::BlockyMiner));
        assert_eq!(npc_for("blocky person"), Some(Npc::BlockyMiner));
        assert_eq!(npc_for("dragon"), None);
    }

    #[test]
    fn miner_lives_in_the_left_branch() {
        assert_eq!(Npc::BlockyMiner.home(), Location::CavePart2L1);
    }

    #[test]
    fn base_stats_cover_every_kind() {
        let stats = Npc::BlockyMiner.base_stats();
        assert_eq!(stats.len(), 3);
        assert!(stats[&StatKind::Health] > 0);
    }
}
