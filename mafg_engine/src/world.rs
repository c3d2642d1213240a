//! World state for the MAFG adventure.
//!
//! [`MafgWorld`] is the single mutable aggregate the whole engine runs on:
//! current location, history, inventory, locks, object states, NPC and
//! quest bookkeeping, and in-session settings. Handlers mutate it in
//! place; the persistence codec replaces it wholesale on load.

use std::collections::{BTreeMap, BTreeSet};

use log::info;
use serde::{Deserialize, Serialize};

use crate::MAFG_VERSION;
use crate::dialogue::DialogueState;
use crate::item::{Item, Lock, Object};
use crate::npc::{Npc, StatKind};

/// An atomic place identifier in the world graph.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Location {
    GrassyField,
    ForestPart1,
    MineshaftEntrance,
    CavePart1,
    CavePart2,
    CavePart2L1,
    CavePart2R1,
    CabinFront,
    CabinLivingRoom,
    Cabin1stFloorBathroom,
    Cabin1stFloorBedroom,
    Cabin2ndFloorBedroomConnector,
    Cabin2ndFloorBedroom,
}

impl Location {
    /// Display name, as printed in "You are already at the X" messages.
    pub fn name(self) -> &'static str {
        match self {
            Location::GrassyField => "Grassy Field",
            Location::ForestPart1 => "Forest",
            Location::MineshaftEntrance => "Mineshaft Entrance",
            Location::CavePart1 => "Cave Tunnel",
            Location::CavePart2 => "Cave Fork",
            Location::CavePart2L1 => "Left Cave Branch",
            Location::CavePart2R1 => "Right Cave Branch",
            Location::CabinFront => "Cabin Front",
            Location::CabinLivingRoom => "Cabin Living Room",
            Location::Cabin1stFloorBathroom => "Cabin Bathroom",
            Location::Cabin1stFloorBedroom => "Cabin Bedroom",
            Location::Cabin2ndFloorBedroomConnector => "Cabin Upstairs Landing",
            Location::Cabin2ndFloorBedroom => "Cabin Upstairs Bedroom",
        }
    }

    /// Coarse region grouping used by `list places` and location banners.
    pub fn region(self) -> &'static str {
        match self {
            Location::GrassyField => "Grassy Field",
            Location::ForestPart1 => "Forest",
            Location::MineshaftEntrance => "Mineshaft Entrance",
            Location::CavePart1
            | Location::CavePart2
            | Location::CavePart2L1
            | Location::CavePart2R1 => "Cave",
            Location::CabinFront
            | Location::CabinLivingRoom
            | Location::Cabin1stFloorBathroom
            | Location::Cabin1stFloorBedroom
            | Location::Cabin2ndFloorBedroomConnector
            | Location::Cabin2ndFloorBedroom => "Cabin",
        }
    }

    /// Preposition for "You are already at/in the X" messages.
    pub fn preposition(self) -> &'static str {
        match self {
            Location::GrassyField
            | Location::ForestPart1
            | Location::MineshaftEntrance
            | Location::CabinFront => "at",
            _ => "in",
        }
    }

    pub const ALL: &'static [Location] = &[
        Location::GrassyField,
        Location::ForestPart1,
        Location::MineshaftEntrance,
        Location::CavePart1,
        Location::CavePart2,
        Location::CavePart2L1,
        Location::CavePart2R1,
        Location::CabinFront,
        Location::CabinLivingRoom,
        Location::Cabin1stFloorBathroom,
        Location::Cabin1stFloorBedroom,
        Location::Cabin2ndFloorBedroomConnector,
        Location::Cabin2ndFloorBedroom,
    ];
}

/// A direction-or-verb key into the static adjacency table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
    Up,
    Down,
    Left,
    Right,
}

/// Static adjacency: where does walking `dir` from `from` lead?
///
/// Lock-guarded transitions (entering the cabin, the upstairs bedroom) are
/// deliberately *not* in this table; they go through the enter handler.
pub fn exit(from: Location, dir: Direction) -> Option<Location> {
    use Direction as D;
    use Location as L;
    match (from, dir) {
        (L::GrassyField, D::North) => Some(L::ForestPart1),
        (L::GrassyField, D::West) => Some(L::MineshaftEntrance),
        (L::GrassyField, D::SouthEast) => Some(L::CabinFront),
        (L::ForestPart1, D::South) => Some(L::GrassyField),
        (L::MineshaftEntrance, D::East) => Some(L::GrassyField),
        (L::MineshaftEntrance, D::West) => Some(L::CavePart1),
        (L::CavePart1, D::East) => Some(L::MineshaftEntrance),
        (L::CavePart1, D::West) => Some(L::CavePart2),
        (L::CavePart2, D::East) => Some(L::CavePart1),
        (L::CavePart2, D::Left) => Some(L::CavePart2L1),
        (L::CavePart2, D::Right) => Some(L::CavePart2R1),
        (L::CavePart2L1, D::Right) => Some(L::CavePart2),
        (L::CavePart2R1, D::Left) => Some(L::CavePart2),
        (L::CabinFront, D::NorthWest) => Some(L::GrassyField),
        (L::CabinLivingRoom, D::Up) => Some(L::Cabin2ndFloorBedroomConnector),
        (L::Cabin2ndFloorBedroomConnector, D::Down) => Some(L::CabinLivingRoom),
        _ => None,
    }
}

/// What a yes/no answer, if given next turn, should resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PendingQuestion {
    EnterCave,
    Fight(Npc),
}

/// Progress of a quest line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestState {
    NotStarted,
    InProgress,
    Complete,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Quest {
    ExploreTheCave,
    MeetTheMiners,
}

impl Quest {
    pub fn name(self) -> &'static str {
        match self {
            Quest::ExploreTheCave => "Explore The Cave",
            Quest::MeetTheMiners => "Meet The Miners",
        }
    }

    pub const ALL: &'static [Quest] = &[Quest::ExploreTheCave, Quest::MeetTheMiners];
}

/// Player combat stats. The numbers exist so saves and the fight hook have
/// something to carry; combat resolution itself is an extension point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerStats {
    pub health: i32,
    pub attack: i32,
    pub defence: i32,
}

impl Default for PlayerStats {
    fn default() -> Self {
        Self {
            health: 20,
            attack: 5,
            defence: 5,
        }
    }
}

/// In-session settings, adjusted via the `settings` command surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Prose formatting mode: 1 wraps at a fixed width, 2 emits whole paragraphs.
    pub paratype: u8,
    pub developer_mode: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            paratype: 2,
            developer_mode: false,
        }
    }
}

/// Complete state of the running game.
///
/// Constructed once at startup with fixed defaults, mutated in place by
/// exactly one action handler per turn, and wholly replaceable by a
/// successful load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MafgWorld {
    pub current_location: Location,
    /// Travel history; never empty, last element always equals `current_location`.
    pub location_history: Vec<Location>,
    pub discovered: BTreeSet<Location>,
    /// Item counts. Most entries are 0/1 possession flags; coins stack.
    pub inventory: BTreeMap<Item, u32>,
    /// `true` means locked.
    pub locks: BTreeMap<Lock, bool>,
    pub objects: BTreeMap<Object, bool>,
    pub visited: BTreeMap<Location, bool>,
    pub npc_alive: BTreeMap<Npc, bool>,
    pub npc_stats: BTreeMap<Npc, BTreeMap<StatKind, i32>>,
    pub quests: BTreeMap<Quest, QuestState>,
    pub player: PlayerStats,
    pub pending_question: Option<PendingQuestion>,
    pub dialogue: Option<DialogueState>,
    pub settings: Settings,
    pub turn_count: usize,
    pub version: String,
}

impl Default for MafgWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl MafgWorld {
    /// Create the starting world: awake in the grassy field, holding the
    /// cabin key and a bucket of water, both cabin doors locked.
    pub fn new() -> Self {
        let start = Location::GrassyField;
        let world = Self {
            current_location: start,
            location_history: vec![start],
            discovered: BTreeSet::from([start]),
            inventory: BTreeMap::from([
                (Item::CabinKey, 1),
                (Item::CabinUpstairsBedroomKey, 0),
                (Item::WaterBucket, 1),
                (Item::Bucket, 0),
                (Item::Coin, 0),
            ]),
            locks: BTreeMap::from([
                (Lock::CabinFrontDoor, true),
                (Lock::CabinUpstairsBedroomDoor, true),
            ]),
            objects: BTreeMap::from([
                (Object::LitCabinFireplace, true),
                (Object::UpstairsKeyOnTable, true),
            ]),
            visited: BTreeMap::new(),
            npc_alive: BTreeMap::from([(Npc::BlockyMiner, true)]),
            npc_stats: BTreeMap::from([(Npc::BlockyMiner, Npc::BlockyMiner.base_stats())]),
            quests: Quest::ALL
                .iter()
                .map(|q| (*q, QuestState::NotStarted))
                .collect(),
            player: PlayerStats::default(),
            pending_question: None,
            dialogue: None,
            settings: Settings::default(),
            turn_count: 0,
            version: MAFG_VERSION.to_string(),
        };
        info!("new MafgWorld created at {}", start.name());
        world
    }

    /// Transition to `dest`, pushing it onto the history and marking it
    /// discovered. Callers are responsible for having checked any guards.
    pub fn move_to(&mut self, dest: Location) {
        self.current_location = dest;
        self.location_history.push(dest);
        self.discovered.insert(dest);
        // arrival is what drives the exploration quest, however you got here
        match dest {
            Location::CavePart1 => {
                self.advance_quest(Quest::ExploreTheCave, QuestState::InProgress);
            }
            Location::CavePart2L1 | Location::CavePart2R1 => {
                self.advance_quest(Quest::ExploreTheCave, QuestState::Complete);
            }
            _ => {}
        }
        info!("player moved to {}", dest.name());
    }

    /// Pop one step of history. Returns the new current location, or `None`
    /// when there is nothing to go back to (history holds one entry).
    pub fn go_back(&mut self) -> Option<Location> {
        if self.location_history.len() <= 1 {
            return None;
        }
        self.location_history.pop();
        let dest = *self.location_history.last()?;
        self.current_location = dest;
        self.discovered.insert(dest);
        info!("player went back to {}", dest.name());
        Some(dest)
    }

    pub fn has_item(&self, item: Item) -> bool {
        self.inventory.get(&item).copied().unwrap_or(0) > 0
    }

    pub fn grant_item(&mut self, item: Item, count: u32) {
        *self.inventory.entry(item).or_insert(0) += count;
    }

    /// Remove one of `item` from the inventory, saturating at zero.
    pub fn consume_item(&mut self, item: Item) {
        let slot = self.inventory.entry(item).or_insert(0);
        *slot = slot.saturating_sub(1);
    }

    pub fn is_locked(&self, lock: Lock) -> bool {
        self.locks.get(&lock).copied().unwrap_or(false)
    }

    pub fn unlock(&mut self, lock: Lock) {
        self.locks.insert(lock, false);
        info!("{} unlocked", lock.name());
    }

    pub fn object_state(&self, object: Object) -> bool {
        self.objects.get(&object).copied().unwrap_or(false)
    }

    pub fn first_visit(&self) -> bool {
        !self.visited.get(&self.current_location).copied().unwrap_or(false)
    }

    pub fn npc_is_alive(&self, npc: Npc) -> bool {
        self.npc_alive.get(&npc).copied().unwrap_or(false)
    }

    pub fn quest_state(&self, quest: Quest) -> QuestState {
        self.quests
            .get(&quest)
            .copied()
            .unwrap_or(QuestState::NotStarted)
    }

    /// Advance a quest, but never backwards.
    pub fn advance_quest(&mut self, quest: Quest, to: QuestState) {
        let entry = self.quests.entry(quest).or_insert(QuestState::NotStarted);
        if to > *entry {
            info!("quest '{}' advanced to {:?}", quest.name(), to);
            *entry = to;
        }
    }

    /// The standing yes/no question asked while the player lingers at a
    /// location, if any. Re-armed by the turn dispatcher each idle turn.
    pub fn standing_question(&self) -> Option<(PendingQuestion, &'static str)> {
        match self.current_location {
            Location::MineshaftEntrance => {
                Some((PendingQuestion::EnterCave, "Do you go in?"))
            }
            _ => None,
        }
    }

    /// True when the history invariant holds: non-empty, ending at the
    /// current location. The load path rejects states where it does not.
    pub fn history_consistent(&self) -> bool {
        self.location_history.last() == Some(&self.current_location)
    }
}
