//! Items, locks, and toggleable objects.
//!
//! Closed identifier enums plus the synonym sets and the static
//! tool-on-target compatibility table consumed by the use-item handler.

use serde::{Deserialize, Serialize};

/// Something the player can hold. Inventory entries are counts; most act
/// as 0/1 possession flags, coins genuinely stack.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Item {
    CabinKey,
    CabinUpstairsBedroomKey,
    WaterBucket,
    Bucket,
    Coin,
}

impl Item {
    pub fn name(self) -> &'static str {
        match self {
            Item::CabinKey => "Cabin Key",
            Item::CabinUpstairsBedroomKey => "Upstairs Cabin Bedroom Key",
            Item::WaterBucket => "Bucket Filled With Water",
            Item::Bucket => "Bucket",
            Item::Coin => "Coin",
        }
    }

    /// Listing order for `list inventory`.
    pub const ALL: &'static [Item] = &[
        Item::CabinKey,
        Item::CabinUpstairsBedroomKey,
        Item::WaterBucket,
        Item::Bucket,
        Item::Coin,
    ];
}

/// A lockable door.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Lock {
    CabinFrontDoor,
    CabinUpstairsBedroomDoor,
}

impl Lock {
    pub fn name(self) -> &'static str {
        match self {
            Lock::CabinFrontDoor => "cabin front door",
            Lock::CabinUpstairsBedroomDoor => "upstairs bedroom door",
        }
    }
}

/// A toggleable bit of scenery.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Object {
    LitCabinFireplace,
    UpstairsKeyOnTable,
}

/// What kind of tool a use-command names, before context picks the
/// concrete inventory item (which key depends on which door).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolKind {
    Key,
    Bucket,
}

/// What a use-command is aimed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UseTarget {
    Door,
    Fire,
}

const KEY_WORDS: &[&str] = &["key", "cabin key", "bedroom key", "upstairs key"];
const BUCKET_WORDS: &[&str] = &["bucket", "water bucket", "pail"];
const DOOR_WORDS: &[&str] = &["door", "cabin door", "front door", "bedroom door"];
const FIRE_WORDS: &[&str] = &["fire", "fireplace", "the fire"];

pub fn tool_for(text: &str) -> Option<ToolKind> {
    if KEY_WORDS.contains(&text) {
        Some(ToolKind::Key)
    } else if BUCKET_WORDS.contains(&text) {
        Some(ToolKind::Bucket)
    } else {
        None
    }
}

pub fn use_target_for(text: &str) -> Option<UseTarget> {
    if DOOR_WORDS.contains(&text) {
        Some(UseTarget::Door)
    } else if FIRE_WORDS.contains(&text) {
        Some(UseTarget::Fire)
    } else {
        None
    }
}

/// The static compatibility table: which tools do anything to which
/// targets. Everything else earns a "can't use a X on a Y".
pub fn compatible(tool: ToolKind, target: UseTarget) -> bool {
    matches!(
        (tool, target),
        (ToolKind::Key, UseTarget::Door) | (ToolKind::Bucket, UseTarget::Fire)
    )
}
