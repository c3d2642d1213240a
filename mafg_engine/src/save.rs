//! Save-string persistence.
//!
//! A save is the entire [`MafgWorld`] serialized to one line of JSON,
//! printed for the player to copy and paste back after `load `. All state
//! enums serialize in `snake_case`, so a save string survives the
//! classifier's lowercasing of input.

use anyhow::Result;
use log::{info, warn};
use thiserror::Error;

use crate::world::MafgWorld;

/// Ways a pasted save string can fail to become a world.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("That doesn't look like a save string. It should start with '{{' and end with '}}'.")]
    NotBracketed,
    #[error("That save string is damaged and can't be read.")]
    Malformed(#[from] serde_json::Error),
    #[error("That save string describes an impossible game state ({0}).")]
    Inconsistent(&'static str),
}

/// Serialize the world to a single-line save string.
///
/// # Errors
/// Only on a serializer failure, which for this data model means a bug.
pub fn encode(world: &MafgWorld) -> Result<String> {
    let blob = serde_json::to_string(world)?;
    info!("encoded save string ({} bytes)", blob.len());
    Ok(blob)
}

/// Parse a pasted save string into a fully validated world.
///
/// The caller keeps its current world untouched unless this returns `Ok`;
/// a load either succeeds wholesale or changes nothing.
///
/// # Errors
/// [`LoadError`] describes what was wrong with the string.
pub fn decode(blob: &str) -> Result<MafgWorld, LoadError> {
    let blob = blob.trim();
    if !(blob.starts_with('{') && blob.ends_with('}')) {
        warn!("rejected save string without braces");
        return Err(LoadError::NotBracketed);
    }
    let world: MafgWorld = serde_json::from_str(blob)?;
    if !world.history_consistent() {
        warn!("rejected save string with inconsistent history");
        return Err(LoadError::Inconsistent(
            "travel history does not end at the current location",
        ));
    }
    if world.location_history.is_empty() {
        return Err(LoadError::Inconsistent("travel history is empty"));
    }
    info!(
        "decoded save string: turn {}, at {}",
        world.turn_count,
        world.current_location.name()
    );
    Ok(world)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::Item;
    use crate::world::Location;

    #[test]
    fn round_trip_preserves_everything() {
        let mut world = MafgWorld::new();
        world.move_to(Location::MineshaftEntrance);
        world.grant_item(Item::Coin, 7);
        world.turn_count = 12;
        let blob = encode(&world).unwrap();
        let restored = decode(&blob).unwrap();
        assert_eq!(restored, world);
    }

    #[test]
    fn save_string_is_one_lowercase_friendly_line() {
        let blob = encode(&MafgWorld::new()).unwrap();
        assert!(!blob.contains('\n'));
        // the classifier lowercases input before `load` sees it
        assert_eq!(blob, blob.to_lowercase());
    }

    #[test]
    fn unbracketed_input_is_rejected() {
        assert!(matches!(decode("hello"), Err(LoadError::NotBracketed)));
        assert!(matches!(decode(""), Err(LoadError::NotBracketed)));
    }

    #[test]
    fn damaged_json_is_rejected() {
        assert!(matches!(
            decode("{\"current_location\": \"grassy_field\""),
            Err(LoadError::NotBracketed)
        ));
        assert!(matches!(
            decode("{\"current_location\": 42}"),
            Err(LoadError::Malformed(_))
        ));
    }

    #[test]
    fn inconsistent_history_is_rejected() {
        let mut world = MafgWorld::new();
        world.current_location = Location::CavePart1;
        let blob = encode(&world).unwrap();
        assert!(matches!(decode(&blob), Err(LoadError::Inconsistent(_))));
    }
}
