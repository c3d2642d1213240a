//! Handlers for item interaction: take, examine, use-on, and unlock.

use anyhow::Result;

use crate::item::{self, Item, Lock, Object, UseTarget};
use crate::narrative;
use crate::view::{View, ViewItem};
use crate::vocab;
use crate::world::{Location, MafgWorld};

const KEY_TARGETS: &[&str] = &["key", "key on table", "the key"];

/// Pick up a takeable object. The static table of takeables is small:
/// the upstairs bedroom key sits on the living room table.
///
/// # Errors
/// None currently.
pub fn take_handler(world: &mut MafgWorld, view: &mut View, target: &str) -> Result<()> {
    if KEY_TARGETS.contains(&target) && world.current_location == Location::CabinLivingRoom {
        if world.object_state(Object::UpstairsKeyOnTable) {
            world.objects.insert(Object::UpstairsKeyOnTable, false);
            world.grant_item(Item::CabinUpstairsBedroomKey, 1);
            view.line("You take the key.");
        } else {
            view.line("You already picked up the key.");
        }
    } else {
        view.line(format!("There is no {target} here to take."));
    }
    Ok(())
}

/// Examine the surroundings or a named thing in them.
///
/// # Errors
/// None currently.
pub fn examine_handler(world: &mut MafgWorld, view: &mut View, target: &str) -> Result<()> {
    let here = world.current_location;
    // re-describing where you stand, by any of its names
    let names_here = target.is_empty()
        || match here.region() {
            "Grassy Field" => vocab::GRASSY_FIELD_WORDS.contains(&target),
            "Forest" => vocab::FOREST_WORDS.contains(&target),
            "Mineshaft Entrance" => vocab::MINESHAFT_WORDS.contains(&target),
            "Cave" => vocab::CAVE_WORDS.contains(&target),
            _ => vocab::CABIN_WORDS.contains(&target),
        };
    if names_here {
        view.push(ViewItem::Description(
            narrative::description(here, false).to_string(),
        ));
        return Ok(());
    }
    let held = Item::ALL
        .iter()
        .find(|item| item.name().to_lowercase() == target && world.has_item(**item));
    if let Some(item) = held {
        view.line(format!("You are carrying the {}.", item.name()));
        return Ok(());
    }
    match here {
        Location::GrassyField => {
            // "field" itself re-describes the location above
            if matches!(target, "grass" | "brush") {
                view.line("There seems to be purple particles emanating from the grass.");
                return Ok(());
            }
            if vocab::CAVE_WORDS.contains(&target) || vocab::MINESHAFT_WORDS.contains(&target) {
                view.line("You would have to get closer to see it.");
                return Ok(());
            }
        }
        Location::CavePart1 => {
            if matches!(
                target,
                "light" | "feint light" | "glow" | "feint glow" | "glowing light"
            ) {
                view.line(
                    "The feint white light continues to grow brighter as you continue \
                     down the tunnel.",
                );
                return Ok(());
            }
            if matches!(
                target,
                "sulfur" | "smell of sulfur" | "smell sulfur" | "sulfur smell"
            ) {
                view.line("There is a smell of sulfur in the air coming from down the tunnel.");
                return Ok(());
            }
        }
        Location::CavePart2 => {
            if matches!(target, "torch" | "flame" | "fire" | "light") {
                view.line(
                    "The wood burning torch seems to be perfectly block shaped and the \
                     flame is red with tiny white sparks flying off and little particles \
                     of smoke.",
                );
                return Ok(());
            }
        }
        Location::CabinLivingRoom => {
            if target == "table" || target == "dining table" {
                if world.object_state(Object::UpstairsKeyOnTable) {
                    view.line("You notice a key on the table.");
                } else {
                    view.line("There is nothing else of interest on the table.");
                }
                return Ok(());
            }
            if item::use_target_for(target) == Some(UseTarget::Fire) {
                if world.object_state(Object::LitCabinFireplace) {
                    view.line("It seems odd that fireplace was lit before you got here.");
                } else {
                    view.line("The fireplace is a pile of wet, blackened logs.");
                }
                return Ok(());
            }
        }
        _ => {
            view.line("There is nothing to examine here.");
            return Ok(());
        }
    }
    view.line("We don't know what you are trying to examine.");
    Ok(())
}

/// Which lock a door reference means from where the player stands.
fn door_in_reach(world: &MafgWorld) -> Option<Lock> {
    match world.current_location {
        Location::CabinFront => Some(Lock::CabinFrontDoor),
        Location::Cabin2ndFloorBedroomConnector => Some(Lock::CabinUpstairsBedroomDoor),
        _ => None,
    }
}

fn key_for(lock: Lock) -> Item {
    match lock {
        Lock::CabinFrontDoor => Item::CabinKey,
        Lock::CabinUpstairsBedroomDoor => Item::CabinUpstairsBedroomKey,
    }
}

/// Unlock the door in front of the player. Keys are one-shot: a
/// successful unlock consumes the key.
///
/// # Errors
/// None currently.
pub fn unlock_handler(world: &mut MafgWorld, view: &mut View, target: &str) -> Result<()> {
    if !target.is_empty() && item::use_target_for(target) != Some(UseTarget::Door) {
        view.line("We don't know what your trying to unlock.");
        return Ok(());
    }
    let Some(lock) = door_in_reach(world) else {
        view.line("There is no door here to unlock.");
        return Ok(());
    };
    let key = key_for(lock);
    match (world.has_item(key), world.is_locked(lock)) {
        (_, false) => view.line("The door is already unlocked."),
        (false, true) => view.line("You will require a key to unlock the door."),
        (true, true) => {
            world.consume_item(key);
            world.unlock(lock);
            match lock {
                Lock::CabinFrontDoor => {
                    view.line("You use the cabin key to unlock the front door.");
                }
                Lock::CabinUpstairsBedroomDoor => {
                    view.line("You use the key to unlock the bedroom door.");
                }
            }
        }
    }
    Ok(())
}

/// Apply a held tool to a target object. The compatibility table lives in
/// [`crate::item`]; this handler owns the effects.
///
/// # Errors
/// None currently.
pub fn use_on_handler(world: &mut MafgWorld, view: &mut View, tool: &str, target: &str) -> Result<()> {
    let Some(tool_kind) = item::tool_for(tool) else {
        if target.is_empty() {
            view.line(format!("We don't know what your trying to use the {tool} on."));
        } else {
            view.line(format!("You don't have a {tool} to use."));
        }
        return Ok(());
    };
    let Some(target_kind) = item::use_target_for(target) else {
        view.line(format!("You can't use the {tool} on that."));
        return Ok(());
    };
    if !item::compatible(tool_kind, target_kind) {
        view.line(format!("You cant use a {tool} on a {target}!"));
        return Ok(());
    }
    match target_kind {
        UseTarget::Door => unlock_handler(world, view, target)?,
        UseTarget::Fire => put_out_fire(world, view),
    }
    Ok(())
}

fn put_out_fire(world: &mut MafgWorld, view: &mut View) {
    if world.current_location != Location::CabinLivingRoom {
        view.line("We don't know what fire your trying to put out.");
        return;
    }
    if !world.object_state(Object::LitCabinFireplace) {
        view.line("The fire is already out.");
        return;
    }
    if world.has_item(Item::WaterBucket) {
        world.consume_item(Item::WaterBucket);
        world.grant_item(Item::Bucket, 1);
        world.objects.insert(Object::LitCabinFireplace, false);
        view.line("You put out the fire with the water bucket.");
    } else if world.has_item(Item::Bucket) {
        view.line("You will have to fill the bucket with water first.");
    } else {
        view.line("You don't have a water bucket to put the fire out with.");
    }
}
