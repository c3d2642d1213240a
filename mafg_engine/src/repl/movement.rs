//! Handlers for moving around the world: compass moves, enter/leave,
//! go-to pathing, go-back, and the developer teleport.

use anyhow::Result;
use log::warn;

use crate::item::{Item, Lock};
use crate::narrative;
use crate::view::{View, ViewItem};
use crate::vocab;
use crate::world::{Direction, Location, MafgWorld, exit};

/// Push the banner and prose for the current location, then mark it
/// visited so the next description uses the repeat variant.
pub fn describe_location(world: &mut MafgWorld, view: &mut View) {
    let here = world.current_location;
    let first = world.first_visit();
    view.push(ViewItem::Heading(narrative::heading(here).to_string()));
    view.push(ViewItem::Description(
        narrative::description(here, first).to_string(),
    ));
    world.visited.insert(here, true);
}

/// Walk one step along the compass (or up/down/left/right).
///
/// # Errors
/// None currently; the signature matches the other handlers.
pub fn move_handler(world: &mut MafgWorld, view: &mut View, dir: Direction) -> Result<()> {
    match exit(world.current_location, dir) {
        Some(dest) => {
            world.move_to(dest);
            describe_location(world, view);
        }
        None => view.line("You cant go that way!"),
    }
    Ok(())
}

/// Pop one step of travel history.
///
/// # Errors
/// None currently.
pub fn go_back_handler(world: &mut MafgWorld, view: &mut View) -> Result<()> {
    match world.go_back() {
        Some(_) => describe_location(world, view),
        None => view.line("There is nothing to go back to"),
    }
    Ok(())
}

/// Which enterable thing the player means here.
enum EnterTarget {
    Cabin,
    Cave,
    Bathroom,
    Bedroom,
    LivingRoom,
    Upstairs,
}

fn resolve_enter_target(world: &MafgWorld, target: &str, floor: Option<u8>) -> Option<EnterTarget> {
    if target.is_empty() {
        // "enter second floor" strips down to a bare floor qualifier
        if floor == Some(2) {
            return Some(EnterTarget::Upstairs);
        }
        // bare "enter" takes the obvious thing in front of you
        return match world.current_location {
            Location::CabinFront => Some(EnterTarget::Cabin),
            Location::MineshaftEntrance => Some(EnterTarget::Cave),
            _ => None,
        };
    }
    if vocab::CABIN_WORDS.contains(&target) {
        Some(EnterTarget::Cabin)
    } else if vocab::CAVE_WORDS.contains(&target) || vocab::MINESHAFT_WORDS.contains(&target) {
        Some(EnterTarget::Cave)
    } else if vocab::BATHROOM_WORDS.contains(&target) {
        Some(EnterTarget::Bathroom)
    } else if vocab::LIVING_ROOM_WORDS.contains(&target) {
        Some(EnterTarget::LivingRoom)
    } else if vocab::BEDROOM_WORDS.contains(&target) {
        if floor == Some(2) || world.current_location == Location::Cabin2ndFloorBedroomConnector {
            Some(EnterTarget::Upstairs)
        } else {
            Some(EnterTarget::Bedroom)
        }
    } else if vocab::UPSTAIRS_WORDS.contains(&target) {
        Some(EnterTarget::Upstairs)
    } else {
        None
    }
}

/// Enter the cabin, the cave, or a room off the one you are in. Lock
/// guards live here, not in the adjacency table.
///
/// # Errors
/// None currently.
pub fn enter_handler(
    world: &mut MafgWorld,
    view: &mut View,
    target: &str,
    floor: Option<u8>,
) -> Result<()> {
    let Some(resolved) = resolve_enter_target(world, target, floor) else {
        view.line("We dont know what your trying to enter.");
        return Ok(());
    };
    match resolved {
        EnterTarget::Cabin => {
            if world.current_location != Location::CabinFront {
                view.line("We dont know what your trying to enter.");
            } else if world.is_locked(Lock::CabinFrontDoor) {
                if world.has_item(Item::CabinKey) {
                    view.line("You will have to unlock the door first.");
                } else {
                    view.line(
                        "It seems to be locked. You will require a key to unlock the door.",
                    );
                }
            } else {
                world.move_to(Location::CabinLivingRoom);
                describe_location(world, view);
            }
        }
        EnterTarget::Cave => {
            if world.current_location == Location::MineshaftEntrance {
                world.pending_question = None;
                world.move_to(Location::CavePart1);
                describe_location(world, view);
            } else {
                view.line("We dont know what your trying to enter.");
            }
        }
        EnterTarget::Bathroom => {
            if world.current_location == Location::CabinLivingRoom {
                world.move_to(Location::Cabin1stFloorBathroom);
                describe_location(world, view);
            } else {
                view.line("We dont know what your trying to enter.");
            }
        }
        EnterTarget::Bedroom => {
            if world.current_location == Location::CabinLivingRoom {
                world.move_to(Location::Cabin1stFloorBedroom);
                describe_location(world, view);
            } else {
                view.line("We dont know what your trying to enter.");
            }
        }
        EnterTarget::LivingRoom => {
            if matches!(
                world.current_location,
                Location::Cabin1stFloorBathroom | Location::Cabin1stFloorBedroom
            ) {
                world.move_to(Location::CabinLivingRoom);
                describe_location(world, view);
            } else {
                view.line("We dont know what your trying to enter.");
            }
        }
        EnterTarget::Upstairs => {
            if world.current_location == Location::Cabin2ndFloorBedroomConnector {
                if world.is_locked(Lock::CabinUpstairsBedroomDoor) {
                    if world.has_item(Item::CabinUpstairsBedroomKey) {
                        view.line("You will have to unlock the door first.");
                    } else {
                        view.line(
                            "It seems to be locked. You will require a key to unlock the door.",
                        );
                    }
                } else {
                    world.move_to(Location::Cabin2ndFloorBedroom);
                    describe_location(world, view);
                }
            } else if world.current_location == Location::CabinLivingRoom {
                world.move_to(Location::Cabin2ndFloorBedroomConnector);
                describe_location(world, view);
            } else {
                view.line("We dont know what your trying to enter.");
            }
        }
    }
    Ok(())
}

/// Leave the room you are in, stepping out to its parent.
///
/// # Errors
/// None currently.
pub fn leave_handler(world: &mut MafgWorld, view: &mut View, target: &str) -> Result<()> {
    let known = target.is_empty()
        || vocab::CABIN_WORDS.contains(&target)
        || vocab::BATHROOM_WORDS.contains(&target)
        || vocab::BEDROOM_WORDS.contains(&target)
        || vocab::CAVE_WORDS.contains(&target)
        || vocab::LIVING_ROOM_WORDS.contains(&target);
    if !known {
        view.line("We dont know what your trying to exit.");
        return Ok(());
    }
    let dest = match world.current_location {
        Location::CabinLivingRoom => Some(Location::CabinFront),
        Location::Cabin1stFloorBathroom | Location::Cabin1stFloorBedroom => {
            Some(Location::CabinLivingRoom)
        }
        Location::Cabin2ndFloorBedroom => Some(Location::Cabin2ndFloorBedroomConnector),
        Location::Cabin2ndFloorBedroomConnector => Some(Location::CabinLivingRoom),
        Location::CavePart1 => Some(Location::MineshaftEntrance),
        _ => None,
    };
    match dest {
        Some(dest) => {
            world.move_to(dest);
            describe_location(world, view);
        }
        None => view.line("We dont know what your trying to exit."),
    }
    Ok(())
}

/// Map a go-to argument to a concrete destination.
fn resolve_place(target: &str, floor: Option<u8>) -> Option<Location> {
    if target.is_empty() {
        // "go to second floor" strips down to a bare floor qualifier
        return (floor == Some(2)).then_some(Location::Cabin2ndFloorBedroomConnector);
    }
    if vocab::GRASSY_FIELD_WORDS.contains(&target) {
        Some(Location::GrassyField)
    } else if vocab::FOREST_WORDS.contains(&target) {
        Some(Location::ForestPart1)
    } else if vocab::MINESHAFT_WORDS.contains(&target) {
        Some(Location::MineshaftEntrance)
    } else if vocab::CAVE_WORDS.contains(&target) {
        Some(Location::CavePart1)
    } else if vocab::CABIN_WORDS.contains(&target) {
        Some(Location::CabinFront)
    } else if vocab::LIVING_ROOM_WORDS.contains(&target) {
        Some(Location::CabinLivingRoom)
    } else if vocab::BATHROOM_WORDS.contains(&target) {
        Some(Location::Cabin1stFloorBathroom)
    } else if vocab::BEDROOM_WORDS.contains(&target) {
        match floor {
            Some(2) => Some(Location::Cabin2ndFloorBedroom),
            _ => Some(Location::Cabin1stFloorBedroom),
        }
    } else if vocab::UPSTAIRS_WORDS.contains(&target) {
        Some(Location::Cabin2ndFloorBedroomConnector)
    } else {
        None
    }
}

/// Travel directly to a place you have already discovered.
///
/// # Errors
/// None currently.
pub fn go_to_handler(
    world: &mut MafgWorld,
    view: &mut View,
    target: &str,
    floor: Option<u8>,
    specific: bool,
) -> Result<()> {
    if floor.is_some_and(|f| f > 2) {
        view.line("The cabin only has two floors.");
        return Ok(());
    }
    let Some(dest) = resolve_place(target, floor) else {
        view.line("We dont know where your trying to go.");
        return Ok(());
    };
    if specific && dest.region() != "Cabin" {
        view.line("We dont know where your trying to go.");
        return Ok(());
    }
    if dest == world.current_location {
        view.line(format!(
            "You are already {} the {}.",
            dest.preposition(),
            dest.name()
        ));
        return Ok(());
    }
    if !world.discovered.contains(&dest) {
        view.line("You don't know how to get there yet.");
        return Ok(());
    }
    // travelling into the cabin still respects its locks
    if dest.region() == "Cabin"
        && dest != Location::CabinFront
        && world.is_locked(Lock::CabinFrontDoor)
    {
        view.line("You will have to unlock the door first.");
        return Ok(());
    }
    if dest == Location::Cabin2ndFloorBedroom && world.is_locked(Lock::CabinUpstairsBedroomDoor) {
        view.line("You will have to unlock the door first.");
        return Ok(());
    }
    world.move_to(dest);
    describe_location(world, view);
    Ok(())
}

/// Developer-mode jump to any location, discovered or not.
///
/// # Errors
/// None currently.
pub fn teleport_handler(world: &mut MafgWorld, view: &mut View, target: &str) -> Result<()> {
    if !world.settings.developer_mode {
        view.error("You must enable developer mode first.");
        return Ok(());
    }
    let Some(dest) = resolve_place(target, None).or_else(|| {
        Location::ALL
            .iter()
            .find(|loc| loc.name().to_lowercase() == target)
            .copied()
    }) else {
        view.error(format!("No such place: {target}"));
        return Ok(());
    };
    warn!("developer teleport to {}", dest.name());
    world.move_to(dest);
    describe_location(world, view);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::{Quest, QuestState};

    #[test]
    fn walking_west_reaches_the_mineshaft() {
        let mut world = MafgWorld::new();
        let mut view = View::new();
        move_handler(&mut world, &mut view, Direction::West).unwrap();
        assert_eq!(world.current_location, Location::MineshaftEntrance);
        assert!(view.contains("MINESHAFT ENTRANCE"));
    }

    #[test]
    fn blocked_moves_leave_state_untouched() {
        let mut world = MafgWorld::new();
        let mut view = View::new();
        move_handler(&mut world, &mut view, Direction::South).unwrap();
        assert_eq!(world.current_location, Location::GrassyField);
        assert_eq!(world.location_history.len(), 1);
        assert!(view.contains("You cant go that way!"));
    }

    #[test]
    fn entering_the_locked_cabin_reports_the_lock() {
        let mut world = MafgWorld::new();
        let mut view = View::new();
        world.move_to(Location::CabinFront);
        enter_handler(&mut world, &mut view, "", None).unwrap();
        assert_eq!(world.current_location, Location::CabinFront);
        assert!(view.contains("You will have to unlock the door first."));
    }

    #[test]
    fn entering_without_the_key_reports_it_differently() {
        let mut world = MafgWorld::new();
        let mut view = View::new();
        world.move_to(Location::CabinFront);
        world.consume_item(Item::CabinKey);
        enter_handler(&mut world, &mut view, "cabin", None).unwrap();
        assert!(view.contains("It seems to be locked."));
    }

    #[test]
    fn entering_the_unlocked_cabin_moves_inside() {
        let mut world = MafgWorld::new();
        let mut view = View::new();
        world.move_to(Location::CabinFront);
        world.unlock(Lock::CabinFrontDoor);
        enter_handler(&mut world, &mut view, "", None).unwrap();
        assert_eq!(world.current_location, Location::CabinLivingRoom);
    }

    #[test]
    fn entering_the_cave_starts_the_quest() {
        let mut world = MafgWorld::new();
        let mut view = View::new();
        world.move_to(Location::MineshaftEntrance);
        enter_handler(&mut world, &mut view, "cave", None).unwrap();
        assert_eq!(world.current_location, Location::CavePart1);
        assert_eq!(
            world.quest_state(Quest::ExploreTheCave),
            QuestState::InProgress
        );
    }

    #[test]
    fn unknown_enter_targets_are_rejected() {
        let mut world = MafgWorld::new();
        let mut view = View::new();
        enter_handler(&mut world, &mut view, "volcano", None).unwrap();
        assert!(view.contains("We dont know what your trying to enter."));
    }

    #[test]
    fn entering_the_living_room_from_a_side_room() {
        let mut world = MafgWorld::new();
        let mut view = View::new();
        world.move_to(Location::CabinLivingRoom);
        world.move_to(Location::Cabin1stFloorBathroom);
        enter_handler(&mut world, &mut view, "living room", None).unwrap();
        assert_eq!(world.current_location, Location::CabinLivingRoom);

        world.move_to(Location::Cabin1stFloorBedroom);
        enter_handler(&mut world, &mut view, "main room", None).unwrap();
        assert_eq!(world.current_location, Location::CabinLivingRoom);
    }

    #[test]
    fn entering_the_living_room_from_outside_is_rejected() {
        let mut world = MafgWorld::new();
        let mut view = View::new();
        enter_handler(&mut world, &mut view, "living room", None).unwrap();
        assert_eq!(world.current_location, Location::GrassyField);
        assert!(view.contains("We dont know what your trying to enter."));
    }

    #[test]
    fn leave_steps_out_to_the_parent_room() {
        let mut world = MafgWorld::new();
        let mut view = View::new();
        world.move_to(Location::CabinLivingRoom);
        world.move_to(Location::Cabin1stFloorBathroom);
        leave_handler(&mut world, &mut view, "").unwrap();
        assert_eq!(world.current_location, Location::CabinLivingRoom);
    }

    #[test]
    fn go_to_requires_discovery() {
        let mut world = MafgWorld::new();
        let mut view = View::new();
        go_to_handler(&mut world, &mut view, "forest", None, false).unwrap();
        assert_eq!(world.current_location, Location::GrassyField);
        assert!(view.contains("You don't know how to get there yet."));
    }

    #[test]
    fn go_to_a_discovered_place_works() {
        let mut world = MafgWorld::new();
        let mut view = View::new();
        world.move_to(Location::ForestPart1);
        world.move_to(Location::GrassyField);
        go_to_handler(&mut world, &mut view, "forest", None, false).unwrap();
        assert_eq!(world.current_location, Location::ForestPart1);
    }

    #[test]
    fn go_to_here_says_already_there() {
        let mut world = MafgWorld::new();
        let mut view = View::new();
        go_to_handler(&mut world, &mut view, "field", None, false).unwrap();
        assert!(view.contains("You are already at the Grassy Field."));
    }

    #[test]
    fn a_bare_floor_two_means_the_landing() {
        let mut world = MafgWorld::new();
        let mut view = View::new();
        world.unlock(Lock::CabinFrontDoor);
        world.move_to(Location::CabinFront);
        world.move_to(Location::CabinLivingRoom);
        enter_handler(&mut world, &mut view, "", Some(2)).unwrap();
        assert_eq!(
            world.current_location,
            Location::Cabin2ndFloorBedroomConnector
        );

        world.move_to(Location::CabinLivingRoom);
        go_to_handler(&mut world, &mut view, "", Some(2), false).unwrap();
        assert_eq!(
            world.current_location,
            Location::Cabin2ndFloorBedroomConnector
        );
    }

    #[test]
    fn teleport_needs_developer_mode() {
        let mut world = MafgWorld::new();
        let mut view = View::new();
        teleport_handler(&mut world, &mut view, "forest").unwrap();
        assert_eq!(world.current_location, Location::GrassyField);
        world.settings.developer_mode = true;
        teleport_handler(&mut world, &mut view, "forest").unwrap();
        assert_eq!(world.current_location, Location::ForestPart1);
    }
}
