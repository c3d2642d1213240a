//! System-level handlers: save and load, settings, and the list commands.

use anyhow::Result;
use log::{info, warn};

use crate::repl::movement::describe_location;
use crate::save;
use crate::view::{View, ViewItem};
use crate::world::{Location, MafgWorld, QuestState};

/// Serialize the world and hand the save string to the player.
///
/// # Errors
/// Propagates serializer failures, which indicate a bug in the data model.
pub fn save_handler(world: &MafgWorld, view: &mut View) -> Result<()> {
    let blob = save::encode(world)?;
    view.push(ViewItem::System(format!("Type: load {blob}")));
    view.push(ViewItem::System("In order to load your game.".to_string()));
    view.line("You saved the game.");
    Ok(())
}

/// Replace the world with a pasted save string. The current world is
/// untouched unless decoding fully succeeds.
///
/// # Errors
/// None; decode failures are reported to the player, not propagated.
pub fn load_handler(world: &mut MafgWorld, view: &mut View, blob: &str) -> Result<()> {
    match save::decode(blob) {
        Ok(loaded) => {
            *world = loaded;
            info!("game state replaced from save string");
            view.line("You loaded the game.");
            describe_location(world, view);
        }
        Err(err) => {
            warn!("load rejected: {err}");
            view.error(err.to_string());
        }
    }
    Ok(())
}

/// Show the current settings and how to change them.
///
/// # Errors
/// None currently.
pub fn settings_handler(world: &MafgWorld, view: &mut View) -> Result<()> {
    view.push(ViewItem::List {
        title: "Settings:".to_string(),
        entries: vec![
            format!("paratype = {} (1 wraps text, 2 prints whole paragraphs)", world.settings.paratype),
            format!(
                "developer mode = {} (set to 1 to enable teleporting)",
                u8::from(world.settings.developer_mode)
            ),
        ],
    });
    Ok(())
}

/// Set the prose formatting mode.
///
/// # Errors
/// None currently.
pub fn set_paratype_handler(world: &mut MafgWorld, view: &mut View, value: u8) -> Result<()> {
    if matches!(value, 1 | 2) {
        world.settings.paratype = value;
        view.push(ViewItem::System(format!("Paratype set to {value}.")));
    } else {
        view.error("Paratype must be 1 or 2.");
    }
    Ok(())
}

/// Toggle developer mode.
///
/// # Errors
/// None currently.
pub fn set_developer_handler(world: &mut MafgWorld, view: &mut View, on: bool) -> Result<()> {
    world.settings.developer_mode = on;
    let state = if on { "enabled" } else { "disabled" };
    view.push(ViewItem::System(format!("Developer mode {state}.")));
    Ok(())
}

/// List what the player is carrying.
///
/// # Errors
/// None currently.
pub fn inventory_handler(world: &MafgWorld, view: &mut View) -> Result<()> {
    let entries: Vec<String> = world
        .inventory
        .iter()
        .filter(|(_, count)| **count > 0)
        .map(|(item, count)| {
            if *count > 1 {
                format!("{} x{count}", item.name())
            } else {
                item.name().to_string()
            }
        })
        .collect();
    if entries.is_empty() {
        view.line("You aren't carrying anything.");
    } else {
        view.push(ViewItem::List {
            title: "Inventory:".to_string(),
            entries,
        });
    }
    Ok(())
}

/// List every region discovered so far. Sub-rooms collapse into their
/// region, so the whole cave reads as one entry.
///
/// # Errors
/// None currently.
pub fn places_handler(world: &MafgWorld, view: &mut View) -> Result<()> {
    let mut entries: Vec<String> = Vec::new();
    for &loc in Location::ALL {
        if world.discovered.contains(&loc) && !entries.iter().any(|name| name == loc.region()) {
            entries.push(loc.region().to_string());
        }
    }
    view.push(ViewItem::List {
        title: "Places discovered:".to_string(),
        entries,
    });
    Ok(())
}

/// List the quest lines and their progress.
///
/// # Errors
/// None currently.
pub fn quests_handler(world: &MafgWorld, view: &mut View) -> Result<()> {
    let entries = crate::world::Quest::ALL
        .iter()
        .map(|quest| {
            let state = match world.quest_state(*quest) {
                QuestState::NotStarted => "Not Started",
                QuestState::InProgress => "In Progress",
                QuestState::Complete => "Complete",
            };
            format!("{} - {state}", quest.name())
        })
        .collect();
    view.push(ViewItem::List {
        title: "Quests:".to_string(),
        entries,
    });
    Ok(())
}

/// List the command surface.
///
/// # Errors
/// None currently.
pub fn commands_handler(view: &mut View) -> Result<()> {
    let entries = [
        "save / load <save string>",
        "north, south, east, west (and combinations), left, right",
        "go to <place> / go back / go upstairs / go downstairs",
        "enter <place> / exit",
        "take <object> / examine <object>",
        "unlock <door> / use <item> on <object> / put out fire",
        "talk to <someone> / fight <someone>",
        "list places / list quests / list inventory / list commands",
        "print d / settings / paratype = <1|2>",
    ]
    .iter()
    .map(|s| (*s).to_string())
    .collect();
    view.push(ViewItem::List {
        title: "Commands:".to_string(),
        entries,
    });
    Ok(())
}

/// Reprint the current location description on demand.
///
/// # Errors
/// None currently.
pub fn print_description_handler(world: &mut MafgWorld, view: &mut View) -> Result<()> {
    describe_location(world, view);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::Item;

    #[test]
    fn save_emits_a_loadable_line() {
        let world = MafgWorld::new();
        let mut view = View::new();
        save_handler(&world, &mut view).unwrap();
        assert!(view.contains("Type: load {"));
        assert!(view.contains("You saved the game."));
    }

    #[test]
    fn load_replaces_the_world_wholesale() {
        let mut source = MafgWorld::new();
        source.move_to(Location::ForestPart1);
        source.grant_item(Item::Coin, 2);
        let blob = crate::save::encode(&source).unwrap();

        let mut world = MafgWorld::new();
        let mut view = View::new();
        load_handler(&mut world, &mut view, &blob).unwrap();
        // describe_location marks the loaded location visited
        source.visited.insert(Location::ForestPart1, true);
        assert_eq!(world, source);
        assert!(view.contains("You loaded the game."));
    }

    #[test]
    fn bad_load_changes_nothing() {
        let mut world = MafgWorld::new();
        let snapshot = world.clone();
        let mut view = View::new();
        load_handler(&mut world, &mut view, "garbage").unwrap();
        assert_eq!(world, snapshot);
        assert!(view.contains("doesn't look like a save string"));
    }

    #[test]
    fn paratype_rejects_out_of_range() {
        let mut world = MafgWorld::new();
        let mut view = View::new();
        set_paratype_handler(&mut world, &mut view, 7).unwrap();
        assert_eq!(world.settings.paratype, 2);
        set_paratype_handler(&mut world, &mut view, 1).unwrap();
        assert_eq!(world.settings.paratype, 1);
    }

    #[test]
    fn inventory_lists_only_held_items() {
        let world = MafgWorld::new();
        let mut view = View::new();
        inventory_handler(&world, &mut view).unwrap();
        assert!(view.contains("Cabin Key"));
        assert!(!view.contains("Coin"));
    }

    #[test]
    fn places_collapse_to_their_region() {
        let mut world = MafgWorld::new();
        world.move_to(Location::MineshaftEntrance);
        world.move_to(Location::CavePart1);
        world.move_to(Location::CavePart2);
        let mut view = View::new();
        places_handler(&world, &mut view).unwrap();
        assert!(view.contains("Cave"));
        assert!(!view.contains("Cave Tunnel"));
        assert!(!view.contains("Forest"));
    }
}
