//! End-to-end scenarios driven through the turn dispatcher, the way a
//! player would type them.

use mafg_engine::command::Prompter;
use mafg_engine::item::{Item, Lock, Object};
use mafg_engine::repl::turn;
use mafg_engine::view::{View, ViewItem};
use mafg_engine::world::{Location, MafgWorld, PendingQuestion};

/// Prompter fed from a fixed script of follow-up replies.
struct Script(Vec<&'static str>);

impl Prompter for Script {
    fn ask(&mut self, _prompt: &str) -> Option<String> {
        if self.0.is_empty() {
            None
        } else {
            Some(self.0.remove(0).to_string())
        }
    }
}

fn play(world: &mut MafgWorld, view: &mut View, line: &str) {
    turn(world, view, &mut Script(vec![]), line).unwrap();
}

fn play_with(world: &mut MafgWorld, view: &mut View, line: &str, replies: Vec<&'static str>) {
    turn(world, view, &mut Script(replies), line).unwrap();
}

/// Walk to the cabin front door with the starting inventory intact.
fn walk_to_cabin(world: &mut MafgWorld, view: &mut View) {
    play(world, view, "south east");
    assert_eq!(world.current_location, Location::CabinFront);
}

#[test]
fn scenario_a_mineshaft_question_and_the_ambiguous_n() {
    let mut world = MafgWorld::new();
    let mut view = View::new();

    play(&mut world, &mut view, "w");
    assert_eq!(world.current_location, Location::MineshaftEntrance);
    assert_eq!(world.pending_question, Some(PendingQuestion::EnterCave));
    assert!(view.contains("Do you go in?"));

    // "n" is ambiguous while the question is pending; the player means no
    view.items.clear();
    play_with(&mut world, &mut view, "n", vec!["no"]);
    assert_eq!(world.current_location, Location::GrassyField);
    assert!(view.contains("You decide to wait a little bit before entering the cave."));
    assert!(world.pending_question.is_none());
}

#[test]
fn scenario_a_variant_the_player_meant_north() {
    let mut world = MafgWorld::new();
    let mut view = View::new();
    play(&mut world, &mut view, "w");
    play_with(&mut world, &mut view, "n", vec!["north"]);
    // no exit north from the mineshaft entrance
    assert_eq!(world.current_location, Location::MineshaftEntrance);
    assert!(view.contains("You cant go that way!"));
}

#[test]
fn scenario_a_yes_enters_the_cave() {
    let mut world = MafgWorld::new();
    let mut view = View::new();
    play(&mut world, &mut view, "w");
    play(&mut world, &mut view, "yes");
    assert_eq!(world.current_location, Location::CavePart1);
    assert!(view.contains("pitch black cave"));
}

#[test]
fn the_cave_quest_tracks_how_deep_you_went() {
    let mut world = MafgWorld::new();
    let mut view = View::new();
    play(&mut world, &mut view, "list quests");
    assert!(view.contains("Explore The Cave - Not Started"));

    play(&mut world, &mut view, "w");
    play(&mut world, &mut view, "yes");
    view.items.clear();
    play(&mut world, &mut view, "list quests");
    assert!(view.contains("Explore The Cave - In Progress"));

    play(&mut world, &mut view, "w");
    play(&mut world, &mut view, "left");
    assert_eq!(world.current_location, Location::CavePart2L1);
    view.items.clear();
    play(&mut world, &mut view, "list quests");
    assert!(view.contains("Explore The Cave - Complete"));
}

#[test]
fn scenario_b_unlock_then_enter_the_cabin() {
    let mut world = MafgWorld::new();
    let mut view = View::new();
    walk_to_cabin(&mut world, &mut view);

    // entering while locked fails and consumes nothing
    view.items.clear();
    play(&mut world, &mut view, "enter");
    assert_eq!(world.current_location, Location::CabinFront);
    assert!(view.contains("You will have to unlock the door first."));
    assert!(world.has_item(Item::CabinKey));

    view.items.clear();
    play(&mut world, &mut view, "unlock door");
    assert!(view.contains("You use the cabin key to unlock the front door."));
    assert!(!world.is_locked(Lock::CabinFrontDoor));
    assert!(!world.has_item(Item::CabinKey)); // one-shot key

    play(&mut world, &mut view, "go inside");
    assert_eq!(world.current_location, Location::CabinLivingRoom);
    assert!(view.contains("lit fireplace"));
}

#[test]
fn scenario_c_taking_the_key_is_idempotent() {
    let mut world = MafgWorld::new();
    let mut view = View::new();
    walk_to_cabin(&mut world, &mut view);
    play(&mut world, &mut view, "unlock door");
    play(&mut world, &mut view, "enter cabin");

    view.items.clear();
    play(&mut world, &mut view, "take key");
    assert!(world.has_item(Item::CabinUpstairsBedroomKey));
    assert!(!world.object_state(Object::UpstairsKeyOnTable));
    assert!(view.contains("You take the key."));

    let snapshot = world.clone();
    view.items.clear();
    play(&mut world, &mut view, "take key");
    assert!(view.contains("You already picked up the key."));
    let mut expected = snapshot;
    expected.turn_count += 1;
    assert_eq!(world, expected);
}

#[test]
fn scenario_d_save_and_load_round_trip() {
    let mut world = MafgWorld::new();
    let mut view = View::new();
    walk_to_cabin(&mut world, &mut view);
    play(&mut world, &mut view, "unlock door");
    play(&mut world, &mut view, "enter");
    play(&mut world, &mut view, "take key");

    view.items.clear();
    play(&mut world, &mut view, "save");
    assert!(view.contains("You saved the game."));
    let blob = view
        .items
        .iter()
        .find_map(|item| match item {
            ViewItem::System(text) => text.strip_prefix("Type: load ").map(str::to_string),
            _ => None,
        })
        .expect("save output includes a load line");

    let saved = world.clone();
    let mut fresh = MafgWorld::new();
    let mut view = View::new();
    play(&mut fresh, &mut view, &format!("load {blob}"));
    assert!(view.contains("You loaded the game."));
    assert_eq!(fresh.current_location, saved.current_location);
    assert_eq!(fresh.inventory, saved.inventory);
    assert_eq!(fresh.locks, saved.locks);
    assert_eq!(fresh.objects, saved.objects);
    assert_eq!(fresh.location_history, saved.location_history);
    assert!(fresh.history_consistent());
}

#[test]
fn scenario_d_variant_bad_save_strings_change_nothing() {
    let mut world = MafgWorld::new();
    let mut view = View::new();
    play(&mut world, &mut view, "e");
    let snapshot = world.clone();

    for bad in ["load not a save", "load {\"current_location\": 9}", "load {}"] {
        let mut view = View::new();
        play(&mut world, &mut view, bad);
        assert_eq!(world.current_location, snapshot.current_location);
        assert_eq!(world.inventory, snapshot.inventory);
    }
}

#[test]
fn one_handler_touches_one_state_category_per_turn() {
    // movement turns change location bookkeeping but never inventory
    let mut world = MafgWorld::new();
    let mut view = View::new();
    let inventory_before = world.inventory.clone();
    let locks_before = world.locks.clone();
    play(&mut world, &mut view, "n");
    assert_eq!(world.inventory, inventory_before);
    assert_eq!(world.locks, locks_before);

    // list turns change nothing but the turn counter
    let snapshot = world.clone();
    play(&mut world, &mut view, "list inventory");
    play(&mut world, &mut view, "list places");
    play(&mut world, &mut view, "list quests");
    let mut expected = snapshot;
    expected.turn_count += 3;
    assert_eq!(world, expected);
}

#[test]
fn history_invariant_survives_an_arbitrary_session() {
    let mut world = MafgWorld::new();
    let mut view = View::new();
    let session = [
        "n",
        "go back",
        "south east",
        "unlock door",
        "enter",
        "take key",
        "exit",
        "nw",
        "w",
        "yes",
        "w",
        "left",
        "talk to miner",
        "3",
        "go back",
        "go back",
        "dance wildly",
        "go back",
        "go back",
        "go back",
        "go back",
        "go back",
        "go back",
        "go back",
    ];
    for line in session {
        play(&mut world, &mut view, line);
        assert!(world.history_consistent(), "after input {line:?}");
        assert!(world.discovered.contains(&world.current_location));
        assert!(!world.location_history.is_empty());
    }
}

#[test]
fn pending_questions_live_exactly_one_turn() {
    let mut world = MafgWorld::new();
    let mut view = View::new();
    play(&mut world, &mut view, "w");
    assert!(world.pending_question.is_some());
    // moving away clears it and nothing re-arms it in the field
    play(&mut world, &mut view, "e");
    assert!(world.pending_question.is_none());
    // a later yes answers nothing
    view.items.clear();
    play(&mut world, &mut view, "yes");
    assert_eq!(world.current_location, Location::GrassyField);
}

#[test]
fn too_many_floors_aborts_before_any_handler() {
    let mut world = MafgWorld::new();
    let mut view = View::new();
    let snapshot = world.clone();
    play(&mut world, &mut view, "go to 1st floor second floor bedroom");
    assert!(view.contains("You typed too many floors!"));
    assert_eq!(world.current_location, snapshot.current_location);
    assert_eq!(world.location_history, snapshot.location_history);
}

#[test]
fn floor_qualifier_picks_the_right_bedroom() {
    let mut world = MafgWorld::new();
    let mut view = View::new();
    walk_to_cabin(&mut world, &mut view);
    play(&mut world, &mut view, "unlock door");
    play(&mut world, &mut view, "enter");
    play(&mut world, &mut view, "take key");
    play(&mut world, &mut view, "go upstairs");
    assert_eq!(
        world.current_location,
        Location::Cabin2ndFloorBedroomConnector
    );
    play(&mut world, &mut view, "unlock door");
    assert!(!world.is_locked(Lock::CabinUpstairsBedroomDoor));
    play(&mut world, &mut view, "enter 2nd floor bedroom");
    assert_eq!(world.current_location, Location::Cabin2ndFloorBedroom);
}

#[test]
fn fire_needs_the_full_bucket() {
    let mut world = MafgWorld::new();
    let mut view = View::new();
    walk_to_cabin(&mut world, &mut view);
    play(&mut world, &mut view, "unlock door");
    play(&mut world, &mut view, "enter");

    view.items.clear();
    play(&mut world, &mut view, "put out fire with bucket");
    assert!(view.contains("You put out the fire with the water bucket."));
    assert!(!world.object_state(Object::LitCabinFireplace));
    assert!(world.has_item(Item::Bucket));
    assert!(!world.has_item(Item::WaterBucket));

    // a second attempt finds no fire left
    view.items.clear();
    play(&mut world, &mut view, "use bucket on fire");
    assert!(view.contains("The fire is already out."));
}

#[test]
fn developer_teleport_is_gated_by_settings() {
    let mut world = MafgWorld::new();
    let mut view = View::new();
    play(&mut world, &mut view, "teleport cave");
    assert_eq!(world.current_location, Location::GrassyField);
    assert!(view.contains("You must enable developer mode first."));

    play(&mut world, &mut view, "developer mode = 1");
    play(&mut world, &mut view, "teleport cave");
    assert_eq!(world.current_location, Location::CavePart1);
}

#[test]
fn save_string_survives_the_lowercasing_classifier() {
    let mut world = MafgWorld::new();
    let mut view = View::new();
    // arm a pending question so the save blob contains a verb word
    play(&mut world, &mut view, "w");
    play(&mut world, &mut view, "save");
    let blob = view
        .items
        .iter()
        .find_map(|item| match item {
            ViewItem::System(text) => text.strip_prefix("Type: load ").map(str::to_string),
            _ => None,
        })
        .expect("save output includes a load line");
    assert_eq!(blob, blob.to_lowercase());

    let mut fresh = MafgWorld::new();
    let mut view = View::new();
    play(&mut fresh, &mut view, &format!("load {blob}"));
    assert!(view.contains("You loaded the game."));
    assert_eq!(fresh.current_location, Location::MineshaftEntrance);
}
