//! Handlers for NPC interaction: fights, yes/no answers, and dialogue.

use anyhow::Result;
use log::info;

use crate::command::Answer;
use crate::dialogue::{self, DialogueState};
use crate::item::Item;
use crate::npc::{self, Npc};
use crate::repl::movement::describe_location;
use crate::view::{View, ViewItem};
use crate::world::{Location, MafgWorld, PendingQuestion, Quest, QuestState};

/// Coins handed over during the miner's "blocky" answer.
const MINER_COIN_TIP: u32 = 3;

/// Challenge an NPC. The actual fight only starts after a yes answer.
///
/// # Errors
/// None currently.
pub fn fight_handler(world: &mut MafgWorld, view: &mut View, target: &str) -> Result<()> {
    let named = npc::npc_for(target);
    let Some(npc) = named.filter(|npc| npc.home() == world.current_location) else {
        view.line(format!("There is no {target} here to fight."));
        return Ok(());
    };
    if !world.npc_is_alive(npc) {
        view.line(format!("The {} is already dead.", npc.name()));
        return Ok(());
    }
    world.pending_question = Some(PendingQuestion::Fight(npc));
    view.push(ViewItem::Question(format!(
        "Are you sure you want to fight the {}?",
        npc.name()
    )));
    Ok(())
}

/// Resolve a yes/no answer against whatever question is pending.
///
/// # Errors
/// None currently.
pub fn answer_handler(world: &mut MafgWorld, view: &mut View, answer: Answer) -> Result<()> {
    let Some(pending) = world.pending_question.take() else {
        view.error("That's not a valid action!");
        return Ok(());
    };
    match (pending, answer) {
        (PendingQuestion::EnterCave, Answer::Yes) => {
            world.move_to(Location::CavePart1);
            describe_location(world, view);
        }
        (PendingQuestion::EnterCave, Answer::No) => {
            view.line("You decide to wait a little bit before entering the cave.");
            world.move_to(Location::GrassyField);
        }
        (PendingQuestion::Fight(npc), Answer::Yes) => resolve_combat(world, view, npc),
        (PendingQuestion::Fight(npc), Answer::No) => {
            view.line(format!("You back away from the {}.", npc.name()));
        }
    }
    Ok(())
}

/// Combat resolution is an extension point: the stat blocks exist and the
/// confirmation hook fires, but there is no damage model yet.
fn resolve_combat(world: &MafgWorld, view: &mut View, npc: Npc) {
    let stats = world
        .npc_stats
        .get(&npc)
        .cloned()
        .unwrap_or_else(|| npc.base_stats());
    info!("fight vs {} confirmed; no resolution model, stats {stats:?}", npc.name());
    view.line(format!(
        "You square up against the {}. After a long, tense stare the two of you \
         silently agree this is not the day.",
        npc.name()
    ));
}

/// Open a dialogue scene with an NPC standing here.
///
/// # Errors
/// None currently.
pub fn talk_to_handler(world: &mut MafgWorld, view: &mut View, target: &str) -> Result<()> {
    let named = npc::npc_for(target);
    let Some(npc) = named.filter(|npc| npc.home() == world.current_location) else {
        view.line(format!("There is no {target} here to talk to."));
        return Ok(());
    };
    if !world.npc_is_alive(npc) {
        view.line(format!("The {} has nothing more to say.", npc.name()));
        return Ok(());
    }
    let state = DialogueState::new(npc);
    view.push(ViewItem::Speech(dialogue::opening(state.scene).to_string()));
    offer_choices(view, &state);
    world.advance_quest(Quest::MeetTheMiners, QuestState::InProgress);
    world.dialogue = Some(state);
    Ok(())
}

/// Print the still-available numbered choices of an open scene.
pub fn offer_choices(view: &mut View, state: &DialogueState) {
    for choice in state.remaining() {
        view.push(ViewItem::Speech(format!("{}. {}", choice.number, choice.text)));
    }
}

/// Resolve a numbered pick inside an open dialogue scene.
///
/// # Errors
/// None currently.
pub fn choice_handler(world: &mut MafgWorld, view: &mut View, number: usize) -> Result<()> {
    let Some(mut state) = world.dialogue.take() else {
        view.error("That's not a valid action!");
        return Ok(());
    };
    let Some(choice) = state
        .remaining()
        .into_iter()
        .find(|choice| choice.number == number)
    else {
        view.line("That's not one of the choices.");
        offer_choices(view, &state);
        world.dialogue = Some(state);
        return Ok(());
    };
    view.push(ViewItem::Speech(choice.reply.to_string()));
    // the blocky question is where the miner tips you
    if state.npc == Npc::BlockyMiner && choice.number == 2 {
        world.grant_item(Item::Coin, MINER_COIN_TIP);
    }
    if choice.terminal {
        world.advance_quest(Quest::MeetTheMiners, QuestState::Complete);
        info!("dialogue with {} ended", state.npc.name());
        return Ok(());
    }
    if choice.one_shot {
        state.choices_taken.insert(number);
    }
    offer_choices(view, &state);
    world.dialogue = Some(state);
    Ok(())
}

/// Remind a mid-conversation player that only numbered picks work.
pub fn reoffer_handler(world: &MafgWorld, view: &mut View) {
    view.line("You're in the middle of a conversation. Pick a number.");
    if let Some(state) = &world.dialogue {
        offer_choices(view, state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at_the_miner() -> MafgWorld {
        let mut world = MafgWorld::new();
        world.move_to(Location::CavePart2L1);
        world
    }

    #[test]
    fn fighting_arms_a_question() {
        let mut world = at_the_miner();
        let mut view = View::new();
        fight_handler(&mut world, &mut view, "miner").unwrap();
        assert_eq!(
            world.pending_question,
            Some(PendingQuestion::Fight(Npc::BlockyMiner))
        );
        assert!(view.contains("Are you sure you want to fight the blocky miner?"));
    }

    #[test]
    fn fighting_an_absent_npc_fails() {
        let mut world = MafgWorld::new();
        let mut view = View::new();
        fight_handler(&mut world, &mut view, "miner").unwrap();
        assert!(world.pending_question.is_none());
        assert!(view.contains("There is no miner here to fight."));
    }

    #[test]
    fn answering_yes_consumes_the_question_without_a_fight_model() {
        let mut world = at_the_miner();
        let mut view = View::new();
        world.pending_question = Some(PendingQuestion::Fight(Npc::BlockyMiner));
        answer_handler(&mut world, &mut view, Answer::Yes).unwrap();
        assert!(world.pending_question.is_none());
        // no damage model yet: nobody gets hurt
        assert!(world.npc_is_alive(Npc::BlockyMiner));
        assert_eq!(world.player.health, 20);
        assert!(view.contains("You square up against the blocky miner."));
    }

    #[test]
    fn answering_no_backs_away() {
        let mut world = at_the_miner();
        let mut view = View::new();
        world.pending_question = Some(PendingQuestion::Fight(Npc::BlockyMiner));
        answer_handler(&mut world, &mut view, Answer::No).unwrap();
        assert!(world.npc_is_alive(Npc::BlockyMiner));
        assert!(view.contains("You back away from the blocky miner."));
    }

    #[test]
    fn answering_no_to_the_cave_retreats_to_the_field() {
        let mut world = MafgWorld::new();
        world.move_to(Location::MineshaftEntrance);
        world.pending_question = Some(PendingQuestion::EnterCave);
        let mut view = View::new();
        answer_handler(&mut world, &mut view, Answer::No).unwrap();
        assert_eq!(world.current_location, Location::GrassyField);
        assert!(view.contains("You decide to wait a little bit before entering the cave."));
    }

    #[test]
    fn answer_without_a_question_is_invalid() {
        let mut world = MafgWorld::new();
        let mut view = View::new();
        answer_handler(&mut world, &mut view, Answer::Yes).unwrap();
        assert!(view.contains("That's not a valid action!"));
    }

    #[test]
    fn talking_opens_the_scene_and_starts_the_quest() {
        let mut world = at_the_miner();
        let mut view = View::new();
        talk_to_handler(&mut world, &mut view, "miner").unwrap();
        assert!(world.dialogue.is_some());
        assert_eq!(
            world.quest_state(Quest::MeetTheMiners),
            QuestState::InProgress
        );
        assert!(view.contains("1. Ask where you are."));
    }

    #[test]
    fn one_shot_choices_disappear_after_picking() {
        let mut world = at_the_miner();
        let mut view = View::new();
        talk_to_handler(&mut world, &mut view, "miner").unwrap();
        choice_handler(&mut world, &mut view, 1).unwrap();
        let state = world.dialogue.as_ref().unwrap();
        assert!(state.choices_taken.contains(&1));
        assert_eq!(state.remaining().len(), 2);
    }

    #[test]
    fn the_blocky_question_pays_out_coins() {
        let mut world = at_the_miner();
        let mut view = View::new();
        talk_to_handler(&mut world, &mut view, "miner").unwrap();
        choice_handler(&mut world, &mut view, 2).unwrap();
        assert_eq!(world.inventory[&Item::Coin], MINER_COIN_TIP);
    }

    #[test]
    fn the_terminal_choice_ends_the_scene() {
        let mut world = at_the_miner();
        let mut view = View::new();
        talk_to_handler(&mut world, &mut view, "miner").unwrap();
        choice_handler(&mut world, &mut view, 3).unwrap();
        assert!(world.dialogue.is_none());
        assert_eq!(
            world.quest_state(Quest::MeetTheMiners),
            QuestState::Complete
        );
    }

    #[test]
    fn invalid_picks_reoffer_the_choices() {
        let mut world = at_the_miner();
        let mut view = View::new();
        talk_to_handler(&mut world, &mut view, "miner").unwrap();
        choice_handler(&mut world, &mut view, 9).unwrap();
        assert!(world.dialogue.is_some());
        assert!(view.contains("That's not one of the choices."));
    }
}
