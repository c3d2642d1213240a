//! REPL and command handling.
//!
//! The game runs in a read-eval-print loop. Each turn classifies one input
//! line into a [`Command`], dispatches it to exactly one handler, and then
//! performs the pending-question bookkeeping: an unanswered question
//! expires after one turn, and lingering somewhere with a standing
//! question re-arms it.

mod input;
pub mod item;
pub mod movement;
pub mod npc;
pub mod system;

pub use item::*;
use log::info;
pub use movement::*;
pub use npc::*;
pub use system::*;

use anyhow::Result;

use crate::command::{Command, Prompter, classify};
use crate::view::{View, ViewItem};
use crate::world::MafgWorld;

use input::{InputEvent, InputManager};

/// Run the main read-eval-print loop until stdin closes.
///
/// # Errors
/// Propagates handler failures, such as a save serialization bug.
pub fn run_repl(world: &mut MafgWorld) -> Result<()> {
    let mut view = View::new();
    let mut input_manager = InputManager::new();

    describe_location(world, &mut view);
    view.flush(world.settings.paratype);

    loop {
        let prompt = format!("[Turn: {}]> ", world.turn_count + 1);
        let line = match input_manager.read_line(&prompt) {
            Ok(InputEvent::Line(line)) => line,
            Ok(InputEvent::Eof) => {
                println!("\nGoodbye.");
                break;
            }
            Ok(InputEvent::Interrupted) => {
                view.push(ViewItem::System("Command canceled.".to_string()));
                view.flush(world.settings.paratype);
                continue;
            }
            Err(err) => {
                view.error(format!("Failed to read input: {err}. Try again."));
                view.flush(world.settings.paratype);
                continue;
            }
        };

        turn(world, &mut view, &mut input_manager, &line)?;
        view.flush(world.settings.paratype);
    }
    Ok(())
}

/// Process one full turn: classify, dispatch, and do the pending-question
/// bookkeeping.
///
/// # Errors
/// Propagates handler failures.
pub fn turn(
    world: &mut MafgWorld,
    view: &mut View,
    prompter: &mut dyn Prompter,
    line: &str,
) -> Result<()> {
    world.turn_count += 1;
    info!("================> BEGIN TURN {} <================", world.turn_count);

    let pending_before = world.pending_question;
    match classify(line, world, prompter) {
        Ok(command) => dispatch(world, view, command)?,
        Err(err) => view.error(err.to_string()),
    }

    // an unanswered question expires; a handler that set or renewed one
    // this turn keeps it
    if pending_before.is_some() && world.pending_question == pending_before {
        world.pending_question = None;
    }
    // linger somewhere with a standing question and it gets asked (again)
    if world.pending_question.is_none() && world.dialogue.is_none() {
        if let Some((question, text)) = world.standing_question() {
            world.pending_question = Some(question);
            view.push(ViewItem::Question(text.to_string()));
        }
    }
    Ok(())
}

/// Route a classified command to its single handler. An open dialogue
/// scene claims every command except a numbered pick or a `leave`, which
/// ends the conversation.
///
/// # Errors
/// Propagates handler failures.
pub fn dispatch(world: &mut MafgWorld, view: &mut View, command: Command) -> Result<()> {
    if world.dialogue.is_some() && !matches!(command, Command::Choice(_)) {
        if matches!(command, Command::Leave(_)) {
            world.dialogue = None;
            view.line("You end the conversation.");
            return Ok(());
        }
        reoffer_handler(world, view);
        return Ok(());
    }
    match command {
        Command::MoveTo(dir) => move_handler(world, view, dir)?,
        Command::Enter { target, floor } => enter_handler(world, view, &target, floor)?,
        Command::Leave(target) => leave_handler(world, view, &target)?,
        Command::GoTo { target, floor, specific } => {
            go_to_handler(world, view, &target, floor, specific)?;
        }
        Command::GoBack => go_back_handler(world, view)?,
        Command::Take(target) => take_handler(world, view, &target)?,
        Command::Examine(target) => examine_handler(world, view, &target)?,
        Command::UseOn { tool, target } => use_on_handler(world, view, &tool, &target)?,
        Command::Unlock(target) => unlock_handler(world, view, &target)?,
        Command::Fight(target) => fight_handler(world, view, &target)?,
        Command::TalkTo(target) => talk_to_handler(world, view, &target)?,
        Command::Answer(answer) => answer_handler(world, view, answer)?,
        Command::Choice(number) => choice_handler(world, view, number)?,
        Command::Save => save_handler(world, view)?,
        Command::Load(blob) => load_handler(world, view, &blob)?,
        Command::Teleport(target) => teleport_handler(world, view, &target)?,
        Command::PrintDescription => print_description_handler(world, view)?,
        Command::Inventory => inventory_handler(world, view)?,
        Command::Places => places_handler(world, view)?,
        Command::Quests => quests_handler(world, view)?,
        Command::Commands => commands_handler(view)?,
        Command::Settings => settings_handler(world, view)?,
        Command::SetParatype(value) => set_paratype_handler(world, view, value)?,
        Command::SetDeveloper(on) => set_developer_handler(world, view, on)?,
        Command::Unknown => view.error("That's not a valid action!"),
    }
    Ok(())
}
