//! Command classification.
//!
//! Turns one raw line of player input into a normalized [`Command`],
//! resolving it against the vocabulary tables and the current world state
//! (an open dialogue scene or a pending yes/no question changes what a
//! line means). Classification may ask for at most one extra line of
//! input, via the supplied [`Prompter`], when a verb is missing its
//! argument or an answer is ambiguous. There is never a re-prompt loop.

use log::info;
use thiserror::Error;
use variantly::Variantly;

use crate::vocab::{self, Verb};
use crate::world::{Direction, MafgWorld};

/// A yes/no answer to a pending question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    Yes,
    No,
}

/// Normalized command categories produced by the classifier.
#[derive(Debug, Clone, PartialEq, Variantly)]
pub enum Command {
    MoveTo(Direction),
    Enter { target: String, floor: Option<u8> },
    Leave(String),
    GoTo { target: String, floor: Option<u8>, specific: bool },
    GoBack,
    Take(String),
    Examine(String),
    UseOn { tool: String, target: String },
    Unlock(String),
    Fight(String),
    TalkTo(String),
    Answer(Answer),
    Choice(usize),
    Save,
    Load(String),
    Teleport(String),
    PrintDescription,
    Inventory,
    Places,
    Quests,
    Commands,
    Settings,
    SetParatype(u8),
    SetDeveloper(bool),
    Unknown,
}

/// Input-validation failures that abort the turn before any handler runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ClassifyError {
    #[error("You typed too many actions! One at a time, please.")]
    TooManyActions,
    #[error("You typed too many floors!")]
    TooManyFloors,
}

/// Source of the single optional follow-up line during classification.
pub trait Prompter {
    /// Ask one question and read one line; `None` means no input available.
    fn ask(&mut self, prompt: &str) -> Option<String>;
}

/// Classify one raw input line against the current world state.
///
/// # Errors
/// Returns a [`ClassifyError`] when the line names more than one action or
/// more than one floor qualifier; the turn ends with no handler run.
pub fn classify(
    raw: &str,
    world: &MafgWorld,
    prompter: &mut dyn Prompter,
) -> Result<Command, ClassifyError> {
    let input = raw.trim().to_lowercase();
    if input.is_empty() {
        return Ok(Command::Unknown);
    }

    // An open dialogue scene claims bare numbers as choice picks.
    if world.dialogue.is_some() {
        if let Ok(number) = input.parse::<usize>() {
            return Ok(Command::Choice(number));
        }
    }

    // A pending yes/no question claims the tolerant answer synonyms,
    // including the ambiguous "n" (no? north?).
    if world.pending_question.is_some() {
        if input == "n" {
            return Ok(clarify_no_or_north(prompter));
        }
        if vocab::YES_WORDS.contains(&input.as_str()) {
            return Ok(Command::Answer(Answer::Yes));
        }
        if vocab::NO_WORDS.contains(&input.as_str()) {
            return Ok(Command::Answer(Answer::No));
        }
        // anything else falls through to normal classification
    }

    // Fixed phrases: exact match, immediate classification.
    match input.as_str() {
        "save" => return Ok(Command::Save),
        "go back" | "back" => return Ok(Command::GoBack),
        "go upstairs" => return Ok(Command::MoveTo(Direction::Up)),
        "go downstairs" => return Ok(Command::MoveTo(Direction::Down)),
        "print d" => return Ok(Command::PrintDescription),
        "settings" | "list settings" => return Ok(Command::Settings),
        "list commands" | "commands" | "help" => return Ok(Command::Commands),
        "list places" | "places" => return Ok(Command::Places),
        "list quests" | "quests" => return Ok(Command::Quests),
        "list inventory" | "show inventory" | "open inventory" | "inventory" | "inv" => {
            return Ok(Command::Inventory);
        }
        _ => {}
    }
    if let Some(command) = classify_setting(&input) {
        return Ok(command);
    }

    // Directional tokens.
    if let Some(dir) = vocab::direction_for(&input) {
        return Ok(Command::MoveTo(dir));
    }

    // Verb-phrase scan. `load` short-circuits first: its argument is an
    // opaque save string that must not feed the too-many-actions check.
    if let Some(phrase) = vocab::match_prefix(&input, &["load"]) {
        let arg = input[phrase.len()..].trim().to_string();
        return Ok(Command::Load(arg));
    }
    let found = scan_verbs(&input);
    if found.len() > 1 {
        info!("rejected input with multiple verbs: {found:?}");
        return Err(ClassifyError::TooManyActions);
    }
    let Some(&verb) = found.first() else {
        return Ok(Command::Unknown);
    };
    let phrases = vocab::VERB_PHRASES
        .iter()
        .find(|(v, _)| *v == verb)
        .map(|(_, p)| *p)
        .unwrap_or_default();
    // Verbs only classify when anchored at the front of the line.
    let Some(matched) = vocab::match_prefix(&input, phrases) else {
        return Ok(Command::Unknown);
    };
    let mut arg = input[matched.len()..].trim().to_string();

    // One re-prompt for a missing argument; enter/leave tolerate an empty
    // argument as "the obvious default".
    if arg.is_empty() && !matches!(verb, Verb::Enter | Verb::Leave) {
        if let Some(line) = prompter.ask(&format!("What do you want to {}?", verb.label())) {
            arg = line.trim().to_lowercase();
        }
    }
    if let Some(rest) = arg.strip_prefix("on ") {
        arg = rest.trim().to_string();
    }

    finish(verb, arg, prompter)
}

/// Resolve the ambiguous "n" while a yes/no question is pending.
fn clarify_no_or_north(prompter: &mut dyn Prompter) -> Command {
    let Some(line) = prompter.ask("Did you mean no or north?") else {
        return Command::Unknown;
    };
    let line = line.trim().to_lowercase();
    if vocab::NO_WORDS.contains(&line.as_str()) {
        Command::Answer(Answer::No)
    } else if vocab::YES_WORDS.contains(&line.as_str()) {
        Command::Answer(Answer::Yes)
    } else if vocab::NORTH_WORDS.contains(&line.as_str()) {
        Command::MoveTo(Direction::North)
    } else {
        Command::Unknown
    }
}

/// Parse the `paratype = N` / `developer mode = N` settings surface.
fn classify_setting(input: &str) -> Option<Command> {
    for (key, developer) in [("paratype", false), ("developer mode", true)] {
        if let Some(rest) = input.strip_prefix(key) {
            let value = rest.trim().strip_prefix('=')?.trim();
            let number: u8 = value.parse().ok()?;
            return Some(if developer {
                Command::SetDeveloper(number != 0)
            } else {
                Command::SetParatype(number)
            });
        }
    }
    None
}

/// Distinct verb concepts present anywhere in the input on word
/// boundaries. The single-letter `x` only counts at the front of the
/// line, or every mention of an x-ray would abort the turn.
fn scan_verbs(input: &str) -> Vec<Verb> {
    let mut found = Vec::new();
    for (verb, phrases) in vocab::VERB_PHRASES {
        let hit = phrases.iter().any(|phrase| {
            if *phrase == "x" {
                vocab::phrase_at(input, phrase, 0)
            } else {
                vocab::contains_phrase(input, phrase)
            }
        });
        if hit && !found.contains(verb) {
            found.push(*verb);
        }
    }
    found
}

/// Strip floor-number qualifiers from an argument, returning the floor
/// code and the residual text.
///
/// # Errors
/// More than one floor qualifier in one command is an error.
fn strip_floors(arg: &str) -> Result<(Option<u8>, String), ClassifyError> {
    let mut floor = None;
    let mut residual = arg.to_string();
    let mut hits = 0;
    for (phrase, number) in vocab::FLOOR_QUALIFIERS {
        while vocab::contains_phrase(&residual, phrase) {
            hits += 1;
            if hits > 1 {
                return Err(ClassifyError::TooManyFloors);
            }
            floor = Some(*number);
            residual = residual.replacen(phrase, "", 1);
        }
    }
    let residual = residual.split_whitespace().collect::<Vec<_>>().join(" ");
    Ok((floor, residual))
}

/// Strip a leading specific-location qualifier ("cabin ...") from a
/// go-to argument. Bare "cabin" is a destination, not a qualifier.
fn strip_specific(arg: &str) -> (bool, String) {
    match arg.strip_prefix("cabin ") {
        Some(rest) if !rest.trim().is_empty() => (true, rest.trim().to_string()),
        _ => (false, arg.to_string()),
    }
}

/// Kind-specific argument post-processing and final command construction.
fn finish(
    verb: Verb,
    arg: String,
    prompter: &mut dyn Prompter,
) -> Result<Command, ClassifyError> {
    let command = match verb {
        Verb::Load => Command::Load(arg),
        Verb::Examine => Command::Examine(arg),
        Verb::Teleport => Command::Teleport(arg),
        Verb::Leave => Command::Leave(arg),
        Verb::Take => Command::Take(arg),
        Verb::Fight => Command::Fight(arg),
        Verb::TalkTo => Command::TalkTo(arg),
        Verb::Unlock => Command::Unlock(arg),
        Verb::Enter => {
            let (floor, target) = strip_floors(&arg)?;
            Command::Enter { target, floor }
        }
        Verb::GoTo => {
            let (floor, rest) = strip_floors(&arg)?;
            let (specific, target) = strip_specific(&rest);
            // "go to the west" is movement, not pathing
            if let Some(dir) = vocab::direction_for(&target) {
                Command::MoveTo(dir)
            } else {
                Command::GoTo { target, floor, specific }
            }
        }
        Verb::Use => {
            if let Some((tool, target)) = arg.split_once(" on ") {
                Command::UseOn {
                    tool: tool.trim().to_string(),
                    target: target.trim().to_string(),
                }
            } else {
                let target = prompter
                    .ask(&format!("What do you want to use the {arg} on?"))
                    .map(|line| line.trim().to_lowercase())
                    .unwrap_or_default();
                Command::UseOn { tool: arg, target }
            }
        }
        Verb::PutOut => {
            // "put out [the] fire[place] [with [the] X]"
            let mut rest = arg.as_str();
            for prefix in ["the ", "fireplace", "fire"] {
                rest = rest.strip_prefix(prefix).unwrap_or(rest).trim_start();
            }
            let tool = match rest.strip_prefix("with ") {
                Some(tool) => tool.trim().strip_prefix("the ").unwrap_or(tool.trim()).to_string(),
                None if rest.is_empty() => prompter
                    .ask("What would you like to put the fire out with?")
                    .map(|line| line.trim().to_lowercase())
                    .unwrap_or_default(),
                None => rest.to_string(),
            };
            Command::UseOn {
                tool,
                target: "fire".to_string(),
            }
        }
    };
    Ok(command)
}
