//! Vocabulary tables for the command classifier.
//!
//! Static, pre-lowercased surface forms: directional tokens, verb phrases,
//! and noun-phrase synonym sets for places and objects. The classifier in
//! [`crate::command`] consumes these; nothing here mutates state.

use lazy_static::lazy_static;

use crate::world::Direction;

/// A verb concept the classifier can recognize at the front of a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verb {
    Load,
    Examine,
    Teleport,
    Enter,
    Leave,
    GoTo,
    Take,
    Fight,
    Use,
    Unlock,
    PutOut,
    TalkTo,
}

impl Verb {
    /// Label used when prompting for a missing argument ("What do you want to X?").
    pub fn label(self) -> &'static str {
        match self {
            Verb::Load => "load",
            Verb::Examine => "examine",
            Verb::Teleport => "teleport to",
            Verb::Enter => "enter",
            Verb::Leave => "exit",
            Verb::GoTo => "go to",
            Verb::Take => "take",
            Verb::Fight => "fight",
            Verb::Use => "use",
            Verb::Unlock => "unlock",
            Verb::PutOut => "put out",
            Verb::TalkTo => "talk to",
        }
    }
}

/// Surface phrases for each verb concept. Order within a set is irrelevant;
/// matching is always longest-phrase-first.
pub const VERB_PHRASES: &[(Verb, &[&str])] = &[
    (Verb::Load, &["load"]),
    (Verb::Examine, &["examine", "inspect", "describe", "check", "x"]),
    (Verb::Teleport, &["teleport"]),
    (Verb::Enter, &["go inside", "go in", "enter"]),
    (Verb::Leave, &["exit", "leave"]),
    (Verb::GoTo, &["go to", "goto"]),
    (Verb::Take, &["take", "grab", "pick up"]),
    (Verb::Fight, &["fight", "attack"]),
    (Verb::Use, &["use"]),
    (Verb::Unlock, &["unlock"]),
    (Verb::PutOut, &["put out"]),
    (Verb::TalkTo, &["talk to", "talk with", "speak to", "speak with"]),
];

pub const NORTH_WORDS: &[&str] = &["n", "north"];
pub const EAST_WORDS: &[&str] = &["e", "east"];
pub const SOUTH_WORDS: &[&str] = &["s", "south"];
pub const WEST_WORDS: &[&str] = &["w", "west"];
pub const NORTHEAST_WORDS: &[&str] = &["ne", "n e", "n-e", "northeast", "north east", "north-east"];
pub const SOUTHEAST_WORDS: &[&str] = &["se", "s e", "s-e", "southeast", "south east", "south-east"];
pub const SOUTHWEST_WORDS: &[&str] = &["sw", "s w", "s-w", "southwest", "south west", "south-west"];
pub const NORTHWEST_WORDS: &[&str] = &["nw", "n w", "n-w", "northwest", "north west", "north-west"];
pub const LEFT_WORDS: &[&str] = &["l", "left", "go left"];
pub const RIGHT_WORDS: &[&str] = &["r", "right", "go right"];

/// Resolve a whole input line against the directional token sets.
pub fn direction_for(input: &str) -> Option<Direction> {
    let sets: &[(&[&str], Direction)] = &[
        (NORTH_WORDS, Direction::North),
        (EAST_WORDS, Direction::East),
        (SOUTH_WORDS, Direction::South),
        (WEST_WORDS, Direction::West),
        (NORTHEAST_WORDS, Direction::NorthEast),
        (SOUTHEAST_WORDS, Direction::SouthEast),
        (SOUTHWEST_WORDS, Direction::SouthWest),
        (NORTHWEST_WORDS, Direction::NorthWest),
        (LEFT_WORDS, Direction::Left),
        (RIGHT_WORDS, Direction::Right),
    ];
    sets.iter()
        .find(|(words, _)| words.contains(&input))
        .map(|(_, dir)| *dir)
}

lazy_static! {
    pub static ref CABIN_WORDS: Vec<&'static str> =
        vec!["cabin", "log cabin", "creepy log cabin", "building"];
    pub static ref BATHROOM_WORDS: Vec<&'static str> =
        vec!["bathroom", "bath room", "washroom", "wash room"];
    pub static ref BEDROOM_WORDS: Vec<&'static str> = vec!["bedroom", "bed room"];
    pub static ref LIVING_ROOM_WORDS: Vec<&'static str> = vec![
        "cabin living room",
        "living room",
        "cabin main room",
        "main room",
        "cabin lobby",
        "lobby",
    ];
    pub static ref GRASSY_FIELD_WORDS: Vec<&'static str> =
        vec!["grassy field", "field", "grass field", "meadow"];
    pub static ref FOREST_WORDS: Vec<&'static str> = vec!["forest", "woods"];
    pub static ref MINESHAFT_WORDS: Vec<&'static str> =
        vec!["mineshaft", "mineshaft entrance", "mine shaft", "mine"];
    pub static ref CAVE_WORDS: Vec<&'static str> = vec!["cave", "tunnel", "cavern"];
    // "second floor" is a floor qualifier, not a place name
    pub static ref UPSTAIRS_WORDS: Vec<&'static str> = vec!["upstairs", "landing"];
}

/// Floor-number qualifiers stripped from go-to / enter arguments.
pub const FLOOR_QUALIFIERS: &[(&str, u8)] = &[
    ("1st floor", 1),
    ("first floor", 1),
    ("2nd floor", 2),
    ("second floor", 2),
    ("3rd floor", 3),
    ("third floor", 3),
];

pub const YES_WORDS: &[&str] = &["yes", "y", "yeah", "yep"];
pub const NO_WORDS: &[&str] = &["no", "nope"];

/// True if `phrase` occurs at byte offset `at` in `input`, followed by a
/// space or end-of-string. Substrings inside other words never match.
pub fn phrase_at(input: &str, phrase: &str, at: usize) -> bool {
    input[at..].starts_with(phrase)
        && matches!(input.as_bytes().get(at + phrase.len()), None | Some(b' '))
}

/// Longest phrase from `phrases` matching at position 0 with a boundary.
pub fn match_prefix<'a>(input: &str, phrases: &[&'a str]) -> Option<&'a str> {
    let mut best: Option<&'a str> = None;
    for phrase in phrases {
        if phrase_at(input, phrase, 0) && best.is_none_or(|b| phrase.len() > b.len()) {
            best = Some(phrase);
        }
    }
    best
}

/// True if `phrase` occurs anywhere in `input` on whitespace boundaries.
pub fn contains_phrase(input: &str, phrase: &str) -> bool {
    for (at, _) in input.match_indices(phrase) {
        let before_ok = at == 0 || input.as_bytes()[at - 1] == b' ';
        let after_ok = matches!(input.as_bytes().get(at + phrase.len()), None | Some(b' '));
        if before_ok && after_ok {
            return true;
        }
    }
    false
}
