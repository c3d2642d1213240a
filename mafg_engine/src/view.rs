//! View module.
//!
//! Rather than printing from each handler, we aggregate everything a turn
//! produces and display it once at the end of the turn. This keeps the
//! handlers pure with respect to the terminal and lets tests assert on
//! what a turn said without capturing stdout.

use log::info;
use textwrap::fill;
use variantly::Variantly;

use crate::style::GameStyle;

/// Wrap width used when `paratype` is 1.
const WRAP_WIDTH: usize = 70;

/// One unit of player-visible output produced during a turn.
#[derive(Debug, Clone, PartialEq, Eq, Variantly)]
pub enum ViewItem {
    /// Region banner, e.g. "GRASSY FIELD".
    Heading(String),
    /// Location or object prose.
    Description(String),
    /// A plain result line ("You take the key.").
    Line(String),
    /// A question awaiting the player's next line.
    Question(String),
    /// Spoken NPC dialogue or a numbered choice.
    Speech(String),
    /// Input-validation or handler-failure message.
    Error(String),
    /// Save strings, settings output, other engine-facing text.
    System(String),
    /// A titled list (inventory, places, quests, commands).
    List { title: String, entries: Vec<String> },
}

/// Aggregates the output of one pass through the REPL.
#[derive(Debug, Clone, Default)]
pub struct View {
    pub items: Vec<ViewItem>,
}

impl View {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, item: ViewItem) {
        self.items.push(item);
    }

    pub fn line(&mut self, text: impl Into<String>) {
        self.push(ViewItem::Line(text.into()));
    }

    pub fn error(&mut self, text: impl Into<String>) {
        self.push(ViewItem::Error(text.into()));
    }

    /// Raw text of every item, in push order. Test hook.
    pub fn texts(&self) -> Vec<String> {
        self.items
            .iter()
            .map(|item| match item {
                ViewItem::Heading(t)
                | ViewItem::Description(t)
                | ViewItem::Line(t)
                | ViewItem::Question(t)
                | ViewItem::Speech(t)
                | ViewItem::Error(t)
                | ViewItem::System(t) => t.clone(),
                ViewItem::List { title, entries } => {
                    let mut joined = title.clone();
                    for entry in entries {
                        joined.push('\n');
                        joined.push_str(entry);
                    }
                    joined
                }
            })
            .collect()
    }

    /// True if any item's text contains `needle`. Test hook.
    pub fn contains(&self, needle: &str) -> bool {
        self.texts().iter().any(|text| text.contains(needle))
    }

    /// Compose and display everything from the current turn, then clear.
    ///
    /// `paratype` 1 wraps prose at a fixed width; 2 prints paragraphs
    /// whole and lets the terminal do the wrapping.
    pub fn flush(&mut self, paratype: u8) {
        for item in &self.items {
            match item {
                ViewItem::Heading(text) => println!("\n{}", text.heading_style()),
                ViewItem::Description(text) => {
                    let prose = if paratype == 1 {
                        fill(text, WRAP_WIDTH)
                    } else {
                        text.clone()
                    };
                    // two-space indent marks prose apart from results
                    for line in prose.lines() {
                        println!("  {}", line.description_style());
                    }
                }
                ViewItem::Line(text) => println!("{text}"),
                ViewItem::Question(text) => println!("{}", text.question_style()),
                ViewItem::Speech(text) => println!("{}", text.npc_style()),
                ViewItem::Error(text) => println!("{}", text.error_style()),
                ViewItem::System(text) => println!("{}", text.system_style()),
                ViewItem::List { title, entries } => {
                    println!("{}", title.subheading_style());
                    for entry in entries {
                        println!("  {}", entry.item_style());
                    }
                }
            }
        }
        info!("flushed {} view items", self.items.len());
        self.items.clear();
        println!();
    }
}
