#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]

pub const MAFG_VERSION: &str = env!("CARGO_PKG_VERSION");

// Core modules
pub mod command;
pub mod dialogue;
pub mod item;
pub mod narrative;
pub mod npc;
pub mod repl;
pub mod save;
pub mod style;
pub mod view;
pub mod vocab;
pub mod world;

// Re-exports for convenience
pub use command::{Command, Prompter, classify};
pub use item::{Item, Lock, Object};
pub use npc::Npc;
pub use repl::run_repl;
pub use view::{View, ViewItem};
pub use world::{Direction, Location, MafgWorld};
