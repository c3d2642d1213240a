#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
//! ** Monsters Aliens Fame And Glory **
//! Single-player text adventure

use mafg_engine::{MAFG_VERSION, MafgWorld, run_repl};

use anyhow::Result;
use colored::Colorize;
use log::info;

use std::io::Write;

fn main() -> Result<()> {
    env_logger::init();
    info!("Start: creating MAFG world...");
    let mut world = MafgWorld::new();

    // clear the screen
    print!("\x1B[2J\x1B[H");
    std::io::stdout().flush()?;
    info!("Starting the game!");

    println!(
        "{:^84}",
        "MONSTERS ALIENS FAME AND GLORY"
            .bright_yellow()
            .underline()
    );
    println!("{:^84}", format!("(Beta) {MAFG_VERSION}").dimmed());

    run_repl(&mut world)
}
