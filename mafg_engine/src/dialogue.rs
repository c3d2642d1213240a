//! Minimal branching-choice dialogue scenes.
//!
//! A scene prints fixed text and offers numbered choices. One-shot choices
//! are consumed into `choices_taken`; the terminal choice is always
//! available, ends the scene, and advances the plot. The handler re-offers
//! whatever remains after each non-terminal pick.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::npc::Npc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SceneId {
    MinerIntro,
}

/// Cross-turn dialogue progress: which scene is open and which one-shot
/// choices have already been spent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DialogueState {
    pub npc: Npc,
    pub scene: SceneId,
    pub choices_taken: BTreeSet<usize>,
}

impl DialogueState {
    pub fn new(npc: Npc) -> Self {
        Self {
            npc,
            scene: scene_for(npc),
            choices_taken: BTreeSet::new(),
        }
    }

    /// Choices still on offer, in numbered order.
    pub fn remaining(&self) -> Vec<&'static Choice> {
        choices(self.scene)
            .iter()
            .filter(|choice| !self.choices_taken.contains(&choice.number))
            .collect()
    }
}

pub struct Choice {
    pub number: usize,
    pub text: &'static str,
    pub reply: &'static str,
    pub one_shot: bool,
    pub terminal: bool,
}

pub fn scene_for(npc: Npc) -> SceneId {
    match npc {
        Npc::BlockyMiner => SceneId::MinerIntro,
    }
}

/// Opening line printed when a scene starts.
pub fn opening(scene: SceneId) -> &'static str {
    match scene {
        SceneId::MinerIntro => {
            "The blocky miner sets down a perfectly square pickaxe and looks you over."
        }
    }
}

pub fn choices(scene: SceneId) -> &'static [Choice] {
    match scene {
        SceneId::MinerIntro => &[
            Choice {
                number: 1,
                text: "Ask where you are.",
                reply: "\"The mines, friend. Deepest diggings this side of the mountains.\"",
                one_shot: true,
                terminal: false,
            },
            Choice {
                number: 2,
                text: "Ask why everything looks so blocky.",
                reply: "\"Blocky? Huh. You get used to it.\" He flips you a few square coins for your trouble.",
                one_shot: true,
                terminal: false,
            },
            Choice {
                number: 3,
                text: "Say goodbye.",
                reply: "\"Come back any time. The carts always need pushing.\"",
                one_shot: false,
                terminal: true,
            },
        ],
    }
}
