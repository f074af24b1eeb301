//! Scene switching around the engine.
//!
//! The application has one active scene at a time. `SceneHost` owns the
//! engine, turns per-frame input into engine calls, and moves to the
//! result scene when the engine signals that the match has ended.
//! Drawing is left to whoever reads `scene()` and `engine()`.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::rules::{BattleEngine, MatchEnd};

/// The active screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Scene {
    /// Waiting for the player to start.
    Title,
    /// A match is in progress.
    Game,
    /// Showing how the last match ended.
    Result(MatchEnd),
}

/// Input for one frame, already mapped from the device.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShellInput {
    /// Start / continue key.
    Confirm,
    /// Human chose this hand index.
    SelectCard(usize),
}

/// Owns the engine and the active scene.
#[derive(Debug)]
pub struct SceneHost {
    engine: BattleEngine,
    scene: Scene,
}

impl SceneHost {
    /// Start on the title scene.
    #[must_use]
    pub fn new(engine: BattleEngine) -> Self {
        Self {
            engine,
            scene: Scene::Title,
        }
    }

    /// Active scene.
    #[must_use]
    pub fn scene(&self) -> Scene {
        self.scene
    }

    /// The engine, for HUD reads.
    #[must_use]
    pub fn engine(&self) -> &BattleEngine {
        &self.engine
    }

    /// Run one frame.
    pub fn update(&mut self, input: Option<ShellInput>) {
        self.scene = match self.scene {
            Scene::Title => match input {
                Some(ShellInput::Confirm) => Scene::Game,
                _ => Scene::Title,
            },
            Scene::Game => self.update_game(input),
            Scene::Result(end) => match input {
                Some(ShellInput::Confirm) => {
                    self.engine.setup();
                    Scene::Game
                }
                _ => Scene::Result(end),
            },
        };
    }

    fn update_game(&mut self, input: Option<ShellInput>) -> Scene {
        if let Some(ShellInput::SelectCard(index)) = input {
            let human = self.engine.config().human_player;
            self.engine.submit_selection(human, index);
        }
        self.engine.advance();

        match self.engine.take_match_end() {
            Some(end) => {
                info!(outcome = ?end.outcome, turn = end.turn, "switching to result scene");
                Scene::Result(end)
            }
            None => Scene::Game,
        }
    }
}
