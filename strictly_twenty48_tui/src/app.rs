//! Application state and logic.
//!
//! The app owns the scene, the engine state, and the random source it
//! injects into the engine. It holds no rule logic: every key event maps
//! onto the engine's move/spawn/terminal-check cycle.

use crossterm::event::KeyCode;
use rand::SeedableRng;
use rand::rngs::StdRng;
use strictly_twenty48::{Direction, Game};
use tracing::debug;

use crate::scene::Scene;

/// Main application state.
pub struct App {
    scene: Scene,
    game: Option<Game>,
    best_score: u32,
    rng: StdRng,
}

impl App {
    /// Creates the application on the menu scene.
    ///
    /// The game itself is created lazily when a round starts.
    pub fn new() -> Self {
        Self {
            scene: Scene::Menu,
            game: None,
            best_score: 0,
            rng: StdRng::from_entropy(),
        }
    }

    /// Current scene.
    pub fn scene(&self) -> Scene {
        self.scene
    }

    /// Current game, if one is running or just ended.
    pub fn game(&self) -> Option<&Game> {
        self.game.as_ref()
    }

    /// Best score reached this session.
    pub fn best_score(&self) -> u32 {
        self.best_score
    }

    /// Routes a key press to the active scene.
    pub fn handle_key(&mut self, code: KeyCode) {
        match self.scene {
            Scene::Menu => {
                if code == KeyCode::Enter {
                    self.start_game();
                }
            }
            Scene::Play => self.handle_play_key(code),
            Scene::GameOver => match code {
                KeyCode::Char('r') => self.start_game(),
                KeyCode::Char('m') => self.to_menu(),
                _ => {}
            },
        }
    }

    fn start_game(&mut self) {
        debug!("starting new game");
        self.game = Some(Game::new(&mut self.rng));
        self.scene = Scene::Play;
    }

    fn to_menu(&mut self) {
        self.game = None;
        self.scene = Scene::Menu;
    }

    fn handle_play_key(&mut self, code: KeyCode) {
        // Abandon the round at any time; an abandoned game records no best.
        if code == KeyCode::Char('m') {
            self.to_menu();
            return;
        }

        let direction = match code {
            KeyCode::Left => Direction::Left,
            KeyCode::Right => Direction::Right,
            KeyCode::Up => Direction::Up,
            KeyCode::Down => Direction::Down,
            _ => return,
        };

        let Some(game) = self.game.as_mut() else {
            return;
        };

        let outcome = game.apply_move(direction);
        if outcome.moved {
            // The board changed; spawn a new tile to keep the game going.
            game.spawn_tile(&mut self.rng);
        }
        debug!(%outcome, "handled move key");

        if !game.can_move() {
            self.best_score = self.best_score.max(game.score());
            self.scene = Scene::GameOver;
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
