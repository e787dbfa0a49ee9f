//! Scene switching.

/// Which screen the application is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scene {
    /// Title screen with the session best score.
    #[default]
    Menu,
    /// An active game.
    Play,
    /// Last board shown under a game-over overlay.
    GameOver,
}
