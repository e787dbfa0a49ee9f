//! Scene rendering.

mod board;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
};
use strictly_twenty48::Game;

use crate::app::App;
use crate::scene::Scene;

use board::center_rect;

/// Draws the current scene.
pub fn draw(f: &mut Frame, app: &App) {
    match app.scene() {
        Scene::Menu => draw_menu(f, app.best_score()),
        Scene::Play => {
            if let Some(game) = app.game() {
                draw_play(f, game, app.best_score());
            }
        }
        Scene::GameOver => {
            if let Some(game) = app.game() {
                draw_play(f, game, app.best_score());
                draw_game_over(f, game.score());
            }
        }
    }
}

fn draw_menu(f: &mut Frame, best_score: u32) {
    let area = center_rect(f.area(), 30, 7);
    let lines = vec![
        Line::styled(
            "2048",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Line::raw(""),
        Line::raw(format!("Best Score: {best_score}")),
        Line::raw(""),
        Line::raw("Press Enter to Play!"),
    ];
    let menu = Paragraph::new(lines).alignment(Alignment::Center);
    f.render_widget(menu, area);
}

fn draw_play(f: &mut Frame, game: &Game, best_score: u32) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(0)])
        .split(f.area());

    draw_hud(f, chunks[0], game.score(), best_score);
    board::render_board(f, chunks[1], game.grid());
}

/// Heads-up display: SCORE and BEST widgets plus the menu hint.
fn draw_hud(f: &mut Frame, area: Rect, score: u32, best: u32) {
    let widgets = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(14),
            Constraint::Length(14),
            Constraint::Min(0),
            Constraint::Length(14),
        ])
        .split(area);

    draw_hud_widget(f, widgets[0], "SCORE", &score.to_string());
    draw_hud_widget(f, widgets[1], "BEST", &best.to_string());
    draw_hud_widget(f, widgets[3], "MENU", "m");
}

fn draw_hud_widget(f: &mut Frame, area: Rect, title: &str, value: &str) {
    let widget = Paragraph::new(value.to_string())
        .alignment(Alignment::Center)
        .style(Style::default().add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(widget, area);
}

/// Overlays the game-over message on top of the final board.
fn draw_game_over(f: &mut Frame, score: u32) {
    let area = center_rect(f.area(), 30, 7);
    f.render_widget(Clear, area);

    let lines = vec![
        Line::styled(
            "Game Over",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Line::raw(""),
        Line::raw(format!("Score: {score}")),
        Line::raw(""),
        Line::raw("R: Retry    M: Menu"),
    ];
    let overlay = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(overlay, area);
}
