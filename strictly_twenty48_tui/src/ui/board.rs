//! Board rendering.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use strictly_twenty48::{GRID_N, Grid};

const TILE_WIDTH: u16 = 9;
const TILE_HEIGHT: u16 = 3;

/// Renders the tile grid centered in the given area.
pub fn render_board(f: &mut Frame, area: Rect, grid: &Grid) {
    let board_area = center_rect(
        area,
        TILE_WIDTH * GRID_N as u16,
        TILE_HEIGHT * GRID_N as u16,
    );
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(TILE_HEIGHT); GRID_N])
        .split(board_area);

    for (r, row_area) in rows.iter().enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(TILE_WIDTH); GRID_N])
            .split(*row_area);

        for (c, cell_area) in cols.iter().enumerate() {
            render_tile(f, *cell_area, grid.get(r, c));
        }
    }
}

fn render_tile(f: &mut Frame, area: Rect, value: u32) {
    let text = if value == 0 {
        String::new()
    } else {
        value.to_string()
    };

    let tile = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(tile_style(value))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(tile, area);
}

/// Style for a tile value, on the classic 2048 palette.
fn tile_style(value: u32) -> Style {
    let bg = match value {
        0 => Color::Rgb(205, 193, 180),
        2 => Color::Rgb(238, 228, 218),
        4 => Color::Rgb(237, 224, 200),
        8 => Color::Rgb(242, 177, 121),
        16 => Color::Rgb(245, 149, 99),
        32 => Color::Rgb(246, 124, 95),
        64 => Color::Rgb(246, 94, 59),
        128 => Color::Rgb(237, 207, 114),
        256 => Color::Rgb(237, 204, 97),
        512 => Color::Rgb(237, 200, 80),
        1024 => Color::Rgb(237, 197, 63),
        _ => Color::Rgb(237, 194, 46),
    };

    // Low tiles carry dark text; merged tiles switch to white.
    let fg = if value <= 4 {
        Color::Rgb(119, 110, 101)
    } else {
        Color::Rgb(249, 246, 242)
    };

    Style::default()
        .fg(fg)
        .bg(bg)
        .add_modifier(Modifier::BOLD)
}

/// Centers a fixed-size rectangle inside an area.
pub fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Length(area.width.saturating_sub(width) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Length(area.height.saturating_sub(height) / 2),
        ])
        .split(horizontal[1])[1]
}
