use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Paragraph};

use crate::config::{CELL_WIDTH, GLYPH_EMPTY, GLYPH_FOOD, GLYPH_HEAD, GLYPH_SEGMENT, GRID_SIZE};
use crate::game::{GameMode, GameState, GameStatus};
use crate::geometry::{Position, cells};
use crate::theme::Palette;
use crate::ui::hud::{HUD_HEIGHT, HudInfo, render_hud};
use crate::ui::menu::{render_game_over_menu, render_pause_menu, render_start_menu};

/// What occupies one grid cell, as the painter sees it.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum CellKind {
    Empty,
    Food,
    Head(usize),
    Body(usize),
}

/// Classifies `position` for painting. Snakes are drawn over food.
#[must_use]
pub fn cell_kind(state: &GameState, position: Position) -> CellKind {
    for (index, agent) in state.agents().iter().enumerate() {
        if agent.snake.head() == position {
            return CellKind::Head(index);
        }
        if agent.snake.occupies(position) {
            return CellKind::Body(index);
        }
    }

    if state.food() == Some(position) {
        CellKind::Food
    } else {
        CellKind::Empty
    }
}

/// Renders the full game frame from an immutable snapshot.
pub fn render(frame: &mut Frame<'_>, state: &GameState, info: &HudInfo) {
    let palette = info.theme.palette();
    let area = frame.area();

    let board_width = grid_extent() * CELL_WIDTH + 2;
    let board_height = grid_extent() + 2;
    let outer = centered_rect(area, board_width, board_height + HUD_HEIGHT);
    let board_area = Rect {
        height: outer.height.saturating_sub(HUD_HEIGHT),
        ..outer
    };
    let hud_area = Rect {
        y: board_area.bottom(),
        height: outer.height.saturating_sub(board_area.height),
        ..outer
    };

    frame.render_widget(
        Paragraph::new("").style(Style::new().bg(palette.play_bg)),
        area,
    );

    let block = Block::bordered()
        .title(format!(" snake · {} ", mode_label(state.mode())))
        .border_style(Style::new().fg(palette.border_fg).bg(palette.play_bg));
    let inner = block.inner(board_area);
    frame.render_widget(block, board_area);

    render_cells(frame, inner, state, palette);
    render_hud(frame, hud_area, state, info);

    match state.status() {
        GameStatus::Ready => render_start_menu(frame, board_area, state.mode(), info),
        GameStatus::Paused => render_pause_menu(frame, board_area, palette),
        GameStatus::Over => render_game_over_menu(frame, board_area, state, info),
        GameStatus::Playing => {}
    }
}

fn render_cells(frame: &mut Frame<'_>, inner: Rect, state: &GameState, palette: &Palette) {
    let buffer = frame.buffer_mut();

    for position in cells() {
        let Some((x, y)) = logical_to_terminal(inner, position) else {
            continue;
        };

        let base = Style::new().bg(palette.play_bg);
        let (glyph, style) = match cell_kind(state, position) {
            CellKind::Empty => (GLYPH_EMPTY, base.fg(palette.grid_dot)),
            CellKind::Food => (GLYPH_FOOD, base.fg(palette.food).add_modifier(Modifier::BOLD)),
            CellKind::Head(agent) => (GLYPH_HEAD, base.fg(palette.head_color(agent))),
            CellKind::Body(agent) => (GLYPH_SEGMENT, base.fg(palette.body_color(agent))),
        };
        buffer.set_string(x, y, glyph, style);
    }
}

fn mode_label(mode: GameMode) -> &'static str {
    match mode {
        GameMode::Single => "single player",
        GameMode::Multi => "two players",
    }
}

fn grid_extent() -> u16 {
    u16::try_from(GRID_SIZE).unwrap_or(u16::MAX)
}

fn logical_to_terminal(inner: Rect, position: Position) -> Option<(u16, u16)> {
    if !position.is_within_grid() {
        return None;
    }

    let x_offset = u16::try_from(position.x).ok()?.saturating_mul(CELL_WIDTH);
    let y_offset = u16::try_from(position.y).ok()?;

    let x = inner.x.saturating_add(x_offset);
    let y = inner.y.saturating_add(y_offset);
    if x.saturating_add(CELL_WIDTH) > inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}

/// Returns a `width`×`height` rect centred in `area`, shrunk to fit.
#[must_use]
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
