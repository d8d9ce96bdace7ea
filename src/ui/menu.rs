use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph};

use crate::game::{GameMode, GameState};
use crate::renderer::centered_rect;
use crate::theme::Palette;
use crate::ui::hud::HudInfo;

const POPUP_WIDTH: u16 = 34;

/// Draws the start screen as a centered popup.
pub fn render_start_menu(frame: &mut Frame<'_>, area: Rect, mode: GameMode, info: &HudInfo) {
    let palette = info.theme.palette();
    let controls = match mode {
        GameMode::Single => Line::from("Arrows/WASD steer"),
        GameMode::Multi => Line::from("P1: WASD   P2: arrows"),
    };

    let lines = vec![
        Line::from("SNAKE").style(
            Style::new()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        Line::from(format!("Best: {}", info.best_score)),
        Line::from(""),
        controls,
        Line::from("[Enter] Start"),
        Line::from(format!("[T] Theme: {}", palette.name)),
        Line::from("[Q] Quit"),
    ];

    render_popup(frame, area, " start ", lines, palette);
}

/// Draws the pause screen as a centered popup.
pub fn render_pause_menu(frame: &mut Frame<'_>, area: Rect, palette: &Palette) {
    let lines = vec![
        Line::from("PAUSED"),
        Line::from(""),
        Line::from("[Space] Resume"),
        Line::from("[R] Restart  [Q] Quit"),
    ];

    render_popup(frame, area, " pause ", lines, palette);
}

/// Draws the game-over screen as a centered popup.
pub fn render_game_over_menu(frame: &mut Frame<'_>, area: Rect, state: &GameState, info: &HudInfo) {
    let palette = info.theme.palette();
    let round_best = state.best_agent_score();
    let is_new_best = round_best > info.previous_best;

    let mut lines = vec![Line::from("GAME OVER"), Line::from("")];

    if let Some(cause) = state.collision_report().primary_cause() {
        lines.push(Line::from(format!("Cause: {cause}")));
    }

    match state.mode() {
        GameMode::Single => lines.push(Line::from(format!("Score: {round_best}"))),
        GameMode::Multi => lines.push(Line::from(match state.leader() {
            Some(index) => format!("Player {} wins", index + 1),
            None => "Draw".to_owned(),
        })),
    }

    lines.push(if is_new_best {
        Line::from("New best score!").style(Style::new().fg(palette.accent))
    } else {
        Line::from(format!("Best: {}", info.best_score))
    });
    lines.push(Line::from(""));
    lines.push(Line::from("[R] Play again  [Q] Quit"));

    render_popup(frame, area, " game over ", lines, palette);
}

fn render_popup(
    frame: &mut Frame<'_>,
    area: Rect,
    title: &'static str,
    lines: Vec<Line<'static>>,
    palette: &Palette,
) {
    let height = u16::try_from(lines.len()).unwrap_or(u16::MAX).saturating_add(2);
    let popup = centered_rect(area, POPUP_WIDTH, height);
    frame.render_widget(Clear, popup);

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .style(Style::new().fg(palette.text).bg(palette.play_bg))
            .block(
                Block::bordered()
                    .title(title)
                    .border_style(Style::new().fg(palette.border_fg)),
            ),
        popup,
    );
}
