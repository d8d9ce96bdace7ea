use std::time::Duration;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::game::{GameMode, GameState, GameStatus};
use crate::theme::{Palette, ThemeMode};

/// Rows taken by the HUD below the board.
pub const HUD_HEIGHT: u16 = 2;

/// Values shown by the HUD that live outside the game snapshot.
#[derive(Debug, Clone, Copy)]
pub struct HudInfo {
    /// Best score loaded from preferences, updated as rounds end.
    pub best_score: u32,
    /// Best score as it stood when the current round began.
    pub previous_best: u32,
    pub theme: ThemeMode,
    /// Period of the armed tick timer; `None` while stopped.
    pub tick_period: Option<Duration>,
}

/// Renders the score row and the status row into `area`.
pub fn render_hud(frame: &mut Frame<'_>, area: Rect, state: &GameState, info: &HudInfo) {
    let palette = info.theme.palette();
    let [score_row, status_row] =
        Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(area);

    frame.render_widget(
        Paragraph::new(score_line(state, info, palette)).alignment(Alignment::Center),
        score_row,
    );
    frame.render_widget(
        Paragraph::new(status_line(state, info, palette)).alignment(Alignment::Center),
        status_row,
    );
}

fn score_line(state: &GameState, info: &HudInfo, palette: &Palette) -> Line<'static> {
    let value = Style::new().fg(palette.text).add_modifier(Modifier::BOLD);
    let label = Style::new().fg(palette.muted);
    let sep = Span::styled(" │ ", label);

    let mut spans = Vec::new();
    match state.mode() {
        GameMode::Single => {
            if let Some(agent) = state.agent(0) {
                spans.push(Span::styled("Score: ", label));
                spans.push(Span::styled(agent.score.to_string(), value));
                spans.push(sep.clone());
                spans.push(Span::styled("Length: ", label));
                spans.push(Span::styled(agent.snake.len().to_string(), value));
                spans.push(sep.clone());
            }
        }
        GameMode::Multi => {
            for (index, agent) in state.agents().iter().enumerate() {
                if index > 0 {
                    spans.push(Span::raw("  "));
                }
                spans.push(Span::styled(
                    format!("P{}: ", index + 1),
                    Style::new().fg(palette.body_color(index)),
                ));
                spans.push(Span::styled(agent.score.to_string(), value));
            }
            spans.push(sep.clone());
        }
    }

    let best = info.best_score.max(state.best_agent_score());
    let best_style = if best > info.previous_best {
        Style::new().fg(palette.accent).add_modifier(Modifier::BOLD)
    } else {
        value
    };
    spans.push(Span::styled("Best: ", label));
    spans.push(Span::styled(best.to_string(), best_style));

    Line::from(spans)
}

fn status_line(state: &GameState, info: &HudInfo, palette: &Palette) -> Line<'static> {
    let muted = Style::new().fg(palette.muted);
    let text = match state.status() {
        GameStatus::Ready => "Press Enter or any steering key.".to_owned(),
        GameStatus::Paused => "Paused.".to_owned(),
        GameStatus::Over => "Game over. Press R to restart.".to_owned(),
        GameStatus::Playing => match info.tick_period {
            Some(period) => format!("{} ms/tick · [Space] pause", period.as_millis()),
            None => "[Space] pause".to_owned(),
        },
    };

    Line::from(Span::styled(text, muted))
}
