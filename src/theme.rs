use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Persisted light/dark flag.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
}

impl ThemeMode {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub fn palette(self) -> &'static Palette {
        match self {
            Self::Light => &PALETTE_LIGHT,
            Self::Dark => &PALETTE_DARK,
        }
    }
}

/// Colors applied to all visual elements.
#[derive(Debug)]
pub struct Palette {
    pub name: &'static str,
    /// Background for empty play-area cells.
    pub play_bg: Color,
    pub grid_dot: Color,
    /// Body colors, one per agent.
    pub snake_body: [Color; 2],
    /// Head colors, one per agent.
    pub snake_head: [Color; 2],
    pub food: Color,
    pub border_fg: Color,
    pub text: Color,
    pub muted: Color,
    pub accent: Color,
}

impl Palette {
    /// Body color for `agent`, cycling when there are more agents than colors.
    #[must_use]
    pub fn body_color(&self, agent: usize) -> Color {
        self.snake_body[agent % self.snake_body.len()]
    }

    #[must_use]
    pub fn head_color(&self, agent: usize) -> Color {
        self.snake_head[agent % self.snake_head.len()]
    }
}

pub static PALETTE_DARK: Palette = Palette {
    name: "Dark",
    play_bg: Color::Black,
    grid_dot: Color::DarkGray,
    snake_body: [Color::Green, Color::Blue],
    snake_head: [Color::LightGreen, Color::LightBlue],
    food: Color::Red,
    border_fg: Color::Gray,
    text: Color::White,
    muted: Color::DarkGray,
    accent: Color::Yellow,
};

pub static PALETTE_LIGHT: Palette = Palette {
    name: "Light",
    play_bg: Color::White,
    grid_dot: Color::Gray,
    snake_body: [Color::Rgb(34, 139, 34), Color::Rgb(30, 90, 200)],
    snake_head: [Color::Rgb(0, 90, 0), Color::Rgb(10, 40, 140)],
    food: Color::Rgb(200, 30, 30),
    border_fg: Color::DarkGray,
    text: Color::Black,
    muted: Color::Gray,
    accent: Color::Rgb(180, 100, 0),
};

#[cfg(test)]
mod tests {
    use super::ThemeMode;

    #[test]
    fn toggling_twice_is_identity() {
        assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
        assert_eq!(ThemeMode::Light.toggled().toggled(), ThemeMode::Light);
    }

    #[test]
    fn agents_get_distinct_colors() {
        for mode in [ThemeMode::Light, ThemeMode::Dark] {
            let palette = mode.palette();
            assert_ne!(palette.body_color(0), palette.body_color(1));
            assert_ne!(palette.head_color(0), palette.body_color(0));
            assert_eq!(palette.body_color(2), palette.body_color(0));
        }
    }

    #[test]
    fn theme_flag_serializes_as_lowercase_name() {
        assert_eq!(
            serde_json::to_string(&ThemeMode::Light).expect("serializable"),
            "\"light\""
        );
    }
}
