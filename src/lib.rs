//! Grid Snake: a pure state-transition Snake engine for one or two players
//! plus the terminal adapter that drives it from a timer and key presses.

pub mod agent;
pub mod collision;
pub mod config;
pub mod direction;
pub mod error;
pub mod food;
pub mod game;
pub mod geometry;
pub mod input;
pub mod movement;
pub mod pacing;
pub mod prefs;
pub mod renderer;
pub mod session;
pub mod snake;
pub mod terminal_runtime;
pub mod theme;
pub mod ui;
