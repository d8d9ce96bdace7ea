use std::fmt;
use std::str::FromStr;

use rand::Rng;
use tracing::{debug, info};

use crate::agent::Agent;
use crate::collision::{self, CollisionReport};
use crate::config::GRID_SIZE;
use crate::direction::Direction;
use crate::error::ParseModeError;
use crate::food::place_food;
use crate::geometry::Position;
use crate::movement::{candidate_heads, growth_flags};
use crate::snake::Snake;

/// Number of snakes on the board.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Default)]
pub enum GameMode {
    #[default]
    Single,
    Multi,
}

impl GameMode {
    #[must_use]
    pub fn agent_count(self) -> usize {
        match self {
            Self::Single => 1,
            Self::Multi => 2,
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Single => "single",
            Self::Multi => "multi",
        })
    }
}

impl FromStr for GameMode {
    type Err = ParseModeError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "single" => Ok(Self::Single),
            "multi" => Ok(Self::Multi),
            _ => Err(ParseModeError(raw.to_owned())),
        }
    }
}

/// Current high-level gameplay state.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    /// Freshly built; nothing has moved yet.
    Ready,
    Playing,
    Paused,
    /// Terminal until restarted.
    Over,
}

/// Immutable snapshot of one round.
///
/// Every transition borrows the current snapshot and returns the next one, so
/// a snapshot handed to the renderer never changes underneath it.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct GameState {
    mode: GameMode,
    agents: Vec<Agent>,
    food: Option<Position>,
    status: GameStatus,
}

impl GameState {
    /// Builds a fresh round: spawn positions, food, zero scores, `Ready`.
    #[must_use]
    pub fn new<R: Rng + ?Sized>(mode: GameMode, rng: &mut R) -> Self {
        let agents = spawn_agents(mode);
        let food = place_food(rng, agents.iter().map(|agent| &agent.snake));

        Self {
            mode,
            agents,
            food,
            status: GameStatus::Ready,
        }
    }

    /// Assembles a snapshot from explicit parts, for scripted scenarios.
    ///
    /// The agent count is not checked against `mode`.
    #[must_use]
    pub fn from_parts(
        mode: GameMode,
        agents: Vec<Agent>,
        food: Option<Position>,
        status: GameStatus,
    ) -> Self {
        Self {
            mode,
            agents,
            food,
            status,
        }
    }

    #[must_use]
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn food(&self) -> Option<Position> {
        self.food
    }

    #[must_use]
    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    #[must_use]
    pub fn agent(&self, index: usize) -> Option<&Agent> {
        self.agents.get(index)
    }

    /// Sum of all agents' scores.
    #[must_use]
    pub fn total_score(&self) -> u32 {
        self.agents.iter().map(|agent| agent.score).sum()
    }

    /// Highest single-agent score.
    #[must_use]
    pub fn best_agent_score(&self) -> u32 {
        self.agents.iter().map(|agent| agent.score).max().unwrap_or(0)
    }

    /// Index of the agent with the strictly highest score, if any.
    #[must_use]
    pub fn leader(&self) -> Option<usize> {
        let best = self.best_agent_score();
        let mut leaders = self
            .agents
            .iter()
            .enumerate()
            .filter(|(_, agent)| agent.score == best);

        match (leaders.next(), leaders.next()) {
            (Some((index, _)), None) => Some(index),
            _ => None,
        }
    }

    /// Returns true if any snake segment occupies `position`.
    #[must_use]
    pub fn is_occupied(&self, position: Position) -> bool {
        self.agents
            .iter()
            .any(|agent| agent.snake.occupies(position))
    }

    /// Requests a turn for one agent, taking effect on the next tick.
    ///
    /// Unknown agents and reversals of the agent's committed direction leave
    /// the state unchanged. The status is not consulted; adapters decide
    /// when input should begin play.
    #[must_use]
    pub fn with_direction(&self, agent_index: usize, direction: Direction) -> Self {
        let Some(steered) = self
            .agents
            .get(agent_index)
            .and_then(|agent| agent.steered(direction))
        else {
            debug!(agent_index, %direction, "direction request ignored");
            return self.clone();
        };

        let mut agents = self.agents.clone();
        agents[agent_index] = steered;
        Self {
            agents,
            ..self.clone()
        }
    }

    /// Like [`Self::with_direction`], taking a direction name. Unknown names
    /// leave the state unchanged.
    #[must_use]
    pub fn with_named_direction(&self, agent_index: usize, name: &str) -> Self {
        match name.parse::<Direction>() {
            Ok(direction) => self.with_direction(agent_index, direction),
            Err(error) => {
                debug!(agent_index, %error, "direction request ignored");
                self.clone()
            }
        }
    }

    /// Leaves `Ready` for `Playing`. Any other status is unchanged.
    #[must_use]
    pub fn started(&self) -> Self {
        if self.status != GameStatus::Ready {
            return self.clone();
        }

        info!(mode = %self.mode, "round started");
        Self {
            status: GameStatus::Playing,
            ..self.clone()
        }
    }

    /// Advances simulation by one tick.
    ///
    /// On collision only the status changes; the bodies stay as they were
    /// going into the tick.
    #[must_use]
    pub fn advanced<R: Rng + ?Sized>(&self, rng: &mut R) -> Self {
        if matches!(self.status, GameStatus::Over | GameStatus::Paused) {
            return self.clone();
        }

        let candidates = candidate_heads(&self.agents);
        let growing = growth_flags(&candidates, self.food);
        let report = collision::resolve(&self.agents, &candidates, &growing);

        if report.any() {
            info!(
                cause = ?report.primary_cause(),
                scores = ?self.scores(),
                "round over"
            );
            return Self {
                status: GameStatus::Over,
                ..self.clone()
            };
        }

        let agents: Vec<Agent> = self
            .agents
            .iter()
            .zip(candidates.iter().zip(&growing))
            .map(|(agent, (&head, &grows))| Agent {
                snake: agent.snake.moved_to(head, grows),
                direction: agent.pending_direction,
                pending_direction: agent.pending_direction,
                score: agent.score + u32::from(grows),
            })
            .collect();

        let food = if growing.iter().any(|grows| *grows) {
            let food = place_food(rng, agents.iter().map(|agent| &agent.snake));
            if food.is_none() {
                info!("board is full, no food left to place");
            }
            food
        } else {
            self.food
        };

        Self {
            mode: self.mode,
            agents,
            food,
            status: GameStatus::Playing,
        }
    }

    /// Flips `Playing` and `Paused`. `Ready` and `Over` are unchanged.
    #[must_use]
    pub fn pause_toggled(&self) -> Self {
        let status = match self.status {
            GameStatus::Playing => GameStatus::Paused,
            GameStatus::Paused => GameStatus::Playing,
            GameStatus::Ready | GameStatus::Over => return self.clone(),
        };

        Self {
            status,
            ..self.clone()
        }
    }

    /// A fresh round in the same mode.
    #[must_use]
    pub fn restarted<R: Rng + ?Sized>(&self, rng: &mut R) -> Self {
        Self::new(self.mode, rng)
    }

    /// Which collision checks the next tick would trip.
    ///
    /// For an `Over` state this names what ended the round, since the
    /// colliding move is never committed.
    #[must_use]
    pub fn collision_report(&self) -> CollisionReport {
        let candidates = candidate_heads(&self.agents);
        let growing = growth_flags(&candidates, self.food);
        collision::resolve(&self.agents, &candidates, &growing)
    }

    fn scores(&self) -> Vec<u32> {
        self.agents.iter().map(|agent| agent.score).collect()
    }
}

fn spawn_agents(mode: GameMode) -> Vec<Agent> {
    let mid = GRID_SIZE / 2;
    let horizontal = |head_x: i32, tail_x: i32| {
        Snake::from_segments(vec![Position::new(head_x, mid), Position::new(tail_x, mid)])
    };

    match mode {
        GameMode::Single => vec![Agent::new(horizontal(mid - 1, mid - 2), Direction::Right)],
        GameMode::Multi => vec![
            Agent::new(horizontal(mid - 4, mid - 5), Direction::Right),
            Agent::new(horizontal(mid + 4, mid + 5), Direction::Left),
        ],
    }
}
