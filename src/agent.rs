use crate::direction::{Direction, direction_change_is_valid};
use crate::snake::Snake;

/// One player: a snake plus its steering and score.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Agent {
    pub snake: Snake,
    /// Direction committed by the last tick.
    pub direction: Direction,
    /// Direction the next tick will move in.
    pub pending_direction: Direction,
    pub score: u32,
}

impl Agent {
    /// Creates an agent with no turn pending and zero score.
    #[must_use]
    pub fn new(snake: Snake, direction: Direction) -> Self {
        Self {
            snake,
            direction,
            pending_direction: direction,
            score: 0,
        }
    }

    /// Returns the agent steered towards `direction`.
    ///
    /// Reversals are checked against the committed direction rather than the
    /// pending one, so two quick inputs in one tick can never fold the snake
    /// back onto its own neck. Later requests in the same tick overwrite
    /// earlier ones. Returns `None` when the request is rejected.
    #[must_use]
    pub fn steered(&self, direction: Direction) -> Option<Self> {
        if !direction_change_is_valid(self.direction, direction) {
            return None;
        }

        Some(Self {
            pending_direction: direction,
            ..self.clone()
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::direction::Direction;
    use crate::geometry::Position;
    use crate::snake::Snake;

    use super::Agent;

    fn agent(direction: Direction) -> Agent {
        Agent::new(
            Snake::from_segments(vec![Position::new(5, 5), Position::new(4, 5)]),
            direction,
        )
    }

    #[test]
    fn reversal_of_committed_direction_is_rejected() {
        for direction in Direction::ALL {
            assert!(agent(direction).steered(direction.opposite()).is_none());
        }
    }

    #[test]
    fn last_request_wins_within_a_tick() {
        let steered = agent(Direction::Right)
            .steered(Direction::Up)
            .and_then(|a| a.steered(Direction::Down))
            .expect("both turns are perpendicular to the committed direction");

        assert_eq!(steered.pending_direction, Direction::Down);
        assert_eq!(steered.direction, Direction::Right);
    }

    #[test]
    fn double_reversal_within_a_tick_is_blocked() {
        // Up is accepted, then Left would reverse the committed Right.
        let steered = agent(Direction::Right)
            .steered(Direction::Up)
            .expect("perpendicular turn");

        assert!(steered.steered(Direction::Left).is_none());
        assert_eq!(steered.pending_direction, Direction::Up);
    }
}
