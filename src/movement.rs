use crate::agent::Agent;
use crate::geometry::Position;

/// Returns the head position `agent` will move onto next tick.
#[must_use]
pub fn candidate_head(agent: &Agent) -> Position {
    agent.snake.head().step(agent.pending_direction)
}

/// Candidate heads for every agent, indexed like `agents`.
#[must_use]
pub fn candidate_heads(agents: &[Agent]) -> Vec<Position> {
    agents.iter().map(candidate_head).collect()
}

/// For each candidate head, whether it lands on `food`.
#[must_use]
pub fn growth_flags(candidates: &[Position], food: Option<Position>) -> Vec<bool> {
    candidates
        .iter()
        .map(|candidate| food == Some(*candidate))
        .collect()
}
