//! Per-tick collision resolution for any number of agents.
//!
//! Every check runs on every tick so the report is the same regardless of
//! which condition happens to be found first. Any fired check ends the round
//! for all agents.

use std::fmt;

use crate::agent::Agent;
use crate::geometry::{Position, hits_wall};

/// Which collision checks fired for one tick.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct CollisionReport {
    /// A candidate head left the grid.
    pub wall: bool,
    /// Two agents' candidate heads landed on the same cell.
    pub head_on: bool,
    /// Two agents moved onto each other's current heads.
    pub swap: bool,
    /// A candidate head landed on its own or another agent's body.
    pub body: bool,
}

impl CollisionReport {
    /// Returns true when any check fired.
    #[must_use]
    pub fn any(self) -> bool {
        self.wall || self.head_on || self.swap || self.body
    }

    /// The first fired check, in resolution order.
    #[must_use]
    pub fn primary_cause(self) -> Option<CollisionKind> {
        if self.wall {
            Some(CollisionKind::Wall)
        } else if self.head_on {
            Some(CollisionKind::HeadOn)
        } else if self.swap {
            Some(CollisionKind::Swap)
        } else if self.body {
            Some(CollisionKind::Body)
        } else {
            None
        }
    }
}

/// Collision categories, in resolution order.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum CollisionKind {
    Wall,
    HeadOn,
    Swap,
    Body,
}

impl fmt::Display for CollisionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Wall => "hit wall",
            Self::HeadOn => "head-on crash",
            Self::Swap => "snakes passed through each other",
            Self::Body => "hit a snake body",
        })
    }
}

/// Resolves collisions for the upcoming tick.
///
/// `candidates` and `growing` are indexed like `agents`; see
/// [`crate::movement::candidate_heads`] and [`crate::movement::growth_flags`].
#[must_use]
pub fn resolve(agents: &[Agent], candidates: &[Position], growing: &[bool]) -> CollisionReport {
    debug_assert_eq!(agents.len(), candidates.len());
    debug_assert_eq!(agents.len(), growing.len());

    let mut report = CollisionReport {
        wall: candidates.iter().any(|candidate| hits_wall(*candidate)),
        ..CollisionReport::default()
    };

    for i in 0..candidates.len() {
        for j in (i + 1)..candidates.len() {
            if candidates[i] == candidates[j] {
                report.head_on = true;
            }

            let head_i = agents[i].snake.head();
            let head_j = agents[j].snake.head();
            if candidates[i] == head_j && candidates[j] == head_i {
                report.swap = true;
            }
        }
    }

    for (i, candidate) in candidates.iter().enumerate() {
        for (j, agent) in agents.iter().enumerate() {
            // The own head is never a target: skip it for self-collision.
            let skip = usize::from(i == j);
            if agent
                .snake
                .collision_body(growing[j])
                .skip(skip)
                .any(|segment| segment == candidate)
            {
                report.body = true;
            }
        }
    }

    report
}
