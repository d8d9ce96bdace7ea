use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use tracing::debug;

use crate::game::{GameMode, GameState, GameStatus};
use crate::input::Command;
use crate::pacing::Pacing;

/// Armed tick timer.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
struct Timer {
    period: Duration,
    due: Instant,
}

/// Drives one game from input commands and a tick timer.
///
/// The session holds the current snapshot and swaps in the result of every
/// transition. All calls happen on one thread; the caller supplies `now` so
/// timing can be exercised without sleeping.
#[derive(Debug)]
pub struct Session {
    state: GameState,
    pacing: Pacing,
    timer: Option<Timer>,
    rng: StdRng,
}

impl Session {
    /// Creates a session with a fresh `Ready` round and no timer armed.
    #[must_use]
    pub fn new(mode: GameMode, pacing: Pacing, mut rng: StdRng) -> Self {
        let state = GameState::new(mode, &mut rng);
        Self::with_state(state, pacing, rng)
    }

    /// Creates a session around an existing snapshot, timer disarmed.
    #[must_use]
    pub fn with_state(state: GameState, pacing: Pacing, rng: StdRng) -> Self {
        Self {
            state,
            pacing,
            timer: None,
            rng,
        }
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Period of the armed timer, or `None` while stopped.
    #[must_use]
    pub fn tick_period(&self) -> Option<Duration> {
        self.timer.map(|timer| timer.period)
    }

    /// Applies one input command. Returns true when anything changed.
    ///
    /// `ToggleTheme` and `Quit` belong to the front-end and are ignored here.
    pub fn handle(&mut self, command: Command, now: Instant) -> bool {
        let before = (self.state.clone(), self.timer);

        match command {
            Command::Steer { agent, direction } => {
                self.begin_play(now);
                self.state = self.state.with_direction(agent, direction);
            }
            Command::Start => self.begin_play(now),
            Command::TogglePause => {
                self.state = self.state.pause_toggled();
                match self.state.status() {
                    GameStatus::Paused => self.cancel(),
                    GameStatus::Playing if self.timer.is_none() => self.arm(now),
                    _ => {}
                }
            }
            Command::Restart => {
                self.cancel();
                self.state = self.state.restarted(&mut self.rng);
            }
            Command::ToggleTheme | Command::Quit => return false,
        }

        (self.state.clone(), self.timer) != before
    }

    /// Runs one tick if the timer is due. Returns true when a tick ran.
    pub fn poll(&mut self, now: Instant) -> bool {
        let Some(timer) = self.timer else {
            return false;
        };
        if now < timer.due {
            return false;
        }

        self.state = self.state.advanced(&mut self.rng);

        if self.state.status() == GameStatus::Over {
            self.cancel();
            return true;
        }

        let period = self.pacing.interval(self.state.total_score());
        if period != timer.period {
            debug!(?period, "tick period changed, re-arming timer");
        }
        self.timer = Some(Timer {
            period,
            due: now + period,
        });
        true
    }

    fn begin_play(&mut self, now: Instant) {
        if self.state.status() != GameStatus::Ready {
            return;
        }
        self.state = self.state.started();
        self.arm(now);
    }

    fn arm(&mut self, now: Instant) {
        let period = self.pacing.interval(self.state.total_score());
        debug!(?period, "timer armed");
        self.timer = Some(Timer {
            period,
            due: now + period,
        });
    }

    fn cancel(&mut self) {
        if self.timer.take().is_some() {
            debug!("timer cancelled");
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use crate::agent::Agent;
    use crate::direction::Direction;
    use crate::game::{GameMode, GameState, GameStatus};
    use crate::geometry::Position;
    use crate::input::Command;
    use crate::pacing::Pacing;
    use crate::snake::Snake;

    use super::Session;

    const PERIOD: Duration = Duration::from_millis(140);

    fn session(mode: GameMode) -> Session {
        Session::new(mode, Pacing::Fixed, StdRng::seed_from_u64(21))
    }

    #[test]
    fn new_session_waits_for_input() {
        let mut session = session(GameMode::Single);
        let now = Instant::now();

        assert_eq!(session.state().status(), GameStatus::Ready);
        assert_eq!(session.tick_period(), None);
        assert!(!session.poll(now + PERIOD * 10));
    }

    #[test]
    fn first_direction_input_begins_play() {
        let mut session = session(GameMode::Single);
        let now = Instant::now();

        assert!(session.handle(
            Command::Steer {
                agent: 0,
                direction: Direction::Up
            },
            now
        ));

        assert_eq!(session.state().status(), GameStatus::Playing);
        assert_eq!(session.tick_period(), Some(PERIOD));

        assert!(!session.poll(now + PERIOD / 2));
        assert!(session.poll(now + PERIOD));
        assert_eq!(session.state().agents()[0].snake.head(), Position::new(9, 9));
    }

    #[test]
    fn pause_cancels_and_resume_rearms() {
        let mut session = session(GameMode::Single);
        let now = Instant::now();
        session.handle(Command::Start, now);

        session.handle(Command::TogglePause, now);
        assert_eq!(session.state().status(), GameStatus::Paused);
        assert_eq!(session.tick_period(), None);
        assert!(!session.poll(now + PERIOD * 3));

        session.handle(Command::TogglePause, now + PERIOD * 3);
        assert_eq!(session.state().status(), GameStatus::Playing);
        assert!(session.poll(now + PERIOD * 4));
    }

    #[test]
    fn restart_leaves_timer_disarmed() {
        let mut session = session(GameMode::Multi);
        let now = Instant::now();
        session.handle(Command::Start, now);
        session.poll(now + PERIOD);

        session.handle(Command::Restart, now + PERIOD);

        assert_eq!(session.state().status(), GameStatus::Ready);
        assert_eq!(session.state().mode(), GameMode::Multi);
        assert_eq!(session.tick_period(), None);
    }

    #[test]
    fn game_over_cancels_timer() {
        let mut session = session(GameMode::Single);
        let mut now = Instant::now();
        session.handle(Command::Start, now);

        // Heading right from x=9 reaches the wall within eleven ticks.
        for _ in 0..11 {
            now += PERIOD;
            session.poll(now);
        }

        assert_eq!(session.state().status(), GameStatus::Over);
        assert_eq!(session.tick_period(), None);
    }

    #[test]
    fn front_end_commands_change_nothing() {
        let mut session = session(GameMode::Single);
        let now = Instant::now();

        assert!(!session.handle(Command::ToggleTheme, now));
        assert!(!session.handle(Command::Quit, now));
        assert!(!session.handle(Command::TogglePause, now));
    }

    #[test]
    fn accelerating_pacing_rearms_after_scoring() {
        let state = GameState::from_parts(
            GameMode::Single,
            vec![Agent::new(
                Snake::from_segments(vec![Position::new(9, 10), Position::new(8, 10)]),
                Direction::Right,
            )],
            Some(Position::new(10, 10)),
            GameStatus::Ready,
        );
        let mut session =
            Session::with_state(state, Pacing::Accelerating, StdRng::seed_from_u64(5));
        let now = Instant::now();

        session.handle(Command::Start, now);
        assert_eq!(session.tick_period(), Some(PERIOD));

        assert!(session.poll(now + PERIOD));
        assert_eq!(session.state().total_score(), 1);
        assert_eq!(session.tick_period(), Some(Duration::from_millis(136)));

        // The re-armed timer runs on the shorter period.
        let after_eating = now + PERIOD;
        assert!(!session.poll(after_eating + Duration::from_millis(135)));
        assert!(session.poll(after_eating + Duration::from_millis(136)));
    }
}
