/*
session.rs

Copyright 2025 Hervé Quatremain

This file is part of Mazequiz.

Mazequiz is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Mazequiz is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Mazequiz. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Manage the status of a maze in progress.

use log::debug;
use std::time::{Duration, Instant};

use super::grid::{Direction, Grid, Position};
use crate::audio::Cue;
use crate::highscores::GameId;
use crate::services::Services;

/// Score of a maze solved instantly within the free steps.
const BASE_SCORE: i64 = 9000;

/// Points lost per second.
const TIME_PENALTY: f64 = 55.0;

/// Number of steps the player can take without losing points.
const FREE_STEPS: u32 = 20;

/// Points lost per step beyond [`FREE_STEPS`].
const STEP_PENALTY: i64 = 8;

/// Number of confetti when the player reaches the exit.
const CELEBRATION_INTENSITY: u32 = 40;

/// Round a duration to tenths of seconds, as displayed in the HUD.
pub fn rounded_seconds(elapsed: Duration) -> f64 {
    let ms: f64 = elapsed.as_millis() as f64;
    ((ms / 100.0).round() / 10.0).max(0.0)
}

/// Compute the score from the elapsed time (already rounded to tenths) and the number of steps.
pub fn score_for(seconds: f64, steps: u32) -> u32 {
    let time_penalty: i64 = (seconds * TIME_PENALTY).round() as i64;
    let step_penalty: i64 = i64::from(steps.saturating_sub(FREE_STEPS)) * STEP_PENALTY;
    (BASE_SCORE - time_penalty - step_penalty).clamp(0, BASE_SCORE) as u32
}

/// Outcome of a move attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveResult {
    /// A wall was in the way. The player did not move.
    pub blocked: bool,

    /// The player is on the exit cell.
    pub won: bool,
}

/// Manage the status of the maze in progress.
pub struct MazeSession {
    /// The maze. It does not change during the session.
    grid: Grid,

    /// Player position.
    player: Position,

    /// Exit position, at the opposite corner of the start.
    exit: Position,

    /// Number of successful moves.
    steps: u32,

    /// Time of the first move attempt. The timer does not run before the player moves.
    started_at: Option<Instant>,

    /// Time of the winning move.
    finished_at: Option<Instant>,

    /// Whether the player reached the exit.
    finished: bool,

    services: Services,
}

impl MazeSession {
    /// Create a [`MazeSession`] object for the provided maze.
    ///
    /// The player starts in the top left corner and the exit is in the bottom right corner.
    pub fn new(grid: Grid, services: Services) -> Self {
        let exit = Position::new(grid.cols().saturating_sub(1), grid.rows().saturating_sub(1));
        let player = Position::new(0, 0);
        Self {
            grid,
            player,
            exit,
            steps: 0,
            started_at: None,
            finished_at: None,
            // A single cell maze is solved before the first move
            finished: player == exit,
            services,
        }
    }

    /// Try to move the player one cell in the given direction.
    ///
    /// Once the maze is solved, the method does nothing and keeps reporting the win.
    pub fn try_move(&mut self, direction: Direction) -> MoveResult {
        if self.finished {
            return MoveResult {
                blocked: false,
                won: true,
            };
        }

        // The timer starts with the first attempt, even if it hits a wall
        let now: Instant = self.services.clock.now();
        if self.started_at.is_none() {
            self.started_at = Some(now);
        }

        if !self.grid.can_move(self.player, direction) {
            debug!("Blocked going {direction} from {}", self.player);
            self.services.audio.play(Cue::Hit);
            return MoveResult {
                blocked: true,
                won: false,
            };
        }

        if let Some(next) = self.grid.neighbor(self.player, direction) {
            self.player = next;
            self.steps += 1;
        }

        if self.player == self.exit {
            self.finish(now);
        }
        MoveResult {
            blocked: false,
            won: self.finished,
        }
    }

    /// Stop the timer and report the score.
    fn finish(&mut self, now: Instant) {
        self.finished = true;
        self.finished_at = Some(now);

        let score: u32 = self.score();
        let detail: String = self.detail();
        debug!("Maze solved: score = {score} ({detail})");

        self.services.celebration.celebrate(CELEBRATION_INTENSITY);
        self.services.audio.play(Cue::Win);
        let position: Option<usize> = self
            .services
            .scores
            .borrow_mut()
            .record(GameId::Maze, score, &detail);
        debug!("Scoreboard position: {position:?}");
    }

    /// Return the maze.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Return the player position.
    pub fn player(&self) -> Position {
        self.player
    }

    /// Return the exit position.
    pub fn exit(&self) -> Position {
        self.exit
    }

    /// Return the number of steps so far.
    pub fn steps(&self) -> u32 {
        self.steps
    }

    /// Whether the player already tried to move.
    pub fn is_started(&self) -> bool {
        self.started_at.is_some()
    }

    /// Whether the maze is solved.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Return the time between the first move attempt and now, or the winning move.
    pub fn elapsed(&self) -> Duration {
        match (self.started_at, self.finished_at) {
            (Some(start), Some(end)) => end.saturating_duration_since(start),
            (Some(start), None) => self.services.clock.now().saturating_duration_since(start),
            _ => Duration::ZERO,
        }
    }

    /// Elapsed time in seconds, rounded to tenths.
    pub fn elapsed_seconds(&self) -> f64 {
        rounded_seconds(self.elapsed())
    }

    /// Score the player would get by reaching the exit now.
    pub fn score(&self) -> u32 {
        score_for(self.elapsed_seconds(), self.steps)
    }

    /// Summary stored with the score in the scoreboard.
    pub fn detail(&self) -> String {
        format!("{:.1}s • {} steps", self.elapsed_seconds(), self.steps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highscores::{ScoreFilter, ScoreStore};
    use crate::maze::generator::MazeGenerator;
    use crate::services::Probe;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    /// Build a session on a 2x1 maze: the only passage goes east.
    fn corridor() -> (MazeSession, Probe) {
        let grid = MazeGenerator::new(2, 1)
            .generate_with(&mut StdRng::seed_from_u64(3))
            .unwrap();
        let (services, probe) = Services::recording();
        (MazeSession::new(grid, services), probe)
    }

    /// Return the directions from the start to the exit.
    fn solve(grid: &Grid) -> Vec<Direction> {
        fn walk(
            grid: &Grid,
            pos: Position,
            from: Option<Direction>,
            exit: Position,
            path: &mut Vec<Direction>,
        ) -> bool {
            if pos == exit {
                return true;
            }
            for d in Direction::ALL {
                if Some(d.opposite()) == from || !grid.can_move(pos, d) {
                    continue;
                }
                let next = grid.neighbor(pos, d).unwrap();
                path.push(d);
                if walk(grid, next, Some(d), exit, path) {
                    return true;
                }
                path.pop();
            }
            false
        }
        let exit = Position::new(grid.cols() - 1, grid.rows() - 1);
        let mut path = Vec::new();
        assert!(walk(grid, Position::new(0, 0), None, exit, &mut path));
        path
    }

    #[test]
    fn score_formula() {
        assert_eq!(score_for(0.0, 20), 9000);
        assert_eq!(score_for(10.0, 30), 9000 - 550 - 80);
        assert_eq!(score_for(0.0, 0), 9000);
        assert_eq!(score_for(1000.0, 500), 0);
    }

    #[test]
    fn seconds_are_rounded_to_tenths() {
        assert_eq!(rounded_seconds(Duration::from_millis(12_345)), 12.3);
        assert_eq!(rounded_seconds(Duration::from_millis(12_350)), 12.4);
        assert_eq!(rounded_seconds(Duration::ZERO), 0.0);
    }

    #[test]
    fn blocked_move_starts_the_timer() {
        let (mut session, probe) = corridor();
        assert!(!session.is_started());

        let result = session.try_move(Direction::North);
        assert_eq!(
            result,
            MoveResult {
                blocked: true,
                won: false
            }
        );
        assert!(session.is_started());
        assert_eq!(session.steps(), 0);
        assert_eq!(session.player(), Position::new(0, 0));
        assert_eq!(probe.audio.played(), vec![Cue::Hit]);

        probe.clock.advance_ms(1500);
        assert_eq!(session.elapsed_seconds(), 1.5);
    }

    #[test]
    fn timer_waits_for_the_first_move() {
        let (session, probe) = corridor();
        probe.clock.advance_ms(5000);
        assert_eq!(session.elapsed(), Duration::ZERO);
        assert_eq!(session.score(), 9000);
    }

    #[test]
    fn winning_move_records_the_score() {
        let (mut session, probe) = corridor();
        session.try_move(Direction::West);
        probe.clock.advance_ms(2000);
        let result = session.try_move(Direction::East);

        assert_eq!(
            result,
            MoveResult {
                blocked: false,
                won: true
            }
        );
        assert!(session.is_finished());
        assert_eq!(session.steps(), 1);
        assert_eq!(session.score(), 9000 - 110);
        assert_eq!(probe.celebration.calls(), vec![CELEBRATION_INTENSITY]);
        assert_eq!(probe.audio.played(), vec![Cue::Hit, Cue::Win]);

        let top = probe.scores.borrow().top_n(ScoreFilter::Game(GameId::Maze));
        assert_eq!(top.len(), 1);
        assert_eq!(top[0].score, 8890);
        assert_eq!(top[0].detail, "2.0s • 1 steps");

        // The timer stopped with the winning move
        probe.clock.advance_ms(60_000);
        assert_eq!(session.score(), 8890);
    }

    #[test]
    fn finished_session_ignores_moves() {
        let (mut session, probe) = corridor();
        session.try_move(Direction::East);
        let steps = session.steps();

        for d in Direction::ALL {
            assert_eq!(
                session.try_move(d),
                MoveResult {
                    blocked: false,
                    won: true
                }
            );
        }
        assert_eq!(session.steps(), steps);
        assert_eq!(probe.scores.borrow().top_n(ScoreFilter::All).len(), 1);
        assert_eq!(probe.celebration.calls().len(), 1);
    }

    #[test]
    fn single_cell_maze_is_already_solved() {
        let grid = MazeGenerator::new(1, 1).generate().unwrap();
        let (services, probe) = Services::recording();
        let mut session = MazeSession::new(grid, services);

        assert!(session.is_finished());
        assert_eq!(session.exit(), session.player());
        assert!(session.try_move(Direction::East).won);
        assert_eq!(session.steps(), 0);
        assert!(probe.scores.borrow().is_empty());
    }

    #[test]
    fn walking_the_solution_wins() {
        let grid = MazeGenerator::new(14, 10)
            .generate_with(&mut StdRng::seed_from_u64(11))
            .unwrap();
        let path = solve(&grid);
        let (services, _probe) = Services::recording();
        let mut session = MazeSession::new(grid, services);

        let (last, rest) = path.split_last().unwrap();
        for d in rest {
            let result = session.try_move(*d);
            assert!(!result.blocked);
            assert!(!result.won);
        }
        assert!(session.try_move(*last).won);
        assert_eq!(session.steps() as usize, path.len());
        assert_eq!(session.player(), session.exit());
    }
}
