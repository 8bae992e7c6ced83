/*
draw.rs

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

//! Draw the games in the terminal.
//!
//! The functions in this module only read the game state through the public accessors of
//! [`MazeSession`] and the [`QuizSnapshot`] read model, and return the text to print.

use chrono::{DateTime, Local};
use log::{Level, debug, log_enabled};

use crate::highscores::{ScoreEntry, ScoreFilter};
use crate::maze::grid::{Direction, Grid, Position};
use crate::maze::session::MazeSession;
use crate::quiz::engine::{Phase, QuizEvent, QuizSnapshot};

/// Width of the countdown bar, in characters.
const TIMER_BAR_WIDTH: usize = 30;

/// Streak from which the HUD shows a flame.
const HOT_STREAK: u32 = 3;

/// Return the maze of a session as text.
///
/// Each cell is three characters wide. The player is drawn with `@` and the exit with `X`.
pub fn maze_to_string(session: &MazeSession) -> String {
    grid_to_string(session.grid(), session.player(), session.exit())
}

/// Return a maze as text, with the player and the exit at the given positions.
pub fn grid_to_string(grid: &Grid, player: Position, exit: Position) -> String {
    let mut out = String::with_capacity((grid.cols() * 4 + 2) * (grid.rows() * 2 + 1));

    for y in 0..grid.rows() {
        // Wall above the row
        for x in 0..grid.cols() {
            out.push('+');
            let north: bool = grid.cell(Position::new(x, y)).has_wall(Direction::North);
            out.push_str(if north { "---" } else { "   " });
        }
        out.push_str("+\n");

        // Cells and the walls between them
        for x in 0..grid.cols() {
            let pos = Position::new(x, y);
            let cell = grid.cell(pos);
            out.push(if cell.has_wall(Direction::West) { '|' } else { ' ' });
            out.push_str(if pos == player {
                " @ "
            } else if pos == exit {
                " X "
            } else {
                "   "
            });
        }
        let last = Position::new(grid.cols() - 1, y);
        out.push(if grid.cell(last).has_wall(Direction::East) {
            '|'
        } else {
            ' '
        });
        out.push('\n');
    }

    // Bottom border
    for x in 0..grid.cols() {
        out.push('+');
        let bottom = Position::new(x, grid.rows() - 1);
        out.push_str(if grid.cell(bottom).has_wall(Direction::South) {
            "---"
        } else {
            "   "
        });
    }
    out.push_str("+\n");

    if log_enabled!(Level::Debug) {
        debug!("Maze drawn:");
        debug!("         cols = {}", grid.cols());
        debug!("         rows = {}", grid.rows());
        debug!("       player = {player}");
    }
    out
}

/// Return the status line of the maze: time, steps, and score.
pub fn hud_line(session: &MazeSession) -> String {
    let status: &str = if session.is_finished() {
        "  Solved!"
    } else if !session.is_started() {
        "  (the timer starts with your first move)"
    } else {
        ""
    };
    format!(
        "Time {:.1}s   Steps {}   Score {}{status}",
        session.elapsed_seconds(),
        session.steps(),
        session.score()
    )
}

/// Return the countdown bar for the given fraction of time left.
pub fn timer_bar(fraction: f64, width: usize) -> String {
    let filled: usize = ((fraction.clamp(0.0, 1.0) * width as f64).round() as usize).min(width);
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}

/// Return the quiz screen.
pub fn quiz_to_string(snapshot: &QuizSnapshot) -> String {
    let mut out = String::new();

    let round: String = match snapshot.phase {
        Phase::Idle => format!("-/{}", snapshot.total_rounds),
        _ => format!("{}/{}", snapshot.round, snapshot.total_rounds),
    };
    let streak: String = if snapshot.streak >= HOT_STREAK {
        format!("{} 🔥", snapshot.streak)
    } else {
        snapshot.streak.to_string()
    };
    out.push_str(&format!(
        "Round {round}   Correct {}   Streak {streak}   Score {}   [{}]\n",
        snapshot.correct, snapshot.score, snapshot.difficulty_label
    ));

    match snapshot.phase {
        Phase::Idle => {
            out.push_str("Type \"start\" to begin.\n");
            return out;
        }
        Phase::Finished => {
            out.push_str("Game over. Type \"start\" to play again.\n");
            return out;
        }
        Phase::Paused => out.push_str("Paused. Type \"r\" to resume.\n"),
        Phase::Playing => (),
    }

    out.push_str(&format!(
        "{} {:.1}s\n",
        timer_bar(snapshot.time_fraction, TIMER_BAR_WIDTH),
        snapshot.time_remaining.as_secs_f64()
    ));

    if let Some(q) = snapshot.question {
        out.push_str(&format!("\n[{}]\n{}\n\n", q.category, q.prompt));
        for (i, option) in q.options.iter().enumerate() {
            let mark: &str = if snapshot.answered && *option == q.correct_answer {
                "  <="
            } else {
                ""
            };
            out.push_str(&format!("  {}) {option}{mark}\n", i + 1));
        }
        if snapshot.answered
            && let Some(explanation) = &q.explanation
        {
            out.push_str(&format!("\n{explanation}\n"));
        }
    }
    out
}

/// Return the message for a quiz event, if the event has one.
pub fn event_message(event: &QuizEvent) -> Option<String> {
    match event {
        QuizEvent::RoundStarted { .. } | QuizEvent::Resumed => None,
        QuizEvent::Answered {
            correct: true,
            points,
            multiplier,
            ..
        } => {
            if *multiplier > 1.0 {
                Some(format!("Correct! +{points} points (x{multiplier} streak bonus)"))
            } else {
                Some(format!("Correct! +{points} points"))
            }
        }
        QuizEvent::Answered {
            correct: false,
            correct_answer,
            ..
        } => Some(format!("Wrong. The answer was: {correct_answer}")),
        QuizEvent::TimedOut { correct_answer } => {
            Some(format!("Out of time! The answer was: {correct_answer}"))
        }
        QuizEvent::Paused => Some("Paused.".to_string()),
        QuizEvent::Finished(summary) => {
            let position: String = match summary.position {
                Some(p) => format!(" New high score, position {p}!"),
                None => String::new(),
            };
            Some(format!(
                "{}/{} correct answers. Grade {}, {} points.{position}",
                summary.correct, summary.total, summary.grade, summary.score
            ))
        }
    }
}

/// Return the scoreboard as text.
///
/// The game column is only displayed for the combined scoreboard.
pub fn scoreboard_to_string(filter: ScoreFilter, entries: &[ScoreEntry]) -> String {
    let title: String = match filter {
        ScoreFilter::All => "All games".to_string(),
        ScoreFilter::Game(g) => g.label().to_string(),
    };
    let mut out: String = format!("{title}\n");
    if entries.is_empty() {
        out.push_str("  No scores yet\n");
        return out;
    }
    for (i, e) in entries.iter().enumerate() {
        let when: DateTime<Local> = e.when.with_timezone(&Local);
        let game: String = match filter {
            ScoreFilter::All => format!("{:<11}", e.game.label()),
            ScoreFilter::Game(_) => String::new(),
        };
        out.push_str(&format!(
            "{:>3}. {game}{:>6}  {:<20}  {}\n",
            i + 1,
            e.score,
            e.detail,
            when.format("%Y-%m-%d %H:%M")
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highscores::{GameId, HighScores, ScoreStore};
    use crate::maze::generator::MazeGenerator;
    use crate::services::Services;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn corridor_maze() {
        let grid = MazeGenerator::new(2, 1)
            .generate_with(&mut StdRng::seed_from_u64(1))
            .unwrap();
        let (services, _probe) = Services::recording();
        let session = MazeSession::new(grid, services);
        assert_eq!(
            maze_to_string(&session),
            "+---+---+\n| @   X |\n+---+---+\n"
        );
        assert_eq!(
            hud_line(&session),
            "Time 0.0s   Steps 0   Score 9000  (the timer starts with your first move)"
        );
    }

    #[test]
    fn grid_without_session() {
        let grid = MazeGenerator::new(1, 2)
            .generate_with(&mut StdRng::seed_from_u64(4))
            .unwrap();
        assert_eq!(
            grid_to_string(&grid, Position::new(0, 0), Position::new(0, 1)),
            "+---+\n| @ |\n+   +\n| X |\n+---+\n"
        );
    }

    #[test]
    fn maze_drawing_size() {
        let grid = MazeGenerator::new(5, 4).generate().unwrap();
        let (services, _probe) = Services::recording();
        let text = maze_to_string(&MazeSession::new(grid, services));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 9);
        assert!(lines.iter().all(|l| l.chars().count() == 21));
        assert_eq!(text.matches('@').count(), 1);
        assert_eq!(text.matches('X').count(), 1);
    }

    #[test]
    fn timer_bars() {
        assert_eq!(timer_bar(1.0, 4), "[####]");
        assert_eq!(timer_bar(0.5, 4), "[##--]");
        assert_eq!(timer_bar(0.0, 4), "[----]");
        assert_eq!(timer_bar(7.0, 4), "[####]");
    }

    #[test]
    fn scoreboards() {
        let mut scores = HighScores::new();
        assert!(scoreboard_to_string(ScoreFilter::All, &[]).contains("No scores yet"));

        scores.record(GameId::Maze, 8000, "10.0s • 30 steps");
        let text = scoreboard_to_string(
            ScoreFilter::All,
            &scores.top_n(ScoreFilter::All),
        );
        assert!(text.starts_with("All games\n"));
        assert!(text.contains("  1. Maze"));
        assert!(text.contains("8000"));
        assert!(text.contains("10.0s • 30 steps"));
    }
}
