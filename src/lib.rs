/*
lib.rs

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

//! Maze and quiz mini-games with a shared leaderboard.
//!
//! The games are built from three parts:
//!
//! - [`maze`] generates perfect mazes and tracks the player through them.
//! - [`quiz`] runs timed multiple-choice games over a [`quiz::question::QuestionBank`].
//!   The vocabulary and arithmetic quizzes are two banks for the same engine.
//! - [`highscores`] keeps the top scores of every game.
//!
//! The games never access the clock, the scores, or the sound directly. They receive a
//! [`services::Services`] object, so that the tests can drive them with a manual clock and
//! recording collaborators.

pub mod application;
pub mod audio;
pub mod celebration;
pub mod cli_options;
pub mod clock;
pub mod config;
pub mod draw;
pub mod highscores;
pub mod maze;
pub mod quiz;
pub mod saver;
pub mod services;

pub use config::{Difficulty, QuizConfig};
pub use highscores::{GameId, HighScores, ScoreFilter, ScoreStore};
pub use maze::session::MazeSession;
pub use quiz::engine::{QuizEngine, QuizEvent};
pub use services::Services;
