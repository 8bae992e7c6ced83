/*
config.rs

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

//! Application constants and game configuration.
//!
//! The quiz engine never hardcodes time limits or scores: it receives a [`QuizConfig`] that maps
//! each [`Difficulty`] to a [`DifficultySettings`] entry. The presets returned by
//! [`QuizConfig::vocabulary`] and [`QuizConfig::arithmetic`] are the values used by the games.
//!
//! [`Settings`] holds the user preferences that survive a restart. See
//! [`crate::saver::settings`] for the code that saves and restores them.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use strum_macros::FromRepr;

/// Application name, also used for the data directory.
pub const APPLICATION_NAME: &str = "mazequiz";

/// Text displayed by `--version`.
pub const COPYRIGHT_NOTICE: &str = "Copyright 2025 Hervé Quatremain
License GPLv3+: GNU GPL version 3 or later <https://gnu.org/licenses/gpl.html>.
This is free software: you are free to change and redistribute it.
There is NO WARRANTY, to the extent permitted by law.";

/// Number of rounds in a quiz game.
pub const TOTAL_ROUNDS: usize = 15;

/// Default maze width, in cells.
pub const MAZE_COLS: usize = 14;

/// Default maze height, in cells.
pub const MAZE_ROWS: usize = 10;

/// Largest maze the terminal renderer can display.
pub const MAZE_MAX_SIZE: usize = 40;

/// Quiz difficulty level.
#[derive(
    Serialize,
    Deserialize,
    Debug,
    Copy,
    Clone,
    PartialOrd,
    PartialEq,
    Eq,
    Hash,
    ValueEnum,
    FromRepr,
    Default,
)]
#[serde(rename_all = "lowercase")]
#[repr(usize)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    /// All the difficulty levels, from the easiest.
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Identifier used in score details and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error returned when parsing an unknown difficulty level.
#[derive(Debug, PartialEq)]
pub struct DifficultyError(pub String);

impl fmt::Display for DifficultyError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "unknown difficulty level \"{}\"", self.0)
    }
}

impl Error for DifficultyError {}

impl FromStr for Difficulty {
    type Err = DifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(DifficultyError(s.to_string())),
        }
    }
}

/// Parameters of a difficulty level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DifficultySettings {
    /// Time the player has to answer a question.
    pub time_limit: Duration,

    /// Points used to compute the score of a correct answer.
    pub base_score: u32,

    /// Text displayed in the menus.
    pub label: &'static str,
}

/// Map each [`Difficulty`] to its [`DifficultySettings`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DifficultyTable {
    pub easy: DifficultySettings,
    pub medium: DifficultySettings,
    pub hard: DifficultySettings,
}

impl DifficultyTable {
    /// Build the table shared by both quizzes. Only the labels differ.
    fn with_labels(easy: &'static str, medium: &'static str, hard: &'static str) -> Self {
        Self {
            easy: DifficultySettings {
                time_limit: Duration::from_secs(20),
                base_score: 100,
                label: easy,
            },
            medium: DifficultySettings {
                time_limit: Duration::from_secs(15),
                base_score: 150,
                label: medium,
            },
            hard: DifficultySettings {
                time_limit: Duration::from_secs(12),
                base_score: 200,
                label: hard,
            },
        }
    }

    /// Return the settings for the given difficulty level.
    pub fn get(&self, difficulty: Difficulty) -> &DifficultySettings {
        match difficulty {
            Difficulty::Easy => &self.easy,
            Difficulty::Medium => &self.medium,
            Difficulty::Hard => &self.hard,
        }
    }
}

/// Configuration of a quiz game.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizConfig {
    /// Selected difficulty level.
    pub difficulty: Difficulty,

    /// Settings for each difficulty level.
    pub table: DifficultyTable,

    /// Number of rounds in a game.
    pub total_rounds: usize,

    /// How long the result of an answer stays on screen before the next round.
    pub answer_delay: Duration,

    /// How long the correct answer stays on screen after a timeout.
    pub timeout_delay: Duration,
}

impl QuizConfig {
    /// Configuration for the vocabulary quiz.
    pub fn vocabulary(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            table: DifficultyTable::with_labels("Easy (A2)", "Medium (B2)", "Hard (C1)"),
            total_rounds: TOTAL_ROUNDS,
            answer_delay: Duration::from_millis(1500),
            timeout_delay: Duration::from_millis(1600),
        }
    }

    /// Configuration for the arithmetic quiz.
    pub fn arithmetic(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            table: DifficultyTable::with_labels("Easy", "Medium", "Hard"),
            total_rounds: TOTAL_ROUNDS,
            answer_delay: Duration::from_millis(1400),
            timeout_delay: Duration::from_millis(1600),
        }
    }

    /// Time limit for the selected difficulty.
    pub fn time_limit(&self) -> Duration {
        self.table.get(self.difficulty).time_limit
    }

    /// Base score for the selected difficulty.
    pub fn base_score(&self) -> u32 {
        self.table.get(self.difficulty).base_score
    }

    /// Label of the selected difficulty.
    pub fn label(&self) -> &'static str {
        self.table.get(self.difficulty).label
    }
}

/// User preferences saved between sessions.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// Whether the sound cues are disabled.
    pub muted: bool,

    /// Difficulty level used when none is given on the command line.
    pub difficulty: Difficulty,

    /// Maze width.
    pub maze_cols: usize,

    /// Maze height.
    pub maze_rows: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            muted: false,
            difficulty: Difficulty::default(),
            maze_cols: MAZE_COLS,
            maze_rows: MAZE_ROWS,
        }
    }
}

/// Return the directory where the scores and the settings are saved.
///
/// Fall back to the current directory when the platform has no data directory.
pub fn default_data_dir() -> PathBuf {
    match dirs::data_dir() {
        Some(d) => d.join(APPLICATION_NAME),
        None => PathBuf::from("."),
    }
}
