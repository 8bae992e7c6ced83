/*
highscores.rs

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

//! Manage high scores for the games.
//!
//! The main object, [`HighScores`], maintains a list of top scores for each game.
//! The games report their final score through the [`ScoreStore`] trait, which [`HighScores`]
//! implements.
//! See the [`crate::saver::highscores`] module that saves and restores the [`HighScores`] object.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::error::Error;
use std::fmt;
use std::str::FromStr;

/// Number of entries per scoreboard (number of top scores to keep).
pub const BOARD_SIZE: usize = 10;

/// Game identifiers. Each game has its own scoreboard.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum GameId {
    Puzzle,
    Memory,
    Jump,
    Maze,
    Vocabulary,
    Arithmetic,
}

impl GameId {
    /// All the games, in the order used by the combined scoreboard.
    pub const ALL: [GameId; 6] = [
        GameId::Puzzle,
        GameId::Memory,
        GameId::Jump,
        GameId::Maze,
        GameId::Vocabulary,
        GameId::Arithmetic,
    ];

    /// Identifier used in the save file and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            GameId::Puzzle => "puzzle",
            GameId::Memory => "memory",
            GameId::Jump => "jump",
            GameId::Maze => "maze",
            GameId::Vocabulary => "vocabulary",
            GameId::Arithmetic => "arithmetic",
        }
    }

    /// Name displayed in the scoreboard.
    pub fn label(&self) -> &'static str {
        match self {
            GameId::Puzzle => "Jigsaw",
            GameId::Memory => "Memory",
            GameId::Jump => "Jump",
            GameId::Maze => "Maze",
            GameId::Vocabulary => "Vocabulary",
            GameId::Arithmetic => "Arithmetic",
        }
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for GameId {
    type Err = ScoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GameId::ALL
            .into_iter()
            .find(|g| g.as_str() == s)
            .ok_or_else(|| ScoreError::UnknownGame(s.to_string()))
    }
}

/// Selection of scoreboards.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ScoreFilter {
    /// The scoreboard of one game.
    Game(GameId),

    /// The best scores of all the games together.
    All,
}

impl FromStr for ScoreFilter {
    type Err = ScoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(ScoreFilter::All),
            _ => Ok(ScoreFilter::Game(s.parse()?)),
        }
    }
}

/// Type of errors.
#[derive(Debug, PartialEq)]
pub enum ScoreError {
    /// The game identifier does not match any game. This is a programming error.
    UnknownGame(String),
}

impl fmt::Display for ScoreError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ScoreError::UnknownGame(g) => write!(f, "unknown game \"{g}\""),
        }
    }
}

impl Error for ScoreError {}

/// Object that represent a score.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Score {
    /// Points.
    pub score: u32,

    /// Completion timestamp, which is used to display the date and time in the scoreboard.
    pub when: DateTime<Utc>,

    /// Short summary of the game, such as the time and number of steps.
    pub detail: String,
}

/// Score of a game, as returned by [`ScoreStore::top_n`].
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreEntry {
    pub game: GameId,
    pub score: u32,
    pub when: DateTime<Utc>,
    pub detail: String,
}

impl ScoreEntry {
    fn new(game: GameId, s: &Score) -> Self {
        Self {
            game,
            score: s.score,
            when: s.when,
            detail: s.detail.clone(),
        }
    }
}

/// Persistent top-N score store keyed by game.
pub trait ScoreStore {
    /// Add a score to the scoreboard of the given game and return the position in the
    /// scoreboard, or None if the score does not make it to the board.
    ///
    /// The returned position starts at 1 (top score).
    fn record(&mut self, game: GameId, score: u32, detail: &str) -> Option<usize>;

    /// Return the best scores, sorted from the highest.
    fn top_n(&self, filter: ScoreFilter) -> Vec<ScoreEntry>;
}

/// Sorted list of the top scores for a game.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
struct GameHighScoreBoard {
    /// Sorted list of the top scores.
    /// The number of scores in this list is controlled by the [`BOARD_SIZE`] constant.
    top: Vec<Score>,
}

impl GameHighScoreBoard {
    /// Add a score to the scoreboard and return the position in the board, or None if the
    /// score does not make it to the board.
    ///
    /// Among equal scores, the oldest stays first.
    fn add_score(&mut self, new_score: Score) -> Option<usize> {
        let i: usize = self
            .top
            .iter()
            .position(|s| new_score.score > s.score)
            .unwrap_or(self.top.len());

        if i >= BOARD_SIZE {
            return None;
        }
        self.top.insert(i, new_score);
        self.top.truncate(BOARD_SIZE);
        Some(i + 1)
    }
}

/// List of the scoreboards for the games.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct HighScores {
    /// Map of the [`GameHighScoreBoard`] scoreboards indexed by the game.
    board: HashMap<GameId, GameHighScoreBoard>,
}

impl HighScores {
    /// Create a [`HighScores`] object.
    pub fn new() -> Self {
        Self {
            board: HashMap::new(),
        }
    }

    /// Add a score that was obtained at the given time.
    pub fn add_score(
        &mut self,
        game: GameId,
        score: u32,
        detail: &str,
        when: DateTime<Utc>,
    ) -> Option<usize> {
        let scoreboard: &mut GameHighScoreBoard = self.board.entry(game).or_default();

        scoreboard.add_score(Score {
            score,
            when,
            detail: detail.to_string(),
        })
    }

    /// Return the list of [`Score`] for the given game.
    ///
    /// Return None when the scoreboard is empty.
    pub fn get_score(&self, game: GameId) -> Option<&Vec<Score>> {
        self.board.get(&game).map(|b| &b.top).filter(|t| !t.is_empty())
    }

    /// Return whether the list of scoreboard is empty (no scoreboard for any game)
    pub fn is_empty(&self) -> bool {
        self.board.values().all(|b| b.top.is_empty())
    }

    /// Remove all the scores.
    pub fn clear(&mut self) {
        self.board.clear();
    }
}

impl ScoreStore for HighScores {
    fn record(&mut self, game: GameId, score: u32, detail: &str) -> Option<usize> {
        self.add_score(game, score, detail, Utc::now())
    }

    fn top_n(&self, filter: ScoreFilter) -> Vec<ScoreEntry> {
        match filter {
            ScoreFilter::Game(game) => match self.get_score(game) {
                Some(top) => top.iter().map(|s| ScoreEntry::new(game, s)).collect(),
                None => Vec::new(),
            },
            ScoreFilter::All => {
                let mut rows: Vec<ScoreEntry> = Vec::new();
                for game in GameId::ALL {
                    if let Some(top) = self.get_score(game) {
                        rows.extend(top.iter().map(|s| ScoreEntry::new(game, s)));
                    }
                }
                // For equal scores, the oldest entry comes first whatever the game
                rows.sort_by(|a, b| b.score.cmp(&a.score).then(a.when.cmp(&b.when)));
                rows.truncate(BOARD_SIZE);
                rows
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    #[test]
    fn parse_game_ids() {
        assert_eq!("maze".parse::<GameId>(), Ok(GameId::Maze));
        assert_eq!(
            "chess".parse::<GameId>(),
            Err(ScoreError::UnknownGame("chess".to_string()))
        );
        assert_eq!("all".parse::<ScoreFilter>(), Ok(ScoreFilter::All));
        assert_eq!(
            "arithmetic".parse::<ScoreFilter>(),
            Ok(ScoreFilter::Game(GameId::Arithmetic))
        );
        assert!("".parse::<ScoreFilter>().is_err());
    }

    #[test]
    fn scores_are_sorted_and_ranked() {
        let mut scores = HighScores::new();
        assert_eq!(scores.add_score(GameId::Maze, 500, "a", at(1)), Some(1));
        assert_eq!(scores.add_score(GameId::Maze, 900, "b", at(2)), Some(1));
        assert_eq!(scores.add_score(GameId::Maze, 700, "c", at(3)), Some(2));
        // Equal score goes after the older one
        assert_eq!(scores.add_score(GameId::Maze, 700, "d", at(4)), Some(3));

        let top = scores.top_n(ScoreFilter::Game(GameId::Maze));
        let details: Vec<&str> = top.iter().map(|e| e.detail.as_str()).collect();
        assert_eq!(details, vec!["b", "c", "d", "a"]);
        assert!(top.iter().all(|e| e.game == GameId::Maze));
    }

    #[test]
    fn board_keeps_ten_entries() {
        let mut scores = HighScores::new();
        for i in 0..BOARD_SIZE as u32 {
            scores.add_score(GameId::Vocabulary, 100 + i, "", at(i as i64));
        }
        assert_eq!(scores.add_score(GameId::Vocabulary, 50, "", at(100)), None);
        assert_eq!(scores.add_score(GameId::Vocabulary, 105, "", at(101)), Some(6));

        let top = scores.top_n(ScoreFilter::Game(GameId::Vocabulary));
        assert_eq!(top.len(), BOARD_SIZE);
        assert_eq!(top[0].score, 109);
        assert_eq!(top[BOARD_SIZE - 1].score, 101);
    }

    #[test]
    fn combined_board() {
        let mut scores = HighScores::new();
        for i in 0..8 {
            scores.add_score(GameId::Maze, 1000 * i, "maze", at(i as i64));
            scores.add_score(GameId::Arithmetic, 1000 * i + 500, "quiz", at(i as i64));
        }
        let all = scores.top_n(ScoreFilter::All);
        assert_eq!(all.len(), BOARD_SIZE);
        assert_eq!(all[0].score, 7500);
        assert_eq!(all[0].game, GameId::Arithmetic);
        assert_eq!(all[1].score, 7000);
        assert_eq!(all[1].game, GameId::Maze);
        assert!(all.windows(2).all(|w| w[0].score >= w[1].score));
    }

    #[test]
    fn combined_board_ties() {
        let mut scores = HighScores::new();
        scores.add_score(GameId::Maze, 100, "older", at(1));
        scores.add_score(GameId::Puzzle, 100, "newer", at(5));
        scores.add_score(GameId::Memory, 100, "newest", at(9));
        scores.add_score(GameId::Jump, 200, "best", at(20));

        let all = scores.top_n(ScoreFilter::All);
        let details: Vec<&str> = all.iter().map(|e| e.detail.as_str()).collect();
        assert_eq!(details, vec!["best", "older", "newer", "newest"]);
    }

    #[test]
    fn empty_boards() {
        let mut scores = HighScores::new();
        assert!(scores.is_empty());
        assert!(scores.top_n(ScoreFilter::All).is_empty());
        assert!(scores.get_score(GameId::Jump).is_none());

        scores.record(GameId::Jump, 10, "");
        assert!(!scores.is_empty());
        scores.clear();
        assert!(scores.is_empty());
    }
}
