/*
question.rs

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

//! Quiz questions and question banks.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::config::Difficulty;
use crate::highscores::GameId;

/// Number of options in a question.
pub const OPTION_COUNT: usize = 4;

/// Multiple-choice question.
#[derive(Debug, Clone, PartialEq)]
pub struct Question {
    /// Text of the question.
    pub prompt: String,

    /// Answers to choose from. One of them is [`Question::correct_answer`].
    pub options: Vec<String>,

    /// The expected answer.
    pub correct_answer: String,

    /// Kind of question, displayed as a badge.
    pub category: String,

    /// Text displayed once the round is over.
    pub explanation: Option<String>,
}

impl Question {
    /// Build a question from the correct answer and candidate distractors.
    ///
    /// Candidates equal to the correct answer or to an earlier candidate are skipped. The first
    /// three remaining candidates are shuffled with the correct answer.
    pub fn assemble<R: Rng + ?Sized>(
        prompt: String,
        category: &str,
        correct_answer: String,
        candidates: Vec<String>,
        rng: &mut R,
    ) -> Question {
        let mut options: Vec<String> = Vec::with_capacity(OPTION_COUNT);
        options.push(correct_answer.clone());
        for c in candidates {
            if options.len() == OPTION_COUNT {
                break;
            }
            if !options.contains(&c) {
                options.push(c);
            }
        }
        debug_assert_eq!(options.len(), OPTION_COUNT, "not enough distractors");
        options.shuffle(rng);

        Question {
            prompt,
            options,
            correct_answer,
            category: category.to_string(),
            explanation: None,
        }
    }

    /// Add the text displayed once the round is over.
    pub fn with_explanation(mut self, explanation: String) -> Self {
        self.explanation = Some(explanation);
        self
    }

    /// Whether the given choice is the correct answer.
    pub fn is_correct(&self, choice: &str) -> bool {
        choice == self.correct_answer
    }

    /// Return the option for a 1-based number, as typed by the player.
    pub fn option_by_number(&self, number: usize) -> Option<&str> {
        number
            .checked_sub(1)
            .and_then(|i| self.options.get(i))
            .map(String::as_str)
    }

    /// Return the option matching what the player typed.
    ///
    /// A number from 1 to 4 selects the option at that position. Anything else must match the
    /// text of an option, ignoring ASCII case.
    pub fn option_from_input(&self, input: &str) -> Option<&str> {
        let input: &str = input.trim();
        if let Ok(n) = input.parse::<usize>()
            && let Some(option) = self.option_by_number(n)
        {
            return Some(option);
        }
        self.options
            .iter()
            .find(|o| o.eq_ignore_ascii_case(input))
            .map(String::as_str)
    }
}

/// Source of questions for a quiz.
///
/// At the start of a game the engine draws a pool from the bank. The pool is then passed back for
/// every round, so that a bank can avoid repeating questions within a game.
pub trait QuestionBank {
    /// Data kept for the duration of a game.
    type Pool;

    /// Scoreboard used by the quiz.
    fn game_id(&self) -> GameId;

    /// Prepare the pool for a new game.
    fn draw_pool<R: Rng + ?Sized>(&self, difficulty: Difficulty, rng: &mut R) -> Self::Pool;

    /// Build the question of the given round.
    fn next_question<R: Rng + ?Sized>(
        &self,
        pool: &Self::Pool,
        difficulty: Difficulty,
        round_index: usize,
        rng: &mut R,
    ) -> Question;
}
