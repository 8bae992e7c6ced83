/*
quiz.rs

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

//! Round-based quizzes.
//!
//! [`engine::QuizEngine`] runs the rounds, the countdown, and the scoring. It gets its questions
//! from a [`question::QuestionBank`]: [`vocabulary::VocabularyBank`] for the English vocabulary
//! quiz and [`arithmetic::ArithmeticBank`] for the mental arithmetic quiz.

pub mod arithmetic;
pub mod distractors;
pub mod engine;
pub mod question;
pub mod scoring;
pub mod timer;
pub mod vocabulary;
