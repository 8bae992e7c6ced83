/*
arithmetic.rs

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

//! Arithmetic question bank.
//!
//! Questions are generated on demand, so the bank has no pool. Easy questions are two and three
//! digit operations, medium questions mix operations, percentages, powers, and fractions, and
//! hard questions are equations, percentage changes, and sequences.

use log::debug;
use rand::Rng;
use rand::seq::IndexedRandom;

use super::distractors::{self, format_fraction, format_number, format_roots};
use super::question::{Question, QuestionBank};
use crate::config::Difficulty;
use crate::highscores::GameId;

/// Percentages used in the medium questions.
const PERCENTAGES: [i64; 7] = [10, 15, 20, 25, 30, 40, 50];

/// Rates used in the percentage change questions.
const RATES: [i64; 5] = [5, 10, 15, 20, 25];

/// Expected answer of a problem.
#[derive(Debug, Clone, PartialEq)]
pub enum Answer {
    Number(f64),

    /// Fraction, not necessarily reduced.
    Fraction { numerator: i64, denominator: i64 },

    /// Roots of a quadratic equation, sorted and without duplicates.
    Roots(Vec<i64>),
}

impl Answer {
    /// Return the answer as displayed in the options.
    pub fn to_text(&self) -> String {
        match self {
            Answer::Number(n) => format_number(*n),
            Answer::Fraction {
                numerator,
                denominator,
            } => format_fraction(*numerator, *denominator),
            Answer::Roots(r) => format_roots(r),
        }
    }
}

/// Generated problem, before distractors are added.
#[derive(Debug, Clone, PartialEq)]
pub struct Problem {
    pub prompt: String,
    pub category: &'static str,
    pub answer: Answer,
}

impl Problem {
    fn number(prompt: String, category: &'static str, answer: i64) -> Self {
        Self {
            prompt,
            category,
            answer: Answer::Number(answer as f64),
        }
    }
}

/// Format `value` as a trailing term: ` + 3`, ` − 3`, or nothing for zero.
fn signed_term(value: i64, suffix: &str) -> String {
    match value {
        0 => String::new(),
        v if v > 0 => format!(" + {v}{suffix}"),
        v => format!(" − {}{suffix}", v.abs()),
    }
}

/// Generate an easy problem: addition, subtraction, multiplication, or division.
pub fn easy_problem<R: Rng + ?Sized>(rng: &mut R) -> Problem {
    match rng.random_range(0..4) {
        0 => {
            let a: i64 = rng.random_range(50..=999);
            let b: i64 = rng.random_range(50..=999);
            Problem::number(format!("{a} + {b} = ?"), "Addition", a + b)
        }
        1 => {
            let a: i64 = rng.random_range(100..=999);
            let b: i64 = rng.random_range(10..=a);
            Problem::number(format!("{a} − {b} = ?"), "Subtraction", a - b)
        }
        2 => {
            let a: i64 = rng.random_range(2..=12);
            let b: i64 = rng.random_range(11..=99);
            Problem::number(format!("{a} × {b} = ?"), "Multiplication", a * b)
        }
        _ => {
            let b: i64 = rng.random_range(2..=12);
            let q: i64 = rng.random_range(11..=99);
            Problem::number(format!("{} ÷ {b} = ?", b * q), "Division", q)
        }
    }
}

/// Generate a medium problem.
pub fn medium_problem<R: Rng + ?Sized>(rng: &mut R) -> Problem {
    match rng.random_range(0..5) {
        0 if rng.random_bool(0.5) => {
            let a: i64 = rng.random_range(10..=50);
            let b: i64 = rng.random_range(10..=50);
            let c: i64 = rng.random_range(2..=9);
            Problem::number(
                format!("({a} + {b}) × {c} = ?"),
                "Mixed operations",
                (a + b) * c,
            )
        }
        0 => {
            let a: i64 = rng.random_range(2..=12);
            let b: i64 = rng.random_range(2..=12);
            let c: i64 = rng.random_range(2..=8);
            let d: i64 = rng.random_range(2..=8);
            Problem::number(
                format!("{a} × {b} + {c} × {d} = ?"),
                "Order of operations",
                a * b + c * d,
            )
        }
        1 => {
            let percent: i64 = *PERCENTAGES.choose(rng).unwrap_or(&10);
            let y: i64 = rng.random_range(2..=20) * 10;
            Problem {
                prompt: format!("{percent}% of {y} = ?"),
                category: "Percentages",
                answer: Answer::Number((y * percent) as f64 / 100.0),
            }
        }
        2 if rng.random_bool(0.5) => {
            let n: i64 = rng.random_range(5..=20);
            Problem::number(format!("{n}² = ?"), "Powers", n * n)
        }
        2 => {
            let n: i64 = rng.random_range(2..=8);
            Problem::number(format!("{n}³ = ?"), "Powers", n * n * n)
        }
        3 => {
            let denominator: i64 = rng.random_range(2..=12);
            let a: i64 = rng.random_range(1..denominator);
            let b: i64 = rng.random_range(1..denominator);
            Problem {
                prompt: format!("{a}/{denominator} + {b}/{denominator} = ?"),
                category: "Fractions",
                answer: Answer::Fraction {
                    numerator: a + b,
                    denominator,
                },
            }
        }
        _ => {
            let a: i64 = rng.random_range(5..=30);
            let b: i64 = rng.random_range(2..=10);
            let c: i64 = rng.random_range(2..=12);
            let d: i64 = rng.random_range(1..=20);
            Problem::number(
                format!("{a} + {b} × {c} − {d} = ?"),
                "Order of operations",
                a + b * c - d,
            )
        }
    }
}

/// Generate a hard problem.
pub fn hard_problem<R: Rng + ?Sized>(rng: &mut R) -> Problem {
    match rng.random_range(0..5) {
        0 => {
            let a: i64 = rng.random_range(2..=9);
            let x: i64 = rng.random_range(-15..=15);
            let b: i64 = rng.random_range(-20..=20);
            Problem::number(
                format!("{a}x{} = {}\nx = ?", signed_term(b, ""), a * x + b),
                "Linear equation",
                x,
            )
        }
        1 => {
            // (x - p)(x - q) expanded
            let p: i64 = rng.random_range(-7..=7);
            let q: i64 = rng.random_range(-7..=7);
            let mut roots: Vec<i64> = vec![p, q];
            roots.sort_unstable();
            roots.dedup();
            Problem {
                prompt: format!(
                    "x²{}{} = 0\nx = ?",
                    signed_term(-(p + q), "x"),
                    signed_term(p * q, "")
                ),
                category: "Quadratic equation",
                answer: Answer::Roots(roots),
            }
        }
        2 => {
            let principal: i64 = rng.random_range(1..=20) * 100;
            let rate: i64 = *RATES.choose(rng).unwrap_or(&10);
            let up: bool = rng.random_bool(0.5);
            let result: i64 = if up {
                principal * (100 + rate) / 100
            } else {
                principal * (100 - rate) / 100
            };
            Problem::number(
                format!(
                    "{principal} is {} by {rate}%.\nResult = ?",
                    if up { "increased" } else { "decreased" }
                ),
                "Percentage change",
                result,
            )
        }
        3 => {
            let x: i64 = rng.random_range(-10..=10);
            let y: i64 = rng.random_range(-10..=10);
            Problem::number(
                format!("x + y = {}\nx − y = {}\nx = ?", x + y, x - y),
                "System of equations",
                x,
            )
        }
        _ => {
            let a0: i64 = rng.random_range(-5..=20);
            let d: i64 = rng.random_range(1..=9) * if rng.random_bool(0.5) { 1 } else { -1 };
            let n: i64 = rng.random_range(6..=12);
            let terms: Vec<String> = (0..4).map(|i| (a0 + i * d).to_string()).collect();
            Problem::number(
                format!("Sequence: {}, ...\nTerm {n} = ?", terms.join(", ")),
                "Arithmetic sequence",
                a0 + (n - 1) * d,
            )
        }
    }
}

/// Generate a problem for the given difficulty level.
pub fn problem<R: Rng + ?Sized>(difficulty: Difficulty, rng: &mut R) -> Problem {
    match difficulty {
        Difficulty::Easy => easy_problem(rng),
        Difficulty::Medium => medium_problem(rng),
        Difficulty::Hard => hard_problem(rng),
    }
}

/// Question bank for the arithmetic quiz.
#[derive(Debug, Default, Clone, Copy)]
pub struct ArithmeticBank;

impl ArithmeticBank {
    /// Create an [`ArithmeticBank`] object.
    pub fn new() -> Self {
        Self
    }
}

impl QuestionBank for ArithmeticBank {
    type Pool = ();

    fn game_id(&self) -> GameId {
        GameId::Arithmetic
    }

    fn draw_pool<R: Rng + ?Sized>(&self, _difficulty: Difficulty, _rng: &mut R) -> Self::Pool {}

    fn next_question<R: Rng + ?Sized>(
        &self,
        _pool: &Self::Pool,
        difficulty: Difficulty,
        round_index: usize,
        rng: &mut R,
    ) -> Question {
        let p: Problem = problem(difficulty, rng);
        debug!("Round {round_index}: {} ({})", p.prompt, p.category);

        let candidates: Vec<String> = match &p.answer {
            Answer::Number(n) => distractors::numeric(*n, difficulty, rng),
            Answer::Fraction {
                numerator,
                denominator,
            } => distractors::fraction(*numerator, *denominator),
            Answer::Roots(r) => distractors::roots(r),
        };
        let correct: String = p.answer.to_text();
        let explanation: String = format!("{} {correct}", p.prompt.trim_end_matches('?').trim_end());
        Question::assemble(p.prompt, p.category, correct, candidates, rng)
            .with_explanation(explanation)
    }
}
