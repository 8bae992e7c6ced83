/*
distractors.rs

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

//! Build wrong answers for the arithmetic questions.
//!
//! Every builder returns exactly three distinct strings, all different from the correct answer.
//! Every search loop is capped. The deterministic fallbacks walk away from the answer one step at
//! a time, and each step gives a new value, so the cap is never reached in practice.

use rand::Rng;

use crate::config::Difficulty;

/// Number of distractors in a question.
pub const DISTRACTOR_COUNT: usize = 3;

/// Maximum number of candidates tried by a search loop.
const MAX_ATTEMPTS: usize = 64;

/// Format a number the way answers are displayed. Integral values have no decimal part.
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        // Shortest representation, without the floating point noise of the computation
        let s: String = format!("{value:.6}");
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

/// Format a fraction, reduced. The denominator is omitted when it is 1.
pub fn format_fraction(numerator: i64, denominator: i64) -> String {
    let g: i64 = gcd(numerator, denominator).max(1);
    let (n, d) = (numerator / g, denominator / g);
    if d == 1 { format!("{n}") } else { format!("{n}/{d}") }
}

/// Format quadratic roots, as in `-2 and 3`.
pub fn format_roots(roots: &[i64]) -> String {
    roots
        .iter()
        .map(|r| r.to_string())
        .collect::<Vec<String>>()
        .join(" and ")
}

/// Greatest common divisor, always positive (or zero when both values are zero).
pub fn gcd(a: i64, b: i64) -> i64 {
    let (mut a, mut b) = (a.abs(), b.abs());
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Collect unique candidates, skipping the correct answer.
struct Picker {
    correct: String,
    picked: Vec<String>,
}

impl Picker {
    fn new(correct: String) -> Self {
        Self {
            correct,
            picked: Vec::with_capacity(DISTRACTOR_COUNT),
        }
    }

    fn is_full(&self) -> bool {
        self.picked.len() >= DISTRACTOR_COUNT
    }

    /// Keep the candidate if it is new. Return whether the picker is full.
    fn offer(&mut self, candidate: String) -> bool {
        if !self.is_full() && candidate != self.correct && !self.picked.contains(&candidate) {
            self.picked.push(candidate);
        }
        self.is_full()
    }
}

/// Return the spread of the numeric distractors for the given difficulty.
fn spread<R: Rng + ?Sized>(difficulty: Difficulty, rng: &mut R) -> i64 {
    match difficulty {
        Difficulty::Easy => rng.random_range(1..=8),
        Difficulty::Medium => rng.random_range(1..=15),
        Difficulty::Hard => rng.random_range(1..=10),
    }
}

/// Build three wrong answers close to a numeric answer.
pub fn numeric<R: Rng + ?Sized>(answer: f64, difficulty: Difficulty, rng: &mut R) -> Vec<String> {
    let s: i64 = spread(difficulty, rng);
    let mut picker = Picker::new(format_number(answer));

    for off in [s, -s, 2 * s, -2 * s, 3 * s, -3 * s, 1, -1, 2, -2] {
        if picker.offer(format_number(answer + off as f64)) {
            return picker.picked;
        }
    }
    for _ in 0..MAX_ATTEMPTS {
        let off: i64 = rng.random_range(1..=2 * s);
        let off: i64 = if rng.random_bool(0.5) { off } else { -off };
        if picker.offer(format_number(answer + off as f64)) {
            return picker.picked;
        }
    }
    for off in 1..=MAX_ATTEMPTS as i64 {
        if picker.offer(format_number(answer + off as f64)) {
            break;
        }
    }
    picker.picked
}

/// Build three wrong answers for a fraction sum.
///
/// The candidates keep the reduced denominator of the answer and change the numerator.
pub fn fraction(numerator: i64, denominator: i64) -> Vec<String> {
    let g: i64 = gcd(numerator, denominator).max(1);
    let (rn, rd) = (numerator / g, denominator / g);
    let mut picker = Picker::new(format_fraction(rn, rd));

    for off in [-1, 1, 2, -2] {
        let n: i64 = rn + off;
        if n > 0 && picker.offer(format_fraction(n, rd)) {
            return picker.picked;
        }
    }
    // Reduced candidates can collide, so keep moving away from the answer
    for off in 3..MAX_ATTEMPTS as i64 {
        if picker.offer(format_fraction(rn + off, rd)) {
            break;
        }
    }
    picker.picked
}

/// Build three wrong answers for the roots of a quadratic equation.
///
/// `roots` holds one or two roots, sorted.
pub fn roots(roots: &[i64]) -> Vec<String> {
    let mut picker = Picker::new(format_roots(roots));

    let shifted = |delta: i64| -> String {
        format_roots(&roots.iter().map(|r| r + delta).collect::<Vec<i64>>())
    };
    let reversed: Vec<i64> = roots.iter().rev().copied().collect();

    for candidate in [shifted(1), shifted(-1), format_roots(&reversed)] {
        if picker.offer(candidate) {
            return picker.picked;
        }
    }
    for delta in 2..MAX_ATTEMPTS as i64 {
        if picker.offer(shifted(delta)) || picker.offer(shifted(-delta)) {
            break;
        }
    }
    picker.picked
}
