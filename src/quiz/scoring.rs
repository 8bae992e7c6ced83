/*
scoring.rs

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

//! Quiz scoring rules.

use std::fmt;
use std::time::Duration;

/// Share of the base score given for any correct answer.
const ANSWER_SHARE: f64 = 0.4;

/// Share of the base score given for answering instantly. It decreases linearly with time.
const TIME_SHARE: f64 = 0.6;

/// Return the score multiplier for the given streak of correct answers.
///
/// The streak is the one before the answer being scored.
pub fn streak_bonus(streak: u32) -> f64 {
    match streak {
        7.. => 3.0,
        5..=6 => 2.0,
        3..=4 => 1.5,
        _ => 1.0,
    }
}

/// Return the points for a correct answer.
///
/// `used` is the time the player took, pauses excluded.
pub fn answer_points(base_score: u32, time_limit: Duration, used: Duration, streak: u32) -> u32 {
    let base: f64 = f64::from(base_score);
    let limit: f64 = time_limit.as_secs_f64();
    let left: f64 = if limit > 0.0 {
        ((limit - used.as_secs_f64()) / limit).max(0.0)
    } else {
        0.0
    };
    let time_bonus: f64 = (left * base * TIME_SHARE).round();
    ((base * ANSWER_SHARE + time_bonus) * streak_bonus(streak)).round() as u32
}

/// Final grade.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Grade {
    APlus,
    A,
    B,
    C,
    D,
}

impl Grade {
    /// Compute the grade from the number of correct answers.
    pub fn from_ratio(correct: usize, total: usize) -> Grade {
        if total == 0 {
            return Grade::D;
        }
        let pct: f64 = correct as f64 * 100.0 / total as f64;
        if pct >= 87.0 {
            Grade::APlus
        } else if pct >= 73.0 {
            Grade::A
        } else if pct >= 60.0 {
            Grade::B
        } else if pct >= 47.0 {
            Grade::C
        } else {
            Grade::D
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s: &str = match self {
            Grade::APlus => "A+",
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
        };
        write!(f, "{s}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn streak_table() {
        let streaks = [0, 2, 3, 4, 5, 6, 7, 10];
        let expected = [1.0, 1.0, 1.5, 1.5, 2.0, 2.0, 3.0, 3.0];
        for (s, m) in streaks.iter().zip(expected) {
            assert_eq!(streak_bonus(*s), m, "streak {s}");
        }
    }

    #[test]
    fn points() {
        let limit = Duration::from_secs(15);
        // Instant answer: 60 + 90
        assert_eq!(answer_points(150, limit, Duration::ZERO, 0), 150);
        // Half the time: 60 + 45
        assert_eq!(answer_points(150, limit, Duration::from_millis(7500), 0), 105);
        // Out of time: only the answer share
        assert_eq!(answer_points(150, limit, Duration::from_secs(20), 0), 60);
        // Streak of 3 before the answer
        assert_eq!(answer_points(150, limit, Duration::from_millis(7500), 3), 158);
        // Streak of 7: (40 + 60) * 3
        assert_eq!(answer_points(100, Duration::from_secs(20), Duration::ZERO, 7), 300);
    }

    #[test]
    fn grades() {
        assert_eq!(Grade::from_ratio(15, 15), Grade::APlus);
        assert_eq!(Grade::from_ratio(13, 15), Grade::A);
        assert_eq!(Grade::from_ratio(11, 15), Grade::A);
        assert_eq!(Grade::from_ratio(10, 15), Grade::B);
        assert_eq!(Grade::from_ratio(9, 15), Grade::B);
        assert_eq!(Grade::from_ratio(8, 15), Grade::C);
        assert_eq!(Grade::from_ratio(7, 15), Grade::D);
        assert_eq!(Grade::from_ratio(6, 15), Grade::D);
        assert_eq!(Grade::from_ratio(0, 0), Grade::D);
        assert_eq!(Grade::APlus.to_string(), "A+");
    }
}
