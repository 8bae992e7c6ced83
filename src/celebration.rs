/*
celebration.rs

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

//! Celebration effect displayed when the player wins.

use rand::Rng;
use std::cell::RefCell;

/// Visual celebration trigger. Purely cosmetic.
pub trait Celebration {
    /// Start the effect. `intensity` is the number of confetti particles.
    fn celebrate(&self, intensity: u32);
}

/// Celebration for the terminal: print a line of confetti.
#[derive(Debug, Default)]
pub struct TerminalCelebration;

impl TerminalCelebration {
    /// Build the confetti line. One character per particle, at most one terminal line.
    pub fn confetti(intensity: u32) -> String {
        const PARTICLES: [char; 6] = ['*', '+', 'o', '.', '~', '^'];
        let mut rng = rand::rng();
        (0..intensity.min(72))
            .map(|_| PARTICLES[rng.random_range(0..PARTICLES.len())])
            .collect()
    }
}

impl Celebration for TerminalCelebration {
    fn celebrate(&self, intensity: u32) {
        println!("{}", Self::confetti(intensity));
    }
}

/// Celebration that remembers the requested intensities.
#[derive(Debug, Default)]
pub struct RecordingCelebration {
    calls: RefCell<Vec<u32>>,
}

impl RecordingCelebration {
    /// Create a [`RecordingCelebration`] object.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the intensities of the celebrations so far.
    pub fn calls(&self) -> Vec<u32> {
        self.calls.borrow().clone()
    }
}

impl Celebration for RecordingCelebration {
    fn celebrate(&self, intensity: u32) {
        self.calls.borrow_mut().push(intensity);
    }
}
