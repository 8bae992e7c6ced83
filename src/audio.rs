/*
audio.rs

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

//! Sound cues.
//!
//! The games only name the cue they want to hear. How the cue is rendered is up to the
//! [`AudioCues`] implementation. Playing a cue is fire-and-forget: implementations must not
//! block and must not fail into the caller.

use log::debug;
use std::cell::{Cell, RefCell};
use std::fmt;
use std::io::{Write, stdout};

/// Sound effects.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Cue {
    /// A piece is dropped into place.
    Place,

    /// A card is flipped, also used for correct quiz answers.
    Flip,

    /// The player jumps.
    Jump,

    /// The player hits a wall.
    Hit,

    /// The player wins.
    Win,
}

impl fmt::Display for Cue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name: &str = match self {
            Cue::Place => "place",
            Cue::Flip => "flip",
            Cue::Jump => "jump",
            Cue::Hit => "hit",
            Cue::Win => "win",
        };
        write!(f, "{name}")
    }
}

/// Audio cue emitter.
pub trait AudioCues {
    /// Play the given cue, unless the audio is muted.
    fn play(&self, cue: Cue);

    /// Whether the audio is muted.
    fn is_muted(&self) -> bool;

    /// Mute or unmute the audio.
    fn set_muted(&self, muted: bool);
}

/// Audio for the terminal: ring the bell for the cues that matter.
#[derive(Debug, Default)]
pub struct TerminalAudio {
    muted: Cell<bool>,
}

impl TerminalAudio {
    /// Create a [`TerminalAudio`] object.
    pub fn new(muted: bool) -> Self {
        Self {
            muted: Cell::new(muted),
        }
    }
}

impl AudioCues for TerminalAudio {
    fn play(&self, cue: Cue) {
        debug!("Cue {cue} (muted = {})", self.muted.get());
        if self.muted.get() {
            return;
        }
        if matches!(cue, Cue::Hit | Cue::Win) {
            let mut out = stdout();
            // The bell is cosmetic, write errors are not worth reporting
            let _ = out.write_all(b"\x07");
            let _ = out.flush();
        }
    }

    fn is_muted(&self) -> bool {
        self.muted.get()
    }

    fn set_muted(&self, muted: bool) {
        self.muted.set(muted);
    }
}

/// Audio that remembers the cues instead of playing them.
#[derive(Debug, Default)]
pub struct RecordingAudio {
    muted: Cell<bool>,
    played: RefCell<Vec<Cue>>,
}

impl RecordingAudio {
    /// Create a [`RecordingAudio`] object.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cues played so far.
    pub fn played(&self) -> Vec<Cue> {
        self.played.borrow().clone()
    }
}

impl AudioCues for RecordingAudio {
    fn play(&self, cue: Cue) {
        if !self.muted.get() {
            self.played.borrow_mut().push(cue);
        }
    }

    fn is_muted(&self) -> bool {
        self.muted.get()
    }

    fn set_muted(&self, muted: bool) {
        self.muted.set(muted);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn muted_audio_records_nothing() {
        let audio = RecordingAudio::new();
        audio.play(Cue::Hit);
        audio.set_muted(true);
        assert!(audio.is_muted());
        audio.play(Cue::Win);
        assert_eq!(audio.played(), vec![Cue::Hit]);
    }

    #[test]
    fn terminal_audio_toggles() {
        let audio = TerminalAudio::new(true);
        audio.play(Cue::Win);
        assert!(audio.is_muted());
        audio.set_muted(false);
        assert!(!audio.is_muted());
    }
}
