/*
services.rs

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

//! Collaborators shared by the games.
//!
//! A [`Services`] object bundles the clock, the score store, the audio cue emitter, and the
//! celebration trigger. The host creates it once and hands a clone to every game; clones share
//! the same collaborators.

use std::cell::RefCell;
use std::rc::Rc;

use crate::audio::{AudioCues, RecordingAudio, TerminalAudio};
use crate::celebration::{Celebration, RecordingCelebration, TerminalCelebration};
use crate::clock::{Clock, ManualClock, SystemClock};
use crate::highscores::{HighScores, ScoreStore};

/// Collaborators of the games.
#[derive(Clone)]
pub struct Services {
    /// Time source for the game timers.
    pub clock: Rc<dyn Clock>,

    /// Where the final scores go.
    pub scores: Rc<RefCell<dyn ScoreStore>>,

    /// Sound cues.
    pub audio: Rc<dyn AudioCues>,

    /// Win effect.
    pub celebration: Rc<dyn Celebration>,
}

impl Services {
    /// Create the collaborators for the terminal application.
    ///
    /// The provided [`HighScores`] object is shared, so that the caller can save it after a game.
    pub fn terminal(scores: Rc<RefCell<HighScores>>, muted: bool) -> Self {
        Self {
            clock: Rc::new(SystemClock),
            scores,
            audio: Rc::new(TerminalAudio::new(muted)),
            celebration: Rc::new(TerminalCelebration),
        }
    }

    /// Create collaborators that record what the games do, driven by a manual clock.
    pub fn recording() -> (Self, Probe) {
        let probe = Probe {
            clock: ManualClock::new(),
            scores: Rc::new(RefCell::new(HighScores::new())),
            audio: Rc::new(RecordingAudio::new()),
            celebration: Rc::new(RecordingCelebration::new()),
        };
        let services = Self {
            clock: Rc::new(probe.clock.clone()),
            scores: probe.scores.clone(),
            audio: probe.audio.clone(),
            celebration: probe.celebration.clone(),
        };
        (services, probe)
    }
}

/// Typed handles on the collaborators created by [`Services::recording`].
pub struct Probe {
    pub clock: ManualClock,
    pub scores: Rc<RefCell<HighScores>>,
    pub audio: Rc<RecordingAudio>,
    pub celebration: Rc<RecordingCelebration>,
}
