/*
timer.rs

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

//! Cancellable scheduled tasks.
//!
//! The quiz engine has two kinds of pending work: the countdown of the current round and the
//! delay before the next round. Each one is a [`ScheduledTask`] stored in [`Timers`]. Nothing
//! runs by itself: the engine asks [`Timers::take_due`] for the tasks whose deadline passed.
//! Cancelling a task drops it, so a cancelled task can never fire.

use std::time::{Duration, Instant};

/// What to do when a task fires.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TaskKind {
    /// The player ran out of time.
    Countdown,

    /// Move to the next round.
    Advance,
}

/// Work scheduled for a given time.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ScheduledTask {
    pub kind: TaskKind,

    /// Round that scheduled the task.
    pub round: usize,

    /// When the task fires.
    pub deadline: Instant,
}

impl ScheduledTask {
    /// Time left before the task fires.
    pub fn remaining(&self, now: Instant) -> Duration {
        self.deadline.saturating_duration_since(now)
    }

    /// Whether the task must fire.
    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.deadline
    }
}

/// Pending tasks, at most one of each kind.
#[derive(Debug, Default, Clone)]
pub struct Timers {
    countdown: Option<ScheduledTask>,
    advance: Option<ScheduledTask>,
}

impl Timers {
    /// Create a [`Timers`] object.
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&mut self, kind: TaskKind) -> &mut Option<ScheduledTask> {
        match kind {
            TaskKind::Countdown => &mut self.countdown,
            TaskKind::Advance => &mut self.advance,
        }
    }

    /// Schedule a task. A pending task of the same kind is replaced.
    pub fn schedule(&mut self, kind: TaskKind, round: usize, deadline: Instant) {
        *self.slot(kind) = Some(ScheduledTask {
            kind,
            round,
            deadline,
        });
    }

    /// Cancel the task of the given kind and return it.
    pub fn cancel(&mut self, kind: TaskKind) -> Option<ScheduledTask> {
        self.slot(kind).take()
    }

    /// Cancel all the tasks.
    pub fn cancel_all(&mut self) {
        self.countdown = None;
        self.advance = None;
    }

    /// Return the pending task of the given kind.
    pub fn get(&self, kind: TaskKind) -> Option<&ScheduledTask> {
        match kind {
            TaskKind::Countdown => self.countdown.as_ref(),
            TaskKind::Advance => self.advance.as_ref(),
        }
    }

    /// Whether no task is pending.
    pub fn is_idle(&self) -> bool {
        self.countdown.is_none() && self.advance.is_none()
    }

    /// Remove and return the earliest task that is due, if any.
    pub fn take_due(&mut self, now: Instant) -> Option<ScheduledTask> {
        let kind: TaskKind = [self.countdown, self.advance]
            .into_iter()
            .flatten()
            .filter(|t| t.is_due(now))
            .min_by_key(|t| t.deadline)?
            .kind;
        self.cancel(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cancelled_tasks_never_fire() {
        let t0 = Instant::now();
        let mut timers = Timers::new();
        timers.schedule(TaskKind::Countdown, 0, t0 + Duration::from_secs(1));
        assert!(timers.cancel(TaskKind::Countdown).is_some());
        assert_eq!(timers.take_due(t0 + Duration::from_secs(5)), None);
        assert!(timers.is_idle());
    }

    #[test]
    fn earliest_due_task_first() {
        let t0 = Instant::now();
        let mut timers = Timers::new();
        timers.schedule(TaskKind::Advance, 3, t0 + Duration::from_millis(800));
        timers.schedule(TaskKind::Countdown, 3, t0 + Duration::from_millis(500));

        assert_eq!(timers.take_due(t0 + Duration::from_millis(100)), None);
        let first = timers.take_due(t0 + Duration::from_secs(1)).unwrap();
        assert_eq!(first.kind, TaskKind::Countdown);
        let second = timers.take_due(t0 + Duration::from_secs(1)).unwrap();
        assert_eq!(second.kind, TaskKind::Advance);
        assert!(timers.is_idle());
    }

    #[test]
    fn remaining_time() {
        let t0 = Instant::now();
        let task = ScheduledTask {
            kind: TaskKind::Countdown,
            round: 0,
            deadline: t0 + Duration::from_millis(4200),
        };
        assert_eq!(task.remaining(t0), Duration::from_millis(4200));
        assert_eq!(task.remaining(t0 + Duration::from_secs(9)), Duration::ZERO);
        assert!(!task.is_due(t0));
    }
}
