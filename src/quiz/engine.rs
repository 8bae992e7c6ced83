/*
engine.rs

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

//! Round-based quiz state machine.
//!
//! The engine is shared by all the quizzes: a [`QuestionBank`] provides the questions and a
//! [`QuizConfig`] the time limits and scores. The engine never runs by itself. The host submits
//! the player actions and calls [`QuizEngine::tick`] regularly so that the countdown and the delay
//! between rounds can fire. What happens is reported as [`QuizEvent`] values that the host polls.
//!
//! ```text
//!  Idle --start--> Playing <--pause/resume--> Paused
//!                     |                          |
//!                     +--- end / last round -----+--> Finished --start--> Playing
//! ```
//!
//! [`QuizEngine::reset`] returns to `Idle` from any state.

use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::VecDeque;
use std::time::{Duration, Instant};

use super::question::{Question, QuestionBank};
use super::scoring::{Grade, answer_points, streak_bonus};
use super::timer::{ScheduledTask, TaskKind, Timers};
use crate::audio::Cue;
use crate::config::{Difficulty, QuizConfig};
use crate::services::Services;

/// Minimum number of correct answers for the celebration.
const CELEBRATION_THRESHOLD: usize = 10;

/// Number of confetti for the celebration.
const CELEBRATION_INTENSITY: u32 = 60;

/// State of the quiz.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Playing,
    Paused,
    Finished,
}

/// Result of a game.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizSummary {
    pub correct: usize,
    pub total: usize,
    pub score: u32,
    pub grade: Grade,

    /// Position in the scoreboard, if the score made it.
    pub position: Option<usize>,
}

/// What happened in the engine.
#[derive(Debug, Clone, PartialEq)]
pub enum QuizEvent {
    /// A new question is displayed. `round` starts at 0.
    RoundStarted { round: usize, question: Question },

    /// The player answered the question.
    Answered {
        choice: String,
        correct: bool,
        correct_answer: String,
        points: u32,
        multiplier: f64,
    },

    /// The player ran out of time.
    TimedOut { correct_answer: String },

    Paused,
    Resumed,
    Finished(QuizSummary),
}

/// Read-only view of the engine, for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizSnapshot<'a> {
    pub phase: Phase,

    /// Round number as displayed, from 1 to `total_rounds`.
    pub round: usize,
    pub total_rounds: usize,
    pub correct: usize,
    pub streak: u32,
    pub score: u32,
    pub question: Option<&'a Question>,
    pub answered: bool,
    pub difficulty_label: &'static str,

    /// Time left to answer the question.
    pub time_remaining: Duration,

    /// Time left as a fraction of the time limit, between 0 and 1.
    pub time_fraction: f64,
}

/// Round-based quiz state machine.
pub struct QuizEngine<B: QuestionBank> {
    bank: B,
    config: QuizConfig,
    services: Services,
    rng: StdRng,

    /// Questions for the game in progress.
    pool: Option<B::Pool>,

    phase: Phase,
    round_index: usize,
    correct_count: usize,
    total_score: u32,

    /// Number of consecutive correct answers.
    streak: u32,

    /// Whether the current round got an answer or timed out.
    answered: bool,
    current_question: Option<Question>,

    /// Task suspended by a pause, with the time it had left.
    suspended: Option<(TaskKind, Duration)>,

    /// Countdown time left when the round was answered.
    frozen_remaining: Duration,

    timers: Timers,
    events: VecDeque<QuizEvent>,
}

impl<B: QuestionBank> QuizEngine<B> {
    /// Create a [`QuizEngine`] object.
    pub fn new(bank: B, config: QuizConfig, services: Services) -> Self {
        Self::with_rng(bank, config, services, StdRng::from_os_rng())
    }

    /// Create a [`QuizEngine`] object with reproducible questions.
    pub fn with_seed(bank: B, config: QuizConfig, services: Services, seed: u64) -> Self {
        Self::with_rng(bank, config, services, StdRng::seed_from_u64(seed))
    }

    fn with_rng(bank: B, config: QuizConfig, services: Services, rng: StdRng) -> Self {
        Self {
            bank,
            config,
            services,
            rng,
            pool: None,
            phase: Phase::Idle,
            round_index: 0,
            correct_count: 0,
            total_score: 0,
            streak: 0,
            answered: false,
            current_question: None,
            suspended: None,
            frozen_remaining: Duration::ZERO,
            timers: Timers::new(),
            events: VecDeque::new(),
        }
    }

    fn now(&self) -> Instant {
        self.services.clock.now()
    }

    fn clear_counters(&mut self) {
        self.timers.cancel_all();
        self.suspended = None;
        self.round_index = 0;
        self.correct_count = 0;
        self.total_score = 0;
        self.streak = 0;
        self.answered = false;
        self.current_question = None;
        self.frozen_remaining = Duration::ZERO;
    }

    /// Start a new game.
    pub fn start(&mut self) {
        if !matches!(self.phase, Phase::Idle | Phase::Finished) {
            debug!("Cannot start a game in the {:?} phase", self.phase);
            return;
        }
        self.clear_counters();
        self.pool = Some(self.bank.draw_pool(self.config.difficulty, &mut self.rng));
        self.phase = Phase::Playing;
        debug!(
            "Starting a {:?} game ({})",
            self.bank.game_id(),
            self.config.difficulty
        );
        let now: Instant = self.now();
        self.show_round(now);
    }

    /// Display the question of the current round and start the countdown.
    fn show_round(&mut self, now: Instant) {
        let Some(pool) = self.pool.as_ref() else {
            debug!("No question pool");
            return;
        };
        let question: Question = self.bank.next_question(
            pool,
            self.config.difficulty,
            self.round_index,
            &mut self.rng,
        );
        self.answered = false;
        self.frozen_remaining = Duration::ZERO;
        self.current_question = Some(question.clone());
        self.timers.schedule(
            TaskKind::Countdown,
            self.round_index,
            now + self.config.time_limit(),
        );
        self.events.push_back(QuizEvent::RoundStarted {
            round: self.round_index,
            question,
        });
    }

    /// Process the answer of the player.
    ///
    /// The choice must be one of the options of the current question. If the countdown is already
    /// over, the timeout is processed instead and the answer is ignored.
    pub fn submit_answer(&mut self, choice: &str) {
        if self.phase != Phase::Playing || self.answered {
            debug!("Ignoring answer \"{choice}\"");
            return;
        }
        let now: Instant = self.now();
        if self
            .timers
            .get(TaskKind::Countdown)
            .is_some_and(|t| t.is_due(now))
        {
            debug!("Answer \"{choice}\" arrived after the deadline");
            self.tick();
            return;
        }
        let Some(question) = self.current_question.as_ref() else {
            return;
        };
        if !question.options.iter().any(|o| o == choice) {
            debug!("\"{choice}\" is not an option");
            return;
        }
        let correct: bool = question.is_correct(choice);
        let correct_answer: String = question.correct_answer.clone();

        self.answered = true;
        let remaining: Duration = self
            .timers
            .cancel(TaskKind::Countdown)
            .map_or(Duration::ZERO, |t| t.remaining(now));
        self.frozen_remaining = remaining;

        let (points, multiplier) = if correct {
            let multiplier: f64 = streak_bonus(self.streak);
            let used: Duration = self.config.time_limit().saturating_sub(remaining);
            let points: u32 = answer_points(
                self.config.base_score(),
                self.config.time_limit(),
                used,
                self.streak,
            );
            self.total_score += points;
            self.correct_count += 1;
            self.streak += 1;
            self.services.audio.play(Cue::Flip);
            (points, multiplier)
        } else {
            self.streak = 0;
            (0, 1.0)
        };
        debug!(
            "Round {}: \"{choice}\" is {} (+{points}, x{multiplier})",
            self.round_index,
            if correct { "correct" } else { "wrong" }
        );

        self.events.push_back(QuizEvent::Answered {
            choice: choice.to_string(),
            correct,
            correct_answer,
            points,
            multiplier,
        });
        self.timers.schedule(
            TaskKind::Advance,
            self.round_index,
            now + self.config.answer_delay,
        );
    }

    /// Fire the tasks whose deadline passed.
    pub fn tick(&mut self) {
        let now: Instant = self.now();
        while let Some(task) = self.timers.take_due(now) {
            self.fire(task, now);
        }
    }

    fn fire(&mut self, task: ScheduledTask, now: Instant) {
        if self.phase != Phase::Playing || task.round != self.round_index {
            debug!("Dropping stale task {task:?}");
            return;
        }
        match task.kind {
            TaskKind::Countdown => {
                if self.answered {
                    return;
                }
                self.answered = true;
                self.streak = 0;
                self.frozen_remaining = Duration::ZERO;
                let correct_answer: String = self
                    .current_question
                    .as_ref()
                    .map(|q| q.correct_answer.clone())
                    .unwrap_or_default();
                debug!("Round {}: out of time", self.round_index);
                self.events.push_back(QuizEvent::TimedOut { correct_answer });
                self.timers.schedule(
                    TaskKind::Advance,
                    self.round_index,
                    now + self.config.timeout_delay,
                );
            }
            TaskKind::Advance => {
                self.round_index += 1;
                if self.round_index >= self.config.total_rounds {
                    self.finish();
                } else {
                    self.show_round(now);
                }
            }
        }
    }

    /// Pause the game. The time left is kept for [`QuizEngine::resume`].
    pub fn pause(&mut self) {
        if self.phase != Phase::Playing {
            debug!("Cannot pause in the {:?} phase", self.phase);
            return;
        }
        // A deadline that already passed is processed before pausing
        self.tick();
        if self.phase != Phase::Playing {
            return;
        }
        let now: Instant = self.now();
        let kind: TaskKind = if self.answered {
            TaskKind::Advance
        } else {
            TaskKind::Countdown
        };
        self.suspended = self.timers.cancel(kind).map(|t| (kind, t.remaining(now)));
        self.timers.cancel_all();
        self.phase = Phase::Paused;
        debug!("Paused with {:?} left", self.suspended);
        self.events.push_back(QuizEvent::Paused);
    }

    /// Resume a paused game where it stopped.
    pub fn resume(&mut self) {
        if self.phase != Phase::Paused {
            debug!("Cannot resume in the {:?} phase", self.phase);
            return;
        }
        self.phase = Phase::Playing;
        let now: Instant = self.now();
        if let Some((kind, remaining)) = self.suspended.take() {
            self.timers.schedule(kind, self.round_index, now + remaining);
        }
        debug!("Resumed");
        self.events.push_back(QuizEvent::Resumed);
    }

    /// Stop the game before the last round.
    pub fn end(&mut self) {
        if !matches!(self.phase, Phase::Playing | Phase::Paused) {
            debug!("Cannot end a game in the {:?} phase", self.phase);
            return;
        }
        self.finish();
    }

    /// Grade the game, record the score, and celebrate good results.
    fn finish(&mut self) {
        self.timers.cancel_all();
        self.suspended = None;
        self.current_question = None;
        self.phase = Phase::Finished;

        let total: usize = self.config.total_rounds;
        let grade: Grade = Grade::from_ratio(self.correct_count, total);
        let detail: String = format!(
            "{}/{total} • {}",
            self.correct_count, self.config.difficulty
        );
        let position: Option<usize> = self.services.scores.borrow_mut().record(
            self.bank.game_id(),
            self.total_score,
            &detail,
        );
        debug!(
            "Game over: {} points, grade {grade} ({detail}), position {position:?}",
            self.total_score
        );

        if self.correct_count >= CELEBRATION_THRESHOLD {
            self.services.audio.play(Cue::Win);
            self.services.celebration.celebrate(CELEBRATION_INTENSITY);
        }
        self.events.push_back(QuizEvent::Finished(QuizSummary {
            correct: self.correct_count,
            total,
            score: self.total_score,
            grade,
            position,
        }));
    }

    /// Abandon the game and return to the idle state.
    pub fn reset(&mut self) {
        self.clear_counters();
        self.pool = None;
        self.phase = Phase::Idle;
        debug!("Quiz reset");
    }

    /// Change the difficulty level. The game in progress is abandoned.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.config.difficulty = difficulty;
        self.reset();
    }

    /// Remove and return all the pending events.
    pub fn drain_events(&mut self) -> Vec<QuizEvent> {
        self.events.drain(..).collect()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn config(&self) -> &QuizConfig {
        &self.config
    }

    pub fn bank(&self) -> &B {
        &self.bank
    }

    pub fn round_index(&self) -> usize {
        self.round_index
    }

    pub fn correct_count(&self) -> usize {
        self.correct_count
    }

    pub fn total_score(&self) -> u32 {
        self.total_score
    }

    pub fn streak(&self) -> u32 {
        self.streak
    }

    pub fn is_answered(&self) -> bool {
        self.answered
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.current_question.as_ref()
    }

    /// Time left to answer the current question.
    pub fn time_remaining(&self) -> Duration {
        if self.answered {
            return self.frozen_remaining;
        }
        match self.phase {
            Phase::Playing => self
                .timers
                .get(TaskKind::Countdown)
                .map_or(Duration::ZERO, |t| t.remaining(self.now())),
            Phase::Paused => self.suspended.map_or(Duration::ZERO, |(_, r)| r),
            _ => Duration::ZERO,
        }
    }

    /// Return the state of the engine for rendering.
    pub fn snapshot(&self) -> QuizSnapshot<'_> {
        let time_remaining: Duration = self.time_remaining();
        let limit: f64 = self.config.time_limit().as_secs_f64();
        let time_fraction: f64 = if limit > 0.0 {
            (time_remaining.as_secs_f64() / limit).clamp(0.0, 1.0)
        } else {
            0.0
        };
        QuizSnapshot {
            phase: self.phase,
            round: (self.round_index + 1).min(self.config.total_rounds),
            total_rounds: self.config.total_rounds,
            correct: self.correct_count,
            streak: self.streak,
            score: self.total_score,
            question: self.current_question.as_ref(),
            answered: self.answered,
            difficulty_label: self.config.label(),
            time_remaining,
            time_fraction,
        }
    }
}
