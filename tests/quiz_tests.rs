/*
quiz_tests.rs

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

use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::HashSet;

use mazequiz::audio::Cue;
use mazequiz::config::{Difficulty, QuizConfig};
use mazequiz::highscores::{GameId, ScoreFilter, ScoreStore};
use mazequiz::quiz::arithmetic::ArithmeticBank;
use mazequiz::quiz::engine::{Phase, QuizEngine, QuizEvent};
use mazequiz::quiz::question::{OPTION_COUNT, Question, QuestionBank};
use mazequiz::quiz::scoring::Grade;
use mazequiz::quiz::vocabulary::VocabularyBank;
use mazequiz::services::Services;

fn check_question(q: &Question) {
    assert_eq!(q.options.len(), OPTION_COUNT, "{q:?}");
    let unique: HashSet<&String> = q.options.iter().collect();
    assert_eq!(unique.len(), OPTION_COUNT, "duplicate options in {q:?}");
    assert_eq!(
        q.options.iter().filter(|o| **o == q.correct_answer).count(),
        1,
        "{q:?}"
    );
    assert!(!q.prompt.is_empty());
}

fn check_bank<B: QuestionBank>(bank: &B, count: usize) {
    let mut rng = StdRng::seed_from_u64(99);
    for difficulty in Difficulty::ALL {
        let pool = bank.draw_pool(difficulty, &mut rng);
        for round in 0..count {
            check_question(&bank.next_question(&pool, difficulty, round, &mut rng));
        }
    }
}

#[test]
fn arithmetic_questions_are_well_formed() {
    check_bank(&ArithmeticBank::new(), 3400);
}

#[test]
fn vocabulary_questions_are_well_formed() {
    check_bank(&VocabularyBank::new(), 3400);
}

#[test]
fn full_vocabulary_game() {
    let (services, probe) = Services::recording();
    let mut engine = QuizEngine::with_seed(
        VocabularyBank::new(),
        QuizConfig::vocabulary(Difficulty::Easy),
        services,
        7,
    );
    engine.start();

    let mut answered: usize = 0;
    while engine.phase() != Phase::Finished {
        for event in engine.drain_events() {
            if let QuizEvent::RoundStarted { round, question } = event {
                assert_eq!(round, answered);
                // Miss the last three rounds on purpose
                if round < 12 {
                    engine.submit_answer(&question.correct_answer);
                } else {
                    let wrong = question
                        .options
                        .iter()
                        .find(|o| **o != question.correct_answer)
                        .unwrap()
                        .clone();
                    engine.submit_answer(&wrong);
                }
                answered += 1;
            }
        }
        probe.clock.advance_ms(1500);
        engine.tick();
    }
    assert_eq!(answered, 15);

    let summary = engine
        .drain_events()
        .into_iter()
        .find_map(|e| match e {
            QuizEvent::Finished(s) => Some(s),
            _ => None,
        })
        .unwrap();
    assert_eq!(summary.correct, 12);
    assert_eq!(summary.total, 15);
    assert_eq!(summary.grade, Grade::A);
    assert_eq!(summary.position, Some(1));
    assert_eq!(summary.score, engine.total_score());

    let board = probe
        .scores
        .borrow()
        .top_n(ScoreFilter::Game(GameId::Vocabulary));
    assert_eq!(board.len(), 1);
    assert_eq!(board[0].score, summary.score);
    assert_eq!(board[0].detail, "12/15 • easy");
    assert_eq!(probe.celebration.calls(), vec![60]);
    assert!(probe.audio.played().contains(&Cue::Win));
}

#[test]
fn ignored_game_times_out() {
    let (services, probe) = Services::recording();
    let mut engine = QuizEngine::with_seed(
        ArithmeticBank::new(),
        QuizConfig::arithmetic(Difficulty::Hard),
        services,
        5,
    );
    engine.start();
    while engine.phase() != Phase::Finished {
        probe.clock.advance_ms(500);
        engine.tick();
    }
    let timeouts = engine
        .drain_events()
        .iter()
        .filter(|e| matches!(e, QuizEvent::TimedOut { .. }))
        .count();
    assert_eq!(timeouts, 15);
    assert_eq!(engine.total_score(), 0);
    assert!(probe.celebration.calls().is_empty());
    assert_eq!(
        probe.scores.borrow().top_n(ScoreFilter::Game(GameId::Arithmetic))[0].score,
        0
    );
}
