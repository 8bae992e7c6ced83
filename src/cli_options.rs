/*
cli_options.rs

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

//! Process command-line options.
//!
//! Without options, Mazequiz prints the combined scoreboard and a short help. The `--play` option
//! starts a game in the terminal. The other options are helpers for developers and for managing
//! the saved data.
//!
//! # Examples
//!
//! Print a small maze. Add `--seed` to get the same maze every time:
//!
//! ```text
//! $ mazequiz --maze --cols 4 --rows 2
//! +---+---+---+---+
//! | @         |   |
//! +---+---+   +   +
//! |             X |
//! +---+---+---+---+
//! ```
//!
//! Print two hard arithmetic questions. The correct answer is marked with a star:
//!
//! ```text
//! $ mazequiz --questions 2 --game arithmetic -f hard
//! [Linear equation] 7x − 3 = 60
//! x = ?
//!   1) 8   2) 9*   3) 10   4) 11
//! ...
//! ```

use clap::{Parser, ValueEnum};
use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::env;
use std::path::PathBuf;

use crate::application::{Application, PlayMode};
use crate::config::{COPYRIGHT_NOTICE, Difficulty, default_data_dir};
use crate::draw;
use crate::highscores::ScoreFilter;
use crate::maze::grid::Position;
use crate::quiz::arithmetic::ArithmeticBank;
use crate::quiz::question::{Question, QuestionBank};
use crate::quiz::vocabulary::VocabularyBank;

/// Quizzes for the `--questions` option.
#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
enum QuizGame {
    Vocabulary,
    Arithmetic,
}

/// Maze and quiz mini-games for the terminal.
#[derive(Parser)]
#[command(about, long_about = None, version, long_version = COPYRIGHT_NOTICE)]
struct Args {
    /// Directory where the scores and the settings are saved
    #[arg(long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Play a game in the terminal
    #[arg(value_enum, long)]
    play: Option<PlayMode>,

    /// Difficulty level for the quizzes
    #[arg(value_enum, short = 'f', long)]
    difficulty: Option<Difficulty>,

    /// Print a generated maze
    #[arg(long, default_value_t = false)]
    maze: bool,

    /// Number of maze columns
    #[arg(long)]
    cols: Option<usize>,

    /// Number of maze rows
    #[arg(long)]
    rows: Option<usize>,

    /// Seed for the random generator, to get the same maze or questions again
    #[arg(long)]
    seed: Option<u64>,

    /// Print the given number of generated questions
    #[arg(long, value_name = "N", requires = "game")]
    questions: Option<usize>,

    /// Quiz for the generated questions
    #[arg(value_enum, long, requires = "questions")]
    game: Option<QuizGame>,

    /// Print the scoreboard of a game, or of all the games with "all"
    #[arg(long, value_name = "GAME")]
    scores: Option<String>,

    /// Delete all the scores
    #[arg(long, default_value_t = false)]
    reset_scores: bool,

    /// Disable the sound cues
    #[arg(long, default_value_t = false, conflicts_with = "unmute")]
    mute: bool,

    /// Enable the sound cues
    #[arg(long, default_value_t = false)]
    unmute: bool,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

/// Format a question for the `--questions` option.
pub fn question_to_string(question: &Question) -> String {
    let options: Vec<String> = question
        .options
        .iter()
        .enumerate()
        .map(|(i, o)| {
            let star: &str = if *o == question.correct_answer {
                "*"
            } else {
                ""
            };
            format!("{}) {o}{star}", i + 1)
        })
        .collect();
    format!(
        "[{}] {}\n  {}",
        question.category,
        question.prompt,
        options.join("   ")
    )
}

/// Print generated questions.
fn print_questions<B: QuestionBank>(
    bank: &B,
    difficulty: Difficulty,
    count: usize,
    rng: &mut StdRng,
) {
    let pool: B::Pool = bank.draw_pool(difficulty, rng);
    for round in 0..count {
        let q: Question = bank.next_question(&pool, difficulty, round, rng);
        println!("{}", question_to_string(&q));
    }
}

/// Parse and process command-line options.
///
/// Return the exit code of the program.
pub fn parse() -> u8 {
    let args: Args = Args::parse();

    if args.debug {
        println!("DEBUG");
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    env_logger::init();

    let data_dir: PathBuf = args.data_dir.unwrap_or_else(default_data_dir);
    debug!("Data directory: {data_dir:?}");
    let mut app = Application::new(data_dir);
    let mut done: bool = false;

    //
    // Settings and saved data
    //
    if args.mute || args.unmute {
        app.update_settings(|s| s.muted = args.mute);
        println!(
            "Sound cues {}",
            if args.mute { "disabled" } else { "enabled" }
        );
        done = true;
    }

    if args.reset_scores {
        app.reset_scores();
        println!("Scores deleted");
        done = true;
    }

    if let Some(game) = args.scores {
        match game.parse::<ScoreFilter>() {
            Ok(filter) => print!("{}", app.scoreboard(filter)),
            Err(e) => {
                eprintln!("Error: {e}");
                return 1;
            }
        }
        done = true;
    }

    //
    // Developer aids
    //
    if args.maze {
        match app.new_maze(args.cols, args.rows, args.seed) {
            Ok(grid) => {
                let exit = Position::new(grid.cols() - 1, grid.rows() - 1);
                print!("{}", draw::grid_to_string(&grid, Position::new(0, 0), exit));
            }
            Err(e) => {
                eprintln!("Error: {e}");
                return 1;
            }
        }
        done = true;
    }

    if let (Some(count), Some(game)) = (args.questions, args.game) {
        let difficulty: Difficulty = args.difficulty.unwrap_or(app.settings().difficulty);
        let mut rng: StdRng = match args.seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        };
        match game {
            QuizGame::Vocabulary => {
                print_questions(&VocabularyBank::new(), difficulty, count, &mut rng)
            }
            QuizGame::Arithmetic => {
                print_questions(&ArithmeticBank::new(), difficulty, count, &mut rng)
            }
        }
        done = true;
    }

    //
    // Games
    //
    if let Some(mode) = args.play {
        return app.run(mode, args.difficulty, args.cols, args.rows, args.seed);
    }

    // Without anything to do, show the leaderboard and how to start a game
    if !done {
        print!("{}", app.scoreboard(ScoreFilter::All));
        println!();
        println!("Play with --play maze, --play vocabulary, or --play arithmetic.");
        println!("See --help for the other options.");
    }
    0
}
