/*
application.rs

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

//! Terminal host for the games.
//!
//! The [`Application`] object loads the settings and the scoreboards from the data directory,
//! builds the [`Services`] shared by the games, and runs the game the user selected.
//!
//! Standard input is read by a helper thread that forwards each line through an
//! [`async_channel`] channel. The main thread owns all the game state: it polls the channel,
//! applies the commands, calls the engine `tick()` methods, and redraws the screen when something
//! changed.

use clap::ValueEnum;
use log::{debug, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::cell::RefCell;
use std::io::{BufRead, stdin};
use std::path::PathBuf;
use std::rc::Rc;
use std::thread;
use std::time::Duration;

use crate::config::{Difficulty, MAZE_MAX_SIZE, QuizConfig, Settings};
use crate::draw;
use crate::highscores::{GameId, HighScores, ScoreFilter, ScoreStore};
use crate::maze::generator::{MazeError, MazeGenerator};
use crate::maze::grid::{Direction, Grid};
use crate::maze::session::MazeSession;
use crate::quiz::arithmetic::ArithmeticBank;
use crate::quiz::engine::{Phase, QuizEngine, QuizEvent};
use crate::quiz::question::QuestionBank;
use crate::quiz::vocabulary::VocabularyBank;
use crate::saver::highscores::SaverHighScores;
use crate::saver::settings::SaverSettings;
use crate::services::Services;

/// Delay between two polls of the input channel.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Games that can be played in the terminal.
#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum PlayMode {
    Maze,
    Vocabulary,
    Arithmetic,
}

/// Command typed during a maze game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MazeCommand {
    Move(Direction),
    New,
    Quit,
}

impl MazeCommand {
    /// Parse a line typed by the player.
    ///
    /// Directions are `w`, `a`, `s`, `d` or `n`, `e`, `s`, `w`. In the second set `w` would be
    /// ambiguous, so `w` always means up.
    pub fn parse(line: &str) -> Option<MazeCommand> {
        match line.trim().to_lowercase().as_str() {
            "w" | "n" | "up" => Some(MazeCommand::Move(Direction::North)),
            "d" | "e" | "right" => Some(MazeCommand::Move(Direction::East)),
            "s" | "down" => Some(MazeCommand::Move(Direction::South)),
            "a" | "left" | "west" => Some(MazeCommand::Move(Direction::West)),
            "new" => Some(MazeCommand::New),
            "q" | "quit" => Some(MazeCommand::Quit),
            _ => None,
        }
    }
}

/// Command typed during a quiz.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizCommand {
    /// Option number, starting at 1.
    Choose(usize),

    /// Option text.
    Answer(String),
    Pause,
    Resume,
    End,
    Start,

    /// Change the difficulty level (`level 1` to `level 3`).
    Level(Difficulty),
    Quit,
}

impl QuizCommand {
    /// Parse a line typed by the player.
    pub fn parse(line: &str) -> Option<QuizCommand> {
        let line: &str = line.trim();
        match line.to_lowercase().as_str() {
            "" => None,
            "p" | "pause" => Some(QuizCommand::Pause),
            "r" | "resume" => Some(QuizCommand::Resume),
            "e" | "end" => Some(QuizCommand::End),
            "start" => Some(QuizCommand::Start),
            "q" | "quit" => Some(QuizCommand::Quit),
            l => {
                if let Some(n) = l.strip_prefix("level ") {
                    return n
                        .trim()
                        .parse::<usize>()
                        .ok()
                        .and_then(|n| n.checked_sub(1))
                        .and_then(Difficulty::from_repr)
                        .map(QuizCommand::Level);
                }
                match l.parse::<usize>() {
                    Ok(n) => Some(QuizCommand::Choose(n)),
                    Err(_) => Some(QuizCommand::Answer(line.to_string())),
                }
            }
        }
    }
}

/// Forward the lines typed by the user to the returned channel.
///
/// The channel is closed when standard input reaches its end.
fn spawn_input_reader() -> async_channel::Receiver<String> {
    let (sender, receiver) = async_channel::bounded::<String>(16);
    thread::spawn(move || {
        for line in stdin().lock().lines() {
            let Ok(line) = line else { break };
            if sender.send_blocking(line).is_err() {
                break;
            }
        }
        debug!("End of input");
    });
    receiver
}

/// Terminal application.
pub struct Application {
    settings: Settings,
    saver_settings: SaverSettings,
    saver_scores: SaverHighScores,
    scores: Rc<RefCell<HighScores>>,
    services: Services,
}

impl Application {
    /// Create an [`Application`] object and load the saved data from the given directory.
    pub fn new(data_dir: PathBuf) -> Self {
        let saver_settings = SaverSettings::new(data_dir.clone());
        let saver_scores = SaverHighScores::new(data_dir);
        let settings: Settings = saver_settings.load();
        let scores: Rc<RefCell<HighScores>> = Rc::new(RefCell::new(saver_scores.load()));
        let services = Services::terminal(scores.clone(), settings.muted);
        Self {
            settings,
            saver_settings,
            saver_scores,
            scores,
            services,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Change and save the settings.
    pub fn update_settings<F: FnOnce(&mut Settings)>(&mut self, f: F) {
        f(&mut self.settings);
        self.services.audio.set_muted(self.settings.muted);
        if let Err(e) = self.saver_settings.save_settings(&self.settings) {
            warn!("Cannot save the settings: {e}");
        }
    }

    /// Return the scoreboard as text.
    pub fn scoreboard(&self, filter: ScoreFilter) -> String {
        draw::scoreboard_to_string(filter, &self.scores.borrow().top_n(filter))
    }

    /// Delete all the scores.
    pub fn reset_scores(&mut self) {
        self.scores.borrow_mut().clear();
        self.saver_scores.delete_save();
    }

    fn save_scores(&self) {
        if let Err(e) = self.saver_scores.save_highscores(&self.scores.borrow()) {
            warn!("Cannot save the high scores: {e}");
        }
    }

    /// Generate a maze with the given size, or the size from the settings.
    pub fn new_maze(
        &self,
        cols: Option<usize>,
        rows: Option<usize>,
        seed: Option<u64>,
    ) -> Result<Grid, MazeError> {
        let generator = MazeGenerator::new(
            cols.unwrap_or(self.settings.maze_cols).min(MAZE_MAX_SIZE),
            rows.unwrap_or(self.settings.maze_rows).min(MAZE_MAX_SIZE),
        );
        match seed {
            Some(s) => generator.generate_with(&mut StdRng::seed_from_u64(s)),
            None => generator.generate(),
        }
    }

    /// Play the selected game until the player quits. Return the exit code.
    pub fn run(
        &mut self,
        mode: PlayMode,
        difficulty: Option<Difficulty>,
        cols: Option<usize>,
        rows: Option<usize>,
        seed: Option<u64>,
    ) -> u8 {
        let receiver = spawn_input_reader();
        let difficulty: Difficulty = difficulty.unwrap_or(self.settings.difficulty);
        match mode {
            PlayMode::Maze => self.play_maze(&receiver, cols, rows, seed),
            PlayMode::Vocabulary => {
                let engine = QuizEngine::new(
                    VocabularyBank::new(),
                    QuizConfig::vocabulary(difficulty),
                    self.services.clone(),
                );
                self.play_quiz(&receiver, engine)
            }
            PlayMode::Arithmetic => {
                let engine = QuizEngine::new(
                    ArithmeticBank::new(),
                    QuizConfig::arithmetic(difficulty),
                    self.services.clone(),
                );
                self.play_quiz(&receiver, engine)
            }
        }
    }

    fn play_maze(
        &mut self,
        receiver: &async_channel::Receiver<String>,
        cols: Option<usize>,
        rows: Option<usize>,
        seed: Option<u64>,
    ) -> u8 {
        let mut session: MazeSession = match self.new_maze(cols, rows, seed) {
            Ok(grid) => MazeSession::new(grid, self.services.clone()),
            Err(e) => {
                eprintln!("Cannot generate the maze: {e}");
                return 1;
            }
        };
        println!("Reach X. Move with w/a/s/d, \"new\" for another maze, \"quit\" to leave.");
        print!("{}", draw::maze_to_string(&session));
        println!("{}", draw::hud_line(&session));

        while let Ok(line) = receiver.recv_blocking() {
            match MazeCommand::parse(&line) {
                Some(MazeCommand::Move(d)) => {
                    let result = session.try_move(d);
                    if result.blocked {
                        println!("Bump!");
                    }
                    if result.won {
                        self.save_scores();
                    }
                }
                Some(MazeCommand::New) => match self.new_maze(cols, rows, None) {
                    Ok(grid) => session = MazeSession::new(grid, self.services.clone()),
                    Err(e) => eprintln!("Cannot generate the maze: {e}"),
                },
                Some(MazeCommand::Quit) => break,
                None => {
                    println!("Unknown command \"{}\"", line.trim());
                    continue;
                }
            }
            print!("{}", draw::maze_to_string(&session));
            println!("{}", draw::hud_line(&session));
            if session.is_finished() {
                println!("{}", self.scoreboard(ScoreFilter::Game(GameId::Maze)));
            }
        }
        0
    }

    fn play_quiz<B: QuestionBank>(
        &mut self,
        receiver: &async_channel::Receiver<String>,
        mut engine: QuizEngine<B>,
    ) -> u8 {
        let game: GameId = engine.bank().game_id();
        println!(
            "Type \"start\" to begin. Answer with 1-4, \"p\" to pause, \"r\" to resume, \"e\" to \
             end, \"level 1\" to \"level 3\" for the difficulty, \"quit\" to leave."
        );
        print!("{}", draw::quiz_to_string(&engine.snapshot()));

        loop {
            let line: String = match receiver.try_recv() {
                Ok(line) => line,
                Err(async_channel::TryRecvError::Closed) => break,
                Err(async_channel::TryRecvError::Empty) => {
                    engine.tick();
                    self.show_events(&mut engine, game);
                    thread::sleep(POLL_INTERVAL);
                    continue;
                }
            };

            match QuizCommand::parse(&line) {
                Some(QuizCommand::Choose(_) | QuizCommand::Answer(_)) => {
                    let choice: Option<String> = engine
                        .current_question()
                        .and_then(|q| q.option_from_input(&line))
                        .map(str::to_string);
                    match choice {
                        Some(c) => engine.submit_answer(&c),
                        None => println!("Unknown answer \"{}\"", line.trim()),
                    }
                }
                Some(QuizCommand::Pause) => engine.pause(),
                Some(QuizCommand::Resume) => engine.resume(),
                Some(QuizCommand::End) => engine.end(),
                Some(QuizCommand::Start) => {
                    // "start" also abandons the game in progress
                    if matches!(engine.phase(), Phase::Playing | Phase::Paused) {
                        engine.reset();
                    }
                    engine.start();
                }
                Some(QuizCommand::Level(d)) => {
                    engine.set_difficulty(d);
                    self.update_settings(|s| s.difficulty = d);
                    println!("Difficulty: {}", engine.config().label());
                }
                Some(QuizCommand::Quit) => break,
                None => continue,
            }
            if !self.show_events(&mut engine, game) {
                print!("{}", draw::quiz_to_string(&engine.snapshot()));
            }
        }
        0
    }

    /// Print the pending quiz events and redraw the screen. Return whether there were events.
    ///
    /// The scores are saved when the game is over.
    fn show_events<B: QuestionBank>(&self, engine: &mut QuizEngine<B>, game: GameId) -> bool {
        let events: Vec<QuizEvent> = engine.drain_events();
        if events.is_empty() {
            return false;
        }
        let mut finished: bool = false;
        for e in &events {
            if let Some(msg) = draw::event_message(e) {
                println!("{msg}");
            }
            finished |= matches!(e, QuizEvent::Finished(_));
        }
        print!("{}", draw::quiz_to_string(&engine.snapshot()));
        if finished {
            self.save_scores();
            print!("{}", self.scoreboard(ScoreFilter::Game(game)));
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maze_commands() {
        assert_eq!(
            MazeCommand::parse("w"),
            Some(MazeCommand::Move(Direction::North))
        );
        assert_eq!(
            MazeCommand::parse(" E "),
            Some(MazeCommand::Move(Direction::East))
        );
        assert_eq!(
            MazeCommand::parse("a"),
            Some(MazeCommand::Move(Direction::West))
        );
        assert_eq!(MazeCommand::parse("new"), Some(MazeCommand::New));
        assert_eq!(MazeCommand::parse("jump"), None);
    }

    #[test]
    fn quiz_commands() {
        assert_eq!(QuizCommand::parse("3"), Some(QuizCommand::Choose(3)));
        assert_eq!(QuizCommand::parse("p"), Some(QuizCommand::Pause));
        assert_eq!(QuizCommand::parse("R"), Some(QuizCommand::Resume));
        assert_eq!(
            QuizCommand::parse("level 3"),
            Some(QuizCommand::Level(Difficulty::Hard))
        );
        assert_eq!(QuizCommand::parse("level 4"), None);
        assert_eq!(
            QuizCommand::parse("3/4"),
            Some(QuizCommand::Answer("3/4".to_string()))
        );
        assert_eq!(QuizCommand::parse("  "), None);
    }
}
