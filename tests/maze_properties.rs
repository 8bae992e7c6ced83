/*
maze_properties.rs

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

use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::VecDeque;

use mazequiz::highscores::{GameId, ScoreFilter, ScoreStore};
use mazequiz::maze::generator::MazeGenerator;
use mazequiz::maze::grid::{Direction, Grid, Position};
use mazequiz::maze::session::MazeSession;
use mazequiz::services::Services;

/// Return the directions of the shortest path from the top left corner to `target`.
fn solve(grid: &Grid, target: Position) -> Vec<Direction> {
    let mut came_from: Vec<Option<(Position, Direction)>> = vec![None; grid.len()];
    let index = |p: Position| p.y * grid.cols() + p.x;
    let start = Position::new(0, 0);
    let mut queue: VecDeque<Position> = VecDeque::from([start]);
    let mut seen: Vec<bool> = vec![false; grid.len()];
    seen[index(start)] = true;

    while let Some(pos) = queue.pop_front() {
        if pos == target {
            break;
        }
        for d in Direction::ALL {
            if !grid.can_move(pos, d) {
                continue;
            }
            if let Some(next) = grid.neighbor(pos, d)
                && !seen[index(next)]
            {
                seen[index(next)] = true;
                came_from[index(next)] = Some((pos, d));
                queue.push_back(next);
            }
        }
    }

    let mut path: Vec<Direction> = Vec::new();
    let mut pos = target;
    while let Some((prev, d)) = came_from[index(pos)] {
        path.push(d);
        pos = prev;
    }
    path.reverse();
    path
}

proptest! {
    #[test]
    fn mazes_are_perfect(cols in 1usize..25, rows in 1usize..25, seed in any::<u64>()) {
        let grid = MazeGenerator::new(cols, rows)
            .generate_with(&mut StdRng::seed_from_u64(seed))
            .unwrap();
        prop_assert_eq!(grid.passages(), cols * rows - 1);
        prop_assert_eq!(grid.reachable_from(Position::new(0, 0)), cols * rows);
        prop_assert_eq!(grid.reachable_from(Position::new(cols - 1, rows - 1)), cols * rows);
    }

    #[test]
    fn same_seed_same_maze(cols in 1usize..15, rows in 1usize..15, seed in any::<u64>()) {
        let generator = MazeGenerator::new(cols, rows);
        let a = generator.generate_with(&mut StdRng::seed_from_u64(seed)).unwrap();
        let b = generator.generate_with(&mut StdRng::seed_from_u64(seed)).unwrap();
        prop_assert_eq!(a, b);
    }
}

#[test]
fn solve_a_maze() {
    let grid = MazeGenerator::new(14, 10)
        .generate_with(&mut StdRng::seed_from_u64(2025))
        .unwrap();
    let (services, probe) = Services::recording();
    let mut session = MazeSession::new(grid, services);
    let path = solve(session.grid(), session.exit());
    assert!(!path.is_empty());

    for (i, d) in path.iter().enumerate() {
        assert!(!session.is_finished());
        let result = session.try_move(*d);
        assert!(!result.blocked);
        assert_eq!(result.won, i == path.len() - 1);
        probe.clock.advance_ms(100);
    }
    assert_eq!(session.player(), session.exit());
    assert_eq!(session.steps() as usize, path.len());

    // The timer stopped with the winning move
    probe.clock.advance_ms(60_000);
    let seconds = (path.len() - 1) as f64 * 0.1;
    assert!((session.elapsed_seconds() - seconds).abs() < 0.05);

    let board = probe.scores.borrow().top_n(ScoreFilter::Game(GameId::Maze));
    assert_eq!(board.len(), 1);
    assert_eq!(board[0].score, session.score());
    assert_eq!(probe.celebration.calls().len(), 1);
}
