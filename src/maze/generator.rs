/*
generator.rs

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

//! Carve random perfect mazes.
//!
//! The generator uses an iterative depth-first backtracker. Starting from the top left cell, it
//! walks to a random unvisited neighbor and removes the wall in between. When the current cell
//! has no unvisited neighbor left, it goes back to the previous cell. The walk ends when it is
//! back at the start and every cell has been visited.
//!
//! Because a wall is only removed when entering an unvisited cell, the passages form a spanning
//! tree of the grid: `cols × rows − 1` passages, no loop, no isolated area.

use log::debug;
use rand::Rng;
use rand::seq::IndexedRandom;
use std::error::Error;
use std::fmt;
use std::time::Instant;

use super::grid::{Direction, Grid, Position};

/// Type of errors.
#[derive(Debug, PartialEq)]
pub enum MazeError {
    /// The maze must have at least one column and one row.
    EmptyGrid,
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MazeError::EmptyGrid => write!(f, "the maze needs at least one column and one row"),
        }
    }
}

impl Error for MazeError {}

/// [`MazeGenerator`] object.
#[derive(Debug, Clone, Copy)]
pub struct MazeGenerator {
    /// Number of columns of the generated mazes.
    pub cols: usize,

    /// Number of rows of the generated mazes.
    pub rows: usize,
}

impl MazeGenerator {
    /// Create the object.
    pub fn new(cols: usize, rows: usize) -> Self {
        Self { cols, rows }
    }

    /// Generate a new maze by using the thread random generator.
    ///
    /// Every call returns an independent maze.
    ///
    /// # Errors
    ///
    /// The method returns an error if the number of columns or rows is zero.
    pub fn generate(&self) -> Result<Grid, MazeError> {
        self.generate_with(&mut rand::rng())
    }

    /// Generate a new maze by using the provided random generator.
    ///
    /// With a seeded generator, the same seed always produces the same maze.
    ///
    /// # Errors
    ///
    /// The method returns an error if the number of columns or rows is zero.
    pub fn generate_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Grid, MazeError> {
        if self.cols == 0 || self.rows == 0 {
            return Err(MazeError::EmptyGrid);
        }
        let start_time = Instant::now();
        let mut grid: Grid = Grid::new(self.cols, self.rows);

        // Scratch visit flags. They are dropped with the function and never reach the grid.
        let mut visited: Vec<bool> = vec![false; grid.len()];
        let mut stack: Vec<Position> = Vec::with_capacity(grid.len());
        let mut iteration: usize = 0;

        let start = Position::new(0, 0);
        visited[grid.index(start)] = true;
        stack.push(start);

        while let Some(&current) = stack.last() {
            iteration += 1;
            let candidates: Vec<(Direction, Position)> = Direction::ALL
                .iter()
                .filter_map(|&d| grid.neighbor(current, d).map(|p| (d, p)))
                .filter(|(_, p)| !visited[grid.index(*p)])
                .collect();

            // Dead end: go back
            let Some(&(direction, _)) = candidates.choose(rng) else {
                stack.pop();
                continue;
            };

            if let Some(next) = grid.carve(current, direction) {
                visited[grid.index(next)] = true;
                stack.push(next);
            }
        }

        debug!(
            "Maze {}x{} carved in {} iterations ({:?})",
            self.cols,
            self.rows,
            iteration,
            start_time.elapsed()
        );
        Ok(grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn assert_perfect(grid: &Grid) {
        assert_eq!(grid.passages(), grid.len() - 1);
        for y in 0..grid.rows() {
            for x in 0..grid.cols() {
                assert_eq!(grid.reachable_from(Position::new(x, y)), grid.len());
            }
        }
    }

    #[test]
    fn empty_sizes_are_rejected() {
        assert_eq!(MazeGenerator::new(0, 5).generate(), Err(MazeError::EmptyGrid));
        assert_eq!(MazeGenerator::new(5, 0).generate(), Err(MazeError::EmptyGrid));
    }

    #[test]
    fn single_cell_keeps_its_walls() {
        let grid = MazeGenerator::new(1, 1).generate().unwrap();
        assert_eq!(grid.len(), 1);
        assert_eq!(grid.passages(), 0);
        assert_eq!(grid.reachable_from(Position::new(0, 0)), 1);
    }

    #[test]
    fn generated_mazes_are_perfect() {
        let mut rng = StdRng::seed_from_u64(7);
        for (cols, rows) in [(14, 10), (1, 9), (9, 1), (2, 2), (25, 25)] {
            let grid = MazeGenerator::new(cols, rows).generate_with(&mut rng).unwrap();
            assert_eq!(grid.cols(), cols);
            assert_eq!(grid.rows(), rows);
            assert_perfect(&grid);
        }
    }

    #[test]
    fn outer_border_stays_closed() {
        let grid = MazeGenerator::new(8, 6).generate().unwrap();
        for x in 0..8 {
            assert!(grid.cell(Position::new(x, 0)).north);
            assert!(grid.cell(Position::new(x, 5)).south);
        }
        for y in 0..6 {
            assert!(grid.cell(Position::new(0, y)).west);
            assert!(grid.cell(Position::new(7, y)).east);
        }
    }

    #[test]
    fn same_seed_same_maze() {
        let generator = MazeGenerator::new(12, 8);
        let a = generator
            .generate_with(&mut StdRng::seed_from_u64(42))
            .unwrap();
        let b = generator
            .generate_with(&mut StdRng::seed_from_u64(42))
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn successive_mazes_differ() {
        let generator = MazeGenerator::new(14, 10);
        let mut rng = StdRng::seed_from_u64(1);
        let a = generator.generate_with(&mut rng).unwrap();
        let b = generator.generate_with(&mut rng).unwrap();
        assert_ne!(a, b);
    }
}
