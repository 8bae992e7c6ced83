/*
grid.rs

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

//! Maze grid representation.

use std::collections::VecDeque;
use std::fmt;

/// Moving direction.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// The four directions, clockwise from north.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Return the direction that points the other way.
    pub fn opposite(&self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Direction::North => write!(f, "north"),
            Direction::East => write!(f, "east"),
            Direction::South => write!(f, "south"),
            Direction::West => write!(f, "west"),
        }
    }
}

/// Cell coordinates. `x` is the column and `y` the row, starting at the top left corner.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Walls around a cell. `true` means that the wall is present.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Cell {
    pub north: bool,
    pub east: bool,
    pub south: bool,
    pub west: bool,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            north: true,
            east: true,
            south: true,
            west: true,
        }
    }
}

impl Cell {
    /// Whether the wall in the given direction is present.
    pub fn has_wall(&self, direction: Direction) -> bool {
        match direction {
            Direction::North => self.north,
            Direction::East => self.east,
            Direction::South => self.south,
            Direction::West => self.west,
        }
    }

    fn set_wall(&mut self, direction: Direction, present: bool) {
        match direction {
            Direction::North => self.north = present,
            Direction::East => self.east = present,
            Direction::South => self.south = present,
            Direction::West => self.west = present,
        }
    }
}

/// Rectangular grid of cells, stored row by row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cols: usize,
    rows: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a grid where all the walls are present.
    pub(crate) fn new(cols: usize, rows: usize) -> Self {
        Self {
            cols,
            rows,
            cells: vec![Cell::default(); cols * rows],
        }
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the grid has no cells. Generated grids always have at least one cell.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Index of the cell in the internal vector.
    pub(crate) fn index(&self, pos: Position) -> usize {
        pos.y * self.cols + pos.x
    }

    /// Return the cell at the given position.
    ///
    /// # Panics
    ///
    /// The method panics if the position is outside the grid.
    pub fn cell(&self, pos: Position) -> &Cell {
        &self.cells[self.index(pos)]
    }

    /// Whether the position is inside the grid.
    pub fn contains(&self, pos: Position) -> bool {
        pos.x < self.cols && pos.y < self.rows
    }

    /// Return the adjacent position in the given direction, or None at the grid border.
    pub fn neighbor(&self, pos: Position, direction: Direction) -> Option<Position> {
        let next: Position = match direction {
            Direction::North => Position::new(pos.x, pos.y.checked_sub(1)?),
            Direction::East => Position::new(pos.x + 1, pos.y),
            Direction::South => Position::new(pos.x, pos.y + 1),
            Direction::West => Position::new(pos.x.checked_sub(1)?, pos.y),
        };
        if self.contains(next) { Some(next) } else { None }
    }

    /// Whether the player can go from the given position in the given direction.
    ///
    /// The outer border is always closed.
    pub fn can_move(&self, pos: Position, direction: Direction) -> bool {
        self.contains(pos)
            && !self.cell(pos).has_wall(direction)
            && self.neighbor(pos, direction).is_some()
    }

    /// Remove the wall between the given cell and its neighbor.
    ///
    /// Both cells lose their wall so that the passage is visible from either side.
    /// Return the position of the neighbor, or None at the grid border (nothing is removed).
    pub(crate) fn carve(&mut self, pos: Position, direction: Direction) -> Option<Position> {
        let next: Position = self.neighbor(pos, direction)?;
        let i: usize = self.index(pos);
        let j: usize = self.index(next);
        self.cells[i].set_wall(direction, false);
        self.cells[j].set_wall(direction.opposite(), false);
        Some(next)
    }

    /// Count the passages between adjacent cells (walls that have been removed).
    pub fn passages(&self) -> usize {
        let mut count: usize = 0;
        for y in 0..self.rows {
            for x in 0..self.cols {
                let pos = Position::new(x, y);
                // Only look east and south so that each passage is counted once
                if self.can_move(pos, Direction::East) {
                    count += 1;
                }
                if self.can_move(pos, Direction::South) {
                    count += 1;
                }
            }
        }
        count
    }

    /// Return the number of cells reachable from the given position.
    pub fn reachable_from(&self, start: Position) -> usize {
        if !self.contains(start) {
            return 0;
        }
        let mut seen: Vec<bool> = vec![false; self.cells.len()];
        let mut queue: VecDeque<Position> = VecDeque::new();
        seen[self.index(start)] = true;
        queue.push_back(start);
        let mut count: usize = 0;

        while let Some(pos) = queue.pop_front() {
            count += 1;
            for direction in Direction::ALL {
                if !self.can_move(pos, direction) {
                    continue;
                }
                if let Some(next) = self.neighbor(pos, direction) {
                    let i: usize = self.index(next);
                    if !seen[i] {
                        seen[i] = true;
                        queue.push_back(next);
                    }
                }
            }
        }
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighbors_stop_at_the_border() {
        let grid = Grid::new(3, 2);
        let corner = Position::new(0, 0);
        assert_eq!(grid.neighbor(corner, Direction::North), None);
        assert_eq!(grid.neighbor(corner, Direction::West), None);
        assert_eq!(
            grid.neighbor(corner, Direction::East),
            Some(Position::new(1, 0))
        );
        assert_eq!(grid.neighbor(Position::new(2, 1), Direction::East), None);
        assert_eq!(grid.neighbor(Position::new(2, 1), Direction::South), None);
    }

    #[test]
    fn carving_is_symmetric() {
        let mut grid = Grid::new(2, 2);
        let a = Position::new(0, 0);
        let b = grid.carve(a, Direction::East).unwrap();

        assert_eq!(b, Position::new(1, 0));
        assert!(!grid.cell(a).east);
        assert!(!grid.cell(b).west);
        assert!(grid.can_move(a, Direction::East));
        assert!(grid.can_move(b, Direction::West));
        assert_eq!(grid.passages(), 1);
    }

    #[test]
    fn carving_outside_does_nothing() {
        let mut grid = Grid::new(1, 1);
        assert_eq!(grid.carve(Position::new(0, 0), Direction::North), None);
        assert!(grid.cell(Position::new(0, 0)).north);
    }

    #[test]
    fn closed_grid_reaches_one_cell() {
        let grid = Grid::new(4, 4);
        assert_eq!(grid.reachable_from(Position::new(2, 2)), 1);
        assert_eq!(grid.reachable_from(Position::new(9, 9)), 0);
    }
}
