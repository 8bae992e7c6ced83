/*
maze.rs

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

//! Generate random mazes and let the player walk through them.
//!
//! A maze is a [`grid::Grid`] of cells. Each cell records whether its four walls are present.
//! You create a maze by creating a [`generator::MazeGenerator`] object and by using its
//! [`generator::MazeGenerator::generate`] method. The generator carves a perfect maze: there is
//! exactly one path between any two cells.
//!
//! To play, wrap the grid in a [`session::MazeSession`] object.
//! The session stores the player position, counts the steps, and measures the time between the
//! first move and the exit. Use [`session::MazeSession::try_move`] to move the player.

pub mod generator;
pub mod grid;
pub mod session;
