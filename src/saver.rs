/*
saver.rs

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

//! Save and restore the data that survives a restart.
//!
//! Both files are stored in the data directory, in JSON format:
//!
//! * `highscores.json` for the scoreboards. See [`highscores::SaverHighScores`].
//! * `settings.json` for the user preferences. See [`settings::SaverSettings`].

pub mod highscores;
pub mod settings;

use std::fs::create_dir_all;
use std::io;
use std::path::Path;

/// Create the directory that contains the given file, if needed.
fn ensure_parent(file: &Path) -> io::Result<()> {
    match file.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => create_dir_all(dir),
        _ => Ok(()),
    }
}

#[cfg(test)]
pub(crate) mod testdir {
    use std::path::PathBuf;

    /// Return an empty directory for the test with the given name.
    pub fn fresh(name: &str) -> PathBuf {
        let dir: PathBuf =
            std::env::temp_dir().join(format!("mazequiz-{}-{name}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        dir
    }
}
