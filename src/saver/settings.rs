/*
settings.rs

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

//! Save and restore the user preferences.
//!
//! The saved object is a serialization of the [`Settings`] object in JSON format. Missing fields
//! take their default value, so that older files can still be read.

use log::{debug, warn};
use std::error::Error;
use std::fs::{File, remove_file};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::PathBuf;

use super::ensure_parent;
use crate::config::Settings;

/// Object to save and restore the user preferences.
pub struct SaverSettings {
    save_file: PathBuf,
}

impl SaverSettings {
    /// Create a [`SaverSettings`] object for the given data directory.
    pub fn new(mut data_dir: PathBuf) -> Self {
        data_dir.push("settings.json");
        debug!("Settings file: {data_dir:?}");
        Self {
            save_file: data_dir,
        }
    }

    /// Retrieve the [`Settings`] object, or None if the settings file does not exist.
    pub fn get_settings(&self) -> Result<Option<Settings>, Box<dyn Error>> {
        let file: File = match File::open(&self.save_file) {
            Ok(f) => f,
            Err(error) if error.kind() == ErrorKind::NotFound => return Ok(None),
            Err(error) => return Err(Box::new(error)),
        };
        let settings: Settings = serde_json::from_reader(BufReader::new(file))?;
        Ok(Some(settings))
    }

    /// Retrieve the settings, falling back to the defaults.
    pub fn load(&self) -> Settings {
        match self.get_settings() {
            Ok(s) => s.unwrap_or_default(),
            Err(e) => {
                warn!("Cannot read {:?}, using the defaults: {e}", self.save_file);
                Settings::default()
            }
        }
    }

    /// Save the provided [`Settings`] object.
    pub fn save_settings(&self, settings: &Settings) -> Result<(), Box<dyn Error>> {
        ensure_parent(&self.save_file)?;
        let mut writer: BufWriter<File> = BufWriter::new(File::create(&self.save_file)?);
        serde_json::to_writer_pretty(&mut writer, settings)?;
        writer.flush()?;
        Ok(())
    }

    /// Delete the settings file.
    pub fn delete_save(&self) {
        let _ = remove_file(&self.save_file);
    }
}
