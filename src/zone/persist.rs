// Copyright 2022 Matthew Ingwersen.
//
// Licensed under the Apache License, Version 2.0 (the "License"); you
// may not use this file except in compliance with the License. You may
// obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or
// implied. See the License for the specific language governing
// permissions and limitations under the License.

//! Writing zones to the file system and registering them with the name
//! server.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use log::{debug, info};
use regex::Regex;

use super::{Error, Result, Zone};

////////////////////////////////////////////////////////////////////////
// FILE OWNERSHIP                                                     //
////////////////////////////////////////////////////////////////////////

/// The numeric owner and group to give written zone files, so that the
/// name server can read them.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Owner {
    pub uid: u32,
    pub gid: u32,
}

#[cfg(unix)]
impl Owner {
    fn apply(self, path: &Path) -> io::Result<()> {
        use nix::unistd::{chown, Gid, Uid};

        chown(
            path,
            Some(Uid::from_raw(self.uid)),
            Some(Gid::from_raw(self.gid)),
        )
        .map_err(io::Error::from)
    }
}

#[cfg(not(unix))]
impl Owner {
    fn apply(self, path: &Path) -> io::Result<()> {
        log::warn!(
            "File ownership is not supported on this platform; not changing the owner of {}.",
            path.display(),
        );
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////
// ZONE FILES AND CONFIGURATION                                       //
////////////////////////////////////////////////////////////////////////

impl Zone {
    /// Serializes the zone and writes it to the zone's file, replacing
    /// any existing content. If `owner` is given, the file's ownership
    /// is then changed.
    pub fn write_zone_file(&self, owner: Option<Owner>) -> Result<()> {
        let text = self.serialize()?;
        let path = self.zone_file();
        fs::write(path, text)?;
        if let Some(owner) = owner {
            owner.apply(path)?;
        }
        info!("Wrote zone {} to {}.", self.name(), path.display());
        Ok(())
    }

    /// Registers the zone in the name server configuration file at
    /// `conf_path` by appending the zone's configuration entry.
    ///
    /// If any line of the file already contains the zone's name (without
    /// the trailing `.`) in double quotes, the zone is taken to be
    /// registered and nothing is written. A missing file is treated as
    /// empty. Returns whether the entry was written.
    pub fn write_to_conf(&self, conf_path: &Path) -> Result<bool> {
        if self.conf_entry().is_empty() {
            return Err(Error::MissingParameter("configuration entry"));
        }

        let existing = match fs::read_to_string(conf_path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => String::new(),
            Err(e) => return Err(e.into()),
        };
        let bare_name = self.name().strip_suffix('.').unwrap_or(self.name());
        let pattern = format!("\"{}\"", regex::escape(bare_name));
        let regex =
            Regex::new(&pattern).map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
        if existing.lines().any(|line| regex.is_match(line)) {
            debug!(
                "Zone {} is already registered in {}.",
                self.name(),
                conf_path.display(),
            );
            return Ok(false);
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(conf_path)?;
        write!(file, "\n{}\n", self.conf_entry())?;
        Ok(true)
    }
}

////////////////////////////////////////////////////////////////////////
// TESTS                                                              //
////////////////////////////////////////////////////////////////////////
