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

//! Implementation of the [`Zone`] aggregate, which holds a zone's data
//! in memory and converts it to and from zone file text.

use std::collections::BTreeMap;
use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use log::debug;

use crate::rr::{Record, Type};
use crate::util::dot_terminate;
use crate::zone_file;

mod defaults;
mod error;
mod persist;
mod soa;

pub use defaults::Defaults;
pub use error::{Error, Result};
pub use persist::Owner;
pub use soa::Soa;

/// The order in which record collections are written to zone files.
const EMISSION_ORDER: [Type; 9] = [
    Type::NS,
    Type::A,
    Type::AAAA,
    Type::CNAME,
    Type::MX,
    Type::PTR,
    Type::SRV,
    Type::TXT,
    Type::HINFO,
];

////////////////////////////////////////////////////////////////////////
// STRUCTURES                                                         //
////////////////////////////////////////////////////////////////////////

/// A DNS zone held in memory for editing.
///
/// A `Zone` is identified by its fully qualified name and owns the
/// zone's [`Soa`] data plus one ordered collection of [`Entry`] values
/// per [`Type`]. It also carries the path of its zone file and the
/// entry that registers it in the name server's configuration; both are
/// supplied by the caller.
///
/// Zones are populated with [`Zone::set_soa`] and [`Zone::add`], from a
/// template with [`Zone::add_default_records`], or from an existing
/// file with [`Zone::parse_zone_file`]. [`Zone::serialize`] produces
/// the zone file text.
#[derive(Clone, Debug)]
pub struct Zone {
    name: String,
    soa: Option<Soa>,
    records: BTreeMap<Type, Vec<Entry>>,
    zone_file: PathBuf,
    conf_entry: String,
}

/// An element of a [`Zone`]'s record collections.
///
/// Records added through the API are kept as structured [`Record`]s.
/// Records recovered by the zone file parser are kept as the raw lines
/// they were read from, since the parser classifies lines but does not
/// decode their fields.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Entry {
    Record(Record),
    Raw(String),
}

impl From<Record> for Entry {
    fn from(record: Record) -> Self {
        Self::Record(record)
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Record(record) => fmt::Display::fmt(record, f),
            Self::Raw(line) => f.write_str(line),
        }
    }
}

////////////////////////////////////////////////////////////////////////
// CONSTRUCTION AND ACCESSORS                                         //
////////////////////////////////////////////////////////////////////////

impl Zone {
    /// Creates an empty zone. The name is lower-cased and given a
    /// trailing `.` if it lacks one. It must be non-empty and must not
    /// contain whitespace, `;`, or parentheses, since it is written as
    /// the owner token of the SOA record.
    pub fn new(name: &str) -> Result<Self> {
        if name.is_empty()
            || name.contains(|c: char| c.is_whitespace() || matches!(c, ';' | '(' | ')'))
        {
            return Err(Error::InvalidZoneName(name.into()));
        }
        let mut name = name.to_lowercase();
        dot_terminate(&mut name);
        Ok(Self {
            name,
            soa: None,
            records: BTreeMap::new(),
            zone_file: PathBuf::new(),
            conf_entry: String::new(),
        })
    }

    /// Returns the zone's fully qualified name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the zone's SOA data, if set.
    pub fn soa(&self) -> Option<&Soa> {
        self.soa.as_ref()
    }

    pub fn set_soa(&mut self, soa: Soa) {
        self.soa = Some(soa);
    }

    /// Returns the encoded `$TTL` directive and SOA block. Every SOA
    /// field must be set to a single token.
    pub fn soa_text(&self) -> Result<String> {
        let soa = self.soa.as_ref().ok_or(Error::SoaNotSet)?;
        if let Some(field) = soa.invalid_field() {
            return Err(Error::IncompleteSoa { field });
        }
        Ok(soa.encode(&self.name))
    }

    /// Returns the path of the zone file.
    pub fn zone_file(&self) -> &Path {
        &self.zone_file
    }

    pub fn set_zone_file(&mut self, path: impl Into<PathBuf>) {
        self.zone_file = path.into();
    }

    /// Returns the entry that registers the zone in the name server's
    /// configuration file. See [`Zone::write_to_conf`].
    pub fn conf_entry(&self) -> &str {
        &self.conf_entry
    }

    pub fn set_conf_entry(&mut self, entry: impl Into<String>) {
        self.conf_entry = entry.into();
    }

    /// Returns the collection of entries of type `rr_type`.
    pub fn records(&self, rr_type: Type) -> &[Entry] {
        self.records
            .get(&rr_type)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Returns the total number of entries across all types.
    pub fn len(&self) -> usize {
        self.records.values().map(Vec::len).sum()
    }

    /// Returns whether the zone has no entries (the SOA is not
    /// counted).
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

////////////////////////////////////////////////////////////////////////
// POPULATION                                                         //
////////////////////////////////////////////////////////////////////////

impl Zone {
    /// Appends a record to the collection for its type.
    pub fn add(&mut self, record: Record) {
        self.push(record.rr_type(), record.into());
    }

    /// Expands `defaults` for `rr_type` and appends the resulting
    /// records. `ip` is required for A and AAAA records. Either all of
    /// the template's records for the type are added, or (on error)
    /// none are.
    pub fn add_default_records(
        &mut self,
        rr_type: Type,
        ip: Option<&str>,
        defaults: &Defaults,
    ) -> Result<()> {
        let records = defaults.expand(rr_type, ip)?;
        debug!(
            "Adding {} default {} records to {}.",
            records.len(),
            rr_type,
            self.name,
        );
        for record in records {
            self.add(record);
        }
        Ok(())
    }

    fn push(&mut self, rr_type: Type, entry: Entry) {
        self.records.entry(rr_type).or_default().push(entry);
    }
}

////////////////////////////////////////////////////////////////////////
// PARSING                                                            //
////////////////////////////////////////////////////////////////////////

impl Zone {
    /// Returns whether the zone file exists at `path`, or at the zone's
    /// own path if `path` is [`None`]. The content is not checked.
    pub fn zone_exists(&self, path: Option<&Path>) -> bool {
        path.unwrap_or(self.zone_file.as_path()).is_file()
    }

    /// Replaces the zone's SOA data and records with those parsed from
    /// `text`. On error, the zone is left unchanged.
    pub fn parse_zone_text(&mut self, text: &str) -> Result<()> {
        let parsed = zone_file::parse(text)?;
        self.soa = Some(parsed.soa);
        self.records.clear();
        for (rr_type, line) in parsed.records {
            self.push(rr_type, Entry::Raw(line));
        }
        Ok(())
    }

    /// Reads the zone file at `path` (or the zone's own path if `path`
    /// is [`None`]) and replaces the zone's data with its contents.
    ///
    /// If the file cannot be opened, this returns `Ok(false)` and the
    /// zone is unchanged, so that callers can fall back to creating the
    /// zone. Errors reading an opened file and malformed SOA data are
    /// reported as errors. `Ok(true)` signals success.
    pub fn parse_zone_file(&mut self, path: Option<&Path>) -> Result<bool> {
        let path = path.map_or_else(|| self.zone_file.clone(), Path::to_path_buf);
        if !path.is_file() {
            debug!("Not parsing {}: not a regular file.", path.display());
            return Ok(false);
        }
        let mut file = match File::open(&path) {
            Ok(file) => file,
            Err(e) => {
                debug!("Not parsing {}: {}.", path.display(), e);
                return Ok(false);
            }
        };
        let mut text = String::new();
        file.read_to_string(&mut text)?;
        self.parse_zone_text(&text)?;
        debug!("Parsed {} entries from {}.", self.len(), path.display());
        Ok(true)
    }
}

////////////////////////////////////////////////////////////////////////
// SERIALIZATION                                                      //
////////////////////////////////////////////////////////////////////////

impl Zone {
    /// Produces the zone file text: the SOA block followed by one line
    /// per entry. Collections are written in the order NS, A, AAAA,
    /// CNAME, MX, PTR, SRV, TXT, HINFO; empty collections produce no
    /// output. The text ends with a newline.
    pub fn serialize(&self) -> Result<String> {
        let mut text = self.soa_text()?;
        for rr_type in EMISSION_ORDER {
            for entry in self.records(rr_type) {
                text.push('\n');
                text.push_str(&entry.to_string());
            }
        }
        text.push('\n');
        Ok(text)
    }
}

////////////////////////////////////////////////////////////////////////
// TESTS                                                              //
////////////////////////////////////////////////////////////////////////
