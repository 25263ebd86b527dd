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

//! Implementation of the [`Error`] type for zone-related errors.

use std::fmt;
use std::io;

use crate::{rr, zone_file};

/// Errors that arise during operations on a [`Zone`](super::Zone).
#[derive(Debug)]
pub enum Error {
    /// A record field was rejected.
    InvalidField(rr::Error),

    /// The SOA data of a zone file could not be recovered.
    MalformedZoneFile(zone_file::Error),

    /// A required parameter was not supplied (e.g., the address for
    /// default A records).
    MissingParameter(&'static str),

    /// The zone was serialized before its SOA data was set.
    SoaNotSet,

    /// The named SOA field is empty or is not a single token.
    IncompleteSoa { field: &'static str },

    /// The zone name is empty or contains whitespace, a `;`, or a
    /// parenthesis.
    InvalidZoneName(String),

    /// An I/O error occurred while writing a file or changing its
    /// ownership.
    Io(io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::InvalidField(rr_error) => fmt::Display::fmt(rr_error, f),
            Self::MalformedZoneFile(parse_error) => {
                write!(f, "malformed zone file: {}", parse_error)
            }
            Self::MissingParameter(parameter) => {
                write!(f, "the {} parameter is required", parameter)
            }
            Self::SoaNotSet => f.write_str("the zone's SOA data has not been set"),
            Self::IncompleteSoa { field } => {
                write!(f, "the SOA {} field is empty or is not a single token", field)
            }
            Self::InvalidZoneName(name) => write!(f, "invalid zone name {:?}", name),
            Self::Io(io_error) => write!(f, "I/O error: {}", io_error),
        }
    }
}

impl std::error::Error for Error {}

impl From<rr::Error> for Error {
    fn from(error: rr::Error) -> Self {
        Self::InvalidField(error)
    }
}

impl From<zone_file::Error> for Error {
    fn from(error: zone_file::Error) -> Self {
        Self::MalformedZoneFile(error)
    }
}

impl From<io::Error> for Error {
    fn from(error: io::Error) -> Self {
        Self::Io(error)
    }
}

/// A result type for zone operations.
pub type Result<T> = std::result::Result<T, Error>;
