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

//! Error type for zone file parsing.
//!
//! The parser is deliberately tolerant of record lines it does not
//! understand (they are dropped), so the only errors it reports concern
//! the start-of-authority data, without which no zone can be written
//! back out.

use std::fmt;

/// Represents a zone file whose SOA data could not be recovered.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Error {
    /// No line starts with a `$TTL` directive followed by a value.
    MissingTtl,

    /// No line containing `(` is followed by a line containing `)`.
    MissingSoaBlock,

    /// The SOA block was found, but it held fewer than the eight tokens
    /// needed (owner, name server, e-mail, and the five timers).
    TooFewSoaTokens { found: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Self::MissingTtl => f.write_str("no $TTL directive with a value was found"),
            Self::MissingSoaBlock => {
                f.write_str("no parenthesized SOA block was found")
            }
            Self::TooFewSoaTokens { found } => write!(
                f,
                "the SOA block has {} tokens, but 8 are expected",
                found
            ),
        }
    }
}

impl std::error::Error for Error {}

/// A result type for zone file parsing.
pub type Result<T> = std::result::Result<T, Error>;
