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

//! Provides the [`Type`] enumeration for supported RR types.

use std::fmt;
use std::str::FromStr;

use crate::util::Caseless;

////////////////////////////////////////////////////////////////////////
// RR TYPES                                                           //
////////////////////////////////////////////////////////////////////////

/// The RR types that can be stored in a [`Zone`](crate::zone::Zone).
///
/// Only the types a hand-maintained forward or reverse zone commonly
/// needs are supported. The SOA record is not listed here, since every
/// zone has exactly one and it is handled by
/// [`Soa`](crate::zone::Soa). The type has case-insensitive
/// [`FromStr`] and upper-case [`Display`](fmt::Display)
/// implementations matching the mnemonics used in zone files.
#[derive(Clone, Copy, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum Type {
    A,
    AAAA,
    CNAME,
    HINFO,
    MX,
    NS,
    PTR,
    SRV,
    TXT,
}

impl Type {
    /// All supported types, in the order in which the zone file parser
    /// tries to match them against a line.
    pub const ALL: [Type; 9] = [
        Self::A,
        Self::AAAA,
        Self::CNAME,
        Self::HINFO,
        Self::MX,
        Self::NS,
        Self::PTR,
        Self::SRV,
        Self::TXT,
    ];

    /// Returns the zone-file mnemonic of the type.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::AAAA => "AAAA",
            Self::CNAME => "CNAME",
            Self::HINFO => "HINFO",
            Self::MX => "MX",
            Self::NS => "NS",
            Self::PTR => "PTR",
            Self::SRV => "SRV",
            Self::TXT => "TXT",
        }
    }
}

impl FromStr for Type {
    type Err = &'static str;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|rr_type| Caseless(rr_type.as_str()) == Caseless(text))
            .ok_or("unknown or unsupported type")
    }
}

impl fmt::Debug for Type {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{self}")
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

////////////////////////////////////////////////////////////////////////
// TESTS                                                              //
////////////////////////////////////////////////////////////////////////
