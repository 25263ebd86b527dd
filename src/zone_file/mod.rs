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

//! Best-effort parsing of BIND-style zone files.
//!
//! This module recovers a zone's structure from existing zone file
//! text through the [`parse`] function. It is not a full [RFC 1035 § 5]
//! parser. Instead, it works in two passes:
//!
//! 1. The SOA data is recovered from the first `$TTL` directive and
//!    from the first parenthesized block in the file. Within the
//!    block, comments are removed, the text is lower-cased and split
//!    on whitespace, the `IN` and `SOA` keywords are dropped, and the
//!    remaining tokens are assigned by position (zone name, name
//!    server, e-mail, serial, refresh, retry, expiry, minimum TTL).
//!
//! 2. Every line after the SOA block is matched case-insensitively
//!    against `\s+in\s+<type>\s+` for each supported [`Type`], in
//!    [`Type::ALL`] order. Matching lines are kept verbatim; all other
//!    lines are dropped.
//!
//! Record lines are therefore returned as raw text, not decoded into
//! fields. This is enough to re-emit a zone (or count its records) but
//! does not validate record data. Only problems with the SOA data are
//! reported as errors.
//!
//! ```
//! use bindzone::rr::Type;
//! use bindzone::zone_file;
//!
//! const ZONE_FILE: &str = "\
//! $TTL 86400
//! example.com. IN SOA ns1.example.com. admin.example.com. (
//!     2024010100  ; serial
//!     3600        ; refresh
//!     900         ; retry
//!     604800      ; expire
//!     86400       ; minimum
//!     )
//! @       IN NS   ns1.example.com.
//! www     IN A    192.0.2.1
//!         IN AAAA 2001:db8::1
//! ";
//!
//! let parsed = zone_file::parse(ZONE_FILE).unwrap();
//! assert_eq!(parsed.soa.serial, "2024010100");
//! let types: Vec<Type> = parsed.records.iter().map(|(t, _)| *t).collect();
//! assert_eq!(types, [Type::NS, Type::A, Type::AAAA]);
//! ```
//!
//! [RFC 1035 § 5]: https://datatracker.ietf.org/doc/html/rfc1035#section-5

use log::debug;

use crate::rr::Type;
use crate::zone::Soa;

mod classify;
pub mod error;
mod soa;

pub use classify::classify_line;
pub use error::{Error, Result};

/// The data recovered from a zone file by [`parse`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParsedZone {
    pub soa: Soa,

    /// Record lines after the SOA block, in file order, each with the
    /// type it was classified as.
    pub records: Vec<(Type, String)>,
}

/// Parses zone file text. See the [module-level
/// documentation](`self`) for the algorithm.
pub fn parse(text: &str) -> Result<ParsedZone> {
    let (soa, soa_end) = soa::read_soa(text)?;
    let records = classify::classify_lines(&text[soa_end..]);
    debug!(
        "Parsed SOA (serial {}) and {} record lines.",
        soa.serial,
        records.len(),
    );
    Ok(ParsedZone { soa, records })
}

/// Decodes only the SOA data from zone file text.
pub(crate) fn decode_soa(text: &str) -> Result<Soa> {
    soa::read_soa(text).map(|(soa, _)| soa)
}

////////////////////////////////////////////////////////////////////////
// TESTS                                                              //
////////////////////////////////////////////////////////////////////////
