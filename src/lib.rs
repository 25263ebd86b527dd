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

//! Modelling and serialization of BIND-style DNS zone files.
//!
//! The [`zone::Zone`] aggregate holds a zone's start-of-authority data
//! and one collection of resource records per supported RR type. It
//! can be populated by hand (through the validating [`rr::Record`]
//! API), from a [default-record template](`zone::Defaults`), or by
//! parsing an existing zone file with the tolerant line classifier in
//! [`zone_file`]. [`zone::Zone::serialize`] produces the text that a
//! name-server daemon reads.

pub mod rr;
mod util;
pub mod zone;
pub mod zone_file;
