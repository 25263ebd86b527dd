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

//! Implements command-line argument parsing.

use std::ffi::OsStr;
use std::net::{Ipv4Addr, Ipv6Addr};
use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};

/// Parses the command line arguments.
pub fn parse() -> Args {
    Args::parse()
}

/// Create and inspect BIND zone files
#[derive(Debug, Parser)]
#[clap(author, version)]
pub struct Args {
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Create a zone (or update an existing one) and register it
    Create(CreateArgs),

    /// Parse a zone file and print the zone as it would be rewritten
    Show(ShowArgs),
}

#[derive(Debug, Parser)]
pub struct CreateArgs {
    /// The name of the zone
    #[clap(value_name = "NAME")]
    pub name: String,

    /// Set the address for the default A records
    #[clap(long, value_name = "IPV4")]
    pub ip: Option<Ipv4Addr>,

    /// Set the address for the default AAAA records
    #[clap(long, value_name = "IPV6")]
    pub ipv6: Option<Ipv6Addr>,

    /// Set the configuration file to use
    #[clap(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Override the directory zone files are written to
    #[clap(long, value_name = "DIR")]
    pub zone_dir: Option<PathBuf>,

    /// Override the name server configuration file to register in
    #[clap(long, value_name = "FILE")]
    pub named_conf: Option<PathBuf>,

    /// Set the SOA serial number
    #[clap(long, value_name = "SERIAL")]
    pub serial: Option<String>,
}

#[derive(Debug, Parser)]
pub struct ShowArgs {
    /// The zone file to parse
    #[clap(value_name = "FILE")]
    pub file: PathBuf,

    /// Set the zone name (by default, it is inferred from a file name
    /// of the form <NAME>.zone)
    #[clap(long, value_name = "NAME")]
    pub name: Option<String>,
}

impl ShowArgs {
    /// Returns the zone name, either as given or as computed by
    /// stripping the `.zone` suffix from the basename of the file.
    pub fn zone_name(&self) -> Result<String> {
        if let Some(ref name) = self.name {
            return Ok(name.clone());
        }
        if self.file.extension() != Some(OsStr::new("zone")) {
            return Err(anyhow!(
                "if no zone name is provided, the file name must have the form <NAME>.zone",
            ));
        }
        self.file
            .file_stem()
            .and_then(OsStr::to_str)
            .map(|stem| format!("{}.", stem))
            .ok_or_else(|| anyhow!("failed to compute zone name from zone file path"))
    }
}
