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

//! Implements the `create` and `show` commands.

use std::fmt::Write;
use std::fs;
use std::path::Path;
use std::process;

use anyhow::{Context, Result};
use env_logger::Env;
use log::{error, info};

use bindzone::rr::Type;
use bindzone::zone::{Soa, Zone};

use crate::args::{Args, Command, CreateArgs, ShowArgs};
use crate::config;

/// Runs the command given on the command line.
pub fn run(args: Args) {
    env_logger::init_from_env(Env::new().default_filter_or("warn"));

    let (action, result) = match args.command {
        Command::Create(create_args) => ("create the zone", create(create_args)),
        Command::Show(show_args) => ("show the zone", show(show_args)),
    };
    if let Err(e) = result {
        let mut message = format!("Failed to {}:", action);
        for (i, cause) in e.chain().enumerate() {
            write!(message, "\n[{}] {}", i + 1, cause).unwrap();
        }
        message.push_str("\nExiting with failure.");
        error!("{}", message);
        process::exit(1);
    }
}

////////////////////////////////////////////////////////////////////////
// CREATE                                                             //
////////////////////////////////////////////////////////////////////////

fn create(args: CreateArgs) -> Result<()> {
    let config = config::load(&args)?;
    let owner = config.bind.owner()?;

    let mut zone = Zone::new(&args.name)?;
    let path = config.bind.zone_dir.join(format!("{}zone", zone.name()));
    zone.set_conf_entry(conf_entry(zone.name(), &path));
    zone.set_zone_file(path);

    let existing = zone.zone_exists(None)
        && zone
            .parse_zone_file(None)
            .context("failed to parse the existing zone file")?;
    if existing {
        info!(
            "Updating zone {} from {}.",
            zone.name(),
            zone.zone_file().display(),
        );
        if let Some(ref serial) = args.serial {
            let mut soa = zone.soa().cloned().unwrap_or_else(|| Soa::from(&config.soa));
            soa.serial = serial.clone();
            zone.set_soa(soa);
        }
    } else {
        info!("Creating zone {}.", zone.name());
        zone.set_soa(Soa::from(&config.soa));
        let template = config.defaults.template();
        let ipv4 = args.ip.map(|ip| ip.to_string());
        let ipv6 = args.ipv6.map(|ip| ip.to_string());
        for rr_type in config.defaults.types() {
            let ip = match rr_type {
                Type::A => ipv4.as_deref(),
                Type::AAAA => ipv6.as_deref(),
                _ => None,
            };
            if matches!(rr_type, Type::A | Type::AAAA) && ip.is_none() {
                info!("No address was given; skipping default {} records.", rr_type);
                continue;
            }
            zone.add_default_records(rr_type, ip, &template)
                .with_context(|| format!("failed to add default {} records", rr_type))?;
        }
    }

    zone.write_zone_file(owner)
        .context("failed to write the zone file")?;
    let named_conf = &config.bind.named_conf;
    if zone
        .write_to_conf(named_conf)
        .context("failed to register the zone")?
    {
        info!("Registered zone {} in {}.", zone.name(), named_conf.display());
    } else {
        info!(
            "Zone {} is already registered in {}.",
            zone.name(),
            named_conf.display(),
        );
    }
    Ok(())
}

/// Builds the name server configuration entry for a zone.
fn conf_entry(zone_name: &str, path: &Path) -> String {
    let bare_name = zone_name.strip_suffix('.').unwrap_or(zone_name);
    format!(
        "zone \"{}\" {{ type master; file \"{}\"; }};",
        bare_name,
        path.display(),
    )
}

////////////////////////////////////////////////////////////////////////
// SHOW                                                               //
////////////////////////////////////////////////////////////////////////

fn show(args: ShowArgs) -> Result<()> {
    let name = args.zone_name()?;
    let text = fs::read_to_string(&args.file).context("failed to read the zone file")?;
    let mut zone = Zone::new(&name)?;
    zone.parse_zone_text(&text)
        .context("failed to parse the zone file")?;
    print!("{}", zone.serialize()?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conf_entry_uses_bare_name() {
        assert_eq!(
            conf_entry("example.com.", Path::new("/var/named/example.com.zone")),
            "zone \"example.com\" { type master; file \"/var/named/example.com.zone\"; };"
        );
    }

    #[test]
    fn create_writes_and_registers_zone() {
        let dir = tempfile::tempdir().unwrap();
        let named_conf = dir.path().join("named.conf");
        let args = CreateArgs {
            name: "Example.com".into(),
            ip: Some("203.0.113.5".parse().unwrap()),
            ipv6: None,
            config: None,
            zone_dir: Some(dir.path().to_path_buf()),
            named_conf: Some(named_conf.clone()),
            serial: Some("2024010100".into()),
        };
        create(args).unwrap();

        let zone_path = dir.path().join("example.com.zone");
        let text = fs::read_to_string(&zone_path).unwrap();
        let mut zone = Zone::new("example.com.").unwrap();
        zone.parse_zone_text(&text).unwrap();
        assert_eq!(zone.soa().unwrap().serial, "2024010100");
        assert_eq!(zone.records(Type::A).len(), 4);
        assert_eq!(zone.records(Type::NS).len(), 2);
        assert_eq!(zone.records(Type::MX).len(), 1);
        assert_eq!(zone.records(Type::TXT).len(), 1);
        assert!(zone.records(Type::AAAA).is_empty());

        let conf = fs::read_to_string(&named_conf).unwrap();
        assert_eq!(
            conf,
            format!("\n{}\n", conf_entry("example.com.", &zone_path))
        );
    }

    #[test]
    fn create_updates_existing_zone() {
        let dir = tempfile::tempdir().unwrap();
        let make_args = |serial: &str| CreateArgs {
            name: "example.com.".into(),
            ip: Some("192.0.2.1".parse().unwrap()),
            ipv6: None,
            config: None,
            zone_dir: Some(dir.path().to_path_buf()),
            named_conf: Some(dir.path().join("named.conf")),
            serial: Some(serial.into()),
        };
        create(make_args("1")).unwrap();
        create(make_args("2")).unwrap();

        let text = fs::read_to_string(dir.path().join("example.com.zone")).unwrap();
        let mut zone = Zone::new("example.com.").unwrap();
        zone.parse_zone_text(&text).unwrap();
        assert_eq!(zone.soa().unwrap().serial, "2");
        assert_eq!(zone.records(Type::A).len(), 4);

        let conf = fs::read_to_string(dir.path().join("named.conf")).unwrap();
        assert_eq!(conf.matches("zone \"example.com\"").count(), 1);
    }
}
