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

//! Implements the configuration file.

use std::fmt::{self, Write};
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use log::Level::Debug;
use log::{debug, log_enabled};
use paste::paste;
use serde::{de, Deserialize};

use bindzone::rr::Type;
use bindzone::zone::{Defaults, Owner, Soa};

use crate::args::CreateArgs;

////////////////////////////////////////////////////////////////////////
// CONFIGURATION LOADING                                              //
////////////////////////////////////////////////////////////////////////

/// Loads the configuration from the file given by `path`, or the
/// built-in configuration if there is none, and then applies the
/// overrides given on the command line.
pub fn load(args: &CreateArgs) -> Result<Config> {
    let mut config = match args.config {
        Some(ref path) => load_from_path(path)?,
        None => Config::default(),
    };
    if let Some(ref zone_dir) = args.zone_dir {
        config.bind.zone_dir = zone_dir.clone();
    }
    if let Some(ref named_conf) = args.named_conf {
        config.bind.named_conf = named_conf.clone();
    }
    if let Some(ref serial) = args.serial {
        config.soa.serial = serial.clone();
    }
    log_config_summary(&config);
    Ok(config)
}

/// Loads the configuration from the file given by `path`.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<Config> {
    let raw_config = fs::read(path.as_ref()).context("failed to read the configuration file")?;
    toml::from_slice(&raw_config).context("failed to parse the configuration file")
}

/// Summarizes the configuration in the log, if the debug log level is
/// enabled.
fn log_config_summary(config: &Config) {
    if !log_enabled!(Debug) {
        // Don't compute the message if it will never be printed.
        return;
    }

    let mut message = format!(
        "Configuration loaded:\n\
         Zone directory: {}\n\
         Named config:   {}\n\
         SOA serial:     {}\n\
         Default types:  ",
        config.bind.zone_dir.display(),
        config.bind.named_conf.display(),
        config.soa.serial,
    );
    if config.defaults.types.is_empty() {
        message.push_str("none");
    } else {
        for (i, rr_type) in config.defaults.types.iter().enumerate() {
            if i > 0 {
                message.push(' ');
            }
            write!(message, "{}", rr_type.0).unwrap();
        }
    }
    debug!("{}", message);
}

////////////////////////////////////////////////////////////////////////
// CONFIGURATION FILE STRUCTURE                                       //
////////////////////////////////////////////////////////////////////////

/// The complete configuration file. Every section is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub soa: SoaConfig,
    #[serde(default)]
    pub defaults: DefaultsConfig,
    #[serde(default)]
    pub bind: BindConfig,
}

////////////////////////////////////////////////////////////////////////
// CONFIGURATION SECTION: SOA                                         //
////////////////////////////////////////////////////////////////////////

/// The SOA data given to newly created zones.
#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SoaConfig {
    pub ttl: String,
    pub ns: String,
    pub email: String,
    pub serial: String,
    pub refresh: String,
    pub retry: String,
    pub expiry: String,
    pub minttl: String,
}

impl Default for SoaConfig {
    fn default() -> Self {
        Self {
            ttl: "86400".into(),
            ns: "ns1.example.com.".into(),
            email: "hostmaster.example.com.".into(),
            serial: "1".into(),
            refresh: "10800".into(),
            retry: "3600".into(),
            expiry: "604800".into(),
            minttl: "86400".into(),
        }
    }
}

impl From<&SoaConfig> for Soa {
    fn from(config: &SoaConfig) -> Self {
        Self {
            ttl: config.ttl.clone(),
            ns: config.ns.clone(),
            email: config.email.clone(),
            serial: config.serial.clone(),
            refresh: config.refresh.clone(),
            retry: config.retry.clone(),
            expiry: config.expiry.clone(),
            minttl: config.minttl.clone(),
        }
    }
}

////////////////////////////////////////////////////////////////////////
// CONFIGURATION SECTION: DEFAULT RECORDS                             //
////////////////////////////////////////////////////////////////////////

/// The template of records set up in newly created zones, and the RR
/// types for which it is expanded.
#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DefaultsConfig {
    pub types: Vec<ConfigType>,
    pub a: Vec<String>,
    pub aaaa: Vec<String>,
    pub cname: Vec<(String, String)>,
    pub mx: Vec<(String, String, String)>,
    pub ns: Vec<(String, String)>,
    pub txt: Vec<(String, String)>,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        let template = Defaults::default();
        Self {
            types: [Type::NS, Type::A, Type::AAAA, Type::CNAME, Type::MX, Type::TXT]
                .map(ConfigType)
                .to_vec(),
            a: template.a,
            aaaa: template.aaaa,
            cname: template.cname,
            mx: template.mx,
            ns: template.ns,
            txt: template.txt,
        }
    }
}

impl DefaultsConfig {
    /// Returns the record template.
    pub fn template(&self) -> Defaults {
        Defaults {
            a: self.a.clone(),
            aaaa: self.aaaa.clone(),
            cname: self.cname.clone(),
            mx: self.mx.clone(),
            ns: self.ns.clone(),
            txt: self.txt.clone(),
        }
    }

    /// Returns the RR types for which the template is expanded.
    pub fn types(&self) -> impl Iterator<Item = Type> + '_ {
        self.types.iter().map(|t| t.0)
    }
}

////////////////////////////////////////////////////////////////////////
// CONFIGURATION SECTION: BIND                                        //
////////////////////////////////////////////////////////////////////////

/// Where zone files go and how the name server finds them.
#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BindConfig {
    /// The directory in which `<NAME>zone` files are written.
    pub zone_dir: PathBuf,

    /// The name server configuration file that zones are registered in.
    pub named_conf: PathBuf,

    /// The numeric user ID to give zone files.
    pub owner: Option<u32>,

    /// The numeric group ID to give zone files.
    pub group: Option<u32>,
}

impl Default for BindConfig {
    fn default() -> Self {
        Self {
            zone_dir: PathBuf::from("/var/named"),
            named_conf: PathBuf::from("/etc/named.conf"),
            owner: None,
            group: None,
        }
    }
}

impl BindConfig {
    /// Returns the ownership to give zone files. The owner and group
    /// must be configured together.
    pub fn owner(&self) -> Result<Option<Owner>> {
        match (self.owner, self.group) {
            (Some(uid), Some(gid)) => Ok(Some(Owner { uid, gid })),
            (None, None) => Ok(None),
            _ => Err(anyhow!(
                "bind.owner and bind.group must be set together"
            )),
        }
    }
}

////////////////////////////////////////////////////////////////////////
// WRAPPERS OVER BINDZONE TYPES FOR SERDE                             //
////////////////////////////////////////////////////////////////////////

/// Generates a deserializable `ConfigX` structure wrapping an `X` type
/// from [`bindzone`], using its [`FromStr`](std::str::FromStr)
/// implementation.
macro_rules! make_serde_wrapper {
    ($wrapper:ident, $over:ty, $description:literal) => {
        /// A macro-generated deserializable wrapper over a [`bindzone`]
        /// type.
        #[derive(Clone, Copy, Debug, Eq, PartialEq)]
        pub struct $wrapper(pub $over);

        impl<'de> Deserialize<'de> for $wrapper {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: de::Deserializer<'de>,
            {
                deserializer.deserialize_str(paste! { [<$wrapper Visitor>] })
            }
        }

        paste! {
            /// A macro-generated [`Visitor`](de::Visitor).
            #[derive(Debug)]
            struct [<$wrapper Visitor>];
        }

        impl<'de> de::Visitor<'de> for paste! { [<$wrapper Visitor>] } {
            type Value = $wrapper;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str($description)
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                value
                    .parse()
                    .map($wrapper)
                    .map_err(|e| E::custom(format!("invalid {}: {}", $description, e)))
            }
        }
    };
}

make_serde_wrapper!(ConfigType, Type, "RR type");

////////////////////////////////////////////////////////////////////////
// TESTS                                                              //
////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_built_in_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.soa.serial, "1");
        assert_eq!(config.bind.zone_dir, Path::new("/var/named"));
        assert_eq!(config.defaults.template(), Defaults::default());
        assert!(config.bind.owner().unwrap().is_none());
    }

    #[test]
    fn sections_are_parsed() {
        let config: Config = toml::from_str(
            r#"
            [soa]
            ns = "ns.example.net."
            serial = "2024010100"

            [defaults]
            types = ["a", "MX"]
            a = ["@"]
            mx = [["@", "20", "mx2"]]

            [bind]
            zone_dir = "/srv/zones"
            owner = 25
            group = 25
            "#,
        )
        .unwrap();
        assert_eq!(config.soa.ns, "ns.example.net.");
        assert_eq!(config.soa.ttl, "86400");
        assert_eq!(
            config.defaults.types().collect::<Vec<_>>(),
            [Type::A, Type::MX]
        );
        let template = config.defaults.template();
        assert_eq!(template.a, ["@"]);
        assert_eq!(
            template.mx,
            [("@".to_owned(), "20".to_owned(), "mx2".to_owned())]
        );
        assert_eq!(template.ns.len(), 2);
        assert_eq!(
            config.bind.owner().unwrap(),
            Some(Owner { uid: 25, gid: 25 })
        );
    }

    #[test]
    fn unknown_fields_are_rejected() {
        assert!(toml::from_str::<Config>("[soa]\nserail = \"1\"\n").is_err());
        assert!(toml::from_str::<Config>("[zones]\n").is_err());
    }

    #[test]
    fn unsupported_types_are_rejected() {
        assert!(toml::from_str::<Config>("[defaults]\ntypes = [\"SOA\"]\n").is_err());
    }

    #[test]
    fn owner_requires_group() {
        let config: Config = toml::from_str("[bind]\nowner = 0\n").unwrap();
        assert!(config.bind.owner().is_err());
    }
}
