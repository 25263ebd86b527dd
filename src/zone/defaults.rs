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

//! Implementation of the [`Defaults`] record template.

use super::{Error, Result};
use crate::rr::{Record, Type};

/// A template of records to set up in new zones.
///
/// Strings in the template are used as zone data as-is: fully
/// qualified names should end with `.`, and host names should not.
/// The [`Default`] implementation provides a typical template for a
/// small web and mail domain.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Defaults {
    /// Owners of A records, each resolved to the address supplied when
    /// the template is expanded.
    pub a: Vec<String>,

    /// Owners of AAAA records, like [`Defaults::a`].
    pub aaaa: Vec<String>,

    /// `(alias, target)` pairs.
    pub cname: Vec<(String, String)>,

    /// `(owner, preference, mail server)` triples.
    pub mx: Vec<(String, String, String)>,

    /// `(owner, name server)` pairs.
    pub ns: Vec<(String, String)>,

    /// `(owner, text)` pairs.
    pub txt: Vec<(String, String)>,
}

impl Defaults {
    /// Returns a template without any records.
    pub fn empty() -> Self {
        Self {
            a: Vec::new(),
            aaaa: Vec::new(),
            cname: Vec::new(),
            mx: Vec::new(),
            ns: Vec::new(),
            txt: Vec::new(),
        }
    }

    /// Builds the validated records that the template specifies for
    /// `rr_type`. `ip` is required for A and AAAA records; other types
    /// ignore it. Types without template entries (HINFO, PTR, and SRV)
    /// produce no records.
    pub fn expand(&self, rr_type: Type, ip: Option<&str>) -> Result<Vec<Record>> {
        let records: Vec<Record> = match rr_type {
            Type::A | Type::AAAA => {
                let ip = ip.ok_or(Error::MissingParameter("IP address"))?;
                let owners = if rr_type == Type::A { &self.a } else { &self.aaaa };
                owners
                    .iter()
                    .map(|src| Record::with_target(rr_type, src, ip))
                    .collect::<std::result::Result<_, _>>()?
            }
            Type::CNAME => pairs(rr_type, &self.cname)?,
            Type::NS => pairs(rr_type, &self.ns)?,
            Type::TXT => pairs(rr_type, &self.txt)?,
            Type::MX => self
                .mx
                .iter()
                .map(|(src, pref, tgt)| {
                    let mut record = Record::with_target(Type::MX, src, tgt)?;
                    record.set_pref(pref)?;
                    Ok(record)
                })
                .collect::<std::result::Result<_, crate::rr::Error>>()?,
            Type::HINFO | Type::PTR | Type::SRV => Vec::new(),
        };
        Ok(records)
    }
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            a: ["@", "mail", "ftp", "www"].map(String::from).to_vec(),
            aaaa: Vec::new(),
            cname: Vec::new(),
            mx: vec![("@".into(), "10".into(), "mail".into())],
            ns: vec![
                ("@".into(), "ns1.example.com.".into()),
                ("@".into(), "ns2.example.com.".into()),
            ],
            txt: vec![("@".into(), "v=spf1 a mx ~all".into())],
        }
    }
}

/// Builds records from `(src, tgt)` pairs.
fn pairs(rr_type: Type, pairs: &[(String, String)]) -> Result<Vec<Record>> {
    pairs
        .iter()
        .map(|(src, tgt)| Record::with_target(rr_type, src, tgt).map_err(Error::from))
        .collect()
}

////////////////////////////////////////////////////////////////////////
// TESTS                                                              //
////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a_records_resolve_to_the_supplied_address() {
        let records = Defaults::default()
            .expand(Type::A, Some("203.0.113.5"))
            .unwrap();
        let owners: Vec<&str> = records.iter().map(Record::src).collect();
        assert_eq!(owners, ["@", "mail", "ftp", "www"]);
        assert!(records.iter().all(|r| r.tgt() == "203.0.113.5"));
    }

    #[test]
    fn a_and_aaaa_records_require_an_address() {
        let defaults = Defaults::default();
        assert!(matches!(
            defaults.expand(Type::A, None),
            Err(Error::MissingParameter(_))
        ));
        assert!(matches!(
            defaults.expand(Type::AAAA, None),
            Err(Error::MissingParameter(_))
        ));
    }

    #[test]
    fn invalid_addresses_are_rejected() {
        assert!(matches!(
            Defaults::default().expand(Type::A, Some("2001:db8::1")),
            Err(Error::InvalidField(_))
        ));
        let mut defaults = Defaults::empty();
        defaults.aaaa.push("www".into());
        assert!(matches!(
            defaults.expand(Type::AAAA, Some("192.0.2.1")),
            Err(Error::InvalidField(_))
        ));
        assert_eq!(
            defaults.expand(Type::AAAA, Some("2001:db8::1")).unwrap()[0].tgt(),
            "2001:db8::1"
        );
    }

    #[test]
    fn mx_records_carry_preference() {
        let records = Defaults::default().expand(Type::MX, None).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].pref(), Some("10"));
        assert_eq!(records[0].tgt(), "mail");

        let mut defaults = Defaults::empty();
        defaults.mx.push(("@".into(), "high".into(), "mail".into()));
        assert!(matches!(
            defaults.expand(Type::MX, None),
            Err(Error::InvalidField(_))
        ));
    }

    #[test]
    fn pair_templates_work() {
        let mut defaults = Defaults::default();
        defaults.cname.push(("ftp".into(), "www".into()));
        let cnames = defaults.expand(Type::CNAME, None).unwrap();
        assert_eq!((cnames[0].src(), cnames[0].tgt()), ("ftp", "www"));
        let ns = defaults.expand(Type::NS, None).unwrap();
        assert_eq!(ns.len(), 2);
        assert_eq!(ns[1].tgt(), "ns2.example.com.");
        let txt = defaults.expand(Type::TXT, None).unwrap();
        assert_eq!(txt[0].tgt(), "v=spf1 a mx ~all");
    }

    #[test]
    fn types_without_templates_expand_to_nothing() {
        let defaults = Defaults::default();
        for rr_type in [Type::HINFO, Type::PTR, Type::SRV] {
            assert!(defaults.expand(rr_type, None).unwrap().is_empty());
        }
    }
}
