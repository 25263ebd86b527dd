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

//! Implementation of the [`Record`] structure.

use std::net::Ipv6Addr;

use super::error::{Error, Field};
use super::Type;
use crate::util::{dot_terminate, is_all_digits};

/// The only class supported in zone files written by this crate.
pub const CLASS: &str = "IN";

/// Replaces spaces in HINFO fields.
const SPACE_REPLACEMENT: &str = "_";

/// The MX preference given to new MX records.
const DEFAULT_MX_PREFERENCE: &str = "10";

////////////////////////////////////////////////////////////////////////
// RECORD STRUCTURE                                                   //
////////////////////////////////////////////////////////////////////////

/// A single resource record, ready to be written as one line of a zone
/// file.
///
/// Every record has an owner (`src`), an optional TTL override, a
/// target (`tgt`), and an optional comment. Type-specific fields live
/// in the [`Data`] enumeration, which also determines the record's
/// [`Type`]. Fields are validated when they are set, so a [`Record`]
/// can always be serialized (through its
/// [`Display`](std::fmt::Display) implementation).
///
/// Owners and targets are lower-cased when set. The exception is the
/// TXT target, whose case is preserved.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Record {
    src: String,
    ttl: String,
    tgt: String,
    comment: String,
    data: Data,
}

/// The type-specific part of a [`Record`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Data {
    A,
    Aaaa,
    Cname,
    Hinfo {
        cpu: String,
        os: String,
    },
    Mx {
        pref: String,
    },
    Ns,
    Ptr,
    Srv {
        priority: String,
        weight: String,
        port: String,
    },
    Txt,
}

impl Data {
    /// Returns the default data for a new record of type `rr_type`.
    fn new(rr_type: Type) -> Self {
        match rr_type {
            Type::A => Self::A,
            Type::AAAA => Self::Aaaa,
            Type::CNAME => Self::Cname,
            Type::HINFO => Self::Hinfo {
                cpu: String::new(),
                os: String::new(),
            },
            Type::MX => Self::Mx {
                pref: DEFAULT_MX_PREFERENCE.into(),
            },
            Type::NS => Self::Ns,
            Type::PTR => Self::Ptr,
            Type::SRV => Self::Srv {
                priority: "0".into(),
                weight: "0".into(),
                port: "0".into(),
            },
            Type::TXT => Self::Txt,
        }
    }

    /// Returns the RR type that this data belongs to.
    pub fn rr_type(&self) -> Type {
        match self {
            Self::A => Type::A,
            Self::Aaaa => Type::AAAA,
            Self::Cname => Type::CNAME,
            Self::Hinfo { .. } => Type::HINFO,
            Self::Mx { .. } => Type::MX,
            Self::Ns => Type::NS,
            Self::Ptr => Type::PTR,
            Self::Srv { .. } => Type::SRV,
            Self::Txt => Type::TXT,
        }
    }
}

////////////////////////////////////////////////////////////////////////
// CONSTRUCTION AND SHARED FIELDS                                     //
////////////////////////////////////////////////////////////////////////

impl Record {
    /// Creates an empty record of type `rr_type`. MX records start with
    /// a preference of 10; SRV records start with a priority, weight,
    /// and port of 0.
    pub fn new(rr_type: Type) -> Self {
        Self {
            src: String::new(),
            ttl: String::new(),
            tgt: String::new(),
            comment: String::new(),
            data: Data::new(rr_type),
        }
    }

    /// A convenience constructor for the common case of a record with
    /// an owner and a target. Neither is treated as fully qualified.
    pub fn with_target(rr_type: Type, src: &str, tgt: &str) -> Result<Self, Error> {
        let mut record = Self::new(rr_type);
        record.set_src(src, false)?;
        record.set_tgt(tgt, false)?;
        Ok(record)
    }

    /// Returns the record's type.
    pub fn rr_type(&self) -> Type {
        self.data.rr_type()
    }

    /// Returns the record's class, which is always `IN`.
    pub fn rrclass(&self) -> &'static str {
        CLASS
    }

    /// Returns the type-specific data.
    pub fn data(&self) -> &Data {
        &self.data
    }

    /// Returns the owner.
    pub fn src(&self) -> &str {
        &self.src
    }

    /// Sets the owner. The value is lower-cased. If `fqdn` is true, a
    /// trailing `.` is appended when missing. Owners given without a
    /// trailing dot (other than `@`) are emitted as bare host names.
    pub fn set_src(&mut self, value: &str, fqdn: bool) -> Result<(), Error> {
        self.check_single_line(Field::Source, value)?;
        self.src = value.to_lowercase();
        if fqdn {
            dot_terminate(&mut self.src);
        }
        Ok(())
    }

    /// Returns the TTL override, which is empty when the zone's
    /// default TTL applies.
    pub fn ttl(&self) -> &str {
        &self.ttl
    }

    pub fn set_ttl(&mut self, value: &str) -> Result<(), Error> {
        self.check_single_line(Field::Ttl, value)?;
        self.ttl = value.into();
        Ok(())
    }

    /// Returns the target. For TXT records this is the unquoted text.
    pub fn tgt(&self) -> &str {
        &self.tgt
    }

    /// Sets the target.
    ///
    /// A targets must be dotted quads (exactly three dots separating
    /// four all-digit octets) and AAAA targets must be valid IPv6
    /// addresses; `fqdn` is ignored for both. For other types, the
    /// target is lower-cased (except for TXT) and, if `fqdn` is true,
    /// dot-terminated. HINFO records have no target, so setting one is
    /// an error.
    pub fn set_tgt(&mut self, value: &str, fqdn: bool) -> Result<(), Error> {
        let rr_type = self.rr_type();
        match self.data {
            Data::A => {
                if !is_dotted_quad(value) {
                    return Err(Error::invalid(rr_type, Field::Target, value));
                }
                self.tgt = value.into();
            }
            Data::Aaaa => {
                if value.parse::<Ipv6Addr>().is_err() {
                    return Err(Error::invalid(rr_type, Field::Target, value));
                }
                self.tgt = value.to_lowercase();
            }
            Data::Hinfo { .. } => {
                return Err(Error::WrongType {
                    rr_type,
                    field: Field::Target,
                });
            }
            Data::Txt => {
                self.check_single_line(Field::Target, value)?;
                self.tgt = value.into();
                if fqdn {
                    dot_terminate(&mut self.tgt);
                }
            }
            _ => {
                self.check_single_line(Field::Target, value)?;
                self.tgt = value.to_lowercase();
                if fqdn {
                    dot_terminate(&mut self.tgt);
                }
            }
        }
        Ok(())
    }

    /// Returns the comment, including its leading `;`, or an empty
    /// string.
    pub fn comment(&self) -> &str {
        &self.comment
    }

    /// Sets the comment. Non-empty text that does not start with `;`
    /// is prefixed with `"; "`.
    pub fn set_comment(&mut self, value: &str) -> Result<(), Error> {
        self.check_single_line(Field::Comment, value)?;
        self.comment = if value.is_empty() || value.starts_with(';') {
            value.into()
        } else {
            format!("; {value}")
        };
        Ok(())
    }

    /// Rejects values that would spill onto a second zone file line.
    fn check_single_line(&self, field: Field, value: &str) -> Result<(), Error> {
        if value.contains(['\n', '\r']) {
            Err(Error::LineBreak {
                rr_type: self.rr_type(),
                field,
            })
        } else {
            Ok(())
        }
    }
}

////////////////////////////////////////////////////////////////////////
// TYPE-SPECIFIC FIELDS                                               //
////////////////////////////////////////////////////////////////////////

impl Record {
    /// Returns the MX preference, if this is an MX record.
    pub fn pref(&self) -> Option<&str> {
        match self.data {
            Data::Mx { ref pref } => Some(pref),
            _ => None,
        }
    }

    /// Sets the MX preference, which must consist only of digits.
    pub fn set_pref(&mut self, value: &str) -> Result<(), Error> {
        let rr_type = self.rr_type();
        match self.data {
            Data::Mx { ref mut pref } => set_numeric(pref, rr_type, Field::MxPreference, value),
            _ => Err(Error::WrongType {
                rr_type,
                field: Field::MxPreference,
            }),
        }
    }

    /// Returns the SRV priority, if this is an SRV record.
    pub fn priority(&self) -> Option<&str> {
        match self.data {
            Data::Srv { ref priority, .. } => Some(priority),
            _ => None,
        }
    }

    /// Sets the SRV priority, which must consist only of digits.
    pub fn set_priority(&mut self, value: &str) -> Result<(), Error> {
        let rr_type = self.rr_type();
        match self.data {
            Data::Srv {
                ref mut priority, ..
            } => set_numeric(priority, rr_type, Field::SrvPriority, value),
            _ => Err(Error::WrongType {
                rr_type,
                field: Field::SrvPriority,
            }),
        }
    }

    /// Returns the SRV weight, if this is an SRV record.
    pub fn weight(&self) -> Option<&str> {
        match self.data {
            Data::Srv { ref weight, .. } => Some(weight),
            _ => None,
        }
    }

    /// Sets the SRV weight, which must consist only of digits.
    pub fn set_weight(&mut self, value: &str) -> Result<(), Error> {
        let rr_type = self.rr_type();
        match self.data {
            Data::Srv { ref mut weight, .. } => {
                set_numeric(weight, rr_type, Field::SrvWeight, value)
            }
            _ => Err(Error::WrongType {
                rr_type,
                field: Field::SrvWeight,
            }),
        }
    }

    /// Returns the SRV port, if this is an SRV record.
    pub fn port(&self) -> Option<&str> {
        match self.data {
            Data::Srv { ref port, .. } => Some(port),
            _ => None,
        }
    }

    /// Sets the SRV port, which must consist only of digits.
    pub fn set_port(&mut self, value: &str) -> Result<(), Error> {
        let rr_type = self.rr_type();
        match self.data {
            Data::Srv { ref mut port, .. } => set_numeric(port, rr_type, Field::SrvPort, value),
            _ => Err(Error::WrongType {
                rr_type,
                field: Field::SrvPort,
            }),
        }
    }

    /// Returns the HINFO CPU, if this is an HINFO record.
    pub fn cpu(&self) -> Option<&str> {
        match self.data {
            Data::Hinfo { ref cpu, .. } => Some(cpu),
            _ => None,
        }
    }

    /// Sets the HINFO CPU. Spaces are replaced with underscores.
    pub fn set_cpu(&mut self, value: &str) -> Result<(), Error> {
        self.check_single_line(Field::HinfoCpu, value)?;
        let rr_type = self.rr_type();
        match self.data {
            Data::Hinfo { ref mut cpu, .. } => {
                *cpu = value.replace(' ', SPACE_REPLACEMENT);
                Ok(())
            }
            _ => Err(Error::WrongType {
                rr_type,
                field: Field::HinfoCpu,
            }),
        }
    }

    /// Returns the HINFO OS, if this is an HINFO record.
    pub fn os(&self) -> Option<&str> {
        match self.data {
            Data::Hinfo { ref os, .. } => Some(os),
            _ => None,
        }
    }

    /// Sets the HINFO OS. Spaces are replaced with underscores.
    pub fn set_os(&mut self, value: &str) -> Result<(), Error> {
        self.check_single_line(Field::HinfoOs, value)?;
        let rr_type = self.rr_type();
        match self.data {
            Data::Hinfo { ref mut os, .. } => {
                *os = value.replace(' ', SPACE_REPLACEMENT);
                Ok(())
            }
            _ => Err(Error::WrongType {
                rr_type,
                field: Field::HinfoOs,
            }),
        }
    }
}

////////////////////////////////////////////////////////////////////////
// VALIDATION HELPERS                                                 //
////////////////////////////////////////////////////////////////////////

/// Checks that `value` has exactly three `.` separators and that all
/// four octets are made up entirely of digits. Octet ranges are not
/// checked.
fn is_dotted_quad(value: &str) -> bool {
    value.matches('.').count() == 3 && value.split('.').all(is_all_digits)
}

/// Stores `value` in `slot` if it consists only of digits.
fn set_numeric(slot: &mut String, rr_type: Type, field: Field, value: &str) -> Result<(), Error> {
    if is_all_digits(value) {
        *slot = value.into();
        Ok(())
    } else {
        Err(Error::invalid(rr_type, field, value))
    }
}

////////////////////////////////////////////////////////////////////////
// TESTS                                                              //
////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a_target_accepts_dotted_quads() {
        let mut record = Record::new(Type::A);
        for address in ["192.0.2.1", "0.0.0.0", "255.255.255.255", "10.0.0.010"] {
            record.set_tgt(address, false).unwrap();
            assert_eq!(record.tgt(), address);
        }
    }

    #[test]
    fn a_target_rejects_everything_else() {
        let mut record = Record::new(Type::A);
        for address in [
            "192.0.2",
            "192.0.2.1.",
            "192.0.2.1.5",
            "192.0.x.1",
            "192..2.1",
            "",
            "::1",
            "www.example.com",
        ] {
            let error = record.set_tgt(address, false).unwrap_err();
            assert_eq!(
                error,
                Error::InvalidValue {
                    rr_type: Type::A,
                    field: Field::Target,
                    value: address.into(),
                }
            );
        }
        assert_eq!(record.tgt(), "");
    }

    #[test]
    fn aaaa_target_validates_ipv6_syntax() {
        let mut record = Record::new(Type::AAAA);
        record.set_tgt("2001:DB8::1", false).unwrap();
        assert_eq!(record.tgt(), "2001:db8::1");
        record.set_tgt("::ffff:192.0.2.1", false).unwrap();
        for address in ["12345::1", "2001:db8::g", "192.0.2.1", "not an address", ""] {
            assert!(record.set_tgt(address, false).is_err());
        }
        assert_eq!(record.tgt(), "::ffff:192.0.2.1");
    }

    #[test]
    fn src_is_lower_cased_and_optionally_qualified() {
        let mut record = Record::new(Type::CNAME);
        record.set_src("WWW", false).unwrap();
        assert_eq!(record.src(), "www");
        record.set_src("Mail.Example.COM", true).unwrap();
        assert_eq!(record.src(), "mail.example.com.");
        record.set_src("mail.example.com.", true).unwrap();
        assert_eq!(record.src(), "mail.example.com.");
        record.set_src("@", false).unwrap();
        assert_eq!(record.src(), "@");
    }

    #[test]
    fn tgt_is_optionally_qualified() {
        let mut record = Record::new(Type::NS);
        record.set_tgt("NS1.Example.com", true).unwrap();
        assert_eq!(record.tgt(), "ns1.example.com.");
        record.set_tgt("ns2", false).unwrap();
        assert_eq!(record.tgt(), "ns2");
    }

    #[test]
    fn txt_target_preserves_case() {
        let mut record = Record::new(Type::TXT);
        record.set_tgt("v=spf1 A MX ~all", false).unwrap();
        assert_eq!(record.tgt(), "v=spf1 A MX ~all");
    }

    #[test]
    fn comment_handling_works() {
        let mut record = Record::new(Type::TXT);
        record.set_comment("spf record").unwrap();
        assert_eq!(record.comment(), "; spf record");
        record.set_comment("; already").unwrap();
        assert_eq!(record.comment(), "; already");
        record.set_comment(";tight").unwrap();
        assert_eq!(record.comment(), ";tight");
        record.set_comment("").unwrap();
        assert_eq!(record.comment(), "");
    }

    #[test]
    fn line_breaks_are_rejected() {
        let mut txt = Record::with_target(Type::TXT, "@", "hello").unwrap();
        assert_eq!(
            txt.set_tgt("line1\nevil IN A 192.0.2.66 x", false),
            Err(Error::LineBreak {
                rr_type: Type::TXT,
                field: Field::Target,
            })
        );
        assert_eq!(
            txt.set_comment("note\nmail IN MX 0 attacker.")
                .unwrap_err()
                .field(),
            Field::Comment
        );
        assert_eq!(txt.set_src("www\r", false).unwrap_err().field(), Field::Source);
        assert_eq!(txt.set_ttl("60\n").unwrap_err().field(), Field::Ttl);
        assert_eq!(txt.tgt(), "hello");
        assert_eq!(txt.src(), "@");
        assert_eq!(txt.comment(), "");

        let mut cname = Record::new(Type::CNAME);
        assert!(cname.set_tgt("www\nftp", false).is_err());
        let mut hinfo = Record::new(Type::HINFO);
        assert_eq!(
            hinfo.set_os("Linux\n").unwrap_err().field(),
            Field::HinfoOs
        );
        assert_eq!(hinfo.os(), Some(""));
    }

    #[test]
    fn numeric_fields_accept_digits_only() {
        let mut mx = Record::new(Type::MX);
        assert_eq!(mx.pref(), Some("10"));
        mx.set_pref("20").unwrap();
        assert_eq!(mx.pref(), Some("20"));
        assert!(mx.set_pref("2O").is_err());
        assert!(mx.set_pref("").is_err());
        assert_eq!(mx.pref(), Some("20"));

        let mut srv = Record::new(Type::SRV);
        srv.set_priority("0").unwrap();
        srv.set_weight("5").unwrap();
        srv.set_port("5060").unwrap();
        assert_eq!(srv.priority(), Some("0"));
        assert_eq!(srv.weight(), Some("5"));
        assert_eq!(srv.port(), Some("5060"));
        assert_eq!(srv.set_port("50 60").unwrap_err().field(), Field::SrvPort);
        assert_eq!(srv.set_weight("-1").unwrap_err().field(), Field::SrvWeight);
        assert_eq!(
            srv.set_priority("high").unwrap_err().field(),
            Field::SrvPriority
        );
    }

    #[test]
    fn type_specific_setters_reject_other_types() {
        let mut ns = Record::new(Type::NS);
        assert_eq!(
            ns.set_pref("10"),
            Err(Error::WrongType {
                rr_type: Type::NS,
                field: Field::MxPreference,
            })
        );
        assert!(ns.set_port("53").is_err());
        assert!(ns.set_cpu("x86").is_err());
        assert_eq!(ns.pref(), None);

        let mut hinfo = Record::new(Type::HINFO);
        assert!(hinfo.set_tgt("anything", false).is_err());
    }

    #[test]
    fn hinfo_fields_replace_spaces() {
        let mut record = Record::new(Type::HINFO);
        record.set_cpu("Intel Xeon").unwrap();
        record.set_os("Debian GNU Linux").unwrap();
        assert_eq!(record.cpu(), Some("Intel_Xeon"));
        assert_eq!(record.os(), Some("Debian_GNU_Linux"));
    }

    #[test]
    fn error_messages_name_the_field_and_value() {
        let mut record = Record::new(Type::MX);
        let error = record.set_pref("ten").unwrap_err();
        assert_eq!(
            error.to_string(),
            "invalid MX preference \"ten\": expected decimal digits only"
        );
        let mut record = Record::new(Type::A);
        let error = record.set_tgt("1.2.3", false).unwrap_err();
        assert_eq!(
            error.to_string(),
            "invalid A target \"1.2.3\": expected a dotted-quad IPv4 address"
        );
    }
}
