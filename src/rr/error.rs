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

//! Implementation of the [`Error`] type for invalid record fields.

use std::fmt;

use super::Type;

/// The fields of a [`Record`](super::Record) that can be rejected on
/// assignment.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Field {
    Source,
    Ttl,
    Target,
    Comment,
    HinfoCpu,
    HinfoOs,
    MxPreference,
    SrvPriority,
    SrvWeight,
    SrvPort,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Self::Source => f.write_str("owner"),
            Self::Ttl => f.write_str("TTL"),
            Self::Target => f.write_str("target"),
            Self::Comment => f.write_str("comment"),
            Self::HinfoCpu => f.write_str("HINFO CPU"),
            Self::HinfoOs => f.write_str("HINFO OS"),
            Self::MxPreference => f.write_str("MX preference"),
            Self::SrvPriority => f.write_str("SRV priority"),
            Self::SrvWeight => f.write_str("SRV weight"),
            Self::SrvPort => f.write_str("SRV port"),
        }
    }
}

/// Errors raised when a value is assigned to a record field.
///
/// Validation happens at the moment of assignment, so a
/// [`Record`](super::Record) never holds a value that would be
/// rejected here.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum Error {
    /// The value is malformed for the field (e.g., a non-numeric MX
    /// preference or an A target that is not a dotted quad).
    InvalidValue {
        rr_type: Type,
        field: Field,
        value: String,
    },

    /// The field does not exist for the record's type (e.g., setting
    /// an MX preference on an NS record).
    WrongType { rr_type: Type, field: Field },

    /// The value contains a line break, which would split the record
    /// over several zone file lines.
    LineBreak { rr_type: Type, field: Field },
}

impl Error {
    pub(super) fn invalid(rr_type: Type, field: Field, value: &str) -> Self {
        Self::InvalidValue {
            rr_type,
            field,
            value: value.into(),
        }
    }

    /// Returns the field to which the rejected value was assigned.
    pub fn field(&self) -> Field {
        match *self {
            Self::InvalidValue { field, .. }
            | Self::WrongType { field, .. }
            | Self::LineBreak { field, .. } => field,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::InvalidValue {
                rr_type,
                field: Field::Target,
                value,
            } => {
                let expected = match rr_type {
                    Type::AAAA => "an IPv6 address",
                    _ => "a dotted-quad IPv4 address",
                };
                write!(f, "invalid {rr_type} target {value:?}: expected {expected}")
            }
            Self::InvalidValue { field, value, .. } => {
                write!(f, "invalid {field} {value:?}: expected decimal digits only")
            }
            Self::WrongType { rr_type, field } => {
                write!(f, "{rr_type} records have no {field} field")
            }
            Self::LineBreak { rr_type, field } => {
                write!(f, "the {field} of a {rr_type} record cannot contain line breaks")
            }
        }
    }
}

impl std::error::Error for Error {}
