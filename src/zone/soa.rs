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

//! Implementation of the [`Soa`] structure and its zone file encoding.

use crate::zone_file;

/// The start-of-authority data of a zone, together with the zone's
/// default TTL (written as a `$TTL` directive).
///
/// All fields are kept as opaque strings. In particular, the serial is
/// conventionally `YYYYMMDDnn`, but this is not checked. A [`Soa`] is
/// only written out if every field is a single non-empty token; see
/// [`Soa::invalid_field`].
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Soa {
    pub ttl: String,
    pub ns: String,
    pub email: String,
    pub serial: String,
    pub refresh: String,
    pub retry: String,
    pub expiry: String,
    pub minttl: String,
}

impl Soa {
    /// Encodes the `$TTL` directive and the SOA record of the zone
    /// named `zone_name` as a multi-line block. The block does not end
    /// with a newline.
    pub fn encode(&self, zone_name: &str) -> String {
        format!(
            "$TTL {}\n\
             {} IN SOA  {} {} (\n    \
             {}  ; serial number YYYYMMDDnn - increment on every change\n    \
             {}  ; refresh\n    \
             {}  ; retry\n    \
             {}  ; expiration\n    \
             {}  ; minimum ttl\n    \
             )",
            self.ttl,
            zone_name,
            self.ns,
            self.email,
            self.serial,
            self.refresh,
            self.retry,
            self.expiry,
            self.minttl,
        )
    }

    /// Returns the name of the first field that is empty or that would
    /// not be read back as a single token (because it contains
    /// whitespace, a `;`, or a parenthesis), or [`None`] if the data
    /// can be encoded.
    pub fn invalid_field(&self) -> Option<&'static str> {
        [
            ("ttl", &self.ttl),
            ("ns", &self.ns),
            ("email", &self.email),
            ("serial", &self.serial),
            ("refresh", &self.refresh),
            ("retry", &self.retry),
            ("expiry", &self.expiry),
            ("minttl", &self.minttl),
        ]
        .into_iter()
        .find(|(_, value)| !is_token(value))
        .map(|(name, _)| name)
    }

    /// Decodes the SOA data from the text of a zone file. See the
    /// [`zone_file`] module for the details.
    pub fn decode(text: &str) -> zone_file::Result<Self> {
        zone_file::decode_soa(text)
    }
}

fn is_token(value: &str) -> bool {
    !value.is_empty()
        && !value.contains(|c: char| c.is_whitespace() || matches!(c, ';' | '(' | ')'))
}

////////////////////////////////////////////////////////////////////////
// TESTS                                                              //
////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;

    fn example_soa() -> Soa {
        Soa {
            ttl: "3600".into(),
            ns: "ns1.example.com.".into(),
            email: "admin.example.com.".into(),
            serial: "2024010100".into(),
            refresh: "3600".into(),
            retry: "900".into(),
            expiry: "604800".into(),
            minttl: "86400".into(),
        }
    }

    #[test]
    fn encode_produces_canonical_block() {
        assert_eq!(
            example_soa().encode("example.com."),
            "$TTL 3600\n\
             example.com. IN SOA  ns1.example.com. admin.example.com. (\n    \
             2024010100  ; serial number YYYYMMDDnn - increment on every change\n    \
             3600  ; refresh\n    \
             900  ; retry\n    \
             604800  ; expiration\n    \
             86400  ; minimum ttl\n    \
             )"
        );
    }

    #[test]
    fn decode_reverses_encode() {
        let soa = example_soa();
        assert_eq!(Soa::decode(&soa.encode("example.com.")), Ok(soa));
    }

    #[test]
    fn invalid_field_finds_unencodable_fields() {
        let mut soa = example_soa();
        assert_eq!(soa.invalid_field(), None);
        soa.retry.clear();
        assert_eq!(soa.invalid_field(), Some("retry"));
        soa.ttl = "1 h".into();
        assert_eq!(soa.invalid_field(), Some("ttl"));
        let mut soa = example_soa();
        soa.email = "admin;x".into();
        assert_eq!(soa.invalid_field(), Some("email"));
        soa.email = "admin\nx".into();
        assert_eq!(soa.invalid_field(), Some("email"));
    }

    #[test]
    fn decode_lower_cases_block_tokens() {
        let mut soa = example_soa();
        soa.ns = "NS1.Example.COM.".into();
        let decoded = Soa::decode(&soa.encode("EXAMPLE.COM.")).unwrap();
        assert_eq!(decoded.ns, "ns1.example.com.");
    }
}
