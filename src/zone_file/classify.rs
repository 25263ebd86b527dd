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

//! Classification of record lines by RR type.

use lazy_static::lazy_static;
use log::trace;
use regex::Regex;

use crate::rr::Type;

lazy_static! {
    /// One case-insensitive `\s+in\s+<type>\s+` pattern per supported
    /// type, in [`Type::ALL`] order. The surrounding whitespace keeps
    /// `A` from matching inside `AAAA`.
    static ref CLASSIFIERS: Vec<(Type, Regex)> = Type::ALL
        .iter()
        .map(|&rr_type| {
            let pattern = format!(r"(?i)\s+in\s+{}\s+", rr_type.as_str());
            (rr_type, Regex::new(&pattern).unwrap())
        })
        .collect();
}

/// Returns the type of the record on `line`, or [`None`] if the line
/// does not look like an `IN` record of a supported type.
pub fn classify_line(line: &str) -> Option<Type> {
    CLASSIFIERS
        .iter()
        .find(|(_, regex)| regex.is_match(line))
        .map(|&(rr_type, _)| rr_type)
}

/// Classifies each line of `text`, keeping matching lines verbatim and
/// dropping the rest.
pub(super) fn classify_lines(text: &str) -> Vec<(Type, String)> {
    let mut records = Vec::new();
    for line in text.lines() {
        match classify_line(line) {
            Some(rr_type) => records.push((rr_type, line.to_owned())),
            None => {
                if !line.trim().is_empty() {
                    trace!("Dropping unclassified line {:?}.", line);
                }
            }
        }
    }
    records
}

////////////////////////////////////////////////////////////////////////
// TESTS                                                              //
////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_line_recognizes_all_types() {
        let cases = [
            ("@\t\tIN A\t192.0.2.1", Type::A),
            ("www 3600 in aaaa 2001:db8::1", Type::AAAA),
            ("ftp IN CNAME www", Type::CNAME),
            ("host \tIN HINFO x86 Linux", Type::HINFO),
            ("@ IN MX 10 mail", Type::MX),
            ("@\t\tIN NS\tns1.example.com.", Type::NS),
            ("1 IN PTR host.example.com.", Type::PTR),
            ("_sip._tcp IN SRV 10 60 5060 sip", Type::SRV),
            ("@ In Txt \"v=spf1 a mx ~all\"", Type::TXT),
        ];
        for (line, rr_type) in cases {
            assert_eq!(classify_line(line), Some(rr_type), "{line}");
        }
    }

    #[test]
    fn classify_line_keeps_keyword_boundaries() {
        assert_eq!(classify_line("www IN AAAA ::1"), Some(Type::AAAA));
        assert_eq!(classify_line("www IN AA ::1"), None);
        assert_eq!(classify_line("www IN MXX 10 mail"), None);
        assert_eq!(classify_line("wwwIN A 192.0.2.1"), None);
    }

    #[test]
    fn classify_line_rejects_other_lines() {
        assert_eq!(classify_line(""), None);
        assert_eq!(classify_line("$TTL 3600"), None);
        assert_eq!(classify_line("$ORIGIN example.com."), None);
        assert_eq!(classify_line("www IN DNAME other"), None);
        assert_eq!(classify_line("www CH A 192.0.2.1"), None);
        // The type keyword must be followed by whitespace.
        assert_eq!(classify_line("www IN A"), None);
    }

    #[test]
    fn classify_lines_keeps_lines_verbatim() {
        let text = "  www   IN  A  192.0.2.1 ; web\n\njunk\n@ IN MX 10 mail\r\n";
        assert_eq!(
            classify_lines(text),
            vec![
                (Type::A, "  www   IN  A  192.0.2.1 ; web".to_owned()),
                (Type::MX, "@ IN MX 10 mail".to_owned()),
            ]
        );
    }
}
