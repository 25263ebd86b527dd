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

//! Location and decoding of the `$TTL` directive and the parenthesized
//! SOA block.

use super::{Error, Result};
use crate::zone::Soa;

/// Tokens inside the SOA block that carry no data.
const NOISE_TOKENS: [&str; 2] = ["in", "soa"];

/// Reads the SOA data from `text`. On success, this also returns the
/// byte offset just past the line that closes the SOA block, which is
/// where the record lines begin.
pub(super) fn read_soa(text: &str) -> Result<(Soa, usize)> {
    let ttl = find_ttl(text).ok_or(Error::MissingTtl)?;
    let (start, end) = find_soa_block(text).ok_or(Error::MissingSoaBlock)?;
    let tokens = tokenize_soa_block(&text[start..end]);
    if tokens.len() < 8 {
        return Err(Error::TooFewSoaTokens {
            found: tokens.len(),
        });
    }

    // Token 0 is the zone name, which the caller already knows.
    let mut fields = tokens.into_iter().skip(1);
    let mut next = || fields.next().unwrap_or_default();
    let soa = Soa {
        ttl,
        ns: next(),
        email: next(),
        serial: next(),
        refresh: next(),
        retry: next(),
        expiry: next(),
        minttl: next(),
    };
    Ok((soa, end))
}

/// Returns the value of the first `$TTL` directive in `text`.
fn find_ttl(text: &str) -> Option<String> {
    text.lines()
        .find(|line| line.starts_with("$TTL"))
        .and_then(|line| line.split_whitespace().nth(1))
        .map(String::from)
}

/// Finds the byte range of the SOA block: from the start of the first
/// line with a `(` through the end of the first line at or after it
/// with a `)`. Parentheses inside comments are not considered.
fn find_soa_block(text: &str) -> Option<(usize, usize)> {
    let mut start = None;
    let mut offset = 0;
    for line in text.split_inclusive('\n') {
        let line_start = offset;
        offset += line.len();
        let content = strip_comment(line);
        if start.is_none() && content.contains('(') {
            start = Some(line_start);
        }
        if start.is_some() && content.contains(')') {
            return start.map(|start| (start, offset));
        }
    }
    None
}

/// Splits the SOA block into lower-cased data tokens. Comments are
/// removed, parentheses act as whitespace, and the `IN` and `SOA`
/// keywords are dropped.
fn tokenize_soa_block(block: &str) -> Vec<String> {
    block
        .lines()
        .map(|line| strip_comment(line).to_lowercase().replace(['(', ')'], " "))
        .flat_map(|line| {
            line.split_whitespace()
                .filter(|token| !NOISE_TOKENS.contains(token))
                .map(String::from)
                .collect::<Vec<_>>()
        })
        .collect()
}

/// Returns the part of `line` before any `;` comment.
fn strip_comment(line: &str) -> &str {
    match line.find(';') {
        Some(index) => &line[..index],
        None => line,
    }
}

////////////////////////////////////////////////////////////////////////
// TESTS                                                              //
////////////////////////////////////////////////////////////////////////
