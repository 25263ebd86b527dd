// Copyright 2021 Matthew Ingwersen.
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

//! Crate-private utilities.

/// A wrapper around [`str`] references whose [`PartialEq`] and [`Eq`]
/// implementations are ASCII-case-insensitive.
pub struct Caseless<'a>(pub &'a str);

impl PartialEq for Caseless<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq_ignore_ascii_case(other.0)
    }
}

impl Eq for Caseless<'_> {}

/// Returns whether `text` is non-empty and consists only of the ASCII
/// digits `0` through `9`.
pub fn is_all_digits(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}

/// Appends a `.` to `text` if it does not already end with one. Empty
/// strings are left alone, since there is nothing to qualify.
pub fn dot_terminate(text: &mut String) {
    if !text.is_empty() && !text.ends_with('.') {
        text.push('.');
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caseless_ignores_ascii_case() {
        assert!(Caseless("cname") == Caseless("CNAME"));
        assert!(Caseless("cname") != Caseless("CNAMES"));
    }

    #[test]
    fn is_all_digits_rejects_empty_and_mixed_text() {
        assert!(is_all_digits("0"));
        assert!(is_all_digits("65535"));
        assert!(!is_all_digits(""));
        assert!(!is_all_digits("10a"));
        assert!(!is_all_digits("-1"));
        assert!(!is_all_digits(" 1"));
    }

    #[test]
    fn dot_terminate_works() {
        let mut host = String::from("ns1.example.com");
        dot_terminate(&mut host);
        assert_eq!(host, "ns1.example.com.");
        dot_terminate(&mut host);
        assert_eq!(host, "ns1.example.com.");
        let mut empty = String::new();
        dot_terminate(&mut empty);
        assert_eq!(empty, "");
    }
}
