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

//! [`Display`](fmt::Display) implementation for [`Record`], which
//! produces a single zone file line.

use std::fmt::{self, Write};

use super::record::{Data, Record};

///////////////////////////////////////////////////////////////////////
// RECORD DISPLAYING                                                 //
///////////////////////////////////////////////////////////////////////

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.data() {
            // HINFO uses its own layout, since it has no target.
            Data::Hinfo { cpu, os } => write!(
                f,
                "{} {}\t{} {} {} {}",
                self.src(),
                self.ttl(),
                self.rrclass(),
                self.rr_type(),
                cpu,
                os,
            )?,
            _ => {
                write!(
                    f,
                    "{}\t{}\t{} {}\t",
                    self.src(),
                    self.ttl(),
                    self.rrclass(),
                    self.rr_type(),
                )?;
                match self.data() {
                    Data::Mx { pref } => write!(f, "{} {}", pref, self.tgt())?,
                    Data::Srv {
                        priority,
                        weight,
                        port,
                    } => write!(f, "{} {} {} {}", priority, weight, port, self.tgt())?,
                    Data::Txt => write_quoted(f, self.tgt())?,
                    _ => f.write_str(self.tgt())?,
                }
            }
        }
        if !self.comment().is_empty() {
            write!(f, " {}", self.comment())?;
        }
        Ok(())
    }
}

/// Writes TXT data as a quoted `<character-string>`. Embedded quotes
/// and backslashes are escaped so that the daemon reads back the same
/// text.
fn write_quoted(f: &mut fmt::Formatter, text: &str) -> fmt::Result {
    f.write_char('"')?;
    for c in text.chars() {
        if c == '"' || c == '\\' {
            f.write_char('\\')?;
        }
        f.write_char(c)?;
    }
    f.write_char('"')
}

////////////////////////////////////////////////////////////////////////
// TESTS                                                              //
////////////////////////////////////////////////////////////////////////
