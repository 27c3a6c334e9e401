//! CI workflow annotations on stdout.
//!
//! The runner scans job output for `::set-output name=<name>::<value>` lines and
//! exposes each value to later steps as `steps.<id>.outputs.<name>`.

use std::fmt;
use std::io::{self, Write};

/// Output name later pipeline steps read the draft URL from.
pub const DRAFT_URL_OUTPUT_NAME: &str = "draft_url";

/// A single `set-output` workflow command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetOutput<'a> {
    pub name: &'a str,
    pub value: &'a str,
}

impl<'a> SetOutput<'a> {
    pub fn new(name: &'a str, value: &'a str) -> Self {
        Self { name, value }
    }
}

impl fmt::Display for SetOutput<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "::set-output name={}::{}", self.name, self.value)
    }
}

/// Write one `set-output` line and flush, so the runner sees it even if the
/// process is torn down right after.
pub fn write_set_output<W: Write>(out: &mut W, name: &str, value: &str) -> io::Result<()> {
    writeln!(out, "{}", SetOutput::new(name, value))?;
    out.flush()
}
