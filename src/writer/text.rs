//! Print the transformed document as plain text.

use crate::model::TransformReport;
use std::io::{self, Write};

pub fn emit<W: Write>(report: &TransformReport, out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", report.output)?;
    out.flush()
}
