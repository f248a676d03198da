//! Dump the full `TransformReport` as pretty JSON.

use crate::model::TransformReport;
use anyhow::Result;
use std::io::Write;

pub fn emit<W: Write>(report: &TransformReport, out: &mut W) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processor;
    use serde_json::Value;

    #[test]
    fn test_emit_report_fields() {
        let report = processor::run(&["a {", "b;", "}"]).unwrap();
        let mut buf = Vec::new();
        emit(&report, &mut buf).unwrap();

        let value: Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["output"], "a :\n    b");
        assert_eq!(value["lines_read"], 3);
        assert_eq!(value["lines_emitted"], 2);
        assert_eq!(value["lines_dropped"], 1);
        assert_eq!(value["max_depth"], 1);
    }
}
