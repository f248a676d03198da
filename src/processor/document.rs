//! Joins rendered lines into the final document.

use crate::model::LineOutcome;

/// Concatenate kept lines with `\n`, skipping dropped ones. No trailing newline.
pub fn assemble<I>(lines: I) -> String
where
    I: IntoIterator<Item = LineOutcome>,
{
    lines
        .into_iter()
        .filter_map(|outcome| match outcome {
            LineOutcome::Content(text) => Some(text),
            LineOutcome::Drop => None,
        })
        .collect::<Vec<_>>()
        .join("\n")
}
