//! Inline emphasis markup.
//!
//! Authored free text may wrap spans in `**double asterisks**` (bold) or
//! `*single asterisks*` (italic). The formatter scans the string once and splits it
//! into [`Run`]s.
//!
//! Rules applied at every `*`:
//!
//! * Bold is tried first; its delimiters are also valid italic delimiters.
//! * The closing delimiter is the nearest one on the same line (non-greedy).
//! * A span with nothing between its delimiters is not a span.
//! * An italic opener is a `*` not immediately followed by another `*`.
//! * Anything that does not form a span is kept as literal text.
//!
//! There is no escape for a literal asterisk inside a span.

mod run;

pub use run::*;

const BOLD: &str = "**";
const ITALIC: u8 = b'*';

/// Splits inline emphasis markup into styled runs.
pub struct InlineFormatter;

impl InlineFormatter {
    /// Formats a string into runs. An empty string yields no runs.
    pub fn format(text: &str) -> FormattedText {
        let bytes = text.as_bytes();
        let mut runs = Vec::new();
        let mut plain_start = 0;
        let mut pos = 0;

        while pos < bytes.len() {
            if bytes[pos] != ITALIC {
                pos += 1;
                continue;
            }

            let bold = Self::match_bold(text, pos);
            match bold.or_else(|| Self::match_italic(text, pos)) {
                Some((run, end)) => {
                    Self::push_plain(&mut runs, &text[plain_start..pos]);
                    runs.push(run);
                    pos = end;
                    plain_start = end;
                }
                None => pos += 1,
            }
        }

        Self::push_plain(&mut runs, &text[plain_start..]);
        FormattedText { runs }
    }

    /// Formats an optional field. Absent and empty input both mean "nothing to show".
    pub fn format_optional(text: Option<&str>) -> Option<FormattedText> {
        text.filter(|t| !t.is_empty()).map(Self::format)
    }

    /// Tries `**…**` at `pos`. Returns the run and the byte offset just past the closer.
    fn match_bold(text: &str, pos: usize) -> Option<(Run, usize)> {
        if !text[pos..].starts_with(BOLD) {
            return None;
        }
        let body_start = pos + BOLD.len();
        let line = Self::current_line(&text[body_start..]);
        let close = line.find(BOLD)?;
        if close == 0 {
            return None;
        }
        let end = body_start + close + BOLD.len();
        Some((Run::bold(&line[..close]), end))
    }

    /// Tries `*…*` at `pos`.
    fn match_italic(text: &str, pos: usize) -> Option<(Run, usize)> {
        let bytes = text.as_bytes();
        match bytes.get(pos + 1) {
            Some(&next) if next != ITALIC => {}
            _ => return None,
        }
        let body_start = pos + 1;
        let line = Self::current_line(&text[body_start..]);
        let close = line.bytes().position(|b| b == ITALIC)?;
        let end = body_start + close + 1;
        Some((Run::italic(&line[..close]), end))
    }

    /// Spans never cross a line break.
    fn current_line(rest: &str) -> &str {
        match rest.find('\n') {
            Some(idx) => &rest[..idx],
            None => rest,
        }
    }

    fn push_plain(runs: &mut Vec<Run>, text: &str) {
        // Unmatched delimiters never split a slice, so plain runs are already maximal.
        if !text.is_empty() {
            runs.push(Run::plain(text));
        }
    }
}
