use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How a run of text is emphasized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Emphasis {
    Plain,
    Bold,
    Italic,
}

/// A contiguous piece of text with a single emphasis, delimiters already removed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Run {
    pub emphasis: Emphasis,
    pub text: String,
}

impl Run {
    pub fn new(emphasis: Emphasis, text: impl Into<String>) -> Self {
        Self {
            emphasis,
            text: text.into(),
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(Emphasis::Plain, text)
    }

    pub fn bold(text: impl Into<String>) -> Self {
        Self::new(Emphasis::Bold, text)
    }

    pub fn italic(text: impl Into<String>) -> Self {
        Self::new(Emphasis::Italic, text)
    }
}

/// The formatted form of one free-text field.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct FormattedText {
    pub runs: Vec<Run>,
}

impl FormattedText {
    /// A single plain run, used for fields that are displayed verbatim.
    pub fn verbatim(text: impl Into<String>) -> Self {
        let text = text.into();
        if text.is_empty() {
            return Self::default();
        }
        Self {
            runs: vec![Run::plain(text)],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// The text of every run concatenated, i.e. the source with matched delimiters stripped.
    pub fn plain_text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).join("")
    }
}

impl fmt::Display for FormattedText {
    /// Re-emits the runs using the same delimiter dialect they were parsed from.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for run in &self.runs {
            match run.emphasis {
                Emphasis::Plain => write!(f, "{}", run.text)?,
                Emphasis::Bold => write!(f, "**{}**", run.text)?,
                Emphasis::Italic => write!(f, "*{}*", run.text)?,
            }
        }
        Ok(())
    }
}
