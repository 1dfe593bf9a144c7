use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::model::ids::QuestionId;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question prompt cannot be empty")]
    EmptyPrompt,

    #[error("question needs at least two options, got {0}")]
    TooFewOptions(usize),

    #[error("option {0} has no text")]
    EmptyOption(OptionLabel),

    #[error("unknown option label: {0:?}")]
    UnknownLabel(String),

    #[error("correct label {0} is not one of the options")]
    CorrectNotAnOption(OptionLabel),
}

//
// ─── OPTION LABEL ──────────────────────────────────────────────────────────────
//

/// Label of a multiple-choice option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OptionLabel {
    A,
    B,
    C,
    D,
}

impl OptionLabel {
    /// All labels in display order.
    pub const ALL: [OptionLabel; 4] = [
        OptionLabel::A,
        OptionLabel::B,
        OptionLabel::C,
        OptionLabel::D,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            OptionLabel::A => "A",
            OptionLabel::B => "B",
            OptionLabel::C => "C",
            OptionLabel::D => "D",
        }
    }
}

impl fmt::Display for OptionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OptionLabel {
    type Err = QuestionError;

    /// Parses a label case-insensitively, ignoring surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "A" => Ok(OptionLabel::A),
            "B" => Ok(OptionLabel::B),
            "C" => Ok(OptionLabel::C),
            "D" => Ok(OptionLabel::D),
            _ => Err(QuestionError::UnknownLabel(s.to_owned())),
        }
    }
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// Unvalidated question as it comes out of a parsed row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionDraft {
    pub id: QuestionId,
    pub prompt: String,
    pub options: Vec<(OptionLabel, String)>,
    pub correct: String,
}

impl QuestionDraft {
    /// Validate the draft into an immutable `Question`.
    ///
    /// Text is trimmed; options with blank text are rejected rather than skipped.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` if the prompt is empty, an option is blank, fewer
    /// than two options exist, or the correct label is not one of the options.
    pub fn validate(self) -> Result<Question, QuestionError> {
        let prompt = self.prompt.trim().to_owned();
        if prompt.is_empty() {
            return Err(QuestionError::EmptyPrompt);
        }

        let mut options = BTreeMap::new();
        for (label, text) in self.options {
            let text = text.trim();
            if text.is_empty() {
                return Err(QuestionError::EmptyOption(label));
            }
            options.insert(label, text.to_owned());
        }
        if options.len() < 2 {
            return Err(QuestionError::TooFewOptions(options.len()));
        }

        let correct: OptionLabel = self.correct.parse()?;
        if !options.contains_key(&correct) {
            return Err(QuestionError::CorrectNotAnOption(correct));
        }

        Ok(Question {
            id: self.id,
            prompt,
            options,
            correct,
        })
    }
}

/// A validated multiple-choice question. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    id: QuestionId,
    prompt: String,
    options: BTreeMap<OptionLabel, String>,
    correct: OptionLabel,
}

impl Question {
    #[must_use]
    pub fn id(&self) -> QuestionId {
        self.id
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn correct(&self) -> OptionLabel {
        self.correct
    }

    /// Options in label order.
    pub fn options(&self) -> impl Iterator<Item = (OptionLabel, &str)> {
        self.options.iter().map(|(label, text)| (*label, text.as_str()))
    }

    #[must_use]
    pub fn has_option(&self, label: OptionLabel) -> bool {
        self.options.contains_key(&label)
    }

    #[must_use]
    pub fn option_text(&self, label: OptionLabel) -> Option<&str> {
        self.options.get(&label).map(String::as_str)
    }

    #[must_use]
    pub fn correct_text(&self) -> &str {
        // validate() guarantees the correct label is present
        self.option_text(self.correct).unwrap_or_default()
    }

    #[must_use]
    pub fn is_correct(&self, label: OptionLabel) -> bool {
        self.correct == label
    }
}
