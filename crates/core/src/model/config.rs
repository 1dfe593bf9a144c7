use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::model::ids::QuestionId;

pub const DEFAULT_QUESTION_COUNT: u32 = 10;
pub const DEFAULT_TIME_LIMIT_MINUTES: u32 = 10;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizConfigError {
    #[error("question count must be > 0")]
    InvalidCount,

    #[error("interval start {start} is after end {end}")]
    EmptyInterval { start: QuestionId, end: QuestionId },

    #[error("unknown selection mode: {0:?}")]
    UnknownMode(String),
}

//
// ─── MODES & POLICIES ──────────────────────────────────────────────────────────
//

/// How the questions of a session are picked from the pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionMode {
    /// Uniform random sample of the whole pool.
    #[default]
    Random,
    /// Questions whose id lies in `[start, end]`, in pool order.
    Interval { start: QuestionId, end: QuestionId },
    /// Random sample of the questions marked for review.
    ReviewOnly,
}

impl SelectionMode {
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            SelectionMode::Random => "random",
            SelectionMode::Interval { .. } => "interval",
            SelectionMode::ReviewOnly => "review",
        }
    }
}

impl fmt::Display for SelectionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionMode::Interval { start, end } => write!(f, "interval {start}-{end}"),
            other => f.write_str(other.name()),
        }
    }
}

/// What happens when an already answered question is answered again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnswerPolicy {
    /// The new answer replaces the previous one.
    #[default]
    Free,
    /// The first answer sticks; later answers are ignored.
    Locked,
}

/// Mode name without interval bounds, as typed on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeKind {
    Random,
    Interval,
    Review,
}

impl FromStr for ModeKind {
    type Err = QuizConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "random" => Ok(ModeKind::Random),
            "interval" | "range" => Ok(ModeKind::Interval),
            "review" | "review-only" => Ok(ModeKind::Review),
            _ => Err(QuizConfigError::UnknownMode(s.to_owned())),
        }
    }
}

//
// ─── CONFIG ────────────────────────────────────────────────────────────────────
//

/// User-editable quiz settings before validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizConfigDraft {
    pub count: u32,
    /// Minutes; 0 means untimed.
    pub time_limit_minutes: u32,
    pub mode: SelectionMode,
    pub answer_policy: AnswerPolicy,
}

impl Default for QuizConfigDraft {
    fn default() -> Self {
        Self {
            count: DEFAULT_QUESTION_COUNT,
            time_limit_minutes: DEFAULT_TIME_LIMIT_MINUTES,
            mode: SelectionMode::Random,
            answer_policy: AnswerPolicy::Free,
        }
    }
}

impl QuizConfigDraft {
    /// Validate the draft into a `QuizConfig`.
    ///
    /// # Errors
    ///
    /// Returns `QuizConfigError::InvalidCount` for a zero count and
    /// `QuizConfigError::EmptyInterval` when `start > end`.
    pub fn validate(self) -> Result<QuizConfig, QuizConfigError> {
        if self.count == 0 {
            return Err(QuizConfigError::InvalidCount);
        }
        if let SelectionMode::Interval { start, end } = self.mode {
            if start > end {
                return Err(QuizConfigError::EmptyInterval { start, end });
            }
        }

        Ok(QuizConfig {
            count: usize::try_from(self.count).unwrap_or(usize::MAX),
            time_limit_minutes: self.time_limit_minutes,
            mode: self.mode,
            answer_policy: self.answer_policy,
        })
    }
}

/// Validated settings for one quiz attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizConfig {
    count: usize,
    time_limit_minutes: u32,
    mode: SelectionMode,
    answer_policy: AnswerPolicy,
}

impl QuizConfig {
    /// Maximum number of questions to select. Always > 0.
    #[must_use]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Countdown length in seconds, or `None` when untimed.
    #[must_use]
    pub fn time_limit_secs(&self) -> Option<u32> {
        (self.time_limit_minutes > 0).then(|| self.time_limit_minutes.saturating_mul(60))
    }

    #[must_use]
    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    #[must_use]
    pub fn answer_policy(&self) -> AnswerPolicy {
        self.answer_policy
    }
}

impl Default for QuizConfig {
    fn default() -> Self {
        let draft = QuizConfigDraft::default();
        Self {
            count: usize::try_from(draft.count).unwrap_or(usize::MAX),
            time_limit_minutes: draft.time_limit_minutes,
            mode: draft.mode,
            answer_policy: draft.answer_policy,
        }
    }
}
