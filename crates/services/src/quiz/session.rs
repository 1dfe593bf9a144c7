use chrono::{DateTime, Utc};
use std::fmt;

use quiz_core::model::{AnswerPolicy, OptionLabel, Question, Score};

use super::countdown::{CountdownGuard, SessionToken};

/// Why a session left `InProgress`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionReason {
    /// The user finished, or stepped past the last question.
    Manual,
    /// The countdown reached zero.
    TimeUp,
    /// Nothing matched the selection, so there was nothing to answer.
    Empty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Completion {
    pub(crate) at: DateTime<Utc>,
    pub(crate) reason: CompletionReason,
}

/// One quiz attempt: the selected questions plus all per-attempt state.
pub struct Session {
    token: SessionToken,
    questions: Vec<Question>,
    answers: Vec<Option<OptionLabel>>,
    position: usize,
    policy: AnswerPolicy,
    remaining_secs: Option<u32>,
    completion: Option<Completion>,
    reviewing: bool,
    countdown: Option<CountdownGuard>,
}

impl Session {
    pub(crate) fn new(
        token: SessionToken,
        questions: Vec<Question>,
        policy: AnswerPolicy,
        remaining_secs: Option<u32>,
    ) -> Self {
        let answers = vec![None; questions.len()];
        Self {
            token,
            questions,
            answers,
            position: 0,
            policy,
            remaining_secs,
            completion: None,
            reviewing: false,
            countdown: None,
        }
    }

    #[must_use]
    pub fn token(&self) -> SessionToken {
        self.token
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Recorded answers, indexed by position.
    #[must_use]
    pub fn answers(&self) -> &[Option<OptionLabel>] {
        &self.answers
    }

    #[must_use]
    pub fn answer_at(&self, position: usize) -> Option<OptionLabel> {
        self.answers.get(position).copied().flatten()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.position)
    }

    #[must_use]
    pub fn policy(&self) -> AnswerPolicy {
        self.policy
    }

    #[must_use]
    pub fn remaining_secs(&self) -> Option<u32> {
        self.remaining_secs
    }

    #[must_use]
    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completion.map(|c| c.at)
    }

    #[must_use]
    pub fn completion_reason(&self) -> Option<CompletionReason> {
        self.completion.map(|c| c.reason)
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.completion.is_some()
    }

    #[must_use]
    pub fn is_reviewing(&self) -> bool {
        self.reviewing
    }

    #[must_use]
    pub fn answered_count(&self) -> usize {
        self.answers.iter().filter(|a| a.is_some()).count()
    }

    /// Score over the recorded answers. Meaningful once complete.
    #[must_use]
    pub fn score(&self) -> Score {
        Score::compute(&self.questions, &self.answers)
    }

    pub(crate) fn set_position(&mut self, position: usize) {
        self.position = position.min(self.questions.len().saturating_sub(1));
    }

    pub(crate) fn record_answer(&mut self, position: usize, label: OptionLabel) {
        if let Some(slot) = self.answers.get_mut(position) {
            *slot = Some(label);
        }
    }

    pub(crate) fn arm(&mut self, guard: CountdownGuard) {
        self.countdown = Some(guard);
    }

    /// Count one second down. Returns the seconds left, if timed.
    pub(crate) fn tick(&mut self) -> Option<u32> {
        let remaining = self.remaining_secs.as_mut()?;
        *remaining = remaining.saturating_sub(1);
        Some(*remaining)
    }

    /// Enter `Completed` and stop the countdown. Returns `false` if already complete.
    pub(crate) fn complete(&mut self, at: DateTime<Utc>, reason: CompletionReason) -> bool {
        if self.completion.is_some() {
            return false;
        }
        if let Some(guard) = self.countdown.take() {
            guard.cancel();
        }
        self.completion = Some(Completion { at, reason });
        true
    }

    pub(crate) fn set_reviewing(&mut self, reviewing: bool) {
        self.reviewing = reviewing;
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("token", &self.token)
            .field("questions_len", &self.questions.len())
            .field("position", &self.position)
            .field("answered", &self.answered_count())
            .field("remaining_secs", &self.remaining_secs)
            .field("completion", &self.completion)
            .field("reviewing", &self.reviewing)
            .finish_non_exhaustive()
    }
}
