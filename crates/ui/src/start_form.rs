use quiz_core::model::{
    AnswerPolicy, ModeKind, QuestionId, QuizConfig, QuizConfigDraft, QuizConfigError,
    SelectionMode,
};

/// Editable start-screen settings.
///
/// Interval bounds are remembered even while another mode is selected, so
/// switching modes back and forth does not lose them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StartForm {
    pub count: u32,
    pub minutes: u32,
    pub mode: ModeKind,
    pub range: (QuestionId, QuestionId),
    pub locked: bool,
}

impl Default for StartForm {
    fn default() -> Self {
        Self::from_draft(QuizConfigDraft::default())
    }
}

impl StartForm {
    #[must_use]
    pub fn from_draft(draft: QuizConfigDraft) -> Self {
        let (mode, range) = match draft.mode {
            SelectionMode::Random => (ModeKind::Random, None),
            SelectionMode::Interval { start, end } => (ModeKind::Interval, Some((start, end))),
            SelectionMode::ReviewOnly => (ModeKind::Review, None),
        };
        Self {
            count: draft.count,
            minutes: draft.time_limit_minutes,
            mode,
            range: range.unwrap_or((QuestionId::new(1), QuestionId::new(10))),
            locked: draft.answer_policy == AnswerPolicy::Locked,
        }
    }

    #[must_use]
    pub fn draft(&self) -> QuizConfigDraft {
        let mode = match self.mode {
            ModeKind::Random => SelectionMode::Random,
            ModeKind::Interval => SelectionMode::Interval {
                start: self.range.0,
                end: self.range.1,
            },
            ModeKind::Review => SelectionMode::ReviewOnly,
        };
        QuizConfigDraft {
            count: self.count,
            time_limit_minutes: self.minutes,
            mode,
            answer_policy: if self.locked {
                AnswerPolicy::Locked
            } else {
                AnswerPolicy::Free
            },
        }
    }

    /// # Errors
    ///
    /// Returns `QuizConfigError` if the current settings are invalid.
    pub fn validate(&self) -> Result<QuizConfig, QuizConfigError> {
        self.draft().validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrips_interval_draft() {
        let draft = QuizConfigDraft {
            count: 30,
            time_limit_minutes: 20,
            mode: SelectionMode::Interval {
                start: QuestionId::new(11),
                end: QuestionId::new(40),
            },
            answer_policy: AnswerPolicy::Locked,
        };
        assert_eq!(StartForm::from_draft(draft).draft(), draft);
    }

    #[test]
    fn range_survives_mode_switch() {
        let mut form = StartForm::default();
        form.mode = ModeKind::Interval;
        form.range = (QuestionId::new(3), QuestionId::new(9));
        form.mode = ModeKind::Random;
        form.mode = ModeKind::Interval;
        assert_eq!(
            form.draft().mode,
            SelectionMode::Interval {
                start: QuestionId::new(3),
                end: QuestionId::new(9)
            }
        );
    }

    #[test]
    fn invalid_settings_fail_validation() {
        let mut form = StartForm::default();
        form.count = 0;
        assert_eq!(form.validate().unwrap_err(), QuizConfigError::InvalidCount);
    }
}
