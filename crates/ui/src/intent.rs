use quiz_core::model::{ModeKind, OptionLabel, QuestionId};
use services::QuizPhase;

/// A user action raised by one of the quiz screens.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizIntent {
    // start screen
    Start,
    SetCount(u32),
    SetMinutes(u32),
    SetMode(ModeKind),
    SetRange(QuestionId, QuestionId),
    SetLocked(bool),
    // in progress
    Answer(OptionLabel),
    Next,
    Previous,
    /// 0-based session position.
    GoTo(usize),
    Finish,
    // completed / reviewing
    Review,
    BackToResults,
    ToggleMark(QuestionId),
    Restart,
}

impl QuizIntent {
    /// Whether the intent means anything while the quiz is in `phase`.
    #[must_use]
    pub const fn allowed_in(self, phase: QuizPhase) -> bool {
        match self {
            Self::Start
            | Self::SetCount(_)
            | Self::SetMinutes(_)
            | Self::SetMode(_)
            | Self::SetRange(..)
            | Self::SetLocked(_) => matches!(phase, QuizPhase::NotStarted),
            Self::Answer(_) | Self::Next | Self::Previous | Self::GoTo(_) | Self::Finish => {
                matches!(phase, QuizPhase::InProgress)
            }
            Self::Review => matches!(phase, QuizPhase::Completed),
            Self::BackToResults | Self::ToggleMark(_) => matches!(phase, QuizPhase::Reviewing),
            Self::Restart => matches!(phase, QuizPhase::Completed | QuizPhase::Reviewing),
        }
    }
}
