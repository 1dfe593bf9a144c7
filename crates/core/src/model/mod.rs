mod config;
mod ids;
mod marks;
mod question;
mod score;

pub use config::{
    AnswerPolicy, DEFAULT_QUESTION_COUNT, DEFAULT_TIME_LIMIT_MINUTES, ModeKind, QuizConfig,
    QuizConfigDraft, QuizConfigError, SelectionMode,
};
pub use ids::{ParseIdError, QuestionId};
pub use marks::ReviewMarks;
pub use question::{OptionLabel, Question, QuestionDraft, QuestionError};
pub use score::{Mistake, Score};
