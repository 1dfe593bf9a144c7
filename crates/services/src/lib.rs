#![forbid(unsafe_code)]

pub mod error;
pub mod marks_service;
pub mod pool;
pub mod quiz;

pub use quiz_core::Clock;

pub use error::QuizError;
pub use marks_service::{REVIEW_MARKS_KEY, ReviewMarkService};
pub use pool::spawn_pool_load;
pub use quiz::{
    AnswerOutcome, CompletionReason, Countdown, CountdownGuard, FinishOutcome, ManualCountdown,
    Navigation, QuizController, QuizPhase, ReviewItem, ReviewOption, Session,
    SessionToken, TickOutcome, TokioCountdown,
};
