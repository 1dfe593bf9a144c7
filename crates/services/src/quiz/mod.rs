mod controller;
mod countdown;
mod plan;
mod review;
mod session;

pub use controller::{
    AnswerOutcome, FinishOutcome, Navigation, QuizController, QuizPhase, TickOutcome,
};
pub use countdown::{
    Countdown, CountdownGuard, ManualCountdown, SessionToken, TICK, TokioCountdown,
};
pub use review::{ReviewItem, ReviewOption};
pub use session::{CompletionReason, Session};
