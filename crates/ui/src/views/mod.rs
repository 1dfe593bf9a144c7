mod help;
mod question;
mod quiz;
mod result;
mod review;
mod start;

#[cfg(test)]
pub(crate) mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use help::HelpView;
pub use question::QuestionScreen;
pub use quiz::{QuizView, use_quiz_driver};
pub use result::ResultScreen;
pub use review::ReviewScreen;
pub use start::StartScreen;
