use std::sync::Arc;

use rand::SeedableRng;
use rand::rngs::StdRng;

use quiz_core::model::{
    AnswerPolicy, OptionLabel, Question, QuestionId, QuizConfig, ReviewMarks, Score, SelectionMode,
};

use crate::Clock;
use crate::error::QuizError;
use crate::marks_service::ReviewMarkService;

use super::countdown::{Countdown, SessionToken};
use super::plan::select_questions;
use super::review::{ReviewItem, review_items};
use super::session::{CompletionReason, Session};

//
// ─── OUTCOMES ──────────────────────────────────────────────────────────────────
//

/// Where the controller is in the quiz lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizPhase {
    NotStarted,
    InProgress,
    Completed,
    Reviewing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerOutcome {
    /// First answer for this position.
    Recorded,
    /// A previous answer was overwritten.
    Replaced,
    /// The position was already answered and the policy keeps the first answer.
    Locked,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Moved(usize),
    /// Stepped past the last question; the session is now complete.
    Finished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinishOutcome {
    Finished,
    AlreadyCompleted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Stale token, untimed or finished session.
    Ignored,
    Remaining(u32),
    /// The countdown hit zero and forced the session to complete.
    Expired,
}

//
// ─── CONTROLLER ────────────────────────────────────────────────────────────────
//

/// Owns the question pool and the single active quiz session.
///
/// All mutation goes through `&mut self`; the countdown only delivers
/// [`SessionToken`]s that the owner passes back in via [`QuizController::tick`].
pub struct QuizController {
    clock: Clock,
    pool: Vec<Question>,
    pool_loaded: bool,
    marks: ReviewMarkService,
    countdown: Arc<dyn Countdown>,
    rng: StdRng,
    last_token: u64,
    session: Option<Session>,
}

impl QuizController {
    #[must_use]
    pub fn new(marks: ReviewMarkService, countdown: Arc<dyn Countdown>) -> Self {
        Self {
            clock: Clock::default(),
            pool: Vec::new(),
            pool_loaded: false,
            marks,
            countdown,
            rng: StdRng::from_os_rng(),
            last_token: 0,
            session: None,
        }
    }

    #[must_use]
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// Use a deterministic shuffle sequence.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Replace the question pool. Does not affect a session already running.
    pub fn set_pool(&mut self, questions: Vec<Question>) {
        tracing::info!(questions = questions.len(), "question pool ready");
        self.pool = questions;
        self.pool_loaded = true;
    }

    #[must_use]
    pub fn pool(&self) -> &[Question] {
        &self.pool
    }

    #[must_use]
    pub fn is_pool_loaded(&self) -> bool {
        self.pool_loaded
    }

    #[must_use]
    pub fn marks(&self) -> &ReviewMarks {
        self.marks.current()
    }

    /// Number of pool questions currently marked for review.
    #[must_use]
    pub fn marked_in_pool(&self) -> usize {
        let marks = self.marks.current();
        self.pool.iter().filter(|q| marks.contains(q.id())).count()
    }

    /// Reload marks from storage.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Storage` if the store cannot be read.
    pub async fn refresh_marks(&mut self) -> Result<&ReviewMarks, QuizError> {
        self.marks.refresh().await?;
        Ok(self.marks.current())
    }

    #[must_use]
    pub fn phase(&self) -> QuizPhase {
        match &self.session {
            None => QuizPhase::NotStarted,
            Some(s) if !s.is_complete() => QuizPhase::InProgress,
            Some(s) if s.is_reviewing() => QuizPhase::Reviewing,
            Some(_) => QuizPhase::Completed,
        }
    }

    #[must_use]
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Select questions and begin a new attempt, replacing any current one.
    ///
    /// An empty selection completes immediately. A configured time limit arms
    /// the countdown for this session only.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Storage` if review-only mode cannot read the marks.
    pub async fn start(&mut self, config: QuizConfig) -> Result<QuizPhase, QuizError> {
        // Drop the old session first so its countdown is cancelled.
        self.session = None;

        let marks = if config.mode() == SelectionMode::ReviewOnly {
            self.marks.refresh().await?
        } else {
            self.marks.current().clone()
        };
        let questions = select_questions(&self.pool, &config, &marks, &mut self.rng);

        self.last_token += 1;
        let token = SessionToken::new(self.last_token);
        let now = self.clock.now();
        let mut session = Session::new(
            token,
            questions,
            config.answer_policy(),
            config.time_limit_secs(),
        );

        tracing::info!(
            mode = %config.mode(),
            requested = config.count(),
            selected = session.len(),
            time_limit_secs = ?config.time_limit_secs(),
            "quiz started"
        );

        if session.is_empty() {
            session.complete(now, CompletionReason::Empty);
        } else if config.time_limit_secs().is_some() {
            session.arm(self.countdown.arm(token));
        }

        self.session = Some(session);
        Ok(self.phase())
    }

    /// Record `label` as the answer for `position`.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::NotStarted`/`Completed` outside `InProgress`,
    /// `QuizError::InvalidPosition` for an out-of-range position and
    /// `QuizError::InvalidOption` if the question has no such option. Errors
    /// leave the recorded answers untouched.
    pub fn answer(
        &mut self,
        position: usize,
        label: OptionLabel,
    ) -> Result<AnswerOutcome, QuizError> {
        let session = self.in_progress_mut()?;
        let len = session.len();
        let question = session
            .questions()
            .get(position)
            .ok_or(QuizError::InvalidPosition { position, len })?;
        if !question.has_option(label) {
            return Err(QuizError::InvalidOption);
        }

        let outcome = match (session.answer_at(position), session.policy()) {
            (Some(_), AnswerPolicy::Locked) => return Ok(AnswerOutcome::Locked),
            (Some(_), AnswerPolicy::Free) => AnswerOutcome::Replaced,
            (None, _) => AnswerOutcome::Recorded,
        };
        session.record_answer(position, label);
        Ok(outcome)
    }

    /// Answer the question at the current position.
    ///
    /// # Errors
    ///
    /// Same as [`QuizController::answer`].
    pub fn answer_current(&mut self, label: OptionLabel) -> Result<AnswerOutcome, QuizError> {
        let position = self.in_progress_mut()?.position();
        self.answer(position, label)
    }

    /// Move forward; from the last question this finishes the quiz.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::NotStarted` or `QuizError::Completed` outside `InProgress`.
    pub fn next(&mut self) -> Result<Navigation, QuizError> {
        let now = self.clock.now();
        let session = self.in_progress_mut()?;
        let next = session.position() + 1;
        if next < session.len() {
            session.set_position(next);
            return Ok(Navigation::Moved(next));
        }
        session.complete(now, CompletionReason::Manual);
        Ok(Navigation::Finished)
    }

    /// Move back one question, staying at 0 on the first.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::NotStarted` or `QuizError::Completed` outside `InProgress`.
    pub fn previous(&mut self) -> Result<usize, QuizError> {
        let session = self.in_progress_mut()?;
        let previous = session.position().saturating_sub(1);
        session.set_position(previous);
        Ok(previous)
    }

    /// Move directly to `position`.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::InvalidPosition` if out of range, or a phase error
    /// outside `InProgress`.
    pub fn jump(&mut self, position: usize) -> Result<usize, QuizError> {
        let session = self.in_progress_mut()?;
        let len = session.len();
        if position >= len {
            return Err(QuizError::InvalidPosition { position, len });
        }
        session.set_position(position);
        Ok(position)
    }

    /// Complete the quiz by user action. Idempotent once completed.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::NotStarted` when there is no session.
    pub fn finish(&mut self) -> Result<FinishOutcome, QuizError> {
        let now = self.clock.now();
        let session = self.session.as_mut().ok_or(QuizError::NotStarted)?;
        if session.complete(now, CompletionReason::Manual) {
            Ok(FinishOutcome::Finished)
        } else {
            Ok(FinishOutcome::AlreadyCompleted)
        }
    }

    /// Apply one countdown tick delivered for `token`.
    pub fn tick(&mut self, token: SessionToken) -> TickOutcome {
        let now = self.clock.now();
        let Some(session) = self.session.as_mut() else {
            tracing::debug!(token = token.value(), "tick without session ignored");
            return TickOutcome::Ignored;
        };
        if session.token() != token || session.is_complete() {
            tracing::debug!(token = token.value(), "stale tick ignored");
            return TickOutcome::Ignored;
        }

        match session.tick() {
            None => TickOutcome::Ignored,
            Some(0) => {
                session.complete(now, CompletionReason::TimeUp);
                tracing::info!(
                    answered = session.answered_count(),
                    total = session.len(),
                    "time is up, quiz finished"
                );
                TickOutcome::Expired
            }
            Some(remaining) => TickOutcome::Remaining(remaining),
        }
    }

    /// Switch the completed quiz to the review screen.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::NotCompleted` while in progress, `QuizError::NotStarted` without a session.
    pub fn review(&mut self) -> Result<(), QuizError> {
        self.completed_mut()?.set_reviewing(true);
        Ok(())
    }

    /// Leave the review screen and go back to the result summary.
    ///
    /// # Errors
    ///
    /// Same as [`QuizController::review`].
    pub fn close_review(&mut self) -> Result<(), QuizError> {
        self.completed_mut()?.set_reviewing(false);
        Ok(())
    }

    /// Score of the completed session.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::NotCompleted` while in progress, `QuizError::NotStarted` without a session.
    pub fn score(&self) -> Result<Score, QuizError> {
        Ok(self.completed()?.score())
    }

    /// Per-question review projection with the current mark state.
    ///
    /// # Errors
    ///
    /// Same as [`QuizController::score`].
    pub fn review_items(&self) -> Result<Vec<ReviewItem>, QuizError> {
        Ok(review_items(self.completed()?, self.marks.current()))
    }

    /// Flip the review mark of `id` and persist it immediately.
    ///
    /// Only questions of the completed session can be marked.
    ///
    /// # Errors
    ///
    /// Returns a phase error before completion, `QuizError::UnknownQuestion`
    /// if `id` was not part of the session and `QuizError::Storage` if the
    /// mark cannot be persisted.
    pub async fn toggle_mark(&mut self, id: QuestionId) -> Result<bool, QuizError> {
        let session = self.completed()?;
        if !session.questions().iter().any(|q| q.id() == id) {
            return Err(QuizError::UnknownQuestion(id));
        }
        Ok(self.marks.toggle(id).await?)
    }

    /// Discard the session (cancelling any countdown). Marks are kept.
    pub fn restart(&mut self) {
        if self.session.take().is_some() {
            tracing::debug!("quiz reset");
        }
    }

    fn in_progress_mut(&mut self) -> Result<&mut Session, QuizError> {
        match self.session.as_mut() {
            None => Err(QuizError::NotStarted),
            Some(s) if s.is_complete() => Err(QuizError::Completed),
            Some(s) => Ok(s),
        }
    }

    fn completed(&self) -> Result<&Session, QuizError> {
        match self.session.as_ref() {
            None => Err(QuizError::NotStarted),
            Some(s) if !s.is_complete() => Err(QuizError::NotCompleted),
            Some(s) => Ok(s),
        }
    }

    fn completed_mut(&mut self) -> Result<&mut Session, QuizError> {
        match self.session.as_mut() {
            None => Err(QuizError::NotStarted),
            Some(s) if !s.is_complete() => Err(QuizError::NotCompleted),
            Some(s) => Ok(s),
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::countdown::ManualCountdown;
    use quiz_core::model::{QuestionDraft, QuizConfigDraft};
    use quiz_core::time::fixed_now;
    use storage::repository::InMemoryStore;

    fn question(id: u64) -> Question {
        QuestionDraft {
            id: QuestionId::new(id),
            prompt: format!("Q{id}"),
            options: vec![
                (OptionLabel::A, format!("right {id}")),
                (OptionLabel::B, format!("wrong {id}")),
                (OptionLabel::C, format!("other {id}")),
            ],
            correct: "A".into(),
        }
        .validate()
        .unwrap()
    }

    fn controller(countdown: &ManualCountdown) -> QuizController {
        let marks = ReviewMarkService::new(Arc::new(InMemoryStore::new()));
        let mut controller = QuizController::new(marks, Arc::new(countdown.clone()))
            .with_clock(Clock::fixed(fixed_now()))
            .with_seed(7);
        controller.set_pool((1..=3).map(question).collect());
        controller
    }

    fn config(count: u32, minutes: u32, policy: AnswerPolicy) -> QuizConfig {
        QuizConfigDraft {
            count,
            time_limit_minutes: minutes,
            mode: SelectionMode::Random,
            answer_policy: policy,
        }
        .validate()
        .unwrap()
    }

    #[tokio::test]
    async fn starts_at_first_position_with_no_answers() {
        let countdown = ManualCountdown::new();
        let mut quiz = controller(&countdown);
        assert_eq!(quiz.phase(), QuizPhase::NotStarted);

        let phase = quiz.start(config(2, 0, AnswerPolicy::Free)).await.unwrap();
        assert_eq!(phase, QuizPhase::InProgress);

        let session = quiz.session().unwrap();
        assert_eq!(session.len(), 2);
        assert_eq!(session.position(), 0);
        assert_eq!(session.answered_count(), 0);
        assert_eq!(session.remaining_secs(), None);
        assert!(countdown.armed().is_empty());
    }

    #[tokio::test]
    async fn invalid_label_is_rejected_without_mutation() {
        let countdown = ManualCountdown::new();
        let mut quiz = controller(&countdown);
        quiz.start(config(3, 0, AnswerPolicy::Free)).await.unwrap();

        let err = quiz.answer(0, OptionLabel::D).unwrap_err();
        assert!(matches!(err, QuizError::InvalidOption));
        let err = quiz.answer(3, OptionLabel::A).unwrap_err();
        assert!(matches!(err, QuizError::InvalidPosition { position: 3, len: 3 }));
        assert_eq!(quiz.session().unwrap().answered_count(), 0);
    }

    #[tokio::test]
    async fn free_policy_overwrites_answers() {
        let countdown = ManualCountdown::new();
        let mut quiz = controller(&countdown);
        quiz.start(config(3, 0, AnswerPolicy::Free)).await.unwrap();

        assert_eq!(quiz.answer_current(OptionLabel::B).unwrap(), AnswerOutcome::Recorded);
        assert_eq!(quiz.answer_current(OptionLabel::C).unwrap(), AnswerOutcome::Replaced);
        assert_eq!(quiz.session().unwrap().answer_at(0), Some(OptionLabel::C));
    }

    #[tokio::test]
    async fn locked_policy_keeps_first_answer() {
        let countdown = ManualCountdown::new();
        let mut quiz = controller(&countdown);
        quiz.start(config(3, 0, AnswerPolicy::Locked)).await.unwrap();

        assert_eq!(quiz.answer(1, OptionLabel::B).unwrap(), AnswerOutcome::Recorded);
        assert_eq!(quiz.answer(1, OptionLabel::A).unwrap(), AnswerOutcome::Locked);
        assert_eq!(quiz.session().unwrap().answer_at(1), Some(OptionLabel::B));
    }

    #[tokio::test]
    async fn navigation_clamps_and_next_from_last_finishes() {
        let countdown = ManualCountdown::new();
        let mut quiz = controller(&countdown);
        quiz.start(config(3, 0, AnswerPolicy::Free)).await.unwrap();

        assert_eq!(quiz.previous().unwrap(), 0);
        assert_eq!(quiz.next().unwrap(), Navigation::Moved(1));
        assert_eq!(quiz.next().unwrap(), Navigation::Moved(2));
        assert_eq!(quiz.previous().unwrap(), 1);
        assert_eq!(quiz.jump(2).unwrap(), 2);
        assert!(matches!(quiz.jump(5), Err(QuizError::InvalidPosition { .. })));

        assert_eq!(quiz.next().unwrap(), Navigation::Finished);
        assert_eq!(quiz.phase(), QuizPhase::Completed);
        assert_eq!(
            quiz.session().unwrap().completion_reason(),
            Some(CompletionReason::Manual)
        );
    }

    #[tokio::test]
    async fn no_answers_after_completion() {
        let countdown = ManualCountdown::new();
        let mut quiz = controller(&countdown);
        quiz.start(config(3, 0, AnswerPolicy::Free)).await.unwrap();
        quiz.finish().unwrap();

        assert!(matches!(quiz.answer(0, OptionLabel::A), Err(QuizError::Completed)));
        assert!(matches!(quiz.next(), Err(QuizError::Completed)));
        assert_eq!(quiz.session().unwrap().answered_count(), 0);
    }

    #[tokio::test]
    async fn finish_twice_transitions_once() {
        let countdown = ManualCountdown::new();
        let mut quiz = controller(&countdown);
        quiz.start(config(3, 5, AnswerPolicy::Free)).await.unwrap();

        assert_eq!(quiz.finish().unwrap(), FinishOutcome::Finished);
        let completed_at = quiz.session().unwrap().completed_at();
        assert_eq!(quiz.finish().unwrap(), FinishOutcome::AlreadyCompleted);
        assert_eq!(quiz.session().unwrap().completed_at(), completed_at);
        assert_eq!(countdown.cancelled().len(), 1);
    }

    #[tokio::test]
    async fn countdown_expiry_forces_finish() {
        let countdown = ManualCountdown::new();
        let mut quiz = controller(&countdown);
        quiz.start(config(3, 1, AnswerPolicy::Free)).await.unwrap();
        let token = quiz.session().unwrap().token();
        assert_eq!(countdown.live(), vec![token]);
        assert_eq!(quiz.session().unwrap().remaining_secs(), Some(60));

        for expected in (1..60).rev() {
            assert_eq!(quiz.tick(token), TickOutcome::Remaining(expected));
        }
        assert_eq!(quiz.tick(token), TickOutcome::Expired);
        assert_eq!(quiz.phase(), QuizPhase::Completed);
        assert_eq!(
            quiz.session().unwrap().completion_reason(),
            Some(CompletionReason::TimeUp)
        );
        assert!(countdown.live().is_empty());

        // A tick already queued behind the expiry is a no-op.
        assert_eq!(quiz.tick(token), TickOutcome::Ignored);
        assert_eq!(quiz.finish().unwrap(), FinishOutcome::AlreadyCompleted);
    }

    #[tokio::test]
    async fn manual_finish_wins_over_later_expiry() {
        let countdown = ManualCountdown::new();
        let mut quiz = controller(&countdown);
        quiz.start(config(3, 1, AnswerPolicy::Free)).await.unwrap();
        let token = quiz.session().unwrap().token();

        quiz.finish().unwrap();
        assert_eq!(quiz.tick(token), TickOutcome::Ignored);
        assert_eq!(
            quiz.session().unwrap().completion_reason(),
            Some(CompletionReason::Manual)
        );
        assert_eq!(quiz.session().unwrap().remaining_secs(), Some(60));
    }

    #[tokio::test]
    async fn stale_ticks_do_not_touch_a_new_session() {
        let countdown = ManualCountdown::new();
        let mut quiz = controller(&countdown);
        quiz.start(config(3, 1, AnswerPolicy::Free)).await.unwrap();
        let first = quiz.session().unwrap().token();

        quiz.restart();
        assert_eq!(countdown.cancelled(), vec![first]);

        quiz.start(config(3, 1, AnswerPolicy::Free)).await.unwrap();
        let second = quiz.session().unwrap().token();
        assert_ne!(first, second);

        for _ in 0..100 {
            assert_eq!(quiz.tick(first), TickOutcome::Ignored);
        }
        assert_eq!(quiz.phase(), QuizPhase::InProgress);
        assert_eq!(quiz.session().unwrap().remaining_secs(), Some(60));
    }

    #[tokio::test]
    async fn starting_again_cancels_previous_countdown() {
        let countdown = ManualCountdown::new();
        let mut quiz = controller(&countdown);
        quiz.start(config(3, 2, AnswerPolicy::Free)).await.unwrap();
        quiz.start(config(3, 2, AnswerPolicy::Free)).await.unwrap();

        let armed = countdown.armed();
        assert_eq!(armed.len(), 2);
        assert_eq!(countdown.live(), vec![armed[1]]);
    }

    #[tokio::test]
    async fn untimed_session_ignores_ticks() {
        let countdown = ManualCountdown::new();
        let mut quiz = controller(&countdown);
        quiz.start(config(3, 0, AnswerPolicy::Free)).await.unwrap();
        let token = quiz.session().unwrap().token();
        assert_eq!(quiz.tick(token), TickOutcome::Ignored);
        assert_eq!(quiz.phase(), QuizPhase::InProgress);
    }

    #[tokio::test]
    async fn empty_pool_completes_immediately() {
        let countdown = ManualCountdown::new();
        let marks = ReviewMarkService::new(Arc::new(InMemoryStore::new()));
        let mut quiz = QuizController::new(marks, Arc::new(countdown.clone()));
        assert!(!quiz.is_pool_loaded());

        let phase = quiz.start(config(10, 10, AnswerPolicy::Free)).await.unwrap();
        assert_eq!(phase, QuizPhase::Completed);
        assert_eq!(
            quiz.session().unwrap().completion_reason(),
            Some(CompletionReason::Empty)
        );
        assert!(countdown.armed().is_empty());

        let score = quiz.score().unwrap();
        assert_eq!(score.total(), 0);
        assert_eq!(score.percentage(), 0);
    }

    #[tokio::test]
    async fn review_requires_completion_and_restart_discards_session() {
        let countdown = ManualCountdown::new();
        let mut quiz = controller(&countdown);
        assert!(matches!(quiz.review(), Err(QuizError::NotStarted)));

        quiz.start(config(3, 0, AnswerPolicy::Free)).await.unwrap();
        assert!(matches!(quiz.review(), Err(QuizError::NotCompleted)));
        assert!(matches!(quiz.score(), Err(QuizError::NotCompleted)));

        quiz.finish().unwrap();
        quiz.review().unwrap();
        assert_eq!(quiz.phase(), QuizPhase::Reviewing);
        quiz.close_review().unwrap();
        assert_eq!(quiz.phase(), QuizPhase::Completed);

        quiz.restart();
        assert_eq!(quiz.phase(), QuizPhase::NotStarted);
        assert!(quiz.session().is_none());
    }

    #[tokio::test]
    async fn marks_are_limited_to_questions_of_the_finished_session() {
        let countdown = ManualCountdown::new();
        let mut quiz = controller(&countdown);
        let config = QuizConfigDraft {
            count: 10,
            time_limit_minutes: 0,
            mode: SelectionMode::Interval {
                start: QuestionId::new(1),
                end: QuestionId::new(1),
            },
            answer_policy: AnswerPolicy::Free,
        }
        .validate()
        .unwrap();
        quiz.start(config).await.unwrap();

        assert!(matches!(
            quiz.toggle_mark(QuestionId::new(1)).await,
            Err(QuizError::NotCompleted)
        ));
        quiz.finish().unwrap();
        quiz.review().unwrap();

        let err = quiz.toggle_mark(QuestionId::new(987_654)).await.unwrap_err();
        assert!(matches!(err, QuizError::UnknownQuestion(id) if id == QuestionId::new(987_654)));
        // In the pool, but not selected for this session.
        assert!(matches!(
            quiz.toggle_mark(QuestionId::new(2)).await,
            Err(QuizError::UnknownQuestion(_))
        ));
        assert!(quiz.marks().is_empty());

        assert!(quiz.toggle_mark(QuestionId::new(1)).await.unwrap());
        assert!(quiz.marks().contains(QuestionId::new(1)));
    }
}
