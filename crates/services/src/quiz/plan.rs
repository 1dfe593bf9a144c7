use rand::Rng;
use rand::seq::SliceRandom;

use quiz_core::model::{Question, QuizConfig, ReviewMarks, SelectionMode};

/// Pick the ordered question list for a new session.
///
/// - `Random`: uniform shuffle of the whole pool, first `count` kept.
/// - `Interval`: ids within `[start, end]` in pool order, first `count` kept.
/// - `ReviewOnly`: uniform shuffle of the marked questions, first `count` kept.
///
/// An empty pool, or a filter matching nothing, yields an empty list.
pub(crate) fn select_questions<R: Rng + ?Sized>(
    pool: &[Question],
    config: &QuizConfig,
    marks: &ReviewMarks,
    rng: &mut R,
) -> Vec<Question> {
    let count = config.count();

    match config.mode() {
        SelectionMode::Random => shuffled_prefix(pool.iter(), count, rng),
        SelectionMode::ReviewOnly => {
            shuffled_prefix(pool.iter().filter(|q| marks.contains(q.id())), count, rng)
        }
        SelectionMode::Interval { start, end } => pool
            .iter()
            .filter(|q| (start..=end).contains(&q.id()))
            .take(count)
            .cloned()
            .collect(),
    }
}

fn shuffled_prefix<'a, R: Rng + ?Sized>(
    eligible: impl Iterator<Item = &'a Question>,
    count: usize,
    rng: &mut R,
) -> Vec<Question> {
    let mut candidates: Vec<&Question> = eligible.collect();
    // Fisher-Yates; every ordering is equally likely.
    candidates.as_mut_slice().shuffle(rng);
    candidates.into_iter().take(count).cloned().collect()
}
