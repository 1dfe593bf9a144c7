use std::path::PathBuf;

use quiz_core::model::Question;
use storage::loader::load_questions;
use tokio::sync::oneshot;

/// Read and parse the question file on a background task.
///
/// The receiver resolves exactly once. A read or header failure is logged and
/// delivered as an empty pool; there is no retry.
///
/// # Panics
///
/// Panics if called outside a tokio runtime.
#[must_use]
pub fn spawn_pool_load(path: impl Into<PathBuf>) -> oneshot::Receiver<Vec<Question>> {
    let path = path.into();
    let (tx, rx) = oneshot::channel();

    tokio::spawn(async move {
        let questions = match load_questions(&path).await {
            Ok(report) => {
                tracing::info!(
                    path = %path.display(),
                    kept = report.questions.len(),
                    dropped = report.dropped,
                    "question file loaded"
                );
                report.questions
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "question file unavailable");
                Vec::new()
            }
        };
        // The receiver may be gone if the app quit before loading finished.
        let _ = tx.send(questions);
    });

    rx
}
