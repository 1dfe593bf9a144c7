use quiz_core::model::ModeKind;

use crate::start_form::StartForm;
use crate::vm::time_fmt::format_remaining;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PoolStatus {
    Loading,
    Ready { questions: usize, marked: usize },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StartVm {
    pub pool_label: String,
    pub count_label: String,
    pub timer_label: String,
    pub mode_label: String,
    pub policy_label: String,
    /// Only offered when some pool questions are marked.
    pub review_label: Option<String>,
}

#[must_use]
pub fn map_start(form: &StartForm, pool: PoolStatus) -> StartVm {
    let (pool_label, marked) = match pool {
        PoolStatus::Loading => ("Loading questions...".to_string(), 0),
        PoolStatus::Ready { questions: 0, .. } => ("No questions available.".to_string(), 0),
        PoolStatus::Ready { questions, marked } => (format!("{questions} questions loaded"), marked),
    };

    let timer_label = if form.minutes == 0 {
        "off".to_string()
    } else {
        format!("{} min ({})", form.minutes, format_remaining(form.minutes.saturating_mul(60)))
    };

    let mode_label = match form.mode {
        ModeKind::Random => "random".to_string(),
        ModeKind::Interval => format!("interval {}-{}", form.range.0, form.range.1),
        ModeKind::Review => "marked for review only".to_string(),
    };

    let review_label = (marked > 0).then(|| format!("{marked} marked for review"));

    StartVm {
        pool_label,
        count_label: form.count.to_string(),
        timer_label,
        mode_label,
        policy_label: if form.locked {
            "first answer is final".to_string()
        } else {
            "answers can be changed".to_string()
        },
        review_label,
    }
}
