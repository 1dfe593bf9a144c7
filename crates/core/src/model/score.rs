use crate::model::question::{OptionLabel, Question};

/// A question answered wrongly, or left unanswered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mistake {
    pub position: usize,
    pub question: Question,
    /// `None` when the question was never answered.
    pub chosen: Option<OptionLabel>,
}

impl Mistake {
    /// Text of the chosen option, if any.
    #[must_use]
    pub fn chosen_text(&self) -> Option<&str> {
        self.chosen.and_then(|label| self.question.option_text(label))
    }

    #[must_use]
    pub fn correct_text(&self) -> &str {
        self.question.correct_text()
    }
}

/// Result of a completed attempt.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Score {
    correct: usize,
    total: usize,
    mistakes: Vec<Mistake>,
}

impl Score {
    /// Compare every recorded answer against its question's correct label.
    ///
    /// `answers[i]` belongs to `questions[i]`; missing trailing entries count
    /// as unanswered.
    #[must_use]
    pub fn compute(questions: &[Question], answers: &[Option<OptionLabel>]) -> Self {
        let mut correct = 0;
        let mut mistakes = Vec::new();

        for (position, question) in questions.iter().enumerate() {
            let chosen = answers.get(position).copied().flatten();
            if chosen.is_some_and(|label| question.is_correct(label)) {
                correct += 1;
            } else {
                mistakes.push(Mistake {
                    position,
                    question: question.clone(),
                    chosen,
                });
            }
        }

        Self {
            correct,
            total: questions.len(),
            mistakes,
        }
    }

    #[must_use]
    pub fn correct(&self) -> usize {
        self.correct
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    /// Rounded percentage of correct answers, half rounding up. 0 for an empty session.
    #[must_use]
    pub fn percentage(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        let pct = (self.correct * 200 + self.total) / (self.total * 2);
        u32::try_from(pct).unwrap_or(100)
    }

    #[must_use]
    pub fn mistakes(&self) -> &[Mistake] {
        &self.mistakes
    }
}
