use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::model::ids::QuestionId;

/// Question ids the user flagged to revisit in a later attempt.
///
/// Serializes as a plain JSON array of integers in ascending order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReviewMarks(BTreeSet<QuestionId>);

impl ReviewMarks {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn contains(&self, id: QuestionId) -> bool {
        self.0.contains(&id)
    }

    /// Flip membership of `id`. Returns `true` if the id is marked afterwards.
    pub fn toggle(&mut self, id: QuestionId) -> bool {
        if self.0.remove(&id) {
            false
        } else {
            self.0.insert(id);
            true
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<QuestionId> for ReviewMarks {
    fn from_iter<T: IntoIterator<Item = QuestionId>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}
