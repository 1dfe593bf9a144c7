use quiz_core::model::QuestionId;
use services::ReviewItem;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionStyle {
    Plain,
    Correct,
    Wrong,
}

impl OptionStyle {
    #[must_use]
    pub const fn note(self) -> Option<&'static str> {
        match self {
            Self::Plain => None,
            Self::Correct => Some("correct answer"),
            Self::Wrong => Some("your answer"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReviewLineVm {
    pub text: String,
    pub style: OptionStyle,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReviewItemVm {
    pub question_id: QuestionId,
    pub title: String,
    pub lines: Vec<ReviewLineVm>,
    pub marked: bool,
    pub mark_label: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReviewVm {
    pub items: Vec<ReviewItemVm>,
}

impl From<&ReviewItem> for ReviewItemVm {
    fn from(item: &ReviewItem) -> Self {
        let lines = item
            .options
            .iter()
            .map(|option| ReviewLineVm {
                text: format!("{}) {}", option.label, option.text),
                style: if option.is_correct {
                    OptionStyle::Correct
                } else if option.is_wrong_choice {
                    OptionStyle::Wrong
                } else {
                    OptionStyle::Plain
                },
            })
            .collect();

        Self {
            question_id: item.question_id,
            title: format!("{}. {}", item.question_id, item.prompt),
            lines,
            marked: item.marked,
            mark_label: if item.marked {
                "Marked for review"
            } else {
                "Mark for review"
            },
        }
    }
}

#[must_use]
pub fn map_review(items: &[ReviewItem]) -> ReviewVm {
    ReviewVm {
        items: items.iter().map(ReviewItemVm::from).collect(),
    }
}
