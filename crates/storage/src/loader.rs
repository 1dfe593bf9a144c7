//! Question pool loading from header-row CSV text.
//!
//! Recognised headers (case-insensitive): `Numero`/`id`, `Domanda`/`question`,
//! `A`, `B`, `C`, optional `D`, and `Corretta`/`correct`/`answer`.

use std::collections::HashSet;
use std::io;
use std::path::Path;

use quiz_core::model::{OptionLabel, Question, QuestionDraft, QuestionId};
use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LoadError {
    #[error("failed to read question file: {0}")]
    Io(#[from] io::Error),

    #[error("invalid CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("missing required column: {0}")]
    MissingColumn(&'static str),
}

/// Questions kept from a source file plus how many rows were filtered out.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub questions: Vec<Question>,
    pub dropped: usize,
}

#[derive(Debug, Clone, Copy)]
struct Columns {
    id: usize,
    prompt: usize,
    options: [Option<usize>; 4],
    correct: usize,
}

impl Columns {
    fn from_headers(headers: &csv::StringRecord) -> Result<Self, LoadError> {
        let find = |names: &[&str]| {
            headers
                .iter()
                .position(|h| names.iter().any(|name| h.trim().eq_ignore_ascii_case(name)))
        };

        let id = find(&["numero", "id"]).ok_or(LoadError::MissingColumn("Numero"))?;
        let prompt =
            find(&["domanda", "question", "prompt"]).ok_or(LoadError::MissingColumn("Domanda"))?;
        let correct = find(&["corretta", "correct", "answer"])
            .ok_or(LoadError::MissingColumn("Corretta"))?;
        let a = find(&["a"]).ok_or(LoadError::MissingColumn("A"))?;
        let b = find(&["b"]).ok_or(LoadError::MissingColumn("B"))?;
        let c = find(&["c"]).ok_or(LoadError::MissingColumn("C"))?;
        let d = find(&["d"]);

        Ok(Self {
            id,
            prompt,
            options: [Some(a), Some(b), Some(c), d],
            correct,
        })
    }

    fn draft(&self, record: &csv::StringRecord) -> Option<QuestionDraft> {
        let field = |idx: usize| record.get(idx).map(str::trim).filter(|s| !s.is_empty());

        let id: QuestionId = field(self.id)?.parse().ok()?;
        let prompt = field(self.prompt)?.to_owned();
        let correct = field(self.correct)?.to_owned();

        let mut options = Vec::with_capacity(4);
        for (label, column) in OptionLabel::ALL.into_iter().zip(self.options) {
            let Some(column) = column else { continue };
            match field(column) {
                Some(text) => options.push((label, text.to_owned())),
                // A, B and C are mandatory; D may be blank.
                None if label != OptionLabel::D => return None,
                None => {}
            }
        }

        Some(QuestionDraft {
            id,
            prompt,
            options,
            correct,
        })
    }
}

/// Parse questions from CSV text, dropping incomplete or invalid rows.
///
/// Rows are kept in source order. When ids repeat, the first row wins.
///
/// # Errors
///
/// Returns `LoadError` if the header row cannot be read or a required column is absent.
/// Individual bad rows never fail the load.
pub fn parse_questions(reader: impl io::Read) -> Result<LoadReport, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let columns = Columns::from_headers(reader.headers()?)?;
    let mut report = LoadReport::default();
    let mut seen = HashSet::new();

    for result in reader.records() {
        let Ok(record) = result else {
            report.dropped += 1;
            continue;
        };
        if record.iter().all(|field| field.trim().is_empty()) {
            continue;
        }

        let question = columns
            .draft(&record)
            .and_then(|draft| draft.validate().ok())
            .filter(|question| seen.insert(question.id()));

        match question {
            Some(question) => report.questions.push(question),
            None => report.dropped += 1,
        }
    }

    tracing::debug!(
        kept = report.questions.len(),
        dropped = report.dropped,
        "parsed question rows"
    );
    Ok(report)
}

/// Read and parse a question file.
///
/// # Errors
///
/// Returns `LoadError::Io` if the file cannot be read, or any error from [`parse_questions`].
pub async fn load_questions(path: impl AsRef<Path>) -> Result<LoadReport, LoadError> {
    let bytes = tokio::fs::read(path.as_ref()).await?;
    parse_questions(bytes.as_slice())
}
