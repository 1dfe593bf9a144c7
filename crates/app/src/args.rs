use std::fmt;
use std::path::{Path, PathBuf};

use quiz_core::model::{
    AnswerPolicy, ModeKind, QuestionId, QuizConfigDraft, QuizConfigError, SelectionMode,
};

pub const DEFAULT_DB_URL: &str = "sqlite://quiz.sqlite3";
pub const DEFAULT_QUESTIONS: &str = "data/quiz_domande.csv";

#[derive(Debug)]
pub enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidNumber { flag: &'static str, raw: String },
    InvalidMode(QuizConfigError),
    InvalidDbUrl { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidNumber { flag, raw } => write!(f, "invalid {flag} value: {raw}"),
            ArgsError::InvalidMode(err) => write!(f, "invalid --mode value: {err}"),
            ArgsError::InvalidDbUrl { raw } => write!(f, "invalid --db value: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn parse_number<T: std::str::FromStr>(raw: &str, flag: &'static str) -> Result<T, ArgsError> {
    raw.trim().parse().map_err(|_| ArgsError::InvalidNumber {
        flag,
        raw: raw.to_string(),
    })
}

pub fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--questions <csv>] [--db <sqlite_url>]");
    eprintln!("                      [--count <n>] [--minutes <n>] [--mode random|interval|review]");
    eprintln!("                      [--start <id>] [--end <id>] [--lock-answers]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --questions {DEFAULT_QUESTIONS}");
    eprintln!("  --db {DEFAULT_DB_URL}");
    eprintln!("  --count 10 --minutes 10 --mode random (0 minutes disables the timer)");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  QUIZ_QUESTIONS, QUIZ_DB_URL, QUIZ_COUNT, QUIZ_MINUTES, QUIZ_MODE, RUST_LOG");
}

/// Start-up settings. The quiz settings only seed the start screen and can be
/// changed there before every attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    pub questions: PathBuf,
    pub db_url: String,
    pub draft: QuizConfigDraft,
    pub help: bool,
}

impl Args {
    /// Parse flags, falling back to `QUIZ_*` environment variables through `env`.
    pub fn parse(
        args: impl IntoIterator<Item = String>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ArgsError> {
        let mut questions = env("QUIZ_QUESTIONS")
            .map_or_else(|| PathBuf::from(DEFAULT_QUESTIONS), PathBuf::from);
        let mut db_url = env("QUIZ_DB_URL")
            .map_or_else(|| DEFAULT_DB_URL.to_string(), normalize_sqlite_url);
        let mut draft = QuizConfigDraft::default();
        if let Some(raw) = env("QUIZ_COUNT") {
            draft.count = parse_number(&raw, "QUIZ_COUNT")?;
        }
        if let Some(raw) = env("QUIZ_MINUTES") {
            draft.time_limit_minutes = parse_number(&raw, "QUIZ_MINUTES")?;
        }
        let mut mode = match env("QUIZ_MODE") {
            Some(raw) => raw.parse().map_err(ArgsError::InvalidMode)?,
            None => ModeKind::Random,
        };
        let mut start = QuestionId::new(1);
        let mut end = QuestionId::new(10);
        let mut help = false;

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--questions" => questions = PathBuf::from(require_value(&mut args, "--questions")?),
                "--db" => {
                    let value = require_value(&mut args, "--db")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidDbUrl { raw: value });
                    }
                    db_url = normalize_sqlite_url(value);
                }
                "--count" => {
                    draft.count = parse_number(&require_value(&mut args, "--count")?, "--count")?;
                }
                "--minutes" => {
                    draft.time_limit_minutes =
                        parse_number(&require_value(&mut args, "--minutes")?, "--minutes")?;
                }
                "--mode" => {
                    mode = require_value(&mut args, "--mode")?
                        .parse()
                        .map_err(ArgsError::InvalidMode)?;
                }
                "--start" => {
                    start = QuestionId::new(parse_number(
                        &require_value(&mut args, "--start")?,
                        "--start",
                    )?);
                }
                "--end" => {
                    end = QuestionId::new(parse_number(&require_value(&mut args, "--end")?, "--end")?);
                }
                "--lock-answers" => draft.answer_policy = AnswerPolicy::Locked,
                "--help" | "-h" => help = true,
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        draft.mode = match mode {
            ModeKind::Random => SelectionMode::Random,
            ModeKind::Interval => SelectionMode::Interval { start, end },
            ModeKind::Review => SelectionMode::ReviewOnly,
        };

        Ok(Self {
            questions,
            db_url,
            draft,
            help,
        })
    }
}

/// Turn a bare path or `sqlite:` URL into an absolute `sqlite://` URL.
pub fn normalize_sqlite_url(raw: String) -> String {
    let raw = raw.trim();
    if raw.starts_with("sqlite://") || is_memory_url(raw) {
        return raw.to_string();
    }

    let path = Path::new(raw.strip_prefix("sqlite:").unwrap_or(raw));
    let path = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(path)
    };
    format!("sqlite://{}", path.display())
}

fn is_memory_url(url: &str) -> bool {
    url.contains(":memory:") || url.contains("mode=memory")
}

/// Create the directory the database file lives in. The store creates the
/// file itself.
pub fn ensure_db_dir(db_url: &str) -> std::io::Result<()> {
    if is_memory_url(db_url) {
        return Ok(());
    }
    let Some(path) = db_url.strip_prefix("sqlite://") else {
        return Ok(());
    };
    let path = Path::new(path.split('?').next().unwrap_or(path));
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => std::fs::create_dir_all(parent),
        _ => Ok(()),
    }
}
