use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{QuizController, ReviewMarkService, TokioCountdown, spawn_pool_load};
use storage::repository::Storage;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use ui::{App, AppContext, StartForm};

mod args;

use args::{Args, ensure_db_dir, print_usage};

fn init_tracing() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let parsed = Args::parse(std::env::args().skip(1), |key| std::env::var(key).ok())
        .map_err(|e| {
            eprintln!("{e}");
            print_usage();
            e
        })?;
    if parsed.help {
        print_usage();
        return Ok(());
    }
    parsed.draft.validate()?;

    init_tracing();

    // Open + migrate SQLite before the window opens.
    ensure_db_dir(&parsed.db_url)?;
    let storage = Storage::sqlite(&parsed.db_url).await?;

    let (countdown, ticks) = TokioCountdown::channel();
    let marks = ReviewMarkService::new(Arc::clone(&storage.kv));
    let mut quiz = QuizController::new(marks, Arc::new(countdown));
    quiz.refresh_marks().await?;

    tracing::info!(path = %parsed.questions.display(), db = %parsed.db_url, "loading questions");
    let pool = spawn_pool_load(parsed.questions);

    let context = AppContext::new(quiz, StartForm::from_draft(parsed.draft), ticks, pool);

    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Quiz")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
