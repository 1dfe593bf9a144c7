//! Desktop front end: view-models, screen components and the intent dispatch
//! that ties them to the quiz controller.

pub mod actions;
pub mod app;
pub mod context;
pub mod intent;
pub mod routes;
pub mod start_form;
pub mod views;
pub mod vm;

pub use app::App;
pub use context::AppContext;
pub use intent::QuizIntent;
pub use start_form::StartForm;
