mod question_vm;
mod result_vm;
mod review_vm;
mod screen_vm;
mod start_vm;
mod time_fmt;

pub use question_vm::{OptionVm, QuestionVm, StepVm, map_question};
pub use result_vm::{MistakeVm, NO_ANSWER, ResultVm, map_result};
pub use review_vm::{OptionStyle, ReviewItemVm, ReviewLineVm, ReviewVm, map_review};
pub use screen_vm::{ScreenVm, map_screen, pool_status};
pub use start_vm::{PoolStatus, StartVm, map_start};
pub use time_fmt::{format_datetime, format_remaining};
