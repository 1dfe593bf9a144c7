use quiz_core::model::{ModeKind, OptionLabel, QuestionId};

use crate::start_form::StartForm;

use super::test_harness::{
    question, setup_loading_harness, setup_view_harness, setup_view_harness_with_marks,
};

#[tokio::test(flavor = "current_thread")]
async fn start_view_shows_settings_and_review_hint() {
    let harness = setup_view_harness_with_marks(20, "[1,2,3]").await;
    let mut form = StartForm::default();
    form.mode = ModeKind::Interval;
    form.range = (QuestionId::new(5), QuestionId::new(25));

    let mut view = harness.mount(form);
    view.rebuild();
    let html = view.render();
    assert!(html.contains("20 questions loaded"), "missing pool size in {html}");
    assert!(html.contains("interval 5-25"), "missing interval in {html}");
    assert!(html.contains("10 min (10:00)"), "missing timer in {html}");
    assert!(html.contains("3 marked for review"), "missing review hint in {html}");
    assert!(html.contains("quiz-range-start"), "missing range inputs in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn start_view_updates_when_the_pool_arrives() {
    let harness = setup_loading_harness();
    let mut form = StartForm::default();
    form.minutes = 0;

    let mut view = harness.mount(form);
    view.rebuild();
    let html = view.render();
    assert!(html.contains("Loading questions"), "missing loading state in {html}");
    assert!(html.contains("off"), "missing disabled timer in {html}");
    assert!(!html.contains("marked for review"), "unexpected review hint in {html}");
    assert!(!html.contains("quiz-range-start"), "unexpected range inputs in {html}");

    view.finish_pool_load((1..=3).map(question).collect());
    view.drive_async().await;
    view.drive_async().await;
    let html = view.render();
    assert!(html.contains("3 questions loaded"), "pool not applied in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn question_view_follows_the_countdown() {
    let mut harness = setup_view_harness(3);
    harness.start_interval(1, 3, 1).await;
    harness.quiz.answer_current(OptionLabel::B).unwrap();
    let token = harness.quiz.session().unwrap().token();

    let mut view = harness.mount(StartForm::default());
    view.rebuild();
    let html = view.render();
    assert!(html.contains("Question 1 of 3"), "missing header in {html}");
    assert!(html.contains("1. Prompt 1"), "missing prompt in {html}");
    assert!(html.contains("B) beta 1"), "missing option in {html}");
    assert!(html.contains("Your answer: B"), "missing selection in {html}");
    assert!(html.contains("Time left: 1:00"), "missing timer in {html}");

    view.send_tick(token);
    view.drive_async().await;
    view.drive_async().await;
    let html = view.render();
    assert!(html.contains("Time left: 0:59"), "tick not applied in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn countdown_expiry_switches_to_the_result() {
    let mut harness = setup_view_harness(2);
    harness.start_interval(1, 2, 1).await;
    let token = harness.countdown.armed()[0];

    let mut view = harness.mount(StartForm::default());
    view.rebuild();
    for _ in 0..60 {
        view.send_tick(token);
    }
    view.drive_async().await;
    view.drive_async().await;
    let html = view.render();
    assert!(html.contains("Time is up!"), "missing expiry headline in {html}");
    assert!(html.contains("You answered 0 of 2"), "missing score in {html}");

    view.send_tick(token);
    view.drive_async().await;
    let quiz = view.context.quiz();
    let quiz = quiz.lock().await;
    assert!(quiz.session().unwrap().is_complete());
}

#[tokio::test(flavor = "current_thread")]
async fn result_view_lists_mistakes_with_no_answer_sentinel() {
    let mut harness = setup_view_harness(3);
    harness.start_interval(1, 3, 0).await;
    harness.quiz.answer(0, OptionLabel::A).unwrap();
    harness.quiz.answer(1, OptionLabel::C).unwrap();
    harness.quiz.finish().unwrap();

    let mut view = harness.mount(StartForm::default());
    view.rebuild();
    let html = view.render();
    assert!(html.contains("You answered 1 of 3 questions correctly."), "missing score in {html}");
    assert!(html.contains("Score: 33%"), "missing percentage in {html}");
    assert!(html.contains("Your answer: C) gamma 2"), "missing wrong choice in {html}");
    assert!(html.contains("Your answer: no answer"), "missing sentinel in {html}");
    assert!(html.contains("Correct: A) alpha 3"), "missing correct option in {html}");
    assert!(html.contains("Review answers"), "missing review action in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn empty_result_view_offers_a_new_quiz() {
    let mut harness = setup_view_harness(3);
    harness.start_interval(50, 60, 10).await;
    assert!(harness.countdown.armed().is_empty());

    let mut view = harness.mount(StartForm::default());
    view.rebuild();
    let html = view.render();
    assert!(html.contains("No questions matched"), "missing empty headline in {html}");
    assert!(!html.contains("Score"), "unexpected score in {html}");
    assert!(!html.contains("Review answers"), "unexpected review action in {html}");
    assert!(html.contains("New quiz"), "missing restart action in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn review_view_shows_styles_and_marks() {
    let mut harness = setup_view_harness(2);
    harness.start_interval(1, 2, 0).await;
    harness.quiz.answer(0, OptionLabel::B).unwrap();
    harness.quiz.finish().unwrap();
    harness.quiz.review().unwrap();
    harness.quiz.toggle_mark(QuestionId::new(1)).await.unwrap();

    let mut view = harness.mount(StartForm::default());
    view.rebuild();
    let html = view.render();
    assert!(html.contains("1. Prompt 1"), "missing title in {html}");
    assert!(html.contains("A) alpha 1"), "missing option in {html}");
    assert!(html.contains("quiz-review__option--correct"), "missing correct style in {html}");
    assert!(html.contains("quiz-review__option--wrong"), "missing wrong style in {html}");
    assert!(html.contains("(your answer)"), "missing choice note in {html}");
    assert!(html.contains("Marked for review"), "missing mark on 1 in {html}");
    assert!(html.contains("Mark for review"), "missing unmarked 2 in {html}");
}
