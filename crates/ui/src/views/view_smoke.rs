use services::ContentLibrary;
use tema_core::model::{AttemptRecord, TopicId};
use tema_core::time::fixed_now;

use super::test_harness::{ViewKind, sample_library, setup_view_harness};

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_renders_progress_and_topics() {
    let mut harness = setup_view_harness(ViewKind::Home, sample_library());
    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;

    let html = harness.render();
    assert!(
        html.contains("Du har fullført 0 av 2 temaer."),
        "missing progress line in {html}"
    );
    assert!(html.contains("Sikkerhet i produksjonen"), "missing topic in {html}");
    assert!(html.contains("Tema 1"), "missing topic label in {html}");
    assert!(!html.contains("Fullført</span>"), "unexpected badge in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_shows_completed_badge() {
    let harness_library = sample_library();
    let mut harness = setup_view_harness(ViewKind::Home, harness_library);

    let mut record = AttemptRecord::for_task_count(2);
    record.record_success(0);
    record.record_success(1);
    record.refresh_completion(fixed_now());
    harness
        .services
        .progress
        .save_topic(&TopicId::new("1"), record)
        .await
        .expect("seed progress");

    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;

    let html = harness.render();
    assert!(
        html.contains("Du har fullført 1 av 2 temaer."),
        "missing updated progress in {html}"
    );
    assert!(html.contains("Fullført"), "missing badge in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_renders_empty_state() {
    let mut harness = setup_view_harness(ViewKind::Home, ContentLibrary::default());
    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;

    let html = harness.render();
    assert!(
        html.contains("Ingen tema er publisert ennå."),
        "missing empty state in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn topic_view_smoke_renders_tasks_and_vocabulary() {
    let mut harness = setup_view_harness(ViewKind::Topic(1), sample_library());
    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("Tema 1"), "missing position label in {html}");
    assert!(
        html.contains("Oppgave 1: Leseforståelse"),
        "missing first task heading in {html}"
    );
    assert!(
        html.contains("Oppgave 2: Fyll-inn-tomrom"),
        "missing second task heading in {html}"
    );
    assert!(html.contains("Sjekk svar"), "missing check button in {html}");
    assert!(html.contains("vernebriller"), "missing vocabulary in {html}");
    assert!(html.contains("Grammatikkfokus"), "missing grammar heading in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn topic_view_smoke_renders_not_found() {
    let mut harness = setup_view_harness(ViewKind::Topic(9), sample_library());
    harness.rebuild();
    harness.drive_async().await;

    let html = harness.render();
    assert!(
        html.contains("Temaet ble ikke funnet."),
        "missing not-found message in {html}"
    );
    assert!(!html.contains("Oppgaver"), "quiz should be skipped in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn topic_view_smoke_renders_quizless_topic() {
    let mut harness = setup_view_harness(ViewKind::Topic(2), sample_library());
    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("Montasjelinjen"), "missing topic title in {html}");
    assert!(
        html.contains("Ingen oppgaver er lagt inn for dette temaet ennå."),
        "missing quizless message in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn topic_view_smoke_resumes_retry_offer_from_storage() {
    let harness_library = sample_library();
    let mut harness = setup_view_harness(ViewKind::Topic(1), harness_library);

    // Two stored failures on the first task: retry and solution unlock.
    let mut record = AttemptRecord::for_task_count(2);
    record.record_failure(0);
    record.record_failure(0);
    harness
        .services
        .progress
        .save_topic(&TopicId::new("1"), record)
        .await
        .expect("seed progress");

    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("Prøv på nytt"), "missing retry button in {html}");
    assert!(html.contains("Vis fasit"), "missing solution button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn topic_view_smoke_hides_controls_for_solved_tasks() {
    let harness_library = sample_library();
    let mut harness = setup_view_harness(ViewKind::Topic(1), harness_library);

    let mut record = AttemptRecord::for_task_count(2);
    record.record_success(0);
    record.record_success(1);
    record.refresh_completion(fixed_now());
    harness
        .services
        .progress
        .save_topic(&TopicId::new("1"), record)
        .await
        .expect("seed progress");

    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;

    let html = harness.render();
    assert!(!html.contains("Sjekk svar"), "solved tasks keep no check button: {html}");
    assert!(html.contains("task-card--solved"), "missing solved marker in {html}");
    assert!(html.contains("width:100%"), "quiz bar should be full in {html}");
}
