mod common;

use common::{test_settings, tracked, FakeTracker};
use update_bot::{
    ensure_tracking_issue, update_issue_body, DriftRecord, LookupFailurePolicy, RepositoryId,
    Settings, TemplateRenderer, TrackerError,
};

const BOT: &str = "fushra-robot";

#[tokio::test]
async fn reuses_existing_issue_on_repeated_calls() {
    let tracker = FakeTracker::new(BOT).with_issue("org/browser", BOT, "upstream");
    let settings = test_settings();
    let repository = tracked("org/browser", &["trickypr"]);

    let first = ensure_tracking_issue(&tracker, &settings, &repository, "Browser")
        .await
        .unwrap();
    let second = ensure_tracking_issue(&tracker, &settings, &repository, "Browser")
        .await
        .unwrap();

    assert_eq!(first, second);
    assert_eq!(tracker.create_calls(), 0);
    assert_eq!(tracker.issues().len(), 1);
}

#[tokio::test]
async fn reuses_first_of_several_open_issues() {
    let tracker = FakeTracker::new(BOT)
        .with_issue("org/browser", BOT, "upstream")
        .with_issue("org/browser", BOT, "upstream");
    let repository = tracked("org/browser", &[]);

    let number = ensure_tracking_issue(&tracker, &test_settings(), &repository, "Browser")
        .await
        .unwrap();

    assert_eq!(number, tracker.issues()[0].number);
}

#[tokio::test]
async fn ignores_issues_from_other_creators_or_labels() {
    let tracker = FakeTracker::new(BOT)
        .with_issue("org/browser", "someone-else", "upstream")
        .with_issue("org/browser", BOT, "bug");
    let repository = tracked("org/browser", &[]);

    let number = ensure_tracking_issue(&tracker, &test_settings(), &repository, "Browser")
        .await
        .unwrap();

    assert_eq!(tracker.create_calls(), 1);
    assert_eq!(number, 3);
}

#[tokio::test]
async fn creates_single_issue_with_bot_and_assigned_users() {
    let tracker = FakeTracker::new(BOT);
    let repository = tracked("org/browser", &["trickypr", BOT, "pressjump", "trickypr"]);

    let number = ensure_tracking_issue(&tracker, &test_settings(), &repository, "Pulse Browser")
        .await
        .unwrap();

    let issues = tracker.issues();
    assert_eq!(tracker.create_calls(), 1);
    assert_eq!(issues.len(), 1);

    let issue = &issues[0];
    assert_eq!(issue.number, number);
    assert_eq!(issue.title, "❗ Pulse Browser has out of date dependencies");
    assert_eq!(issue.labels, vec!["upstream"]);
    assert_eq!(issue.assignees, vec![BOT, "trickypr", "pressjump"]);
    assert!(issue.body.is_empty());
}

#[tokio::test]
async fn lookup_failure_aborts_by_default() {
    let tracker = FakeTracker::new(BOT).failing_lookup();
    let repository = tracked("org/browser", &[]);

    let result = ensure_tracking_issue(&tracker, &test_settings(), &repository, "Browser").await;

    assert!(matches!(result, Err(TrackerError::Rejected { .. })));
    assert_eq!(tracker.create_calls(), 0);
}

#[tokio::test]
async fn lookup_failure_creates_issue_when_configured() {
    let tracker = FakeTracker::new(BOT).failing_lookup();
    let repository = tracked("org/browser", &[]);
    let settings = Settings {
        lookup_failure: LookupFailurePolicy::Create,
        ..test_settings()
    };

    let number = ensure_tracking_issue(&tracker, &settings, &repository, "Browser")
        .await
        .unwrap();

    assert_eq!(tracker.create_calls(), 1);
    assert_eq!(tracker.issues()[0].number, number);
}

#[tokio::test]
async fn update_replaces_whole_body() {
    let tracker = FakeTracker::new(BOT).with_issue("org/browser", BOT, "upstream");
    let renderer = TemplateRenderer::new();
    let repo: RepositoryId = "org/browser".parse().unwrap();

    update_issue_body(
        &tracker,
        &renderer,
        &repo,
        1,
        &[DriftRecord::new("firefox", "119.0", "120.0")],
    )
    .await
    .unwrap();
    update_issue_body(
        &tracker,
        &renderer,
        &repo,
        1,
        &[
            DriftRecord::new("firefox", "120.0", "121.0"),
            DriftRecord::new("ublock", "1.2", "1.3"),
        ],
    )
    .await
    .unwrap();

    assert_eq!(
        tracker.issues()[0].body,
        "## Outdated Dependencies\n\
         - firefox: 120.0 → 121.0\n\
         - ublock: 1.2 → 1.3\n\
         \n\
         You can opt in or out of these requests by creating a pull request to the \
         [update bot repository](https://github.com/pulse-browser/update-bot/blob/main/repos.json)"
    );
    assert_eq!(tracker.update_calls(), 2);
}

#[tokio::test]
async fn update_failure_is_reported() {
    let tracker = FakeTracker::new(BOT);
    let renderer = TemplateRenderer::new();
    let repo: RepositoryId = "org/browser".parse().unwrap();

    let result = update_issue_body(
        &tracker,
        &renderer,
        &repo,
        42,
        &[DriftRecord::new("firefox", "1", "2")],
    )
    .await;

    assert!(result.is_err());
}
