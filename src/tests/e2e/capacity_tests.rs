use axum::http::StatusCode;
use rstest::rstest;

use crate::shell::config::ActivitySettings;
use crate::shell::state::AppState;
use crate::tests::fixtures::http::{TestApp, app};

#[rstest]
#[tokio::test]
async fn it_should_reject_the_sign_up_that_would_overflow_capacity(#[future(awt)] app: TestApp) {
    app.add_activity("Tiny Club", 2, &["one@mergington.edu"]).await;

    let second = app.sign_up("Tiny%20Club", "two@mergington.edu").await;
    let third = app.sign_up("Tiny%20Club", "three@mergington.edu").await;

    assert_eq!(second.status, StatusCode::OK);
    assert_eq!(third.status, StatusCode::BAD_REQUEST);
    assert_eq!(third.detail(), "Activity is full");
    assert_eq!(app.participants("Tiny Club").await.len(), 2);
}

#[rstest]
#[tokio::test]
async fn it_should_report_full_before_duplicate_only_for_new_students(
    #[future(awt)] app: TestApp,
) {
    app.add_activity("Full Club", 1, &["only@mergington.edu"]).await;

    let duplicate = app.sign_up("Full%20Club", "only@mergington.edu").await;
    assert_eq!(duplicate.detail(), "Student is already signed up");

    let newcomer = app.sign_up("Full%20Club", "late@mergington.edu").await;
    assert_eq!(newcomer.detail(), "Activity is full");
}

#[rstest]
#[tokio::test]
async fn it_should_free_a_spot_on_unregister(#[future(awt)] app: TestApp) {
    app.add_activity("Swap Club", 1, &["first@mergington.edu"]).await;

    assert_eq!(
        app.sign_up("Swap%20Club", "second@mergington.edu").await.status,
        StatusCode::BAD_REQUEST
    );
    assert_eq!(
        app.unregister("Swap%20Club", "first@mergington.edu").await.status,
        StatusCode::OK
    );
    assert_eq!(
        app.sign_up("Swap%20Club", "second@mergington.edu").await.status,
        StatusCode::OK
    );
    assert_eq!(
        app.participants("Swap Club").await,
        vec!["second@mergington.edu"]
    );
}

#[rstest]
#[tokio::test]
async fn it_should_allow_unregister_then_sign_up_again(#[future(awt)] app: TestApp) {
    let email = "michael@mergington.edu";
    assert_eq!(app.unregister("Chess%20Club", email).await.status, StatusCode::OK);
    assert_eq!(app.sign_up("Chess%20Club", email).await.status, StatusCode::OK);
    assert!(app.participants("Chess Club").await.contains(&email.to_string()));
}

#[rstest]
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn it_should_not_overflow_capacity_under_concurrent_sign_ups() {
    let settings = ActivitySettings {
        max_attempts: 50,
        ..ActivitySettings::default()
    };
    let app = TestApp::new(AppState::in_memory(&settings));
    app.add_activity("Rush Club", 3, &[]).await;

    let attempts = (0..10).map(|i| {
        let app = app.clone();
        tokio::spawn(async move {
            app.sign_up("Rush%20Club", &format!("student{i}@mergington.edu"))
                .await
        })
    });
    let mut accepted = 0;
    let mut full = 0;
    for attempt in attempts.collect::<Vec<_>>() {
        let response = attempt.await.unwrap();
        match response.status {
            StatusCode::OK => accepted += 1,
            StatusCode::BAD_REQUEST => {
                assert_eq!(response.detail(), "Activity is full");
                full += 1;
            }
            other => panic!("unexpected status {other}"),
        }
    }

    assert_eq!(accepted, 3);
    assert_eq!(full, 7);
    assert_eq!(app.participants("Rush Club").await.len(), 3);
}
