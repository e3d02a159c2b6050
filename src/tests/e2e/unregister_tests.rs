use axum::http::StatusCode;
use rstest::rstest;

use crate::tests::fixtures::http::{TestApp, app};

#[rstest]
#[tokio::test]
async fn it_should_unregister_a_registered_student(#[future(awt)] app: TestApp) {
    let response = app.unregister("Chess%20Club", "michael@mergington.edu").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.message(),
        "Unregistered michael@mergington.edu from Chess Club"
    );
    assert!(
        !app.participants("Chess Club")
            .await
            .contains(&"michael@mergington.edu".to_string())
    );
}

#[rstest]
#[tokio::test]
async fn it_should_reject_unregistering_a_student_who_is_not_signed_up(
    #[future(awt)] app: TestApp,
) {
    let response = app.unregister("Chess%20Club", "notregistered@mergington.edu").await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.detail().contains("not signed up"));
}

#[rstest]
#[tokio::test]
async fn it_should_return_404_when_unregistering_from_an_unknown_activity(
    #[future(awt)] app: TestApp,
) {
    let response = app
        .unregister("Nonexistent%20Activity", "student@mergington.edu")
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.detail(), "Activity not found");
}

#[rstest]
#[tokio::test]
async fn it_should_reject_unregistering_twice(#[future(awt)] app: TestApp) {
    let first = app.unregister("Chess%20Club", "daniel@mergington.edu").await;
    let second = app.unregister("Chess%20Club", "daniel@mergington.edu").await;

    assert_eq!(first.status, StatusCode::OK);
    assert_eq!(second.status, StatusCode::BAD_REQUEST);
    assert_eq!(second.detail(), "Student is not signed up for this activity");
}
