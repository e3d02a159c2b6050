use axum::http::{Method, StatusCode};
use rstest::rstest;

use crate::tests::fixtures::http::{TestApp, app};

#[rstest]
#[tokio::test]
async fn it_should_return_json_from_the_listing(#[future(awt)] app: TestApp) {
    let response = app.send(Method::GET, "/activities").await;
    assert_eq!(response.content_type(), "application/json");
    assert!(response.body.is_object());
}

#[rstest]
#[tokio::test]
async fn it_should_return_a_message_object_on_success(#[future(awt)] app: TestApp) {
    let signed_up = app.sign_up("Chess%20Club", "format@mergington.edu").await;
    let unregistered = app.unregister("Chess%20Club", "format@mergington.edu").await;

    for response in [signed_up, unregistered] {
        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.content_type(), "application/json");
        let body = response.body.as_object().unwrap();
        assert_eq!(body.len(), 1);
        assert!(body["message"].is_string());
    }
}

#[rstest]
#[tokio::test]
async fn it_should_return_a_detail_object_on_error(#[future(awt)] app: TestApp) {
    let not_found = app.sign_up("Nope", "a@mergington.edu").await;
    let duplicate = app.sign_up("Chess%20Club", "michael@mergington.edu").await;
    let missing = app.send(Method::POST, "/activities/Chess%20Club/signup").await;

    for response in [not_found, duplicate, missing] {
        assert_eq!(response.content_type(), "application/json");
        let body = response.body.as_object().unwrap();
        assert_eq!(body.len(), 1);
        assert!(body["detail"].is_string());
    }
}
