use axum::http::{Method, StatusCode};
use rstest::rstest;

use crate::tests::fixtures::http::{TestApp, app};

#[rstest]
#[tokio::test]
async fn it_should_handle_special_characters_in_activity_names(#[future(awt)] app: TestApp) {
    app.add_activity("Art & Design Club", 10, &[]).await;

    let response = app
        .sign_up("Art%20%26%20Design%20Club", "test@mergington.edu")
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.message(),
        "Signed up test@mergington.edu for Art & Design Club"
    );
    assert_eq!(
        app.participants("Art & Design Club").await,
        vec!["test@mergington.edu"]
    );
}

#[rstest]
#[case("first.last@mergington.edu")]
#[case("student123@mergington.edu")]
#[case("test+tag@mergington.edu")]
#[case("test%2Btag@mergington.edu")]
#[case("test_user@mergington.edu")]
#[tokio::test]
async fn it_should_accept_common_email_formats(#[future(awt)] app: TestApp, #[case] email: &str) {
    let response = app.sign_up("Chess%20Club", email).await;
    assert_eq!(response.status, StatusCode::OK, "{email}");
}

#[rstest]
#[tokio::test]
async fn it_should_keep_a_literal_plus_in_the_email(#[future(awt)] app: TestApp) {
    let signed_up = app.sign_up("Chess%20Club", "test+tag@mergington.edu").await;

    assert_eq!(signed_up.status, StatusCode::OK);
    assert_eq!(
        signed_up.message(),
        "Signed up test+tag@mergington.edu for Chess Club"
    );
    assert!(
        app.participants("Chess Club")
            .await
            .contains(&"test+tag@mergington.edu".to_string())
    );

    let unregistered = app.unregister("Chess%20Club", "test+tag@mergington.edu").await;
    assert_eq!(unregistered.status, StatusCode::OK);
    assert_eq!(
        unregistered.message(),
        "Unregistered test+tag@mergington.edu from Chess Club"
    );
}

#[rstest]
#[tokio::test]
async fn it_should_reject_an_empty_email(#[future(awt)] app: TestApp) {
    let response = app.sign_up("Chess%20Club", "").await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.detail(), "Email is required");
}

#[rstest]
#[tokio::test]
async fn it_should_reject_a_missing_email_parameter(#[future(awt)] app: TestApp) {
    let sign_up = app.send(Method::POST, "/activities/Chess%20Club/signup").await;
    let unregister = app
        .send(Method::DELETE, "/activities/Chess%20Club/unregister")
        .await;

    assert_eq!(sign_up.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(unregister.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(sign_up.detail(), "Missing required query parameter: email");
}

#[rstest]
#[tokio::test]
async fn it_should_treat_activity_names_case_sensitively(#[future(awt)] app: TestApp) {
    let response = app.sign_up("chess%20club", "case@mergington.edu").await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[rstest]
#[tokio::test]
async fn it_should_trim_whitespace_around_the_email(#[future(awt)] app: TestApp) {
    let response = app
        .sign_up("Chess%20Club", "%20spaced@mergington.edu%20")
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(
        app.participants("Chess Club")
            .await
            .contains(&"spaced@mergington.edu".to_string())
    );
}

#[rstest]
#[tokio::test]
async fn it_should_reject_the_wrong_method(#[future(awt)] app: TestApp) {
    let response = app
        .send(Method::GET, "/activities/Chess%20Club/signup?email=a@mergington.edu")
        .await;
    assert_eq!(response.status, StatusCode::METHOD_NOT_ALLOWED);
}
