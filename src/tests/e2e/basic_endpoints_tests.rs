use axum::http::{Method, StatusCode};
use rstest::rstest;

use crate::tests::fixtures::http::{TestApp, app};

#[rstest]
#[tokio::test]
async fn it_should_redirect_the_root_to_the_static_index(#[future(awt)] app: TestApp) {
    let response = app.send(Method::GET, "/").await;

    assert_eq!(response.status, StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(
        response.headers.get("location").unwrap(),
        "/static/index.html"
    );
}

#[rstest]
#[tokio::test]
async fn it_should_serve_the_static_front_end(#[future(awt)] app: TestApp) {
    let response = app.send(Method::GET, "/static/index.html").await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.content_type().starts_with("text/html"));
}

#[rstest]
#[tokio::test]
async fn it_should_list_every_seeded_activity(#[future(awt)] app: TestApp) {
    let response = app.send(Method::GET, "/activities").await;

    assert_eq!(response.status, StatusCode::OK);
    let activities = response.body.as_object().unwrap();
    assert_eq!(activities.len(), 9);
    for name in ["Chess Club", "Programming Class", "Gym Class", "Debate Team"] {
        assert!(activities.contains_key(name), "missing {name}");
    }
}

#[rstest]
#[tokio::test]
async fn it_should_describe_each_activity_with_all_fields(#[future(awt)] app: TestApp) {
    let activities = app.activities().await;

    for (name, details) in activities.as_object().unwrap() {
        assert!(details["description"].is_string(), "{name} description");
        assert!(details["schedule"].is_string(), "{name} schedule");
        assert!(details["max_participants"].is_u64(), "{name} max_participants");
        assert!(details["participants"].is_array(), "{name} participants");
    }
}

#[rstest]
#[tokio::test]
async fn it_should_answer_unknown_routes_with_404(#[future(awt)] app: TestApp) {
    let response = app.send(Method::GET, "/does-not-exist").await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
