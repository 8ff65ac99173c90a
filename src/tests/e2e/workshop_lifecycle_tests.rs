use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use rstest::rstest;
use serde_json::{Value, json};
use tower::ServiceExt;

use crate::shell::http::router;
use crate::tests::fixtures::state::make_test_state;

async fn call(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => request
            .header("content-type", "application/json")
            .body(Body::from(body.to_string())),
        None => request.body(Body::empty()),
    }
    .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}

#[rstest]
#[case("GET")]
#[case("POST")]
#[case("HEAD")]
#[case("DELETE")]
#[tokio::test]
async fn reports_health_on_any_method(#[case] method: &str) {
    let app = router(make_test_state());
    let (status, body) = call(&app, method, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    if method != "HEAD" {
        assert_eq!(
            body,
            json!({ "message": "Service is healthy", "service": "Workshop" })
        );
    }
}

#[tokio::test]
async fn creates_patches_fills_and_deletes_a_workshop() {
    let app = router(make_test_state());

    let (status, created) = call(
        &app,
        "POST",
        "/workshop",
        Some(json!({
            "Creator_Id": "5",
            "Title": "Knife sharpening",
            "Description": "Keep your blades keen",
            "Location": "Community hall",
            "Vacancies": 1,
            "Registration_Deadline": "2024-03-01-23:59:59.000",
            "Start_Timestamp": "2024-03-05-10:00:00.000"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let creation_timestamp = created["Creation_Timestamp"].as_str().unwrap().to_string();
    let workshop_uri = format!("/workshop/5/{creation_timestamp}");

    let (_, all) = call(&app, "GET", "/workshop", None).await;
    assert_eq!(all.as_array().unwrap().len(), 3);

    let (status, _) = call(
        &app,
        "PATCH",
        &workshop_uri,
        Some(json!({ "Location": "Room 2" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let register_uri = format!("/workshop/register/5/{creation_timestamp}");
    let withdraw_uri = format!("/workshop/withdraw/5/{creation_timestamp}");

    let (status, _) = call(&app, "PATCH", &register_uri, Some(json!({ "User_Id": "A" }))).await;
    assert_eq!(status, StatusCode::OK);
    let (status, body) =
        call(&app, "PATCH", &register_uri, Some(json!({ "User_Id": "B" }))).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "There is 0 vacancy!");

    let (_, listed) = call(&app, "GET", "/workshop/5", None).await;
    assert_eq!(listed[0]["Location"], "Room 2");
    assert_eq!(listed[0]["Attendees"], json!(["A"]));
    assert_eq!(listed[0]["Vacancies"], 0);

    let (status, _) = call(&app, "PATCH", &withdraw_uri, Some(json!({ "User_Id": "A" }))).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = call(&app, "PATCH", &register_uri, Some(json!({ "User_Id": "B" }))).await;
    assert_eq!(status, StatusCode::OK);

    let (_, listed) = call(&app, "GET", "/workshop/5", None).await;
    assert_eq!(listed[0]["Attendees"], json!(["B"]));
    assert_eq!(listed[0]["Vacancies"], 0);

    let (status, _) = call(&app, "DELETE", &workshop_uri, None).await;
    assert_eq!(status, StatusCode::OK);
    let (_, listed) = call(&app, "GET", "/workshop/5", None).await;
    assert_eq!(listed, json!([]));
    let (status, _) = call(&app, "PATCH", &register_uri, Some(json!({ "User_Id": "C" }))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn a_workshop_broken_by_a_patch_fails_to_decode() {
    let app = router(make_test_state());
    let (status, _) = call(
        &app,
        "PATCH",
        "/workshop/1/2023-11-04-03:28:10.244",
        Some(json!({ "Vacancies": "seven" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = call(&app, "GET", "/workshop", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(
        body["message"]
            .as_str()
            .unwrap()
            .starts_with("Error decoding stored workshop record: ")
    );
}
