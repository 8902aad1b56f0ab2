mod common;

use axum::body::Body;
use common::{delete, get, post, put, read, test_app};
use http::{Request, StatusCode, header};
use serde_json::json;
use tower::ServiceExt;

#[tokio::test]
async fn test_home_greeting() {
    let app = test_app().await;
    let (status, body) = get(&app, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!("Welcome to the Fitness Center DB!!"));
}

#[tokio::test]
async fn test_health_check() {
    let app = test_app().await;
    let (status, body) = get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_create_then_list() {
    let app = test_app().await;

    let (status, body) = post(&app, "/members", json!({ "id": 1, "name": "Alex", "age": 30 })).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!({ "message": "New member added successfully" }));

    let (status, body) = get(&app, "/members").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([{ "id": 1, "name": "Alex", "age": 30 }]));
}

#[tokio::test]
async fn test_list_empty_table() {
    let app = test_app().await;
    let (status, body) = get(&app, "/members").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_create_without_age() {
    let app = test_app().await;
    let (status, _) = post(&app, "/members", json!({ "id": 4, "name": "Kim" })).await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, body) = get(&app, "/members").await;
    assert_eq!(body, json!([{ "id": 4, "name": "Kim", "age": null }]));
}

#[tokio::test]
async fn test_negative_age_accepted() {
    let app = test_app().await;
    let (status, _) = post(&app, "/members", json!({ "id": 1, "name": "A", "age": -5 })).await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, body) = get(&app, "/members").await;
    assert_eq!(body, json!([{ "id": 1, "name": "A", "age": -5 }]));
}

#[tokio::test]
async fn test_age_outside_column_rejected() {
    let app = test_app().await;
    let (status, body) = post(&app, "/members", json!({ "id": 1, "name": "A", "age": -10_000_000 })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({ "age": ["Must be greater than or equal to -9999999 and less than or equal to 99999999."] })
    );
}

#[tokio::test]
async fn test_duplicate_id_conflicts() {
    let app = test_app().await;
    post(&app, "/members", json!({ "id": 1, "name": "Alex", "age": 30 })).await;

    let (status, body) = post(&app, "/members", json!({ "id": 1, "name": "Imposter" })).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "E0004");
    assert_eq!(body["message"], "Member 1 already exists");

    let (_, body) = get(&app, "/members").await;
    assert_eq!(body, json!([{ "id": 1, "name": "Alex", "age": 30 }]));
}

#[tokio::test]
async fn test_missing_name_rejected() {
    let app = test_app().await;

    let (status, body) = post(&app, "/members", json!({ "id": 1, "age": 30 })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "name": ["Missing data for required field."] }));

    post(&app, "/members", json!({ "id": 2, "name": "Sam" })).await;
    let (status, body) = put(&app, "/members/2", json!({ "id": 2 })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "name": ["Missing data for required field."] }));
}

#[tokio::test]
async fn test_wrong_types_reported_per_field() {
    let app = test_app().await;
    let (status, body) = post(
        &app,
        "/members",
        json!({ "id": "abc", "name": ["x"], "age": true, "email": "a@b.c" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({
            "age": ["Not a valid integer."],
            "email": ["Unknown field."],
            "id": ["Not a valid integer."],
            "name": ["Not a valid string."]
        })
    );
}

#[tokio::test]
async fn test_unreadable_body_rejected() {
    let app = test_app().await;

    let request = Request::builder()
        .method("POST")
        .uri("/members")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let (status, body) = read(&app, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "_schema": ["Invalid input type."] }));

    let (status, body) = post(&app, "/members", json!([1, 2])).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "_schema": ["Invalid input type."] }));
}

#[tokio::test]
async fn test_update_missing_member_is_404() {
    let app = test_app().await;
    post(&app, "/members", json!({ "id": 1, "name": "Alex", "age": 30 })).await;

    let (status, body) = put(&app, "/members/9", json!({ "id": 9, "name": "Nobody" })).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Member 9 not found");

    let (_, body) = get(&app, "/members").await;
    assert_eq!(body, json!([{ "id": 1, "name": "Alex", "age": 30 }]));
}

#[tokio::test]
async fn test_update_missing_member_checked_before_body() {
    let app = test_app().await;
    let (status, _) = put(&app, "/members/9", json!({})).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_replaces_fields_and_id() {
    let app = test_app().await;
    post(&app, "/members", json!({ "id": 1, "name": "Alex", "age": 30 })).await;

    let (status, body) = put(&app, "/members/1", json!({ "id": 5, "name": "Alexandra", "age": 31 })).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!({ "message": "Member updated successfully" }));

    let (_, body) = get(&app, "/members").await;
    assert_eq!(body, json!([{ "id": 5, "name": "Alexandra", "age": 31 }]));
}

#[tokio::test]
async fn test_update_onto_taken_id_conflicts() {
    let app = test_app().await;
    post(&app, "/members", json!({ "id": 1, "name": "A" })).await;
    post(&app, "/members", json!({ "id": 2, "name": "B" })).await;

    let (status, _) = put(&app, "/members/1", json!({ "id": 2, "name": "A" })).await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_delete_twice() {
    let app = test_app().await;
    post(&app, "/members", json!({ "id": 1, "name": "Alex" })).await;
    post(&app, "/members", json!({ "id": 2, "name": "Sam" })).await;

    let (status, body) = delete(&app, "/members/1").await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!({ "message": "Member deleted successfully" }));

    let (_, body) = get(&app, "/members").await;
    assert_eq!(body, json!([{ "id": 2, "name": "Sam", "age": null }]));

    let (status, _) = delete(&app, "/members/1").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_member_with_sessions_conflicts() {
    let app = test_app().await;
    post(&app, "/members", json!({ "id": 1, "name": "Alex" })).await;
    post(&app, "/workouts", json!({ "session_id": 1, "member_id": 1 })).await;

    let (status, body) = delete(&app, "/members/1").await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(
        body["message"],
        "Member 1 has workout sessions and cannot be deleted"
    );

    let (_, body) = get(&app, "/members").await;
    assert_eq!(body.as_array().map(Vec::len), Some(1));
}

#[tokio::test]
async fn test_id_change_of_member_with_sessions_conflicts() {
    let app = test_app().await;
    post(&app, "/members", json!({ "id": 1, "name": "Alex" })).await;
    post(&app, "/workouts", json!({ "session_id": 1, "member_id": 1 })).await;

    let (status, body) = put(&app, "/members/1", json!({ "id": 7, "name": "Alex" })).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "E0004");
    assert_eq!(
        body["message"],
        "Member 1 has workout sessions; its id cannot change"
    );

    let (_, body) = get(&app, "/members").await;
    assert_eq!(body, json!([{ "id": 1, "name": "Alex", "age": null }]));

    let (status, _) = put(&app, "/members/1", json!({ "id": 1, "name": "Alexis" })).await;
    assert_eq!(status, StatusCode::CREATED);
}

#[tokio::test]
async fn test_non_integer_path_id_is_json_404() {
    let app = test_app().await;

    let (status, body) = put(&app, "/members/abc", json!({ "id": 1, "name": "A" })).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "code": "E0003", "message": "Resource not found" }));

    let (status, body) = delete(&app, "/members/abc").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "E0003");
}

#[tokio::test]
async fn test_request_id_propagated() {
    let app = test_app().await;
    let request = Request::builder().uri("/members").body(Body::empty()).unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert!(response.headers().contains_key("x-request-id"));
}
