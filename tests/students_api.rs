//! End-to-end tests for the students resource.

mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::*;

#[tokio::test]
async fn test_create_round_trips_birth_date() {
    let (app, _config) = test_app().await;
    let (status, body) = post(
        &app,
        "/api/v1/students/",
        json!({ "name": "Ana", "birth_date": "2000-01-15" }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["name"], "Ana");
    assert_eq!(body["birth_date"], "2000-01-15");

    let id = body["id"].as_i64().unwrap();
    let (status, fetched) = get(&app, &format!("/api/v1/students/{}/", id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, body);
}

#[tokio::test]
async fn test_birth_date_may_be_absent() {
    let (app, _config) = test_app().await;
    let (status, body) = post(&app, "/api/v1/students/", json!({ "name": "Bo" })).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["birth_date"], json!(null));
}

#[tokio::test]
async fn test_invalid_birth_date_is_a_bad_request() {
    let (app, _config) = test_app().await;
    let (status, body) = post(
        &app,
        "/api/v1/students/",
        json!({ "name": "Cy", "birth_date": "not-a-date" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "bad_request");
}

#[tokio::test]
async fn test_list_is_ordered_by_id() {
    let (app, _config) = test_app().await;
    let ids = create_students(&app, 3).await;

    let (status, body) = get(&app, "/api/v1/students/").await;
    assert_eq!(status, StatusCode::OK);
    let listed: Vec<i64> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["id"].as_i64().unwrap())
        .collect();
    assert_eq!(listed, ids);
}

#[tokio::test]
async fn test_filters_are_exact_and_conjunctive() {
    let (app, _config) = test_app().await;
    let (_, ana) = post(
        &app,
        "/api/v1/students/",
        json!({ "name": "Ana", "birth_date": "2000-01-15" }),
    )
    .await;
    post(
        &app,
        "/api/v1/students/",
        json!({ "name": "Bo", "birth_date": "2001-06-30" }),
    )
    .await;

    let (_, by_name) = get(&app, "/api/v1/students/?name=Ana").await;
    assert_eq!(by_name, json!([ana]));

    let (_, by_date) = get(&app, "/api/v1/students/?birth_date=2000-01-15").await;
    assert_eq!(by_date, json!([ana]));

    let (_, mismatch) = get(&app, "/api/v1/students/?name=Ana&birth_date=2001-06-30").await;
    assert_eq!(mismatch, json!([]));
}

#[tokio::test]
async fn test_patch_updates_only_supplied_fields() {
    let (app, _config) = test_app().await;
    let (_, created) = post(
        &app,
        "/api/v1/students/",
        json!({ "name": "Dana", "birth_date": "1999-12-31" }),
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let (status, body) = patch(
        &app,
        &format!("/api/v1/students/{}/", id),
        json!({ "name": "Dana L." }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Dana L.");
    assert_eq!(body["birth_date"], "1999-12-31");

    let (status, body) = patch(
        &app,
        &format!("/api/v1/students/{}/", id),
        json!({ "birth_date": "2000-01-01" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Dana L.");
    assert_eq!(body["birth_date"], "2000-01-01");
}

#[tokio::test]
async fn test_blank_name_is_rejected() {
    let (app, _config) = test_app().await;
    let (status, body) = post(&app, "/api/v1/students/", json!({ "name": " " })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "validation_error");
}

#[tokio::test]
async fn test_student_can_join_several_courses() {
    let (app, _config) = test_app().await;
    let id = create_student(&app, "Eve").await;
    let first = create_course(&app, "Algebra", &[id]).await;
    let second = create_course(&app, "Biology", &[id]).await;

    assert_eq!(first["students"], json!([id]));
    assert_eq!(second["students"], json!([id]));
}

#[tokio::test]
async fn test_deleting_a_student_removes_it_from_rosters() {
    let (app, _config) = test_app().await;
    let ids = create_students(&app, 2).await;
    let course = create_course(&app, "Chemistry", &ids).await;
    let course_id = course["id"].as_i64().unwrap();

    let (status, _) = delete(&app, &format!("/api/v1/students/{}/", ids[0])).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, fetched) = get(&app, &format!("/api/v1/courses/{}/", course_id)).await;
    assert_eq!(fetched["students"], json!([ids[1]]));
}

#[tokio::test]
async fn test_deleting_a_course_keeps_its_students() {
    let (app, _config) = test_app().await;
    let id = create_student(&app, "Flora").await;
    let course = create_course(&app, "Drawing", &[id]).await;
    let course_id = course["id"].as_i64().unwrap();

    let (status, _) = delete(&app, &format!("/api/v1/courses/{}/", course_id)).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = get(&app, &format!("/api/v1/students/{}/", id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Flora");
}

#[tokio::test]
async fn test_operations_on_missing_ids_are_404() {
    let (app, _config) = test_app().await;

    let (status, body) = get(&app, "/api/v1/students/42/").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "not_found");

    let (status, _) = patch(&app, "/api/v1/students/42/", json!({ "name": "X" })).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = delete(&app, "/api/v1/students/42/").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
