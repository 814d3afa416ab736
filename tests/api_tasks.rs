//! Task API integration tests
//!
//! Ownership is the property under test here: every mutation and read
//! is scoped to the signed-in user, and a task that exists but belongs
//! to someone else is indistinguishable from one that never existed.
//! `#[ignore]`d like the auth suite; run with `cargo test -- --ignored`.

mod common;

use axum::http::StatusCode;
use axum::Router;
use pretty_assertions::assert_eq;
use serial_test::serial;
use tower::ServiceExt;
use uuid::Uuid;

use common::{
    body_json, extract_session_cookie, get, json_request, test_app_with_pool, test_app_with_state,
    test_database_url, unique_email, TestDatabase, TEST_SECRET,
};

/// Registers a fresh user and returns their session cookie.
async fn signup(app: &Router, name: &str) -> String {
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/auth/signup",
            serde_json::json!({"name": name, "email": unique_email(), "password": "password123"}),
            None,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    extract_session_cookie(&response)
}

/// Creates a task for the given session and returns its JSON body.
async fn create_task(app: &Router, cookie: &str, title: &str) -> serde_json::Value {
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/tasks",
            serde_json::json!({"title": title}),
            Some(cookie),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await
}

#[tokio::test]
#[serial]
#[ignore = "requires a live PostgreSQL instance"]
async fn create_applies_defaults() {
    let db = TestDatabase::new().await;
    let app = test_app_with_pool(db.pool().clone());
    let cookie = signup(&app, "Ada").await;

    let task = create_task(&app, &cookie, "Water the plants").await;
    assert_eq!(task["title"], "Water the plants");
    assert_eq!(task["category"], "personal");
    assert_eq!(task["completed"], false);
    assert!(task["description"].is_null());
    assert!(task["id"].as_str().is_some());
}

#[tokio::test]
#[serial]
#[ignore = "requires a live PostgreSQL instance"]
async fn list_orders_newest_first() {
    let db = TestDatabase::new().await;
    let app = test_app_with_pool(db.pool().clone());
    let cookie = signup(&app, "Ada").await;

    create_task(&app, &cookie, "first").await;
    create_task(&app, &cookie, "second").await;
    create_task(&app, &cookie, "third").await;

    let response = app.oneshot(get("/api/tasks", Some(&cookie))).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let tasks = body_json(response).await;
    let titles: Vec<&str> = tasks
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["third", "second", "first"]);
}

#[tokio::test]
#[serial]
#[ignore = "requires a live PostgreSQL instance"]
async fn update_rewrites_the_row() {
    let db = TestDatabase::new().await;
    let app = test_app_with_pool(db.pool().clone());
    let cookie = signup(&app, "Ada").await;

    let task = create_task(&app, &cookie, "Draft report").await;
    let id = task["id"].as_str().unwrap();

    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            &format!("/api/tasks/{id}"),
            serde_json::json!({
                "title": "Finish report",
                "description": "Add the Q3 numbers",
                "category": "work",
                "completed": true
            }),
            Some(&cookie),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await;
    assert_eq!(updated["id"], task["id"]);
    assert_eq!(updated["title"], "Finish report");
    assert_eq!(updated["description"], "Add the Q3 numbers");
    assert_eq!(updated["category"], "work");
    assert_eq!(updated["completed"], true);
    assert_eq!(updated["created_at"], task["created_at"]);
    assert_ne!(updated["updated_at"], task["updated_at"]);
}

#[tokio::test]
#[serial]
#[ignore = "requires a live PostgreSQL instance"]
async fn status_toggles_without_touching_content() {
    let db = TestDatabase::new().await;
    let app = test_app_with_pool(db.pool().clone());
    let cookie = signup(&app, "Ada").await;

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/tasks",
            serde_json::json!({
                "title": "Call the bank",
                "description": "Ask about the standing order",
                "category": "errands"
            }),
            Some(&cookie),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let task = body_json(response).await;
    let id = task["id"].as_str().unwrap();

    // The toggle flips the flag and bumps updated_at; everything else
    // stays exactly as created.
    let response = app
        .clone()
        .oneshot(json_request(
            "PATCH",
            &format!("/api/tasks/{id}/status"),
            serde_json::json!({"completed": true}),
            Some(&cookie),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let done = body_json(response).await;
    assert_eq!(done["completed"], true);
    assert_eq!(done["title"], "Call the bank");
    assert_eq!(done["description"], "Ask about the standing order");
    assert_eq!(done["category"], "errands");
    assert_eq!(done["created_at"], task["created_at"]);
    assert_ne!(done["updated_at"], task["updated_at"]);

    let response = app
        .oneshot(json_request(
            "PATCH",
            &format!("/api/tasks/{id}/status"),
            serde_json::json!({"completed": false}),
            Some(&cookie),
        ))
        .await
        .unwrap();
    let undone = body_json(response).await;
    assert_eq!(undone["completed"], false);
    assert_ne!(undone["updated_at"], done["updated_at"]);
}

#[tokio::test]
#[serial]
#[ignore = "requires a live PostgreSQL instance"]
async fn tasks_are_invisible_across_owners() {
    let db = TestDatabase::new().await;
    let app = test_app_with_pool(db.pool().clone());
    let ada = signup(&app, "Ada").await;
    let briar = signup(&app, "Briar").await;

    let task = create_task(&app, &ada, "Ada's secret errand").await;
    let id = task["id"].as_str().unwrap();

    // Briar's list does not contain it.
    let response = app.clone().oneshot(get("/api/tasks", Some(&briar))).await.unwrap();
    let tasks = body_json(response).await;
    assert_eq!(tasks.as_array().unwrap().len(), 0);

    // Briar cannot update, toggle, or delete it, and gets the same
    // answer an entirely unknown id would produce.
    let update = app
        .clone()
        .oneshot(json_request(
            "PUT",
            &format!("/api/tasks/{id}"),
            serde_json::json!({"title": "hijacked", "category": "work", "completed": false}),
            Some(&briar),
        ))
        .await
        .unwrap();
    assert_eq!(update.status(), StatusCode::NOT_FOUND);
    let foreign_body = body_json(update).await;
    assert_eq!(foreign_body["error"], "Task not found or unauthorized");

    let unknown = app
        .clone()
        .oneshot(json_request(
            "PUT",
            &format!("/api/tasks/{}", Uuid::new_v4()),
            serde_json::json!({"title": "hijacked", "category": "work", "completed": false}),
            Some(&briar),
        ))
        .await
        .unwrap();
    assert_eq!(unknown.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(unknown).await, foreign_body);

    let toggle = app
        .clone()
        .oneshot(json_request(
            "PATCH",
            &format!("/api/tasks/{id}/status"),
            serde_json::json!({"completed": true}),
            Some(&briar),
        ))
        .await
        .unwrap();
    assert_eq!(toggle.status(), StatusCode::NOT_FOUND);

    let delete = app
        .clone()
        .oneshot(json_request(
            "DELETE",
            &format!("/api/tasks/{id}"),
            serde_json::json!({}),
            Some(&briar),
        ))
        .await
        .unwrap();
    assert_eq!(delete.status(), StatusCode::NOT_FOUND);

    // Ada's task survives the whole assault untouched.
    let response = app.oneshot(get("/api/tasks", Some(&ada))).await.unwrap();
    let tasks = body_json(response).await;
    assert_eq!(tasks[0]["title"], "Ada's secret errand");
    assert_eq!(tasks[0]["completed"], false);
}

#[tokio::test]
#[serial]
#[ignore = "requires a live PostgreSQL instance"]
async fn delete_removes_exactly_once() {
    let db = TestDatabase::new().await;
    let app = test_app_with_pool(db.pool().clone());
    let cookie = signup(&app, "Ada").await;

    let task = create_task(&app, &cookie, "One-shot chore").await;
    let id = task["id"].as_str().unwrap();

    let response = app
        .clone()
        .oneshot(json_request(
            "DELETE",
            &format!("/api/tasks/{id}"),
            serde_json::json!({}),
            Some(&cookie),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app
        .clone()
        .oneshot(json_request(
            "DELETE",
            &format!("/api/tasks/{id}"),
            serde_json::json!({}),
            Some(&cookie),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app.oneshot(get("/api/tasks", Some(&cookie))).await.unwrap();
    let tasks = body_json(response).await;
    assert_eq!(tasks.as_array().unwrap().len(), 0);
}

#[tokio::test]
#[serial]
#[ignore = "requires a live PostgreSQL instance"]
async fn successful_mutations_announce_the_owner() {
    use tokio::sync::broadcast::error::TryRecvError;

    let db = TestDatabase::new().await;
    let (app, state) = test_app_with_state(db.pool().clone());
    let cookie = signup(&app, "Ada").await;

    let response = app
        .clone()
        .oneshot(get("/api/auth/me", Some(&cookie)))
        .await
        .unwrap();
    let me = body_json(response).await;
    let caller: Uuid = me["id"].as_str().unwrap().parse().unwrap();

    let mut refreshes = state.refresh.subscribe();

    // Create, update, toggle, delete: one announcement each, all naming
    // the caller.
    let task = create_task(&app, &cookie, "Hang the shelves").await;
    let id = task["id"].as_str().unwrap();
    assert_eq!(refreshes.recv().await.unwrap(), caller);

    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            &format!("/api/tasks/{id}"),
            serde_json::json!({"title": "Hang the shelves", "category": "home", "completed": false}),
            Some(&cookie),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(refreshes.recv().await.unwrap(), caller);

    let response = app
        .clone()
        .oneshot(json_request(
            "PATCH",
            &format!("/api/tasks/{id}/status"),
            serde_json::json!({"completed": true}),
            Some(&cookie),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(refreshes.recv().await.unwrap(), caller);

    let response = app
        .clone()
        .oneshot(json_request(
            "DELETE",
            &format!("/api/tasks/{id}"),
            serde_json::json!({}),
            Some(&cookie),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert_eq!(refreshes.recv().await.unwrap(), caller);

    // A mutation that changes nothing announces nothing.
    let response = app
        .clone()
        .oneshot(json_request(
            "DELETE",
            &format!("/api/tasks/{}", Uuid::new_v4()),
            serde_json::json!({}),
            Some(&cookie),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(refreshes.try_recv().unwrap_err(), TryRecvError::Empty);
}

#[tokio::test]
#[serial]
#[ignore = "requires a live PostgreSQL instance"]
async fn store_statements_are_cut_short() {
    use taskdeck::server::config::AppConfig;
    use taskdeck::server::state::AppState;

    // Same database as the other tests, but through a pool built the
    // way the server builds it, statement timeout included.
    let config = AppConfig {
        database_url: test_database_url(),
        jwt_secret: TEST_SECRET.to_string(),
        port: 0,
        production: false,
    };
    let state = AppState::from_config(&config).unwrap();

    let err = sqlx::query("SELECT pg_sleep(30)")
        .execute(&state.db_pool)
        .await
        .expect_err("a 30-second statement must not run to completion");
    assert!(err.to_string().contains("statement timeout"), "{err}");
}
