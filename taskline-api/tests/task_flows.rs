/// End-to-end tests for the task and account flows
///
/// These tests verify the behavior that only shows up with real persistence:
/// email uniqueness, ownership enforcement across users, list filtering and
/// search, and delete semantics. They require a running PostgreSQL database
/// and are skipped when DATABASE_URL is not set (see common/mod.rs).

mod common;

use axum::http::StatusCode;
use common::TestContext;
use serde_json::json;
use taskline_shared::models::task::Task;

#[tokio::test]
async fn test_duplicate_registration_rejected() {
    let Some(mut ctx) = TestContext::new().await.unwrap() else {
        return;
    };

    let (_, _, email) = ctx.register_user("Ann").await;

    // Same email again, different casing and padding
    let (status, json) = ctx
        .request(
            "POST",
            "/api/auth/register",
            None,
            Some(json!({
                "name": "Imposter",
                "email": format!("  {}  ", email.to_uppercase()),
                "password": "another-password",
            })),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "User with this email already exists");

    // The original account is untouched: its password still logs in
    let (status, json) = ctx
        .request(
            "POST",
            "/api/auth/login",
            None,
            Some(json!({ "email": email, "password": common::PASSWORD })),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["message"], "Login successful");

    ctx.cleanup().await.unwrap();
}

#[tokio::test]
async fn test_task_defaults_to_pending_and_lists() {
    let Some(mut ctx) = TestContext::new().await.unwrap() else {
        return;
    };

    let (token, _, _) = ctx.register_user("Ben").await;

    ctx.create_task(&token, "Water the plants", "Both pots on the balcony", None)
        .await;

    let (status, json) = ctx.request("GET", "/api/tasks", Some(&token), None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["count"], 1);
    assert_eq!(json["data"]["tasks"][0]["status"], "pending");

    ctx.cleanup().await.unwrap();
}

#[tokio::test]
async fn test_cross_owner_access_forbidden() {
    let Some(mut ctx) = TestContext::new().await.unwrap() else {
        return;
    };

    let (owner_token, _, _) = ctx.register_user("Cara").await;
    let (other_token, _, _) = ctx.register_user("Dave").await;

    let task_id = ctx
        .create_task(&owner_token, "Private errand", "Only Cara's business", None)
        .await;
    let uri = format!("/api/tasks/{}", task_id);

    let (status, json) = ctx.request("GET", &uri, Some(&other_token), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(json["message"], "Not authorized to access this task");

    let (status, json) = ctx
        .request(
            "PUT",
            &uri,
            Some(&other_token),
            Some(json!({ "title": "Hijacked" })),
        )
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(json["message"], "Not authorized to update this task");

    let (status, json) = ctx.request("DELETE", &uri, Some(&other_token), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(json["message"], "Not authorized to delete this task");

    // The owner still sees the task, unmodified
    let (status, json) = ctx.request("GET", &uri, Some(&owner_token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["task"]["title"], "Private errand");

    ctx.cleanup().await.unwrap();
}

#[tokio::test]
async fn test_update_cannot_reassign_owner() {
    let Some(mut ctx) = TestContext::new().await.unwrap() else {
        return;
    };

    let (owner_token, owner_id, _) = ctx.register_user("Elsa").await;
    let (_, other_id, _) = ctx.register_user("Finn").await;

    let task_id = ctx
        .create_task(&owner_token, "Review notes", "Before the Monday call", None)
        .await;

    // An unknown user_id field in the body is ignored
    let (status, _) = ctx
        .request(
            "PUT",
            &format!("/api/tasks/{}", task_id),
            Some(&owner_token),
            Some(json!({ "title": "Review notes v2", "user_id": other_id })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let task = Task::find_by_id(&ctx.db, task_id).await.unwrap().unwrap();
    assert_eq!(task.user_id, owner_id);
    assert_eq!(task.title, "Review notes v2");

    ctx.cleanup().await.unwrap();
}

#[tokio::test]
async fn test_list_filters_by_status() {
    let Some(mut ctx) = TestContext::new().await.unwrap() else {
        return;
    };

    let (token, _, _) = ctx.register_user("Gwen").await;

    ctx.create_task(&token, "Ship release", "Tag and push", Some("completed"))
        .await;
    ctx.create_task(&token, "Write changelog", "Since last tag", Some("in-progress"))
        .await;
    ctx.create_task(&token, "Plan next sprint", "Draft goals", None)
        .await;

    let (status, json) = ctx
        .request("GET", "/api/tasks?status=completed", Some(&token), None)
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["count"], 1);
    assert_eq!(json["data"]["tasks"][0]["title"], "Ship release");

    // An unknown status value is a validation error, not an empty list
    let (status, json) = ctx
        .request("GET", "/api/tasks?status=done", Some(&token), None)
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["errors"][0]["field"], "status");

    ctx.cleanup().await.unwrap();
}

#[tokio::test]
async fn test_search_is_case_insensitive() {
    let Some(mut ctx) = TestContext::new().await.unwrap() else {
        return;
    };

    let (token, _, _) = ctx.register_user("Hugo").await;

    ctx.create_task(&token, "Buy groceries", "Weekly shopping run", None)
        .await;
    ctx.create_task(&token, "Call dentist", "Reschedule the APPOINTMENT", None)
        .await;

    // Title match, query cased differently
    let (status, json) = ctx
        .request("GET", "/api/tasks?search=GROCERIES", Some(&token), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["count"], 1);
    assert_eq!(json["data"]["tasks"][0]["title"], "Buy groceries");

    // Description match
    let (status, json) = ctx
        .request("GET", "/api/tasks?search=appointment", Some(&token), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["count"], 1);
    assert_eq!(json["data"]["tasks"][0]["title"], "Call dentist");

    // No match is a success with an empty list
    let (status, json) = ctx
        .request("GET", "/api/tasks?search=nonexistent", Some(&token), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["count"], 0);

    ctx.cleanup().await.unwrap();
}

#[tokio::test]
async fn test_delete_twice_returns_not_found() {
    let Some(mut ctx) = TestContext::new().await.unwrap() else {
        return;
    };

    let (token, _, _) = ctx.register_user("Iris").await;

    let task_id = ctx
        .create_task(&token, "One-shot chore", "Take out the bins", None)
        .await;
    let uri = format!("/api/tasks/{}", task_id);

    let (status, json) = ctx.request("DELETE", &uri, Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["message"], "Task deleted successfully");

    let (status, json) = ctx.request("DELETE", &uri, Some(&token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["message"], "Task not found");

    ctx.cleanup().await.unwrap();
}
