/// Task endpoints
///
/// All routes here sit behind the bearer-auth middleware and are scoped to
/// the authenticated user. For single-task routes the checks run in a fixed
/// order: existence first (404), then ownership (403). Returning Forbidden
/// for another user's task reveals that the id exists to any authenticated
/// caller; that is the confirmed contract, kept as-is.
///
/// # Endpoints
///
/// - `GET    /api/tasks?search=&status=` - List own tasks, newest first
/// - `POST   /api/tasks` - Create a task
/// - `GET    /api/tasks/:id` - Fetch one task
/// - `PUT    /api/tasks/:id` - Partially update a task
/// - `DELETE /api/tasks/:id` - Hard-delete a task

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
    extract::{AppJson, AppQuery},
    middleware::auth::CurrentUser,
    response::Envelope,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use serde::{Deserialize, Serialize};
use taskline_shared::{
    models::task::{CreateTask, Task, TaskFilter, TaskStatus, UpdateTask},
    validation::{
        validate_status, DESCRIPTION_MAX, DESCRIPTION_MIN, SEARCH_MAX, TITLE_MAX, TITLE_MIN,
    },
};
use uuid::Uuid;
use validator::Validate;

/// Create task request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateTaskRequest {
    /// Title (required)
    #[validate(length(
        min = TITLE_MIN,
        max = TITLE_MAX,
        message = "Title must be between 1 and 100 characters"
    ))]
    pub title: String,

    /// Description (required)
    #[validate(length(
        min = DESCRIPTION_MIN,
        max = DESCRIPTION_MAX,
        message = "Description must be between 1 and 500 characters"
    ))]
    pub description: String,

    /// Status; defaults to `pending` when omitted
    #[validate(custom(function = "validate_status"))]
    pub status: Option<String>,
}

/// Update task request; every field is independently optional
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateTaskRequest {
    /// New title
    #[validate(length(
        min = TITLE_MIN,
        max = TITLE_MAX,
        message = "Title must be between 1 and 100 characters"
    ))]
    pub title: Option<String>,

    /// New description
    #[validate(length(
        min = DESCRIPTION_MIN,
        max = DESCRIPTION_MAX,
        message = "Description must be between 1 and 500 characters"
    ))]
    pub description: Option<String>,

    /// New status
    #[validate(custom(function = "validate_status"))]
    pub status: Option<String>,
}

/// List query parameters
#[derive(Debug, Default, Deserialize, Validate)]
pub struct ListTasksQuery {
    /// Free-text search, matched case-insensitively against title OR description
    #[validate(length(max = SEARCH_MAX, message = "Search query too long"))]
    pub search: Option<String>,

    /// Exact status filter
    #[validate(custom(function = "validate_status"))]
    pub status: Option<String>,
}

/// Listing payload
#[derive(Debug, Serialize)]
pub struct TaskListData {
    /// Tasks owned by the requester, newest-created-first
    pub tasks: Vec<Task>,

    /// Number of tasks returned
    pub count: usize,
}

/// Single-task payload
#[derive(Debug, Serialize)]
pub struct TaskData {
    pub task: Task,
}

/// Parses the `:id` path segment
///
/// A malformed id is a validation failure, not a 404: the request never
/// named a real resource.
fn parse_task_id(raw: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw).map_err(|_| ApiError::invalid_field("id", "Invalid task ID format"))
}

/// Loads a task and enforces the existence-then-ownership order
///
/// `verb` names the attempted action for the Forbidden message.
async fn find_owned_task(
    state: &AppState,
    owner_id: Uuid,
    task_id: Uuid,
    verb: &str,
) -> Result<Task, ApiError> {
    let task = Task::find_by_id(&state.db, task_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Task not found".to_string()))?;

    if task.user_id != owner_id {
        return Err(ApiError::Forbidden(format!(
            "Not authorized to {} this task",
            verb
        )));
    }

    Ok(task)
}

/// List the authenticated user's tasks
///
/// Optional `?search=` (case-insensitive substring on title or description)
/// and `?status=` (exact match). An empty result is a success with count 0.
pub async fn list_tasks(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
    AppQuery(query): AppQuery<ListTasksQuery>,
) -> ApiResult<Json<Envelope<TaskListData>>> {
    query.validate()?;

    let filter = TaskFilter {
        search: query.search.filter(|s| !s.trim().is_empty()),
        // Already validated; parse cannot fail here
        status: query.status.as_deref().and_then(|s| s.parse().ok()),
    };

    let tasks = Task::list_by_owner(&state.db, current.id(), filter).await?;
    let count = tasks.len();

    Ok(Json(Envelope::ok(TaskListData { tasks, count })))
}

/// Create a task owned by the authenticated user
pub async fn create_task(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
    AppJson(mut req): AppJson<CreateTaskRequest>,
) -> ApiResult<(StatusCode, Json<Envelope<TaskData>>)> {
    req.title = req.title.trim().to_string();
    req.description = req.description.trim().to_string();
    req.validate()?;

    let status: TaskStatus = req
        .status
        .as_deref()
        .and_then(|s| s.parse().ok())
        .unwrap_or_default();

    let task = Task::create(
        &state.db,
        CreateTask {
            user_id: current.id(),
            title: req.title,
            description: req.description,
            status,
        },
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(Envelope::ok_with_message(
            "Task created successfully",
            TaskData { task },
        )),
    ))
}

/// Fetch a single task by id
pub async fn get_task(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
    Path(id): Path<String>,
) -> ApiResult<Json<Envelope<TaskData>>> {
    let task_id = parse_task_id(&id)?;
    let task = find_owned_task(&state, current.id(), task_id, "access").await?;

    Ok(Json(Envelope::ok(TaskData { task })))
}

/// Partially update a task
///
/// Unspecified fields are left unchanged; there is no way to move a task to
/// another owner.
pub async fn update_task(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
    Path(id): Path<String>,
    AppJson(mut req): AppJson<UpdateTaskRequest>,
) -> ApiResult<Json<Envelope<TaskData>>> {
    let task_id = parse_task_id(&id)?;

    req.title = req.title.map(|t| t.trim().to_string());
    req.description = req.description.map(|d| d.trim().to_string());
    req.validate()?;

    // Existence and ownership are checked before any mutation
    find_owned_task(&state, current.id(), task_id, "update").await?;

    let update = UpdateTask {
        title: req.title,
        description: req.description,
        status: req.status.as_deref().and_then(|s| s.parse().ok()),
    };

    let task = Task::update(&state.db, task_id, update)
        .await?
        .ok_or_else(|| ApiError::NotFound("Task not found".to_string()))?;

    Ok(Json(Envelope::ok_with_message(
        "Task updated successfully",
        TaskData { task },
    )))
}

/// Hard-delete a task
///
/// Deleting the same id twice: the first succeeds, the second is a 404.
pub async fn delete_task(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
    Path(id): Path<String>,
) -> ApiResult<Json<Envelope<serde_json::Value>>> {
    let task_id = parse_task_id(&id)?;

    find_owned_task(&state, current.id(), task_id, "delete").await?;

    let deleted = Task::delete(&state.db, task_id).await?;
    if !deleted {
        // Lost a race with another delete of our own task
        return Err(ApiError::NotFound("Task not found".to_string()));
    }

    Ok(Json(Envelope::message_only("Task deleted successfully")))
}
