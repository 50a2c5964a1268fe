/// Task model and database operations
///
/// Tasks are the core entity of Taskline. Every task has exactly one owner,
/// set at creation and immutable thereafter; every read and write is scoped
/// to that owner by the handlers.
///
/// Status is a flat three-value enum with no transition graph: any value may
/// replace any other. That is a deliberate simplicity choice, not an
/// omission.
///
/// # Schema
///
/// ```sql
/// CREATE TYPE task_status AS ENUM ('pending', 'in-progress', 'completed');
///
/// CREATE TABLE tasks (
///     id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
///     title VARCHAR(100) NOT NULL,
///     description VARCHAR(500) NOT NULL,
///     status task_status NOT NULL DEFAULT 'pending',
///     user_id UUID NOT NULL REFERENCES users(id) ON DELETE CASCADE,
///     created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
///     updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
/// );
/// ```
///
/// # Example
///
/// ```no_run
/// use taskline_shared::models::task::{Task, CreateTask, TaskFilter, TaskStatus};
/// use taskline_shared::db::pool::{create_pool, DatabaseConfig};
/// use uuid::Uuid;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let pool = create_pool(DatabaseConfig::default()).await?;
/// let owner = Uuid::new_v4();
///
/// let task = Task::create(&pool, CreateTask {
///     user_id: owner,
///     title: "Buy milk".to_string(),
///     description: "2%".to_string(),
///     status: TaskStatus::Pending,
/// }).await?;
///
/// // Owner-scoped listing, newest first
/// let tasks = Task::list_by_owner(&pool, owner, TaskFilter::default()).await?;
/// # Ok(())
/// # }
/// ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use std::str::FromStr;
use uuid::Uuid;

/// Task status
///
/// Serializes to `pending`, `in-progress`, `completed` on the wire and in
/// the database enum.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "task_status", rename_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    /// Not yet started (the default for new tasks)
    #[default]
    Pending,

    /// Being worked on
    InProgress,

    /// Done
    Completed,
}

impl TaskStatus {
    /// Status as its wire string
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::InProgress => "in-progress",
            TaskStatus::Completed => "completed",
        }
    }
}

impl FromStr for TaskStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(TaskStatus::Pending),
            "in-progress" => Ok(TaskStatus::InProgress),
            "completed" => Ok(TaskStatus::Completed),
            _ => Err(()),
        }
    }
}

/// Task model representing a personal task
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Task {
    /// Unique task id
    pub id: Uuid,

    /// Title (1-100 chars, enforced at the validation layer)
    pub title: String,

    /// Description (1-500 chars)
    pub description: String,

    /// Current status
    pub status: TaskStatus,

    /// Owning user. Set at creation, never updated.
    pub user_id: Uuid,

    /// When the task was created
    pub created_at: DateTime<Utc>,

    /// When the task was last updated
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a new task
#[derive(Debug, Clone)]
pub struct CreateTask {
    /// Owning user id
    pub user_id: Uuid,

    /// Title
    pub title: String,

    /// Description
    pub description: String,

    /// Initial status (`Pending` when the request omitted it)
    pub status: TaskStatus,
}

/// Partial update for a task
///
/// Each field may be supplied independently; `None` leaves the stored value
/// unchanged. There is no way to change `user_id`.
#[derive(Debug, Clone, Default)]
pub struct UpdateTask {
    /// New title
    pub title: Option<String>,

    /// New description
    pub description: Option<String>,

    /// New status
    pub status: Option<TaskStatus>,
}

/// Filter for owner-scoped task listings
#[derive(Debug, Clone, Default)]
pub struct TaskFilter {
    /// Case-insensitive substring matched against title OR description
    pub search: Option<String>,

    /// Exact status match
    pub status: Option<TaskStatus>,
}

/// Escapes LIKE metacharacters in a user-supplied search string
///
/// `%`, `_`, and `\` would otherwise act as wildcards inside the ILIKE
/// pattern. The escape character is `\`, Postgres's default.
fn escape_like(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

impl Task {
    /// Creates a new task for its owner
    pub async fn create(pool: &PgPool, data: CreateTask) -> Result<Self, sqlx::Error> {
        let task = sqlx::query_as::<_, Task>(
            r#"
            INSERT INTO tasks (title, description, status, user_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id, title, description, status, user_id, created_at, updated_at
            "#,
        )
        .bind(data.title)
        .bind(data.description)
        .bind(data.status)
        .bind(data.user_id)
        .fetch_one(pool)
        .await?;

        Ok(task)
    }

    /// Finds a task by id, regardless of owner
    ///
    /// Handlers check existence before ownership: a missing task is a 404,
    /// a task owned by somebody else is a 403.
    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Self>, sqlx::Error> {
        let task = sqlx::query_as::<_, Task>(
            r#"
            SELECT id, title, description, status, user_id, created_at, updated_at
            FROM tasks
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(task)
    }

    /// Lists tasks owned by `owner_id`, newest-created-first
    ///
    /// Optional filters: a case-insensitive substring match against title OR
    /// description, and an exact status match. An empty result is not an
    /// error.
    pub async fn list_by_owner(
        pool: &PgPool,
        owner_id: Uuid,
        filter: TaskFilter,
    ) -> Result<Vec<Self>, sqlx::Error> {
        let pattern = filter
            .search
            .as_deref()
            .map(|s| format!("%{}%", escape_like(s)));

        let tasks = sqlx::query_as::<_, Task>(
            r#"
            SELECT id, title, description, status, user_id, created_at, updated_at
            FROM tasks
            WHERE user_id = $1
              AND ($2::task_status IS NULL OR status = $2)
              AND ($3::text IS NULL OR title ILIKE $3 OR description ILIKE $3)
            ORDER BY created_at DESC
            "#,
        )
        .bind(owner_id)
        .bind(filter.status)
        .bind(pattern)
        .fetch_all(pool)
        .await?;

        Ok(tasks)
    }

    /// Applies a partial update to a task
    ///
    /// Only non-None fields are written; `updated_at` is always bumped.
    /// Returns the updated task, or None if the row no longer exists.
    pub async fn update(
        pool: &PgPool,
        id: Uuid,
        data: UpdateTask,
    ) -> Result<Option<Self>, sqlx::Error> {
        // Build the update statement from whichever fields are present
        let mut query = String::from("UPDATE tasks SET updated_at = NOW()");
        let mut bind_count = 1;

        if data.title.is_some() {
            bind_count += 1;
            query.push_str(&format!(", title = ${}", bind_count));
        }
        if data.description.is_some() {
            bind_count += 1;
            query.push_str(&format!(", description = ${}", bind_count));
        }
        if data.status.is_some() {
            bind_count += 1;
            query.push_str(&format!(", status = ${}", bind_count));
        }

        query.push_str(
            " WHERE id = $1 RETURNING id, title, description, status, user_id, created_at, updated_at",
        );

        let mut q = sqlx::query_as::<_, Task>(&query).bind(id);

        if let Some(title) = data.title {
            q = q.bind(title);
        }
        if let Some(description) = data.description {
            q = q.bind(description);
        }
        if let Some(status) = data.status {
            q = q.bind(status);
        }

        let task = q.fetch_optional(pool).await?;

        Ok(task)
    }

    /// Hard-deletes a task by id
    ///
    /// Returns true if a row was removed, false if the task was already
    /// gone. There is no tombstone.
    pub async fn delete(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_names() {
        assert_eq!(TaskStatus::Pending.as_str(), "pending");
        assert_eq!(TaskStatus::InProgress.as_str(), "in-progress");
        assert_eq!(TaskStatus::Completed.as_str(), "completed");
    }

    #[test]
    fn test_status_serde_roundtrip() {
        for status in [
            TaskStatus::Pending,
            TaskStatus::InProgress,
            TaskStatus::Completed,
        ] {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.as_str()));

            let back: TaskStatus = serde_json::from_str(&json).unwrap();
            assert_eq!(back, status);
        }
    }

    #[test]
    fn test_status_from_str() {
        assert_eq!("pending".parse(), Ok(TaskStatus::Pending));
        assert_eq!("in-progress".parse(), Ok(TaskStatus::InProgress));
        assert_eq!("completed".parse(), Ok(TaskStatus::Completed));
        assert_eq!("done".parse::<TaskStatus>(), Err(()));
        assert_eq!("Pending".parse::<TaskStatus>(), Err(()));
    }

    #[test]
    fn test_status_default_is_pending() {
        assert_eq!(TaskStatus::default(), TaskStatus::Pending);
    }

    #[test]
    fn test_escape_like() {
        assert_eq!(escape_like("foo"), "foo");
        assert_eq!(escape_like("100%"), "100\\%");
        assert_eq!(escape_like("a_b"), "a\\_b");
        assert_eq!(escape_like("back\\slash"), "back\\\\slash");
    }
}
