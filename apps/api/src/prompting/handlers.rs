//! Axum route handlers for the task catalog.

use axum::Json;
use serde::Serialize;

use crate::prompting::catalog::{self, TaskDescriptor};

#[derive(Debug, Serialize)]
pub struct TasksResponse {
    pub tasks: Vec<TaskDescriptor>,
}

/// GET /api/v1/tasks
///
/// Lists every supported task kind with its widget field specs, so the UI
/// host can render the studio controls without hardcoding them.
pub async fn handle_list_tasks() -> Json<TasksResponse> {
    Json(TasksResponse {
        tasks: catalog::catalog(),
    })
}
