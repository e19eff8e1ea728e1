use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::task::task_models::Task;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateTaskRequest {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    #[validate(length(min = 1, message = "description must not be empty"))]
    pub description: String,
    #[validate(length(min = 1, message = "category must not be empty"))]
    pub category: String,
}

/// Partial update: omitted fields are left unchanged, so no field can be
/// cleared by omission. The id is not part of the payload and is immutable.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateTaskRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
}

impl UpdateTaskRequest {
    /// Merges this patch into an existing record. The repository's
    /// COALESCE update performs the same merge in a single statement;
    /// this is the pure form the tests check against.
    pub fn apply(&self, task: Task) -> Task {
        Task {
            id: task.id,
            title: self.title.clone().unwrap_or(task.title),
            description: self.description.clone().unwrap_or(task.description),
            category: self.category.clone().unwrap_or(task.category),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}
