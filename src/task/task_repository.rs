use crate::db::DbPool;
use crate::error::Result;
use crate::task::task_models::Task;

#[derive(Clone)]
pub struct TaskRepository {
    pool: DbPool,
}

impl TaskRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub async fn find_all(&self) -> Result<Vec<Task>> {
        let tasks = sqlx::query_as::<_, Task>("SELECT * FROM tasks ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(tasks)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Task>> {
        let task = sqlx::query_as::<_, Task>("SELECT * FROM tasks WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(task)
    }

    pub async fn create(
        &self,
        id: i64,
        title: &str,
        description: &str,
        category: &str,
    ) -> Result<Task> {
        let task = sqlx::query_as::<_, Task>(
            "INSERT INTO tasks (id, title, description, category)
             VALUES ($1, $2, $3, $4)
             RETURNING *",
        )
        .bind(id)
        .bind(title)
        .bind(description)
        .bind(category)
        .fetch_one(&self.pool)
        .await?;

        Ok(task)
    }

    /// Applies a partial update in one statement; `None` binds leave the
    /// column unchanged. Single-statement, so concurrent updates to the
    /// same row cannot overwrite each other with stale values. Returns
    /// `None` when no task has this id.
    pub async fn update(
        &self,
        id: i64,
        title: Option<&str>,
        description: Option<&str>,
        category: Option<&str>,
    ) -> Result<Option<Task>> {
        let task = sqlx::query_as::<_, Task>(
            "UPDATE tasks SET
                title = COALESCE($1, title),
                description = COALESCE($2, description),
                category = COALESCE($3, category)
             WHERE id = $4
             RETURNING *",
        )
        .bind(title)
        .bind(description)
        .bind(category)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(task)
    }

    pub async fn delete(&self, id: i64) -> Result<u64> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    pub async fn delete_all(&self) -> Result<u64> {
        let result = sqlx::query("DELETE FROM tasks").execute(&self.pool).await?;

        Ok(result.rows_affected())
    }
}
