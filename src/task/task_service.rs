use crate::counter::{CounterRepository, TASK_ID_SERIES};
use crate::error::{AppError, Result};
use crate::task::task_dto::{CreateTaskRequest, UpdateTaskRequest};
use crate::task::task_models::Task;
use crate::task::task_repository::TaskRepository;

/// Service layer for task-related business logic. Owns the id allocation
/// protocol: every created task gets the next value of the `"TaskID"`
/// counter series, and deletion never returns an id to the pool.
#[derive(Clone)]
pub struct TaskService {
    tasks: TaskRepository,
    counters: CounterRepository,
}

impl TaskService {
    pub fn new(tasks: TaskRepository, counters: CounterRepository) -> Self {
        Self { tasks, counters }
    }

    pub async fn list_tasks(&self) -> Result<Vec<Task>> {
        self.tasks.find_all().await
    }

    pub async fn get_task(&self, id: i64) -> Result<Task> {
        self.tasks
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Task not found".into()))
    }

    pub async fn create_task(&self, payload: CreateTaskRequest) -> Result<Task> {
        let counter = self.counters.allocate(TASK_ID_SERIES).await?;
        self.tasks
            .create(
                counter.value,
                &payload.title,
                &payload.description,
                &payload.category,
            )
            .await
    }

    pub async fn update_task(&self, id: i64, payload: UpdateTaskRequest) -> Result<Task> {
        self.tasks
            .update(
                id,
                payload.title.as_deref(),
                payload.description.as_deref(),
                payload.category.as_deref(),
            )
            .await?
            .ok_or_else(|| AppError::NotFound("Task not found".into()))
    }

    pub async fn delete_task(&self, id: i64) -> Result<()> {
        let rows_affected = self.tasks.delete(id).await?;
        if rows_affected == 0 {
            return Err(AppError::NotFound("Task not found".into()));
        }
        Ok(())
    }

    pub async fn delete_all_tasks(&self) -> Result<u64> {
        self.tasks.delete_all().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::PgPool;

    fn service(pool: PgPool) -> TaskService {
        TaskService::new(
            TaskRepository::new(pool.clone()),
            CounterRepository::new(pool),
        )
    }

    fn payload(title: &str, description: &str, category: &str) -> CreateTaskRequest {
        CreateTaskRequest {
            title: title.into(),
            description: description.into(),
            category: category.into(),
        }
    }

    #[sqlx::test]
    async fn create_assigns_sequential_ids(pool: PgPool) {
        let service = service(pool);

        let first = service.create_task(payload("A", "B", "work")).await.unwrap();
        let second = service.create_task(payload("C", "D", "home")).await.unwrap();
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);

        let all = service.list_tasks().await.unwrap();
        assert_eq!(all.len(), 2);
    }

    #[sqlx::test]
    async fn partial_update_preserves_untouched_fields(pool: PgPool) {
        let service = service(pool);
        let created = service.create_task(payload("A", "B", "work")).await.unwrap();

        let patch = UpdateTaskRequest {
            description: Some("C".into()),
            ..Default::default()
        };
        let expected = patch.apply(created.clone());
        let updated = service.update_task(created.id, patch).await.unwrap();

        assert_eq!(updated, expected);
        assert_eq!(updated.title, "A");
        assert_eq!(updated.description, "C");
        assert_eq!(updated.category, "work");
    }

    #[sqlx::test]
    async fn concurrent_updates_to_different_fields_both_land(pool: PgPool) {
        let service = service(pool);
        let created = service.create_task(payload("A", "B", "work")).await.unwrap();

        let title_patch = UpdateTaskRequest {
            title: Some("X".into()),
            ..Default::default()
        };
        let description_patch = UpdateTaskRequest {
            description: Some("Y".into()),
            ..Default::default()
        };

        let (first, second) = tokio::join!(
            service.update_task(created.id, title_patch),
            service.update_task(created.id, description_patch),
        );
        first.unwrap();
        second.unwrap();

        // Whichever order the two statements ran in, neither may clobber
        // the other's field with a stale value.
        let after = service.get_task(created.id).await.unwrap();
        assert_eq!(after.title, "X");
        assert_eq!(after.description, "Y");
        assert_eq!(after.category, "work");
    }

    #[sqlx::test]
    async fn stale_id_is_not_found(pool: PgPool) {
        let service = service(pool);
        let created = service.create_task(payload("A", "B", "work")).await.unwrap();

        service.delete_task(created.id).await.unwrap();

        let err = service.get_task(created.id).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));

        let err = service
            .update_task(created.id, UpdateTaskRequest::default())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));

        let err = service.delete_task(created.id).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[sqlx::test]
    async fn deleted_ids_are_never_reused(pool: PgPool) {
        let service = service(pool);

        service.create_task(payload("A", "B", "work")).await.unwrap();
        let highest = service.create_task(payload("C", "D", "home")).await.unwrap();

        service.delete_task(highest.id).await.unwrap();

        let replacement = service.create_task(payload("E", "F", "work")).await.unwrap();
        assert!(replacement.id > highest.id);
    }

    #[sqlx::test]
    async fn delete_all_is_idempotent_and_keeps_the_counter(pool: PgPool) {
        let service = service(pool);

        for i in 0..3 {
            service
                .create_task(payload(&format!("T{i}"), "body", "work"))
                .await
                .unwrap();
        }

        service.delete_all_tasks().await.unwrap();
        assert!(service.list_tasks().await.unwrap().is_empty());

        service.delete_all_tasks().await.unwrap();
        assert!(service.list_tasks().await.unwrap().is_empty());

        // The counter survives both calls: the next id continues the series.
        let next = service.create_task(payload("G", "H", "home")).await.unwrap();
        assert_eq!(next.id, 4);
    }
}
