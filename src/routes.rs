use crate::{
    state::AppState,
    task::{task_handlers, CreateTaskRequest, MessageResponse, Task, UpdateTaskRequest},
};
use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        task_handlers::get_tasks,
        task_handlers::get_task,
        task_handlers::create_task,
        task_handlers::update_task,
        task_handlers::delete_task,
        task_handlers::delete_all_tasks,
    ),
    components(
        schemas(
            Task,
            CreateTaskRequest,
            UpdateTaskRequest,
            MessageResponse,
        )
    ),
    tags(
        (name = "tasks", description = "Task management endpoints")
    )
)]
struct ApiDoc;

async fn health() -> &'static str {
    "API is running"
}

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let task_routes = Router::new()
        .route(
            "/",
            get(task_handlers::get_tasks)
                .post(task_handlers::create_task)
                .delete(task_handlers::delete_all_tasks),
        )
        .route(
            "/:id",
            get(task_handlers::get_task)
                .put(task_handlers::update_task)
                .delete(task_handlers::delete_task),
        );

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/", get(health))
        .nest("/api/tasks", task_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
