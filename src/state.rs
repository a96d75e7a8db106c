//! Shared application state injected into every handler.

use sqlx::PgPool;
use std::sync::Arc;

use crate::application::services::{
    AuthService, LabelService, TaskService, TaskStatusService, UserService,
};
use crate::infrastructure::persistence::{
    PgLabelRepository, PgTaskRepository, PgTaskStatusRepository, PgUserRepository,
};

/// Concrete service types wired to the PostgreSQL repositories.
pub type UserSvc = UserService<PgUserRepository>;
pub type TaskSvc =
    TaskService<PgTaskRepository, PgTaskStatusRepository, PgLabelRepository, PgUserRepository>;
pub type TaskStatusSvc = TaskStatusService<PgTaskStatusRepository>;
pub type LabelSvc = LabelService<PgLabelRepository>;
pub type AuthSvc = AuthService<PgUserRepository>;

/// Application state shared across request handlers.
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<UserSvc>,
    pub task_service: Arc<TaskSvc>,
    pub task_status_service: Arc<TaskStatusSvc>,
    pub label_service: Arc<LabelSvc>,
    pub auth_service: Arc<AuthSvc>,
    /// Raw pool handle, used by the health check.
    pub db: Arc<PgPool>,
}

impl AppState {
    /// Wires repositories and services on top of a connection pool.
    pub fn new(pool: Arc<PgPool>, token_signing_secret: String, token_ttl_seconds: u64) -> Self {
        let user_repo = Arc::new(PgUserRepository::new(pool.clone()));
        let task_repo = Arc::new(PgTaskRepository::new(pool.clone()));
        let status_repo = Arc::new(PgTaskStatusRepository::new(pool.clone()));
        let label_repo = Arc::new(PgLabelRepository::new(pool.clone()));

        let user_service = Arc::new(UserService::new(user_repo.clone()));
        let task_service = Arc::new(TaskService::new(
            task_repo,
            status_repo.clone(),
            label_repo.clone(),
            user_repo.clone(),
        ));
        let task_status_service = Arc::new(TaskStatusService::new(status_repo));
        let label_service = Arc::new(LabelService::new(label_repo));
        let auth_service = Arc::new(AuthService::new(
            user_repo,
            token_signing_secret,
            token_ttl_seconds,
        ));

        Self {
            user_service,
            task_service,
            task_status_service,
            label_service,
            auth_service,
            db: pool,
        }
    }
}
