//! Business logic services.
//!
//! Services are generic over repository traits so unit tests can inject
//! mockall mocks without a database.

pub mod auth_service;
pub mod label_service;
pub mod task_service;
pub mod task_status_service;
pub mod user_service;

pub use auth_service::{AuthService, AuthUser};
pub use label_service::LabelService;
pub use task_service::{CreateTask, TaskService, UpdateTask};
pub use task_status_service::TaskStatusService;
pub use user_service::UserService;
