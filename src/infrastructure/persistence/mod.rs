//! PostgreSQL implementations of the domain repository traits.

pub mod pg_label_repository;
pub mod pg_task_repository;
pub mod pg_task_status_repository;
pub mod pg_user_repository;

pub use pg_label_repository::PgLabelRepository;
pub use pg_task_repository::PgTaskRepository;
pub use pg_task_status_repository::PgTaskStatusRepository;
pub use pg_user_repository::PgUserRepository;
