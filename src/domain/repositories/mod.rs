//! Repository traits abstracting the persistence layer.
//!
//! Each trait has a PostgreSQL implementation under
//! [`crate::infrastructure::persistence`] and a mockall mock in tests.

pub mod label_repository;
pub mod task_repository;
pub mod task_status_repository;
pub mod user_repository;

pub use label_repository::LabelRepository;
pub use task_repository::TaskRepository;
pub use task_status_repository::TaskStatusRepository;
pub use user_repository::UserRepository;

#[cfg(test)]
pub use label_repository::MockLabelRepository;
#[cfg(test)]
pub use task_repository::MockTaskRepository;
#[cfg(test)]
pub use task_status_repository::MockTaskStatusRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
