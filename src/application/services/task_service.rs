//! Task management service.
//!
//! Translates wire-level references (status slug, label ids, assignee id)
//! into validated foreign keys before touching the task repository.

use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::{NewTask, Task, TaskFilter, TaskPatch};
use crate::domain::repositories::{
    LabelRepository, TaskRepository, TaskStatusRepository, UserRepository,
};
use crate::error::AppError;

/// Command to create a task. The status is referenced by slug, as on the wire.
#[derive(Debug, Clone)]
pub struct CreateTask {
    pub index: Option<i64>,
    pub name: String,
    pub description: Option<String>,
    pub status_slug: String,
    pub assignee_id: Option<i64>,
    pub label_ids: Vec<i64>,
}

/// Command to partially update a task.
///
/// Outer `None` means unchanged; inner `None` clears a nullable field.
#[derive(Debug, Clone, Default)]
pub struct UpdateTask {
    pub index: Option<Option<i64>>,
    pub name: Option<String>,
    pub description: Option<Option<String>>,
    pub status_slug: Option<String>,
    pub assignee_id: Option<Option<i64>>,
    pub label_ids: Option<Vec<i64>>,
}

/// Service for task CRUD and filtered listing.
pub struct TaskService<T, S, L, U>
where
    T: TaskRepository,
    S: TaskStatusRepository,
    L: LabelRepository,
    U: UserRepository,
{
    task_repository: Arc<T>,
    status_repository: Arc<S>,
    label_repository: Arc<L>,
    user_repository: Arc<U>,
}

impl<T, S, L, U> TaskService<T, S, L, U>
where
    T: TaskRepository,
    S: TaskStatusRepository,
    L: LabelRepository,
    U: UserRepository,
{
    /// Creates a new task service.
    pub fn new(
        task_repository: Arc<T>,
        status_repository: Arc<S>,
        label_repository: Arc<L>,
        user_repository: Arc<U>,
    ) -> Self {
        Self {
            task_repository,
            status_repository,
            label_repository,
            user_repository,
        }
    }

    /// Lists tasks matching the filter.
    pub async fn get_all(&self, filter: &TaskFilter) -> Result<Vec<Task>, AppError> {
        self.task_repository.list(filter).await
    }

    /// Fetches a task by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the task does not exist.
    pub async fn get_by_id(&self, id: i64) -> Result<Task, AppError> {
        self.task_repository.find_by_id(id).await?.ok_or_else(|| {
            AppError::not_found(format!("Task with id {id} not found"), json!({ "id": id }))
        })
    }

    /// Creates a task after resolving and validating its references.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] when the status slug, assignee id,
    /// or a label id does not refer to an existing resource.
    pub async fn create(&self, command: CreateTask) -> Result<Task, AppError> {
        let status_id = self.resolve_status(&command.status_slug).await?;

        if let Some(assignee_id) = command.assignee_id {
            self.check_assignee(assignee_id).await?;
        }

        self.check_labels(&command.label_ids).await?;

        self.task_repository
            .create(NewTask {
                index: command.index,
                name: command.name,
                description: command.description,
                status_id,
                assignee_id: command.assignee_id,
                label_ids: command.label_ids,
            })
            .await
    }

    /// Partially updates a task, validating any changed references.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the task does not exist and
    /// [`AppError::Validation`] on dangling references, as in [`Self::create`].
    pub async fn update(&self, id: i64, command: UpdateTask) -> Result<Task, AppError> {
        let status_id = match &command.status_slug {
            Some(slug) => Some(self.resolve_status(slug).await?),
            None => None,
        };

        if let Some(Some(assignee_id)) = command.assignee_id {
            self.check_assignee(assignee_id).await?;
        }

        if let Some(label_ids) = &command.label_ids {
            self.check_labels(label_ids).await?;
        }

        self.task_repository
            .update(
                id,
                TaskPatch {
                    index: command.index,
                    name: command.name,
                    description: command.description,
                    status_id,
                    assignee_id: command.assignee_id,
                    label_ids: command.label_ids,
                },
            )
            .await
    }

    /// Deletes a task.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the task does not exist.
    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        let deleted = self.task_repository.delete(id).await?;
        if !deleted {
            return Err(AppError::not_found(
                format!("Task with id {id} not found"),
                json!({ "id": id }),
            ));
        }

        Ok(())
    }

    async fn resolve_status(&self, slug: &str) -> Result<i64, AppError> {
        let status = self
            .status_repository
            .find_by_slug(slug)
            .await?
            .ok_or_else(|| {
                AppError::bad_request(
                    format!("Task status with slug '{slug}' not found"),
                    json!({ "slug": slug }),
                )
            })?;

        Ok(status.id)
    }

    async fn check_assignee(&self, assignee_id: i64) -> Result<(), AppError> {
        if self.user_repository.find_by_id(assignee_id).await?.is_none() {
            return Err(AppError::bad_request(
                format!("Assignee with id {assignee_id} not found"),
                json!({ "assignee_id": assignee_id }),
            ));
        }

        Ok(())
    }

    async fn check_labels(&self, label_ids: &[i64]) -> Result<(), AppError> {
        if label_ids.is_empty() {
            return Ok(());
        }

        let found = self.label_repository.find_by_ids(label_ids).await?;
        if found.len() != label_ids.len() {
            let found_ids: Vec<i64> = found.iter().map(|l| l.id).collect();
            let missing: Vec<i64> = label_ids
                .iter()
                .copied()
                .filter(|id| !found_ids.contains(id))
                .collect();

            return Err(AppError::bad_request(
                "One or more labels not found",
                json!({ "missing_label_ids": missing }),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Label, TaskStatus};
    use crate::domain::repositories::{
        MockLabelRepository, MockTaskRepository, MockTaskStatusRepository, MockUserRepository,
    };
    use chrono::Utc;

    type TestService = TaskService<
        MockTaskRepository,
        MockTaskStatusRepository,
        MockLabelRepository,
        MockUserRepository,
    >;

    fn test_status(id: i64, slug: &str) -> TaskStatus {
        TaskStatus {
            id,
            name: slug.to_string(),
            slug: slug.to_string(),
            created_at: Utc::now(),
        }
    }

    fn test_task(id: i64, status_id: i64) -> Task {
        Task {
            id,
            index: None,
            name: "Fix the build".to_string(),
            description: None,
            status_id,
            status_slug: "draft".to_string(),
            assignee_id: None,
            label_ids: vec![],
            created_at: Utc::now(),
        }
    }

    fn build(
        tasks: MockTaskRepository,
        statuses: MockTaskStatusRepository,
        labels: MockLabelRepository,
        users: MockUserRepository,
    ) -> TestService {
        TaskService::new(
            Arc::new(tasks),
            Arc::new(statuses),
            Arc::new(labels),
            Arc::new(users),
        )
    }

    fn create_command(status_slug: &str) -> CreateTask {
        CreateTask {
            index: None,
            name: "Fix the build".to_string(),
            description: None,
            status_slug: status_slug.to_string(),
            assignee_id: None,
            label_ids: vec![],
        }
    }

    #[tokio::test]
    async fn test_create_resolves_status_slug() {
        let mut statuses = MockTaskStatusRepository::new();
        statuses
            .expect_find_by_slug()
            .withf(|slug| slug == "draft")
            .returning(|slug| Ok(Some(test_status(7, slug))));

        let mut tasks = MockTaskRepository::new();
        tasks
            .expect_create()
            .withf(|new_task| new_task.status_id == 7)
            .returning(|new_task| Ok(test_task(1, new_task.status_id)));

        let service = build(
            tasks,
            statuses,
            MockLabelRepository::new(),
            MockUserRepository::new(),
        );

        let task = service.create(create_command("draft")).await.unwrap();
        assert_eq!(task.status_id, 7);
    }

    #[tokio::test]
    async fn test_create_with_unknown_status_is_rejected() {
        let mut statuses = MockTaskStatusRepository::new();
        statuses.expect_find_by_slug().returning(|_| Ok(None));

        let mut tasks = MockTaskRepository::new();
        tasks.expect_create().times(0);

        let service = build(
            tasks,
            statuses,
            MockLabelRepository::new(),
            MockUserRepository::new(),
        );

        let result = service.create(create_command("ghost")).await;
        assert!(matches!(result, Err(AppError::Validation { .. })));
    }

    #[tokio::test]
    async fn test_create_with_unknown_assignee_is_rejected() {
        let mut statuses = MockTaskStatusRepository::new();
        statuses
            .expect_find_by_slug()
            .returning(|slug| Ok(Some(test_status(7, slug))));

        let mut users = MockUserRepository::new();
        users.expect_find_by_id().returning(|_| Ok(None));

        let mut tasks = MockTaskRepository::new();
        tasks.expect_create().times(0);

        let service = build(tasks, statuses, MockLabelRepository::new(), users);

        let mut command = create_command("draft");
        command.assignee_id = Some(999);

        let result = service.create(command).await;
        assert!(matches!(result, Err(AppError::Validation { .. })));
    }

    #[tokio::test]
    async fn test_create_with_missing_label_is_rejected() {
        let mut statuses = MockTaskStatusRepository::new();
        statuses
            .expect_find_by_slug()
            .returning(|slug| Ok(Some(test_status(7, slug))));

        let mut labels = MockLabelRepository::new();
        labels.expect_find_by_ids().returning(|_| {
            Ok(vec![Label {
                id: 1,
                name: "bug".to_string(),
                created_at: Utc::now(),
            }])
        });

        let mut tasks = MockTaskRepository::new();
        tasks.expect_create().times(0);

        let service = build(tasks, statuses, labels, MockUserRepository::new());

        let mut command = create_command("draft");
        command.label_ids = vec![1, 2];

        let result = service.create(command).await;
        assert!(matches!(result, Err(AppError::Validation { .. })));
    }

    #[tokio::test]
    async fn test_update_without_status_change_skips_lookup() {
        let mut statuses = MockTaskStatusRepository::new();
        statuses.expect_find_by_slug().times(0);

        let mut tasks = MockTaskRepository::new();
        tasks
            .expect_update()
            .withf(|_, patch| patch.status_id.is_none() && patch.name.as_deref() == Some("Renamed"))
            .returning(|id, _| Ok(test_task(id, 7)));

        let service = build(
            tasks,
            statuses,
            MockLabelRepository::new(),
            MockUserRepository::new(),
        );

        let command = UpdateTask {
            name: Some("Renamed".to_string()),
            ..Default::default()
        };

        let task = service.update(1, command).await.unwrap();
        assert_eq!(task.id, 1);
    }

    #[tokio::test]
    async fn test_update_unassign_skips_assignee_check() {
        let mut users = MockUserRepository::new();
        users.expect_find_by_id().times(0);

        let mut tasks = MockTaskRepository::new();
        tasks
            .expect_update()
            .withf(|_, patch| patch.assignee_id == Some(None))
            .returning(|id, _| Ok(test_task(id, 7)));

        let service = build(
            tasks,
            MockTaskStatusRepository::new(),
            MockLabelRepository::new(),
            users,
        );

        let command = UpdateTask {
            assignee_id: Some(None),
            ..Default::default()
        };

        assert!(service.update(1, command).await.is_ok());
    }

    #[tokio::test]
    async fn test_delete_missing_is_not_found() {
        let mut tasks = MockTaskRepository::new();
        tasks.expect_delete().returning(|_| Ok(false));

        let service = build(
            tasks,
            MockTaskStatusRepository::new(),
            MockLabelRepository::new(),
            MockUserRepository::new(),
        );

        let result = service.delete(1).await;
        assert!(matches!(result, Err(AppError::NotFound { .. })));
    }
}
