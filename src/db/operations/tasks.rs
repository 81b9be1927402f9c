use crate::db::internal;
use crate::db::logs::log_comment_body;
use crate::db::logs::LogContext;
use crate::db::model::InsertTask;
use crate::db::model::Task;
use crate::db::model::TaskChangeset;
use crate::db::operations::models::TaskFilters;
use crate::db::operations::models::TaskUpdateKind;
use crate::db::types::*;
use crate::db::Pool;
use crate::error::ServiceError;
use crate::mail;
use crate::mail::templates::Template;
use crate::mail::templates::TemplateManager;
use crate::rules::engine::CREATE_TASK;
use crate::rules::engine::DELETE_TASK;
use crate::rules::engine::UPDATE_TASK;
use crate::rules::error::RuleError;
use crate::rules::RuleContext;
use crate::settings::Nudgr;
use crate::user::User;
use chrono::NaiveDateTime;
use chrono::Utc;
use failure::Error;
use log::info;
use uuid::Uuid;

#[derive(Debug)]
pub struct NewTask {
    pub task_name: String,
    pub priority: TaskPriority,
    pub deadline: NaiveDateTime,
    pub status: TaskStatus,
    pub group_id: i32,
    pub parent_uuid: Uuid,
    pub user_uuid: Uuid,
}

pub struct TaskUpdate {
    pub task_name: Option<String>,
    pub priority: Option<TaskPriority>,
    pub deadline: Option<NaiveDateTime>,
    pub status: Option<TaskStatus>,
}

impl TaskUpdate {
    /// Classifies the update against the level ordering: strictly above
    /// edits everything, peers may only move the status.
    pub fn kind(
        &self,
        caller_level: i32,
        assignee_level: i32,
    ) -> Result<TaskUpdateKind, Error> {
        if caller_level > assignee_level {
            return Err(RuleError::CannotUpdateTask.into());
        }
        if caller_level < assignee_level {
            return Ok(TaskUpdateKind::Full);
        }
        if self.task_name.is_some() || self.priority.is_some() || self.deadline.is_some() {
            return Err(ServiceError::StatusOnlyUpdate.into());
        }
        if self.status.is_none() {
            return Err(ServiceError::StatusOnlyUpdate.into());
        }
        Ok(TaskUpdateKind::StatusOnly)
    }
}

/// Inserts the task after the delegation checks pass and nudges the
/// assignee by mail. The send is dispatched in the background; a mail
/// failure never surfaces here.
pub fn create_task(pool: &Pool, settings: &Nudgr, new_task: NewTask) -> Result<Task, Error> {
    CREATE_TASK.run(&RuleContext::minimal_with_member_uuid(
        pool,
        new_task.group_id,
        &new_task.parent_uuid,
        &new_task.user_uuid,
    ))?;
    let connection = pool.get()?;
    let task = internal::task::add_task(
        &connection,
        &InsertTask {
            task_name: new_task.task_name,
            priority: new_task.priority,
            deadline: new_task.deadline,
            status: new_task.status,
            group_id: new_task.group_id,
            user_uuid: new_task.user_uuid,
            parent_uuid: new_task.parent_uuid,
        },
    )?;
    let log_ctx = LogContext::with(task.group_id, task.parent_uuid).with_user(task.user_uuid);
    internal::log::db_log(
        &connection,
        &log_ctx,
        LogTargetType::Task,
        LogOperationType::Created,
        None,
    );
    info!("created task {} in group {}", task.id, task.group_id);
    if let Some(assignee) = internal::user::user_profile_by_uuid_maybe(&connection, &task.user_uuid)? {
        let message = TemplateManager::new(settings.domain.clone()).render(&Template::TaskAssigned {
            task_id: task.id,
            task_name: task.task_name.clone(),
            deadline: task.deadline,
            priority: task.priority,
        });
        mail::manager::send_email(&assignee.email, &settings.sender, message);
    }
    Ok(task)
}

pub fn update_task(
    pool: &Pool,
    host: &User,
    task_id: i32,
    update: TaskUpdate,
) -> Result<(Task, TaskUpdateKind), Error> {
    let connection = pool.get()?;
    let task =
        internal::task::get_task(&connection, task_id)?.ok_or(ServiceError::TaskNotFound)?;
    UPDATE_TASK.run(&RuleContext::minimal_with_member_uuid(
        pool,
        task.group_id,
        &host.user_uuid,
        &task.user_uuid,
    ))?;
    let caller_level = internal::member::member_level(&connection, task.group_id, &host.user_uuid)?
        .ok_or(RuleError::NotAGroupMember)?;
    let assignee_level =
        internal::member::member_level(&connection, task.group_id, &task.user_uuid)?
            .ok_or(RuleError::AssigneeNotInGroup)?;
    let kind = update.kind(caller_level, assignee_level)?;
    let changeset = match kind {
        TaskUpdateKind::Full => TaskChangeset {
            task_name: update.task_name,
            priority: update.priority,
            deadline: update.deadline,
            status: update.status,
            updated: Utc::now().naive_utc(),
        },
        TaskUpdateKind::StatusOnly => TaskChangeset {
            task_name: None,
            priority: None,
            deadline: None,
            status: update.status,
            updated: Utc::now().naive_utc(),
        },
    };
    let task = internal::task::update_task(&connection, task_id, &changeset)?;
    let log_ctx = LogContext::with(task.group_id, host.user_uuid).with_user(task.user_uuid);
    internal::log::db_log(
        &connection,
        &log_ctx,
        LogTargetType::Task,
        LogOperationType::Updated,
        log_comment_body(match kind {
            TaskUpdateKind::Full => "full update",
            TaskUpdateKind::StatusOnly => "status update",
        }),
    );
    Ok((task, kind))
}

pub fn delete_task(pool: &Pool, host: &User, task_id: i32) -> Result<(), Error> {
    let connection = pool.get()?;
    let task =
        internal::task::get_task(&connection, task_id)?.ok_or(ServiceError::TaskNotFound)?;
    DELETE_TASK.run(&RuleContext::minimal_with_member_uuid(
        pool,
        task.group_id,
        &host.user_uuid,
        &task.user_uuid,
    ))?;
    internal::task::delete_task(&connection, task_id)?;
    let log_ctx = LogContext::with(task.group_id, host.user_uuid).with_user(task.user_uuid);
    internal::log::db_log(
        &connection,
        &log_ctx,
        LogTargetType::Task,
        LogOperationType::Deleted,
        None,
    );
    info!("deleted task {} from group {}", task_id, task.group_id);
    Ok(())
}

pub fn get_user_all_tasks(
    pool: &Pool,
    host: &User,
    filters: &TaskFilters,
) -> Result<Vec<Task>, Error> {
    let connection = pool.get()?;
    internal::task::tasks_for_user(&connection, &host.user_uuid, filters)
}
