use crate::db::operations::models::TaskFilters;
use crate::db::operations::tasks::NewTask;
use crate::db::operations::tasks::TaskUpdate;
use crate::db::types::RoleType;
use crate::db::types::TaskPriority;
use crate::db::types::TaskStatus;
use crate::error::ServiceError;
use chrono::NaiveDate;
use chrono::NaiveDateTime;
use serde::Deserialize;
use uuid::Uuid;

#[derive(Deserialize)]
pub struct CreateGroupRequest {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Deserialize)]
pub struct CreateSubUserRequest {
    #[serde(rename = "parentId")]
    pub parent_uuid: Uuid,
    #[serde(rename = "userId")]
    pub user_uuid: Uuid,
    #[serde(rename = "groupId")]
    pub group_id: i32,
    #[serde(default)]
    pub role: RoleType,
}

#[derive(Deserialize)]
pub struct DeleteSubUserRequest {
    #[serde(rename = "parentId")]
    pub parent_uuid: Uuid,
    #[serde(rename = "subUserId")]
    pub sub_user_uuid: Uuid,
}

#[derive(Deserialize)]
pub struct InviteUserRequest {
    #[serde(rename = "GroupId")]
    pub group_id: i32,
    // The inviter always resolves from the session, the body field is
    // accepted for wire compatibility only.
    #[serde(rename = "inviterId", default)]
    pub inviter_uuid: Option<Uuid>,
}

#[derive(Deserialize)]
pub struct NewTaskRequest {
    #[serde(rename = "TaskName", default)]
    pub task_name: Option<String>,
    #[serde(rename = "Priority", default)]
    pub priority: Option<TaskPriority>,
    #[serde(rename = "DeadLine", default)]
    pub deadline: Option<NaiveDateTime>,
    #[serde(rename = "Status", default)]
    pub status: Option<TaskStatus>,
    #[serde(rename = "groupId", default)]
    pub group_id: Option<i32>,
    #[serde(rename = "parentId", default)]
    pub parent_uuid: Option<Uuid>,
    #[serde(rename = "userId", default)]
    pub user_uuid: Option<Uuid>,
}

impl NewTaskRequest {
    /// Mirrors the all-fields-required contract of the create endpoint.
    pub fn validated(self) -> Result<NewTask, ServiceError> {
        match (
            self.task_name.filter(|n| !n.trim().is_empty()),
            self.priority,
            self.deadline,
            self.status,
            self.group_id,
            self.parent_uuid,
            self.user_uuid,
        ) {
            (
                Some(task_name),
                Some(priority),
                Some(deadline),
                Some(status),
                Some(group_id),
                Some(parent_uuid),
                Some(user_uuid),
            ) => Ok(NewTask {
                task_name,
                priority,
                deadline,
                status,
                group_id,
                parent_uuid,
                user_uuid,
            }),
            _ => Err(ServiceError::MissingTaskFields),
        }
    }
}

#[derive(Deserialize)]
pub struct UpdateTaskRequest {
    pub id: i32,
    #[serde(rename = "TaskName", default)]
    pub task_name: Option<String>,
    #[serde(rename = "Priority", default)]
    pub priority: Option<TaskPriority>,
    #[serde(rename = "DeadLine", default)]
    pub deadline: Option<NaiveDateTime>,
    #[serde(rename = "Status", default)]
    pub status: Option<TaskStatus>,
}

impl From<UpdateTaskRequest> for TaskUpdate {
    fn from(r: UpdateTaskRequest) -> Self {
        TaskUpdate {
            task_name: r.task_name,
            priority: r.priority,
            deadline: r.deadline,
            status: r.status,
        }
    }
}

#[derive(Deserialize)]
pub struct TaskQuery {
    #[serde(default)]
    pub status: Option<TaskStatus>,
    #[serde(default)]
    pub priority: Option<TaskPriority>,
    #[serde(rename = "startDate", default)]
    pub start_date: Option<NaiveDate>,
    #[serde(rename = "endDate", default)]
    pub end_date: Option<NaiveDate>,
}

impl From<TaskQuery> for TaskFilters {
    fn from(q: TaskQuery) -> Self {
        TaskFilters {
            status: q.status,
            priority: q.priority,
            start: q.start_date.map(|d| d.and_hms(0, 0, 0)),
            end: q.end_date.map(|d| d.and_hms(0, 0, 0)),
        }
    }
}
