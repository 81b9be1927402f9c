use crate::db::model::Group;
use crate::db::model::Task;
use crate::db::types::*;
use chrono::NaiveDateTime;
use serde::Serialize;
use std::collections::HashMap;
use uuid::Uuid;

#[derive(Serialize, Debug, PartialEq)]
pub struct DisplayGroupInfo {
    pub id: i32,
    pub name: String,
    #[serde(rename = "userId")]
    pub creator_uuid: Uuid,
    #[serde(rename = "createdAt")]
    pub created: NaiveDateTime,
}

impl From<Group> for DisplayGroupInfo {
    fn from(group: Group) -> Self {
        DisplayGroupInfo {
            id: group.id,
            name: group.name,
            creator_uuid: group.creator_uuid,
            created: group.created,
        }
    }
}

#[derive(Serialize, Debug, PartialEq)]
pub struct DisplayTask {
    pub id: i32,
    #[serde(rename = "TaskName")]
    pub task_name: String,
    #[serde(rename = "Priority")]
    pub priority: TaskPriority,
    #[serde(rename = "DeadLine")]
    pub deadline: NaiveDateTime,
    #[serde(rename = "Status")]
    pub status: TaskStatus,
    #[serde(rename = "groupId")]
    pub group_id: i32,
    #[serde(rename = "userId")]
    pub user_uuid: Uuid,
    #[serde(rename = "parentId")]
    pub parent_uuid: Uuid,
    #[serde(rename = "CreatedAt")]
    pub created: NaiveDateTime,
    #[serde(rename = "UpdatedAt")]
    pub updated: NaiveDateTime,
}

impl From<Task> for DisplayTask {
    fn from(task: Task) -> Self {
        DisplayTask {
            id: task.id,
            task_name: task.task_name,
            priority: task.priority,
            deadline: task.deadline,
            status: task.status,
            group_id: task.group_id,
            user_uuid: task.user_uuid,
            parent_uuid: task.parent_uuid,
            created: task.created,
            updated: task.updated,
        }
    }
}

/// One node of the expanded delegation tree.
#[derive(Serialize, Debug, PartialEq)]
pub struct MemberNode {
    #[serde(rename = "id")]
    pub user_uuid: Uuid,
    pub name: String,
    pub email: String,
    pub role: RoleType,
    pub level: i32,
    #[serde(rename = "subUsers")]
    pub sub_users: Vec<MemberNode>,
}

/// Flat listing of a member with their group-scoped tasks.
#[derive(Serialize, Debug)]
pub struct DisplayGroupMember {
    #[serde(rename = "id")]
    pub user_uuid: Uuid,
    pub name: String,
    pub email: String,
    #[serde(rename = "parentId")]
    pub parent_uuid: Uuid,
    pub role: RoleType,
    pub level: i32,
    pub tasks: Vec<DisplayTask>,
}

#[derive(Serialize, Debug)]
pub struct DisplayGroup {
    #[serde(rename = "groupId")]
    pub group_id: i32,
    pub name: String,
    #[serde(rename = "createdAt")]
    pub created: NaiveDateTime,
    pub members: Vec<DisplayGroupMember>,
    pub hierarchy: Option<MemberNode>,
}

#[derive(Serialize, Debug, PartialEq)]
pub struct FlatSubUser {
    #[serde(rename = "id")]
    pub user_uuid: Uuid,
    pub name: String,
    pub email: String,
    #[serde(rename = "parentId")]
    pub parent_uuid: Uuid,
    pub level: i32,
}

/// Per-group slice of the caller's own subtree, keyed by group in the
/// response map.
#[derive(Serialize, Debug)]
pub struct GroupSubtree {
    #[serde(rename = "groupId")]
    pub group_id: i32,
    #[serde(rename = "groupName")]
    pub group_name: String,
    pub users: Vec<FlatSubUser>,
}

#[derive(Serialize, Debug, PartialEq)]
pub struct TaskAnalytics {
    #[serde(rename = "totalTasks")]
    pub total_tasks: usize,
    #[serde(rename = "completedTasks")]
    pub completed_tasks: usize,
    #[serde(rename = "onTimeTasks")]
    pub on_time_tasks: usize,
    #[serde(rename = "delayedTasks")]
    pub delayed_tasks: usize,
    #[serde(rename = "avgCompletionTime")]
    pub avg_completion_time: f64,
}

#[derive(Serialize, Debug, PartialEq)]
pub struct MonthlyTrends {
    pub collective: Vec<i64>,
    #[serde(rename = "perGroup")]
    pub per_group: HashMap<i32, Vec<i64>>,
}

#[derive(Serialize, Debug, PartialEq)]
pub struct PeakHours {
    pub collective: Vec<i64>,
    #[serde(rename = "perGroup")]
    pub per_group: HashMap<i32, Vec<i64>>,
}

#[derive(Debug, PartialEq)]
pub enum TaskUpdateKind {
    Full,
    StatusOnly,
}

pub struct TaskFilters {
    pub status: Option<TaskStatus>,
    pub priority: Option<TaskPriority>,
    pub start: Option<NaiveDateTime>,
    pub end: Option<NaiveDateTime>,
}
