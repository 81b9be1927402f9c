use serde::Deserialize;
use serde::Serialize;
use std::fmt;

#[derive(Clone, Copy, DbEnum, Debug, Deserialize, PartialEq, Serialize)]
#[DieselType = "Role_type"]
#[serde(rename_all = "camelCase")]
pub enum RoleType {
    Creator,
    Member,
    SubUser,
}

impl Default for RoleType {
    fn default() -> Self {
        Self::SubUser
    }
}

#[derive(Clone, Copy, DbEnum, Debug, Deserialize, PartialEq, Serialize)]
#[DieselType = "Task_priority"]
pub enum TaskPriority {
    Low,
    High,
}

impl fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TaskPriority::Low => write!(f, "Low"),
            TaskPriority::High => write!(f, "High"),
        }
    }
}

#[derive(Clone, Copy, DbEnum, Debug, Deserialize, PartialEq, Serialize)]
#[DieselType = "Task_status"]
pub enum TaskStatus {
    Pending,
    InProgress,
    Completed,
    Blocked,
}

#[derive(Clone, Copy, DbEnum, Debug, Deserialize, PartialEq, Serialize)]
#[DieselType = "Invite_status"]
#[serde(rename_all = "lowercase")]
pub enum InviteStatus {
    Pending,
    Accepted,
    Expired,
}

#[derive(Clone, Copy, DbEnum, Debug, Deserialize, PartialEq, Serialize)]
#[DieselType = "Log_target_type"]
pub enum LogTargetType {
    Group,
    Membership,
    SubUser,
    Task,
    Invite,
}

#[derive(Clone, Copy, DbEnum, Debug, Deserialize, PartialEq, Serialize)]
#[DieselType = "Log_operation_type"]
pub enum LogOperationType {
    Created,
    Deleted,
    Updated,
}
