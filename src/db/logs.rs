use crate::db::schema::*;
use crate::db::types::*;
use chrono::NaiveDateTime;
use serde_json::json;
use serde_json::Value;
use uuid::Uuid;

#[derive(Insertable, Debug)]
#[table_name = "logs"]
pub struct InsertLog {
    pub ts: Option<NaiveDateTime>,
    pub target: LogTargetType,
    pub operation: LogOperationType,
    pub group_id: i32,
    pub host_uuid: Uuid,
    pub user_uuid: Option<Uuid>,
    pub ok: bool,
    pub body: Option<Value>,
}

pub fn log_comment_body(comment: &str) -> Option<Value> {
    Some(json!({ "comment": comment }))
}

pub struct LogContext {
    pub group_id: i32,
    pub host_uuid: Uuid,
    pub user_uuid: Option<Uuid>,
}

impl LogContext {
    pub fn with(group_id: i32, host_uuid: Uuid) -> Self {
        LogContext {
            group_id,
            host_uuid,
            user_uuid: None,
        }
    }
    pub fn with_user(mut self, user_uuid: Uuid) -> Self {
        self.user_uuid = Some(user_uuid);
        self
    }
}
