use crate::db::schema::*;
use crate::db::types::*;
use chrono::NaiveDateTime;
use serde::Serialize;
use uuid::Uuid;

#[derive(Identifiable, Queryable, PartialEq, Debug, Serialize)]
#[primary_key(user_uuid)]
#[table_name = "users"]
pub struct UserProfile {
    pub user_uuid: Uuid,
    pub user_id: String,
    pub name: String,
    pub email: String,
    pub created: NaiveDateTime,
}

#[derive(Identifiable, Queryable, PartialEq, Debug, Serialize)]
#[table_name = "groups"]
pub struct Group {
    pub id: i32,
    pub name: String,
    pub creator_uuid: Uuid,
    pub created: NaiveDateTime,
}

#[derive(Identifiable, Queryable, Associations, PartialEq, Debug)]
#[belongs_to(Group)]
#[table_name = "group_members"]
pub struct GroupMember {
    pub id: i32,
    pub group_id: i32,
    pub user_uuid: Uuid,
    pub parent_uuid: Uuid,
    pub role: RoleType,
    pub level: i32,
    pub added_ts: NaiveDateTime,
}

#[derive(Identifiable, Queryable, Associations, PartialEq, Debug)]
#[belongs_to(Group)]
#[table_name = "sub_users"]
pub struct SubUser {
    pub id: i32,
    pub group_id: i32,
    pub parent_uuid: Uuid,
    pub user_uuid: Uuid,
    pub role: RoleType,
    pub level: i32,
    pub added_ts: NaiveDateTime,
}

#[derive(Identifiable, Queryable, Associations, PartialEq, Debug, Clone)]
#[belongs_to(Group)]
#[table_name = "tasks"]
pub struct Task {
    pub id: i32,
    pub task_name: String,
    pub priority: TaskPriority,
    pub deadline: NaiveDateTime,
    pub status: TaskStatus,
    pub group_id: i32,
    pub user_uuid: Uuid,
    pub parent_uuid: Uuid,
    pub created: NaiveDateTime,
    pub updated: NaiveDateTime,
}

#[derive(Identifiable, Queryable, Associations, PartialEq, Debug)]
#[belongs_to(Group)]
#[table_name = "invites"]
pub struct Invite {
    pub id: i32,
    pub token: String,
    pub group_id: i32,
    pub inviter_uuid: Uuid,
    pub invitee_uuid: Option<Uuid>,
    pub status: InviteStatus,
    pub expires_at: NaiveDateTime,
    pub used_at: Option<NaiveDateTime>,
    pub created: NaiveDateTime,
}

#[derive(Insertable, AsChangeset)]
#[table_name = "users"]
pub struct InsertUserProfile {
    pub user_uuid: Uuid,
    pub user_id: String,
    pub name: String,
    pub email: String,
}

#[derive(Insertable)]
#[table_name = "groups"]
pub struct InsertGroup {
    pub name: String,
    pub creator_uuid: Uuid,
}

#[derive(Insertable)]
#[table_name = "group_members"]
pub struct InsertGroupMember {
    pub group_id: i32,
    pub user_uuid: Uuid,
    pub parent_uuid: Uuid,
    pub role: RoleType,
    pub level: i32,
}

#[derive(Insertable)]
#[table_name = "sub_users"]
pub struct InsertSubUser {
    pub group_id: i32,
    pub parent_uuid: Uuid,
    pub user_uuid: Uuid,
    pub role: RoleType,
    pub level: i32,
}

#[derive(Insertable)]
#[table_name = "tasks"]
pub struct InsertTask {
    pub task_name: String,
    pub priority: TaskPriority,
    pub deadline: NaiveDateTime,
    pub status: TaskStatus,
    pub group_id: i32,
    pub user_uuid: Uuid,
    pub parent_uuid: Uuid,
}

#[derive(Insertable)]
#[table_name = "invites"]
pub struct InsertInvite {
    pub token: String,
    pub group_id: i32,
    pub inviter_uuid: Uuid,
    pub status: InviteStatus,
    pub expires_at: NaiveDateTime,
}

#[derive(AsChangeset)]
#[table_name = "tasks"]
pub struct TaskChangeset {
    pub task_name: Option<String>,
    pub priority: Option<TaskPriority>,
    pub deadline: Option<NaiveDateTime>,
    pub status: Option<TaskStatus>,
    pub updated: NaiveDateTime,
}

#[derive(AsChangeset)]
#[table_name = "invites"]
pub struct AcceptInviteChangeset {
    pub status: InviteStatus,
    pub invitee_uuid: Option<Uuid>,
    pub used_at: Option<NaiveDateTime>,
}
