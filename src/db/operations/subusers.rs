use crate::db::internal;
use crate::db::logs::log_comment_body;
use crate::db::logs::LogContext;
use crate::db::model::GroupMember;
use crate::db::model::SubUser;
use crate::db::types::*;
use crate::db::Pool;
use crate::error::ServiceError;
use crate::rules::engine::CREATE_SUB_USER;
use crate::rules::engine::DELETE_SUB_USER;
use crate::rules::RuleContext;
use crate::user::User;
use diesel::Connection;
use failure::Error;
use log::info;
use uuid::Uuid;

/// Grafts `user` below `parent`, one level deeper, writing both the flat
/// membership row and the tree edge in one transaction.
pub fn create_sub_user(
    pool: &Pool,
    parent_uuid: Uuid,
    user_uuid: Uuid,
    group_id: i32,
    role: RoleType,
) -> Result<(SubUser, GroupMember), Error> {
    let connection = pool.get()?;
    if internal::user::user_profile_by_uuid_maybe(&connection, &parent_uuid)?.is_none()
        || internal::user::user_profile_by_uuid_maybe(&connection, &user_uuid)?.is_none()
        || internal::group::get_group_maybe(&connection, group_id)?.is_none()
    {
        return Err(ServiceError::SubUserEntitiesMissing.into());
    }
    CREATE_SUB_USER.run(&RuleContext::minimal(pool, group_id, &parent_uuid))?;
    let parent = internal::member::get_membership(&connection, group_id, &parent_uuid)?
        .ok_or(ServiceError::SubUserEntitiesMissing)?;
    let level = parent.level + 1;
    let created = connection.transaction::<(SubUser, GroupMember), Error, _>(|| {
        let edge = internal::subuser::add_edge(
            &connection,
            group_id,
            parent_uuid,
            user_uuid,
            RoleType::SubUser,
            level,
        )?;
        let membership =
            internal::member::add_to_group(&connection, group_id, user_uuid, parent_uuid, role, level)?;
        let log_ctx = LogContext::with(group_id, parent_uuid).with_user(user_uuid);
        internal::log::db_log(
            &connection,
            &log_ctx,
            LogTargetType::SubUser,
            LogOperationType::Created,
            None,
        );
        Ok((edge, membership))
    })?;
    info!(
        "added sub user {} below {} in group {} at level {}",
        user_uuid, parent_uuid, group_id, level
    );
    Ok(created)
}

/// Removes the edge, the matching membership rows, and the sub-user's
/// tasks within the group. Allowed for peers of the target and anyone
/// above them.
pub fn delete_sub_user(
    pool: &Pool,
    host: &User,
    group_id: i32,
    parent_uuid: Uuid,
    sub_user_uuid: Uuid,
) -> Result<(), Error> {
    let connection = pool.get()?;
    internal::group::get_group(&connection, group_id)?;
    let edge = internal::subuser::get_edge(&connection, group_id, &parent_uuid, &sub_user_uuid)?
        .ok_or(ServiceError::SubUserNotFound)?;
    DELETE_SUB_USER.run(&RuleContext::minimal_with_member_uuid(
        pool,
        group_id,
        &host.user_uuid,
        &sub_user_uuid,
    ))?;
    connection.transaction::<(), Error, _>(|| {
        internal::subuser::delete_edge(&connection, edge.id)?;
        internal::member::remove_matching(&connection, group_id, &parent_uuid, &sub_user_uuid)?;
        internal::task::delete_tasks_for_user_in_group(&connection, group_id, &sub_user_uuid)?;
        let log_ctx = LogContext::with(group_id, host.user_uuid).with_user(sub_user_uuid);
        internal::log::db_log(
            &connection,
            &log_ctx,
            LogTargetType::SubUser,
            LogOperationType::Deleted,
            log_comment_body("sub user, membership and tasks"),
        );
        Ok(())
    })?;
    info!(
        "removed sub user {} below {} from group {}",
        sub_user_uuid, parent_uuid, group_id
    );
    Ok(())
}
