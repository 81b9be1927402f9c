use crate::db::internal;
use crate::db::logs::log_comment_body;
use crate::db::logs::LogContext;
use crate::db::model::Group;
use crate::db::operations::hierarchy;
use crate::db::operations::hierarchy::NodeInfo;
use crate::db::operations::models::*;
use crate::db::types::*;
use crate::db::Pool;
use crate::error::ServiceError;
use crate::rules::engine::DELETE_GROUP;
use crate::rules::RuleContext;
use crate::user::User;
use diesel::Connection;
use failure::Error;
use log::info;
use std::collections::HashMap;
use uuid::Uuid;

/// Creates the group and seats the creator as its only level-one member.
pub fn create_group(pool: &Pool, host: &User, name: Option<String>) -> Result<Group, Error> {
    let name = name
        .map(|n| n.trim().to_owned())
        .filter(|n| !n.is_empty())
        .ok_or(ServiceError::GroupNameRequired)?;
    let connection = pool.get()?;
    internal::user::user_profile_by_uuid(&connection, &host.user_uuid)?;
    let group = connection.transaction::<Group, Error, _>(|| {
        let group = internal::group::add_group(&connection, name, host.user_uuid)?;
        internal::member::add_to_group(
            &connection,
            group.id,
            host.user_uuid,
            host.user_uuid,
            RoleType::Creator,
            1,
        )?;
        let log_ctx = LogContext::with(group.id, host.user_uuid);
        internal::log::db_log(
            &connection,
            &log_ctx,
            LogTargetType::Group,
            LogOperationType::Created,
            None,
        );
        Ok(group)
    })?;
    info!("created group {} ({})", group.name, group.id);
    Ok(group)
}

/// Tears down the whole group: tasks, invites, edges, memberships, group.
pub fn delete_group(pool: &Pool, host: &User, group_id: i32) -> Result<(), Error> {
    let connection = pool.get()?;
    internal::group::get_group(&connection, group_id)?;
    DELETE_GROUP.run(&RuleContext::minimal(pool, group_id, &host.user_uuid))?;
    connection.transaction::<(), Error, _>(|| {
        internal::task::delete_tasks_for_group(&connection, group_id)?;
        internal::invitation::delete_all_for_group(&connection, group_id)?;
        internal::subuser::delete_all_for_group(&connection, group_id)?;
        internal::member::delete_all_for_group(&connection, group_id)?;
        internal::group::delete_group(&connection, group_id)?;
        let log_ctx = LogContext::with(group_id, host.user_uuid);
        internal::log::db_log(
            &connection,
            &log_ctx,
            LogTargetType::Group,
            LogOperationType::Deleted,
            log_comment_body("group and all memberships"),
        );
        Ok(())
    })?;
    info!("deleted group {}", group_id);
    Ok(())
}

/// Every group the caller founded or joined, with the flat member listing
/// (tasks scoped to the group) and the expanded delegation tree.
pub fn get_all_groups(pool: &Pool, host: &User, max_depth: u32) -> Result<Vec<DisplayGroup>, Error> {
    let connection = pool.get()?;
    let groups = internal::group::groups_for_user(&connection, &host.user_uuid)?;
    let mut display = Vec::with_capacity(groups.len());
    for group in groups {
        let members = internal::member::members_with_users(&connection, group.id)?;
        let edges = internal::subuser::edges_for_group(&connection, group.id)?;
        let users: HashMap<Uuid, NodeInfo> = members
            .iter()
            .map(|(m, u)| {
                (
                    m.user_uuid,
                    NodeInfo {
                        name: u.name.clone(),
                        email: u.email.clone(),
                    },
                )
            })
            .collect();
        let hierarchy = members
            .iter()
            .find(|(m, _)| m.level == 1)
            .map(|(m, _)| {
                hierarchy::build_subtree(m.user_uuid, m.role, m.level, &edges, &users, max_depth)
            });
        let mut flat = Vec::with_capacity(members.len());
        for (member, user) in &members {
            let tasks =
                internal::task::tasks_for_user_in_group(&connection, group.id, &member.user_uuid)?;
            flat.push(DisplayGroupMember {
                user_uuid: member.user_uuid,
                name: user.name.clone(),
                email: user.email.clone(),
                parent_uuid: member.parent_uuid,
                role: member.role,
                level: member.level,
                tasks: tasks.into_iter().map(Into::into).collect(),
            });
        }
        display.push(DisplayGroup {
            group_id: group.id,
            name: group.name,
            created: group.created,
            members: flat,
            hierarchy,
        });
    }
    Ok(display)
}

/// The caller's own subtree per group, flattened for assignment pickers.
pub fn get_group_level_wise(
    pool: &Pool,
    host: &User,
    max_depth: u32,
) -> Result<HashMap<i32, GroupSubtree>, Error> {
    let connection = pool.get()?;
    let memberships = internal::member::memberships_for_user(&connection, &host.user_uuid)?;
    let mut by_group = HashMap::with_capacity(memberships.len());
    for (membership, group) in memberships {
        let members = internal::member::members_with_users(&connection, group.id)?;
        let edges = internal::subuser::edges_for_group(&connection, group.id)?;
        let users: HashMap<Uuid, NodeInfo> = members
            .iter()
            .map(|(m, u)| {
                (
                    m.user_uuid,
                    NodeInfo {
                        name: u.name.clone(),
                        email: u.email.clone(),
                    },
                )
            })
            .collect();
        let flat = hierarchy::flatten_subtree(
            membership.user_uuid,
            membership.parent_uuid,
            membership.level,
            &edges,
            &users,
            max_depth,
        );
        by_group.insert(
            group.id,
            GroupSubtree {
                group_id: group.id,
                group_name: group.name,
                users: flat,
            },
        );
    }
    Ok(by_group)
}
