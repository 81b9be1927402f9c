use crate::db::internal;
use crate::db::logs::log_comment_body;
use crate::db::logs::LogContext;
use crate::db::model::GroupMember;
use crate::db::model::SubUser;
use crate::db::types::*;
use crate::db::Pool;
use crate::error::ServiceError;
use crate::rules::engine::ACCEPT_INVITE;
use crate::rules::engine::INVITE_MEMBER;
use crate::rules::RuleContext;
use crate::settings::Nudgr;
use crate::user::User;
use crate::utils::to_expiration_ts;
use chrono::Utc;
use diesel::Connection;
use failure::Error;
use log::info;
use url::Url;

/// Issues a time-boxed, single-use token bound to the inviter and the
/// group, and returns the link the frontend hands out.
pub fn generate_invite_link(
    pool: &Pool,
    settings: &Nudgr,
    host: &User,
    group_id: i32,
) -> Result<String, Error> {
    let connection = pool.get()?;
    internal::group::get_group(&connection, group_id)?;
    INVITE_MEMBER.run(&RuleContext::minimal(pool, group_id, &host.user_uuid))?;
    let expires_at = to_expiration_ts(settings.invite_expiration_hours);
    let invite = internal::invitation::create_invite(&connection, group_id, host.user_uuid, expires_at)?;
    let log_ctx = LogContext::with(group_id, host.user_uuid);
    internal::log::db_log(
        &connection,
        &log_ctx,
        LogTargetType::Invite,
        LogOperationType::Created,
        None,
    );
    info!("created invite for group {}", group_id);
    let mut link = Url::parse(&settings.domain)?;
    link.set_path(&format!("/invite/{}", invite.token));
    Ok(link.to_string())
}

/// Read-only probe: true while the token is pending and unexpired.
pub fn check_invite(pool: &Pool, token: &str) -> Result<bool, Error> {
    let connection = pool.get()?;
    let invite = internal::invitation::invite_by_token(&connection, token)?;
    Ok(invite
        .map(|i| i.status == InviteStatus::Pending && Utc::now().naive_utc() < i.expires_at)
        .unwrap_or(false))
}

/// Redeems a pending token: the invitee lands one level below the
/// inviter, with both the membership row and the tree edge written
/// together with the invite transition.
pub fn accept_invite(
    pool: &Pool,
    invitee: &User,
    token: &str,
) -> Result<(GroupMember, SubUser), Error> {
    let connection = pool.get()?;
    let invite = internal::invitation::invite_by_token(&connection, token)?
        .ok_or(ServiceError::InviteNotFound)?;
    match invite.status {
        InviteStatus::Pending => (),
        InviteStatus::Accepted => return Err(ServiceError::InviteAlreadyUsed.into()),
        InviteStatus::Expired => return Err(ServiceError::InviteExpired.into()),
    }
    if Utc::now().naive_utc() >= invite.expires_at {
        return Err(ServiceError::InviteExpired.into());
    }
    ACCEPT_INVITE.run(&RuleContext::minimal(
        pool,
        invite.group_id,
        &invite.inviter_uuid,
    ))?;
    let inviter = internal::member::get_membership(&connection, invite.group_id, &invite.inviter_uuid)?
        .ok_or(ServiceError::SubUserEntitiesMissing)?;
    let level = inviter.level + 1;
    let accepted = connection.transaction::<(GroupMember, SubUser), Error, _>(|| {
        let membership = internal::member::add_to_group(
            &connection,
            invite.group_id,
            invitee.user_uuid,
            invite.inviter_uuid,
            RoleType::Member,
            level,
        )?;
        let edge = internal::subuser::add_edge(
            &connection,
            invite.group_id,
            invite.inviter_uuid,
            invitee.user_uuid,
            RoleType::SubUser,
            level,
        )?;
        internal::invitation::mark_accepted(&connection, token, invitee.user_uuid)?;
        let log_ctx =
            LogContext::with(invite.group_id, invite.inviter_uuid).with_user(invitee.user_uuid);
        internal::log::db_log(
            &connection,
            &log_ctx,
            LogTargetType::Membership,
            LogOperationType::Created,
            log_comment_body("invite accepted"),
        );
        Ok((membership, edge))
    })?;
    info!(
        "user {} joined group {} at level {}",
        invitee.user_uuid, invite.group_id, level
    );
    Ok(accepted)
}
