use crate::db::model::AcceptInviteChangeset;
use crate::db::model::InsertInvite;
use crate::db::model::Invite;
use crate::db::schema;
use crate::db::types::InviteStatus;
use crate::error::ServiceError;
use crate::utils::generate_invite_token;
use chrono::NaiveDateTime;
use chrono::Utc;
use diesel::prelude::*;
use failure::Error;
use uuid::Uuid;

const MAX_TOKEN_ATTEMPTS: usize = 5;

/// Inserts a fresh invite, retrying with a new token on the (unlikely)
/// unique-constraint collision.
pub fn create_invite(
    connection: &PgConnection,
    group_id: i32,
    inviter_uuid: Uuid,
    expires_at: NaiveDateTime,
) -> Result<Invite, Error> {
    for _ in 0..MAX_TOKEN_ATTEMPTS {
        let invite = InsertInvite {
            token: generate_invite_token(),
            group_id,
            inviter_uuid,
            status: InviteStatus::Pending,
            expires_at,
        };
        let inserted = diesel::insert_into(schema::invites::table)
            .values(&invite)
            .on_conflict_do_nothing()
            .get_result::<Invite>(connection)
            .optional()?;
        if let Some(invite) = inserted {
            return Ok(invite);
        }
    }
    Err(ServiceError::TokenCollision.into())
}

pub fn invite_by_token(connection: &PgConnection, token: &str) -> Result<Option<Invite>, Error> {
    schema::invites::table
        .filter(schema::invites::token.eq(token))
        .first::<Invite>(connection)
        .optional()
        .map_err(Into::into)
}

pub fn mark_accepted(
    connection: &PgConnection,
    token: &str,
    invitee_uuid: Uuid,
) -> Result<Invite, Error> {
    let changes = AcceptInviteChangeset {
        status: InviteStatus::Accepted,
        invitee_uuid: Some(invitee_uuid),
        used_at: Some(Utc::now().naive_utc()),
    };
    diesel::update(schema::invites::table.filter(schema::invites::token.eq(token)))
        .set(&changes)
        .get_result::<Invite>(connection)
        .map_err(Into::into)
}

pub fn delete_all_for_group(connection: &PgConnection, group_id: i32) -> Result<usize, Error> {
    diesel::delete(schema::invites::table)
        .filter(schema::invites::group_id.eq(group_id))
        .execute(connection)
        .map_err(Into::into)
}
