use crate::db::model::InsertUserProfile;
use crate::db::model::UserProfile;
use crate::db::schema;
use crate::error::ServiceError;
use crate::user::User;
use diesel::prelude::*;
use failure::Error;
use uuid::Uuid;

pub fn user_by_id(connection: &PgConnection, user_id: &str) -> Result<User, Error> {
    schema::users::table
        .filter(schema::users::user_id.eq(user_id))
        .select(schema::users::user_uuid)
        .first(connection)
        .optional()?
        .map(|user_uuid| User { user_uuid })
        .ok_or_else(|| ServiceError::UserNotFound.into())
}

pub fn user_profile_by_uuid(
    connection: &PgConnection,
    user_uuid: &Uuid,
) -> Result<UserProfile, Error> {
    schema::users::table
        .filter(schema::users::user_uuid.eq(user_uuid))
        .first::<UserProfile>(connection)
        .optional()?
        .ok_or_else(|| ServiceError::UserNotFound.into())
}

pub fn user_profile_by_uuid_maybe(
    connection: &PgConnection,
    user_uuid: &Uuid,
) -> Result<Option<UserProfile>, Error> {
    schema::users::table
        .filter(schema::users::user_uuid.eq(user_uuid))
        .first::<UserProfile>(connection)
        .optional()
        .map_err(Into::into)
}

pub fn upsert_user(
    connection: &PgConnection,
    profile: &InsertUserProfile,
) -> Result<UserProfile, Error> {
    diesel::insert_into(schema::users::table)
        .values(profile)
        .on_conflict(schema::users::user_uuid)
        .do_update()
        .set(profile)
        .get_result(connection)
        .map_err(Into::into)
}
