use crate::db::internal;
use crate::db::model::InsertUserProfile;
use crate::db::model::UserProfile;
use crate::db::Pool;
use crate::user::User;
use failure::Error;
use uuid::Uuid;

pub fn user_by_id(pool: &Pool, user_id: &str) -> Result<User, Error> {
    let connection = pool.get()?;
    internal::user::user_by_id(&connection, user_id)
}

pub fn user_profile_by_uuid(pool: &Pool, user_uuid: &Uuid) -> Result<UserProfile, Error> {
    let connection = pool.get()?;
    internal::user::user_profile_by_uuid(&connection, user_uuid)
}

/// Sync a user record from the identity provider into the local mirror.
pub fn upsert_user(pool: &Pool, profile: &InsertUserProfile) -> Result<UserProfile, Error> {
    let connection = pool.get()?;
    internal::user::upsert_user(&connection, profile)
}
