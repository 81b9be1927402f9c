use crate::db::model::InsertSubUser;
use crate::db::model::SubUser;
use crate::db::schema;
use crate::db::types::RoleType;
use crate::error::ServiceError;
use diesel::prelude::*;
use diesel::result::DatabaseErrorKind;
use diesel::result::Error as DieselError;
use failure::Error;
use uuid::Uuid;

pub fn add_edge(
    connection: &PgConnection,
    group_id: i32,
    parent_uuid: Uuid,
    user_uuid: Uuid,
    role: RoleType,
    level: i32,
) -> Result<SubUser, Error> {
    let edge = InsertSubUser {
        group_id,
        parent_uuid,
        user_uuid,
        role,
        level,
    };
    match diesel::insert_into(schema::sub_users::table)
        .values(&edge)
        .get_result::<SubUser>(connection)
    {
        Err(DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _)) => {
            Err(ServiceError::AlreadyMember.into())
        }
        result => result.map_err(Into::into),
    }
}

pub fn get_edge(
    connection: &PgConnection,
    group_id: i32,
    parent_uuid: &Uuid,
    user_uuid: &Uuid,
) -> Result<Option<SubUser>, Error> {
    schema::sub_users::table
        .filter(schema::sub_users::group_id.eq(group_id))
        .filter(schema::sub_users::parent_uuid.eq(parent_uuid))
        .filter(schema::sub_users::user_uuid.eq(user_uuid))
        .first::<SubUser>(connection)
        .optional()
        .map_err(Into::into)
}

pub fn edges_for_group(connection: &PgConnection, group_id: i32) -> Result<Vec<SubUser>, Error> {
    schema::sub_users::table
        .filter(schema::sub_users::group_id.eq(group_id))
        .order_by(schema::sub_users::level.asc())
        .then_order_by(schema::sub_users::added_ts.asc())
        .get_results(connection)
        .map_err(Into::into)
}

pub fn delete_edge(connection: &PgConnection, sub_user_id: i32) -> Result<usize, Error> {
    diesel::delete(schema::sub_users::table)
        .filter(schema::sub_users::sub_user_id.eq(sub_user_id))
        .execute(connection)
        .map_err(Into::into)
}

pub fn delete_all_for_group(connection: &PgConnection, group_id: i32) -> Result<usize, Error> {
    diesel::delete(schema::sub_users::table)
        .filter(schema::sub_users::group_id.eq(group_id))
        .execute(connection)
        .map_err(Into::into)
}
