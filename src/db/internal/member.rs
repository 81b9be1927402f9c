use crate::db::model::Group;
use crate::db::model::GroupMember;
use crate::db::model::InsertGroupMember;
use crate::db::model::UserProfile;
use crate::db::schema;
use crate::db::types::RoleType;
use crate::error::ServiceError;
use diesel::prelude::*;
use diesel::result::DatabaseErrorKind;
use diesel::result::Error as DieselError;
use failure::Error;
use uuid::Uuid;

pub fn member_level(
    connection: &PgConnection,
    group_id: i32,
    user_uuid: &Uuid,
) -> Result<Option<i32>, Error> {
    schema::group_members::table
        .filter(schema::group_members::group_id.eq(group_id))
        .filter(schema::group_members::user_uuid.eq(user_uuid))
        .select(schema::group_members::level)
        .first::<i32>(connection)
        .optional()
        .map_err(Into::into)
}

pub fn get_membership(
    connection: &PgConnection,
    group_id: i32,
    user_uuid: &Uuid,
) -> Result<Option<GroupMember>, Error> {
    schema::group_members::table
        .filter(schema::group_members::group_id.eq(group_id))
        .filter(schema::group_members::user_uuid.eq(user_uuid))
        .first::<GroupMember>(connection)
        .optional()
        .map_err(Into::into)
}

pub fn add_to_group(
    connection: &PgConnection,
    group_id: i32,
    user_uuid: Uuid,
    parent_uuid: Uuid,
    role: RoleType,
    level: i32,
) -> Result<GroupMember, Error> {
    let membership = InsertGroupMember {
        group_id,
        user_uuid,
        parent_uuid,
        role,
        level,
    };
    match diesel::insert_into(schema::group_members::table)
        .values(&membership)
        .get_result::<GroupMember>(connection)
    {
        Err(DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _)) => {
            Err(ServiceError::AlreadyMember.into())
        }
        result => result.map_err(Into::into),
    }
}

pub fn members_with_users(
    connection: &PgConnection,
    group_id: i32,
) -> Result<Vec<(GroupMember, UserProfile)>, Error> {
    use schema::group_members as m;
    use schema::users as u;
    m::table
        .filter(m::group_id.eq(group_id))
        .inner_join(u::table.on(u::user_uuid.eq(m::user_uuid)))
        .order_by(m::level.asc())
        .then_order_by(m::added_ts.asc())
        .get_results::<(GroupMember, UserProfile)>(connection)
        .map_err(Into::into)
}

pub fn memberships_for_user(
    connection: &PgConnection,
    user_uuid: &Uuid,
) -> Result<Vec<(GroupMember, Group)>, Error> {
    use schema::group_members as m;
    use schema::groups as g;
    m::table
        .filter(m::user_uuid.eq(user_uuid))
        .inner_join(g::table)
        .order_by(m::added_ts.asc())
        .get_results::<(GroupMember, Group)>(connection)
        .map_err(Into::into)
}

pub fn remove_matching(
    connection: &PgConnection,
    group_id: i32,
    parent_uuid: &Uuid,
    user_uuid: &Uuid,
) -> Result<usize, Error> {
    diesel::delete(schema::group_members::table)
        .filter(schema::group_members::group_id.eq(group_id))
        .filter(schema::group_members::parent_uuid.eq(parent_uuid))
        .filter(schema::group_members::user_uuid.eq(user_uuid))
        .execute(connection)
        .map_err(Into::into)
}

pub fn delete_all_for_group(connection: &PgConnection, group_id: i32) -> Result<usize, Error> {
    diesel::delete(schema::group_members::table)
        .filter(schema::group_members::group_id.eq(group_id))
        .execute(connection)
        .map_err(Into::into)
}
