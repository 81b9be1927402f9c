use crate::db::model::Group;
use crate::db::model::InsertGroup;
use crate::db::schema;
use crate::error::ServiceError;
use diesel::prelude::*;
use failure::Error;
use uuid::Uuid;

pub fn get_group(connection: &PgConnection, group_id: i32) -> Result<Group, Error> {
    schema::groups::table
        .filter(schema::groups::group_id.eq(group_id))
        .first::<Group>(connection)
        .optional()?
        .ok_or_else(|| ServiceError::GroupNotFound.into())
}

pub fn get_group_maybe(connection: &PgConnection, group_id: i32) -> Result<Option<Group>, Error> {
    schema::groups::table
        .filter(schema::groups::group_id.eq(group_id))
        .first::<Group>(connection)
        .optional()
        .map_err(Into::into)
}

pub fn add_group(connection: &PgConnection, name: String, creator_uuid: Uuid) -> Result<Group, Error> {
    let group = InsertGroup { name, creator_uuid };
    diesel::insert_into(schema::groups::table)
        .values(&group)
        .get_result::<Group>(connection)
        .map_err(Into::into)
}

pub fn delete_group(connection: &PgConnection, group_id: i32) -> Result<(), Error> {
    diesel::delete(schema::groups::table)
        .filter(schema::groups::group_id.eq(group_id))
        .execute(connection)
        .map(|_| ())
        .map_err(Into::into)
}

/// Groups the user founded or joined, founder's groups first.
pub fn groups_for_user(connection: &PgConnection, user_uuid: &Uuid) -> Result<Vec<Group>, Error> {
    use schema::group_members as m;
    use schema::groups as g;

    let mut groups: Vec<Group> = g::table
        .filter(g::creator_uuid.eq(user_uuid))
        .order_by(g::created.asc())
        .get_results(connection)?;
    let joined: Vec<Group> = m::table
        .filter(m::user_uuid.eq(user_uuid))
        .inner_join(g::table)
        .select(g::all_columns)
        .order_by(g::created.asc())
        .get_results(connection)?;
    for group in joined {
        if groups.iter().all(|g| g.id != group.id) {
            groups.push(group);
        }
    }
    Ok(groups)
}
