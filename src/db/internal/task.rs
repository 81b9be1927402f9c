use crate::db::model::InsertTask;
use crate::db::model::Task;
use crate::db::model::TaskChangeset;
use crate::db::operations::models::TaskFilters;
use crate::db::schema;
use diesel::prelude::*;
use failure::Error;
use uuid::Uuid;

pub fn add_task(connection: &PgConnection, task: &InsertTask) -> Result<Task, Error> {
    diesel::insert_into(schema::tasks::table)
        .values(task)
        .get_result::<Task>(connection)
        .map_err(Into::into)
}

pub fn get_task(connection: &PgConnection, task_id: i32) -> Result<Option<Task>, Error> {
    schema::tasks::table
        .filter(schema::tasks::task_id.eq(task_id))
        .first::<Task>(connection)
        .optional()
        .map_err(Into::into)
}

pub fn update_task(
    connection: &PgConnection,
    task_id: i32,
    changeset: &TaskChangeset,
) -> Result<Task, Error> {
    diesel::update(schema::tasks::table.filter(schema::tasks::task_id.eq(task_id)))
        .set(changeset)
        .get_result::<Task>(connection)
        .map_err(Into::into)
}

pub fn delete_task(connection: &PgConnection, task_id: i32) -> Result<usize, Error> {
    diesel::delete(schema::tasks::table)
        .filter(schema::tasks::task_id.eq(task_id))
        .execute(connection)
        .map_err(Into::into)
}

/// Deadline-ascending, High priority first within a deadline.
pub fn tasks_for_user(
    connection: &PgConnection,
    user_uuid: &Uuid,
    filters: &TaskFilters,
) -> Result<Vec<Task>, Error> {
    use schema::tasks as t;
    let mut query = t::table.filter(t::user_uuid.eq(user_uuid)).into_boxed();
    if let Some(status) = filters.status {
        query = query.filter(t::status.eq(status));
    }
    if let Some(priority) = filters.priority {
        query = query.filter(t::priority.eq(priority));
    }
    if let Some(start) = filters.start {
        query = query.filter(t::created.ge(start));
    }
    if let Some(end) = filters.end {
        query = query.filter(t::created.lt(end));
    }
    query
        .order_by(t::deadline.asc())
        .then_order_by(t::priority.desc())
        .get_results(connection)
        .map_err(Into::into)
}

pub fn all_tasks_for_user(connection: &PgConnection, user_uuid: &Uuid) -> Result<Vec<Task>, Error> {
    schema::tasks::table
        .filter(schema::tasks::user_uuid.eq(user_uuid))
        .get_results(connection)
        .map_err(Into::into)
}

pub fn tasks_for_user_in_group(
    connection: &PgConnection,
    group_id: i32,
    user_uuid: &Uuid,
) -> Result<Vec<Task>, Error> {
    schema::tasks::table
        .filter(schema::tasks::group_id.eq(group_id))
        .filter(schema::tasks::user_uuid.eq(user_uuid))
        .order_by(schema::tasks::deadline.asc())
        .get_results(connection)
        .map_err(Into::into)
}

pub fn delete_tasks_for_group(connection: &PgConnection, group_id: i32) -> Result<usize, Error> {
    diesel::delete(schema::tasks::table)
        .filter(schema::tasks::group_id.eq(group_id))
        .execute(connection)
        .map_err(Into::into)
}

pub fn delete_tasks_for_user_in_group(
    connection: &PgConnection,
    group_id: i32,
    user_uuid: &Uuid,
) -> Result<usize, Error> {
    diesel::delete(schema::tasks::table)
        .filter(schema::tasks::group_id.eq(group_id))
        .filter(schema::tasks::user_uuid.eq(user_uuid))
        .execute(connection)
        .map_err(Into::into)
}
