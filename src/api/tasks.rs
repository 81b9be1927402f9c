use crate::api::error::ApiError;
use crate::api::models::*;
use crate::db::operations;
use crate::db::operations::models::DisplayTask;
use crate::db::operations::models::TaskUpdateKind;
use crate::db::Pool;
use crate::settings::Nudgr;
use crate::user::AuthedUser;
use actix_web::dev::HttpServiceFactory;
use actix_web::web;
use actix_web::HttpResponse;
use serde_json::json;
use uuid::Uuid;

async fn create_task(
    pool: web::Data<Pool>,
    settings: web::Data<Nudgr>,
    _: AuthedUser,
    body: web::Json<NewTaskRequest>,
) -> Result<HttpResponse, ApiError> {
    let new_task = body
        .into_inner()
        .validated()
        .map_err(failure::Error::from)?;
    let task = operations::tasks::create_task(&pool, &settings, new_task)?;
    Ok(HttpResponse::Created().json(json!({
        "message": "Task created successfully",
        "data": DisplayTask::from(task),
    })))
}

async fn update_task(
    pool: web::Data<Pool>,
    authed: AuthedUser,
    body: web::Json<UpdateTaskRequest>,
) -> Result<HttpResponse, ApiError> {
    let host = operations::users::user_by_id(&pool, &authed.user_id)?;
    let request = body.into_inner();
    let task_id = request.id;
    let (task, kind) = operations::tasks::update_task(&pool, &host, task_id, request.into())?;
    let message = match kind {
        TaskUpdateKind::Full => "Task updated successfully",
        TaskUpdateKind::StatusOnly => "Task status updated successfully",
    };
    Ok(HttpResponse::Ok().json(json!({
        "message": message,
        "data": DisplayTask::from(task),
    })))
}

async fn delete_task(
    pool: web::Data<Pool>,
    authed: AuthedUser,
    task_id: web::Path<i32>,
) -> Result<HttpResponse, ApiError> {
    let host = operations::users::user_by_id(&pool, &authed.user_id)?;
    operations::tasks::delete_task(&pool, &host, task_id.into_inner())?;
    Ok(HttpResponse::Ok().json(json!({ "message": "Task deleted successfully" })))
}

async fn get_user_all_tasks(
    pool: web::Data<Pool>,
    authed: AuthedUser,
    query: web::Query<TaskQuery>,
) -> Result<HttpResponse, ApiError> {
    let host = operations::users::user_by_id(&pool, &authed.user_id)?;
    let tasks =
        operations::tasks::get_user_all_tasks(&pool, &host, &query.into_inner().into())?;
    let tasks: Vec<DisplayTask> = tasks.into_iter().map(Into::into).collect();
    Ok(HttpResponse::Ok().json(json!({
        "message": "Tasks fetched successfully",
        "Data": tasks,
    })))
}

async fn get_user_analysis(
    pool: web::Data<Pool>,
    _: AuthedUser,
    user_uuid: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let stats = operations::analytics::user_analysis(&pool, &user_uuid)?;
    Ok(HttpResponse::Ok().json(json!({
        "message": "Task analytics fetched successfully",
        "Data": stats,
    })))
}

async fn get_trends(
    pool: web::Data<Pool>,
    _: AuthedUser,
    user_uuid: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let trends = operations::analytics::productivity_trends(&pool, &user_uuid)?;
    Ok(HttpResponse::Ok().json(json!({
        "message": "Productivity trends fetched successfully",
        "Data": trends,
    })))
}

async fn get_peak_hrs(
    pool: web::Data<Pool>,
    _: AuthedUser,
    user_uuid: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let peaks = operations::analytics::peak_hours(&pool, &user_uuid)?;
    Ok(HttpResponse::Ok().json(json!({
        "message": "Peak hours fetched successfully",
        "Data": peaks,
    })))
}

pub fn tasks_app() -> impl HttpServiceFactory {
    web::scope("/tasks")
        .service(web::resource("/createTasks").route(web::post().to(create_task)))
        .service(web::resource("/updateTask").route(web::put().to(update_task)))
        .service(web::resource("/deleteTask/{taskId}").route(web::delete().to(delete_task)))
        .service(web::resource("/getUserAllTasks").route(web::get().to(get_user_all_tasks)))
        .service(web::resource("/getUserAnalysis/{userId}").route(web::get().to(get_user_analysis)))
        .service(web::resource("/getTrends/{userId}").route(web::get().to(get_trends)))
        .service(web::resource("/getPeakHrs/{userId}").route(web::get().to(get_peak_hrs)))
}
