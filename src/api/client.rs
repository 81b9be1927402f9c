use crate::api::error::ApiError;
use crate::api::models::*;
use crate::db::operations;
use crate::db::operations::models::DisplayGroupInfo;
use crate::db::Pool;
use crate::settings::Nudgr;
use crate::user::AuthedUser;
use actix_web::dev::HttpServiceFactory;
use actix_web::web;
use actix_web::HttpResponse;
use serde_json::json;

async fn create_group(
    pool: web::Data<Pool>,
    authed: AuthedUser,
    body: web::Json<CreateGroupRequest>,
) -> Result<HttpResponse, ApiError> {
    let host = operations::users::user_by_id(&pool, &authed.user_id)?;
    let group = operations::groups::create_group(&pool, &host, body.into_inner().name)?;
    Ok(HttpResponse::Created().json(json!({
        "message": "Group created successfully",
        "data": DisplayGroupInfo::from(group),
    })))
}

async fn get_all_groups(
    pool: web::Data<Pool>,
    settings: web::Data<Nudgr>,
    authed: AuthedUser,
) -> Result<HttpResponse, ApiError> {
    let host = operations::users::user_by_id(&pool, &authed.user_id)?;
    let groups = operations::groups::get_all_groups(&pool, &host, settings.max_tree_depth)?;
    Ok(HttpResponse::Ok().json(json!({
        "message": "Groups fetched successfully",
        "Data": groups,
    })))
}

async fn get_group_level(
    pool: web::Data<Pool>,
    settings: web::Data<Nudgr>,
    authed: AuthedUser,
) -> Result<HttpResponse, ApiError> {
    let host = operations::users::user_by_id(&pool, &authed.user_id)?;
    let subtrees = operations::groups::get_group_level_wise(&pool, &host, settings.max_tree_depth)?;
    Ok(HttpResponse::Ok().json(json!({
        "message": "Group levels fetched successfully",
        "Data": subtrees,
    })))
}

async fn delete_group(
    pool: web::Data<Pool>,
    authed: AuthedUser,
    group_id: web::Path<i32>,
) -> Result<HttpResponse, ApiError> {
    let host = operations::users::user_by_id(&pool, &authed.user_id)?;
    operations::groups::delete_group(&pool, &host, group_id.into_inner())?;
    Ok(HttpResponse::Ok().json(json!({ "message": "Group deleted successfully" })))
}

async fn create_sub_user(
    pool: web::Data<Pool>,
    _: AuthedUser,
    body: web::Json<CreateSubUserRequest>,
) -> Result<HttpResponse, ApiError> {
    let request = body.into_inner();
    operations::subusers::create_sub_user(
        &pool,
        request.parent_uuid,
        request.user_uuid,
        request.group_id,
        request.role,
    )?;
    Ok(HttpResponse::Created().json(json!({ "message": "Sub user created successfully" })))
}

async fn delete_sub_user(
    pool: web::Data<Pool>,
    authed: AuthedUser,
    group_id: web::Path<i32>,
    body: web::Json<DeleteSubUserRequest>,
) -> Result<HttpResponse, ApiError> {
    let host = operations::users::user_by_id(&pool, &authed.user_id)?;
    let request = body.into_inner();
    operations::subusers::delete_sub_user(
        &pool,
        &host,
        group_id.into_inner(),
        request.parent_uuid,
        request.sub_user_uuid,
    )?;
    Ok(HttpResponse::Ok().json(json!({ "message": "Sub user deleted successfully" })))
}

async fn invite_user(
    pool: web::Data<Pool>,
    settings: web::Data<Nudgr>,
    authed: AuthedUser,
    body: web::Json<InviteUserRequest>,
) -> Result<HttpResponse, ApiError> {
    let host = operations::users::user_by_id(&pool, &authed.user_id)?;
    let invite_link =
        operations::invitations::generate_invite_link(&pool, &settings, &host, body.group_id)?;
    Ok(HttpResponse::Created().json(json!({
        "message": "Invite link generated successfully",
        "data": { "inviteLink": invite_link },
    })))
}

async fn check_invite(
    pool: web::Data<Pool>,
    token: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let success = operations::invitations::check_invite(&pool, &token)?;
    Ok(HttpResponse::Ok().json(json!({ "success": success })))
}

async fn accept_invite(
    pool: web::Data<Pool>,
    authed: AuthedUser,
    token: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let invitee = operations::users::user_by_id(&pool, &authed.user_id)?;
    let (membership, _) = operations::invitations::accept_invite(&pool, &invitee, &token)?;
    Ok(HttpResponse::Ok().json(json!({
        "message": "Invite accepted successfully",
        "data": { "groupId": membership.group_id, "level": membership.level },
    })))
}

pub fn client_app() -> impl HttpServiceFactory {
    web::scope("/user")
        .service(web::resource("/createGroup").route(web::post().to(create_group)))
        .service(web::resource("/getAllGroups").route(web::get().to(get_all_groups)))
        .service(web::resource("/getGroupLevel").route(web::get().to(get_group_level)))
        .service(web::resource("/deleteGroup/{groupId}").route(web::delete().to(delete_group)))
        .service(web::resource("/createSubUser").route(web::post().to(create_sub_user)))
        .service(web::resource("/deleteSubUser/{groupId}").route(web::delete().to(delete_sub_user)))
        .service(web::resource("/inviteUser").route(web::post().to(invite_user)))
        .service(web::resource("/checkInvite/{token}").route(web::get().to(check_invite)))
        .service(web::resource("/acceptInvite/{token}").route(web::post().to(accept_invite)))
}
