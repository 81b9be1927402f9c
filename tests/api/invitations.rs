use crate::helpers::api::*;
use crate::helpers::db::reset;
use crate::helpers::misc::read_json;
use crate::helpers::misc::test_app;
use crate::helpers::users::seed_user;
use crate::helpers::users::user_id;
use crate::helpers::users::user_uuid;
use actix_web::test;
use actix_web::App;
use chrono::Utc;
use diesel::prelude::*;
use failure::Error;
use nudgr::db::schema::invites;
use nudgr::db::types::InviteStatus;
use nudgr::db::Pool;
use serde_json::json;

fn invite_status(pool: &Pool, token: &str) -> InviteStatus {
    let connection = pool.get().unwrap();
    invites::table
        .filter(invites::token.eq(token))
        .select(invites::status)
        .first(&connection)
        .unwrap()
}

#[actix_rt::test]
async fn accepted_invite_grafts_one_level_below_the_inviter() -> Result<(), Error> {
    let pool = match reset() {
        Some(pool) => pool,
        None => return Ok(()),
    };
    for n in 1..4 {
        seed_user(&pool, n);
    }
    let app = App::new().service(test_app(pool.clone()));
    let mut app = test::init_service(app).await;
    let founder = user_id(1);

    let res = post(&mut app, "/user/createGroup", json!({ "name": "Eng" }), &founder).await;
    let group_id = read_json(res).await["data"]["id"].as_i64().unwrap();
    let res = post(
        &mut app,
        "/user/inviteUser",
        json!({ "GroupId": group_id }),
        &founder,
    )
    .await;
    let link = read_json(res).await["data"]["inviteLink"]
        .as_str()
        .unwrap()
        .to_owned();
    assert!(link.starts_with("https://nudgr.example/invite/"));
    let token = link.rsplit('/').next().unwrap().to_owned();

    // Probe is read-only and repeatable.
    for _ in 0..2 {
        let res = get(&mut app, &format!("/user/checkInvite/{}", token), &user_id(2)).await;
        assert!(res.status().is_success());
        assert_eq!(read_json(res).await["success"], true);
    }
    assert_eq!(invite_status(&pool, &token), InviteStatus::Pending);

    let res = post(
        &mut app,
        &format!("/user/acceptInvite/{}", token),
        json!({}),
        &user_id(2),
    )
    .await;
    assert!(res.status().is_success());
    let accepted = read_json(res).await;
    assert_eq!(accepted["data"]["level"], 2);
    assert_eq!(invite_status(&pool, &token), InviteStatus::Accepted);

    // The tree edge exists: the founder sees user 2 below them.
    let res = get(&mut app, "/user/getGroupLevel", &founder).await;
    let levels = read_json(res).await;
    let users = &levels["Data"][group_id.to_string()]["users"];
    assert_eq!(users[1]["id"], user_uuid(2).to_string());
    assert_eq!(users[1]["parentId"], user_uuid(1).to_string());
    assert_eq!(users[1]["level"], 2);

    // An invite from a level-2 member grafts at level 3.
    let res = post(
        &mut app,
        "/user/inviteUser",
        json!({ "GroupId": group_id }),
        &user_id(2),
    )
    .await;
    let link = read_json(res).await["data"]["inviteLink"]
        .as_str()
        .unwrap()
        .to_owned();
    let token = link.rsplit('/').next().unwrap().to_owned();
    let res = post(
        &mut app,
        &format!("/user/acceptInvite/{}", token),
        json!({}),
        &user_id(3),
    )
    .await;
    assert!(res.status().is_success());
    assert_eq!(read_json(res).await["data"]["level"], 3);
    Ok(())
}

#[actix_rt::test]
async fn second_redemption_conflicts() -> Result<(), Error> {
    let pool = match reset() {
        Some(pool) => pool,
        None => return Ok(()),
    };
    for n in 1..4 {
        seed_user(&pool, n);
    }
    let app = App::new().service(test_app(pool.clone()));
    let mut app = test::init_service(app).await;
    let founder = user_id(1);

    let res = post(&mut app, "/user/createGroup", json!({ "name": "Eng" }), &founder).await;
    let group_id = read_json(res).await["data"]["id"].as_i64().unwrap();
    let res = post(
        &mut app,
        "/user/inviteUser",
        json!({ "GroupId": group_id }),
        &founder,
    )
    .await;
    let link = read_json(res).await["data"]["inviteLink"]
        .as_str()
        .unwrap()
        .to_owned();
    let token = link.rsplit('/').next().unwrap().to_owned();

    let res = post(
        &mut app,
        &format!("/user/acceptInvite/{}", token),
        json!({}),
        &user_id(2),
    )
    .await;
    assert!(res.status().is_success());

    let res = post(
        &mut app,
        &format!("/user/acceptInvite/{}", token),
        json!({}),
        &user_id(3),
    )
    .await;
    assert_eq!(res.status(), 409);
    // Used tokens probe as unusable.
    let res = get(&mut app, &format!("/user/checkInvite/{}", token), &user_id(3)).await;
    assert_eq!(read_json(res).await["success"], false);
    Ok(())
}

#[actix_rt::test]
async fn expired_invites_are_rejected_and_stay_pending() -> Result<(), Error> {
    let pool = match reset() {
        Some(pool) => pool,
        None => return Ok(()),
    };
    seed_user(&pool, 1);
    seed_user(&pool, 2);
    let app = App::new().service(test_app(pool.clone()));
    let mut app = test::init_service(app).await;
    let founder = user_id(1);

    let res = post(&mut app, "/user/createGroup", json!({ "name": "Eng" }), &founder).await;
    let group_id = read_json(res).await["data"]["id"].as_i64().unwrap();
    let res = post(
        &mut app,
        "/user/inviteUser",
        json!({ "GroupId": group_id }),
        &founder,
    )
    .await;
    let link = read_json(res).await["data"]["inviteLink"]
        .as_str()
        .unwrap()
        .to_owned();
    let token = link.rsplit('/').next().unwrap().to_owned();

    {
        let connection = pool.get()?;
        let past = Utc::now().naive_utc() - chrono::Duration::hours(1);
        diesel::update(invites::table.filter(invites::token.eq(&token)))
            .set(invites::expires_at.eq(past))
            .execute(&connection)?;
    }

    let res = get(&mut app, &format!("/user/checkInvite/{}", token), &user_id(2)).await;
    assert_eq!(read_json(res).await["success"], false);

    let res = post(
        &mut app,
        &format!("/user/acceptInvite/{}", token),
        json!({}),
        &user_id(2),
    )
    .await;
    assert_eq!(res.status(), 400);
    assert_eq!(
        read_json(res).await["message"],
        "Invite link has expired"
    );
    assert_eq!(invite_status(&pool, &token), InviteStatus::Pending);
    Ok(())
}

#[actix_rt::test]
async fn unknown_tokens_404() -> Result<(), Error> {
    let pool = match reset() {
        Some(pool) => pool,
        None => return Ok(()),
    };
    seed_user(&pool, 1);
    let app = App::new().service(test_app(pool.clone()));
    let mut app = test::init_service(app).await;

    let res = post(
        &mut app,
        "/user/acceptInvite/not-a-token",
        json!({}),
        &user_id(1),
    )
    .await;
    assert_eq!(res.status(), 404);
    Ok(())
}
