use crate::helpers::api::*;
use crate::helpers::db::reset;
use crate::helpers::misc::read_json;
use crate::helpers::misc::test_app;
use crate::helpers::users::seed_user;
use crate::helpers::users::user_id;
use crate::helpers::users::user_uuid;
use actix_web::test;
use actix_web::App;
use failure::Error;
use serde_json::json;

#[actix_rt::test]
async fn founder_is_the_only_level_one_member() -> Result<(), Error> {
    let pool = match reset() {
        Some(pool) => pool,
        None => return Ok(()),
    };
    seed_user(&pool, 1);
    let app = App::new().service(test_app(pool.clone()));
    let mut app = test::init_service(app).await;
    let host = user_id(1);

    let res = post(&mut app, "/user/createGroup", json!({ "name": "Eng" }), &host).await;
    assert_eq!(res.status(), 201);
    let created = read_json(res).await;
    assert_eq!(created["data"]["name"], "Eng");

    let res = get(&mut app, "/user/getAllGroups", &host).await;
    assert!(res.status().is_success());
    let groups = read_json(res).await;
    let members = &groups["Data"][0]["members"];
    assert_eq!(members.as_array().unwrap().len(), 1);
    assert_eq!(members[0]["level"], 1);
    assert_eq!(members[0]["role"], "creator");
    assert_eq!(members[0]["id"], user_uuid(1).to_string());
    assert_eq!(
        groups["Data"][0]["hierarchy"]["id"],
        user_uuid(1).to_string()
    );
    Ok(())
}

#[actix_rt::test]
async fn missing_group_name_is_rejected() -> Result<(), Error> {
    let pool = match reset() {
        Some(pool) => pool,
        None => return Ok(()),
    };
    seed_user(&pool, 1);
    let app = App::new().service(test_app(pool.clone()));
    let mut app = test::init_service(app).await;

    let res = post(&mut app, "/user/createGroup", json!({}), &user_id(1)).await;
    assert_eq!(res.status(), 400);
    assert_eq!(read_json(res).await["message"], "Group name is required");
    Ok(())
}

#[actix_rt::test]
async fn anonymous_callers_get_401() -> Result<(), Error> {
    let pool = match reset() {
        Some(pool) => pool,
        None => return Ok(()),
    };
    let app = App::new().service(test_app(pool.clone()));
    let mut app = test::init_service(app).await;

    let req = test::TestRequest::get().uri("/user/getAllGroups").to_request();
    let res = test::call_service(&mut app, req).await;
    assert_eq!(res.status(), 401);
    Ok(())
}

#[actix_rt::test]
async fn only_the_founder_deletes_the_group() -> Result<(), Error> {
    let pool = match reset() {
        Some(pool) => pool,
        None => return Ok(()),
    };
    seed_user(&pool, 1);
    seed_user(&pool, 2);
    let app = App::new().service(test_app(pool.clone()));
    let mut app = test::init_service(app).await;
    let founder = user_id(1);
    let member = user_id(2);

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
        &member,
    )
    .await;
    assert!(res.status().is_success());

    let res = delete(&mut app, &format!("/user/deleteGroup/{}", group_id), &member).await;
    assert_eq!(res.status(), 403);

    let res = delete(&mut app, &format!("/user/deleteGroup/{}", group_id), &founder).await;
    assert!(res.status().is_success());

    for caller in &[&founder, &member] {
        let res = get(&mut app, "/user/getAllGroups", caller).await;
        assert!(res.status().is_success());
        assert_eq!(read_json(res).await["Data"].as_array().unwrap().len(), 0);
    }
    Ok(())
}

#[actix_rt::test]
async fn sub_user_creation_and_level_wise_listing() -> Result<(), Error> {
    let pool = match reset() {
        Some(pool) => pool,
        None => return Ok(()),
    };
    seed_user(&pool, 1);
    seed_user(&pool, 2);
    let app = App::new().service(test_app(pool.clone()));
    let mut app = test::init_service(app).await;
    let founder = user_id(1);

    let res = post(&mut app, "/user/createGroup", json!({ "name": "Ops" }), &founder).await;
    let group_id = read_json(res).await["data"]["id"].as_i64().unwrap();

    let res = post(
        &mut app,
        "/user/createSubUser",
        json!({
            "parentId": user_uuid(1).to_string(),
            "userId": user_uuid(2).to_string(),
            "groupId": group_id,
        }),
        &founder,
    )
    .await;
    assert_eq!(res.status(), 201);

    let res = get(&mut app, "/user/getGroupLevel", &founder).await;
    assert!(res.status().is_success());
    let levels = read_json(res).await;
    let users = &levels["Data"][group_id.to_string()]["users"];
    assert_eq!(users.as_array().unwrap().len(), 2);
    assert_eq!(users[1]["id"], user_uuid(2).to_string());
    assert_eq!(users[1]["parentId"], user_uuid(1).to_string());
    assert_eq!(users[1]["level"], 2);
    Ok(())
}

#[actix_rt::test]
async fn sub_user_removal_honours_the_level_boundary() -> Result<(), Error> {
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

    let res = post(&mut app, "/user/createGroup", json!({ "name": "Ops" }), &founder).await;
    let group_id = read_json(res).await["data"]["id"].as_i64().unwrap();
    for n in 2..4 {
        let res = post(
            &mut app,
            "/user/createSubUser",
            json!({
                "parentId": user_uuid(1).to_string(),
                "userId": user_uuid(n).to_string(),
                "groupId": group_id,
            }),
            &founder,
        )
        .await;
        assert_eq!(res.status(), 201);
    }

    // A peer (same level) may remove; someone deeper may not exist above.
    let res = delete_with_body(
        &mut app,
        &format!("/user/deleteSubUser/{}", group_id),
        json!({
            "parentId": user_uuid(1).to_string(),
            "subUserId": user_uuid(2).to_string(),
        }),
        &user_id(3),
    )
    .await;
    assert!(res.status().is_success());

    let res = get(&mut app, "/user/getGroupLevel", &founder).await;
    let levels = read_json(res).await;
    let users = &levels["Data"][group_id.to_string()]["users"];
    assert_eq!(users.as_array().unwrap().len(), 2);
    Ok(())
}
