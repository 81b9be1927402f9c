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
use serde_json::Value;

/// Founder (level 1) plus `invitees` accepted directly under them
/// (level 2). Returns the group id.
async fn group_with_members<S, B, E>(app: &mut S, invitees: &[u64]) -> i64
where
    S: actix_web::dev::Service<
        Request = actix_http::Request,
        Response = actix_web::dev::ServiceResponse<B>,
        Error = E,
    >,
    B: actix_web::dev::MessageBody + Unpin,
    E: std::fmt::Debug,
{
    let founder = user_id(1);
    let res = post(app, "/user/createGroup", json!({ "name": "Eng" }), &founder).await;
    let group_id = read_json(res).await["data"]["id"].as_i64().unwrap();
    for n in invitees {
        let res = post(app, "/user/inviteUser", json!({ "GroupId": group_id }), &founder).await;
        let link = read_json(res).await["data"]["inviteLink"]
            .as_str()
            .unwrap()
            .to_owned();
        let token = link.rsplit('/').next().unwrap().to_owned();
        let res = post(
            app,
            &format!("/user/acceptInvite/{}", token),
            json!({}),
            &user_id(*n),
        )
        .await;
        assert!(res.status().is_success());
    }
    group_id
}

fn task_body(group_id: i64, parent: u64, assignee: u64, name: &str) -> Value {
    json!({
        "TaskName": name,
        "Priority": "High",
        "DeadLine": "2030-01-01T00:00:00",
        "Status": "Pending",
        "groupId": group_id,
        "parentId": user_uuid(parent).to_string(),
        "userId": user_uuid(assignee).to_string(),
    })
}

#[actix_rt::test]
async fn delegation_goes_strictly_downwards() -> Result<(), Error> {
    let pool = match reset() {
        Some(pool) => pool,
        None => return Ok(()),
    };
    seed_user(&pool, 1);
    seed_user(&pool, 2);
    let app = App::new().service(test_app(pool.clone()));
    let mut app = test::init_service(app).await;
    let group_id = group_with_members(&mut app, &[2]).await;

    let res = post(
        &mut app,
        "/tasks/createTasks",
        task_body(group_id, 1, 2, "write brief"),
        &user_id(1),
    )
    .await;
    assert_eq!(res.status(), 201);
    let created = read_json(res).await;
    assert_eq!(created["data"]["TaskName"], "write brief");
    assert_eq!(created["data"]["parentId"], user_uuid(1).to_string());

    // Upwards delegation is rejected.
    let res = post(
        &mut app,
        "/tasks/createTasks",
        task_body(group_id, 2, 1, "reverse"),
        &user_id(2),
    )
    .await;
    assert_eq!(res.status(), 403);

    let res = post(&mut app, "/tasks/createTasks", json!({}), &user_id(1)).await;
    assert_eq!(res.status(), 400);
    assert_eq!(read_json(res).await["message"], "All fields are required");
    Ok(())
}

#[actix_rt::test]
async fn peers_may_only_move_the_status() -> Result<(), Error> {
    let pool = match reset() {
        Some(pool) => pool,
        None => return Ok(()),
    };
    for n in 1..4 {
        seed_user(&pool, n);
    }
    let app = App::new().service(test_app(pool.clone()));
    let mut app = test::init_service(app).await;
    let group_id = group_with_members(&mut app, &[2, 3]).await;

    let res = post(
        &mut app,
        "/tasks/createTasks",
        task_body(group_id, 1, 2, "write brief"),
        &user_id(1),
    )
    .await;
    let task_id = read_json(res).await["data"]["id"].as_i64().unwrap();

    // Same level as the assignee: status only.
    let res = put(
        &mut app,
        "/tasks/updateTask",
        json!({ "id": task_id, "Status": "Completed" }),
        &user_id(3),
    )
    .await;
    assert!(res.status().is_success());
    assert_eq!(
        read_json(res).await["message"],
        "Task status updated successfully"
    );

    let res = put(
        &mut app,
        "/tasks/updateTask",
        json!({ "id": task_id, "TaskName": "renamed" }),
        &user_id(3),
    )
    .await;
    assert_eq!(res.status(), 400);
    assert_eq!(
        read_json(res).await["message"],
        "You can only update the Status field"
    );

    // Strictly above the assignee: full edit.
    let res = put(
        &mut app,
        "/tasks/updateTask",
        json!({ "id": task_id, "TaskName": "renamed", "Priority": "Low" }),
        &user_id(1),
    )
    .await;
    assert!(res.status().is_success());
    let updated = read_json(res).await;
    assert_eq!(updated["message"], "Task updated successfully");
    assert_eq!(updated["data"]["TaskName"], "renamed");
    assert_eq!(updated["data"]["Priority"], "Low");
    Ok(())
}

#[actix_rt::test]
async fn deletion_requires_a_strictly_higher_level() -> Result<(), Error> {
    let pool = match reset() {
        Some(pool) => pool,
        None => return Ok(()),
    };
    for n in 1..4 {
        seed_user(&pool, n);
    }
    let app = App::new().service(test_app(pool.clone()));
    let mut app = test::init_service(app).await;
    let group_id = group_with_members(&mut app, &[2, 3]).await;

    let res = post(
        &mut app,
        "/tasks/createTasks",
        task_body(group_id, 1, 2, "write brief"),
        &user_id(1),
    )
    .await;
    let task_id = read_json(res).await["data"]["id"].as_i64().unwrap();

    // Same level is not enough, unlike the status update.
    let res = delete(
        &mut app,
        &format!("/tasks/deleteTask/{}", task_id),
        &user_id(3),
    )
    .await;
    assert_eq!(res.status(), 403);

    let res = delete(
        &mut app,
        &format!("/tasks/deleteTask/{}", task_id),
        &user_id(1),
    )
    .await;
    assert!(res.status().is_success());

    let res = delete(
        &mut app,
        &format!("/tasks/deleteTask/{}", task_id),
        &user_id(1),
    )
    .await;
    assert_eq!(res.status(), 404);
    Ok(())
}

#[actix_rt::test]
async fn task_listing_filters_match_exactly() -> Result<(), Error> {
    let pool = match reset() {
        Some(pool) => pool,
        None => return Ok(()),
    };
    seed_user(&pool, 1);
    seed_user(&pool, 2);
    let app = App::new().service(test_app(pool.clone()));
    let mut app = test::init_service(app).await;
    let group_id = group_with_members(&mut app, &[2]).await;

    for (name, priority, status) in &[
        ("high done", "High", "Completed"),
        ("high open", "High", "Pending"),
        ("low done", "Low", "Completed"),
    ] {
        let res = post(
            &mut app,
            "/tasks/createTasks",
            json!({
                "TaskName": name,
                "Priority": priority,
                "DeadLine": "2030-01-01T00:00:00",
                "Status": status,
                "groupId": group_id,
                "parentId": user_uuid(1).to_string(),
                "userId": user_uuid(2).to_string(),
            }),
            &user_id(1),
        )
        .await;
        assert_eq!(res.status(), 201);
    }

    let res = get(
        &mut app,
        "/tasks/getUserAllTasks?status=Completed&priority=High",
        &user_id(2),
    )
    .await;
    assert!(res.status().is_success());
    let tasks = read_json(res).await;
    let data = tasks["Data"].as_array().unwrap();
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["TaskName"], "high done");

    let res = get(&mut app, "/tasks/getUserAllTasks", &user_id(2)).await;
    assert_eq!(read_json(res).await["Data"].as_array().unwrap().len(), 3);
    Ok(())
}

#[actix_rt::test]
async fn analytics_reflect_completed_tasks() -> Result<(), Error> {
    let pool = match reset() {
        Some(pool) => pool,
        None => return Ok(()),
    };
    seed_user(&pool, 1);
    seed_user(&pool, 2);
    let app = App::new().service(test_app(pool.clone()));
    let mut app = test::init_service(app).await;
    let group_id = group_with_members(&mut app, &[2]).await;

    let res = post(
        &mut app,
        "/tasks/createTasks",
        task_body(group_id, 1, 2, "write brief"),
        &user_id(1),
    )
    .await;
    let task_id = read_json(res).await["data"]["id"].as_i64().unwrap();
    let res = put(
        &mut app,
        "/tasks/updateTask",
        json!({ "id": task_id, "Status": "Completed" }),
        &user_id(2),
    )
    .await;
    assert!(res.status().is_success());

    let res = get(
        &mut app,
        &format!("/tasks/getUserAnalysis/{}", user_uuid(2)),
        &user_id(2),
    )
    .await;
    assert!(res.status().is_success());
    let stats = read_json(res).await;
    assert_eq!(stats["Data"]["totalTasks"], 1);
    assert_eq!(stats["Data"]["completedTasks"], 1);
    assert_eq!(stats["Data"]["onTimeTasks"], 1);

    let res = get(
        &mut app,
        &format!("/tasks/getTrends/{}", user_uuid(2)),
        &user_id(2),
    )
    .await;
    assert!(res.status().is_success());
    let trends = read_json(res).await;
    assert_eq!(
        trends["Data"]["collective"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_i64().unwrap())
            .sum::<i64>(),
        1
    );

    let res = get(
        &mut app,
        &format!("/tasks/getPeakHrs/{}", user_uuid(2)),
        &user_id(2),
    )
    .await;
    assert!(res.status().is_success());
    assert_eq!(
        read_json(res).await["Data"]["collective"]
            .as_array()
            .unwrap()
            .len(),
        24
    );
    Ok(())
}
