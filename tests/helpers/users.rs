use nudgr::db::model::InsertUserProfile;
use nudgr::db::operations;
use nudgr::db::Pool;
use uuid::Uuid;

pub fn user_uuid(n: u64) -> Uuid {
    Uuid::new_v5(&Uuid::NAMESPACE_OID, n.to_string().as_bytes())
}

pub fn user_id(n: u64) -> String {
    format!("idp|{}", n)
}

pub fn seed_user(pool: &Pool, n: u64) -> Uuid {
    let uuid = user_uuid(n);
    operations::users::upsert_user(
        pool,
        &InsertUserProfile {
            user_uuid: uuid,
            user_id: user_id(n),
            name: format!("Hans{}", n),
            email: format!("hans{}@knall.example", n),
        },
    )
    .expect("failed to seed user");
    uuid
}
