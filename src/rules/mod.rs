pub mod engine;
pub mod error;
pub mod functions;

use crate::db::Pool;
use uuid::Uuid;

pub struct RuleContext<'a> {
    pub pool: &'a Pool,
    pub group_id: i32,
    pub host_uuid: &'a Uuid,
    pub member_uuid: Option<&'a Uuid>,
}

impl<'a> RuleContext<'a> {
    pub fn minimal(pool: &'a Pool, group_id: i32, host_uuid: &'a Uuid) -> Self {
        RuleContext {
            pool,
            group_id,
            host_uuid,
            member_uuid: None,
        }
    }

    pub fn minimal_with_member_uuid(
        pool: &'a Pool,
        group_id: i32,
        host_uuid: &'a Uuid,
        member_uuid: &'a Uuid,
    ) -> Self {
        RuleContext {
            pool,
            group_id,
            host_uuid,
            member_uuid: Some(member_uuid),
        }
    }
}
