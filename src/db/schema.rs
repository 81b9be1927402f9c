table! {
    use diesel::sql_types::*;
    use crate::db::types::*;

    users (user_uuid) {
        user_uuid -> Uuid,
        user_id -> Varchar,
        name -> Varchar,
        email -> Varchar,
        created -> Timestamp,
    }
}

table! {
    use diesel::sql_types::*;
    use crate::db::types::*;

    groups (group_id) {
        group_id -> Int4,
        name -> Varchar,
        creator_uuid -> Uuid,
        created -> Timestamp,
    }
}

table! {
    use diesel::sql_types::*;
    use crate::db::types::*;

    group_members (member_id) {
        member_id -> Int4,
        group_id -> Int4,
        user_uuid -> Uuid,
        parent_uuid -> Uuid,
        role -> Role_type,
        level -> Int4,
        added_ts -> Timestamp,
    }
}

table! {
    use diesel::sql_types::*;
    use crate::db::types::*;

    sub_users (sub_user_id) {
        sub_user_id -> Int4,
        group_id -> Int4,
        parent_uuid -> Uuid,
        user_uuid -> Uuid,
        role -> Role_type,
        level -> Int4,
        added_ts -> Timestamp,
    }
}

table! {
    use diesel::sql_types::*;
    use crate::db::types::*;

    tasks (task_id) {
        task_id -> Int4,
        task_name -> Varchar,
        priority -> Task_priority,
        deadline -> Timestamp,
        status -> Task_status,
        group_id -> Int4,
        user_uuid -> Uuid,
        parent_uuid -> Uuid,
        created -> Timestamp,
        updated -> Timestamp,
    }
}

table! {
    use diesel::sql_types::*;
    use crate::db::types::*;

    invites (invite_id) {
        invite_id -> Int4,
        token -> Varchar,
        group_id -> Int4,
        inviter_uuid -> Uuid,
        invitee_uuid -> Nullable<Uuid>,
        status -> Invite_status,
        expires_at -> Timestamp,
        used_at -> Nullable<Timestamp>,
        created -> Timestamp,
    }
}

table! {
    use diesel::sql_types::*;
    use crate::db::types::*;

    logs (log_id) {
        log_id -> Int4,
        ts -> Timestamp,
        target -> Log_target_type,
        operation -> Log_operation_type,
        group_id -> Int4,
        host_uuid -> Uuid,
        user_uuid -> Nullable<Uuid>,
        ok -> Bool,
        body -> Nullable<Jsonb>,
    }
}

joinable!(group_members -> groups (group_id));
joinable!(sub_users -> groups (group_id));
joinable!(tasks -> groups (group_id));
joinable!(invites -> groups (group_id));
joinable!(logs -> groups (group_id));

allow_tables_to_appear_in_same_query!(
    users,
    groups,
    group_members,
    sub_users,
    tasks,
    invites,
    logs,
);
