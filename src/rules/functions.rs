use crate::db::internal;
use crate::rules::error::RuleError;
use crate::rules::RuleContext;
use uuid::Uuid;

pub type Rule = dyn Fn(&RuleContext) -> Result<(), RuleError>;

fn level_of(ctx: &RuleContext, user_uuid: &Uuid) -> Result<Option<i32>, RuleError> {
    let connection = ctx.pool.get().map_err(|_| RuleError::PoolError)?;
    internal::member::member_level(&connection, ctx.group_id, user_uuid)
        .map_err(|_| RuleError::DBError)
}

/// The host holds a membership in the group.
pub fn rule_host_is_member(ctx: &RuleContext) -> Result<(), RuleError> {
    match level_of(ctx, ctx.host_uuid)? {
        Some(_) => Ok(()),
        None => Err(RuleError::NotAGroupMember),
    }
}

/// Same check as `rule_host_is_member`, surfaced as a delegation-parent
/// failure (the host acts as the graft point for a new sub-user or task).
pub fn rule_host_is_parent_member(ctx: &RuleContext) -> Result<(), RuleError> {
    match level_of(ctx, ctx.host_uuid)? {
        Some(_) => Ok(()),
        None => Err(RuleError::ParentNotInGroup),
    }
}

pub fn rule_member_is_assignee(ctx: &RuleContext) -> Result<(), RuleError> {
    let member_uuid = ctx.member_uuid.ok_or(RuleError::InvalidRuleContext)?;
    match level_of(ctx, member_uuid)? {
        Some(_) => Ok(()),
        None => Err(RuleError::AssigneeNotInGroup),
    }
}

/// Group deletion is reserved for the level-one member.
pub fn rule_host_is_creator(ctx: &RuleContext) -> Result<(), RuleError> {
    match level_of(ctx, ctx.host_uuid)? {
        Some(1) => Ok(()),
        Some(_) => Err(RuleError::NotTheCreator),
        None => Err(RuleError::NotAGroupMember),
    }
}

fn both_levels(ctx: &RuleContext) -> Result<(i32, i32), RuleError> {
    let member_uuid = ctx.member_uuid.ok_or(RuleError::InvalidRuleContext)?;
    let host = level_of(ctx, ctx.host_uuid)?.ok_or(RuleError::NotAGroupMember)?;
    let member = level_of(ctx, member_uuid)?.ok_or(RuleError::AssigneeNotInGroup)?;
    Ok((host, member))
}

/// Delegation goes strictly downwards: the host must sit above the member.
pub fn rule_host_above_member(ctx: &RuleContext) -> Result<(), RuleError> {
    let (host, member) = both_levels(ctx)?;
    if host < member {
        Ok(())
    } else {
        Err(RuleError::DelegationLevel)
    }
}

/// Removal of a sub-user is open to peers and anyone above them.
pub fn rule_host_at_or_above_member(ctx: &RuleContext) -> Result<(), RuleError> {
    let (host, member) = both_levels(ctx)?;
    if host <= member {
        Ok(())
    } else {
        Err(RuleError::CannotRemoveSubUser)
    }
}

pub fn rule_host_can_delete_task(ctx: &RuleContext) -> Result<(), RuleError> {
    let (host, member) = both_levels(ctx)?;
    if host < member {
        Ok(())
    } else {
        Err(RuleError::CannotDeleteTask)
    }
}
