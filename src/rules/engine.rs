use crate::rules::error::RuleError;
use crate::rules::functions::*;
use crate::rules::RuleContext;

pub struct Engine<'a> {
    pub rules: &'a [&'static Rule],
}

impl<'a> Engine<'a> {
    pub fn run(&self, ctx: &RuleContext) -> Result<(), RuleError> {
        self.rules.iter().try_for_each(|rule| rule(ctx))
    }
}

pub const DELETE_GROUP: Engine = Engine {
    rules: &[&rule_host_is_creator],
};

pub const CREATE_SUB_USER: Engine = Engine {
    rules: &[&rule_host_is_parent_member],
};

pub const DELETE_SUB_USER: Engine = Engine {
    rules: &[&rule_host_is_member, &rule_host_at_or_above_member],
};

pub const INVITE_MEMBER: Engine = Engine {
    rules: &[&rule_host_is_member],
};

/// Run with the delegator as host and the assignee as member.
pub const ACCEPT_INVITE: Engine = Engine {
    rules: &[&rule_host_is_parent_member],
};

pub const CREATE_TASK: Engine = Engine {
    rules: &[
        &rule_member_is_assignee,
        &rule_host_is_parent_member,
        &rule_host_above_member,
    ],
};

pub const UPDATE_TASK: Engine = Engine {
    rules: &[&rule_host_is_member, &rule_member_is_assignee],
};

pub const DELETE_TASK: Engine = Engine {
    rules: &[
        &rule_host_is_member,
        &rule_member_is_assignee,
        &rule_host_can_delete_task,
    ],
};
