#[derive(Fail, Debug, PartialEq)]
pub enum RuleError {
    #[fail(display = "Unknown DB error")]
    DBError,
    #[fail(display = "No DB connection available")]
    PoolError,
    #[fail(display = "Invalid rule context")]
    InvalidRuleContext,
    #[fail(display = "User not part of the group")]
    NotAGroupMember,
    #[fail(display = "Parent user is not part of the group")]
    ParentNotInGroup,
    #[fail(display = "Assigned user is not part of the group")]
    AssigneeNotInGroup,
    #[fail(display = "Only the level one member can delete the group")]
    NotTheCreator,
    #[fail(display = "Parent's level must be strictly less than assigned user's level")]
    DelegationLevel,
    #[fail(display = "You do not have permission to remove this sub user")]
    CannotRemoveSubUser,
    #[fail(display = "You do not have permission to update this task")]
    CannotUpdateTask,
    #[fail(display = "You do not have permission to delete this task")]
    CannotDeleteTask,
}
