#[derive(Fail, Debug, PartialEq)]
pub enum ServiceError {
    #[fail(display = "Group name is required")]
    GroupNameRequired,
    #[fail(display = "All fields are required")]
    MissingTaskFields,
    #[fail(display = "You can only update the Status field")]
    StatusOnlyUpdate,
    #[fail(display = "Parent, user, or group does not exist")]
    SubUserEntitiesMissing,
    #[fail(display = "Group not found")]
    GroupNotFound,
    #[fail(display = "Task not found")]
    TaskNotFound,
    #[fail(display = "User not found")]
    UserNotFound,
    #[fail(display = "Sub user not found")]
    SubUserNotFound,
    #[fail(display = "Invalid invite link")]
    InviteNotFound,
    #[fail(display = "Invite link has expired")]
    InviteExpired,
    #[fail(display = "Invite link has already been used")]
    InviteAlreadyUsed,
    #[fail(display = "User is already a member of this group")]
    AlreadyMember,
    #[fail(display = "Failed to generate a unique invite token")]
    TokenCollision,
}
