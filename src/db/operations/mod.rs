pub mod analytics;
pub mod groups;
pub mod hierarchy;
pub mod invitations;
pub mod models;
pub mod subusers;
pub mod tasks;
pub mod users;
