pub mod group;
pub mod invitation;
pub mod log;
pub mod member;
pub mod subuser;
pub mod task;
pub mod user;
