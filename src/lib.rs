#[macro_use]
extern crate diesel;
#[macro_use]
extern crate diesel_derive_enum;
#[macro_use]
extern crate failure_derive;

pub mod api;
pub mod db;
pub mod error;
pub mod healthz;
pub mod mail;
pub mod rules;
pub mod settings;
pub mod user;
pub mod utils;
