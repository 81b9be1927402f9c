use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

fn default_invite_expiration_hours() -> i64 {
    24
}

fn default_max_tree_depth() -> u32 {
    5
}

#[derive(Clone, Debug, Deserialize)]
pub struct Nudgr {
    pub postgres_url: String,
    /// Frontend origin used for invite links and mail deep-links.
    pub domain: String,
    pub sender: String,
    #[serde(default = "default_invite_expiration_hours")]
    pub invite_expiration_hours: i64,
    #[serde(default = "default_max_tree_depth")]
    pub max_tree_depth: u32,
}

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub nudgr: Nudgr,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let file = env::var("NUDGR_SETTINGS").unwrap_or_else(|_| String::from(".settings"));
        let mut s = Config::new();
        s.merge(File::with_name(&file).required(false))?;
        s.merge(Environment::new().separator("__"))?;
        s.try_into()
    }
}
