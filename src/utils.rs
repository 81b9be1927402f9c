use chrono::NaiveDateTime;
use chrono::Utc;
use rand::rngs::OsRng;
use rand::RngCore;

pub fn to_expiration_ts(hours: i64) -> NaiveDateTime {
    (Utc::now() + chrono::Duration::hours(hours)).naive_utc()
}

/// 128 bits of OS randomness, URL-safe encoded (22 chars).
pub fn generate_invite_token() -> String {
    let mut bytes = [0u8; 16];
    OsRng.fill_bytes(&mut bytes);
    base64::encode_config(bytes, base64::URL_SAFE_NO_PAD)
}
