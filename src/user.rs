use crate::api::error::ApiError;
use actix_web::dev::Payload;
use actix_web::FromRequest;
use actix_web::HttpRequest;
use futures::future::ready;
use futures::future::Ready;
use uuid::Uuid;

pub struct User {
    pub user_uuid: Uuid,
}

impl Default for User {
    fn default() -> Self {
        User {
            user_uuid: Uuid::nil(),
        }
    }
}

/// Caller identity as attested by the upstream identity provider. The
/// provider subject travels in the `x-user-id` header set by the auth
/// proxy in front of this service.
pub struct AuthedUser {
    pub user_id: String,
}

impl FromRequest for AuthedUser {
    type Error = ApiError;
    type Future = Ready<Result<AuthedUser, ApiError>>;
    type Config = ();

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(
            req.headers()
                .get("x-user-id")
                .and_then(|v| v.to_str().ok())
                .filter(|v| !v.is_empty())
                .map(|user_id| AuthedUser {
                    user_id: user_id.to_owned(),
                })
                .ok_or(ApiError::Unauthorized),
        )
    }
}
