use crate::error::ServiceError;
use crate::rules::error::RuleError;
use actix_web::error::ResponseError;
use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use diesel::result::Error as DieselError;
use log::warn;
use serde_json::json;

#[derive(Fail, Debug)]
pub enum ApiError {
    #[fail(display = "Unauthorized: No active session")]
    Unauthorized,
    #[fail(display = "{}", _0)]
    Validation(String),
    #[fail(display = "{}", _0)]
    Forbidden(String),
    #[fail(display = "{}", _0)]
    NotFound(String),
    #[fail(display = "{}", _0)]
    Conflict(String),
    #[fail(display = "{}", _0)]
    Expired(String),
    #[fail(display = "Server error")]
    Generic(failure::Error),
}

impl From<failure::Error> for ApiError {
    fn from(e: failure::Error) -> Self {
        let mapped = if let Some(rule) = e.downcast_ref::<RuleError>() {
            Some(ApiError::Forbidden(rule.to_string()))
        } else if let Some(service) = e.downcast_ref::<ServiceError>() {
            let message = service.to_string();
            match service {
                ServiceError::GroupNameRequired
                | ServiceError::MissingTaskFields
                | ServiceError::StatusOnlyUpdate
                | ServiceError::SubUserEntitiesMissing => Some(ApiError::Validation(message)),
                ServiceError::GroupNotFound
                | ServiceError::TaskNotFound
                | ServiceError::UserNotFound
                | ServiceError::SubUserNotFound
                | ServiceError::InviteNotFound => Some(ApiError::NotFound(message)),
                ServiceError::InviteExpired => Some(ApiError::Expired(message)),
                ServiceError::InviteAlreadyUsed | ServiceError::AlreadyMember => {
                    Some(ApiError::Conflict(message))
                }
                ServiceError::TokenCollision => None,
            }
        } else if let Some(DieselError::NotFound) = e.downcast_ref::<DieselError>() {
            Some(ApiError::NotFound(String::from("Not found")))
        } else {
            None
        };
        mapped.unwrap_or(ApiError::Generic(e))
    }
}

impl ResponseError for ApiError {
    fn error_response(&self) -> HttpResponse {
        let status = match self {
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::Validation(_) | ApiError::Expired(_) => StatusCode::BAD_REQUEST,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Generic(ref e) => {
                warn!("{}", e);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        HttpResponse::build(status).json(json!({ "message": self.to_string() }))
    }
}
