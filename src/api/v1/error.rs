use crate::application_port::AuthError;
use serde::Serialize;
use std::convert::Infallible;
use thiserror::Error;
use tracing::warn;
use warp::http::StatusCode;
use warp::{Rejection, reject};

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Caller-visible failure classes. Everything about a well-formed
/// request other than "session issued" collapses into
/// `InvalidCredentials` or `InternalError`; the response never says
/// whether the username existed, was ambiguous, or the password was
/// wrong.
#[derive(Debug, Clone, Error)]
pub enum ApiErrorCode {
    #[error("Username and password are required.")]
    InvalidRequest,
    #[error("Invalid username or password.")]
    InvalidCredentials,
    #[error("{0}")]
    InternalError(String),
}

impl ApiErrorCode {
    pub fn internal<E: std::fmt::Display>(error: E) -> ApiErrorCode {
        warn!("Internal error: {}", error);
        ApiErrorCode::InternalError(error.to_string())
    }

    fn status(&self) -> StatusCode {
        match self {
            ApiErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
            ApiErrorCode::InvalidCredentials => StatusCode::UNAUTHORIZED,
            ApiErrorCode::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl reject::Reject for ApiErrorCode {}

impl From<AuthError> for ApiErrorCode {
    fn from(error: AuthError) -> Self {
        match error {
            AuthError::InvalidCredentials => ApiErrorCode::InvalidCredentials,
            AuthError::Provider(e) => ApiErrorCode::internal(e),
        }
    }
}

pub async fn recover_error(err: Rejection) -> Result<impl warp::Reply, Infallible> {
    let (status, message) = if let Some(err) = err.find::<ApiErrorCode>() {
        (err.status(), err.to_string())
    } else if err
        .find::<warp::filters::body::BodyDeserializeError>()
        .is_some()
    {
        // Unparsable or incomplete body, same caller mistake as empty fields.
        (
            StatusCode::BAD_REQUEST,
            ApiErrorCode::InvalidRequest.to_string(),
        )
    } else if err.is_not_found() {
        (StatusCode::NOT_FOUND, "Not found.".to_string())
    } else if err.find::<reject::MethodNotAllowed>().is_some() {
        (
            StatusCode::METHOD_NOT_ALLOWED,
            "Method not allowed.".to_string(),
        )
    } else {
        warn!("Unhandled rejection: {:?}", err);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal error.".to_string(),
        )
    };

    let json = warp::reply::json(&ErrorBody { error: message });
    Ok(warp::reply::with_status(json, status))
}
