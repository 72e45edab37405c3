use super::error::*;
use crate::application_port::{AuthService, LoginInput};
use crate::domain_model::Session;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use warp::{self, reject};

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub session: Session,
}

pub async fn login(
    body: LoginRequest,
    auth_service: Arc<dyn AuthService>,
) -> Result<impl warp::Reply, warp::Rejection> {
    let username = body.username.trim().to_string();
    // Both fields must survive trimming; the password itself is opaque
    // and forwarded untouched.
    if username.is_empty() || body.password.trim().is_empty() {
        return Err(reject::custom(ApiErrorCode::InvalidRequest));
    }

    let session = auth_service
        .login(LoginInput {
            username,
            password: body.password,
        })
        .await
        .map_err(ApiErrorCode::from)
        .map_err(reject::custom)?;

    Ok(warp::reply::json(&SessionResponse { session }))
}
