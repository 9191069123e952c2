use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use secrecy::Secret;
use serde::{Deserialize, Serialize};
use warden_application::LoginUseCase;
use warden_core::{Password, PasswordHasher, TokenIssuer, UserStore, Username};

use crate::error::AuthApiError;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: Secret<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

#[tracing::instrument(name = "Login", skip_all)]
pub async fn login<U, H, T>(
    State((user_store, hasher, token_issuer)): State<(U, H, T)>,
    Json(request): Json<LoginRequest>,
) -> Result<impl IntoResponse, AuthApiError>
where
    U: UserStore + Clone + 'static,
    H: PasswordHasher + Clone + 'static,
    T: TokenIssuer + Clone + 'static,
{
    let use_case = LoginUseCase::new(user_store, hasher, token_issuer);

    // A malformed pair can never match a stored account
    let username =
        Username::parse(request.username).map_err(|_| AuthApiError::InvalidCredentials)?;
    let password =
        Password::try_from(request.password).map_err(|_| AuthApiError::InvalidCredentials)?;

    let token = use_case.execute(username, password).await?;

    Ok((
        StatusCode::OK,
        Json(LoginResponse {
            token: token.into_string(),
        }),
    ))
}
