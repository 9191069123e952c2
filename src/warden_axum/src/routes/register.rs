use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use secrecy::Secret;
use serde::Deserialize;
use warden_application::RegisterUseCase;
use warden_core::{Password, PasswordHasher, UserStore, Username};

use crate::error::{AuthApiError, MessageResponse};

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: Secret<String>,
}

#[tracing::instrument(name = "Register", skip_all)]
pub async fn register<U, H>(
    State((user_store, hasher)): State<(U, H)>,
    Json(request): Json<RegisterRequest>,
) -> Result<impl IntoResponse, AuthApiError>
where
    U: UserStore + Clone + 'static,
    H: PasswordHasher + Clone + 'static,
{
    let use_case = RegisterUseCase::new(user_store, hasher);

    let username = Username::parse(request.username)?;
    let password = Password::try_from(request.password)?;

    use_case.execute(username, password).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("User registered successfully")),
    ))
}
