use super::types::{Credentials, LoginResponse, RegisterResponse};
use crate::{
    app::{ApiClient, AppError},
    storage::{CredentialStore, TOKEN_KEY},
};
use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, info};

pub const LOGIN_PATH: &str = "/login";
pub const REGISTER_PATH: &str = "/register";

fn credentials<'a>(
    email: &'a str,
    password: &'a SecretString,
) -> Result<Credentials<'a>, AppError> {
    let email = email.trim();
    if email.is_empty() {
        return Err(AppError::Config("Email is required.".to_string()));
    }
    if password.expose_secret().is_empty() {
        return Err(AppError::Config("Password is required.".to_string()));
    }
    Ok(Credentials {
        email,
        password: password.expose_secret(),
    })
}

/// Creates an account. Returns the backend's confirmation message.
///
/// Nothing is stored; call [`login`] afterwards to start a session. An existing
/// account is reported by the backend with a non-2xx status and surfaces as
/// `AppError::Http`.
///
/// # Errors
/// Returns `AppError::Config` for blank input or the request error if the
/// backend refuses the registration.
pub async fn register(
    api: &ApiClient,
    email: &str,
    password: &SecretString,
) -> Result<String, AppError> {
    let request = credentials(email, password)?;
    let response: RegisterResponse = api.post_json(REGISTER_PATH, &request).await?;

    info!(email = %request.email, "account registered");
    Ok(response.msg)
}

/// Exchanges email and password for a token and stores it.
/// Returns the email the backend confirmed.
///
/// # Errors
/// Returns `AppError::Config` for blank input, the request error if the backend
/// rejects the login, or `AppError::Storage` if the token cannot be saved.
pub async fn login(
    api: &ApiClient,
    store: &dyn CredentialStore,
    email: &str,
    password: &SecretString,
) -> Result<String, AppError> {
    let request = credentials(email, password)?;
    let response: LoginResponse = api.post_json(LOGIN_PATH, &request).await?;

    if response.token.trim().is_empty() {
        return Err(AppError::Parse(
            "Login response did not include a token.".to_string(),
        ));
    }

    debug!(reply = ?response.response, "login accepted");
    store.set(TOKEN_KEY, &SecretString::from(response.token))?;
    info!(email = %response.email, "session stored");

    Ok(response.email)
}

/// Forgets the stored token. Calling it without a session is fine.
///
/// # Errors
/// Returns `AppError::Storage` if the store cannot be written.
pub fn logout(store: &dyn CredentialStore) -> Result<(), AppError> {
    store.remove(TOKEN_KEY)?;
    info!("session cleared");
    Ok(())
}
