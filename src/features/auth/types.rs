use serde::{Deserialize, Serialize};

/// Body of both `/login` and `/register`.
#[derive(Serialize)]
pub struct Credentials<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Clone, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub email: String,
    #[serde(default)]
    pub response: Option<String>,
}

impl std::fmt::Debug for LoginResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginResponse")
            .field("token", &"***")
            .field("email", &self.email)
            .field("response", &self.response)
            .finish()
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct RegisterResponse {
    pub msg: String,
}
