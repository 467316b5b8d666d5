use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
/// Body of `POST /api/login`.
pub struct LoginForm {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub senha: String,
}

#[derive(Debug, Deserialize, Validate)]
/// Body of `PUT /api/auth/profile`; both fields optional, at least one
/// required (enforced in the service).
pub struct UpdateProfileForm {
    pub nome_usuario: Option<String>,
    pub senha_login: Option<String>,
}
