use serde::Deserialize;
use validator::Validate;

use crate::domain::usuario::Perfil;

#[derive(Debug, Deserialize, Validate)]
/// Body of `POST /api/usuarios` and `PUT /api/usuarios/{id}`. On create the
/// password is required; on update it is an optional reset.
pub struct UsuarioForm {
    #[validate(length(min = 1))]
    pub nome_usuario: String,
    #[validate(email)]
    pub email_usuario: String,
    pub senha_login: Option<String>,
    #[serde(default)]
    pub perfil: Perfil,
}
