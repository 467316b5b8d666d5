//! DTOs returned by the authentication endpoints.

use serde::Serialize;

use crate::auth::AuthenticatedUser;
use crate::domain::usuario::Usuario;

/// Public view of the logged-in account.
#[derive(Debug, Clone, Serialize)]
pub struct SessaoUsuario {
    pub id: i32,
    pub nome_usuario: String,
    pub email_usuario: String,
    pub perfil: String,
}

impl From<&Usuario> for SessaoUsuario {
    fn from(usuario: &Usuario) -> Self {
        Self {
            id: usuario.id,
            nome_usuario: usuario.nome_usuario.clone(),
            email_usuario: usuario.email_usuario.clone(),
            perfil: usuario.perfil.to_string(),
        }
    }
}

impl From<&AuthenticatedUser> for SessaoUsuario {
    fn from(user: &AuthenticatedUser) -> Self {
        Self {
            id: user.id,
            nome_usuario: user.nome.clone(),
            email_usuario: user.email.clone(),
            perfil: user.perfil.clone(),
        }
    }
}

/// Payload of `GET /api/auth/check`.
#[derive(Debug, Serialize)]
pub struct AuthCheck {
    pub authenticated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usuario: Option<SessaoUsuario>,
}

/// Payload of `GET /api/auth/token`.
#[derive(Debug, Serialize)]
pub struct TokenInfo {
    pub token: String,
    pub usage: &'static str,
}

impl TokenInfo {
    pub fn new(token: String) -> Self {
        Self {
            token,
            usage: "Authorization: Bearer <token>",
        }
    }
}
