use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::TypeConstraintError;

/// Access profile attached to a user account.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Perfil {
    Admin,
    #[default]
    Colaborador,
}

impl Perfil {
    pub fn as_str(&self) -> &'static str {
        match self {
            Perfil::Admin => "admin",
            Perfil::Colaborador => "colaborador",
        }
    }
}

impl Display for Perfil {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Perfil {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Perfil::Admin),
            "colaborador" => Ok(Perfil::Colaborador),
            other => Err(TypeConstraintError::InvalidValue(other.to_string())),
        }
    }
}

/// User account as exposed to the API. The stored password hash never leaves
/// the repository layer.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct Usuario {
    pub id: i32,
    pub nome_usuario: String,
    pub email_usuario: String,
    pub perfil: Perfil,
    pub ativo: bool,
    pub criado_em: NaiveDateTime,
    pub atualizado_em: NaiveDateTime,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewUsuario {
    pub nome_usuario: String,
    pub email_usuario: String,
    /// Already-hashed password. Hashing happens in the service layer.
    pub senha_login: String,
    pub perfil: Perfil,
}

impl NewUsuario {
    #[must_use]
    pub fn new(nome_usuario: String, email_usuario: String, senha_login: String, perfil: Perfil) -> Self {
        Self {
            nome_usuario: nome_usuario.trim().to_string(),
            email_usuario: email_usuario.trim().to_lowercase(),
            senha_login,
            perfil,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct UpdateUsuario {
    pub nome_usuario: String,
    pub email_usuario: String,
    pub perfil: Perfil,
    /// New password hash, when the admin chose to reset it.
    pub senha_login: Option<String>,
}

impl UpdateUsuario {
    #[must_use]
    pub fn new(
        nome_usuario: String,
        email_usuario: String,
        perfil: Perfil,
        senha_login: Option<String>,
    ) -> Self {
        Self {
            nome_usuario: nome_usuario.trim().to_string(),
            email_usuario: email_usuario.trim().to_lowercase(),
            perfil,
            senha_login: senha_login.filter(|s| !s.is_empty()),
        }
    }
}

/// Self-service profile update for the logged-in user.
#[derive(Clone, Debug, Default)]
pub struct UpdatePerfilProprio {
    pub nome_usuario: Option<String>,
    pub senha_login: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perfil_roundtrips_through_str() {
        assert_eq!("admin".parse::<Perfil>().unwrap(), Perfil::Admin);
        assert_eq!(Perfil::Colaborador.as_str(), "colaborador");
        assert!("root".parse::<Perfil>().is_err());
    }

    #[test]
    fn new_usuario_normalizes_email() {
        let novo = NewUsuario::new(
            " Maria ".into(),
            " Maria@Empresa.COM ".into(),
            "hash".into(),
            Perfil::Colaborador,
        );
        assert_eq!(novo.nome_usuario, "Maria");
        assert_eq!(novo.email_usuario, "maria@empresa.com");
    }
}
