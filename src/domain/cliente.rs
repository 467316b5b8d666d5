use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{PublicId, TypeConstraintError};

/// Lifecycle status of a client. Transitions only through the explicit
/// activate/deactivate endpoints, never through a plain update.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StatusCliente {
    #[default]
    Ativo,
    Inativo,
}

impl StatusCliente {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusCliente::Ativo => "ativo",
            StatusCliente::Inativo => "inativo",
        }
    }
}

impl Display for StatusCliente {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for StatusCliente {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ativo" => Ok(StatusCliente::Ativo),
            "inativo" => Ok(StatusCliente::Inativo),
            other => Err(TypeConstraintError::InvalidValue(other.to_string())),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Cliente {
    pub id: i32,
    /// UUID exposed to the API; the numeric id stays internal.
    pub public_id: PublicId,
    pub nome: String,
    pub status: StatusCliente,
    pub criado_em: NaiveDateTime,
    pub atualizado_em: NaiveDateTime,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewCliente {
    pub public_id: PublicId,
    pub nome: String,
    pub status: StatusCliente,
}

impl NewCliente {
    #[must_use]
    pub fn new(nome: String) -> Self {
        Self {
            public_id: PublicId::new(),
            nome: nome.trim().to_string(),
            status: StatusCliente::Ativo,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct UpdateCliente {
    pub nome: String,
}

impl UpdateCliente {
    #[must_use]
    pub fn new(nome: String) -> Self {
        Self {
            nome: nome.trim().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_roundtrips_through_str() {
        assert_eq!("ativo".parse::<StatusCliente>().unwrap(), StatusCliente::Ativo);
        assert_eq!(StatusCliente::Inativo.as_str(), "inativo");
        assert!("pendente".parse::<StatusCliente>().is_err());
    }

    #[test]
    fn new_cliente_starts_active_with_fresh_public_id() {
        let a = NewCliente::new(" Empresa X ".into());
        let b = NewCliente::new("Empresa Y".into());
        assert_eq!(a.nome, "Empresa X");
        assert_eq!(a.status, StatusCliente::Ativo);
        assert_ne!(a.public_id, b.public_id);
    }
}
