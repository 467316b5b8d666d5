use serde::{Deserialize, Serialize};

use crate::domain::types::normalize_phone_to_e164;

/// Phones are stored in E.164 when they parse; free-form input that the
/// parser rejects is kept trimmed as typed, since the registry imports
/// legacy data with extensions and notes in the phone column.
fn normalize_telefone(telefone: Option<String>) -> Option<String> {
    telefone
        .map(|s| normalize_phone_to_e164(&s).unwrap_or_else(|_| s.trim().to_string()))
        .filter(|s| !s.is_empty())
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct Contato {
    pub id: i32,
    pub cliente_id: i32,
    pub nome: String,
    pub email: Option<String>,
    pub telefone: Option<String>,
    pub cargo: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewContato {
    pub cliente_id: i32,
    pub nome: String,
    pub email: Option<String>,
    pub telefone: Option<String>,
    pub cargo: Option<String>,
}

impl NewContato {
    #[must_use]
    pub fn new(
        cliente_id: i32,
        nome: String,
        email: Option<String>,
        telefone: Option<String>,
        cargo: Option<String>,
    ) -> Self {
        Self {
            cliente_id,
            nome: nome.trim().to_string(),
            email: email
                .map(|s| s.to_lowercase().trim().to_string())
                .filter(|s| !s.is_empty()),
            telefone: normalize_telefone(telefone),
            cargo: cargo.map(|s| s.trim().to_string()).filter(|s| !s.is_empty()),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct UpdateContato {
    pub nome: String,
    pub email: Option<String>,
    pub telefone: Option<String>,
    pub cargo: Option<String>,
}

impl UpdateContato {
    #[must_use]
    pub fn new(
        nome: String,
        email: Option<String>,
        telefone: Option<String>,
        cargo: Option<String>,
    ) -> Self {
        Self {
            nome: nome.trim().to_string(),
            email: email
                .map(|s| s.to_lowercase().trim().to_string())
                .filter(|s| !s.is_empty()),
            telefone: normalize_telefone(telefone),
            cargo: cargo.map(|s| s.trim().to_string()).filter(|s| !s.is_empty()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn telefone_normaliza_para_e164_quando_possivel() {
        let novo = NewContato::new(
            1,
            "João".into(),
            None,
            Some("+55 11 98765-4321".into()),
            None,
        );
        assert_eq!(novo.telefone.as_deref(), Some("+5511987654321"));

        let legado = NewContato::new(1, "João".into(), None, Some(" ramal 204 ".into()), None);
        assert_eq!(legado.telefone.as_deref(), Some("ramal 204"));
    }
}
