//! Lookup registries behind the configuration screens: banks, acquirers,
//! systems, contract types, task types, task statuses and activities.
//!
//! They all follow the same shape (a name plus at most one extra column),
//! which is why the repository stamps their CRUD out of a single macro.

use serde::{Deserialize, Serialize};

fn trim(value: String) -> String {
    value.trim().to_string()
}

fn trim_opt(value: Option<String>) -> Option<String> {
    value.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct Banco {
    pub id: i32,
    pub nome: String,
    pub codigo: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewBanco {
    pub nome: String,
    pub codigo: Option<String>,
}

impl NewBanco {
    #[must_use]
    pub fn new(nome: String, codigo: Option<String>) -> Self {
        Self {
            nome: trim(nome),
            codigo: trim_opt(codigo),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct Adquirente {
    pub id: i32,
    pub nome: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewAdquirente {
    pub nome: String,
}

impl NewAdquirente {
    #[must_use]
    pub fn new(nome: String) -> Self {
        Self { nome: trim(nome) }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct Sistema {
    pub id: i32,
    pub nome: String,
    pub descricao: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewSistema {
    pub nome: String,
    pub descricao: Option<String>,
}

impl NewSistema {
    #[must_use]
    pub fn new(nome: String, descricao: Option<String>) -> Self {
        Self {
            nome: trim(nome),
            descricao: trim_opt(descricao),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct TipoContrato {
    pub id: i32,
    pub nome: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewTipoContrato {
    pub nome: String,
}

impl NewTipoContrato {
    #[must_use]
    pub fn new(nome: String) -> Self {
        Self { nome: trim(nome) }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct TipoTarefa {
    pub id: i32,
    pub nome: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewTipoTarefa {
    pub nome: String,
}

impl NewTipoTarefa {
    #[must_use]
    pub fn new(nome: String) -> Self {
        Self { nome: trim(nome) }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct StatusTarefa {
    pub id: i32,
    pub nome: String,
    /// Display order in kanban-style pickers.
    pub ordem: i32,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewStatusTarefa {
    pub nome: String,
    pub ordem: i32,
}

impl NewStatusTarefa {
    #[must_use]
    pub fn new(nome: String, ordem: i32) -> Self {
        Self {
            nome: trim(nome),
            ordem,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct Atividade {
    pub id: i32,
    pub nome: String,
    pub descricao: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewAtividade {
    pub nome: String,
    pub descricao: Option<String>,
}

impl NewAtividade {
    #[must_use]
    pub fn new(nome: String, descricao: Option<String>) -> Self {
        Self {
            nome: trim(nome),
            descricao: trim_opt(descricao),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_trim_and_drop_empty_extras() {
        let banco = NewBanco::new(" Banco Alfa ".into(), Some("  ".into()));
        assert_eq!(banco.nome, "Banco Alfa");
        assert_eq!(banco.codigo, None);

        let sistema = NewSistema::new("ERP".into(), Some(" legado ".into()));
        assert_eq!(sistema.descricao.as_deref(), Some("legado"));
    }
}
