use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct Produto {
    pub id: i32,
    pub nome: String,
    pub descricao: Option<String>,
    pub ativo: bool,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewProduto {
    pub nome: String,
    pub descricao: Option<String>,
}

impl NewProduto {
    #[must_use]
    pub fn new(nome: String, descricao: Option<String>) -> Self {
        Self {
            nome: nome.trim().to_string(),
            descricao: descricao
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct UpdateProduto {
    pub nome: String,
    pub descricao: Option<String>,
    pub ativo: bool,
}

impl UpdateProduto {
    #[must_use]
    pub fn new(nome: String, descricao: Option<String>, ativo: bool) -> Self {
        Self {
            nome: nome.trim().to_string(),
            descricao: descricao
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            ativo,
        }
    }
}
