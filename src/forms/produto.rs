use serde::Deserialize;
use validator::Validate;

use crate::domain::produto::{NewProduto, UpdateProduto};

#[derive(Debug, Deserialize, Validate)]
/// Body of `POST /api/produtos` and `PUT /api/produtos/{id}`.
pub struct ProdutoForm {
    #[validate(length(min = 1))]
    pub nome: String,
    pub descricao: Option<String>,
    /// Defaults to active on create; updates state it explicitly.
    #[serde(default = "ativo_default")]
    pub ativo: bool,
}

fn ativo_default() -> bool {
    true
}

impl From<&ProdutoForm> for NewProduto {
    fn from(form: &ProdutoForm) -> Self {
        NewProduto::new(form.nome.clone(), form.descricao.clone())
    }
}

impl From<&ProdutoForm> for UpdateProduto {
    fn from(form: &ProdutoForm) -> Self {
        UpdateProduto::new(form.nome.clone(), form.descricao.clone(), form.ativo)
    }
}
