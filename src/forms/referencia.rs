use serde::Deserialize;
use validator::Validate;

use crate::domain::referencia::{
    NewAdquirente, NewAtividade, NewBanco, NewSistema, NewStatusTarefa, NewTipoContrato,
    NewTipoTarefa,
};

#[derive(Debug, Deserialize, Validate)]
pub struct BancoForm {
    #[validate(length(min = 1))]
    pub nome: String,
    pub codigo: Option<String>,
}

impl From<&BancoForm> for NewBanco {
    fn from(form: &BancoForm) -> Self {
        NewBanco::new(form.nome.clone(), form.codigo.clone())
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct AdquirenteForm {
    #[validate(length(min = 1))]
    pub nome: String,
}

impl From<&AdquirenteForm> for NewAdquirente {
    fn from(form: &AdquirenteForm) -> Self {
        NewAdquirente::new(form.nome.clone())
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct SistemaForm {
    #[validate(length(min = 1))]
    pub nome: String,
    pub descricao: Option<String>,
}

impl From<&SistemaForm> for NewSistema {
    fn from(form: &SistemaForm) -> Self {
        NewSistema::new(form.nome.clone(), form.descricao.clone())
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct TipoContratoForm {
    #[validate(length(min = 1))]
    pub nome: String,
}

impl From<&TipoContratoForm> for NewTipoContrato {
    fn from(form: &TipoContratoForm) -> Self {
        NewTipoContrato::new(form.nome.clone())
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct TipoTarefaForm {
    #[validate(length(min = 1))]
    pub nome: String,
}

impl From<&TipoTarefaForm> for NewTipoTarefa {
    fn from(form: &TipoTarefaForm) -> Self {
        NewTipoTarefa::new(form.nome.clone())
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct StatusTarefaForm {
    #[validate(length(min = 1))]
    pub nome: String,
    #[serde(default)]
    pub ordem: i32,
}

impl From<&StatusTarefaForm> for NewStatusTarefa {
    fn from(form: &StatusTarefaForm) -> Self {
        NewStatusTarefa::new(form.nome.clone(), form.ordem)
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct AtividadeForm {
    #[validate(length(min = 1))]
    pub nome: String,
    pub descricao: Option<String>,
}

impl From<&AtividadeForm> for NewAtividade {
    fn from(form: &AtividadeForm) -> Self {
        NewAtividade::new(form.nome.clone(), form.descricao.clone())
    }
}
