use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Tarefa {
    pub id: i32,
    pub nome: String,
    pub cliente_id: i32,
    pub produto_id: Option<i32>,
    pub tipo_tarefa_id: Option<i32>,
    pub status_id: Option<i32>,
    pub responsavel_id: Option<i32>,
    pub criado_em: NaiveDateTime,
    pub atualizado_em: NaiveDateTime,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewTarefa {
    pub nome: String,
    pub cliente_id: i32,
    pub produto_id: Option<i32>,
    pub tipo_tarefa_id: Option<i32>,
    pub status_id: Option<i32>,
    pub responsavel_id: Option<i32>,
}

impl NewTarefa {
    #[must_use]
    pub fn new(
        nome: String,
        cliente_id: i32,
        produto_id: Option<i32>,
        tipo_tarefa_id: Option<i32>,
        status_id: Option<i32>,
        responsavel_id: Option<i32>,
    ) -> Self {
        Self {
            nome: nome.trim().to_string(),
            cliente_id,
            produto_id,
            tipo_tarefa_id,
            status_id,
            responsavel_id,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct UpdateTarefa {
    pub nome: String,
    pub produto_id: Option<i32>,
    pub tipo_tarefa_id: Option<i32>,
    pub status_id: Option<i32>,
    pub responsavel_id: Option<i32>,
}

impl UpdateTarefa {
    #[must_use]
    pub fn new(
        nome: String,
        produto_id: Option<i32>,
        tipo_tarefa_id: Option<i32>,
        status_id: Option<i32>,
        responsavel_id: Option<i32>,
    ) -> Self {
        Self {
            nome: nome.trim().to_string(),
            produto_id,
            tipo_tarefa_id,
            status_id,
            responsavel_id,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Subtarefa {
    pub id: i32,
    pub tarefa_id: i32,
    pub nome: String,
    pub status_id: Option<i32>,
    pub criado_em: NaiveDateTime,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewSubtarefa {
    pub tarefa_id: i32,
    pub nome: String,
    pub status_id: Option<i32>,
}

impl NewSubtarefa {
    #[must_use]
    pub fn new(tarefa_id: i32, nome: String, status_id: Option<i32>) -> Self {
        Self {
            tarefa_id,
            nome: nome.trim().to_string(),
            status_id,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct UpdateSubtarefa {
    pub nome: String,
    pub status_id: Option<i32>,
}

impl UpdateSubtarefa {
    #[must_use]
    pub fn new(nome: String, status_id: Option<i32>) -> Self {
        Self {
            nome: nome.trim().to_string(),
            status_id,
        }
    }
}
