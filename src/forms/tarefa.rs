use serde::Deserialize;
use validator::Validate;

use crate::domain::tarefa::{NewSubtarefa, NewTarefa, UpdateSubtarefa, UpdateTarefa};
use crate::domain::types::EntityRef;
use crate::repository::TarefaListQuery;

#[derive(Debug, Default, Deserialize)]
/// `GET /api/tarefas` query string.
pub struct TarefaListParams {
    pub page: Option<usize>,
    pub limit: Option<usize>,
    pub search: Option<String>,
    pub cliente_id: Option<i32>,
    pub produto_id: Option<i32>,
    pub responsavel_id: Option<i32>,
}

impl TarefaListParams {
    pub fn query(&self) -> TarefaListQuery {
        let mut query = TarefaListQuery::new().paginate(
            crate::pagination::clamp_page(self.page),
            crate::pagination::clamp_per_page(self.limit),
        );
        if let Some(cliente_id) = self.cliente_id {
            query = query.cliente(cliente_id);
        }
        if let Some(produto_id) = self.produto_id {
            query = query.produto(produto_id);
        }
        if let Some(responsavel_id) = self.responsavel_id {
            query = query.responsavel(responsavel_id);
        }
        if let Some(term) = self
            .search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
        {
            query = query.search(term);
        }
        query
    }
}

#[derive(Debug, Deserialize, Validate)]
/// Body of `POST /api/tarefas`. The client may be referenced by internal id
/// or public UUID; the handler resolves it before building the domain value.
pub struct TarefaForm {
    #[validate(length(min = 1))]
    pub nome: String,
    pub cliente_id: EntityRef,
    pub produto_id: Option<i32>,
    pub tipo_tarefa_id: Option<i32>,
    pub status_id: Option<i32>,
    pub responsavel_id: Option<i32>,
}

impl TarefaForm {
    pub fn to_new_tarefa(&self, cliente_id: i32) -> NewTarefa {
        NewTarefa::new(
            self.nome.clone(),
            cliente_id,
            self.produto_id,
            self.tipo_tarefa_id,
            self.status_id,
            self.responsavel_id,
        )
    }
}

#[derive(Debug, Deserialize, Validate)]
/// Body of `PUT /api/tarefas/{id}`; the owning client never changes.
pub struct UpdateTarefaForm {
    #[validate(length(min = 1))]
    pub nome: String,
    pub produto_id: Option<i32>,
    pub tipo_tarefa_id: Option<i32>,
    pub status_id: Option<i32>,
    pub responsavel_id: Option<i32>,
}

impl From<&UpdateTarefaForm> for UpdateTarefa {
    fn from(form: &UpdateTarefaForm) -> Self {
        UpdateTarefa::new(
            form.nome.clone(),
            form.produto_id,
            form.tipo_tarefa_id,
            form.status_id,
            form.responsavel_id,
        )
    }
}

#[derive(Debug, Deserialize)]
/// `GET /api/subtarefas?tarefa_id=` query string.
pub struct SubtarefaListParams {
    pub tarefa_id: i32,
}

#[derive(Debug, Deserialize, Validate)]
/// Body of `POST /api/subtarefas`.
pub struct SubtarefaForm {
    pub tarefa_id: i32,
    #[validate(length(min = 1))]
    pub nome: String,
    pub status_id: Option<i32>,
}

impl From<&SubtarefaForm> for NewSubtarefa {
    fn from(form: &SubtarefaForm) -> Self {
        NewSubtarefa::new(form.tarefa_id, form.nome.clone(), form.status_id)
    }
}

#[derive(Debug, Deserialize, Validate)]
/// Body of `PUT /api/subtarefas/{id}`.
pub struct UpdateSubtarefaForm {
    #[validate(length(min = 1))]
    pub nome: String,
    pub status_id: Option<i32>,
}

impl From<&UpdateSubtarefaForm> for UpdateSubtarefa {
    fn from(form: &UpdateSubtarefaForm) -> Self {
        UpdateSubtarefa::new(form.nome.clone(), form.status_id)
    }
}
