use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::tarefa::{
    NewSubtarefa as DomainNewSubtarefa, NewTarefa as DomainNewTarefa,
    Subtarefa as DomainSubtarefa, Tarefa as DomainTarefa,
    UpdateSubtarefa as DomainUpdateSubtarefa, UpdateTarefa as DomainUpdateTarefa,
};

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::tarefas)]
/// Diesel model for [`crate::domain::tarefa::Tarefa`].
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

#[derive(Insertable)]
#[diesel(table_name = crate::schema::tarefas)]
/// Insertable form of [`Tarefa`].
pub struct NewTarefa<'a> {
    pub nome: &'a str,
    pub cliente_id: i32,
    pub produto_id: Option<i32>,
    pub tipo_tarefa_id: Option<i32>,
    pub status_id: Option<i32>,
    pub responsavel_id: Option<i32>,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::tarefas)]
/// Data used when updating a [`Tarefa`] record.
pub struct UpdateTarefa<'a> {
    pub nome: &'a str,
    pub produto_id: Option<Option<i32>>,
    pub tipo_tarefa_id: Option<Option<i32>>,
    pub status_id: Option<Option<i32>>,
    pub responsavel_id: Option<Option<i32>>,
    pub atualizado_em: NaiveDateTime,
}

impl From<Tarefa> for DomainTarefa {
    fn from(tarefa: Tarefa) -> Self {
        Self {
            id: tarefa.id,
            nome: tarefa.nome,
            cliente_id: tarefa.cliente_id,
            produto_id: tarefa.produto_id,
            tipo_tarefa_id: tarefa.tipo_tarefa_id,
            status_id: tarefa.status_id,
            responsavel_id: tarefa.responsavel_id,
            criado_em: tarefa.criado_em,
            atualizado_em: tarefa.atualizado_em,
        }
    }
}

impl<'a> From<&'a DomainNewTarefa> for NewTarefa<'a> {
    fn from(tarefa: &'a DomainNewTarefa) -> Self {
        Self {
            nome: &tarefa.nome,
            cliente_id: tarefa.cliente_id,
            produto_id: tarefa.produto_id,
            tipo_tarefa_id: tarefa.tipo_tarefa_id,
            status_id: tarefa.status_id,
            responsavel_id: tarefa.responsavel_id,
        }
    }
}

impl<'a> From<&'a DomainUpdateTarefa> for UpdateTarefa<'a> {
    fn from(tarefa: &'a DomainUpdateTarefa) -> Self {
        Self {
            nome: &tarefa.nome,
            produto_id: Some(tarefa.produto_id),
            tipo_tarefa_id: Some(tarefa.tipo_tarefa_id),
            status_id: Some(tarefa.status_id),
            responsavel_id: Some(tarefa.responsavel_id),
            atualizado_em: chrono::Utc::now().naive_utc(),
        }
    }
}

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::subtarefas)]
/// Diesel model for [`crate::domain::tarefa::Subtarefa`].
pub struct Subtarefa {
    pub id: i32,
    pub tarefa_id: i32,
    pub nome: String,
    pub status_id: Option<i32>,
    pub criado_em: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::subtarefas)]
/// Insertable form of [`Subtarefa`].
pub struct NewSubtarefa<'a> {
    pub tarefa_id: i32,
    pub nome: &'a str,
    pub status_id: Option<i32>,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::subtarefas)]
/// Data used when updating a [`Subtarefa`] record.
pub struct UpdateSubtarefa<'a> {
    pub nome: &'a str,
    pub status_id: Option<Option<i32>>,
}

impl From<Subtarefa> for DomainSubtarefa {
    fn from(subtarefa: Subtarefa) -> Self {
        Self {
            id: subtarefa.id,
            tarefa_id: subtarefa.tarefa_id,
            nome: subtarefa.nome,
            status_id: subtarefa.status_id,
            criado_em: subtarefa.criado_em,
        }
    }
}

impl<'a> From<&'a DomainNewSubtarefa> for NewSubtarefa<'a> {
    fn from(subtarefa: &'a DomainNewSubtarefa) -> Self {
        Self {
            tarefa_id: subtarefa.tarefa_id,
            nome: &subtarefa.nome,
            status_id: subtarefa.status_id,
        }
    }
}

impl<'a> From<&'a DomainUpdateSubtarefa> for UpdateSubtarefa<'a> {
    fn from(subtarefa: &'a DomainUpdateSubtarefa) -> Self {
        Self {
            nome: &subtarefa.nome,
            status_id: Some(subtarefa.status_id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_tarefa_always_writes_optional_links() {
        let domain = DomainUpdateTarefa::new("Fechamento".into(), None, Some(2), None, Some(7));
        let update: UpdateTarefa = (&domain).into();
        // Double-option forces NULLs to be written instead of skipped.
        assert_eq!(update.produto_id, Some(None));
        assert_eq!(update.tipo_tarefa_id, Some(Some(2)));
        assert_eq!(update.responsavel_id, Some(Some(7)));
    }
}
