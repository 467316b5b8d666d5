//! Diesel models for the lookup registries. Create and update payloads carry
//! the same columns, so each `New*` struct doubles as the changeset.

use diesel::prelude::*;

use crate::domain::referencia::{
    Adquirente as DomainAdquirente, Atividade as DomainAtividade, Banco as DomainBanco,
    NewAdquirente as DomainNewAdquirente, NewAtividade as DomainNewAtividade,
    NewBanco as DomainNewBanco, NewSistema as DomainNewSistema,
    NewStatusTarefa as DomainNewStatusTarefa, NewTipoContrato as DomainNewTipoContrato,
    NewTipoTarefa as DomainNewTipoTarefa, Sistema as DomainSistema,
    StatusTarefa as DomainStatusTarefa, TipoContrato as DomainTipoContrato,
    TipoTarefa as DomainTipoTarefa,
};

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::bancos)]
pub struct Banco {
    pub id: i32,
    pub nome: String,
    pub codigo: Option<String>,
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = crate::schema::bancos)]
#[diesel(treat_none_as_null = true)]
pub struct NewBanco<'a> {
    pub nome: &'a str,
    pub codigo: Option<&'a str>,
}

impl From<Banco> for DomainBanco {
    fn from(banco: Banco) -> Self {
        Self {
            id: banco.id,
            nome: banco.nome,
            codigo: banco.codigo,
        }
    }
}

impl<'a> From<&'a DomainNewBanco> for NewBanco<'a> {
    fn from(banco: &'a DomainNewBanco) -> Self {
        Self {
            nome: &banco.nome,
            codigo: banco.codigo.as_deref(),
        }
    }
}

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::adquirentes)]
pub struct Adquirente {
    pub id: i32,
    pub nome: String,
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = crate::schema::adquirentes)]
pub struct NewAdquirente<'a> {
    pub nome: &'a str,
}

impl From<Adquirente> for DomainAdquirente {
    fn from(adquirente: Adquirente) -> Self {
        Self {
            id: adquirente.id,
            nome: adquirente.nome,
        }
    }
}

impl<'a> From<&'a DomainNewAdquirente> for NewAdquirente<'a> {
    fn from(adquirente: &'a DomainNewAdquirente) -> Self {
        Self {
            nome: &adquirente.nome,
        }
    }
}

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::sistemas)]
pub struct Sistema {
    pub id: i32,
    pub nome: String,
    pub descricao: Option<String>,
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = crate::schema::sistemas)]
#[diesel(treat_none_as_null = true)]
pub struct NewSistema<'a> {
    pub nome: &'a str,
    pub descricao: Option<&'a str>,
}

impl From<Sistema> for DomainSistema {
    fn from(sistema: Sistema) -> Self {
        Self {
            id: sistema.id,
            nome: sistema.nome,
            descricao: sistema.descricao,
        }
    }
}

impl<'a> From<&'a DomainNewSistema> for NewSistema<'a> {
    fn from(sistema: &'a DomainNewSistema) -> Self {
        Self {
            nome: &sistema.nome,
            descricao: sistema.descricao.as_deref(),
        }
    }
}

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::tipos_contrato)]
pub struct TipoContrato {
    pub id: i32,
    pub nome: String,
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = crate::schema::tipos_contrato)]
pub struct NewTipoContrato<'a> {
    pub nome: &'a str,
}

impl From<TipoContrato> for DomainTipoContrato {
    fn from(tipo: TipoContrato) -> Self {
        Self {
            id: tipo.id,
            nome: tipo.nome,
        }
    }
}

impl<'a> From<&'a DomainNewTipoContrato> for NewTipoContrato<'a> {
    fn from(tipo: &'a DomainNewTipoContrato) -> Self {
        Self { nome: &tipo.nome }
    }
}

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::tipos_tarefa)]
pub struct TipoTarefa {
    pub id: i32,
    pub nome: String,
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = crate::schema::tipos_tarefa)]
pub struct NewTipoTarefa<'a> {
    pub nome: &'a str,
}

impl From<TipoTarefa> for DomainTipoTarefa {
    fn from(tipo: TipoTarefa) -> Self {
        Self {
            id: tipo.id,
            nome: tipo.nome,
        }
    }
}

impl<'a> From<&'a DomainNewTipoTarefa> for NewTipoTarefa<'a> {
    fn from(tipo: &'a DomainNewTipoTarefa) -> Self {
        Self { nome: &tipo.nome }
    }
}

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::status_tarefa)]
pub struct StatusTarefa {
    pub id: i32,
    pub nome: String,
    pub ordem: i32,
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = crate::schema::status_tarefa)]
pub struct NewStatusTarefa<'a> {
    pub nome: &'a str,
    pub ordem: i32,
}

impl From<StatusTarefa> for DomainStatusTarefa {
    fn from(status: StatusTarefa) -> Self {
        Self {
            id: status.id,
            nome: status.nome,
            ordem: status.ordem,
        }
    }
}

impl<'a> From<&'a DomainNewStatusTarefa> for NewStatusTarefa<'a> {
    fn from(status: &'a DomainNewStatusTarefa) -> Self {
        Self {
            nome: &status.nome,
            ordem: status.ordem,
        }
    }
}

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::atividades)]
pub struct Atividade {
    pub id: i32,
    pub nome: String,
    pub descricao: Option<String>,
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = crate::schema::atividades)]
#[diesel(treat_none_as_null = true)]
pub struct NewAtividade<'a> {
    pub nome: &'a str,
    pub descricao: Option<&'a str>,
}

impl From<Atividade> for DomainAtividade {
    fn from(atividade: Atividade) -> Self {
        Self {
            id: atividade.id,
            nome: atividade.nome,
            descricao: atividade.descricao,
        }
    }
}

impl<'a> From<&'a DomainNewAtividade> for NewAtividade<'a> {
    fn from(atividade: &'a DomainNewAtividade) -> Self {
        Self {
            nome: &atividade.nome,
            descricao: atividade.descricao.as_deref(),
        }
    }
}
