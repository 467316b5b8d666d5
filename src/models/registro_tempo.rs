use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::registro_tempo::{
    NewRegistroTempo as DomainNewRegistroTempo, RegistroTempo as DomainRegistroTempo,
};

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::registros_tempo)]
/// Diesel model for [`crate::domain::registro_tempo::RegistroTempo`].
pub struct RegistroTempo {
    pub id: i32,
    pub usuario_id: i32,
    pub tarefa_id: Option<i32>,
    pub descricao: Option<String>,
    pub inicio: NaiveDateTime,
    pub fim: Option<NaiveDateTime>,
    pub horas: Option<f64>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::registros_tempo)]
/// Insertable form of [`RegistroTempo`].
pub struct NewRegistroTempo<'a> {
    pub usuario_id: i32,
    pub tarefa_id: Option<i32>,
    pub descricao: Option<&'a str>,
    pub inicio: NaiveDateTime,
    pub fim: Option<NaiveDateTime>,
    pub horas: Option<f64>,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::registros_tempo)]
/// Changeset stamping the end of a running entry.
pub struct FinalizarRegistro {
    pub fim: NaiveDateTime,
    pub horas: f64,
}

impl From<RegistroTempo> for DomainRegistroTempo {
    fn from(registro: RegistroTempo) -> Self {
        Self {
            id: registro.id,
            usuario_id: registro.usuario_id,
            tarefa_id: registro.tarefa_id,
            descricao: registro.descricao,
            inicio: registro.inicio,
            fim: registro.fim,
            horas: registro.horas,
        }
    }
}

impl<'a> From<&'a DomainNewRegistroTempo> for NewRegistroTempo<'a> {
    fn from(registro: &'a DomainNewRegistroTempo) -> Self {
        Self {
            usuario_id: registro.usuario_id,
            tarefa_id: registro.tarefa_id,
            descricao: registro.descricao.as_deref(),
            inicio: registro.inicio,
            fim: registro.fim,
            horas: registro.horas,
        }
    }
}
