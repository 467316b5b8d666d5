use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::Deserialize;
use validator::Validate;

use crate::domain::types::EntityRef;
use crate::repository::RegistroListQuery;

/// Accepts the date formats the frontend actually sends: a plain day, a
/// naive timestamp or a full RFC 3339 instant. A plain day expands to the
/// start or the end of that day depending on which side of the range it is.
pub fn parse_data(value: &str, fim_do_dia: bool) -> Option<NaiveDateTime> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(instant) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(instant.naive_utc());
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S") {
        return Some(naive);
    }
    if let Ok(dia) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        let horario = if fim_do_dia {
            dia.and_hms_opt(23, 59, 59)
        } else {
            dia.and_hms_opt(0, 0, 0)
        };
        return horario;
    }

    None
}

#[derive(Debug, Default, Deserialize)]
/// `GET /api/registro-tempo` query string.
pub struct RegistroListParams {
    pub page: Option<usize>,
    pub limit: Option<usize>,
    pub usuario_id: Option<i32>,
    pub data_inicio: Option<String>,
    pub data_fim: Option<String>,
}

impl RegistroListParams {
    pub fn query(&self) -> RegistroListQuery {
        self.query_sem_paginacao().paginate(
            crate::pagination::clamp_page(self.page),
            crate::pagination::clamp_per_page(self.limit),
        )
    }

    /// Same filters without a page window; the CSV export wants every row.
    pub fn query_sem_paginacao(&self) -> RegistroListQuery {
        let mut query = RegistroListQuery::new();
        if let Some(usuario_id) = self.usuario_id {
            query = query.usuario(usuario_id);
        }
        query.periodo(
            self.data_inicio.as_deref().and_then(|v| parse_data(v, false)),
            self.data_fim.as_deref().and_then(|v| parse_data(v, true)),
        )
    }
}

#[derive(Debug, Deserialize)]
/// `GET /api/registro-tempo/ativos` query string.
pub struct AtivosParams {
    pub usuario_id: i32,
}

#[derive(Debug, Deserialize)]
/// `GET /api/registro-tempo/historico` query string.
pub struct HistoricoParams {
    pub usuario_id: i32,
    pub limite: Option<usize>,
}

#[derive(Debug, Deserialize, Validate)]
/// Body of `POST /api/registro-tempo/iniciar`.
pub struct IniciarForm {
    pub usuario_id: i32,
    pub tarefa_id: Option<i32>,
    pub descricao: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
/// Body of `PUT /api/registro-tempo/finalizar/{id}`. The frontend echoes the
/// task and user back; the entry id in the path is what matters.
pub struct FinalizarForm {
    pub usuario_id: Option<i32>,
    pub tarefa_id: Option<i32>,
}

#[derive(Debug, Deserialize, Validate)]
/// Body of `POST /api/registro-tempo` (manual, already-finished span).
pub struct RegistroManualForm {
    pub usuario_id: i32,
    pub tarefa_id: Option<i32>,
    pub descricao: Option<String>,
    pub inicio: String,
    pub fim: String,
}

#[derive(Debug, Default, Deserialize)]
/// Body of `POST /api/registro-tempo/realizado-total`. Field names follow
/// the frontend payload; `cliente_id` may be numeric or a UUID string.
pub struct RealizadoTotalForm {
    pub responsavel_id: Option<i32>,
    pub tarefa_id: Option<i32>,
    pub cliente_id: Option<EntityRef>,
    pub produto_id: Option<i32>,
    pub data_inicio: Option<String>,
    pub data_fim: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_data_handles_plain_days() {
        let inicio = parse_data("2025-06-01", false).unwrap();
        assert_eq!(inicio.to_string(), "2025-06-01 00:00:00");

        let fim = parse_data("2025-06-01", true).unwrap();
        assert_eq!(fim.to_string(), "2025-06-01 23:59:59");
    }

    #[test]
    fn parse_data_handles_timestamps() {
        let naive = parse_data("2025-06-01T08:30:00", false).unwrap();
        assert_eq!(naive.to_string(), "2025-06-01 08:30:00");

        let rfc = parse_data("2025-06-01T08:30:00-03:00", false).unwrap();
        assert_eq!(rfc.to_string(), "2025-06-01 11:30:00");
    }

    #[test]
    fn parse_data_rejects_garbage() {
        assert_eq!(parse_data("ontem", false), None);
        assert_eq!(parse_data("  ", false), None);
    }
}
