//! Time-tracking entries and the decimal-hours arithmetic around them.
//!
//! The store keeps worked time as decimal hours (`8.5` = 8h30min) while the
//! frontend works in milliseconds, so the conversions live here next to the
//! entity instead of being re-derived ad hoc at every call site.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

const MS_PER_HOUR: f64 = 3_600_000.0;

/// Converts decimal hours to whole milliseconds.
pub fn horas_para_ms(horas: f64) -> i64 {
    (horas * MS_PER_HOUR).round() as i64
}

/// Converts milliseconds back to decimal hours.
pub fn ms_para_horas(ms: i64) -> f64 {
    ms as f64 / MS_PER_HOUR
}

/// Span between two timestamps in decimal hours, never negative.
pub fn duracao_horas(inicio: NaiveDateTime, fim: NaiveDateTime) -> f64 {
    let ms = (fim - inicio).num_milliseconds().max(0);
    ms_para_horas(ms)
}

/// Aggregated result of the realized-time query.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct TotalRealizado {
    /// Sum of `horas` over the matching finished entries.
    pub horas: f64,
    /// How many entries contributed to the sum.
    pub registros: i64,
}

impl TotalRealizado {
    pub fn tempo_realizado_ms(&self) -> i64 {
        horas_para_ms(self.horas)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct RegistroTempo {
    pub id: i32,
    pub usuario_id: i32,
    pub tarefa_id: Option<i32>,
    pub descricao: Option<String>,
    pub inicio: NaiveDateTime,
    pub fim: Option<NaiveDateTime>,
    /// Decimal hours, present only once the entry is finished.
    pub horas: Option<f64>,
}

impl RegistroTempo {
    /// An entry is active while its end timestamp is unset.
    pub fn em_andamento(&self) -> bool {
        self.fim.is_none()
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewRegistroTempo {
    pub usuario_id: i32,
    pub tarefa_id: Option<i32>,
    pub descricao: Option<String>,
    pub inicio: NaiveDateTime,
    pub fim: Option<NaiveDateTime>,
    pub horas: Option<f64>,
}

impl NewRegistroTempo {
    /// Entry for a running timer: no end, no hours yet.
    #[must_use]
    pub fn iniciado(
        usuario_id: i32,
        tarefa_id: Option<i32>,
        descricao: Option<String>,
        inicio: NaiveDateTime,
    ) -> Self {
        Self {
            usuario_id,
            tarefa_id,
            descricao: descricao.map(|s| s.trim().to_string()).filter(|s| !s.is_empty()),
            inicio,
            fim: None,
            horas: None,
        }
    }

    /// Manually recorded, already-finished span. Hours are derived from the
    /// interval rather than trusted from the caller.
    #[must_use]
    pub fn finalizado(
        usuario_id: i32,
        tarefa_id: Option<i32>,
        descricao: Option<String>,
        inicio: NaiveDateTime,
        fim: NaiveDateTime,
    ) -> Self {
        Self {
            usuario_id,
            tarefa_id,
            descricao: descricao.map(|s| s.trim().to_string()).filter(|s| !s.is_empty()),
            inicio,
            fim: Some(fim),
            horas: Some(duracao_horas(inicio, fim)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn ts(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 6, 10)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    #[test]
    fn horas_ms_conversions_roundtrip() {
        assert_eq!(horas_para_ms(1.0), 3_600_000);
        assert_eq!(horas_para_ms(0.5), 1_800_000);
        assert_eq!(ms_para_horas(5_400_000), 1.5);
    }

    #[test]
    fn duracao_is_clamped_to_zero() {
        assert_eq!(duracao_horas(ts(10, 0), ts(9, 0)), 0.0);
        assert_eq!(duracao_horas(ts(9, 0), ts(17, 30)), 8.5);
    }

    #[test]
    fn finalizado_derives_hours_from_interval() {
        let novo = NewRegistroTempo::finalizado(1, Some(2), None, ts(9, 0), ts(11, 15));
        assert_eq!(novo.horas, Some(2.25));
        assert!(novo.fim.is_some());
    }

    #[test]
    fn iniciado_has_no_end_or_hours() {
        let novo = NewRegistroTempo::iniciado(1, None, Some("  ".into()), ts(9, 0));
        assert!(novo.fim.is_none());
        assert!(novo.horas.is_none());
        assert_eq!(novo.descricao, None);
    }
}
