//! DTOs for the time-tracking endpoints.

use serde::Serialize;

use crate::domain::registro_tempo::TotalRealizado;

/// Payload of `POST /api/registro-tempo/realizado-total`. The frontend works
/// in milliseconds; the decimal hours ride along for reports.
#[derive(Debug, Serialize)]
pub struct RealizadoTotal {
    pub tempo_realizado_ms: i64,
    pub horas_decimais: f64,
    pub total_registros: i64,
}

impl From<TotalRealizado> for RealizadoTotal {
    fn from(total: TotalRealizado) -> Self {
        Self {
            tempo_realizado_ms: total.tempo_realizado_ms(),
            horas_decimais: total.horas,
            total_registros: total.registros,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_decimal_hours_to_ms() {
        let dto: RealizadoTotal = TotalRealizado {
            horas: 2.25,
            registros: 4,
        }
        .into();
        assert_eq!(dto.tempo_realizado_ms, 8_100_000);
        assert_eq!(dto.total_registros, 4);
    }
}
