//! HTTP handlers. Every endpoint answers with the
//! `{ success, data, total, error }` envelope; helpers here translate layer
//! errors into the right status code.

use actix_web::HttpResponse;

use crate::domain::types::EntityRef;
use crate::dto::ApiResponse;
use crate::services::ServiceError;

pub mod auth;
pub mod cliente;
pub mod produto;
pub mod referencia;
pub mod registro_tempo;
pub mod tarefa;
pub mod usuario;

/// Maps a service error to its response. `contexto` is what the client sees
/// (and what gets logged) for unexpected failures, so handlers pass a short
/// Portuguese sentence like the rest of the API surface.
pub(crate) fn service_error_response(err: ServiceError, contexto: &str) -> HttpResponse {
    match err {
        ServiceError::Unauthorized => {
            HttpResponse::Unauthorized().json(ApiResponse::<()>::error("Não autorizado"))
        }
        ServiceError::NotFound => {
            HttpResponse::NotFound().json(ApiResponse::<()>::error("Não encontrado"))
        }
        ServiceError::Validation(msg) => {
            HttpResponse::BadRequest().json(ApiResponse::<()>::error(msg))
        }
        ServiceError::Repository(err) => {
            log::error!("{contexto}: {err}");
            HttpResponse::InternalServerError().json(ApiResponse::<()>::error(contexto))
        }
    }
}

pub(crate) fn validation_error_response(err: validator::ValidationErrors) -> HttpResponse {
    HttpResponse::BadRequest().json(ApiResponse::<()>::error(format!("Dados inválidos: {err}")))
}

/// Parses a `{ref}` path segment that may be a numeric id or a public UUID.
pub(crate) fn parse_entity_ref(raw: &str) -> Result<EntityRef, HttpResponse> {
    raw.parse::<EntityRef>().map_err(|err| {
        HttpResponse::BadRequest().json(ApiResponse::<()>::error(err.to_string()))
    })
}
