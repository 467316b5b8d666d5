use actix_web::http::header;
use actix_web::{HttpResponse, Responder, delete, get, post, put, web};
use chrono::Utc;
use validator::Validate;

use crate::auth::AuthenticatedUser;
use crate::domain::registro_tempo::RegistroTempo;
use crate::dto::ApiResponse;
use crate::dto::registro_tempo::RealizadoTotal;
use crate::forms::registro_tempo::{
    AtivosParams, FinalizarForm, HistoricoParams, IniciarForm, RealizadoTotalForm,
    RegistroListParams, RegistroManualForm, parse_data,
};
use crate::repository::DieselRepository;
use crate::routes::{service_error_response, validation_error_response};
use crate::services;

#[get("/registro-tempo")]
pub async fn list_registros(
    params: web::Query<RegistroListParams>,
    _user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match services::registro_tempo::list_registros(repo.get_ref(), params.query()) {
        Ok((total, registros)) => {
            HttpResponse::Ok().json(ApiResponse::ok_with_total(registros, total))
        }
        Err(err) => service_error_response(err, "Erro ao carregar registros de tempo"),
    }
}

/// Manual timesheet entry: the span is already closed when it arrives.
#[post("/registro-tempo")]
pub async fn create_registro(
    _user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<RegistroManualForm>,
) -> impl Responder {
    if let Err(err) = form.validate() {
        return validation_error_response(err);
    }

    let (inicio, fim) = match (
        parse_data(&form.inicio, false),
        parse_data(&form.fim, false),
    ) {
        (Some(inicio), Some(fim)) => (inicio, fim),
        _ => {
            return HttpResponse::BadRequest()
                .json(ApiResponse::<()>::error("Datas de início/fim inválidas"));
        }
    };

    match services::registro_tempo::criar_registro_manual(
        repo.get_ref(),
        form.usuario_id,
        form.tarefa_id,
        form.descricao,
        inicio,
        fim,
    ) {
        Ok(registro) => HttpResponse::Created().json(ApiResponse::ok(registro)),
        Err(err) => service_error_response(err, "Erro ao criar registro de tempo"),
    }
}

#[post("/registro-tempo/iniciar")]
pub async fn iniciar_registro(
    _user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<IniciarForm>,
) -> impl Responder {
    match services::registro_tempo::iniciar_registro(
        repo.get_ref(),
        form.usuario_id,
        form.tarefa_id,
        form.descricao,
        Utc::now().naive_utc(),
    ) {
        Ok(registro) => HttpResponse::Created().json(ApiResponse::ok(registro)),
        Err(err) => service_error_response(err, "Erro ao iniciar registro de tempo"),
    }
}

#[put("/registro-tempo/finalizar/{registro_id}")]
pub async fn finalizar_registro(
    registro_id: web::Path<i32>,
    _user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    _form: Option<web::Json<FinalizarForm>>,
) -> impl Responder {
    match services::registro_tempo::finalizar_registro(
        repo.get_ref(),
        registro_id.into_inner(),
        Utc::now().naive_utc(),
    ) {
        Ok(registro) => HttpResponse::Ok().json(ApiResponse::ok(registro)),
        Err(err) => service_error_response(err, "Erro ao finalizar registro de tempo"),
    }
}

#[get("/registro-tempo/ativos")]
pub async fn list_registros_ativos(
    params: web::Query<AtivosParams>,
    _user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match services::registro_tempo::list_registros_ativos(repo.get_ref(), params.usuario_id) {
        Ok(registros) => {
            let total = registros.len();
            HttpResponse::Ok().json(ApiResponse::ok_with_total(registros, total))
        }
        Err(err) => service_error_response(err, "Erro ao carregar registros ativos"),
    }
}

#[get("/registro-tempo/historico")]
pub async fn historico_registros(
    params: web::Query<HistoricoParams>,
    _user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match services::registro_tempo::historico(repo.get_ref(), params.usuario_id, params.limite) {
        Ok(registros) => {
            let total = registros.len();
            HttpResponse::Ok().json(ApiResponse::ok_with_total(registros, total))
        }
        Err(err) => service_error_response(err, "Erro ao carregar histórico"),
    }
}

#[delete("/registro-tempo/{registro_id}")]
pub async fn delete_registro(
    registro_id: web::Path<i32>,
    _user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match services::registro_tempo::delete_registro(repo.get_ref(), registro_id.into_inner()) {
        Ok(()) => HttpResponse::Ok().json(ApiResponse::success()),
        Err(err) => service_error_response(err, "Erro ao excluir registro de tempo"),
    }
}

/// Realized-time total for the dashboard detail cards. The frontend fans out
/// one call per responsible/client/product/task combination.
#[post("/registro-tempo/realizado-total")]
pub async fn realizado_total(
    _user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<RealizadoTotalForm>,
) -> impl Responder {
    let de = form.data_inicio.as_deref().and_then(|v| parse_data(v, false));
    let ate = form.data_fim.as_deref().and_then(|v| parse_data(v, true));

    match services::registro_tempo::realizado_total(
        repo.get_ref(),
        form.responsavel_id,
        form.tarefa_id,
        form.cliente_id,
        form.produto_id,
        de,
        ate,
    ) {
        Ok(total) => HttpResponse::Ok().json(ApiResponse::ok(RealizadoTotal::from(total))),
        Err(err) => service_error_response(err, "Erro ao calcular tempo realizado"),
    }
}

/// CSV export of the filtered entries, newest first.
#[get("/registro-tempo/exportar")]
pub async fn exportar_registros(
    params: web::Query<RegistroListParams>,
    _user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let registros = match services::registro_tempo::list_registros(
        repo.get_ref(),
        params.query_sem_paginacao(),
    ) {
        Ok((_total, registros)) => registros,
        Err(err) => return service_error_response(err, "Erro ao exportar registros"),
    };

    match registros_para_csv(&registros) {
        Ok(bytes) => HttpResponse::Ok()
            .content_type("text/csv; charset=utf-8")
            .insert_header((
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"registros-tempo.csv\"",
            ))
            .body(bytes),
        Err(err) => {
            log::error!("Failed to build CSV export: {err}");
            HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Erro ao exportar registros"))
        }
    }
}

fn registros_para_csv(registros: &[RegistroTempo]) -> Result<Vec<u8>, csv::Error> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record([
        "id",
        "usuario_id",
        "tarefa_id",
        "descricao",
        "inicio",
        "fim",
        "horas",
    ])?;

    for registro in registros {
        writer.write_record([
            registro.id.to_string(),
            registro.usuario_id.to_string(),
            registro
                .tarefa_id
                .map(|id| id.to_string())
                .unwrap_or_default(),
            registro.descricao.clone().unwrap_or_default(),
            registro.inicio.to_string(),
            registro
                .fim
                .map(|fim| fim.to_string())
                .unwrap_or_default(),
            registro
                .horas
                .map(|horas| format!("{horas:.4}"))
                .unwrap_or_default(),
        ])?;
    }

    writer.into_inner().map_err(|err| err.into_error().into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn csv_export_includes_header_and_rows() {
        let inicio = NaiveDate::from_ymd_opt(2025, 6, 10)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        let registros = vec![RegistroTempo {
            id: 1,
            usuario_id: 2,
            tarefa_id: Some(3),
            descricao: Some("Fechamento".into()),
            inicio,
            fim: Some(inicio + chrono::Duration::hours(2)),
            horas: Some(2.0),
        }];

        let bytes = registros_para_csv(&registros).unwrap();
        let texto = String::from_utf8(bytes).unwrap();
        let mut linhas = texto.lines();
        assert_eq!(
            linhas.next().unwrap(),
            "id,usuario_id,tarefa_id,descricao,inicio,fim,horas"
        );
        let linha = linhas.next().unwrap();
        assert!(linha.starts_with("1,2,3,Fechamento,"));
        assert!(linha.ends_with("2.0000"));
    }
}
