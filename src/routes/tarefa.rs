use actix_web::{HttpResponse, Responder, delete, get, post, put, web};
use validator::Validate;

use crate::auth::AuthenticatedUser;
use crate::dto::ApiResponse;
use crate::forms::parse_ids_csv;
use crate::forms::tarefa::{
    SubtarefaForm, SubtarefaListParams, TarefaForm, TarefaListParams, UpdateSubtarefaForm,
    UpdateTarefaForm,
};
use crate::repository::DieselRepository;
use crate::routes::produto::IdsParams;
use crate::routes::{service_error_response, validation_error_response};
use crate::services;

#[get("/tarefas")]
pub async fn list_tarefas(
    params: web::Query<TarefaListParams>,
    _user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match services::tarefa::list_tarefas(repo.get_ref(), params.query()) {
        Ok((total, tarefas)) => HttpResponse::Ok().json(ApiResponse::ok_with_total(tarefas, total)),
        Err(err) => service_error_response(err, "Erro ao carregar tarefas"),
    }
}

/// Batch lookup used by the timesheet screens (`?ids=1,2,3`).
#[get("/tarefas-por-ids")]
pub async fn list_tarefas_por_ids(
    params: web::Query<IdsParams>,
    _user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let ids = parse_ids_csv(&params.ids);
    match services::tarefa::list_tarefas_by_ids(repo.get_ref(), &ids) {
        Ok(tarefas) => {
            let total = tarefas.len();
            HttpResponse::Ok().json(ApiResponse::ok_with_total(tarefas, total))
        }
        Err(err) => service_error_response(err, "Erro ao carregar tarefas"),
    }
}

#[get("/tarefas/{tarefa_id}")]
pub async fn get_tarefa(
    tarefa_id: web::Path<i32>,
    _user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match services::tarefa::get_tarefa_by_id(repo.get_ref(), tarefa_id.into_inner()) {
        Ok(tarefa) => HttpResponse::Ok().json(ApiResponse::ok(tarefa)),
        Err(err) => service_error_response(err, "Erro ao carregar tarefa"),
    }
}

#[post("/tarefas")]
pub async fn create_tarefa(
    _user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<TarefaForm>,
) -> impl Responder {
    if let Err(err) = form.validate() {
        return validation_error_response(err);
    }

    // The client reference may be the internal id or the public UUID.
    let cliente = match services::cliente::resolve_cliente(repo.get_ref(), form.cliente_id) {
        Ok(cliente) => cliente,
        Err(err) => return service_error_response(err, "Cliente informado não existe"),
    };

    match services::tarefa::create_tarefa(repo.get_ref(), &form.to_new_tarefa(cliente.id)) {
        Ok(tarefa) => HttpResponse::Created().json(ApiResponse::ok(tarefa)),
        Err(err) => service_error_response(err, "Erro ao criar tarefa"),
    }
}

#[put("/tarefas/{tarefa_id}")]
pub async fn update_tarefa(
    tarefa_id: web::Path<i32>,
    _user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<UpdateTarefaForm>,
) -> impl Responder {
    if let Err(err) = form.validate() {
        return validation_error_response(err);
    }

    match services::tarefa::update_tarefa(repo.get_ref(), tarefa_id.into_inner(), &(&form).into())
    {
        Ok(tarefa) => HttpResponse::Ok().json(ApiResponse::ok(tarefa)),
        Err(err) => service_error_response(err, "Erro ao atualizar tarefa"),
    }
}

#[delete("/tarefas/{tarefa_id}")]
pub async fn delete_tarefa(
    tarefa_id: web::Path<i32>,
    _user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match services::tarefa::delete_tarefa(repo.get_ref(), tarefa_id.into_inner()) {
        Ok(()) => HttpResponse::Ok().json(ApiResponse::success()),
        Err(err) => service_error_response(err, "Erro ao excluir tarefa"),
    }
}

#[get("/subtarefas")]
pub async fn list_subtarefas(
    params: web::Query<SubtarefaListParams>,
    _user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match services::tarefa::list_subtarefas(repo.get_ref(), params.tarefa_id) {
        Ok(subtarefas) => {
            let total = subtarefas.len();
            HttpResponse::Ok().json(ApiResponse::ok_with_total(subtarefas, total))
        }
        Err(err) => service_error_response(err, "Erro ao carregar subtarefas"),
    }
}

#[post("/subtarefas")]
pub async fn create_subtarefa(
    _user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<SubtarefaForm>,
) -> impl Responder {
    if let Err(err) = form.validate() {
        return validation_error_response(err);
    }

    match services::tarefa::create_subtarefa(repo.get_ref(), &(&form).into()) {
        Ok(subtarefa) => HttpResponse::Created().json(ApiResponse::ok(subtarefa)),
        Err(err) => service_error_response(err, "Erro ao criar subtarefa"),
    }
}

#[put("/subtarefas/{subtarefa_id}")]
pub async fn update_subtarefa(
    subtarefa_id: web::Path<i32>,
    _user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<UpdateSubtarefaForm>,
) -> impl Responder {
    if let Err(err) = form.validate() {
        return validation_error_response(err);
    }

    match services::tarefa::update_subtarefa(
        repo.get_ref(),
        subtarefa_id.into_inner(),
        &(&form).into(),
    ) {
        Ok(subtarefa) => HttpResponse::Ok().json(ApiResponse::ok(subtarefa)),
        Err(err) => service_error_response(err, "Erro ao atualizar subtarefa"),
    }
}

#[delete("/subtarefas/{subtarefa_id}")]
pub async fn delete_subtarefa(
    subtarefa_id: web::Path<i32>,
    _user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match services::tarefa::delete_subtarefa(repo.get_ref(), subtarefa_id.into_inner()) {
        Ok(()) => HttpResponse::Ok().json(ApiResponse::success()),
        Err(err) => service_error_response(err, "Erro ao excluir subtarefa"),
    }
}
