use actix_web::{HttpResponse, Responder, delete, get, post, put, web};
use validator::Validate;

use crate::auth::AuthenticatedUser;
use crate::domain::cliente::StatusCliente;
use crate::dto::ApiResponse;
use crate::forms::cliente::{ClienteListParams, ContatoForm, SaveClienteForm};
use crate::repository::DieselRepository;
use crate::routes::{parse_entity_ref, service_error_response, validation_error_response};
use crate::services;

#[get("/clientes")]
pub async fn list_clientes(
    params: web::Query<ClienteListParams>,
    _user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match services::cliente::list_clientes(repo.get_ref(), params.query()) {
        Ok((total, clientes)) => {
            HttpResponse::Ok().json(ApiResponse::ok_with_total(clientes, total))
        }
        Err(err) => service_error_response(err, "Erro ao carregar clientes"),
    }
}

#[post("/clientes")]
pub async fn create_cliente(
    _user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<SaveClienteForm>,
) -> impl Responder {
    if let Err(err) = form.validate() {
        return validation_error_response(err);
    }

    match services::cliente::create_cliente(repo.get_ref(), &(&form).into()) {
        Ok(cliente) => HttpResponse::Created().json(ApiResponse::ok(cliente)),
        Err(err) => service_error_response(err, "Erro ao criar cliente"),
    }
}

#[get("/clientes/{cliente_ref}")]
pub async fn get_cliente(
    cliente_ref: web::Path<String>,
    _user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let cliente_ref = match parse_entity_ref(&cliente_ref) {
        Ok(parsed) => parsed,
        Err(response) => return response,
    };

    match services::cliente::resolve_cliente(repo.get_ref(), cliente_ref) {
        Ok(cliente) => HttpResponse::Ok().json(ApiResponse::ok(cliente)),
        Err(err) => service_error_response(err, "Erro ao carregar cliente"),
    }
}

#[put("/clientes/{cliente_ref}")]
pub async fn update_cliente(
    cliente_ref: web::Path<String>,
    _user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<SaveClienteForm>,
) -> impl Responder {
    if let Err(err) = form.validate() {
        return validation_error_response(err);
    }

    let cliente_ref = match parse_entity_ref(&cliente_ref) {
        Ok(parsed) => parsed,
        Err(response) => return response,
    };

    match services::cliente::update_cliente(repo.get_ref(), cliente_ref, &(&form).into()) {
        Ok(cliente) => HttpResponse::Ok().json(ApiResponse::ok(cliente)),
        Err(err) => service_error_response(err, "Erro ao atualizar cliente"),
    }
}

#[put("/clientes/{cliente_ref}/ativar")]
pub async fn ativar_cliente(
    cliente_ref: web::Path<String>,
    _user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    set_status(&cliente_ref, StatusCliente::Ativo, &repo)
}

#[put("/clientes/{cliente_ref}/inativar")]
pub async fn inativar_cliente(
    cliente_ref: web::Path<String>,
    _user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    set_status(&cliente_ref, StatusCliente::Inativo, &repo)
}

fn set_status(
    cliente_ref: &str,
    status: StatusCliente,
    repo: &DieselRepository,
) -> HttpResponse {
    let cliente_ref = match parse_entity_ref(cliente_ref) {
        Ok(parsed) => parsed,
        Err(response) => return response,
    };

    match services::cliente::set_cliente_status(repo, cliente_ref, status) {
        Ok(cliente) => HttpResponse::Ok().json(ApiResponse::ok(cliente)),
        Err(err) => service_error_response(err, "Erro ao alterar status do cliente"),
    }
}

#[delete("/clientes/{cliente_ref}")]
pub async fn delete_cliente(
    cliente_ref: web::Path<String>,
    _user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let cliente_ref = match parse_entity_ref(&cliente_ref) {
        Ok(parsed) => parsed,
        Err(response) => return response,
    };

    match services::cliente::delete_cliente(repo.get_ref(), cliente_ref) {
        Ok(()) => HttpResponse::Ok().json(ApiResponse::success()),
        Err(err) => service_error_response(err, "Erro ao excluir cliente"),
    }
}

#[get("/clientes/{cliente_ref}/contatos")]
pub async fn list_contatos(
    cliente_ref: web::Path<String>,
    _user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let cliente_ref = match parse_entity_ref(&cliente_ref) {
        Ok(parsed) => parsed,
        Err(response) => return response,
    };

    match services::cliente::list_contatos(repo.get_ref(), cliente_ref) {
        Ok(contatos) => {
            let total = contatos.len();
            HttpResponse::Ok().json(ApiResponse::ok_with_total(contatos, total))
        }
        Err(err) => service_error_response(err, "Erro ao carregar contatos"),
    }
}

#[post("/clientes/{cliente_ref}/contatos")]
pub async fn create_contato(
    cliente_ref: web::Path<String>,
    _user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<ContatoForm>,
) -> impl Responder {
    if let Err(err) = form.validate() {
        return validation_error_response(err);
    }

    let cliente_ref = match parse_entity_ref(&cliente_ref) {
        Ok(parsed) => parsed,
        Err(response) => return response,
    };

    match services::cliente::create_contato(
        repo.get_ref(),
        cliente_ref,
        form.nome,
        form.email,
        form.telefone,
        form.cargo,
    ) {
        Ok(contato) => HttpResponse::Created().json(ApiResponse::ok(contato)),
        Err(err) => service_error_response(err, "Erro ao criar contato"),
    }
}

#[put("/contatos/{contato_id}")]
pub async fn update_contato(
    contato_id: web::Path<i32>,
    _user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<ContatoForm>,
) -> impl Responder {
    if let Err(err) = form.validate() {
        return validation_error_response(err);
    }

    match services::cliente::update_contato(repo.get_ref(), contato_id.into_inner(), &(&form).into())
    {
        Ok(contato) => HttpResponse::Ok().json(ApiResponse::ok(contato)),
        Err(err) => service_error_response(err, "Erro ao atualizar contato"),
    }
}

#[delete("/contatos/{contato_id}")]
pub async fn delete_contato(
    contato_id: web::Path<i32>,
    _user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match services::cliente::delete_contato(repo.get_ref(), contato_id.into_inner()) {
        Ok(()) => HttpResponse::Ok().json(ApiResponse::success()),
        Err(err) => service_error_response(err, "Erro ao excluir contato"),
    }
}
