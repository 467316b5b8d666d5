use actix_web::{HttpResponse, Responder, delete, get, post, put, web};
use serde::Deserialize;
use validator::Validate;

use crate::auth::AuthenticatedUser;
use crate::dto::ApiResponse;
use crate::forms::{ListParams, parse_ids_csv};
use crate::forms::produto::ProdutoForm;
use crate::repository::DieselRepository;
use crate::routes::{service_error_response, validation_error_response};
use crate::services;

#[derive(Debug, Deserialize)]
pub struct IdsParams {
    pub ids: String,
}

#[get("/produtos")]
pub async fn list_produtos(
    params: web::Query<ListParams>,
    _user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match services::produto::list_produtos(repo.get_ref(), params.referencia_query()) {
        Ok((total, produtos)) => {
            HttpResponse::Ok().json(ApiResponse::ok_with_total(produtos, total))
        }
        Err(err) => service_error_response(err, "Erro ao carregar produtos"),
    }
}

/// Batch lookup used by the spreadsheet screens (`?ids=1,2,3`).
#[get("/produtos-por-ids")]
pub async fn list_produtos_por_ids(
    params: web::Query<IdsParams>,
    _user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let ids = parse_ids_csv(&params.ids);
    match services::produto::list_produtos_by_ids(repo.get_ref(), &ids) {
        Ok(produtos) => {
            let total = produtos.len();
            HttpResponse::Ok().json(ApiResponse::ok_with_total(produtos, total))
        }
        Err(err) => service_error_response(err, "Erro ao carregar produtos"),
    }
}

#[get("/produtos/{produto_id}")]
pub async fn get_produto(
    produto_id: web::Path<i32>,
    _user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match services::produto::get_produto_by_id(repo.get_ref(), produto_id.into_inner()) {
        Ok(produto) => HttpResponse::Ok().json(ApiResponse::ok(produto)),
        Err(err) => service_error_response(err, "Erro ao carregar produto"),
    }
}

#[post("/produtos")]
pub async fn create_produto(
    _user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<ProdutoForm>,
) -> impl Responder {
    if let Err(err) = form.validate() {
        return validation_error_response(err);
    }

    match services::produto::create_produto(repo.get_ref(), &(&form).into()) {
        Ok(produto) => HttpResponse::Created().json(ApiResponse::ok(produto)),
        Err(err) => service_error_response(err, "Erro ao criar produto"),
    }
}

#[put("/produtos/{produto_id}")]
pub async fn update_produto(
    produto_id: web::Path<i32>,
    _user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<ProdutoForm>,
) -> impl Responder {
    if let Err(err) = form.validate() {
        return validation_error_response(err);
    }

    match services::produto::update_produto(repo.get_ref(), produto_id.into_inner(), &(&form).into())
    {
        Ok(produto) => HttpResponse::Ok().json(ApiResponse::ok(produto)),
        Err(err) => service_error_response(err, "Erro ao atualizar produto"),
    }
}

#[delete("/produtos/{produto_id}")]
pub async fn delete_produto(
    produto_id: web::Path<i32>,
    _user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match services::produto::delete_produto(repo.get_ref(), produto_id.into_inner()) {
        Ok(()) => HttpResponse::Ok().json(ApiResponse::success()),
        Err(err) => service_error_response(err, "Erro ao excluir produto"),
    }
}
