use actix_web::{HttpResponse, Responder, get, post, put, web};
use validator::Validate;

use crate::auth::AuthenticatedUser;
use crate::dto::ApiResponse;
use crate::forms::ListParams;
use crate::forms::usuario::UsuarioForm;
use crate::repository::{DieselRepository, UsuarioListQuery};
use crate::routes::{service_error_response, validation_error_response};
use crate::services;

fn somente_admin(user: &AuthenticatedUser) -> Option<HttpResponse> {
    if user.is_admin() {
        None
    } else {
        Some(HttpResponse::Forbidden().json(ApiResponse::<()>::error(
            "Acesso restrito a administradores",
        )))
    }
}

fn usuario_query(params: &ListParams, apenas_ativos: bool) -> UsuarioListQuery {
    let mut query = UsuarioListQuery::new().paginate(params.page(), params.per_page());
    if apenas_ativos {
        query = query.apenas_ativos();
    }
    if let Some(term) = params.search_term() {
        query = query.search(term);
    }
    query
}

/// Active accounts for pickers and assignment dropdowns.
#[get("/colaboradores")]
pub async fn list_colaboradores(
    params: web::Query<ListParams>,
    _user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match services::usuario::list_usuarios(repo.get_ref(), usuario_query(&params, true)) {
        Ok((total, usuarios)) => {
            HttpResponse::Ok().json(ApiResponse::ok_with_total(usuarios, total))
        }
        Err(err) => service_error_response(err, "Erro ao carregar colaboradores"),
    }
}

#[get("/usuarios")]
pub async fn list_usuarios(
    params: web::Query<ListParams>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    if let Some(response) = somente_admin(&user) {
        return response;
    }

    match services::usuario::list_usuarios(repo.get_ref(), usuario_query(&params, false)) {
        Ok((total, usuarios)) => {
            HttpResponse::Ok().json(ApiResponse::ok_with_total(usuarios, total))
        }
        Err(err) => service_error_response(err, "Erro ao carregar usuários"),
    }
}

#[post("/usuarios")]
pub async fn create_usuario(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<UsuarioForm>,
) -> impl Responder {
    if let Some(response) = somente_admin(&user) {
        return response;
    }
    if let Err(err) = form.validate() {
        return validation_error_response(err);
    }

    let senha = match form.senha_login.as_deref().filter(|s| !s.is_empty()) {
        Some(senha) => senha,
        None => {
            return HttpResponse::BadRequest()
                .json(ApiResponse::<()>::error("A senha é obrigatória"));
        }
    };

    match services::usuario::create_usuario(
        repo.get_ref(),
        form.nome_usuario.clone(),
        form.email_usuario.clone(),
        senha,
        form.perfil,
    ) {
        Ok(usuario) => HttpResponse::Created().json(ApiResponse::ok(usuario)),
        Err(err) => service_error_response(err, "Erro ao criar usuário"),
    }
}

#[put("/usuarios/{usuario_id}")]
pub async fn update_usuario(
    usuario_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<UsuarioForm>,
) -> impl Responder {
    if let Some(response) = somente_admin(&user) {
        return response;
    }
    if let Err(err) = form.validate() {
        return validation_error_response(err);
    }

    match services::usuario::update_usuario(
        repo.get_ref(),
        usuario_id.into_inner(),
        form.nome_usuario.clone(),
        form.email_usuario.clone(),
        form.perfil,
        form.senha_login.as_deref().filter(|s| !s.is_empty()),
    ) {
        Ok(usuario) => HttpResponse::Ok().json(ApiResponse::ok(usuario)),
        Err(err) => service_error_response(err, "Erro ao atualizar usuário"),
    }
}

#[put("/usuarios/{usuario_id}/inativar")]
pub async fn inativar_usuario(
    usuario_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    if let Some(response) = somente_admin(&user) {
        return response;
    }

    match services::usuario::set_usuario_ativo(repo.get_ref(), usuario_id.into_inner(), false) {
        Ok(usuario) => HttpResponse::Ok().json(ApiResponse::ok(usuario)),
        Err(err) => service_error_response(err, "Erro ao inativar usuário"),
    }
}

#[put("/usuarios/{usuario_id}/ativar")]
pub async fn ativar_usuario(
    usuario_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    if let Some(response) = somente_admin(&user) {
        return response;
    }

    match services::usuario::set_usuario_ativo(repo.get_ref(), usuario_id.into_inner(), true) {
        Ok(usuario) => HttpResponse::Ok().json(ApiResponse::ok(usuario)),
        Err(err) => service_error_response(err, "Erro ao ativar usuário"),
    }
}
