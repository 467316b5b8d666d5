use actix_identity::Identity;
use actix_web::{HttpMessage, HttpRequest, HttpResponse, Responder, get, post, put, web};
use validator::Validate;

use crate::auth::{self, AuthenticatedUser};
use crate::dto::ApiResponse;
use crate::dto::auth::{AuthCheck, SessaoUsuario, TokenInfo};
use crate::forms::auth::{LoginForm, UpdateProfileForm};
use crate::models::config::ServerConfig;
use crate::repository::DieselRepository;
use crate::routes::{service_error_response, validation_error_response};
use crate::services;

#[post("/login")]
pub async fn login(
    req: HttpRequest,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<LoginForm>,
) -> impl Responder {
    if let Err(err) = form.validate() {
        return validation_error_response(err);
    }

    match services::auth::login(repo.get_ref(), &form.email, &form.senha) {
        Ok(usuario) => {
            let auth_user = AuthenticatedUser::from(&usuario);
            let payload = match serde_json::to_string(&auth_user) {
                Ok(payload) => payload,
                Err(err) => {
                    log::error!("Failed to serialize session identity: {err}");
                    return HttpResponse::InternalServerError()
                        .json(ApiResponse::<()>::error("Erro ao criar sessão"));
                }
            };
            if let Err(err) = Identity::login(&req.extensions(), payload) {
                log::error!("Failed to attach session identity: {err}");
                return HttpResponse::InternalServerError()
                    .json(ApiResponse::<()>::error("Erro ao criar sessão"));
            }
            HttpResponse::Ok().json(ApiResponse::ok(SessaoUsuario::from(&usuario)))
        }
        Err(err) => service_error_response(err, "Erro ao realizar login"),
    }
}

#[post("/logout")]
pub async fn logout(identity: Option<Identity>) -> impl Responder {
    if let Some(identity) = identity {
        identity.logout();
    }
    HttpResponse::Ok().json(ApiResponse::success())
}

#[get("/auth/check")]
pub async fn auth_check(user: Option<AuthenticatedUser>) -> impl Responder {
    let payload = match &user {
        Some(user) => AuthCheck {
            authenticated: true,
            usuario: Some(user.into()),
        },
        None => AuthCheck {
            authenticated: false,
            usuario: None,
        },
    };
    HttpResponse::Ok().json(ApiResponse::ok(payload))
}

#[put("/auth/profile")]
pub async fn update_profile(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<UpdateProfileForm>,
) -> impl Responder {
    if user.id == 0 {
        return HttpResponse::Forbidden().json(ApiResponse::<()>::error(
            "O token de API não possui perfil de usuário",
        ));
    }

    match services::auth::update_perfil(
        repo.get_ref(),
        user.id,
        form.nome_usuario,
        form.senha_login.as_deref(),
    ) {
        Ok(usuario) => HttpResponse::Ok().json(ApiResponse::ok(SessaoUsuario::from(&usuario))),
        Err(err) => service_error_response(err, "Erro ao atualizar perfil"),
    }
}

/// Returns the shared API token. Mirrors the original deployment: the token
/// is the same for every caller and long-lived.
#[get("/auth/token")]
pub async fn auth_token(config: web::Data<ServerConfig>) -> impl Responder {
    match auth::api_token(&config) {
        Ok(token) => HttpResponse::Ok().json(ApiResponse::ok(TokenInfo::new(token))),
        Err(err) => {
            log::error!("Failed to issue API token: {err}");
            HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Erro ao obter token"))
        }
    }
}
