//! Handlers for the lookup registries. The registry pages all behave the
//! same way, so the handler quintet is stamped per entity; only the route
//! paths and user-facing error strings differ.

use actix_web::{HttpResponse, Responder, web};
use validator::Validate;

use crate::auth::AuthenticatedUser;
use crate::dto::ApiResponse;
use crate::forms::ListParams;
use crate::forms::referencia::{
    AdquirenteForm, AtividadeForm, BancoForm, SistemaForm, StatusTarefaForm, TipoContratoForm,
    TipoTarefaForm,
};
use crate::repository::DieselRepository;
use crate::routes::{service_error_response, validation_error_response};
use crate::services;

macro_rules! referencia_rotas {
    ($list_path:literal, $item_path:literal, $form:ty, $erro:literal,
     $list_fn:ident => $svc_list:ident,
     $get_fn:ident => $svc_get:ident,
     $create_fn:ident => $svc_create:ident,
     $update_fn:ident => $svc_update:ident,
     $delete_fn:ident => $svc_delete:ident) => {
        #[actix_web::get($list_path)]
        pub async fn $list_fn(
            params: web::Query<ListParams>,
            _user: AuthenticatedUser,
            repo: web::Data<DieselRepository>,
        ) -> impl Responder {
            match services::referencia::$svc_list(repo.get_ref(), params.referencia_query()) {
                Ok((total, itens)) => {
                    HttpResponse::Ok().json(ApiResponse::ok_with_total(itens, total))
                }
                Err(err) => service_error_response(err, $erro),
            }
        }

        #[actix_web::get($item_path)]
        pub async fn $get_fn(
            id: web::Path<i32>,
            _user: AuthenticatedUser,
            repo: web::Data<DieselRepository>,
        ) -> impl Responder {
            match services::referencia::$svc_get(repo.get_ref(), id.into_inner()) {
                Ok(item) => HttpResponse::Ok().json(ApiResponse::ok(item)),
                Err(err) => service_error_response(err, $erro),
            }
        }

        #[actix_web::post($list_path)]
        pub async fn $create_fn(
            _user: AuthenticatedUser,
            repo: web::Data<DieselRepository>,
            web::Json(form): web::Json<$form>,
        ) -> impl Responder {
            if let Err(err) = form.validate() {
                return validation_error_response(err);
            }
            match services::referencia::$svc_create(repo.get_ref(), &(&form).into()) {
                Ok(item) => HttpResponse::Created().json(ApiResponse::ok(item)),
                Err(err) => service_error_response(err, $erro),
            }
        }

        #[actix_web::put($item_path)]
        pub async fn $update_fn(
            id: web::Path<i32>,
            _user: AuthenticatedUser,
            repo: web::Data<DieselRepository>,
            web::Json(form): web::Json<$form>,
        ) -> impl Responder {
            if let Err(err) = form.validate() {
                return validation_error_response(err);
            }
            match services::referencia::$svc_update(
                repo.get_ref(),
                id.into_inner(),
                &(&form).into(),
            ) {
                Ok(item) => HttpResponse::Ok().json(ApiResponse::ok(item)),
                Err(err) => service_error_response(err, $erro),
            }
        }

        #[actix_web::delete($item_path)]
        pub async fn $delete_fn(
            id: web::Path<i32>,
            _user: AuthenticatedUser,
            repo: web::Data<DieselRepository>,
        ) -> impl Responder {
            match services::referencia::$svc_delete(repo.get_ref(), id.into_inner()) {
                Ok(()) => HttpResponse::Ok().json(ApiResponse::success()),
                Err(err) => service_error_response(err, $erro),
            }
        }
    };
}

referencia_rotas!(
    "/bancos", "/bancos/{id}", BancoForm, "Erro ao processar bancos",
    list_bancos => list_bancos,
    get_banco => get_banco_by_id,
    create_banco => create_banco,
    update_banco => update_banco,
    delete_banco => delete_banco
);

referencia_rotas!(
    "/adquirentes", "/adquirentes/{id}", AdquirenteForm, "Erro ao processar adquirentes",
    list_adquirentes => list_adquirentes,
    get_adquirente => get_adquirente_by_id,
    create_adquirente => create_adquirente,
    update_adquirente => update_adquirente,
    delete_adquirente => delete_adquirente
);

referencia_rotas!(
    "/sistemas", "/sistemas/{id}", SistemaForm, "Erro ao processar sistemas",
    list_sistemas => list_sistemas,
    get_sistema => get_sistema_by_id,
    create_sistema => create_sistema,
    update_sistema => update_sistema,
    delete_sistema => delete_sistema
);

referencia_rotas!(
    "/tipo-contrato", "/tipo-contrato/{id}", TipoContratoForm, "Erro ao processar tipos de contrato",
    list_tipos_contrato => list_tipos_contrato,
    get_tipo_contrato => get_tipo_contrato_by_id,
    create_tipo_contrato => create_tipo_contrato,
    update_tipo_contrato => update_tipo_contrato,
    delete_tipo_contrato => delete_tipo_contrato
);

referencia_rotas!(
    "/tipo-tarefa", "/tipo-tarefa/{id}", TipoTarefaForm, "Erro ao processar tipos de tarefa",
    list_tipos_tarefa => list_tipos_tarefa,
    get_tipo_tarefa => get_tipo_tarefa_by_id,
    create_tipo_tarefa => create_tipo_tarefa,
    update_tipo_tarefa => update_tipo_tarefa,
    delete_tipo_tarefa => delete_tipo_tarefa
);

referencia_rotas!(
    "/status-tarefa", "/status-tarefa/{id}", StatusTarefaForm, "Erro ao processar status de tarefa",
    list_status_tarefa => list_status_tarefa,
    get_status_tarefa => get_status_tarefa_by_id,
    create_status_tarefa => create_status_tarefa,
    update_status_tarefa => update_status_tarefa,
    delete_status_tarefa => delete_status_tarefa
);

referencia_rotas!(
    "/atividades", "/atividades/{id}", AtividadeForm, "Erro ao processar atividades",
    list_atividades => list_atividades,
    get_atividade => get_atividade_by_id,
    create_atividade => create_atividade,
    update_atividade => update_atividade,
    delete_atividade => delete_atividade
);
