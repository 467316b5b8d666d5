#[cfg(feature = "server")]
use actix_cors::Cors;
#[cfg(feature = "server")]
use actix_files::Files;
#[cfg(feature = "server")]
use actix_identity::IdentityMiddleware;
#[cfg(feature = "server")]
use actix_session::{SessionMiddleware, storage::CookieSessionStore};
#[cfg(feature = "server")]
use actix_web::cookie::Key;
#[cfg(feature = "server")]
use actix_web::{App, HttpServer, middleware, web};

#[cfg(feature = "server")]
use crate::db::establish_connection_pool;
#[cfg(feature = "server")]
use crate::models::config::ServerConfig;
#[cfg(feature = "server")]
use crate::repository::DieselRepository;

#[cfg(feature = "server")]
pub mod auth;
#[cfg(feature = "data")]
pub mod db;
#[cfg(feature = "data")]
pub mod domain;
#[cfg(feature = "server")]
pub mod dto;
#[cfg(feature = "server")]
pub mod forms;
#[cfg(feature = "data")]
pub mod models;
#[cfg(feature = "server")]
pub mod pagination;
#[cfg(feature = "data")]
pub mod repository;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "data")]
pub mod schema;
#[cfg(feature = "server")]
pub mod services;

/// Everything mounted under `/api`. Kept as a free function so the
/// integration tests can assemble the same surface the binary serves.
#[cfg(feature = "server")]
pub fn api_scope() -> actix_web::Scope {
    web::scope("/api")
        .service(routes::auth::login)
        .service(routes::auth::logout)
        .service(routes::auth::auth_check)
        .service(routes::auth::update_profile)
        .service(routes::auth::auth_token)
        .service(routes::cliente::list_clientes)
        .service(routes::cliente::create_cliente)
        .service(routes::cliente::list_contatos)
        .service(routes::cliente::create_contato)
        .service(routes::cliente::ativar_cliente)
        .service(routes::cliente::inativar_cliente)
        .service(routes::cliente::get_cliente)
        .service(routes::cliente::update_cliente)
        .service(routes::cliente::delete_cliente)
        .service(routes::cliente::update_contato)
        .service(routes::cliente::delete_contato)
        .service(routes::produto::list_produtos)
        .service(routes::produto::list_produtos_por_ids)
        .service(routes::produto::get_produto)
        .service(routes::produto::create_produto)
        .service(routes::produto::update_produto)
        .service(routes::produto::delete_produto)
        .service(routes::referencia::list_bancos)
        .service(routes::referencia::get_banco)
        .service(routes::referencia::create_banco)
        .service(routes::referencia::update_banco)
        .service(routes::referencia::delete_banco)
        .service(routes::referencia::list_adquirentes)
        .service(routes::referencia::get_adquirente)
        .service(routes::referencia::create_adquirente)
        .service(routes::referencia::update_adquirente)
        .service(routes::referencia::delete_adquirente)
        .service(routes::referencia::list_sistemas)
        .service(routes::referencia::get_sistema)
        .service(routes::referencia::create_sistema)
        .service(routes::referencia::update_sistema)
        .service(routes::referencia::delete_sistema)
        .service(routes::referencia::list_tipos_contrato)
        .service(routes::referencia::get_tipo_contrato)
        .service(routes::referencia::create_tipo_contrato)
        .service(routes::referencia::update_tipo_contrato)
        .service(routes::referencia::delete_tipo_contrato)
        .service(routes::referencia::list_tipos_tarefa)
        .service(routes::referencia::get_tipo_tarefa)
        .service(routes::referencia::create_tipo_tarefa)
        .service(routes::referencia::update_tipo_tarefa)
        .service(routes::referencia::delete_tipo_tarefa)
        .service(routes::referencia::list_status_tarefa)
        .service(routes::referencia::get_status_tarefa)
        .service(routes::referencia::create_status_tarefa)
        .service(routes::referencia::update_status_tarefa)
        .service(routes::referencia::delete_status_tarefa)
        .service(routes::referencia::list_atividades)
        .service(routes::referencia::get_atividade)
        .service(routes::referencia::create_atividade)
        .service(routes::referencia::update_atividade)
        .service(routes::referencia::delete_atividade)
        .service(routes::tarefa::list_tarefas)
        .service(routes::tarefa::list_tarefas_por_ids)
        .service(routes::tarefa::get_tarefa)
        .service(routes::tarefa::create_tarefa)
        .service(routes::tarefa::update_tarefa)
        .service(routes::tarefa::delete_tarefa)
        .service(routes::tarefa::list_subtarefas)
        .service(routes::tarefa::create_subtarefa)
        .service(routes::tarefa::update_subtarefa)
        .service(routes::tarefa::delete_subtarefa)
        .service(routes::usuario::list_colaboradores)
        .service(routes::usuario::list_usuarios)
        .service(routes::usuario::create_usuario)
        .service(routes::usuario::inativar_usuario)
        .service(routes::usuario::ativar_usuario)
        .service(routes::usuario::update_usuario)
        .service(routes::registro_tempo::list_registros)
        .service(routes::registro_tempo::create_registro)
        .service(routes::registro_tempo::iniciar_registro)
        .service(routes::registro_tempo::finalizar_registro)
        .service(routes::registro_tempo::list_registros_ativos)
        .service(routes::registro_tempo::historico_registros)
        .service(routes::registro_tempo::realizado_total)
        .service(routes::registro_tempo::exportar_registros)
        .service(routes::registro_tempo::delete_registro)
}

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
#[cfg(feature = "server")]
pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    // Establish Diesel connection pool for the SQLite database.
    let pool = establish_connection_pool(&server_config.database_url).map_err(|e| {
        std::io::Error::other(format!("Failed to establish database connection: {e}"))
    })?;

    let repo = DieselRepository::new(pool);

    // Key for the cookie session backing the SPA login.
    let secret_key = Key::from(server_config.secret.as_bytes());

    let bind_address = (server_config.address.clone(), server_config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(IdentityMiddleware::default())
            .wrap(
                SessionMiddleware::builder(CookieSessionStore::default(), secret_key.clone())
                    .cookie_secure(false) // set to true in prod
                    .cookie_domain(Some(format!(".{}", server_config.domain)))
                    .build(),
            )
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .service(Files::new("/assets", server_config.assets_dir.clone()))
            .service(api_scope())
            .app_data(web::Data::new(repo.clone()))
            .app_data(web::Data::new(server_config.clone()))
    })
    .bind(bind_address)?
    .run()
    .await
}
