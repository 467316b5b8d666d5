use actix_identity::IdentityMiddleware;
use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::Key;
use actix_web::http::{StatusCode, header};
use actix_web::{App, test, web};
use chrono::{NaiveDate, NaiveDateTime};
use serde_json::{Value, json};

use gestao_crm::api_scope;
use gestao_crm::domain::cliente::NewCliente;
use gestao_crm::domain::registro_tempo::NewRegistroTempo;
use gestao_crm::domain::tarefa::NewTarefa;
use gestao_crm::domain::usuario::Perfil;
use gestao_crm::models::config::ServerConfig;
use gestao_crm::repository::{ClienteWriter, DieselRepository, RegistroTempoWriter, TarefaWriter};
use gestao_crm::services;

mod common;

const SECRET: &str =
    "segredo-de-teste-com-bem-mais-de-sessenta-e-quatro-bytes-0123456789-0123456789";

fn server_config() -> ServerConfig {
    ServerConfig {
        domain: "localhost".into(),
        address: "127.0.0.1".into(),
        port: 0,
        database_url: ":memory:".into(),
        assets_dir: "./assets".into(),
        secret: SECRET.into(),
        api_token: None,
    }
}

macro_rules! test_app {
    ($repo:expr) => {
        test::init_service(
            App::new()
                .wrap(IdentityMiddleware::default())
                .wrap(
                    SessionMiddleware::builder(
                        CookieSessionStore::default(),
                        Key::from(SECRET.as_bytes()),
                    )
                    .cookie_secure(false)
                    .build(),
                )
                .service(api_scope())
                .app_data(web::Data::new($repo.clone()))
                .app_data(web::Data::new(server_config())),
        )
        .await
    };
}

macro_rules! obter_token {
    ($app:expr) => {{
        let req = test::TestRequest::get().uri("/api/auth/token").to_request();
        let body: Value = test::call_and_read_body_json(&$app, req).await;
        assert_eq!(body["success"], true);
        body["data"]["token"].as_str().unwrap().to_string()
    }};
}

fn ts(hora: u32, minuto: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 6, 10)
        .unwrap()
        .and_hms_opt(hora, minuto, 0)
        .unwrap()
}

#[actix_web::test]
async fn request_sem_credenciais_recebe_401_com_envelope() {
    let test_db = common::TestDb::new("routes_sem_credenciais.db");
    let repo: DieselRepository = test_db.repo();
    let app = test_app!(repo);

    let req = test::TestRequest::get().uri("/api/bancos").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
    assert!(body["error"].as_str().is_some());
}

#[actix_web::test]
async fn token_compartilhado_percorre_crud_de_bancos() {
    let test_db = common::TestDb::new("routes_crud_bancos.db");
    let repo: DieselRepository = test_db.repo();
    let app = test_app!(repo);

    let token = obter_token!(app);
    let auth = (header::AUTHORIZATION, format!("Bearer {token}"));

    // create
    let req = test::TestRequest::post()
        .uri("/api/bancos")
        .insert_header(auth.clone())
        .set_json(json!({"nome": "Banco Alfa", "codigo": "001"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    let banco_id = body["data"]["id"].as_i64().unwrap();

    // list with search and total
    let req = test::TestRequest::get()
        .uri("/api/bancos?page=1&limit=10&search=Alfa")
        .insert_header(auth.clone())
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["total"], 1);
    assert_eq!(body["data"][0]["nome"], "Banco Alfa");

    // update
    let req = test::TestRequest::put()
        .uri(&format!("/api/bancos/{banco_id}"))
        .insert_header(auth.clone())
        .set_json(json!({"nome": "Banco Beta"}))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["nome"], "Banco Beta");

    // empty name is rejected before reaching the store
    let req = test::TestRequest::post()
        .uri("/api/bancos")
        .insert_header(auth.clone())
        .set_json(json!({"nome": ""}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    // delete, then 404
    let req = test::TestRequest::delete()
        .uri(&format!("/api/bancos/{banco_id}"))
        .insert_header(auth.clone())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::get()
        .uri(&format!("/api/bancos/{banco_id}"))
        .insert_header(auth)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn login_valida_credenciais_e_check_reporta_sessao() {
    let test_db = common::TestDb::new("routes_login.db");
    let repo: DieselRepository = test_db.repo();

    services::usuario::create_usuario(
        &repo,
        "Maria".into(),
        "maria@empresa.com".into(),
        "segredo123",
        Perfil::Admin,
    )
    .unwrap();

    let app = test_app!(repo);

    // wrong password
    let req = test::TestRequest::post()
        .uri("/api/login")
        .set_json(json!({"email": "maria@empresa.com", "senha": "errada"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    // right password
    let req = test::TestRequest::post()
        .uri("/api/login")
        .set_json(json!({"email": "maria@empresa.com", "senha": "segredo123"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["email_usuario"], "maria@empresa.com");

    // without the session cookie the check reports unauthenticated, 200
    let req = test::TestRequest::get().uri("/api/auth/check").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["authenticated"], false);
}

#[actix_web::test]
async fn realizado_total_aceita_cliente_por_uuid() {
    let test_db = common::TestDb::new("routes_realizado_total.db");
    let repo: DieselRepository = test_db.repo();

    let cliente = repo.create_cliente(&NewCliente::new("Alfa".into())).unwrap();
    let usuario = services::usuario::create_usuario(
        &repo,
        "João".into(),
        "joao@empresa.com".into(),
        "segredo123",
        Perfil::Colaborador,
    )
    .unwrap();
    let tarefa = repo
        .create_tarefa(&NewTarefa::new(
            "Fechamento".into(),
            cliente.id,
            None,
            None,
            None,
            None,
        ))
        .unwrap();
    repo.create_registro(&NewRegistroTempo::finalizado(
        usuario.id,
        Some(tarefa.id),
        None,
        ts(9, 0),
        ts(10, 30),
    ))
    .unwrap();

    let app = test_app!(repo);
    let token = obter_token!(app);

    let req = test::TestRequest::post()
        .uri("/api/registro-tempo/realizado-total")
        .insert_header((header::AUTHORIZATION, format!("Bearer {token}")))
        .set_json(json!({
            "responsavel_id": usuario.id,
            "cliente_id": cliente.public_id.to_string(),
            "data_inicio": "2025-06-01",
            "data_fim": "2025-06-30",
        }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["tempo_realizado_ms"], 5_400_000);
    assert_eq!(body["data"]["total_registros"], 1);
    assert_eq!(body["data"]["horas_decimais"], 1.5);
}

#[actix_web::test]
async fn rota_de_cliente_resolve_uuid_e_id_numerico() {
    let test_db = common::TestDb::new("routes_cliente_uuid.db");
    let repo: DieselRepository = test_db.repo();
    let cliente = repo.create_cliente(&NewCliente::new("Alfa".into())).unwrap();

    let app = test_app!(repo);
    let token = obter_token!(app);
    let auth = (header::AUTHORIZATION, format!("Bearer {token}"));

    let req = test::TestRequest::get()
        .uri(&format!("/api/clientes/{}", cliente.public_id))
        .insert_header(auth.clone())
        .to_request();
    let por_uuid: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(por_uuid["data"]["id"].as_i64().unwrap(), cliente.id as i64);

    let req = test::TestRequest::get()
        .uri(&format!("/api/clientes/{}", cliente.id))
        .insert_header(auth.clone())
        .to_request();
    let por_id: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(por_id["data"]["public_id"], cliente.public_id.to_string());

    let req = test::TestRequest::get()
        .uri("/api/clientes/nao-e-um-id")
        .insert_header(auth)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}
