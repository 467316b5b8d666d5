//! Authentication plumbing: JWT claims, the process-wide API token and the
//! [`AuthenticatedUser`] extractor used by every protected handler.
//!
//! Two credentials are accepted, mirroring how the SPA and integrations call
//! the API: the cookie session established by `POST /api/login`, and an
//! `Authorization: Bearer` JWT signed with the server secret.

use std::future::{Ready, ready};
use std::sync::OnceLock;

use actix_identity::Identity;
use actix_web::dev::Payload;
use actix_web::error::InternalError;
use actix_web::http::header;
use actix_web::{FromRequest, HttpRequest, HttpResponse, web};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::domain::usuario::Usuario;
use crate::dto::ApiResponse;
use crate::models::config::ServerConfig;

/// Shared API tokens are issued for ten years, like the original deployment.
const API_TOKEN_VALIDADE_SEGUNDOS: i64 = 10 * 365 * 24 * 60 * 60;

static API_TOKEN: OnceLock<String> = OnceLock::new();

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    /// `"api"` for the shared token, `"user"` for per-user tokens.
    pub tipo: String,
    pub iat: i64,
    pub exp: i64,
}

/// Identity attached to a request after authentication.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct AuthenticatedUser {
    pub id: i32,
    pub nome: String,
    pub email: String,
    pub perfil: String,
}

impl AuthenticatedUser {
    /// Synthetic identity for requests carrying the shared API token.
    pub fn api() -> Self {
        Self {
            id: 0,
            nome: "api".to_string(),
            email: String::new(),
            perfil: "api".to_string(),
        }
    }

    pub fn is_admin(&self) -> bool {
        self.perfil == "admin" || self.perfil == "api"
    }
}

impl From<&Usuario> for AuthenticatedUser {
    fn from(usuario: &Usuario) -> Self {
        Self {
            id: usuario.id,
            nome: usuario.nome_usuario.clone(),
            email: usuario.email_usuario.clone(),
            perfil: usuario.perfil.to_string(),
        }
    }
}

/// Returns the process-wide API token: the configured one when present,
/// otherwise a token signed once with the server secret.
pub fn api_token(config: &ServerConfig) -> Result<String, jsonwebtoken::errors::Error> {
    if let Some(token) = &config.api_token {
        return Ok(token.clone());
    }

    if let Some(token) = API_TOKEN.get() {
        return Ok(token.clone());
    }

    let now = chrono::Utc::now().timestamp();
    let claims = Claims {
        sub: "api".to_string(),
        tipo: "api".to_string(),
        iat: now,
        exp: now + API_TOKEN_VALIDADE_SEGUNDOS,
    };
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )?;

    Ok(API_TOKEN.get_or_init(|| token).clone())
}

/// Verifies a bearer token against the server secret.
pub fn decode_claims(secret: &str, token: &str) -> Option<Claims> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .ok()
}

fn bearer_token(req: &HttpRequest) -> Option<&str> {
    req.headers()
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

fn unauthorized() -> actix_web::Error {
    let response =
        HttpResponse::Unauthorized().json(ApiResponse::<()>::error("Não autorizado"));
    InternalError::from_response("unauthorized", response).into()
}

fn extract_user(req: &HttpRequest) -> Result<AuthenticatedUser, actix_web::Error> {
    // Cookie session first, the way the SPA calls with `credentials: include`.
    if let Ok(identity) = Identity::extract(req).into_inner()
        && let Ok(id) = identity.id()
        && let Ok(user) = serde_json::from_str::<AuthenticatedUser>(&id)
    {
        return Ok(user);
    }

    // Bearer JWT fallback for integrations.
    if let Some(config) = req.app_data::<web::Data<ServerConfig>>()
        && let Some(token) = bearer_token(req)
        && let Some(claims) = decode_claims(&config.secret, token)
    {
        return Ok(match claims.tipo.as_str() {
            "api" => AuthenticatedUser::api(),
            _ => AuthenticatedUser {
                id: claims.sub.parse().unwrap_or(0),
                nome: String::new(),
                email: String::new(),
                perfil: "colaborador".to_string(),
            },
        });
    }

    Err(unauthorized())
}

impl FromRequest for AuthenticatedUser {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(extract_user(req))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(secret: &str) -> ServerConfig {
        ServerConfig {
            domain: "localhost".into(),
            address: "127.0.0.1".into(),
            port: 4000,
            database_url: ":memory:".into(),
            assets_dir: "./assets".into(),
            secret: secret.into(),
            api_token: None,
        }
    }

    #[test]
    fn api_token_roundtrips_through_decode() {
        let config = config("um-segredo-bem-comprido-para-testes-0123456789");
        let token = api_token(&config).unwrap();
        let claims = decode_claims(&config.secret, &token).unwrap();
        assert_eq!(claims.sub, "api");
        assert_eq!(claims.tipo, "api");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn configured_token_wins_over_generated() {
        let mut config = config("outro-segredo-bem-comprido-para-testes-987654");
        config.api_token = Some("token-fixo".into());
        assert_eq!(api_token(&config).unwrap(), "token-fixo");
    }

    #[test]
    fn tampered_token_is_rejected() {
        let config = config("um-segredo-bem-comprido-para-testes-0123456789");
        let token = api_token(&config).unwrap();
        assert!(decode_claims("segredo-errado", &token).is_none());
        assert!(decode_claims(&config.secret, &format!("{token}x")).is_none());
    }
}
