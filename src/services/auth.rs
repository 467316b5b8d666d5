use crate::domain::types::normalize_email;
use crate::domain::usuario::{UpdatePerfilProprio, Usuario};
use crate::repository::{UsuarioReader, UsuarioWriter};
use crate::services::{ServiceError, ServiceResult};

/// Validates credentials against the stored bcrypt hash. Unknown emails,
/// wrong passwords and deactivated accounts all collapse into the same
/// `Unauthorized` so the response does not leak which one failed.
pub fn login<R>(repo: &R, email: &str, senha: &str) -> ServiceResult<Usuario>
where
    R: UsuarioReader + ?Sized,
{
    let email = normalize_email(email).map_err(|_| ServiceError::Unauthorized)?;

    let (usuario, hash) = repo
        .get_credenciais(&email)?
        .ok_or(ServiceError::Unauthorized)?;

    let senha_ok = bcrypt::verify(senha, &hash).unwrap_or(false);
    if !senha_ok || !usuario.ativo {
        return Err(ServiceError::Unauthorized);
    }

    Ok(usuario)
}

/// Self-service profile update: optional display name and/or new password.
pub fn update_perfil<R>(
    repo: &R,
    usuario_id: i32,
    nome_usuario: Option<String>,
    senha: Option<&str>,
) -> ServiceResult<Usuario>
where
    R: UsuarioWriter + ?Sized,
{
    let nome_usuario = nome_usuario
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());
    let senha_login = senha
        .filter(|s| !s.is_empty())
        .map(super::usuario::hash_senha)
        .transpose()?;

    if nome_usuario.is_none() && senha_login.is_none() {
        return Err(ServiceError::Validation(
            "Nenhum campo para atualizar".to_string(),
        ));
    }

    let updates = UpdatePerfilProprio {
        nome_usuario,
        senha_login,
    };

    repo.update_perfil_proprio(usuario_id, &updates)
        .map_err(ServiceError::from)
}

#[cfg(all(test, feature = "test-mocks"))]
mod tests {
    use super::*;
    use crate::repository::mock::MockRepository;

    fn usuario_ativo() -> Usuario {
        Usuario {
            id: 1,
            nome_usuario: "Maria".into(),
            email_usuario: "maria@empresa.com".into(),
            ativo: true,
            ..Usuario::default()
        }
    }

    #[test]
    fn login_accepts_matching_password() {
        let hash = bcrypt::hash("segredo123", 4).unwrap();
        let mut repo = MockRepository::new();
        repo.expect_get_credenciais()
            .withf(|email| email == "maria@empresa.com")
            .returning(move |_| Ok(Some((usuario_ativo(), hash.clone()))));

        let usuario = login(&repo, " Maria@Empresa.com ", "segredo123").unwrap();
        assert_eq!(usuario.id, 1);
    }

    #[test]
    fn login_rejects_wrong_password() {
        let hash = bcrypt::hash("segredo123", 4).unwrap();
        let mut repo = MockRepository::new();
        repo.expect_get_credenciais()
            .returning(move |_| Ok(Some((usuario_ativo(), hash.clone()))));

        assert!(matches!(
            login(&repo, "maria@empresa.com", "errada"),
            Err(ServiceError::Unauthorized)
        ));
    }

    #[test]
    fn login_rejects_inactive_account() {
        let hash = bcrypt::hash("segredo123", 4).unwrap();
        let mut repo = MockRepository::new();
        repo.expect_get_credenciais().returning(move |_| {
            let mut usuario = usuario_ativo();
            usuario.ativo = false;
            Ok(Some((usuario, hash.clone())))
        });

        assert!(matches!(
            login(&repo, "maria@empresa.com", "segredo123"),
            Err(ServiceError::Unauthorized)
        ));
    }

    #[test]
    fn update_perfil_requires_some_field() {
        let repo = MockRepository::new();
        assert!(matches!(
            update_perfil(&repo, 1, None, None),
            Err(ServiceError::Validation(_))
        ));
    }
}
