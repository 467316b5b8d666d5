use crate::domain::usuario::{NewUsuario, Perfil, UpdateUsuario, Usuario};
use crate::repository::{UsuarioListQuery, UsuarioReader, UsuarioWriter};
use crate::services::{ServiceError, ServiceResult};

pub fn get_usuario_by_id<R>(repo: &R, usuario_id: i32) -> ServiceResult<Option<Usuario>>
where
    R: UsuarioReader + ?Sized,
{
    repo.get_usuario_by_id(usuario_id).map_err(ServiceError::from)
}

pub fn list_usuarios<R>(
    repo: &R,
    query: UsuarioListQuery,
) -> ServiceResult<(usize, Vec<Usuario>)>
where
    R: UsuarioReader + ?Sized,
{
    repo.list_usuarios(query).map_err(ServiceError::from)
}

/// Creates an account with the given raw password, hashing it before it
/// touches the repository.
pub fn create_usuario<R>(
    repo: &R,
    nome_usuario: String,
    email_usuario: String,
    senha: &str,
    perfil: Perfil,
) -> ServiceResult<Usuario>
where
    R: UsuarioWriter + ?Sized,
{
    let hash = hash_senha(senha)?;
    let novo = NewUsuario::new(nome_usuario, email_usuario, hash, perfil);
    repo.create_usuario(&novo).map_err(ServiceError::from)
}

pub fn update_usuario<R>(
    repo: &R,
    usuario_id: i32,
    nome_usuario: String,
    email_usuario: String,
    perfil: Perfil,
    senha: Option<&str>,
) -> ServiceResult<Usuario>
where
    R: UsuarioReader + UsuarioWriter + ?Sized,
{
    if repo.get_usuario_by_id(usuario_id)?.is_none() {
        return Err(ServiceError::NotFound);
    }

    let hash = senha.map(hash_senha).transpose()?;
    let updates = UpdateUsuario::new(nome_usuario, email_usuario, perfil, hash);
    repo.update_usuario(usuario_id, &updates)
        .map_err(ServiceError::from)
}

pub fn set_usuario_ativo<R>(repo: &R, usuario_id: i32, ativo: bool) -> ServiceResult<Usuario>
where
    R: UsuarioWriter + ?Sized,
{
    repo.set_usuario_ativo(usuario_id, ativo)
        .map_err(ServiceError::from)
}

pub(crate) fn hash_senha(senha: &str) -> ServiceResult<String> {
    if senha.len() < 6 {
        return Err(ServiceError::Validation(
            "A senha deve ter pelo menos 6 caracteres".to_string(),
        ));
    }
    bcrypt::hash(senha, bcrypt::DEFAULT_COST)
        .map_err(|e| ServiceError::Validation(format!("Erro ao gerar hash de senha: {e}")))
}

#[cfg(all(test, feature = "test-mocks"))]
mod tests {
    use super::*;
    use crate::repository::mock::MockRepository;

    #[test]
    fn short_passwords_are_rejected_before_hashing() {
        let repo = MockRepository::new();
        let result = create_usuario(
            &repo,
            "Maria".into(),
            "maria@empresa.com".into(),
            "123",
            Perfil::Colaborador,
        );
        assert!(matches!(result, Err(ServiceError::Validation(_))));
    }

    #[test]
    fn create_passes_hashed_password_to_repository() {
        let mut repo = MockRepository::new();
        repo.expect_create_usuario()
            .times(1)
            .withf(|novo| {
                novo.email_usuario == "maria@empresa.com" && novo.senha_login != "segredo123"
            })
            .returning(|novo| {
                Ok(Usuario {
                    email_usuario: novo.email_usuario.clone(),
                    ..Usuario::default()
                })
            });

        create_usuario(
            &repo,
            "Maria".into(),
            " Maria@Empresa.com ".into(),
            "segredo123",
            Perfil::Colaborador,
        )
        .unwrap();
    }
}
