use crate::domain::cliente::{Cliente, NewCliente, StatusCliente, UpdateCliente};
use crate::domain::contato::{Contato, NewContato, UpdateContato};
use crate::domain::types::EntityRef;
use crate::repository::{ClienteListQuery, ClienteReader, ClienteWriter, ContatoReader, ContatoWriter};
use crate::services::{ServiceError, ServiceResult};

/// Resolves a client reference (numeric id or public UUID) to the stored
/// entity. Every `/api/clientes/{ref}` route goes through here so both
/// identifier styles behave identically.
pub fn resolve_cliente<R>(repo: &R, cliente_ref: EntityRef) -> ServiceResult<Cliente>
where
    R: ClienteReader + ?Sized,
{
    let cliente = match cliente_ref {
        EntityRef::Id(id) => repo.get_cliente_by_id(id)?,
        EntityRef::Public(public_id) => repo.get_cliente_by_public_id(public_id)?,
    };

    cliente.ok_or(ServiceError::NotFound)
}

pub fn list_clientes<R>(
    repo: &R,
    query: ClienteListQuery,
) -> ServiceResult<(usize, Vec<Cliente>)>
where
    R: ClienteReader + ?Sized,
{
    repo.list_clientes(query).map_err(ServiceError::from)
}

pub fn create_cliente<R>(repo: &R, new_cliente: &NewCliente) -> ServiceResult<Cliente>
where
    R: ClienteWriter + ?Sized,
{
    repo.create_cliente(new_cliente).map_err(ServiceError::from)
}

pub fn update_cliente<R>(
    repo: &R,
    cliente_ref: EntityRef,
    updates: &UpdateCliente,
) -> ServiceResult<Cliente>
where
    R: ClienteReader + ClienteWriter + ?Sized,
{
    let cliente = resolve_cliente(repo, cliente_ref)?;
    repo.update_cliente(cliente.id, updates)
        .map_err(ServiceError::from)
}

/// Flips the lifecycle status; used by the activate/deactivate endpoints.
pub fn set_cliente_status<R>(
    repo: &R,
    cliente_ref: EntityRef,
    status: StatusCliente,
) -> ServiceResult<Cliente>
where
    R: ClienteReader + ClienteWriter + ?Sized,
{
    let cliente = resolve_cliente(repo, cliente_ref)?;
    repo.set_cliente_status(cliente.id, status)
        .map_err(ServiceError::from)
}

pub fn delete_cliente<R>(repo: &R, cliente_ref: EntityRef) -> ServiceResult<()>
where
    R: ClienteReader + ClienteWriter + ?Sized,
{
    let cliente = resolve_cliente(repo, cliente_ref)?;
    repo.delete_cliente(cliente.id).map_err(ServiceError::from)
}

pub fn list_contatos<R>(repo: &R, cliente_ref: EntityRef) -> ServiceResult<Vec<Contato>>
where
    R: ClienteReader + ContatoReader + ?Sized,
{
    let cliente = resolve_cliente(repo, cliente_ref)?;
    repo.list_contatos(cliente.id).map_err(ServiceError::from)
}

pub fn create_contato<R>(
    repo: &R,
    cliente_ref: EntityRef,
    nome: String,
    email: Option<String>,
    telefone: Option<String>,
    cargo: Option<String>,
) -> ServiceResult<Contato>
where
    R: ClienteReader + ContatoWriter + ?Sized,
{
    let cliente = resolve_cliente(repo, cliente_ref)?;
    let novo = NewContato::new(cliente.id, nome, email, telefone, cargo);
    repo.create_contato(&novo).map_err(ServiceError::from)
}

pub fn update_contato<R>(
    repo: &R,
    contato_id: i32,
    updates: &UpdateContato,
) -> ServiceResult<Contato>
where
    R: ContatoReader + ContatoWriter + ?Sized,
{
    if repo.get_contato_by_id(contato_id)?.is_none() {
        return Err(ServiceError::NotFound);
    }
    repo.update_contato(contato_id, updates)
        .map_err(ServiceError::from)
}

pub fn delete_contato<R>(repo: &R, contato_id: i32) -> ServiceResult<()>
where
    R: ContatoWriter + ?Sized,
{
    repo.delete_contato(contato_id).map_err(ServiceError::from)
}

#[cfg(all(test, feature = "test-mocks"))]
mod tests {
    use super::*;
    use crate::domain::types::PublicId;
    use crate::repository::mock::MockRepository;
    use chrono::Utc;

    fn sample_cliente(id: i32, public_id: PublicId) -> Cliente {
        let now = Utc::now().naive_utc();
        Cliente {
            id,
            public_id,
            nome: "Empresa".into(),
            status: StatusCliente::Ativo,
            criado_em: now,
            atualizado_em: now,
        }
    }

    #[test]
    fn resolve_by_numeric_id() {
        let public_id = PublicId::new();
        let mut repo = MockRepository::new();
        repo.expect_get_cliente_by_id()
            .times(1)
            .returning(move |id| Ok(Some(sample_cliente(id, public_id))));

        let cliente = resolve_cliente(&repo, EntityRef::Id(7)).unwrap();
        assert_eq!(cliente.id, 7);
    }

    #[test]
    fn resolve_by_public_id() {
        let public_id = PublicId::new();
        let mut repo = MockRepository::new();
        repo.expect_get_cliente_by_public_id()
            .times(1)
            .returning(move |pid| {
                if pid == public_id {
                    Ok(Some(sample_cliente(3, pid)))
                } else {
                    Ok(None)
                }
            });

        let cliente = resolve_cliente(&repo, EntityRef::Public(public_id)).unwrap();
        assert_eq!(cliente.id, 3);
    }

    #[test]
    fn resolve_missing_client_is_not_found() {
        let mut repo = MockRepository::new();
        repo.expect_get_cliente_by_id().returning(|_| Ok(None));

        assert!(matches!(
            resolve_cliente(&repo, EntityRef::Id(1)),
            Err(ServiceError::NotFound)
        ));
    }

    #[test]
    fn status_change_targets_resolved_internal_id() {
        let public_id = PublicId::new();
        let mut repo = MockRepository::new();
        repo.expect_get_cliente_by_public_id()
            .returning(move |pid| Ok(Some(sample_cliente(9, pid))));
        repo.expect_set_cliente_status()
            .times(1)
            .withf(|id, status| *id == 9 && *status == StatusCliente::Inativo)
            .returning(move |id, status| {
                let mut cliente = sample_cliente(id, public_id);
                cliente.status = status;
                Ok(cliente)
            });

        let cliente =
            set_cliente_status(&repo, EntityRef::Public(public_id), StatusCliente::Inativo)
                .unwrap();
        assert_eq!(cliente.status, StatusCliente::Inativo);
    }
}
