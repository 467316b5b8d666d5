use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::cliente::{
    Cliente as DomainCliente, NewCliente as DomainNewCliente, StatusCliente,
    UpdateCliente as DomainUpdateCliente,
};
use crate::domain::types::{PublicId, TypeConstraintError};

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::clientes)]
/// Diesel model for [`crate::domain::cliente::Cliente`].
pub struct Cliente {
    pub id: i32,
    pub public_id: Vec<u8>,
    pub nome: String,
    pub status: String,
    pub criado_em: NaiveDateTime,
    pub atualizado_em: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::clientes)]
/// Insertable form of [`Cliente`].
pub struct NewCliente<'a> {
    pub public_id: &'a [u8],
    pub nome: &'a str,
    pub status: &'a str,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::clientes)]
/// Data used when updating a [`Cliente`] record.
pub struct UpdateCliente<'a> {
    pub nome: &'a str,
    pub atualizado_em: NaiveDateTime,
}

impl TryFrom<Cliente> for DomainCliente {
    type Error = TypeConstraintError;

    fn try_from(cliente: Cliente) -> Result<Self, Self::Error> {
        Ok(Self {
            id: cliente.id,
            public_id: PublicId::from_bytes(&cliente.public_id)?,
            nome: cliente.nome,
            status: cliente.status.parse::<StatusCliente>()?,
            criado_em: cliente.criado_em,
            atualizado_em: cliente.atualizado_em,
        })
    }
}

impl<'a> From<&'a DomainNewCliente> for NewCliente<'a> {
    fn from(cliente: &'a DomainNewCliente) -> Self {
        Self {
            public_id: cliente.public_id.as_bytes(),
            nome: &cliente.nome,
            status: cliente.status.as_str(),
        }
    }
}

impl<'a> From<&'a DomainUpdateCliente> for UpdateCliente<'a> {
    fn from(cliente: &'a DomainUpdateCliente) -> Self {
        Self {
            nome: &cliente.nome,
            atualizado_em: chrono::Utc::now().naive_utc(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn cliente_into_domain() {
        let now = Utc::now().naive_utc();
        let public_id = PublicId::new();
        let db = Cliente {
            id: 3,
            public_id: public_id.as_bytes().to_vec(),
            nome: "Empresa".into(),
            status: "inativo".into(),
            criado_em: now,
            atualizado_em: now,
        };
        let domain = DomainCliente::try_from(db).unwrap();
        assert_eq!(domain.public_id, public_id);
        assert_eq!(domain.status, StatusCliente::Inativo);
    }

    #[test]
    fn malformed_public_id_fails_conversion() {
        let now = Utc::now().naive_utc();
        let db = Cliente {
            id: 3,
            public_id: vec![1, 2, 3],
            nome: "Empresa".into(),
            status: "ativo".into(),
            criado_em: now,
            atualizado_em: now,
        };
        assert_eq!(
            DomainCliente::try_from(db).unwrap_err(),
            TypeConstraintError::InvalidUuid
        );
    }
}
