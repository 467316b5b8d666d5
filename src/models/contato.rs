use diesel::prelude::*;

use crate::domain::contato::{
    Contato as DomainContato, NewContato as DomainNewContato,
    UpdateContato as DomainUpdateContato,
};

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::contatos)]
/// Diesel model for [`crate::domain::contato::Contato`].
pub struct Contato {
    pub id: i32,
    pub cliente_id: i32,
    pub nome: String,
    pub email: Option<String>,
    pub telefone: Option<String>,
    pub cargo: Option<String>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::contatos)]
/// Insertable form of [`Contato`].
pub struct NewContato<'a> {
    pub cliente_id: i32,
    pub nome: &'a str,
    pub email: Option<&'a str>,
    pub telefone: Option<&'a str>,
    pub cargo: Option<&'a str>,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::contatos)]
#[diesel(treat_none_as_null = true)]
/// Data used when updating a [`Contato`] record.
pub struct UpdateContato<'a> {
    pub nome: &'a str,
    pub email: Option<&'a str>,
    pub telefone: Option<&'a str>,
    pub cargo: Option<&'a str>,
}

impl From<Contato> for DomainContato {
    fn from(contato: Contato) -> Self {
        Self {
            id: contato.id,
            cliente_id: contato.cliente_id,
            nome: contato.nome,
            email: contato.email,
            telefone: contato.telefone,
            cargo: contato.cargo,
        }
    }
}

impl<'a> From<&'a DomainNewContato> for NewContato<'a> {
    fn from(contato: &'a DomainNewContato) -> Self {
        Self {
            cliente_id: contato.cliente_id,
            nome: &contato.nome,
            email: contato.email.as_deref(),
            telefone: contato.telefone.as_deref(),
            cargo: contato.cargo.as_deref(),
        }
    }
}

impl<'a> From<&'a DomainUpdateContato> for UpdateContato<'a> {
    fn from(contato: &'a DomainUpdateContato) -> Self {
        Self {
            nome: &contato.nome,
            email: contato.email.as_deref(),
            telefone: contato.telefone.as_deref(),
            cargo: contato.cargo.as_deref(),
        }
    }
}
