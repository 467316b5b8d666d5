use diesel::prelude::*;

use crate::domain::produto::{
    NewProduto as DomainNewProduto, Produto as DomainProduto,
    UpdateProduto as DomainUpdateProduto,
};

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::produtos)]
/// Diesel model for [`crate::domain::produto::Produto`].
pub struct Produto {
    pub id: i32,
    pub nome: String,
    pub descricao: Option<String>,
    pub ativo: bool,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::produtos)]
/// Insertable form of [`Produto`].
pub struct NewProduto<'a> {
    pub nome: &'a str,
    pub descricao: Option<&'a str>,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::produtos)]
#[diesel(treat_none_as_null = true)]
/// Data used when updating a [`Produto`] record.
pub struct UpdateProduto<'a> {
    pub nome: &'a str,
    pub descricao: Option<&'a str>,
    pub ativo: bool,
}

impl From<Produto> for DomainProduto {
    fn from(produto: Produto) -> Self {
        Self {
            id: produto.id,
            nome: produto.nome,
            descricao: produto.descricao,
            ativo: produto.ativo,
        }
    }
}

impl<'a> From<&'a DomainNewProduto> for NewProduto<'a> {
    fn from(produto: &'a DomainNewProduto) -> Self {
        Self {
            nome: &produto.nome,
            descricao: produto.descricao.as_deref(),
        }
    }
}

impl<'a> From<&'a DomainUpdateProduto> for UpdateProduto<'a> {
    fn from(produto: &'a DomainUpdateProduto) -> Self {
        Self {
            nome: &produto.nome,
            descricao: produto.descricao.as_deref(),
            ativo: produto.ativo,
        }
    }
}
