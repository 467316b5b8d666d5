use crate::domain::produto::{NewProduto, Produto, UpdateProduto};
use crate::repository::{ProdutoReader, ProdutoWriter, ReferenciaListQuery};
use crate::services::{ServiceError, ServiceResult};

pub fn get_produto_by_id<R>(repo: &R, produto_id: i32) -> ServiceResult<Produto>
where
    R: ProdutoReader + ?Sized,
{
    repo.get_produto_by_id(produto_id)?
        .ok_or(ServiceError::NotFound)
}

pub fn list_produtos<R>(
    repo: &R,
    query: ReferenciaListQuery,
) -> ServiceResult<(usize, Vec<Produto>)>
where
    R: ProdutoReader + ?Sized,
{
    repo.list_produtos(query).map_err(ServiceError::from)
}

pub fn list_produtos_by_ids<R>(repo: &R, ids: &[i32]) -> ServiceResult<Vec<Produto>>
where
    R: ProdutoReader + ?Sized,
{
    repo.list_produtos_by_ids(ids).map_err(ServiceError::from)
}

pub fn create_produto<R>(repo: &R, new_produto: &NewProduto) -> ServiceResult<Produto>
where
    R: ProdutoWriter + ?Sized,
{
    repo.create_produto(new_produto).map_err(ServiceError::from)
}

pub fn update_produto<R>(
    repo: &R,
    produto_id: i32,
    updates: &UpdateProduto,
) -> ServiceResult<Produto>
where
    R: ProdutoReader + ProdutoWriter + ?Sized,
{
    if repo.get_produto_by_id(produto_id)?.is_none() {
        return Err(ServiceError::NotFound);
    }
    repo.update_produto(produto_id, updates)
        .map_err(ServiceError::from)
}

pub fn delete_produto<R>(repo: &R, produto_id: i32) -> ServiceResult<()>
where
    R: ProdutoWriter + ?Sized,
{
    repo.delete_produto(produto_id).map_err(ServiceError::from)
}
