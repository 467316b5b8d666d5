use diesel::prelude::*;

use crate::domain::produto::{NewProduto, Produto, UpdateProduto};
use crate::repository::{
    DieselRepository, ProdutoReader, ProdutoWriter, ReferenciaListQuery,
    errors::{RepositoryError, RepositoryResult},
};

impl ProdutoReader for DieselRepository {
    fn get_produto_by_id(&self, id: i32) -> RepositoryResult<Option<Produto>> {
        use crate::models::produto::Produto as DbProduto;
        use crate::schema::produtos;

        let mut conn = self.conn()?;
        let produto = produtos::table
            .find(id)
            .first::<DbProduto>(&mut conn)
            .optional()?;

        Ok(produto.map(Into::into))
    }

    fn list_produtos(&self, query: ReferenciaListQuery) -> RepositoryResult<(usize, Vec<Produto>)> {
        use crate::models::produto::Produto as DbProduto;
        use crate::schema::produtos;

        let mut conn = self.conn()?;

        let mut items = produtos::table.into_boxed();
        let mut count = produtos::table
            .select(diesel::dsl::count_star())
            .into_boxed();

        if let Some(search) = &query.search {
            let pattern = format!("%{search}%");
            items = items.filter(produtos::nome.like(pattern.clone()));
            count = count.filter(produtos::nome.like(pattern));
        }

        let total: i64 = count.first(&mut conn)?;

        items = items.order(produtos::nome.asc());
        if let Some(pagination) = query.pagination {
            items = items.limit(pagination.limit()).offset(pagination.offset());
        }

        let rows = items.load::<DbProduto>(&mut conn)?;
        Ok((total as usize, rows.into_iter().map(Into::into).collect()))
    }

    fn list_produtos_by_ids(&self, ids: &[i32]) -> RepositoryResult<Vec<Produto>> {
        use crate::models::produto::Produto as DbProduto;
        use crate::schema::produtos;

        let mut conn = self.conn()?;
        let rows = produtos::table
            .filter(produtos::id.eq_any(ids))
            .order(produtos::id.asc())
            .load::<DbProduto>(&mut conn)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}

impl ProdutoWriter for DieselRepository {
    fn create_produto(&self, new_produto: &NewProduto) -> RepositoryResult<Produto> {
        use crate::models::produto::{NewProduto as DbNewProduto, Produto as DbProduto};
        use crate::schema::produtos;

        let mut conn = self.conn()?;
        let insertable: DbNewProduto = new_produto.into();
        let created = diesel::insert_into(produtos::table)
            .values(&insertable)
            .get_result::<DbProduto>(&mut conn)?;

        Ok(created.into())
    }

    fn update_produto(&self, produto_id: i32, updates: &UpdateProduto) -> RepositoryResult<Produto> {
        use crate::models::produto::{Produto as DbProduto, UpdateProduto as DbUpdateProduto};
        use crate::schema::produtos;

        let mut conn = self.conn()?;
        let db_updates: DbUpdateProduto = updates.into();

        let updated = diesel::update(produtos::table.find(produto_id))
            .set(&db_updates)
            .get_result::<DbProduto>(&mut conn)?;

        Ok(updated.into())
    }

    fn delete_produto(&self, produto_id: i32) -> RepositoryResult<()> {
        use crate::schema::produtos;

        let mut conn = self.conn()?;
        let affected = diesel::delete(produtos::table.find(produto_id)).execute(&mut conn)?;

        if affected == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
