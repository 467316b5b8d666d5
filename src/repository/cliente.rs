use diesel::prelude::*;

use crate::domain::cliente::{Cliente, NewCliente, StatusCliente, UpdateCliente};
use crate::domain::types::PublicId;
use crate::repository::{
    ClienteListQuery, ClienteReader, ClienteWriter, DieselRepository, errors::RepositoryResult,
};

impl ClienteReader for DieselRepository {
    fn get_cliente_by_id(&self, id: i32) -> RepositoryResult<Option<Cliente>> {
        use crate::models::cliente::Cliente as DbCliente;
        use crate::schema::clientes;

        let mut conn = self.conn()?;
        let cliente = clientes::table
            .find(id)
            .first::<DbCliente>(&mut conn)
            .optional()?;

        cliente.map(TryInto::try_into).transpose().map_err(Into::into)
    }

    fn get_cliente_by_public_id(&self, public_id: PublicId) -> RepositoryResult<Option<Cliente>> {
        use crate::models::cliente::Cliente as DbCliente;
        use crate::schema::clientes;

        let mut conn = self.conn()?;
        let cliente = clientes::table
            .filter(clientes::public_id.eq(public_id.as_bytes().as_slice()))
            .first::<DbCliente>(&mut conn)
            .optional()?;

        cliente.map(TryInto::try_into).transpose().map_err(Into::into)
    }

    fn list_clientes(&self, query: ClienteListQuery) -> RepositoryResult<(usize, Vec<Cliente>)> {
        use crate::models::cliente::Cliente as DbCliente;
        use crate::schema::clientes;

        let mut conn = self.conn()?;

        let mut items = clientes::table.into_boxed();
        let mut count = clientes::table
            .select(diesel::dsl::count_star())
            .into_boxed();

        if let Some(status) = query.status {
            items = items.filter(clientes::status.eq(status.as_str()));
            count = count.filter(clientes::status.eq(status.as_str()));
        }

        if let Some(search) = &query.search {
            let pattern = format!("%{search}%");
            items = items.filter(clientes::nome.like(pattern.clone()));
            count = count.filter(clientes::nome.like(pattern));
        }

        let total: i64 = count.first(&mut conn)?;

        items = items.order(clientes::nome.asc());
        if let Some(pagination) = query.pagination {
            items = items.limit(pagination.limit()).offset(pagination.offset());
        }

        let rows = items.load::<DbCliente>(&mut conn)?;
        let clientes = rows
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<Cliente>, _>>()?;

        Ok((total as usize, clientes))
    }
}

impl ClienteWriter for DieselRepository {
    fn create_cliente(&self, new_cliente: &NewCliente) -> RepositoryResult<Cliente> {
        use crate::models::cliente::{Cliente as DbCliente, NewCliente as DbNewCliente};
        use crate::schema::clientes;

        let mut conn = self.conn()?;
        let insertable: DbNewCliente = new_cliente.into();
        let created = diesel::insert_into(clientes::table)
            .values(&insertable)
            .get_result::<DbCliente>(&mut conn)?;

        created.try_into().map_err(Into::into)
    }

    fn update_cliente(&self, cliente_id: i32, updates: &UpdateCliente) -> RepositoryResult<Cliente> {
        use crate::models::cliente::{Cliente as DbCliente, UpdateCliente as DbUpdateCliente};
        use crate::schema::clientes;

        let mut conn = self.conn()?;
        let db_updates: DbUpdateCliente = updates.into();

        let updated = diesel::update(clientes::table.find(cliente_id))
            .set(&db_updates)
            .get_result::<DbCliente>(&mut conn)?;

        updated.try_into().map_err(Into::into)
    }

    fn set_cliente_status(
        &self,
        cliente_id: i32,
        status: StatusCliente,
    ) -> RepositoryResult<Cliente> {
        use crate::models::cliente::Cliente as DbCliente;
        use crate::schema::clientes;

        let mut conn = self.conn()?;
        let updated = diesel::update(clientes::table.find(cliente_id))
            .set((
                clientes::status.eq(status.as_str()),
                clientes::atualizado_em.eq(chrono::Utc::now().naive_utc()),
            ))
            .get_result::<DbCliente>(&mut conn)?;

        updated.try_into().map_err(Into::into)
    }

    fn delete_cliente(&self, cliente_id: i32) -> RepositoryResult<()> {
        use crate::schema::{clientes, contatos};

        let mut conn = self.conn()?;

        // Contacts belong to the client; tasks do not and keep the FK alive.
        conn.transaction::<_, diesel::result::Error, _>(|conn| {
            diesel::delete(contatos::table.filter(contatos::cliente_id.eq(cliente_id)))
                .execute(conn)?;
            let affected = diesel::delete(clientes::table.find(cliente_id)).execute(conn)?;

            if affected == 0 {
                return Err(diesel::result::Error::NotFound);
            }
            Ok(())
        })?;
        Ok(())
    }
}
