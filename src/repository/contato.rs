use diesel::prelude::*;

use crate::domain::contato::{Contato, NewContato, UpdateContato};
use crate::repository::{
    ContatoReader, ContatoWriter, DieselRepository,
    errors::{RepositoryError, RepositoryResult},
};

impl ContatoReader for DieselRepository {
    fn get_contato_by_id(&self, id: i32) -> RepositoryResult<Option<Contato>> {
        use crate::models::contato::Contato as DbContato;
        use crate::schema::contatos;

        let mut conn = self.conn()?;
        let contato = contatos::table
            .find(id)
            .first::<DbContato>(&mut conn)
            .optional()?;

        Ok(contato.map(Into::into))
    }

    fn list_contatos(&self, cliente_id: i32) -> RepositoryResult<Vec<Contato>> {
        use crate::models::contato::Contato as DbContato;
        use crate::schema::contatos;

        let mut conn = self.conn()?;
        let rows = contatos::table
            .filter(contatos::cliente_id.eq(cliente_id))
            .order(contatos::nome.asc())
            .load::<DbContato>(&mut conn)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}

impl ContatoWriter for DieselRepository {
    fn create_contato(&self, new_contato: &NewContato) -> RepositoryResult<Contato> {
        use crate::models::contato::{Contato as DbContato, NewContato as DbNewContato};
        use crate::schema::contatos;

        let mut conn = self.conn()?;
        let insertable: DbNewContato = new_contato.into();
        let created = diesel::insert_into(contatos::table)
            .values(&insertable)
            .get_result::<DbContato>(&mut conn)?;

        Ok(created.into())
    }

    fn update_contato(&self, contato_id: i32, updates: &UpdateContato) -> RepositoryResult<Contato> {
        use crate::models::contato::{Contato as DbContato, UpdateContato as DbUpdateContato};
        use crate::schema::contatos;

        let mut conn = self.conn()?;
        let db_updates: DbUpdateContato = updates.into();

        let updated = diesel::update(contatos::table.find(contato_id))
            .set(&db_updates)
            .get_result::<DbContato>(&mut conn)?;

        Ok(updated.into())
    }

    fn delete_contato(&self, contato_id: i32) -> RepositoryResult<()> {
        use crate::schema::contatos;

        let mut conn = self.conn()?;
        let affected = diesel::delete(contatos::table.find(contato_id)).execute(&mut conn)?;

        if affected == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
