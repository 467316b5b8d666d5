use diesel::prelude::*;

use crate::domain::tarefa::{
    NewSubtarefa, NewTarefa, Subtarefa, Tarefa, UpdateSubtarefa, UpdateTarefa,
};
use crate::repository::{
    DieselRepository, TarefaListQuery, TarefaReader, TarefaWriter,
    errors::{RepositoryError, RepositoryResult},
};

impl TarefaReader for DieselRepository {
    fn get_tarefa_by_id(&self, id: i32) -> RepositoryResult<Option<Tarefa>> {
        use crate::models::tarefa::Tarefa as DbTarefa;
        use crate::schema::tarefas;

        let mut conn = self.conn()?;
        let tarefa = tarefas::table
            .find(id)
            .first::<DbTarefa>(&mut conn)
            .optional()?;

        Ok(tarefa.map(Into::into))
    }

    fn list_tarefas(&self, query: TarefaListQuery) -> RepositoryResult<(usize, Vec<Tarefa>)> {
        use crate::models::tarefa::Tarefa as DbTarefa;
        use crate::schema::tarefas;

        let mut conn = self.conn()?;

        let mut items = tarefas::table.into_boxed();
        let mut count = tarefas::table
            .select(diesel::dsl::count_star())
            .into_boxed();

        if let Some(cliente_id) = query.cliente_id {
            items = items.filter(tarefas::cliente_id.eq(cliente_id));
            count = count.filter(tarefas::cliente_id.eq(cliente_id));
        }

        if let Some(produto_id) = query.produto_id {
            items = items.filter(tarefas::produto_id.eq(produto_id));
            count = count.filter(tarefas::produto_id.eq(produto_id));
        }

        if let Some(responsavel_id) = query.responsavel_id {
            items = items.filter(tarefas::responsavel_id.eq(responsavel_id));
            count = count.filter(tarefas::responsavel_id.eq(responsavel_id));
        }

        if let Some(search) = &query.search {
            let pattern = format!("%{search}%");
            items = items.filter(tarefas::nome.like(pattern.clone()));
            count = count.filter(tarefas::nome.like(pattern));
        }

        let total: i64 = count.first(&mut conn)?;

        items = items.order(tarefas::id.asc());
        if let Some(pagination) = query.pagination {
            items = items.limit(pagination.limit()).offset(pagination.offset());
        }

        let rows = items.load::<DbTarefa>(&mut conn)?;
        Ok((total as usize, rows.into_iter().map(Into::into).collect()))
    }

    fn list_tarefas_by_ids(&self, ids: &[i32]) -> RepositoryResult<Vec<Tarefa>> {
        use crate::models::tarefa::Tarefa as DbTarefa;
        use crate::schema::tarefas;

        let mut conn = self.conn()?;
        let rows = tarefas::table
            .filter(tarefas::id.eq_any(ids))
            .order(tarefas::id.asc())
            .load::<DbTarefa>(&mut conn)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    fn get_subtarefa_by_id(&self, id: i32) -> RepositoryResult<Option<Subtarefa>> {
        use crate::models::tarefa::Subtarefa as DbSubtarefa;
        use crate::schema::subtarefas;

        let mut conn = self.conn()?;
        let subtarefa = subtarefas::table
            .find(id)
            .first::<DbSubtarefa>(&mut conn)
            .optional()?;

        Ok(subtarefa.map(Into::into))
    }

    fn list_subtarefas(&self, tarefa_id: i32) -> RepositoryResult<Vec<Subtarefa>> {
        use crate::models::tarefa::Subtarefa as DbSubtarefa;
        use crate::schema::subtarefas;

        let mut conn = self.conn()?;
        let rows = subtarefas::table
            .filter(subtarefas::tarefa_id.eq(tarefa_id))
            .order(subtarefas::id.asc())
            .load::<DbSubtarefa>(&mut conn)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}

impl TarefaWriter for DieselRepository {
    fn create_tarefa(&self, new_tarefa: &NewTarefa) -> RepositoryResult<Tarefa> {
        use crate::models::tarefa::{NewTarefa as DbNewTarefa, Tarefa as DbTarefa};
        use crate::schema::tarefas;

        let mut conn = self.conn()?;
        let insertable: DbNewTarefa = new_tarefa.into();
        let created = diesel::insert_into(tarefas::table)
            .values(&insertable)
            .get_result::<DbTarefa>(&mut conn)?;

        Ok(created.into())
    }

    fn update_tarefa(&self, tarefa_id: i32, updates: &UpdateTarefa) -> RepositoryResult<Tarefa> {
        use crate::models::tarefa::{Tarefa as DbTarefa, UpdateTarefa as DbUpdateTarefa};
        use crate::schema::tarefas;

        let mut conn = self.conn()?;
        let db_updates: DbUpdateTarefa = updates.into();

        let updated = diesel::update(tarefas::table.find(tarefa_id))
            .set(&db_updates)
            .get_result::<DbTarefa>(&mut conn)?;

        Ok(updated.into())
    }

    fn delete_tarefa(&self, tarefa_id: i32) -> RepositoryResult<()> {
        use crate::schema::{registros_tempo, subtarefas, tarefas};

        let mut conn = self.conn()?;

        // Time entries are history: detach instead of deleting them.
        conn.transaction::<_, diesel::result::Error, _>(|conn| {
            diesel::update(
                registros_tempo::table.filter(registros_tempo::tarefa_id.eq(tarefa_id)),
            )
            .set(registros_tempo::tarefa_id.eq(None::<i32>))
            .execute(conn)?;
            diesel::delete(subtarefas::table.filter(subtarefas::tarefa_id.eq(tarefa_id)))
                .execute(conn)?;
            let affected = diesel::delete(tarefas::table.find(tarefa_id)).execute(conn)?;

            if affected == 0 {
                return Err(diesel::result::Error::NotFound);
            }
            Ok(())
        })?;
        Ok(())
    }

    fn create_subtarefa(&self, new_subtarefa: &NewSubtarefa) -> RepositoryResult<Subtarefa> {
        use crate::models::tarefa::{NewSubtarefa as DbNewSubtarefa, Subtarefa as DbSubtarefa};
        use crate::schema::subtarefas;

        let mut conn = self.conn()?;
        let insertable: DbNewSubtarefa = new_subtarefa.into();
        let created = diesel::insert_into(subtarefas::table)
            .values(&insertable)
            .get_result::<DbSubtarefa>(&mut conn)?;

        Ok(created.into())
    }

    fn update_subtarefa(
        &self,
        subtarefa_id: i32,
        updates: &UpdateSubtarefa,
    ) -> RepositoryResult<Subtarefa> {
        use crate::models::tarefa::{Subtarefa as DbSubtarefa, UpdateSubtarefa as DbUpdateSubtarefa};
        use crate::schema::subtarefas;

        let mut conn = self.conn()?;
        let db_updates: DbUpdateSubtarefa = updates.into();

        let updated = diesel::update(subtarefas::table.find(subtarefa_id))
            .set(&db_updates)
            .get_result::<DbSubtarefa>(&mut conn)?;

        Ok(updated.into())
    }

    fn delete_subtarefa(&self, subtarefa_id: i32) -> RepositoryResult<()> {
        use crate::schema::subtarefas;

        let mut conn = self.conn()?;
        let affected =
            diesel::delete(subtarefas::table.find(subtarefa_id)).execute(&mut conn)?;

        if affected == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
