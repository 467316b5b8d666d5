use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::registro_tempo::{
    NewRegistroTempo, RegistroTempo, TotalRealizado, duracao_horas,
};
use crate::repository::{
    DieselRepository, RealizadoTotalQuery, RegistroListQuery, RegistroTempoReader,
    RegistroTempoWriter,
    errors::{RepositoryError, RepositoryResult},
};

impl RegistroTempoReader for DieselRepository {
    fn get_registro_by_id(&self, id: i32) -> RepositoryResult<Option<RegistroTempo>> {
        use crate::models::registro_tempo::RegistroTempo as DbRegistro;
        use crate::schema::registros_tempo;

        let mut conn = self.conn()?;
        let registro = registros_tempo::table
            .find(id)
            .first::<DbRegistro>(&mut conn)
            .optional()?;

        Ok(registro.map(Into::into))
    }

    fn list_registros(
        &self,
        query: RegistroListQuery,
    ) -> RepositoryResult<(usize, Vec<RegistroTempo>)> {
        use crate::models::registro_tempo::RegistroTempo as DbRegistro;
        use crate::schema::registros_tempo;

        let mut conn = self.conn()?;

        let mut items = registros_tempo::table.into_boxed();
        let mut count = registros_tempo::table
            .select(diesel::dsl::count_star())
            .into_boxed();

        if let Some(usuario_id) = query.usuario_id {
            items = items.filter(registros_tempo::usuario_id.eq(usuario_id));
            count = count.filter(registros_tempo::usuario_id.eq(usuario_id));
        }

        if let Some(de) = query.de {
            items = items.filter(registros_tempo::inicio.ge(de));
            count = count.filter(registros_tempo::inicio.ge(de));
        }

        if let Some(ate) = query.ate {
            items = items.filter(registros_tempo::inicio.le(ate));
            count = count.filter(registros_tempo::inicio.le(ate));
        }

        let total: i64 = count.first(&mut conn)?;

        items = items.order(registros_tempo::inicio.desc());
        if let Some(pagination) = query.pagination {
            items = items.limit(pagination.limit()).offset(pagination.offset());
        }

        let rows = items.load::<DbRegistro>(&mut conn)?;
        Ok((total as usize, rows.into_iter().map(Into::into).collect()))
    }

    fn list_registros_ativos(&self, usuario_id: i32) -> RepositoryResult<Vec<RegistroTempo>> {
        use crate::models::registro_tempo::RegistroTempo as DbRegistro;
        use crate::schema::registros_tempo;

        let mut conn = self.conn()?;
        let rows = registros_tempo::table
            .filter(registros_tempo::usuario_id.eq(usuario_id))
            .filter(registros_tempo::fim.is_null())
            .order(registros_tempo::inicio.desc())
            .load::<DbRegistro>(&mut conn)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    fn historico(&self, usuario_id: i32, limite: usize) -> RepositoryResult<Vec<RegistroTempo>> {
        use crate::models::registro_tempo::RegistroTempo as DbRegistro;
        use crate::schema::registros_tempo;

        let mut conn = self.conn()?;
        let rows = registros_tempo::table
            .filter(registros_tempo::usuario_id.eq(usuario_id))
            .order(registros_tempo::inicio.desc())
            .limit(limite as i64)
            .load::<DbRegistro>(&mut conn)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    fn realizado_total(&self, query: RealizadoTotalQuery) -> RepositoryResult<TotalRealizado> {
        use crate::schema::{registros_tempo, tarefas};

        let mut conn = self.conn()?;

        // Left join keeps entries without a task; a cliente/produto filter
        // then naturally drops them.
        let mut soma = registros_tempo::table
            .left_join(tarefas::table)
            .select(diesel::dsl::sum(registros_tempo::horas))
            .into_boxed();
        let mut count = registros_tempo::table
            .left_join(tarefas::table)
            .select(diesel::dsl::count_star())
            .into_boxed();

        soma = soma.filter(registros_tempo::fim.is_not_null());
        count = count.filter(registros_tempo::fim.is_not_null());

        if let Some(usuario_id) = query.usuario_id {
            soma = soma.filter(registros_tempo::usuario_id.eq(usuario_id));
            count = count.filter(registros_tempo::usuario_id.eq(usuario_id));
        }

        if let Some(tarefa_id) = query.tarefa_id {
            soma = soma.filter(registros_tempo::tarefa_id.eq(tarefa_id));
            count = count.filter(registros_tempo::tarefa_id.eq(tarefa_id));
        }

        if let Some(cliente_id) = query.cliente_id {
            soma = soma.filter(tarefas::cliente_id.eq(cliente_id));
            count = count.filter(tarefas::cliente_id.eq(cliente_id));
        }

        if let Some(produto_id) = query.produto_id {
            soma = soma.filter(tarefas::produto_id.eq(produto_id));
            count = count.filter(tarefas::produto_id.eq(produto_id));
        }

        if let Some(de) = query.de {
            soma = soma.filter(registros_tempo::inicio.ge(de));
            count = count.filter(registros_tempo::inicio.ge(de));
        }

        if let Some(ate) = query.ate {
            soma = soma.filter(registros_tempo::inicio.le(ate));
            count = count.filter(registros_tempo::inicio.le(ate));
        }

        let horas: Option<f64> = soma.first(&mut conn)?;
        let registros: i64 = count.first(&mut conn)?;

        Ok(TotalRealizado {
            horas: horas.unwrap_or(0.0),
            registros,
        })
    }
}

impl RegistroTempoWriter for DieselRepository {
    fn create_registro(&self, new_registro: &NewRegistroTempo) -> RepositoryResult<RegistroTempo> {
        use crate::models::registro_tempo::{
            NewRegistroTempo as DbNewRegistro, RegistroTempo as DbRegistro,
        };
        use crate::schema::registros_tempo;

        let mut conn = self.conn()?;
        let insertable: DbNewRegistro = new_registro.into();
        let created = diesel::insert_into(registros_tempo::table)
            .values(&insertable)
            .get_result::<DbRegistro>(&mut conn)?;

        Ok(created.into())
    }

    fn finalizar_registro(
        &self,
        registro_id: i32,
        fim: NaiveDateTime,
    ) -> RepositoryResult<RegistroTempo> {
        use crate::models::registro_tempo::{FinalizarRegistro, RegistroTempo as DbRegistro};
        use crate::schema::registros_tempo;

        let mut conn = self.conn()?;

        let atual = registros_tempo::table
            .find(registro_id)
            .first::<DbRegistro>(&mut conn)
            .optional()?
            .ok_or(RepositoryError::NotFound)?;

        if atual.fim.is_some() {
            return Err(RepositoryError::ValidationError(
                "registro já finalizado".to_string(),
            ));
        }

        let changeset = FinalizarRegistro {
            fim,
            horas: duracao_horas(atual.inicio, fim),
        };

        let updated = diesel::update(registros_tempo::table.find(registro_id))
            .set(&changeset)
            .get_result::<DbRegistro>(&mut conn)?;

        Ok(updated.into())
    }

    fn delete_registro(&self, registro_id: i32) -> RepositoryResult<()> {
        use crate::schema::registros_tempo;

        let mut conn = self.conn()?;
        let affected =
            diesel::delete(registros_tempo::table.find(registro_id)).execute(&mut conn)?;

        if affected == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
