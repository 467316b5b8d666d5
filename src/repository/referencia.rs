//! Diesel CRUD for the lookup registries.
//!
//! The seven tables share the same access pattern, so the method bodies are
//! stamped out of macros. Banks search by code as well as by name and get a
//! hand-written list method.

use diesel::prelude::*;

use crate::domain::referencia::{
    Adquirente, Atividade, Banco, NewAdquirente, NewAtividade, NewBanco, NewSistema,
    NewStatusTarefa, NewTipoContrato, NewTipoTarefa, Sistema, StatusTarefa, TipoContrato,
    TipoTarefa,
};
use crate::repository::{
    DieselRepository, ReferenciaListQuery, ReferenciaReader, ReferenciaWriter,
    errors::{RepositoryError, RepositoryResult},
};

macro_rules! referencia_get {
    ($fn_name:ident, $table:ident, $db:ty, $domain:ty) => {
        fn $fn_name(&self, id: i32) -> RepositoryResult<Option<$domain>> {
            use crate::schema::$table;

            let mut conn = self.conn()?;
            let row = $table::table.find(id).first::<$db>(&mut conn).optional()?;

            Ok(row.map(Into::into))
        }
    };
}

macro_rules! referencia_list {
    ($fn_name:ident, $table:ident, $db:ty, $domain:ty) => {
        fn $fn_name(
            &self,
            query: ReferenciaListQuery,
        ) -> RepositoryResult<(usize, Vec<$domain>)> {
            use crate::schema::$table;

            let mut conn = self.conn()?;

            let mut items = $table::table.into_boxed();
            let mut count = $table::table
                .select(diesel::dsl::count_star())
                .into_boxed();

            if let Some(search) = &query.search {
                let pattern = format!("%{search}%");
                items = items.filter($table::nome.like(pattern.clone()));
                count = count.filter($table::nome.like(pattern));
            }

            let total: i64 = count.first(&mut conn)?;

            items = items.order($table::nome.asc());
            if let Some(pagination) = query.pagination {
                items = items.limit(pagination.limit()).offset(pagination.offset());
            }

            let rows = items.load::<$db>(&mut conn)?;
            Ok((total as usize, rows.into_iter().map(Into::into).collect()))
        }
    };
}

macro_rules! referencia_write {
    ($create:ident, $update:ident, $delete:ident, $table:ident, $db:ty, $db_new:ty, $domain:ty, $domain_new:ty) => {
        fn $create(&self, novo: &$domain_new) -> RepositoryResult<$domain> {
            use crate::schema::$table;

            let mut conn = self.conn()?;
            let insertable: $db_new = novo.into();
            let created = diesel::insert_into($table::table)
                .values(&insertable)
                .get_result::<$db>(&mut conn)?;

            Ok(created.into())
        }

        fn $update(&self, id: i32, updates: &$domain_new) -> RepositoryResult<$domain> {
            use crate::schema::$table;

            let mut conn = self.conn()?;
            let changeset: $db_new = updates.into();
            let updated = diesel::update($table::table.find(id))
                .set(&changeset)
                .get_result::<$db>(&mut conn)?;

            Ok(updated.into())
        }

        fn $delete(&self, id: i32) -> RepositoryResult<()> {
            use crate::schema::$table;

            let mut conn = self.conn()?;
            let affected = diesel::delete($table::table.find(id)).execute(&mut conn)?;

            if affected == 0 {
                return Err(RepositoryError::NotFound);
            }
            Ok(())
        }
    };
}

impl ReferenciaReader for DieselRepository {
    referencia_get!(get_banco_by_id, bancos, crate::models::referencia::Banco, Banco);

    // Banks are searched by name or code, so the stamped list does not fit.
    fn list_bancos(&self, query: ReferenciaListQuery) -> RepositoryResult<(usize, Vec<Banco>)> {
        use crate::models::referencia::Banco as DbBanco;
        use crate::schema::bancos;

        let mut conn = self.conn()?;

        let mut items = bancos::table.into_boxed();
        let mut count = bancos::table.select(diesel::dsl::count_star()).into_boxed();

        if let Some(search) = &query.search {
            let pattern = format!("%{search}%");
            items = items
                .filter(bancos::nome.like(pattern.clone()))
                .or_filter(bancos::codigo.like(pattern.clone()));
            count = count
                .filter(bancos::nome.like(pattern.clone()))
                .or_filter(bancos::codigo.like(pattern));
        }

        let total: i64 = count.first(&mut conn)?;

        items = items.order(bancos::nome.asc());
        if let Some(pagination) = query.pagination {
            items = items.limit(pagination.limit()).offset(pagination.offset());
        }

        let rows = items.load::<DbBanco>(&mut conn)?;
        Ok((total as usize, rows.into_iter().map(Into::into).collect()))
    }

    referencia_get!(
        get_adquirente_by_id,
        adquirentes,
        crate::models::referencia::Adquirente,
        Adquirente
    );
    referencia_list!(
        list_adquirentes,
        adquirentes,
        crate::models::referencia::Adquirente,
        Adquirente
    );

    referencia_get!(
        get_sistema_by_id,
        sistemas,
        crate::models::referencia::Sistema,
        Sistema
    );
    referencia_list!(
        list_sistemas,
        sistemas,
        crate::models::referencia::Sistema,
        Sistema
    );

    referencia_get!(
        get_tipo_contrato_by_id,
        tipos_contrato,
        crate::models::referencia::TipoContrato,
        TipoContrato
    );
    referencia_list!(
        list_tipos_contrato,
        tipos_contrato,
        crate::models::referencia::TipoContrato,
        TipoContrato
    );

    referencia_get!(
        get_tipo_tarefa_by_id,
        tipos_tarefa,
        crate::models::referencia::TipoTarefa,
        TipoTarefa
    );
    referencia_list!(
        list_tipos_tarefa,
        tipos_tarefa,
        crate::models::referencia::TipoTarefa,
        TipoTarefa
    );

    referencia_get!(
        get_status_tarefa_by_id,
        status_tarefa,
        crate::models::referencia::StatusTarefa,
        StatusTarefa
    );
    referencia_list!(
        list_status_tarefa,
        status_tarefa,
        crate::models::referencia::StatusTarefa,
        StatusTarefa
    );

    referencia_get!(
        get_atividade_by_id,
        atividades,
        crate::models::referencia::Atividade,
        Atividade
    );
    referencia_list!(
        list_atividades,
        atividades,
        crate::models::referencia::Atividade,
        Atividade
    );
}

impl ReferenciaWriter for DieselRepository {
    referencia_write!(
        create_banco,
        update_banco,
        delete_banco,
        bancos,
        crate::models::referencia::Banco,
        crate::models::referencia::NewBanco,
        Banco,
        NewBanco
    );
    referencia_write!(
        create_adquirente,
        update_adquirente,
        delete_adquirente,
        adquirentes,
        crate::models::referencia::Adquirente,
        crate::models::referencia::NewAdquirente,
        Adquirente,
        NewAdquirente
    );
    referencia_write!(
        create_sistema,
        update_sistema,
        delete_sistema,
        sistemas,
        crate::models::referencia::Sistema,
        crate::models::referencia::NewSistema,
        Sistema,
        NewSistema
    );
    referencia_write!(
        create_tipo_contrato,
        update_tipo_contrato,
        delete_tipo_contrato,
        tipos_contrato,
        crate::models::referencia::TipoContrato,
        crate::models::referencia::NewTipoContrato,
        TipoContrato,
        NewTipoContrato
    );
    referencia_write!(
        create_tipo_tarefa,
        update_tipo_tarefa,
        delete_tipo_tarefa,
        tipos_tarefa,
        crate::models::referencia::TipoTarefa,
        crate::models::referencia::NewTipoTarefa,
        TipoTarefa,
        NewTipoTarefa
    );
    referencia_write!(
        create_status_tarefa,
        update_status_tarefa,
        delete_status_tarefa,
        status_tarefa,
        crate::models::referencia::StatusTarefa,
        crate::models::referencia::NewStatusTarefa,
        StatusTarefa,
        NewStatusTarefa
    );
    referencia_write!(
        create_atividade,
        update_atividade,
        delete_atividade,
        atividades,
        crate::models::referencia::Atividade,
        crate::models::referencia::NewAtividade,
        Atividade,
        NewAtividade
    );
}
