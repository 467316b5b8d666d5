use chrono::Utc;
use diesel::prelude::*;

use crate::domain::usuario::{NewUsuario, UpdatePerfilProprio, UpdateUsuario, Usuario};
use crate::repository::{
    DieselRepository, UsuarioListQuery, UsuarioReader, UsuarioWriter,
    errors::{RepositoryError, RepositoryResult},
};

impl UsuarioReader for DieselRepository {
    fn get_usuario_by_id(&self, id: i32) -> RepositoryResult<Option<Usuario>> {
        use crate::models::usuario::Usuario as DbUsuario;
        use crate::schema::usuarios;

        let mut conn = self.conn()?;
        let usuario = usuarios::table
            .find(id)
            .first::<DbUsuario>(&mut conn)
            .optional()?;

        usuario.map(TryInto::try_into).transpose().map_err(Into::into)
    }

    fn get_usuario_by_email(&self, email: &str) -> RepositoryResult<Option<Usuario>> {
        use crate::models::usuario::Usuario as DbUsuario;
        use crate::schema::usuarios;

        let mut conn = self.conn()?;
        let usuario = usuarios::table
            .filter(usuarios::email_usuario.eq(email))
            .first::<DbUsuario>(&mut conn)
            .optional()?;

        usuario.map(TryInto::try_into).transpose().map_err(Into::into)
    }

    fn get_credenciais(&self, email: &str) -> RepositoryResult<Option<(Usuario, String)>> {
        use crate::models::usuario::Usuario as DbUsuario;
        use crate::schema::usuarios;

        let mut conn = self.conn()?;
        let usuario = usuarios::table
            .filter(usuarios::email_usuario.eq(email))
            .first::<DbUsuario>(&mut conn)
            .optional()?;

        match usuario {
            Some(db_usuario) => {
                let senha = db_usuario.senha_login.clone();
                let usuario: Usuario = db_usuario.try_into()?;
                Ok(Some((usuario, senha)))
            }
            None => Ok(None),
        }
    }

    fn list_usuarios(&self, query: UsuarioListQuery) -> RepositoryResult<(usize, Vec<Usuario>)> {
        use crate::models::usuario::Usuario as DbUsuario;
        use crate::schema::usuarios;

        let mut conn = self.conn()?;

        let mut items = usuarios::table.into_boxed();
        let mut count = usuarios::table
            .select(diesel::dsl::count_star())
            .into_boxed();

        if query.apenas_ativos {
            items = items.filter(usuarios::ativo.eq(true));
            count = count.filter(usuarios::ativo.eq(true));
        }

        if let Some(search) = &query.search {
            let pattern = format!("%{search}%");
            items = items.filter(
                usuarios::nome_usuario
                    .like(pattern.clone())
                    .or(usuarios::email_usuario.like(pattern.clone())),
            );
            count = count.filter(
                usuarios::nome_usuario
                    .like(pattern.clone())
                    .or(usuarios::email_usuario.like(pattern)),
            );
        }

        let total: i64 = count.first(&mut conn)?;

        items = items.order(usuarios::nome_usuario.asc());
        if let Some(pagination) = query.pagination {
            items = items.limit(pagination.limit()).offset(pagination.offset());
        }

        let rows = items.load::<DbUsuario>(&mut conn)?;
        let usuarios = rows
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<Usuario>, _>>()?;

        Ok((total as usize, usuarios))
    }
}

impl UsuarioWriter for DieselRepository {
    fn create_usuario(&self, new_usuario: &NewUsuario) -> RepositoryResult<Usuario> {
        use crate::models::usuario::{NewUsuario as DbNewUsuario, Usuario as DbUsuario};
        use crate::schema::usuarios;

        let mut conn = self.conn()?;
        let insertable: DbNewUsuario = new_usuario.into();
        let created = diesel::insert_into(usuarios::table)
            .values(&insertable)
            .get_result::<DbUsuario>(&mut conn)?;

        created.try_into().map_err(Into::into)
    }

    fn update_usuario(&self, usuario_id: i32, updates: &UpdateUsuario) -> RepositoryResult<Usuario> {
        use crate::models::usuario::{UpdateUsuario as DbUpdateUsuario, Usuario as DbUsuario};
        use crate::schema::usuarios;

        let mut conn = self.conn()?;
        let db_updates: DbUpdateUsuario = updates.into();

        let updated = diesel::update(usuarios::table.find(usuario_id))
            .set(&db_updates)
            .get_result::<DbUsuario>(&mut conn)?;

        updated.try_into().map_err(Into::into)
    }

    fn update_perfil_proprio(
        &self,
        usuario_id: i32,
        updates: &UpdatePerfilProprio,
    ) -> RepositoryResult<Usuario> {
        use crate::models::usuario::Usuario as DbUsuario;
        use crate::schema::usuarios;

        let mut conn = self.conn()?;
        let now = Utc::now().naive_utc();

        let updated = match (updates.nome_usuario.as_deref(), updates.senha_login.as_deref()) {
            (Some(nome), Some(senha)) => diesel::update(usuarios::table.find(usuario_id))
                .set((
                    usuarios::nome_usuario.eq(nome),
                    usuarios::senha_login.eq(senha),
                    usuarios::atualizado_em.eq(now),
                ))
                .get_result::<DbUsuario>(&mut conn)?,
            (Some(nome), None) => diesel::update(usuarios::table.find(usuario_id))
                .set((
                    usuarios::nome_usuario.eq(nome),
                    usuarios::atualizado_em.eq(now),
                ))
                .get_result::<DbUsuario>(&mut conn)?,
            (None, Some(senha)) => diesel::update(usuarios::table.find(usuario_id))
                .set((
                    usuarios::senha_login.eq(senha),
                    usuarios::atualizado_em.eq(now),
                ))
                .get_result::<DbUsuario>(&mut conn)?,
            (None, None) => usuarios::table
                .find(usuario_id)
                .first::<DbUsuario>(&mut conn)
                .optional()?
                .ok_or(RepositoryError::NotFound)?,
        };

        updated.try_into().map_err(Into::into)
    }

    fn set_usuario_ativo(&self, usuario_id: i32, ativo: bool) -> RepositoryResult<Usuario> {
        use crate::models::usuario::Usuario as DbUsuario;
        use crate::schema::usuarios;

        let mut conn = self.conn()?;
        let updated = diesel::update(usuarios::table.find(usuario_id))
            .set((
                usuarios::ativo.eq(ativo),
                usuarios::atualizado_em.eq(Utc::now().naive_utc()),
            ))
            .get_result::<DbUsuario>(&mut conn)?;

        updated.try_into().map_err(Into::into)
    }
}
