use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::types::TypeConstraintError;
use crate::domain::usuario::{
    NewUsuario as DomainNewUsuario, Perfil, UpdateUsuario as DomainUpdateUsuario,
    Usuario as DomainUsuario,
};

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::usuarios)]
/// Diesel model for [`crate::domain::usuario::Usuario`]. Carries the stored
/// password hash, which is stripped during conversion to the domain type.
pub struct Usuario {
    pub id: i32,
    pub nome_usuario: String,
    pub email_usuario: String,
    pub senha_login: String,
    pub perfil: String,
    pub ativo: bool,
    pub criado_em: NaiveDateTime,
    pub atualizado_em: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::usuarios)]
/// Insertable form of [`Usuario`].
pub struct NewUsuario<'a> {
    pub nome_usuario: &'a str,
    pub email_usuario: &'a str,
    pub senha_login: &'a str,
    pub perfil: &'a str,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::usuarios)]
/// Data used when updating a [`Usuario`] record.
pub struct UpdateUsuario<'a> {
    pub nome_usuario: &'a str,
    pub email_usuario: &'a str,
    pub perfil: &'a str,
    pub senha_login: Option<&'a str>,
    pub atualizado_em: NaiveDateTime,
}

impl TryFrom<Usuario> for DomainUsuario {
    type Error = TypeConstraintError;

    fn try_from(usuario: Usuario) -> Result<Self, Self::Error> {
        Ok(Self {
            id: usuario.id,
            nome_usuario: usuario.nome_usuario,
            email_usuario: usuario.email_usuario,
            perfil: usuario.perfil.parse::<Perfil>()?,
            ativo: usuario.ativo,
            criado_em: usuario.criado_em,
            atualizado_em: usuario.atualizado_em,
        })
    }
}

impl<'a> From<&'a DomainNewUsuario> for NewUsuario<'a> {
    fn from(usuario: &'a DomainNewUsuario) -> Self {
        Self {
            nome_usuario: &usuario.nome_usuario,
            email_usuario: &usuario.email_usuario,
            senha_login: &usuario.senha_login,
            perfil: usuario.perfil.as_str(),
        }
    }
}

impl<'a> From<&'a DomainUpdateUsuario> for UpdateUsuario<'a> {
    fn from(usuario: &'a DomainUpdateUsuario) -> Self {
        Self {
            nome_usuario: &usuario.nome_usuario,
            email_usuario: &usuario.email_usuario,
            perfil: usuario.perfil.as_str(),
            senha_login: usuario.senha_login.as_deref(),
            atualizado_em: chrono::Utc::now().naive_utc(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn db_usuario_into_domain_strips_password() {
        let now = Utc::now().naive_utc();
        let db = Usuario {
            id: 1,
            nome_usuario: "Maria".into(),
            email_usuario: "maria@empresa.com".into(),
            senha_login: "$2b$12$hash".into(),
            perfil: "admin".into(),
            ativo: true,
            criado_em: now,
            atualizado_em: now,
        };
        let domain = DomainUsuario::try_from(db).unwrap();
        assert_eq!(domain.perfil, Perfil::Admin);
        assert_eq!(domain.email_usuario, "maria@empresa.com");
    }

    #[test]
    fn unknown_perfil_fails_conversion() {
        let now = Utc::now().naive_utc();
        let db = Usuario {
            id: 1,
            nome_usuario: "X".into(),
            email_usuario: "x@empresa.com".into(),
            senha_login: "h".into(),
            perfil: "root".into(),
            ativo: true,
            criado_em: now,
            atualizado_em: now,
        };
        assert!(DomainUsuario::try_from(db).is_err());
    }
}
