use serde::Deserialize;
use validator::Validate;

use crate::domain::cliente::{NewCliente, StatusCliente, UpdateCliente};
use crate::domain::contato::UpdateContato;
use crate::repository::ClienteListQuery;

#[derive(Debug, Default, Deserialize)]
/// `GET /api/clientes` query string: pagination, search and status filter.
pub struct ClienteListParams {
    pub page: Option<usize>,
    pub limit: Option<usize>,
    pub search: Option<String>,
    pub status: Option<StatusCliente>,
}

impl ClienteListParams {
    pub fn query(&self) -> ClienteListQuery {
        let mut query = ClienteListQuery::new().paginate(
            crate::pagination::clamp_page(self.page),
            crate::pagination::clamp_per_page(self.limit),
        );
        if let Some(status) = self.status {
            query = query.status(status);
        }
        if let Some(term) = self
            .search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
        {
            query = query.search(term);
        }
        query
    }
}

#[derive(Debug, Deserialize, Validate)]
/// Body of `POST /api/clientes` and `PUT /api/clientes/{ref}`.
pub struct SaveClienteForm {
    #[validate(length(min = 1))]
    pub nome: String,
}

impl From<&SaveClienteForm> for NewCliente {
    fn from(form: &SaveClienteForm) -> Self {
        NewCliente::new(form.nome.clone())
    }
}

impl From<&SaveClienteForm> for UpdateCliente {
    fn from(form: &SaveClienteForm) -> Self {
        UpdateCliente::new(form.nome.clone())
    }
}

#[derive(Debug, Deserialize, Validate)]
/// Body of the contact endpoints under a client.
pub struct ContatoForm {
    #[validate(length(min = 1))]
    pub nome: String,
    #[validate(email)]
    pub email: Option<String>,
    pub telefone: Option<String>,
    pub cargo: Option<String>,
}

impl From<&ContatoForm> for UpdateContato {
    fn from(form: &ContatoForm) -> Self {
        UpdateContato::new(
            form.nome.clone(),
            form.email.clone(),
            form.telefone.clone(),
            form.cargo.clone(),
        )
    }
}
