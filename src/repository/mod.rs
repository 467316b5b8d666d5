use chrono::NaiveDateTime;

use crate::db::DbPool;
use crate::domain::{
    cliente::{Cliente, NewCliente, StatusCliente, UpdateCliente},
    contato::{Contato, NewContato, UpdateContato},
    produto::{NewProduto, Produto, UpdateProduto},
    referencia::{
        Adquirente, Atividade, Banco, NewAdquirente, NewAtividade, NewBanco, NewSistema,
        NewStatusTarefa, NewTipoContrato, NewTipoTarefa, Sistema, StatusTarefa, TipoContrato,
        TipoTarefa,
    },
    registro_tempo::{NewRegistroTempo, RegistroTempo, TotalRealizado},
    tarefa::{NewSubtarefa, NewTarefa, Subtarefa, Tarefa, UpdateSubtarefa, UpdateTarefa},
    types::PublicId,
    usuario::{NewUsuario, UpdatePerfilProprio, UpdateUsuario, Usuario},
};
use crate::repository::errors::RepositoryResult;

pub mod cliente;
pub mod contato;
pub mod errors;
#[cfg(feature = "test-mocks")]
pub mod mock;
pub mod produto;
pub mod referencia;
pub mod registro_tempo;
pub mod tarefa;
pub mod usuario;

/// Diesel-backed implementation of every repository trait in this module.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub(crate) fn conn(&self) -> RepositoryResult<crate::db::DbConnection> {
        Ok(self.pool.get()?)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Pagination {
    pub page: usize,
    pub per_page: usize,
}

impl Pagination {
    pub fn offset(&self) -> i64 {
        let page = if self.page == 0 { 1 } else { self.page };
        ((page - 1) * self.per_page) as i64
    }

    pub fn limit(&self) -> i64 {
        self.per_page as i64
    }
}

#[derive(Debug, Clone, Default)]
pub struct ClienteListQuery {
    pub status: Option<StatusCliente>,
    pub search: Option<String>,
    pub pagination: Option<Pagination>,
}

impl ClienteListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(mut self, status: StatusCliente) -> Self {
        self.status = Some(status);
        self
    }

    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct UsuarioListQuery {
    pub apenas_ativos: bool,
    pub search: Option<String>,
    pub pagination: Option<Pagination>,
}

impl UsuarioListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apenas_ativos(mut self) -> Self {
        self.apenas_ativos = true;
        self
    }

    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct TarefaListQuery {
    pub cliente_id: Option<i32>,
    pub produto_id: Option<i32>,
    pub responsavel_id: Option<i32>,
    pub search: Option<String>,
    pub pagination: Option<Pagination>,
}

impl TarefaListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cliente(mut self, cliente_id: i32) -> Self {
        self.cliente_id = Some(cliente_id);
        self
    }

    pub fn produto(mut self, produto_id: i32) -> Self {
        self.produto_id = Some(produto_id);
        self
    }

    pub fn responsavel(mut self, responsavel_id: i32) -> Self {
        self.responsavel_id = Some(responsavel_id);
        self
    }

    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}

/// Shared list query for the lookup registries.
#[derive(Debug, Clone, Default)]
pub struct ReferenciaListQuery {
    pub search: Option<String>,
    pub pagination: Option<Pagination>,
}

impl ReferenciaListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct RegistroListQuery {
    pub usuario_id: Option<i32>,
    pub de: Option<NaiveDateTime>,
    pub ate: Option<NaiveDateTime>,
    pub pagination: Option<Pagination>,
}

impl RegistroListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn usuario(mut self, usuario_id: i32) -> Self {
        self.usuario_id = Some(usuario_id);
        self
    }

    pub fn periodo(mut self, de: Option<NaiveDateTime>, ate: Option<NaiveDateTime>) -> Self {
        self.de = de;
        self.ate = ate;
        self
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}

/// Filter set accepted by the realized-time aggregation. All fields are
/// optional and combine with AND semantics.
#[derive(Debug, Clone, Copy, Default)]
pub struct RealizadoTotalQuery {
    pub usuario_id: Option<i32>,
    pub tarefa_id: Option<i32>,
    pub cliente_id: Option<i32>,
    pub produto_id: Option<i32>,
    pub de: Option<NaiveDateTime>,
    pub ate: Option<NaiveDateTime>,
}

pub trait UsuarioReader {
    fn get_usuario_by_id(&self, id: i32) -> RepositoryResult<Option<Usuario>>;
    fn get_usuario_by_email(&self, email: &str) -> RepositoryResult<Option<Usuario>>;
    /// Returns the user together with the stored password hash.
    fn get_credenciais(&self, email: &str) -> RepositoryResult<Option<(Usuario, String)>>;
    fn list_usuarios(&self, query: UsuarioListQuery) -> RepositoryResult<(usize, Vec<Usuario>)>;
}

pub trait UsuarioWriter {
    fn create_usuario(&self, new_usuario: &NewUsuario) -> RepositoryResult<Usuario>;
    fn update_usuario(&self, usuario_id: i32, updates: &UpdateUsuario) -> RepositoryResult<Usuario>;
    fn update_perfil_proprio(
        &self,
        usuario_id: i32,
        updates: &UpdatePerfilProprio,
    ) -> RepositoryResult<Usuario>;
    fn set_usuario_ativo(&self, usuario_id: i32, ativo: bool) -> RepositoryResult<Usuario>;
}

pub trait ClienteReader {
    fn get_cliente_by_id(&self, id: i32) -> RepositoryResult<Option<Cliente>>;
    fn get_cliente_by_public_id(&self, public_id: PublicId) -> RepositoryResult<Option<Cliente>>;
    fn list_clientes(&self, query: ClienteListQuery) -> RepositoryResult<(usize, Vec<Cliente>)>;
}

pub trait ClienteWriter {
    fn create_cliente(&self, new_cliente: &NewCliente) -> RepositoryResult<Cliente>;
    fn update_cliente(&self, cliente_id: i32, updates: &UpdateCliente) -> RepositoryResult<Cliente>;
    fn set_cliente_status(
        &self,
        cliente_id: i32,
        status: StatusCliente,
    ) -> RepositoryResult<Cliente>;
    fn delete_cliente(&self, cliente_id: i32) -> RepositoryResult<()>;
}

pub trait ContatoReader {
    fn get_contato_by_id(&self, id: i32) -> RepositoryResult<Option<Contato>>;
    fn list_contatos(&self, cliente_id: i32) -> RepositoryResult<Vec<Contato>>;
}

pub trait ContatoWriter {
    fn create_contato(&self, new_contato: &NewContato) -> RepositoryResult<Contato>;
    fn update_contato(&self, contato_id: i32, updates: &UpdateContato) -> RepositoryResult<Contato>;
    fn delete_contato(&self, contato_id: i32) -> RepositoryResult<()>;
}

pub trait ProdutoReader {
    fn get_produto_by_id(&self, id: i32) -> RepositoryResult<Option<Produto>>;
    fn list_produtos(&self, query: ReferenciaListQuery) -> RepositoryResult<(usize, Vec<Produto>)>;
    fn list_produtos_by_ids(&self, ids: &[i32]) -> RepositoryResult<Vec<Produto>>;
}

pub trait ProdutoWriter {
    fn create_produto(&self, new_produto: &NewProduto) -> RepositoryResult<Produto>;
    fn update_produto(&self, produto_id: i32, updates: &UpdateProduto) -> RepositoryResult<Produto>;
    fn delete_produto(&self, produto_id: i32) -> RepositoryResult<()>;
}

pub trait TarefaReader {
    fn get_tarefa_by_id(&self, id: i32) -> RepositoryResult<Option<Tarefa>>;
    fn list_tarefas(&self, query: TarefaListQuery) -> RepositoryResult<(usize, Vec<Tarefa>)>;
    fn list_tarefas_by_ids(&self, ids: &[i32]) -> RepositoryResult<Vec<Tarefa>>;
    fn get_subtarefa_by_id(&self, id: i32) -> RepositoryResult<Option<Subtarefa>>;
    fn list_subtarefas(&self, tarefa_id: i32) -> RepositoryResult<Vec<Subtarefa>>;
}

pub trait TarefaWriter {
    fn create_tarefa(&self, new_tarefa: &NewTarefa) -> RepositoryResult<Tarefa>;
    fn update_tarefa(&self, tarefa_id: i32, updates: &UpdateTarefa) -> RepositoryResult<Tarefa>;
    fn delete_tarefa(&self, tarefa_id: i32) -> RepositoryResult<()>;
    fn create_subtarefa(&self, new_subtarefa: &NewSubtarefa) -> RepositoryResult<Subtarefa>;
    fn update_subtarefa(
        &self,
        subtarefa_id: i32,
        updates: &UpdateSubtarefa,
    ) -> RepositoryResult<Subtarefa>;
    fn delete_subtarefa(&self, subtarefa_id: i32) -> RepositoryResult<()>;
}

pub trait RegistroTempoReader {
    fn get_registro_by_id(&self, id: i32) -> RepositoryResult<Option<RegistroTempo>>;
    fn list_registros(
        &self,
        query: RegistroListQuery,
    ) -> RepositoryResult<(usize, Vec<RegistroTempo>)>;
    /// Entries with no end timestamp, newest first.
    fn list_registros_ativos(&self, usuario_id: i32) -> RepositoryResult<Vec<RegistroTempo>>;
    fn historico(&self, usuario_id: i32, limite: usize) -> RepositoryResult<Vec<RegistroTempo>>;
    fn realizado_total(&self, query: RealizadoTotalQuery) -> RepositoryResult<TotalRealizado>;
}

pub trait RegistroTempoWriter {
    fn create_registro(&self, new_registro: &NewRegistroTempo) -> RepositoryResult<RegistroTempo>;
    /// Stamps `fim` on a running entry and stores the hour total. Finishing
    /// an already-finished entry is a validation error.
    fn finalizar_registro(
        &self,
        registro_id: i32,
        fim: NaiveDateTime,
    ) -> RepositoryResult<RegistroTempo>;
    fn delete_registro(&self, registro_id: i32) -> RepositoryResult<()>;
}

pub trait ReferenciaReader {
    fn get_banco_by_id(&self, id: i32) -> RepositoryResult<Option<Banco>>;
    fn list_bancos(&self, query: ReferenciaListQuery) -> RepositoryResult<(usize, Vec<Banco>)>;
    fn get_adquirente_by_id(&self, id: i32) -> RepositoryResult<Option<Adquirente>>;
    fn list_adquirentes(
        &self,
        query: ReferenciaListQuery,
    ) -> RepositoryResult<(usize, Vec<Adquirente>)>;
    fn get_sistema_by_id(&self, id: i32) -> RepositoryResult<Option<Sistema>>;
    fn list_sistemas(&self, query: ReferenciaListQuery) -> RepositoryResult<(usize, Vec<Sistema>)>;
    fn get_tipo_contrato_by_id(&self, id: i32) -> RepositoryResult<Option<TipoContrato>>;
    fn list_tipos_contrato(
        &self,
        query: ReferenciaListQuery,
    ) -> RepositoryResult<(usize, Vec<TipoContrato>)>;
    fn get_tipo_tarefa_by_id(&self, id: i32) -> RepositoryResult<Option<TipoTarefa>>;
    fn list_tipos_tarefa(
        &self,
        query: ReferenciaListQuery,
    ) -> RepositoryResult<(usize, Vec<TipoTarefa>)>;
    fn get_status_tarefa_by_id(&self, id: i32) -> RepositoryResult<Option<StatusTarefa>>;
    fn list_status_tarefa(
        &self,
        query: ReferenciaListQuery,
    ) -> RepositoryResult<(usize, Vec<StatusTarefa>)>;
    fn get_atividade_by_id(&self, id: i32) -> RepositoryResult<Option<Atividade>>;
    fn list_atividades(
        &self,
        query: ReferenciaListQuery,
    ) -> RepositoryResult<(usize, Vec<Atividade>)>;
}

pub trait ReferenciaWriter {
    fn create_banco(&self, new_banco: &NewBanco) -> RepositoryResult<Banco>;
    fn update_banco(&self, id: i32, updates: &NewBanco) -> RepositoryResult<Banco>;
    fn delete_banco(&self, id: i32) -> RepositoryResult<()>;
    fn create_adquirente(&self, new_adquirente: &NewAdquirente) -> RepositoryResult<Adquirente>;
    fn update_adquirente(&self, id: i32, updates: &NewAdquirente) -> RepositoryResult<Adquirente>;
    fn delete_adquirente(&self, id: i32) -> RepositoryResult<()>;
    fn create_sistema(&self, new_sistema: &NewSistema) -> RepositoryResult<Sistema>;
    fn update_sistema(&self, id: i32, updates: &NewSistema) -> RepositoryResult<Sistema>;
    fn delete_sistema(&self, id: i32) -> RepositoryResult<()>;
    fn create_tipo_contrato(
        &self,
        new_tipo_contrato: &NewTipoContrato,
    ) -> RepositoryResult<TipoContrato>;
    fn update_tipo_contrato(
        &self,
        id: i32,
        updates: &NewTipoContrato,
    ) -> RepositoryResult<TipoContrato>;
    fn delete_tipo_contrato(&self, id: i32) -> RepositoryResult<()>;
    fn create_tipo_tarefa(&self, new_tipo_tarefa: &NewTipoTarefa) -> RepositoryResult<TipoTarefa>;
    fn update_tipo_tarefa(&self, id: i32, updates: &NewTipoTarefa) -> RepositoryResult<TipoTarefa>;
    fn delete_tipo_tarefa(&self, id: i32) -> RepositoryResult<()>;
    fn create_status_tarefa(
        &self,
        new_status_tarefa: &NewStatusTarefa,
    ) -> RepositoryResult<StatusTarefa>;
    fn update_status_tarefa(
        &self,
        id: i32,
        updates: &NewStatusTarefa,
    ) -> RepositoryResult<StatusTarefa>;
    fn delete_status_tarefa(&self, id: i32) -> RepositoryResult<()>;
    fn create_atividade(&self, new_atividade: &NewAtividade) -> RepositoryResult<Atividade>;
    fn update_atividade(&self, id: i32, updates: &NewAtividade) -> RepositoryResult<Atividade>;
    fn delete_atividade(&self, id: i32) -> RepositoryResult<()>;
}
