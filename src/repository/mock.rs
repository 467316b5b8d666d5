//! Mock repository implementations for isolating services in tests.

use chrono::NaiveDateTime;
use mockall::mock;

use crate::domain::cliente::{Cliente, NewCliente, StatusCliente, UpdateCliente};
use crate::domain::contato::{Contato, NewContato, UpdateContato};
use crate::domain::produto::{NewProduto, Produto, UpdateProduto};
use crate::domain::referencia::{
    Adquirente, Atividade, Banco, NewAdquirente, NewAtividade, NewBanco, NewSistema,
    NewStatusTarefa, NewTipoContrato, NewTipoTarefa, Sistema, StatusTarefa, TipoContrato,
    TipoTarefa,
};
use crate::domain::registro_tempo::{NewRegistroTempo, RegistroTempo, TotalRealizado};
use crate::domain::tarefa::{
    NewSubtarefa, NewTarefa, Subtarefa, Tarefa, UpdateSubtarefa, UpdateTarefa,
};
use crate::domain::types::PublicId;
use crate::domain::usuario::{NewUsuario, UpdatePerfilProprio, UpdateUsuario, Usuario};
use crate::repository::errors::RepositoryResult;
use crate::repository::{
    ClienteListQuery, ClienteReader, ClienteWriter, ContatoReader, ContatoWriter, ProdutoReader,
    ProdutoWriter, RealizadoTotalQuery, ReferenciaListQuery, ReferenciaReader, ReferenciaWriter,
    RegistroListQuery, RegistroTempoReader, RegistroTempoWriter, TarefaListQuery, TarefaReader,
    TarefaWriter, UsuarioListQuery, UsuarioReader, UsuarioWriter,
};

mock! {
    pub Repository {}

    impl UsuarioReader for Repository {
        fn get_usuario_by_id(&self, id: i32) -> RepositoryResult<Option<Usuario>>;
        fn get_usuario_by_email(&self, email: &str) -> RepositoryResult<Option<Usuario>>;
        fn get_credenciais(&self, email: &str) -> RepositoryResult<Option<(Usuario, String)>>;
        fn list_usuarios(&self, query: UsuarioListQuery) -> RepositoryResult<(usize, Vec<Usuario>)>;
    }

    impl UsuarioWriter for Repository {
        fn create_usuario(&self, new_usuario: &NewUsuario) -> RepositoryResult<Usuario>;
        fn update_usuario(&self, usuario_id: i32, updates: &UpdateUsuario) -> RepositoryResult<Usuario>;
        fn update_perfil_proprio(
            &self,
            usuario_id: i32,
            updates: &UpdatePerfilProprio,
        ) -> RepositoryResult<Usuario>;
        fn set_usuario_ativo(&self, usuario_id: i32, ativo: bool) -> RepositoryResult<Usuario>;
    }

    impl ClienteReader for Repository {
        fn get_cliente_by_id(&self, id: i32) -> RepositoryResult<Option<Cliente>>;
        fn get_cliente_by_public_id(&self, public_id: PublicId) -> RepositoryResult<Option<Cliente>>;
        fn list_clientes(&self, query: ClienteListQuery) -> RepositoryResult<(usize, Vec<Cliente>)>;
    }

    impl ClienteWriter for Repository {
        fn create_cliente(&self, new_cliente: &NewCliente) -> RepositoryResult<Cliente>;
        fn update_cliente(&self, cliente_id: i32, updates: &UpdateCliente) -> RepositoryResult<Cliente>;
        fn set_cliente_status(&self, cliente_id: i32, status: StatusCliente) -> RepositoryResult<Cliente>;
        fn delete_cliente(&self, cliente_id: i32) -> RepositoryResult<()>;
    }

    impl ContatoReader for Repository {
        fn get_contato_by_id(&self, id: i32) -> RepositoryResult<Option<Contato>>;
        fn list_contatos(&self, cliente_id: i32) -> RepositoryResult<Vec<Contato>>;
    }

    impl ContatoWriter for Repository {
        fn create_contato(&self, new_contato: &NewContato) -> RepositoryResult<Contato>;
        fn update_contato(&self, contato_id: i32, updates: &UpdateContato) -> RepositoryResult<Contato>;
        fn delete_contato(&self, contato_id: i32) -> RepositoryResult<()>;
    }

    impl ProdutoReader for Repository {
        fn get_produto_by_id(&self, id: i32) -> RepositoryResult<Option<Produto>>;
        fn list_produtos(&self, query: ReferenciaListQuery) -> RepositoryResult<(usize, Vec<Produto>)>;
        fn list_produtos_by_ids(&self, ids: &[i32]) -> RepositoryResult<Vec<Produto>>;
    }

    impl ProdutoWriter for Repository {
        fn create_produto(&self, new_produto: &NewProduto) -> RepositoryResult<Produto>;
        fn update_produto(&self, produto_id: i32, updates: &UpdateProduto) -> RepositoryResult<Produto>;
        fn delete_produto(&self, produto_id: i32) -> RepositoryResult<()>;
    }

    impl TarefaReader for Repository {
        fn get_tarefa_by_id(&self, id: i32) -> RepositoryResult<Option<Tarefa>>;
        fn list_tarefas(&self, query: TarefaListQuery) -> RepositoryResult<(usize, Vec<Tarefa>)>;
        fn list_tarefas_by_ids(&self, ids: &[i32]) -> RepositoryResult<Vec<Tarefa>>;
        fn get_subtarefa_by_id(&self, id: i32) -> RepositoryResult<Option<Subtarefa>>;
        fn list_subtarefas(&self, tarefa_id: i32) -> RepositoryResult<Vec<Subtarefa>>;
    }

    impl TarefaWriter for Repository {
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

    impl RegistroTempoReader for Repository {
        fn get_registro_by_id(&self, id: i32) -> RepositoryResult<Option<RegistroTempo>>;
        fn list_registros(
            &self,
            query: RegistroListQuery,
        ) -> RepositoryResult<(usize, Vec<RegistroTempo>)>;
        fn list_registros_ativos(&self, usuario_id: i32) -> RepositoryResult<Vec<RegistroTempo>>;
        fn historico(&self, usuario_id: i32, limite: usize) -> RepositoryResult<Vec<RegistroTempo>>;
        fn realizado_total(&self, query: RealizadoTotalQuery) -> RepositoryResult<TotalRealizado>;
    }

    impl RegistroTempoWriter for Repository {
        fn create_registro(&self, new_registro: &NewRegistroTempo) -> RepositoryResult<RegistroTempo>;
        fn finalizar_registro(
            &self,
            registro_id: i32,
            fim: NaiveDateTime,
        ) -> RepositoryResult<RegistroTempo>;
        fn delete_registro(&self, registro_id: i32) -> RepositoryResult<()>;
    }

    impl ReferenciaReader for Repository {
        fn get_banco_by_id(&self, id: i32) -> RepositoryResult<Option<Banco>>;
        fn list_bancos(&self, query: ReferenciaListQuery) -> RepositoryResult<(usize, Vec<Banco>)>;
        fn get_adquirente_by_id(&self, id: i32) -> RepositoryResult<Option<Adquirente>>;
        fn list_adquirentes(&self, query: ReferenciaListQuery) -> RepositoryResult<(usize, Vec<Adquirente>)>;
        fn get_sistema_by_id(&self, id: i32) -> RepositoryResult<Option<Sistema>>;
        fn list_sistemas(&self, query: ReferenciaListQuery) -> RepositoryResult<(usize, Vec<Sistema>)>;
        fn get_tipo_contrato_by_id(&self, id: i32) -> RepositoryResult<Option<TipoContrato>>;
        fn list_tipos_contrato(&self, query: ReferenciaListQuery) -> RepositoryResult<(usize, Vec<TipoContrato>)>;
        fn get_tipo_tarefa_by_id(&self, id: i32) -> RepositoryResult<Option<TipoTarefa>>;
        fn list_tipos_tarefa(&self, query: ReferenciaListQuery) -> RepositoryResult<(usize, Vec<TipoTarefa>)>;
        fn get_status_tarefa_by_id(&self, id: i32) -> RepositoryResult<Option<StatusTarefa>>;
        fn list_status_tarefa(&self, query: ReferenciaListQuery) -> RepositoryResult<(usize, Vec<StatusTarefa>)>;
        fn get_atividade_by_id(&self, id: i32) -> RepositoryResult<Option<Atividade>>;
        fn list_atividades(&self, query: ReferenciaListQuery) -> RepositoryResult<(usize, Vec<Atividade>)>;
    }

    impl ReferenciaWriter for Repository {
        fn create_banco(&self, new_banco: &NewBanco) -> RepositoryResult<Banco>;
        fn update_banco(&self, id: i32, updates: &NewBanco) -> RepositoryResult<Banco>;
        fn delete_banco(&self, id: i32) -> RepositoryResult<()>;
        fn create_adquirente(&self, new_adquirente: &NewAdquirente) -> RepositoryResult<Adquirente>;
        fn update_adquirente(&self, id: i32, updates: &NewAdquirente) -> RepositoryResult<Adquirente>;
        fn delete_adquirente(&self, id: i32) -> RepositoryResult<()>;
        fn create_sistema(&self, new_sistema: &NewSistema) -> RepositoryResult<Sistema>;
        fn update_sistema(&self, id: i32, updates: &NewSistema) -> RepositoryResult<Sistema>;
        fn delete_sistema(&self, id: i32) -> RepositoryResult<()>;
        fn create_tipo_contrato(&self, new_tipo_contrato: &NewTipoContrato) -> RepositoryResult<TipoContrato>;
        fn update_tipo_contrato(&self, id: i32, updates: &NewTipoContrato) -> RepositoryResult<TipoContrato>;
        fn delete_tipo_contrato(&self, id: i32) -> RepositoryResult<()>;
        fn create_tipo_tarefa(&self, new_tipo_tarefa: &NewTipoTarefa) -> RepositoryResult<TipoTarefa>;
        fn update_tipo_tarefa(&self, id: i32, updates: &NewTipoTarefa) -> RepositoryResult<TipoTarefa>;
        fn delete_tipo_tarefa(&self, id: i32) -> RepositoryResult<()>;
        fn create_status_tarefa(&self, new_status_tarefa: &NewStatusTarefa) -> RepositoryResult<StatusTarefa>;
        fn update_status_tarefa(&self, id: i32, updates: &NewStatusTarefa) -> RepositoryResult<StatusTarefa>;
        fn delete_status_tarefa(&self, id: i32) -> RepositoryResult<()>;
        fn create_atividade(&self, new_atividade: &NewAtividade) -> RepositoryResult<Atividade>;
        fn update_atividade(&self, id: i32, updates: &NewAtividade) -> RepositoryResult<Atividade>;
        fn delete_atividade(&self, id: i32) -> RepositoryResult<()>;
    }
}
