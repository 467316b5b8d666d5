use chrono::{Duration, NaiveDate, NaiveDateTime};

use gestao_crm::domain::cliente::{NewCliente, StatusCliente, UpdateCliente};
use gestao_crm::domain::contato::NewContato;
use gestao_crm::domain::produto::NewProduto;
use gestao_crm::domain::referencia::NewBanco;
use gestao_crm::domain::registro_tempo::NewRegistroTempo;
use gestao_crm::domain::tarefa::{NewSubtarefa, NewTarefa};
use gestao_crm::domain::usuario::{NewUsuario, Perfil};
use gestao_crm::repository::errors::RepositoryError;
use gestao_crm::repository::{
    ClienteListQuery, ClienteReader, ClienteWriter, ContatoReader, ContatoWriter, ProdutoWriter,
    RealizadoTotalQuery, ReferenciaListQuery, ReferenciaReader, ReferenciaWriter,
    RegistroTempoReader, RegistroTempoWriter, TarefaListQuery, TarefaReader, TarefaWriter,
    UsuarioReader, UsuarioWriter,
};

mod common;

fn ts(dia: u32, hora: u32, minuto: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 6, dia)
        .unwrap()
        .and_hms_opt(hora, minuto, 0)
        .unwrap()
}

#[test]
fn test_cliente_repository_crud() {
    let test_db = common::TestDb::new("test_cliente_repository_crud.db");
    let repo = test_db.repo();

    let alfa = repo.create_cliente(&NewCliente::new("Alfa Ltda".into())).unwrap();
    let beta = repo.create_cliente(&NewCliente::new("Beta SA".into())).unwrap();
    assert_eq!(alfa.status, StatusCliente::Ativo);
    assert_ne!(alfa.public_id, beta.public_id);

    // Lookup by public UUID hits the same row.
    let por_uuid = repo
        .get_cliente_by_public_id(alfa.public_id)
        .unwrap()
        .unwrap();
    assert_eq!(por_uuid.id, alfa.id);

    let (total, itens) = repo.list_clientes(ClienteListQuery::new()).unwrap();
    assert_eq!(total, 2);
    assert_eq!(itens.len(), 2);

    let (search_total, search_itens) = repo
        .list_clientes(ClienteListQuery::new().search("Beta"))
        .unwrap();
    assert_eq!(search_total, 1);
    assert_eq!(search_itens[0].nome, "Beta SA");

    let atualizado = repo
        .update_cliente(beta.id, &UpdateCliente::new("Beta Holding".into()))
        .unwrap();
    assert_eq!(atualizado.nome, "Beta Holding");

    let inativado = repo
        .set_cliente_status(alfa.id, StatusCliente::Inativo)
        .unwrap();
    assert_eq!(inativado.status, StatusCliente::Inativo);

    let (ativos_total, ativos) = repo
        .list_clientes(ClienteListQuery::new().status(StatusCliente::Ativo))
        .unwrap();
    assert_eq!(ativos_total, 1);
    assert_eq!(ativos[0].id, beta.id);

    repo.delete_cliente(alfa.id).unwrap();
    assert!(repo.get_cliente_by_id(alfa.id).unwrap().is_none());
    assert!(matches!(
        repo.delete_cliente(alfa.id),
        Err(RepositoryError::NotFound)
    ));
}

#[test]
fn test_cliente_delete_remove_contatos() {
    let test_db = common::TestDb::new("test_cliente_delete_remove_contatos.db");
    let repo = test_db.repo();

    let cliente = repo.create_cliente(&NewCliente::new("Alfa".into())).unwrap();
    let contato = repo
        .create_contato(&NewContato::new(
            cliente.id,
            "João".into(),
            Some("Joao@Alfa.com ".into()),
            None,
            Some("Financeiro".into()),
        ))
        .unwrap();
    assert_eq!(contato.email.as_deref(), Some("joao@alfa.com"));

    assert_eq!(repo.list_contatos(cliente.id).unwrap().len(), 1);

    repo.delete_cliente(cliente.id).unwrap();
    assert!(repo.get_contato_by_id(contato.id).unwrap().is_none());
}

#[test]
fn test_banco_repository_crud_e_paginacao() {
    let test_db = common::TestDb::new("test_banco_repository_crud.db");
    let repo = test_db.repo();

    for i in 1..=25 {
        repo.create_banco(&NewBanco::new(format!("Banco {i:02}"), Some(format!("{i:03}"))))
            .unwrap();
    }

    let (total, pagina) = repo
        .list_bancos(ReferenciaListQuery::new().paginate(2, 10))
        .unwrap();
    assert_eq!(total, 25);
    assert_eq!(pagina.len(), 10);
    assert_eq!(pagina[0].nome, "Banco 11");

    // Search matches code as well as name.
    let (por_codigo_total, por_codigo) = repo
        .list_bancos(ReferenciaListQuery::new().search("007"))
        .unwrap();
    assert_eq!(por_codigo_total, 1);
    assert_eq!(por_codigo[0].nome, "Banco 07");

    let banco = &por_codigo[0];
    let renomeado = repo
        .update_banco(banco.id, &NewBanco::new("Banco Renomeado".into(), None))
        .unwrap();
    assert_eq!(renomeado.nome, "Banco Renomeado");
    assert_eq!(renomeado.codigo, None);

    repo.delete_banco(banco.id).unwrap();
    assert!(repo.get_banco_by_id(banco.id).unwrap().is_none());
}

#[test]
fn test_usuario_credenciais_e_listagem() {
    let test_db = common::TestDb::new("test_usuario_credenciais.db");
    let repo = test_db.repo();

    let novo = NewUsuario::new(
        "Maria".into(),
        " Maria@Empresa.com ".into(),
        "$2b$04$hashfalso".into(),
        Perfil::Admin,
    );
    let maria = repo.create_usuario(&novo).unwrap();
    assert_eq!(maria.email_usuario, "maria@empresa.com");

    let (usuario, hash) = repo
        .get_credenciais("maria@empresa.com")
        .unwrap()
        .unwrap();
    assert_eq!(usuario.id, maria.id);
    assert_eq!(hash, "$2b$04$hashfalso");

    // Duplicated email violates the unique constraint.
    assert!(matches!(
        repo.create_usuario(&NewUsuario::new(
            "Outra".into(),
            "maria@empresa.com".into(),
            "x".into(),
            Perfil::Colaborador,
        )),
        Err(RepositoryError::ConstraintViolation(_))
    ));

    let inativa = repo.set_usuario_ativo(maria.id, false).unwrap();
    assert!(!inativa.ativo);

    let (ativos, _) = repo
        .list_usuarios(gestao_crm::repository::UsuarioListQuery::new().apenas_ativos())
        .unwrap();
    assert_eq!(ativos, 0);
}

#[test]
fn test_tarefa_e_subtarefa_crud() {
    let test_db = common::TestDb::new("test_tarefa_subtarefa_crud.db");
    let repo = test_db.repo();

    let cliente = repo.create_cliente(&NewCliente::new("Alfa".into())).unwrap();
    let produto = repo
        .create_produto(&NewProduto::new("Conciliação".into(), None))
        .unwrap();
    let usuario = repo
        .create_usuario(&NewUsuario::new(
            "Maria".into(),
            "maria@empresa.com".into(),
            "$2b$04$hashfalso".into(),
            Perfil::Colaborador,
        ))
        .unwrap();

    let tarefa = repo
        .create_tarefa(&NewTarefa::new(
            "Fechamento mensal".into(),
            cliente.id,
            Some(produto.id),
            None,
            None,
            None,
        ))
        .unwrap();

    let (total, por_cliente) = repo
        .list_tarefas(TarefaListQuery::new().cliente(cliente.id))
        .unwrap();
    assert_eq!(total, 1);
    assert_eq!(por_cliente[0].id, tarefa.id);

    let subtarefa = repo
        .create_subtarefa(&NewSubtarefa::new(tarefa.id, "Conferir extratos".into(), None))
        .unwrap();
    assert_eq!(repo.list_subtarefas(tarefa.id).unwrap().len(), 1);

    // Deleting the task detaches its time entries and drops subtasks.
    let registro = repo
        .create_registro(&NewRegistroTempo::finalizado(
            usuario.id,
            Some(tarefa.id),
            None,
            ts(10, 9, 0),
            ts(10, 11, 0),
        ))
        .unwrap();

    repo.delete_tarefa(tarefa.id).unwrap();
    assert!(repo.get_subtarefa_by_id(subtarefa.id).unwrap().is_none());
    let orfao = repo.get_registro_by_id(registro.id).unwrap().unwrap();
    assert_eq!(orfao.tarefa_id, None);
    assert_eq!(orfao.horas, Some(2.0));
}

#[test]
fn test_registro_tempo_timer_e_realizado_total() {
    let test_db = common::TestDb::new("test_registro_tempo_timer.db");
    let repo = test_db.repo();

    let cliente = repo.create_cliente(&NewCliente::new("Alfa".into())).unwrap();
    let outro_cliente = repo.create_cliente(&NewCliente::new("Beta".into())).unwrap();
    let produto = repo
        .create_produto(&NewProduto::new("Conciliação".into(), None))
        .unwrap();
    let colaborador = repo
        .create_usuario(&NewUsuario::new(
            "João".into(),
            "joao@empresa.com".into(),
            "$2b$04$hashfalso".into(),
            Perfil::Colaborador,
        ))
        .unwrap();
    let tarefa_alfa = repo
        .create_tarefa(&NewTarefa::new(
            "Fechamento".into(),
            cliente.id,
            Some(produto.id),
            None,
            None,
            None,
        ))
        .unwrap();
    let tarefa_beta = repo
        .create_tarefa(&NewTarefa::new(
            "Auditoria".into(),
            outro_cliente.id,
            None,
            None,
            None,
            None,
        ))
        .unwrap();

    // 1h30 and 1h00 against the Alfa task, 2h00 against Beta.
    repo.create_registro(&NewRegistroTempo::finalizado(
        colaborador.id,
        Some(tarefa_alfa.id),
        Some("conferência".into()),
        ts(10, 9, 0),
        ts(10, 10, 30),
    ))
    .unwrap();
    repo.create_registro(&NewRegistroTempo::finalizado(
        colaborador.id,
        Some(tarefa_alfa.id),
        None,
        ts(11, 14, 0),
        ts(11, 15, 0),
    ))
    .unwrap();
    repo.create_registro(&NewRegistroTempo::finalizado(
        colaborador.id,
        Some(tarefa_beta.id),
        None,
        ts(12, 9, 0),
        ts(12, 11, 0),
    ))
    .unwrap();

    // Running timer: must not count towards the totals.
    let ativo = repo
        .create_registro(&NewRegistroTempo::iniciado(
            colaborador.id,
            None,
            None,
            ts(13, 9, 0),
        ))
        .unwrap();
    assert!(ativo.em_andamento());
    assert_eq!(repo.list_registros_ativos(colaborador.id).unwrap().len(), 1);

    let total_alfa = repo
        .realizado_total(RealizadoTotalQuery {
            usuario_id: Some(colaborador.id),
            cliente_id: Some(cliente.id),
            ..Default::default()
        })
        .unwrap();
    assert_eq!(total_alfa.horas, 2.5);
    assert_eq!(total_alfa.registros, 2);

    let total_produto = repo
        .realizado_total(RealizadoTotalQuery {
            produto_id: Some(produto.id),
            ..Default::default()
        })
        .unwrap();
    assert_eq!(total_produto.horas, 2.5);

    let total_geral = repo
        .realizado_total(RealizadoTotalQuery::default())
        .unwrap();
    assert_eq!(total_geral.horas, 4.5);
    assert_eq!(total_geral.registros, 3);

    let total_periodo = repo
        .realizado_total(RealizadoTotalQuery {
            de: Some(ts(11, 0, 0)),
            ate: Some(ts(11, 23, 59)),
            ..Default::default()
        })
        .unwrap();
    assert_eq!(total_periodo.horas, 1.0);

    // Finishing the running entry stamps hours from the span.
    let finalizado = repo
        .finalizar_registro(ativo.id, ts(13, 9, 0) + Duration::minutes(45))
        .unwrap();
    assert_eq!(finalizado.horas, Some(0.75));
    assert!(matches!(
        repo.finalizar_registro(ativo.id, ts(13, 10, 0)),
        Err(RepositoryError::ValidationError(_))
    ));

    // History is newest first and respects the cap.
    let historico = repo.historico(colaborador.id, 2).unwrap();
    assert_eq!(historico.len(), 2);
    assert!(historico[0].inicio >= historico[1].inicio);
}
