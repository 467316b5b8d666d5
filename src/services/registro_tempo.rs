use chrono::NaiveDateTime;

use crate::domain::registro_tempo::{NewRegistroTempo, RegistroTempo, TotalRealizado};
use crate::domain::types::EntityRef;
use crate::repository::{
    ClienteReader, RealizadoTotalQuery, RegistroListQuery, RegistroTempoReader,
    RegistroTempoWriter,
};
use crate::services::{ServiceError, ServiceResult};

/// Hard ceiling for the `historico` endpoint, mirroring the page-size rules.
pub const LIMITE_HISTORICO: usize = 1000;

pub fn list_registros<R>(
    repo: &R,
    query: RegistroListQuery,
) -> ServiceResult<(usize, Vec<RegistroTempo>)>
where
    R: RegistroTempoReader + ?Sized,
{
    repo.list_registros(query).map_err(ServiceError::from)
}

/// Starts a timer for the user. A user can only have one running entry; the
/// frontend shows the active timer globally, so a second start is a bug on
/// the caller side and gets a validation error.
pub fn iniciar_registro<R>(
    repo: &R,
    usuario_id: i32,
    tarefa_id: Option<i32>,
    descricao: Option<String>,
    agora: NaiveDateTime,
) -> ServiceResult<RegistroTempo>
where
    R: RegistroTempoReader + RegistroTempoWriter + ?Sized,
{
    if !repo.list_registros_ativos(usuario_id)?.is_empty() {
        return Err(ServiceError::Validation(
            "Já existe um registro de tempo em andamento".to_string(),
        ));
    }

    let novo = NewRegistroTempo::iniciado(usuario_id, tarefa_id, descricao, agora);
    repo.create_registro(&novo).map_err(ServiceError::from)
}

pub fn finalizar_registro<R>(
    repo: &R,
    registro_id: i32,
    fim: NaiveDateTime,
) -> ServiceResult<RegistroTempo>
where
    R: RegistroTempoWriter + ?Sized,
{
    repo.finalizar_registro(registro_id, fim)
        .map_err(ServiceError::from)
}

/// Manually recorded span, e.g. retro-filled timesheet rows.
pub fn criar_registro_manual<R>(
    repo: &R,
    usuario_id: i32,
    tarefa_id: Option<i32>,
    descricao: Option<String>,
    inicio: NaiveDateTime,
    fim: NaiveDateTime,
) -> ServiceResult<RegistroTempo>
where
    R: RegistroTempoWriter + ?Sized,
{
    if fim <= inicio {
        return Err(ServiceError::Validation(
            "O fim do registro deve ser posterior ao início".to_string(),
        ));
    }

    let novo = NewRegistroTempo::finalizado(usuario_id, tarefa_id, descricao, inicio, fim);
    repo.create_registro(&novo).map_err(ServiceError::from)
}

pub fn list_registros_ativos<R>(repo: &R, usuario_id: i32) -> ServiceResult<Vec<RegistroTempo>>
where
    R: RegistroTempoReader + ?Sized,
{
    repo.list_registros_ativos(usuario_id)
        .map_err(ServiceError::from)
}

pub fn historico<R>(
    repo: &R,
    usuario_id: i32,
    limite: Option<usize>,
) -> ServiceResult<Vec<RegistroTempo>>
where
    R: RegistroTempoReader + ?Sized,
{
    let limite = limite
        .filter(|l| *l > 0)
        .unwrap_or(LIMITE_HISTORICO)
        .min(LIMITE_HISTORICO);
    repo.historico(usuario_id, limite).map_err(ServiceError::from)
}

pub fn delete_registro<R>(repo: &R, registro_id: i32) -> ServiceResult<()>
where
    R: RegistroTempoWriter + ?Sized,
{
    repo.delete_registro(registro_id).map_err(ServiceError::from)
}

/// Realized-time aggregation. The client filter may arrive as an internal id
/// or a public UUID; it is resolved before the query reaches the store.
#[allow(clippy::too_many_arguments)]
pub fn realizado_total<R>(
    repo: &R,
    usuario_id: Option<i32>,
    tarefa_id: Option<i32>,
    cliente_ref: Option<EntityRef>,
    produto_id: Option<i32>,
    de: Option<NaiveDateTime>,
    ate: Option<NaiveDateTime>,
) -> ServiceResult<TotalRealizado>
where
    R: RegistroTempoReader + ClienteReader + ?Sized,
{
    let cliente_id = cliente_ref
        .map(|r| super::cliente::resolve_cliente(repo, r))
        .transpose()?
        .map(|cliente| cliente.id);

    let query = RealizadoTotalQuery {
        usuario_id,
        tarefa_id,
        cliente_id,
        produto_id,
        de,
        ate,
    };

    repo.realizado_total(query).map_err(ServiceError::from)
}

#[cfg(all(test, feature = "test-mocks"))]
mod tests {
    use super::*;
    use crate::domain::cliente::{Cliente, StatusCliente};
    use crate::domain::types::PublicId;
    use crate::repository::mock::MockRepository;
    use chrono::{NaiveDate, Utc};

    fn ts(h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 6, 10)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    #[test]
    fn iniciar_rejects_second_active_entry() {
        let mut repo = MockRepository::new();
        repo.expect_list_registros_ativos().returning(|usuario_id| {
            Ok(vec![RegistroTempo {
                id: 1,
                usuario_id,
                tarefa_id: None,
                descricao: None,
                inicio: ts(9),
                fim: None,
                horas: None,
            }])
        });

        assert!(matches!(
            iniciar_registro(&repo, 1, None, None, ts(10)),
            Err(ServiceError::Validation(_))
        ));
    }

    #[test]
    fn manual_entry_requires_positive_span() {
        let repo = MockRepository::new();
        assert!(matches!(
            criar_registro_manual(&repo, 1, None, None, ts(10), ts(10)),
            Err(ServiceError::Validation(_))
        ));
    }

    #[test]
    fn realizado_total_resolves_uuid_client_filter() {
        let public_id = PublicId::new();
        let now = Utc::now().naive_utc();
        let mut repo = MockRepository::new();
        repo.expect_get_cliente_by_public_id().returning(move |pid| {
            Ok(Some(Cliente {
                id: 42,
                public_id: pid,
                nome: "Empresa".into(),
                status: StatusCliente::Ativo,
                criado_em: now,
                atualizado_em: now,
            }))
        });
        repo.expect_realizado_total()
            .withf(|query| query.cliente_id == Some(42))
            .returning(|_| {
                Ok(TotalRealizado {
                    horas: 1.5,
                    registros: 3,
                })
            });

        let total = realizado_total(
            &repo,
            Some(1),
            None,
            Some(EntityRef::Public(public_id)),
            None,
            None,
            None,
        )
        .unwrap();

        assert_eq!(total.tempo_realizado_ms(), 5_400_000);
        assert_eq!(total.registros, 3);
    }

    #[test]
    fn historico_caps_requested_limit() {
        let mut repo = MockRepository::new();
        repo.expect_historico()
            .withf(|_, limite| *limite == LIMITE_HISTORICO)
            .returning(|_, _| Ok(Vec::new()));

        historico(&repo, 1, Some(5000)).unwrap();
    }
}
