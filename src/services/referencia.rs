//! Service functions for the lookup registries.
//!
//! One get/list/create/update/delete quintet per registry, stamped from a
//! macro since the bodies only differ in which repository method they call.

use crate::domain::referencia::{
    Adquirente, Atividade, Banco, NewAdquirente, NewAtividade, NewBanco, NewSistema,
    NewStatusTarefa, NewTipoContrato, NewTipoTarefa, Sistema, StatusTarefa, TipoContrato,
    TipoTarefa,
};
use crate::repository::{ReferenciaListQuery, ReferenciaReader, ReferenciaWriter};
use crate::services::{ServiceError, ServiceResult};

macro_rules! referencia_service {
    ($domain:ty, $new_domain:ty, $get:ident, $list:ident, $create:ident, $update:ident, $delete:ident) => {
        pub fn $get<R>(repo: &R, id: i32) -> ServiceResult<$domain>
        where
            R: ReferenciaReader + ?Sized,
        {
            repo.$get(id)?.ok_or(ServiceError::NotFound)
        }

        pub fn $list<R>(
            repo: &R,
            query: ReferenciaListQuery,
        ) -> ServiceResult<(usize, Vec<$domain>)>
        where
            R: ReferenciaReader + ?Sized,
        {
            repo.$list(query).map_err(ServiceError::from)
        }

        pub fn $create<R>(repo: &R, novo: &$new_domain) -> ServiceResult<$domain>
        where
            R: ReferenciaWriter + ?Sized,
        {
            repo.$create(novo).map_err(ServiceError::from)
        }

        pub fn $update<R>(repo: &R, id: i32, updates: &$new_domain) -> ServiceResult<$domain>
        where
            R: ReferenciaReader + ReferenciaWriter + ?Sized,
        {
            if repo.$get(id)?.is_none() {
                return Err(ServiceError::NotFound);
            }
            repo.$update(id, updates).map_err(ServiceError::from)
        }

        pub fn $delete<R>(repo: &R, id: i32) -> ServiceResult<()>
        where
            R: ReferenciaWriter + ?Sized,
        {
            repo.$delete(id).map_err(ServiceError::from)
        }
    };
}

referencia_service!(
    Banco,
    NewBanco,
    get_banco_by_id,
    list_bancos,
    create_banco,
    update_banco,
    delete_banco
);
referencia_service!(
    Adquirente,
    NewAdquirente,
    get_adquirente_by_id,
    list_adquirentes,
    create_adquirente,
    update_adquirente,
    delete_adquirente
);
referencia_service!(
    Sistema,
    NewSistema,
    get_sistema_by_id,
    list_sistemas,
    create_sistema,
    update_sistema,
    delete_sistema
);
referencia_service!(
    TipoContrato,
    NewTipoContrato,
    get_tipo_contrato_by_id,
    list_tipos_contrato,
    create_tipo_contrato,
    update_tipo_contrato,
    delete_tipo_contrato
);
referencia_service!(
    TipoTarefa,
    NewTipoTarefa,
    get_tipo_tarefa_by_id,
    list_tipos_tarefa,
    create_tipo_tarefa,
    update_tipo_tarefa,
    delete_tipo_tarefa
);
referencia_service!(
    StatusTarefa,
    NewStatusTarefa,
    get_status_tarefa_by_id,
    list_status_tarefa,
    create_status_tarefa,
    update_status_tarefa,
    delete_status_tarefa
);
referencia_service!(
    Atividade,
    NewAtividade,
    get_atividade_by_id,
    list_atividades,
    create_atividade,
    update_atividade,
    delete_atividade
);
