use crate::domain::tarefa::{
    NewSubtarefa, NewTarefa, Subtarefa, Tarefa, UpdateSubtarefa, UpdateTarefa,
};
use crate::repository::{TarefaListQuery, TarefaReader, TarefaWriter};
use crate::services::{ServiceError, ServiceResult};

pub fn get_tarefa_by_id<R>(repo: &R, tarefa_id: i32) -> ServiceResult<Tarefa>
where
    R: TarefaReader + ?Sized,
{
    repo.get_tarefa_by_id(tarefa_id)?
        .ok_or(ServiceError::NotFound)
}

pub fn list_tarefas<R>(repo: &R, query: TarefaListQuery) -> ServiceResult<(usize, Vec<Tarefa>)>
where
    R: TarefaReader + ?Sized,
{
    repo.list_tarefas(query).map_err(ServiceError::from)
}

/// Batch fetch for the `tarefas-por-ids` endpoint; unknown ids are skipped
/// rather than failing the whole request.
pub fn list_tarefas_by_ids<R>(repo: &R, ids: &[i32]) -> ServiceResult<Vec<Tarefa>>
where
    R: TarefaReader + ?Sized,
{
    if ids.is_empty() {
        return Ok(Vec::new());
    }
    repo.list_tarefas_by_ids(ids).map_err(ServiceError::from)
}

pub fn create_tarefa<R>(repo: &R, new_tarefa: &NewTarefa) -> ServiceResult<Tarefa>
where
    R: TarefaWriter + ?Sized,
{
    repo.create_tarefa(new_tarefa).map_err(ServiceError::from)
}

pub fn update_tarefa<R>(repo: &R, tarefa_id: i32, updates: &UpdateTarefa) -> ServiceResult<Tarefa>
where
    R: TarefaReader + TarefaWriter + ?Sized,
{
    if repo.get_tarefa_by_id(tarefa_id)?.is_none() {
        return Err(ServiceError::NotFound);
    }
    repo.update_tarefa(tarefa_id, updates)
        .map_err(ServiceError::from)
}

pub fn delete_tarefa<R>(repo: &R, tarefa_id: i32) -> ServiceResult<()>
where
    R: TarefaWriter + ?Sized,
{
    repo.delete_tarefa(tarefa_id).map_err(ServiceError::from)
}

pub fn list_subtarefas<R>(repo: &R, tarefa_id: i32) -> ServiceResult<Vec<Subtarefa>>
where
    R: TarefaReader + ?Sized,
{
    repo.list_subtarefas(tarefa_id).map_err(ServiceError::from)
}

pub fn create_subtarefa<R>(repo: &R, new_subtarefa: &NewSubtarefa) -> ServiceResult<Subtarefa>
where
    R: TarefaReader + TarefaWriter + ?Sized,
{
    if repo.get_tarefa_by_id(new_subtarefa.tarefa_id)?.is_none() {
        return Err(ServiceError::Validation(
            "Tarefa informada não existe".to_string(),
        ));
    }
    repo.create_subtarefa(new_subtarefa)
        .map_err(ServiceError::from)
}

pub fn update_subtarefa<R>(
    repo: &R,
    subtarefa_id: i32,
    updates: &UpdateSubtarefa,
) -> ServiceResult<Subtarefa>
where
    R: TarefaReader + TarefaWriter + ?Sized,
{
    if repo.get_subtarefa_by_id(subtarefa_id)?.is_none() {
        return Err(ServiceError::NotFound);
    }
    repo.update_subtarefa(subtarefa_id, updates)
        .map_err(ServiceError::from)
}

pub fn delete_subtarefa<R>(repo: &R, subtarefa_id: i32) -> ServiceResult<()>
where
    R: TarefaWriter + ?Sized,
{
    repo.delete_subtarefa(subtarefa_id)
        .map_err(ServiceError::from)
}
