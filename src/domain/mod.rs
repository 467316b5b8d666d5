//! Domain aggregates exposed by the service layer.

pub mod cliente;
pub mod contato;
pub mod produto;
pub mod referencia;
pub mod registro_tempo;
pub mod tarefa;
pub mod types;
pub mod usuario;
