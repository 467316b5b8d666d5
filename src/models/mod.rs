//! Diesel models mirroring `crate::schema`, converted into domain types at
//! the repository boundary.

pub mod cliente;
pub mod config;
pub mod contato;
pub mod produto;
pub mod referencia;
pub mod registro_tempo;
pub mod tarefa;
pub mod usuario;
