//! Runner: ejecuta una secuencia ordenada de tipos de step, enhebrando el
//! DataBox de uno al siguiente.
//!
//! Provee el runner (disciplina por índice), su builder y las opciones de
//! configuración.

pub mod builder;
pub mod core;
pub mod options;

pub use builder::RunnerBuilder;
pub use self::core::{RunSummary, Runner};
pub use options::RunnerOptions;
