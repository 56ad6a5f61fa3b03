//! Definiciones relacionadas a Steps.
//!
//! Un Step es una unidad de trabajo compuesta por una lista ordenada de
//! operaciones. Este módulo define:
//! - `Step` / `StepType`: interfaz a nivel de tipo y su descriptor runtime.
//! - `OperationList`: descubrimiento de operaciones por prefijo, en orden de
//!   declaración y calculado una sola vez por tipo.
//! - `StepInstance`: máquina de estados de ejecución (atómica o paso a paso).
//! - `rails_step!` / `steps!` para declarar steps sin boilerplate.

pub mod definition;
pub mod instance;
pub mod macros;
mod run_result;
mod status;

pub use definition::{Operation, OperationFn, OperationList, Step, StepType};
pub use instance::{StepHook, StepInstance, StepScope};
pub use run_result::{Advance, Exhaustion};
pub use status::CursorState;
