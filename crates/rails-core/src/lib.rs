//! rails-core: motor de pipelines de steps.
//!
//! Un pipeline es una secuencia ordenada de tipos de step; cada step expone
//! una lista ordenada de operaciones (descubiertas por el prefijo `step_`) que
//! mutan un `DataBox` compartido. El `Runner` construye una instancia por
//! posición, la ejecuta y pasa el DataBox resultante al siguiente step.
pub mod constants;
pub mod errors;
pub mod event;
pub mod model;
pub mod runner;
pub mod step;

pub use errors::RailsError;
pub use event::{EventStore, InMemoryEventStore, RunEvent, RunEventKind};
pub use model::{Context, DataBox};
pub use runner::{RunSummary, Runner, RunnerBuilder, RunnerOptions};
pub use step::{Advance, CursorState, Exhaustion, OperationList, Step, StepInstance, StepScope, StepType};

// Usado por `rails_step!`; no forma parte de la API pública.
#[doc(hidden)]
pub mod __private {
    pub use once_cell::sync::Lazy;
}
