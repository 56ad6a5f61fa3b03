//! Tipos de evento emitidos por el `Runner`.
//!
//! El log es append-only y sólo observa: el runner nunca lo lee para decidir
//! qué ejecutar (la posición vive en el propio runner).
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunEventKind {
    /// Se construyó la instancia del step en `step_index` y va a ejecutarse.
    StepStarted { step_index: usize, step: String },
    /// El step ejecutó todas sus operaciones.
    StepFinished {
        step_index: usize,
        step: String,
        operations: Vec<String>,
    },
    /// Una operación del step devolvió error; la posición no avanza.
    StepFailed { step_index: usize, step: String, error: String },
    /// Se consumió la secuencia completa de steps.
    PipelineCompleted { steps_run: usize },
    /// La posición volvió al inicio.
    RunnerReset,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunEvent {
    pub seq: u64,
    pub run_id: Uuid,
    pub kind: RunEventKind,
    pub ts: DateTime<Utc>,
}
