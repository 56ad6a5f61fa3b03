//! Core Runner implementation

use std::fmt;

use log::{info, warn};
use uuid::Uuid;

use super::builder::RunnerBuilder;
use super::options::RunnerOptions;
use crate::constants::ENGINE_VERSION;
use crate::errors::RailsError;
use crate::event::{EventStore, InMemoryEventStore, RunEvent, RunEventKind};
use crate::model::{Context, DataBox};
use crate::step::{Advance, Exhaustion, StepInstance, StepType};

pub(crate) type BoxedHook = Box<dyn FnMut(&str)>;

/// Resumen de una llamada a `Runner::run`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Steps ejecutados por esta llamada (0 si el runner ya estaba al final).
    pub steps_run: Vec<&'static str>,
    /// Posición final del runner.
    pub position: usize,
}

/// Orquestador de steps.
///
/// Mantiene la secuencia (inmutable) de tipos de step, el DataBox actual, el
/// Context compartido y una posición acotada. Por cada posición construye
/// exactamente una `StepInstance`, la ejecuta en modo atómico y guarda el
/// DataBox que devuelve para el siguiente step.
pub struct Runner<E: EventStore = InMemoryEventStore> {
    steps: Vec<StepType>,
    dbx: DataBox,
    ctx: Context,
    position: usize,
    options: RunnerOptions,
    on_entry: Option<BoxedHook>,
    on_exit: Option<BoxedHook>,
    event_store: E,
    run_id: Uuid,
}

impl Runner<InMemoryEventStore> {
    /// Runner con DataBox y Context vacíos y eventos en memoria.
    pub fn new(steps: Vec<StepType>) -> Self {
        Self::with_parts(steps, None, None)
    }

    /// Runner con DataBox/Context iniciales opcionales.
    pub fn with_parts(steps: Vec<StepType>, dbx: Option<DataBox>, ctx: Option<Context>) -> Self {
        let mut builder = Self::builder().steps(steps);
        if let Some(dbx) = dbx {
            builder = builder.databox(dbx);
        }
        if let Some(ctx) = ctx {
            builder = builder.context(ctx);
        }
        builder.build()
    }

    /// Builder con store de eventos en memoria.
    pub fn builder() -> RunnerBuilder<InMemoryEventStore> {
        RunnerBuilder::new(InMemoryEventStore::default())
    }
}

impl<E: EventStore> Runner<E> {
    /// Builder con un store de eventos propio.
    pub fn builder_with_store(event_store: E) -> RunnerBuilder<E> {
        RunnerBuilder::new(event_store)
    }

    pub(crate) fn from_builder(steps: Vec<StepType>,
                               dbx: DataBox,
                               ctx: Context,
                               options: RunnerOptions,
                               on_entry: Option<BoxedHook>,
                               on_exit: Option<BoxedHook>,
                               event_store: E)
                               -> Self {
        let run_id = Uuid::new_v4();
        info!("runner {run_id} ({ENGINE_VERSION}): {} steps, exhaustion {:?}",
              steps.len(),
              options.exhaustion);
        Self { steps,
               dbx,
               ctx,
               position: 0,
               options,
               on_entry,
               on_exit,
               event_store,
               run_id }
    }

    /// Ejecuta el siguiente step según la política de agotamiento configurada.
    pub fn advance(&mut self) -> Result<Advance, RailsError> {
        self.advance_with(self.options.exhaustion)
    }

    /// Ejecuta el siguiente step con una política explícita para esta llamada.
    ///
    /// Si el step falla, el runner conserva el DataBox tal como lo dejaron las
    /// operaciones completadas, no avanza la posición y devuelve el error sin
    /// modificar.
    pub fn advance_with(&mut self, mode: Exhaustion) -> Result<Advance, RailsError> {
        let Some(step_type) = self.steps.get(self.position).copied() else {
            return self.exhausted(mode);
        };
        let step_index = self.position;
        let step = step_type.name();

        info!("Running step: {step_index} : {step}");
        self.event_store.append_kind(self.run_id,
                                     RunEventKind::StepStarted { step_index,
                                                                 step: step.to_string() });

        let dbx = std::mem::take(&mut self.dbx);
        let mut instance = StepInstance::new(step_type, dbx, &mut self.ctx);
        if let Some(hook) = self.on_entry.as_mut() {
            instance = instance.on_entry(&mut **hook);
        }
        if let Some(hook) = self.on_exit.as_mut() {
            instance = instance.on_exit(&mut **hook);
        }
        let outcome = instance.run().map(|_| ());
        self.dbx = instance.into_databox();

        if let Err(err) = outcome {
            warn!("step {step_index} ({step}) failed: {err}");
            self.event_store.append_kind(self.run_id,
                                         RunEventKind::StepFailed { step_index,
                                                                    step: step.to_string(),
                                                                    error: err.to_string() });
            return Err(err);
        }

        self.position += 1;
        let operations = step_type.operation_names().into_iter().map(str::to_string).collect();
        self.event_store.append_kind(self.run_id,
                                     RunEventKind::StepFinished { step_index,
                                                                  step: step.to_string(),
                                                                  operations });
        if self.is_finished() {
            self.event_store.append_kind(self.run_id,
                                         RunEventKind::PipelineCompleted { steps_run: self.steps.len() });
        }
        Ok(Advance::Advanced(step))
    }

    fn exhausted(&self, mode: Exhaustion) -> Result<Advance, RailsError> {
        match mode {
            Exhaustion::Silent => {
                info!("All Steps Completed.");
                Ok(Advance::Completed)
            }
            Exhaustion::Strict => {
                warn!("No more steps to execute. Reset and try again.");
                Err(RailsError::StepsExhausted)
            }
        }
    }

    /// Avanza mientras la posición esté dentro de la secuencia. Deja el
    /// runner al final; volver a ejecutar requiere `reset`.
    pub fn run(&mut self) -> Result<RunSummary, RailsError> {
        let mut steps_run = Vec::with_capacity(self.remaining());
        while !self.is_finished() {
            if let Advance::Advanced(step) = self.advance_with(Exhaustion::Strict)? {
                steps_run.push(step);
            }
        }
        info!("All Steps Completed.");
        Ok(RunSummary { steps_run,
                        position: self.position })
    }

    /// Vuelve la posición al inicio. El DataBox acumulado se conserva; quien
    /// quiera partir de cero puede usar `replace_databox`.
    pub fn reset(&mut self) {
        self.position = 0;
        self.event_store.append_kind(self.run_id, RunEventKind::RunnerReset);
        info!("runner {} reset", self.run_id);
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn remaining(&self) -> usize {
        self.steps.len().saturating_sub(self.position)
    }

    pub fn is_finished(&self) -> bool {
        self.position >= self.steps.len()
    }

    pub fn steps(&self) -> &[StepType] {
        &self.steps
    }

    /// Tipo de step que ejecutará el próximo `advance` (None al final).
    pub fn current_step(&self) -> Option<StepType> {
        self.steps.get(self.position).copied()
    }

    pub fn options(&self) -> RunnerOptions {
        self.options
    }

    pub fn databox(&self) -> &DataBox {
        &self.dbx
    }

    pub fn databox_mut(&mut self) -> &mut DataBox {
        &mut self.dbx
    }

    /// Reemplaza el DataBox y devuelve el anterior.
    pub fn replace_databox(&mut self, dbx: DataBox) -> DataBox {
        std::mem::replace(&mut self.dbx, dbx)
    }

    pub fn context(&self) -> &Context {
        &self.ctx
    }

    pub fn context_mut(&mut self) -> &mut Context {
        &mut self.ctx
    }

    pub fn into_parts(self) -> (DataBox, Context) {
        (self.dbx, self.ctx)
    }

    pub fn run_id(&self) -> Uuid {
        self.run_id
    }

    pub fn event_store(&self) -> &E {
        &self.event_store
    }

    /// Eventos de este runner en orden de emisión.
    pub fn events(&self) -> Vec<RunEvent> {
        self.event_store.list(self.run_id)
    }
}

impl<E: EventStore> fmt::Debug for Runner<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Runner")
         .field("run_id", &self.run_id)
         .field("steps", &self.steps)
         .field("position", &self.position)
         .field("options", &self.options)
         .field("dbx", &self.dbx)
         .field("ctx", &self.ctx)
         .finish_non_exhaustive()
    }
}
