//! Ejecución de un Step: modo atómico (`run`) y modo paso a paso (`advance`).
use std::fmt;

use log::{debug, info, warn};

use super::definition::StepType;
use super::run_result::{Advance, Exhaustion};
use super::status::CursorState;
use crate::errors::RailsError;
use crate::model::{Context, DataBox};

/// Hook de entrada/salida. Recibe el nombre del step.
pub type StepHook<'a> = &'a mut dyn FnMut(&str);

/// Lo que ve cada operación: el DataBox (en propiedad mientras dura el step)
/// y el Context compartido por referencia.
///
/// Asignar un nuevo valor a `dbx` reemplaza el contenedor completo; el runner
/// recoge lo que quede aquí al terminar el step.
pub struct StepScope<'a> {
    pub dbx: DataBox,
    pub ctx: &'a mut Context,
}

impl<'a> StepScope<'a> {
    pub fn new(dbx: DataBox, ctx: &'a mut Context) -> Self {
        Self { dbx, ctx }
    }

    /// Reemplaza el DataBox y devuelve el anterior.
    pub fn replace_databox(&mut self, dbx: DataBox) -> DataBox {
        std::mem::replace(&mut self.dbx, dbx)
    }
}

/// Una ejecución concreta de un tipo de step.
///
/// El runner crea una instancia fresca por posición y la descarta tras
/// recuperar el DataBox con `into_databox`.
pub struct StepInstance<'a> {
    step_type: StepType,
    scope: StepScope<'a>,
    on_entry: Option<StepHook<'a>>,
    on_exit: Option<StepHook<'a>>,
    cursor: CursorState,
}

impl<'a> StepInstance<'a> {
    pub fn new(step_type: StepType, dbx: DataBox, ctx: &'a mut Context) -> Self {
        Self { step_type,
               scope: StepScope::new(dbx, ctx),
               on_entry: None,
               on_exit: None,
               cursor: CursorState::Fresh }
    }

    pub fn on_entry(mut self, hook: StepHook<'a>) -> Self {
        self.on_entry = Some(hook);
        self
    }

    pub fn on_exit(mut self, hook: StepHook<'a>) -> Self {
        self.on_exit = Some(hook);
        self
    }

    pub fn step_type(&self) -> StepType {
        self.step_type
    }

    pub fn name(&self) -> &'static str {
        self.step_type.name()
    }

    pub fn state(&self) -> CursorState {
        self.cursor
    }

    pub fn databox(&self) -> &DataBox {
        &self.scope.dbx
    }

    pub fn databox_mut(&mut self) -> &mut DataBox {
        &mut self.scope.dbx
    }

    pub fn context(&self) -> &Context {
        &*self.scope.ctx
    }

    pub fn context_mut(&mut self) -> &mut Context {
        &mut *self.scope.ctx
    }

    /// Consume la instancia devolviendo el DataBox tal como quedó.
    pub fn into_databox(self) -> DataBox {
        self.scope.dbx
    }

    /// Vuelve el cursor a `Fresh`. Las mutaciones ya aplicadas se mantienen.
    pub fn reset(&mut self) {
        self.cursor = CursorState::Fresh;
    }

    /// Ejecuta todas las operaciones en orden, con los hooks de entrada y
    /// salida. Recorre la lista completa sin mirar ni tocar el cursor de
    /// `advance`; retomar desde donde quedó `advance` no está soportado.
    pub fn run(&mut self) -> Result<&DataBox, RailsError> {
        let name = self.name();
        if let Some(hook) = self.on_entry.as_deref_mut() {
            hook(name);
        }

        for op in self.step_type.operations().iter() {
            debug!("{name}: running {}", op.name);
            (op.run)(&mut self.scope)?;
        }

        if let Some(hook) = self.on_exit.as_deref_mut() {
            hook(name);
        }
        Ok(&self.scope.dbx)
    }

    /// Ejecuta la siguiente operación. Sin hooks: quien avanza paso a paso
    /// se encarga de sus propias notificaciones.
    ///
    /// Si ya no quedan operaciones, `Silent` devuelve `Advance::Completed` y
    /// `Strict` devuelve `RailsError::OperationsExhausted` en cada llamada
    /// hasta un `reset`.
    pub fn advance(&mut self, mode: Exhaustion) -> Result<Advance, RailsError> {
        let consumed = match self.cursor {
            CursorState::Fresh => 0,
            CursorState::Running(n) => n,
            CursorState::Exhausted => return self.exhausted(mode),
        };

        let ops = self.step_type.operations();
        let Some(op) = ops.get(consumed) else {
            self.cursor = CursorState::Exhausted;
            return self.exhausted(mode);
        };

        // el cursor avanza antes de ejecutar: una operación que falla queda consumida
        self.cursor = if consumed + 1 == ops.len() {
            CursorState::Exhausted
        } else {
            CursorState::Running(consumed + 1)
        };
        debug!("{}: advancing to {}", self.name(), op.name);
        (op.run)(&mut self.scope)?;
        Ok(Advance::Advanced(op.name))
    }

    fn exhausted(&self, mode: Exhaustion) -> Result<Advance, RailsError> {
        match mode {
            Exhaustion::Silent => {
                info!("{}: all steps have been executed", self.name());
                Ok(Advance::Completed)
            }
            Exhaustion::Strict => {
                warn!("{}: advance called on an exhausted step", self.name());
                Err(RailsError::OperationsExhausted { step: self.name() })
            }
        }
    }
}

impl fmt::Display for StepInstance<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Debug for StepInstance<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StepInstance")
         .field("step", &self.name())
         .field("cursor", &self.cursor)
         .field("dbx", &self.scope.dbx)
         .finish_non_exhaustive()
    }
}
