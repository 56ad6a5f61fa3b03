//! Builder para `Runner`.
//!
//! ```ignore
//! let mut runner = Runner::builder()
//!     .step::<Load>()
//!     .step::<Clean>()
//!     .context(Context::new().with("threshold", 10))
//!     .exhaustion(Exhaustion::Strict)
//!     .build();
//! ```

use super::core::{BoxedHook, Runner};
use super::options::RunnerOptions;
use crate::event::EventStore;
use crate::model::{Context, DataBox};
use crate::step::{Exhaustion, Step, StepType};

pub struct RunnerBuilder<E: EventStore> {
    steps: Vec<StepType>,
    dbx: DataBox,
    ctx: Context,
    options: RunnerOptions,
    on_entry: Option<BoxedHook>,
    on_exit: Option<BoxedHook>,
    event_store: E,
}

impl<E: EventStore> RunnerBuilder<E> {
    pub fn new(event_store: E) -> Self {
        Self { steps: Vec::new(),
               dbx: DataBox::new(),
               ctx: Context::new(),
               options: RunnerOptions::default(),
               on_entry: None,
               on_exit: None,
               event_store }
    }

    /// Añade un tipo de step al final de la secuencia.
    #[inline]
    pub fn step<S: Step>(mut self) -> Self {
        self.steps.push(StepType::of::<S>());
        self
    }

    #[inline]
    pub fn steps(mut self, steps: impl IntoIterator<Item = StepType>) -> Self {
        self.steps.extend(steps);
        self
    }

    pub fn databox(mut self, dbx: DataBox) -> Self {
        self.dbx = dbx;
        self
    }

    pub fn context(mut self, ctx: Context) -> Self {
        self.ctx = ctx;
        self
    }

    pub fn options(mut self, options: RunnerOptions) -> Self {
        self.options = options;
        self
    }

    pub fn exhaustion(mut self, exhaustion: Exhaustion) -> Self {
        self.options.exhaustion = exhaustion;
        self
    }

    /// Hook invocado al entrar a cada step ejecutado por el runner.
    pub fn on_step_entry(mut self, hook: impl FnMut(&str) + 'static) -> Self {
        self.on_entry = Some(Box::new(hook));
        self
    }

    /// Hook invocado al salir de cada step que terminó sin error.
    pub fn on_step_exit(mut self, hook: impl FnMut(&str) + 'static) -> Self {
        self.on_exit = Some(Box::new(hook));
        self
    }

    pub fn build(self) -> Runner<E> {
        Runner::from_builder(self.steps,
                             self.dbx,
                             self.ctx,
                             self.options,
                             self.on_entry,
                             self.on_exit,
                             self.event_store)
    }
}
