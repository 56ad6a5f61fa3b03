use std::fmt;

use crate::constants::OPERATION_PREFIX;
use crate::errors::RailsError;

use super::instance::{StepInstance, StepScope};
use crate::model::{Context, DataBox};

/// Firma de una operación: recibe el scope del step (DataBox + Context).
pub type OperationFn = fn(&mut StepScope<'_>) -> Result<(), RailsError>;

/// Operación descubierta: nombre declarado + función.
#[derive(Clone, Copy)]
pub struct Operation {
    pub name: &'static str,
    pub run: OperationFn,
}

impl fmt::Debug for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Operation").field(&self.name).finish()
    }
}

/// Lista ordenada de operaciones de un tipo de step.
///
/// Invariante: el orden es el de declaración, nunca alfabético, y es el mismo
/// para todas las instancias del tipo.
#[derive(Debug, Clone, Default)]
pub struct OperationList {
    ops: Vec<Operation>,
}

impl OperationList {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Filtra los miembros declarados quedándose con los que llevan el
    /// prefijo de operación, respetando el orden de declaración.
    pub fn discover(declared: &[(&'static str, OperationFn)]) -> Self {
        Self::inherit(&Self::empty(), declared)
    }

    /// Descubrimiento con herencia: primero las operaciones del step base en
    /// su orden; un miembro derivado con el mismo nombre reemplaza la entrada
    /// base en su posición; las operaciones nuevas se agregan al final.
    pub fn inherit(base: &OperationList, declared: &[(&'static str, OperationFn)]) -> Self {
        let mut ops = base.ops.clone();
        for &(name, run) in declared.iter().filter(|(name, _)| name.starts_with(OPERATION_PREFIX)) {
            match ops.iter_mut().find(|op| op.name == name) {
                Some(existing) => existing.run = run,
                None => ops.push(Operation { name, run }),
            }
        }
        Self { ops }
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.ops.iter().map(|op| op.name).collect()
    }

    pub fn get(&self, index: usize) -> Option<&Operation> {
        self.ops.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Operation> {
        self.ops.iter()
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }
}

/// Interfaz a nivel de tipo de un Step.
///
/// Normalmente se implementa con `rails_step!`, que calcula la lista de
/// operaciones una única vez por tipo.
pub trait Step: 'static {
    /// Nombre amigable (el nombre del tipo).
    const NAME: &'static str;

    fn operations() -> &'static OperationList;

    /// Crea una instancia de este step ligada al DataBox y al Context.
    fn bind(dbx: DataBox, ctx: &mut Context) -> StepInstance<'_>
        where Self: Sized
    {
        StepInstance::new(StepType::of::<Self>(), dbx, ctx)
    }
}

/// Descriptor runtime de un tipo de step. Es lo que el runner guarda en su
/// secuencia; construir una instancia es responsabilidad del runner.
#[derive(Clone, Copy)]
pub struct StepType {
    name: &'static str,
    operations: fn() -> &'static OperationList,
}

impl StepType {
    pub fn of<S: Step>() -> Self {
        Self { name: S::NAME,
               operations: S::operations }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn operations(&self) -> &'static OperationList {
        (self.operations)()
    }

    pub fn operation_names(&self) -> Vec<&'static str> {
        self.operations().names()
    }
}

impl fmt::Debug for StepType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StepType")
         .field("name", &self.name)
         .field("operations", &self.operation_names())
         .finish()
    }
}

impl fmt::Display for StepType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

impl PartialEq for StepType {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && std::ptr::eq(self.operations(), other.operations())
    }
}

impl Eq for StepType {}
