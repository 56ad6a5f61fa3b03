//! `DataBox`: contenedor de datos que fluye de step en step.
//!
//! Lo posee en exclusiva el step en ejecución; el runner sólo mueve la
//! referencia entre steps y nunca toca su contenido.
use serde_json::Value;

use super::slots::{SlotStore, StoreKind};
use crate::errors::RailsError;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DataBoxSlots;

impl StoreKind for DataBoxSlots {
    const LABEL: &'static str = "DataBox";
}

pub type DataBox = SlotStore<DataBoxSlots>;

// Alias orientados a datasets; misma semántica que get/put/pop/delete.
impl SlotStore<DataBoxSlots> {
    pub fn get_df(&self, name: &str) -> Result<&Value, RailsError> {
        self.get(name)
    }

    pub fn put_df(&mut self, name: impl Into<String>, df: impl Into<Value>) {
        self.put(name, df);
    }

    pub fn pop_df(&mut self, name: &str) -> Result<Value, RailsError> {
        self.pop(name)
    }

    pub fn delete_df(&mut self, name: &str) -> Result<(), RailsError> {
        self.delete(name)
    }
}
