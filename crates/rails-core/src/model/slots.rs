//! Primitiva común a `DataBox` y `Context`.
//!
//! Un `SlotStore` es un mapa nombre -> valor opaco (`serde_json::Value`).
//! Los nombres son únicos; el orden de `list_contents` es el de inserción
//! del mapa subyacente y no es estable frente a borrados. El motor no
//! interpreta los valores.
use std::fmt;
use std::marker::PhantomData;

use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::RailsError;

/// Marca de tipo que distingue un store de otro (etiqueta en errores y
/// en `Display`).
pub trait StoreKind {
    const LABEL: &'static str;
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(transparent, bound = "")]
pub struct SlotStore<K: StoreKind> {
    slots: IndexMap<String, Value>,
    #[serde(skip)]
    _kind: PhantomData<K>,
}

impl<K: StoreKind> Default for SlotStore<K> {
    fn default() -> Self {
        Self { slots: IndexMap::new(),
               _kind: PhantomData }
    }
}

impl<K: StoreKind> SlotStore<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Encadenable: equivalente a construir con pares nombre=valor.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.put(name, value);
        self
    }

    fn missing(name: &str) -> RailsError {
        RailsError::SlotNotFound { store: K::LABEL,
                                   name: name.to_string() }
    }

    pub fn get(&self, name: &str) -> Result<&Value, RailsError> {
        self.slots.get(name).ok_or_else(|| Self::missing(name))
    }

    pub fn get_mut(&mut self, name: &str) -> Result<&mut Value, RailsError> {
        self.slots.get_mut(name).ok_or_else(|| Self::missing(name))
    }

    /// Lectura tipada: clona el valor y lo decodifica a `T`.
    pub fn get_as<T: DeserializeOwned>(&self, name: &str) -> Result<T, RailsError> {
        let value = self.get(name)?.clone();
        serde_json::from_value(value).map_err(|source| RailsError::SlotDecode { store: K::LABEL,
                                                                                name: name.to_string(),
                                                                                source })
    }

    /// Inserta o sobreescribe el slot `name`.
    pub fn put(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.slots.insert(name.into(), value.into());
    }

    /// Devuelve el valor y elimina el slot.
    pub fn pop(&mut self, name: &str) -> Result<Value, RailsError> {
        self.slots.shift_remove(name).ok_or_else(|| Self::missing(name))
    }

    pub fn delete(&mut self, name: &str) -> Result<(), RailsError> {
        self.pop(name).map(|_| ())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.slots.contains_key(name)
    }

    pub fn list_contents(&self) -> Vec<&str> {
        self.slots.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl<K: StoreKind, N: Into<String>> FromIterator<(N, Value)> for SlotStore<K> {
    fn from_iter<I: IntoIterator<Item = (N, Value)>>(iter: I) -> Self {
        let mut store = Self::new();
        for (name, value) in iter {
            store.put(name, value);
        }
        store
    }
}

impl<K: StoreKind> fmt::Display for SlotStore<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}([{}])", K::LABEL, self.list_contents().join(", "))
    }
}
