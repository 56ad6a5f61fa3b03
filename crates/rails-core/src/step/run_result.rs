use serde::{Deserialize, Serialize};

/// Resultado de avanzar un cursor (de operaciones o de steps).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Se ejecutó la operación/step con este nombre.
    Advanced(&'static str),
    /// No quedaba nada por ejecutar (aviso de fin, no es un error).
    Completed,
}

impl Advance {
    pub fn is_completed(&self) -> bool {
        matches!(self, Advance::Completed)
    }
}

/// Cómo se reporta el agotamiento de un cursor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Exhaustion {
    /// Devuelve `Advance::Completed` y registra un aviso.
    #[default]
    Silent,
    /// Devuelve un error de agotamiento, en cada llamada, hasta un `reset`.
    Strict,
}

impl Exhaustion {
    pub fn from_strict(strict: bool) -> Self {
        if strict {
            Self::Strict
        } else {
            Self::Silent
        }
    }
}
