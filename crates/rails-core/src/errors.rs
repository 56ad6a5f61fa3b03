//! Errores específicos del core.
//!
//! Dos familias: errores de lookup (slot inexistente en un store) y señales
//! de agotamiento (operaciones o steps consumidos en modo estricto). Los
//! errores propios de una operación viajan en `Failed`/`Other` y el motor
//! los devuelve tal cual, sin envolverlos.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RailsError {
    #[error("{store}: slot '{name}' not found")]
    SlotNotFound { store: &'static str, name: String },
    #[error("{store}: slot '{name}' could not be decoded: {source}")]
    SlotDecode {
        store: &'static str,
        name: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("step {step}: all operations have been executed")]
    OperationsExhausted { step: &'static str },
    #[error("no more steps to execute")]
    StepsExhausted,
    #[error("{0}")]
    Failed(String),
    #[error("{0}")]
    Other(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl RailsError {
    /// Atajo para que una operación reporte un fallo propio con mensaje.
    pub fn failed(msg: impl Into<String>) -> Self {
        Self::Failed(msg.into())
    }

    /// Envuelve un error arbitrario producido dentro de una operación.
    pub fn other<E>(err: E) -> Self
        where E: std::error::Error + Send + Sync + 'static
    {
        Self::Other(Box::new(err))
    }

    /// `true` para las dos señales de agotamiento (operaciones o steps).
    pub fn is_exhaustion(&self) -> bool {
        matches!(self, Self::OperationsExhausted { .. } | Self::StepsExhausted)
    }

    /// `true` si el error proviene de un lookup sobre un store.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::SlotNotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_names_store_and_slot() {
        let err = RailsError::SlotNotFound { store: "DataBox", name: "orders".into() };
        assert_eq!(err.to_string(), "DataBox: slot 'orders' not found");
        assert!(err.is_not_found());
        assert!(!err.is_exhaustion());
    }

    #[test]
    fn exhaustion_variants_are_classified() {
        assert!(RailsError::StepsExhausted.is_exhaustion());
        assert!(RailsError::OperationsExhausted { step: "Load" }.is_exhaustion());
        assert!(!RailsError::failed("boom").is_exhaustion());
    }

    #[test]
    fn other_keeps_the_inner_message() {
        let io = std::io::Error::other("disco lleno");
        assert_eq!(RailsError::other(io).to_string(), "disco lleno");
    }
}
