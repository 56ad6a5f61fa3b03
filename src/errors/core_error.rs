use rails_core::RailsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Error interno: {0}")]
    Internal(String),
    #[error("Error en IO: {0}")]
    Io(#[from] std::io::Error),
    #[error("Error de configuración: {0}")]
    Config(String),
    #[error("Error del pipeline: {0}")]
    Pipeline(#[from] RailsError),
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn test_internal_variant_format() {
        let err = CoreError::Internal("algo malo".into());
        assert_eq!(err.to_string(), "Error interno: algo malo");
    }

    #[test]
    fn test_io_variant_from() {
        let io_err = std::io::Error::other("falló IO");
        let err: CoreError = io_err.into();
        assert_eq!(err.to_string(), "Error en IO: falló IO");
    }

    #[test]
    fn test_pipeline_variant_from() {
        let err: CoreError = RailsError::StepsExhausted.into();
        assert_eq!(err.to_string(), "Error del pipeline: no more steps to execute");
    }
}
