//! Constantes del motor core.

/// Prefijo que identifica a un miembro declarado de un step como operación.
///
/// Sólo los miembros cuyo nombre empieza con este prefijo se ejecutan en
/// `run`/`advance`; el resto son helpers normales.
pub const OPERATION_PREFIX: &str = "step_";

/// Versión lógica del motor. Se registra en el log al construir un runner.
pub const ENGINE_VERSION: &str = "R1.0";
