/// Estado del cursor de operaciones de un `StepInstance`.
///
/// Transiciones:
/// - `Fresh` -> `Running(0)` en el primer `advance`
/// - `Running(n)` -> `Running(n + 1)` al consumir una operación
/// - `Running(len)` -> `Exhausted` cuando ya no quedan operaciones
/// - cualquiera -> `Fresh` con `reset`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorState {
    /// Cursor sin inicializar.
    Fresh,
    /// Cursor activo; el valor es la cantidad de operaciones consumidas.
    Running(usize),
    /// Todas las operaciones fueron consumidas.
    Exhausted,
}
