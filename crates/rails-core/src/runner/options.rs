use serde::{Deserialize, Serialize};

use crate::step::Exhaustion;

/// Opciones del runner.
///
/// `exhaustion` decide qué devuelve `Runner::advance` cuando ya no quedan
/// steps: `Silent` reporta `Advance::Completed`, `Strict` devuelve
/// `RailsError::StepsExhausted`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunnerOptions {
    pub exhaustion: Exhaustion,
}

impl RunnerOptions {
    pub fn strict() -> Self {
        Self { exhaustion: Exhaustion::Strict }
    }
}
