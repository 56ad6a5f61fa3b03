//! Configuración central de la aplicación.
//! Carga variables de entorno (.env) una sola vez y expone `AppConfig`.
//!
//! Variables:
//! - `DATARAILS_EXHAUSTION`: `silent` (defecto) o `strict`.
//! - `DATARAILS_LOG_LEVEL`: nivel de log por defecto (`info`); `RUST_LOG`
//!   tiene prioridad al inicializar el logger.
use std::env;
use std::str::FromStr;

use log::LevelFilter;
use once_cell::sync::Lazy;
use rails_core::{Exhaustion, RunnerOptions};

use crate::errors::CoreError;

// Carga perezosa del archivo .env una sola vez.
static DOTENV_LOADED: Lazy<()> = Lazy::new(|| {
    let _ = dotenvy::dotenv(); // ignora error si no existe .env
});

/// Configuración global de la aplicación.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Opciones que se pasan a cada `Runner`.
    pub runner: RunnerOptions,
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self { runner: RunnerOptions::default(),
               log_level: LevelFilter::Info }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, CoreError> {
        Lazy::force(&DOTENV_LOADED);
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Igual que `from_env` pero con una fuente de variables arbitraria.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, CoreError> {
        let mut config = Self::default();
        if let Some(raw) = lookup("DATARAILS_EXHAUSTION") {
            config.runner.exhaustion = parse_exhaustion(&raw)?;
        }
        if let Some(raw) = lookup("DATARAILS_LOG_LEVEL") {
            config.log_level = LevelFilter::from_str(raw.trim())
                .map_err(|_| CoreError::Config(format!("DATARAILS_LOG_LEVEL inválido: {raw}")))?;
        }
        Ok(config)
    }
}

fn parse_exhaustion(raw: &str) -> Result<Exhaustion, CoreError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "silent" => Ok(Exhaustion::Silent),
        "strict" => Ok(Exhaustion::Strict),
        other => Err(CoreError::Config(format!("DATARAILS_EXHAUSTION inválido: {other}"))),
    }
}
