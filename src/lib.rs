//! DataRails Library
//!
//! Este crate actúa como la capa de aplicación sobre `rails-core`:
//! - Expone `config` para cargar la configuración desde el entorno.
//! - Expone `errors` para los errores de la aplicación.
//! - Expone `workflow` con un pipeline de ejemplo (reporte de ventas).
//!
//! Puede usarse desde `main.rs` o por otros crates/clientes.

pub mod config;
pub mod errors;
pub mod workflow;

pub use rails_core;
