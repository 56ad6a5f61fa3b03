//! Errores de la aplicación. Los errores del motor llegan envueltos en
//! `CoreError::Pipeline`.

pub mod core_error;

pub use core_error::CoreError;
