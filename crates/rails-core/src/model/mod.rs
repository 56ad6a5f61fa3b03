//! Stores de slots nombrados: `DataBox` (datos del pipeline) y `Context`
//! (valores auxiliares que sobreviven entre steps).

pub mod slots;
pub mod databox;
pub mod context;

pub use context::Context;
pub use databox::DataBox;
pub use slots::{SlotStore, StoreKind};
