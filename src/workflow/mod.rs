//! Pipeline de ejemplo: reporte de ventas.
//!
//! `LoadOrders` -> `CleanOrders` -> `SummarizeOrders`. El último step
//! reemplaza el DataBox completo por el resumen.

pub mod steps;

use rails_core::{steps, Context, DataBox, Runner};
use serde_json::Value;

use crate::config::AppConfig;
pub use steps::{CleanOrders, LoadOrders, SummarizeOrders};

/// Cantidad mínima por defecto para que un pedido sobreviva a la limpieza.
pub const DEFAULT_MIN_QUANTITY: i64 = 1;

/// Arma el runner del reporte. `orders` se deja en el slot `raw_orders`.
pub fn sales_report_runner(config: &AppConfig, orders: Value) -> Runner {
    let dbx = DataBox::new().with("raw_orders", orders);
    let ctx = Context::new().with("min_quantity", DEFAULT_MIN_QUANTITY);
    Runner::builder().steps(steps![LoadOrders, CleanOrders, SummarizeOrders])
                     .databox(dbx)
                     .context(ctx)
                     .options(config.runner)
                     .build()
}
