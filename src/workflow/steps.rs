//! Steps concretos del reporte de ventas.
use rails_core::{rails_step, DataBox, RailsError, StepScope};
use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub sku: String,
    pub quantity: i64,
    pub unit_price: f64,
}

fn orders(scope: &StepScope<'_>, slot: &str) -> Result<Vec<Order>, RailsError> {
    scope.dbx.get_as(slot)
}

fn store_orders(scope: &mut StepScope<'_>, slot: &str, orders: &[Order]) -> Result<(), RailsError> {
    let value = serde_json::to_value(orders).map_err(RailsError::other)?;
    scope.dbx.put(slot, value);
    Ok(())
}

rails_step! {
    /// Valida y normaliza los pedidos crudos.
    pub struct LoadOrders;
    fn step_parse(scope) {
        let raw = scope.dbx.pop("raw_orders")?;
        let parsed: Vec<Order> = serde_json::from_value(raw).map_err(RailsError::other)?;
        store_orders(scope, "orders", &parsed)
    }
    fn step_normalize_skus(scope) {
        let mut parsed = orders(scope, "orders")?;
        for order in parsed.iter_mut() {
            order.sku = order.sku.trim().to_ascii_uppercase();
        }
        store_orders(scope, "orders", &parsed)
    }
}

rails_step! {
    /// Descarta pedidos por debajo de `min_quantity` (del context).
    pub struct CleanOrders;
    fn step_filter_quantity(scope) {
        let min: i64 = scope.ctx.get_as("min_quantity")?;
        let (kept, dropped): (Vec<Order>, Vec<Order>) =
            orders(scope, "orders")?.into_iter().partition(|o| o.quantity >= min);
        scope.ctx.put("dropped_orders", dropped.len());
        store_orders(scope, "orders", &kept)
    }
}

rails_step! {
    /// Reemplaza el DataBox por un resumen por SKU.
    pub struct SummarizeOrders;
    fn step_summarize(scope) {
        let parsed = orders(scope, "orders")?;
        let mut per_sku = serde_json::Map::new();
        let mut total = 0.0;
        for order in &parsed {
            let amount = order.quantity as f64 * order.unit_price;
            total += amount;
            let entry = per_sku.entry(order.sku.clone()).or_insert(json!(0.0));
            *entry = json!(entry.as_f64().unwrap_or_default() + amount);
        }
        scope.replace_databox(DataBox::new().with("per_sku", per_sku)
                                            .with("total", total)
                                            .with("order_count", parsed.len()));
        Ok(())
    }
}
