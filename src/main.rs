//! Binario de demostración: ejecuta el reporte de ventas.
//!
//! Uso:
//!   datarails           # ejecución atómica de todo el pipeline
//!   datarails step      # modo stepper: un step por vez, con trazas
use datarails::config::AppConfig;
use datarails::errors::CoreError;
use datarails::workflow::sales_report_runner;
use log::info;
use rails_core::{Advance, Exhaustion};
use serde_json::json;

fn main() -> Result<(), CoreError> {
    let config = AppConfig::from_env()?;
    env_logger::Builder::new().filter_level(config.log_level)
                              .parse_default_env()
                              .init();

    let orders = json!([
        {"sku": "ab-1", "quantity": 3, "unit_price": 2.5},
        {"sku": " cd-2", "quantity": 1, "unit_price": 10.0},
        {"sku": "ab-1", "quantity": 0, "unit_price": 2.5},
        {"sku": "ef-3 ", "quantity": 4, "unit_price": 0.75},
    ]);
    let mut runner = sales_report_runner(&config, orders);

    let stepper = std::env::args().nth(1).is_some_and(|arg| arg == "step");
    if stepper {
        while let Advance::Advanced(step) = runner.advance_with(Exhaustion::Silent)? {
            info!("{step} done; databox now {}", runner.databox());
        }
    } else {
        let summary = runner.run()?;
        info!("ran {} steps", summary.steps_run.len());
    }

    let report = serde_json::to_string_pretty(runner.databox()).map_err(|e| CoreError::Internal(e.to_string()))?;
    println!("{report}");
    println!("{}", runner.context());
    Ok(())
}
