//! `Context`: store auxiliar compartido por todos los steps de un runner.
//!
//! Misma primitiva que `DataBox`, pero nunca se reemplaza entero; los steps
//! sólo leen/escriben slots individuales.
use super::slots::{SlotStore, StoreKind};

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ContextSlots;

impl StoreKind for ContextSlots {
    const LABEL: &'static str = "DataRailsContext";
}

pub type Context = SlotStore<ContextSlots>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn str_representation_lists_contents() {
        let ctx = Context::new().with("a", 1).with("b", 2);
        assert_eq!(ctx.to_string(), "DataRailsContext([a, b])");
        assert_eq!(Context::new().to_string(), "DataRailsContext([])");
    }

    #[test]
    fn put_get_pop_delete() {
        let mut ctx = Context::new();
        ctx.put("test_name", "test_value");
        assert_eq!(ctx.get("test_name").unwrap(), "test_value");

        ctx.put("other", json!({"k": 1}));
        assert_eq!(ctx.pop("other").unwrap(), json!({"k": 1}));

        ctx.delete("test_name").unwrap();
        assert!(ctx.get("test_name").unwrap_err().is_not_found());
        assert!(ctx.is_empty());
    }

    #[test]
    fn errors_carry_the_context_label() {
        let ctx = Context::new();
        let err = ctx.get("missing").unwrap_err();
        assert_eq!(err.to_string(), "DataRailsContext: slot 'missing' not found");
    }

    #[test]
    fn list_contents_follows_insertion_order() {
        let mut ctx = Context::new();
        ctx.put("zeta", 1);
        ctx.put("alpha", 2);
        ctx.put("mid", 3);
        assert_eq!(ctx.list_contents(), vec!["zeta", "alpha", "mid"]);
    }
}
