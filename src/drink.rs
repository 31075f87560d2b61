//! Bebida ofrecida por la maquina
use std::collections::BTreeMap;

use serde::Deserialize;

/// Ingrediente -> volumen requerido para preparar una unidad de la bebida
pub type Bom = BTreeMap<String, u64>;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Drink {
    pub name: String,
    /// Precio en centavos
    pub price: u64,
    #[serde(default)]
    pub bom: Bom,
    pub order_code: String,
}

impl Drink {
    pub fn new(name: &str, price: u64, bom: Bom, order_code: &str) -> Drink {
        Drink {
            name: name.to_string(),
            price,
            bom,
            order_code: order_code.to_string(),
        }
    }
}

/// Formatea centavos como dolares, ej. 150 -> "1.50"
pub fn format_cents(cents: u64) -> String {
    format!("{}.{:02}", cents / 100, cents % 100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_format_cents_as_dollars() {
        assert_eq!("1.50", format_cents(150));
        assert_eq!("0.05", format_cents(5));
        assert_eq!("12.00", format_cents(1200));
    }

    #[test]
    fn should_deserialize_a_drink_without_bom() {
        let drink: Drink =
            serde_json::from_str(r#"{"name": "water", "price": 50, "order_code": "w"}"#).unwrap();
        assert_eq!(Drink::new("water", 50, Bom::new(), "w"), drink);
    }
}
