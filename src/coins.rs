//! Monedas aceptadas y cobro de las bebidas (no se aceptan tarjetas).
use log::debug;

use crate::{customer::Customer, errors::VendingMachineError};

/// Resultado del cobro
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Payment {
    Paid { inserted: u64, change: u64 },
    Insufficient { refund: u64 },
}

/// Monedas con su valor, en el orden en que se piden al cobrar
#[derive(Debug, Default)]
pub struct CoinRegistry {
    coins: Vec<(String, u64)>,
}

impl CoinRegistry {
    pub fn new() -> CoinRegistry {
        CoinRegistry { coins: Vec::new() }
    }

    pub fn exists(&self, coin: &str) -> bool {
        self.coin_value(coin).is_some()
    }

    pub fn add(&mut self, coin: &str, value: u64) -> Result<(), VendingMachineError> {
        if self.exists(coin) {
            return Err(VendingMachineError::DuplicateCoin(coin.to_string()));
        }
        self.coins.push((coin.to_string(), value));
        Ok(())
    }

    pub fn coin_names(&self) -> impl Iterator<Item = &str> {
        self.coins.iter().map(|(name, _)| name.as_str())
    }

    pub fn coin_value(&self, coin: &str) -> Option<u64> {
        self.coins
            .iter()
            .find(|(name, _)| name == coin)
            .map(|(_, value)| *value)
    }

    /// Le pide monedas al cliente en el orden en que fueron aceptadas, hasta cubrir `price`.
    pub fn checkout<C: Customer + ?Sized>(&self, price: u64, customer: &mut C) -> Payment {
        let mut inserted: u64 = 0;
        if price == 0 {
            return Payment::Paid { inserted, change: 0 };
        }
        for (coin, value) in &self.coins {
            let value = *value;
            let amount = customer.insert_coins(coin, value);
            inserted = inserted.saturating_add(value.saturating_mul(amount));
            debug!("[CHECKOUT] {} x {} inserted, total {}", amount, coin, inserted);
            if inserted >= price {
                return Payment::Paid {
                    inserted,
                    change: inserted - price,
                };
            }
        }
        Payment::Insufficient { refund: inserted }
    }
}
