//! Catalogo de bebidas que se pueden comprar.
use std::collections::HashMap;

use log::debug;

use crate::{
    drink::{Bom, Drink},
    errors::VendingMachineError,
};

/// Bebidas en orden de insercion, con indice por nombre.
#[derive(Debug, Default)]
pub struct DrinkCatalog {
    drinks: Vec<Drink>,
    index: HashMap<String, usize>,
}

impl DrinkCatalog {
    pub fn new() -> DrinkCatalog {
        DrinkCatalog {
            drinks: Vec::new(),
            index: HashMap::new(),
        }
    }

    pub fn exists(&self, drink: &str) -> bool {
        self.index.contains_key(drink)
    }

    /// Agrega la bebida. Falla sin modificar el catalogo si el nombre ya existe.
    pub fn add(&mut self, drink: Drink) -> Result<(), VendingMachineError> {
        if self.exists(&drink.name) {
            return Err(VendingMachineError::DuplicateDrink(drink.name));
        }
        debug!("[CATALOG] Added {} with code {}", drink.name, drink.order_code);
        self.index.insert(drink.name.clone(), self.drinks.len());
        self.drinks.push(drink);
        Ok(())
    }

    pub fn drink(&self, drink: &str) -> Option<&Drink> {
        self.index.get(drink).map(|position| &self.drinks[*position])
    }

    pub fn all_drinks(&self) -> impl Iterator<Item = &Drink> {
        self.drinks.iter()
    }

    pub fn price(&self, drink: &str) -> Option<u64> {
        self.drink(drink).map(|drink| drink.price)
    }

    pub fn bom(&self, drink: &str) -> Option<&Bom> {
        self.drink(drink).map(|drink| &drink.bom)
    }

    pub fn order_code(&self, drink: &str) -> Option<&str> {
        self.drink(drink).map(|drink| drink.order_code.as_str())
    }
}
