//! Motor de pedidos: disponibilidad, seleccion y consumo de ingredientes.
use log::{debug, info};

use crate::{
    container_registry::ContainerRegistry,
    drink::Drink,
    drink_catalog::DrinkCatalog,
    errors::VendingMachineError,
    order::{CheckedOrder, DispensedOrder, MenuOffer, PaidOrder},
};

/// Combina el registro de contenedores con el catalogo para decidir que bebidas se pueden
/// preparar y consumir sus ingredientes.
#[derive(Debug, Default)]
pub struct FulfillmentEngine {
    containers: ContainerRegistry,
    catalog: DrinkCatalog,
}

impl FulfillmentEngine {
    pub fn new(containers: ContainerRegistry, catalog: DrinkCatalog) -> FulfillmentEngine {
        FulfillmentEngine { containers, catalog }
    }

    pub fn containers(&self) -> &ContainerRegistry {
        &self.containers
    }

    pub fn containers_mut(&mut self) -> &mut ContainerRegistry {
        &mut self.containers
    }

    pub fn catalog(&self) -> &DrinkCatalog {
        &self.catalog
    }

    pub fn catalog_mut(&mut self) -> &mut DrinkCatalog {
        &mut self.catalog
    }

    /// Una bebida esta disponible si existe y cada linea de su BOM tiene un contenedor
    /// con volumen suficiente. No modifica nada.
    pub fn check_availability(&self, drink: &str) -> bool {
        self.check_order(drink).is_ok()
    }

    pub fn check_order(&self, drink: &str) -> Result<CheckedOrder, VendingMachineError> {
        let drink = self
            .catalog
            .drink(drink)
            .ok_or_else(|| VendingMachineError::DrinkNotFound(drink.to_string()))?;
        self.containers.ensure_available(&drink.bom)?;
        Ok(CheckedOrder::new(drink.name.clone(), drink.price))
    }

    /// Bebidas que hoy se pueden preparar, en el orden del catalogo
    pub fn menu(&self) -> Vec<MenuOffer> {
        self.catalog
            .all_drinks()
            .filter(|drink| self.check_availability(&drink.name))
            .map(|drink| MenuOffer {
                drink: drink.name.clone(),
                price: drink.price,
                order_code: drink.order_code.clone(),
            })
            .collect()
    }

    /// Busca entre las bebidas candidatas la que tiene el codigo tipeado. Que este disponible
    /// lo decide despues `check_order`.
    pub fn select_drink<'d>(
        candidates: impl IntoIterator<Item = &'d Drink>,
        user_input: &str,
    ) -> Option<String> {
        let user_input = user_input.trim();
        candidates
            .into_iter()
            .find(|drink| drink.order_code == user_input)
            .map(|drink| drink.name.clone())
    }

    /// Consume todos los ingredientes de la bebida o ninguno.
    pub fn fulfill_order(&mut self, order: PaidOrder) -> Result<DispensedOrder, VendingMachineError> {
        let drink = self
            .catalog
            .drink(order.drink())
            .ok_or_else(|| VendingMachineError::DrinkNotFound(order.drink().to_string()))?;
        debug!("[ENGINE] Taking out {:?} for {}", drink.bom, drink.name);
        self.containers.takeout_all(&drink.bom)?;
        info!("[ENGINE] Dispensed {}", drink.name);
        Ok(order.dispense())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drink::Bom;

    fn bom(lines: &[(&str, u64)]) -> Bom {
        lines
            .iter()
            .map(|(ingredient, volume)| (ingredient.to_string(), *volume))
            .collect()
    }

    /// espresso 1.50 {coffee: 2, water: 5} con coffee(10) y water(20) llenos
    fn espresso_engine() -> FulfillmentEngine {
        let mut containers = ContainerRegistry::new();
        containers.allocate("coffee", 10).unwrap();
        containers.allocate("water", 20).unwrap();
        containers.refill("coffee").unwrap();
        containers.refill("water").unwrap();
        let mut catalog = DrinkCatalog::new();
        catalog
            .add(Drink::new("espresso", 150, bom(&[("coffee", 2), ("water", 5)]), "e1"))
            .unwrap();
        FulfillmentEngine::new(containers, catalog)
    }

    fn pay(engine: &FulfillmentEngine, drink: &str) -> PaidOrder {
        let checked = engine.check_order(drink).unwrap();
        let price = checked.price();
        checked.pay(price)
    }

    #[test]
    fn should_be_available_when_every_line_is_covered() {
        let engine = espresso_engine();
        assert_eq!(true, engine.check_availability("espresso"));
    }

    #[test]
    fn should_become_unavailable_once_coffee_runs_out() {
        let mut engine = espresso_engine();
        let containers = engine.containers_mut();
        for _ in 0..5 {
            assert_eq!(true, containers.takeout("coffee", 2).is_ok());
        }
        for _ in 0..5 {
            assert_eq!(true, containers.takeout("coffee", 2).is_err());
            assert_eq!(Some(0), containers.volume("coffee"));
        }
        assert_eq!(false, engine.check_availability("espresso"));
    }

    #[test]
    fn should_not_consume_anything_when_checking() {
        let engine = espresso_engine();
        engine.check_availability("espresso");
        assert_eq!(Some(10), engine.containers().volume("coffee"));
        assert_eq!(Some(20), engine.containers().volume("water"));
    }

    #[test]
    fn should_fail_closed_for_an_unknown_drink() {
        let engine = espresso_engine();
        assert_eq!(false, engine.check_availability("nonexistent"));
        assert_eq!(
            Err(VendingMachineError::DrinkNotFound("nonexistent".to_string())),
            engine.check_order("nonexistent")
        );
        assert_eq!(None, engine.catalog().bom("nonexistent"));
        assert_eq!(None, engine.catalog().price("nonexistent"));
    }

    #[test]
    fn should_be_unavailable_when_a_container_is_missing() {
        let mut engine = espresso_engine();
        engine
            .catalog_mut()
            .add(Drink::new("latte", 200, bom(&[("coffee", 2), ("milk", 4)]), "l1"))
            .unwrap();
        assert_eq!(false, engine.check_availability("latte"));
        engine.containers_mut().allocate("milk", 8).unwrap();
        assert_eq!(false, engine.check_availability("latte"));
        engine.containers_mut().refill("milk").unwrap();
        assert_eq!(true, engine.check_availability("latte"));
    }

    #[test]
    fn should_be_available_with_an_empty_bom() {
        let mut engine = espresso_engine();
        engine
            .catalog_mut()
            .add(Drink::new("air", 0, Bom::new(), "a"))
            .unwrap();
        assert_eq!(true, engine.check_availability("air"));
    }

    #[test]
    fn should_offer_only_available_drinks() {
        let mut engine = espresso_engine();
        engine
            .catalog_mut()
            .add(Drink::new("cocoa", 120, bom(&[("cacao", 3)]), "c1"))
            .unwrap();
        let menu = engine.menu();
        assert_eq!(1, menu.len());
        assert_eq!("espresso", menu[0].drink);
        assert_eq!("e1", menu[0].order_code);
    }

    #[test]
    fn should_select_the_drink_matching_the_order_code() {
        let engine = espresso_engine();
        let catalog = engine.catalog();
        assert_eq!(
            Some("espresso".to_string()),
            FulfillmentEngine::select_drink(catalog.all_drinks(), "e1")
        );
        assert_eq!(None, FulfillmentEngine::select_drink(catalog.all_drinks(), "e2"));
        assert_eq!(None, FulfillmentEngine::select_drink(std::iter::empty::<&Drink>(), "e1"));
    }

    #[test]
    fn should_select_a_catalog_drink_even_when_it_is_unavailable() {
        let mut engine = espresso_engine();
        engine
            .catalog_mut()
            .add(Drink::new("cocoa", 120, bom(&[("cacao", 3)]), "c1"))
            .unwrap();
        let selected = FulfillmentEngine::select_drink(engine.catalog().all_drinks(), "c1");
        assert_eq!(Some("cocoa".to_string()), selected);
        assert_eq!(
            Err(VendingMachineError::ContainerNotFound("cacao".to_string())),
            engine.check_order("cocoa")
        );
    }

    #[test]
    fn should_consume_the_whole_bom_when_fulfilling() {
        let mut engine = espresso_engine();
        let paid = pay(&engine, "espresso");
        let dispensed = engine.fulfill_order(paid).unwrap();
        assert_eq!("espresso", dispensed.drink);
        assert_eq!(Some(8), engine.containers().volume("coffee"));
        assert_eq!(Some(15), engine.containers().volume("water"));
    }

    #[test]
    fn should_leave_containers_untouched_when_the_check_went_stale() {
        let mut engine = espresso_engine();
        let paid = pay(&engine, "espresso");
        engine.containers_mut().takeout("water", 18).unwrap();

        let result = engine.fulfill_order(paid);

        assert_eq!(
            Err(VendingMachineError::InsufficientVolume {
                ingredient: "water".to_string(),
                available: 2,
                requested: 5,
            }),
            result
        );
        assert_eq!(Some(10), engine.containers().volume("coffee"));
        assert_eq!(Some(2), engine.containers().volume("water"));
    }
}
