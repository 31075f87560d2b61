//! Registro de contenedores de ingredientes de la maquina.
use std::collections::BTreeMap;

use log::debug;

use crate::{container::Container, drink::Bom, errors::VendingMachineError};

/// Dueño de todos los contenedores, indexados por nombre de ingrediente.
#[derive(Debug, Default)]
pub struct ContainerRegistry {
    containers: BTreeMap<String, Container>,
}

impl ContainerRegistry {
    pub fn new() -> ContainerRegistry {
        ContainerRegistry {
            containers: BTreeMap::new(),
        }
    }

    pub fn exists(&self, ingredient: &str) -> bool {
        self.containers.contains_key(ingredient)
    }

    /// Crea un contenedor vacio para el ingrediente. Falla si ya habia uno.
    pub fn allocate(&mut self, ingredient: &str, capacity: u64) -> Result<(), VendingMachineError> {
        if self.exists(ingredient) {
            return Err(VendingMachineError::DuplicateContainer(ingredient.to_string()));
        }
        self.containers
            .insert(ingredient.to_string(), Container::new(capacity));
        debug!("[CONTAINERS] Allocated {} with capacity {}", ingredient, capacity);
        Ok(())
    }

    pub fn capacity(&self, ingredient: &str) -> Option<u64> {
        self.containers.get(ingredient).map(Container::capacity)
    }

    pub fn volume(&self, ingredient: &str) -> Option<u64> {
        self.containers.get(ingredient).map(Container::volume)
    }

    pub fn refill(&mut self, ingredient: &str) -> Result<(), VendingMachineError> {
        let container = self.get_container_mut(ingredient)?;
        container.refill();
        debug!("[CONTAINERS] Refilled {} to {}", ingredient, container.volume());
        Ok(())
    }

    pub fn takeout(&mut self, ingredient: &str, amount: u64) -> Result<(), VendingMachineError> {
        self.get_container_mut(ingredient)?.takeout(ingredient, amount)
    }

    /// Verifica que alcance cada linea del BOM sin modificar nada.
    pub fn ensure_available(&self, bom: &Bom) -> Result<(), VendingMachineError> {
        for (ingredient, required) in bom {
            let container = self
                .containers
                .get(ingredient)
                .ok_or_else(|| VendingMachineError::ContainerNotFound(ingredient.clone()))?;
            if !container.has_at_least(*required) {
                return Err(VendingMachineError::InsufficientVolume {
                    ingredient: ingredient.clone(),
                    available: container.volume(),
                    requested: *required,
                });
            }
        }
        Ok(())
    }

    /// Consume todo el BOM o nada: si alguna linea falla ningun contenedor cambia.
    pub fn takeout_all(&mut self, bom: &Bom) -> Result<(), VendingMachineError> {
        self.ensure_available(bom)?;
        for (ingredient, required) in bom {
            self.takeout(ingredient, *required)?;
        }
        Ok(())
    }

    /// Ingredientes con contenedor, ordenados por nombre
    pub fn ingredients(&self) -> impl Iterator<Item = &str> {
        self.containers.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Container)> {
        self.containers
            .iter()
            .map(|(ingredient, container)| (ingredient.as_str(), container))
    }

    fn get_container_mut(&mut self, ingredient: &str) -> Result<&mut Container, VendingMachineError> {
        self.containers
            .get_mut(ingredient)
            .ok_or_else(|| VendingMachineError::ContainerNotFound(ingredient.to_string()))
    }
}
