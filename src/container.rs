//! Contenedor de un ingrediente.
use crate::errors::VendingMachineError;

/// Almacenamiento fisico de un ingrediente. El volumen siempre esta entre 0 y la capacidad.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Container {
    capacity: u64,
    volume: u64,
}

impl Container {
    /// Crea el contenedor vacio
    pub fn new(capacity: u64) -> Container {
        Container {
            capacity,
            volume: 0,
        }
    }

    pub fn capacity(&self) -> u64 {
        self.capacity
    }

    pub fn volume(&self) -> u64 {
        self.volume
    }

    pub fn refill(&mut self) {
        self.volume = self.capacity;
    }

    pub fn has_at_least(&self, amount: u64) -> bool {
        self.volume >= amount
    }

    /// Saca `amount` del contenedor. Si no alcanza no modifica el volumen.
    pub fn takeout(&mut self, ingredient: &str, amount: u64) -> Result<(), VendingMachineError> {
        match self.volume.checked_sub(amount) {
            Some(remaining) => {
                self.volume = remaining;
                Ok(())
            }
            None => Err(VendingMachineError::InsufficientVolume {
                ingredient: ingredient.to_string(),
                available: self.volume,
                requested: amount,
            }),
        }
    }
}
