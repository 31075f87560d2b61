//! Recaudacion acumulada de la maquina
use log::debug;

#[derive(Debug, Default)]
pub struct RevenueLedger {
    revenue: u64,
}

impl RevenueLedger {
    pub fn new() -> RevenueLedger {
        RevenueLedger { revenue: 0 }
    }

    /// Empieza un nuevo ciclo de negocio
    pub fn reset(&mut self) {
        self.revenue = 0;
    }

    pub fn add(&mut self, amount: u64) {
        self.revenue = self.revenue.saturating_add(amount);
        debug!("[LEDGER] Added {}, revenue is {}", amount, self.revenue);
    }

    pub fn current(&self) -> u64 {
        self.revenue
    }
}
