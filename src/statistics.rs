use std::{
    sync::{Arc, Mutex, RwLock},
    thread,
    time::Duration,
};

use log::error;

use crate::{
    constants::STATISTICS_WAIT_IN_MS, drink::format_cents, errors::VendingMachineError,
    vending_machine::VendingMachine,
};

pub struct StatisticsPrinter {
    dispensed: Arc<RwLock<u64>>,
    machine: Arc<Mutex<VendingMachine>>,
    finish: Arc<Mutex<bool>>,
}

impl StatisticsPrinter {
    pub fn new(dispensed: Arc<RwLock<u64>>, machine: Arc<Mutex<VendingMachine>>) -> StatisticsPrinter {
        StatisticsPrinter {
            dispensed,
            machine,
            finish: Arc::new(Mutex::new(false)),
        }
    }

    pub fn finish(&self) {
        if let Ok(mut finish) = self.finish.lock() {
            *finish = true;
            return;
        }
        error!("Error setting statistics thread to finish");
    }

    pub fn process_statistics(&self) -> Result<(), VendingMachineError> {
        loop {
            if *self.finish.lock()? {
                println!("{}", self.statistics()?);
                return Ok(());
            }

            println!("{}", self.statistics()?);

            thread::sleep(Duration::from_millis(STATISTICS_WAIT_IN_MS));
        }
    }

    pub fn statistics(&self) -> Result<String, VendingMachineError> {
        let dispensed = *self.dispensed.read()?;
        let machine = self.machine.lock()?;
        let mut statistics = format!(
            "[STATISTICS] Drinks dispensed={} | Revenue={} US$ | Ingredient=(volume/capacity) |",
            dispensed,
            format_cents(machine.ledger().current())
        );
        for level in machine.report_levels() {
            statistics.push_str(&format!(" {}=({}/{}) ", level.ingredient, level.volume, level.capacity));
        }
        Ok(statistics)
    }
}
