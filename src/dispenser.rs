//! Dispenser de la maquina. Procesa los pedidos de la cola.
use std::sync::{Arc, Condvar, Mutex, RwLock};

use log::{debug, info};

use crate::{
    errors::VendingMachineError,
    order::OrderOutcome,
    orders_queue::{OrdersQueue, QueuedOrder},
    vending_machine::VendingMachine,
};

/// Representa a un dispenser de la maquina.
/// Tiene referencias a la cola de pedidos (junto con su variable condicional), a la maquina compartida
/// y al contador de bebidas entregadas.
pub struct Dispenser {
    id: usize,
    orders_queue: Arc<Mutex<OrdersQueue>>,
    orders_cond: Arc<Condvar>,
    machine: Arc<Mutex<VendingMachine>>,
    orders_dispensed: Arc<RwLock<u64>>,
}

impl Dispenser {
    pub fn new(
        id: usize,
        orders_queue: Arc<Mutex<OrdersQueue>>,
        orders_cond: Arc<Condvar>,
        machine: Arc<Mutex<VendingMachine>>,
        orders_dispensed: Arc<RwLock<u64>>,
    ) -> Dispenser {
        Dispenser {
            id,
            orders_queue,
            orders_cond,
            machine,
            orders_dispensed,
        }
    }

    pub fn handle_orders(&self) -> Result<(), VendingMachineError> {
        loop {
            let order = {
                let mut orders = self
                    .orders_cond
                    .wait_while(self.orders_queue.lock()?, |queue| {
                        queue.is_empty() && !queue.finished
                    })?;

                if orders.is_empty() && orders.finished {
                    return Ok(());
                }

                orders
                    .pop()
                    .ok_or(VendingMachineError::EmptyQueueWhenNotExpected)?
            };

            debug!("[DISPENSER {}] Takes order {}", self.id, order.id);
            self.process_order(order)?;
        }
    }

    /// El lock de la maquina se mantiene durante todo el pedido, asi el chequeo de disponibilidad
    /// y el consumo de ingredientes no se intercalan con los de otro dispenser.
    fn process_order(&self, mut order: QueuedOrder) -> Result<OrderOutcome, VendingMachineError> {
        let outcome = {
            let mut machine = self.machine.lock()?;
            machine.serve(&mut order.customer)
        };
        match &outcome {
            OrderOutcome::Dispensed(dispensed) => {
                info!(
                    "[DISPENSER {}] Order {}: dispensed {}",
                    self.id, order.id, dispensed.drink
                );
                self.increase_dispensed_orders()?;
            }
            OrderOutcome::Rejected { reason, refund } => info!(
                "[DISPENSER {}] Skipped order {}, {:?} (refund {})",
                self.id, order.id, reason, refund
            ),
            OrderOutcome::Abandoned { drink, refund } => info!(
                "[DISPENSER {}] Order {} abandoned, {} not paid (refund {})",
                self.id, order.id, drink, refund
            ),
            OrderOutcome::AdminCommand { keystroke, .. } => info!(
                "[DISPENSER {}] Order {} ran admin command {}",
                self.id, order.id, keystroke
            ),
        }
        Ok(outcome)
    }

    fn increase_dispensed_orders(&self) -> Result<(), VendingMachineError> {
        let mut dispensed = self.orders_dispensed.write()?;
        *dispensed += 1;
        Ok(())
    }
}
