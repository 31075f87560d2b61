//! Pone a funcionar la maquina: lector de pedidos, dispensers y estadisticas.
use std::{
    path::PathBuf,
    sync::{Arc, Condvar, Mutex, RwLock},
    thread::{self, JoinHandle},
};

use log::{error, info};

use crate::{
    constants::N_DISPENSERS, customer::Customer, dispenser::Dispenser, errors::VendingMachineError,
    order::OrderOutcome, orders_queue::OrdersQueue, orders_reader::read_and_add_orders,
    statistics::StatisticsPrinter, vending_machine::VendingMachine,
};

pub struct MachineOperator {
    machine: Arc<Mutex<VendingMachine>>,
}

/// Cola, variable condicional y contador de una corrida de `manage_orders`
struct OrdersRun {
    orders_queue: Arc<Mutex<OrdersQueue>>,
    orders_cond: Arc<Condvar>,
    orders_dispensed: Arc<RwLock<u64>>,
}

impl OrdersRun {
    fn new() -> OrdersRun {
        OrdersRun {
            orders_queue: Arc::new(Mutex::new(OrdersQueue::new())),
            orders_cond: Arc::new(Condvar::new()),
            orders_dispensed: Arc::new(RwLock::new(0)),
        }
    }
}

impl MachineOperator {
    pub fn new(machine: VendingMachine) -> MachineOperator {
        MachineOperator {
            machine: Arc::new(Mutex::new(machine)),
        }
    }

    /// Atiende todos los pedidos del archivo con `N_DISPENSERS` dispensers en paralelo.
    /// Cada llamada usa su propia cola y devuelve las bebidas entregadas en esa corrida.
    pub fn manage_orders(&self, orders_path: PathBuf) -> Result<u64, VendingMachineError> {
        let run = OrdersRun::new();
        let reader = spawn_reader(&run, orders_path);
        let dispensers = self.spawn_dispensers(&run);
        let statistics = Arc::new(StatisticsPrinter::new(
            run.orders_dispensed.clone(),
            self.machine.clone(),
        ));
        let statistics_handle = spawn_statistics(statistics.clone());

        let read_result = join_thread(reader, "reader");
        let mut dispensers_result = Ok(());
        for dispenser in dispensers {
            let result = join_thread(dispenser, "dispenser");
            if dispensers_result.is_ok() {
                dispensers_result = result;
            }
        }
        statistics.finish();
        join_thread(statistics_handle, "statistics")?;
        dispensers_result?;
        read_result?;

        let dispensed = *run.orders_dispensed.read()?;
        info!("[OPERATOR] {} drinks dispensed", dispensed);
        Ok(dispensed)
    }

    /// Atiende un unico pedido, sin dispensers, con el cliente dado
    pub fn serve_one<C: Customer + ?Sized>(&self, customer: &mut C) -> Result<OrderOutcome, VendingMachineError> {
        let mut machine = self.machine.lock()?;
        Ok(machine.serve(customer))
    }

    pub fn machine(&self) -> Arc<Mutex<VendingMachine>> {
        self.machine.clone()
    }

    fn spawn_dispensers(&self, run: &OrdersRun) -> Vec<JoinHandle<Result<(), VendingMachineError>>> {
        (0..N_DISPENSERS)
            .map(|id| {
                let dispenser = Dispenser::new(
                    id,
                    run.orders_queue.clone(),
                    run.orders_cond.clone(),
                    self.machine.clone(),
                    run.orders_dispensed.clone(),
                );
                thread::spawn(move || dispenser.handle_orders())
            })
            .collect()
    }
}

fn spawn_reader(run: &OrdersRun, orders_path: PathBuf) -> JoinHandle<Result<(), VendingMachineError>> {
    let orders_queue = run.orders_queue.clone();
    let orders_cond = run.orders_cond.clone();
    thread::spawn(move || read_and_add_orders(orders_queue, orders_cond, orders_path))
}

fn spawn_statistics(statistics: Arc<StatisticsPrinter>) -> JoinHandle<Result<(), VendingMachineError>> {
    thread::spawn(move || statistics.process_statistics())
}

fn join_thread(
    handle: JoinHandle<Result<(), VendingMachineError>>,
    name: &str,
) -> Result<(), VendingMachineError> {
    match handle.join() {
        Ok(result) => result,
        Err(_) => {
            error!("[OPERATOR] Error joining the {} thread", name);
            Err(VendingMachineError::LockError)
        }
    }
}
