//! Lectura del archivo de pedidos y carga en la cola
use log::{debug, error, info};
use serde::Deserialize;
use std::error::Error;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::{Arc, Condvar, Mutex};

use crate::customer::ScriptedCustomer;
use crate::errors::VendingMachineError;
use crate::orders_queue::{OrdersQueue, QueuedOrder};

#[derive(Deserialize)]
struct OrdersConfiguration {
    orders: Vec<ScriptedCustomer>,
}

fn read_orders_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<ScriptedCustomer>, Box<dyn Error>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let orders_config: OrdersConfiguration = serde_json::from_reader(reader)?;
    Ok(orders_config.orders)
}

fn add_orders_to_queue(
    json_orders: Vec<ScriptedCustomer>,
    orders_queue_lock: &Mutex<OrdersQueue>,
    orders_cond: &Condvar,
) -> Result<(), VendingMachineError> {
    for (id, customer) in json_orders.into_iter().enumerate() {
        let mut orders_queue = orders_queue_lock.lock()?;
        orders_queue.push(QueuedOrder::new(id, customer));
        debug!("[READER] Added order {}", id);
        orders_cond.notify_one();
    }
    info!("[READER] No more orders left");
    Ok(())
}

/// Marca la cola como terminada y despierta a todos los dispensers
fn finish_queue(orders_queue_lock: &Mutex<OrdersQueue>, orders_cond: &Condvar) -> Result<(), VendingMachineError> {
    orders_queue_lock.lock()?.finished = true;
    orders_cond.notify_all();
    Ok(())
}

/// Lee los pedidos del archivo y los agrega a la cola. La cola queda terminada aunque la lectura falle.
pub fn read_and_add_orders<P: AsRef<Path>>(
    orders_queue: Arc<Mutex<OrdersQueue>>,
    orders_cond: Arc<Condvar>,
    path: P,
) -> Result<(), VendingMachineError> {
    let path = path.as_ref();
    let result = match read_orders_from_file(path) {
        Ok(json_orders) => add_orders_to_queue(json_orders, &orders_queue, &orders_cond),
        Err(err) => {
            error!("[READER] Error reading {}: {}", path.display(), err);
            Err(VendingMachineError::FileReaderError(path.display().to_string()))
        }
    };
    finish_queue(&orders_queue, &orders_cond)?;
    result
}
