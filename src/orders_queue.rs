//! Representacion de la cola de pedidos
use std::collections::VecDeque;

use crate::customer::ScriptedCustomer;

/// Pedido leido del archivo, a la espera de un dispenser
#[derive(Debug)]
pub struct QueuedOrder {
    pub id: usize,
    pub customer: ScriptedCustomer,
}

impl QueuedOrder {
    pub fn new(id: usize, customer: ScriptedCustomer) -> QueuedOrder {
        QueuedOrder { id, customer }
    }
}

/// Cola de pedidos a realizar. Se le agrega el campo `finished` para indicar que no se van a estar cargando más pedidos a la cola.
pub struct OrdersQueue {
    orders: VecDeque<QueuedOrder>,
    pub finished: bool,
}

impl OrdersQueue {
    pub fn new() -> OrdersQueue {
        OrdersQueue {
            orders: VecDeque::new(),
            finished: false,
        }
    }

    pub fn push(&mut self, order: QueuedOrder) {
        self.orders.push_back(order);
    }

    pub fn pop(&mut self) -> Option<QueuedOrder> {
        self.orders.pop_front()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}

impl Default for OrdersQueue {
    fn default() -> Self {
        OrdersQueue::new()
    }
}
