//! Estados de un pedido a lo largo del pipeline de la maquina.
//!
//! Cada etapa solo se puede construir a partir de la anterior, por lo que no
//! es posible consumir ingredientes de una bebida que no paso el chequeo de
//! disponibilidad ni de una que no fue pagada.
use std::fmt;

use crate::{drink::format_cents, maintenance::AdminReport};

/// Bebida disponible que se le muestra al cliente
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuOffer {
    pub drink: String,
    pub price: u64,
    pub order_code: String,
}

impl fmt::Display for MenuOffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Want {} for {} US$? then type: {}",
            self.drink,
            format_cents(self.price),
            self.order_code
        )
    }
}

/// Bebida que paso el chequeo de disponibilidad
#[derive(Debug, PartialEq, Eq)]
pub struct CheckedOrder {
    drink: String,
    price: u64,
}

impl CheckedOrder {
    pub(crate) fn new(drink: String, price: u64) -> CheckedOrder {
        CheckedOrder { drink, price }
    }

    pub fn drink(&self) -> &str {
        &self.drink
    }

    pub fn price(&self) -> u64 {
        self.price
    }

    /// El cliente pago `inserted`, que cubre el precio. Solo lo llama el cobro.
    pub(crate) fn pay(self, inserted: u64) -> PaidOrder {
        PaidOrder {
            change: inserted.saturating_sub(self.price),
            inserted,
            checked: self,
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct PaidOrder {
    checked: CheckedOrder,
    inserted: u64,
    change: u64,
}

impl PaidOrder {
    pub fn drink(&self) -> &str {
        self.checked.drink()
    }

    pub fn price(&self) -> u64 {
        self.checked.price()
    }

    pub fn inserted(&self) -> u64 {
        self.inserted
    }

    pub fn change(&self) -> u64 {
        self.change
    }

    pub(crate) fn dispense(self) -> DispensedOrder {
        DispensedOrder {
            drink: self.checked.drink,
            price: self.checked.price,
            change: self.change,
        }
    }
}

/// Bebida entregada, con sus ingredientes ya consumidos
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispensedOrder {
    pub drink: String,
    pub price: u64,
    pub change: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectionReason {
    UnknownSelection(String),
    Unavailable(String),
    /// La disponibilidad cambio entre el chequeo y el consumo
    ConsumptionFailed(String),
}

/// Estado terminal de un intento de pedido
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderOutcome {
    Dispensed(DispensedOrder),
    Rejected { reason: RejectionReason, refund: u64 },
    Abandoned { drink: String, refund: u64 },
    /// Se tipeo una tecla de administrador en lugar de un codigo de pedido
    AdminCommand { keystroke: String, report: AdminReport },
}

impl OrderOutcome {
    pub fn is_dispensed(&self) -> bool {
        matches!(self, OrderOutcome::Dispensed(_))
    }
}
