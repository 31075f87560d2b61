//! Errores de la maquina expendedora.
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum VendingMachineError {
    #[error("no container allocated for {0}")]
    ContainerNotFound(String),
    #[error("drink {0} is not in the catalog")]
    DrinkNotFound(String),
    #[error("not enough {ingredient}: available {available}, requested {requested}")]
    InsufficientVolume {
        ingredient: String,
        available: u64,
        requested: u64,
    },
    #[error("container for {0} already allocated")]
    DuplicateContainer(String),
    #[error("drink {0} already in the catalog")]
    DuplicateDrink(String),
    #[error("coin {0} already accepted")]
    DuplicateCoin(String),
    #[error("admin command {0} already configured")]
    DuplicateAdminCommand(String),
    #[error("lock poisoned")]
    LockError,
    #[error("orders queue empty when an order was expected")]
    EmptyQueueWhenNotExpected,
    #[error("could not read {0}")]
    FileReaderError(String),
}

impl<T> From<std::sync::PoisonError<T>> for VendingMachineError {
    fn from(_: std::sync::PoisonError<T>) -> Self {
        VendingMachineError::LockError
    }
}
