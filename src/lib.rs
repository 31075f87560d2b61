pub mod coins;
pub mod constants;
pub mod container;
pub mod container_registry;
pub mod customer;
pub mod dispenser;
pub mod drink;
pub mod drink_catalog;
pub mod errors;
pub mod fulfillment;
pub mod machine_config;
pub mod maintenance;
pub mod operator;
pub mod order;
pub mod orders_queue;
pub mod orders_reader;
pub mod revenue_ledger;
pub mod statistics;
pub mod vending_machine;
