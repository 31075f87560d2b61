//! Maquina expendedora: atiende un pedido completo de punta a punta.
use log::{info, warn};

use crate::{
    coins::{CoinRegistry, Payment},
    container_registry::ContainerRegistry,
    customer::Customer,
    drink_catalog::DrinkCatalog,
    errors::VendingMachineError,
    fulfillment::FulfillmentEngine,
    machine_config::MachineConfig,
    maintenance::{report_levels, AdminCommands, ContainerLevel, Maintenance},
    order::{OrderOutcome, RejectionReason},
    revenue_ledger::RevenueLedger,
};

#[derive(Debug, Default)]
pub struct VendingMachine {
    engine: FulfillmentEngine,
    coins: CoinRegistry,
    ledger: RevenueLedger,
    admin_commands: AdminCommands,
}

impl VendingMachine {
    pub fn new(engine: FulfillmentEngine, coins: CoinRegistry) -> VendingMachine {
        VendingMachine {
            engine,
            coins,
            ledger: RevenueLedger::new(),
            admin_commands: AdminCommands::new(),
        }
    }

    /// Arma la maquina a partir de la configuracion. Los contenedores arrancan vacios.
    pub fn from_config(config: MachineConfig) -> Result<VendingMachine, VendingMachineError> {
        let mut containers = ContainerRegistry::new();
        for container in &config.containers {
            containers.allocate(&container.name, container.capacity)?;
        }
        let mut catalog = DrinkCatalog::new();
        for drink in config.drinks {
            catalog.add(drink)?;
        }
        let mut coins = CoinRegistry::new();
        for coin in &config.coins {
            coins.add(&coin.name, coin.value)?;
        }
        let mut machine = VendingMachine::new(FulfillmentEngine::new(containers, catalog), coins);
        for command in &config.admin_commands {
            machine
                .admin_commands
                .add(&command.keystroke, command.action, &command.message)?;
        }
        Ok(machine)
    }

    pub fn engine(&self) -> &FulfillmentEngine {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut FulfillmentEngine {
        &mut self.engine
    }

    pub fn coins(&self) -> &CoinRegistry {
        &self.coins
    }

    pub fn ledger(&self) -> &RevenueLedger {
        &self.ledger
    }

    pub fn ledger_mut(&mut self) -> &mut RevenueLedger {
        &mut self.ledger
    }

    pub fn maintenance(&mut self) -> Maintenance<'_> {
        Maintenance::new(self.engine.containers_mut(), &mut self.admin_commands)
    }

    pub fn report_levels(&self) -> Vec<ContainerLevel> {
        report_levels(self.engine.containers())
    }

    /// Atiende un pedido: menu, seleccion, chequeo, cobro, consumo y registro de la venta.
    /// Si en lugar de un codigo se tipea una tecla de administrador, se ejecuta su accion.
    pub fn serve<C: Customer + ?Sized>(&mut self, customer: &mut C) -> OrderOutcome {
        let offers = self.engine.menu();
        let user_input = customer.choose_drink(&offers);
        info!("[MACHINE] Customer ordered {:?}", user_input);

        if let Some(action) = self.admin_commands.action(&user_input) {
            info!("[MACHINE] Running admin command {:?}", action);
            return OrderOutcome::AdminCommand {
                keystroke: user_input.trim().to_string(),
                report: self.maintenance().run(action),
            };
        }

        let catalog = self.engine.catalog().all_drinks();
        let drink = match FulfillmentEngine::select_drink(catalog, &user_input) {
            Some(drink) => drink,
            None => {
                info!("[MACHINE] No drink with code {:?}", user_input);
                return OrderOutcome::Rejected {
                    reason: RejectionReason::UnknownSelection(user_input),
                    refund: 0,
                };
            }
        };

        let checked = match self.engine.check_order(&drink) {
            Ok(checked) => checked,
            Err(err) => {
                info!("[MACHINE] {} is not available: {}", drink, err);
                return OrderOutcome::Rejected {
                    reason: RejectionReason::Unavailable(drink),
                    refund: 0,
                };
            }
        };

        let paid = match self.coins.checkout(checked.price(), customer) {
            Payment::Paid { inserted, .. } => checked.pay(inserted),
            Payment::Insufficient { refund } => {
                info!(
                    "[MACHINE] {} is insufficient for {} that costs {}, refunding",
                    refund,
                    checked.drink(),
                    checked.price()
                );
                return OrderOutcome::Abandoned { drink, refund };
            }
        };

        let refund = paid.inserted();
        match self.engine.fulfill_order(paid) {
            Ok(dispensed) => {
                self.ledger.add(dispensed.price);
                info!(
                    "[MACHINE] You are all set for your {} and your change is {}",
                    dispensed.drink, dispensed.change
                );
                OrderOutcome::Dispensed(dispensed)
            }
            Err(err) => {
                warn!("[MACHINE] Could not make {}: {}, refunding", drink, err);
                OrderOutcome::Rejected {
                    reason: RejectionReason::ConsumptionFailed(drink),
                    refund,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        customer::ScriptedCustomer,
        drink::{Bom, Drink},
        maintenance::AdminReport,
        order::DispensedOrder,
    };

    fn machine() -> VendingMachine {
        let mut machine = VendingMachine::from_config(MachineConfig::default()).unwrap();
        machine.maintenance().refill_all();
        machine
    }

    #[test]
    fn should_build_the_default_machine_with_empty_containers() {
        let machine = VendingMachine::from_config(MachineConfig::default()).unwrap();
        assert_eq!(Some(0), machine.engine().containers().volume("coffee"));
        assert_eq!(true, machine.engine().menu().is_empty());
        assert_eq!(Some(100), machine.coins().coin_value("dollar"));
    }

    #[test]
    fn should_fail_to_build_with_duplicated_containers() {
        let mut config = MachineConfig::default();
        let first = config.containers[0].clone();
        config.containers.push(first);
        assert_eq!(
            true,
            matches!(
                VendingMachine::from_config(config),
                Err(VendingMachineError::DuplicateContainer(_))
            )
        );
    }

    #[test]
    fn should_dispense_and_record_the_sale() {
        let mut machine = machine();
        let mut customer = ScriptedCustomer::new("e1", &[("dollar", 2)]);

        let outcome = machine.serve(&mut customer);

        assert_eq!(
            OrderOutcome::Dispensed(DispensedOrder {
                drink: "espresso".to_string(),
                price: 150,
                change: 50,
            }),
            outcome
        );
        assert_eq!(150, machine.ledger().current());
        assert_eq!(Some(490), machine.engine().containers().volume("coffee"));
        assert_eq!(Some(1960), machine.engine().containers().volume("water"));
    }

    #[test]
    fn should_reject_an_unknown_order_code() {
        let mut machine = machine();
        let mut customer = ScriptedCustomer::new("zz", &[("dollar", 2)]);
        assert_eq!(
            OrderOutcome::Rejected {
                reason: RejectionReason::UnknownSelection("zz".to_string()),
                refund: 0,
            },
            machine.serve(&mut customer)
        );
        assert_eq!(0, machine.ledger().current());
    }

    #[test]
    fn should_reject_as_unavailable_a_drink_that_cannot_be_made() {
        let mut machine = machine();
        machine.engine_mut().containers_mut().takeout("cacao", 290).unwrap();
        assert_eq!(false, machine.engine().menu().iter().any(|offer| offer.order_code == "h1"));
        let mut customer = ScriptedCustomer::new("h1", &[("dollar", 3)]);
        assert_eq!(
            OrderOutcome::Rejected {
                reason: RejectionReason::Unavailable("hot chocolate".to_string()),
                refund: 0,
            },
            machine.serve(&mut customer)
        );
        assert_eq!(Some(1000), machine.engine().containers().volume("milk"));
    }

    #[test]
    fn should_abandon_and_refund_when_payment_is_short() {
        let mut machine = machine();
        let mut customer = ScriptedCustomer::new("l1", &[("dollar", 1), ("quarter", 3)]);
        assert_eq!(
            OrderOutcome::Abandoned {
                drink: "latte".to_string(),
                refund: 175,
            },
            machine.serve(&mut customer)
        );
        assert_eq!(0, machine.ledger().current());
        assert_eq!(Some(1000), machine.engine().containers().volume("milk"));
    }

    #[test]
    fn should_reject_as_unavailable_a_drink_with_a_missing_container() {
        let mut containers = ContainerRegistry::new();
        containers.allocate("water", 10).unwrap();
        containers.refill("water").unwrap();
        let mut catalog = DrinkCatalog::new();
        let bom = Bom::from([("water".to_string(), 4), ("lemon".to_string(), 1)]);
        catalog.add(Drink::new("lemonade", 100, bom, "t1")).unwrap();
        let mut coins = CoinRegistry::new();
        coins.add("dollar", 100).unwrap();
        let mut machine = VendingMachine::new(FulfillmentEngine::new(containers, catalog), coins);

        let outcome = machine.serve(&mut ScriptedCustomer::new("t1", &[("dollar", 1)]));

        assert_eq!(
            OrderOutcome::Rejected {
                reason: RejectionReason::Unavailable("lemonade".to_string()),
                refund: 0,
            },
            outcome
        );
        assert_eq!(Some(10), machine.engine().containers().volume("water"));
    }

    #[test]
    fn should_serve_until_an_ingredient_runs_out() {
        let mut machine = machine();
        let mut dispensed = 0;
        while machine
            .serve(&mut ScriptedCustomer::new("l1", &[("dollar", 3)]))
            .is_dispensed()
        {
            dispensed += 1;
        }
        // 1000 de leche / 120 por latte
        assert_eq!(8, dispensed);
        assert_eq!(8 * 250, machine.ledger().current());
        assert_eq!(Some(40), machine.engine().containers().volume("milk"));
        assert_eq!(false, machine.engine().check_availability("latte"));
    }

    #[test]
    fn should_refill_the_containers_with_the_admin_keystroke() {
        let mut machine = machine();
        machine.engine_mut().containers_mut().takeout("milk", 900).unwrap();

        let outcome = machine.serve(&mut ScriptedCustomer::new("#R", &[]));

        match outcome {
            OrderOutcome::AdminCommand {
                keystroke,
                report: AdminReport::Refilled(results),
            } => {
                assert_eq!("#R", keystroke);
                assert_eq!(Some(&true), results.get("milk"));
            }
            other => panic!("unexpected outcome {:?}", other),
        }
        assert_eq!(Some(1000), machine.engine().containers().volume("milk"));
        assert_eq!(0, machine.ledger().current());
    }

    #[test]
    fn should_report_the_levels_with_the_admin_keystroke() {
        let mut machine = machine();
        machine.serve(&mut ScriptedCustomer::new("e1", &[("dollar", 2)]));

        let outcome = machine.serve(&mut ScriptedCustomer::new(" #L ", &[]));

        assert_eq!(
            OrderOutcome::AdminCommand {
                keystroke: "#L".to_string(),
                report: AdminReport::Levels(machine.report_levels()),
            },
            outcome
        );
        assert_eq!(Some(490), machine.engine().containers().volume("coffee"));
    }
}
