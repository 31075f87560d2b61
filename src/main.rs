use std::{env, path::PathBuf, process::ExitCode};

use drink_vending_machine::{
    constants::{INTERACTIVE_ARG, MACHINE_CONFIG_PATH, ORDERS_PATH},
    customer::TerminalCustomer,
    machine_config::load_machine_config,
    operator::MachineOperator,
    maintenance::AdminReport,
    order::OrderOutcome,
    vending_machine::VendingMachine,
};
use log::{error, LevelFilter};
use simple_logger::SimpleLogger;

fn main() -> ExitCode {
    if let Err(err) = SimpleLogger::new().with_level(LevelFilter::Info).env().init() {
        eprintln!("Could not start the logger: {}", err);
    }

    let mut machine = match load_machine_config(MACHINE_CONFIG_PATH).and_then(VendingMachine::from_config) {
        Ok(machine) => machine,
        Err(err) => {
            error!("Could not set up the machine: {}", err);
            return ExitCode::FAILURE;
        }
    };
    machine.maintenance().refill_all();
    let operator = MachineOperator::new(machine);

    let orders = env::args().nth(1).unwrap_or_else(|| ORDERS_PATH.to_string());
    if orders == INTERACTIVE_ARG {
        return serve_interactive(&operator);
    }
    match operator.manage_orders(PathBuf::from(orders)) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            error!("Error while processing the orders: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn serve_interactive(operator: &MachineOperator) -> ExitCode {
    let outcome = match operator.serve_one(&mut TerminalCustomer::stdio()) {
        Ok(outcome) => outcome,
        Err(err) => {
            error!("Error while serving the order: {}", err);
            return ExitCode::FAILURE;
        }
    };
    match outcome {
        OrderOutcome::Dispensed(dispensed) => println!(
            "You are all set for your <{}> and your change is <{}>",
            dispensed.drink, dispensed.change
        ),
        OrderOutcome::Rejected { reason, refund } => {
            println!("Your order could not be served ({:?}). Here is your change: {}", reason, refund)
        }
        OrderOutcome::Abandoned { drink, refund } => println!(
            "Insufficient payment for your <{}>. Here is your change: {}",
            drink, refund
        ),
        OrderOutcome::AdminCommand { keystroke, report } => print_admin_report(&keystroke, &report),
    }
    ExitCode::SUCCESS
}

fn print_admin_report(keystroke: &str, report: &AdminReport) {
    println!("Admin command {}", keystroke);
    match report {
        AdminReport::Refilled(results) => {
            for (ingredient, refilled) in results {
                println!("Refilled <{}>: {}", ingredient, refilled);
            }
        }
        AdminReport::Levels(levels) => {
            for level in levels {
                println!("{}", level);
            }
        }
    }
}
