//! Operaciones de mantenimiento sobre los contenedores.
use std::{collections::BTreeMap, fmt};

use log::{info, warn};
use serde::Deserialize;

use crate::{container_registry::ContainerRegistry, errors::VendingMachineError};

/// Nivel de un contenedor para los reportes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerLevel {
    pub ingredient: String,
    pub capacity: u64,
    pub volume: u64,
}

impl fmt::Display for ContainerLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Container of <{}> with total capacity of {} is currently filled at {} level",
            self.ingredient, self.capacity, self.volume
        )
    }
}

/// Operacion que dispara un comando de administrador
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdminAction {
    RefillAll,
    ReportLevels,
}

/// Resultado de ejecutar un comando de administrador
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdminReport {
    Refilled(BTreeMap<String, bool>),
    Levels(Vec<ContainerLevel>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminCommand {
    pub keystroke: String,
    pub action: AdminAction,
    pub message: String,
}

/// Comandos de administrador por tecla, en orden de alta
#[derive(Debug, Default)]
pub struct AdminCommands {
    commands: Vec<AdminCommand>,
}

impl AdminCommands {
    pub fn new() -> AdminCommands {
        AdminCommands {
            commands: Vec::new(),
        }
    }

    pub fn add(
        &mut self,
        keystroke: &str,
        action: AdminAction,
        message: &str,
    ) -> Result<(), VendingMachineError> {
        if self.get(keystroke).is_some() {
            warn!("[MAINTENANCE] {} already configured", keystroke);
            return Err(VendingMachineError::DuplicateAdminCommand(keystroke.to_string()));
        }
        self.commands.push(AdminCommand {
            keystroke: keystroke.to_string(),
            action,
            message: message.to_string(),
        });
        Ok(())
    }

    pub fn get(&self, keystroke: &str) -> Option<&AdminCommand> {
        let keystroke = keystroke.trim();
        self.commands
            .iter()
            .find(|command| command.keystroke == keystroke)
    }

    pub fn action(&self, keystroke: &str) -> Option<AdminAction> {
        self.get(keystroke).map(|command| command.action)
    }

    pub fn iter(&self) -> impl Iterator<Item = &AdminCommand> {
        self.commands.iter()
    }
}

/// Vista de mantenimiento: no forma parte del camino de pedidos del cliente
pub struct Maintenance<'a> {
    containers: &'a mut ContainerRegistry,
    admin_commands: &'a mut AdminCommands,
}

impl<'a> Maintenance<'a> {
    pub fn new(
        containers: &'a mut ContainerRegistry,
        admin_commands: &'a mut AdminCommands,
    ) -> Maintenance<'a> {
        Maintenance {
            containers,
            admin_commands,
        }
    }

    /// Rellena todos los contenedores y devuelve el resultado por ingrediente
    pub fn refill_all(&mut self) -> BTreeMap<String, bool> {
        let ingredients: Vec<String> = self.containers.ingredients().map(String::from).collect();
        let results: BTreeMap<String, bool> = ingredients
            .into_iter()
            .map(|ingredient| {
                let refilled = self.containers.refill(&ingredient).is_ok();
                (ingredient, refilled)
            })
            .collect();
        info!("[MAINTENANCE] Refilled {} containers", results.len());
        results
    }

    pub fn report_levels(&self) -> Vec<ContainerLevel> {
        report_levels(&*self.containers)
    }

    pub fn add_admin_command(
        &mut self,
        keystroke: &str,
        action: AdminAction,
        message: &str,
    ) -> Result<(), VendingMachineError> {
        self.admin_commands.add(keystroke, action, message)
    }

    pub fn run(&mut self, action: AdminAction) -> AdminReport {
        match action {
            AdminAction::RefillAll => AdminReport::Refilled(self.refill_all()),
            AdminAction::ReportLevels => AdminReport::Levels(self.report_levels()),
        }
    }

    pub fn admin_commands(&self) -> &AdminCommands {
        &*self.admin_commands
    }
}

pub fn report_levels(containers: &ContainerRegistry) -> Vec<ContainerLevel> {
    containers
        .iter()
        .map(|(ingredient, container)| ContainerLevel {
            ingredient: ingredient.to_string(),
            capacity: container.capacity(),
            volume: container.volume(),
        })
        .collect()
}
