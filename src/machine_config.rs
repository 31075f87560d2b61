//! Lectura de la configuracion de la maquina (contenedores, bebidas, monedas).
use std::{error::Error, fs::File, io::BufReader, path::Path};

use log::{info, warn};
use serde::Deserialize;

use crate::{
    constants::{DEFAULT_ADMIN_COMMANDS, DEFAULT_COINS, DEFAULT_CONTAINERS, DEFAULT_DRINKS},
    drink::Drink,
    errors::VendingMachineError,
    maintenance::AdminAction,
};

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ContainerConfig {
    pub name: String,
    pub capacity: u64,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CoinConfig {
    pub name: String,
    pub value: u64,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct AdminCommandConfig {
    pub keystroke: String,
    pub action: AdminAction,
    #[serde(default)]
    pub message: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MachineConfig {
    #[serde(default)]
    pub containers: Vec<ContainerConfig>,
    #[serde(default)]
    pub drinks: Vec<Drink>,
    #[serde(default)]
    pub coins: Vec<CoinConfig>,
    #[serde(default)]
    pub admin_commands: Vec<AdminCommandConfig>,
}

impl Default for MachineConfig {
    fn default() -> Self {
        MachineConfig {
            containers: DEFAULT_CONTAINERS
                .iter()
                .map(|(name, capacity)| ContainerConfig {
                    name: name.to_string(),
                    capacity: *capacity,
                })
                .collect(),
            drinks: DEFAULT_DRINKS
                .iter()
                .map(|(name, price, order_code, bom)| {
                    let bom = bom
                        .iter()
                        .map(|(ingredient, volume)| (ingredient.to_string(), *volume))
                        .collect();
                    Drink::new(name, *price, bom, order_code)
                })
                .collect(),
            coins: DEFAULT_COINS
                .iter()
                .map(|(name, value)| CoinConfig {
                    name: name.to_string(),
                    value: *value,
                })
                .collect(),
            admin_commands: DEFAULT_ADMIN_COMMANDS
                .iter()
                .map(|(keystroke, action, message)| AdminCommandConfig {
                    keystroke: keystroke.to_string(),
                    action: *action,
                    message: message.to_string(),
                })
                .collect(),
        }
    }
}

fn read_config_from_file<P: AsRef<Path>>(path: P) -> Result<MachineConfig, Box<dyn Error>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let config: MachineConfig = serde_json::from_reader(reader)?;
    Ok(config)
}

/// Lee la configuracion del archivo. Si no existe se usa la configuracion por defecto.
pub fn load_machine_config<P: AsRef<Path>>(path: P) -> Result<MachineConfig, VendingMachineError> {
    let path = path.as_ref();
    if !path.exists() {
        info!("[CONFIG] {} not found, using the default machine", path.display());
        return Ok(MachineConfig::default());
    }
    read_config_from_file(path).map_err(|err| {
        warn!("[CONFIG] Error reading {}: {}", path.display(), err);
        VendingMachineError::FileReaderError(path.display().to_string())
    })
}
