//! Fuentes de entrada del cliente: elige la bebida e inserta monedas.
use std::{
    collections::HashMap,
    io::{self, BufRead, Write},
};

use log::warn;
use serde::Deserialize;

use crate::{drink::format_cents, order::MenuOffer};

pub trait Customer {
    /// Devuelve el codigo de pedido tipeado a partir de las ofertas mostradas
    fn choose_drink(&mut self, offers: &[MenuOffer]) -> String;

    /// Cantidad de monedas `coin` que inserta el cliente
    fn insert_coins(&mut self, coin: &str, value: u64) -> u64;
}

/// Cliente que viene de un archivo de pedidos
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ScriptedCustomer {
    pub order_code: String,
    #[serde(default)]
    pub coins: HashMap<String, u64>,
}

impl ScriptedCustomer {
    pub fn new(order_code: &str, coins: &[(&str, u64)]) -> ScriptedCustomer {
        ScriptedCustomer {
            order_code: order_code.to_string(),
            coins: coins
                .iter()
                .map(|(coin, amount)| (coin.to_string(), *amount))
                .collect(),
        }
    }
}

impl Customer for ScriptedCustomer {
    fn choose_drink(&mut self, _offers: &[MenuOffer]) -> String {
        self.order_code.clone()
    }

    fn insert_coins(&mut self, coin: &str, _value: u64) -> u64 {
        self.coins.get(coin).copied().unwrap_or(0)
    }
}

/// Cliente interactivo por terminal
pub struct TerminalCustomer<R, W> {
    input: R,
    output: W,
}

impl TerminalCustomer<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        TerminalCustomer::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> TerminalCustomer<R, W> {
    pub fn new(input: R, output: W) -> Self {
        TerminalCustomer { input, output }
    }

    fn ask(&mut self, prompt: &str) -> String {
        if write!(self.output, "{}", prompt).and_then(|_| self.output.flush()).is_err() {
            warn!("[CUSTOMER] Could not write the prompt");
        }
        let mut line = String::new();
        if let Err(err) = self.input.read_line(&mut line) {
            warn!("[CUSTOMER] Could not read input: {}", err);
        }
        line.trim().to_string()
    }
}

impl<R: BufRead, W: Write> Customer for TerminalCustomer<R, W> {
    fn choose_drink(&mut self, offers: &[MenuOffer]) -> String {
        for offer in offers {
            if writeln!(self.output, "{}", offer).is_err() {
                warn!("[CUSTOMER] Could not write the menu");
            }
        }
        self.ask("So what is your choice? =?> ")
    }

    fn insert_coins(&mut self, coin: &str, value: u64) -> u64 {
        let answer = self.ask(&format!(" <{}> ({} US$): How many? ", coin, format_cents(value)));
        answer.parse().unwrap_or_else(|_| {
            warn!("[CUSTOMER] Ignoring invalid amount {:?} of {}", answer, coin);
            0
        })
    }
}
