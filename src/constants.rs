//! Parametros de configuracion de la maquina expendedora
use crate::maintenance::AdminAction;

/// Cantidad de dispensers que atienden pedidos en paralelo
pub const N_DISPENSERS: usize = 4;

/// Archivo opcional con contenedores, bebidas, monedas y comandos de administrador
pub const MACHINE_CONFIG_PATH: &str = "machine.json";

/// Archivo de pedidos por defecto
pub const ORDERS_PATH: &str = "orders.json";

/// Argumento que indica atender un unico pedido por terminal
pub const INTERACTIVE_ARG: &str = "-";

/// Indica cuanto tiempo se debe de esperar (por lo menos) para imprimir las estadisticas de la maquina
pub const STATISTICS_WAIT_IN_MS: u64 = 50;

/// Capacidad de cada contenedor de la configuracion por defecto
pub const DEFAULT_CONTAINERS: [(&str, u64); 5] = [
    ("coffee", 500),
    ("water", 2000),
    ("milk", 1000),
    ("cacao", 300),
    ("sugar", 400),
];

/// (bebida, precio en centavos, codigo de pedido, BOM)
pub const DEFAULT_DRINKS: [(&str, u64, &str, &[(&str, u64)]); 4] = [
    ("espresso", 150, "e1", &[("coffee", 10), ("water", 40)]),
    ("americano", 175, "a1", &[("coffee", 10), ("water", 150)]),
    ("latte", 250, "l1", &[("coffee", 10), ("water", 30), ("milk", 120)]),
    ("hot chocolate", 225, "h1", &[("cacao", 25), ("milk", 150), ("sugar", 10)]),
];

/// Monedas aceptadas y su valor en centavos, en el orden en que se piden
pub const DEFAULT_COINS: [(&str, u64); 4] = [("dollar", 100), ("quarter", 25), ("dime", 10), ("nickel", 5)];

/// Teclas de administrador que se pueden tipear en lugar de un codigo de pedido
pub const DEFAULT_ADMIN_COMMANDS: [(&str, AdminAction, &str); 2] = [
    ("#R", AdminAction::RefillAll, "refill all containers"),
    ("#L", AdminAction::ReportLevels, "report containers levels"),
];
