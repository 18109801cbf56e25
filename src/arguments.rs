/// Centralized argument handling for the treasury API
///
/// Arguments are collected once into a global store so the logger, the
/// config loader and `main` all read the same view.
use once_cell::sync::Lazy;
use std::env;
use std::sync::Mutex;

/// Global command-line arguments storage
pub static CMD_ARGS: Lazy<Mutex<Vec<String>>> = Lazy::new(|| Mutex::new(env::args().collect()));

/// Default configuration file path
pub const DEFAULT_CONFIG_PATH: &str = "data/config.toml";

/// Gets a copy of the current command-line arguments
pub fn get_cmd_args() -> Vec<String> {
    match CMD_ARGS.lock() {
        Ok(args) => args.clone(),
        Err(_) => env::args().collect(),
    }
}

/// Checks if a specific argument is present in the command line
pub fn has_arg(arg: &str) -> bool {
    get_cmd_args().iter().any(|a| a == arg)
}

/// Gets the value of a command-line argument that follows a flag
pub fn get_arg_value(flag: &str) -> Option<String> {
    value_after(&get_cmd_args(), flag)
}

fn value_after(args: &[String], flag: &str) -> Option<String> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .filter(|v| !v.starts_with("--"))
        .cloned()
}

pub fn is_help_requested() -> bool {
    has_arg("--help") || has_arg("-h")
}

/// Config file path from `--config`, falling back to the default location
pub fn config_path() -> String {
    get_arg_value("--config").unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string())
}

/// Port override from `--port`
pub fn port_override() -> Option<u16> {
    get_arg_value("--port").and_then(|p| p.parse().ok())
}

pub fn print_help() {
    println!("treasury-api - treasury balance and history endpoints");
    println!();
    println!("USAGE:");
    println!("    treasury-api [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    --config <path>     Config file (default: {})", DEFAULT_CONFIG_PATH);
    println!("    --port <port>       Override webserver.port");
    println!("    --quiet             Only print warnings and errors");
    println!("    --debug-all         Enable debug output for every subsystem");
    println!("    --debug-<tag>       Enable debug output for one subsystem");
    println!("                        (system, config, webserver, rpc, history, balance, pricing, cache)");
    println!("    -h, --help          Print this help");
    println!();
    println!("ENVIRONMENT:");
    println!("    SOLANA_RPC_URL      Overrides rpc.url");
}
