pub mod arguments;
pub mod balance;
pub mod cache;
pub mod config;
pub mod errors;
pub mod history;
pub mod logger;
pub mod prices;
pub mod rpc;
pub mod utils;
pub mod webserver;
