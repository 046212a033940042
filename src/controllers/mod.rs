pub mod engine;
pub mod ports;
