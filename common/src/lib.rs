pub mod config;
pub mod engine;
pub mod logger;
pub mod rng;
