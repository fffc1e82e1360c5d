//! Shared configuration for the SolPe web app

mod config;
pub mod format;

pub use config::{CONFIG, Cluster, Config, Instruction, Links};
