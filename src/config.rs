//! Command line configuration for the `customer-orders` binary.

use std::path::PathBuf;

use clap::Parser;
use thiserror::Error;

/// Default actor mailbox capacity.
pub const DEFAULT_BUFFER_SIZE: usize = 32;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("buffer size must be greater than zero, got {0}")]
    InvalidBufferSize(usize),
}

#[derive(Debug, Clone, Parser)]
#[command(name = "customer-orders")]
#[command(about = "Seeds products and customers, then lets an operator pick a customer and a product")]
pub struct Config {
    /// Directory for JSON table snapshots. In-memory only when omitted.
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    #[arg(long, default_value_t = DEFAULT_BUFFER_SIZE, help = "Actor mailbox capacity")]
    pub buffer_size: usize,

    #[arg(short, long, help = "Debug logging when RUST_LOG is not set")]
    pub verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: None,
            buffer_size: DEFAULT_BUFFER_SIZE,
            verbose: false,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.buffer_size == 0 {
            return Err(ConfigError::InvalidBufferSize(self.buffer_size));
        }
        Ok(())
    }
}
