pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::storage::{JsonFileStore, MemoryStore};
pub use config::{Cli, Command, Settings};
pub use crate::core::sync::{SyncEngine, SyncReport};
pub use domain::model::{BaseStats, Pokemon};
pub use domain::query::DexFilter;
pub use utils::error::{DexError, Result};
