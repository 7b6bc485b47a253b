pub mod decoder;
pub mod fetch;
pub mod sync;

pub use crate::domain::model::{BaseStats, Pokemon};
pub use crate::domain::ports::{ConfigProvider, PokedexStore};
pub use crate::utils::error::Result;
